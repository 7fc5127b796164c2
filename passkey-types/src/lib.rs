//! # Passkey Types
//!
//! Rust type definitions for the `webauthn` and `CTAP` specifications, scoped to what a Relying
//! Party needs to issue authentication requests and to read the assertions that come back.

mod utils;

pub mod ctap2;
pub mod webauthn;

// Re-exports
pub use utils::{
    bytes::{Bytes, NotBase64Encoded},
    crypto, encoding,
    raw::WithRaw,
};
