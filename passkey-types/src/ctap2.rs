//! The types defined here are a representation of the authenticator specific types from the
//! [WebAuthn Level 3] specification that a Relying Party receives inside an assertion.
//!
//! [WebAuthn Level 3]: https://w3c.github.io/webauthn

mod authenticator_data;
mod flags;

pub use self::{authenticator_data::*, flags::*};
