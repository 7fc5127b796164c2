//! # Passkey Relying Party
//!
//! [![github]](https://github.com/1Password/passkey-rs/tree/main/passkey-rp)
//! [![version]](https://crates.io/crates/passkey-rp)
//! [![documentation]](https://docs.rs/passkey-rp/)
//!
//! This crate implements the verification a [Relying Party] does at the end of a webauthn
//! authentication ceremony. Storage of credentials and randomness are provided by the caller,
//! [`CredentialLookup`] and [`CoseVerifier`] are traits so that the parts that vary between
//! Relying Parties can be plugged in.
//!
//! An authentication is done in two steps:
//!
//! 1. [`RelyingParty::start_authentication`] issues a challenge. The returned options are sent to
//!    the client and the [`AuthenticationState`] is kept, usually in the user's session.
//! 2. [`RelyingParty::finish_authentication`] verifies the assertion the client sent back.
//!    On success, the stored signature counter must be updated, see [`SignatureCounterResult`].
//!
//! ```
//! # use passkey_rp::{AssertionResponse, CredentialEntry, NoLookup, RelyingParty, UserIdentification};
//! # fn credentials_of(user_handle: &[u8]) -> nonempty::NonEmpty<CredentialEntry> {
//! #     nonempty::NonEmpty::new(CredentialEntry {
//! #         credential_id: vec![1; 16].into(),
//! #         user_handle: user_handle.to_vec().into(),
//! #         public_key: vec![].into(),
//! #         sign_counter: 0,
//! #         transports: vec![],
//! #     })
//! # }
//! # use passkey_types::webauthn::{AuthenticatedPublicKeyCredential, UserVerificationRequirement};
//! # fn wait_for_client(_: &passkey_types::webauthn::CredentialRequestOptions) -> Option<AuthenticatedPublicKeyCredential> { None }
//! # tokio_test::block_on(async {
//! let origin = url::Url::parse("https://future.1password.com").expect("a valid url");
//! let rp = RelyingParty::new("future.1password.com", &origin)?;
//!
//! let (options, state) = rp.start_authentication(
//!     &mut rand::thread_rng(),
//!     UserIdentification::<NoLookup>::Identified {
//!         user_handle: b"user".to_vec().into(),
//!         credentials: credentials_of(b"user"),
//!     },
//!     UserVerificationRequirement::Preferred,
//! )?;
//!
//! if let Some(credential) = wait_for_client(&options) {
//!     let response = AssertionResponse::try_from(&credential)?;
//!     match rp.finish_authentication(state, response).await {
//!         Ok(Ok(result)) => println!("authenticated: {:?}", result.signature_counter),
//!         Ok(Err(errors)) => println!("rejected: {}", errors.head),
//!         Err(never) => match never {},
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # }).expect("the example to run");
//! ```
//!
//! [github]: https://img.shields.io/badge/GitHub-1Password%2Fpasskey--rs%2Fpasskey--rp-informational?logo=github&style=flat
//! [version]: https://img.shields.io/crates/v/passkey-rp?logo=rust&style=flat
//! [documentation]: https://img.shields.io/docsrs/passkey-rp/latest?logo=docs.rs&style=flat
//! [Relying Party]: https://w3c.github.io/webauthn/#relying-party

mod cose;
mod credential;
mod error;
mod lookup;
mod relying_party;
mod response;
mod result;
mod start;
mod state;
mod verify;

#[cfg(test)]
mod test_utils;

pub use self::{
    cose::{CoseVerifier, Es256, Es256Error},
    credential::CredentialEntry,
    error::{AuthenticationError, AuthenticationErrors, ChallengeError, OpaqueOriginError},
    lookup::{CredentialLookup, NoLookup},
    relying_party::RelyingParty,
    response::{AssertionResponse, ClientData, DecodeError},
    result::{AuthenticationResult, SignatureCounterResult},
    start::start_authentication,
    state::{AuthenticationState, UserIdentification},
    verify::verify_authentication_response,
};

#[cfg(feature = "testable")]
pub use self::{cose::MockCoseVerifier, lookup::MockCredentialLookup};
