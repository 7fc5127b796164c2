use nonempty::NonEmpty;
use passkey_types::Bytes;
use url::Url;

use crate::AssertionResponse;

/// Every error found while verifying an assertion. There is always at least one.
pub type AuthenticationErrors = NonEmpty<AuthenticationError>;

/// The reasons an assertion is rejected.
///
/// The first four variants are found while identifying the credential and are always reported
/// alone. The others are collected together so a single verification reports every check that
/// failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthenticationError {
    /// The credential used is not one the ceremony allowed, or is not known to the Relying Party.
    #[error("credential is not allowed for this ceremony")]
    CredentialDisallowed {
        /// The rejected response, for auditing.
        response: Box<AssertionResponse>,
        /// The credentials that were allowed, when the user was identified before the ceremony.
        allowed_credential_ids: Option<Vec<Bytes>>,
        /// The user identified before the ceremony, if any.
        identified_user: Option<Bytes>,
    },

    /// The user handle returned by the authenticator is not the one of the user identified before
    /// the ceremony.
    #[error("response was made for another user than the one identified")]
    IdentifiedUserHandleMismatch {
        /// The user handle identified before the ceremony.
        identified: Bytes,
        /// The user handle in the response.
        received: Bytes,
    },

    /// The credential does not belong to the user it was used for.
    #[error("credential belongs to another user")]
    CredentialUserHandleMismatch {
        /// The user handle the credential was used for.
        expected: Bytes,
        /// The user handle owning the credential.
        owner: Bytes,
    },

    /// The response has no user handle, so the credential owner cannot be confirmed.
    #[error("response does not contain a user handle")]
    CannotVerifyUserHandle,

    /// The challenge signed is not the one issued for this ceremony.
    #[error("challenge does not match the one issued")]
    ChallengeMismatch {
        /// The challenge issued at the start of the ceremony.
        expected: Bytes,
        /// The challenge found in the client data.
        received: Bytes,
    },

    /// The client data was collected on another origin.
    #[error("origin {received} does not match {expected}")]
    OriginMismatch {
        /// The origin of the Relying Party.
        expected: String,
        /// The origin found in the client data.
        received: String,
    },

    /// The authenticator data is scoped to another RP ID.
    #[error("RP ID hash does not match")]
    RpIdHashMismatch {
        /// SHA-256 of the Relying Party's RP ID.
        expected: [u8; 32],
        /// The RP ID hash found in the authenticator data.
        received: [u8; 32],
    },

    /// The authenticator did not confirm the user was present.
    #[error("user was not present")]
    UserNotPresent,

    /// User verification was required but the authenticator did not perform it.
    #[error("user was not verified")]
    UserNotVerified,

    /// The stored public key could not be decoded.
    #[error("could not decode the credential public key: {0}")]
    SignatureDecodingError(String),

    /// The signature does not verify against the stored public key.
    #[error("invalid signature: {0}")]
    SignatureInvalid(String),
}

/// The random source failed to produce a challenge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not generate a challenge: {0}")]
pub struct ChallengeError(pub String);

impl From<rand::Error> for ChallengeError {
    fn from(e: rand::Error) -> Self {
        Self(e.to_string())
    }
}

/// The URL given as the origin of a Relying Party has an opaque origin, such as `file:` or
/// `data:` URLs. Opaque origins serialize to `null`, which any client could claim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} does not have a tuple origin")]
pub struct OpaqueOriginError(pub Url);
