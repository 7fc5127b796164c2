use nonempty::NonEmpty;
use passkey_types::{webauthn::UserVerificationRequirement, Bytes};
use serde::{Deserialize, Serialize};

use crate::{CredentialEntry, NoLookup};

#[cfg(doc)]
use crate::CredentialLookup;

/// How the user is identified during an authentication ceremony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserIdentification<L = NoLookup> {
    /// The user was identified before the ceremony started, for example by entering a username.
    Identified {
        /// The user handle of the identified user.
        user_handle: Bytes,
        /// The credentials the user is allowed to authenticate with. An empty allow list would
        /// let the client offer any discoverable credential, so there is always at least one.
        credentials: NonEmpty<CredentialEntry>,
    },

    /// The user is identified by the discoverable credential they choose. The credential is then
    /// found with the given [`CredentialLookup`].
    Discoverable(L),
}

/// The state of an authentication ceremony between its start and the verification of its
/// response.
///
/// It has to be kept by the Relying Party, typically in the user's session, and is consumed by
/// the verification so that a challenge is never verified twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationState<L = NoLookup> {
    pub(crate) user_verification: UserVerificationRequirement,
    pub(crate) user_identification: UserIdentification<L>,
    pub(crate) challenge: Bytes,
}

impl<L> AuthenticationState<L> {
    /// The user verification policy of the ceremony.
    pub fn user_verification(&self) -> UserVerificationRequirement {
        self.user_verification
    }

    /// How the user is identified during the ceremony.
    pub fn user_identification(&self) -> &UserIdentification<L> {
        &self.user_identification
    }

    /// The challenge issued to the client.
    pub fn challenge(&self) -> &[u8] {
        &self.challenge
    }

    /// Replace the lookup of a discoverable ceremony.
    ///
    /// A lookup is usually a handle to a database and cannot be stored in a session. The state
    /// can be stored with a placeholder and given back its lookup when the response comes in.
    pub fn map_lookup<M>(self, f: impl FnOnce(L) -> M) -> AuthenticationState<M> {
        let user_identification = match self.user_identification {
            UserIdentification::Identified {
                user_handle,
                credentials,
            } => UserIdentification::Identified {
                user_handle,
                credentials,
            },
            UserIdentification::Discoverable(lookup) => UserIdentification::Discoverable(f(lookup)),
        };
        AuthenticationState {
            user_verification: self.user_verification,
            user_identification,
            challenge: self.challenge,
        }
    }
}
