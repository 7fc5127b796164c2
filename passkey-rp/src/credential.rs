use passkey_types::{webauthn::AuthenticatorTransport, Bytes};
use serde::{Deserialize, Serialize};

use crate::SignatureCounterResult;

/// The record a Relying Party keeps for every credential enrolled by one of its users.
///
/// It is created during registration, read during authentication and the only field that
/// changes over its lifetime is the [`sign_counter`](Self::sign_counter), which the Relying
/// Party updates after every successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialEntry {
    /// The credential ID chosen by the authenticator, unique within the Relying Party.
    pub credential_id: Bytes,

    /// The user handle of the account owning this credential.
    pub user_handle: Bytes,

    /// The credential public key as a serialized `COSE_Key`.
    pub public_key: Bytes,

    /// The last signature counter value seen for this credential.
    pub sign_counter: u32,

    /// Transport hints reported at registration. These are advisory only.
    #[serde(default)]
    pub transports: Vec<AuthenticatorTransport>,
}

impl CredentialEntry {
    /// Store the counter of a successful authentication, if it carries one.
    ///
    /// Returns `false` when the credential was flagged as
    /// [`PotentiallyCloned`](SignatureCounterResult::PotentiallyCloned), in which case the entry
    /// is left untouched and it is up to the Relying Party to decide what to do with it.
    pub fn apply_counter(&mut self, result: &SignatureCounterResult) -> bool {
        match result {
            SignatureCounterResult::Zero => true,
            SignatureCounterResult::Updated(counter) => {
                self.sign_counter = *counter;
                true
            }
            SignatureCounterResult::PotentiallyCloned => false,
        }
    }
}
