use serde::{Deserialize, Serialize};

/// What the signature counter of a verified assertion says about the credential.
///
/// <https://w3c.github.io/webauthn/#sctn-sign-counter>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureCounterResult {
    /// Both the stored and the received counters are zero, the authenticator does not implement
    /// a signature counter.
    Zero,

    /// The counter increased. The stored counter should be replaced with this value.
    Updated(u32),

    /// The counter did not increase. Either the authenticator is faulty or the credential private
    /// key exists on more than one device. The Relying Party decides whether to reject the
    /// ceremony, flag the credential or carry on.
    PotentiallyCloned,
}

impl SignatureCounterResult {
    /// Compare the `received` counter of an assertion with the `stored` one.
    pub fn compare(received: u32, stored: u32) -> Self {
        if received == 0 && stored == 0 {
            Self::Zero
        } else if received > stored {
            Self::Updated(received)
        } else {
            Self::PotentiallyCloned
        }
    }
}

/// The outcome of a successfully verified authentication ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResult {
    /// Must be acted upon by the Relying Party, see [`SignatureCounterResult`].
    pub signature_counter: SignatureCounterResult,
}
