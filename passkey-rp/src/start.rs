use passkey_types::{
    webauthn::{
        CredentialRequestOptions, PublicKeyCredentialDescriptor, PublicKeyCredentialRequestOptions,
        UserVerificationRequirement,
    },
    Bytes,
};
use rand::{CryptoRng, RngCore};

use crate::{AuthenticationState, ChallengeError, UserIdentification};

/// Length in bytes of the challenges issued.
const CHALLENGE_LEN: usize = 32;

/// Start an authentication ceremony.
///
/// Returns the options to send to the client and the state to keep until its response comes back.
/// When the user is already identified, the client is told which of their credentials may be
/// used. Transport hints are never sent.
pub fn start_authentication<R, L>(
    rng: &mut R,
    rp_id: &str,
    user_identification: UserIdentification<L>,
    user_verification: UserVerificationRequirement,
) -> Result<(CredentialRequestOptions, AuthenticationState<L>), ChallengeError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut challenge = [0; CHALLENGE_LEN];
    rng.try_fill_bytes(&mut challenge)?;
    let challenge = Bytes::from(challenge);

    let allow_credentials = match &user_identification {
        UserIdentification::Identified { credentials, .. } => Some(
            credentials
                .iter()
                .map(|c| PublicKeyCredentialDescriptor::public_key(c.credential_id.clone()))
                .collect(),
        ),
        UserIdentification::Discoverable(_) => None,
    };

    let options = CredentialRequestOptions {
        public_key: PublicKeyCredentialRequestOptions {
            challenge: challenge.clone(),
            timeout: None,
            rp_id: Some(rp_id.to_owned()),
            allow_credentials,
            user_verification,
            hints: None,
        },
    };
    let state = AuthenticationState {
        user_verification,
        user_identification,
        challenge,
    };

    Ok((options, state))
}
