use nonempty::NonEmpty;
use passkey_types::{crypto::sha256, webauthn::UserVerificationRequirement, Bytes};

use crate::{
    AssertionResponse, AuthenticationError, AuthenticationErrors, AuthenticationResult,
    AuthenticationState, CoseVerifier, CredentialEntry, CredentialLookup, SignatureCounterResult,
    UserIdentification,
};

/// Verify the response of an authentication ceremony.
///
/// The credential is identified first and verification stops at the first problem found doing
/// so. The assertion is then checked as a whole and every failed check is reported.
///
/// The outer `Result` only fails when the [`CredentialLookup`] of a discoverable ceremony fails.
/// A successful result must be acted upon, see [`SignatureCounterResult`].
pub async fn verify_authentication_response<V, L>(
    verifier: &V,
    expected_origin: &str,
    expected_rp_id_hash: &[u8; 32],
    state: AuthenticationState<L>,
    response: AssertionResponse,
) -> Result<Result<AuthenticationResult, AuthenticationErrors>, L::Error>
where
    V: CoseVerifier + ?Sized,
    L: CredentialLookup,
{
    let credential = match identify(state.user_identification, &response).await? {
        Ok(credential) => credential,
        Err(e) => {
            log::debug!("Rejected assertion: {e}");
            return Ok(Err(NonEmpty::new(e)));
        }
    };

    let mut validation = Validation::default();
    validation
        .check(response.client_data.challenge == state.challenge, || {
            AuthenticationError::ChallengeMismatch {
                expected: state.challenge.clone(),
                received: response.client_data.challenge.clone(),
            }
        })
        .check(response.client_data.origin == expected_origin, || {
            AuthenticationError::OriginMismatch {
                expected: expected_origin.to_owned(),
                received: response.client_data.origin.clone(),
            }
        })
        .check(
            response.authenticator_data.rp_id_hash() == expected_rp_id_hash,
            || AuthenticationError::RpIdHashMismatch {
                expected: *expected_rp_id_hash,
                received: *response.authenticator_data.rp_id_hash(),
            },
        )
        .check(response.authenticator_data.flags.user_present(), || {
            AuthenticationError::UserNotPresent
        })
        .check(
            state.user_verification != UserVerificationRequirement::Required
                || response.authenticator_data.flags.user_verified(),
            || AuthenticationError::UserNotVerified,
        )
        .result(verify_signature(verifier, &credential.public_key, &response));

    let received = response.authenticator_data.counter;
    let result = validation.finish(|| AuthenticationResult {
        signature_counter: SignatureCounterResult::compare(received, credential.sign_counter),
    });

    match &result {
        Ok(AuthenticationResult {
            signature_counter: SignatureCounterResult::PotentiallyCloned,
        }) => log::warn!(
            "Signature counter went from {} to {received}, the credential may be cloned",
            credential.sign_counter
        ),
        Ok(_) => (),
        Err(errors) => log::debug!("Rejected assertion with {} error(s)", errors.len()),
    }

    Ok(result)
}

/// Find the credential used and make sure it belongs to the right user.
async fn identify<L: CredentialLookup>(
    user_identification: UserIdentification<L>,
    response: &AssertionResponse,
) -> Result<Result<CredentialEntry, AuthenticationError>, L::Error> {
    match user_identification {
        UserIdentification::Identified {
            user_handle,
            credentials,
        } => Ok(identify_known_user(user_handle, credentials, response)),
        UserIdentification::Discoverable(lookup) => {
            let Some(user_handle) = &response.user_handle else {
                return Ok(Err(AuthenticationError::CannotVerifyUserHandle));
            };
            let Some(credential) = lookup
                .find_credential(user_handle, &response.credential_id)
                .await?
            else {
                return Ok(Err(AuthenticationError::CredentialDisallowed {
                    response: Box::new(response.clone()),
                    allowed_credential_ids: None,
                    identified_user: None,
                }));
            };
            Ok(check_owner(credential, user_handle))
        }
    }
}

fn identify_known_user(
    user_handle: Bytes,
    credentials: NonEmpty<CredentialEntry>,
    response: &AssertionResponse,
) -> Result<CredentialEntry, AuthenticationError> {
    let mut credentials = Vec::from(credentials);
    let Some(index) = credentials
        .iter()
        .position(|c| c.credential_id == response.credential_id)
    else {
        return Err(AuthenticationError::CredentialDisallowed {
            response: Box::new(response.clone()),
            allowed_credential_ids: Some(
                credentials.into_iter().map(|c| c.credential_id).collect(),
            ),
            identified_user: Some(user_handle),
        });
    };

    let received = response
        .user_handle
        .as_ref()
        .ok_or(AuthenticationError::CannotVerifyUserHandle)?;
    if *received != user_handle {
        return Err(AuthenticationError::IdentifiedUserHandleMismatch {
            identified: user_handle,
            received: received.clone(),
        });
    }

    check_owner(credentials.swap_remove(index), &user_handle)
}

fn check_owner(
    credential: CredentialEntry,
    user_handle: &Bytes,
) -> Result<CredentialEntry, AuthenticationError> {
    if credential.user_handle != *user_handle {
        return Err(AuthenticationError::CredentialUserHandleMismatch {
            expected: user_handle.clone(),
            owner: credential.user_handle,
        });
    }
    Ok(credential)
}

/// The signature is over `authenticatorData || SHA-256(clientDataJSON)`, using the bytes as they
/// were received.
fn verify_signature<V: CoseVerifier + ?Sized>(
    verifier: &V,
    public_key: &[u8],
    response: &AssertionResponse,
) -> Result<(), AuthenticationError> {
    let client_data_hash = sha256(response.client_data.raw());
    let message: Vec<u8> = response
        .authenticator_data
        .raw()
        .iter()
        .chain(client_data_hash.iter())
        .copied()
        .collect();

    let key = verifier
        .decode(public_key)
        .map_err(|e| AuthenticationError::SignatureDecodingError(e.to_string()))?;
    verifier
        .verify(&key, &message, &response.signature)
        .map_err(|e| AuthenticationError::SignatureInvalid(e.to_string()))
}

/// Runs independent checks and keeps every failure.
#[derive(Debug, Default)]
struct Validation {
    errors: Vec<AuthenticationError>,
}

impl Validation {
    fn check(&mut self, ok: bool, error: impl FnOnce() -> AuthenticationError) -> &mut Self {
        if !ok {
            self.errors.push(error());
        }
        self
    }

    fn result(&mut self, result: Result<(), AuthenticationError>) -> &mut Self {
        if let Err(e) = result {
            self.errors.push(e);
        }
        self
    }

    fn finish<T>(self, success: impl FnOnce() -> T) -> Result<T, AuthenticationErrors> {
        match NonEmpty::from_vec(self.errors) {
            Some(errors) => Err(errors),
            None => Ok(success()),
        }
    }
}
