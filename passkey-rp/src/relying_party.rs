use passkey_types::{
    crypto::sha256,
    webauthn::{CredentialRequestOptions, UserVerificationRequirement},
};
use rand::{CryptoRng, RngCore};
use url::Url;

use crate::{
    start_authentication, verify_authentication_response, AssertionResponse, AuthenticationErrors,
    AuthenticationResult, AuthenticationState, ChallengeError, CoseVerifier, CredentialLookup,
    Es256, OpaqueOriginError, UserIdentification,
};

/// A Relying Party, identified by its RP ID and the origin its users authenticate on.
#[derive(Debug, Clone)]
pub struct RelyingParty<V = Es256> {
    id: String,
    origin: String,
    id_hash: [u8; 32],
    verifier: V,
}

impl RelyingParty {
    /// Create a Relying Party verifying ES256 credentials.
    ///
    /// * `id` - The RP ID, a valid domain string such as `example.com`.
    /// * `origin` - The URL users authenticate on. Only its origin is kept, so
    ///   `https://example.com/login` and `https://example.com` are equivalent. URLs with an
    ///   opaque origin, such as `file:` or `data:` URLs, are rejected.
    pub fn new(id: impl Into<String>, origin: &Url) -> Result<Self, OpaqueOriginError> {
        let tuple_origin = origin.origin();
        if !tuple_origin.is_tuple() {
            return Err(OpaqueOriginError(origin.clone()));
        }

        let id = id.into();
        Ok(Self {
            id_hash: sha256(id.as_bytes()),
            origin: tuple_origin.ascii_serialization(),
            id,
            verifier: Es256,
        })
    }
}

impl<V> RelyingParty<V> {
    /// Use another [`CoseVerifier`] for the credential public keys.
    pub fn with_verifier<W: CoseVerifier>(self, verifier: W) -> RelyingParty<W> {
        RelyingParty {
            id: self.id,
            origin: self.origin,
            id_hash: self.id_hash,
            verifier,
        }
    }

    /// The RP ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The serialized origin, as it is expected in the client data.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// SHA-256 of the RP ID, as it is expected in the authenticator data.
    pub fn id_hash(&self) -> &[u8; 32] {
        &self.id_hash
    }
}

impl<V: CoseVerifier> RelyingParty<V> {
    /// Start an authentication ceremony for this Relying Party, see [`start_authentication`].
    pub fn start_authentication<R, L>(
        &self,
        rng: &mut R,
        user_identification: UserIdentification<L>,
        user_verification: UserVerificationRequirement,
    ) -> Result<(CredentialRequestOptions, AuthenticationState<L>), ChallengeError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        start_authentication(rng, &self.id, user_identification, user_verification)
    }

    /// Verify the response to a ceremony started with [`Self::start_authentication`], see
    /// [`verify_authentication_response`].
    pub async fn finish_authentication<L: CredentialLookup>(
        &self,
        state: AuthenticationState<L>,
        response: AssertionResponse,
    ) -> Result<Result<AuthenticationResult, AuthenticationErrors>, L::Error> {
        verify_authentication_response(&self.verifier, &self.origin, &self.id_hash, state, response)
            .await
    }
}
