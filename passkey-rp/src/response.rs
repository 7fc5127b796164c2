use passkey_types::{
    ctap2::{AuthenticatorData, AuthenticatorDataError},
    encoding,
    webauthn::{AuthenticatedPublicKeyCredential, ClientDataType, CollectedClientData},
    Bytes, WithRaw,
};

/// The parts of the client data the verification looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientData {
    /// The type of the ceremony, always [`ClientDataType::Get`] once decoded.
    pub ty: ClientDataType,
    /// The decoded challenge signed by the authenticator.
    pub challenge: Bytes,
    /// The origin the client data was collected on.
    pub origin: String,
    /// Whether the request was made from a cross-origin iframe.
    pub cross_origin: bool,
}

impl ClientData {
    /// Decode the `clientDataJSON` of an assertion, keeping its exact bytes.
    pub fn from_json(client_data_json: impl Into<Bytes>) -> Result<WithRaw<Self>, DecodeError> {
        WithRaw::decode(client_data_json, |bytes| {
            let client_data: CollectedClientData = serde_json::from_slice(bytes)
                .map_err(|e| DecodeError::InvalidClientData(e.to_string()))?;
            Self::try_from(client_data)
        })
    }
}

impl TryFrom<CollectedClientData> for ClientData {
    type Error = DecodeError;

    fn try_from(client_data: CollectedClientData) -> Result<Self, Self::Error> {
        if client_data.ty != ClientDataType::Get {
            return Err(DecodeError::UnexpectedClientDataType(client_data.ty));
        }
        let challenge = encoding::try_from_base64url(&client_data.challenge)
            .ok_or_else(|| DecodeError::InvalidChallenge(client_data.challenge))?;

        Ok(Self {
            ty: client_data.ty,
            challenge: challenge.into(),
            origin: client_data.origin,
            cross_origin: client_data.cross_origin.unwrap_or_default(),
        })
    }
}

/// An assertion ready to be verified.
///
/// The client data and authenticator data keep the exact bytes they were decoded from since the
/// signature is computed over them.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionResponse {
    /// The ID of the credential used.
    pub credential_id: Bytes,
    /// The client data collected by the client.
    pub client_data: WithRaw<ClientData>,
    /// The authenticator data produced by the authenticator.
    pub authenticator_data: WithRaw<AuthenticatorData>,
    /// The signature over the authenticator data and the hash of the client data.
    pub signature: Bytes,
    /// The user handle of the credential, if the authenticator returned one.
    pub user_handle: Option<Bytes>,
}

/// Reasons a [`AuthenticatedPublicKeyCredential`] cannot be turned into an [`AssertionResponse`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// The client data is not valid JSON or is missing members.
    #[error("invalid client data: {0}")]
    InvalidClientData(String),
    /// The client data is not for an assertion.
    #[error("expected webauthn.get client data, got {0}")]
    UnexpectedClientDataType(ClientDataType),
    /// The challenge in the client data is not base64url.
    #[error("challenge {0:?} is not base64url encoded")]
    InvalidChallenge(String),
    /// The authenticator data is malformed.
    #[error("invalid authenticator data: {0}")]
    InvalidAuthenticatorData(#[from] AuthenticatorDataError),
}

impl TryFrom<&AuthenticatedPublicKeyCredential> for AssertionResponse {
    type Error = DecodeError;

    fn try_from(credential: &AuthenticatedPublicKeyCredential) -> Result<Self, Self::Error> {
        let response = &credential.response;
        let client_data = ClientData::from_json(response.client_data_json.clone())?;
        let authenticator_data = WithRaw::decode(
            response.authenticator_data.clone(),
            AuthenticatorData::from_slice,
        )?;

        Ok(Self {
            credential_id: credential.raw_id.clone(),
            client_data,
            authenticator_data,
            signature: response.signature.clone(),
            user_handle: response.user_handle.clone(),
        })
    }
}
