//! Builders of genuine ES256 assertions for the tests.

use coset::{iana, CborSerializable, CoseKeyBuilder};
use p256::ecdsa::{signature::Signer, Signature, SigningKey};
use passkey_types::{
    crypto::sha256,
    ctap2::{AuthenticatorData, Flags},
    encoding,
    webauthn::{
        AuthenticatedPublicKeyCredential, AuthenticatorAssertionResponse, ClientDataType,
        CollectedClientData, PublicKeyCredential, PublicKeyCredentialType,
    },
    Bytes,
};

use crate::{AssertionResponse, CredentialEntry};

pub(crate) const RP_ID: &str = "example.com";
pub(crate) const ORIGIN: &str = "https://example.com";
pub(crate) const CHALLENGE: [u8; 32] = [0xc1; 32];
pub(crate) const CREDENTIAL_ID: [u8; 16] = [0x0c; 16];
pub(crate) const USER_HANDLE: &[u8] = b"user-1";

pub(crate) fn rp_id_hash() -> [u8; 32] {
    sha256(RP_ID.as_bytes())
}

pub(crate) fn signing_key() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

/// The public part of `key` as a serialized `COSE_Key`.
pub(crate) fn cose_public_key(key: &SigningKey) -> Vec<u8> {
    let point = key.verifying_key().to_encoded_point(false);
    // SAFETY: the point is not compressed so both coordinates are present.
    let x = point.x().unwrap().to_vec();
    let y = point.y().unwrap().to_vec();
    CoseKeyBuilder::new_ec2_pub_key(iana::EllipticCurve::P_256, x, y)
        .algorithm(iana::Algorithm::ES256)
        .build()
        .to_vec()
        .unwrap()
}

pub(crate) fn credential_entry(key: &SigningKey, sign_counter: u32) -> CredentialEntry {
    CredentialEntry {
        credential_id: CREDENTIAL_ID.into(),
        user_handle: USER_HANDLE.into(),
        public_key: cose_public_key(key).into(),
        sign_counter,
        transports: vec![],
    }
}

/// Everything that goes into an assertion, defaulting to a valid one for [`RP_ID`].
pub(crate) struct Assertion {
    pub challenge: Vec<u8>,
    pub origin: String,
    pub ty: ClientDataType,
    pub rp_id: String,
    pub flags: Flags,
    pub counter: u32,
    pub credential_id: Vec<u8>,
    pub user_handle: Option<Vec<u8>>,
}

impl Default for Assertion {
    fn default() -> Self {
        Self {
            challenge: CHALLENGE.to_vec(),
            origin: ORIGIN.to_owned(),
            ty: ClientDataType::Get,
            rp_id: RP_ID.to_owned(),
            flags: Flags::UP | Flags::UV,
            counter: 6,
            credential_id: CREDENTIAL_ID.to_vec(),
            user_handle: Some(USER_HANDLE.to_vec()),
        }
    }
}

impl Assertion {
    /// Sign the assertion like an authenticator would, and package it like a browser would.
    pub fn sign(self, key: &SigningKey) -> AuthenticatedPublicKeyCredential {
        let client_data = CollectedClientData {
            ty: self.ty,
            challenge: encoding::base64url(&self.challenge),
            origin: self.origin,
            cross_origin: Some(false),
            unknown_keys: Default::default(),
        };
        let client_data_json = serde_json::to_vec(&client_data).unwrap();
        let authenticator_data = AuthenticatorData::new(&self.rp_id, self.counter)
            .set_flags(self.flags)
            .to_vec();

        let mut signed = authenticator_data.clone();
        signed.extend(sha256(&client_data_json));
        let signature: Signature = key.sign(&signed);

        PublicKeyCredential {
            id: encoding::base64url(&self.credential_id),
            raw_id: self.credential_id.into(),
            ty: PublicKeyCredentialType::PublicKey,
            response: AuthenticatorAssertionResponse {
                client_data_json: client_data_json.into(),
                authenticator_data: authenticator_data.into(),
                signature: signature.to_der().as_bytes().into(),
                user_handle: self.user_handle.map(Bytes::from),
            },
            authenticator_attachment: None,
        }
    }

    /// Sign the assertion and decode it for verification.
    pub fn response(self, key: &SigningKey) -> AssertionResponse {
        AssertionResponse::try_from(&self.sign(key)).expect("a well formed assertion")
    }
}
