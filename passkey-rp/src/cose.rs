use std::fmt::Display;

use coset::{
    iana::{self, EnumI64},
    CborSerializable, CoseKey,
};
use p256::{
    ecdsa::{signature::Verifier, Signature, VerifyingKey},
    elliptic_curve::{generic_array::GenericArray, sec1::FromEncodedPoint},
    EncodedPoint, PublicKey,
};

/// Pluggable trait to decode credential public keys and verify signatures made with them.
///
/// Public keys are stored as serialized `COSE_Key`s, what is in them and how they are used is up
/// to the implementation. [`Es256`] is used by default.
#[cfg_attr(any(test, feature = "testable"), mockall::automock(type PublicKey = Vec<u8>; type Error = String;))]
pub trait CoseVerifier {
    /// A decoded public key.
    type PublicKey;

    /// Why a key could not be decoded or a signature could not be verified.
    type Error: Display;

    /// Decode a serialized `COSE_Key`.
    fn decode(&self, cose_key: &[u8]) -> Result<Self::PublicKey, Self::Error>;

    /// Verify that `signature` is a signature of `message` made with the private counterpart of
    /// `key`.
    fn verify(
        &self,
        key: &Self::PublicKey,
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), Self::Error>;
}

/// ECDSA with P-256 and SHA-256, with DER encoded signatures as authenticators produce them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Es256;

/// Errors of the [`Es256`] verifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Es256Error {
    /// The bytes are not a `COSE_Key`.
    #[error("invalid COSE key: {0}")]
    InvalidCbor(String),
    /// The key is for another algorithm than ES256.
    #[error("unsupported algorithm")]
    UnsupportedAlgorithm,
    /// The key is not an EC2 key on the P-256 curve.
    #[error("not a P-256 public key")]
    InvalidKey,
    /// The signature is not a DER encoded ECDSA signature.
    #[error("malformed signature")]
    MalformedSignature,
    /// The signature does not match.
    #[error("signature verification failed")]
    VerificationFailed,
}

impl CoseVerifier for Es256 {
    type PublicKey = VerifyingKey;
    type Error = Es256Error;

    fn decode(&self, cose_key: &[u8]) -> Result<VerifyingKey, Es256Error> {
        let key =
            CoseKey::from_slice(cose_key).map_err(|e| Es256Error::InvalidCbor(e.to_string()))?;
        verifying_key_from_cose_key(&key)
    }

    fn verify(
        &self,
        key: &VerifyingKey,
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), Es256Error> {
        let signature =
            Signature::from_der(signature).map_err(|_| Es256Error::MalformedSignature)?;
        key.verify(message, &signature)
            .map_err(|_| Es256Error::VerificationFailed)
    }
}

/// Extract the public key of an ES256 [`CoseKey`].
fn verifying_key_from_cose_key(key: &CoseKey) -> Result<VerifyingKey, Es256Error> {
    if !matches!(
        key.alg,
        Some(coset::RegisteredLabelWithPrivate::Assigned(
            iana::Algorithm::ES256
        ))
    ) {
        return Err(Es256Error::UnsupportedAlgorithm);
    }
    if !matches!(
        key.kty,
        coset::RegisteredLabel::Assigned(iana::KeyType::EC2)
    ) {
        return Err(Es256Error::InvalidKey);
    }

    let (mut crv, mut x, mut y) = (None, None, None);
    for (label, value) in &key.params {
        let coset::Label::Int(i) = label else {
            continue;
        };
        match iana::Ec2KeyParameter::from_i64(*i) {
            Some(iana::Ec2KeyParameter::Crv) => {
                crv = value
                    .as_integer()
                    .and_then(|c| i64::try_from(c).ok())
                    .and_then(iana::EllipticCurve::from_i64);
            }
            Some(iana::Ec2KeyParameter::X) => {
                if value.as_bytes().and_then(|v| x.replace(v)).is_some() {
                    log::warn!("Cose key has multiple entries for X coordinate");
                }
            }
            Some(iana::Ec2KeyParameter::Y) => {
                if value.as_bytes().and_then(|v| y.replace(v)).is_some() {
                    log::warn!("Cose key has multiple entries for Y coordinate");
                }
            }
            _ => (),
        }
    }
    if crv != Some(iana::EllipticCurve::P_256) {
        return Err(Es256Error::InvalidKey);
    }
    let (Some(x), Some(y)) = (x, y) else {
        return Err(Es256Error::InvalidKey);
    };
    if x.len() != 32 || y.len() != 32 {
        return Err(Es256Error::InvalidKey);
    }

    // SAFETY: from_slice panics if the length is not 32, which is checked above.
    let point = EncodedPoint::from_affine_coordinates(
        GenericArray::from_slice(x.as_slice()),
        GenericArray::from_slice(y.as_slice()),
        false,
    );
    let Some(public_key): Option<PublicKey> = PublicKey::from_encoded_point(&point).into() else {
        return Err(Es256Error::InvalidKey);
    };
    Ok(VerifyingKey::from(public_key))
}
