use std::fmt;

use ciborium::value::Value;

use crate::{crypto::sha256, ctap2::Flags};

/// hash len (32 bytes) + flags (1 byte) + counter (4 bytes)
const MIN_LEN: usize = 37;

/// The authenticator data structure encodes contextual bindings made by the authenticator. These
/// bindings are controlled by the authenticator itself, and derive their trust from the WebAuthn
/// Relying Party's assessment of the security properties of the authenticator.
///
/// This is the shape of the authenticator data found in an assertion: the attested credential data
/// is only ever present during registration and is therefore rejected here.
///
/// <https://w3c.github.io/webauthn/#sctn-authenticator-data>
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatorData {
    /// SHA-256 hash of the RP ID the credential is scoped to.
    rp_id_hash: [u8; 32],

    /// The flags representing the information of this credential. See [Flags] for more information.
    pub flags: Flags,

    /// Signature counter, 32-bit unsigned big-endian integer.
    pub counter: u32,

    /// Extension-defined authenticator data. This is a CBOR [RFC8949] map with extension identifiers
    /// as keys, and authenticator extension outputs as values. It is kept as a generic [`Value`]
    /// and only asserted to be a map during decoding.
    ///
    /// [RFC8949]: https://www.rfc-editor.org/rfc/rfc8949.html
    pub extensions: Option<Value>,
}

/// Reasons why a byte string could not be decoded as assertion [`AuthenticatorData`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticatorDataError {
    /// The data is shorter than the 37 bytes of fixed length fields.
    TooShort(usize),
    /// The [`Flags::AT`] bit is set, which never happens in an assertion.
    UnexpectedAttestedCredentialData,
    /// The [`Flags::ED`] bit is set but the extensions are not a valid CBOR map.
    InvalidExtensions(String),
    /// There are bytes left after all the announced fields were read.
    TrailingData(usize),
}

impl fmt::Display for AuthenticatorDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => write!(
                f,
                "authenticator data is {len} bytes long, at least {MIN_LEN} are required"
            ),
            Self::UnexpectedAttestedCredentialData => {
                f.write_str("authenticator data of an assertion contains attested credential data")
            }
            Self::InvalidExtensions(e) => write!(f, "invalid authenticator extensions: {e}"),
            Self::TrailingData(len) => {
                write!(f, "{len} unexpected trailing bytes in authenticator data")
            }
        }
    }
}

impl std::error::Error for AuthenticatorDataError {}

impl AuthenticatorData {
    /// Create a new AuthenticatorData object for an RP ID and a signature counter, with no flags set.
    pub fn new(rp_id: &str, counter: u32) -> Self {
        Self {
            rp_id_hash: sha256(rp_id.as_bytes()),
            flags: Flags::empty(),
            counter,
            extensions: None,
        }
    }

    /// Set additional [`Flags`] to the authenticator data.
    pub fn set_flags(mut self, flags: Flags) -> Self {
        self.flags |= flags;
        self
    }

    /// Get read access to the RP ID hash
    pub fn rp_id_hash(&self) -> &[u8; 32] {
        &self.rp_id_hash
    }

    /// Decode an assertion's authenticator data from a byte slice.
    pub fn from_slice(v: &[u8]) -> Result<Self, AuthenticatorDataError> {
        if v.len() < MIN_LEN {
            return Err(AuthenticatorDataError::TooShort(v.len()));
        }

        // SAFETY: split at panics if the param is greater than the length. These are safe due to
        // guard above.
        let (rp_id_hash, v) = v.split_at(32);
        let (flag_byte, v) = v.split_at(1);
        let (counter, mut rest) = v.split_at(4);

        let flags = Flags::from(flag_byte[0]);
        if flags.contains(Flags::AT) {
            return Err(AuthenticatorDataError::UnexpectedAttestedCredentialData);
        }

        let extensions = if flags.contains(Flags::ED) {
            let value: Value = ciborium::de::from_reader(&mut rest)
                .map_err(|e| AuthenticatorDataError::InvalidExtensions(e.to_string()))?;
            if !value.is_map() {
                return Err(AuthenticatorDataError::InvalidExtensions(
                    "extensions are not a map".into(),
                ));
            }
            Some(value)
        } else {
            None
        };

        if !rest.is_empty() {
            return Err(AuthenticatorDataError::TrailingData(rest.len()));
        }

        let mut rp_id_hash_buf = [0; 32];
        rp_id_hash_buf.copy_from_slice(rp_id_hash);
        let mut counter_buf = [0; 4];
        counter_buf.copy_from_slice(counter);

        Ok(AuthenticatorData {
            rp_id_hash: rp_id_hash_buf,
            flags,
            counter: u32::from_be_bytes(counter_buf),
            extensions,
        })
    }

    /// Encode an authenticator data to its byte representation.
    ///
    /// Only use this to produce new authenticator data. When verifying, use the bytes that were
    /// received, see [`crate::WithRaw`].
    pub fn to_vec(&self) -> Vec<u8> {
        let flags = if self.extensions.is_some() {
            self.flags | Flags::ED
        } else {
            self.flags
        };

        self.rp_id_hash
            .into_iter()
            .chain(std::iter::once(flags.into()))
            .chain(self.counter.to_be_bytes())
            .chain(
                self.extensions
                    .as_ref()
                    .map(|val| {
                        let mut bytes = Vec::new();
                        // SAFETY: writing into a Vec cannot fail
                        ciborium::ser::into_writer(val, &mut bytes).unwrap();
                        bytes
                    })
                    .into_iter()
                    .flatten(),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests;
