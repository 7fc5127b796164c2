use std::ops::Deref;

use crate::Bytes;

/// A decoded value along with the exact bytes it was decoded from.
///
/// Signatures in webauthn are computed over the literal bytes the client and authenticator
/// produced, not over a re-serialization of the parsed structure. Re-encoding a
/// [`CollectedClientData`] or an [`AuthenticatorData`] is not guaranteed to reproduce the same
/// bytes (key order, whitespace, unknown keys, CBOR canonicalization), so anything that will be
/// hashed must carry its original encoding alongside the parsed value.
///
/// [`CollectedClientData`]: crate::webauthn::CollectedClientData
/// [`AuthenticatorData`]: crate::ctap2::AuthenticatorData
#[derive(Debug, Clone, PartialEq)]
pub struct WithRaw<T> {
    value: T,
    raw: Bytes,
}

impl<T> WithRaw<T> {
    /// Pair a decoded `value` with the `raw` bytes it was decoded from.
    ///
    /// It is the caller's responsibility that `value` is the interpretation of `raw`.
    pub fn new(value: T, raw: impl Into<Bytes>) -> Self {
        Self {
            value,
            raw: raw.into(),
        }
    }

    /// Decode `raw` with `decode`, keeping a copy of the original bytes.
    pub fn decode<E>(
        raw: impl Into<Bytes>,
        decode: impl FnOnce(&[u8]) -> Result<T, E>,
    ) -> Result<Self, E> {
        let raw = raw.into();
        let value = decode(&raw)?;
        Ok(Self { value, raw })
    }

    /// The decoded value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The exact bytes the value was decoded from.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Split into the decoded value and its original bytes.
    pub fn into_parts(self) -> (T, Bytes) {
        (self.value, self.raw)
    }
}

impl<T> Deref for WithRaw<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
