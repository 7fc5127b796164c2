use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::CredentialEntry;

/// Pluggable trait to find the credential used in a ceremony where the user was not identified
/// beforehand, i.e. when authenticating with a discoverable credential.
#[cfg_attr(any(test, feature = "testable"), mockall::automock(type Error = String;))]
#[async_trait::async_trait]
pub trait CredentialLookup {
    /// Failure of the underlying storage. It is returned as is by the verification and is never
    /// mistaken for a rejected assertion.
    type Error;

    /// Find the credential with the given `credential_id` belonging to the user with the given
    /// `user_handle`. Returns `Ok(None)` when there is no such credential.
    async fn find_credential(
        &self,
        user_handle: &[u8],
        credential_id: &[u8],
    ) -> Result<Option<CredentialEntry>, Self::Error>;
}

/// A [`CredentialLookup`] that cannot be constructed, for Relying Parties that always identify
/// their users before authenticating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoLookup {}

#[async_trait::async_trait]
impl CredentialLookup for NoLookup {
    type Error = Infallible;

    async fn find_credential(
        &self,
        _user_handle: &[u8],
        _credential_id: &[u8],
    ) -> Result<Option<CredentialEntry>, Self::Error> {
        match *self {}
    }
}
