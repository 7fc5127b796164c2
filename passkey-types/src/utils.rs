pub(crate) mod bytes;
pub(crate) mod raw;
pub(crate) mod serde;

pub mod crypto;
pub mod encoding;
