//! Error types shared by every feedback store and preference backend.

use thiserror::Error;

/// Failure of a remote store operation.
///
/// A create or delete that returns any of these did not take effect as far as
/// the caller can tell; there is no partial success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store answered with a non-2xx status.
    #[error("store returned status {0}")]
    Status(u16),
    /// The request never produced a response (DNS, connection, body read).
    #[error("transport failure: {0}")]
    Transport(String),
    /// A listing body that is neither empty, `null`, nor an object of entries.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Failure reading or writing a local preference.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference file i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid TOML: {0}")]
    Decode(#[from] toml::de::Error),
    #[error("could not encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("local storage unavailable")]
    Unavailable,
}
