use thiserror::Error;

/// Everything this crate can fail with.
///
/// The first three variants are rejected at construction time, before any
/// request goes out. [`Error::NotFound`] is the single undifferentiated
/// failure every operation can surface once a request has been attempted.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid language `{0}`, must be one of: en, fr, de, ja")]
    InvalidLanguage(String),
    #[error("invalid character id `{0}`, expected exactly 8 digits")]
    InvalidCharacterId(String),
    #[error("invalid user id `{0}`, expected at least 17 digits")]
    InvalidUserId(String),
    /// The request went out and nothing usable came back: network failure,
    /// a non-success status, a malformed body, or the service's in-body
    /// `status: 404`. The cause is only visible through the verbose log.
    #[error("no result from {url}")]
    NotFound { url: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
