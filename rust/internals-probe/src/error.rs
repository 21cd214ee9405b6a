use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// A host capability (window, storage area, document) is not present
    #[error("Capability unavailable: {0}")]
    Unavailable(String),

    /// The host raised an exception while the capability was being accessed
    #[error("Access failed: {0}")]
    Access(String),

    /// The cookie header contained an invalid percent-encoded sequence
    #[error("Malformed cookie encoding: {0}")]
    MalformedCookie(String),
}
