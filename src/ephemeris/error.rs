//! Error types for ephemeris operations.

/// Result type for ephemeris operations
pub type EphemerisResult<T> = Result<T, EphemerisError>;

/// Error type for ephemeris operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum EphemerisError {
    /// The native engine (or local approximation) signalled a failure while
    /// computing a position or house cusps.
    #[error("Computation error for {subject}: {message}")]
    Computation { subject: String, message: String },

    /// Backend construction or data-path configuration failed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The requested backend was compiled out of this build.
    #[error("Backend not available: {0}")]
    NotAvailable(&'static str),
}

impl EphemerisError {
    /// Create a computation error for a named subject (a body or "houses").
    pub fn computation(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Computation {
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
