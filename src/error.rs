//! Error taxonomy for client-secret generation.

use thiserror::Error;

/// Failures surfaced while minting a client secret.
///
/// Every variant is terminal for the invocation: a bad key does not
/// become good on retry.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A required input was missing or empty.
    #[error("{0} must not be empty")]
    InvalidArgument(&'static str),

    /// Key material was unreadable or not a PEM-encoded EC private key.
    #[error("could not read private key: {0}")]
    KeyRead(String),

    /// The key is not usable for ES256, or signing itself failed.
    #[error("could not sign client secret: {0}")]
    KeySign(String),
}
