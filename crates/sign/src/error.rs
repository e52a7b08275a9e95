//! Error handling for the signing layer

use std::fmt;

use ecref_algorithms::error::Error as ArithmeticError;

/// The error type for ECDSA operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-fixed nonce was out of range or produced a zero
    /// signature component; a fixed nonce is never silently replaced
    DegenerateNonce {
        /// Why the nonce was rejected
        reason: &'static str,
    },

    /// The resampling loop hit its retry cap without producing a usable
    /// nonce; indicates a degenerate random source
    NonceRetriesExhausted {
        /// Number of attempts made before giving up
        attempts: usize,
    },

    /// A field or curve operation failed underneath the protocol
    Arithmetic(ArithmeticError),
}

/// Result type for ECDSA operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateNonce { reason } => {
                write!(f, "Degenerate nonce: {}", reason)
            }
            Error::NonceRetriesExhausted { attempts } => {
                write!(
                    f,
                    "No usable nonce after {} attempts; random source looks degenerate",
                    attempts
                )
            }
            Error::Arithmetic(inner) => write!(f, "Arithmetic failure: {}", inner),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Arithmetic(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<ArithmeticError> for Error {
    fn from(err: ArithmeticError) -> Self {
        Error::Arithmetic(err)
    }
}
