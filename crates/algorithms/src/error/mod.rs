//! Error handling for the arithmetic layers

use std::borrow::Cow;
use std::fmt;

/// The error type for field and curve arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Modulus not usable for modular arithmetic (m ≤ 1)
    InvalidModulus {
        /// Context where the modulus was supplied
        context: &'static str,
    },

    /// Two field elements with different moduli were combined
    ModulusMismatch {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Inverse requested for a value that is not a unit mod m
    NotInvertible {
        /// Context where the inversion was attempted
        context: &'static str,
    },

    /// Square root requested for a quadratic non-residue
    NotAQuadraticResidue {
        /// Context where the square root was attempted
        context: &'static str,
    },

    /// A coordinate pair does not satisfy the curve equation
    PointNotOnCurve {
        /// Context where the point was validated
        context: &'static str,
    },

    /// Curve domain parameters are inconsistent
    InvalidDomainParameters {
        /// Name of the offending parameter
        name: &'static str,
        /// Reason the parameter set was rejected
        reason: &'static str,
    },

    /// Generic parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for field and curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModulus { context } => {
                write!(f, "Invalid modulus for {}: modulus must exceed 1", context)
            }
            Error::ModulusMismatch { operation } => {
                write!(f, "Modulus mismatch in {}: operands belong to different rings", operation)
            }
            Error::NotInvertible { context } => {
                write!(f, "Value not invertible in {}", context)
            }
            Error::NotAQuadraticResidue { context } => {
                write!(f, "Square root undefined in {}: value is not a quadratic residue", context)
            }
            Error::PointNotOnCurve { context } => {
                write!(f, "Point rejected in {}: coordinates do not satisfy the curve equation", context)
            }
            Error::InvalidDomainParameters { name, reason } => {
                write!(f, "Invalid domain parameter '{}': {}", name, reason)
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
