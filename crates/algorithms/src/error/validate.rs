//! Validation utilities for the arithmetic layers

use super::{Error, Result};
use num_bigint::BigUint;
use num_traits::One;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a modulus is usable for modular arithmetic (m > 1)
#[inline(always)]
pub fn modulus(m: &BigUint, context: &'static str) -> Result<()> {
    if *m <= BigUint::one() {
        return Err(Error::InvalidModulus { context });
    }
    Ok(())
}

/// Validate that two moduli match before combining elements
#[inline(always)]
pub fn same_modulus(a: &BigUint, b: &BigUint, operation: &'static str) -> Result<()> {
    if a != b {
        return Err(Error::ModulusMismatch { operation });
    }
    Ok(())
}
