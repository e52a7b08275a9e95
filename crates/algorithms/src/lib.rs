//! Field and elliptic-curve arithmetic
//!
//! This crate implements the two arithmetic layers underneath the ECDSA
//! protocol:
//!
//! - [`field`]: elements of ℤ/mℤ for a caller-chosen modulus m > 1, with
//!   inversion by the extended Euclidean algorithm and square roots by
//!   Tonelli–Shanks. When m is prime the type is a field.
//! - [`curve`]: short Weierstrass curves y² = x³ + ax + b over such a
//!   field, with the chord-and-tangent group law and double-and-add
//!   scalar multiplication. A separate [`curve::real`] module carries the
//!   same group law over plain floating-point numbers for demonstrations.
//!
//! All values are immutable: every operation returns a fresh element or
//! point, and operands are validated eagerly (moduli must match, points
//! must lie on the curve) rather than coerced.
//!
//! Nothing here is constant-time. The implementation favors legibility
//! and uses arbitrary-precision integers throughout.

pub mod curve;
pub mod encoding;
pub mod error;
pub mod field;

pub use curve::{Curve, CurveDomain, CurvePoint};
pub use error::{Error, Result};
pub use field::FieldElement;
