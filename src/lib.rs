//! # ecref
//!
//! A reference implementation of ECDSA over configurable short Weierstrass
//! curves (y² = x³ + ax + b) defined over a prime field.
//!
//! The library is built in three layers, each usable on its own:
//!
//! - [`ecref_algorithms::field`]: modular arithmetic over a caller-chosen
//!   modulus, including extended-Euclid inversion and Tonelli–Shanks
//!   square roots.
//! - [`ecref_algorithms::curve`]: the elliptic-curve group law (point
//!   validation, chord-and-tangent addition, double-and-add scalar
//!   multiplication) over that field.
//! - [`ecref_sign::ecdsa`]: key derivation, signing, and verification.
//!
//! Everything is written for clarity over speed: arithmetic uses
//! arbitrary-precision integers and affine coordinates, and none of it is
//! constant-time. Do not use this library to protect anything of value.
//!
//! ## Example
//!
//! ```
//! use ecref::prelude::*;
//!
//! let domain = CurveDomain::secp256k1();
//! let signer = EcdsaSigner::new(domain, "correct horse battery staple",
//!                               KeyDerivation::DoubleDigest)?;
//! let sig = signer.sign("attack at dawn")?;
//! assert!(signer.verify("attack at dawn", &sig));
//! assert!(!signer.verify("attack at dusk", &sig));
//! # Ok::<(), ecref::sign::Error>(())
//! ```
//!
//! ## Crate structure
//!
//! This is a facade crate re-exporting three sub-crates:
//!
//! - `ecref-params`: named curve domain constants as data
//! - `ecref-algorithms`: field and curve arithmetic
//! - `ecref-sign`: the ECDSA protocol

pub use ecref_algorithms as algorithms;
pub use ecref_params as params;
pub use ecref_sign as sign;

// Callers construct moduli, coefficients, and nonces with these,
// so surface the exact versions the library was built against.
pub use num_bigint;
pub use rand;

/// Common imports for ecref users
pub mod prelude {
    pub use crate::algorithms::curve::{Curve, CurveDomain, CurvePoint};
    pub use crate::algorithms::field::FieldElement;
    pub use crate::sign::ecdsa::{EcdsaSigner, KeyDerivation, Signature};
}
