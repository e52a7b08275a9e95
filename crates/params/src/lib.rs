//! Named curve domain parameters
//!
//! Each supported curve is a fixed (p, a, b, G, n, h) tuple published as
//! lowercase big-endian hex string constants, so that parameter sets stay
//! data rather than code. The arithmetic crates parse these into
//! arbitrary-precision integers at domain construction time.
//!
//! Conventions:
//! - `P_HEX`: the field prime
//! - `A_HEX`, `B_HEX`: the reduced curve coefficients of
//!   y² = x³ + ax + b (a negative coefficient is stored as its canonical
//!   representative mod p)
//! - `GX_HEX`, `GY_HEX`: affine coordinates of the base point G
//! - `N_HEX`: the order of G, the smallest positive n with n·G = O
//! - `COFACTOR`: #E(F_p) / n

pub mod nist_p256;
pub mod secp256k1;
