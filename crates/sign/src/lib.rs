//! ECDSA signing and verification
//!
//! This crate implements the ECDSA protocol on top of the arithmetic in
//! `ecref-algorithms`: deriving a key pair from a seed phrase, producing
//! (r, s) signatures with a fresh or caller-fixed nonce, and verifying
//! them.
//!
//! As with the rest of ecref, this is a reference implementation:
//! readable, eagerly validated, and not constant-time.

pub mod ecdsa;
pub mod error;

pub use ecdsa::{EcdsaSigner, KeyDerivation, Signature, MAX_SIGNING_ATTEMPTS};
pub use error::{Error, Result};
