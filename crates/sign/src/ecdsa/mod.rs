//! The ECDSA protocol over a configured curve domain
//!
//! An [`EcdsaSigner`] is constructed once from domain parameters and a
//! seed phrase; it derives the private scalar from the seed digest,
//! computes the public point, and then signs and verifies messages.
//!
//! Signing follows the textbook algorithm:
//!
//! 1. draw a nonce k uniformly from [1, n-1]
//! 2. r = (k·G).x mod n; resample if r = 0
//! 3. e = int(SHA-256(message)), reduced into the field of order n
//! 4. s = k⁻¹ · (e + d·r) mod n; resample if s = 0
//!
//! The resample steps are a bounded loop, never recursion, and a
//! caller-fixed nonce is never resampled: a degenerate component under a
//! fixed nonce is a hard error.

use crate::error::{Error, Result};
use ecref_algorithms::curve::{CurveDomain, CurvePoint};
use ecref_algorithms::field::FieldElement;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Cap on nonce draws per signing call. Resampling fires only on a
/// zero r or s, or on an out-of-range raw draw, so hitting this cap
/// means the random source is broken; failing loudly beats spinning.
pub const MAX_SIGNING_ATTEMPTS: usize = 64;

/// How the private scalar is derived from the seed.
///
/// Both variants interpret the SHA-256 output as a big-endian unsigned
/// integer; they differ in whether the digest is applied once or twice.
/// `DoubleDigest` is the conventional choice (and what the deterministic
/// test vectors use); `SingleDigest` exists because both conventions are
/// in circulation and the difference must be explicit, not guessed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDerivation {
    /// private scalar = int(SHA-256(seed))
    SingleDigest,
    /// private scalar = int(SHA-256(SHA-256(seed)))
    DoubleDigest,
}

/// An ECDSA signature: the pair (r, s), both in [1, n-1].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// x coordinate of k·G, reduced mod n
    pub r: BigUint,
    /// k⁻¹ · (e + d·r) mod n
    pub s: BigUint,
}

/// A derived key pair. The private scalar is owned exclusively by its
/// signer; the public point is private·G.
#[derive(Clone, Debug)]
struct KeyPair {
    private_scalar: BigUint,
    public_point: CurvePoint,
}

/// ECDSA key management, signing, and verification over one curve
/// domain.
///
/// All state is immutable after construction, so one signer can serve
/// concurrent verification without synchronization.
#[derive(Clone, Debug)]
pub struct EcdsaSigner {
    domain: CurveDomain,
    key: KeyPair,
}

impl EcdsaSigner {
    /// Derive a key pair from a seed phrase under the given domain.
    ///
    /// The private scalar is the seed digest taken as a big-endian
    /// integer, deliberately NOT reduced mod n (matching the classical
    /// presentation); every use in the signing equation reduces it
    /// explicitly. Fails only if the domain's arithmetic rejects the
    /// public-point computation.
    pub fn new(domain: CurveDomain, seed: &str, derivation: KeyDerivation) -> Result<Self> {
        let private_scalar = derive_private_scalar(seed, derivation);
        let public_point = domain
            .curve()
            .scalar_mul(domain.generator(), &private_scalar)?;
        Ok(EcdsaSigner {
            domain,
            key: KeyPair {
                private_scalar,
                public_point,
            },
        })
    }

    /// The configured curve domain.
    pub fn domain(&self) -> &CurveDomain {
        &self.domain
    }

    /// The public point Q = d·G.
    pub fn public_point(&self) -> &CurvePoint {
        &self.key.public_point
    }

    /// Sign a message with a fresh random nonce from the OS generator.
    pub fn sign(&self, message: &str) -> Result<Signature> {
        self.sign_with_rng(message, &mut OsRng)
    }

    /// Sign a message, drawing nonces from the supplied generator.
    ///
    /// Each retry draws a fresh nonce; the loop is capped at
    /// [`MAX_SIGNING_ATTEMPTS`].
    pub fn sign_with_rng<R: CryptoRng + RngCore>(
        &self,
        message: &str,
        rng: &mut R,
    ) -> Result<Signature> {
        for _ in 0..MAX_SIGNING_ATTEMPTS {
            let k = match sample_nonce(rng, self.domain.order()) {
                Some(k) => k,
                None => {
                    return Err(Error::NonceRetriesExhausted {
                        attempts: MAX_SIGNING_ATTEMPTS,
                    })
                }
            };
            if let Some(signature) = self.try_sign(message, &k)? {
                return Ok(signature);
            }
        }
        Err(Error::NonceRetriesExhausted {
            attempts: MAX_SIGNING_ATTEMPTS,
        })
    }

    /// Sign a message with a caller-fixed nonce.
    ///
    /// The nonce must lie in [1, n-1] and must not produce a zero r or
    /// s; since a fixed nonce cannot be silently replaced, either
    /// condition is a hard [`Error::DegenerateNonce`]. Reusing a nonce
    /// across two messages reveals the private key; this entry point
    /// exists for deterministic tests and protocol experiments.
    pub fn sign_with_nonce(&self, message: &str, nonce: &BigUint) -> Result<Signature> {
        let n = self.domain.order();
        if nonce.is_zero() || nonce >= n {
            return Err(Error::DegenerateNonce {
                reason: "fixed nonce outside [1, n-1]",
            });
        }
        self.try_sign(message, nonce)?.ok_or(Error::DegenerateNonce {
            reason: "fixed nonce produced a zero signature component",
        })
    }

    /// One signing attempt with the given nonce. Returns Ok(None) when
    /// r or s came out zero and the nonce should be redrawn.
    fn try_sign(&self, message: &str, k: &BigUint) -> Result<Option<Signature>> {
        let n = self.domain.order();
        let curve = self.domain.curve();

        let kg = curve.scalar_mul(self.domain.generator(), k)?;
        let r = match kg.x() {
            Some(x) => x.value() % n,
            None => return Ok(None),
        };
        if r.is_zero() {
            return Ok(None);
        }

        // The rest of the computation lives in the field of order n;
        // digest and private scalar are reduced explicitly on entry.
        let e = FieldElement::new(digest_to_int(message), n.clone())?;
        let d = FieldElement::new(self.key.private_scalar.clone(), n.clone())?;
        let r_elem = FieldElement::new(r.clone(), n.clone())?;
        let k_elem = FieldElement::new(k.clone(), n.clone())?;

        let s = k_elem.inverse()?.mul(&e.add(&d.mul(&r_elem)?)?)?;
        if s.is_zero() {
            return Ok(None);
        }

        Ok(Some(Signature {
            r,
            s: s.value().clone(),
        }))
    }

    /// Verify a signature against a message.
    ///
    /// Total and side-effect free: every failure mode, including r or s
    /// out of range and any internal arithmetic error, is reported as
    /// `false`, never as a panic or an error.
    pub fn verify(&self, message: &str, signature: &Signature) -> bool {
        let n = self.domain.order();
        let one = BigUint::one();
        if signature.r < one || signature.r >= *n || signature.s < one || signature.s >= *n {
            return false;
        }

        // s ∈ [1, n-1] makes s invertible for any prime order, so the
        // fallbacks below are unreachable on a well-formed domain.
        let Ok(s_elem) = FieldElement::new(signature.s.clone(), n.clone()) else {
            return false;
        };
        let Ok(w) = s_elem.inverse() else {
            return false;
        };
        let Ok(e) = FieldElement::new(digest_to_int(message), n.clone()) else {
            return false;
        };
        let Ok(r_elem) = FieldElement::new(signature.r.clone(), n.clone()) else {
            return false;
        };
        let Ok(u1) = w.mul(&e) else {
            return false;
        };
        let Ok(u2) = w.mul(&r_elem) else {
            return false;
        };

        let curve = self.domain.curve();
        let Ok(u1_g) = curve.scalar_mul(self.domain.generator(), u1.value()) else {
            return false;
        };
        let Ok(u2_q) = curve.scalar_mul(&self.key.public_point, u2.value()) else {
            return false;
        };
        let Ok(sum) = curve.add(&u1_g, &u2_q) else {
            return false;
        };

        match sum.x() {
            None => false,
            Some(x) => x.value() % n == signature.r,
        }
    }
}

/// Draw a nonce uniformly from [1, n-1] by rejection sampling.
///
/// Rounds the order's bit length up to whole bytes, draws that many
/// random bytes, clears the excess high bits so candidates span exactly
/// `[0, 2^bits)`, and interprets the result big-endian. Draws outside
/// [1, n-1] are rejected and redrawn, capped at
/// [`MAX_SIGNING_ATTEMPTS`]. Masking keeps the acceptance rate at 1/2
/// or better for every order, so the cap is only reachable with a
/// broken random source.
fn sample_nonce<R: CryptoRng + RngCore>(rng: &mut R, n: &BigUint) -> Option<BigUint> {
    let bits = n.bits();
    let byte_len = ((bits + 7) / 8) as usize;
    let excess_bits = (byte_len as u64 * 8 - bits) as u32;
    let mut buf = vec![0u8; byte_len];
    for _ in 0..MAX_SIGNING_ATTEMPTS {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xffu8 >> excess_bits;
        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && candidate < *n {
            buf.zeroize();
            return Some(candidate);
        }
    }
    buf.zeroize();
    None
}

/// SHA-256 of the message as a big-endian integer.
fn digest_to_int(message: &str) -> BigUint {
    let digest = Sha256::digest(message.as_bytes());
    BigUint::from_bytes_be(&digest)
}

fn derive_private_scalar(seed: &str, derivation: KeyDerivation) -> BigUint {
    let mut first: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
    let scalar = match derivation {
        KeyDerivation::SingleDigest => BigUint::from_bytes_be(&first),
        KeyDerivation::DoubleDigest => {
            let mut second: [u8; 32] = Sha256::digest(first).into();
            let scalar = BigUint::from_bytes_be(&second);
            second.zeroize();
            scalar
        }
    };
    first.zeroize();
    scalar
}

#[cfg(test)]
mod tests;
