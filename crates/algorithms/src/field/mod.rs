//! Modular arithmetic over a caller-chosen modulus
//!
//! [`FieldElement`] represents a member of ℤ/mℤ for any modulus m > 1.
//! When m is prime every nonzero element is invertible and the type is a
//! field; for composite m the ring operations still work and inversion
//! fails for non-units.
//!
//! Elements are immutable values: every operation returns a fresh element
//! normalized into `[0, m)`. Raw integers are never coerced implicitly;
//! callers lift them with [`FieldElement::new`] or
//! [`FieldElement::from_bigint`] at the API boundary.

use crate::error::{validate, Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// An element of ℤ/mℤ
///
/// Invariant: `0 ≤ value < modulus` at all times; the modulus is fixed at
/// construction. Two elements are equal iff both value and modulus match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

impl FieldElement {
    /// Create an element from a non-negative value, reducing it mod m.
    ///
    /// Fails with `InvalidModulus` when m ≤ 1.
    pub fn new(value: BigUint, modulus: BigUint) -> Result<Self> {
        validate::modulus(&modulus, "field element")?;
        let value = value % &modulus;
        Ok(FieldElement { value, modulus })
    }

    /// Lift a signed integer into the field.
    ///
    /// Uses floor (Euclidean) reduction, so negative inputs land on the
    /// canonical non-negative representative: `-1` becomes `m - 1`.
    pub fn from_bigint(value: &BigInt, modulus: &BigUint) -> Result<Self> {
        validate::modulus(modulus, "field element")?;
        let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
        let reduced = value.mod_floor(&m);
        let value = reduced
            .to_biguint()
            .expect("floor reduction by a positive modulus is non-negative");
        Ok(FieldElement {
            value,
            modulus: modulus.clone(),
        })
    }

    /// The additive identity mod m.
    pub fn zero(modulus: BigUint) -> Result<Self> {
        Self::new(BigUint::zero(), modulus)
    }

    /// The multiplicative identity mod m.
    pub fn one(modulus: BigUint) -> Result<Self> {
        Self::new(BigUint::one(), modulus)
    }

    /// The canonical representative in `[0, m)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The modulus m.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Check if this element is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check if this element is one.
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// self + other mod m. Fails when the moduli differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        validate::same_modulus(&self.modulus, &other.modulus, "add")?;
        Ok(FieldElement {
            value: (&self.value + &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    /// self - other mod m. Fails when the moduli differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        validate::same_modulus(&self.modulus, &other.modulus, "sub")?;
        // Add m first so the difference never leaves the non-negative range
        Ok(FieldElement {
            value: (&self.value + &self.modulus - &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    /// -self mod m.
    pub fn negate(&self) -> Self {
        FieldElement {
            value: (&self.modulus - &self.value) % &self.modulus,
            modulus: self.modulus.clone(),
        }
    }

    /// self · other mod m. Fails when the moduli differ.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        validate::same_modulus(&self.modulus, &other.modulus, "mul")?;
        Ok(FieldElement {
            value: (&self.value * &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    /// self · self mod m.
    pub fn square(&self) -> Self {
        FieldElement {
            value: (&self.value * &self.value) % &self.modulus,
            modulus: self.modulus.clone(),
        }
    }

    /// self / other, defined as self · other⁻¹.
    ///
    /// Fails with `NotInvertible` when other has no inverse mod m.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        validate::same_modulus(&self.modulus, &other.modulus, "divide")?;
        self.mul(&other.inverse()?)
    }

    /// The multiplicative inverse, via the extended Euclidean algorithm.
    ///
    /// Fails with `NotInvertible` when gcd(value, m) ≠ 1; for a prime
    /// modulus that only happens for zero.
    pub fn inverse(&self) -> Result<Self> {
        let a = BigInt::from_biguint(Sign::Plus, self.value.clone());
        let m = BigInt::from_biguint(Sign::Plus, self.modulus.clone());
        let (g, x, _) = xgcd(&a, &m);
        if !g.is_one() {
            return Err(Error::NotInvertible { context: "inverse" });
        }
        Self::from_bigint(&x, &self.modulus)
    }

    /// self^exponent by repeated squaring.
    ///
    /// A negative exponent inverts first and then raises to |exponent|,
    /// so it fails for non-units.
    pub fn pow(&self, exponent: &BigInt) -> Result<Self> {
        let base = if exponent.sign() == Sign::Minus {
            self.inverse()?
        } else {
            self.clone()
        };
        Ok(FieldElement {
            value: base.value.modpow(exponent.magnitude(), &self.modulus),
            modulus: self.modulus.clone(),
        })
    }

    /// Euler's criterion: self^((m-1)/2) == 1.
    ///
    /// Zero is treated as a residue by convention. Only meaningful when m
    /// is an odd prime.
    pub fn is_quadratic_residue(&self) -> bool {
        if self.value.is_zero() {
            return true;
        }
        let exponent = (&self.modulus - 1u32) >> 1usize;
        self.value.modpow(&exponent, &self.modulus).is_one()
    }

    /// Both square roots `(root, -root)` of this element, by Tonelli–Shanks.
    ///
    /// Fails with `NotAQuadraticResidue` for a non-residue. The modulus
    /// must behave as an odd prime; that precondition is the caller's
    /// responsibility and is not checked.
    pub fn sqrt(&self) -> Result<(Self, Self)> {
        if !self.is_quadratic_residue() {
            return Err(Error::NotAQuadraticResidue { context: "sqrt" });
        }
        let m = &self.modulus;
        if self.value.is_zero() {
            let root = self.clone();
            return Ok((root.clone(), root.negate()));
        }
        if *m == BigUint::from(2u32) {
            // x² ≡ x (mod 2)
            let root = self.clone();
            return Ok((root.clone(), root.negate()));
        }
        if (m % 4u32) == BigUint::from(3u32) {
            // For m ≡ 3 (mod 4) the root is a single exponentiation
            let root = FieldElement {
                value: self.value.modpow(&((m + 1u32) >> 2usize), m),
                modulus: m.clone(),
            };
            return Ok((root.clone(), root.negate()));
        }
        self.sqrt_tonelli_shanks()
    }

    /// The general Tonelli–Shanks iteration for m ≡ 1 (mod 4).
    fn sqrt_tonelli_shanks(&self) -> Result<(Self, Self)> {
        let m = &self.modulus;
        let one = BigUint::one();
        let two = BigUint::from(2u32);

        // Factor m - 1 = s · 2^e with s odd
        let mut s = m - &one;
        let mut e = 0usize;
        while s.is_even() {
            s >>= 1usize;
            e += 1;
        }

        // Find any non-residue by scanning upward from 2
        let mut z = two.clone();
        loop {
            let candidate = FieldElement {
                value: z.clone(),
                modulus: m.clone(),
            };
            if !candidate.is_quadratic_residue() {
                break;
            }
            z += 1u32;
        }

        // x is the running guess of the root, b the fudge factor by which
        // the guess is off (invariant: x² = value · b mod m), g the
        // successive powers of the non-residue, r the remaining exponent.
        let mut x = self.value.modpow(&((&s + &one) >> 1usize), m);
        let mut b = self.value.modpow(&s, m);
        let mut g = z.modpow(&s, m);
        let mut r = e;
        loop {
            // Order of b as a power of two: smallest i with b^(2^i) = 1.
            // Bounded by r; running out means the modulus was not an odd
            // prime after all.
            let mut t = b.clone();
            let mut i = 0usize;
            while !t.is_one() {
                if i >= r {
                    return Err(Error::NotAQuadraticResidue { context: "sqrt" });
                }
                t = t.modpow(&two, m);
                i += 1;
            }
            if i == 0 {
                let root = FieldElement {
                    value: x,
                    modulus: m.clone(),
                };
                let negated = root.negate();
                return Ok((root, negated));
            }
            let gs = g.modpow(&(&one << (r - i - 1)), m);
            g = (&gs * &gs) % m;
            x = (&x * &gs) % m;
            b = (&b * &g) % m;
            r = i;
        }
    }
}

/// Extended GCD: returns (g, x, y) with g = gcd(a, b) = a·x + b·y.
fn xgcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut a = a.clone();
    let mut b = b.clone();
    let (mut prev_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut prev_y, mut y) = (BigInt::zero(), BigInt::one());
    while !b.is_zero() {
        let (q, r) = a.div_rem(&b);
        let next_x = &prev_x - &q * &x;
        prev_x = x;
        x = next_x;
        let next_y = &prev_y - &q * &y;
        prev_y = y;
        y = next_y;
        a = b;
        b = r;
    }
    (a, prev_x, prev_y)
}
