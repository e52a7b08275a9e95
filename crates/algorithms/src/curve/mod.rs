//! Short Weierstrass curves over a prime field
//!
//! A [`Curve`] is the solution set of y² = x³ + ax + b over ℤ/pℤ together
//! with the point at infinity, under the chord-and-tangent group law.
//! [`CurveDomain`] packages a curve with a validated base point, its order
//! and cofactor, the way signature schemes consume it.
//!
//! Points are plain affine values. Every group operation re-validates its
//! operands against the curve equation, so an off-curve point is rejected
//! at the boundary instead of corrupting downstream arithmetic.

use crate::error::{validate, Error, Result};
use crate::field::FieldElement;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

pub mod real;

/// A point on (or off) a curve: the group identity or an affine pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurvePoint {
    /// The point at infinity, identity of the group law
    Infinity,
    /// An affine coordinate pair
    Affine {
        /// x coordinate
        x: FieldElement,
        /// y coordinate
        y: FieldElement,
    },
}

impl CurvePoint {
    /// Check if this point is the identity element.
    pub fn is_infinity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// The x coordinate, if the point is affine.
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, .. } => Some(x),
        }
    }

    /// The y coordinate, if the point is affine.
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { y, .. } => Some(y),
        }
    }
}

/// y² = x³ + ax + b over the prime field ℤ/pℤ
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    a: FieldElement,
    b: FieldElement,
    p: BigUint,
}

impl Curve {
    /// Create a curve, lifting the coefficients into the field mod p.
    ///
    /// Signed coefficients are accepted so that curves like y² = x³ - 3x + b
    /// can be written naturally; they reduce to the canonical representative.
    pub fn new(a: &BigInt, b: &BigInt, p: &BigUint) -> Result<Self> {
        validate::modulus(p, "curve")?;
        Ok(Curve {
            a: FieldElement::from_bigint(a, p)?,
            b: FieldElement::from_bigint(b, p)?,
            p: p.clone(),
        })
    }

    /// The reduced coefficient a.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// The reduced coefficient b.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// The field prime p.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Lift integer coordinates onto the curve, validating membership.
    pub fn lift(&self, x: &BigInt, y: &BigInt) -> Result<CurvePoint> {
        let point = CurvePoint::Affine {
            x: FieldElement::from_bigint(x, &self.p)?,
            y: FieldElement::from_bigint(y, &self.p)?,
        };
        if !self.is_on_curve(&point) {
            return Err(Error::PointNotOnCurve { context: "lift" });
        }
        Ok(point)
    }

    /// The right-hand side x³ + ax + b of the curve equation.
    fn equation_rhs(&self, x: &FieldElement) -> Result<FieldElement> {
        x.square()
            .mul(x)?
            .add(&self.a.mul(x)?)?
            .add(&self.b)
    }

    /// Whether the point satisfies the curve equation.
    ///
    /// The point at infinity lies on every curve. A point whose
    /// coordinates belong to a different field is simply not on this
    /// curve.
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        match point {
            CurvePoint::Infinity => true,
            CurvePoint::Affine { x, y } => match self.equation_rhs(x) {
                Ok(rhs) => rhs == y.square(),
                Err(_) => false,
            },
        }
    }

    /// Re-reduce a point's coordinates into this curve's field and
    /// re-validate membership.
    ///
    /// Runs before every group operation, so a point built for a
    /// different curve (or with un-reduced coordinates) fails here
    /// rather than producing garbage.
    pub fn normalize(&self, point: &CurvePoint) -> Result<CurvePoint> {
        let candidate = match point {
            CurvePoint::Infinity => return Ok(CurvePoint::Infinity),
            CurvePoint::Affine { x, y } => CurvePoint::Affine {
                x: FieldElement::new(x.value().clone(), self.p.clone())?,
                y: FieldElement::new(y.value().clone(), self.p.clone())?,
            },
        };
        if !self.is_on_curve(&candidate) {
            return Err(Error::PointNotOnCurve { context: "normalize" });
        }
        Ok(candidate)
    }

    /// Add two points under the chord-and-tangent group law.
    pub fn add(&self, p1: &CurvePoint, p2: &CurvePoint) -> Result<CurvePoint> {
        let p1 = self.normalize(p1)?;
        let p2 = self.normalize(p2)?;

        let (x1, y1) = match &p1 {
            CurvePoint::Infinity => return Ok(p2),
            CurvePoint::Affine { x, y } => (x.clone(), y.clone()),
        };
        let (x2, y2) = match &p2 {
            CurvePoint::Infinity => return Ok(p1),
            CurvePoint::Affine { x, y } => (x.clone(), y.clone()),
        };

        // Vertical line: P + (-P) = O. This also covers doubling a point
        // with y = 0, where the tangent is vertical.
        if x1 == x2 && y1 == y2.negate() {
            return Ok(CurvePoint::Infinity);
        }

        let slope = if x1 == x2 && y1 == y2 {
            // Tangent: λ = (3x₁² + a) / (2y₁)
            let three = FieldElement::new(BigUint::from(3u32), self.p.clone())?;
            let numerator = x1.square().mul(&three)?.add(&self.a)?;
            let denominator = y1.add(&y1)?;
            numerator.divide(&denominator)?
        } else {
            // Chord: λ = (y₂ - y₁) / (x₂ - x₁)
            y2.sub(&y1)?.divide(&x2.sub(&x1)?)?
        };

        let x3 = slope.square().sub(&x1)?.sub(&x2)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(&y1)?;
        self.normalize(&CurvePoint::Affine { x: x3, y: y3 })
    }

    /// Double a point (add it to itself).
    pub fn double(&self, point: &CurvePoint) -> Result<CurvePoint> {
        self.add(point, point)
    }

    /// Scalar multiplication k·P by double-and-add.
    ///
    /// Processes the binary expansion of k least-significant bit first.
    /// k is taken as a plain non-negative integer and is NOT reduced mod
    /// any group order; callers reduce first when the order matters.
    pub fn scalar_mul(&self, point: &CurvePoint, k: &BigUint) -> Result<CurvePoint> {
        let mut addend = self.normalize(point)?;
        let mut acc = CurvePoint::Infinity;
        let mut k = k.clone();
        while !k.is_zero() {
            if k.bit(0) {
                acc = self.add(&acc, &addend)?;
            }
            addend = self.double(&addend)?;
            k >>= 1usize;
        }
        Ok(acc)
    }

    /// Both candidate y values for a given x, via the field square root.
    ///
    /// Fails with `NotAQuadraticResidue` when no point with that x exists.
    pub fn find_y(&self, x: &BigInt) -> Result<(FieldElement, FieldElement)> {
        let x = FieldElement::from_bigint(x, &self.p)?;
        self.equation_rhs(&x)?.sqrt()
    }

    /// Enumerate every point on the curve, including the point at
    /// infinity.
    ///
    /// Walks all p candidate x coordinates, so the cost is linear in the
    /// field size: strictly a debugging aid for toy curves.
    pub fn points(&self) -> Result<Vec<CurvePoint>> {
        let mut points = vec![CurvePoint::Infinity];
        let mut x = BigUint::zero();
        while x < self.p {
            let xe = FieldElement::new(x.clone(), self.p.clone())?;
            let rhs = self.equation_rhs(&xe)?;
            if rhs.is_quadratic_residue() {
                let (y1, y2) = rhs.sqrt()?;
                points.push(CurvePoint::Affine {
                    x: xe.clone(),
                    y: y1.clone(),
                });
                if y2 != y1 {
                    points.push(CurvePoint::Affine { x: xe, y: y2 });
                }
            }
            x += 1u32;
        }
        Ok(points)
    }
}

/// A curve with a validated generator, order, and cofactor: the full
/// parameter set T = (p, a, b, G, n, h) a signature scheme runs on.
#[derive(Clone, Debug)]
pub struct CurveDomain {
    curve: Curve,
    g: CurvePoint,
    n: BigUint,
    h: BigUint,
}

impl CurveDomain {
    /// Assemble a domain from custom parameters.
    ///
    /// Validates that G lies on the curve and that n annihilates it;
    /// fails with `InvalidDomainParameters` otherwise.
    pub fn new(curve: Curve, g: CurvePoint, n: BigUint, h: BigUint) -> Result<Self> {
        if n.is_zero() {
            return Err(Error::InvalidDomainParameters {
                name: "order",
                reason: "order must be positive",
            });
        }
        let g = curve
            .normalize(&g)
            .map_err(|_| Error::InvalidDomainParameters {
                name: "generator",
                reason: "base point does not lie on the curve",
            })?;
        if g.is_infinity() {
            return Err(Error::InvalidDomainParameters {
                name: "generator",
                reason: "base point must not be the identity",
            });
        }
        if !curve.scalar_mul(&g, &n)?.is_infinity() {
            return Err(Error::InvalidDomainParameters {
                name: "order",
                reason: "order does not annihilate the base point",
            });
        }
        Ok(CurveDomain { curve, g, n, h })
    }

    /// The secp256k1 domain (SEC 2).
    pub fn secp256k1() -> Self {
        use ecref_params::secp256k1 as params;
        Self::from_hex_params(
            params::P_HEX,
            params::A_HEX,
            params::B_HEX,
            params::GX_HEX,
            params::GY_HEX,
            params::N_HEX,
            params::COFACTOR,
        )
        .expect("secp256k1 constants must form a valid domain")
    }

    /// The NIST P-256 / secp256r1 domain (FIPS 186-4).
    pub fn nist_p256() -> Self {
        use ecref_params::nist_p256 as params;
        Self::from_hex_params(
            params::P_HEX,
            params::A_HEX,
            params::B_HEX,
            params::GX_HEX,
            params::GY_HEX,
            params::N_HEX,
            params::COFACTOR,
        )
        .expect("NIST P-256 constants must form a valid domain")
    }

    /// Build a domain from the hex-string constant layout used by
    /// `ecref-params`.
    pub fn from_hex_params(
        p: &str,
        a: &str,
        b: &str,
        gx: &str,
        gy: &str,
        n: &str,
        cofactor: u32,
    ) -> Result<Self> {
        let p = parse_hex(p, "p")?;
        let a = BigInt::from_biguint(Sign::Plus, parse_hex(a, "a")?);
        let b = BigInt::from_biguint(Sign::Plus, parse_hex(b, "b")?);
        let gx = BigInt::from_biguint(Sign::Plus, parse_hex(gx, "gx")?);
        let gy = BigInt::from_biguint(Sign::Plus, parse_hex(gy, "gy")?);
        let n = parse_hex(n, "n")?;

        let curve = Curve::new(&a, &b, &p)?;
        let g = curve.lift(&gx, &gy)?;
        Self::new(curve, g, n, BigUint::from(cofactor))
    }

    /// The underlying curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The base point G.
    pub fn generator(&self) -> &CurvePoint {
        &self.g
    }

    /// The order n of G.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// The cofactor h.
    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    /// Bit length of the order, which sizes nonces and keys.
    pub fn order_bits(&self) -> u64 {
        self.n.bits()
    }
}

fn parse_hex(digits: &str, name: &'static str) -> Result<BigUint> {
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::param(name, "domain constant is not valid hex"))
}
