//! The Weierstrass group law over the real numbers
//!
//! A demonstration companion to the finite-field [`Curve`](super::Curve):
//! the same chord-and-tangent rules applied to plain floating-point
//! coordinates, with no field reduction and no residue checks. Useful for
//! plotting and classroom walkthroughs, useless for cryptography.

/// Tolerance for the membership check; floating-point curve arithmetic
/// drifts quickly.
const EPSILON: f64 = 1e-9;

/// A point on a real-valued curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RealPoint {
    /// The point at infinity
    Infinity,
    /// An affine coordinate pair
    Affine {
        /// x coordinate
        x: f64,
        /// y coordinate
        y: f64,
    },
}

/// y² = x³ + ax + b over ℝ
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealCurve {
    a: f64,
    b: f64,
}

impl RealCurve {
    /// Create a real-valued demonstration curve.
    pub fn new(a: f64, b: f64) -> Self {
        RealCurve { a, b }
    }

    /// Whether the point satisfies the curve equation, within tolerance.
    pub fn contains(&self, point: &RealPoint) -> bool {
        match *point {
            RealPoint::Infinity => true,
            RealPoint::Affine { x, y } => {
                (y * y - (x * x * x + self.a * x + self.b)).abs() < EPSILON
            }
        }
    }

    /// Both y values for a given x.
    ///
    /// This is a literal square root: when x³ + ax + b is negative there
    /// is no real point and the results are NaN.
    pub fn find_y(&self, x: f64) -> (f64, f64) {
        let y = (x * x * x + self.a * x + self.b).sqrt();
        (y, -y)
    }

    /// Chord-and-tangent addition.
    pub fn add(&self, p1: &RealPoint, p2: &RealPoint) -> RealPoint {
        let (x1, y1) = match *p1 {
            RealPoint::Infinity => return *p2,
            RealPoint::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match *p2 {
            RealPoint::Infinity => return *p1,
            RealPoint::Affine { x, y } => (x, y),
        };

        let same_x = (x1 - x2).abs() < EPSILON;
        if same_x && (y1 + y2).abs() < EPSILON {
            return RealPoint::Infinity;
        }

        let slope = if same_x {
            (3.0 * x1 * x1 + self.a) / (2.0 * y1)
        } else {
            (y2 - y1) / (x2 - x1)
        };

        let x3 = slope * slope - x1 - x2;
        let y3 = slope * (x1 - x3) - y1;
        RealPoint::Affine { x: x3, y: y3 }
    }

    /// Double-and-add scalar multiplication.
    pub fn scalar_mul(&self, point: &RealPoint, mut k: u64) -> RealPoint {
        let mut addend = *point;
        let mut acc = RealPoint::Infinity;
        while k > 0 {
            if k & 1 == 1 {
                acc = self.add(&acc, &addend);
            }
            addend = self.add(&addend, &addend);
            k >>= 1;
        }
        acc
    }
}
