//! Domain parameters for NIST P-256 / secp256r1 (FIPS 186-4, appendix D.1.2.3)
//!
//! The curve equation is y² = x³ - 3x + b; a is stored reduced mod p.

/// Field prime p, 256 bits
pub const P_HEX: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// Curve coefficient a = p - 3
pub const A_HEX: &str = "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc";

/// Curve coefficient b
pub const B_HEX: &str = "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";

/// Base point x coordinate
pub const GX_HEX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

/// Base point y coordinate
pub const GY_HEX: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

/// Order n of the base point
pub const N_HEX: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

/// Cofactor h = #E(F_p) / n
pub const COFACTOR: u32 = 1;

/// Bit length of the field prime and of the base point order
pub const FIELD_BITS: usize = 256;

/// Byte length of a serialized field element or scalar
pub const FIELD_ELEMENT_SIZE: usize = 32;
