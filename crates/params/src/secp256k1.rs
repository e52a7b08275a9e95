//! Domain parameters for the Koblitz curve secp256k1 (SEC 2, section 2.4.1)
//!
//! The curve equation is y² = x³ + 7 over F_p with p = 2^256 - 2^32 - 977.

/// Field prime p, 256 bits
pub const P_HEX: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

/// Curve coefficient a
pub const A_HEX: &str = "0";

/// Curve coefficient b
pub const B_HEX: &str = "7";

/// Base point x coordinate
pub const GX_HEX: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

/// Base point y coordinate
pub const GY_HEX: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

/// Order n of the base point
pub const N_HEX: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

/// Cofactor h = #E(F_p) / n
pub const COFACTOR: u32 = 1;

/// Bit length of the field prime and of the base point order
pub const FIELD_BITS: usize = 256;

/// Byte length of a serialized field element or scalar
pub const FIELD_ELEMENT_SIZE: usize = 32;
