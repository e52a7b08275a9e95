//! Base58 encoding for textual display of keys and points
//!
//! The Bitcoin alphabet (no 0, O, I, l), with the usual compression of
//! leading zero bytes to leading '1' characters. Display-only: nothing in
//! the signing path consumes this.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode a byte string as base58.
pub fn encode_base58(input: &[u8]) -> String {
    let base = BigUint::from(ALPHABET.len());
    let mut value = BigUint::from_bytes_be(input);

    let mut digits = Vec::new();
    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(&base);
        digits.push(ALPHABET[remainder
            .to_usize()
            .expect("remainder below 58 fits in usize")]);
        value = quotient;
    }

    // Leading zero bytes in the input become leading '1' characters
    let pad = input.iter().take_while(|&&byte| byte == 0).count();

    let mut out = String::with_capacity(pad + digits.len());
    for _ in 0..pad {
        out.push(ALPHABET[0] as char);
    }
    for &digit in digits.iter().rev() {
        out.push(digit as char);
    }
    if out.is_empty() {
        out.push(ALPHABET[0] as char);
    }
    out
}

/// Encode a big integer as base58, without zero-padding semantics.
pub fn encode_base58_uint(value: &BigUint) -> String {
    if value.is_zero() {
        return (ALPHABET[0] as char).to_string();
    }
    encode_base58(&value.to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode_base58(b"hello"), "Cn8eVZg");
        assert_eq!(encode_base58(&[]), "1");
        assert_eq!(encode_base58(&[57]), "z");
        assert_eq!(encode_base58(&[58]), "21");
    }

    #[test]
    fn test_leading_zero_compression() {
        assert_eq!(encode_base58(&[0, 0, 1]), "112");
        assert_eq!(encode_base58(&[0, 58]), "121");
        assert_eq!(encode_base58(&[0]), "1");
        assert_eq!(encode_base58(&[0, 0]), "11");
    }

    #[test]
    fn test_uint_encoding() {
        assert_eq!(encode_base58_uint(&BigUint::from(0u32)), "1");
        assert_eq!(encode_base58_uint(&BigUint::from(57u32)), "z");
        assert_eq!(
            encode_base58_uint(&BigUint::from(58u32 * 58 + 1)),
            encode_base58(&(58u32 * 58 + 1).to_be_bytes()[2..].to_vec())
        );
    }
}
