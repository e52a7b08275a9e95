use super::*;
use crate::error::Error;
use ecref_algorithms::curve::{Curve, CurveDomain};
use num_bigint::{BigInt, BigUint};
use num_traits::One;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// y^2 = x^3 + 2x + 2 over F_17, generated by (5, 1) with order 19.
// Small enough that every multiple of G is known by hand.
fn toy_domain() -> CurveDomain {
    let curve = Curve::new(
        &BigInt::from(2),
        &BigInt::from(2),
        &BigUint::from(17u32),
    )
    .unwrap();
    let g = curve.lift(&BigInt::from(5), &BigInt::from(1)).unwrap();
    CurveDomain::new(curve, g, BigUint::from(19u32), BigUint::one()).unwrap()
}

fn toy_signer(seed: &str) -> EcdsaSigner {
    EcdsaSigner::new(toy_domain(), seed, KeyDerivation::DoubleDigest).unwrap()
}

fn uint(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
}

#[test]
fn test_key_derivation_matches_seed_digest() {
    let signer = toy_signer("password");
    assert_eq!(
        signer.key.private_scalar,
        uint("73641c99f7719f57d8f4beb11a303afcd190243a51ced8782ca6d3dbe014d146")
    );

    let single = EcdsaSigner::new(toy_domain(), "password", KeyDerivation::SingleDigest).unwrap();
    assert_eq!(
        single.key.private_scalar,
        uint("5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8")
    );
    assert_ne!(single.key.private_scalar, signer.key.private_scalar);
}

#[test]
fn test_public_point_is_private_times_generator() {
    let signer = toy_signer("alice");
    let expected = signer
        .domain()
        .curve()
        .scalar_mul(signer.domain().generator(), &signer.key.private_scalar)
        .unwrap();
    assert_eq!(*signer.public_point(), expected);
    assert!(!signer.public_point().is_infinity());
}

#[test]
fn test_fixed_nonce_signature_on_toy_domain() {
    // d = dsha256("alice") ≡ 14, e = sha256("toy message") ≡ 13 (mod 19),
    // k = 3 lands on 3G = (10, 6), so r = 10 and s = 3⁻¹(13 + 14·10) = 13.
    let signer = toy_signer("alice");
    let signature = signer
        .sign_with_nonce("toy message", &BigUint::from(3u32))
        .unwrap();
    assert_eq!(signature.r, BigUint::from(10u32));
    assert_eq!(signature.s, BigUint::from(13u32));
    assert!(signer.verify("toy message", &signature));
}

#[test]
fn test_fixed_nonce_is_deterministic() {
    let signer = toy_signer("alice");
    let k = BigUint::from(5u32);
    let first = signer.sign_with_nonce("hello", &k).unwrap();
    let second = signer.sign_with_nonce("hello", &k).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fixed_nonce_out_of_range_is_rejected() {
    let signer = toy_signer("alice");
    for bad in [BigUint::from(0u32), BigUint::from(19u32), BigUint::from(40u32)] {
        let err = signer.sign_with_nonce("hello", &bad).unwrap_err();
        assert!(matches!(
            err,
            Error::DegenerateNonce {
                reason: "fixed nonce outside [1, n-1]"
            }
        ));
    }
}

#[test]
fn test_fixed_nonce_with_zero_r_is_degenerate() {
    // 7G = (0, 6) on the toy curve, so k = 7 yields r = 0.
    let signer = toy_signer("alice");
    let err = signer
        .sign_with_nonce("hello", &BigUint::from(7u32))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::DegenerateNonce {
            reason: "fixed nonce produced a zero signature component"
        }
    ));
}

#[test]
fn test_random_nonce_round_trip() {
    let signer = toy_signer("bob");
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for message in ["hello", "toy message", ""] {
        let signature = signer.sign_with_rng(message, &mut rng).unwrap();
        assert!(signer.verify(message, &signature));
    }
}

#[test]
fn test_os_rng_round_trip() {
    let signer = toy_signer("carol");
    let signature = signer.sign("hello").unwrap();
    assert!(signer.verify("hello", &signature));
}

#[test]
fn test_secp256k1_deterministic_scenario() {
    // With k = 1, k·G is the generator itself, and Gx < n for
    // secp256k1, so r is exactly the generator's x coordinate and
    // s = e + d·r mod n.
    let signer = EcdsaSigner::new(
        CurveDomain::secp256k1(),
        "password",
        KeyDerivation::DoubleDigest,
    )
    .unwrap();
    let signature = signer.sign_with_nonce("hello", &BigUint::one()).unwrap();

    assert_eq!(signature.r, uint(ecref_params::secp256k1::GX_HEX));
    assert_eq!(
        signature.s,
        uint("d5d7929a123eef7e96912642e1c00aa975c1e3c2de3c1a29c570ba260cbd0cd4")
    );

    assert!(signer.verify("hello", &signature));
    assert!(!signer.verify("hellO", &signature));
}

#[test]
fn test_nist_p256_round_trip() {
    let signer = EcdsaSigner::new(
        CurveDomain::nist_p256(),
        "password",
        KeyDerivation::DoubleDigest,
    )
    .unwrap();
    let signature = signer
        .sign_with_nonce("hello", &BigUint::from(0xdeadbeefu32))
        .unwrap();
    assert!(signer.verify("hello", &signature));
    assert!(!signer.verify("hellO", &signature));
}

#[test]
fn test_tampered_signature_is_rejected() {
    let signer = toy_signer("alice");
    let signature = signer
        .sign_with_nonce("toy message", &BigUint::from(3u32))
        .unwrap();

    let bumped_r = Signature {
        r: &signature.r + BigUint::one(),
        s: signature.s.clone(),
    };
    assert!(!signer.verify("toy message", &bumped_r));

    let bumped_s = Signature {
        r: signature.r.clone(),
        s: &signature.s + BigUint::one(),
    };
    assert!(!signer.verify("toy message", &bumped_s));
}

#[test]
fn test_out_of_range_components_are_rejected_without_panic() {
    let signer = toy_signer("alice");
    let n = signer.domain().order().clone();
    let good = signer
        .sign_with_nonce("toy message", &BigUint::from(3u32))
        .unwrap();

    for (r, s) in [
        (BigUint::from(0u32), good.s.clone()),
        (good.r.clone(), BigUint::from(0u32)),
        (n.clone(), good.s.clone()),
        (good.r.clone(), n.clone()),
        (&n + BigUint::one(), good.s.clone()),
    ] {
        assert!(!signer.verify("toy message", &Signature { r, s }));
    }
}

#[test]
fn test_verification_requires_the_matching_key() {
    let domain = CurveDomain::secp256k1();
    let alice = EcdsaSigner::new(domain.clone(), "alice", KeyDerivation::DoubleDigest).unwrap();
    let bob = EcdsaSigner::new(domain, "bob", KeyDerivation::DoubleDigest).unwrap();

    let signature = alice
        .sign_with_nonce("hello", &BigUint::from(12345u32))
        .unwrap();
    assert!(alice.verify("hello", &signature));
    assert!(!bob.verify("hello", &signature));
}

#[test]
fn test_nonce_sampling_stays_in_range() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let small = BigUint::from(19u32);
    for _ in 0..200 {
        let k = sample_nonce(&mut rng, &small).unwrap();
        assert!(!k.is_zero());
        assert!(k < small);
    }

    let large = uint(ecref_params::secp256k1::N_HEX);
    for _ in 0..20 {
        let k = sample_nonce(&mut rng, &large).unwrap();
        assert!(!k.is_zero());
        assert!(k < large);
    }
}

#[test]
fn test_nonce_sampling_never_exhausts_on_odd_bit_orders() {
    // A 5-bit order draws a whole byte; without masking the excess
    // three bits the acceptance rate drops to ~7% and the retry cap
    // becomes reachable under a healthy generator.
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for order in [3u32, 5, 19, 257, 0x1_0001] {
        let n = BigUint::from(order);
        for _ in 0..1000 {
            assert!(
                sample_nonce(&mut rng, &n).is_some(),
                "sampler exhausted its retry cap for order {}",
                order
            );
        }
    }
}

#[test]
fn test_message_digest_is_big_endian_sha256() {
    assert_eq!(
        digest_to_int("hello"),
        uint("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")
    );
}
