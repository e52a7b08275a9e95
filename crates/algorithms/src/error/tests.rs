use super::*;
use num_bigint::BigUint;

#[test]
fn test_validation_functions() {
    // Parameter validation
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();

    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    // Modulus validation
    assert!(validate::modulus(&BigUint::from(2u32), "field").is_ok());
    let err = validate::modulus(&BigUint::from(1u32), "field").unwrap_err();
    assert_eq!(err, Error::InvalidModulus { context: "field" });
    let err = validate::modulus(&BigUint::from(0u32), "field").unwrap_err();
    assert_eq!(err, Error::InvalidModulus { context: "field" });

    // Modulus agreement
    let m17 = BigUint::from(17u32);
    let m19 = BigUint::from(19u32);
    assert!(validate::same_modulus(&m17, &m17, "add").is_ok());
    let err = validate::same_modulus(&m17, &m19, "add").unwrap_err();
    assert_eq!(err, Error::ModulusMismatch { operation: "add" });
}

#[test]
fn test_error_display() {
    let err = Error::NotInvertible { context: "inverse" };
    assert!(err.to_string().contains("not invertible"));

    let err = Error::NotAQuadraticResidue { context: "sqrt" };
    assert!(err.to_string().contains("quadratic residue"));

    let err = Error::PointNotOnCurve { context: "normalize" };
    assert!(err.to_string().contains("curve equation"));

    let err = Error::InvalidDomainParameters {
        name: "generator",
        reason: "base point does not lie on the curve",
    };
    assert!(err.to_string().contains("generator"));

    let err = Error::param("seed", "must not be empty");
    assert_eq!(err.to_string(), "Invalid parameter 'seed': must not be empty");
}
