use num_bigint::BigUint;
use num_traits::One;
use rsa_crypto::attacks::{FermatAttack, WienerAttack};
use rsa_crypto::number_theory::mod_pow;
use rsa_crypto::{PrimalityType, RsaKeyGenerator};

/// Wiener's textbook key: n = 379 * 239, e = 17993, d = 5.
#[test]
fn wiener_recovers_small_private_exponent() {
    let n = BigUint::from(90_581u32);
    let e = BigUint::from(17_993u32);

    let result = WienerAttack::attack(&n, &e).expect("attack succeeds");
    assert_eq!(result.d, BigUint::from(5u32));
    assert_eq!(result.phi_n, BigUint::from(89_964u32));
    assert!(!result.candidates.is_empty());

    // The recovered exponent actually decrypts.
    let m = BigUint::from(4_242u32);
    let c = mod_pow(&m, &e, &n);
    assert_eq!(mod_pow(&c, &result.d, &n), m);
}

#[test]
fn wiener_gives_up_on_hardened_keys() {
    let pair = RsaKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 128)
        .unwrap()
        .generate_keypair();
    assert!(WienerAttack::attack(&pair.n, &pair.e).is_none());
}

#[test]
fn wiener_rejects_degenerate_inputs() {
    assert!(WienerAttack::attack(&BigUint::one(), &BigUint::from(3u8)).is_none());
    assert!(
        WienerAttack::attack(&BigUint::from(90_581u32), &BigUint::from(0u8)).is_none()
    );
    // Modulus far below the 16-bit floor.
    assert!(WienerAttack::attack(&BigUint::from(35u8), &BigUint::from(5u8)).is_none());
}

/// p and q adjacent primes: Fermat factorization succeeds immediately.
#[test]
fn fermat_factors_close_primes() {
    let p = BigUint::from(10_007u32);
    let q = BigUint::from(10_009u32);
    let n = &p * &q;
    let e = BigUint::from(65_537u32);

    let result = FermatAttack::attack(&n, &e).expect("attack succeeds");
    assert_eq!(result.p, p);
    assert_eq!(result.q, q);
    assert_eq!(result.phi_n, (&p - 1u32) * (&q - 1u32));

    let m = BigUint::from(31_337u32);
    let c = mod_pow(&m, &e, &n);
    assert_eq!(mod_pow(&c, &result.d, &n), m);
}

#[test]
fn fermat_gives_up_on_separated_primes() {
    // 251 * 65003: the factors sit far apart, so the n^(1/4) step budget
    // runs out long before the square-difference window reaches them.
    let n = BigUint::from(251u32) * BigUint::from(65_003u32);
    assert!(FermatAttack::attack(&n, &BigUint::from(65_537u32)).is_none());
}
