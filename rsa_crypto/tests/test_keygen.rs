use num_bigint::BigUint;
use num_traits::One;
use rsa_crypto::number_theory::mod_pow;
use rsa_crypto::{PrimalityType, RsaKeyGenerator};

#[test]
fn parameter_validation() {
    assert!(RsaKeyGenerator::new(PrimalityType::MillerRabin, 0.4, 128).is_err());
    assert!(RsaKeyGenerator::new(PrimalityType::MillerRabin, 1.0, 128).is_err());
    assert!(RsaKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 120).is_err());
    assert!(RsaKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 130).is_err());
    assert!(RsaKeyGenerator::new(PrimalityType::MillerRabin, 0.5, 128).is_ok());
}

#[test]
fn generated_keypair_is_consistent() {
    let generator = RsaKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 128).unwrap();
    let pair = generator.generate_keypair();

    assert_eq!(pair.get_p() * pair.get_q(), pair.n);
    assert_eq!(pair.n.bits(), 128);

    // e*d must invert modulo phi: a random residue survives the roundtrip.
    let phi = (pair.get_p() - BigUint::one()) * (pair.get_q() - BigUint::one());
    assert_eq!((&pair.e * &pair.d) % &phi, BigUint::one());

    let m = BigUint::from(0x1234_5678u32);
    let c = mod_pow(&m, &pair.e, &pair.n);
    assert_eq!(mod_pow(&c, &pair.d, &pair.n), m);
}

#[test]
fn primes_are_kept_apart() {
    let generator = RsaKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 128).unwrap();
    let pair = generator.generate_keypair();

    let diff = if pair.get_p() > pair.get_q() {
        pair.get_p() - pair.get_q()
    } else {
        pair.get_q() - pair.get_p()
    };
    assert!(diff > (BigUint::one() << 32), "Fermat-attack guard");
    assert!(pair.d.bits() >= 32, "Wiener-attack guard");
}

#[test]
fn every_primality_backend_generates() {
    for kind in [
        PrimalityType::Fermat,
        PrimalityType::SolovayStrassen,
        PrimalityType::MillerRabin,
    ] {
        let generator = RsaKeyGenerator::new(kind, 0.95, 128).unwrap();
        let pair = generator.generate_keypair();
        assert_eq!(pair.get_p() * pair.get_q(), pair.n);
    }
}
