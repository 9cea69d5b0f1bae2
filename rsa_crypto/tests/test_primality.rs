use num_bigint::BigUint;
use quickcheck::quickcheck;
use rsa_crypto::primality::{
    FermatTest, MillerRabinTest, PrimalityTest, SolovayStrassenTest,
};

const SMALL_PRIMES: [u32; 8] = [5, 7, 13, 101, 7919, 104_729, 611_953, 999_983];
const COMPOSITES: [u32; 8] = [9, 15, 21, 100, 561, 8_911, 104_730, 999_981];

fn all_tests() -> Vec<Box<dyn PrimalityTest>> {
    vec![
        Box::new(FermatTest),
        Box::new(SolovayStrassenTest),
        Box::new(MillerRabinTest),
    ]
}

#[test]
fn known_primes_pass() {
    for test in all_tests() {
        for &p in &SMALL_PRIMES {
            assert!(
                test.is_probably_prime(&BigUint::from(p), 0.999),
                "{} flagged composite",
                p
            );
        }
    }
}

#[test]
fn known_composites_fail() {
    // Miller-Rabin is immune to Carmichael numbers like 561 and 8911;
    // the Fermat test is only checked on plain composites.
    for &c in &COMPOSITES {
        assert!(
            !MillerRabinTest.is_probably_prime(&BigUint::from(c), 0.999_999),
            "{} flagged prime",
            c
        );
        assert!(!SolovayStrassenTest.is_probably_prime(&BigUint::from(c), 0.999_999));
    }

    for &c in &[9u32, 15, 21, 100, 104_730] {
        assert!(!FermatTest.is_probably_prime(&BigUint::from(c), 0.999_999));
    }
}

#[test]
fn small_corner_cases() {
    for test in all_tests() {
        assert!(test.is_probably_prime(&BigUint::from(2u32), 0.99));
        assert!(test.is_probably_prime(&BigUint::from(3u32), 0.99));
        assert!(!test.is_probably_prime(&BigUint::from(1u32), 0.99));
        assert!(!test.is_probably_prime(&BigUint::from(0u32), 0.99));
    }
}

quickcheck! {
    fn prop_even_numbers_are_composite(x: u32) -> bool {
        let n = BigUint::from((x | 1).wrapping_add(1).max(4));
        !MillerRabinTest.is_probably_prime(&n, 0.99)
    }
}
