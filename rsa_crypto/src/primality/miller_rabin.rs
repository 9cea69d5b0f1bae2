use crate::number_theory::mod_pow;
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt, ToBigUint};
use num_traits::{One, Zero};
use rand::thread_rng;

pub struct MillerRabinTest;

impl PrimalityTest for MillerRabinTest {
    fn run_iteration(&self, n: &BigUint) -> bool {
        let one = BigUint::one();
        let two = 2u32.to_biguint().expect("2 converts");

        if *n < two {
            return false;
        }
        if *n == two || *n == BigUint::from(3u8) {
            return true;
        }
        if (n % &two).is_zero() {
            return false;
        }

        let upper = n - &one;
        if two >= upper {
            return false;
        }

        // n - 1 = d * 2^s with d odd.
        let mut d = upper.clone();
        let mut s = 0u32;
        while (&d % &two).is_zero() {
            d /= &two;
            s += 1;
        }

        let mut rng = thread_rng();
        let a = rng.gen_biguint_range(&two, &upper);
        let mut x = mod_pow(&a, &d, n);

        if x == one || x == upper {
            return true;
        }

        for _ in 0..s.saturating_sub(1) {
            x = mod_pow(&x, &two, n);
            if x == upper {
                return true;
            }
            if x == one {
                return false;
            }
        }

        false
    }

    /// A single Miller-Rabin round errs with probability at most 1/4.
    fn error_probability(&self) -> f64 {
        0.25
    }
}
