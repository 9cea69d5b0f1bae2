use crate::number_theory::{jacobi_symbol, mod_pow};
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt, ToBigInt, ToBigUint};
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

pub struct SolovayStrassenTest;

impl PrimalityTest for SolovayStrassenTest {
    fn run_iteration(&self, n: &BigUint) -> bool {
        let one = BigUint::one();
        let two = 2u8.to_biguint().expect("2 converts");

        if *n <= two {
            return *n == two;
        }
        if *n == BigUint::from(3u8) {
            return true;
        }

        let upper = n - &one;
        if two >= upper {
            return false;
        }

        let n_bigint = n.to_bigint().expect("n converts");
        if n_bigint.is_even() {
            return false;
        }

        let mut rng = thread_rng();
        let a = rng.gen_biguint_range(&two, &upper);
        let jacobi = jacobi_symbol(&a.to_bigint().expect("a converts"), &n_bigint);
        if jacobi == 0 {
            return false;
        }

        let exp = (n - &one) >> 1;
        let x = mod_pow(&a, &exp, n);

        let jacobi_mod_n = if jacobi == -1 { n - &one } else { BigUint::one() };
        x == jacobi_mod_n
    }
}
