use crate::number_theory::extended_gcd;
use num_bigint::{BigUint, ToBigInt};
use num_traits::{One, ToPrimitive};

#[derive(Debug)]
pub struct FermatAttackResult {
    pub p: BigUint,
    pub q: BigUint,
    pub phi_n: BigUint,
    pub d: BigUint,
}

/// Fermat factorization: effective when p and q sit close together. The
/// search is capped near n^(1/4) steps, the keygen's minimum-difference
/// guard.
pub struct FermatAttack;

impl FermatAttack {
    pub fn attack(n: &BigUint, e: &BigUint) -> Option<FermatAttackResult> {
        if n.bits() < 16 {
            return None;
        }

        let mut a = n.sqrt();
        if &a * &a < *n {
            a += BigUint::one();
        }

        let max_iter = n.sqrt().sqrt().to_usize().unwrap_or(0);

        for i in 0..=max_iter {
            let ai = &a + BigUint::from(i);
            let b2 = &ai * &ai - n;
            let b = b2.sqrt();
            if &b * &b != b2 {
                continue;
            }

            let p = &ai - &b;
            let q = &ai + &b;
            if &p * &q != *n || p.is_one() {
                continue;
            }

            let phi = (&p - BigUint::one()) * (&q - BigUint::one());
            let phi_int = phi.to_bigint()?;
            let (g, d, _) = extended_gcd(&e.to_bigint()?, &phi_int);
            if !g.is_one() {
                return None;
            }
            let d = ((d % &phi_int) + &phi_int) % &phi_int;

            return Some(FermatAttackResult {
                p,
                q,
                phi_n: phi,
                d: d.to_biguint()?,
            });
        }
        None
    }
}
