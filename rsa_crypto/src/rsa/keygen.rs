use crate::number_theory::{extended_gcd, gcd};
use crate::primality::{
    FermatTest, MillerRabinTest, PrimalityTest, SolovayStrassenTest,
};
use log::debug;
use num_bigint::{BigUint, RandBigInt, ToBigInt};
use num_traits::One;
use rand::thread_rng;

#[derive(Debug, Clone, Copy)]
pub enum PrimalityType {
    Fermat,
    SolovayStrassen,
    MillerRabin,
}

pub struct RsaKeyPair {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
}

impl RsaKeyPair {
    #[doc(hidden)]
    pub fn get_p(&self) -> &BigUint {
        &self.p
    }

    #[doc(hidden)]
    pub fn get_q(&self) -> &BigUint {
        &self.q
    }
}

pub struct RsaKeyGenerator {
    test_type: PrimalityType,
    confidence: f64,
    bit_length: usize,
}

impl RsaKeyGenerator {
    /// `confidence` is the minimum probability each prime really is prime,
    /// in [0.5, 1); `bit_length` must be at least 128 and a multiple of 8.
    pub fn new(
        test_type: PrimalityType,
        confidence: f64,
        bit_length: usize,
    ) -> Result<Self, &'static str> {
        if !(0.5..1.0).contains(&confidence) {
            return Err("confidence must lie in [0.5, 1)");
        }
        if bit_length < 128 || bit_length % 8 != 0 {
            return Err("bit length must be >= 128 and a multiple of 8");
        }
        Ok(Self {
            test_type,
            confidence,
            bit_length,
        })
    }

    /// Generates a keypair hardened against the Fermat attack (p and q kept
    /// apart) and the Wiener attack (d kept large).
    pub fn generate_keypair(&self) -> RsaKeyPair {
        let test = self.get_test();
        let one = BigUint::one();
        let e = BigUint::from(65537u32);
        let half_bits = self.bit_length / 2;
        let min_diff = BigUint::one() << (self.bit_length / 4);

        let mut rng = thread_rng();

        loop {
            let p = loop {
                let mut candidate = rng.gen_biguint(half_bits as u64);
                candidate.set_bit((half_bits - 1) as u64, true);
                if test.is_probably_prime(&candidate, self.confidence) {
                    break candidate;
                }
            };

            let q = loop {
                let mut candidate = rng.gen_biguint(half_bits as u64);
                candidate.set_bit((half_bits - 1) as u64, true);
                if candidate != p
                    && test.is_probably_prime(&candidate, self.confidence)
                    && (&p > &candidate && &p - &candidate > min_diff
                        || &candidate > &p && &candidate - &p > min_diff)
                {
                    break candidate;
                }
            };

            let n = &p * &q;
            if n.bits() < self.bit_length as u64 {
                debug!("modulus came out short, retrying");
                continue;
            }

            let phi = (&p - &one) * (&q - &one);
            if gcd(&e, &phi) != one {
                continue;
            }

            let phi_int = phi.to_bigint().expect("phi converts");
            let (_, d, _) = extended_gcd(&e.to_bigint().expect("e converts"), &phi_int);
            let d = ((d % &phi_int) + &phi_int) % &phi_int;
            let d = d.to_biguint().expect("d reduced into range");

            if d.bits() < (self.bit_length / 4) as u64 {
                debug!("private exponent too small, retrying");
                continue;
            }

            return RsaKeyPair { n, e, d, p, q };
        }
    }

    fn get_test(&self) -> Box<dyn PrimalityTest> {
        match self.test_type {
            PrimalityType::Fermat => Box::new(FermatTest),
            PrimalityType::SolovayStrassen => Box::new(SolovayStrassenTest),
            PrimalityType::MillerRabin => Box::new(MillerRabinTest),
        }
    }
}
