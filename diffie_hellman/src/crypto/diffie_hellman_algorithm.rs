use crate::crypto::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair};
use num_bigint::{BigUint, ToBigUint};
use num_traits::{One, Zero};
use rand::RngCore;

#[derive(Clone, Debug)]
pub struct DhParameters {
    pub p: BigUint,
    pub g: BigUint,
}

/// Classic Diffie-Hellman over the multiplicative group mod p. The private
/// key may be drawn from an RNG or installed explicitly; the public key and
/// the shared secret are modular exponentiations of g and the peer value.
pub struct DiffieHellman {
    params: DhParameters,
    private_key: Option<BigUint>,
}

impl DiffieHellman {
    /// Installs a caller-chosen private key; it must satisfy 1 < k < p - 1.
    pub fn set_private_key(&mut self, key: BigUint) -> Result<(), &'static str> {
        let p_minus_1 = &self.params.p - BigUint::one();
        if key <= BigUint::one() || key >= p_minus_1 {
            return Err("private key must lie strictly between 1 and p - 1");
        }
        self.private_key = Some(key);
        Ok(())
    }

    /// g^privateKey mod p.
    pub fn public_key(&self) -> Result<BigUint, &'static str> {
        let private = self
            .private_key
            .as_ref()
            .ok_or("no private key has been set or generated")?;
        Ok(self.params.g.modpow(private, &self.params.p))
    }

    pub fn params(&self) -> &DhParameters {
        &self.params
    }
}

impl KeyExchangeAlgorithm for DiffieHellman {
    type Parameters = DhParameters;
    type SharedSecret = BigUint;

    /// Both parameters only have to be positive; choosing a safe group is
    /// the caller's business.
    fn new(params: Self::Parameters) -> Result<Self, &'static str> {
        if params.p.is_zero() || params.g.is_zero() {
            return Err("parameters 'p' and 'g' must both be positive");
        }
        Ok(Self {
            params,
            private_key: None,
        })
    }

    fn generate_keypair(&mut self, rng: &mut impl RngCore) -> KeyPair {
        let two = 2.to_biguint().expect("2 converts");
        assert!(
            self.params.p > 3.to_biguint().expect("3 converts"),
            "no private key satisfies 1 < k < p - 1 for p <= 3"
        );

        // Fold the draw into [2, p-2] so small groups terminate too; for
        // large p the 512-bit draw passes through unchanged.
        let span = &self.params.p - BigUint::one() - &two;
        let mut bytes = vec![0u8; 64];
        rng.fill_bytes(&mut bytes);
        let private_key = BigUint::from_bytes_be(&bytes) % &span + &two;

        let public_key = self.params.g.modpow(&private_key, &self.params.p);
        self.private_key = Some(private_key.clone());

        KeyPair {
            private_key,
            public_key,
        }
    }

    /// peer^privateKey mod p; the peer value must satisfy 0 < peer < p.
    fn compute_shared_secret(
        &self,
        other_public_key: &BigUint,
    ) -> Result<Self::SharedSecret, &'static str> {
        let private = self
            .private_key
            .as_ref()
            .ok_or("no private key has been set or generated")?;

        if other_public_key.is_zero() || other_public_key >= &self.params.p {
            return Err("peer public key is out of the valid range (0, p)");
        }

        Ok(other_public_key.modpow(private, &self.params.p))
    }
}
