use crate::errors::RsaError;
use crate::number_theory::mod_pow;
use crate::rsa::keygen::{PrimalityType, RsaKeyGenerator, RsaKeyPair};
use log::debug;
use num_bigint::BigUint;
use rand::{thread_rng, Rng};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// PKCS#1 v1.5 reserves three framing bytes and at least eight pad bytes.
const PKCS1_OVERHEAD: usize = 11;
const FILE_BUFFER_SIZE: usize = 81_920;

pub struct RsaService {
    keypair: RsaKeyPair,
    modulus_len: usize,
}

impl RsaService {
    pub fn new(
        test_type: PrimalityType,
        confidence: f64,
        bit_length: usize,
    ) -> Result<Self, &'static str> {
        let generator = RsaKeyGenerator::new(test_type, confidence, bit_length)?;
        let keypair = generator.generate_keypair();
        Ok(Self {
            modulus_len: bit_length / 8,
            keypair,
        })
    }

    pub fn from_keypair(keypair: RsaKeyPair) -> Self {
        let modulus_len = ((keypair.n.bits() + 7) / 8) as usize;
        Self {
            keypair,
            modulus_len,
        }
    }

    pub fn public_key(&self) -> (BigUint, BigUint) {
        (self.keypair.n.clone(), self.keypair.e.clone())
    }

    pub fn private_key(&self) -> (BigUint, BigUint) {
        (self.keypair.n.clone(), self.keypair.d.clone())
    }

    /// Textbook exponentiation of a single residue; panics when the message
    /// does not fit the modulus.
    pub fn encrypt(&self, m: &BigUint) -> BigUint {
        if m >= &self.keypair.n {
            panic!("message too large");
        }
        m.modpow(&self.keypair.e, &self.keypair.n)
    }

    pub fn decrypt(&self, ciphertext: &BigUint) -> BigUint {
        mod_pow(ciphertext, &self.keypair.d, &self.keypair.n)
    }

    /// Maximum payload bytes a single PKCS#1 v1.5 block can carry.
    pub fn payload_block_len(&self) -> usize {
        self.modulus_len - PKCS1_OVERHEAD
    }

    /// Chunks the input, wraps every chunk in a type-2 envelope
    /// (`00 02 | nonzero random | 00 | payload`) and emits one
    /// modulus-sized block per chunk.
    pub fn encrypt_bytes(&self, data: &[u8]) -> Result<Vec<u8>, RsaError> {
        let mut out = Vec::with_capacity(
            (data.len() / self.payload_block_len() + 1) * self.modulus_len,
        );
        for chunk in data.chunks(self.payload_block_len()) {
            let block = self.wrap_block(chunk);
            let m = BigUint::from_bytes_be(&block);
            let c = m.modpow(&self.keypair.e, &self.keypair.n);
            out.extend_from_slice(&left_pad(&c.to_bytes_be(), self.modulus_len));
        }
        Ok(out)
    }

    /// Reverses `encrypt_bytes`; every input block must decrypt to a valid
    /// type-2 envelope.
    pub fn decrypt_bytes(&self, data: &[u8]) -> Result<Vec<u8>, RsaError> {
        if data.len() % self.modulus_len != 0 {
            return Err(RsaError::InvalidData(
                "ciphertext is not a whole number of RSA blocks",
            ));
        }

        let mut out = Vec::with_capacity(data.len());
        for block in data.chunks(self.modulus_len) {
            let c = BigUint::from_bytes_be(block);
            let m = mod_pow(&c, &self.keypair.d, &self.keypair.n);
            out.extend_from_slice(&self.unwrap_block(&left_pad(
                &m.to_bytes_be(),
                self.modulus_len,
            ))?);
        }
        Ok(out)
    }

    /// Streams a file through `encrypt_bytes`, one output block per
    /// payload-sized read.
    pub fn encrypt_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<(), RsaError> {
        debug!(
            "rsa encrypt {:?} -> {:?}",
            input.as_ref(),
            output.as_ref()
        );
        let mut reader = BufReader::with_capacity(FILE_BUFFER_SIZE, File::open(input)?);
        let mut writer = BufWriter::with_capacity(FILE_BUFFER_SIZE, File::create(output)?);

        let mut chunk = vec![0u8; self.payload_block_len()];
        loop {
            let n = read_up_to(&mut reader, &mut chunk)?;
            if n == 0 {
                break;
            }
            writer.write_all(&self.encrypt_bytes(&chunk[..n])?)?;
            if n < chunk.len() {
                break;
            }
        }
        writer.flush()?;
        Ok(())
    }

    pub fn decrypt_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<(), RsaError> {
        debug!(
            "rsa decrypt {:?} -> {:?}",
            input.as_ref(),
            output.as_ref()
        );
        let mut reader = BufReader::with_capacity(FILE_BUFFER_SIZE, File::open(input)?);
        let mut writer = BufWriter::with_capacity(FILE_BUFFER_SIZE, File::create(output)?);

        let mut block = vec![0u8; self.modulus_len];
        loop {
            let n = read_up_to(&mut reader, &mut block)?;
            if n == 0 {
                break;
            }
            if n < self.modulus_len {
                return Err(RsaError::InvalidData(
                    "ciphertext ends mid-block",
                ));
            }
            writer.write_all(&self.decrypt_bytes(&block)?)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn wrap_block(&self, payload: &[u8]) -> Vec<u8> {
        let mut rng = thread_rng();
        let mut block = Vec::with_capacity(self.modulus_len);
        block.push(0x00);
        block.push(0x02);
        for _ in 0..self.modulus_len - 3 - payload.len() {
            block.push(rng.gen_range(1..=255u8));
        }
        block.push(0x00);
        block.extend_from_slice(payload);
        block
    }

    fn unwrap_block(&self, block: &[u8]) -> Result<Vec<u8>, RsaError> {
        if block.len() < PKCS1_OVERHEAD || block[0] != 0x00 || block[1] != 0x02 {
            return Err(RsaError::InvalidData("malformed PKCS#1 v1.5 envelope"));
        }
        let delimiter = block[2..]
            .iter()
            .position(|&b| b == 0x00)
            .ok_or(RsaError::InvalidData("missing PKCS#1 v1.5 delimiter"))?;
        if delimiter < 8 {
            return Err(RsaError::InvalidData("PKCS#1 v1.5 pad is too short"));
        }
        Ok(block[2 + delimiter + 1..].to_vec())
    }
}

fn left_pad(bytes: &[u8], width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width.saturating_sub(bytes.len())];
    out.extend_from_slice(bytes);
    out
}

fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
