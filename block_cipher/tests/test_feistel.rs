use block_cipher::crypto::errors::CipherError;
use block_cipher::crypto::feistel_network::FeistelNetwork;
use block_cipher::crypto::key_expansion::KeyExpansion;
use block_cipher::crypto::round_function::RoundFunction;
use std::sync::Arc;

/// Toy schedule: round key i is the key rotated by i bytes.
struct RotatingKeySchedule;

impl KeyExpansion for RotatingKeySchedule {
    fn expand_key(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        Ok((0..8)
            .map(|r| {
                let mut k = key.to_vec();
                k.rotate_left(r % key.len().max(1));
                k
            })
            .collect())
    }

    fn supported_key_sizes(&self) -> Vec<usize> {
        vec![4]
    }

    fn round_key_size(&self) -> usize {
        4
    }
}

/// Toy round function: add the key bytes into the half-block.
struct AddingRound;

impl RoundFunction for AddingRound {
    fn transform(&self, half_block: &[u8], round_key: &[u8]) -> Vec<u8> {
        half_block
            .iter()
            .zip(round_key.iter().cycle())
            .map(|(&b, &k)| b.wrapping_add(k).rotate_left(3))
            .collect()
    }

    fn block_size(&self) -> usize {
        4
    }

    fn is_valid_key_size(&self, size: usize) -> bool {
        size == 4
    }
}

fn toy_network(rounds: usize) -> FeistelNetwork {
    FeistelNetwork::new(rounds, Arc::new(RotatingKeySchedule), Arc::new(AddingRound))
}

#[test]
fn self_inversion_with_arbitrary_round_function() {
    let network = toy_network(8);
    let round_keys = network.expand_key(&[0xA1, 0xB2, 0xC3, 0xD4]).unwrap();

    let block: Vec<u8> = (0u8..8).collect();
    let encrypted = network.encrypt_with_round_keys(&block, &round_keys).unwrap();
    assert_ne!(encrypted, block);

    let decrypted = network.decrypt_with_round_keys(&encrypted, &round_keys).unwrap();
    assert_eq!(decrypted, block);
}

#[test]
fn final_halves_come_out_swapped() {
    // With a single round, the output must be (L0 ^ F(R0), R0).
    let network = toy_network(1);
    let round_keys = vec![vec![0u8; 4]];

    let block = [1u8, 2, 3, 4, 10, 20, 30, 40];
    let out = network.encrypt_with_round_keys(&block, &round_keys).unwrap();

    let mixed = AddingRound.transform(&block[4..], &round_keys[0]);
    let expected_low: Vec<u8> = block[..4]
        .iter()
        .zip(mixed.iter())
        .map(|(a, b)| a ^ b)
        .collect();

    assert_eq!(&out[..4], &expected_low[..]);
    assert_eq!(&out[4..], &block[4..]);
}

#[test]
fn odd_length_block_is_rejected() {
    let network = toy_network(4);
    let keys = network.expand_key(&[1, 2, 3, 4]).unwrap();
    assert!(network.encrypt_with_round_keys(&[0u8; 7], &keys).is_err());
}

#[test]
fn missing_round_keys_are_rejected() {
    let network = toy_network(4);
    assert!(matches!(
        network.encrypt_with_round_keys(&[0u8; 8], &[]),
        Err(CipherError::InvalidArgument(_))
    ));
}
