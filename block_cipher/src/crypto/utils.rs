use bitvec::prelude::BitVec;

/// Maps an input bit vector through a permutation table and packs the result.
///
/// Bits are numbered the way cipher standards publish their tables: bit 1 is
/// the most significant bit of the first byte. `table` holds 1-based source
/// positions; the output carries `table.len()` bits, zero-filled where a
/// position runs past the input.
pub fn permute_bits(data: &[u8], table: &[usize]) -> Vec<u8> {
    let bits = bytes_to_bits(data);
    let bit_count = bits.len();
    let mut permuted = BitVec::with_capacity(table.len());

    for &pos in table {
        let src = pos - 1;
        if src < bit_count {
            permuted.push(bits[src]);
        } else {
            permuted.push(false);
        }
    }

    bits_to_bytes(&permuted)
}

pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &BitVec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity((bits.len() + 7) / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

pub fn xor_in_place(block: &mut [u8], mask: &[u8]) {
    for (b, m) in block.iter_mut().zip(mask.iter()) {
        *b ^= m;
    }
}

pub fn xor_blocks(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// Adds a scalar to a big-endian counter, carry propagating leftward with an
/// early exit once it dies out.
pub fn counter_add_scalar(block: &mut [u8], value: usize) {
    let mut carry = value as u128;
    for byte in block.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = *byte as u128 + (carry & 0xFF);
        *byte = (sum & 0xFF) as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
}

/// Adds a byte-vector increment aligned to the low end of a big-endian
/// counter; any residual carry keeps propagating upward.
pub fn counter_add_vector(block: &mut [u8], increment: &[u8]) {
    debug_assert!(increment.len() <= block.len());

    let mut carry = 0u16;
    for i in 0..increment.len() {
        let bi = block.len() - 1 - i;
        let sum = block[bi] as u16 + increment[increment.len() - 1 - i] as u16 + carry;
        block[bi] = (sum & 0xFF) as u8;
        carry = sum >> 8;
    }

    let mut bi = block.len() - increment.len();
    while carry != 0 && bi > 0 {
        bi -= 1;
        let sum = block[bi] as u16 + carry;
        block[bi] = (sum & 0xFF) as u8;
        carry = sum >> 8;
    }
}
