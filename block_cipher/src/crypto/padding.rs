use crate::crypto::cipher_types::PaddingMode;
use crate::crypto::errors::CipherError;
use rand::rngs::OsRng;
use rand::TryRngCore;

impl PaddingMode {
    /// Extends `data` to a multiple of `block_size`.
    ///
    /// The pad length is `block_size - (len % block_size)`; when the payload
    /// is already aligned that value is reset to zero and the data comes back
    /// untouched. No scheme here ever appends a whole block of padding.
    pub fn add_padding(self, data: &[u8], block_size: usize) -> Vec<u8> {
        let mut data = data.to_vec();
        let padding_length = match data.len() % block_size {
            0 => return data,
            rem => block_size - rem,
        };

        match self {
            PaddingMode::Zeros => data.extend(vec![0u8; padding_length]),
            PaddingMode::ANSI_X923 => {
                data.extend(vec![0u8; padding_length - 1]);
                data.push(padding_length as u8);
            }
            PaddingMode::PKCS7 => {
                data.extend(vec![padding_length as u8; padding_length]);
            }
            PaddingMode::ISO10126 => {
                let mut rng = OsRng;
                let mut filler = vec![0u8; padding_length - 1];
                rng.try_fill_bytes(&mut filler)
                    .expect("OS entropy source failed while padding");
                data.extend(filler);
                data.push(padding_length as u8);
            }
        }
        data
    }

    /// Strips padding from the tail of `data`.
    ///
    /// PKCS#7 and ANSI X9.23 tolerate a trailer that does not parse as
    /// padding and hand the data back unchanged; ISO 10126 is the only
    /// scheme that rejects an out-of-range length byte. Zeros cannot tell
    /// payload zeros from padding and trims them all.
    pub fn remove_padding(
        self,
        data: &[u8],
        block_size: usize,
    ) -> Result<Vec<u8>, CipherError> {
        let mut data = data.to_vec();
        if data.is_empty() {
            return Ok(data);
        }

        match self {
            PaddingMode::Zeros => {
                while data.last() == Some(&0u8) {
                    data.pop();
                }
            }
            PaddingMode::ANSI_X923 => {
                let pad_len = *data.last().unwrap() as usize;
                if pad_len > 0 && pad_len < block_size && pad_len <= data.len() {
                    data.truncate(data.len() - pad_len);
                }
            }
            PaddingMode::PKCS7 => {
                let last = *data.last().unwrap();
                let pad_len = last as usize;
                if pad_len > 0 && pad_len <= block_size && pad_len <= data.len() {
                    let tail = &data[data.len() - pad_len..];
                    if tail.iter().all(|&b| b == last) {
                        data.truncate(data.len() - pad_len);
                    }
                }
            }
            PaddingMode::ISO10126 => {
                let pad_len = *data.last().unwrap() as usize;
                if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
                    return Err(CipherError::InvalidData(
                        "ISO 10126 length byte is out of range",
                    ));
                }
                data.truncate(data.len() - pad_len);
            }
        }

        Ok(data)
    }
}
