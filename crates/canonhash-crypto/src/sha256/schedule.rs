//! Message schedule expansion per FIPS 180-4 Section 6.2.2 step 1.

/// σ0 from Section 4.1.2.
fn sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1 from Section 4.1.2.
fn sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand a 64-byte block into the 64-word message schedule.
///
/// Words 0..16 are the block read as big-endian u32s; words 16..64 follow the
/// σ0/σ1 recurrence with wrapping adds.
pub fn expand(block: &[u8]) -> [u32; 64] {
    debug_assert_eq!(block.len(), 64);

    let mut w = [0u32; 64];
    for (i, bytes) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for j in 16..64 {
        w[j] = w[j - 16]
            .wrapping_add(sigma0(w[j - 15]))
            .wrapping_add(w[j - 7])
            .wrapping_add(sigma1(w[j - 2]));
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::pad;

    #[test]
    fn test_first_sixteen_words_are_big_endian() {
        let mut block = [0u8; 64];
        block[0] = 0x01;
        block[1] = 0x02;
        block[2] = 0x03;
        block[3] = 0x04;
        block[60] = 0xde;
        block[61] = 0xad;
        block[62] = 0xbe;
        block[63] = 0xef;

        let w = expand(&block);
        assert_eq!(w[0], 0x01020304);
        assert_eq!(w[15], 0xdeadbeef);
    }

    #[test]
    fn test_abc_block_expansion_trace() {
        // First block of the padded "abc" message; expected words from the
        // published FIPS 180-4 "abc" computation trace.
        let padded = pad(b"abc");
        let w = expand(&padded);

        assert_eq!(w[0], 0x61626380);
        assert_eq!(w[15], 0x00000018);
        assert_eq!(w[16], 0x61626380);
        assert_eq!(w[17], 0x000f0000);
    }

    #[test]
    fn test_zero_block_expands_to_all_zero_schedule() {
        // All-zero input words keep the schedule at zero: σ0(0) = σ1(0) = 0.
        let w = expand(&[0u8; 64]);
        assert!(w.iter().all(|&word| word == 0));
    }
}
