//! Message padding per FIPS 180-4 Section 5.1.1.

/// Pad a message to a positive multiple of 64 bytes.
///
/// Appends the 0x80 marker byte, the minimum run of zero bytes landing the
/// length at 56 mod 64, and the message bit length as 8 big-endian bytes.
/// The output is always 9 to 72 bytes longer than the input. Messages of
/// 2^61 bytes or more would overflow the 64-bit length field and are outside
/// the supported range.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let bit_len = (data.len() as u64) * 8;

    // 119 = 64 + 55: one marker byte plus zero_run bytes bring len to 56 mod 64
    let zero_run = (119 - (data.len() % 64)) % 64;

    let mut padded = Vec::with_capacity(data.len() + 1 + zero_run + 8);
    padded.extend_from_slice(data);
    padded.push(0x80);
    padded.resize(padded.len() + zero_run, 0x00);
    padded.extend_from_slice(&bit_len.to_be_bytes());
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_aligned_for_all_small_lengths() {
        for len in 0..=257 {
            let data = vec![0xabu8; len];
            let padded = pad(&data);
            assert_eq!(padded.len() % 64, 0, "len {}", len);
            assert!(!padded.is_empty(), "len {}", len);
        }
    }

    #[test]
    fn test_overhead_between_9_and_72() {
        for len in 0..=257 {
            let data = vec![0u8; len];
            let overhead = pad(&data).len() - len;
            assert!((9..=72).contains(&overhead), "len {} overhead {}", len, overhead);
        }
    }

    #[test]
    fn test_trailer_encodes_bit_length() {
        for len in [0usize, 1, 3, 55, 56, 57, 63, 64, 65, 200] {
            let data = vec![0x5a; len];
            let padded = pad(&data);
            let trailer: [u8; 8] = padded[padded.len() - 8..].try_into().unwrap();
            assert_eq!(u64::from_be_bytes(trailer), (len as u64) * 8, "len {}", len);
        }
    }

    #[test]
    fn test_marker_follows_message() {
        let padded = pad(b"abc");
        assert_eq!(&padded[..3], b"abc");
        assert_eq!(padded[3], 0x80);
        assert!(padded[4..56].iter().all(|&b| b == 0));
        assert_eq!(padded.len(), 64);
    }

    #[test]
    fn test_empty_message_pads_to_one_block() {
        let padded = pad(b"");
        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_55_bytes_still_one_block_56_needs_two() {
        assert_eq!(pad(&[0u8; 55]).len(), 64);
        assert_eq!(pad(&[0u8; 56]).len(), 128);
        assert_eq!(pad(&[0u8; 64]).len(), 128);
    }
}
