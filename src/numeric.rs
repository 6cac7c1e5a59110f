use byteorder::{BigEndian, ByteOrder};

/// Big-endian unsigned decode of a 1 to 4 byte field. Wider input keeps only its
/// low four bytes; an empty slice is zero.
pub fn bytes_to_uint(bytes: &[u8]) -> u32 {
    debug_assert!(
        (1..=4).contains(&bytes.len()),
        "numeric fields are 1 to 4 bytes wide"
    );
    let low = &bytes[bytes.len().saturating_sub(4)..];
    match low.len() {
        0 => 0,
        width => BigEndian::read_uint(low, width) as u32,
    }
}

/// Packed decimal: each byte holds a tens digit in its high nibble and a units digit
/// in its low nibble, most significant pair first.
pub fn bcd_to_int(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |acc, byte| {
        let pair = u32::from(byte & 0x0f) + 10 * u32::from((byte >> 4) & 0x0f);
        acc * 100 + pair
    })
}

/// Renders a byte as eight `0`/`1` characters, most significant bit first.
pub fn byte_to_bits(byte: u8) -> String {
    format!("{byte:08b}")
}

pub fn bit_slice(bits: &str, start: usize, end: usize) -> &str {
    &bits[start..end]
}

/// Reads a run of at most eight `0`/`1` characters back as an integer.
pub fn bits_to_int(bits: &str) -> u8 {
    bits.bytes()
        .fold(0u8, |acc, bit| (acc << 1) | u8::from(bit == b'1'))
}

/// Whether the character at `idx` of an MSB-first bit string is set.
pub fn bit_set(bits: &str, idx: usize) -> bool {
    bits.as_bytes()[idx] == b'1'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_widths() {
        assert_eq!(bytes_to_uint(&[0x2a]), 42);
        assert_eq!(bytes_to_uint(&[0x01, 0x02]), 0x0102);
        assert_eq!(bytes_to_uint(&[0x00, 0x0e, 0x10]), 3600);
        assert_eq!(bytes_to_uint(&[0xff, 0xff, 0xff, 0xff]), u32::MAX);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "numeric fields"))]
    fn out_of_range_widths_do_not_panic_in_release() {
        assert_eq!(bytes_to_uint(&[]), 0);
        assert_eq!(bytes_to_uint(&[0x01, 0x00, 0x00, 0x00, 0x2a]), 42);
    }

    #[test]
    fn bcd_reads_decimal_pairs() {
        assert_eq!(bcd_to_int(&[0x04, 0x63, 0x43]), 46343);
        assert_eq!(bcd_to_int(&[0x00, 0x02]), 2);
        assert_eq!(bcd_to_int(&[0x99, 0x99, 0x99]), 999_999);
        assert_eq!(bcd_to_int(&[0x99, 0x99]), 9999);
        assert_eq!(bcd_to_int(&[0x10]), 10);
    }

    #[test]
    fn bit_strings_are_msb_first() {
        assert_eq!(byte_to_bits(0x01), "00000001");
        assert_eq!(byte_to_bits(0xc5), "11000101");
        let bits = byte_to_bits(0b1001_1110);
        assert_eq!(bits_to_int(bit_slice(&bits, 0, 2)), 0b10);
        assert_eq!(bits_to_int(bit_slice(&bits, 2, 8)), 0b01_1110);
        assert_eq!(bits_to_int(bit_slice(&bits, 0, 4)), 9);
        assert_eq!(bits_to_int(bit_slice(&bits, 4, 8)), 14);
        assert!(bit_set(&bits, 0));
        assert!(!bit_set(&bits, 1));
    }
}
