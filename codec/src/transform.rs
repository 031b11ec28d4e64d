//! The per code point transform.
//!
//! Encoding is `(c + offset) mod 255`, so a sum of exactly 255 collapses to 0.
//! Decoding is `c - offset`, plus 255 when the difference is `<= 0`. The two
//! rules are not exact inverses: plaintext 0 decodes as 255, and code points
//! above 255 are folded into [0, 254]. Both quirks are part of the on-disk
//! format and must not change.

use crate::offset::Offset;

const MODULUS: u32 = 255;

pub fn encode_char(c: char, offset: Offset) -> char {
    let x = (u32::from(c) + u32::from(offset.value())) % MODULUS;

    // Always below 255, so always a valid scalar value
    char::from(x as u8)
}

/// Returns `None` if the decoded value lands in the surrogate range.
pub fn decode_char(c: char, offset: Offset) -> Option<char> {
    let mut x = i64::from(u32::from(c)) - i64::from(offset.value());
    if x <= 0 {
        x += i64::from(MODULUS);
    }

    char::from_u32(x as u32)
}

pub fn encode_str_into(text: &str, offset: Offset, out: &mut String) {
    out.extend(text.chars().map(|c| encode_char(c, offset)));
}

pub fn encode_str(text: &str, offset: Offset) -> String {
    let mut out = String::with_capacity(text.len());
    encode_str_into(text, offset, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_adds_offset() {
        assert_eq!(encode_char('a', Offset::from(1)), 'b');
        assert_eq!(encode_char('\n', Offset::from(7)) as u32, 17);
    }

    #[test]
    fn test_encode_sum_of_255_collapses_to_zero() {
        let offset = Offset::from(55);
        let c = char::from(200u8);
        assert_eq!(encode_char(c, offset) as u32, 0);
    }

    #[test]
    fn test_encode_wraps_past_255() {
        assert_eq!(encode_char(char::from(160u8), Offset::from(254)) as u32, 159);
    }

    #[test]
    fn test_decode_zero_difference_becomes_255() {
        let offset = Offset::from(42);
        assert_eq!(decode_char(char::from(42u8), offset), Some(char::from(255u8)));
    }

    #[test]
    fn test_decode_negative_difference_wraps() {
        let offset = Offset::from(254);
        assert_eq!(decode_char(char::from(159u8), offset), Some(char::from(160u8)));
        assert_eq!(decode_char('\0', offset), Some(char::from(1u8)));
    }

    #[test]
    fn test_zero_plaintext_collides_with_255() {
        let offset = Offset::from(30);
        let zero = encode_char('\0', offset);
        let max = encode_char(char::from(255u8), offset);
        assert_eq!(zero, max);
        assert_eq!(decode_char(zero, offset), Some(char::from(255u8)));
    }

    #[test]
    fn test_decode_into_surrogate_range_is_rejected() {
        let c = char::from_u32(0xE000).unwrap();
        assert_eq!(decode_char(c, Offset::from(1)), None);
    }

    #[test]
    fn test_round_trip_every_char_and_offset() {
        for offset in 1..=254u8 {
            let offset = Offset::from(offset);
            for value in 1..=255u8 {
                let c = char::from(value);
                assert_eq!(decode_char(encode_char(c, offset), offset), Some(c));
            }
        }
    }

    #[test]
    fn test_encode_str() {
        assert_eq!(encode_str("HAL", Offset::from(1)), "IBM");
        assert_eq!(encode_str("", Offset::from(1)), "");
    }
}
