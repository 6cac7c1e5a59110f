//! The game's 8-bit text encoding.
//!
//! Only 0x80-0xBF and 0xE0-0xFF hold printable glyphs. Everything else is either the
//! string terminator, one of the text engine's control codes, or bytes the English
//! release never prints.

pub const TERMINATOR: u8 = 0x50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Null,
    Junk,
    Control,
    Terminator,
    /// Leftovers from the Japanese release.
    Unused,
    Text(&'static str),
}

const GLYPHS_80: [&str; 64] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", //
    "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "(", ")", ":", ";", "[", "]", //
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", //
    "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "é", "'d", "'l", "'s", "'t", "'v",
];

const GLYPHS_E0: [&str; 32] = [
    "'", "PK", "MN", "-", "'r", "'m", "?", "!", ".", "ァ", "ゥ", "ェ", "▷", "▶", "▼", "♂", //
    "PK$", "×", ".", "/", ",", "♀", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
];

const fn build_charset() -> [Glyph; 256] {
    let mut table = [Glyph::Junk; 256];
    table[0x00] = Glyph::Null;

    let mut idx = 0x48;
    while idx <= 0x5f {
        table[idx] = Glyph::Control;
        idx += 1;
    }
    table[TERMINATOR as usize] = Glyph::Terminator;

    idx = 0x60;
    while idx <= 0x7f {
        table[idx] = Glyph::Unused;
        idx += 1;
    }

    idx = 0;
    while idx < GLYPHS_80.len() {
        table[0x80 + idx] = Glyph::Text(GLYPHS_80[idx]);
        idx += 1;
    }

    idx = 0;
    while idx < GLYPHS_E0.len() {
        table[0xe0 + idx] = Glyph::Text(GLYPHS_E0[idx]);
        idx += 1;
    }

    table
}

pub static CHARSET: [Glyph; 256] = build_charset();

pub fn glyph(byte: u8) -> Glyph {
    CHARSET[byte as usize]
}

/// Decodes every byte of an already bounded run. Bytes without a printable glyph
/// are dropped.
pub fn decode_fixed(text_data: &[u8]) -> String {
    let mut out_text = String::new();
    for byte in text_data {
        match glyph(*byte) {
            Glyph::Text(text) => out_text.push_str(text),
            other => log::trace!("Skipping non-printable byte 0x{byte:02x} ({other:?})"),
        }
    }

    out_text
}

/// Decodes up to (not including) the first terminator, or the whole run if there
/// is none.
pub fn decode_terminated(text_data: &[u8]) -> String {
    let end = text_data
        .iter()
        .position(|byte| *byte == TERMINATOR)
        .unwrap_or(text_data.len());
    decode_fixed(&text_data[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_layout() {
        assert_eq!(
            CHARSET.iter().filter(|g| **g == Glyph::Terminator).count(),
            1
        );
        assert_eq!(glyph(0x80), Glyph::Text("A"));
        assert_eq!(glyph(0xba), Glyph::Text("é"));
        assert_eq!(glyph(0xbb), Glyph::Text("'d"));
        assert_eq!(glyph(0xe1), Glyph::Text("PK"));
        assert_eq!(glyph(0xf0), Glyph::Text("PK$"));
        assert_eq!(glyph(0xff), Glyph::Text("9"));
        for byte in (0x01..=0x47).chain(0xc0..=0xdf) {
            assert_eq!(glyph(byte), Glyph::Junk);
        }
        for byte in 0x60..=0x7f {
            assert_eq!(glyph(byte), Glyph::Unused);
        }
    }

    #[test]
    fn terminated_text_stops_at_terminator() {
        let name = [0x91, 0x8e, 0x86, 0x50, 0x80, 0x80, 0x50, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(decode_terminated(&name), "ROG");
    }

    #[test]
    fn unterminated_text_decodes_whole_run() {
        assert_eq!(decode_terminated(&[0x86, 0x80, 0x91, 0x98]), "GARY");
        assert_eq!(decode_terminated(&[]), "");
    }

    #[test]
    fn aggregate_glyphs_are_one_slot() {
        assert_eq!(decode_fixed(&[0xe1, 0xe2]), "PKMN");
        assert_eq!(decode_fixed(&[0x8f, 0x50, 0x00, 0x49]), "P");
    }
}
