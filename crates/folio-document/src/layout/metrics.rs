// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Advance widths for the PDF base-14 fonts Folio draws with.
//
// Widths come from the Adobe AFM files, in 1/1000 em. Tables cover ASCII
// 0x20..=0x7E; index = (char as usize) - 32. Latin-1 letters measure as their
// base letter, a few symbols have their own widths, and the rest of the
// Windows-1252 range uses the table's fallback width.

/// Built-in fonts used by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    Courier,
}

/// A font at a specific size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub font: Font,
    pub size: f32,
}

impl FontSpec {
    pub const fn new(font: Font, size: f32) -> Self {
        Self { font, size }
    }

    /// Rendered width of `text` in points.
    pub fn text_width(&self, text: &str) -> f32 {
        self.font.text_width(text, self.size)
    }
}

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Courier is monospaced.
const COURIER_WIDTH: u16 = 600;

/// Drawn in place of characters the embedded fonts cannot show.
pub const REPLACEMENT_CHAR: char = '?';

/// Map `c` to the character actually drawn for it.
///
/// The embedded fonts cover the Windows-1252 repertoire: printable ASCII,
/// Latin-1 (U+00A0..=U+00FF) and the typographic extras in 0x80..=0x9F.
/// Everything else, control characters included, becomes
/// [`REPLACEMENT_CHAR`].
pub fn drawable_char(c: char) -> char {
    match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' => c,
        '\u{20ac}' | '\u{201a}' | '\u{0192}' | '\u{201e}' | '\u{2026}' | '\u{2020}'
        | '\u{2021}' | '\u{02c6}' | '\u{2030}' | '\u{0160}' | '\u{2039}' | '\u{0152}'
        | '\u{017d}' | '\u{2018}' | '\u{2019}' | '\u{201c}' | '\u{201d}' | '\u{2022}'
        | '\u{2013}' | '\u{2014}' | '\u{02dc}' | '\u{2122}' | '\u{0161}' | '\u{203a}'
        | '\u{0153}' | '\u{017e}' | '\u{0178}' => c,
        _ => REPLACEMENT_CHAR,
    }
}

/// Accented letters share the advance width of their base letter.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ð' => 'D',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' | '\u{0178}' => 'Y',
        'Þ' => 'P',
        '\u{0160}' => 'S',
        '\u{017d}' => 'Z',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ð' | 'ò'..='ö' => 'o',
        'ñ' => 'n',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'þ' => 'p',
        '\u{0161}' => 's',
        '\u{017e}' => 'z',
        _ => return None,
    };
    Some(base)
}

/// Widths of the non-ASCII glyphs that differ from their base letter, as
/// (Helvetica, Helvetica-Bold).
fn extended_width(c: char) -> Option<(u16, u16)> {
    let widths = match c {
        '\u{a0}' | 'ì'..='ï' => (278, 278),
        'ø' => (611, 611),
        'ß' => (611, 611),
        'æ' => (889, 889),
        'Æ' => (1000, 1000),
        '\u{0153}' => (944, 944),
        '\u{0152}' => (1000, 1000),
        '¡' => (333, 333),
        '¿' => (611, 611),
        '°' => (400, 400),
        '©' | '®' => (737, 737),
        '×' | '÷' | '±' | '¬' => (584, 584),
        '«' | '»' => (556, 556),
        '§' => (556, 556),
        '¶' => (537, 556),
        '·' => (278, 278),
        '¼' | '½' | '¾' => (834, 834),
        '\u{2018}' | '\u{2019}' | '\u{201a}' => (222, 278),
        '\u{201c}' | '\u{201d}' | '\u{201e}' => (333, 500),
        '\u{2013}' => (556, 556),
        '\u{2014}' | '\u{2026}' | '\u{2030}' | '\u{2122}' => (1000, 1000),
        '\u{2022}' => (350, 350),
        '\u{20ac}' => (556, 556),
        _ => return None,
    };
    Some(widths)
}

impl Font {
    /// Advance width of one character in 1/1000 em, measured as drawn.
    fn char_width(&self, c: char) -> u16 {
        let table = match self {
            Self::Courier => return COURIER_WIDTH,
            Self::Helvetica => &HELVETICA,
            Self::HelveticaBold => &HELVETICA_BOLD,
        };
        let c = drawable_char(c);
        let c = base_letter(c).unwrap_or(c);
        let code = c as usize;
        if (32..=126).contains(&code) {
            return table[code - 32];
        }
        match (extended_width(c), self) {
            (Some((regular, _)), Self::Helvetica) => regular,
            (Some((_, bold)), _) => bold,
            // Width of a lowercase 'n' for the remaining Latin-1 symbols.
            (None, _) => table['n' as usize - 32],
        }
    }

    /// Rendered width of `text` at `size` points.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u64 = text.chars().map(|c| u64::from(self.char_width(c))).sum();
        units as f32 * size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courier_is_monospaced() {
        let spec = FontSpec::new(Font::Courier, 10.0);
        assert!((spec.text_width("iiii") - spec.text_width("MMMM")).abs() < f32::EPSILON);
        assert!((spec.text_width("abcd") - 24.0).abs() < 1e-4);
        assert!((spec.text_width("café") - 24.0).abs() < 1e-4);
    }

    #[test]
    fn helvetica_bold_is_wider_than_regular() {
        let text = "Department of Computer Science";
        assert!(
            Font::HelveticaBold.text_width(text, 12.0) > Font::Helvetica.text_width(text, 12.0)
        );
    }

    #[test]
    fn known_glyph_widths() {
        assert!((Font::Helvetica.text_width("W", 1000.0) - 944.0).abs() < 1e-3);
        assert!((Font::HelveticaBold.text_width(" ", 1000.0) - 278.0).abs() < 1e-3);
        assert_eq!(Font::Helvetica.text_width("", 12.0), 0.0);
    }

    #[test]
    fn accented_letters_measure_as_one_glyph() {
        for font in [Font::Helvetica, Font::HelveticaBold] {
            assert_eq!(font.text_width("é", 1000.0), font.text_width("e", 1000.0));
            assert_eq!(font.text_width("Ü", 1000.0), font.text_width("U", 1000.0));
            assert_eq!(
                font.text_width("Université", 14.0),
                font.text_width("Universite", 14.0)
            );
        }
        assert!((Font::Helvetica.text_width("ï", 1000.0) - 278.0).abs() < 1e-3);
        assert!((Font::HelveticaBold.text_width("\u{201c}", 1000.0) - 500.0).abs() < 1e-3);
    }

    #[test]
    fn characters_outside_the_repertoire_are_replaced() {
        assert_eq!(drawable_char('é'), 'é');
        assert_eq!(drawable_char('\u{20ac}'), '\u{20ac}');
        assert_eq!(drawable_char('中'), REPLACEMENT_CHAR);
        assert_eq!(drawable_char('\t'), REPLACEMENT_CHAR);
        assert_eq!(
            Font::Helvetica.text_width("中", 1000.0),
            Font::Helvetica.text_width("?", 1000.0)
        );
    }

    #[test]
    fn very_long_lines_do_not_overflow() {
        // 4.3M of the widest glyph exceeds u32::MAX thousandths of an em.
        let line = "@".repeat(4_300_000);
        let width = Font::Helvetica.text_width(&line, 1.0);
        assert!(width.is_finite());
        assert!((width - 4_300_000.0 * 1.015).abs() / width < 1e-4);
    }
}
