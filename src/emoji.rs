// SPDX-License-Identifier: PMPL-1.0-or-later

//! Flag emoji derived from alpha-2 codes.
//!
//! A flag is the pair of Unicode regional indicator symbols matching the two
//! letters of the code: `A` maps to U+1F1E6 and so on through `Z` at U+1F1FF.
//! Renderers that know the pair draw a flag; the rest show two boxed letters.

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Regional indicator symbol for a single ASCII letter.
pub fn regional_indicator(letter: char) -> Option<char> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let offset = letter.to_ascii_uppercase() as u32 - 'A' as u32;
    char::from_u32(REGIONAL_INDICATOR_A + offset)
}

/// Flag glyph for an alpha-2 code.
///
/// Returns `None` unless `alpha2` is exactly two ASCII letters.
///
/// # Examples
/// ```
/// assert_eq!(country_data::emoji::flag("FI").as_deref(), Some("\u{1F1EB}\u{1F1EE}"));
/// assert_eq!(country_data::emoji::flag("FIN"), None);
/// ```
pub fn flag(alpha2: &str) -> Option<String> {
    let mut chars = alpha2.chars();
    let (first, second) = match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => return None,
    };
    let mut glyph = String::with_capacity(8);
    glyph.push(regional_indicator(first)?);
    glyph.push(regional_indicator(second)?);
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finland_flag_matches_utf16_surrogates() {
        let glyph = flag("FI").unwrap();
        let units: Vec<u16> = glyph.encode_utf16().collect();
        assert_eq!(units, vec![55356, 56811, 55356, 56814]);
    }

    #[test]
    fn lowercase_is_accepted() {
        assert_eq!(flag("fi"), flag("FI"));
    }

    #[test]
    fn malformed_codes_have_no_flag() {
        assert_eq!(flag(""), None);
        assert_eq!(flag("F"), None);
        assert_eq!(flag("FIN"), None);
        assert_eq!(flag("F1"), None);
        assert_eq!(flag("ÅÄ"), None);
    }

    #[test]
    fn indicator_range_is_contiguous() {
        assert_eq!(regional_indicator('A'), Some('\u{1F1E6}'));
        assert_eq!(regional_indicator('Z'), Some('\u{1F1FF}'));
        assert_eq!(regional_indicator('1'), None);
    }
}
