// Tue Jan 13 2026 - Alex

use std::fmt;

/// Match rule for one half of a byte. A fixed value is always in `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nibble(Option<u8>);

impl Nibble {
    pub const ANY: Self = Self(None);

    /// Builds a fixed nibble, keeping only the low four bits of `value`.
    pub const fn fixed(value: u8) -> Self {
        Self(Some(value & 0xF))
    }

    pub fn from_hex_char(c: char) -> Option<Self> {
        c.to_digit(16).map(|d| Self::fixed(d as u8))
    }

    /// Parses a pattern character: `?` or a hex digit in either case.
    pub fn from_pattern_char(c: char) -> Option<Self> {
        if c == '?' {
            Some(Self::ANY)
        } else {
            Self::from_hex_char(c)
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.is_none()
    }

    pub fn matches(&self, nibble: u8) -> bool {
        match self.0 {
            None => true,
            Some(v) => v == nibble & 0xF,
        }
    }

    pub fn value(&self) -> Option<u8> {
        self.0
    }

    /// 0xF for a fixed nibble, 0x0 for a wildcard.
    pub fn mask(&self) -> u8 {
        match self.0 {
            None => 0x0,
            Some(_) => 0xF,
        }
    }

    pub fn to_char(&self, lowercase: bool) -> char {
        match self.0 {
            None => '?',
            Some(v) => {
                let c = char::from_digit(v as u32, 16).unwrap_or('?');
                if lowercase {
                    c
                } else {
                    c.to_ascii_uppercase()
                }
            }
        }
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_matches_everything() {
        for n in 0..16u8 {
            assert!(Nibble::ANY.matches(n));
        }
    }

    #[test]
    fn test_fixed_matches_only_itself() {
        let nibble = Nibble::fixed(0xA);
        assert!(nibble.matches(0xA));
        assert!(!nibble.matches(0xB));
    }

    #[test]
    fn test_fixed_truncates_to_four_bits() {
        let nibble = Nibble::fixed(0x1F);
        assert_eq!(nibble, Nibble::fixed(0xF));
        assert_eq!(nibble.value(), Some(0xF));
        assert!(nibble.matches(0xF));
        assert_eq!(nibble.to_char(false), 'F');
    }

    #[test]
    fn test_pattern_char() {
        assert_eq!(Nibble::from_pattern_char('?'), Some(Nibble::ANY));
        assert_eq!(Nibble::from_pattern_char('c'), Some(Nibble::fixed(0xC)));
        assert_eq!(Nibble::from_pattern_char('C'), Some(Nibble::fixed(0xC)));
        assert_eq!(Nibble::from_pattern_char('g'), None);
        assert_eq!(Nibble::from_pattern_char(' '), None);
    }

    #[test]
    fn test_to_char() {
        assert_eq!(Nibble::fixed(0xB).to_char(false), 'B');
        assert_eq!(Nibble::fixed(0xB).to_char(true), 'b');
        assert_eq!(Nibble::ANY.to_char(true), '?');
    }
}
