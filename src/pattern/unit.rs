// Tue Jan 13 2026 - Alex

use crate::pattern::error::PatternError;
use crate::pattern::nibble::Nibble;
use std::fmt;

/// Match rule for one byte position, wildcardable per nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchUnit {
    high: Nibble,
    low: Nibble,
}

impl MatchUnit {
    pub const ANY: Self = Self::new(Nibble::ANY, Nibble::ANY);

    pub const fn new(high: Nibble, low: Nibble) -> Self {
        Self { high, low }
    }

    pub const fn exact(byte: u8) -> Self {
        Self {
            high: Nibble::fixed(byte >> 4),
            low: Nibble::fixed(byte),
        }
    }

    pub fn high(&self) -> Nibble {
        self.high
    }

    pub fn low(&self) -> Nibble {
        self.low
    }

    pub fn has_wildcard(&self) -> bool {
        self.high.is_wildcard() || self.low.is_wildcard()
    }

    pub fn matches(&self, byte: u8) -> bool {
        self.high.matches((byte >> 4) & 0xF) && self.low.matches(byte & 0xF)
    }

    /// Concrete byte value; fails if either nibble is a wildcard.
    pub fn value(&self) -> Result<u8, PatternError> {
        match (self.high.value(), self.low.value()) {
            (Some(h), Some(l)) => Ok((h << 4) | l),
            _ => Err(PatternError::WildcardUnit),
        }
    }

    /// Bit mask of the fixed nibbles, e.g. `A?` -> 0xF0.
    pub fn mask(&self) -> u8 {
        (self.high.mask() << 4) | self.low.mask()
    }

    /// Fixed nibbles with wildcards zeroed, so `(b & mask) == masked_value`.
    pub fn masked_value(&self) -> u8 {
        (self.high.value().unwrap_or(0) << 4) | self.low.value().unwrap_or(0)
    }

    pub fn to_hex(&self, lowercase: bool) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.high.to_char(lowercase));
        s.push(self.low.to_char(lowercase));
        s
    }
}

impl From<u8> for MatchUnit {
    fn from(byte: u8) -> Self {
        Self::exact(byte)
    }
}

impl fmt::Display for MatchUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)
    }
}
