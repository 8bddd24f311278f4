// Tue Jan 13 2026 - Alex

use crate::pattern::error::PatternError;
use crate::pattern::parser;
use crate::pattern::unit::MatchUnit;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A compiled byte pattern. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BytePattern {
    units: Vec<MatchUnit>,
    has_wildcards: bool,
}

impl BytePattern {
    /// Parses a hex pattern such as `A? ?B ?? DD`. See [`parser`] for the grammar.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        parser::parse(text)
    }

    pub fn from_units(units: Vec<MatchUnit>) -> Self {
        let has_wildcards = units.iter().any(MatchUnit::has_wildcard);
        Self {
            units,
            has_wildcards,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_units(bytes.iter().map(|&b| MatchUnit::exact(b)).collect())
    }

    /// Length of the pattern in bytes.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn has_wildcards(&self) -> bool {
        self.has_wildcards
    }

    pub fn units(&self) -> &[MatchUnit] {
        &self.units
    }

    pub fn wildcard_count(&self) -> usize {
        self.units.iter().filter(|u| u.has_wildcard()).count()
    }

    /// Tests the pattern against `data` starting at `offset`.
    ///
    /// The caller must ensure `offset + self.len() <= data.len()`.
    ///
    /// # Panics
    ///
    /// Panics if the pattern runs past the end of `data`.
    pub fn matches_at(&self, data: &[u8], offset: usize) -> bool {
        let window = &data[offset..offset + self.units.len()];
        self.units
            .iter()
            .zip(window)
            .all(|(unit, &byte)| unit.matches(byte))
    }

    /// Tests the pattern against the start of `data`, returning false if
    /// `data` is too short.
    pub fn matches(&self, data: &[u8]) -> bool {
        data.len() >= self.units.len() && self.matches_at(data, 0)
    }

    /// Converts the pattern to its literal bytes. Fails if any unit has a
    /// wildcard; check [`has_wildcards`](Self::has_wildcards) first.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PatternError> {
        self.units
            .iter()
            .enumerate()
            .map(|(index, unit)| {
                unit.value()
                    .map_err(|_| PatternError::ContainsWildcards { index })
            })
            .collect()
    }

    /// Per-byte masks of the fixed nibbles (0xFF fixed, 0x00 wildcard).
    pub fn mask(&self) -> Vec<u8> {
        self.units.iter().map(MatchUnit::mask).collect()
    }

    /// Per-byte values with wildcard nibbles zeroed, paired with [`mask`](Self::mask).
    pub fn values(&self) -> Vec<u8> {
        self.units.iter().map(MatchUnit::masked_value).collect()
    }

    pub fn to_hex_string(&self, lowercase: bool) -> String {
        self.units
            .iter()
            .map(|u| u.to_hex(lowercase))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for BytePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string(false))
    }
}

impl FromStr for BytePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl From<&[u8]> for BytePattern {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl Serialize for BytePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BytePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parser::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matches_at_nibble_wildcards() {
        let pattern = BytePattern::parse("A? ?B ?? DD").unwrap();
        assert_eq!(pattern.len(), 4);
        assert!(pattern.matches_at(&[0xA5, 0xCB, 0x99, 0xDD], 0));
        assert!(!pattern.matches_at(&[0xA5, 0xCB, 0x99, 0xDE], 0));
    }

    #[test]
    fn test_matches_at_offset() {
        let pattern = BytePattern::parse("48 8B ?? 89").unwrap();
        let data = [0x90, 0x90, 0x48, 0x8B, 0x05, 0x89, 0xC3];
        assert!(pattern.matches_at(&data, 2));
        assert!(!pattern.matches_at(&data, 1));
        assert!(!pattern.matches_at(&data, 3));
    }

    #[test]
    #[should_panic]
    fn test_matches_at_out_of_bounds_panics() {
        let pattern = BytePattern::parse("AA BB").unwrap();
        pattern.matches_at(&[0xAA, 0xBB], 1);
    }

    #[test]
    fn test_matches_checks_length() {
        let pattern = BytePattern::parse("AA BB").unwrap();
        assert!(pattern.matches(&[0xAA, 0xBB, 0xCC]));
        assert!(!pattern.matches(&[0xAA]));
    }

    #[test]
    fn test_empty_pattern_matches_trivially() {
        let pattern = BytePattern::parse("").unwrap();
        assert_eq!(pattern.len(), 0);
        assert!(!pattern.has_wildcards());
        assert!(pattern.matches_at(&[0x01, 0x02], 2));
        assert!(pattern.matches(&[]));
        assert_eq!(pattern.to_bytes(), Ok(Vec::new()));
    }

    #[test]
    fn test_to_bytes() {
        let pattern = BytePattern::parse("de ad BE EF 00 7f").unwrap();
        assert!(!pattern.has_wildcards());
        assert_eq!(pattern.to_bytes().unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x7F]);
    }

    #[test]
    fn test_case_insensitive() {
        let lower = BytePattern::parse("aabb").unwrap();
        let upper = BytePattern::parse("AABB").unwrap();
        assert_eq!(lower.to_bytes(), upper.to_bytes());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_to_bytes_with_wildcards_fails() {
        for text in ["AA ?B", "AA B?", "AA ??", "A"] {
            let pattern = BytePattern::parse(text).unwrap();
            assert!(pattern.has_wildcards());
            let err = pattern.to_bytes().unwrap_err();
            assert!(!err.is_format_error());
        }
        let pattern = BytePattern::parse("AA BB C? DD").unwrap();
        assert_eq!(pattern.to_bytes(), Err(PatternError::ContainsWildcards { index: 2 }));
    }

    #[test]
    fn test_wildcard_count() {
        let pattern = BytePattern::parse("A? ?B ?? DD").unwrap();
        assert_eq!(pattern.wildcard_count(), 3);
    }

    #[test]
    fn test_mask_and_values() {
        let pattern = BytePattern::parse("A? ?B ?? DD").unwrap();
        assert_eq!(pattern.mask(), vec![0xF0, 0x0F, 0x00, 0xFF]);
        assert_eq!(pattern.values(), vec![0xA0, 0x0B, 0x00, 0xDD]);
    }

    #[test]
    fn test_display_reparses() {
        let pattern = BytePattern::parse("a?  ?b??dd").unwrap();
        assert_eq!(pattern.to_string(), "A? ?B ?? DD");
        assert_eq!(pattern.to_string().parse::<BytePattern>().unwrap(), pattern);
        assert_eq!(pattern.to_hex_string(true), "a? ?b ?? dd");
    }

    #[test]
    fn test_from_bytes() {
        let pattern = BytePattern::from(&[0x48u8, 0x89, 0x5C][..]);
        assert!(!pattern.has_wildcards());
        assert_eq!(pattern, BytePattern::parse("48895C").unwrap());
    }

    #[test]
    fn test_serde_as_string() {
        let pattern = BytePattern::parse("48 8B ?5").unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "\"48 8B ?5\"");
        let back: BytePattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
        assert!(serde_json::from_str::<BytePattern>("\"ZZ\"").is_err());
    }
}
