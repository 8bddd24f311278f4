// Tue Jan 13 2026 - Alex

//! Parser for hex byte patterns with per-nibble wildcards.
//!
//! Valid patterns:
//!
//! ```text
//! AA BB CC DD
//! AABBCCDD
//! aabb CCdd
//! A? ?B ?? DD
//! ```
//!
//! Each unit is a high nibble (hex digit or `?`) followed directly by a low
//! nibble. If the high nibble is followed by `?`, whitespace or the end of
//! the input, the low nibble is a wildcard, so `A` reads as `A?`. Whitespace
//! between units is ignored.
//!
//! Known edge case: empty or whitespace-only input is not rejected. It parses
//! to a zero-length pattern, which matches at every in-bounds offset.

use crate::pattern::error::PatternError;
use crate::pattern::nibble::Nibble;
use crate::pattern::pattern::BytePattern;
use crate::pattern::unit::MatchUnit;
use log::{debug, trace};
use std::iter::Enumerate;
use std::str::Chars;

pub fn parse(text: &str) -> Result<BytePattern, PatternError> {
    let mut parser = PatternParser::new(text);
    let mut units = Vec::new();

    loop {
        match parser.read_unit() {
            Ok(Some(unit)) => {
                trace!("unit {}: {}", units.len(), unit);
                units.push(unit);
            }
            Ok(None) => break,
            Err(e) => {
                debug!("rejected pattern {:?}: {}", text, e);
                return Err(e);
            }
        }
    }

    if units.is_empty() {
        debug!("pattern {:?} contains no units", text);
    } else {
        debug!("parsed pattern {:?} into {} units", text, units.len());
    }

    Ok(BytePattern::from_units(units))
}

struct PatternParser<'a> {
    chars: Enumerate<Chars<'a>>,
}

impl<'a> PatternParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().enumerate(),
        }
    }

    fn next_non_whitespace(&mut self) -> Option<(usize, char)> {
        self.chars.find(|(_, c)| !c.is_whitespace())
    }

    /// Reads the next unit, or `None` once only whitespace remains.
    fn read_unit(&mut self) -> Result<Option<MatchUnit>, PatternError> {
        let (position, c) = match self.next_non_whitespace() {
            Some(next) => next,
            None => return Ok(None),
        };

        let high = Nibble::from_pattern_char(c)
            .ok_or(PatternError::UnexpectedCharacter { position, found: c })?;

        let low = match self.chars.next() {
            None => Nibble::ANY,
            Some((_, c)) if c == '?' || c.is_whitespace() => Nibble::ANY,
            Some((position, c)) => Nibble::from_hex_char(c)
                .ok_or(PatternError::UnexpectedCharacter { position, found: c })?,
        };

        Ok(Some(MatchUnit::new(high, low)))
    }
}
