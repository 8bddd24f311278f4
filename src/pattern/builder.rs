// Tue Jan 13 2026 - Alex

use crate::pattern::nibble::Nibble;
use crate::pattern::pattern::BytePattern;
use crate::pattern::unit::MatchUnit;

pub struct PatternBuilder {
    units: Vec<MatchUnit>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    pub fn byte(mut self, b: u8) -> Self {
        self.units.push(MatchUnit::exact(b));
        self
    }

    pub fn bytes(mut self, bs: &[u8]) -> Self {
        self.units.extend(bs.iter().map(|&b| MatchUnit::exact(b)));
        self
    }

    pub fn wildcard(mut self) -> Self {
        self.units.push(MatchUnit::ANY);
        self
    }

    pub fn wildcards(mut self, count: usize) -> Self {
        self.units.extend(std::iter::repeat(MatchUnit::ANY).take(count));
        self
    }

    /// Fixes the high nibble, e.g. `high(0xA)` is `A?`.
    pub fn high(mut self, nibble: u8) -> Self {
        self.units.push(MatchUnit::new(Nibble::fixed(nibble), Nibble::ANY));
        self
    }

    /// Fixes the low nibble, e.g. `low(0xB)` is `?B`.
    pub fn low(mut self, nibble: u8) -> Self {
        self.units.push(MatchUnit::new(Nibble::ANY, Nibble::fixed(nibble)));
        self
    }

    pub fn unit(mut self, unit: MatchUnit) -> Self {
        self.units.push(unit);
        self
    }

    pub fn build(self) -> BytePattern {
        BytePattern::from_units(self.units)
    }
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}
