// Tue Jan 13 2026 - Alex

pub mod config;
pub mod pattern;
pub mod utils;

pub use config::Config;
pub use pattern::{BytePattern, MatchUnit, Nibble, PatternBuilder, PatternError};
