// Tue Jan 13 2026 - Alex

pub mod builder;
pub mod error;
pub mod nibble;
pub mod parser;
pub mod pattern;
pub mod unit;

pub use builder::PatternBuilder;
pub use error::PatternError;
pub use nibble::Nibble;
pub use parser::parse;
pub use pattern::BytePattern;
pub use unit::MatchUnit;
