// Tue Jan 13 2026 - Alex

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub verbosity: u8,
    pub use_color: bool,
    pub lowercase_hex: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbosity: 0,
            use_color: true,
            lowercase_hex: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_lowercase_hex(mut self, lowercase: bool) -> Self {
        self.lowercase_hex = lowercase;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.verbosity > 3 {
            return Err("verbosity must be between 0 and 3".to_string());
        }
        Ok(())
    }
}
