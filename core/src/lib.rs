//! libvoynich-core
//!
//! Bidirectional, rule-driven substitution over symbol strings, built for
//! manuscript transliteration systems: given an ordered table mapping tokens
//! of one alphabet to tokens of another, it rewrites text token by token,
//! longest matching pattern first, while spacing and punctuation survive the
//! rewrite unchanged.
//!
//! Public API:
//! - `Translator` - line-oriented prepare → substitute → emit pipeline
//! - `RuleTable` / `Rule` / `Direction` - compiled token→token rules
//! - `LineBuffer` - synchronized per-line working buffer
//! - `table_file` - `#=BIT` rule-file loading and export
//! - `Config` - configuration and feature flags
//! - `Error` - typed failures from table building and rule-file I/O

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::Error;

pub mod rules;
pub use rules::{Direction, Rule, RuleTable};

pub mod line;
pub use line::{LineBuffer, NOT_SEPARATOR};

pub mod prepare;
pub use prepare::prepare_line;

pub mod engine;

pub mod emit;
pub use emit::emit_line;

pub mod translator;
pub use translator::Translator;

pub mod table_file;

/// Configuration for translators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Translation direction applied by translators built from this config.
    pub direction: Direction,

    /// Placeholder standing in for spaces and punctuation while matching.
    /// Must be a character that never occurs in normal transliterated text.
    pub separator_placeholder: char,

    /// Report input characters that no rule consumed. Diagnostic only;
    /// never changes translation output.
    pub strict: bool,

    /// Maximum number of entries in the line → output cache.
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            direction: Direction::Forward,
            separator_placeholder: '#',
            strict: false,
            max_cache_size: 1000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
