//! libviet-core
//!
//! Vietnamese syllable-composition engine shared by input-method front-ends
//! (telex, vni). Given the vowel cluster of the syllable being composed, the
//! tone to apply and the consonant context, it decides whether the cluster
//! is phonotactically legal, which vowel anchors the tone mark, and how the
//! resulting letter renders in the selected text encoding.
//!
//! The engine is purely functional: the rule tables are built once and
//! shared read-only, no call blocks or performs I/O, and every input
//! combination has a defined result. Keystroke interception, the undo
//! buffer and all OS integration live in the front-end crates.
//!
//! Public API:
//! - `Tone`, `Vowel`, `Consonant` - the closed phoneme enumerations
//! - `VowelSequence`, `VnChar` - composite value types
//! - `validator` - cluster validity and the tone-anchor algorithm
//! - `charset` - rendering into Unicode or legacy code tables
//! - `Composer` - config-aware facade over the above
//! - `Config` - user preferences (orthography style, code table)

use serde::{Deserialize, Serialize};

pub mod phoneme;
pub use phoneme::{Consonant, Tone, Vowel};

pub mod character;
pub use character::{ParseVowelSequenceError, VnChar, VowelSequence};

pub mod validator;
pub use validator::ToneContext;

pub mod charset;
pub use charset::CodeTable;

pub mod composer;
pub use composer::Composer;

/// User preferences consumed by the composition engine.
///
/// Front-end concerns (hotkeys, per-application toggles, clipboard
/// behavior) do not belong here; this config carries only what changes the
/// engine's output.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Modern oa/oe/uy tone placement ("hoán" convention) when a trailing
    /// consonant is present.
    pub modern_style: bool,

    /// Target text encoding for rendered characters.
    pub code_table: CodeTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modern_style: false,
            code_table: CodeTable::Unicode,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_traditional_unicode() {
        let config = Config::default();
        assert!(!config.modern_style);
        assert_eq!(config.code_table, CodeTable::Unicode);
    }

    #[test]
    fn config_toml_round_trip() {
        let config = Config {
            modern_style: true,
            code_table: CodeTable::VniWindows,
        };
        let text = config.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert!(back.modern_style);
        assert_eq!(back.code_table, CodeTable::VniWindows);
    }

    #[test]
    fn config_code_table_spelling() {
        let text = "modern_style = false\ncode_table = \"unicode-compound\"\n";
        let config = Config::from_toml_str(text).unwrap();
        assert_eq!(config.code_table, CodeTable::UnicodeCompound);
    }
}
