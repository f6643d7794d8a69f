//! Evaluator configuration
//!
//! Settings can be built in code or loaded from a TOML file. Every field has a
//! default, so an empty file is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

/// Note tag that carries an object's trigger annotation by default
pub const DEFAULT_NOTE_TAG: &str = "TriggerDistance";

/// Settings for `TriggerEvaluator`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Note tag holding the trigger annotation (e.g. `<TriggerDistance: r3>`)
    #[serde(default = "default_note_tag")]
    pub note_tag: String,

    /// Plain tile-overlap objects don't fire while flying an airship
    #[serde(default = "default_true")]
    pub airship_skips_ground_events: bool,
}

fn default_note_tag() -> String {
    DEFAULT_NOTE_TAG.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            note_tag: default_note_tag(),
            airship_skips_ground_events: true,
        }
    }
}

impl EvaluatorConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded evaluator config from {}", path.display());
        Ok(config)
    }

    /// Use a different note tag
    pub fn with_note_tag(mut self, tag: impl Into<String>) -> Self {
        self.note_tag = tag.into();
        self
    }

    /// Turn the airship ground exclusion on or off
    pub fn with_airship_exclusion(mut self, enabled: bool) -> Self {
        self.airship_skips_ground_events = enabled;
        self
    }
}
