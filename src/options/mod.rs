//! Centralized framing/turntable options with TOML preset support.
//!
//! All tweakable settings (framing, render resolution, turntable tuning,
//! exclusion rules, named views) are consolidated here. Options serialize
//! to/from TOML for studio presets.

mod exclusion;
mod framing;
mod render;
mod turntable;
mod views;

use std::path::Path;

pub use exclusion::ExclusionOptions;
pub use framing::{clamp_margin, FramingOptions, MAX_MARGIN, MIN_MARGIN};
pub use render::RenderOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use turntable::{RandomTuning, TurntableOptions};
pub use views::{ViewPreset, ViewTable, MAIN_VIEW};

use crate::error::StudioError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[framing]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Auto-framing parameters.
    pub framing: FramingOptions,
    /// Output resolution.
    pub render: RenderOptions,
    /// Turntable synthesis tuning.
    pub turntable: TurntableOptions,
    /// Framing exclusion rules.
    pub exclusion: ExclusionOptions,
    /// Named studio viewpoints.
    #[schemars(skip)]
    pub views: ViewTable,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StudioError> {
        let content = std::fs::read_to_string(path).map_err(StudioError::Io)?;
        toml::from_str(&content)
            .map_err(|e| StudioError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StudioError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StudioError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StudioError::Io)?;
        }
        std::fs::write(path, content).map_err(StudioError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
