//! Line breaking configuration
//!
//! Every field has a default matching stock paper settings (distances in
//! staff spaces), so a config file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BreakingConfig {
    /// Set every line at its natural width
    pub ragged_right: bool,
    /// Set the last line at its natural width
    pub ragged_last: bool,

    /// Preferred distance between consecutive systems
    pub system_system_space: f64,
    /// Minimum distance between consecutive systems
    pub system_system_min_distance: f64,
    /// Minimum clearance between the outlines of consecutive systems
    pub system_system_padding: f64,

    /// Preferred distance from a system to a following title
    pub score_markup_space: f64,
    pub score_markup_min_distance: f64,
    pub score_markup_padding: f64,

    /// Clearance below the last system of a page
    pub last_bottom_padding: f64,
}

impl Default for BreakingConfig {
    fn default() -> Self {
        Self {
            ragged_right: false,
            ragged_last: false,
            system_system_space: 12.0,
            system_system_min_distance: 8.0,
            system_system_padding: 1.0,
            score_markup_space: 12.0,
            score_markup_min_distance: 0.0,
            score_markup_padding: 0.5,
            last_bottom_padding: 1.0,
        }
    }
}

impl BreakingConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
