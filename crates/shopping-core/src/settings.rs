//! Form Settings
//!
//! Opt-in switches for how the item dialog behaves. Both default to off,
//! which keeps the dialog's historical behavior.

use serde::{Deserialize, Serialize};

/// Dialog behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Copy the target's name and quantity into the inputs when editing
    pub prefill_on_edit: bool,
    /// Reset inputs, mode and target on cancel instead of only hiding
    pub clear_on_cancel: bool,
}

impl FormSettings {
    /// Parse settings from JSON. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        serde_json::from_str(json).map_err(|e| SettingsError::InvalidJson(e.to_string()))
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings loading errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    InvalidJson(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::InvalidJson(msg) => write!(f, "Invalid settings JSON: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}
