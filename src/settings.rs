// Chunk: docs/chunks/plugin_settings - Persisted plugin settings

//! Plugin settings, stored by the host as a JSON blob.
//!
//! Every field has a default, so an empty object (or a blob written by an
//! older version with fewer fields) loads cleanly. Unknown fields are ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use hue_mark_color::DigestKind;
use hue_mark_decor::{TintConfig, DEFAULT_MARK_CLASS};

/// Errors from loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0:?} is not a usable CSS class name")]
    InvalidMarkClass(String),
}

/// User-facing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    /// Digest feeding the hue reduction. Changing it recolors every highlight.
    pub digest: DigestKind,
    /// Also tint the `==` delimiters in the editor.
    pub tint_delimiters: bool,
    /// CSS class put on tinted marks in the editor.
    pub mark_class: String,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            digest: DigestKind::default(),
            tint_delimiters: false,
            mark_class: DEFAULT_MARK_CLASS.to_string(),
        }
    }
}

impl HighlightSettings {
    /// Parses and validates a settings blob.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: HighlightSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads a settings blob, falling back to defaults if it is unusable.
    ///
    /// A missing or corrupt blob must never keep the plugin from loading.
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if is_class_name(&self.mark_class) {
            Ok(())
        } else {
            Err(SettingsError::InvalidMarkClass(self.mark_class.clone()))
        }
    }

    /// The decorator's view of these settings.
    pub fn tint_config(&self) -> TintConfig {
        TintConfig {
            digest: self.digest,
            mark_class: self.mark_class.clone(),
            tint_delimiters: self.tint_delimiters,
        }
    }
}

/// ASCII letters, digits, `-` and `_`, not starting with a digit.
fn is_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '-' || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
