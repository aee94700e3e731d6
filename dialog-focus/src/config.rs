//! Dialog configuration and attribute pass-through
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_Z_INDEX: i32 = 2400;
pub const DEFAULT_ORIGIN: &str = "center center";
pub const DEFAULT_TRANSITION: &str = "dialog-transition";

/// How background scrolling is handled while a dialog is open. Opaque to the focus logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollStrategy {
    None,
    Close,
    #[default]
    Block,
    Reposition,
}

impl ScrollStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Close => "close",
            Self::Block => "block",
            Self::Reposition => "reposition",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogConfig {
    #[serde(default = "default_true")]
    pub retain_focus: bool,
    #[serde(default)]
    pub model_value: bool,
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default)]
    pub scrollable: bool,
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_z_index")]
    pub z_index: i32,
    #[serde(default)]
    pub scroll_strategy: ScrollStrategy,
    #[serde(default = "default_transition")]
    pub transition: String,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            retain_focus: true,
            model_value: false,
            fullscreen: false,
            scrollable: false,
            origin: default_origin(),
            z_index: DEFAULT_Z_INDEX,
            scroll_strategy: ScrollStrategy::default(),
            transition: default_transition(),
        }
    }
}

impl DialogConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the origin is blank.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyOrigin`] when the origin has no position tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.origin.split_whitespace().next().is_none() {
            return Err(ConfigError::EmptyOrigin);
        }
        Ok(())
    }

    /// Class list for the dialog content wrapper.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["dialog"];
        if self.fullscreen {
            classes.push("dialog--fullscreen");
        }
        if self.scrollable {
            classes.push("dialog--scrollable");
        }
        classes
    }
}

/// ARIA attributes for the dialog content element.
#[must_use]
pub const fn content_aria() -> [(&'static str, &'static str); 2] {
    [("role", "dialog"), ("aria-modal", "true")]
}

/// ARIA attributes for the activator; `aria-expanded` mirrors the activation flag.
#[must_use]
pub const fn activator_aria(is_active: bool) -> [(&'static str, &'static str); 2] {
    [
        ("aria-haspopup", "dialog"),
        ("aria-expanded", if is_active { "true" } else { "false" }),
    ]
}

fn default_true() -> bool {
    true
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_z_index() -> i32 {
    DEFAULT_Z_INDEX
}

fn default_transition() -> String {
    DEFAULT_TRANSITION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = DialogConfig::from_json("{}").expect("defaults");
        assert_eq!(config, DialogConfig::default());
        assert!(config.retain_focus);
        assert_eq!(config.z_index, 2400);
        assert_eq!(config.scroll_strategy, ScrollStrategy::Block);
    }

    #[test]
    fn fields_override_defaults() {
        let config = DialogConfig::from_json(
            r#"{"retain_focus":false,"fullscreen":true,"scroll_strategy":"reposition","z_index":10}"#,
        )
        .expect("parse");
        assert!(!config.retain_focus);
        assert_eq!(config.scroll_strategy.as_str(), "reposition");
        assert_eq!(config.z_index, 10);
        assert_eq!(config.classes(), vec!["dialog", "dialog--fullscreen"]);
    }

    #[test]
    fn blank_origin_is_rejected() {
        let err = DialogConfig::from_json(r#"{"origin":"   "}"#).expect_err("blank origin");
        assert!(matches!(err, ConfigError::EmptyOrigin));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = DialogConfig::from_json("{").expect_err("malformed");
        assert!(format!("{err}").contains("JSON parsing error"));
    }

    #[test]
    fn activator_aria_reflects_state() {
        assert_eq!(activator_aria(true)[1], ("aria-expanded", "true"));
        assert_eq!(activator_aria(false)[1], ("aria-expanded", "false"));
        assert_eq!(content_aria()[1], ("aria-modal", "true"));
    }
}
