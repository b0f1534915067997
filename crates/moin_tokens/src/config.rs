//! Theme configuration file handling
//!
//! A theme file selects the mode, edits seed fields and pins overrides:
//!
//! ```toml
//! mode = "system"
//!
//! [seed]
//! color_primary = "#722ed1"
//! border_radius = 4
//!
//! [overrides.global]
//! color_bg_layout = "#fafafa"
//!
//! [overrides.badge]
//! dot_size = 12
//! ```
//!
//! Colors are hex strings or preset names such as `"purple"`.

use crate::color::Color;
use crate::error::TokenError;
use crate::path::TokenPath;
use crate::presets::PresetColor;
use crate::theme::ThemeMode;
use crate::tokens::{SeedField, SeedToken, TokenKind, TokenValue};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a theme file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{path}`: {reason}")]
    InvalidValue { path: String, reason: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Contents of a theme file
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
    /// Seed field name to value
    #[serde(default)]
    pub seed: BTreeMap<String, toml::Value>,
    /// Layer (`global` or a component family id), then field name to value
    #[serde(default)]
    pub overrides: BTreeMap<String, BTreeMap<String, toml::Value>>,
}

impl ThemeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            "loaded theme config from {} ({} seed fields, {} override layers)",
            path.display(),
            config.seed.len(),
            config.overrides.len()
        );
        Ok(config)
    }

    /// Write the `[seed]` table into `seed`, then clamp it.
    pub fn apply_seed(&self, seed: &mut SeedToken) -> Result<(), ConfigError> {
        for (name, raw) in &self.seed {
            let field: SeedField = name.parse()?;
            let value = convert(&format!("seed.{name}"), field.kind(), raw)?;
            seed.set(field, value)?;
        }
        seed.sanitize();
        Ok(())
    }

    /// Resolve the `[overrides]` tables into typed paths.
    pub fn overrides(&self) -> Result<Vec<(TokenPath, TokenValue)>, ConfigError> {
        let mut resolved = Vec::new();
        for (layer, fields) in &self.overrides {
            for (name, raw) in fields {
                let path: TokenPath = format!("{layer}.{name}").parse()?;
                if let TokenPath::Seed(_) = path {
                    return Err(ConfigError::InvalidValue {
                        path: path.to_string(),
                        reason: "seed fields belong in the [seed] table".into(),
                    });
                }
                let value = convert(&path.to_string(), path.kind(), raw)?;
                resolved.push((path, value));
            }
        }
        Ok(resolved)
    }
}

/// Convert a TOML value into a token value of `kind`.
fn convert(path: &str, kind: TokenKind, raw: &toml::Value) -> Result<TokenValue, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        path: path.to_string(),
        reason,
    };

    let value = match (kind, raw) {
        (TokenKind::Color, toml::Value::String(text)) => Color::parse_hex(text)
            .or_else(|| PresetColor::from_id(text).map(PresetColor::color))
            .map(TokenValue::Color)
            .ok_or_else(|| invalid(format!("`{text}` is neither a hex color nor a preset")))?,
        (TokenKind::Number, toml::Value::Float(n)) => TokenValue::Number(*n as f32),
        (TokenKind::Number, toml::Value::Integer(n)) => TokenValue::Number(*n as f32),
        (TokenKind::Integer, toml::Value::Integer(n)) => i32::try_from(*n)
            .map(TokenValue::Integer)
            .map_err(|_| invalid(format!("{n} is out of range")))?,
        (TokenKind::Integer, toml::Value::Float(n)) if n.fract() == 0.0 => {
            TokenValue::Integer(*n as i32)
        }
        (TokenKind::Flag, toml::Value::Boolean(b)) => TokenValue::Flag(*b),
        (TokenKind::Text, toml::Value::String(text)) => TokenValue::Text(Cow::Owned(text.clone())),
        (TokenKind::LineType, toml::Value::String(text)) => text
            .parse()
            .map(TokenValue::LineType)
            .map_err(|_| invalid(format!("unknown line type `{text}`")))?,
        (TokenKind::Ease, toml::Value::String(text)) => text
            .parse()
            .map(TokenValue::Ease)
            .map_err(|_| invalid(format!("unknown easing `{text}`")))?,
        (kind, other) => {
            return Err(invalid(format!(
                "expected {kind}, found {}",
                other.type_str()
            )))
        }
    };
    Ok(value)
}
