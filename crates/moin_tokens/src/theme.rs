//! Theme mode selection and color scheme resolution

use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Concrete color scheme the tokens are resolved for
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// User-facing theme selection
///
/// `System` follows the operating system appearance. It is only ever
/// inspected by [`effective_scheme`]; everything downstream sees a
/// [`ColorScheme`].
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    #[serde(alias = "follow_system", alias = "followSystem")]
    System,
}

impl ThemeMode {
    /// Stable id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "Follow System",
        }
    }

    /// Full mode list.
    pub fn all() -> &'static [ThemeMode] {
        const MODES: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];
        &MODES
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemeMode {
    type Err = crate::TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|mode| crate::tokens::names_match(mode.id(), s))
            .or_else(|| crate::tokens::names_match("followSystem", s).then_some(Self::System))
            .ok_or_else(|| crate::TokenError::UnknownThemeMode(s.to_string()))
    }
}

/// Resolve the scheme tokens should be generated for.
///
/// Explicit selections win; `System` defers to the OS appearance.
pub fn effective_scheme(mode: ThemeMode, os_scheme: ColorScheme) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::Light,
        ThemeMode::Dark => ColorScheme::Dark,
        ThemeMode::System => os_scheme,
    }
}
