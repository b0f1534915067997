//! Moin Design Tokens
//!
//! A design token resolution engine: a handful of seed values expand into
//! color palettes, a flat set of global tokens and per-component token
//! records, for a light or dark color scheme.
//!
//! # Overview
//!
//! - **Palettes**: 10-level color scales generated from one seed color
//! - **Seed tokens**: the user-editable inputs ([`SeedToken`])
//! - **Global tokens**: semantic values resolved from the seed ([`GlobalToken`])
//! - **Component tokens**: per-widget values derived from the global tokens
//! - **Token store**: overrides, theme mode, snapshots and change subscriptions
//!
//! # Quick Start
//!
//! ```rust
//! use moin_tokens::{ComponentFamily, FixedAppearance, SeedField, ThemeMode, TokenStore};
//! use moin_tokens::{ColorScheme, PresetColor};
//!
//! let mut store = TokenStore::new(FixedAppearance(ColorScheme::Light));
//! store
//!     .set_seed_field(SeedField::ColorPrimary, PresetColor::Purple.color())
//!     .unwrap();
//! store.set_theme(ThemeMode::Dark);
//!
//! let snapshot = store.snapshot();
//! let button = snapshot.component(ComponentFamily::Button);
//! assert_eq!(button.color("primary_color"), Some(snapshot.global.color_primary));
//! ```
//!
//! # Cascade
//!
//! Every mutation re-resolves the affected layers and publishes one
//! complete [`TokenSnapshot`]:
//!
//! - **Seed and theme changes** re-run the whole cascade
//! - **Global overrides** re-derive only the component fields that read them
//! - **Component overrides** replace a single field
//!
//! Overrides survive seed and theme changes until reset.
//!
//! # Features
//!
//! - `system-appearance`: detect the OS color scheme and poll it for changes
//!   with [`SystemSchemeWatcher`]

pub mod color;
pub mod components;
pub mod config;
pub mod error;
pub mod palette;
pub mod path;
pub mod platform;
pub mod presets;
pub mod store;
pub mod theme;
pub mod tokens;

#[cfg(feature = "system-appearance")]
pub mod watcher;

// Re-export commonly used types
pub use color::{Color, Hsv};
pub use components::{
    ComponentFamily, ComponentField, ComponentToken, ComponentTokens, Derivation, Rule,
};
pub use config::{ConfigError, ThemeConfig};
pub use error::{Result, TokenError};
pub use palette::{ColorPalette, BASE_LEVEL, PALETTE_LEVELS};
pub use path::TokenPath;
pub use platform::{
    detect_system_color_scheme, AppearanceNotifier, AppearanceSource, FixedAppearance,
    SharedAppearance,
};
pub use presets::PresetColor;
pub use store::{SubscriptionId, TokenSnapshot, TokenStore};
pub use theme::{effective_scheme, ColorScheme, ThemeMode};
pub use tokens::*;

#[cfg(feature = "system-appearance")]
pub use platform::SystemAppearance;
#[cfg(feature = "system-appearance")]
pub use watcher::{SystemSchemeWatcher, WatcherConfig};
