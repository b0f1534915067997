//! Token store
//!
//! `TokenStore` owns the seed, the theme mode and the override layers, and
//! keeps a resolved [`TokenSnapshot`] in sync with them. Every mutation
//! builds a complete new snapshot before publishing it, so readers never
//! observe a half-updated cascade:
//!
//! ```text
//! seed ──► GlobalToken::resolve ──► global overrides ──► components ──► component overrides
//! ```
//!
//! Subscribers are called exactly once per published snapshot.

use crate::components::{ComponentFamily, ComponentField, ComponentToken, ComponentTokens};
use crate::config::{ConfigError, ThemeConfig};
use crate::error::{Result, TokenError};
use crate::path::TokenPath;
use crate::platform::{detect_system_color_scheme, AppearanceNotifier, AppearanceSource};
use crate::theme::{effective_scheme, ColorScheme, ThemeMode};
use crate::tokens::{GlobalField, GlobalToken, SeedField, SeedToken, TokenValue};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

new_key_type! {
    /// Handle returned by [`TokenStore::subscribe`]
    pub struct SubscriptionId;
}

/// Resolved tokens at one revision
#[derive(Clone, Debug, PartialEq)]
pub struct TokenSnapshot {
    /// Increments on every publish
    pub revision: u64,
    pub mode: ThemeMode,
    /// Scheme the tokens were resolved for
    pub scheme: ColorScheme,
    pub seed: SeedToken,
    pub global: GlobalToken,
    pub components: ComponentTokens,
}

impl TokenSnapshot {
    pub fn component(&self, family: ComponentFamily) -> &ComponentToken {
        self.components.get(family)
    }

    /// Read any token by path.
    pub fn value(&self, path: TokenPath) -> Option<TokenValue> {
        match path {
            TokenPath::Seed(field) => Some(self.seed.get(field)),
            TokenPath::Global(field) => Some(self.global.get(field)),
            TokenPath::Component(field) => {
                self.components.get(field.family()).value(field).cloned()
            }
        }
    }
}

type Subscriber = Box<dyn FnMut(&TokenSnapshot)>;

/// Single source of truth for resolved design tokens
pub struct TokenStore {
    mode: ThemeMode,
    /// Last scheme reported by the OS
    os_scheme: ColorScheme,
    seed: SeedToken,
    global_overrides: FxHashMap<GlobalField, TokenValue>,
    component_overrides: FxHashMap<ComponentField, TokenValue>,
    snapshot: Arc<TokenSnapshot>,
    appearance: Box<dyn AppearanceSource>,
    appearance_tx: Sender<ColorScheme>,
    appearance_rx: Receiver<ColorScheme>,
    subscribers: SlotMap<SubscriptionId, Subscriber>,
}

impl TokenStore {
    /// Store with the default seed, following the OS appearance.
    pub fn new(appearance: impl AppearanceSource + 'static) -> Self {
        Self::with_seed(SeedToken::default(), ThemeMode::default(), appearance)
    }

    pub fn with_seed(
        seed: SeedToken,
        mode: ThemeMode,
        appearance: impl AppearanceSource + 'static,
    ) -> Self {
        let seed = seed.sanitized();
        let os_scheme = appearance.color_scheme();
        let scheme = effective_scheme(mode, os_scheme);
        let global = GlobalToken::resolve(&seed, scheme);
        let components = ComponentTokens::generate(&global);
        let (appearance_tx, appearance_rx) = mpsc::channel();

        tracing::debug!(
            "TokenStore::with_seed - mode {:?}, os {:?}, resolved {:?}",
            mode,
            os_scheme,
            scheme
        );

        Self {
            mode,
            os_scheme,
            snapshot: Arc::new(TokenSnapshot {
                revision: 0,
                mode,
                scheme,
                seed: seed.clone(),
                global,
                components,
            }),
            seed,
            global_overrides: FxHashMap::default(),
            component_overrides: FxHashMap::default(),
            appearance: Box::new(appearance),
            appearance_tx,
            appearance_rx,
            subscribers: SlotMap::with_key(),
        }
    }

    /// Build a store from a parsed theme file.
    pub fn from_config(
        config: &ThemeConfig,
        appearance: impl AppearanceSource + 'static,
    ) -> std::result::Result<Self, ConfigError> {
        let mut seed = SeedToken::default();
        config.apply_seed(&mut seed)?;
        let mut store = Self::with_seed(seed, config.mode, appearance);

        let overrides = config.overrides()?;
        if !overrides.is_empty() {
            for (path, value) in overrides {
                store.stage(path, value)?;
            }
            store.cascade("config overrides");
        }
        Ok(store)
    }

    // ========== Reads ==========

    /// Current snapshot. Cheap to clone and safe to hold across mutations.
    pub fn snapshot(&self) -> Arc<TokenSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn seed(&self) -> &SeedToken {
        &self.seed
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Effective scheme of the current snapshot
    pub fn scheme(&self) -> ColorScheme {
        self.snapshot.scheme
    }

    pub fn global(&self) -> &GlobalToken {
        &self.snapshot.global
    }

    pub fn component(&self, family: ComponentFamily) -> &ComponentToken {
        self.snapshot.components.get(family)
    }

    pub fn revision(&self) -> u64 {
        self.snapshot.revision
    }

    // ========== Seed ==========

    /// Write one seed field and re-run the whole cascade.
    ///
    /// Out-of-range numbers are clamped; a value of the wrong kind is
    /// rejected and leaves the store untouched.
    pub fn set_seed_field(&mut self, field: SeedField, value: impl Into<TokenValue>) -> Result<()> {
        self.stage(TokenPath::Seed(field), value.into())?;
        self.cascade("seed field");
        Ok(())
    }

    /// [`TokenStore::set_seed_field`] addressed by name.
    pub fn set_seed_field_by_name(&mut self, name: &str, value: impl Into<TokenValue>) -> Result<()> {
        self.set_seed_field(name.parse()?, value)
    }

    /// Edit several seed fields with a single publish.
    pub fn configure_seed(&mut self, edit: impl FnOnce(&mut SeedToken)) {
        edit(&mut self.seed);
        self.seed.sanitize();
        self.cascade("seed");
    }

    /// Set the base animation duration in seconds.
    ///
    /// Stored as a multiple of `motion_unit`, rounded to the nearest step.
    pub fn set_motion_duration(&mut self, seconds: f32) {
        let unit = self.seed.motion_unit;
        let steps = if unit > 0.0 {
            (seconds / unit).round().max(0.0) as i32
        } else {
            0
        };
        self.configure_seed(|seed| seed.motion_base = steps);
    }

    // ========== Theme ==========

    /// Change the theme mode. `System` re-queries the OS appearance.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if mode == ThemeMode::System {
            self.os_scheme = self.appearance.color_scheme();
        }
        self.cascade("theme mode");
    }

    /// Switch to the explicit mode opposite to the current scheme.
    pub fn toggle_theme(&mut self) {
        let mode = match self.scheme().toggle() {
            ColorScheme::Light => ThemeMode::Light,
            ColorScheme::Dark => ThemeMode::Dark,
        };
        self.set_theme(mode);
    }

    // ========== Overrides ==========

    /// Pin a global field to `value`.
    ///
    /// Only component fields reading `field` are re-derived; component
    /// overrides stay in place. Integers are accepted for number fields and
    /// numbers are clamped to the field's range.
    pub fn override_global_field(
        &mut self,
        field: GlobalField,
        value: impl Into<TokenValue>,
    ) -> Result<()> {
        let value = admit(TokenPath::Global(field), value.into())?;

        let mut global = self.snapshot.global.clone();
        global.set(field, value.clone())?;
        let mut components = self.snapshot.components.clone();
        let overrides = &self.component_overrides;
        let mut refreshed = 0;
        for &family in ComponentFamily::ALL {
            refreshed += components
                .get_mut(family)
                .refresh_dependents(&global, field, |dependent| overrides.contains_key(&dependent));
        }

        tracing::debug!(
            "TokenStore::override_global_field - {} re-derived {} component fields",
            field,
            refreshed
        );
        self.global_overrides.insert(field, value);
        self.publish(global, components, "global override");
        Ok(())
    }

    /// Pin a component field to `value`. Numbers are clamped like derived
    /// values.
    pub fn override_component_field(
        &mut self,
        family: ComponentFamily,
        field: &str,
        value: impl Into<TokenValue>,
    ) -> Result<()> {
        let field = ComponentField::new(family, field)?;
        let value = admit(TokenPath::Component(field), value.into())?;

        tracing::trace!("TokenStore::override_component_field - {} = {}", field, value);
        let mut components = self.snapshot.components.clone();
        components.get_mut(family).set(field, value.clone());
        self.component_overrides.insert(field, value);
        let global = self.snapshot.global.clone();
        self.publish(global, components, "component override");
        Ok(())
    }

    /// Write any token by path: seed fields are set, global and component
    /// fields are overridden.
    pub fn set_path(&mut self, path: &str, value: impl Into<TokenValue>) -> Result<()> {
        match path.parse::<TokenPath>()? {
            TokenPath::Seed(field) => self.set_seed_field(field, value),
            TokenPath::Global(field) => self.override_global_field(field, value),
            TokenPath::Component(field) => {
                self.override_component_field(field.family(), field.name(), value)
            }
        }
    }

    pub fn global_override(&self, field: GlobalField) -> Option<&TokenValue> {
        self.global_overrides.get(&field)
    }

    pub fn component_override(&self, family: ComponentFamily, field: &str) -> Option<&TokenValue> {
        let field = ComponentField::new(family, field).ok()?;
        self.component_overrides.get(&field)
    }

    pub fn has_overrides(&self) -> bool {
        !self.global_overrides.is_empty() || !self.component_overrides.is_empty()
    }

    // ========== Reset ==========

    /// Drop the override on a global field.
    ///
    /// Returns `false`, without publishing, if the field was not overridden.
    pub fn reset_global_field(&mut self, field: GlobalField) -> bool {
        if self.global_overrides.remove(&field).is_none() {
            return false;
        }
        self.cascade("global reset");
        true
    }

    /// Drop the override on a component field.
    pub fn reset_component_field(&mut self, family: ComponentFamily, field: &str) -> Result<bool> {
        let field = ComponentField::new(family, field)?;
        if self.component_overrides.remove(&field).is_none() {
            return Ok(false);
        }
        self.cascade("component reset");
        Ok(true)
    }

    /// Drop the override at `path`. Seed paths restore the default seed value.
    pub fn reset_path(&mut self, path: &str) -> Result<bool> {
        match path.parse::<TokenPath>()? {
            TokenPath::Seed(field) => {
                let default = SeedToken::default().get(field);
                if self.seed.get(field) == default {
                    return Ok(false);
                }
                self.set_seed_field(field, default)?;
                Ok(true)
            }
            TokenPath::Global(field) => Ok(self.reset_global_field(field)),
            TokenPath::Component(field) => {
                self.reset_component_field(field.family(), field.name())
            }
        }
    }

    /// Drop every override, keeping the seed and the theme mode.
    pub fn reset_all(&mut self) {
        self.global_overrides.clear();
        self.component_overrides.clear();
        self.cascade("reset all");
    }

    /// Back to the default seed, `System` mode and no overrides.
    pub fn restore_defaults(&mut self) {
        self.seed = SeedToken::default();
        self.mode = ThemeMode::default();
        self.os_scheme = self.appearance.color_scheme();
        self.global_overrides.clear();
        self.component_overrides.clear();
        self.cascade("restore defaults");
    }

    // ========== Subscriptions ==========

    /// Call `callback` with every snapshot published from now on.
    pub fn subscribe(&mut self, callback: impl FnMut(&TokenSnapshot) + 'static) -> SubscriptionId {
        self.subscribers.insert(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // ========== Appearance ==========

    /// Sender for OS appearance changes, usable from any thread.
    pub fn appearance_notifier(&self) -> AppearanceNotifier {
        AppearanceNotifier::new(self.appearance_tx.clone())
    }

    /// Apply the latest pending appearance change.
    ///
    /// Returns `true` if a new snapshot was published.
    pub fn pump_appearance(&mut self) -> bool {
        match self.appearance_rx.try_iter().last() {
            Some(scheme) => self.handle_appearance_change(scheme),
            None => false,
        }
    }

    /// Re-query the appearance source.
    pub fn refresh_appearance(&mut self) -> bool {
        let scheme = self.appearance.color_scheme();
        self.handle_appearance_change(scheme)
    }

    /// Record a new OS scheme; re-resolves only in `System` mode when the
    /// effective scheme actually changes.
    pub fn handle_appearance_change(&mut self, os_scheme: ColorScheme) -> bool {
        self.os_scheme = os_scheme;
        if effective_scheme(self.mode, os_scheme) == self.snapshot.scheme {
            return false;
        }
        tracing::debug!(
            "TokenStore::handle_appearance_change - following OS to {:?}",
            os_scheme
        );
        self.cascade("appearance");
        true
    }

    // ========== Cascade ==========

    /// Write a value into the seed or an override layer without publishing.
    fn stage(&mut self, path: TokenPath, value: TokenValue) -> Result<()> {
        let value = admit(path, value)?;
        tracing::trace!("TokenStore::stage - {} = {}", path, value);
        match path {
            TokenPath::Seed(field) => {
                let mut seed = self.seed.clone();
                seed.set(field, value)?;
                self.seed = seed.sanitized();
            }
            TokenPath::Global(field) => {
                self.global_overrides.insert(field, value);
            }
            TokenPath::Component(field) => {
                self.component_overrides.insert(field, value);
            }
        }
        Ok(())
    }

    fn cascade(&mut self, reason: &str) {
        let scheme = effective_scheme(self.mode, self.os_scheme);
        let mut global = GlobalToken::resolve(&self.seed, scheme);
        for (field, value) in &self.global_overrides {
            if let Err(err) = global.set(*field, value.clone()) {
                tracing::warn!("dropping global override {}: {}", field, err);
            }
        }

        let mut components = ComponentTokens::generate(&global);
        for (field, value) in &self.component_overrides {
            components.get_mut(field.family()).set(*field, value.clone());
        }

        self.publish(global, components, reason);
    }

    fn publish(&mut self, global: GlobalToken, components: ComponentTokens, reason: &str) {
        let snapshot = Arc::new(TokenSnapshot {
            revision: self.snapshot.revision + 1,
            mode: self.mode,
            scheme: global.scheme,
            seed: self.seed.clone(),
            global,
            components,
        });
        tracing::debug!(
            "TokenStore::publish - revision {} ({}), {:?}",
            snapshot.revision,
            reason,
            snapshot.scheme
        );
        self.snapshot = Arc::clone(&snapshot);

        for callback in self.subscribers.values_mut() {
            callback(&snapshot);
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new(detect_system_color_scheme)
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("mode", &self.mode)
            .field("os_scheme", &self.os_scheme)
            .field("revision", &self.snapshot.revision)
            .field("global_overrides", &self.global_overrides.len())
            .field("component_overrides", &self.component_overrides.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Coerce `value` to the kind stored at `path`, then clamp it to the
/// path's range.
fn admit(path: TokenPath, value: TokenValue) -> Result<TokenValue> {
    let expected = path.kind();
    let found = value.kind();
    let value = value
        .coerce(expected)
        .ok_or_else(|| TokenError::KindMismatch {
            field: path.to_string(),
            expected,
            found,
        })?;
    Ok(path.clamp_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::platform::FixedAppearance;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn light_store() -> TokenStore {
        TokenStore::with_seed(
            SeedToken::default(),
            ThemeMode::Light,
            FixedAppearance(ColorScheme::Light),
        )
    }

    #[test]
    fn initial_snapshot_is_resolved() {
        let store = light_store();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.revision, 0);
        assert_eq!(snapshot.scheme, ColorScheme::Light);
        assert_eq!(snapshot.global, GlobalToken::resolve(&SeedToken::default(), ColorScheme::Light));
    }

    #[test]
    fn seed_edits_cascade_to_components() {
        let mut store = light_store();
        store.set_seed_field(SeedField::BorderRadius, 10.0).unwrap();
        assert_eq!(store.global().border_radius, 10.0);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn seed_values_are_clamped() {
        let mut store = light_store();
        store.set_seed_field(SeedField::FontSize, -3.0).unwrap();
        assert_eq!(store.seed().font_size, 1.0);
        store.set_seed_field(SeedField::OpacityImage, 4.0).unwrap();
        assert_eq!(store.seed().opacity_image, 1.0);
    }

    #[test]
    fn rejected_writes_do_not_publish() {
        let mut store = light_store();
        let err = store.set_seed_field(SeedField::ColorPrimary, 3.0).unwrap_err();
        assert!(matches!(err, TokenError::KindMismatch { .. }));
        assert!(store.set_seed_field_by_name("colour", 1.0).is_err());
        assert!(store
            .override_component_field(ComponentFamily::Badge, "dot_size", Color::WHITE)
            .is_err());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn global_override_refreshes_only_dependents() {
        let mut store = light_store();
        store
            .override_component_field(ComponentFamily::Badge, "dot_size", 12)
            .unwrap();
        store
            .override_global_field(GlobalField::ColorDanger, Color::BLACK)
            .unwrap();

        let badge = store.component(ComponentFamily::Badge);
        assert_eq!(badge.color("badge_color"), Some(Color::BLACK));
        assert_eq!(badge.number("dot_size"), Some(12.0));
    }

    #[test]
    fn global_override_survives_seed_and_theme_changes() {
        let mut store = light_store();
        store
            .override_global_field(GlobalField::BorderRadius, 2.0)
            .unwrap();
        store.set_seed_field(SeedField::BorderRadius, 12.0).unwrap();
        store.set_theme(ThemeMode::Dark);
        assert_eq!(store.global().border_radius, 2.0);
        assert_eq!(
            store.global_override(GlobalField::BorderRadius),
            Some(&TokenValue::Number(2.0))
        );

        assert!(store.reset_global_field(GlobalField::BorderRadius));
        assert_eq!(store.global().border_radius, 12.0);
        assert!(!store.reset_global_field(GlobalField::BorderRadius));
    }

    #[test]
    fn toggle_picks_the_opposite_explicit_mode() {
        let mut store = TokenStore::new(FixedAppearance(ColorScheme::Dark));
        assert_eq!(store.mode(), ThemeMode::System);
        assert_eq!(store.scheme(), ColorScheme::Dark);
        store.toggle_theme();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert!(!store.global().is_dark());
    }

    #[test]
    fn one_notification_per_mutation() {
        let mut store = light_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.revision));

        store.configure_seed(|seed| {
            seed.font_size = 16.0;
            seed.border_radius = 4.0;
        });
        store.set_theme(ThemeMode::Dark);
        store.reset_all();
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);

        assert!(store.unsubscribe(id));
        store.set_theme(ThemeMode::Light);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn held_snapshots_are_not_mutated() {
        let mut store = light_store();
        let before = store.snapshot();
        store.set_theme(ThemeMode::Dark);
        assert_eq!(before.scheme, ColorScheme::Light);
        assert_eq!(store.snapshot().scheme, ColorScheme::Dark);
    }

    #[test]
    fn appearance_changes_only_matter_in_system_mode() {
        let mut store = light_store();
        let notifier = store.appearance_notifier();
        notifier.notify(ColorScheme::Dark);
        assert!(!store.pump_appearance());
        assert_eq!(store.scheme(), ColorScheme::Light);

        store.set_theme(ThemeMode::System);
        assert_eq!(store.scheme(), ColorScheme::Light);
        notifier.notify(ColorScheme::Light);
        notifier.notify(ColorScheme::Dark);
        assert!(store.pump_appearance());
        assert_eq!(store.scheme(), ColorScheme::Dark);
        assert!(!store.pump_appearance());
    }

    #[test]
    fn motion_duration_is_stored_in_units() {
        let mut store = light_store();
        store.set_motion_duration(0.3);
        assert_eq!(store.seed().motion_base, 3);
    }

    #[test]
    fn paths_route_to_the_right_layer() {
        let mut store = light_store();
        store.set_path("seed.font_size", 16.0).unwrap();
        store.set_path("global.border_radius_sm", 1.0).unwrap();
        store.set_path("badge.dot_size", 10).unwrap();
        assert_eq!(store.seed().font_size, 16.0);
        assert_eq!(store.global().border_radius_sm, 1.0);
        assert_eq!(
            store.component(ComponentFamily::Badge).number("dot_size"),
            Some(10.0)
        );

        assert_eq!(store.reset_path("badge.dot_size"), Ok(true));
        assert_eq!(store.reset_path("seed.font_size"), Ok(true));
        assert_eq!(store.reset_path("seed.font_size"), Ok(false));
        assert!(store.has_overrides());
    }
}
