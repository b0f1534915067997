//! Operating system appearance
//!
//! The token store asks an [`AppearanceSource`] for the OS color scheme
//! whenever the theme mode is `System`. Change notifications from other
//! threads are delivered through an [`AppearanceNotifier`] and applied on
//! the store's own thread.

use crate::theme::ColorScheme;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Synchronous query for the current OS color scheme
pub trait AppearanceSource {
    fn color_scheme(&self) -> ColorScheme;
}

impl<F> AppearanceSource for F
where
    F: Fn() -> ColorScheme,
{
    fn color_scheme(&self) -> ColorScheme {
        self()
    }
}

/// Appearance that never changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedAppearance(pub ColorScheme);

impl AppearanceSource for FixedAppearance {
    fn color_scheme(&self) -> ColorScheme {
        self.0
    }
}

/// Appearance backed by a shared flag
///
/// Clones observe the same value, so a test or host can flip the
/// appearance after handing a clone to the store.
#[derive(Clone, Debug, Default)]
pub struct SharedAppearance {
    dark: Arc<AtomicBool>,
}

impl SharedAppearance {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            dark: Arc::new(AtomicBool::new(scheme.is_dark())),
        }
    }

    pub fn set(&self, scheme: ColorScheme) {
        self.dark.store(scheme.is_dark(), Ordering::SeqCst);
    }
}

impl AppearanceSource for SharedAppearance {
    fn color_scheme(&self) -> ColorScheme {
        if self.dark.load(Ordering::SeqCst) {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }
}

/// Appearance reported by the desktop environment
#[cfg(feature = "system-appearance")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAppearance;

#[cfg(feature = "system-appearance")]
impl AppearanceSource for SystemAppearance {
    fn color_scheme(&self) -> ColorScheme {
        detect_system_color_scheme()
    }
}

/// Detect the OS color scheme, falling back to light.
#[cfg(feature = "system-appearance")]
pub fn detect_system_color_scheme() -> ColorScheme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => ColorScheme::Dark,
        Ok(_) => ColorScheme::Light,
        Err(err) => {
            tracing::warn!("failed to detect system color scheme: {err}");
            ColorScheme::Light
        }
    }
}

/// Detect the OS color scheme; without `system-appearance` this is light.
#[cfg(not(feature = "system-appearance"))]
pub fn detect_system_color_scheme() -> ColorScheme {
    ColorScheme::Light
}

/// Sending half of the store's appearance channel
///
/// Cheap to clone and `Send`, so OS callbacks on any thread can report a
/// change. The store applies it on its next `pump_appearance` call.
#[derive(Clone, Debug)]
pub struct AppearanceNotifier {
    sender: Sender<ColorScheme>,
}

impl AppearanceNotifier {
    pub(crate) fn new(sender: Sender<ColorScheme>) -> Self {
        Self { sender }
    }

    /// Report the new OS scheme. Returns `false` once the store is gone.
    pub fn notify(&self, scheme: ColorScheme) -> bool {
        tracing::trace!("appearance change reported: {:?}", scheme);
        self.sender.send(scheme).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_appearance_clones_see_updates() {
        let appearance = SharedAppearance::new(ColorScheme::Light);
        let handle = appearance.clone();
        handle.set(ColorScheme::Dark);
        assert_eq!(appearance.color_scheme(), ColorScheme::Dark);
    }

    #[test]
    fn closures_are_appearance_sources() {
        let source = || ColorScheme::Dark;
        assert_eq!(source.color_scheme(), ColorScheme::Dark);
        assert_eq!(FixedAppearance(ColorScheme::Light).color_scheme(), ColorScheme::Light);
    }

    #[test]
    fn notifier_reports_closed_channel() {
        let (tx, rx) = std::sync::mpsc::channel();
        let notifier = AppearanceNotifier::new(tx);
        assert!(notifier.notify(ColorScheme::Dark));
        assert_eq!(rx.recv().unwrap(), ColorScheme::Dark);
        drop(rx);
        assert!(!notifier.notify(ColorScheme::Light));
    }
}
