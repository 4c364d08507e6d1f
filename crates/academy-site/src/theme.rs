//! Colour mode resolution and persistence.
//!
//! The stored preference is a [`ConfigColorMode`] (`light`, `dark` or
//! `system`); the applied mode is always a concrete [`ColorMode`]. `system`
//! resolves to the client preference when it is known and to light during
//! server rendering.

use std::fmt;

use academy_config::{StorageKind, ThemeConfig};
use serde::Serialize;

/// Cookie lifetime in seconds (one year).
const COOKIE_MAX_AGE: u32 = 31_536_000;

/// Mode used when nothing else applies.
const FALLBACK_MODE: ColorMode = ColorMode::Light;

/// A concrete colour mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

impl ColorMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A stored colour mode preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigColorMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the client preference.
    #[default]
    System,
}

impl ConfigColorMode {
    /// Parse a stored value; anything unrecognized becomes `System`.
    #[must_use]
    pub fn normalize(value: &str) -> Self {
        match value.trim() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }

    /// Value as written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolve to a concrete mode given the client preference, if known.
    #[must_use]
    pub fn resolve(self, system: Option<ColorMode>) -> ColorMode {
        match self {
            Self::Light => ColorMode::Light,
            Self::Dark => ColorMode::Dark,
            Self::System => system.unwrap_or(FALLBACK_MODE),
        }
    }
}

impl From<ColorMode> for ConfigColorMode {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self::Light,
            ColorMode::Dark => Self::Dark,
        }
    }
}

impl fmt::Display for ConfigColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence for the colour mode preference.
pub trait ColorModeStorage {
    /// Stored preference, if any.
    fn get(&self) -> Option<ConfigColorMode>;

    /// Store a preference.
    fn set(&mut self, value: ConfigColorMode);
}

impl<S: ColorModeStorage + ?Sized> ColorModeStorage for Box<S> {
    fn get(&self) -> Option<ConfigColorMode> {
        (**self).get()
    }

    fn set(&mut self, value: ConfigColorMode) {
        (**self).set(value);
    }
}

/// Cookie-backed storage.
///
/// Reads the preference from a request `Cookie` header and renders a
/// `Set-Cookie` value when the preference changes.
#[derive(Clone, Debug)]
pub struct CookieStorage {
    key: String,
    value: Option<ConfigColorMode>,
    set_cookie: Option<String>,
}

impl CookieStorage {
    /// Create storage from a `Cookie` header (may be empty).
    #[must_use]
    pub fn new(key: impl Into<String>, cookie_header: &str) -> Self {
        let key = key.into();
        let value = parse_cookie(cookie_header, &key).map(ConfigColorMode::normalize);
        Self {
            key,
            value,
            set_cookie: None,
        }
    }

    /// `Set-Cookie` value for the last stored preference.
    #[must_use]
    pub fn set_cookie(&self) -> Option<&str> {
        self.set_cookie.as_deref()
    }
}

impl ColorModeStorage for CookieStorage {
    fn get(&self) -> Option<ConfigColorMode> {
        self.value
    }

    fn set(&mut self, value: ConfigColorMode) {
        self.value = Some(value);
        self.set_cookie = Some(format!(
            "{}={value}; max-age={COOKIE_MAX_AGE}; path=/",
            self.key
        ));
    }
}

/// Extract `key`'s value from a `Cookie` header.
fn parse_cookie<'h>(header: &'h str, key: &str) -> Option<&'h str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim_start().split_once('=')?;
        (name == key && !value.is_empty()).then_some(value)
    })
}

/// In-memory storage, the server-side stand-in for browser local storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    value: Option<ConfigColorMode>,
}

impl MemoryStorage {
    /// Create storage holding `value`.
    #[must_use]
    pub fn with_value(value: ConfigColorMode) -> Self {
        Self { value: Some(value) }
    }
}

impl ColorModeStorage for MemoryStorage {
    fn get(&self) -> Option<ConfigColorMode> {
        self.value
    }

    fn set(&mut self, value: ConfigColorMode) {
        self.value = Some(value);
    }
}

/// Build the storage selected in `[theme]`.
///
/// Local storage is not readable on the server, so it starts empty.
#[must_use]
pub fn storage_for(config: &ThemeConfig, cookie_header: &str) -> Box<dyn ColorModeStorage> {
    match config.storage {
        StorageKind::Cookie => Box::new(CookieStorage::new(config.storage_key.clone(), cookie_header)),
        StorageKind::LocalStorage => Box::new(MemoryStorage::default()),
    }
}

/// Colour mode to apply before any user interaction.
///
/// Uses the stored preference, or light when none is stored.
#[must_use]
pub fn initial_color_mode(storage: &dyn ColorModeStorage, system: Option<ColorMode>) -> ColorMode {
    storage
        .get()
        .map_or(FALLBACK_MODE, |stored| stored.resolve(system))
}

/// Current colour mode with its storage.
pub struct ThemeState<S> {
    storage: S,
    system: Option<ColorMode>,
    mode: ColorMode,
}

impl<S: ColorModeStorage> ThemeState<S> {
    /// Resolve the mode from storage, falling back to `initial`.
    ///
    /// When nothing is stored the initial preference is persisted.
    pub fn new(mut storage: S, initial: ConfigColorMode, system: Option<ColorMode>) -> Self {
        let preference = if let Some(stored) = storage.get() {
            stored
        } else {
            storage.set(initial);
            initial
        };

        Self {
            mode: preference.resolve(system),
            storage,
            system,
        }
    }

    /// Applied colour mode.
    #[must_use]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Stored preference.
    #[must_use]
    pub fn preference(&self) -> Option<ConfigColorMode> {
        self.storage.get()
    }

    /// Apply and persist a preference.
    pub fn set(&mut self, value: ConfigColorMode) {
        self.mode = value.resolve(self.system);
        self.storage.set(value);
    }

    /// Switch between light and dark, persisting the explicit choice.
    pub fn toggle(&mut self) {
        self.set(self.mode.toggled().into());
    }

    /// Update the client preference; affects the mode only under `system`.
    pub fn set_system(&mut self, system: ColorMode) {
        self.system = Some(system);
        if self.storage.get() == Some(ConfigColorMode::System) {
            self.mode = system;
        }
    }

    /// Underlying storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(ConfigColorMode::normalize("light"), ConfigColorMode::Light);
        assert_eq!(ConfigColorMode::normalize("dark"), ConfigColorMode::Dark);
        assert_eq!(ConfigColorMode::normalize("system"), ConfigColorMode::System);
        assert_eq!(ConfigColorMode::normalize("purple"), ConfigColorMode::System);
        assert_eq!(ConfigColorMode::normalize(""), ConfigColorMode::System);
    }

    #[test]
    fn test_cookie_parse() {
        let storage = CookieStorage::new("kb-color-mode", "session=abc; kb-color-mode=dark; other=1");
        assert_eq!(storage.get(), Some(ConfigColorMode::Dark));
    }

    #[test]
    fn test_cookie_at_start_of_header() {
        let storage = CookieStorage::new("kb-color-mode", "kb-color-mode=light");
        assert_eq!(storage.get(), Some(ConfigColorMode::Light));
    }

    #[test]
    fn test_cookie_key_must_match_whole_name() {
        let storage = CookieStorage::new("kb-color-mode", "xkb-color-mode=dark");
        assert_eq!(storage.get(), None);
    }

    #[test]
    fn test_cookie_empty_value_ignored() {
        let storage = CookieStorage::new("kb-color-mode", "kb-color-mode=; other=dark");
        assert_eq!(storage.get(), None);
    }

    #[test]
    fn test_cookie_first_match_wins() {
        let storage = CookieStorage::new("kb-color-mode", "kb-color-mode=dark;kb-color-mode=light");
        assert_eq!(storage.get(), Some(ConfigColorMode::Dark));
    }

    #[test]
    fn test_cookie_missing() {
        assert_eq!(CookieStorage::new("kb-color-mode", "").get(), None);
    }

    #[test]
    fn test_cookie_set_renders_header() {
        let mut storage = CookieStorage::new("kb-color-mode", "");
        storage.set(ConfigColorMode::Dark);
        assert_eq!(
            storage.set_cookie(),
            Some("kb-color-mode=dark; max-age=31536000; path=/")
        );
        assert_eq!(storage.get(), Some(ConfigColorMode::Dark));
    }

    #[test]
    fn test_initial_color_mode_fallback_light() {
        assert_eq!(
            initial_color_mode(&MemoryStorage::default(), Some(ColorMode::Dark)),
            ColorMode::Light
        );
    }

    #[test]
    fn test_initial_color_mode_system() {
        let storage = MemoryStorage::with_value(ConfigColorMode::System);
        assert_eq!(
            initial_color_mode(&storage, Some(ColorMode::Dark)),
            ColorMode::Dark
        );
        assert_eq!(initial_color_mode(&storage, None), ColorMode::Light);
    }

    #[test]
    fn test_theme_state_persists_initial() {
        let state = ThemeState::new(MemoryStorage::default(), ConfigColorMode::Dark, None);
        assert_eq!(state.mode(), ColorMode::Dark);
        assert_eq!(state.preference(), Some(ConfigColorMode::Dark));
    }

    #[test]
    fn test_theme_state_prefers_stored() {
        let storage = MemoryStorage::with_value(ConfigColorMode::Light);
        let state = ThemeState::new(storage, ConfigColorMode::Dark, None);
        assert_eq!(state.mode(), ColorMode::Light);
    }

    #[test]
    fn test_theme_state_toggle() {
        let mut state = ThemeState::new(
            MemoryStorage::default(),
            ConfigColorMode::System,
            Some(ColorMode::Dark),
        );
        assert_eq!(state.mode(), ColorMode::Dark);

        state.toggle();

        assert_eq!(state.mode(), ColorMode::Light);
        assert_eq!(state.preference(), Some(ConfigColorMode::Light));
    }

    #[test]
    fn test_theme_state_follows_system_changes() {
        let mut state = ThemeState::new(
            MemoryStorage::default(),
            ConfigColorMode::System,
            Some(ColorMode::Light),
        );
        state.set_system(ColorMode::Dark);
        assert_eq!(state.mode(), ColorMode::Dark);

        state.set(ConfigColorMode::Light);
        state.set_system(ColorMode::Dark);
        assert_eq!(state.mode(), ColorMode::Light);
    }

    #[test]
    fn test_storage_for_config() {
        let config = ThemeConfig::default();
        let storage = storage_for(&config, "kb-color-mode=dark");
        assert_eq!(storage.get(), Some(ConfigColorMode::Dark));
    }
}
