//! Locale support for number formatting
//!
//! This module handles loading and managing locale-specific settings
//! for number and currency formatting based on locale identifiers.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::types::LocaleSettings;

const INVARIANT_ID: &str = "invariant";

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocaleError {
    /// The specified locale was not found
    #[error("Locale not found: {0}")]
    NotFound(String),
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// A named culture and the settings it formats numbers with
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    id: String,
    settings: LocaleSettings,
}

impl Locale {
    /// The culture-independent locale: `.` decimal point, `,` grouping, `¤` currency
    pub fn invariant() -> Self {
        let settings = LocaleManager::get()
            .get_locale_settings(INVARIANT_ID)
            .cloned()
            .unwrap_or_default();
        Self {
            id: INVARIANT_ID.to_string(),
            settings,
        }
    }

    /// Look up a locale by identifier, e.g. `"en-US"`, `"ru_RU"` or `"de-de"`
    ///
    /// An empty identifier names the invariant locale.
    pub fn named(locale_id: &str) -> Result<Self> {
        let key = normalize_id(locale_id);
        if key.is_empty() || key == INVARIANT_ID {
            return Ok(Self::invariant());
        }

        let manager = LocaleManager::get();
        let (id, settings) = manager
            .locale_settings
            .get_key_value(&key)
            .ok_or_else(|| LocaleError::NotFound(locale_id.to_string()))?;
        Ok(Self {
            id: manager.display_ids.get(id).cloned().unwrap_or_else(|| id.clone()),
            settings: settings.clone(),
        })
    }

    /// Look up a locale by its Windows locale identifier (e.g. `0x0419` for ru-RU)
    pub fn from_lcid(code: u32) -> Result<Self> {
        let locale_id = LocaleManager::get()
            .resolve_locale_code(code)
            .ok_or_else(|| LocaleError::NotFound(format!("{code:#06x}")))?;
        Self::named(locale_id)
    }

    /// A locale built from caller-provided settings
    pub fn custom(id: impl Into<String>, settings: LocaleSettings) -> Self {
        Self {
            id: id.into(),
            settings,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn settings(&self) -> &LocaleSettings {
        &self.settings
    }

    pub fn is_invariant(&self) -> bool {
        self.id == INVARIANT_ID
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::invariant()
    }
}

fn normalize_id(locale_id: &str) -> String {
    locale_id.trim().replace('_', "-").to_ascii_lowercase()
}

/// Represents a locale manager that provides access to locale-specific settings
struct LocaleManager {
    locale_codes: HashMap<u32, String>,
    /// Keyed by normalized (lowercase, `-` separated) identifier
    locale_settings: HashMap<String, LocaleSettings>,
    display_ids: HashMap<String, String>,
}

// Global singleton for locale settings
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the default locale data
    fn new() -> Self {
        let mut manager = Self {
            locale_codes: HashMap::new(),
            locale_settings: HashMap::new(),
            display_ids: HashMap::new(),
        };

        if let Err(e) = manager.load_embedded_data() {
            warn!(error = %e, "failed to load embedded locale data");
        }

        debug!(
            locales = manager.locale_settings.len(),
            codes = manager.locale_codes.len(),
            "locale registry initialized"
        );
        manager
    }

    /// Load the embedded locale data from the TOML files
    fn load_embedded_data(&mut self) -> Result<()> {
        let locale_codes_toml = include_str!("locale/locale_codes.toml");
        self.parse_locale_codes(locale_codes_toml)?;

        let locale_settings_toml = include_str!("locale/locale_settings.toml");
        self.parse_locale_settings(locale_settings_toml)?;

        Ok(())
    }

    /// Parse the locale codes TOML data
    fn parse_locale_codes(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        for (key, value) in table {
            if !key.starts_with("code_") {
                continue;
            }
            let code_table = value
                .as_table()
                .ok_or_else(|| LocaleError::ParseError(format!("{key} is not a table")))?;

            let code = code_table
                .get("code")
                .and_then(|v| v.as_integer())
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| {
                    LocaleError::ParseError(format!("Missing or invalid code in {key}"))
                })?;

            let locale = code_table
                .get("locale")
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    LocaleError::ParseError(format!("Missing or invalid locale in {key}"))
                })?;

            self.locale_codes.insert(code, locale.to_string());
        }

        Ok(())
    }

    /// Parse the locale settings TOML data
    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        let mut base_settings = LocaleSettings::default();
        if let Some(base) = table.get("base") {
            apply_locale_settings(&mut base_settings, base)?;
        }

        for (locale_id, value) in table {
            if locale_id == "base" {
                continue;
            }

            let mut locale_settings = base_settings.clone();
            apply_locale_settings(&mut locale_settings, value)?;

            let key = normalize_id(locale_id);
            self.display_ids.insert(key.clone(), locale_id.to_string());
            self.locale_settings.insert(key, locale_settings);
        }

        Ok(())
    }

    /// Get the global locale manager instance
    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    /// Get locale settings by normalized identifier
    fn get_locale_settings(&self, key: &str) -> Option<&LocaleSettings> {
        self.locale_settings.get(key)
    }

    /// Resolve a locale code (numeric) to a locale identifier
    fn resolve_locale_code(&self, code: u32) -> Option<&str> {
        self.locale_codes.get(&code).map(|s| s.as_str())
    }
}

/// Apply the keys present in a TOML locale table over `settings`
fn apply_locale_settings(settings: &mut LocaleSettings, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Locale setting is not a table".to_string()))?;

    if let Some(decimal) = table.get("decimal").and_then(|v| v.as_str()) {
        if let Some(c) = decimal.chars().next() {
            settings.decimal_point = c;
        }
    }

    if let Some(group) = table.get("group").and_then(|v| v.as_str()) {
        if let Some(c) = group.chars().next() {
            settings.thousands_separator = c;
        }
    }

    if let Some(currency) = table.get("currency_symbol").and_then(|v| v.as_str()) {
        settings.currency_symbol = currency.to_string();
    }

    if let Some(pattern) = table.get("number_pattern").and_then(|v| v.as_str()) {
        settings.number_pattern = pattern.to_string();
    }

    if let Some(pattern) = table.get("currency_pattern").and_then(|v| v.as_str()) {
        settings.currency_pattern = pattern.to_string();
    }

    Ok(())
}

/// List all available locale identifiers
pub fn list_available_locales() -> Vec<String> {
    let mut ids: Vec<String> = LocaleManager::get().display_ids.values().cloned().collect();
    ids.sort();
    ids
}
