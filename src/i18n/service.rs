use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{ControlError, ControlResult};

use super::catalog::{CatalogEntry, LocaleBundle, LocaleCatalog};
use super::formats::FormatTable;
use super::translator::Translator;

/// Constructed translation service.
///
/// Holds one catalog per locale. Loading never changes which locale is
/// active, and a later load for a locale may declare its own plural rule
/// and formats; nothing is fixed by load order.
#[derive(Debug, Clone, Default)]
pub struct I18nService {
    locales: IndexMap<String, LocaleCatalog>,
    active: Option<String>,
    fallback_formats: FormatTable,
}

impl I18nService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `bundle` into the catalog of `locale`, creating it if needed.
    ///
    /// Returns the number of message ids added. Loading the same bundle
    /// again adds nothing and leaves every entry unchanged.
    pub fn load(&mut self, locale: &str, bundle: LocaleBundle) -> ControlResult<usize> {
        let locale = normalize_locale(locale)?;
        let catalog = self
            .locales
            .entry(locale.clone())
            .or_insert_with(|| LocaleCatalog::new(locale.clone()));
        let added = catalog.merge(bundle);
        debug!(
            locale = %locale,
            added,
            total = catalog.len(),
            "load locale catalog"
        );
        Ok(added)
    }

    /// Parses and loads a JSON catalog payload.
    pub fn load_json_str(&mut self, locale: &str, input: &str) -> ControlResult<usize> {
        let bundle = LocaleBundle::from_json_str(input)?;
        self.load(locale, bundle)
    }

    /// Makes `locale` the one used by the `Translator` implementation.
    pub fn activate(&mut self, locale: &str) -> ControlResult<()> {
        let locale = normalize_locale(locale)?;
        if !self.locales.contains_key(&locale) {
            return Err(ControlError::UnknownLocale(locale));
        }
        debug!(locale = %locale, "activate locale");
        self.active = Some(locale);
        Ok(())
    }

    /// Falls back to untranslated lookups.
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn active_locale(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn catalog(&self, locale: &str) -> Option<&LocaleCatalog> {
        let locale = normalize_locale(locale).ok()?;
        self.locales.get(&locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    fn active_catalog(&self) -> Option<&LocaleCatalog> {
        self.active
            .as_ref()
            .and_then(|locale| self.locales.get(locale))
    }
}

impl Translator for I18nService {
    fn lookup(&self, key: &str) -> Option<&CatalogEntry> {
        let entry = self.active_catalog()?.lookup(key);
        if entry.is_none() {
            trace!(key, "catalog miss");
        }
        entry
    }

    fn plural_index(&self, count: u64) -> usize {
        match self.active_catalog() {
            Some(catalog) => catalog.plural_index(count),
            None => usize::from(count != 1),
        }
    }

    fn formats(&self) -> &FormatTable {
        match self.active_catalog() {
            Some(catalog) => catalog.formats(),
            None => &self.fallback_formats,
        }
    }
}

/// Lower-cases and uses `-` as separator: `pt_BR` and `pt-br` name the
/// same catalog.
fn normalize_locale(locale: &str) -> ControlResult<String> {
    let trimmed = locale.trim();
    if trimmed.is_empty() {
        return Err(ControlError::InvalidData(
            "locale code must not be empty".to_owned(),
        ));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ControlError::InvalidData(format!(
            "locale code `{trimmed}` contains unsupported characters"
        )));
    }
    Ok(trimmed.replace('_', "-").to_ascii_lowercase())
}
