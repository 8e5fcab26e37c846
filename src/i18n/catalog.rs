use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ControlError, ControlResult};

use super::formats::FormatTable;
use super::plural::PluralRule;
use super::translator::Translator;

/// Separator between a message context and its id in catalog keys.
pub const CONTEXT_SEPARATOR: char = '\u{4}';

/// Catalog key of a message translated within `context`.
#[must_use]
pub fn context_key(context: &str, message_id: &str) -> String {
    format!("{context}{CONTEXT_SEPARATOR}{message_id}")
}

/// Translation of one message id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogEntry {
    Single(String),
    Plural(Vec<String>),
}

impl CatalogEntry {
    /// Singular form; the first plural form for plural entries.
    #[must_use]
    pub fn singular(&self) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text),
            Self::Plural(forms) => forms.first().map(String::as_str),
        }
    }
}

/// Entries plus the optional plural rule and formats of one load call.
///
/// A bundle that declares a plural rule or a format table replaces the ones
/// already installed for its locale; a bundle that declares neither only
/// adds messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleBundle {
    pub entries: IndexMap<String, CatalogEntry>,
    pub plural: Option<PluralRule>,
    pub formats: Option<FormatTable>,
}

impl LocaleBundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(mut self, message_id: &str, translation: &str) -> Self {
        self.entries.insert(
            message_id.to_owned(),
            CatalogEntry::Single(translation.to_owned()),
        );
        self
    }

    #[must_use]
    pub fn with_plural_entry(mut self, message_id: &str, forms: &[&str]) -> Self {
        self.entries.insert(
            message_id.to_owned(),
            CatalogEntry::Plural(forms.iter().map(|form| (*form).to_owned()).collect()),
        );
        self
    }

    #[must_use]
    pub fn with_context_entry(mut self, context: &str, message_id: &str, translation: &str) -> Self {
        self.entries.insert(
            context_key(context, message_id),
            CatalogEntry::Single(translation.to_owned()),
        );
        self
    }

    #[must_use]
    pub fn with_plural_rule(mut self, rule: PluralRule) -> Self {
        self.plural = Some(rule);
        self
    }

    #[must_use]
    pub fn with_formats(mut self, formats: FormatTable) -> Self {
        self.formats = Some(formats);
        self
    }

    /// Parses a JSON catalog payload:
    /// `{"catalog": {...}, "formats": {...}, "plural": "..."}`.
    pub fn from_json_str(input: &str) -> ControlResult<Self> {
        let payload: JsonCatalogPayload = serde_json::from_str(input)
            .map_err(|e| ControlError::InvalidData(format!("failed to parse catalog json: {e}")))?;
        payload.into_bundle()
    }
}

#[derive(Debug, Deserialize)]
struct JsonCatalogPayload {
    #[serde(default)]
    catalog: IndexMap<String, CatalogEntry>,
    #[serde(default)]
    formats: Option<FormatTable>,
    #[serde(default)]
    plural: Option<String>,
}

impl JsonCatalogPayload {
    fn into_bundle(self) -> ControlResult<LocaleBundle> {
        let plural = self
            .plural
            .as_deref()
            .map(str::trim)
            .filter(|source| !source.is_empty())
            .map(PluralRule::parse)
            .transpose()?;
        Ok(LocaleBundle {
            entries: self.catalog,
            plural,
            formats: self.formats,
        })
    }
}

/// Installed catalog of one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCatalog {
    locale: String,
    entries: IndexMap<String, CatalogEntry>,
    plural: PluralRule,
    formats: FormatTable,
}

impl LocaleCatalog {
    /// Empty catalog with the Germanic plural rule and English formats.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: IndexMap::new(),
            plural: PluralRule::germanic(),
            formats: FormatTable::english(),
        }
    }

    /// Merges `bundle` into this catalog (overwrite by key).
    ///
    /// Returns the number of message ids that were not present before.
    pub fn merge(&mut self, bundle: LocaleBundle) -> usize {
        let before = self.entries.len();
        self.entries.extend(bundle.entries);
        if let Some(plural) = bundle.plural {
            debug!(locale = %self.locale, rule = plural.source(), "install plural rule");
            self.plural = plural;
        }
        if let Some(formats) = bundle.formats {
            debug!(locale = %self.locale, count = formats.len(), "install format table");
            self.formats = formats;
        }
        self.entries.len() - before
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn plural_rule(&self) -> &PluralRule {
        &self.plural
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl Translator for LocaleCatalog {
    fn lookup(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    fn plural_index(&self, count: u64) -> usize {
        self.plural.index(count)
    }

    fn formats(&self) -> &FormatTable {
        &self.formats
    }
}
