use rust_decimal::Decimal;

use super::catalog::{CONTEXT_SEPARATOR, CatalogEntry, context_key};
use super::date_format::{DateValue, render_date_pattern};
use super::formats::FormatTable;

/// Translation service handed to every component that shows text.
///
/// Implementors provide raw lookups; the lookup laws live in the provided
/// methods:
/// * a missing message id translates to itself;
/// * a missing plural message picks `singular` for a count of one and
///   `plural` otherwise;
/// * a present plural message picks the form at `plural_index(count)`.
pub trait Translator {
    fn lookup(&self, key: &str) -> Option<&CatalogEntry>;

    fn plural_index(&self, count: u64) -> usize;

    fn formats(&self) -> &FormatTable;

    fn translate(&self, message_id: &str) -> String {
        self.lookup(message_id)
            .and_then(CatalogEntry::singular)
            .unwrap_or(message_id)
            .to_owned()
    }

    fn translate_plural(&self, singular: &str, plural: &str, count: u64) -> String {
        let untranslated = || {
            if count == 1 {
                singular.to_owned()
            } else {
                plural.to_owned()
            }
        };
        match self.lookup(singular) {
            Some(CatalogEntry::Single(text)) => text.clone(),
            Some(CatalogEntry::Plural(forms)) => forms
                .get(self.plural_index(count))
                .cloned()
                .unwrap_or_else(untranslated),
            None => untranslated(),
        }
    }

    /// Context lookup; a miss returns `message_id` untranslated.
    fn translate_context(&self, context: &str, message_id: &str) -> String {
        let translated = self.translate(&context_key(context, message_id));
        if translated.contains(CONTEXT_SEPARATOR) {
            message_id.to_owned()
        } else {
            translated
        }
    }

    /// Context plural lookup; a miss falls back to the context-free plural
    /// lookup.
    fn translate_context_plural(
        &self,
        context: &str,
        singular: &str,
        plural: &str,
        count: u64,
    ) -> String {
        let translated = self.translate_plural(
            &context_key(context, singular),
            &context_key(context, plural),
            count,
        );
        if translated.contains(CONTEXT_SEPARATOR) {
            self.translate_plural(singular, plural, count)
        } else {
            translated
        }
    }

    fn get_format(&self, format_name: &str) -> String {
        self.formats().pattern(format_name)
    }

    /// Formats a date, time or datetime with the pattern registered under
    /// `format_name` (or `format_name` itself when it is not registered).
    fn format(&self, value: &DateValue, format_name: &str) -> String {
        let pattern = self.get_format(format_name);
        render_date_pattern(self, value, &pattern)
    }

    fn format_number(&self, value: Decimal, decimal_pos: Option<u32>) -> String {
        self.formats().format_number(value, decimal_pos)
    }
}

/// Translator without any catalog: every lookup falls back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityTranslator {
    formats: FormatTable,
}

impl IdentityTranslator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Translator for IdentityTranslator {
    fn lookup(&self, _key: &str) -> Option<&CatalogEntry> {
        None
    }

    fn plural_index(&self, count: u64) -> usize {
        usize::from(count != 1)
    }

    fn formats(&self) -> &FormatTable {
        &self.formats
    }
}
