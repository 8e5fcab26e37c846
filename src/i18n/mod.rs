//! Translation catalog service.
//!
//! Catalogs are plain message-id -> translation maps with a plural-form
//! expression and a locale format table. The service is an ordinary value:
//! construct it, `load` catalogs, `activate` a locale and pass it as a
//! [`Translator`] to whatever needs text.

mod catalog;
mod date_format;
mod formats;
mod interpolate;
mod plural;
mod service;
mod translator;

pub use catalog::{CONTEXT_SEPARATOR, CatalogEntry, LocaleBundle, LocaleCatalog, context_key};
pub use date_format::DateValue;
pub use formats::{FormatTable, FormatValue};
pub use interpolate::{interpolate, interpolate_named};
pub use plural::PluralRule;
pub use service::I18nService;
pub use translator::{IdentityTranslator, Translator};
