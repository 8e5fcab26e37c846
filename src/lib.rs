//! chart-controls: typed control registry and localization service for a
//! chart editor.
//!
//! Controls are declared once in a [`api::ControlTable`], laid out per chart
//! type in a [`api::VisTypeRegistry`] and merged into an immutable
//! [`api::ResolvedRegistry`] that reports every inconsistency up front.
//! Labels, plural forms and locale formats come from an explicitly
//! constructed [`i18n::I18nService`].

pub mod api;
pub mod builtin;
pub mod core;
pub mod error;
pub mod i18n;
pub mod render;
pub mod telemetry;

pub use api::{
    ChartRequest, ControlTable, ExploreSession, RegistryConfig, ResolvedPanel, ResolvedRegistry,
    VisTypeRegistry,
};
pub use error::{ControlError, ControlResult};
pub use i18n::{I18nService, Translator};
