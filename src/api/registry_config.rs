use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Options of the validated registry construction.
///
/// Serializable so hosts can keep it next to their own settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Fail on dangling control references instead of dropping them.
    #[serde(default = "default_strict_references")]
    pub strict_references: bool,
    /// Evaluate every default once at build time and reject inconsistent ones.
    #[serde(default = "default_check_defaults")]
    pub check_defaults: bool,
    /// Mark every section expanded regardless of its declaration.
    #[serde(default)]
    pub expand_all_sections: bool,
    /// Locale a host should activate for control labels.
    #[serde(default)]
    pub locale: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_references: default_strict_references(),
            check_defaults: default_check_defaults(),
            expand_all_sections: false,
            locale: None,
        }
    }
}

impl RegistryConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strict_references(mut self, strict: bool) -> Self {
        self.strict_references = strict;
        self
    }

    #[must_use]
    pub fn with_check_defaults(mut self, check: bool) -> Self {
        self.check_defaults = check;
        self
    }

    #[must_use]
    pub fn with_expand_all_sections(mut self, expand: bool) -> Self {
        self.expand_all_sections = expand;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn from_json_str(input: &str) -> ControlResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ControlError::InvalidData(format!("failed to parse registry config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ControlResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ControlError::InvalidData(format!("failed to serialize registry config: {e}"))
        })
    }
}

fn default_strict_references() -> bool {
    true
}

fn default_check_defaults() -> bool {
    true
}
