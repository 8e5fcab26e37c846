use indexmap::IndexMap;

use super::control::ControlOverride;
use super::value::ControlId;

/// One row of controls rendered side by side. `None` keeps an empty slot.
pub type ControlSetRow = Vec<Option<ControlId>>;

/// Builds a row from ids; an empty string stands for a placeholder slot.
#[must_use]
pub fn row(ids: &[&str]) -> ControlSetRow {
    ids.iter()
        .map(|id| (!id.is_empty()).then(|| (*id).to_owned()))
        .collect()
}

/// Titled group of control rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanelSection {
    pub label: String,
    pub description: Option<String>,
    pub expanded: bool,
    pub rows: Vec<ControlSetRow>,
}

impl ControlPanelSection {
    #[must_use]
    pub fn new(label: impl Into<String>, expanded: bool) -> Self {
        Self {
            label: label.into(),
            description: None,
            expanded,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_row(mut self, row: ControlSetRow) -> Self {
        self.rows.push(row);
        self
    }

    #[must_use]
    pub fn with_rows<I: IntoIterator<Item = ControlSetRow>>(mut self, rows: I) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Referenced control ids, in row order, placeholders skipped.
    pub fn control_ids(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().flatten())
            .map(String::as_str)
    }
}

/// Control panel layout of one chart type.
#[derive(Debug, Clone, Default)]
pub struct VisualizationTypeEntry {
    pub label: String,
    pub sections: Vec<ControlPanelSection>,
    pub control_overrides: IndexMap<ControlId, ControlOverride>,
}

impl VisualizationTypeEntry {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sections: Vec::new(),
            control_overrides: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: ControlPanelSection) -> Self {
        self.sections.push(section);
        self
    }

    #[must_use]
    pub fn with_override(mut self, control_id: &str, control_override: ControlOverride) -> Self {
        self.control_overrides
            .insert(control_id.to_owned(), control_override);
        self
    }

    pub fn control_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().flat_map(ControlPanelSection::control_ids)
    }
}
