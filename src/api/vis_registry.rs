use indexmap::IndexMap;
use tracing::trace;

use crate::core::VisualizationTypeEntry;
use crate::error::{ControlError, ControlResult};

/// Chart-type id -> control panel layout, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct VisTypeRegistry {
    entries: IndexMap<String, VisualizationTypeEntry>,
}

impl VisTypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a chart type under a unique, non-empty id.
    pub fn insert(&mut self, id: &str, entry: VisualizationTypeEntry) -> ControlResult<()> {
        if id.trim().is_empty() {
            return Err(ControlError::InvalidData(
                "visualization type id must not be empty".to_owned(),
            ));
        }
        if self.entries.contains_key(id) {
            return Err(ControlError::DuplicateVisType(id.to_owned()));
        }
        trace!(vis_type = id, sections = entry.sections.len(), "register visualization type");
        self.entries.insert(id.to_owned(), entry);
        Ok(())
    }

    pub fn with(mut self, id: &str, entry: VisualizationTypeEntry) -> ControlResult<Self> {
        self.insert(id, entry)?;
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&VisualizationTypeEntry> {
        self.entries.get(id)
    }

    pub fn require(&self, id: &str) -> ControlResult<&VisualizationTypeEntry> {
        self.entries
            .get(id)
            .ok_or_else(|| ControlError::UnknownVisType(id.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VisualizationTypeEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
