use indexmap::IndexMap;
use tracing::trace;

use crate::core::ControlDescriptor;
use crate::error::{ControlError, ControlResult};

/// Control id -> descriptor mapping, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ControlTable {
    controls: IndexMap<String, ControlDescriptor>,
}

impl ControlTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a control under a unique, non-empty id.
    pub fn insert(&mut self, id: &str, descriptor: ControlDescriptor) -> ControlResult<()> {
        if id.trim().is_empty() {
            return Err(ControlError::InvalidData(
                "control id must not be empty".to_owned(),
            ));
        }
        if self.controls.contains_key(id) {
            return Err(ControlError::DuplicateControl(id.to_owned()));
        }
        trace!(control = id, kind = descriptor.kind.type_name(), "register control");
        self.controls.insert(id.to_owned(), descriptor);
        Ok(())
    }

    /// Builder-style `insert`.
    pub fn with(mut self, id: &str, descriptor: ControlDescriptor) -> ControlResult<Self> {
        self.insert(id, descriptor)?;
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ControlDescriptor> {
        self.controls.get(id)
    }

    /// Lookup that treats a missing id as an error.
    pub fn require(&self, id: &str) -> ControlResult<&ControlDescriptor> {
        self.controls
            .get(id)
            .ok_or_else(|| ControlError::UnknownControl(id.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.controls.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.controls.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControlDescriptor)> {
        self.controls
            .iter()
            .map(|(id, descriptor)| (id.as_str(), descriptor))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
