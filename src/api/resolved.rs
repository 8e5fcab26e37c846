use std::sync::Arc;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{ControlDescriptor, ControlId, ControlSetRow, VisualizationTypeEntry};
use crate::error::{ControlError, ControlResult};
use crate::i18n::Translator;

use super::integrity::{find_dangling_references, find_default_issues, find_repeated_references};
use super::{ControlTable, RegistryConfig, VisTypeRegistry};

/// Control descriptor after the per-type override has been applied.
#[derive(Debug, Clone)]
pub struct ResolvedControl {
    pub id: ControlId,
    pub descriptor: ControlDescriptor,
    /// Whether a per-type override contributed to `descriptor`.
    pub overridden: bool,
}

/// Row of resolved controls; `None` keeps an empty slot.
pub type ResolvedRow = SmallVec<[Option<Arc<ResolvedControl>>; 4]>;

#[derive(Debug, Clone)]
pub struct ResolvedSection {
    pub label: String,
    pub description: Option<String>,
    pub expanded: bool,
    pub rows: Vec<ResolvedRow>,
}

/// Fully merged control panel of one visualization type.
///
/// Section and row order is exactly the declared order.
#[derive(Debug, Clone)]
pub struct ResolvedPanel {
    pub vis_type: String,
    pub label: String,
    pub sections: Vec<ResolvedSection>,
    controls: IndexMap<ControlId, Arc<ResolvedControl>>,
}

impl ResolvedPanel {
    #[must_use]
    pub fn control(&self, id: &str) -> Option<&ResolvedControl> {
        self.controls.get(id).map(Arc::as_ref)
    }

    pub fn require_control(&self, id: &str) -> ControlResult<&ResolvedControl> {
        self.control(id)
            .ok_or_else(|| ControlError::UnknownControl(id.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.controls.contains_key(id)
    }

    /// Control ids in order of first appearance, without duplicates.
    pub fn control_ids(&self) -> impl Iterator<Item = &str> {
        self.controls.keys().map(String::as_str)
    }

    pub fn controls(&self) -> impl Iterator<Item = &ResolvedControl> {
        self.controls.values().map(Arc::as_ref)
    }

    #[must_use]
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Copy with section labels, control labels, descriptions and choice
    /// labels translated.
    #[must_use]
    pub fn localized(&self, translator: &dyn Translator) -> ResolvedPanel {
        let controls: IndexMap<ControlId, Arc<ResolvedControl>> = self
            .controls
            .iter()
            .map(|(id, control)| {
                let mut descriptor = control.descriptor.clone();
                descriptor.label = translator.translate(&descriptor.label);
                descriptor.description = descriptor
                    .description
                    .as_deref()
                    .map(|text| translator.translate(text));
                if let Some(choices) = descriptor.choices.as_mut() {
                    for choice in choices.iter_mut() {
                        choice.label = translator.translate(&choice.label);
                    }
                }
                let localized = ResolvedControl {
                    id: id.clone(),
                    descriptor,
                    overridden: control.overridden,
                };
                (id.clone(), Arc::new(localized))
            })
            .collect();

        let sections = self
            .sections
            .iter()
            .map(|section| ResolvedSection {
                label: translator.translate(&section.label),
                description: section
                    .description
                    .as_deref()
                    .map(|text| translator.translate(text)),
                expanded: section.expanded,
                rows: section
                    .rows
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|slot| {
                                slot.as_ref()
                                    .and_then(|control| controls.get(&control.id).cloned())
                            })
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        ResolvedPanel {
            vis_type: self.vis_type.clone(),
            label: translator.translate(&self.label),
            sections,
            controls,
        }
    }
}

/// Both registries merged and checked once, at startup.
#[derive(Debug, Clone)]
pub struct ResolvedRegistry {
    panels: IndexMap<String, ResolvedPanel>,
    config: RegistryConfig,
}

impl ResolvedRegistry {
    /// Validates referential integrity (reporting every dangling reference
    /// and every control repeated within a row), optionally checks defaults,
    /// then merges every referenced descriptor with its per-type override.
    pub fn build(
        table: &ControlTable,
        registry: &VisTypeRegistry,
        config: &RegistryConfig,
    ) -> ControlResult<Self> {
        let dangling = find_dangling_references(table, registry);
        if !dangling.is_empty() {
            for reference in &dangling {
                warn!(%reference, strict = config.strict_references, "dangling control reference");
            }
            if config.strict_references {
                return Err(ControlError::DanglingReferences(dangling));
            }
        }

        let repeated = find_repeated_references(registry);
        if !repeated.is_empty() {
            for reference in &repeated {
                warn!(%reference, strict = config.strict_references, "repeated control reference");
            }
            if config.strict_references {
                return Err(ControlError::RepeatedReferences(repeated));
            }
        }

        if config.check_defaults {
            let issues = find_default_issues(table, registry);
            if !issues.is_empty() {
                return Err(ControlError::InvalidDefaults(issues));
            }
        }

        let panels: IndexMap<String, ResolvedPanel> = registry
            .iter()
            .map(|(vis_type, entry)| {
                let panel = resolve_panel(table, vis_type, entry, config);
                (vis_type.to_owned(), panel)
            })
            .collect();

        debug!(
            panels = panels.len(),
            controls = table.len(),
            dropped_references = dangling.len() + repeated.len(),
            "built resolved registry"
        );

        Ok(Self {
            panels,
            config: config.clone(),
        })
    }

    pub fn panel(&self, vis_type: &str) -> ControlResult<&ResolvedPanel> {
        self.panels
            .get(vis_type)
            .ok_or_else(|| ControlError::UnknownVisType(vis_type.to_owned()))
    }

    pub fn vis_types(&self) -> impl Iterator<Item = &str> {
        self.panels.keys().map(String::as_str)
    }

    pub fn panels(&self) -> impl Iterator<Item = &ResolvedPanel> {
        self.panels.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

fn resolve_panel(
    table: &ControlTable,
    vis_type: &str,
    entry: &VisualizationTypeEntry,
    config: &RegistryConfig,
) -> ResolvedPanel {
    let mut controls: IndexMap<ControlId, Arc<ResolvedControl>> = IndexMap::new();
    let mut resolve = |id: &str| -> Option<Arc<ResolvedControl>> {
        if let Some(existing) = controls.get(id) {
            return Some(Arc::clone(existing));
        }
        let base = table.get(id)?;
        let control_override = entry.control_overrides.get(id);
        let control = Arc::new(ResolvedControl {
            id: id.to_owned(),
            descriptor: control_override.map_or_else(|| base.clone(), |o| o.apply_to(base)),
            overridden: control_override.is_some_and(|o| !o.is_empty()),
        });
        controls.insert(id.to_owned(), Arc::clone(&control));
        Some(control)
    };

    let sections = entry
        .sections
        .iter()
        .map(|section| ResolvedSection {
            label: section.label.clone(),
            description: section.description.clone(),
            expanded: section.expanded || config.expand_all_sections,
            rows: section
                .rows
                .iter()
                .filter_map(|row| resolve_row(row, &mut resolve))
                .collect(),
        })
        .collect();

    ResolvedPanel {
        vis_type: vis_type.to_owned(),
        label: entry.label.clone(),
        sections,
        controls,
    }
}

/// Dangling ids and repeats of an id already in the row vanish; a row left
/// without any control is dropped. Placeholders are kept.
fn resolve_row(
    row: &ControlSetRow,
    resolve: &mut impl FnMut(&str) -> Option<Arc<ResolvedControl>>,
) -> Option<ResolvedRow> {
    let mut resolved = ResolvedRow::new();
    let mut has_control = false;
    for (index, slot) in row.iter().enumerate() {
        match slot {
            None => resolved.push(None),
            Some(id) => {
                let repeated = row[..index].iter().flatten().any(|earlier| earlier == id);
                if repeated {
                    continue;
                }
                if let Some(control) = resolve(id) {
                    has_control = true;
                    resolved.push(Some(control));
                }
            }
        }
    }
    has_control.then_some(resolved)
}
