use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{
    ChartContext, ControlDescriptor, ControlKind, ControlValue, FormData, TextInputKind,
    values_match,
};

use super::{ControlTable, VisTypeRegistry};

/// Where a visualization type mentions a control id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceSite {
    Row {
        section: usize,
        row: usize,
        slot: usize,
    },
    Override,
}

/// Control id referenced by a visualization type but missing from the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingReference {
    pub vis_type: String,
    pub control_id: String,
    pub site: ReferenceSite,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.site {
            ReferenceSite::Row { section, row, slot } => write!(
                f,
                "`{}` references `{}` at section {section}, row {row}, slot {slot}",
                self.vis_type, self.control_id
            ),
            ReferenceSite::Override => write!(
                f,
                "`{}` overrides unknown control `{}`",
                self.vis_type, self.control_id
            ),
        }
    }
}

/// Collects every dangling reference of every visualization type.
#[must_use]
pub fn find_dangling_references(
    table: &ControlTable,
    registry: &VisTypeRegistry,
) -> Vec<DanglingReference> {
    let mut dangling = Vec::new();
    for (vis_type, entry) in registry.iter() {
        for (section_index, section) in entry.sections.iter().enumerate() {
            for (row_index, row) in section.rows.iter().enumerate() {
                for (slot_index, slot) in row.iter().enumerate() {
                    let Some(control_id) = slot else {
                        continue;
                    };
                    if !table.contains(control_id) {
                        dangling.push(DanglingReference {
                            vis_type: vis_type.to_owned(),
                            control_id: control_id.clone(),
                            site: ReferenceSite::Row {
                                section: section_index,
                                row: row_index,
                                slot: slot_index,
                            },
                        });
                    }
                }
            }
        }
        for control_id in entry.control_overrides.keys() {
            if !table.contains(control_id) {
                dangling.push(DanglingReference {
                    vis_type: vis_type.to_owned(),
                    control_id: control_id.clone(),
                    site: ReferenceSite::Override,
                });
            }
        }
    }
    dangling
}

/// Control id placed more than once in the same row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedReference {
    pub vis_type: String,
    pub control_id: String,
    pub section: usize,
    pub row: usize,
    /// Slot of the second occurrence.
    pub slot: usize,
}

impl fmt::Display for RepeatedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` repeats `{}` at section {}, row {}, slot {}",
            self.vis_type, self.control_id, self.section, self.row, self.slot
        )
    }
}

/// Collects every control repeated within a single row. The same control
/// may still appear in several rows or sections.
#[must_use]
pub fn find_repeated_references(registry: &VisTypeRegistry) -> Vec<RepeatedReference> {
    let mut repeated = Vec::new();
    for (vis_type, entry) in registry.iter() {
        for (section_index, section) in entry.sections.iter().enumerate() {
            for (row_index, row) in section.rows.iter().enumerate() {
                let mut seen = HashSet::new();
                for (slot_index, control_id) in row
                    .iter()
                    .enumerate()
                    .filter_map(|(index, slot)| slot.as_deref().map(|id| (index, id)))
                {
                    if !seen.insert(control_id) {
                        repeated.push(RepeatedReference {
                            vis_type: vis_type.to_owned(),
                            control_id: control_id.to_owned(),
                            section: section_index,
                            row: row_index,
                            slot: slot_index,
                        });
                    }
                }
            }
        }
    }
    repeated
}

/// Default value that does not fit its control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultIssue {
    pub control_id: String,
    /// Set when the issue comes from a per-type override.
    pub vis_type: Option<String>,
    pub reason: String,
}

impl fmt::Display for DefaultIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.vis_type {
            Some(vis_type) => write!(
                f,
                "default of `{}` (as overridden by `{vis_type}`) {}",
                self.control_id, self.reason
            ),
            None => write!(f, "default of `{}` {}", self.control_id, self.reason),
        }
    }
}

/// Evaluates every base default and every overridden default with an empty
/// context and checks it against the control kind and static choices.
#[must_use]
pub fn find_default_issues(table: &ControlTable, registry: &VisTypeRegistry) -> Vec<DefaultIssue> {
    let mut issues = Vec::new();
    for (control_id, descriptor) in table.iter() {
        if let Some(reason) = check_default(descriptor) {
            issues.push(DefaultIssue {
                control_id: control_id.to_owned(),
                vis_type: None,
                reason,
            });
        }
    }
    for (vis_type, entry) in registry.iter() {
        for (control_id, control_override) in &entry.control_overrides {
            let Some(base) = table.get(control_id) else {
                continue;
            };
            let touches_default = control_override.default.is_some()
                || control_override.choices.is_some()
                || control_override.kind.is_some();
            if !touches_default {
                continue;
            }
            let merged = control_override.apply_to(base);
            if let Some(reason) = check_default(&merged) {
                issues.push(DefaultIssue {
                    control_id: control_id.clone(),
                    vis_type: Some(vis_type.to_owned()),
                    reason,
                });
            }
        }
    }
    issues
}

/// Returns why the default of `descriptor` is inconsistent, if it is.
#[must_use]
pub fn check_default(descriptor: &ControlDescriptor) -> Option<String> {
    let form_data = FormData::new();
    let context = ChartContext::new(&form_data, descriptor.choices.as_deref());
    let value = descriptor.default_value(&context);
    if value.is_null() {
        return None;
    }
    if let Some(reason) = check_shape(&descriptor.kind, &value) {
        return Some(reason);
    }
    check_against_choices(descriptor, &value)
}

fn check_shape(kind: &ControlKind, value: &ControlValue) -> Option<String> {
    let ok = match kind {
        ControlKind::Checkbox => value.is_boolean(),
        ControlKind::Text(TextInputKind::Integer) => match value {
            Value::Number(number) => number.is_i64() || number.is_u64(),
            Value::String(text) => text.is_empty() || text.trim().parse::<i64>().is_ok(),
            _ => false,
        },
        ControlKind::Text(TextInputKind::Float) => match value {
            Value::Number(_) => true,
            Value::String(text) => text.is_empty() || text.trim().parse::<f64>().is_ok(),
            _ => false,
        },
        ControlKind::Text(TextInputKind::Plain) => value.is_string() || value.is_number(),
        ControlKind::TextArea { .. }
        | ControlKind::DateFilter
        | ControlKind::VizType
        | ControlKind::Datasource
        | ControlKind::ColorScheme
        | ControlKind::Icon
        | ControlKind::DatePicker => value.is_string(),
        ControlKind::Select(options) => {
            if options.multi {
                value.is_array()
            } else {
                !value.is_array() && !value.is_object()
            }
        }
        ControlKind::Metrics { multi } => {
            if *multi {
                value.is_array()
            } else {
                !value.is_array()
            }
        }
        ControlKind::AdhocFilters | ControlKind::OrderSelect | ControlKind::Composite(_) => {
            value.is_array()
        }
        ControlKind::Bounds => value.as_array().is_some_and(|bounds| {
            bounds.len() == 2 && bounds.iter().all(|b| b.is_null() || b.is_number())
        }),
        ControlKind::ColorPicker => value.as_object().is_some_and(|rgba| {
            ["r", "g", "b"]
                .iter()
                .all(|channel| rgba.get(*channel).is_some_and(Value::is_number))
        }),
        ControlKind::Hidden | ControlKind::Button => true,
    };
    (!ok).then(|| format!("{value} does not fit a {}", kind.type_name()))
}

fn check_against_choices(descriptor: &ControlDescriptor, value: &ControlValue) -> Option<String> {
    if !descriptor.kind.restricts_to_choices() {
        return None;
    }
    let choices = descriptor.choices.as_deref().filter(|c| !c.is_empty())?;
    let in_choices = |candidate: &ControlValue| {
        choices
            .iter()
            .any(|choice| values_match(&choice.value, candidate))
    };
    match value {
        Value::Array(items) => items
            .iter()
            .find(|&item| !in_choices(item))
            .map(|item| format!("contains {item} which is not among its choices")),
        scalar => (!in_choices(scalar)).then(|| format!("{scalar} is not among its choices")),
    }
}
