use std::collections::HashSet;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::api::{ControlState, ResolvedPanel};
use crate::error::{ControlError, ControlResult};
use crate::render::{Widget, build_widget};

/// One drawn control.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSlot {
    pub control_id: String,
    pub label: String,
    pub description: Option<String>,
    pub widget: Widget,
    pub errors: Vec<String>,
    pub render_trigger: bool,
}

/// Row of slots; `None` is an empty placeholder cell.
pub type FrameRow = SmallVec<[Option<WidgetSlot>; 4]>;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionFrame {
    pub label: String,
    pub description: Option<String>,
    pub expanded: bool,
    pub rows: Vec<FrameRow>,
}

/// Backend-agnostic layout of one control panel draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelFrame {
    pub vis_type: String,
    pub label: String,
    pub sections: Vec<SectionFrame>,
}

impl PanelFrame {
    #[must_use]
    pub fn new(vis_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            vis_type: vis_type.into(),
            label: label.into(),
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: SectionFrame) -> Self {
        self.sections.push(section);
        self
    }

    /// Lays `panel` out with the given control states. Section labels are
    /// taken as-is, so pass a localized panel for translated output.
    ///
    /// Hidden controls leave no slot; rows and sections left without widgets
    /// are dropped.
    #[must_use]
    pub fn build(panel: &ResolvedPanel, states: &IndexMap<String, ControlState>) -> Self {
        let mut frame = Self::new(panel.vis_type.clone(), panel.label.clone());
        for section in &panel.sections {
            let rows: Vec<FrameRow> = section
                .rows
                .iter()
                .filter_map(|row| {
                    let mut cells = FrameRow::new();
                    let mut has_widget = false;
                    for slot in row {
                        match slot {
                            None => cells.push(None),
                            Some(control) => {
                                let Some(state) = states.get(&control.id) else {
                                    continue;
                                };
                                if !state.visible {
                                    continue;
                                }
                                has_widget = true;
                                cells.push(Some(WidgetSlot {
                                    control_id: state.id.clone(),
                                    label: state.label.clone(),
                                    description: state.description.clone(),
                                    widget: build_widget(state),
                                    errors: state.validation_errors.clone(),
                                    render_trigger: state.render_trigger,
                                }));
                            }
                        }
                    }
                    has_widget.then_some(cells)
                })
                .collect();
            if rows.is_empty() {
                continue;
            }
            frame.sections.push(SectionFrame {
                label: section.label.clone(),
                description: section.description.clone(),
                expanded: section.expanded,
                rows,
            });
        }
        frame
    }

    pub fn validate(&self) -> ControlResult<()> {
        for section in &self.sections {
            for (row_index, row) in section.rows.iter().enumerate() {
                if row.iter().all(Option::is_none) {
                    return Err(ControlError::InvalidData(format!(
                        "section `{}` row {row_index} has no widget",
                        section.label
                    )));
                }
                let mut seen = HashSet::new();
                for slot in row.iter().flatten() {
                    if slot.control_id.trim().is_empty() {
                        return Err(ControlError::InvalidData(format!(
                            "section `{}` row {row_index} has an unnamed widget",
                            section.label
                        )));
                    }
                    if !seen.insert(slot.control_id.as_str()) {
                        return Err(ControlError::InvalidData(format!(
                            "control `{}` appears twice in section `{}` row {row_index}",
                            slot.control_id, section.label
                        )));
                    }
                    slot.widget.validate()?;
                }
            }
        }
        Ok(())
    }

    pub fn slots(&self) -> impl Iterator<Item = &WidgetSlot> {
        self.sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .flat_map(|row| row.iter().flatten())
    }

    #[must_use]
    pub fn widget_count(&self) -> usize {
        self.slots().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
