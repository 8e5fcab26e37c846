use serde::{Deserialize, Serialize};

use crate::core::{Choice, ControlValue, FormData, UiState};
use crate::error::{ControlError, ControlResult};
use crate::i18n::Translator;

use super::ResolvedPanel;

pub const CHART_REQUEST_JSON_SCHEMA_V1: u32 = 1;
pub const PANEL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Values submitted to the chart backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub viz_type: String,
    #[serde(default)]
    pub datasource: Option<String>,
    pub form_data: FormData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequestJsonContractV1 {
    pub schema_version: u32,
    pub request: ChartRequest,
}

impl ChartRequest {
    pub fn to_json_pretty(&self) -> ControlResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ControlError::InvalidData(format!("failed to serialize chart request json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ControlResult<String> {
        let payload = ChartRequestJsonContractV1 {
            schema_version: CHART_REQUEST_JSON_SCHEMA_V1,
            request: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ControlError::InvalidData(format!("failed to serialize chart request contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ControlResult<Self> {
        if let Ok(request) = serde_json::from_str::<ChartRequest>(input) {
            return Ok(request);
        }
        let payload: ChartRequestJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ControlError::InvalidData(format!("failed to parse chart request json payload: {e}"))
        })?;
        if payload.schema_version != CHART_REQUEST_JSON_SCHEMA_V1 {
            return Err(ControlError::InvalidData(format!(
                "unsupported chart request schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.request)
    }
}

/// Evaluated description of one control, for consumers that draw panels
/// outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSnapshot {
    pub id: String,
    /// Wire tag of the widget family, e.g. `SelectControl`.
    #[serde(rename = "type")]
    pub type_name: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    pub value: ControlValue,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub validators: Vec<String>,
    #[serde(default)]
    pub render_trigger: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSnapshot {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    pub expanded: bool,
    /// Control ids per row; `null` is a placeholder.
    pub rows: Vec<Vec<Option<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub vis_type: String,
    pub label: String,
    pub sections: Vec<SectionSnapshot>,
    pub controls: Vec<ControlSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub panel: PanelSnapshot,
}

impl PanelSnapshot {
    pub fn to_json_pretty(&self) -> ControlResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ControlError::InvalidData(format!("failed to serialize panel snapshot json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ControlResult<String> {
        let payload = PanelSnapshotJsonContractV1 {
            schema_version: PANEL_SNAPSHOT_JSON_SCHEMA_V1,
            panel: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ControlError::InvalidData(format!("failed to serialize panel snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ControlResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PanelSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PanelSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ControlError::InvalidData(format!("failed to parse panel snapshot json payload: {e}"))
        })?;
        if payload.schema_version != PANEL_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ControlError::InvalidData(format!(
                "unsupported panel snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.panel)
    }

    #[must_use]
    pub fn control(&self, id: &str) -> Option<&ControlSnapshot> {
        self.controls.iter().find(|control| control.id == id)
    }
}

impl ResolvedPanel {
    /// Localized, evaluated snapshot of this panel for the given state.
    #[must_use]
    pub fn snapshot(&self, state: &UiState, translator: &dyn Translator) -> PanelSnapshot {
        let localized = self.localized(translator);
        let states = self.control_states(state, translator);
        let controls = states
            .into_values()
            .map(|control| {
                let validators = self
                    .control(&control.id)
                    .map(|resolved| {
                        resolved
                            .descriptor
                            .validators
                            .iter()
                            .map(|validator| validator.name().to_owned())
                            .collect()
                    })
                    .unwrap_or_default();
                ControlSnapshot {
                    type_name: control.kind.type_name().to_owned(),
                    id: control.id,
                    label: control.label,
                    description: control.description,
                    value: control.value,
                    choices: control.choices,
                    validators,
                    render_trigger: control.render_trigger,
                    visible: control.visible,
                }
            })
            .collect();
        let sections = localized
            .sections
            .iter()
            .map(|section| SectionSnapshot {
                label: section.label.clone(),
                description: section.description.clone(),
                expanded: section.expanded,
                rows: section
                    .rows
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|slot| slot.as_ref().map(|control| control.id.clone()))
                            .collect()
                    })
                    .collect(),
            })
            .collect();
        PanelSnapshot {
            vis_type: self.vis_type.clone(),
            label: localized.label,
            sections,
            controls,
        }
    }
}

fn default_visible() -> bool {
    true
}
