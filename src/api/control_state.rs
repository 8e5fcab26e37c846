use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::core::{ChartContext, Choice, ControlKind, ControlValue, FormData, UiState};
use crate::i18n::Translator;

use super::resolved::{ResolvedControl, ResolvedPanel};

/// Form-data key holding the chart type.
pub const VIZ_TYPE_KEY: &str = "viz_type";

/// Everything a widget needs to draw one control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub id: String,
    pub kind: ControlKind,
    pub label: String,
    pub description: Option<String>,
    pub value: ControlValue,
    pub choices: Vec<Choice>,
    pub extra: IndexMap<String, ControlValue>,
    pub validation_errors: Vec<String>,
    pub visible: bool,
    pub render_trigger: bool,
}

impl ControlState {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }
}

/// Translated validation failures of one control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlValidationError {
    pub control_id: String,
    pub label: String,
    pub messages: Vec<String>,
}

impl fmt::Display for ControlValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.label, self.control_id, self.messages.join(", "))
    }
}

impl ResolvedPanel {
    /// Initial form data of this panel for the given editor state.
    ///
    /// Defaults are evaluated in panel order, so a computed default sees the
    /// effective value of every control before it: the value already in
    /// `state.form_data`, else that control's default. A default supplied by
    /// `map_state_to_props` wins over the descriptor's own default.
    #[must_use]
    pub fn default_form_data(&self, state: &UiState) -> FormData {
        let mut form_data = FormData::new();
        let mut effective = FormData::new();
        for control in self.controls() {
            let value = default_for(control, state, &effective);
            let seen = state
                .form_data
                .get(&control.id)
                .cloned()
                .unwrap_or_else(|| value.clone());
            effective.insert(control.id.clone(), seen);
            form_data.insert(control.id.clone(), value);
        }
        form_data.insert(VIZ_TYPE_KEY.to_owned(), Value::String(self.vis_type.clone()));
        trace!(vis_type = %self.vis_type, controls = form_data.len(), "evaluated default form data");
        form_data
    }

    /// Per-control state in panel order. Values come from `state.form_data`
    /// and fall back to the default.
    #[must_use]
    pub fn control_states(
        &self,
        state: &UiState,
        translator: &dyn Translator,
    ) -> IndexMap<String, ControlState> {
        let mut resolved_values = FormData::new();
        let mut states = IndexMap::with_capacity(self.control_count());
        for control in self.controls() {
            let descriptor = &control.descriptor;
            let props = descriptor.props(state);
            let value = match state.form_data.get(&control.id) {
                Some(value) => value.clone(),
                None => default_for(control, state, &resolved_values),
            };
            resolved_values.insert(control.id.clone(), value.clone());

            let choices = props
                .choices
                .or_else(|| descriptor.choices.clone())
                .unwrap_or_default()
                .into_iter()
                .map(|choice| Choice {
                    label: translator.translate(&choice.label),
                    value: choice.value,
                })
                .collect();
            let validation_errors = descriptor
                .validate(&value)
                .into_iter()
                .map(|message| translator.translate(message))
                .collect();

            states.insert(
                control.id.clone(),
                ControlState {
                    id: control.id.clone(),
                    kind: descriptor.kind.clone(),
                    label: translator.translate(&descriptor.label),
                    description: descriptor
                        .description
                        .as_deref()
                        .map(|text| translator.translate(text)),
                    value,
                    choices,
                    extra: props.extra,
                    validation_errors,
                    visible: descriptor.is_visible(state),
                    render_trigger: descriptor.render_trigger,
                },
            );
        }
        states
    }

    /// Validation failures of every visible control.
    #[must_use]
    pub fn validate(
        &self,
        state: &UiState,
        translator: &dyn Translator,
    ) -> Vec<ControlValidationError> {
        self.control_states(state, translator)
            .into_values()
            .filter(|control| control.visible && control.has_errors())
            .map(|control| ControlValidationError {
                control_id: control.id,
                label: control.label,
                messages: control.validation_errors,
            })
            .collect()
    }
}

fn default_for(control: &ResolvedControl, state: &UiState, resolved: &FormData) -> ControlValue {
    let descriptor = &control.descriptor;
    let props = descriptor.props(state);
    if let Some(default) = props.default {
        return default;
    }
    let choices = props.choices.as_deref().or(descriptor.choices.as_deref());
    descriptor.default_value(&ChartContext::new(resolved, choices))
}
