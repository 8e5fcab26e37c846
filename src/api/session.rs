use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::core::{ControlValue, DatasourceMeta, FormData, UiState};
use crate::error::{ControlError, ControlResult};
use crate::i18n::Translator;
use crate::render::{PanelFrame, PanelRenderer};

use super::control_state::{ControlState, VIZ_TYPE_KEY};
use super::json_contract::ChartRequest;
use super::resolved::{ResolvedPanel, ResolvedRegistry};

/// Form-data key holding the `<id>__<type>` datasource reference.
pub const DATASOURCE_KEY: &str = "datasource";

/// Editing session of one chart: current chart type, datasource and values.
///
/// The registry and the translator are borrowed; the session owns only the
/// mutable editor state and its renderer.
pub struct ExploreSession<'a, R: PanelRenderer> {
    registry: &'a ResolvedRegistry,
    translator: &'a dyn Translator,
    renderer: R,
    panel: &'a ResolvedPanel,
    state: UiState,
}

impl<'a, R: PanelRenderer> ExploreSession<'a, R> {
    pub fn new(
        registry: &'a ResolvedRegistry,
        translator: &'a dyn Translator,
        renderer: R,
        vis_type: &str,
    ) -> ControlResult<Self> {
        let panel = registry.panel(vis_type)?;
        let mut state = UiState::new();
        state.form_data = panel.default_form_data(&state);
        debug!(vis_type, controls = panel.control_count(), "opened explore session");
        Ok(Self {
            registry,
            translator,
            renderer,
            panel,
            state,
        })
    }

    #[must_use]
    pub fn vis_type(&self) -> &str {
        &self.panel.vis_type
    }

    #[must_use]
    pub fn panel(&self) -> &'a ResolvedPanel {
        self.panel
    }

    /// Switches chart type. Values of controls the new panel shares are kept;
    /// every other control gets its default.
    pub fn select_vis_type(&mut self, vis_type: &str) -> ControlResult<()> {
        let panel = self.registry.panel(vis_type)?;
        let previous = std::mem::take(&mut self.state.form_data);

        let mut carried = FormData::new();
        for id in panel.control_ids() {
            if id == VIZ_TYPE_KEY {
                continue;
            }
            if let Some(value) = previous.get(id) {
                carried.insert(id.to_owned(), value.clone());
            }
        }
        let kept = carried.len();

        self.state.form_data = carried;
        let defaults = panel.default_form_data(&self.state);
        let mut form_data = FormData::with_capacity(defaults.len());
        for (id, default) in defaults {
            let value = match self.state.form_data.shift_remove(&id) {
                Some(value) if id != VIZ_TYPE_KEY => value,
                _ => default,
            };
            form_data.insert(id, value);
        }
        self.state.form_data = form_data;
        self.panel = panel;

        debug!(vis_type, kept, "switched visualization type");
        Ok(())
    }

    /// Sets the datasource. Controls whose derived props or default change
    /// with it are reset to the new default; every other value is kept.
    pub fn set_datasource(&mut self, datasource: DatasourceMeta) {
        let key = datasource.form_data_key();
        let previous = self.state.clone();
        let previous_defaults = self.panel.default_form_data(&previous);

        self.state.datasource = Some(datasource);
        self.state
            .form_data
            .insert(DATASOURCE_KEY.to_owned(), Value::String(key.clone()));
        let defaults = self.panel.default_form_data(&self.state);

        let mut reset = 0usize;
        for control in self.panel.controls() {
            if control.id == DATASOURCE_KEY || control.id == VIZ_TYPE_KEY {
                continue;
            }
            let descriptor = &control.descriptor;
            let props_changed = descriptor.map_state_to_props.is_some()
                && descriptor.props(&previous) != descriptor.props(&self.state);
            let default_changed = previous_defaults.get(&control.id) != defaults.get(&control.id);
            if !props_changed && !default_changed {
                continue;
            }
            if let Some(value) = defaults.get(&control.id) {
                self.state.form_data.insert(control.id.clone(), value.clone());
                reset += 1;
            }
        }
        debug!(datasource = %key, reset, "set datasource");
    }

    /// Stores a value for a control of the current panel.
    pub fn set_value(&mut self, control_id: &str, value: ControlValue) -> ControlResult<()> {
        if !self.panel.contains(control_id) {
            warn!(control = control_id, vis_type = %self.panel.vis_type, "value for unknown control");
            return Err(ControlError::UnknownControl(control_id.to_owned()));
        }
        trace!(control = control_id, %value, "set control value");
        self.state.form_data.insert(control_id.to_owned(), value);
        Ok(())
    }

    #[must_use]
    pub fn value(&self, control_id: &str) -> Option<&ControlValue> {
        self.state.form_data.get(control_id)
    }

    #[must_use]
    pub fn form_data(&self) -> &FormData {
        &self.state.form_data
    }

    #[must_use]
    pub fn ui_state(&self) -> &UiState {
        &self.state
    }

    #[must_use]
    pub fn control_states(&self) -> IndexMap<String, ControlState> {
        self.panel.control_states(&self.state, self.translator)
    }

    /// Builds a localized frame of the current panel and hands it to the
    /// renderer.
    pub fn render(&mut self) -> ControlResult<()> {
        let localized = self.panel.localized(self.translator);
        let frame = PanelFrame::build(&localized, &self.control_states());
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Chart request of the current values, or every validation failure.
    pub fn chart_request(&self) -> ControlResult<ChartRequest> {
        let errors = self.panel.validate(&self.state, self.translator);
        if !errors.is_empty() {
            warn!(vis_type = %self.panel.vis_type, invalid = errors.len(), "chart request rejected");
            return Err(ControlError::InvalidControls(errors));
        }
        Ok(ChartRequest {
            viz_type: self.panel.vis_type.clone(),
            datasource: self
                .state
                .datasource
                .as_ref()
                .map(DatasourceMeta::form_data_key),
            form_data: self.state.form_data.clone(),
        })
    }
}
