use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::{Choice, ControlValue, FormData};

/// Column exposed by a datasource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub column_name: String,
    #[serde(default)]
    pub verbose_name: Option<String>,
    #[serde(default)]
    pub is_dttm: bool,
    #[serde(default = "default_true")]
    pub groupby: bool,
    #[serde(default = "default_true")]
    pub filterable: bool,
    #[serde(default, rename = "type")]
    pub data_type: Option<String>,
}

impl ColumnMeta {
    #[must_use]
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            verbose_name: None,
            is_dttm: false,
            groupby: true,
            filterable: true,
            data_type: None,
        }
    }

    #[must_use]
    pub fn temporal(mut self) -> Self {
        self.is_dttm = true;
        self
    }

    #[must_use]
    pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
        self.verbose_name = Some(verbose_name.into());
        self
    }

    #[must_use]
    pub fn not_groupable(mut self) -> Self {
        self.groupby = false;
        self
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.verbose_name.as_deref().unwrap_or(&self.column_name)
    }
}

/// Saved metric exposed by a datasource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricMeta {
    pub metric_name: String,
    #[serde(default)]
    pub verbose_name: Option<String>,
    #[serde(default)]
    pub expression: Option<String>,
}

impl MetricMeta {
    #[must_use]
    pub fn new(metric_name: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            verbose_name: None,
            expression: None,
        }
    }

    #[must_use]
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.verbose_name.as_deref().unwrap_or(&self.metric_name)
    }
}

/// Metadata of the datasource currently selected in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasourceMeta {
    pub id: String,
    pub name: String,
    #[serde(default = "default_datasource_kind", rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub columns: Vec<ColumnMeta>,
    #[serde(default)]
    pub metrics: Vec<MetricMeta>,
    #[serde(default)]
    pub time_grain_choices: Vec<Choice>,
    #[serde(default)]
    pub order_by_choices: Vec<Choice>,
}

impl DatasourceMeta {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: default_datasource_kind(),
            columns: Vec::new(),
            metrics: Vec::new(),
            time_grain_choices: Vec::new(),
            order_by_choices: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_column(mut self, column: ColumnMeta) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn with_metric(mut self, metric: MetricMeta) -> Self {
        self.metrics.push(metric);
        self
    }

    #[must_use]
    pub fn with_time_grain(mut self, value: &str, label: &str) -> Self {
        self.time_grain_choices.push(Choice::new(value, label));
        self
    }

    /// Datasource reference in the `<id>__<type>` form used by form data.
    #[must_use]
    pub fn form_data_key(&self) -> String {
        format!("{}__{}", self.id, self.kind)
    }

    pub fn groupable_columns(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns.iter().filter(|column| column.groupby)
    }

    pub fn temporal_columns(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns.iter().filter(|column| column.is_dttm)
    }
}

/// Global editor state visible to `map_state_to_props` and visibility hooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default)]
    pub datasource: Option<DatasourceMeta>,
    #[serde(default)]
    pub form_data: FormData,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_datasource(mut self, datasource: DatasourceMeta) -> Self {
        self.datasource = Some(datasource);
        self
    }

    #[must_use]
    pub fn value(&self, control_id: &str) -> Option<&ControlValue> {
        self.form_data.get(control_id)
    }
}

/// Read-only context handed to computed defaults.
#[derive(Debug, Clone, Copy)]
pub struct ChartContext<'a> {
    /// Values resolved so far, in panel order.
    pub form_data: &'a FormData,
    /// Effective choices of the control being defaulted.
    pub choices: Option<&'a [Choice]>,
}

impl<'a> ChartContext<'a> {
    #[must_use]
    pub fn new(form_data: &'a FormData, choices: Option<&'a [Choice]>) -> Self {
        Self { form_data, choices }
    }

    #[must_use]
    pub fn first_choice(&self) -> Option<&'a ControlValue> {
        self.choices
            .and_then(|choices| choices.first())
            .map(|choice| &choice.value)
    }
}

/// Extra props derived from the UI state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlProps {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
    #[serde(default)]
    pub default: Option<ControlValue>,
    #[serde(default)]
    pub extra: IndexMap<String, ControlValue>,
}

impl ControlProps {
    #[must_use]
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: ControlValue) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: &str, value: ControlValue) -> Self {
        self.extra.insert(key.to_owned(), value);
        self
    }
}

fn default_true() -> bool {
    true
}

fn default_datasource_kind() -> String {
    "table".to_owned()
}
