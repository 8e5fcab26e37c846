//! Pure state mappings and computed defaults shared by the built-in controls.

use serde_json::{Value, json};

use crate::core::{ChartContext, Choice, ControlProps, ControlValue, DatasourceMeta, UiState};

/// Metric picked by default: `count` when the datasource has it, else the
/// first saved metric.
#[must_use]
pub fn main_metric(datasource: &DatasourceMeta) -> Option<&str> {
    datasource
        .metrics
        .iter()
        .find(|metric| metric.metric_name == "count")
        .or_else(|| datasource.metrics.first())
        .map(|metric| metric.metric_name.as_str())
}

fn metric_choices(datasource: &DatasourceMeta) -> Vec<Choice> {
    datasource
        .metrics
        .iter()
        .map(|metric| Choice::new(metric.metric_name.as_str(), metric.display_name()))
        .collect()
}

fn column_names(datasource: &DatasourceMeta) -> Value {
    Value::Array(
        datasource
            .columns
            .iter()
            .map(|column| Value::String(column.column_name.clone()))
            .collect(),
    )
}

pub fn datasource_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    ControlProps::default()
        .with_extra("datasource_name", Value::String(datasource.name.clone()))
        .with_extra("datasource_type", Value::String(datasource.kind.clone()))
}

/// Saved metrics as choices, the main metric wrapped in a list as default.
pub fn metrics_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    let mut props = ControlProps::default()
        .with_choices(metric_choices(datasource))
        .with_extra("columns", column_names(datasource));
    if let Some(metric) = main_metric(datasource) {
        props = props.with_default(json!([metric]));
    }
    props
}

/// Like [`metrics_props`] for single-metric controls.
pub fn metric_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    let mut props = ControlProps::default()
        .with_choices(metric_choices(datasource))
        .with_extra("columns", column_names(datasource));
    if let Some(metric) = main_metric(datasource) {
        props = props.with_default(Value::String(metric.to_owned()));
    }
    props
}

/// Saved metrics as choices without a default.
pub fn optional_metric_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    ControlProps::default().with_choices(metric_choices(datasource))
}

pub fn groupable_columns_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    ControlProps::default().with_choices(
        datasource
            .groupable_columns()
            .map(|column| Choice::new(column.column_name.as_str(), column.display_name()))
            .collect(),
    )
}

pub fn all_columns_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    ControlProps::default().with_choices(
        datasource
            .columns
            .iter()
            .map(|column| Choice::new(column.column_name.as_str(), column.display_name()))
            .collect(),
    )
}

pub fn temporal_columns_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    ControlProps::default().with_choices(
        datasource
            .temporal_columns()
            .map(|column| Choice::new(column.column_name.as_str(), column.display_name()))
            .collect(),
    )
}

/// Datasource time grains replace the static ones when it declares any.
pub fn time_grain_props(state: &UiState) -> ControlProps {
    match &state.datasource {
        Some(datasource) if !datasource.time_grain_choices.is_empty() => {
            ControlProps::default().with_choices(datasource.time_grain_choices.clone())
        }
        _ => ControlProps::default(),
    }
}

pub fn order_by_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    ControlProps::default().with_choices(datasource.order_by_choices.clone())
}

pub fn adhoc_filter_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    ControlProps::default()
        .with_choices(
            datasource
                .columns
                .iter()
                .filter(|column| column.filterable)
                .map(|column| Choice::new(column.column_name.as_str(), column.display_name()))
                .collect(),
        )
        .with_extra("saved_metrics", metric_names(datasource))
}

/// Only columns flagged filterable, for filter box controls.
pub fn filterable_columns_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    ControlProps::default().with_choices(
        datasource
            .columns
            .iter()
            .filter(|column| column.filterable)
            .map(|column| Choice::new(column.column_name.as_str(), column.display_name()))
            .collect(),
    )
}

/// Saved metrics followed by every column, for grid layout selectors.
pub fn metrics_and_columns_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    let mut choices = metric_choices(datasource);
    choices.extend(
        datasource
            .columns
            .iter()
            .map(|column| Choice::new(column.column_name.as_str(), column.display_name())),
    );
    ControlProps::default().with_choices(choices)
}

/// Columns to build rules over, with saved metric names and the datasource
/// name for the rule dialog.
pub fn rule_editor_props(state: &UiState) -> ControlProps {
    let Some(datasource) = &state.datasource else {
        return ControlProps::default();
    };
    all_columns_props(state)
        .with_extra("metrics", metric_names(datasource))
        .with_extra("datasource_name", Value::String(datasource.name.clone()))
}

fn metric_names(datasource: &DatasourceMeta) -> Value {
    Value::Array(
        datasource
            .metrics
            .iter()
            .map(|metric| Value::String(metric.metric_name.clone()))
            .collect(),
    )
}

/// Code editor language follows the selected markup type.
pub fn code_language_props(state: &UiState) -> ControlProps {
    let language = state
        .value("markup_type")
        .and_then(Value::as_str)
        .unwrap_or("markdown");
    ControlProps::default().with_extra("language", Value::String(language.to_owned()))
}

/// First effective choice, or `null` without choices.
pub fn first_choice(context: &ChartContext<'_>) -> ControlValue {
    context.first_choice().cloned().unwrap_or(Value::Null)
}

/// First effective choice wrapped in a list, or `null` without choices.
pub fn first_choice_list(context: &ChartContext<'_>) -> ControlValue {
    context
        .first_choice()
        .map_or(Value::Null, |value| Value::Array(vec![value.clone()]))
}

/// Rolling window parameters only matter once a rolling function is chosen.
pub fn rolling_enabled(state: &UiState) -> bool {
    state
        .value("rolling_type")
        .and_then(Value::as_str)
        .is_some_and(|rolling| !rolling.is_empty() && rolling != "None")
}

pub fn resample_enabled(state: &UiState) -> bool {
    state
        .value("resample_rule")
        .is_some_and(|rule| !crate::core::is_empty_value(rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColumnMeta, FormData, MetricMeta};

    fn datasource() -> DatasourceMeta {
        DatasourceMeta::new("3", "birth_names")
            .with_column(ColumnMeta::new("ds").temporal())
            .with_column(ColumnMeta::new("name").with_verbose_name("Name"))
            .with_column(ColumnMeta::new("num").not_groupable())
            .with_metric(MetricMeta::new("sum__num"))
            .with_metric(MetricMeta::new("count"))
    }

    #[test]
    fn main_metric_prefers_count() {
        assert_eq!(main_metric(&datasource()), Some("count"));
        let without_count =
            DatasourceMeta::new("1", "t").with_metric(MetricMeta::new("avg__x"));
        assert_eq!(main_metric(&without_count), Some("avg__x"));
        assert_eq!(main_metric(&DatasourceMeta::new("1", "t")), None);
    }

    #[test]
    fn column_props_filter_by_role() {
        let state = UiState::new().with_datasource(datasource());
        let groupable = groupable_columns_props(&state).choices.unwrap_or_default();
        assert_eq!(
            groupable.iter().map(|c| c.label.as_str()).collect::<Vec<_>>(),
            ["ds", "Name"]
        );
        let temporal = temporal_columns_props(&state).choices.unwrap_or_default();
        assert_eq!(temporal, vec![Choice::new("ds", "ds")]);
        assert_eq!(metrics_props(&state).default, Some(json!(["count"])));
    }

    #[test]
    fn props_are_empty_without_datasource() {
        let state = UiState::new();
        assert_eq!(metrics_props(&state), ControlProps::default());
        assert_eq!(time_grain_props(&state), ControlProps::default());
    }

    #[test]
    fn first_choice_reads_context() {
        let form_data = FormData::new();
        let choices = [Choice::new("ds", "ds")];
        assert_eq!(first_choice(&ChartContext::new(&form_data, Some(&choices))), json!("ds"));
        assert_eq!(first_choice(&ChartContext::new(&form_data, None)), Value::Null);
        assert_eq!(
            first_choice_list(&ChartContext::new(&form_data, Some(&choices))),
            json!(["ds"])
        );
        assert_eq!(first_choice_list(&ChartContext::new(&form_data, Some(&[]))), Value::Null);
    }

    #[test]
    fn grid_selectors_list_metrics_before_columns() {
        let state = UiState::new().with_datasource(datasource());
        let values: Vec<ControlValue> = metrics_and_columns_props(&state)
            .choices
            .unwrap_or_default()
            .into_iter()
            .map(|choice| choice.value)
            .collect();
        assert_eq!(values, [json!("sum__num"), json!("count"), json!("ds"), json!("name"), json!("num")]);

        let rules = rule_editor_props(&state);
        assert_eq!(rules.choices.map(|c| c.len()), Some(3));
        assert_eq!(rules.extra["datasource_name"], json!("birth_names"));
        assert_eq!(rules.extra["metrics"], json!(["sum__num", "count"]));
    }

    #[test]
    fn rolling_visibility_tracks_rolling_type() {
        let mut state = UiState::new();
        assert!(!rolling_enabled(&state));
        state.form_data.insert("rolling_type".to_owned(), json!("None"));
        assert!(!rolling_enabled(&state));
        state.form_data.insert("rolling_type".to_owned(), json!("mean"));
        assert!(rolling_enabled(&state));
    }
}
