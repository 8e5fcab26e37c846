//! Sections reused across several visualization types.

use crate::core::{ControlPanelSection, row};

#[must_use]
pub fn datasource_and_viz_type() -> ControlPanelSection {
    ControlPanelSection::new("Datasource & Chart Type", true).with_rows([
        row(&["datasource"]),
        row(&["viz_type"]),
        row(&["slice_id", "cache_timeout", "url_params"]),
    ])
}

#[must_use]
pub fn color_scheme() -> ControlPanelSection {
    ControlPanelSection::new("Color Scheme", false).with_row(row(&["color_scheme"]))
}

#[must_use]
pub fn sqla_time() -> ControlPanelSection {
    ControlPanelSection::new("Time", true)
        .with_description("Time related form attributes")
        .with_rows([
            row(&["granularity_sqla", "time_grain_sqla"]),
            row(&["time_range"]),
        ])
}

/// Query section of the time-series charts.
#[must_use]
pub fn time_series_query() -> ControlPanelSection {
    ControlPanelSection::new("Query", true).with_rows([
        row(&["metrics"]),
        row(&["adhoc_filters"]),
        row(&["groupby"]),
        row(&["limit", "timeseries_limit_metric"]),
        row(&["order_desc", "contribution"]),
        row(&["row_limit", ""]),
    ])
}

#[must_use]
pub fn advanced_analytics() -> ControlPanelSection {
    ControlPanelSection::new("Advanced Analytics", false)
        .with_description(
            "This section contains options that allow for advanced analytical post processing \
             of query results",
        )
        .with_rows([
            row(&["rolling_type", "rolling_periods", "min_periods"]),
            row(&["time_compare", "comparison_type"]),
            row(&["resample_rule", "resample_how", "resample_fillmethod"]),
        ])
}

#[must_use]
pub fn x_axis() -> ControlPanelSection {
    ControlPanelSection::new("X Axis", true).with_rows([
        row(&["x_axis_label", "bottom_margin"]),
        row(&["x_axis_showminmax", "x_axis_format"]),
        row(&["x_ticks_layout", ""]),
    ])
}

#[must_use]
pub fn y_axis() -> ControlPanelSection {
    ControlPanelSection::new("Y Axis", true).with_rows([
        row(&["y_axis_label", "left_margin"]),
        row(&["y_axis_showminmax", "y_log_scale"]),
        row(&["y_axis_format", "y_axis_bounds"]),
    ])
}
