use serde_json::Value;

use crate::api::VisTypeRegistry;
use crate::core::{
    ControlKind, ControlOverride, ControlPanelSection, SelectOptions, VisualizationTypeEntry, row,
};
use crate::error::ControlResult;

use super::controls::d3_format_options;
use super::extension_visualizations::register_extension_vis_types;
use super::sections;

/// Entry starting with the datasource section every chart type shows.
pub(super) fn chart(label: &str) -> VisualizationTypeEntry {
    VisualizationTypeEntry::new(label).with_section(sections::datasource_and_viz_type())
}

fn number_format_label() -> ControlOverride {
    ControlOverride::new().label("Number format")
}

/// Every built-in chart type with its control panel: the standard types
/// followed by the extended pack.
pub fn vis_registry() -> ControlResult<VisTypeRegistry> {
    let mut registry = VisTypeRegistry::new()
        .with("table", table())?
        .with("pivot_table", pivot_table())?
        .with("dist_bar", dist_bar())?
        .with("pie", pie())?
        .with("line", line())?
        .with("bar", bar())?
        .with("area", area())?
        .with("big_number", big_number())?
        .with("big_number_total", big_number_total())?
        .with("word_cloud", word_cloud())?
        .with("markup", markup())?
        .with("histogram", histogram())?
        .with("bubble", bubble())?
        .with("heatmap", heatmap())?;
    register_extension_vis_types(&mut registry)?;
    Ok(registry)
}

fn table() -> VisualizationTypeEntry {
    chart("Table View")
        .with_section(sections::sqla_time())
        .with_section(
            ControlPanelSection::new("GROUP BY", true)
                .with_description("Use this section if you want a query that aggregates")
                .with_rows([
                    row(&["groupby"]),
                    row(&["metrics"]),
                    row(&["percent_metrics"]),
                    row(&["timeseries_limit_metric", "row_limit"]),
                    row(&["include_time", "order_desc"]),
                ]),
        )
        .with_section(
            ControlPanelSection::new("NOT GROUPED BY", true)
                .with_description("Use this section if you want to query atomic rows")
                .with_rows([
                    row(&["all_columns"]),
                    row(&["order_by_cols"]),
                    row(&["row_limit", ""]),
                ]),
        )
        .with_section(ControlPanelSection::new("Query", true).with_row(row(&["adhoc_filters"])))
        .with_section(ControlPanelSection::new("Options", true).with_rows([
            row(&["table_timestamp_format"]),
            row(&["page_length", ""]),
            row(&["include_search", "table_filter"]),
        ]))
        .with_override("metrics", ControlOverride::new().validators(Vec::new()))
        .with_override("time_grain_sqla", ControlOverride::new().default_value(Value::Null))
}

fn pivot_table() -> VisualizationTypeEntry {
    chart("Pivot Table")
        .with_section(sections::sqla_time())
        .with_section(ControlPanelSection::new("Query", true).with_rows([
            row(&["metrics"]),
            row(&["adhoc_filters"]),
            row(&["groupby"]),
            row(&["columns"]),
            row(&["row_limit", ""]),
        ]))
        .with_section(ControlPanelSection::new("Pivot Options", true).with_rows([
            row(&["pandas_aggfunc", "pivot_margins"]),
            row(&["number_format", "combine_metric"]),
        ]))
}

fn dist_bar() -> VisualizationTypeEntry {
    chart("Distribution - Bar Chart")
        .with_section(sections::sqla_time())
        .with_section(ControlPanelSection::new("Query", true).with_rows([
            row(&["metrics"]),
            row(&["adhoc_filters"]),
            row(&["groupby"]),
            row(&["columns"]),
            row(&["row_limit"]),
            row(&["contribution"]),
        ]))
        .with_section(ControlPanelSection::new("Chart Options", true).with_rows([
            row(&["color_scheme"]),
            row(&["show_legend", "show_bar_value"]),
            row(&["bar_stacked", "order_bars"]),
            row(&["y_axis_format", "y_axis_label"]),
            row(&["reduce_x_ticks", ""]),
            row(&["bottom_margin", "x_ticks_layout"]),
        ]))
        .with_override("groupby", ControlOverride::new().label("Series"))
        .with_override(
            "columns",
            ControlOverride::new()
                .label("Breakdowns")
                .description("Defines how each series is broken down"),
        )
}

fn pie() -> VisualizationTypeEntry {
    chart("Pie Chart")
        .with_section(sections::sqla_time())
        .with_section(ControlPanelSection::new("Query", true).with_rows([
            row(&["metric"]),
            row(&["adhoc_filters"]),
            row(&["groupby"]),
            row(&["row_limit", ""]),
        ]))
        .with_section(ControlPanelSection::new("Chart Options", true).with_rows([
            row(&["pie_label_type"]),
            row(&["donut", "show_legend"]),
            row(&["show_labels", "labels_outside"]),
            row(&["color_scheme"]),
        ]))
        .with_override("row_limit", ControlOverride::new().default_value(25))
}

fn time_series(label: &str, chart_options: ControlPanelSection) -> VisualizationTypeEntry {
    chart(label)
        .with_section(sections::sqla_time())
        .with_section(sections::time_series_query())
        .with_section(chart_options)
        .with_section(sections::x_axis())
        .with_section(sections::y_axis())
        .with_section(sections::advanced_analytics())
}

fn line() -> VisualizationTypeEntry {
    time_series(
        "Line Chart",
        ControlPanelSection::new("Chart Options", true).with_rows([
            row(&["color_scheme"]),
            row(&["show_brush", "show_legend"]),
            row(&["rich_tooltip", "show_markers"]),
            row(&["line_interpolation"]),
        ]),
    )
}

fn bar() -> VisualizationTypeEntry {
    time_series(
        "Time Series - Bar Chart",
        ControlPanelSection::new("Chart Options", true).with_rows([
            row(&["color_scheme"]),
            row(&["show_brush", "show_legend", "show_bar_value"]),
            row(&["rich_tooltip", "bar_stacked"]),
            row(&["reduce_x_ticks"]),
        ]),
    )
}

fn area() -> VisualizationTypeEntry {
    time_series(
        "Time Series - Stacked",
        ControlPanelSection::new("Chart Options", true).with_rows([
            row(&["show_brush", "show_legend"]),
            row(&["line_interpolation", "stacked_style"]),
            row(&["color_scheme"]),
            row(&["rich_tooltip", ""]),
        ]),
    )
    .with_override("line_interpolation", ControlOverride::new().default_value("monotone"))
}

fn big_number() -> VisualizationTypeEntry {
    chart("Big Number with Trendline")
        .with_section(sections::sqla_time())
        .with_section(
            ControlPanelSection::new("Query", true)
                .with_rows([row(&["metric"]), row(&["adhoc_filters"])]),
        )
        .with_section(ControlPanelSection::new("Options", true).with_rows([
            row(&["compare_lag", "compare_suffix"]),
            row(&["y_axis_format", ""]),
            row(&["show_trend_line", "start_y_axis_at_zero"]),
            row(&["color_picker", ""]),
        ]))
        .with_override("y_axis_format", number_format_label())
}

fn big_number_total() -> VisualizationTypeEntry {
    chart("Big Number")
        .with_section(sections::sqla_time())
        .with_section(
            ControlPanelSection::new("Query", true)
                .with_rows([row(&["metric"]), row(&["adhoc_filters"])]),
        )
        .with_section(
            ControlPanelSection::new("Options", true)
                .with_rows([row(&["subheader"]), row(&["y_axis_format"])]),
        )
        .with_override("y_axis_format", number_format_label())
}

fn word_cloud() -> VisualizationTypeEntry {
    chart("Word Cloud")
        .with_section(sections::sqla_time())
        .with_section(ControlPanelSection::new("Query", true).with_rows([
            row(&["series"]),
            row(&["metric"]),
            row(&["adhoc_filters"]),
            row(&["row_limit", ""]),
        ]))
        .with_section(ControlPanelSection::new("Options", true).with_rows([
            row(&["size_from", "size_to"]),
            row(&["rotation"]),
            row(&["color_scheme"]),
        ]))
}

fn markup() -> VisualizationTypeEntry {
    chart("Markup").with_section(
        ControlPanelSection::new("Code", true)
            .with_rows([row(&["markup_type"]), row(&["code"])]),
    )
}

fn histogram() -> VisualizationTypeEntry {
    chart("Histogram")
        .with_section(sections::sqla_time())
        .with_section(ControlPanelSection::new("Query", true).with_rows([
            row(&["all_columns_x"]),
            row(&["adhoc_filters"]),
            row(&["row_limit"]),
            row(&["groupby"]),
        ]))
        .with_section(ControlPanelSection::new("Chart Options", true).with_rows([
            row(&["color_scheme", "link_length"]),
            row(&["x_axis_label", "y_axis_label"]),
            row(&["global_opacity", "normalized"]),
        ]))
        .with_override(
            "all_columns_x",
            ControlOverride::new()
                .kind(ControlKind::select_with(SelectOptions::default().multi()))
                .label("Numeric Columns")
                .description("Select the numeric columns to draw the histogram"),
        )
        .with_override(
            "link_length",
            ControlOverride::new()
                .label("No of Bins")
                .description("Select the number of bins for the histogram")
                .default_value(5),
        )
        .with_override(
            "global_opacity",
            ControlOverride::new().description("Opacity of the bars. Between 0 and 1"),
        )
}

fn bubble() -> VisualizationTypeEntry {
    chart("Bubble Chart")
        .with_section(sections::sqla_time())
        .with_section(ControlPanelSection::new("Query", true).with_rows([
            row(&["series", "entity"]),
            row(&["x"]),
            row(&["y"]),
            row(&["adhoc_filters"]),
            row(&["size"]),
            row(&["max_bubble_size"]),
            row(&["limit", ""]),
        ]))
        .with_section(
            ControlPanelSection::new("Chart Options", true)
                .with_rows([row(&["color_scheme"]), row(&["show_legend", ""])]),
        )
        .with_section(ControlPanelSection::new("X Axis", true).with_rows([
            row(&["x_axis_label", "left_margin"]),
            row(&["x_axis_format", "x_log_scale"]),
            row(&["x_axis_showminmax", ""]),
        ]))
        .with_section(ControlPanelSection::new("Y Axis", true).with_rows([
            row(&["y_axis_label", "bottom_margin"]),
            row(&["y_axis_format", "y_log_scale"]),
            row(&["y_axis_showminmax", ""]),
        ]))
        .with_override(
            "x_axis_format",
            ControlOverride::new()
                .default_value(".3s")
                .choices(d3_format_options()),
        )
}

fn heatmap() -> VisualizationTypeEntry {
    chart("Heatmap")
        .with_section(sections::sqla_time())
        .with_section(ControlPanelSection::new("Query", true).with_rows([
            row(&["all_columns_x", "all_columns_y"]),
            row(&["metric"]),
            row(&["adhoc_filters"]),
            row(&["row_limit"]),
        ]))
        .with_section(ControlPanelSection::new("Heatmap Options", true).with_rows([
            row(&["linear_color_scheme"]),
            row(&["xscale_interval", "yscale_interval"]),
            row(&["canvas_image_rendering", "normalize_across"]),
            row(&["left_margin", "bottom_margin"]),
            row(&["y_axis_bounds", "y_axis_format"]),
            row(&["show_legend", "show_perc"]),
            row(&["show_values", "normalized"]),
        ]))
        .with_override(
            "normalized",
            ControlOverride::new()
                .description("Whether to apply a normal distribution based on rank on the color scale"),
        )
}
