use serde_json::json;

use crate::api::ControlTable;
use crate::core::{
    Choice, ControlDescriptor, ControlKind, SelectOptions, Validator, choices_from_pairs,
    choices_from_values,
};
use crate::error::ControlResult;

use super::extension_controls::register_extension_controls;
use super::state_props::{
    adhoc_filter_props, all_columns_props, code_language_props, datasource_props, first_choice,
    groupable_columns_props, metric_props, metrics_props, optional_metric_props, order_by_props,
    resample_enabled, rolling_enabled, temporal_columns_props, time_grain_props,
};

pub const ROW_LIMIT_OPTIONS: [u32; 9] = [10, 50, 100, 250, 500, 1000, 5000, 10000, 50000];
pub const SERIES_LIMITS: [u32; 7] = [0, 5, 10, 25, 50, 100, 500];

const D3_FORMAT_DOCS: &str = "D3 format syntax: https://github.com/d3/d3-format";

/// Number formats offered by axis and value format selectors.
#[must_use]
pub fn d3_format_options() -> Vec<Choice> {
    choices_from_pairs([
        (".1s", ".1s | 12k"),
        (".3s", ".3s | 12.3k"),
        (".1%", ".1% | 12.3%"),
        (".3%", ".3% | 1234543.210%"),
        (".4r", ".4r | 12350"),
        (".3f", ".3f | 12345.432"),
        ("+,", "+, | +12,345.4321"),
        ("$,.2f", "$,.2f | $12,345.43"),
    ])
}

/// Time formats offered by temporal axis selectors.
#[must_use]
pub fn d3_time_format_options() -> Vec<Choice> {
    choices_from_pairs([
        ("smart_date", "Adaptative formating"),
        ("%d/%m/%Y", "%d/%m/%Y | 14/01/2019"),
        ("%m/%d/%Y", "%m/%d/%Y | 01/14/2019"),
        ("%Y-%m-%d", "%Y-%m-%d | 2019-01-14"),
        ("%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S | 2019-01-14 01:32:10"),
        ("%d-%m-%Y %H:%M:%S", "%d-%m-%Y %H:%M:%S | 14-01-2019 01:32:10"),
        ("%H:%M:%S", "%H:%M:%S | 01:32:10"),
    ])
}

fn checkbox(label: &str, default: bool) -> ControlDescriptor {
    ControlDescriptor::new(ControlKind::Checkbox, label).with_default(default)
}

fn free_form_select() -> ControlKind {
    ControlKind::select_with(SelectOptions::default().free_form())
}

fn multi_select() -> ControlKind {
    ControlKind::select_with(SelectOptions::default().multi())
}

fn margin(label: &str) -> ControlDescriptor {
    ControlDescriptor::new(
        ControlKind::select_with(SelectOptions::default().free_form().not_clearable()),
        label,
    )
    .with_choices(vec![
        Choice::same("auto"),
        Choice::same(50),
        Choice::same(75),
        Choice::same(100),
        Choice::same(125),
        Choice::same(150),
        Choice::same(200),
    ])
    .with_default("auto")
    .with_description("Margin, in pixels, allowing for more room for axis labels")
    .render_trigger()
}

/// Every built-in control: the standard set and the extended chart pack.
pub fn control_table() -> ControlResult<ControlTable> {
    let mut table = ControlTable::new();
    register_query_controls(&mut table)?;
    register_time_controls(&mut table)?;
    register_analytics_controls(&mut table)?;
    register_display_controls(&mut table)?;
    register_axis_controls(&mut table)?;
    register_chart_specific_controls(&mut table)?;
    register_extension_controls(&mut table)?;
    Ok(table)
}

fn register_query_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert(
        "datasource",
        ControlDescriptor::new(ControlKind::Datasource, "Datasource")
            .with_map_state_to_props(datasource_props),
    )?;
    table.insert(
        "viz_type",
        ControlDescriptor::new(ControlKind::VizType, "Visualization Type")
            .with_default("table")
            .with_description("The type of visualization to display"),
    )?;
    table.insert(
        "slice_id",
        ControlDescriptor::new(ControlKind::Hidden, "Chart ID")
            .with_description("The id of the active chart"),
    )?;
    table.insert(
        "cache_timeout",
        ControlDescriptor::new(ControlKind::Hidden, "Cache Timeout (seconds)")
            .with_description("The number of seconds before expiring the cache"),
    )?;
    table.insert(
        "url_params",
        ControlDescriptor::new(ControlKind::Hidden, "URL Parameters")
            .with_default(json!({}))
            .with_description("Extra parameters for use in jinja templated queries"),
    )?;
    table.insert(
        "metrics",
        ControlDescriptor::new(ControlKind::metrics(true), "Metrics")
            .with_validator(Validator::NonEmpty)
            .with_description("One or many metrics to display")
            .with_map_state_to_props(metrics_props),
    )?;
    table.insert(
        "percent_metrics",
        ControlDescriptor::new(ControlKind::metrics(true), "Percentage Metrics")
            .with_default(json!([]))
            .with_description("Metrics for which percentage of total are to be displayed")
            .with_map_state_to_props(optional_metric_props),
    )?;
    table.insert(
        "metric",
        ControlDescriptor::new(ControlKind::metrics(false), "Metric")
            .with_validator(Validator::NonEmpty)
            .with_description("Choose the metric")
            .with_map_state_to_props(metric_props),
    )?;
    table.insert(
        "timeseries_limit_metric",
        ControlDescriptor::new(ControlKind::metrics(false), "Sort By")
            .with_description("Metric used to define the top series")
            .with_map_state_to_props(optional_metric_props),
    )?;
    table.insert(
        "groupby",
        ControlDescriptor::new(multi_select(), "Group by")
            .with_default(json!([]))
            .with_description("One or many controls to group by")
            .with_map_state_to_props(groupable_columns_props),
    )?;
    table.insert(
        "columns",
        ControlDescriptor::new(multi_select(), "Columns")
            .with_default(json!([]))
            .with_description("One or many controls to pivot as columns")
            .with_map_state_to_props(groupable_columns_props),
    )?;
    table.insert(
        "all_columns",
        ControlDescriptor::new(multi_select(), "Columns")
            .with_default(json!([]))
            .with_description("Columns to display")
            .with_map_state_to_props(all_columns_props),
    )?;
    table.insert(
        "all_columns_x",
        ControlDescriptor::new(ControlKind::select(), "X")
            .with_description("Columns to display")
            .with_map_state_to_props(all_columns_props),
    )?;
    table.insert(
        "all_columns_y",
        ControlDescriptor::new(ControlKind::select(), "Y")
            .with_description("Columns to display")
            .with_map_state_to_props(all_columns_props),
    )?;
    table.insert(
        "order_by_cols",
        ControlDescriptor::new(multi_select(), "Ordering")
            .with_default(json!([]))
            .with_description("One or many metrics to display")
            .with_map_state_to_props(order_by_props),
    )?;
    table.insert(
        "row_limit",
        ControlDescriptor::new(free_form_select(), "Row limit")
            .with_validator(Validator::Integer)
            .with_default(10000)
            .with_choices(choices_from_values(ROW_LIMIT_OPTIONS)),
    )?;
    table.insert(
        "limit",
        ControlDescriptor::new(free_form_select(), "Series limit")
            .with_validator(Validator::Integer)
            .with_choices(choices_from_values(SERIES_LIMITS))
            .with_description(
                "Limits the number of time series that get displayed. A sub query \
                 (or an extra phase where sub queries are not supported) is applied to limit \
                 the number of time series that get fetched and displayed. This feature is \
                 useful when grouping by high cardinality dimension(s).",
            ),
    )?;
    table.insert(
        "order_desc",
        checkbox("Sort Descending", true).with_description("Whether to sort descending or ascending"),
    )?;
    table.insert(
        "adhoc_filters",
        ControlDescriptor::new(ControlKind::AdhocFilters, "Filters")
            .with_map_state_to_props(adhoc_filter_props),
    )?;
    table.insert(
        "include_time",
        checkbox("Include Time", false)
            .with_description("Whether to include the time granularity as defined in the time section"),
    )?;
    table.insert(
        "contribution",
        checkbox("Contribution", false).with_description("Compute the contribution to the total"),
    )?;
    Ok(())
}

fn register_time_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert(
        "granularity_sqla",
        ControlDescriptor::new(ControlKind::select(), "Time Column")
            .with_computed_default(first_choice)
            .with_description(
                "The time column for the visualization. Note that you can define arbitrary \
                 expression that return a DATETIME column in the table.",
            )
            .with_map_state_to_props(temporal_columns_props),
    )?;
    table.insert(
        "time_grain_sqla",
        ControlDescriptor::new(ControlKind::select(), "Time Grain")
            .with_default("P1D")
            .with_choices(choices_from_pairs([
                ("PT1M", "minute"),
                ("PT1H", "hour"),
                ("P1D", "day"),
                ("P1W", "week"),
                ("P1M", "month"),
                ("P0.25Y", "quarter"),
                ("P1Y", "year"),
            ]))
            .with_description(
                "The time granularity for the visualization. This applies a date \
                 transformation to alter your time column and defines a new time granularity.",
            )
            .with_map_state_to_props(time_grain_props),
    )?;
    table.insert(
        "time_range",
        ControlDescriptor::new(ControlKind::DateFilter, "Time range")
            .with_default("Last week")
            .with_description(
                "The time range for the visualization. All relative times, e.g. \"Last month\", \
                 \"Last 7 days\", \"now\", etc. are evaluated on the server using the server's \
                 local time (sans timezone).",
            ),
    )?;
    table.insert(
        "date_filter",
        checkbox("Date Filter", false).with_description("Whether to include a time filter"),
    )?;
    table.insert(
        "instant_filtering",
        checkbox("Instant Filtering", true).with_description(
            "Whether to apply filters as they change, or wait for users to hit an [Apply] button",
        ),
    )?;
    Ok(())
}

fn register_analytics_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert(
        "rolling_type",
        ControlDescriptor::new(ControlKind::select(), "Rolling Function")
            .with_default("None")
            .with_choices(choices_from_values(["None", "mean", "sum", "std", "cumsum"]))
            .with_description(
                "Defines a rolling window function to apply, works along with the [Periods] \
                 text box",
            ),
    )?;
    table.insert(
        "rolling_periods",
        ControlDescriptor::new(ControlKind::integer(), "Periods")
            .with_validator(Validator::Integer)
            .with_description(
                "Defines the size of the rolling window function, relative to the time \
                 granularity selected",
            )
            .with_visibility(rolling_enabled),
    )?;
    table.insert(
        "min_periods",
        ControlDescriptor::new(ControlKind::integer(), "Min Periods")
            .with_validator(Validator::Integer)
            .with_description(
                "The minimum number of rolling periods required to show a value. For instance \
                 if you do a cumulative sum on 7 days you may want your \"Min Period\" to be 7, \
                 so that all data points shown are the total of 7 periods.",
            )
            .with_visibility(rolling_enabled),
    )?;
    table.insert(
        "time_compare",
        ControlDescriptor::new(
            ControlKind::select_with(SelectOptions::default().multi().free_form()),
            "Time Shift",
        )
        .with_choices(choices_from_values([
            "1 day ago",
            "1 week ago",
            "28 days ago",
            "52 weeks ago",
            "1 year ago",
        ]))
        .with_description(
            "Overlay one or more timeseries from a relative time period. Expects relative \
             time deltas in natural language (example:  24 hours, 7 days, 56 weeks, 365 days)",
        ),
    )?;
    table.insert(
        "comparison_type",
        ControlDescriptor::new(ControlKind::select(), "Calculation type")
            .with_default("values")
            .with_choices(choices_from_pairs([
                ("values", "Actual Values"),
                ("absolute", "Absolute difference"),
                ("percentage", "Percentage change"),
                ("ratio", "Ratio"),
            ]))
            .with_description(
                "How to display time shifts: as individual lines; as the absolute difference \
                 between the main time series and each time shift; as the percentage change; \
                 or as the ratio between series and time shifts.",
            ),
    )?;
    table.insert(
        "resample_rule",
        ControlDescriptor::new(free_form_select(), "Rule")
            .with_choices(choices_from_values(["1T", "1H", "1D", "7D", "1M", "1AS"]))
            .with_description("Pandas resample rule"),
    )?;
    table.insert(
        "resample_how",
        ControlDescriptor::new(free_form_select(), "How")
            .with_choices(choices_from_values(["mean", "sum", "median"]))
            .with_description("Pandas resample how")
            .with_visibility(resample_enabled),
    )?;
    table.insert(
        "resample_fillmethod",
        ControlDescriptor::new(free_form_select(), "Fill Method")
            .with_choices(choices_from_values(["ffill", "bfill"]))
            .with_description("Pandas resample fill method")
            .with_visibility(resample_enabled),
    )?;
    Ok(())
}

fn register_display_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert(
        "color_scheme",
        ControlDescriptor::new(ControlKind::ColorScheme, "Color Scheme")
            .with_default("bnbColors")
            .with_choices(choices_from_values([
                "bnbColors",
                "googleCategory10c",
                "googleCategory20c",
                "d3Category10",
                "d3Category20",
                "d3Category20b",
                "d3Category20c",
                "lyftColors",
            ]))
            .with_description("The color scheme for rendering chart")
            .render_trigger(),
    )?;
    table.insert(
        "linear_color_scheme",
        ControlDescriptor::new(ControlKind::ColorScheme, "Linear Color Scheme")
            .with_default("blue_white_yellow")
            .with_choices(choices_from_values([
                "fire",
                "blue_white_yellow",
                "white_black",
                "black_white",
                "dark_blue",
            ]))
            .render_trigger(),
    )?;
    table.insert(
        "color_picker",
        ControlDescriptor::new(ControlKind::ColorPicker, "Fixed Color")
            .with_default(json!({"r": 0, "g": 122, "b": 135, "a": 1}))
            .with_description("Use this to define a static color for all circles")
            .render_trigger(),
    )?;
    table.insert(
        "show_legend",
        checkbox("Legend", true)
            .with_description("Whether to display the legend (toggles)")
            .render_trigger(),
    )?;
    table.insert(
        "show_labels",
        checkbox("Show Labels", true)
            .with_description("Whether to display the labels. Note that the label only displays when the 5% threshold.")
            .render_trigger(),
    )?;
    table.insert(
        "show_values",
        checkbox("Show Values", false)
            .with_description("Whether to display the numerical values within the cells")
            .render_trigger(),
    )?;
    table.insert(
        "show_perc",
        checkbox("Show percentage", true)
            .with_description("Whether to include the percentage in the tooltip")
            .render_trigger(),
    )?;
    table.insert(
        "rich_tooltip",
        checkbox("Rich Tooltip", true)
            .with_description("The rich tooltip shows a list of all series for that point in time")
            .render_trigger(),
    )?;
    table.insert(
        "show_markers",
        checkbox("Show Markers", false)
            .with_description("Show data points as circle markers on the lines")
            .render_trigger(),
    )?;
    table.insert(
        "show_brush",
        ControlDescriptor::new(
            ControlKind::select_with(SelectOptions::default().not_clearable()),
            "Show Range Filter",
        )
        .with_default("auto")
        .with_choices(choices_from_pairs([("yes", "Yes"), ("no", "No"), ("auto", "Auto")]))
        .with_description("Whether to display the time range interactive selector")
        .render_trigger(),
    )?;
    table.insert(
        "line_interpolation",
        ControlDescriptor::new(ControlKind::select(), "Line Style")
            .with_default("linear")
            .with_choices(choices_from_values([
                "linear",
                "basis",
                "cardinal",
                "monotone",
                "step-before",
                "step-after",
            ]))
            .with_description("Line interpolation as defined by d3.js")
            .render_trigger(),
    )?;
    table.insert(
        "stacked_style",
        ControlDescriptor::new(ControlKind::select(), "Stacked Style")
            .with_default("stack")
            .with_choices(choices_from_values(["stack", "stream", "expand"]))
            .render_trigger(),
    )?;
    table.insert(
        "bar_stacked",
        checkbox("Stacked Bars", false).render_trigger(),
    )?;
    table.insert(
        "show_bar_value",
        checkbox("Bar Values", false)
            .with_description("Show the value on top of the bar")
            .render_trigger(),
    )?;
    table.insert(
        "order_bars",
        checkbox("Sort Bars", false)
            .with_description("Sort bars by x labels.")
            .render_trigger(),
    )?;
    table.insert(
        "reduce_x_ticks",
        checkbox("Reduce X ticks", false)
            .with_description(
                "Reduces the number of X-axis ticks to be rendered. If true, the x-axis will \
                 not overflow and labels may be missing. If false, a minimum width will be \
                 applied to columns and the width may overflow into an horizontal scroll.",
            )
            .render_trigger(),
    )?;
    table.insert(
        "table_timestamp_format",
        ControlDescriptor::new(free_form_select(), "Table Timestamp Format")
            .with_default("%Y-%m-%d %H:%M:%S")
            .with_choices(d3_time_format_options())
            .with_description("Timestamp Format"),
    )?;
    table.insert(
        "page_length",
        ControlDescriptor::new(free_form_select(), "Page Length")
            .with_default(0)
            .with_validator(Validator::Integer)
            .with_choices(vec![
                Choice::new(0, "All"),
                Choice::same(10),
                Choice::same(20),
                Choice::same(50),
                Choice::same(100),
                Choice::same(200),
            ])
            .with_description("Rows per page, 0 means no pagination")
            .render_trigger(),
    )?;
    table.insert(
        "include_search",
        checkbox("Search Box", false)
            .with_description("Whether to include a client-side search box")
            .render_trigger(),
    )?;
    table.insert(
        "table_filter",
        checkbox("Emit Filter Events", false)
            .with_description("Whether to apply filter when items are clicked")
            .render_trigger(),
    )?;
    table.insert(
        "number_format",
        ControlDescriptor::new(free_form_select(), "Number format")
            .with_default(".3s")
            .with_choices(d3_format_options())
            .with_description(D3_FORMAT_DOCS)
            .render_trigger(),
    )?;
    table.insert(
        "global_opacity",
        ControlDescriptor::new(ControlKind::float(), "Opacity")
            .with_default(1)
            .with_validator(Validator::Numeric)
            .with_description("Opacity, expects values between 0 and 100")
            .render_trigger(),
    )?;
    Ok(())
}

fn register_axis_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert(
        "y_axis_format",
        ControlDescriptor::new(free_form_select(), "Y Axis Format")
            .with_default(".3s")
            .with_choices(d3_format_options())
            .with_description(D3_FORMAT_DOCS)
            .render_trigger(),
    )?;
    table.insert(
        "x_axis_format",
        ControlDescriptor::new(free_form_select(), "X Axis Format")
            .with_default("smart_date")
            .with_choices(d3_time_format_options())
            .with_description(D3_FORMAT_DOCS)
            .render_trigger(),
    )?;
    table.insert(
        "x_axis_label",
        ControlDescriptor::new(ControlKind::text(), "X Axis Label")
            .with_default("")
            .render_trigger(),
    )?;
    table.insert(
        "y_axis_label",
        ControlDescriptor::new(ControlKind::text(), "Y Axis Label")
            .with_default("")
            .render_trigger(),
    )?;
    table.insert("bottom_margin", margin("Bottom Margin"))?;
    table.insert("left_margin", margin("Left Margin"))?;
    table.insert(
        "x_ticks_layout",
        ControlDescriptor::new(ControlKind::select(), "X Tick Layout")
            .with_default("auto")
            .with_choices(choices_from_values(["auto", "flat", "45°", "staggered"]))
            .with_description("The way the ticks are laid out on the X-axis")
            .render_trigger(),
    )?;
    table.insert(
        "y_axis_bounds",
        ControlDescriptor::new(ControlKind::Bounds, "Y Axis Bounds")
            .with_default(json!([null, null]))
            .with_description(
                "Bounds for the Y-axis. When left empty, the bounds are dynamically defined \
                 based on the min/max of the data. Note that this feature will only expand \
                 the axis range. It won't narrow the data's extent.",
            )
            .render_trigger(),
    )?;
    table.insert(
        "y_log_scale",
        checkbox("Y Log Scale", false)
            .with_description("Use a log scale for the Y-axis")
            .render_trigger(),
    )?;
    table.insert(
        "x_log_scale",
        checkbox("X Log Scale", false)
            .with_description("Use a log scale for the X-axis")
            .render_trigger(),
    )?;
    table.insert(
        "x_axis_showminmax",
        checkbox("X bounds", false)
            .with_description("Whether to display the min and max values of the X-axis")
            .render_trigger(),
    )?;
    table.insert(
        "y_axis_showminmax",
        checkbox("Y bounds", false)
            .with_description("Whether to display the min and max values of the Y-axis")
            .render_trigger(),
    )?;
    table.insert(
        "xscale_interval",
        ControlDescriptor::new(ControlKind::select(), "XScale Interval")
            .with_default("1")
            .with_choices(choices_from_values((1..=50).map(|n| n.to_string())))
            .with_description("Number of steps to take between ticks when displaying the X scale")
            .render_trigger(),
    )?;
    table.insert(
        "yscale_interval",
        ControlDescriptor::new(ControlKind::select(), "YScale Interval")
            .with_default("1")
            .with_choices(choices_from_values((1..=50).map(|n| n.to_string())))
            .with_description("Number of steps to take between ticks when displaying the Y scale")
            .render_trigger(),
    )?;
    Ok(())
}

fn register_chart_specific_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert(
        "pie_label_type",
        ControlDescriptor::new(ControlKind::select(), "Label Type")
            .with_default("key")
            .with_choices(choices_from_pairs([
                ("key", "Category Name"),
                ("value", "Value"),
                ("percent", "Percentage"),
                ("key_value", "Category and Value"),
                ("key_percent", "Category and Percentage"),
            ]))
            .with_description("What should be shown on the label?")
            .render_trigger(),
    )?;
    table.insert(
        "donut",
        checkbox("Donut", false)
            .with_description("Do you want a donut or a pie?")
            .render_trigger(),
    )?;
    table.insert(
        "labels_outside",
        checkbox("Put labels outside", true)
            .with_description("Put the labels outside the pie?")
            .render_trigger(),
    )?;
    table.insert(
        "markup_type",
        ControlDescriptor::new(
            ControlKind::select_with(SelectOptions::default().not_clearable()),
            "Markup Type",
        )
        .with_default("markdown")
        .with_choices(choices_from_values(["markdown", "html"]))
        .with_validator(Validator::NonEmpty)
        .with_description("Pick your favorite markup language"),
    )?;
    table.insert(
        "code",
        ControlDescriptor::new(ControlKind::text_area(Some("markdown")), "Code")
            .with_default("")
            .with_description("Put your code here")
            .with_map_state_to_props(code_language_props),
    )?;
    table.insert(
        "series",
        ControlDescriptor::new(ControlKind::select(), "Series")
            .with_computed_default(first_choice)
            .with_description(
                "Defines the grouping of entities. Each series is shown as a specific color \
                 on the chart and has a legend toggle",
            )
            .with_map_state_to_props(groupable_columns_props),
    )?;
    table.insert(
        "entity",
        ControlDescriptor::new(ControlKind::select(), "Entity")
            .with_validator(Validator::NonEmpty)
            .with_description("This defines the element to be plotted on the chart")
            .with_map_state_to_props(groupable_columns_props),
    )?;
    table.insert(
        "x",
        ControlDescriptor::new(ControlKind::metrics(false), "X Axis")
            .with_validator(Validator::NonEmpty)
            .with_description("Metric assigned to the [X] axis")
            .with_map_state_to_props(metric_props),
    )?;
    table.insert(
        "y",
        ControlDescriptor::new(ControlKind::metrics(false), "Y Axis")
            .with_validator(Validator::NonEmpty)
            .with_description("Metric assigned to the [Y] axis")
            .with_map_state_to_props(metric_props),
    )?;
    table.insert(
        "size",
        ControlDescriptor::new(ControlKind::metrics(false), "Bubble Size")
            .with_validator(Validator::NonEmpty)
            .with_map_state_to_props(metric_props),
    )?;
    table.insert(
        "max_bubble_size",
        ControlDescriptor::new(free_form_select(), "Max Bubble Size")
            .with_default("25")
            .with_choices(choices_from_values(["5", "10", "15", "25", "50", "75", "100"])),
    )?;
    table.insert(
        "size_from",
        ControlDescriptor::new(ControlKind::integer(), "Font Size From")
            .with_default("20")
            .with_description("Font size for the smallest value in the list")
            .render_trigger(),
    )?;
    table.insert(
        "size_to",
        ControlDescriptor::new(ControlKind::integer(), "Font Size To")
            .with_default("150")
            .with_description("Font size for the biggest value in the list")
            .render_trigger(),
    )?;
    table.insert(
        "rotation",
        ControlDescriptor::new(ControlKind::select(), "Word Rotation")
            .with_default("random")
            .with_choices(choices_from_values(["random", "flat", "square"]))
            .with_description("Rotation to apply to words in the cloud")
            .render_trigger(),
    )?;
    table.insert(
        "subheader",
        ControlDescriptor::new(ControlKind::text(), "Subheader")
            .with_default("")
            .with_description("Description text that shows up below your Big Number"),
    )?;
    table.insert(
        "compare_lag",
        ControlDescriptor::new(ControlKind::integer(), "Comparison Period Lag")
            .with_validator(Validator::Integer)
            .with_description("Based on granularity, number of time periods to compare against"),
    )?;
    table.insert(
        "compare_suffix",
        ControlDescriptor::new(ControlKind::text(), "Comparison suffix")
            .with_description("Suffix to apply after the percentage display"),
    )?;
    table.insert(
        "show_trend_line",
        checkbox("Show Trend Line", true)
            .with_description("Whether to display the trend line")
            .render_trigger(),
    )?;
    table.insert(
        "start_y_axis_at_zero",
        checkbox("Start y-axis at 0", true)
            .with_description(
                "Start y-axis at zero. Uncheck to start y-axis at minimum value in the data.",
            )
            .render_trigger(),
    )?;
    table.insert(
        "link_length",
        ControlDescriptor::new(free_form_select(), "Link Length")
            .with_default("200")
            .with_choices(choices_from_values([
                "10", "25", "50", "75", "100", "150", "200", "250",
            ]))
            .with_description("Link length in the force layout"),
    )?;
    table.insert(
        "normalized",
        checkbox("Normalized", false).with_description("Whether to normalize the histogram"),
    )?;
    table.insert(
        "pandas_aggfunc",
        ControlDescriptor::new(
            ControlKind::select_with(SelectOptions::default().not_clearable()),
            "Aggregation function",
        )
        .with_default("sum")
        .with_choices(choices_from_values([
            "sum", "mean", "min", "max", "median", "stdev", "var",
        ]))
        .with_description(
            "Aggregate function to apply when pivoting and computing the total rows and columns",
        ),
    )?;
    table.insert(
        "pivot_margins",
        checkbox("Show totals", true).with_description("Display total row/column"),
    )?;
    table.insert(
        "combine_metric",
        checkbox("Combine Metrics", false).with_description(
            "Display metrics side by side within each column, as opposed to each column being \
             displayed side by side for each metric.",
        ),
    )?;
    table.insert(
        "canvas_image_rendering",
        ControlDescriptor::new(ControlKind::select(), "Rendering")
            .with_default("pixelated")
            .with_choices(choices_from_pairs([
                ("pixelated", "pixelated (Sharp)"),
                ("auto", "auto (Smooth)"),
            ]))
            .with_description(
                "image-rendering CSS attribute of the canvas object that defines how the \
                 browser scales up the image",
            ),
    )?;
    table.insert(
        "normalize_across",
        ControlDescriptor::new(ControlKind::select(), "Normalize Across")
            .with_default("heatmap")
            .with_choices(choices_from_values(["heatmap", "x", "y"]))
            .with_description(
                "Color will be rendered based on a ratio of the cell against the sum of across \
                 this criteria",
            ),
    )?;
    Ok(())
}
