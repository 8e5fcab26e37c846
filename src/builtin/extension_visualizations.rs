//! Chart types of the extended chart pack.

use crate::api::VisTypeRegistry;
use crate::core::{ControlOverride, ControlPanelSection, ControlSetRow, VisualizationTypeEntry, row};
use crate::error::ControlResult;

use super::sections;
use super::state_props::filterable_columns_props;
use super::visualizations::chart;

fn extension_chart(label: &str) -> VisualizationTypeEntry {
    chart(label).with_section(sections::sqla_time())
}

fn section<const N: usize>(label: &str, expanded: bool, rows: [&[&str]; N]) -> ControlPanelSection {
    ControlPanelSection::new(label, expanded).with_rows(rows.map(row))
}

fn query_rows() -> [ControlSetRow; 4] {
    [
        row(&["metrics"]),
        row(&["groupby"]),
        row(&["order_by_cols"]),
        row(&["row_limit"]),
    ]
}

fn padding(extra: &[&[&str]]) -> ControlPanelSection {
    ControlPanelSection::new("Padding Options", false)
        .with_rows([
            row(&["top_padding", "bottom_padding"]),
            row(&["left_padding", "right_padding"]),
        ])
        .with_rows(extra.iter().copied().map(row))
}

fn setting_options() -> ControlPanelSection {
    section("Setting Options", false, [&["show_modal"]])
}

fn bar_stacks() -> ControlPanelSection {
    section("Bar Stacks", false, [&["stacks"]]).with_description("bar stacks")
}

fn bar_extras() -> ControlPanelSection {
    section(
        "Other Options",
        false,
        [&["is_avg", "is_max_min"], &["is_bar_value", "enabled_bar_width"]],
    )
}

fn only_left() -> ControlPanelSection {
    section(
        "Only Left Options",
        false,
        [
            &["only_left", "y_metrics"],
            &["y_format", "y_degree"],
            &["y_axis_name"],
        ],
    )
}

fn multi_y(label: &str) -> ControlPanelSection {
    section(
        label,
        false,
        [
            &["y_left_metrics", "y_right_metrics"],
            &["y_left_format", "y_right_format"],
            &["y_left_degree", "y_right_degree"],
        ],
    )
}

fn y_axis_groupby() -> ControlOverride {
    ControlOverride::new()
        .label("Y_Axis")
        .description("One or many fields to group by")
}

/// Registers every chart type of the extended pack.
pub fn register_extension_vis_types(registry: &mut VisTypeRegistry) -> ControlResult<()> {
    let entries = [
        ("filter_box", filter_box()),
        ("filter_box_tree", filter_box_tree()),
        ("filter_box_combination", filter_box_combination()),
        ("ag_grid", ag_grid()),
        ("echarts_bar_progress", echarts_bar_progress()),
        ("echarts_bar", echarts_bar()),
        ("echarts_bar_waterfall", echarts_bar_waterfall()),
        ("echarts_bar_h", echarts_bar_h()),
        ("echarts_line_bar", echarts_line_bar()),
        ("echarts_line", echarts_line()),
        ("echarts_pie_m", echarts_pie_m()),
        ("echarts_pie_h", echarts_pie_h()),
        ("echarts_pie_g", echarts_pie_g()),
        ("echarts_pie_h_g", echarts_pie_h_g()),
        ("echarts_dash_board", echarts_dash_board()),
        ("echarts_big_number_compare", echarts_big_number_compare()),
        ("echarts_big_number", echarts_big_number()),
        ("big_number_viz", big_number_viz()),
        ("big_number_two_viz", big_number_two_viz()),
        ("big_number_three_viz", big_number_three_viz()),
        ("echarts_china_map", echarts_china_map()),
        ("china_city_map", china_city_map()),
        (
            "echarts_china_city_map_migration",
            echarts_china_city_map_migration(),
        ),
        ("echarts_bubble", echarts_bubble()),
        ("echarts_quadrant", echarts_quadrant()),
        ("echarts_area_stack", echarts_area_stack()),
        ("echarts_sankey", echarts_sankey()),
        ("echarts_funnel", echarts_funnel()),
        ("echarts_radar_map", echarts_radar_map()),
        ("echarts_treemap", echarts_treemap()),
        ("echarts_word_cloud", echarts_word_cloud()),
    ];
    for (id, entry) in entries {
        registry.insert(id, entry)?;
    }
    Ok(())
}

fn filter_box() -> VisualizationTypeEntry {
    extension_chart("Filter Box")
        .with_section(section(
            "Filter Options",
            true,
            [&["date_filter", "instant_filtering"], &["groupby"], &["metric"]],
        ))
        .with_section(setting_options())
        .with_section(section("baseSetting", false, [&["filterSetting"]]))
        .with_section(section("setDefaultValue", false, [&["defaultValueSetting"]]))
        .with_section(section("setDateValue", false, [&["dateValueSetting"]]))
        .with_override(
            "groupby",
            ControlOverride::new()
                .label("Filter controls")
                .description(
                    "The controls you want to filter on. Note that only columns \
                     checked as \"filterable\" will show up on this list.",
                )
                .map_state_to_props(filterable_columns_props),
        )
}

fn filter_box_tree() -> VisualizationTypeEntry {
    extension_chart("Filter Box Tree")
        .with_section(section(
            "metrics and dismensions",
            true,
            [
                &["groupby", "metrics"],
                &["parent_id", "child_id"],
                &["child_name"],
                &["filter_name", "width"],
                &["instant_filtering", "multi"],
            ],
        ))
        .with_section(setting_options())
        .with_section(section(
            "setDefaultValueFilterTree",
            false,
            [&["defaultValueFilterTreeSetting"]],
        ))
}

fn filter_box_combination() -> VisualizationTypeEntry {
    extension_chart("Filter Box Combination").with_section(section(
        "Filter Combination",
        true,
        [&["filter_combination"]],
    ))
}

fn ag_grid() -> VisualizationTypeEntry {
    extension_chart("Ag-Grid")
        .with_section(section("Chart Options", true, [&["metrics"], &["groupby"]]))
        .with_section(section(
            "AgGrid Options",
            true,
            [&["order_by_cols"], &["row_limit"], &["hide_options"]],
        ))
        .with_section(setting_options())
        .with_section(section("baseStyle", false, [&["table_style"], &["col_style"]]))
        .with_section(section("condition", false, [&["condition_style"]]))
        .with_section(section("compare", false, [&["compare_style"]]))
        .with_section(section("navigator", false, [&["navigator"]]))
        .with_section(section(
            "agGrid",
            false,
            [
                &["theme", "pageSize"],
                &["frozen_left", "frozen_right"],
                &["link_cols", "hide_cols"],
                &["is_pivot"],
                &["parent_node"],
            ],
        ))
        .with_section(section(
            "agGrid_pivot",
            false,
            [&["pivot_groupby"], &["columns"], &["pivot_metrics"]],
        ))
}

fn echarts_bar_progress() -> VisualizationTypeEntry {
    extension_chart("Echarts - Bar progress")
        .with_section(ControlPanelSection::new("Metrics And Dim", true).with_rows(query_rows()))
        .with_section(section(
            "Only Bottom X Options",
            false,
            [&["x_format", "x_degree"], &["x_axis_name"]],
        ))
        .with_section(padding(&[&["bar_width"]]))
        .with_section(section("Other Options", false, [&["enabled_bar_width"]]))
        .with_section(bar_stacks())
        .with_override("groupby", y_axis_groupby())
}

fn echarts_bar() -> VisualizationTypeEntry {
    extension_chart("Echart - Bar Chart")
        .with_section(ControlPanelSection::new("Chart Options", true).with_rows(query_rows()))
        .with_section(only_left())
        .with_section(multi_y("Multi Y Options"))
        .with_section(padding(&[&["bar_width"]]))
        .with_section(bar_extras())
        .with_section(bar_stacks())
}

fn echarts_bar_waterfall() -> VisualizationTypeEntry {
    extension_chart("echarts bar waterfall View")
        .with_section(section(
            "metrics and dismensions",
            true,
            [&["metrics"], &["order_by_cols"], &["row_limit"]],
        ))
        .with_section(section(
            "Padding",
            false,
            [
                &["top_padding", "bottom_padding"],
                &["left_padding", "right_padding"],
                &["y_format", "y_degree"],
                &["y_axis_name"],
                &["bar_width"],
            ],
        ))
        .with_section(section("Other Options", false, [&["enabled_bar_width"]]))
}

fn echarts_bar_h() -> VisualizationTypeEntry {
    extension_chart("Echart - Bar Chart horizohtal")
        .with_section(ControlPanelSection::new("Chart Options", true).with_rows(query_rows()))
        .with_section(section(
            "Only Bottom Options",
            false,
            [
                &["only_bottom", "x_metrics"],
                &["x_format", "x_degree"],
                &["x_axis_name"],
            ],
        ))
        .with_section(section(
            "Multi X Options",
            false,
            [
                &["x_bottom_metrics", "x_top_metrics"],
                &["x_bottom_format", "x_top_format"],
                &["x_bottom_degree", "x_top_degree"],
            ],
        ))
        .with_section(padding(&[&["bar_width"]]))
        .with_section(bar_extras())
        .with_section(bar_stacks())
}

fn echarts_line_bar() -> VisualizationTypeEntry {
    extension_chart("Echart - Line Bar")
        .with_section(
            ControlPanelSection::new("Metrics And Dimensions", true).with_rows(query_rows()),
        )
        .with_section(section("Line and Bar", false, [&["line_choice"]]))
        .with_section(only_left())
        .with_section(multi_y("Muti Y Axis Options"))
        .with_section(padding(&[&["bar_width"]]))
        .with_section(bar_extras())
        .with_section(bar_stacks())
        .with_override("groupby", y_axis_groupby())
}

fn echarts_line() -> VisualizationTypeEntry {
    extension_chart("Echart - line View")
        .with_section(ControlPanelSection::new("Chart Options", true).with_rows(query_rows()))
        .with_section(only_left())
        .with_section(
            multi_y("Multi Y Options").with_row(row(&["y_left_splitLine", "y_right_splitLine"])),
        )
        .with_section(padding(&[]))
        .with_section(section(
            "Other Options",
            false,
            [&["is_avg", "is_max_min"], &["is_bar_value"]],
        ))
}

fn echarts_pie_m() -> VisualizationTypeEntry {
    extension_chart("echarts Pie Metrics View")
        .with_section(section(
            "metrics",
            true,
            [&["metrics"], &["order_by_cols"], &["row_limit"]],
        ))
        .with_section(section(
            "Other Options",
            false,
            [&["label_position", "label_format"], &["circle_type", "rose_type"]],
        ))
}

fn echarts_pie_h() -> VisualizationTypeEntry {
    extension_chart("Echart - Echarts Pie h")
        .with_section(section(
            "Metrics Options",
            true,
            [&["metrics"], &["order_by_cols"], &["row_limit"]],
        ))
        .with_section(section(
            "Inner Circle",
            false,
            [
                &["inner_metrics"],
                &["inner_label_position", "inner_label_format"],
                &["inner_lable_color"],
            ],
        ))
        .with_section(section(
            "Outer Circle",
            false,
            [
                &["outer_metrics"],
                &["outer_label_position", "outer_label_format"],
            ],
        ))
}

fn echarts_pie_g() -> VisualizationTypeEntry {
    extension_chart("echarts Pie GroupBy View")
        .with_section(section(
            "metrics",
            true,
            [&["groupby", "metrics"], &["order_by_cols"], &["row_limit"]],
        ))
        .with_section(section(
            "Other Options",
            false,
            [
                &["label_position", "label_format"],
                &["circle_type", "rose_type"],
                &["col_num"],
            ],
        ))
}

fn echarts_pie_h_g() -> VisualizationTypeEntry {
    extension_chart("Echart - Pie Hierarchical GroupBy View")
        .with_section(section(
            "Metrics Options",
            true,
            [&["metrics"], &["order_by_cols"], &["col_num"], &["row_limit"]],
        ))
        .with_section(section(
            "Inner Circle",
            false,
            [
                &["inner_metrics_one"],
                &["inner_label_position", "inner_label_format"],
                &["inner_lable_color"],
            ],
        ))
        .with_section(section(
            "Outer Circle",
            false,
            [
                &["outer_metrics_one"],
                &["outer_label_position", "outer_label_format"],
            ],
        ))
}

fn echarts_dash_board() -> VisualizationTypeEntry {
    extension_chart("Echart - Dash Board")
        .with_section(section("Metrics Options", false, [&["metric"], &["row_limit"]]))
        .with_section(section(
            "Other Option",
            false,
            [
                &["dash_min", "dash_max"],
                &["dash_name", "dash_splitNum"],
                &["dash_expr", "dash_suffix"],
                &["dash_style"],
            ],
        ))
}

fn echarts_big_number_compare() -> VisualizationTypeEntry {
    extension_chart("echarts Big Number Compare").with_section(section(
        "metrics and dismensions",
        true,
        [&["metrics_one", "metrics_two"], &["subheader", "fontSize"]],
    ))
}

fn echarts_big_number() -> VisualizationTypeEntry {
    extension_chart("Echart - Big Number").with_section(section(
        "Chart Options",
        true,
        [&["metric"], &["subheader", "fontSize"]],
    ))
}

fn big_number_viz() -> VisualizationTypeEntry {
    extension_chart("Big Number").with_section(section(
        "Big Number",
        true,
        [
            &["metric"],
            &["subheader", "titleSize"],
            &["head_color", "body_color"],
            &["format", "big_number_fontSize"],
            &["icone_select"],
        ],
    ))
}

fn big_number_two_viz() -> VisualizationTypeEntry {
    extension_chart("Big Number Two").with_section(section(
        "Big Number Two",
        true,
        [
            &["metric"],
            &["metrics_one", "metrics_two"],
            &["format", "big_number_fontSize"],
            &["fontColor"],
            &["number_description", "progress_description"],
            &["icone_select"],
        ],
    ))
}

fn big_number_three_viz() -> VisualizationTypeEntry {
    extension_chart("Big Number Three").with_section(section(
        "Big Number Three",
        true,
        [
            &["metric"],
            &["subheader", "number_description"],
            &["format", "big_number_fontSize"],
            &["icon_color"],
            &["icone_select"],
        ],
    ))
}

fn echarts_china_map() -> VisualizationTypeEntry {
    extension_chart("China Map").with_section(section(
        "Metrics and Dimensions ",
        true,
        [&["metrics"], &["groupby_one"], &["min_legend"], &["max_legend"]],
    ))
}

fn china_city_map() -> VisualizationTypeEntry {
    extension_chart("China City Map").with_section(section(
        "Metrics and Dimensions ",
        true,
        [&["metric"], &["groupby_one"], &["standard_point"]],
    ))
}

fn echarts_china_city_map_migration() -> VisualizationTypeEntry {
    extension_chart("China City Map Migration")
        .with_section(section(
            "Metrics and Dimensions ",
            true,
            [&["metric"], &["groupby"], &["min_legend"], &["max_legend"]],
        ))
        .with_override(
            "groupby",
            ControlOverride::new()
                .label("From City / To City")
                .description("Choose a from city and a to city"),
        )
}

fn echarts_bubble() -> VisualizationTypeEntry {
    extension_chart("Echart - Bubble Viz")
        .with_section(section(
            "Chart Options",
            true,
            [&["series", "entity"], &["x", "y"], &["size", "row_limit"]],
        ))
        .with_section(section(
            "Chart Options",
            false,
            [
                &["y_degree", "y_format"],
                &["x_degree", "x_format"],
                &["x_axis_label", "y_axis_label"],
            ],
        ))
        .with_section(padding(&[]))
}

fn echarts_quadrant() -> VisualizationTypeEntry {
    extension_chart("Echart - Quadrant").with_section(section(
        "Chart Options",
        true,
        [
            &["series"],
            &["x_metric", "y_metric"],
            &["origin_x", "origin_y"],
            &["min_x_axis", "max_x_axis"],
            &["min_y_axis", "max_y_axis"],
            &["top_padding", "bottom_padding"],
            &["left_padding", "right_padding"],
            &["point_size"],
            &["first_module_infor"],
            &["first_x", "first_y"],
            &["second_module_infor"],
            &["second_x", "second_y"],
            &["third_module_infor"],
            &["third_x", "third_y"],
            &["fourth_module_infor"],
            &["fourth_x", "fourth_y"],
        ],
    ))
}

fn echarts_area_stack() -> VisualizationTypeEntry {
    extension_chart("Echart - Area Stack View")
        .with_section(
            ControlPanelSection::new("Area Stack Options", true).with_rows(query_rows()),
        )
        .with_section(section(
            "Left Options",
            false,
            [&["y_metrics"], &["y_format", "y_degree"], &["y_axis_name"]],
        ))
        .with_section(padding(&[]))
        .with_section(section(
            "Other Options",
            false,
            [&["is_bar_value", "normal"], &["lable_color"]],
        ))
}

fn echarts_sankey() -> VisualizationTypeEntry {
    extension_chart("Echart - Sankey")
        .with_section(section(
            "Metrics Options",
            true,
            [&["groupby"], &["metric"], &["row_limit"]],
        ))
        .with_override(
            "groupby",
            ControlOverride::new()
                .label("Source / Target")
                .description("Choose a source and a target"),
        )
}

fn echarts_funnel() -> VisualizationTypeEntry {
    extension_chart("echarts_funnel").with_section(section(
        "Metrics Options",
        true,
        [&["groupby_one"], &["metric"], &["order_type"]],
    ))
}

fn echarts_radar_map() -> VisualizationTypeEntry {
    extension_chart("echarts Radar Map View")
        .with_section(section(
            "metrics",
            true,
            [&["groupby", "metrics"], &["row_limit"]],
        ))
        .with_section(section("Other Options", false, [&["circle", "normal"]]))
}

fn echarts_treemap() -> VisualizationTypeEntry {
    extension_chart("Echarts Treemap").with_section(section(
        "metrics and dismensions",
        true,
        [
            &["groupby", "metrics"],
            &["parent_id", "child_id"],
            &["child_name"],
            &["visible_min", "leaf_depth"],
        ],
    ))
}

fn echarts_word_cloud() -> VisualizationTypeEntry {
    extension_chart("echarts Word Cloud").with_section(section(
        "metrics and dismensions",
        true,
        [
            &["series", "metric", "limit"],
            &["size_from", "size_to"],
            &["rotation"],
        ],
    ))
}
