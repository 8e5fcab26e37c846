//! Controls of the extended chart pack: grid tables, filter boxes and the
//! echarts family.

use serde_json::{Value, json};

use crate::api::ControlTable;
use crate::core::{
    CompositeKind, ControlDescriptor, ControlKind, SelectOptions, Validator, choices_from_values,
};
use crate::error::ControlResult;

use super::state_props::{
    all_columns_props, first_choice, first_choice_list, groupable_columns_props,
    metrics_and_columns_props, optional_metric_props, rule_editor_props,
};

const LABEL_POSITIONS: [&str; 3] = ["outside", "inside", "center"];

fn text(label: &str, default: &str) -> ControlDescriptor {
    ControlDescriptor::new(ControlKind::text(), label).with_default(default)
}

fn checkbox(label: &str, default: bool) -> ControlDescriptor {
    ControlDescriptor::new(ControlKind::Checkbox, label)
        .with_default(default)
        .render_trigger()
}

fn free_form_select(label: &str) -> ControlDescriptor {
    ControlDescriptor::new(
        ControlKind::select_with(SelectOptions::default().free_form()),
        label,
    )
}

/// Multi-metric selector defaulting to the first saved metric.
fn metric_list(label: &str, required: bool) -> ControlDescriptor {
    let descriptor = ControlDescriptor::new(
        ControlKind::select_with(SelectOptions::default().multi()),
        label,
    )
    .with_map_state_to_props(optional_metric_props)
    .with_computed_default(first_choice_list)
    .with_description("One or many metrics to display");
    if required {
        descriptor.with_validator(Validator::NonEmpty)
    } else {
        descriptor
    }
}

fn single_metric(label: &str, description: &str) -> ControlDescriptor {
    ControlDescriptor::new(
        ControlKind::select_with(SelectOptions::default().not_clearable()),
        label,
    )
    .with_map_state_to_props(optional_metric_props)
    .with_computed_default(first_choice)
    .with_validator(Validator::NonEmpty)
    .with_description(description)
}

fn column_select(label: &str, description: &str) -> ControlDescriptor {
    ControlDescriptor::new(ControlKind::select(), label)
        .with_map_state_to_props(all_columns_props)
        .with_description(description)
}

fn grid_columns(label: &str, description: &str) -> ControlDescriptor {
    ControlDescriptor::new(
        ControlKind::select_with(SelectOptions::default().multi()),
        label,
    )
    .with_map_state_to_props(metrics_and_columns_props)
    .with_description(description)
}

/// Rule list edited in a dedicated dialog.
fn rules(kind: CompositeKind, label: &str, description: &str) -> ControlDescriptor {
    ControlDescriptor::new(ControlKind::Composite(kind), label)
        .with_default(json!([]))
        .with_map_state_to_props(rule_editor_props)
        .with_description(description)
}

/// Every control of the extended chart pack.
pub fn register_extension_controls(table: &mut ControlTable) -> ControlResult<()> {
    register_grid_controls(table)?;
    register_filter_box_controls(table)?;
    register_axis_controls(table)?;
    register_layout_controls(table)?;
    register_pie_controls(table)?;
    register_gauge_and_number_controls(table)?;
    register_quadrant_controls(table)?;
    register_map_and_funnel_controls(table)?;
    Ok(())
}

fn register_grid_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert(
        "hide_options",
        checkbox("hide_options", false).with_description("hide_options"),
    )?;
    table.insert(
        "show_modal",
        ControlDescriptor::new(ControlKind::Button, "table_style")
            .with_description("table_style"),
    )?;
    table.insert(
        "header_style",
        text("Header Style", "").with_description("table header style"),
    )?;
    table.insert(
        "table_style",
        text("Table Style", "").with_description("table style"),
    )?;
    table.insert("col_style", rules(CompositeKind::ColStyle, "", ""))?;
    table.insert("condition_style", rules(CompositeKind::ConditionStyle, "", ""))?;
    table.insert("compare_style", rules(CompositeKind::CompareStyle, "", ""))?;
    table.insert("navigator", rules(CompositeKind::Navigator, "", ""))?;
    table.insert(
        "theme",
        ControlDescriptor::new(ControlKind::select(), "Theme")
            .with_choices(choices_from_values(["blue", "fresh", "bootstrap", "dark"]))
            .with_default("blue")
            .with_description("ag grid theme"),
    )?;
    table.insert(
        "pageSize",
        ControlDescriptor::new(ControlKind::select(), "Page_Size")
            .with_choices(choices_from_values(["15", "30", "50", "100", "all"]))
            .with_default("30")
            .with_description("ag grid page size"),
    )?;
    table.insert("frozen_left", grid_columns("Frozen_Left", "frozen left"))?;
    table.insert("frozen_right", grid_columns("Frozen_Right", "frozen right"))?;
    table.insert("link_cols", grid_columns("Link_Cols", "link cols"))?;
    table.insert(
        "is_pivot",
        ControlDescriptor::new(ControlKind::select(), "Is_Pivot")
            .with_choices(choices_from_values(["false", "true"]))
            .with_default("false")
            .with_description("is pivot"),
    )?;
    table.insert("hide_cols", grid_columns("Hide_Cols", "hide cols"))?;
    table.insert(
        "parent_node",
        rules(CompositeKind::ParentNode, "", "parent node"),
    )?;
    table.insert(
        "pivot_groupby",
        ControlDescriptor::new(
            ControlKind::select_with(SelectOptions::default().multi()),
            "Group_By",
        )
        .with_default(json!([]))
        .with_map_state_to_props(all_columns_props)
        .with_description("One or many controls to group by"),
    )?;
    table.insert("pivot_metrics", metric_list("Metrics", true))?;
    Ok(())
}

fn register_filter_box_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert("filterSetting", rules(CompositeKind::FilterSetting, "", ""))?;
    table.insert(
        "defaultValueSetting",
        rules(CompositeKind::DefaultValue, "", ""),
    )?;
    table.insert("dateValueSetting", rules(CompositeKind::DateValue, "", ""))?;
    table.insert(
        "filter_name",
        text("Filter_Name", "")
            .with_description("filter name, read by key-value, like: deptName-deptId"),
    )?;
    table.insert(
        "width",
        text("Width", "100%").with_description("filter box's width"),
    )?;
    table.insert(
        "multi",
        checkbox("is_multi", true).with_description("is  multi"),
    )?;
    table.insert(
        "defaultValueFilterTreeSetting",
        rules(CompositeKind::DefaultValueFilterTree, "", ""),
    )?;
    // Combinations reference other filter boxes, not datasource columns.
    table.insert(
        "filter_combination",
        ControlDescriptor::new(
            ControlKind::Composite(CompositeKind::FilterCombination),
            "Filter Combination",
        )
        .with_default(json!([]))
        .with_description("filter box combination"),
    )?;
    table.insert("cascade", rules(CompositeKind::Cascade, "", ""))?;
    Ok(())
}

fn register_axis_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert(
        "only_left",
        checkbox("Only_Left", true).with_description("only use left Y"),
    )?;
    table.insert(
        "y_metrics",
        metric_list("Y_Axis_Metrics", true).with_description("One or many lines to display"),
    )?;
    table.insert(
        "y_format",
        text("Y_Axis_Format", "").with_description("y_format, like: {value/100} hundred"),
    )?;
    table.insert(
        "y_degree",
        text("Y_Axis_Degree", "").with_description(r#"y_degree, like: {"min": 0, "max": 100}"#),
    )?;
    table.insert(
        "y_axis_name",
        text("Y_Axis_Name", "").with_description("Y Axis Name"),
    )?;
    table.insert("y_left_metrics", metric_list("Y_Left_Metrics", false))?;
    table.insert("y_right_metrics", metric_list("Y_Right_Metrics", false))?;
    for (id, label, example) in [
        ("y_left_format", "Y_Left_Format", "{value/100} hundred"),
        ("y_right_format", "Y_Right_Format", "{value/100} hundred"),
        ("y_left_degree", "Y_Left_Degree", r#"{"min": 0, "max": 100}"#),
        ("y_right_degree", "Y_Right_Degree", r#"{"min": 0, "max": 100}"#),
    ] {
        table.insert(
            id,
            text(label, "").with_description(format!("{id}, like: {example}")),
        )?;
    }
    table.insert(
        "only_bottom",
        checkbox("Only_Bottom", true).with_description("only use bottom X"),
    )?;
    table.insert("x_metrics", metric_list("Metrics", true))?;
    for (id, label) in [
        ("x_format", "X_Format"),
        ("x_degree", "X_Degree"),
        ("x_axis_name", "X_Axis_Name"),
        ("x_bottom_format", "X_Bottom_Format"),
        ("x_top_format", "X_Top_Format"),
        ("x_bottom_degree", "X_Bottom_Degree"),
        ("x_top_degree", "X_Top_Degree"),
    ] {
        table.insert(
            id,
            text(label, "").with_description(format!("{id}, like: {{value/100}} hundred")),
        )?;
    }
    // Both horizontal metric lists carry the vertical label.
    table.insert("x_bottom_metrics", metric_list("Y_Left_Metrics", true))?;
    table.insert("x_top_metrics", metric_list("Y_Left_Metrics", true))?;
    table.insert(
        "line_choice",
        metric_list("Line Metrics", true)
            .with_description("line metrics,other are bar metrics"),
    )?;
    table.insert(
        "y_left_splitLine",
        checkbox("Y_Left_SplitLine", true).with_description("onle show left splitLine"),
    )?;
    table.insert(
        "y_right_splitLine",
        checkbox("Y_Right_SplitLine", false).with_description("onle show right splitLine"),
    )?;
    Ok(())
}

fn register_layout_controls(table: &mut ControlTable) -> ControlResult<()> {
    for (id, label, default) in [
        ("top_padding", "Top_Padding", "80"),
        ("bottom_padding", "Bottom_Padding", "20"),
        ("left_padding", "Left_Padding", "20"),
        ("right_padding", "Right_Padding", "20"),
    ] {
        table.insert(
            id,
            text(label, default).with_description(id.replace('_', " ")),
        )?;
    }
    table.insert("is_avg", checkbox("Is_Avg", false).with_description("is avg"))?;
    table.insert(
        "is_max_min",
        checkbox("Is_Max_Min", false).with_description("is max min"),
    )?;
    table.insert(
        "is_bar_value",
        checkbox("Is_Value", false).with_description("is value"),
    )?;
    table.insert("stacks", rules(CompositeKind::Stack, "", ""))?;
    table.insert(
        "bar_width",
        text("Bar_Width", "70%").with_description("bar width example:70%"),
    )?;
    table.insert(
        "enabled_bar_width",
        checkbox("Enabled_Bar_Width", false).with_description("enabled bar width"),
    )?;
    table.insert(
        "lable_color",
        text("Lable_Color", "#96CDCD").with_description("lable color example: #96CDCD"),
    )?;
    Ok(())
}

fn register_pie_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert(
        "label_position",
        free_form_select("Label_Position").with_choices(choices_from_values(["inside", "outside"])),
    )?;
    table.insert(
        "circle_type",
        free_form_select("Circle_Type")
            .with_choices(choices_from_values(["none", "big", "medium", "small"]))
            .with_default("none")
            .render_trigger(),
    )?;
    table.insert("circle", checkbox("Circle", true))?;
    table.insert("normal", checkbox("Full", true))?;
    table.insert(
        "rose_type",
        free_form_select("Rose_Type")
            .with_choices(choices_from_values(["radius", "area"]))
            .render_trigger(),
    )?;
    table.insert("label_format", text("Label_Format", "{b}  : {c} ({d}%)"))?;
    table.insert("inner_metrics", metric_list("Inner_Metrics", true))?;
    table.insert(
        "inner_label_position",
        free_form_select("Inner_Label_Position")
            .with_choices(choices_from_values(LABEL_POSITIONS))
            .with_default("inside"),
    )?;
    table.insert(
        "inner_label_format",
        text("Label_Format", "{b}  : {c} ({d}%)").with_description("example:{b}  : {c} ({d}%)"),
    )?;
    table.insert(
        "inner_lable_color",
        text("Inner_Lable_Color", "#fff").with_description("inner lable color example: #fff"),
    )?;
    table.insert("outer_metrics", metric_list("Outer_Metrics", true))?;
    table.insert(
        "outer_label_position",
        free_form_select("Outer_Label_Position")
            .with_choices(choices_from_values(LABEL_POSITIONS))
            .with_default("outside"),
    )?;
    table.insert(
        "outer_label_format",
        text("Label_Format", "{b}  : {c} ({d}%)").with_description("example:{b}  : {c} ({d}%)"),
    )?;
    table.insert(
        "col_num",
        free_form_select("Col_Num")
            .with_choices(choices_from_values([1, 2, 3, 4, 5]))
            .with_default(1),
    )?;
    table.insert(
        "inner_metrics_one",
        column_select("Inner_Circle_Metrics", "Inner Circle Metrics"),
    )?;
    table.insert(
        "outer_metrics_one",
        column_select("Outer_Circle_Metrics", "Outer Circle Metrics"),
    )?;
    for (id, label) in [
        ("parent_id", "Parent_Id"),
        ("child_id", "Child_Id"),
        ("child_name", "Child_Name"),
    ] {
        table.insert(
            id,
            column_select(label, "One or many controls to group by").with_default(""),
        )?;
    }
    table.insert("visible_min", text("Visible_Min", "1000"))?;
    table.insert(
        "leaf_depth",
        free_form_select("Leaf_Depth")
            .with_choices(choices_from_values((0..=10).map(|depth| depth.to_string())))
            .with_default("1"),
    )?;
    Ok(())
}

fn register_gauge_and_number_controls(table: &mut ControlTable) -> ControlResult<()> {
    for (id, label, default) in [
        ("dash_min", "Dash_Min", "0"),
        ("dash_max", "Dash_Max", "100"),
        ("dash_name", "Dash_Name", "completion rate"),
        ("dash_splitNum", "Dash_SplitNum", "10"),
        ("dash_expr", "Dash_Expr", "value"),
        ("dash_suffix", "Dash_Suffix", "%"),
        (
            "dash_style",
            "Dash_Style",
            "[0.2, #91c7ae]+[0.8, #63869e]+[1, #c23531]",
        ),
    ] {
        table.insert(
            id,
            text(label, default).with_description(id.replace('_', " ")),
        )?;
    }
    table.insert("fontSize", text("FontSize", "15").with_description("fontSize"))?;
    table.insert("metrics_one", single_metric("Metrics1", "Choose the metric"))?;
    table.insert("metrics_two", single_metric("Metrics2", "Choose the metric"))?;
    table.insert(
        "head_color",
        text("Head_Color", "#4490ca").with_description("head color example: #4490ca"),
    )?;
    table.insert(
        "body_color",
        text("Body_Color", "#4c9eda").with_description("body color example: #4490ca"),
    )?;
    table.insert(
        "icone_select",
        ControlDescriptor::new(ControlKind::Icon, "icone select")
            .with_default("fa-comments")
            .with_description("select icone")
            .render_trigger(),
    )?;
    table.insert(
        "format",
        text("Format", "").with_description("format, like: {value/100} hundred"),
    )?;
    table.insert("titleSize", text("TitleSize", "15").with_description("titleSize"))?;
    table.insert(
        "fontColor",
        text("Font_Color", "#2ab4c0").with_description("fontColor example: #2ab4c0"),
    )?;
    table.insert("number_description", text("Number_Description", ""))?;
    table.insert("progress_description", text("Progress_Description", ""))?;
    table.insert(
        "big_number_fontSize",
        text("FontSize", "30").with_description("fontSize"),
    )?;
    table.insert(
        "icon_color",
        text("Icon_Color", "#2ab4c0").with_description("Icon_Color example: #2ab4c0"),
    )?;
    Ok(())
}

fn register_quadrant_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert("x_metric", single_metric("X_Axis_Metrics", "X axis metrics"))?;
    table.insert("y_metric", single_metric("Y_Axis_Metrics", "Y axis metrics"))?;
    for (id, label, description) in [
        ("origin_x", "Focus_X_Axis", "Focus X Axis"),
        ("origin_y", "Focus_Y_Axis", "Focus Y Axis"),
        ("min_x_axis", "Min_X_Axis", "Min X Axis"),
        ("max_x_axis", "Max_X_Axis", "Max X Axis"),
        ("min_y_axis", "Min_Y_Axis", "Min Y Axis"),
        ("max_y_axis", "Max_Y_Axis", "Max Y Axis"),
    ] {
        table.insert(id, text(label, "").with_description(description))?;
    }
    for (ordinal, x, y) in [
        ("first", "80%", "5%"),
        ("second", "12%", "5%"),
        ("third", "12%", "75%"),
        ("fourth", "80%", "75%"),
    ] {
        let title = capitalize(ordinal);
        table.insert(
            &format!("{ordinal}_module_infor"),
            text(&format!("{title}_Module_Information"), "")
                .with_description(format!("{title} Module Information")),
        )?;
        table.insert(
            &format!("{ordinal}_x"),
            text(&format!("{title}_X"), x).with_description(format!("example: {x}")),
        )?;
        table.insert(
            &format!("{ordinal}_y"),
            text(&format!("{title}_Y"), y).with_description(format!("example: {y}")),
        )?;
    }
    table.insert(
        "point_size",
        text("Point_Size", "10").with_description("point size"),
    )?;
    Ok(())
}

fn register_map_and_funnel_controls(table: &mut ControlTable) -> ControlResult<()> {
    table.insert(
        "groupby_one",
        ControlDescriptor::new(ControlKind::select(), "Group by")
            .with_map_state_to_props(groupable_columns_props)
            .with_description("One or many controls to group by"),
    )?;
    table.insert(
        "min_legend",
        text("Legend_Minimum", "").with_description("Enter the minimum value of the histogram"),
    )?;
    table.insert(
        "max_legend",
        text("Legend_Maximum", "").with_description("Enter the minimum value of the histogram"),
    )?;
    table.insert(
        "standard_point",
        free_form_select("Standard_Point")
            .with_choices(choices_from_values(1..=7))
            .with_default(4),
    )?;
    table.insert(
        "order_type",
        ControlDescriptor::new(ControlKind::OrderSelect, "flow")
            .with_default(Value::Array(Vec::new()))
            .with_map_state_to_props(groupable_columns_props)
            .with_description("Required process"),
    )?;
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_corners_follow_their_ordinal() {
        let mut table = ControlTable::new();
        register_quadrant_controls(&mut table).expect("quadrant controls");
        let third = table.require("third_y").expect("third_y");
        assert_eq!(third.label, "Third_Y");
        assert_eq!(third.description.as_deref(), Some("example: 75%"));
        assert_eq!(
            table.require("fourth_module_infor").expect("fourth").label,
            "Fourth_Module_Information"
        );
    }
}
