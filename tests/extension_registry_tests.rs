use chart_controls::api::{ControlTable, ExploreSession, RegistryConfig, ResolvedRegistry};
use chart_controls::builtin;
use chart_controls::core::{ColumnMeta, CompositeKind, ControlKind, DatasourceMeta, MetricMeta, UiState};
use chart_controls::i18n::IdentityTranslator;
use chart_controls::render::{NullPanelRenderer, Widget, build_widget};
use serde_json::{Value, json};

const EXTENSION_TYPES: [&str; 31] = [
    "filter_box",
    "filter_box_tree",
    "filter_box_combination",
    "ag_grid",
    "echarts_bar_progress",
    "echarts_bar",
    "echarts_bar_waterfall",
    "echarts_bar_h",
    "echarts_line_bar",
    "echarts_line",
    "echarts_pie_m",
    "echarts_pie_h",
    "echarts_pie_g",
    "echarts_pie_h_g",
    "echarts_dash_board",
    "echarts_big_number_compare",
    "echarts_big_number",
    "big_number_viz",
    "big_number_two_viz",
    "big_number_three_viz",
    "echarts_china_map",
    "china_city_map",
    "echarts_china_city_map_migration",
    "echarts_bubble",
    "echarts_quadrant",
    "echarts_area_stack",
    "echarts_sankey",
    "echarts_funnel",
    "echarts_radar_map",
    "echarts_treemap",
    "echarts_word_cloud",
];

fn registry() -> ResolvedRegistry {
    builtin::resolved_registry(&RegistryConfig::default()).expect("builtin registry")
}

fn sales() -> DatasourceMeta {
    DatasourceMeta::new("7", "sales")
        .with_column(ColumnMeta::new("region"))
        .with_column(ColumnMeta::new("city").with_verbose_name("City"))
        .with_column(ColumnMeta::new("order_date").temporal())
        .with_metric(MetricMeta::new("sum__amount"))
        .with_metric(MetricMeta::new("count"))
}

#[test]
fn extension_chart_types_resolve_in_strict_mode() {
    let registry = registry();
    for vis_type in EXTENSION_TYPES {
        let panel = registry.panel(vis_type).expect(vis_type);
        assert!(panel.contains("datasource"), "{vis_type} lacks a datasource");
        assert!(panel.control_count() > 4, "{vis_type} has too few controls");
    }

    let ag_grid = registry.panel("ag_grid").expect("ag_grid");
    let labels: Vec<&str> = ag_grid.sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        &labels[2..],
        [
            "Chart Options",
            "AgGrid Options",
            "Setting Options",
            "baseStyle",
            "condition",
            "compare",
            "navigator",
            "agGrid",
            "agGrid_pivot",
        ]
    );
}

#[test]
fn extension_overrides_relabel_groupby() {
    let registry = registry();
    let label = |vis_type: &str| {
        registry
            .panel(vis_type)
            .expect(vis_type)
            .control("groupby")
            .expect("groupby")
            .descriptor
            .label
            .clone()
    };
    assert_eq!(label("filter_box"), "Filter controls");
    assert_eq!(label("echarts_bar_progress"), "Y_Axis");
    assert_eq!(label("echarts_line_bar"), "Y_Axis");
    assert_eq!(label("echarts_china_city_map_migration"), "From City / To City");
    assert_eq!(label("echarts_sankey"), "Source / Target");
    assert_eq!(label("echarts_bar"), "Group by");
}

#[test]
fn filter_box_offers_only_filterable_columns() {
    let registry = registry();
    let filter_box = registry.panel("filter_box").expect("filter_box");
    let mut source = sales();
    source.columns[0].filterable = false;
    let state = UiState::new().with_datasource(source);

    let states = filter_box.control_states(&state, &IdentityTranslator::new());
    let offered: Vec<&Value> = states["groupby"].choices.iter().map(|c| &c.value).collect();
    assert_eq!(offered, [&json!("city"), &json!("order_date")]);
    assert_eq!(states["instant_filtering"].value, json!(true));
    assert_eq!(states["date_filter"].value, json!(false));
}

#[test]
fn extension_defaults_match_their_declarations() {
    let registry = registry();
    let bare = UiState::new();

    let grid = registry.panel("ag_grid").expect("ag_grid").default_form_data(&bare);
    assert_eq!(grid["theme"], json!("blue"));
    assert_eq!(grid["pageSize"], json!("30"));
    assert_eq!(grid["is_pivot"], json!("false"));
    assert_eq!(grid["col_style"], json!([]));
    assert_eq!(grid["frozen_left"], Value::Null);

    let number = registry
        .panel("big_number_viz")
        .expect("big_number_viz")
        .default_form_data(&bare);
    assert_eq!(number["icone_select"], json!("fa-comments"));
    assert_eq!(number["head_color"], json!("#4490ca"));
    assert_eq!(number["subheader"], json!(""));

    let quadrant = registry
        .panel("echarts_quadrant")
        .expect("echarts_quadrant")
        .default_form_data(&bare);
    assert_eq!(quadrant["third_y"], json!("75%"));
    assert_eq!(quadrant["top_padding"], json!("80"));
}

#[test]
fn metric_lists_default_to_the_first_saved_metric() {
    let registry = registry();
    let bar = registry.panel("echarts_bar").expect("echarts_bar");

    let bare = bar.default_form_data(&UiState::new());
    assert_eq!(bare["y_metrics"], Value::Null);

    let with_source = bar.default_form_data(&UiState::new().with_datasource(sales()));
    assert_eq!(with_source["y_metrics"], json!(["sum__amount"]));
    assert_eq!(with_source["y_left_metrics"], json!(["sum__amount"]));

    let compare = registry
        .panel("echarts_big_number_compare")
        .expect("compare")
        .default_form_data(&UiState::new().with_datasource(sales()));
    assert_eq!(compare["metrics_one"], json!("sum__amount"));
}

#[test]
fn bespoke_controls_get_dedicated_widgets() {
    let registry = registry();
    let translator = IdentityTranslator::new();
    let state = UiState::new().with_datasource(sales());

    let grid = registry.panel("ag_grid").expect("ag_grid");
    let states = grid.control_states(&state, &translator);
    assert_eq!(
        build_widget(&states["show_modal"]),
        Widget::Button {
            caption: "table_style".to_owned()
        }
    );
    let col_style = build_widget(&states["col_style"]);
    let Widget::RuleEditor { kind, rules, columns } = &col_style else {
        panic!("expected a rule editor, got {col_style:?}");
    };
    assert_eq!(*kind, CompositeKind::ColStyle);
    assert!(rules.is_empty());
    assert_eq!(columns.len(), 3);
    assert_eq!(col_style.name(), "col-style");
    assert_eq!(col_style.summary(), "0 rule(s)");

    let number = registry.panel("big_number_viz").expect("big_number_viz");
    let icon = build_widget(&number.control_states(&state, &translator)["icone_select"]);
    assert_eq!(icon.summary(), "fa-comments");

    let funnel = registry.panel("echarts_funnel").expect("echarts_funnel");
    let mut funnel_state = state.clone();
    funnel_state
        .form_data
        .insert("order_type".to_owned(), json!(["region", "city"]));
    let order = build_widget(&funnel.control_states(&funnel_state, &translator)["order_type"]);
    assert_eq!(order.name(), "ordered-select");
    assert_eq!(order.summary(), "region > City");
}

#[test]
fn bespoke_kinds_load_from_declarative_tables() {
    let table = ControlTable::from_json_str(
        r#"{
            "show_modal": {"type": "ButtonControl", "label": "table_style"},
            "stacks": {"type": "StackControl", "label": "", "default": []},
            "since": {"type": "DatePickerControl", "label": "since"},
            "icon": {"type": "IconControl", "label": "icon", "default": "fa-comments"}
        }"#,
    )
    .expect("bespoke kinds load");

    assert_eq!(table.require("show_modal").expect("show_modal").kind, ControlKind::Button);
    assert_eq!(
        table.require("stacks").expect("stacks").kind,
        ControlKind::Composite(CompositeKind::Stack)
    );
    assert_eq!(table.require("since").expect("since").kind, ControlKind::DatePicker);
    assert_eq!(table.require("icon").expect("icon").kind, ControlKind::Icon);
}

#[test]
fn grid_rules_reset_when_the_datasource_changes() {
    let registry = registry();
    let translator = IdentityTranslator::new();
    let mut session =
        ExploreSession::new(&registry, &translator, NullPanelRenderer::default(), "ag_grid")
            .expect("ag_grid session");
    session
        .set_value("col_style", json!([{"column": "stale"}]))
        .expect("col_style");
    session.set_value("theme", json!("dark")).expect("theme");

    session.set_datasource(sales());
    assert_eq!(session.value("col_style"), Some(&json!([])));
    assert_eq!(session.value("theme"), Some(&json!("dark")));
}
