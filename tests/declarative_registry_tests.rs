use chart_controls::api::{
    ControlTable, RegistryConfig, ResolvedRegistry, VisTypeRegistry,
};
use chart_controls::core::{ControlKind, SelectOptions, TextInputKind, UiState};
use chart_controls::error::ControlError;
use serde_json::json;

const CONTROLS: &str = r#"{
    "row_limit": {
        "type": "SelectControl",
        "label": "Row limit",
        "default": 50,
        "choices": [10, 50, 100]
    },
    "page_length": {
        "type": "TextControl",
        "label": "Page length",
        "isInt": true,
        "default": 0,
        "validators": ["integer"]
    },
    "markup_type": {
        "type": "SelectControl",
        "label": "Markup Type",
        "clearable": false,
        "default": "markdown",
        "choices": [["markdown", "Markdown"], ["html", "HTML"]]
    },
    "show_legend": {
        "type": "CheckboxControl",
        "label": "Legend",
        "default": true,
        "renderTrigger": true
    }
}"#;

const VISUALIZATIONS: &str = r#"{
    "bar_chart": {
        "label": "Bar Chart",
        "controlPanelSections": [
            {"label": "Query", "expanded": true, "controlSetRows": [["row_limit"]]}
        ]
    },
    "table": {
        "label": "Table",
        "controlPanelSections": [
            {
                "label": "Options",
                "description": "Display options",
                "controlSetRows": [["page_length", null], ["show_legend", "markup_type"]]
            }
        ],
        "controlOverrides": {
            "page_length": {"label": "Rows per page", "default": 25},
            "markup_type": {"default": null}
        }
    }
}"#;

fn load() -> ResolvedRegistry {
    let table = ControlTable::from_json_str(CONTROLS).expect("controls json");
    let registry = VisTypeRegistry::from_json_str(VISUALIZATIONS).expect("registry json");
    ResolvedRegistry::build(&table, &registry, &RegistryConfig::default()).expect("build")
}

#[test]
fn declarative_bar_chart_resolves_to_one_select() {
    let resolved = load();
    let panel = resolved.panel("bar_chart").expect("bar_chart");
    assert_eq!(panel.sections.len(), 1);
    assert_eq!(panel.sections[0].rows.len(), 1);
    let row_limit = panel.sections[0].rows[0][0].as_ref().expect("row_limit");
    assert_eq!(row_limit.descriptor.kind, ControlKind::select());
    assert_eq!(
        panel.default_form_data(&UiState::new())["row_limit"],
        json!(50)
    );
}

#[test]
fn declarative_kinds_flags_and_overrides_apply() {
    let resolved = load();
    let table = resolved.panel("table").expect("table");
    assert!(!table.sections[0].expanded);
    assert_eq!(table.sections[0].description.as_deref(), Some("Display options"));

    let page_length = table.control("page_length").expect("page_length");
    assert_eq!(page_length.descriptor.kind, ControlKind::Text(TextInputKind::Integer));
    assert_eq!(page_length.descriptor.label, "Rows per page");
    assert_eq!(
        page_length.descriptor.validators.first().map(|v| v.name()),
        Some("integer")
    );

    let markup = table.control("markup_type").expect("markup_type");
    assert_eq!(
        markup.descriptor.kind,
        ControlKind::Select(SelectOptions::default().not_clearable())
    );
    assert!(table.control("show_legend").expect("legend").descriptor.render_trigger);

    let defaults = table.default_form_data(&UiState::new());
    assert_eq!(defaults["page_length"], json!(25));
    assert_eq!(defaults["markup_type"], json!(null));
    assert_eq!(defaults["show_legend"], json!(true));
    assert_eq!(defaults["viz_type"], json!("table"));
}

#[test]
fn declarative_errors_are_reported() {
    let err = ControlTable::from_json_str(r#"{"x": {"label": "no type"}}"#)
        .expect_err("type is required");
    assert!(matches!(err, ControlError::InvalidData(_)));

    let err = VisTypeRegistry::from_json_str(
        r#"{"pie": {"label": "Pie", "controlOverrides": {"metric": {"validators": ["even"]}}}}"#,
    )
    .expect_err("unknown validator");
    assert!(matches!(err, ControlError::UnknownValidator(name) if name == "even"));

    let table = ControlTable::from_json_str(CONTROLS).expect("controls");
    let registry = VisTypeRegistry::from_json_str(
        r#"{"pie": {"label": "Pie", "controlPanelSections": [{"label": "Query", "controlSetRows": [["metric"]]}]}}"#,
    )
    .expect("registry");
    let err = ResolvedRegistry::build(&table, &registry, &RegistryConfig::default())
        .expect_err("metric is not declared");
    assert!(matches!(&err, ControlError::DanglingReferences(refs) if refs.len() == 1));
}

#[test]
fn registry_config_defaults_and_json_round_trip() {
    let config = RegistryConfig::default();
    assert!(config.strict_references);
    assert!(config.check_defaults);
    assert!(!config.expand_all_sections);
    assert_eq!(config.locale, None);

    let parsed = RegistryConfig::from_json_str(r#"{"locale": "de"}"#).expect("partial config");
    assert_eq!(parsed, RegistryConfig::new().with_locale("de"));

    let custom = RegistryConfig::new()
        .with_strict_references(false)
        .with_check_defaults(false)
        .with_expand_all_sections(true)
        .with_locale("pt-br");
    let json = custom.to_json_pretty().expect("serialize");
    assert_eq!(RegistryConfig::from_json_str(&json).expect("parse"), custom);

    assert!(matches!(
        RegistryConfig::from_json_str(r#"{"strict_references": "yes"}"#),
        Err(ControlError::InvalidData(_))
    ));
}
