use chart_controls::api::{
    ControlTable, ExploreSession, RegistryConfig, ResolvedRegistry, VisTypeRegistry,
};
use chart_controls::core::{
    ControlDescriptor, ControlKind, ControlPanelSection, SelectOptions, UiState, Validator,
    VisualizationTypeEntry, choices_from_pairs, choices_from_values, row,
};
use chart_controls::error::ControlError;
use chart_controls::i18n::{I18nService, IdentityTranslator, LocaleBundle};
use chart_controls::render::{
    NullPanelRenderer, PanelFrame, PanelRenderer, Rgba, SectionFrame, TextPanelRenderer, Widget,
    WidgetSlot, build_widget,
};
use serde_json::json;
use smallvec::smallvec;

fn show_values_enabled(state: &UiState) -> bool {
    state
        .value("show_values")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false)
}

fn fixture_registry() -> ResolvedRegistry {
    let table = ControlTable::new()
        .with(
            "row_limit",
            ControlDescriptor::new(
                ControlKind::select_with(SelectOptions::default().free_form()),
                "Row limit",
            )
            .with_default(50)
            .with_validator(Validator::Integer)
            .with_choices(choices_from_values([10, 50, 100])),
        )
        .and_then(|t| {
            t.with(
                "show_values",
                ControlDescriptor::new(ControlKind::Checkbox, "Show values").with_default(false),
            )
        })
        .and_then(|t| {
            t.with(
                "value_format",
                ControlDescriptor::new(ControlKind::select(), "Value format")
                    .with_default(",d")
                    .with_choices(choices_from_pairs([(",d", "Integer"), (".2f", "Fixed")]))
                    .with_visibility(show_values_enabled),
            )
        })
        .and_then(|t| {
            t.with(
                "slice_id",
                ControlDescriptor::new(ControlKind::Hidden, "Chart ID"),
            )
        })
        .and_then(|t| {
            t.with(
                "color",
                ControlDescriptor::new(ControlKind::ColorPicker, "Color")
                    .with_default(json!({"r": 0, "g": 122, "b": 135, "a": 1})),
            )
        })
        .and_then(|t| {
            t.with(
                "y_axis_bounds",
                ControlDescriptor::new(ControlKind::Bounds, "Y Axis Bounds")
                    .with_default(json!([null, 10])),
            )
        })
        .expect("fixture table");

    let registry = VisTypeRegistry::new()
        .with(
            "bar_chart",
            VisualizationTypeEntry::new("Bar Chart")
                .with_section(
                    ControlPanelSection::new("Query", true)
                        .with_description("What to fetch")
                        .with_rows([row(&["row_limit", ""]), row(&["slice_id"])]),
                )
                .with_section(ControlPanelSection::new("Options", true).with_rows([
                    row(&["show_values", "value_format"]),
                    row(&["color", "y_axis_bounds"]),
                ]))
                .with_section(
                    ControlPanelSection::new("Advanced", false).with_row(row(&["value_format"])),
                ),
        )
        .expect("fixture registry");

    ResolvedRegistry::build(&table, &registry, &RegistryConfig::default()).expect("fixture build")
}

#[test]
fn text_outline_lists_sections_rows_and_placeholders() {
    let registry = fixture_registry();
    let translator = IdentityTranslator::new();
    let mut session =
        ExploreSession::new(&registry, &translator, TextPanelRenderer::new(), "bar_chart")
            .expect("session");
    session.render().expect("render");

    let expected = "\
Bar Chart (bar_chart)
[-] Query
    What to fetch
  - Row limit <select> 50 | ...
[-] Options
  - Show values <checkbox> [ ]
  - Color <color> #007a87 @ 1 | Y Axis Bounds <bounds> [auto, 10]
";
    assert_eq!(session.renderer().output(), expected);
}

#[test]
fn visibility_and_errors_show_up_in_outline() {
    let registry = fixture_registry();
    let translator = IdentityTranslator::new();
    let mut session =
        ExploreSession::new(&registry, &translator, TextPanelRenderer::new(), "bar_chart")
            .expect("session");
    session.set_value("show_values", json!(true)).expect("show_values");
    session.set_value("row_limit", json!("many")).expect("row_limit");
    session.render().expect("render");

    let output = session.renderer().output();
    assert!(output.contains("  - Row limit <select> many !is expected to be an integer | ...\n"));
    assert!(output.contains("  - Show values <checkbox> [x] | Value format <select> Integer\n"));
    assert!(output.contains("[+] Advanced\n"));
    assert!(!output.contains("Chart ID"));
}

#[test]
fn outline_uses_active_translations() {
    let mut service = I18nService::new();
    service
        .load(
            "fr",
            LocaleBundle::new()
                .with_entry("Query", "Requête")
                .with_entry("Row limit", "Limite de lignes")
                .with_entry("Bar Chart", "Diagramme en barres"),
        )
        .expect("load fr");
    service.activate("fr").expect("activate fr");

    let registry = fixture_registry();
    let mut session = ExploreSession::new(&registry, &service, TextPanelRenderer::new(), "bar_chart")
        .expect("session");
    session.render().expect("render");
    let output = session.renderer().output();
    assert!(output.starts_with("Diagramme en barres (bar_chart)\n[-] Requête\n"));
    assert!(output.contains("  - Limite de lignes <select> 50 | ...\n"));
}

#[test]
fn frame_skips_invisible_controls_and_keeps_hidden_widgets() {
    let registry = fixture_registry();
    let panel = registry.panel("bar_chart").expect("panel");
    let mut state = UiState::new();
    state.form_data = panel.default_form_data(&state);
    let states = panel.control_states(&state, &IdentityTranslator::new());

    let frame = PanelFrame::build(panel, &states);
    // The Advanced section only holds an invisible control.
    assert_eq!(frame.sections.len(), 2);
    assert_eq!(frame.sections[0].rows.len(), 2);
    assert!(frame.sections[0].rows[0][1].is_none());
    let hidden = frame.sections[0].rows[1][0].as_ref().expect("slice_id slot");
    assert!(hidden.widget.is_hidden());
    assert_eq!(frame.sections[1].rows[0].len(), 1);
    assert_eq!(frame.widget_count(), 5);
    assert!(frame.validate().is_ok());

    let mut renderer = NullPanelRenderer::default();
    renderer.render(&frame).expect("null render");
    assert_eq!(renderer.last_section_count, 2);
    assert_eq!(renderer.last_widget_count, 5);
}

fn checkbox_slot(control_id: &str) -> WidgetSlot {
    WidgetSlot {
        control_id: control_id.to_owned(),
        label: control_id.to_owned(),
        description: None,
        widget: Widget::Checkbox { checked: true },
        errors: Vec::new(),
        render_trigger: false,
    }
}

fn single_section(rows: Vec<chart_controls::render::FrameRow>) -> PanelFrame {
    PanelFrame::new("bar_chart", "Bar Chart").with_section(SectionFrame {
        label: "Query".to_owned(),
        description: None,
        expanded: true,
        rows,
    })
}

#[test]
fn malformed_frames_are_rejected_before_drawing() {
    let mut renderer = NullPanelRenderer::default();

    let empty_row = single_section(vec![smallvec![None, None]]);
    assert!(matches!(
        renderer.render(&empty_row),
        Err(ControlError::InvalidData(_))
    ));

    let repeated = single_section(vec![smallvec![
        Some(checkbox_slot("show_values")),
        Some(checkbox_slot("show_values")),
    ]]);
    assert!(matches!(
        renderer.render(&repeated),
        Err(ControlError::InvalidData(message)) if message.contains("appears twice")
    ));

    let unnamed = single_section(vec![smallvec![Some(checkbox_slot(" "))]]);
    assert!(renderer.render(&unnamed).is_err());

    let mut bad_bounds = checkbox_slot("y_axis_bounds");
    bad_bounds.widget = Widget::Bounds {
        min: Some(10.0),
        max: Some(1.0),
    };
    assert!(renderer.render(&single_section(vec![smallvec![Some(bad_bounds)]])).is_err());

    let mut bad_color = checkbox_slot("color");
    bad_color.widget = Widget::ColorPicker {
        color: Rgba::rgba(1, 2, 3, 1.5),
    };
    assert!(renderer.render(&single_section(vec![smallvec![Some(bad_color)]])).is_err());

    assert_eq!(renderer.render_count, 0);
    renderer
        .render(&single_section(vec![smallvec![Some(checkbox_slot("ok")), None]]))
        .expect("valid frame");
    assert_eq!(renderer.render_count, 1);
}

#[test]
fn widgets_follow_control_kinds() {
    let registry = chart_controls::builtin::resolved_registry(&RegistryConfig::default())
        .expect("builtin registry");
    let panel = registry.panel("markup").expect("markup");
    let mut state = UiState::new();
    state.form_data = panel.default_form_data(&state);
    state.form_data.insert("markup_type".to_owned(), json!("html"));
    let states = panel.control_states(&state, &IdentityTranslator::new());

    match build_widget(&states["code"]) {
        Widget::TextArea { language, .. } => assert_eq!(language.as_deref(), Some("html")),
        other => panic!("expected text area, got {other:?}"),
    }
    match build_widget(&states["markup_type"]) {
        Widget::Select {
            selected,
            clearable,
            multi,
            ..
        } => {
            assert_eq!(selected, [json!("html")]);
            assert!(!clearable);
            assert!(!multi);
        }
        other => panic!("expected select, got {other:?}"),
    }
    assert_eq!(build_widget(&states["viz_type"]).summary(), "markup");
    assert_eq!(build_widget(&states["datasource"]).summary(), "-");
}
