use chart_controls::error::ControlError;
use chart_controls::i18n::{
    FormatTable, FormatValue, I18nService, LocaleBundle, PluralRule, Translator, interpolate,
    interpolate_named,
};
use indexmap::IndexMap;

fn german() -> LocaleBundle {
    LocaleBundle::new()
        .with_entry("Metrics", "Metriken")
        .with_plural_entry("%s row", &["%s Zeile", "%s Zeilen"])
        .with_context_entry("chart", "Bar", "Balken")
}

#[test]
fn missing_messages_fall_back_to_their_ids() {
    let mut service = I18nService::new();
    assert_eq!(service.translate("Metrics"), "Metrics");
    assert_eq!(service.translate_plural("%s row", "%s rows", 1), "%s row");
    assert_eq!(service.translate_plural("%s row", "%s rows", 0), "%s rows");

    service.load("de", german()).expect("load de");
    // Loading alone does not change the active locale.
    assert_eq!(service.active_locale(), None);
    assert_eq!(service.translate("Metrics"), "Metrics");

    service.activate("de").expect("activate de");
    assert_eq!(service.translate("Metrics"), "Metriken");
    assert_eq!(service.translate("Dimensions"), "Dimensions");
    assert_eq!(service.translate(""), "");
    assert_eq!(
        service.translate_plural("%s column", "%s columns", 1),
        "%s column"
    );
    assert_eq!(
        service.translate_plural("%s column", "%s columns", 7),
        "%s columns"
    );

    service.deactivate();
    assert_eq!(service.translate("Metrics"), "Metrics");
}

#[test]
fn plural_form_follows_the_catalog_rule() {
    let mut service = I18nService::new();
    service.load("de", german()).expect("load de");
    service.activate("de").expect("activate");

    let five = service.translate_plural("%s row", "%s rows", 5);
    assert_eq!(five, "%s Zeilen");
    assert_eq!(interpolate(&five, &["5"]), "5 Zeilen");
    assert_eq!(service.translate_plural("%s row", "%s rows", 1), "%s Zeile");
    assert_eq!(service.translate_plural("%s row", "%s rows", 0), "%s Zeilen");
}

#[test]
fn reloading_a_bundle_is_idempotent() {
    let mut service = I18nService::new();
    assert_eq!(service.load("de", german()).expect("first load"), 3);
    let snapshot = service.catalog("de").cloned().expect("de catalog");

    assert_eq!(service.load("de", german()).expect("second load"), 0);
    assert_eq!(service.catalog("de"), Some(&snapshot));

    let added = service
        .load("de", LocaleBundle::new().with_entry("Metrics", "Kennzahlen").with_entry("Query", "Abfrage"))
        .expect("third load");
    assert_eq!(added, 1);
    service.activate("de").expect("activate");
    assert_eq!(service.translate("Metrics"), "Kennzahlen");
    assert_eq!(service.translate_plural("%s row", "%s rows", 2), "%s Zeilen");
}

#[test]
fn locale_codes_are_normalized() {
    let mut service = I18nService::new();
    service
        .load("pt_BR", LocaleBundle::new().with_entry("Metrics", "Métricas"))
        .expect("load pt_BR");
    service.activate("pt-br").expect("activate pt-br");
    assert_eq!(service.active_locale(), Some("pt-br"));
    assert_eq!(service.locales().collect::<Vec<_>>(), ["pt-br"]);
    assert_eq!(service.translate("Metrics"), "Métricas");

    let err = service.activate("fr").expect_err("fr was never loaded");
    assert!(matches!(err, ControlError::UnknownLocale(locale) if locale == "fr"));
    assert_eq!(service.active_locale(), Some("pt-br"));
    assert!(service.load("", LocaleBundle::new()).is_err());
    assert!(service.load("de/../x", LocaleBundle::new()).is_err());
}

#[test]
fn context_lookups_fall_back_to_plain_messages() {
    let mut service = I18nService::new();
    service
        .load(
            "de",
            german()
                .with_entry("Bar", "Bar (Einheit)")
                .with_plural_entry("%s bar", &["%s Balken", "%s Balken"]),
        )
        .expect("load de");
    service.activate("de").expect("activate");

    assert_eq!(service.translate_context("chart", "Bar"), "Balken");
    assert_eq!(service.translate("Bar"), "Bar (Einheit)");
    assert_eq!(service.translate_context("music", "Bar"), "Bar");
    assert_eq!(
        service.translate_context_plural("chart", "%s bar", "%s bars", 3),
        "%s Balken"
    );
    assert_eq!(
        service.translate_context_plural("chart", "%s line", "%s lines", 1),
        "%s line"
    );
}

#[test]
fn json_payload_installs_messages_rule_and_formats() {
    let payload = r#"{
        "catalog": {
            "Metrics": "Métriques",
            "%s row": ["%s ligne", "%s lignes"],
            "abbrev. month\u0004Sept.": "sept."
        },
        "plural": "nplurals=2; plural=(n > 1);",
        "formats": {
            "DATE_FORMAT": "j N Y",
            "DECIMAL_SEPARATOR": ",",
            "THOUSAND_SEPARATOR": " ",
            "NUMBER_GROUPING": 3,
            "FIRST_DAY_OF_WEEK": 1,
            "DATE_INPUT_FORMATS": ["%d/%m/%Y"]
        }
    }"#;

    let mut service = I18nService::new();
    assert_eq!(service.load_json_str("fr", payload).expect("load fr"), 3);
    service.activate("fr").expect("activate fr");

    assert_eq!(service.translate("Metrics"), "Métriques");
    assert_eq!(service.translate_plural("%s row", "%s rows", 0), "%s ligne");
    assert_eq!(service.translate_plural("%s row", "%s rows", 1), "%s ligne");
    assert_eq!(service.translate_plural("%s row", "%s rows", 2), "%s lignes");

    assert_eq!(service.get_format("DATE_FORMAT"), "j N Y");
    assert_eq!(service.get_format("NUMBER_GROUPING"), "3");
    assert_eq!(service.get_format("DATE_INPUT_FORMATS"), "DATE_INPUT_FORMATS");
    assert_eq!(service.get_format("Y-m-d"), "Y-m-d");
    assert_eq!(service.formats().first_day_of_week(), 1);

    let catalog = service.catalog("fr").expect("fr catalog");
    assert_eq!(catalog.plural_rule().nplurals(), Some(2));
}

#[test]
fn malformed_payloads_are_rejected() {
    let mut service = I18nService::new();
    assert!(matches!(
        service.load_json_str("fr", "{not json"),
        Err(ControlError::InvalidData(_))
    ));
    assert!(matches!(
        service.load_json_str("fr", r#"{"catalog": {}, "plural": "n >"}"#),
        Err(ControlError::InvalidPluralRule { .. })
    ));
    assert!(service.catalog("fr").is_none());
}

#[test]
fn later_bundles_may_replace_rule_and_formats() {
    let mut service = I18nService::new();
    service.load("ja", LocaleBundle::new().with_plural_entry("%s chart", &["%s 件", "%s 件!"]))
        .expect("load ja");
    service.activate("ja").expect("activate ja");
    assert_eq!(service.translate_plural("%s chart", "%s charts", 2), "%s 件!");

    service
        .load(
            "ja",
            LocaleBundle::new()
                .with_plural_rule(PluralRule::parse("0").expect("single form"))
                .with_formats(
                    FormatTable::empty().with("DATE_FORMAT", FormatValue::Text("Y年n月j日".to_owned())),
                ),
        )
        .expect("reload ja");
    assert_eq!(service.translate_plural("%s chart", "%s charts", 2), "%s 件");
    assert_eq!(service.get_format("DATE_FORMAT"), "Y年n月j日");
    assert_eq!(service.get_format("TIME_FORMAT"), "TIME_FORMAT");
}

#[test]
fn named_interpolation_uses_translated_templates() {
    let mut service = I18nService::new();
    service
        .load(
            "de",
            LocaleBundle::new().with_entry(
                "%(count)s rows in %(table)s",
                "%(count)s Zeilen in %(table)s",
            ),
        )
        .expect("load de");
    service.activate("de").expect("activate");

    let mut values = IndexMap::new();
    values.insert("count".to_owned(), "12".to_owned());
    values.insert("table".to_owned(), "birth_names".to_owned());
    let template = service.translate("%(count)s rows in %(table)s");
    assert_eq!(
        interpolate_named(&template, &values),
        "12 Zeilen in birth_names"
    );
}
