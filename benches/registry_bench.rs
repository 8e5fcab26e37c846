use chart_controls::api::RegistryConfig;
use chart_controls::builtin;
use chart_controls::core::{ColumnMeta, DatasourceMeta, MetricMeta, UiState};
use chart_controls::i18n::{I18nService, LocaleBundle, Translator};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_resolve_builtin_registry(c: &mut Criterion) {
    let config = RegistryConfig::default();
    c.bench_function("resolve_builtin_registry", |b| {
        b.iter(|| {
            let registry = builtin::resolved_registry(black_box(&config)).expect("registry");
            black_box(registry.len());
        })
    });
}

fn bench_default_form_data_with_datasource(c: &mut Criterion) {
    let registry = builtin::resolved_registry(&RegistryConfig::default()).expect("registry");
    let panel = registry.panel("line").expect("line panel");
    let mut datasource = DatasourceMeta::new("1", "events").with_metric(MetricMeta::new("count"));
    for i in 0..200 {
        let column = ColumnMeta::new(format!("col_{i}"));
        datasource = datasource.with_column(if i % 10 == 0 { column.temporal() } else { column });
    }
    let state = UiState::new().with_datasource(datasource);

    c.bench_function("line_default_form_data_200_columns", |b| {
        b.iter(|| {
            let form_data = panel.default_form_data(black_box(&state));
            black_box(form_data.len());
        })
    });
}

fn bench_catalog_lookups(c: &mut Criterion) {
    let mut service = I18nService::new();
    let bundle = (0..5_000).fold(LocaleBundle::new(), |bundle, i| {
        bundle.with_entry(&format!("message {i}"), &format!("Nachricht {i}"))
    });
    service.load("de", bundle).expect("load de");
    service.activate("de").expect("activate de");

    c.bench_function("catalog_translate_hit_and_miss", |b| {
        b.iter(|| {
            black_box(service.translate(black_box("message 4321")));
            black_box(service.translate(black_box("missing message")));
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_builtin_registry,
    bench_default_form_data_with_datasource,
    bench_catalog_lookups
);
criterion_main!(benches);
