use chart_controls::api::{
    ControlTable, ExploreSession, RegistryConfig, ResolvedRegistry, VisTypeRegistry,
};
use chart_controls::builtin;
use chart_controls::core::{ControlValue, DatasourceMeta, UiState};
use chart_controls::error::ControlError;
use chart_controls::i18n::I18nService;
use chart_controls::render::{NullPanelRenderer, PanelRenderer, TextPanelRenderer};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: control_panel_tool <list|check|dump <vis_type>|request <vis_type>> \
[--controls <path>] [--visualizations <path>] [--config <path>] [--datasource <path>] \
[--catalog <path> --locale <code>] [--format text|json] [--set <control>=<json>]...";

#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandKind {
    List,
    Check,
    Dump(String),
    Request(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    controls: Option<PathBuf>,
    visualizations: Option<PathBuf>,
    config: Option<PathBuf>,
    datasource: Option<PathBuf>,
    catalog: Option<PathBuf>,
    locale: Option<String>,
    format: OutputFormat,
    values: Vec<(String, ControlValue)>,
}

fn main() {
    let _ = chart_controls::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(&args)?;
    let registry = match build_registry(&args, &config) {
        Ok(registry) => registry,
        Err(err) => return Err(describe_error(&err)),
    };

    match &args.command {
        CommandKind::List => {
            for panel in registry.panels() {
                println!(
                    "{:<20} {:<28} {} controls",
                    panel.vis_type,
                    panel.label,
                    panel.control_count()
                );
            }
        }
        CommandKind::Check => {
            let controls: usize = registry.panels().map(|panel| panel.control_count()).sum();
            println!(
                "ok: {} visualization types, {controls} control slots resolved",
                registry.len()
            );
        }
        CommandKind::Dump(vis_type) => {
            let translator = load_translator(&args, &config)?;
            let state = load_state(&args)?;
            match args.format {
                OutputFormat::Json => {
                    let panel = registry.panel(vis_type).map_err(|e| e.to_string())?;
                    let mut state = state;
                    state.form_data = panel.default_form_data(&state);
                    apply_values(&mut state, &args.values);
                    let snapshot = panel.snapshot(&state, &translator);
                    println!(
                        "{}",
                        snapshot
                            .to_json_contract_v1_pretty()
                            .map_err(|e| e.to_string())?
                    );
                }
                OutputFormat::Text => {
                    let mut session = open_session(
                        &registry,
                        &translator,
                        TextPanelRenderer::new(),
                        vis_type,
                        state,
                        &args.values,
                    )?;
                    session.render().map_err(|e| e.to_string())?;
                    print!("{}", session.renderer().output());
                }
            }
        }
        CommandKind::Request(vis_type) => {
            let translator = load_translator(&args, &config)?;
            let state = load_state(&args)?;
            let session = open_session(
                &registry,
                &translator,
                NullPanelRenderer::default(),
                vis_type,
                state,
                &args.values,
            )?;
            let request = session
                .chart_request()
                .map_err(|e| describe_error(&e))?;
            println!(
                "{}",
                request
                    .to_json_contract_v1_pretty()
                    .map_err(|e| e.to_string())?
            );
        }
    }
    Ok(())
}

fn open_session<'a, R: PanelRenderer>(
    registry: &'a ResolvedRegistry,
    translator: &'a I18nService,
    renderer: R,
    vis_type: &str,
    state: UiState,
    values: &[(String, ControlValue)],
) -> Result<ExploreSession<'a, R>, String> {
    let mut session = ExploreSession::new(registry, translator, renderer, vis_type)
        .map_err(|e| e.to_string())?;
    if let Some(datasource) = state.datasource {
        session.set_datasource(datasource);
    }
    for (control_id, value) in values {
        session
            .set_value(control_id, value.clone())
            .map_err(|e| e.to_string())?;
    }
    Ok(session)
}

fn apply_values(state: &mut UiState, values: &[(String, ControlValue)]) {
    for (control_id, value) in values {
        state.form_data.insert(control_id.clone(), value.clone());
    }
}

fn build_registry(args: &CliArgs, config: &RegistryConfig) -> Result<ResolvedRegistry, ControlError> {
    let table = match &args.controls {
        Some(path) => ControlTable::from_json_str(&read(path).map_err(ControlError::InvalidData)?)?,
        None => builtin::control_table()?,
    };
    let visualizations = match &args.visualizations {
        Some(path) => {
            VisTypeRegistry::from_json_str(&read(path).map_err(ControlError::InvalidData)?)?
        }
        None => builtin::vis_registry()?,
    };
    ResolvedRegistry::build(&table, &visualizations, config)
}

fn load_config(args: &CliArgs) -> Result<RegistryConfig, String> {
    let mut config = match &args.config {
        Some(path) => RegistryConfig::from_json_str(&read(path)?).map_err(|e| e.to_string())?,
        None => RegistryConfig::default(),
    };
    if let Some(locale) = &args.locale {
        config = config.with_locale(locale.clone());
    }
    Ok(config)
}

fn load_translator(args: &CliArgs, config: &RegistryConfig) -> Result<I18nService, String> {
    let mut service = I18nService::new();
    let Some(path) = &args.catalog else {
        return Ok(service);
    };
    let locale = config
        .locale
        .clone()
        .ok_or_else(|| "--catalog requires --locale".to_owned())?;
    let loaded = service
        .load_json_str(&locale, &read(path)?)
        .map_err(|e| e.to_string())?;
    service.activate(&locale).map_err(|e| e.to_string())?;
    eprintln!("loaded {loaded} catalog entries for `{locale}`");
    Ok(service)
}

fn load_state(args: &CliArgs) -> Result<UiState, String> {
    let mut state = UiState::new();
    if let Some(path) = &args.datasource {
        let datasource: DatasourceMeta = serde_json::from_str(&read(path)?)
            .map_err(|e| format!("failed to parse datasource json: {e}"))?;
        state = state.with_datasource(datasource);
    }
    Ok(state)
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

fn describe_error(err: &ControlError) -> String {
    let details: Vec<String> = match err {
        ControlError::DanglingReferences(references) => {
            references.iter().map(ToString::to_string).collect()
        }
        ControlError::RepeatedReferences(repeated) => {
            repeated.iter().map(ToString::to_string).collect()
        }
        ControlError::InvalidDefaults(issues) => issues.iter().map(ToString::to_string).collect(),
        ControlError::InvalidControls(errors) => errors.iter().map(ToString::to_string).collect(),
        _ => Vec::new(),
    };
    let mut message = err.to_string();
    for detail in details {
        message.push_str("\n  - ");
        message.push_str(&detail);
    }
    message
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, String> {
    let mut args = args.into_iter();
    let command = match args.next().as_deref() {
        Some("list") => CommandKind::List,
        Some("check") => CommandKind::Check,
        Some("dump") => CommandKind::Dump(
            args.next()
                .ok_or_else(|| "missing visualization type for dump".to_owned())?,
        ),
        Some("request") => CommandKind::Request(
            args.next()
                .ok_or_else(|| "missing visualization type for request".to_owned())?,
        ),
        _ => return Err(USAGE.to_owned()),
    };

    let mut parsed = CliArgs {
        command,
        controls: None,
        visualizations: None,
        config: None,
        datasource: None,
        catalog: None,
        locale: None,
        format: OutputFormat::Text,
        values: Vec::new(),
    };

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--controls" => parsed.controls = Some(PathBuf::from(value()?)),
            "--visualizations" => parsed.visualizations = Some(PathBuf::from(value()?)),
            "--config" => parsed.config = Some(PathBuf::from(value()?)),
            "--datasource" => parsed.datasource = Some(PathBuf::from(value()?)),
            "--catalog" => parsed.catalog = Some(PathBuf::from(value()?)),
            "--locale" => parsed.locale = Some(value()?),
            "--format" => {
                parsed.format = match value()?.as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    other => return Err(format!("unknown format `{other}`")),
                };
            }
            "--set" => {
                let assignment = value()?;
                let (control_id, raw) = assignment
                    .split_once('=')
                    .ok_or_else(|| format!("expected <control>=<json>, got `{assignment}`"))?;
                let parsed_value = serde_json::from_str(raw)
                    .unwrap_or_else(|_| ControlValue::String(raw.to_owned()));
                parsed.values.push((control_id.to_owned(), parsed_value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        parse_args(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_dump_with_paths_and_format() {
        let args = parse(&[
            "dump",
            "line",
            "--datasource",
            "ds.json",
            "--catalog",
            "de.json",
            "--locale",
            "de",
            "--format",
            "json",
        ])
        .expect("valid arguments");
        assert_eq!(args.command, CommandKind::Dump("line".to_owned()));
        assert_eq!(args.datasource, Some(PathBuf::from("ds.json")));
        assert_eq!(args.catalog, Some(PathBuf::from("de.json")));
        assert_eq!(args.locale.as_deref(), Some("de"));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn set_values_fall_back_to_plain_strings() {
        let args = parse(&[
            "request",
            "pie",
            "--set",
            "row_limit=100",
            "--set",
            "metric=count",
            "--set",
            "groupby=[\"gender\"]",
        ])
        .expect("valid arguments");
        assert_eq!(
            args.values,
            [
                ("row_limit".to_owned(), json!(100)),
                ("metric".to_owned(), json!("count")),
                ("groupby".to_owned(), json!(["gender"])),
            ]
        );
    }

    #[test]
    fn malformed_arguments_are_reported() {
        assert_eq!(parse(&[]).err().as_deref(), Some(USAGE));
        assert_eq!(
            parse(&["dump"]).err().as_deref(),
            Some("missing visualization type for dump")
        );
        assert_eq!(
            parse(&["list", "--controls"]).err().as_deref(),
            Some("missing value for --controls")
        );
        assert_eq!(
            parse(&["list", "--format", "yaml"]).err().as_deref(),
            Some("unknown format `yaml`")
        );
        assert_eq!(
            parse(&["request", "pie", "--set", "row_limit"]).err().as_deref(),
            Some("expected <control>=<json>, got `row_limit`")
        );
        assert_eq!(
            parse(&["check", "--verbose"]).err().as_deref(),
            Some("unknown argument `--verbose`")
        );
    }
}
