use chrono::NaiveDate;
use serde_json::Value;

use crate::api::ControlState;
use crate::core::{
    Choice, CompositeKind, ControlKind, ControlValue, TextInputKind, display_value, values_match,
};
use crate::error::{ControlError, ControlResult};

/// RGBA color as stored by color picker controls: 0..=255 channels and an
/// alpha in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 1.0)
    }

    /// Reads `{"r": .., "g": .., "b": .., "a": ..}`; missing alpha is opaque.
    #[must_use]
    pub fn from_value(value: &ControlValue) -> Option<Self> {
        let object = value.as_object()?;
        let channel = |name: &str| -> Option<u8> {
            let raw = object.get(name)?.as_f64()?;
            (0.0..=255.0).contains(&raw).then(|| raw.round() as u8)
        };
        Some(Self {
            red: channel("r")?,
            green: channel("g")?,
            blue: channel("b")?,
            alpha: object.get("a").and_then(Value::as_f64).unwrap_or(1.0),
        })
    }

    pub fn validate(self) -> ControlResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ControlError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Concrete widget for one control.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    TextInput {
        value: String,
        input: TextInputKind,
    },
    TextArea {
        value: String,
        language: Option<String>,
    },
    Checkbox {
        checked: bool,
    },
    Select {
        options: Vec<Choice>,
        selected: Vec<ControlValue>,
        multi: bool,
        free_form: bool,
        clearable: bool,
    },
    ColorPicker {
        color: Rgba,
    },
    ColorScheme {
        scheme: String,
        schemes: Vec<Choice>,
    },
    Bounds {
        min: Option<f64>,
        max: Option<f64>,
    },
    Hidden {
        value: ControlValue,
    },
    DatasourcePicker {
        datasource: Option<String>,
    },
    VizTypePicker {
        selected: String,
    },
    MetricPicker {
        selected: Vec<ControlValue>,
        available: Vec<Choice>,
        multi: bool,
    },
    AdhocFilters {
        filters: Vec<ControlValue>,
        columns: Vec<Choice>,
    },
    DateFilter {
        expression: String,
    },
    /// Opens a dialog; the control stores no value of its own.
    Button {
        caption: String,
    },
    IconPicker {
        icon: String,
    },
    DatePicker {
        date: Option<NaiveDate>,
        raw: String,
    },
    OrderedSelect {
        order: Vec<ControlValue>,
        available: Vec<Choice>,
    },
    /// List editor of style, filter or cascade rules.
    RuleEditor {
        kind: CompositeKind,
        rules: Vec<ControlValue>,
        columns: Vec<Choice>,
    },
}

impl Widget {
    /// Short name used by text outlines.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::TextInput { .. } => "text",
            Self::TextArea { .. } => "textarea",
            Self::Checkbox { .. } => "checkbox",
            Self::Select { .. } => "select",
            Self::ColorPicker { .. } => "color",
            Self::ColorScheme { .. } => "color-scheme",
            Self::Bounds { .. } => "bounds",
            Self::Hidden { .. } => "hidden",
            Self::DatasourcePicker { .. } => "datasource",
            Self::VizTypePicker { .. } => "viz-type",
            Self::MetricPicker { .. } => "metrics",
            Self::AdhocFilters { .. } => "filters",
            Self::DateFilter { .. } => "date-filter",
            Self::Button { .. } => "button",
            Self::IconPicker { .. } => "icon",
            Self::DatePicker { .. } => "date",
            Self::OrderedSelect { .. } => "ordered-select",
            Self::RuleEditor { kind, .. } => kind.widget_name(),
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden { .. })
    }

    /// One-line rendering of the current value.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::TextInput { value, .. } | Self::TextArea { value, .. } => format!("\"{value}\""),
            Self::Checkbox { checked } => if *checked { "[x]" } else { "[ ]" }.to_owned(),
            Self::Select {
                options, selected, ..
            } => join_selected(selected, options),
            Self::MetricPicker {
                selected,
                available,
                ..
            } => join_selected(selected, available),
            Self::ColorPicker { color } => format!("{} @ {}", color.to_hex(), color.alpha),
            Self::ColorScheme { scheme, .. } => scheme.clone(),
            Self::Bounds { min, max } => format!(
                "[{}, {}]",
                min.map_or_else(|| "auto".to_owned(), |v| v.to_string()),
                max.map_or_else(|| "auto".to_owned(), |v| v.to_string())
            ),
            Self::Hidden { value } => display_value(value),
            Self::DatasourcePicker { datasource } => {
                datasource.clone().unwrap_or_else(|| "-".to_owned())
            }
            Self::VizTypePicker { selected } => selected.clone(),
            Self::AdhocFilters { filters, .. } => format!("{} filter(s)", filters.len()),
            Self::DateFilter { expression } => expression.clone(),
            Self::Button { caption } => format!("[{caption}]"),
            Self::IconPicker { icon } => icon.clone(),
            Self::DatePicker { date, raw } => match date {
                Some(date) => date.format(DATE_PICKER_FORMAT).to_string(),
                None if raw.is_empty() => "-".to_owned(),
                None => raw.clone(),
            },
            Self::OrderedSelect { order, available } => {
                if order.is_empty() {
                    return "-".to_owned();
                }
                order
                    .iter()
                    .map(|value| join_selected(std::slice::from_ref(value), available))
                    .collect::<Vec<_>>()
                    .join(" > ")
            }
            Self::RuleEditor { rules, .. } => format!("{} rule(s)", rules.len()),
        }
    }

    pub fn validate(&self) -> ControlResult<()> {
        match self {
            Self::ColorPicker { color } => color.validate(),
            Self::Bounds {
                min: Some(min),
                max: Some(max),
            } if min > max => Err(ControlError::InvalidData(format!(
                "bounds minimum {min} exceeds maximum {max}"
            ))),
            Self::Select {
                selected, multi, ..
            }
            | Self::MetricPicker {
                selected, multi, ..
            } if !multi && selected.len() > 1 => Err(ControlError::InvalidData(
                "single-value selector holds several values".to_owned(),
            )),
            Self::DatePicker { date: None, raw } if !raw.is_empty() => Err(
                ControlError::InvalidData(format!("`{raw}` is not a YYYY-MM-DD date")),
            ),
            _ => Ok(()),
        }
    }
}

/// Maps a control state to its widget.
///
/// The match is exhaustive over [`ControlKind`]; a new kind does not compile
/// until it has a widget.
#[must_use]
pub fn build_widget(state: &ControlState) -> Widget {
    let value = &state.value;
    match &state.kind {
        ControlKind::Text(input) => Widget::TextInput {
            value: display_value(value),
            input: *input,
        },
        ControlKind::TextArea { language } => Widget::TextArea {
            value: display_value(value),
            language: state
                .extra
                .get("language")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .or_else(|| language.clone()),
        },
        ControlKind::Checkbox => Widget::Checkbox {
            checked: value.as_bool().unwrap_or(false),
        },
        ControlKind::Select(options) => Widget::Select {
            options: state.choices.clone(),
            selected: selected_values(value),
            multi: options.multi,
            free_form: options.free_form,
            clearable: options.clearable,
        },
        ControlKind::ColorPicker => Widget::ColorPicker {
            color: Rgba::from_value(value).unwrap_or_else(Rgba::black),
        },
        ControlKind::ColorScheme => Widget::ColorScheme {
            scheme: display_value(value),
            schemes: state.choices.clone(),
        },
        ControlKind::Bounds => {
            let bound = |index: usize| value.get(index).and_then(Value::as_f64);
            Widget::Bounds {
                min: bound(0),
                max: bound(1),
            }
        }
        ControlKind::Hidden => Widget::Hidden {
            value: value.clone(),
        },
        ControlKind::Datasource => Widget::DatasourcePicker {
            datasource: value.as_str().filter(|s| !s.is_empty()).map(str::to_owned),
        },
        ControlKind::VizType => Widget::VizTypePicker {
            selected: display_value(value),
        },
        ControlKind::Metrics { multi } => Widget::MetricPicker {
            selected: selected_values(value),
            available: state.choices.clone(),
            multi: *multi,
        },
        ControlKind::AdhocFilters => Widget::AdhocFilters {
            filters: value.as_array().cloned().unwrap_or_default(),
            columns: state.choices.clone(),
        },
        ControlKind::DateFilter => Widget::DateFilter {
            expression: display_value(value),
        },
        ControlKind::Button => Widget::Button {
            caption: state.label.clone(),
        },
        ControlKind::Icon => Widget::IconPicker {
            icon: display_value(value),
        },
        ControlKind::DatePicker => {
            let raw = value.as_str().unwrap_or_default().trim().to_owned();
            Widget::DatePicker {
                date: NaiveDate::parse_from_str(&raw, DATE_PICKER_FORMAT).ok(),
                raw,
            }
        }
        ControlKind::OrderSelect => Widget::OrderedSelect {
            order: selected_values(value),
            available: state.choices.clone(),
        },
        ControlKind::Composite(kind) => Widget::RuleEditor {
            kind: *kind,
            rules: value.as_array().cloned().unwrap_or_default(),
            columns: state.choices.clone(),
        },
    }
}

const DATE_PICKER_FORMAT: &str = "%Y-%m-%d";

fn selected_values(value: &ControlValue) -> Vec<ControlValue> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.clone(),
        scalar => vec![scalar.clone()],
    }
}

fn join_selected(selected: &[ControlValue], options: &[Choice]) -> String {
    if selected.is_empty() {
        return "-".to_owned();
    }
    selected
        .iter()
        .map(|value| {
            options
                .iter()
                .find(|choice| values_match(&choice.value, value))
                .map_or_else(|| display_value(value), |choice| choice.label.clone())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_picker_color() {
        let color = Rgba::from_value(&json!({"r": 0, "g": 122, "b": 135, "a": 1}));
        assert_eq!(color, Some(Rgba::rgba(0, 122, 135, 1.0)));
        assert_eq!(Rgba::rgba(0, 122, 135, 1.0).to_hex(), "#007a87");
    }

    #[test]
    fn date_picker_rejects_malformed_dates() {
        let valid = Widget::DatePicker {
            date: NaiveDate::from_ymd_opt(2017, 3, 9),
            raw: "2017-03-09".to_owned(),
        };
        assert_eq!(valid.summary(), "2017-03-09");
        assert!(valid.validate().is_ok());

        let malformed = Widget::DatePicker {
            date: None,
            raw: "09/03/2017".to_owned(),
        };
        assert!(malformed.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_channels() {
        assert_eq!(Rgba::from_value(&json!({"r": 300, "g": 0, "b": 0})), None);
        assert_eq!(Rgba::from_value(&json!("#fff")), None);
    }
}
