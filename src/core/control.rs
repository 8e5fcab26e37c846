use std::fmt;

use serde_json::Value;

use crate::error::{ControlError, ControlResult};

use super::kind::ControlKind;
use super::state::{ChartContext, ControlProps, UiState};
use super::value::{Choice, ControlValue, is_empty_value};

/// Pure function computing an initial value from the chart context.
pub type ComputedDefault = fn(&ChartContext<'_>) -> ControlValue;

/// Pure function deriving extra props from the editor state.
pub type MapStateToProps = fn(&UiState) -> ControlProps;

/// Pure predicate deciding whether a control is shown.
pub type VisibilityFn = fn(&UiState) -> bool;

/// Initial value of a control.
#[derive(Clone, Default)]
pub enum DefaultValue {
    #[default]
    None,
    Literal(ControlValue),
    Computed(ComputedDefault),
}

impl DefaultValue {
    #[must_use]
    pub fn evaluate(&self, context: &ChartContext<'_>) -> ControlValue {
        match self {
            Self::None => Value::Null,
            Self::Literal(value) => value.clone(),
            Self::Computed(compute) => compute(context),
        }
    }

    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(fn)"),
        }
    }
}

/// Predicate that marks a control value invalid.
///
/// `check` returns an untranslated message key; callers translate it.
#[derive(Clone, Copy)]
pub enum Validator {
    NonEmpty,
    Integer,
    Numeric,
    Custom {
        name: &'static str,
        check: fn(&ControlValue) -> bool,
        message: &'static str,
    },
}

impl Validator {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NonEmpty => "nonEmpty",
            Self::Integer => "integer",
            Self::Numeric => "numeric",
            Self::Custom { name, .. } => *name,
        }
    }

    pub fn from_name(name: &str) -> ControlResult<Self> {
        match name {
            "nonEmpty" => Ok(Self::NonEmpty),
            "integer" => Ok(Self::Integer),
            "numeric" => Ok(Self::Numeric),
            other => Err(ControlError::UnknownValidator(other.to_owned())),
        }
    }

    /// Returns the message key when `value` fails this validator.
    #[must_use]
    pub fn check(&self, value: &ControlValue) -> Option<&'static str> {
        match self {
            Self::NonEmpty => is_empty_value(value).then_some("cannot be empty"),
            // Empty values pass the numeric validators; pair them with
            // `NonEmpty` to require a value.
            Self::Integer => (!is_empty_value(value) && !is_integer(value))
                .then_some("is expected to be an integer"),
            Self::Numeric => (!is_empty_value(value) && !is_numeric(value))
                .then_some("is expected to be a number"),
            Self::Custom { check, message, .. } => (!check(value)).then_some(*message),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_integer(value: &ControlValue) -> bool {
    match value {
        Value::Number(number) => {
            number.is_i64() || number.is_u64() || number.as_f64().is_some_and(|v| v.fract() == 0.0)
        }
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .is_ok_and(|v| v.is_finite() && v.fract() == 0.0),
        _ => false,
    }
}

fn is_numeric(value: &ControlValue) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(text) => text.trim().parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}

/// Declaration of one configurable chart property.
#[derive(Clone)]
pub struct ControlDescriptor {
    pub kind: ControlKind,
    pub label: String,
    pub description: Option<String>,
    pub default: DefaultValue,
    pub choices: Option<Vec<Choice>>,
    pub validators: Vec<Validator>,
    pub map_state_to_props: Option<MapStateToProps>,
    pub render_trigger: bool,
    pub visibility: Option<VisibilityFn>,
}

impl ControlDescriptor {
    #[must_use]
    pub fn new(kind: ControlKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            description: None,
            default: DefaultValue::None,
            choices: None,
            validators: Vec::new(),
            map_state_to_props: None,
            render_trigger: false,
            visibility: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<ControlValue>) -> Self {
        self.default = DefaultValue::Literal(value.into());
        self
    }

    #[must_use]
    pub fn with_computed_default(mut self, compute: ComputedDefault) -> Self {
        self.default = DefaultValue::Computed(compute);
        self
    }

    #[must_use]
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    #[must_use]
    pub fn with_map_state_to_props(mut self, map: MapStateToProps) -> Self {
        self.map_state_to_props = Some(map);
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: VisibilityFn) -> Self {
        self.visibility = Some(visibility);
        self
    }

    #[must_use]
    pub fn render_trigger(mut self) -> Self {
        self.render_trigger = true;
        self
    }

    #[must_use]
    pub fn default_value(&self, context: &ChartContext<'_>) -> ControlValue {
        self.default.evaluate(context)
    }

    /// Runs every validator, returning untranslated message keys.
    #[must_use]
    pub fn validate(&self, value: &ControlValue) -> Vec<&'static str> {
        self.validators
            .iter()
            .filter_map(|validator| validator.check(value))
            .collect()
    }

    #[must_use]
    pub fn props(&self, state: &UiState) -> ControlProps {
        self.map_state_to_props
            .map(|map| map(state))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_visible(&self, state: &UiState) -> bool {
        self.visibility.is_none_or(|visible| visible(state))
    }
}

impl fmt::Debug for ControlDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlDescriptor")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("description", &self.description)
            .field("default", &self.default)
            .field("choices", &self.choices)
            .field("validators", &self.validators)
            .field("map_state_to_props", &self.map_state_to_props.map(|_| "fn"))
            .field("render_trigger", &self.render_trigger)
            .field("visibility", &self.visibility.map(|_| "fn"))
            .finish()
    }
}

/// Per-visualization partial descriptor.
///
/// Merging is shallow: every `Some` field replaces the base field, `None`
/// falls through to the base descriptor.
#[derive(Clone, Default)]
pub struct ControlOverride {
    pub kind: Option<ControlKind>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub default: Option<DefaultValue>,
    pub choices: Option<Vec<Choice>>,
    pub validators: Option<Vec<Validator>>,
    pub map_state_to_props: Option<MapStateToProps>,
    pub render_trigger: Option<bool>,
    pub visibility: Option<VisibilityFn>,
}

impl ControlOverride {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: ControlKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<ControlValue>) -> Self {
        self.default = Some(DefaultValue::Literal(value.into()));
        self
    }

    #[must_use]
    pub fn computed_default(mut self, compute: ComputedDefault) -> Self {
        self.default = Some(DefaultValue::Computed(compute));
        self
    }

    #[must_use]
    pub fn choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }

    #[must_use]
    pub fn validators(mut self, validators: Vec<Validator>) -> Self {
        self.validators = Some(validators);
        self
    }

    #[must_use]
    pub fn map_state_to_props(mut self, map: MapStateToProps) -> Self {
        self.map_state_to_props = Some(map);
        self
    }

    #[must_use]
    pub fn render_trigger(mut self, render_trigger: bool) -> Self {
        self.render_trigger = Some(render_trigger);
        self
    }

    #[must_use]
    pub fn visibility(mut self, visibility: VisibilityFn) -> Self {
        self.visibility = Some(visibility);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.label.is_none()
            && self.description.is_none()
            && self.default.is_none()
            && self.choices.is_none()
            && self.validators.is_none()
            && self.map_state_to_props.is_none()
            && self.render_trigger.is_none()
            && self.visibility.is_none()
    }

    #[must_use]
    pub fn apply_to(&self, base: &ControlDescriptor) -> ControlDescriptor {
        ControlDescriptor {
            kind: self.kind.clone().unwrap_or_else(|| base.kind.clone()),
            label: self.label.clone().unwrap_or_else(|| base.label.clone()),
            description: self
                .description
                .clone()
                .or_else(|| base.description.clone()),
            default: self.default.clone().unwrap_or_else(|| base.default.clone()),
            choices: self.choices.clone().or_else(|| base.choices.clone()),
            validators: self
                .validators
                .clone()
                .unwrap_or_else(|| base.validators.clone()),
            map_state_to_props: self.map_state_to_props.or(base.map_state_to_props),
            render_trigger: self.render_trigger.unwrap_or(base.render_trigger),
            visibility: self.visibility.or(base.visibility),
        }
    }
}

impl fmt::Debug for ControlOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlOverride")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("description", &self.description)
            .field("default", &self.default)
            .field("choices", &self.choices)
            .field("validators", &self.validators)
            .field("map_state_to_props", &self.map_state_to_props.map(|_| "fn"))
            .field("render_trigger", &self.render_trigger)
            .field("visibility", &self.visibility.map(|_| "fn"))
            .finish()
    }
}
