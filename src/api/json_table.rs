use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::core::{
    Choice, ControlDescriptor, ControlKind, ControlOverride, ControlPanelSection, ControlValue,
    DefaultValue, KindFlags, Validator, VisualizationTypeEntry,
};
use crate::error::{ControlError, ControlResult};

use super::{ControlTable, VisTypeRegistry};

/// Choice as written in declarative files: `[value, label]`, an object, or a
/// bare value used as its own label.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChoiceDecl {
    Pair(ControlValue, String),
    Object(Choice),
    Bare(ControlValue),
}

impl From<ChoiceDecl> for Choice {
    fn from(decl: ChoiceDecl) -> Self {
        match decl {
            ChoiceDecl::Pair(value, label) => Choice::new(value, label),
            ChoiceDecl::Object(choice) => choice,
            ChoiceDecl::Bare(value) => Choice::same(value),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ControlDecl {
    #[serde(rename = "type")]
    type_name: String,
    label: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    default: Option<ControlValue>,
    #[serde(default)]
    choices: Option<Vec<ChoiceDecl>>,
    #[serde(default)]
    validators: Vec<String>,
    #[serde(default)]
    multi: bool,
    #[serde(default)]
    free_form: bool,
    #[serde(default)]
    clearable: Option<bool>,
    #[serde(default)]
    is_int: bool,
    #[serde(default)]
    is_float: bool,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    render_trigger: bool,
}

impl ControlDecl {
    fn into_descriptor(self) -> ControlResult<ControlDescriptor> {
        let kind = ControlKind::from_type_name(
            &self.type_name,
            KindFlags {
                multi: self.multi,
                free_form: self.free_form,
                clearable: self.clearable,
                is_int: self.is_int,
                is_float: self.is_float,
                language: self.language,
            },
        )?;
        let mut descriptor = ControlDescriptor::new(kind, self.label);
        descriptor.description = self.description;
        if let Some(default) = self.default {
            descriptor.default = DefaultValue::Literal(default);
        }
        descriptor.choices = self
            .choices
            .map(|choices| choices.into_iter().map(Choice::from).collect());
        descriptor.validators = parse_validators(&self.validators)?;
        descriptor.render_trigger = self.render_trigger;
        Ok(descriptor)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionDecl {
    label: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    expanded: bool,
    #[serde(default)]
    control_set_rows: Vec<Vec<Option<String>>>,
}

/// Override limited to declarative fields. An explicit `"default": null`
/// clears the base default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverrideDecl {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "present_value")]
    default: Option<ControlValue>,
    #[serde(default)]
    choices: Option<Vec<ChoiceDecl>>,
    #[serde(default)]
    validators: Option<Vec<String>>,
    #[serde(default)]
    render_trigger: Option<bool>,
}

impl OverrideDecl {
    fn into_override(self) -> ControlResult<ControlOverride> {
        Ok(ControlOverride {
            label: self.label,
            description: self.description,
            default: self.default.map(|value| {
                if value.is_null() {
                    DefaultValue::None
                } else {
                    DefaultValue::Literal(value)
                }
            }),
            choices: self
                .choices
                .map(|choices| choices.into_iter().map(Choice::from).collect()),
            validators: self
                .validators
                .as_deref()
                .map(parse_validators)
                .transpose()?,
            render_trigger: self.render_trigger,
            ..ControlOverride::default()
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisTypeDecl {
    label: String,
    #[serde(default)]
    control_panel_sections: Vec<SectionDecl>,
    #[serde(default)]
    control_overrides: IndexMap<String, OverrideDecl>,
}

impl VisTypeDecl {
    fn into_entry(self) -> ControlResult<VisualizationTypeEntry> {
        let mut entry = VisualizationTypeEntry::new(self.label);
        for section in self.control_panel_sections {
            let mut panel_section = ControlPanelSection::new(section.label, section.expanded)
                .with_rows(section.control_set_rows);
            panel_section.description = section.description;
            entry = entry.with_section(panel_section);
        }
        for (control_id, decl) in self.control_overrides {
            entry = entry.with_override(&control_id, decl.into_override()?);
        }
        Ok(entry)
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)` so it differs from an
/// absent field.
fn present_value<'de, D>(deserializer: D) -> Result<Option<ControlValue>, D::Error>
where
    D: Deserializer<'de>,
{
    ControlValue::deserialize(deserializer).map(Some)
}

fn parse_validators(names: &[String]) -> ControlResult<Vec<Validator>> {
    names.iter().map(|name| Validator::from_name(name)).collect()
}

impl ControlTable {
    /// Loads `{"<id>": {"type": "SelectControl", "label": ..., ...}, ...}`.
    ///
    /// Computed defaults and state mappings cannot be expressed in JSON and
    /// stay with the built-in table.
    pub fn from_json_str(input: &str) -> ControlResult<Self> {
        let decls: IndexMap<String, ControlDecl> = serde_json::from_str(input).map_err(|e| {
            ControlError::InvalidData(format!("failed to parse control table json: {e}"))
        })?;
        let mut table = Self::new();
        for (id, decl) in decls {
            table.insert(&id, decl.into_descriptor()?)?;
        }
        debug!(controls = table.len(), "loaded control table json");
        Ok(table)
    }
}

impl VisTypeRegistry {
    /// Loads `{"<vis_type>": {"label": ..., "controlPanelSections": [...],
    /// "controlOverrides": {...}}, ...}`.
    pub fn from_json_str(input: &str) -> ControlResult<Self> {
        let decls: IndexMap<String, VisTypeDecl> = serde_json::from_str(input).map_err(|e| {
            ControlError::InvalidData(format!("failed to parse visualization registry json: {e}"))
        })?;
        let mut registry = Self::new();
        for (id, decl) in decls {
            registry.insert(&id, decl.into_entry()?)?;
        }
        debug!(vis_types = registry.len(), "loaded visualization registry json");
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::SelectOptions;

    #[test]
    fn parses_select_control_with_pair_choices() {
        let table = ControlTable::from_json_str(
            r#"{
                "row_limit": {
                    "type": "SelectControl",
                    "label": "Row limit",
                    "freeForm": true,
                    "default": 50,
                    "choices": [[10, "10"], 50, {"value": 100, "label": "hundred"}],
                    "validators": ["integer"]
                }
            }"#,
        )
        .expect("table parses");
        let row_limit = table.get("row_limit").expect("row_limit present");
        assert_eq!(
            row_limit.kind,
            ControlKind::Select(SelectOptions::default().free_form())
        );
        let choices = row_limit.choices.as_ref().expect("choices");
        assert_eq!(choices[0], Choice::new(10, "10"));
        assert_eq!(choices[1], Choice::new(50, "50"));
        assert_eq!(choices[2].label, "hundred");
        assert_eq!(row_limit.validators.len(), 1);
        assert!(matches!(row_limit.default, DefaultValue::Literal(ref v) if *v == json!(50)));
    }

    #[test]
    fn rejects_unknown_type_and_validator() {
        let err = ControlTable::from_json_str(r#"{"x": {"type": "SliderControl", "label": "X"}}"#)
            .expect_err("unknown kind");
        assert!(matches!(err, ControlError::UnknownControlKind(tag) if tag == "SliderControl"));

        let err = ControlTable::from_json_str(
            r#"{"x": {"type": "TextControl", "label": "X", "validators": ["positive"]}}"#,
        )
        .expect_err("unknown validator");
        assert!(matches!(err, ControlError::UnknownValidator(name) if name == "positive"));
    }

    #[test]
    fn explicit_null_override_clears_default() {
        let registry = VisTypeRegistry::from_json_str(
            r#"{
                "table": {
                    "label": "Table",
                    "controlPanelSections": [
                        {"label": "Query", "expanded": true, "controlSetRows": [["groupby", null]]}
                    ],
                    "controlOverrides": {"time_grain_sqla": {"default": null}, "groupby": {"label": "Group"}}
                }
            }"#,
        )
        .expect("registry parses");
        let entry = registry.get("table").expect("table entry");
        assert_eq!(entry.sections[0].rows[0], vec![Some("groupby".to_owned()), None]);
        let grain = &entry.control_overrides["time_grain_sqla"];
        assert!(matches!(grain.default, Some(DefaultValue::None)));
        assert!(entry.control_overrides["groupby"].default.is_none());
    }
}
