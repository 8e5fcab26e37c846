use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Numeric constraint of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextInputKind {
    #[default]
    Plain,
    Integer,
    Float,
}

/// Behaviour flags of a selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOptions {
    pub multi: bool,
    pub free_form: bool,
    pub clearable: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            multi: false,
            free_form: false,
            clearable: true,
        }
    }
}

impl SelectOptions {
    #[must_use]
    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    #[must_use]
    pub fn free_form(mut self) -> Self {
        self.free_form = true;
        self
    }

    #[must_use]
    pub fn not_clearable(mut self) -> Self {
        self.clearable = false;
        self
    }
}

/// Rule editors that store a list of structured entries.
///
/// Each one edits rows keyed by datasource columns (column styles, filter
/// settings, bar stacks...) and stores them as a JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompositeKind {
    ColStyle,
    ConditionStyle,
    CompareStyle,
    Navigator,
    ParentNode,
    FilterSetting,
    DefaultValue,
    DateValue,
    DefaultValueFilterTree,
    FilterCombination,
    Cascade,
    Stack,
}

impl CompositeKind {
    pub const ALL: [Self; 12] = [
        Self::ColStyle,
        Self::ConditionStyle,
        Self::CompareStyle,
        Self::Navigator,
        Self::ParentNode,
        Self::FilterSetting,
        Self::DefaultValue,
        Self::DateValue,
        Self::DefaultValueFilterTree,
        Self::FilterCombination,
        Self::Cascade,
        Self::Stack,
    ];

    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Self::ColStyle => "ColStyleControl",
            Self::ConditionStyle => "ConditionStyleControl",
            Self::CompareStyle => "CompareStyleControl",
            Self::Navigator => "NavigatorControl",
            Self::ParentNode => "ParentNodeControl",
            Self::FilterSetting => "FilterSettingControl",
            Self::DefaultValue => "DefaultValueControl",
            Self::DateValue => "DateValueControl",
            Self::DefaultValueFilterTree => "DefaultValueFilterTreeControl",
            Self::FilterCombination => "FilterCombinationControl",
            Self::Cascade => "CascadeControl",
            Self::Stack => "StackControl",
        }
    }

    #[must_use]
    pub fn from_type_name(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == tag)
    }

    /// Short name used by text outlines.
    #[must_use]
    pub fn widget_name(self) -> &'static str {
        match self {
            Self::ColStyle => "col-style",
            Self::ConditionStyle => "condition-style",
            Self::CompareStyle => "compare-style",
            Self::Navigator => "navigator",
            Self::ParentNode => "parent-node",
            Self::FilterSetting => "filter-setting",
            Self::DefaultValue => "default-value",
            Self::DateValue => "date-value",
            Self::DefaultValueFilterTree => "filter-tree-default",
            Self::FilterCombination => "filter-combination",
            Self::Cascade => "cascade",
            Self::Stack => "stack",
        }
    }
}

/// Widget family that renders a control.
///
/// The set is closed: every consumer matches on it exhaustively, so a new
/// widget family cannot be added without every render path handling it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    Text(TextInputKind),
    TextArea { language: Option<String> },
    Checkbox,
    Select(SelectOptions),
    ColorPicker,
    ColorScheme,
    Bounds,
    Hidden,
    Datasource,
    VizType,
    Metrics { multi: bool },
    AdhocFilters,
    DateFilter,
    /// Opens a style dialog; stores nothing itself.
    Button,
    Icon,
    DatePicker,
    /// Multi-select whose selection order is significant.
    OrderSelect,
    Composite(CompositeKind),
}

impl ControlKind {
    #[must_use]
    pub fn text() -> Self {
        Self::Text(TextInputKind::Plain)
    }

    #[must_use]
    pub fn integer() -> Self {
        Self::Text(TextInputKind::Integer)
    }

    #[must_use]
    pub fn float() -> Self {
        Self::Text(TextInputKind::Float)
    }

    #[must_use]
    pub fn select() -> Self {
        Self::Select(SelectOptions::default())
    }

    #[must_use]
    pub fn select_with(options: SelectOptions) -> Self {
        Self::Select(options)
    }

    #[must_use]
    pub fn text_area(language: Option<&str>) -> Self {
        Self::TextArea {
            language: language.map(str::to_owned),
        }
    }

    #[must_use]
    pub fn metrics(multi: bool) -> Self {
        Self::Metrics { multi }
    }

    /// Stable wire tag used in declarative tables and JSON snapshots.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "TextControl",
            Self::TextArea { .. } => "TextAreaControl",
            Self::Checkbox => "CheckboxControl",
            Self::Select(_) => "SelectControl",
            Self::ColorPicker => "ColorPickerControl",
            Self::ColorScheme => "ColorSchemeControl",
            Self::Bounds => "BoundsControl",
            Self::Hidden => "HiddenControl",
            Self::Datasource => "DatasourceControl",
            Self::VizType => "VizTypeControl",
            Self::Metrics { .. } => "MetricsControl",
            Self::AdhocFilters => "AdhocFilterControl",
            Self::DateFilter => "DateFilterControl",
            Self::Button => "ButtonControl",
            Self::Icon => "IconControl",
            Self::DatePicker => "DatePickerControl",
            Self::OrderSelect => "OrderSelectControl",
            Self::Composite(kind) => kind.type_name(),
        }
    }

    /// Builds a kind from its wire tag and the flags that accompany it in
    /// declarative tables.
    pub fn from_type_name(tag: &str, flags: KindFlags) -> ControlResult<Self> {
        let kind = match tag {
            "TextControl" => {
                if flags.is_int {
                    Self::integer()
                } else if flags.is_float {
                    Self::float()
                } else {
                    Self::text()
                }
            }
            "TextAreaControl" => Self::TextArea {
                language: flags.language,
            },
            "CheckboxControl" => Self::Checkbox,
            "SelectControl" => Self::Select(SelectOptions {
                multi: flags.multi,
                free_form: flags.free_form,
                clearable: flags.clearable.unwrap_or(true),
            }),
            "ColorPickerControl" => Self::ColorPicker,
            "ColorSchemeControl" => Self::ColorScheme,
            "BoundsControl" => Self::Bounds,
            "HiddenControl" => Self::Hidden,
            "DatasourceControl" => Self::Datasource,
            "VizTypeControl" => Self::VizType,
            "MetricsControl" => Self::Metrics { multi: flags.multi },
            "AdhocFilterControl" => Self::AdhocFilters,
            "DateFilterControl" => Self::DateFilter,
            "ButtonControl" => Self::Button,
            "IconControl" => Self::Icon,
            "DatePickerControl" => Self::DatePicker,
            "OrderSelectControl" => Self::OrderSelect,
            other => match CompositeKind::from_type_name(other) {
                Some(composite) => Self::Composite(composite),
                None => return Err(ControlError::UnknownControlKind(other.to_owned())),
            },
        };
        Ok(kind)
    }

    /// Whether the control stores a list of values.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        match self {
            Self::Select(options) => options.multi,
            Self::Metrics { multi } => *multi,
            Self::AdhocFilters | Self::Bounds | Self::OrderSelect | Self::Composite(_) => true,
            Self::Text(_)
            | Self::TextArea { .. }
            | Self::Checkbox
            | Self::ColorPicker
            | Self::ColorScheme
            | Self::Hidden
            | Self::Datasource
            | Self::VizType
            | Self::DateFilter
            | Self::Button
            | Self::Icon
            | Self::DatePicker => false,
        }
    }

    /// Whether values must come from the control's choices.
    #[must_use]
    pub fn restricts_to_choices(&self) -> bool {
        match self {
            Self::Select(options) => !options.free_form,
            Self::ColorScheme => true,
            Self::Text(_)
            | Self::TextArea { .. }
            | Self::Checkbox
            | Self::ColorPicker
            | Self::Bounds
            | Self::Hidden
            | Self::Datasource
            | Self::VizType
            | Self::Metrics { .. }
            | Self::AdhocFilters
            | Self::DateFilter
            | Self::Button
            | Self::Icon
            | Self::DatePicker
            | Self::OrderSelect
            | Self::Composite(_) => false,
        }
    }
}

/// Flags read alongside a `type` tag in declarative control tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindFlags {
    pub multi: bool,
    pub free_form: bool,
    pub clearable: Option<bool>,
    pub is_int: bool,
    pub is_float: bool,
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{CompositeKind, ControlKind, KindFlags, SelectOptions};
    use crate::error::ControlError;

    #[test]
    fn type_names_round_trip_through_flags() {
        let flags = KindFlags {
            multi: true,
            free_form: true,
            ..KindFlags::default()
        };
        let kind = ControlKind::from_type_name("SelectControl", flags).expect("select tag");
        assert_eq!(
            kind,
            ControlKind::Select(SelectOptions::default().multi().free_form())
        );
        assert_eq!(kind.type_name(), "SelectControl");
    }

    #[test]
    fn bespoke_widget_tags_are_recognized() {
        for composite in CompositeKind::ALL {
            let kind = ControlKind::from_type_name(composite.type_name(), KindFlags::default())
                .expect("composite tag");
            assert_eq!(kind, ControlKind::Composite(composite));
            assert!(kind.is_multi());
        }
        for (tag, expected) in [
            ("ButtonControl", ControlKind::Button),
            ("IconControl", ControlKind::Icon),
            ("DatePickerControl", ControlKind::DatePicker),
            ("OrderSelectControl", ControlKind::OrderSelect),
        ] {
            let kind = ControlKind::from_type_name(tag, KindFlags::default()).expect("known tag");
            assert_eq!(kind, expected);
            assert_eq!(kind.type_name(), tag);
        }
    }

    #[test]
    fn misspelled_tag_is_rejected() {
        let err = ControlKind::from_type_name("SelectControll", KindFlags::default())
            .expect_err("unknown tag");
        assert!(matches!(err, ControlError::UnknownControlKind(tag) if tag == "SelectControll"));
    }
}
