pub mod control;
pub mod kind;
pub mod state;
pub mod value;
pub mod visualization;

pub use control::{
    ComputedDefault, ControlDescriptor, ControlOverride, DefaultValue, MapStateToProps,
    Validator, VisibilityFn,
};
pub use kind::{CompositeKind, ControlKind, KindFlags, SelectOptions, TextInputKind};
pub use state::{ChartContext, ColumnMeta, ControlProps, DatasourceMeta, MetricMeta, UiState};
pub use value::{
    Choice, ControlId, ControlValue, FormData, choices_from_pairs, choices_from_values,
    display_value, is_empty_value, values_match,
};
pub use visualization::{ControlPanelSection, ControlSetRow, VisualizationTypeEntry, row};
