mod control_state;
mod control_table;
mod integrity;
mod json_contract;
mod json_table;
mod registry_config;
mod resolved;
mod session;
mod vis_registry;

pub use control_state::{ControlState, ControlValidationError, VIZ_TYPE_KEY};
pub use control_table::ControlTable;
pub use integrity::{
    DanglingReference, DefaultIssue, ReferenceSite, RepeatedReference, check_default,
    find_dangling_references, find_default_issues, find_repeated_references,
};
pub use json_contract::{
    CHART_REQUEST_JSON_SCHEMA_V1, ChartRequest, ChartRequestJsonContractV1, ControlSnapshot,
    PANEL_SNAPSHOT_JSON_SCHEMA_V1, PanelSnapshot, PanelSnapshotJsonContractV1, SectionSnapshot,
};
pub use registry_config::RegistryConfig;
pub use resolved::{ResolvedControl, ResolvedPanel, ResolvedRegistry, ResolvedRow, ResolvedSection};
pub use session::{DATASOURCE_KEY, ExploreSession};
pub use vis_registry::VisTypeRegistry;
