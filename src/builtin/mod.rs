//! Standard controls and chart types of the chart editor.

mod controls;
mod extension_controls;
mod extension_visualizations;
mod sections;
mod state_props;
mod visualizations;

pub use controls::{
    ROW_LIMIT_OPTIONS, SERIES_LIMITS, control_table, d3_format_options, d3_time_format_options,
};
pub use state_props::main_metric;
pub use visualizations::vis_registry;

use crate::api::{RegistryConfig, ResolvedRegistry};
use crate::error::ControlResult;

/// Built-in table and registry, checked and merged.
pub fn resolved_registry(config: &RegistryConfig) -> ControlResult<ResolvedRegistry> {
    ResolvedRegistry::build(&control_table()?, &vis_registry()?, config)
}
