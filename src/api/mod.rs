mod chart;
mod chart_kind;
mod extra_scripts;
mod library_config;

pub use chart::{DEFAULT_CONTAINER_ID, HighchartsChart, global_options_script};
pub use chart_kind::{ChartKind, JsEngine};
pub use extra_scripts::ExtraScripts;
pub use library_config::{DEFAULT_BASE_URL, LibraryConfig, ScriptSource};
