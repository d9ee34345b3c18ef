//! highcharts-rs: server-side builder for Highcharts.js charts.
//!
//! Web handlers fill an option tree, pick the Highcharts product and extra
//! modules, and get back the script URLs and the `new Highcharts.*(...)` call
//! to embed in the response. Raw JavaScript (formatters, callbacks) can be
//! placed anywhere in the options and is emitted unquoted.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartKind, HighchartsChart, JsEngine, LibraryConfig, global_options_script};
pub use crate::core::{OptionTree, OptionValue, RawExpression};
pub use error::{ChartError, ChartResult};
pub use render::{HostPage, OptionRenderer, RecordingPage};
