use serde::{Deserialize, Serialize};

use super::{LibraryConfig, ScriptSource};

/// Highcharts product whose constructor instantiates the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Chart,
    StockChart,
    MapChart,
}

impl ChartKind {
    /// Name of the `Highcharts.*` constructor.
    #[must_use]
    pub fn constructor(self) -> &'static str {
        match self {
            Self::Chart => "Chart",
            Self::StockChart => "StockChart",
            Self::MapChart => "Map",
        }
    }

    #[must_use]
    pub fn library_script(self, config: &LibraryConfig) -> &ScriptSource {
        match self {
            Self::Chart => &config.highcharts,
            Self::StockChart => &config.highstock,
            Self::MapChart => &config.highmaps,
        }
    }
}

/// DOM helper library the chart runs on.
///
/// Highcharts has shipped standalone since v4, so the jQuery, MooTools and
/// Prototype adapters are no longer offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsEngine {
    #[default]
    Standalone,
}

impl JsEngine {
    /// Scripts that must load before the chart bundle.
    #[must_use]
    pub fn helper_scripts(self) -> Vec<ScriptSource> {
        match self {
            Self::Standalone => Vec::new(),
        }
    }
}
