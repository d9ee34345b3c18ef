use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_BASE_URL: &str = "https://code.highcharts.com/";

/// Location of one script file, split the way asset folders usually are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptSource {
    pub path: String,
    #[serde(alias = "name")]
    pub filename: String,
}

impl ScriptSource {
    #[must_use]
    pub fn new(path: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filename: filename.into(),
        }
    }

    /// Path and filename joined verbatim.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.path, self.filename)
    }
}

/// Where the Highcharts bundles are served from.
///
/// Serializable so hosts can keep it next to their asset configuration.
/// Missing fields fall back to the public Highcharts CDN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub highcharts: ScriptSource,
    pub highstock: ScriptSource,
    pub highmaps: ScriptSource,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl LibraryConfig {
    /// Points every bundle at `base_url`, using the CDN folder layout.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let base = if base_url.is_empty() || base_url.ends_with('/') {
            base_url.to_owned()
        } else {
            format!("{base_url}/")
        };
        Self {
            highcharts: ScriptSource::new(base.clone(), "highcharts.js"),
            highstock: ScriptSource::new(format!("{base}stock/"), "highstock.js"),
            highmaps: ScriptSource::new(format!("{base}maps/"), "highmaps.js"),
        }
    }

    #[must_use]
    pub fn with_highcharts(mut self, source: ScriptSource) -> Self {
        self.highcharts = source;
        self
    }

    #[must_use]
    pub fn with_highstock(mut self, source: ScriptSource) -> Self {
        self.highstock = source;
        self
    }

    #[must_use]
    pub fn with_highmaps(mut self, source: ScriptSource) -> Self {
        self.highmaps = source;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse library config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize library config: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_cdn() {
        let config = LibraryConfig::default();
        assert_eq!(config.highcharts.url(), "https://code.highcharts.com/highcharts.js");
        assert_eq!(
            config.highstock.url(),
            "https://code.highcharts.com/stock/highstock.js"
        );
        assert_eq!(config.highmaps.url(), "https://code.highcharts.com/maps/highmaps.js");
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = LibraryConfig::with_base_url("/assets/highcharts");
        assert_eq!(config.highcharts.url(), "/assets/highcharts/highcharts.js");
        assert_eq!(config.highstock.url(), "/assets/highcharts/stock/highstock.js");
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = LibraryConfig::from_json_str(
            r#"{"highcharts":{"path":"lib/highcharts/","name":"highcharts.js"}}"#,
        )
        .expect("partial config");
        assert_eq!(config.highcharts.url(), "lib/highcharts/highcharts.js");
        assert_eq!(config.highstock, LibraryConfig::default().highstock);

        let json = config.to_json_pretty().expect("serialize");
        assert_eq!(LibraryConfig::from_json_str(&json).expect("reparse"), config);
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        assert!(matches!(
            LibraryConfig::from_json_str("{\"highcharts\": 3}"),
            Err(ChartError::InvalidData(_))
        ));
    }
}
