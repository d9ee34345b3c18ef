use tracing::{debug, trace};

use crate::core::{OptionTree, OptionValue};
use crate::error::ChartResult;
use crate::render::{HostPage, OptionRenderer};

use super::{ChartKind, ExtraScripts, JsEngine, LibraryConfig};

pub const DEFAULT_CONTAINER_ID: &str = "containerChart";

const SCRIPT_OPEN_TAG: &str = r#"<script type="text/javascript">"#;
const SCRIPT_CLOSE_TAG: &str = "</script>";

/// One Highcharts chart assembled during a page render.
///
/// Holds the chart options, the product/engine selection and the extra
/// scripts, and turns them into script URLs and the `new Highcharts.*(...)`
/// call. `Clone` deep-copies the options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighchartsChart {
    kind: ChartKind,
    engine: JsEngine,
    options: OptionTree,
    extra_scripts: ExtraScripts,
    library: LibraryConfig,
}

impl HighchartsChart {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_engine(mut self, engine: JsEngine) -> Self {
        self.engine = engine;
        self
    }

    #[must_use]
    pub fn with_library_config(mut self, library: LibraryConfig) -> Self {
        self.library = library;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: OptionTree) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn engine(&self) -> JsEngine {
        self.engine
    }

    #[must_use]
    pub fn library_config(&self) -> &LibraryConfig {
        &self.library
    }

    #[must_use]
    pub fn options(&self) -> &OptionTree {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionTree {
        &mut self.options
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.options.set(key, value);
        self
    }

    /// Option slot for `key`; absent keys become empty nested trees.
    pub fn get(&mut self, key: &str) -> &mut OptionValue {
        self.options.get(key)
    }

    pub fn child(&mut self, key: &str) -> &mut OptionTree {
        self.options.child(key)
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.options.has(key)
    }

    pub fn delete(&mut self, key: &str) -> Option<OptionValue> {
        self.options.delete(key)
    }

    pub fn add_extra_script(
        &mut self,
        key: impl Into<String>,
        path: impl Into<String>,
        filename: impl Into<String>,
    ) {
        self.extra_scripts.register(key, path, filename);
    }

    /// Selects the extra scripts to load; an empty list selects all of them.
    pub fn include_extra_scripts<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.extra_scripts.include(keys);
    }

    #[must_use]
    pub fn extra_scripts(&self) -> &ExtraScripts {
        &self.extra_scripts
    }

    /// Script URLs to load, in order: engine helpers, the chart bundle, then
    /// included extra scripts.
    pub fn resolve_script_urls(&self) -> ChartResult<Vec<String>> {
        let mut urls: Vec<String> = self
            .engine
            .helper_scripts()
            .iter()
            .map(|source| source.url())
            .collect();
        urls.push(self.kind.library_script(&self.library).url());
        urls.extend(self.extra_scripts.resolve_urls()?);
        trace!(kind = ?self.kind, count = urls.len(), "resolved chart scripts");
        Ok(urls)
    }

    /// `<script>` tags for [`HighchartsChart::resolve_script_urls`], one per line.
    pub fn script_tags(&self) -> ChartResult<String> {
        let tags: Vec<String> = self
            .resolve_script_urls()?
            .iter()
            .map(|url| {
                format!(
                    r#"<script type="text/javascript" src="{}"></script>"#,
                    escape_attribute(url)
                )
            })
            .collect();
        Ok(tags.join("\n"))
    }

    pub fn render_options(&self) -> ChartResult<String> {
        OptionRenderer::render(&self.options)
    }

    /// Builds `new Highcharts.<Ctor>(<options>[, <callback>]);`.
    pub fn instantiation_script(
        &self,
        callback: Option<&str>,
        with_script_tag: bool,
    ) -> ChartResult<String> {
        let script = self.constructor_call(callback)?;
        Ok(if with_script_tag {
            wrap_in_script_tag(&script)
        } else {
            script
        })
    }

    fn constructor_call(&self, callback: Option<&str>) -> ChartResult<String> {
        let mut script = format!("new Highcharts.{}(", self.kind.constructor());
        script.push_str(&self.render_options()?);
        if let Some(callback) = callback {
            script.push_str(", ");
            script.push_str(callback);
        }
        script.push_str(");");
        Ok(script)
    }

    /// Places the chart on `page` and returns the instantiation snippet.
    ///
    /// Scripts and options are resolved before the page is touched, so a
    /// failing chart leaves the page as it was. The page always receives the
    /// bare constructor call; `with_script_tag` only wraps the return value.
    pub fn render<P: HostPage + ?Sized>(
        &self,
        page: &mut P,
        container_id: Option<&str>,
        callback: Option<&str>,
        with_script_tag: bool,
    ) -> ChartResult<String> {
        let urls = self.resolve_script_urls()?;
        let script = self.constructor_call(callback)?;
        let container_id = container_id.unwrap_or(DEFAULT_CONTAINER_ID);

        for url in &urls {
            page.import_script(url)?;
        }
        page.attach_container(container_id)?;
        page.schedule_on_load(&script)?;

        debug!(
            kind = ?self.kind,
            container = container_id,
            scripts = urls.len(),
            "chart attached to page"
        );
        Ok(if with_script_tag {
            wrap_in_script_tag(&script)
        } else {
            script
        })
    }
}

fn wrap_in_script_tag(script: &str) -> String {
    format!("{SCRIPT_OPEN_TAG}{script}{SCRIPT_CLOSE_TAG}")
}

/// Escapes text for a double-quoted HTML attribute.
fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Builds the `Highcharts.setOptions(...)` call for library-wide defaults
/// such as `lang` and `global`.
pub fn global_options_script(options: &OptionTree) -> ChartResult<String> {
    Ok(format!(
        "Highcharts.setOptions({});",
        OptionRenderer::render(options)?
    ))
}
