use indexmap::IndexSet;

use crate::error::ChartResult;

/// Page capabilities a chart needs from the host web framework.
///
/// Implementations wrap whatever the host uses to assemble a response: an
/// asset pipeline for script imports, an element tree for the container and
/// an on-load hook for inline scripts.
pub trait HostPage {
    /// Ensures `url` is loaded once before scheduled scripts run.
    fn import_script(&mut self, url: &str) -> ChartResult<()>;

    /// Adds the element the chart draws into.
    fn attach_container(&mut self, element_id: &str) -> ChartResult<()>;

    /// Queues `script` to run when the page has loaded.
    fn schedule_on_load(&mut self, script: &str) -> ChartResult<()>;
}

/// In-memory page used for headless rendering and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingPage {
    pub scripts: IndexSet<String>,
    pub containers: Vec<String>,
    pub on_load: Vec<String>,
}

impl RecordingPage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.containers.is_empty() && self.on_load.is_empty()
    }
}

impl HostPage for RecordingPage {
    fn import_script(&mut self, url: &str) -> ChartResult<()> {
        self.scripts.insert(url.to_owned());
        Ok(())
    }

    fn attach_container(&mut self, element_id: &str) -> ChartResult<()> {
        self.containers.push(element_id.to_owned());
        Ok(())
    }

    fn schedule_on_load(&mut self, script: &str) -> ChartResult<()> {
        self.on_load.push(script.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_imports_are_deduplicated() {
        let mut page = RecordingPage::default();
        assert!(page.is_empty());
        page.import_script("a.js").expect("import");
        page.import_script("b.js").expect("import");
        page.import_script("a.js").expect("import");
        assert_eq!(page.scripts.iter().collect::<Vec<_>>(), vec!["a.js", "b.js"]);
    }
}
