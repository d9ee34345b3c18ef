use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

use super::ScriptSource;

/// Additional script files (modules, themes, exporting) loaded after the
/// chart bundle.
///
/// Registration order decides emission order. Re-registering a key replaces
/// its source but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraScripts {
    registered: IndexMap<String, ScriptSource>,
    included: IndexSet<String>,
}

impl ExtraScripts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        key: impl Into<String>,
        path: impl Into<String>,
        filename: impl Into<String>,
    ) {
        self.registered
            .insert(key.into(), ScriptSource::new(path, filename));
    }

    /// Replaces the set of included keys.
    ///
    /// An empty `keys` includes every key registered so far. Keys are not
    /// checked here; unknown ones fail in [`ExtraScripts::resolve_urls`].
    pub fn include<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let requested: IndexSet<String> = keys.into_iter().map(Into::into).collect();
        self.included = if requested.is_empty() {
            self.registered.keys().cloned().collect()
        } else {
            requested
        };
    }

    #[must_use]
    pub fn is_registered(&self, key: &str) -> bool {
        self.registered.contains_key(key)
    }

    #[must_use]
    pub fn is_included(&self, key: &str) -> bool {
        self.included.contains(key)
    }

    #[must_use]
    pub fn source(&self, key: &str) -> Option<&ScriptSource> {
        self.registered.get(key)
    }

    /// URLs of the included scripts, in registration order.
    pub fn resolve_urls(&self) -> ChartResult<Vec<String>> {
        if let Some(missing) = self
            .included
            .iter()
            .find(|key| !self.registered.contains_key(key.as_str()))
        {
            warn!(key = %missing, "extra script included but never registered");
            return Err(ChartError::UnknownScriptKey {
                key: missing.clone(),
            });
        }

        Ok(self
            .registered
            .iter()
            .filter(|(key, _)| self.included.contains(key.as_str()))
            .map(|(_, source)| source.url())
            .collect())
    }
}
