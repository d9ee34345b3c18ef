use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::Serialize;

use crate::error::{ChartError, ChartResult};

use super::OptionValue;

/// Ordered option mapping mirroring a Highcharts configuration object.
///
/// Keys are unique and the last write wins. Reading an absent key through
/// [`OptionTree::get`] or [`OptionTree::child`] stores an empty nested tree
/// there first, so nested options can be filled in without declaring every
/// intermediate object. `Clone` is a deep copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionTree {
    entries: IndexMap<String, OptionValue>,
}

impl OptionTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object into a tree, keeping document key order.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse options json: {e}")))?;
        match OptionValue::from(value) {
            OptionValue::Tree(tree) => Ok(tree),
            other => Err(ChartError::InvalidData(format!(
                "options json must be an object, got {}",
                other.type_name()
            ))),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Builder form of [`OptionTree::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the slot for `key`, creating an empty nested tree when absent.
    pub fn get(&mut self, key: &str) -> &mut OptionValue {
        self.entries
            .entry(key.to_owned())
            .or_insert_with(|| OptionValue::Tree(OptionTree::new()))
    }

    /// Returns the nested tree stored under `key`.
    ///
    /// Absent and unset entries become empty trees. Any other value is
    /// overwritten by an empty tree.
    pub fn child(&mut self, key: &str) -> &mut OptionTree {
        self.get(key).make_tree()
    }

    /// Looks up `key` without creating anything.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut OptionValue> {
        self.entries.get_mut(key)
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn delete(&mut self, key: &str) -> Option<OptionValue> {
        self.entries.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sets a value through a dotted path such as `xAxis.labels.format`.
    pub fn set_path(&mut self, path: &str, value: impl Into<OptionValue>) -> ChartResult<()> {
        let segments = split_path(path)?;
        let (last, parents) = segments
            .split_last()
            .ok_or_else(|| ChartError::InvalidData("option path must not be empty".to_owned()))?;
        let mut node = self;
        for segment in parents {
            node = node.child(segment);
        }
        node.set(*last, value);
        Ok(())
    }

    /// Looks up a dotted path without creating anything.
    #[must_use]
    pub fn find_path(&self, path: &str) -> Option<&OptionValue> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        segments.try_fold(self.find(first)?, |value, segment| {
            value.as_tree()?.find(segment)
        })
    }

    /// Stores any serde-serializable value under `key`.
    pub fn set_serialized<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> ChartResult<()> {
        let key = key.into();
        let json = serde_json::to_value(value)
            .map_err(|e| ChartError::serialization(key.clone(), e.to_string()))?;
        self.entries.insert(key, OptionValue::from(json));
        Ok(())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, OptionValue> {
        self.entries.iter()
    }
}

fn split_path(path: &str) -> ChartResult<Vec<&str>> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(ChartError::InvalidData(format!(
            "option path `{path}` contains an empty segment"
        )));
    }
    Ok(segments)
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for OptionTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Into<String>, V: Into<OptionValue>> Extend<(K, V)> for OptionTree {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for OptionTree {
    type Item = (String, OptionValue);
    type IntoIter = IntoIter<String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OptionTree {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
