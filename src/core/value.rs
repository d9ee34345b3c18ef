use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Number;

use crate::error::{ChartError, ChartResult};

use super::{OptionTree, RawExpression};

/// One slot of a Highcharts configuration object.
///
/// Integers are kept as exact JSON numbers. Floats stay as `f64` so values
/// JavaScript cannot represent (NaN, infinities) are caught when rendering
/// instead of being silently turned into `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OptionValue {
    #[default]
    Unset,
    Null,
    Bool(bool),
    Number(Number),
    Float(f64),
    String(String),
    Array(Vec<OptionValue>),
    Tree(OptionTree),
    Raw(RawExpression),
}

impl OptionValue {
    #[must_use]
    pub fn raw(expression: impl Into<String>) -> Self {
        Self::Raw(RawExpression::new(expression))
    }

    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) | Self::Float(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Tree(_) => "tree",
            Self::Raw(_) => "raw expression",
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => value.as_f64(),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(value) => value.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[OptionValue]> {
        match self {
            Self::Array(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tree(&self) -> Option<&OptionTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tree_mut(&mut self) -> Option<&mut OptionTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_raw(&self) -> Option<&RawExpression> {
        match self {
            Self::Raw(expression) => Some(expression),
            _ => None,
        }
    }

    /// Treats this slot as a nested tree, replacing any other content.
    pub fn make_tree(&mut self) -> &mut OptionTree {
        match *self {
            Self::Tree(ref mut tree) => tree,
            _ => {
                *self = Self::Tree(OptionTree::new());
                self.make_tree()
            }
        }
    }

    /// Nested read with auto-vivification, see [`OptionTree::get`].
    pub fn get(&mut self, key: &str) -> &mut OptionValue {
        self.make_tree().get(key)
    }

    /// Nested subtree access, see [`OptionTree::child`].
    pub fn child(&mut self, key: &str) -> &mut OptionTree {
        self.make_tree().child(key)
    }

    /// Replaces the slot content, returning the previous value.
    pub fn assign(&mut self, value: impl Into<OptionValue>) -> OptionValue {
        std::mem::replace(self, value.into())
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for OptionValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl TryFrom<Decimal> for OptionValue {
    type Error = ChartError;

    fn try_from(value: Decimal) -> ChartResult<Self> {
        value.to_f64().map(Self::Float).ok_or_else(|| {
            ChartError::InvalidData(format!("decimal {value} cannot be represented as f64"))
        })
    }
}

/// Datetimes become epoch milliseconds, the unit of Highcharts datetime axes.
impl<Tz: TimeZone> From<DateTime<Tz>> for OptionValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Number(Number::from(value.timestamp_millis()))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for OptionValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<RawExpression> for OptionValue {
    fn from(value: RawExpression) -> Self {
        Self::Raw(value)
    }
}

impl From<OptionTree> for OptionValue {
    fn from(value: OptionTree) -> Self {
        Self::Tree(value)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<OptionValue>> From<&[T]> for OptionValue {
    fn from(values: &[T]) -> Self {
        Self::Array(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<OptionValue>, const N: usize> From<[T; N]> for OptionValue {
    fn from(values: [T; N]) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Bool(value),
            serde_json::Value::Number(value) if value.is_f64() => {
                Self::Float(value.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::Number(value) => Self::Number(value),
            serde_json::Value::String(value) => Self::String(value),
            serde_json::Value::Array(values) => {
                Self::Array(values.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Tree(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}
