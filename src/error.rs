use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("cannot serialize option `{path}`: {reason}")]
    Serialization { path: String, reason: String },

    #[error("extra script `{key}` was included but never registered")]
    UnknownScriptKey { key: String },

    #[error("raw expression is not valid text: invalid sequence at byte {offset}")]
    InvalidEncoding { offset: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    pub(crate) fn serialization(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Serialization {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
