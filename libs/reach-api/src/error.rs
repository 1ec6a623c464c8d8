/// Error returned by every fallible conversion.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// JSON object carries keys the record does not declare.
    #[error("{record}: unrecognized keys {unknown:?}, expected a subset of {expected:?}")]
    SchemaViolation {
        record: &'static str,
        unknown: Vec<String>,
        expected: Vec<&'static str>,
    },

    /// Value of the wrong kind for a recognized field.
    #[error("{record}.{field}: expected {expected}, got {actual}")]
    TypeMismatch {
        record: &'static str,
        field: String,
        expected: String,
        actual: &'static str,
    },

    #[error("{record}: no field '{field}'")]
    UnknownField { record: &'static str, field: String },

    /// Malformed JSON text or protobuf bytes.
    #[error("format error: {0}")]
    Format(String),

    #[error("descriptor error: {0}")]
    Descriptor(String),

    #[error("config error: {0}")]
    Config(String),
}

impl CodecError {
    pub fn type_mismatch(
        record: &'static str,
        field: impl Into<String>,
        expected: impl std::fmt::Display,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            record,
            field: field.into(),
            expected: expected.to_string(),
            actual,
        }
    }

    pub fn unknown_field(record: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField { record, field: field.into() }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn descriptor(msg: impl Into<String>) -> Self {
        Self::Descriptor(msg.into())
    }

    /// Add context to the error.
    ///
    /// Message-carrying variants get `"context: message"`; structured variants
    /// already name their record and field and are returned unchanged.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            CodecError::Format(msg) => CodecError::Format(format!("{ctx}: {msg}")),
            CodecError::Descriptor(msg) => CodecError::Descriptor(format!("{ctx}: {msg}")),
            CodecError::Config(msg) => CodecError::Config(format!("{ctx}: {msg}")),
            other => other,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        Self::format(e.to_string())
    }
}
