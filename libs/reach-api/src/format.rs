use serde::{Deserialize, Serialize};

use crate::envelope::{Envelope, EnvelopeSchema};
use crate::error::CodecError;
use crate::record::Record;
use crate::schema::RecordSchema;

// ════════════════════════════════════════════════════════════════
//  Data Format
// ════════════════════════════════════════════════════════════════

/// Wire format produced by a [`FormatSerializer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFormat {
    Json,
    Protobuf,
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataFormat::Json => write!(f, "json"),
            DataFormat::Protobuf => write!(f, "protobuf"),
        }
    }
}

// ════════════════════════════════════════════════════════════════
//  FormatSerializer
// ════════════════════════════════════════════════════════════════

/// Conversion `bytes ↔ Record` / `bytes ↔ Envelope` for one wire format.
///
/// Implementations hold whatever the format needs up front (the protobuf
/// codec owns its descriptor pool) and are shared across threads.
pub trait FormatSerializer: Send + Sync {
    fn serialize(&self, record: &Record) -> Result<Vec<u8>, CodecError>;

    fn deserialize(&self, schema: &'static RecordSchema, data: &[u8]) -> Result<Record, CodecError>;

    fn serialize_envelope(&self, envelope: &Envelope) -> Result<Vec<u8>, CodecError>;

    fn deserialize_envelope(
        &self,
        schema: &'static EnvelopeSchema,
        data: &[u8],
    ) -> Result<Envelope, CodecError>;

    fn format(&self) -> DataFormat;
}

/// Re-encode a record from one format into another through the typed value.
pub fn transcode(
    from: &dyn FormatSerializer,
    to: &dyn FormatSerializer,
    schema: &'static RecordSchema,
    data: &[u8],
) -> Result<Vec<u8>, CodecError> {
    tracing::trace!(record = schema.name, from = %from.format(), to = %to.format(), "transcode");
    let record = from
        .deserialize(schema, data)
        .map_err(|e| e.with_context(format!("{} decode", from.format())))?;
    to.serialize(&record)
        .map_err(|e| e.with_context(format!("{} encode", to.format())))
}

/// [`transcode`] for envelopes.
pub fn transcode_envelope(
    from: &dyn FormatSerializer,
    to: &dyn FormatSerializer,
    schema: &'static EnvelopeSchema,
    data: &[u8],
) -> Result<Vec<u8>, CodecError> {
    tracing::trace!(envelope = schema.name, from = %from.format(), to = %to.format(), "transcode");
    let envelope = from
        .deserialize_envelope(schema, data)
        .map_err(|e| e.with_context(format!("{} decode", from.format())))?;
    to.serialize_envelope(&envelope)
        .map_err(|e| e.with_context(format!("{} encode", to.format())))
}
