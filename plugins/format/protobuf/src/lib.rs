pub mod config;
pub mod descriptor;

use std::borrow::Cow;

use prost::Message;
use prost_reflect::{
    DescriptorPool, DynamicMessage, FieldDescriptor as ProtoField, MessageDescriptor,
    ReflectMessage, Value as ProtoValue,
};
use prost_types::FileDescriptorSet;
use reach_api::envelope::{Envelope, EnvelopeSchema, Payload, Variant};
use reach_api::error::CodecError;
use reach_api::format::{DataFormat, FormatSerializer};
use reach_api::record::Record;
use reach_api::schema::{FieldDescriptor, FieldKind, RecordSchema, ScalarType};
use reach_api::time;
use reach_api::value::Value;

use crate::config::ProtobufFormatConfig;
use crate::descriptor::{DURATION_MESSAGE, TIMESTAMP_MESSAGE};

// ════════════════════════════════════════════════════════════════
//  Codec
// ════════════════════════════════════════════════════════════════

/// Protobuf codec over a descriptor pool generated from the schema tables.
///
/// Messages are handled as [`DynamicMessage`]s. Every generated message is
/// proto2, so singular fields carry explicit presence and an explicitly set
/// zero survives the round trip.
#[derive(Debug, Clone)]
pub struct ProtobufCodec {
    config: ProtobufFormatConfig,
    files: FileDescriptorSet,
    pool: DescriptorPool,
    timestamp: MessageDescriptor,
    duration: MessageDescriptor,
}

impl ProtobufCodec {
    pub fn new(
        config: ProtobufFormatConfig,
        records: &[&'static RecordSchema],
        envelopes: &[&'static EnvelopeSchema],
    ) -> Result<Self, CodecError> {
        let files = descriptor::build_file_descriptor_set(&config, records, envelopes)?;
        let pool = DescriptorPool::from_file_descriptor_set(files.clone())
            .map_err(|e| CodecError::descriptor(format!("failed to build descriptor pool: {e}")))?;
        let well_known = |name: &str| {
            pool.get_message_by_name(name)
                .ok_or_else(|| CodecError::descriptor(format!("message type '{name}' not found")))
        };
        let timestamp = well_known(TIMESTAMP_MESSAGE)?;
        let duration = well_known(DURATION_MESSAGE)?;
        Ok(Self { config, files, pool, timestamp, duration })
    }

    pub fn config(&self) -> &ProtobufFormatConfig {
        &self.config
    }

    /// The generated descriptor set, e.g. for `protoc --descriptor_set_in`.
    pub fn file_descriptor_set(&self) -> &FileDescriptorSet {
        &self.files
    }

    pub fn pool(&self) -> &DescriptorPool {
        &self.pool
    }

    /// Descriptor of the message generated for the record or envelope `name`.
    pub fn message_descriptor(&self, name: &str) -> Result<MessageDescriptor, CodecError> {
        let full_name = self.config.full_name(name);
        self.pool.get_message_by_name(&full_name).ok_or_else(|| {
            CodecError::descriptor(format!("message type '{full_name}' not found in descriptor"))
        })
    }

    fn expect_descriptor(&self, name: &str, message: &DynamicMessage) -> Result<(), CodecError> {
        let full_name = self.config.full_name(name);
        let actual = message.descriptor();
        if actual.full_name() == full_name {
            Ok(())
        } else {
            Err(CodecError::descriptor(format!(
                "expected message '{full_name}', got '{}'",
                actual.full_name()
            )))
        }
    }

    // ── records ──

    /// Encode a record. Set slots are assigned (explicit zeros included),
    /// unset slots stay unset.
    pub fn to_proto(&self, record: &Record) -> Result<DynamicMessage, CodecError> {
        let mut message = DynamicMessage::new(self.message_descriptor(record.name())?);
        self.write_fields(&mut message, record)?;
        Ok(message)
    }

    /// Decode a message of the type generated for `schema`. `None` in, `None`
    /// out.
    pub fn from_proto(
        &self,
        schema: &'static RecordSchema,
        message: Option<&DynamicMessage>,
    ) -> Result<Option<Record>, CodecError> {
        message.map(|m| self.record_from_proto(schema, m)).transpose()
    }

    fn write_fields(
        &self,
        message: &mut DynamicMessage,
        record: &Record,
    ) -> Result<(), CodecError> {
        for (field, value) in record.set_fields() {
            let proto_field = field_of(&message.descriptor(), field.proto_name)?;
            let value = self.value_to_proto(record.name(), field, value)?;
            set_field(message, &proto_field, value)?;
        }
        Ok(())
    }

    fn read_fields(&self, record: &mut Record, message: &DynamicMessage) -> Result<(), CodecError> {
        let schema = record.schema();
        let descriptor = message.descriptor();
        for (index, field) in schema.fields.iter().enumerate() {
            let proto_field = field_of(&descriptor, field.proto_name)?;
            if !message.has_field(&proto_field) {
                continue;
            }
            let value =
                self.value_from_proto(schema.name, field, &message.get_field(&proto_field))?;
            record.set_slot(index, value)?;
        }
        Ok(())
    }

    fn value_to_proto(
        &self,
        record: &'static str,
        field: &FieldDescriptor,
        value: &Value,
    ) -> Result<ProtoValue, CodecError> {
        match (field.kind, value) {
            (FieldKind::Scalar(ty) | FieldKind::OptionalScalar(ty), v) => {
                self.scalar_to_proto(record, field.json_name, ty, v)
            }
            (FieldKind::Nested(_), Value::Record(r)) => Ok(ProtoValue::Message(self.to_proto(r)?)),
            (FieldKind::RepeatedScalar(ty), Value::List(items)) => items
                .iter()
                .map(|item| self.scalar_to_proto(record, field.json_name, ty, item))
                .collect::<Result<Vec<_>, _>>()
                .map(ProtoValue::List),
            (FieldKind::RepeatedNested(_), Value::List(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Record(r) => self.to_proto(r).map(ProtoValue::Message),
                    other => Err(CodecError::type_mismatch(
                        record,
                        field.json_name,
                        field.kind,
                        other.kind_name(),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ProtoValue::List),
            (kind, v) => Err(CodecError::type_mismatch(
                record,
                field.json_name,
                kind,
                v.kind_name(),
            )),
        }
    }

    fn scalar_to_proto(
        &self,
        record: &'static str,
        field: &str,
        ty: ScalarType,
        value: &Value,
    ) -> Result<ProtoValue, CodecError> {
        let mismatch = || CodecError::type_mismatch(record, field, ty, value.kind_name());
        Ok(match (ty, value) {
            (ScalarType::Bool, Value::Bool(b)) => ProtoValue::Bool(*b),
            (ScalarType::Int32, Value::Int(i)) => {
                ProtoValue::I32(i32::try_from(*i).map_err(|_| mismatch())?)
            }
            (ScalarType::Int64, Value::Int(i)) => ProtoValue::I64(*i),
            (ScalarType::Float, Value::Float(f)) => ProtoValue::F32(*f as f32),
            (ScalarType::Double, Value::Float(f)) => ProtoValue::F64(*f),
            (ScalarType::String, Value::String(s)) => ProtoValue::String(s.clone()),
            (ScalarType::Timestamp, Value::Timestamp(millis)) => {
                let (seconds, nanos) = time::millis_to_timestamp(*millis);
                ProtoValue::Message(seconds_nanos(&self.timestamp, seconds, nanos)?)
            }
            (ScalarType::Duration, Value::Duration(secs)) => {
                let (seconds, nanos) = time::seconds_to_duration(*secs);
                ProtoValue::Message(seconds_nanos(&self.duration, seconds, nanos)?)
            }
            _ => return Err(mismatch()),
        })
    }

    fn value_from_proto(
        &self,
        record: &'static str,
        field: &FieldDescriptor,
        value: &ProtoValue,
    ) -> Result<Value, CodecError> {
        let mismatch = |v: &ProtoValue| {
            CodecError::type_mismatch(record, field.json_name, field.kind, proto_kind(v))
        };
        match (field.kind, value) {
            (FieldKind::Scalar(ty) | FieldKind::OptionalScalar(ty), v) => {
                scalar_from_proto(v, ty).ok_or_else(|| mismatch(v))
            }
            (FieldKind::Nested(schema), ProtoValue::Message(m)) => {
                self.record_from_proto(schema, m).map(Value::Record)
            }
            (FieldKind::RepeatedScalar(ty), ProtoValue::List(items)) => items
                .iter()
                .map(|item| scalar_from_proto(item, ty).ok_or_else(|| mismatch(item)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            (FieldKind::RepeatedNested(schema), ProtoValue::List(items)) => items
                .iter()
                .map(|item| match item {
                    ProtoValue::Message(m) => self.record_from_proto(schema, m).map(Value::Record),
                    other => Err(mismatch(other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            (_, v) => Err(mismatch(v)),
        }
    }

    fn record_from_proto(
        &self,
        schema: &'static RecordSchema,
        message: &DynamicMessage,
    ) -> Result<Record, CodecError> {
        self.expect_descriptor(schema.name, message)?;
        let mut record = Record::new(schema);
        self.read_fields(&mut record, message)?;
        Ok(record)
    }

    // ── envelopes ──

    /// Encode an envelope: common fields, the discriminator and, for a
    /// recognized variant, its oneof case. The case is always assigned, so
    /// an empty payload still marks its case as present.
    pub fn envelope_to_proto(&self, envelope: &Envelope) -> Result<DynamicMessage, CodecError> {
        let schema = envelope.schema();
        let descriptor = self.message_descriptor(schema.name)?;
        let mut message = DynamicMessage::new(descriptor.clone());
        self.write_fields(&mut message, envelope.common())?;

        if let Some(tag) = envelope.payload().tag() {
            let field = field_of(&descriptor, schema.discriminator.proto_name)?;
            set_field(&mut message, &field, ProtoValue::String(tag.to_string()))?;
        }
        match envelope.payload() {
            Payload::Variant { variant, body, .. } => {
                let case = field_of(&descriptor, variant.case)?;
                set_field(&mut message, &case, ProtoValue::Message(self.to_proto(body)?))?;
            }
            Payload::Unrecognized(tag) => {
                tracing::debug!(
                    envelope = schema.name,
                    data_type = %tag,
                    "no variant for data type, payload not encoded"
                );
            }
            Payload::None => {}
        }
        Ok(message)
    }

    /// Decode an envelope. The discriminator picks the variant; without one,
    /// the present oneof case does and the payload stays untagged.
    pub fn envelope_from_proto(
        &self,
        schema: &'static EnvelopeSchema,
        message: &DynamicMessage,
    ) -> Result<Envelope, CodecError> {
        self.expect_descriptor(schema.name, message)?;
        let descriptor = message.descriptor();

        let mut common = Record::new(schema.common);
        self.read_fields(&mut common, message)?;

        let discriminator = field_of(&descriptor, schema.discriminator.proto_name)?;
        let tag = match message.get_field(&discriminator) {
            Cow::Borrowed(ProtoValue::String(tag)) => tag.clone(),
            Cow::Owned(ProtoValue::String(tag)) => tag,
            other => {
                return Err(CodecError::type_mismatch(
                    schema.name,
                    schema.discriminator.json_name,
                    ScalarType::String,
                    proto_kind(&other),
                ));
            }
        };

        let mut present: Option<(&'static Variant, ProtoField)> = None;
        for variant in schema.cases() {
            let field = field_of(&descriptor, variant.case)?;
            if message.has_field(&field) {
                present = Some((variant, field));
                break;
            }
        }

        let payload = match (tag.as_str(), present) {
            ("", None) => Payload::None,
            ("", Some((variant, field))) => {
                Payload::untagged(variant, self.case_body(variant, message, &field)?)
            }
            (tag, present) => match (schema.variant(tag), present) {
                (None, _) => Payload::Unrecognized(tag.to_string()),
                (Some(variant), Some((owner, field))) if owner.case == variant.case => {
                    Payload::Variant {
                        variant,
                        body: self.case_body(variant, message, &field)?,
                        tagged: true,
                    }
                }
                (Some(variant), present) => {
                    if let Some((owner, _)) = present {
                        tracing::debug!(
                            envelope = schema.name,
                            data_type = %tag,
                            case = owner.case,
                            "oneof case does not match data type, payload dropped"
                        );
                    }
                    Payload::for_tag(schema, variant.tag)
                }
            },
        };

        Envelope::from_parts(schema, common, payload)
    }

    fn case_body(
        &self,
        variant: &'static Variant,
        message: &DynamicMessage,
        field: &ProtoField,
    ) -> Result<Record, CodecError> {
        match message.get_field(field).as_ref() {
            ProtoValue::Message(m) => self.record_from_proto(variant.payload, m),
            other => Err(CodecError::type_mismatch(
                variant.payload.name,
                variant.case,
                variant.payload.name,
                proto_kind(other),
            )),
        }
    }

    // ── bytes ──

    pub fn encode(&self, record: &Record) -> Result<Vec<u8>, CodecError> {
        Ok(self.to_proto(record)?.encode_to_vec())
    }

    pub fn decode(&self, schema: &'static RecordSchema, data: &[u8]) -> Result<Record, CodecError> {
        let message = self.decode_message(schema.name, data)?;
        self.record_from_proto(schema, &message)
    }

    pub fn encode_envelope(&self, envelope: &Envelope) -> Result<Vec<u8>, CodecError> {
        Ok(self.envelope_to_proto(envelope)?.encode_to_vec())
    }

    pub fn decode_envelope(
        &self,
        schema: &'static EnvelopeSchema,
        data: &[u8],
    ) -> Result<Envelope, CodecError> {
        let message = self.decode_message(schema.name, data)?;
        self.envelope_from_proto(schema, &message)
    }

    fn decode_message(&self, name: &str, data: &[u8]) -> Result<DynamicMessage, CodecError> {
        DynamicMessage::decode(self.message_descriptor(name)?, data)
            .map_err(|e| CodecError::format(format!("protobuf decode: {e}")))
    }
}

// ---- FormatSerializer ----

impl FormatSerializer for ProtobufCodec {
    fn serialize(&self, record: &Record) -> Result<Vec<u8>, CodecError> {
        tracing::trace!(record = record.name(), "protobuf encode");
        self.encode(record)
    }

    fn deserialize(
        &self,
        schema: &'static RecordSchema,
        data: &[u8],
    ) -> Result<Record, CodecError> {
        tracing::trace!(record = schema.name, bytes = data.len(), "protobuf decode");
        self.decode(schema, data)
    }

    fn serialize_envelope(&self, envelope: &Envelope) -> Result<Vec<u8>, CodecError> {
        tracing::trace!(
            envelope = envelope.schema().name,
            data_type = %envelope.data_type(),
            "protobuf encode"
        );
        self.encode_envelope(envelope)
    }

    fn deserialize_envelope(
        &self,
        schema: &'static EnvelopeSchema,
        data: &[u8],
    ) -> Result<Envelope, CodecError> {
        tracing::trace!(envelope = schema.name, bytes = data.len(), "protobuf decode");
        self.decode_envelope(schema, data)
    }

    fn format(&self) -> DataFormat {
        DataFormat::Protobuf
    }
}

// ════════════════════════════════════════════════════════════════
//  Helpers
// ════════════════════════════════════════════════════════════════

fn field_of(descriptor: &MessageDescriptor, proto_name: &str) -> Result<ProtoField, CodecError> {
    descriptor.get_field_by_name(proto_name).ok_or_else(|| {
        CodecError::descriptor(format!("{}: no field '{proto_name}'", descriptor.full_name()))
    })
}

fn set_field(
    message: &mut DynamicMessage,
    field: &ProtoField,
    value: ProtoValue,
) -> Result<(), CodecError> {
    let owner = message.descriptor();
    message.try_set_field(field, value).map_err(|e| {
        CodecError::descriptor(format!("{}.{}: {e}", owner.full_name(), field.name()))
    })
}

/// `google.protobuf.Timestamp` or `Duration` value.
fn seconds_nanos(
    descriptor: &MessageDescriptor,
    seconds: i64,
    nanos: i32,
) -> Result<DynamicMessage, CodecError> {
    let mut message = DynamicMessage::new(descriptor.clone());
    set_field(&mut message, &field_of(descriptor, "seconds")?, ProtoValue::I64(seconds))?;
    set_field(&mut message, &field_of(descriptor, "nanos")?, ProtoValue::I32(nanos))?;
    Ok(message)
}

fn read_seconds_nanos(message: &DynamicMessage) -> (i64, i32) {
    let seconds = message
        .get_field_by_name("seconds")
        .and_then(|v| v.as_i64())
        .unwrap_or_default();
    let nanos = message
        .get_field_by_name("nanos")
        .and_then(|v| v.as_i32())
        .unwrap_or_default();
    (seconds, nanos)
}

fn scalar_from_proto(value: &ProtoValue, ty: ScalarType) -> Option<Value> {
    Some(match (ty, value) {
        (ScalarType::Bool, ProtoValue::Bool(b)) => Value::Bool(*b),
        (ScalarType::Int32, ProtoValue::I32(i)) => Value::Int(i64::from(*i)),
        (ScalarType::Int64, ProtoValue::I64(i)) => Value::Int(*i),
        (ScalarType::Float, ProtoValue::F32(f)) => Value::Float(f64::from(*f)),
        (ScalarType::Double, ProtoValue::F64(f)) => Value::Float(*f),
        (ScalarType::String, ProtoValue::String(s)) => Value::String(s.clone()),
        (ScalarType::Timestamp, ProtoValue::Message(m)) => {
            let (seconds, nanos) = read_seconds_nanos(m);
            Value::Timestamp(time::timestamp_to_millis(seconds, nanos))
        }
        (ScalarType::Duration, ProtoValue::Message(m)) => {
            let (seconds, nanos) = read_seconds_nanos(m);
            Value::Duration(time::duration_to_seconds(seconds, nanos))
        }
        _ => return None,
    })
}

fn proto_kind(value: &ProtoValue) -> &'static str {
    match value {
        ProtoValue::Bool(_) => "bool",
        ProtoValue::I32(_) => "int32",
        ProtoValue::I64(_) => "int64",
        ProtoValue::U32(_) => "uint32",
        ProtoValue::U64(_) => "uint64",
        ProtoValue::F32(_) => "float",
        ProtoValue::F64(_) => "double",
        ProtoValue::String(_) => "string",
        ProtoValue::Bytes(_) => "bytes",
        ProtoValue::EnumNumber(_) => "enum",
        ProtoValue::Message(_) => "message",
        ProtoValue::List(_) => "list",
        ProtoValue::Map(_) => "map",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reach_api::envelope::Layout;
    use similar_asserts::assert_eq;

    static EMPTY: RecordSchema = RecordSchema { name: "Empty", fields: &[] };

    static PAIR: RecordSchema = RecordSchema {
        name: "Pair",
        fields: &[
            FieldDescriptor::scalar("key", "key", ScalarType::String),
            FieldDescriptor::scalar("value", "value", ScalarType::String),
        ],
    };

    static SAMPLE: RecordSchema = RecordSchema {
        name: "Sample",
        fields: &[
            FieldDescriptor::scalar("name", "name", ScalarType::String),
            FieldDescriptor::scalar("count", "count", ScalarType::Int32),
            FieldDescriptor::scalar("total", "total", ScalarType::Int64),
            FieldDescriptor::scalar("ratio", "ratio", ScalarType::Float),
            FieldDescriptor::optional("level", "level", ScalarType::Double),
            FieldDescriptor::scalar("ok", "ok", ScalarType::Bool),
            FieldDescriptor::nested("pair", "pair", &PAIR),
            FieldDescriptor::repeated("values", "values", ScalarType::Double),
            FieldDescriptor::repeated_nested("pairs", "pairs", &PAIR),
            FieldDescriptor::scalar("sampleTS", "sample_ts", ScalarType::Timestamp),
            FieldDescriptor::scalar("elapsed", "elapsed", ScalarType::Duration),
        ],
    };

    static HEADER: RecordSchema = RecordSchema {
        name: "PacketHeader",
        fields: &[
            FieldDescriptor::scalar("tag", "tag", ScalarType::String),
            FieldDescriptor::scalar("ts", "ts", ScalarType::Timestamp),
        ],
    };

    static PACKET: EnvelopeSchema = EnvelopeSchema {
        name: "Packet",
        common: &HEADER,
        discriminator: FieldDescriptor::scalar("dataType", "data_type", ScalarType::String),
        oneof: "payload",
        variants: &[
            Variant::flat("ping", "ping", &EMPTY),
            Variant::flat("key-value", "key_value", &PAIR),
            Variant::flat("key-value-request", "key_value", &PAIR),
            Variant::nested("sample", "sample", &SAMPLE, "sample"),
        ],
    };

    fn codec() -> ProtobufCodec {
        ProtobufCodec::new(ProtobufFormatConfig::default(), &[&SAMPLE], &[&PACKET]).unwrap()
    }

    fn pair(key: &str, value: &str) -> Record {
        Record::new(&PAIR).with("key", key).unwrap().with("value", value).unwrap()
    }

    #[test]
    fn round_trip_keeps_explicit_zeros() {
        let codec = codec();
        let r = Record::new(&SAMPLE)
            .with("name", "")
            .unwrap()
            .with("count", 0)
            .unwrap()
            .with("level", 0.0)
            .unwrap()
            .with("ok", false)
            .unwrap()
            .with("pair", Record::new(&PAIR))
            .unwrap();
        let bytes = codec.encode(&r).unwrap();
        assert_eq!(codec.decode(&SAMPLE, &bytes).unwrap(), r);
        assert_eq!(codec.decode(&SAMPLE, &[]).unwrap(), Record::new(&SAMPLE));
    }

    #[test]
    fn round_trip_all_kinds() {
        let codec = codec();
        let r = Record::new(&SAMPLE)
            .with("name", "probe")
            .unwrap()
            .with("count", -7)
            .unwrap()
            .with("total", i64::MAX)
            .unwrap()
            .with("ratio", 0.5)
            .unwrap()
            .with("values", vec![1.0, -2.25])
            .unwrap()
            .with("pairs", vec![pair("a", "1"), pair("b", "2")])
            .unwrap()
            .with("sampleTS", 1_234i64)
            .unwrap()
            .with("elapsed", 1.000000002)
            .unwrap();
        let message = codec.to_proto(&r).unwrap();
        assert_eq!(codec.from_proto(&SAMPLE, Some(&message)).unwrap(), Some(r));
    }

    #[test]
    fn timestamps_split_into_seconds_and_nanos() {
        let codec = codec();
        let r = Record::new(&SAMPLE).with("sampleTS", 1_234i64).unwrap();
        let message = codec.to_proto(&r).unwrap();
        let ts = message.get_field_by_name("sample_ts").unwrap();
        let ts = ts.as_message().unwrap();
        assert_eq!(read_seconds_nanos(ts), (1, 234_000_000));

        let r = Record::new(&SAMPLE).with("elapsed", 1.000000002).unwrap();
        let message = codec.to_proto(&r).unwrap();
        let elapsed = message.get_field_by_name("elapsed").unwrap();
        assert_eq!(read_seconds_nanos(elapsed.as_message().unwrap()), (1, 2));
    }

    #[test]
    fn none_and_wrong_messages() {
        let codec = codec();
        assert_eq!(codec.from_proto(&SAMPLE, None).unwrap(), None);
        let message = codec.to_proto(&pair("k", "v")).unwrap();
        let err = codec.from_proto(&SAMPLE, Some(&message)).unwrap_err();
        assert!(matches!(err, CodecError::Descriptor(_)));
        let err = codec.decode(&SAMPLE, &[0xff, 0xff]).unwrap_err();
        assert!(matches!(err, CodecError::Format(_)));
    }

    #[test]
    fn envelope_sets_only_the_active_case() {
        let codec = codec();
        let env = Envelope::new(&PACKET)
            .with("dataType", "key-value")
            .unwrap()
            .with("key", "k")
            .unwrap()
            .with("value", "v")
            .unwrap();
        let message = codec.envelope_to_proto(&env).unwrap();
        let descriptor = message.descriptor();
        let present: Vec<_> = descriptor
            .fields()
            .filter(|f| f.containing_oneof().is_some() && message.has_field(f))
            .map(|f| f.name().to_string())
            .collect();
        assert_eq!(present, ["key_value"]);
        let body = message.get_field_by_name("key_value").unwrap();
        let body = codec.from_proto(&PAIR, body.as_message()).unwrap();
        assert_eq!(body, Some(pair("k", "v")));
        assert_eq!(codec.envelope_from_proto(&PACKET, &message).unwrap(), env);
    }

    #[test]
    fn empty_payload_is_still_present() {
        let codec = codec();
        let env = Envelope::new(&PACKET).with_data_type("ping");
        let message = codec.envelope_to_proto(&env).unwrap();
        assert!(message.has_field_by_name("ping"));
        let bytes = message.encode_to_vec();
        let decoded = codec.decode_envelope(&PACKET, &bytes).unwrap();
        assert_eq!(decoded, env);
        assert!(decoded.common().is_empty());
    }

    #[test]
    fn case_without_data_type_stays_untagged() {
        let codec = codec();
        let mut message = DynamicMessage::new(codec.message_descriptor("Packet").unwrap());
        let body = codec.to_proto(&pair("k", "v")).unwrap();
        message.set_field_by_name("key_value", ProtoValue::Message(body));
        let env = codec.envelope_from_proto(&PACKET, &message).unwrap();
        assert_eq!(env.data_type(), "");
        assert_eq!(env.payload().variant().map(|v| v.tag), Some("key-value"));
        assert_eq!(env.body(), Some(&pair("k", "v")));

        let reencoded = codec.envelope_to_proto(&env).unwrap();
        assert!(!reencoded.has_field_by_name("data_type"));
        assert!(reencoded.has_field_by_name("key_value"));
        assert_eq!(codec.envelope_from_proto(&PACKET, &reencoded).unwrap(), env);
    }

    #[test]
    fn float_round_trip_is_exact() {
        let codec = codec();
        let r = Record::new(&SAMPLE).with("ratio", 0.1).unwrap();
        let decoded = codec.decode(&SAMPLE, &codec.encode(&r).unwrap()).unwrap();
        assert_eq!(decoded, r);
        assert_eq!(decoded.f64("ratio"), f64::from(0.1f32));
    }

    #[test]
    fn shared_case_follows_data_type() {
        let codec = codec();
        let env = Envelope::new(&PACKET)
            .with("dataType", "key-value-request")
            .unwrap()
            .with("key", "k")
            .unwrap();
        let bytes = codec.encode_envelope(&env).unwrap();
        let decoded = codec.decode_envelope(&PACKET, &bytes).unwrap();
        assert_eq!(decoded.data_type(), "key-value-request");
        assert_eq!(decoded, env);
    }

    #[test]
    fn mismatched_case_leaves_body_empty() {
        let codec = codec();
        let mut message = DynamicMessage::new(codec.message_descriptor("Packet").unwrap());
        message.set_field_by_name("data_type", ProtoValue::String("sample".into()));
        let body = codec.to_proto(&pair("k", "v")).unwrap();
        message.set_field_by_name("key_value", ProtoValue::Message(body));
        let env = codec.envelope_from_proto(&PACKET, &message).unwrap();
        assert_eq!(env.data_type(), "sample");
        assert_eq!(env.body(), Some(&Record::new(&SAMPLE)));
    }

    #[test]
    fn unrecognized_data_type() {
        let codec = codec();
        let env = Envelope::new(&PACKET)
            .with("tag", "t")
            .unwrap()
            .with_data_type("mystery");
        let message = codec.envelope_to_proto(&env).unwrap();
        assert!(!message.has_field_by_name("ping"));
        let decoded = codec.envelope_from_proto(&PACKET, &message).unwrap();
        assert_eq!(decoded.payload(), &Payload::Unrecognized("mystery".to_string()));
        assert_eq!(decoded.common().str("tag"), "t");
    }

    #[test]
    fn no_data_type_no_case() {
        let codec = codec();
        let env = Envelope::new(&PACKET).with("ts", 5_000i64).unwrap();
        let bytes = codec.encode_envelope(&env).unwrap();
        let decoded = codec.decode_envelope(&PACKET, &bytes).unwrap();
        assert_eq!(decoded.payload(), &Payload::None);
        assert_eq!(decoded, env);
    }

    #[test]
    fn nested_variant_round_trip() {
        let codec = codec();
        let body = Record::new(&SAMPLE).with("count", 3).unwrap();
        let env = Envelope::new(&PACKET)
            .with_data_type("sample")
            .with("sample", body)
            .unwrap();
        assert!(matches!(
            env.payload(),
            Payload::Variant { variant, .. } if variant.layout == Layout::Nested("sample")
        ));
        let bytes = codec.encode_envelope(&env).unwrap();
        let decoded = codec.decode_envelope(&PACKET, &bytes).unwrap();
        assert_eq!(decoded, env);
    }

    #[test]
    fn codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProtobufCodec>();
        assert_eq!(codec().format(), DataFormat::Protobuf);
    }
}
