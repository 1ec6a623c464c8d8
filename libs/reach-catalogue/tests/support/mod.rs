#![allow(dead_code)]

use prost_reflect::{DynamicMessage, Value as ProtoValue};
use reach_api::record::Record;
use reach_api::schema::{FieldKind, RecordSchema, ScalarType};
use reach_api::value::Value;
use reach_format_protobuf::ProtobufCodec;
use reach_format_protobuf::config::ProtobufFormatConfig;

pub fn codec() -> ProtobufCodec {
    ProtobufCodec::new(
        ProtobufFormatConfig::default(),
        reach_catalogue::records(),
        reach_catalogue::envelopes(),
    )
    .unwrap()
}

/// Non-zero sample of a scalar type.
pub fn sample(ty: ScalarType) -> Value {
    match ty {
        ScalarType::Bool => Value::Bool(true),
        ScalarType::Int32 => Value::Int(7),
        ScalarType::Int64 => Value::Int(-9_000_000_000),
        ScalarType::Float => Value::Float(0.1),
        ScalarType::Double => Value::Float(2.25),
        ScalarType::String => Value::String("x".to_string()),
        ScalarType::Timestamp => Value::Timestamp(1_234),
        ScalarType::Duration => Value::Duration(1.5),
    }
}

/// Record with every field set to a non-zero sample. Nesting stops after
/// `depth` levels.
pub fn populated(schema: &'static RecordSchema, depth: usize) -> Record {
    let mut record = Record::new(schema);
    for field in schema.fields {
        let value = match field.kind {
            FieldKind::Scalar(ty) | FieldKind::OptionalScalar(ty) => sample(ty),
            FieldKind::RepeatedScalar(ty) => Value::List(vec![sample(ty), sample(ty)]),
            FieldKind::Nested(nested) if depth > 0 => Value::Record(populated(nested, depth - 1)),
            FieldKind::RepeatedNested(nested) if depth > 0 => {
                Value::List(vec![Value::Record(populated(nested, depth - 1))])
            }
            _ => continue,
        };
        record.set(field.json_name, value).unwrap();
    }
    record
}

/// Record with every singular field explicitly set to its zero value.
pub fn zeroed(schema: &'static RecordSchema) -> Record {
    let mut record = Record::new(schema);
    for field in schema.fields {
        let value = match field.kind {
            FieldKind::Scalar(ty) | FieldKind::OptionalScalar(ty) => Value::zero(ty),
            FieldKind::Nested(nested) => Value::Record(Record::new(nested)),
            FieldKind::RepeatedScalar(_) | FieldKind::RepeatedNested(_) => continue,
        };
        record.set(field.json_name, value).unwrap();
    }
    record
}

/// Dynamic message of the catalogue type `name` with the given fields set.
pub fn message(
    codec: &ProtobufCodec,
    name: &str,
    fields: Vec<(&str, ProtoValue)>,
) -> DynamicMessage {
    let mut message = DynamicMessage::new(codec.message_descriptor(name).unwrap());
    for (field, value) in fields {
        message.set_field_by_name(field, value);
    }
    message
}

/// `google.protobuf.Timestamp` / `Duration` message.
pub fn seconds_nanos(
    codec: &ProtobufCodec,
    full_name: &str,
    seconds: i64,
    nanos: i32,
) -> ProtoValue {
    let descriptor = codec.pool().get_message_by_name(full_name).unwrap();
    let mut message = DynamicMessage::new(descriptor);
    message.set_field_by_name("seconds", ProtoValue::I64(seconds));
    message.set_field_by_name("nanos", ProtoValue::I32(nanos));
    ProtoValue::Message(message)
}

pub fn string(s: &str) -> ProtoValue {
    ProtoValue::String(s.to_string())
}
