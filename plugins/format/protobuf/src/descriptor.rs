//! Generation of the `FileDescriptorSet` that describes the catalogue on the
//! protobuf side.
//!
//! Field numbers follow declaration order starting at 1, so schemas may only
//! grow by appending fields. Envelope messages carry the common fields, then
//! the discriminator, then one oneof member per distinct case.

use prost_types::field_descriptor_proto::{Label, Type as ProtoType};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    OneofDescriptorProto,
};
use reach_api::envelope::{EnvelopeSchema, Layout};
use reach_api::error::CodecError;
use reach_api::schema::{FieldDescriptor, FieldKind, RecordSchema, ScalarType};

use crate::config::ProtobufFormatConfig;

pub const TIMESTAMP_FILE: &str = "google/protobuf/timestamp.proto";
pub const DURATION_FILE: &str = "google/protobuf/duration.proto";
pub const TIMESTAMP_MESSAGE: &str = "google.protobuf.Timestamp";
pub const DURATION_MESSAGE: &str = "google.protobuf.Duration";

/// Build the descriptor set for `records`, `envelopes` and every record
/// reachable from them through nested fields.
pub fn build_file_descriptor_set(
    config: &ProtobufFormatConfig,
    records: &[&'static RecordSchema],
    envelopes: &[&'static EnvelopeSchema],
) -> Result<FileDescriptorSet, CodecError> {
    let schemas = collect_records(records, envelopes)?;

    let mut message_type: Vec<DescriptorProto> = schemas
        .iter()
        .map(|schema| record_message(config, schema))
        .collect();
    for envelope in envelopes {
        if schemas.iter().any(|s| s.name == envelope.name) {
            return Err(CodecError::descriptor(format!(
                "envelope '{}' clashes with a record of the same name",
                envelope.name
            )));
        }
        message_type.push(envelope_message(config, envelope)?);
    }

    tracing::debug!(
        file = %config.file_name,
        package = %config.package,
        messages = message_type.len(),
        "generated descriptor set"
    );

    let catalogue = FileDescriptorProto {
        name: Some(config.file_name.clone()),
        package: (!config.package.is_empty()).then(|| config.package.clone()),
        dependency: vec![TIMESTAMP_FILE.to_string(), DURATION_FILE.to_string()],
        message_type,
        ..Default::default()
    };

    Ok(FileDescriptorSet {
        file: vec![
            well_known_file(TIMESTAMP_FILE, "Timestamp"),
            well_known_file(DURATION_FILE, "Duration"),
            catalogue,
        ],
    })
}

/// Records in discovery order: the listed ones first, then whatever their
/// nested fields and the envelopes reach.
fn collect_records(
    records: &[&'static RecordSchema],
    envelopes: &[&'static EnvelopeSchema],
) -> Result<Vec<&'static RecordSchema>, CodecError> {
    let mut pending: Vec<&'static RecordSchema> = records.to_vec();
    for envelope in envelopes {
        pending.extend(
            envelope
                .common
                .fields
                .iter()
                .filter_map(|f| f.kind.nested_schema()),
        );
        for variant in envelope.variants {
            let owner = envelope.variant_for_case(variant.case);
            if owner.is_some_and(|o| o.payload != variant.payload) {
                return Err(CodecError::descriptor(format!(
                    "{}: tag '{}' shares case '{}' with a different payload",
                    envelope.name, variant.tag, variant.case
                )));
            }
            pending.push(variant.payload);
        }
    }
    pending.reverse();

    let mut out: Vec<&'static RecordSchema> = Vec::new();
    while let Some(schema) = pending.pop() {
        if let Some(seen) = out.iter().find(|s| s.name == schema.name) {
            if !std::ptr::eq(*seen, schema) {
                return Err(CodecError::descriptor(format!(
                    "two different records are named '{}'",
                    schema.name
                )));
            }
            continue;
        }
        out.push(schema);
        let nested: Vec<_> = schema
            .fields
            .iter()
            .filter_map(|f| f.kind.nested_schema())
            .collect();
        pending.extend(nested.into_iter().rev());
    }
    Ok(out)
}

fn record_message(config: &ProtobufFormatConfig, schema: &RecordSchema) -> DescriptorProto {
    DescriptorProto {
        name: Some(schema.name.to_string()),
        field: schema
            .fields
            .iter()
            .zip(1..)
            .map(|(field, number)| field_proto(config, field, number))
            .collect(),
        ..Default::default()
    }
}

fn envelope_message(
    config: &ProtobufFormatConfig,
    envelope: &EnvelopeSchema,
) -> Result<DescriptorProto, CodecError> {
    let mut field: Vec<FieldDescriptorProto> = envelope
        .common
        .fields
        .iter()
        .chain(std::iter::once(&envelope.discriminator))
        .zip(1..)
        .map(|(f, number)| field_proto(config, f, number))
        .collect();

    let first_case = i32::try_from(field.len() + 1)
        .map_err(|_| CodecError::descriptor(format!("{}: too many fields", envelope.name)))?;
    for (variant, number) in envelope.cases().into_iter().zip(first_case..) {
        field.push(FieldDescriptorProto {
            name: Some(variant.case.to_string()),
            number: Some(number),
            label: Some(Label::Optional as i32),
            r#type: Some(ProtoType::Message as i32),
            type_name: Some(type_ref(config, variant.payload.name)),
            json_name: match variant.layout {
                Layout::Nested(key) => Some(key.to_string()),
                Layout::Flat => None,
            },
            oneof_index: Some(0),
            ..Default::default()
        });
    }

    Ok(DescriptorProto {
        name: Some(envelope.name.to_string()),
        field,
        oneof_decl: vec![OneofDescriptorProto {
            name: Some(envelope.oneof.to_string()),
            ..Default::default()
        }],
        ..Default::default()
    })
}

fn field_proto(
    config: &ProtobufFormatConfig,
    field: &FieldDescriptor,
    number: i32,
) -> FieldDescriptorProto {
    let label = if field.kind.is_repeated() { Label::Repeated } else { Label::Optional };
    let (ty, type_name) = match field.kind {
        FieldKind::Nested(schema) | FieldKind::RepeatedNested(schema) => {
            (ProtoType::Message, Some(type_ref(config, schema.name)))
        }
        FieldKind::Scalar(ty) | FieldKind::OptionalScalar(ty) | FieldKind::RepeatedScalar(ty) => {
            scalar_proto_type(ty)
        }
    };
    FieldDescriptorProto {
        name: Some(field.proto_name.to_string()),
        number: Some(number),
        label: Some(label as i32),
        r#type: Some(ty as i32),
        type_name,
        json_name: Some(field.json_name.to_string()),
        ..Default::default()
    }
}

fn scalar_proto_type(ty: ScalarType) -> (ProtoType, Option<String>) {
    match ty {
        ScalarType::Bool => (ProtoType::Bool, None),
        ScalarType::Int32 => (ProtoType::Int32, None),
        ScalarType::Int64 => (ProtoType::Int64, None),
        ScalarType::Float => (ProtoType::Float, None),
        ScalarType::Double => (ProtoType::Double, None),
        ScalarType::String => (ProtoType::String, None),
        ScalarType::Timestamp => (ProtoType::Message, Some(format!(".{TIMESTAMP_MESSAGE}"))),
        ScalarType::Duration => (ProtoType::Message, Some(format!(".{DURATION_MESSAGE}"))),
    }
}

/// Absolute type reference, e.g. `.reach.logs.KeyValue`.
fn type_ref(config: &ProtobufFormatConfig, message: &str) -> String {
    format!(".{}", config.full_name(message))
}

/// `google.protobuf.Timestamp` / `Duration`: `{int64 seconds = 1; int32 nanos = 2;}`.
fn well_known_file(file: &str, message: &str) -> FileDescriptorProto {
    let scalar = |name: &str, number: i32, ty: ProtoType| FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        json_name: Some(name.to_string()),
        ..Default::default()
    };
    FileDescriptorProto {
        name: Some(file.to_string()),
        package: Some("google.protobuf".to_string()),
        message_type: vec![DescriptorProto {
            name: Some(message.to_string()),
            field: vec![
                scalar("seconds", 1, ProtoType::Int64),
                scalar("nanos", 2, ProtoType::Int32),
            ],
            ..Default::default()
        }],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}
