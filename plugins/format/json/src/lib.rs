use reach_api::envelope::{Envelope, EnvelopeSchema, Layout, Payload, Variant};
use reach_api::error::CodecError;
use reach_api::format::{DataFormat, FormatSerializer};
use reach_api::record::Record;
use reach_api::schema::{FieldDescriptor, FieldKind, RecordSchema, ScalarType};
use reach_api::value::Value;
use serde_json::{Map, Number, Value as JsonValue};

/// JSON object type produced by the encoders.
pub type JsonObject = Map<String, JsonValue>;

// ════════════════════════════════════════════════════════════════
//  Record ↔ JSON
// ════════════════════════════════════════════════════════════════

/// Encode a record as a JSON object in schema order.
///
/// Unset fields are omitted, and so are `Scalar` and repeated fields holding
/// their zero value. `OptionalScalar` and nested fields are emitted whenever
/// they are set.
pub fn to_json(record: &Record) -> JsonObject {
    let mut out = JsonObject::new();
    for (field, value) in record.set_fields() {
        let omit = match field.kind {
            FieldKind::Scalar(_) | FieldKind::RepeatedScalar(_) | FieldKind::RepeatedNested(_) => {
                value.is_zero()
            }
            FieldKind::OptionalScalar(_) | FieldKind::Nested(_) => false,
        };
        if !omit {
            out.insert(field.json_name.to_string(), value_to_json(value));
        }
    }
    out
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) | Value::Timestamp(i) => JsonValue::Number((*i).into()),
        // NaN and infinities have no JSON form.
        Value::Float(f) | Value::Duration(f) => {
            Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number)
        }
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Record(r) => JsonValue::Object(to_json(r)),
        Value::List(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
    }
}

/// Decode a JSON object into a fresh record of `schema`.
///
/// Keys outside the schema are rejected. Zero values decoded into `Scalar`
/// fields and empty arrays are left unset.
pub fn from_json(schema: &'static RecordSchema, json: &JsonValue) -> Result<Record, CodecError> {
    let obj = as_object(schema.name, "<root>", schema.name, json)?;
    check_keys(schema.name, obj, schema.json_names().collect())?;
    let mut record = Record::new(schema);
    decode_fields(&mut record, obj)?;
    Ok(record)
}

/// Decode every field of `record`'s schema present in `obj`. Other keys are
/// ignored.
fn decode_fields(record: &mut Record, obj: &JsonObject) -> Result<(), CodecError> {
    let schema = record.schema();
    for (index, field) in schema.fields.iter().enumerate() {
        let Some(json) = obj.get(field.json_name) else {
            continue;
        };
        if let Some(value) = field_from_json(schema.name, field, json)? {
            record.set_slot(index, value)?;
        }
    }
    Ok(())
}

fn field_from_json(
    record: &'static str,
    field: &FieldDescriptor,
    json: &JsonValue,
) -> Result<Option<Value>, CodecError> {
    let name = field.json_name;
    match field.kind {
        FieldKind::Scalar(ty) => {
            let value = scalar_from_json(record, name, ty, json)?;
            Ok((!value.is_zero()).then_some(value))
        }
        FieldKind::OptionalScalar(_) if json.is_null() => Ok(None),
        FieldKind::OptionalScalar(ty) => scalar_from_json(record, name, ty, json).map(Some),
        FieldKind::Nested(nested) => {
            as_object(record, name, nested.name, json)?;
            from_json(nested, json).map(|r| Some(Value::Record(r)))
        }
        FieldKind::RepeatedScalar(ty) => {
            let items = as_array(record, field, json)?
                .iter()
                .enumerate()
                .map(|(i, item)| scalar_from_json(record, format!("{name}[{i}]"), ty, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok((!items.is_empty()).then_some(Value::List(items)))
        }
        FieldKind::RepeatedNested(nested) => {
            let items = as_array(record, field, json)?
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    as_object(record, format!("{name}[{i}]"), nested.name, item)?;
                    from_json(nested, item).map(Value::Record)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok((!items.is_empty()).then_some(Value::List(items)))
        }
    }
}

fn scalar_from_json(
    record: &'static str,
    field: impl Into<String>,
    ty: ScalarType,
    json: &JsonValue,
) -> Result<Value, CodecError> {
    let value = match ty {
        ScalarType::Bool => json.as_bool().map(Value::Bool),
        ScalarType::Int32 => json
            .as_i64()
            .filter(|i| i32::try_from(*i).is_ok())
            .map(Value::Int),
        ScalarType::Int64 => json.as_i64().map(Value::Int),
        ScalarType::Float | ScalarType::Double => json.as_f64().map(Value::Float),
        ScalarType::String => json.as_str().map(|s| Value::String(s.to_string())),
        ScalarType::Timestamp => json.as_i64().map(Value::Timestamp),
        ScalarType::Duration => json.as_f64().map(Value::Duration),
    };
    value.ok_or_else(|| CodecError::type_mismatch(record, field, ty, json_kind(json)))
}

fn as_object<'a>(
    record: &'static str,
    field: impl Into<String>,
    expected: &str,
    json: &'a JsonValue,
) -> Result<&'a JsonObject, CodecError> {
    json.as_object()
        .ok_or_else(|| CodecError::type_mismatch(record, field, expected, json_kind(json)))
}

fn as_array<'a>(
    record: &'static str,
    field: &FieldDescriptor,
    json: &'a JsonValue,
) -> Result<&'a Vec<JsonValue>, CodecError> {
    json.as_array()
        .ok_or_else(|| {
            CodecError::type_mismatch(record, field.json_name, field.kind, json_kind(json))
        })
}

fn check_keys(
    record: &'static str,
    obj: &JsonObject,
    expected: Vec<&'static str>,
) -> Result<(), CodecError> {
    let unknown: Vec<String> = obj
        .keys()
        .filter(|k| !expected.iter().any(|e| *e == k.as_str()))
        .cloned()
        .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(CodecError::SchemaViolation { record, unknown, expected })
    }
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_i64() || n.is_u64() => "integer",
        JsonValue::Number(_) => "float",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

// ════════════════════════════════════════════════════════════════
//  Envelope ↔ JSON
// ════════════════════════════════════════════════════════════════

/// Encode an envelope: common fields, `dataType`, then the payload. Flat
/// payloads are merged into the top level; nested payloads sit under their
/// key and are left out when they encode to `{}`. An untagged payload is
/// written without `dataType`.
pub fn envelope_to_json(envelope: &Envelope) -> JsonObject {
    let schema = envelope.schema();
    let mut out = to_json(envelope.common());
    if let Some(tag) = envelope.payload().tag() {
        out.insert(
            schema.discriminator.json_name.to_string(),
            JsonValue::String(tag.to_string()),
        );
    }
    if let Payload::Variant { variant, body, .. } = envelope.payload() {
        let body = to_json(body);
        match variant.layout {
            Layout::Flat => out.extend(body),
            Layout::Nested(key) if !body.is_empty() => {
                out.insert(key.to_string(), JsonValue::Object(body));
            }
            Layout::Nested(_) => {}
        }
    }
    out
}

/// Decode an envelope.
///
/// Every key must belong to the envelope: a common field, `dataType` or a
/// key of some variant. Keys owned only by variants other than the one
/// `dataType` selects are dropped. Without `dataType` the payload keys pick
/// an untagged variant, see [`infer_variant`].
pub fn envelope_from_json(
    schema: &'static EnvelopeSchema,
    json: &JsonValue,
) -> Result<Envelope, CodecError> {
    let obj = as_object(schema.name, "<root>", schema.name, json)?;
    check_keys(schema.name, obj, schema.json_keys())?;

    let discriminator = schema.discriminator.json_name;
    let tag = match obj.get(discriminator) {
        None => "",
        Some(JsonValue::String(tag)) => tag.as_str(),
        Some(other) => {
            return Err(CodecError::type_mismatch(
                schema.name,
                discriminator,
                ScalarType::String,
                json_kind(other),
            ));
        }
    };

    let mut common = Record::new(schema.common);
    decode_fields(&mut common, obj)?;

    let mut payload = match tag {
        "" => infer_variant(schema, obj)
            .map_or(Payload::None, |v| Payload::untagged(v, Record::new(v.payload))),
        tag => Payload::for_tag(schema, tag),
    };
    let mut active: Vec<&'static str> = Vec::new();
    if let Payload::Variant { variant, body, .. } = &mut payload {
        active = variant.json_keys();
        match variant.layout {
            Layout::Flat => decode_fields(body, obj)?,
            Layout::Nested(key) => {
                if let Some(nested) = obj.get(key) {
                    as_object(schema.name, key, variant.payload.name, nested)?;
                    *body = from_json(variant.payload, nested)?;
                }
            }
        }
    }

    let dropped: Vec<&str> = obj
        .keys()
        .map(String::as_str)
        .filter(|k| {
            *k != discriminator
                && schema.common.field_index(k).is_none()
                && !active.iter().any(|a| a == k)
        })
        .collect();
    if !dropped.is_empty() {
        tracing::debug!(
            envelope = schema.name,
            data_type = %tag,
            variant = ?payload.variant().map(|v| v.tag),
            ?dropped,
            "dropping keys of inactive variants"
        );
    }

    Envelope::from_parts(schema, common, payload)
}

/// Variant of an envelope without `dataType`, picked from its payload keys:
/// the first case (table order) owning all of them, else the first owning
/// any. `None` when only common keys are present.
fn infer_variant(schema: &EnvelopeSchema, obj: &JsonObject) -> Option<&'static Variant> {
    let keys: Vec<&str> = obj
        .keys()
        .map(String::as_str)
        .filter(|k| *k != schema.discriminator.json_name && schema.common.field_index(k).is_none())
        .collect();
    if keys.is_empty() {
        return None;
    }
    fn owns(owned: &[&str], key: &str) -> bool {
        owned.iter().any(|o| *o == key)
    }
    let cases: Vec<(&'static Variant, Vec<&'static str>)> =
        schema.cases().into_iter().map(|v| (v, v.json_keys())).collect();
    cases
        .iter()
        .find(|(_, owned)| keys.iter().all(|k| owns(owned, k)))
        .or_else(|| cases.iter().find(|(_, owned)| keys.iter().any(|k| owns(owned, k))))
        .map(|(variant, _)| *variant)
}

// ════════════════════════════════════════════════════════════════
//  Bytes
// ════════════════════════════════════════════════════════════════

pub fn encode(record: &Record) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(&JsonValue::Object(to_json(record)))?)
}

pub fn decode(schema: &'static RecordSchema, data: &[u8]) -> Result<Record, CodecError> {
    let json: JsonValue = serde_json::from_slice(data)?;
    from_json(schema, &json)
}

pub fn encode_envelope(envelope: &Envelope) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(&JsonValue::Object(envelope_to_json(envelope)))?)
}

pub fn decode_envelope(
    schema: &'static EnvelopeSchema,
    data: &[u8],
) -> Result<Envelope, CodecError> {
    let json: JsonValue = serde_json::from_slice(data)?;
    envelope_from_json(schema, &json)
}

// ---- FormatSerializer ----

/// JSON [`FormatSerializer`]. Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl FormatSerializer for JsonCodec {
    fn serialize(&self, record: &Record) -> Result<Vec<u8>, CodecError> {
        tracing::trace!(record = record.name(), "json encode");
        encode(record)
    }

    fn deserialize(
        &self,
        schema: &'static RecordSchema,
        data: &[u8],
    ) -> Result<Record, CodecError> {
        tracing::trace!(record = schema.name, bytes = data.len(), "json decode");
        decode(schema, data)
    }

    fn serialize_envelope(&self, envelope: &Envelope) -> Result<Vec<u8>, CodecError> {
        tracing::trace!(
            envelope = envelope.schema().name,
            data_type = %envelope.data_type(),
            "json encode"
        );
        encode_envelope(envelope)
    }

    fn deserialize_envelope(
        &self,
        schema: &'static EnvelopeSchema,
        data: &[u8],
    ) -> Result<Envelope, CodecError> {
        tracing::trace!(envelope = schema.name, bytes = data.len(), "json decode");
        decode_envelope(schema, data)
    }

    fn format(&self) -> DataFormat {
        DataFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reach_api::envelope::Variant;
    use serde_json::json;
    use similar_asserts::assert_eq;

    static LABEL: RecordSchema = RecordSchema {
        name: "Label",
        fields: &[FieldDescriptor::scalar("text", "text", ScalarType::String)],
    };

    static READING: RecordSchema = RecordSchema {
        name: "Reading",
        fields: &[
            FieldDescriptor::scalar("name", "name", ScalarType::String),
            FieldDescriptor::scalar("count", "count", ScalarType::Int32),
            FieldDescriptor::scalar("total", "total", ScalarType::Int64),
            FieldDescriptor::scalar("level", "level", ScalarType::Double),
            FieldDescriptor::scalar("ok", "ok", ScalarType::Bool),
            FieldDescriptor::optional("limit", "limit", ScalarType::Double),
            FieldDescriptor::nested("label", "label", &LABEL),
            FieldDescriptor::repeated("samples", "samples", ScalarType::Float),
            FieldDescriptor::repeated_nested("labels", "labels", &LABEL),
            FieldDescriptor::scalar("localTS", "local_ts", ScalarType::Timestamp),
            FieldDescriptor::scalar("elapsed", "elapsed", ScalarType::Duration),
        ],
    };

    static EMPTY: RecordSchema = RecordSchema { name: "Empty", fields: &[] };

    static PAIR: RecordSchema = RecordSchema {
        name: "Pair",
        fields: &[
            FieldDescriptor::scalar("key", "key", ScalarType::String),
            FieldDescriptor::scalar("value", "value", ScalarType::String),
        ],
    };

    static HEADER: RecordSchema = RecordSchema {
        name: "Packet",
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
            Variant::nested("reading", "reading", &READING, "reading"),
        ],
    };

    #[test]
    fn zero_scalars_are_omitted() {
        let r = Record::new(&READING)
            .with("name", "")
            .unwrap()
            .with("count", 0)
            .unwrap()
            .with("ok", false)
            .unwrap()
            .with("level", 2.5)
            .unwrap();
        assert_eq!(JsonValue::Object(to_json(&r)), json!({"level": 2.5}));
    }

    #[test]
    fn optional_and_nested_zero_are_emitted() {
        let r = Record::new(&READING)
            .with("limit", 0.0)
            .unwrap()
            .with("label", Record::new(&LABEL))
            .unwrap();
        assert_eq!(JsonValue::Object(to_json(&r)), json!({"limit": 0.0, "label": {}}));
        assert_eq!(from_json(&READING, &json!({"limit": 0.0, "label": {}})).unwrap(), r);
    }

    #[test]
    fn optional_null_is_unset() {
        let r = from_json(&READING, &json!({"limit": null})).unwrap();
        assert_eq!(r, Record::new(&READING));
        let err = from_json(&READING, &json!({"level": null})).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { actual: "null", .. }));
    }

    #[test]
    fn zeros_and_empty_arrays_decode_unset() {
        let r = from_json(&READING, &json!({"name": "", "count": 0, "samples": [], "labels": []}))
            .unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn time_fields() {
        let r = from_json(&READING, &json!({"localTS": 1_500, "elapsed": 1.000000002})).unwrap();
        assert_eq!(r.get("localTS"), Some(&Value::Timestamp(1_500)));
        assert_eq!(r.get("elapsed"), Some(&Value::Duration(1.000000002)));
        assert_eq!(
            JsonValue::Object(to_json(&r)),
            json!({"localTS": 1_500, "elapsed": 1.000000002})
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = from_json(&LABEL, &json!({"text": "a", "notAField": 1, "other": 2})).unwrap_err();
        match err {
            CodecError::SchemaViolation { record, unknown, expected } => {
                assert_eq!(record, "Label");
                assert_eq!(unknown, ["notAField", "other"]);
                assert_eq!(expected, ["text"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nested_unknown_keys_are_rejected() {
        let err = from_json(&READING, &json!({"labels": [{"text": "a"}, {"bogus": true}]}))
            .unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation { record: "Label", .. }));
    }

    #[test]
    fn type_mismatches_name_the_field() {
        let cases = [
            (json!({"name": 5}), "name", "integer"),
            (json!({"count": 1.5}), "count", "float"),
            (json!({"count": 3_000_000_000i64}), "count", "integer"),
            (json!({"ok": "yes"}), "ok", "string"),
            (json!({"label": [1]}), "label", "array"),
            (json!({"samples": [1.0, "x"]}), "samples[1]", "string"),
            (json!({"labels": [{}, 7]}), "labels[1]", "integer"),
            (json!({"localTS": 1.5}), "localTS", "float"),
        ];
        for (input, expected_field, expected_actual) in cases {
            match from_json(&READING, &input) {
                Err(CodecError::TypeMismatch { record, field, actual, .. }) => {
                    assert_eq!(record, "Reading");
                    assert_eq!(field, expected_field);
                    assert_eq!(actual, expected_actual);
                }
                other => panic!("{input}: unexpected {other:?}"),
            }
        }
        let err = from_json(&READING, &json!([1, 2])).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { ref field, .. } if field == "<root>"));
    }

    #[test]
    fn floats_accept_integers() {
        let r = from_json(&READING, &json!({"level": 3, "samples": [1, 2.5]})).unwrap();
        assert_eq!(r.f64("level"), 3.0);
        assert_eq!(r.list("samples"), [Value::Float(1.0), Value::Float(2.5)]);
    }

    #[test]
    fn float_fields_hold_single_precision() {
        let r = from_json(&READING, &json!({"samples": [0.1], "level": 0.1})).unwrap();
        assert_eq!(r.list("samples"), [Value::Float(f64::from(0.1f32))]);
        assert_eq!(r.f64("level"), 0.1);
        let again = from_json(&READING, &JsonValue::Object(to_json(&r))).unwrap();
        assert_eq!(again, r);
    }

    #[test]
    fn malformed_bytes() {
        let err = decode(&LABEL, b"{\"text\":").unwrap_err();
        assert!(matches!(err, CodecError::Format(_)));
        let r = decode(&LABEL, br#"{"text":"hi"}"#).unwrap();
        assert_eq!(encode(&r).unwrap(), br#"{"text":"hi"}"#);
    }

    #[test]
    fn envelope_flat_payload() {
        let input = json!({"tag": "t", "dataType": "key-value", "key": "k", "value": "v"});
        let env = envelope_from_json(&PACKET, &input).unwrap();
        assert_eq!(env.data_type(), "key-value");
        assert_eq!(env.common().str("tag"), "t");
        assert_eq!(env.body().map(|b| b.str("value")), Some("v"));
        assert_eq!(JsonValue::Object(envelope_to_json(&env)), input);
    }

    #[test]
    fn envelope_nested_payload() {
        let input = json!({"dataType": "reading", "reading": {"name": "probe", "count": 2}});
        let env = envelope_from_json(&PACKET, &input).unwrap();
        assert_eq!(env.body().map(|b| b.i64("count")), Some(2));
        assert_eq!(JsonValue::Object(envelope_to_json(&env)), input);

        let empty = Envelope::new(&PACKET).with_data_type("reading");
        assert_eq!(JsonValue::Object(envelope_to_json(&empty)), json!({"dataType": "reading"}));
    }

    #[test]
    fn envelope_drops_inactive_variant_keys() {
        let input = json!({"dataType": "ping", "key": "k", "reading": {"name": "x"}});
        let env = envelope_from_json(&PACKET, &input).unwrap();
        assert_eq!(env.body(), Some(&Record::new(&EMPTY)));
        assert_eq!(JsonValue::Object(envelope_to_json(&env)), json!({"dataType": "ping"}));
    }

    #[test]
    fn envelope_unrecognized_and_missing_tags() {
        let env = envelope_from_json(&PACKET, &json!({"dataType": "mystery", "key": "k"})).unwrap();
        assert_eq!(env.payload(), &Payload::Unrecognized("mystery".to_string()));
        assert_eq!(JsonValue::Object(envelope_to_json(&env)), json!({"dataType": "mystery"}));

        let env = envelope_from_json(&PACKET, &json!({"ts": 10})).unwrap();
        assert_eq!(env.payload(), &Payload::None);
        assert_eq!(JsonValue::Object(envelope_to_json(&env)), json!({"ts": 10}));
    }

    #[test]
    fn envelope_without_tag_infers_the_variant() {
        let input = json!({"tag": "t", "key": "k"});
        let env = envelope_from_json(&PACKET, &input).unwrap();
        assert_eq!(env.data_type(), "");
        assert_eq!(env.payload().variant().map(|v| v.tag), Some("key-value"));
        assert_eq!(env.body().map(|b| b.str("key")), Some("k"));
        assert_eq!(JsonValue::Object(envelope_to_json(&env)), input);

        let input = json!({"reading": {"name": "x"}});
        let env = envelope_from_json(&PACKET, &input).unwrap();
        assert_eq!(env.payload().variant().map(|v| v.tag), Some("reading"));
        assert_eq!(env.body().map(|b| b.str("name")), Some("x"));
        assert_eq!(JsonValue::Object(envelope_to_json(&env)), input);

        let mut env = env;
        env.set_data_type("reading");
        assert_eq!(
            JsonValue::Object(envelope_to_json(&env)),
            json!({"dataType": "reading", "reading": {"name": "x"}})
        );
    }

    #[test]
    fn envelope_rejects_foreign_keys_and_bad_tags() {
        let err =
            envelope_from_json(&PACKET, &json!({"dataType": "ping", "bogus": 1})).unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation { record: "Packet", .. }));
        let err = envelope_from_json(&PACKET, &json!({"dataType": 3})).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { ref field, .. } if field == "dataType"));
        let err = envelope_from_json(&PACKET, &json!({"dataType": "reading", "reading": 3}))
            .unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { ref field, .. } if field == "reading"));
    }

    fn non_empty_text() -> impl Strategy<Value = String> {
        "[a-z]{1,8}"
    }

    proptest! {
        #[test]
        fn round_trip_non_zero_fields(
            name in non_empty_text(),
            count in (1i32..=i32::MAX),
            total in prop_oneof![i64::MIN..0i64, 1i64..=i64::MAX],
            level in (1i32..1_000_000).prop_map(|n| f64::from(n) / 8.0),
            labels in proptest::collection::vec(non_empty_text(), 0..4),
            ts in 1i64..(1i64 << 53),
        ) {
            let labels: Vec<Value> = labels
                .into_iter()
                .map(|text| Value::Record(Record::new(&LABEL).with("text", text).unwrap()))
                .collect();
            let r = Record::new(&READING)
                .with("name", name).unwrap()
                .with("count", count).unwrap()
                .with("total", total).unwrap()
                .with("level", level).unwrap()
                .with("ok", true).unwrap()
                .with("labels", labels).unwrap()
                .with("localTS", ts).unwrap();
            let bytes = encode(&r).unwrap();
            prop_assert_eq!(decode(&READING, &bytes).unwrap(), r);
        }
    }
}
