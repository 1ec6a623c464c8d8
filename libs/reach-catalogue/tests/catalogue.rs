mod support;

use std::collections::HashSet;

use reach_api::envelope::Layout;
use reach_api::error::CodecError;
use reach_api::schema::RecordSchema;
use reach_catalogue::{envelopes, records};
use reach_format_json::{envelope_from_json, from_json};
use serde_json::json;

fn all_schemas() -> Vec<&'static RecordSchema> {
    let mut schemas = records().to_vec();
    schemas.extend(envelopes().iter().map(|e| e.common));
    schemas
}

#[test]
fn names_are_unique_per_schema() {
    for schema in all_schemas() {
        let json: HashSet<_> = schema.fields.iter().map(|f| f.json_name).collect();
        let proto: HashSet<_> = schema.fields.iter().map(|f| f.proto_name).collect();
        assert_eq!(json.len(), schema.fields.len(), "{}: duplicate json name", schema.name);
        assert_eq!(proto.len(), schema.fields.len(), "{}: duplicate proto name", schema.name);
    }
}

#[test]
fn record_names_are_unique() {
    let names: HashSet<_> = records().iter().map(|s| s.name).collect();
    assert_eq!(names.len(), records().len());
}

#[test]
fn flat_variants_do_not_shadow_common_keys() {
    for envelope in envelopes() {
        let mut reserved: Vec<_> = envelope.common.json_names().collect();
        reserved.push(envelope.discriminator.json_name);
        for variant in envelope.variants {
            for key in variant.json_keys() {
                assert!(
                    !reserved.contains(&key),
                    "{}: '{}' key '{key}' collides with a common field",
                    envelope.name,
                    variant.tag
                );
            }
        }
    }
}

#[test]
fn variant_table_is_consistent() {
    for envelope in envelopes() {
        let tags: HashSet<_> = envelope.variants.iter().map(|v| v.tag).collect();
        assert_eq!(tags.len(), envelope.variants.len(), "{}: duplicate tag", envelope.name);
        for variant in envelope.variants {
            let owner = envelope.variant_for_case(variant.case).unwrap();
            assert_eq!(owner.payload, variant.payload, "{}: case {}", envelope.name, variant.case);
            if let Layout::Nested(key) = variant.layout {
                assert!(!key.is_empty());
            }
        }
    }
}

#[test]
fn descriptor_pool_builds() {
    let codec = support::codec();
    for schema in records() {
        codec.message_descriptor(schema.name).unwrap();
    }
    for envelope in envelopes() {
        let descriptor = codec.message_descriptor(envelope.name).unwrap();
        let oneof = descriptor.oneofs().next().unwrap();
        assert_eq!(oneof.name(), "payload");
        assert_eq!(oneof.fields().count(), envelope.cases().len());
    }
}

#[test]
fn unknown_keys_are_rejected_everywhere() {
    let input = json!({"notAField": 1});
    for schema in records() {
        let err = from_json(schema, &input).unwrap_err();
        assert!(
            matches!(&err, CodecError::SchemaViolation { record, unknown, .. }
                if *record == schema.name && unknown == &["notAField"]),
            "{}: {err}",
            schema.name
        );
    }
    for envelope in envelopes() {
        let err = envelope_from_json(envelope, &input).unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation { .. }), "{}", envelope.name);
    }
}
