use crate::error::CodecError;
use crate::record::Record;
use crate::schema::{FieldDescriptor, RecordSchema};
use crate::value::Value;

// ════════════════════════════════════════════════════════════════
//  Discriminator Map
// ════════════════════════════════════════════════════════════════

/// Where a variant's payload fields live in the JSON envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Payload fields sit at the top level under their own JSON names.
    Flat,
    /// Payload is one JSON object under this key.
    Nested(&'static str),
}

/// One discriminator value of an envelope.
///
/// Several tags may share a oneof case; they must then share the payload
/// schema, since the case fixes the proto message type.
pub struct Variant {
    /// Discriminator value, e.g. `"key-value"`.
    pub tag: &'static str,
    /// Proto oneof case (field name), e.g. `"key_value"`.
    pub case: &'static str,
    /// Proto message type of the case.
    pub payload: &'static RecordSchema,
    pub layout: Layout,
}

impl Variant {
    pub const fn flat(
        tag: &'static str,
        case: &'static str,
        payload: &'static RecordSchema,
    ) -> Self {
        Self { tag, case, payload, layout: Layout::Flat }
    }

    pub const fn nested(
        tag: &'static str,
        case: &'static str,
        payload: &'static RecordSchema,
        json_name: &'static str,
    ) -> Self {
        Self { tag, case, payload, layout: Layout::Nested(json_name) }
    }

    /// Top-level JSON keys owned by this variant.
    pub fn json_keys(&self) -> Vec<&'static str> {
        match self.layout {
            Layout::Flat => self.payload.json_names().collect(),
            Layout::Nested(key) => vec![key],
        }
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.case == other.case
    }
}

impl std::fmt::Debug for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variant")
            .field("tag", &self.tag)
            .field("case", &self.case)
            .field("payload", &self.payload.name)
            .field("layout", &self.layout)
            .finish()
    }
}

/// Schema of an envelope message: common fields, the discriminator and the
/// variant table.
///
/// On the proto side the envelope is one message named `name` holding the
/// common fields, the discriminator and a oneof `oneof` with one member per
/// distinct case.
#[derive(Debug)]
pub struct EnvelopeSchema {
    pub name: &'static str,
    pub common: &'static RecordSchema,
    pub discriminator: FieldDescriptor,
    pub oneof: &'static str,
    pub variants: &'static [Variant],
}

impl PartialEq for EnvelopeSchema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl EnvelopeSchema {
    pub fn variant(&self, tag: &str) -> Option<&'static Variant> {
        self.variants.iter().find(|v| v.tag == tag)
    }

    /// First variant (table order) mapped to `case`.
    pub fn variant_for_case(&self, case: &str) -> Option<&'static Variant> {
        self.variants.iter().find(|v| v.case == case)
    }

    /// One variant per distinct case, in table order. This is the fixed
    /// enumeration order used when probing a decoded message for its case.
    pub fn cases(&self) -> Vec<&'static Variant> {
        let mut out: Vec<&'static Variant> = Vec::new();
        for v in self.variants {
            if !out.iter().any(|seen| seen.case == v.case) {
                out.push(v);
            }
        }
        out
    }

    /// Every JSON key the envelope recognizes: common fields, the
    /// discriminator and the keys of all variants. Deduplicated, in order.
    pub fn json_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.common.json_names().collect();
        keys.push(self.discriminator.json_name);
        for v in self.variants {
            for key in v.json_keys() {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        keys
    }
}

// ════════════════════════════════════════════════════════════════
//  Envelope
// ════════════════════════════════════════════════════════════════

/// Active payload of an envelope. Only one variant's data can exist at a
/// time.
#[derive(Clone, PartialEq)]
pub enum Payload {
    /// No discriminator.
    None,
    /// Discriminator value absent from the variant table. Carries no data.
    Unrecognized(String),
    Variant {
        variant: &'static Variant,
        /// Record of `variant.payload`.
        body: Record,
        /// `false` when the variant was inferred from the payload alone and
        /// no discriminator was on the wire.
        tagged: bool,
    },
}

impl Payload {
    /// Payload for `tag` with an empty body, or `Unrecognized`.
    pub fn for_tag(schema: &EnvelopeSchema, tag: &str) -> Self {
        if tag.is_empty() {
            return Payload::None;
        }
        match schema.variant(tag) {
            Some(variant) => Payload::Variant {
                variant,
                body: Record::new(variant.payload),
                tagged: true,
            },
            None => Payload::Unrecognized(tag.to_string()),
        }
    }

    /// Payload of `variant` that carries no discriminator.
    pub fn untagged(variant: &'static Variant, body: Record) -> Self {
        Payload::Variant { variant, body, tagged: false }
    }

    /// Discriminator value written to the wire.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Payload::None => None,
            Payload::Unrecognized(tag) => Some(tag),
            Payload::Variant { variant, tagged: true, .. } => Some(variant.tag),
            Payload::Variant { tagged: false, .. } => None,
        }
    }

    /// Active variant, tagged or not.
    pub fn variant(&self) -> Option<&'static Variant> {
        match self {
            Payload::Variant { variant, .. } => Some(variant),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::None => write!(f, "None"),
            Payload::Unrecognized(tag) => f.debug_tuple("Unrecognized").field(tag).finish(),
            Payload::Variant { variant, body, tagged } => f
                .debug_struct("Variant")
                .field("tag", &variant.tag)
                .field("tagged", tagged)
                .field("body", body)
                .finish(),
        }
    }
}

/// Command or telemetry envelope: common fields plus one payload selected by
/// the discriminator.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    schema: &'static EnvelopeSchema,
    common: Record,
    payload: Payload,
}

impl Envelope {
    pub fn new(schema: &'static EnvelopeSchema) -> Self {
        Self {
            schema,
            common: Record::new(schema.common),
            payload: Payload::None,
        }
    }

    /// Assemble an envelope from decoded parts.
    pub fn from_parts(
        schema: &'static EnvelopeSchema,
        common: Record,
        payload: Payload,
    ) -> Result<Self, CodecError> {
        if common.schema() != schema.common {
            return Err(CodecError::type_mismatch(
                schema.name,
                "<common>",
                schema.common.name,
                "record",
            ));
        }
        if let Payload::Variant { variant, body, .. } = &payload {
            if schema.variant(variant.tag) != Some(*variant) || body.schema() != variant.payload {
                return Err(CodecError::type_mismatch(
                    schema.name,
                    variant.tag,
                    variant.payload.name,
                    "record",
                ));
            }
        }
        Ok(Self { schema, common, payload })
    }

    pub fn schema(&self) -> &'static EnvelopeSchema {
        self.schema
    }

    pub fn common(&self) -> &Record {
        &self.common
    }

    pub fn common_mut(&mut self) -> &mut Record {
        &mut self.common
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_parts(self) -> (Record, Payload) {
        (self.common, self.payload)
    }

    /// Discriminator value, `""` when unset.
    pub fn data_type(&self) -> &str {
        self.payload.tag().unwrap_or_default()
    }

    /// Select the active variant. Switching to a different tag discards the
    /// current payload; naming the variant of an untagged payload tags it.
    pub fn set_data_type(&mut self, tag: &str) {
        match &mut self.payload {
            Payload::Variant { variant, tagged, .. } if variant.tag == tag => *tagged = true,
            payload if payload.tag().unwrap_or_default() == tag => {}
            payload => *payload = Payload::for_tag(self.schema, tag),
        }
    }

    pub fn with_data_type(mut self, tag: &str) -> Self {
        self.set_data_type(tag);
        self
    }

    /// Active variant's payload record.
    pub fn body(&self) -> Option<&Record> {
        match &self.payload {
            Payload::Variant { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn body_mut(&mut self) -> Option<&mut Record> {
        match &mut self.payload {
            Payload::Variant { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Set a field by its JSON name.
    ///
    /// Routes to the discriminator, a common field, a field of a flat active
    /// payload, or (for a nested payload) replaces the body with the given
    /// record. Fields of inactive variants are rejected.
    pub fn set(&mut self, json_name: &str, value: impl Into<Value>) -> Result<(), CodecError> {
        let value = value.into();
        if json_name == self.schema.discriminator.json_name {
            return match value {
                Value::String(tag) => {
                    self.set_data_type(&tag);
                    Ok(())
                }
                v => Err(CodecError::type_mismatch(
                    self.schema.name,
                    json_name,
                    "string",
                    v.kind_name(),
                )),
            };
        }
        if self.schema.common.field_index(json_name).is_some() {
            return self.common.set(json_name, value);
        }
        let name = self.schema.name;
        match &mut self.payload {
            Payload::Variant { variant, body, .. } => match variant.layout {
                Layout::Flat if body.schema().field_index(json_name).is_some() => {
                    body.set(json_name, value)
                }
                Layout::Flat => Err(CodecError::unknown_field(name, json_name)),
                Layout::Nested(key) if key == json_name => match value {
                    Value::Record(r) if r.schema() == variant.payload => {
                        *body = r;
                        Ok(())
                    }
                    v => Err(CodecError::type_mismatch(
                        name,
                        json_name,
                        variant.payload.name,
                        v.kind_name(),
                    )),
                },
                Layout::Nested(_) => Err(CodecError::unknown_field(name, json_name)),
            },
            _ => Err(CodecError::unknown_field(name, json_name)),
        }
    }

    pub fn with(mut self, json_name: &str, value: impl Into<Value>) -> Result<Self, CodecError> {
        self.set(json_name, value)?;
        Ok(self)
    }

    /// Common field, or field of a flat active payload. Nested payloads are
    /// reached through [`Envelope::body`].
    pub fn get(&self, json_name: &str) -> Option<&Value> {
        if self.schema.common.field_index(json_name).is_some() {
            return self.common.get(json_name);
        }
        match &self.payload {
            Payload::Variant { variant, body, .. } if variant.layout == Layout::Flat => {
                body.get(json_name)
            }
            _ => None,
        }
    }
}
