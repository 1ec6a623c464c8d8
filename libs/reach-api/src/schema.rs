use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════
//  Scalar Type
// ════════════════════════════════════════════════════════════════

/// Scalar field types.
///
/// Each codec maps them to its native representation:
/// - JSON: `boolean`, integer, number, string; timestamps as integer
///   milliseconds, durations as floating seconds
/// - Protobuf: `bool`, `int32`, `int64`, `float`, `double`, `string`,
///   `google.protobuf.Timestamp`, `google.protobuf.Duration`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    Bool,
    Int32,
    Int64,
    Float,
    Double,
    String,
    /// Unix epoch milliseconds.
    Timestamp,
    /// Seconds, fractional.
    Duration,
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarType::Bool => write!(f, "bool"),
            ScalarType::Int32 => write!(f, "int32"),
            ScalarType::Int64 => write!(f, "int64"),
            ScalarType::Float => write!(f, "float"),
            ScalarType::Double => write!(f, "double"),
            ScalarType::String => write!(f, "string"),
            ScalarType::Timestamp => write!(f, "timestamp"),
            ScalarType::Duration => write!(f, "duration"),
        }
    }
}

// ════════════════════════════════════════════════════════════════
//  Field Kind
// ════════════════════════════════════════════════════════════════

/// Shape of a field. The kind alone selects the conversion rule used by
/// every codec; there is no per-field special casing.
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// Zero value doubles as "absent" on the JSON side.
    Scalar(ScalarType),
    /// Zero value is "unset"; an explicit zero is a real value.
    OptionalScalar(ScalarType),
    Nested(&'static RecordSchema),
    RepeatedScalar(ScalarType),
    RepeatedNested(&'static RecordSchema),
}

impl FieldKind {
    pub fn is_repeated(&self) -> bool {
        matches!(self, FieldKind::RepeatedScalar(_) | FieldKind::RepeatedNested(_))
    }

    /// Scalar type of the field or of its elements. `None` for record kinds.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            FieldKind::Scalar(t) | FieldKind::OptionalScalar(t) | FieldKind::RepeatedScalar(t) => {
                Some(*t)
            }
            FieldKind::Nested(_) | FieldKind::RepeatedNested(_) => None,
        }
    }

    /// Schema of the field or of its elements. `None` for scalar kinds.
    pub fn nested_schema(&self) -> Option<&'static RecordSchema> {
        match self {
            FieldKind::Nested(s) | FieldKind::RepeatedNested(s) => Some(*s),
            _ => None,
        }
    }
}

// Schemas may reference each other cyclically; print names only.
impl std::fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Scalar(t) => f.debug_tuple("Scalar").field(t).finish(),
            FieldKind::OptionalScalar(t) => f.debug_tuple("OptionalScalar").field(t).finish(),
            FieldKind::Nested(s) => f.debug_tuple("Nested").field(&s.name).finish(),
            FieldKind::RepeatedScalar(t) => f.debug_tuple("RepeatedScalar").field(t).finish(),
            FieldKind::RepeatedNested(s) => f.debug_tuple("RepeatedNested").field(&s.name).finish(),
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Scalar(t) => write!(f, "{t}"),
            FieldKind::OptionalScalar(t) => write!(f, "optional {t}"),
            FieldKind::Nested(s) => write!(f, "{}", s.name),
            FieldKind::RepeatedScalar(t) => write!(f, "repeated {t}"),
            FieldKind::RepeatedNested(s) => write!(f, "repeated {}", s.name),
        }
    }
}

// ════════════════════════════════════════════════════════════════
//  Field Descriptor
// ════════════════════════════════════════════════════════════════

/// Static metadata for one field.
///
/// `json_name` is specified independently of `proto_name` rather than derived
/// by case conversion: the wire protocol has keys like `associatedServerTS`
/// for `associated_server_ts`.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub json_name: &'static str,
    pub proto_name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn scalar(
        json_name: &'static str,
        proto_name: &'static str,
        ty: ScalarType,
    ) -> Self {
        Self { json_name, proto_name, kind: FieldKind::Scalar(ty) }
    }

    pub const fn optional(
        json_name: &'static str,
        proto_name: &'static str,
        ty: ScalarType,
    ) -> Self {
        Self { json_name, proto_name, kind: FieldKind::OptionalScalar(ty) }
    }

    pub const fn nested(
        json_name: &'static str,
        proto_name: &'static str,
        schema: &'static RecordSchema,
    ) -> Self {
        Self { json_name, proto_name, kind: FieldKind::Nested(schema) }
    }

    pub const fn repeated(
        json_name: &'static str,
        proto_name: &'static str,
        ty: ScalarType,
    ) -> Self {
        Self { json_name, proto_name, kind: FieldKind::RepeatedScalar(ty) }
    }

    pub const fn repeated_nested(
        json_name: &'static str,
        proto_name: &'static str,
        schema: &'static RecordSchema,
    ) -> Self {
        Self { json_name, proto_name, kind: FieldKind::RepeatedNested(schema) }
    }
}

// ════════════════════════════════════════════════════════════════
//  Record Schema
// ════════════════════════════════════════════════════════════════

/// Ordered, fixed field list of one message kind.
///
/// Field position in `fields` is the slot index in [`crate::record::Record`]
/// and determines the proto field number (`index + 1`), so fields may only be
/// appended.
#[derive(Debug)]
pub struct RecordSchema {
    /// Record name; also the proto message name.
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl RecordSchema {
    pub fn field_index(&self, json_name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.json_name == json_name)
    }

    pub fn field(&self, json_name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.json_name == json_name)
    }

    pub fn field_by_proto_name(&self, proto_name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.proto_name == proto_name)
    }

    /// Recognized JSON keys, in schema order.
    pub fn json_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.json_name)
    }
}

impl PartialEq for RecordSchema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RecordSchema {}
