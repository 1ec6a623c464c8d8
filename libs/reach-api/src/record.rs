use crate::error::CodecError;
use crate::schema::{FieldDescriptor, FieldKind, RecordSchema};
use crate::value::Value;

/// Typed record: one slot per schema field, position-aligned with
/// `schema.fields`.
///
/// An unset slot is the field's zero value. Every value stored is validated
/// against the field kind, so codecs can trust the slot contents. Records are
/// plain values: cloned, compared structurally, never shared.
#[derive(Clone)]
pub struct Record {
    schema: &'static RecordSchema,
    slots: Vec<Option<Value>>,
}

impl Record {
    /// Record with every field at its zero value.
    pub fn new(schema: &'static RecordSchema) -> Self {
        Self {
            schema,
            slots: vec![None; schema.fields.len()],
        }
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn get(&self, json_name: &str) -> Option<&Value> {
        self.schema
            .field_index(json_name)
            .and_then(|i| self.slots[i].as_ref())
    }

    pub fn slot(&self, index: usize) -> Option<&Value> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn set(&mut self, json_name: &str, value: impl Into<Value>) -> Result<(), CodecError> {
        let index = self
            .schema
            .field_index(json_name)
            .ok_or_else(|| CodecError::unknown_field(self.schema.name, json_name))?;
        self.set_slot(index, value.into())
    }

    /// Builder form of [`Record::set`].
    pub fn with(mut self, json_name: &str, value: impl Into<Value>) -> Result<Self, CodecError> {
        self.set(json_name, value)?;
        Ok(self)
    }

    /// Validate `value` against the field at `index` and store it.
    /// An empty list is stored as unset.
    pub fn set_slot(&mut self, index: usize, value: Value) -> Result<(), CodecError> {
        let field = self.schema.fields.get(index).ok_or_else(|| {
            CodecError::unknown_field(self.schema.name, format!("#{index}"))
        })?;
        let value = check(self.schema, field, value)?;
        self.slots[index] = match value {
            Value::List(items) if items.is_empty() => None,
            v => Some(v),
        };
        Ok(())
    }

    pub fn clear(&mut self, json_name: &str) -> Result<(), CodecError> {
        let index = self
            .schema
            .field_index(json_name)
            .ok_or_else(|| CodecError::unknown_field(self.schema.name, json_name))?;
        self.slots[index] = None;
        Ok(())
    }

    /// All fields in schema order with their current value.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDescriptor, Option<&Value>)> + '_ {
        self.schema.fields.iter().zip(self.slots.iter().map(Option::as_ref))
    }

    /// Set fields only, in schema order.
    pub fn set_fields(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &Value)> + '_ {
        self.fields().filter_map(|(f, v)| v.map(|v| (f, v)))
    }

    // ── typed getters: zero value when unset or unknown ──

    pub fn str(&self, json_name: &str) -> &str {
        self.get(json_name).and_then(Value::as_str).unwrap_or_default()
    }

    pub fn bool(&self, json_name: &str) -> bool {
        self.get(json_name).and_then(Value::as_bool).unwrap_or_default()
    }

    pub fn i64(&self, json_name: &str) -> i64 {
        self.get(json_name).and_then(Value::as_i64).unwrap_or_default()
    }

    pub fn f64(&self, json_name: &str) -> f64 {
        self.get(json_name).and_then(Value::as_f64).unwrap_or_default()
    }

    pub fn record(&self, json_name: &str) -> Option<&Record> {
        self.get(json_name).and_then(Value::as_record)
    }

    pub fn list(&self, json_name: &str) -> &[Value] {
        self.get(json_name).and_then(Value::as_list).unwrap_or_default()
    }
}

fn check(
    schema: &'static RecordSchema,
    field: &FieldDescriptor,
    value: Value,
) -> Result<Value, CodecError> {
    let mismatch = |actual: &Value| {
        CodecError::type_mismatch(schema.name, field.json_name, field.kind, actual.kind_name())
    };
    match field.kind {
        FieldKind::Scalar(ty) | FieldKind::OptionalScalar(ty) => {
            value.coerce(ty).map_err(|v| mismatch(&v))
        }
        FieldKind::Nested(nested) => match value {
            Value::Record(r) if r.schema == nested => Ok(Value::Record(r)),
            v => Err(mismatch(&v)),
        },
        FieldKind::RepeatedScalar(ty) => match value {
            Value::List(items) => items
                .into_iter()
                .map(|item| item.coerce(ty).map_err(|v| mismatch(&v)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            v => Err(mismatch(&v)),
        },
        FieldKind::RepeatedNested(nested) => match value {
            Value::List(items) => {
                if let Some(bad) = items
                    .iter()
                    .find(|item| !matches!(item, Value::Record(r) if r.schema == nested))
                {
                    return Err(mismatch(bad));
                }
                Ok(Value::List(items))
            }
            v => Err(mismatch(&v)),
        },
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema && self.slots == other.slots
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct(self.schema.name);
        for (field, value) in self.set_fields() {
            s.field(field.json_name, value);
        }
        s.finish()
    }
}
