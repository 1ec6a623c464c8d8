use crate::record::Record;
use crate::schema::ScalarType;

/// In-process field value.
///
/// Integers and floats are held at full width regardless of the declared
/// scalar type; narrowing happens at the protobuf boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Unix epoch milliseconds.
    Timestamp(i64),
    /// Seconds.
    Duration(f64),
    Record(Record),
    List(Vec<Value>),
}

impl Value {
    /// Zero value of a scalar type.
    pub fn zero(ty: ScalarType) -> Value {
        match ty {
            ScalarType::Bool => Value::Bool(false),
            ScalarType::Int32 | ScalarType::Int64 => Value::Int(0),
            ScalarType::Float | ScalarType::Double => Value::Float(0.0),
            ScalarType::String => Value::String(String::new()),
            ScalarType::Timestamp => Value::Timestamp(0),
            ScalarType::Duration => Value::Duration(0.0),
        }
    }

    /// `""`, `0`, `0.0`, `false` and `[]`. Records are never zero: a present
    /// nested record is a value even when all of its fields are unset.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Bool(b) => !b,
            Value::Int(i) | Value::Timestamp(i) => *i == 0,
            Value::Float(f) | Value::Duration(f) => *f == 0.0,
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Record(_) => false,
        }
    }

    /// Name of the runtime kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Timestamp(_) => "timestamp",
            Value::Duration(_) => "duration",
            Value::Record(_) => "record",
            Value::List(_) => "list",
        }
    }

    /// Coerce into the representation of `ty`, or hand the value back.
    ///
    /// Integers widen to floats, timestamps and durations; integers must fit
    /// `i32` for [`ScalarType::Int32`]. [`ScalarType::Float`] values are
    /// rounded to `f32` precision, the width they have on the wire.
    pub fn coerce(self, ty: ScalarType) -> Result<Value, Value> {
        match (ty, self) {
            (ScalarType::Bool, v @ Value::Bool(_)) => Ok(v),
            (ScalarType::Int32, Value::Int(i)) if i32::try_from(i).is_ok() => Ok(Value::Int(i)),
            (ScalarType::Int64, v @ Value::Int(_)) => Ok(v),
            (ScalarType::Float, Value::Float(f)) => Ok(Value::Float(f64::from(f as f32))),
            (ScalarType::Float, Value::Int(i)) => Ok(Value::Float(f64::from(i as f32))),
            (ScalarType::Double, v @ Value::Float(_)) => Ok(v),
            (ScalarType::Double, Value::Int(i)) => Ok(Value::Float(i as f64)),
            (ScalarType::String, v @ Value::String(_)) => Ok(v),
            (ScalarType::Timestamp, v @ Value::Timestamp(_)) => Ok(v),
            (ScalarType::Timestamp, Value::Int(i)) => Ok(Value::Timestamp(i)),
            (ScalarType::Duration, v @ Value::Duration(_)) => Ok(v),
            (ScalarType::Duration, Value::Float(f)) => Ok(Value::Duration(f)),
            (ScalarType::Duration, Value::Int(i)) => Ok(Value::Duration(i as f64)),
            (_, v) => Err(v),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) | Value::Timestamp(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) | Value::Duration(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
