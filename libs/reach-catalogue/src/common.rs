//! Small records shared by several payloads.

use reach_api::schema::{FieldDescriptor as Field, RecordSchema, ScalarType as T};

pub static KEY_VALUE: RecordSchema = RecordSchema {
    name: "KeyValue",
    fields: &[
        Field::scalar("key", "key", T::String),
        Field::scalar("value", "value", T::String),
        Field::scalar("intValue", "int_value", T::Int64),
        Field::scalar("floatValue", "float_value", T::Double),
    ],
};

/// Named setting with one typed value.
pub static FLAG: RecordSchema = RecordSchema {
    name: "Flag",
    fields: &[
        Field::scalar("name", "name", T::String),
        Field::scalar("boolValue", "bool_value", T::Bool),
        Field::scalar("intValue", "int_value", T::Int64),
        Field::scalar("floatValue", "float_value", T::Double),
        Field::scalar("stringValue", "string_value", T::String),
    ],
};

/// Reference to an earlier device message by timestamp and sequence.
pub static DEVICE_DATA_REF: RecordSchema = RecordSchema {
    name: "DeviceDataRef",
    fields: &[
        Field::scalar("ts", "ts", T::Timestamp),
        Field::scalar("seq", "seq", T::Int64),
    ],
};

/// Command progress report.
pub static STATUS: RecordSchema = RecordSchema {
    name: "Status",
    fields: &[
        Field::scalar("status", "status", T::String),
        Field::scalar("script", "script", T::String),
        Field::scalar("error", "error", T::String),
        Field::scalar("progress", "progress", T::Double),
        Field::scalar("message", "message", T::String),
        Field::scalar("code", "code", T::Int64),
    ],
};

pub static SEND_TO_CLIENT: RecordSchema = RecordSchema {
    name: "SendToClient",
    fields: &[
        Field::scalar("uid", "uid", T::String),
        Field::scalar("tag", "tag", T::String),
    ],
};

pub static VEC3: RecordSchema = RecordSchema {
    name: "Vec3",
    fields: &[
        Field::scalar("x", "x", T::Double),
        Field::scalar("y", "y", T::Double),
        Field::scalar("z", "z", T::Double),
    ],
};

pub static QUATERNION: RecordSchema = RecordSchema {
    name: "Quaternion",
    fields: &[
        Field::scalar("w", "w", T::Double),
        Field::scalar("x", "x", T::Double),
        Field::scalar("y", "y", T::Double),
        Field::scalar("z", "z", T::Double),
    ],
};

/// Payload of marker variants such as `ping`.
pub static EMPTY_MESSAGE: RecordSchema = RecordSchema { name: "EmptyMessage", fields: &[] };

pub static AUDIO_REQUEST: RecordSchema = RecordSchema {
    name: "AudioRequest",
    fields: &[Field::scalar("textCue", "text_cue", T::String)],
};
