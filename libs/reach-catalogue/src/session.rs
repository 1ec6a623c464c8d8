//! Client sessions, annotations and operator interaction.

use reach_api::schema::{FieldDescriptor as Field, RecordSchema, ScalarType as T};

pub static CONNECTED_CLIENT: RecordSchema = RecordSchema {
    name: "ConnectedClient",
    fields: &[
        Field::scalar("uid", "uid", T::String),
        Field::scalar("isCurrent", "is_current", T::Bool),
        Field::scalar("controlSessionActive", "control_session_active", T::Bool),
    ],
};

pub static CONNECTED_CLIENTS: RecordSchema = RecordSchema {
    name: "ConnectedClients",
    fields: &[Field::repeated_nested("clients", "clients", &CONNECTED_CLIENT)],
};

/// Device interface advertised by the host.
pub static MACHINE_INTERFACE: RecordSchema = RecordSchema {
    name: "MachineInterface",
    fields: &[
        Field::scalar("pyType", "py_type", T::String),
        Field::scalar("deviceType", "device_type", T::String),
        Field::scalar("deviceName", "device_name", T::String),
        Field::scalar("dataType", "data_type", T::String),
        Field::repeated("keys", "keys", T::String),
    ],
};

pub static MACHINE_INTERFACES: RecordSchema = RecordSchema {
    name: "MachineInterfaces",
    fields: &[Field::repeated_nested("interfaces", "interfaces", &MACHINE_INTERFACE)],
};

pub static TEXT_INSTRUCTION: RecordSchema = RecordSchema {
    name: "TextInstruction",
    fields: &[
        Field::scalar("intent", "intent", T::String),
        Field::scalar("successType", "success_type", T::String),
        Field::scalar("successDetection", "success_detection", T::String),
        Field::scalar("instruction", "instruction", T::String),
        Field::scalar("uid", "uid", T::String),
    ],
};

pub static SESSION_INFO: RecordSchema = RecordSchema {
    name: "SessionInfo",
    fields: &[Field::scalar("sessionId", "session_id", T::String)],
};

pub static INTERVAL_START: RecordSchema = RecordSchema {
    name: "IntervalStart",
    fields: &[Field::scalar("name", "name", T::String)],
};

pub static INTERVAL_END: RecordSchema = RecordSchema {
    name: "IntervalEnd",
    fields: &[
        Field::scalar("name", "name", T::String),
        Field::scalar("startTS", "start_ts", T::Timestamp),
        Field::scalar("endTS", "end_ts", T::Timestamp),
    ],
};

pub static TEXT_ANNOTATION: RecordSchema = RecordSchema {
    name: "TextAnnotation",
    fields: &[
        Field::scalar("category", "category", T::String),
        Field::scalar("text", "text", T::String),
    ],
};

/// Operator annotation of a logged interval. One of the three parts is set.
pub static CLIENT_ANNOTATION: RecordSchema = RecordSchema {
    name: "ClientAnnotation",
    fields: &[
        Field::nested("intervalStart", "interval_start", &INTERVAL_START),
        Field::nested("intervalEnd", "interval_end", &INTERVAL_END),
        Field::nested("textAnnotation", "text_annotation", &TEXT_ANNOTATION),
    ],
};

pub static POINTER_EVENT: RecordSchema = RecordSchema {
    name: "PointerEvent",
    fields: &[
        Field::scalar("x", "x", T::Int32),
        Field::scalar("y", "y", T::Int32),
    ],
};

pub static INFERENCE_REQUEST: RecordSchema = RecordSchema {
    name: "InferenceRequest",
    fields: &[
        Field::scalar("robotId", "robot_id", T::String),
        Field::scalar("requestType", "request_type", T::String),
        Field::scalar("taskCode", "task_code", T::String),
        Field::scalar("predictionType", "prediction_type", T::String),
        Field::scalar("label", "label", T::String),
    ],
};

pub static KEY_VALUE_REQUEST: RecordSchema = RecordSchema {
    name: "KeyValueRequest",
    fields: &[Field::scalar("key", "key", T::String)],
};
