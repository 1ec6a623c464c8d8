use reach_api::envelope::{EnvelopeSchema, Variant};
use reach_api::schema::{FieldDescriptor as Field, RecordSchema, ScalarType as T};

use crate::common::{EMPTY_MESSAGE, KEY_VALUE};
use crate::script::{REACH_SCRIPT, RUN_SCRIPT};
use crate::session::{
    CLIENT_ANNOTATION, INFERENCE_REQUEST, KEY_VALUE_REQUEST, POINTER_EVENT, SESSION_INFO,
};
use crate::snapshot::SNAPSHOT;

/// Fields every command carries, whatever its `dataType`. The logger's
/// `event` / `event-start` commands have no payload case and use the
/// `event*` fields here; `eventDuration` is in seconds.
pub static COMMAND_DATA_COMMON: RecordSchema = RecordSchema {
    name: "CommandData",
    fields: &[
        Field::scalar("tag", "tag", T::String),
        Field::scalar("ts", "ts", T::Timestamp),
        Field::scalar("deviceType", "device_type", T::String),
        Field::scalar("deviceName", "device_name", T::String),
        Field::scalar("seq", "seq", T::Int64),
        Field::scalar("originClient", "origin_client", T::String),
        Field::scalar("cmd", "cmd", T::String),
        Field::repeated("args", "args", T::String),
        Field::scalar("intent", "intent", T::String),
        Field::scalar("pickId", "pick_id", T::String),
        Field::scalar("successType", "success_type", T::String),
        Field::nested("snapshot", "snapshot", &SNAPSHOT),
        Field::scalar("eventName", "event_name", T::String),
        Field::scalar("eventDuration", "event_duration", T::Duration),
        Field::repeated_nested("eventParams", "event_params", &KEY_VALUE),
    ],
};

/// Command envelope, client to host.
pub static COMMAND_DATA: EnvelopeSchema = EnvelopeSchema {
    name: "CommandData",
    common: &COMMAND_DATA_COMMON,
    discriminator: Field::scalar("dataType", "data_type", T::String),
    oneof: "payload",
    variants: &[
        Variant::flat("ping", "ping", &EMPTY_MESSAGE),
        Variant::flat("frame-request", "frame_request", &EMPTY_MESSAGE),
        Variant::flat("connected-clients-request", "connected_clients_request", &EMPTY_MESSAGE),
        Variant::flat("machine-interfaces-request", "machine_interfaces_request", &EMPTY_MESSAGE),
        Variant::flat("text-instruction-request", "text_instruction_request", &EMPTY_MESSAGE),
        Variant::flat("cancel", "cancel", &EMPTY_MESSAGE),
        Variant::flat("key-value-request", "key_value_request", &KEY_VALUE_REQUEST),
        Variant::flat("key-value", "key_value", &KEY_VALUE),
        Variant::nested("reach-script", "reach_script", &REACH_SCRIPT, "reachScript"),
        Variant::flat("run-script", "run_script", &RUN_SCRIPT),
        Variant::flat("pointer-event", "pointer_event", &POINTER_EVENT),
        Variant::flat("inference-request", "inference_request", &INFERENCE_REQUEST),
        Variant::nested(
            "client-annotation",
            "client_annotation",
            &CLIENT_ANNOTATION,
            "clientAnnotation",
        ),
        Variant::nested("session-info", "session_info", &SESSION_INFO, "sessionInfo"),
    ],
};
