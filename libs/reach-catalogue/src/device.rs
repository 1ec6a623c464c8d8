use reach_api::envelope::{EnvelopeSchema, Variant};
use reach_api::schema::{FieldDescriptor as Field, RecordSchema, ScalarType as T};

use crate::common::{AUDIO_REQUEST, EMPTY_MESSAGE, KEY_VALUE, SEND_TO_CLIENT, STATUS};
use crate::robot::{CAPABILITY_STATES, METRIC, ROBOT_STATE, UR_STATE};
use crate::session::{CONNECTED_CLIENTS, MACHINE_INTERFACES, TEXT_INSTRUCTION};
use crate::vision::{COLOR, COLOR_DEPTH, PREDICTION};

/// Fields every telemetry message carries. Note the `TS` casing of the
/// time keys.
pub static DEVICE_DATA_COMMON: RecordSchema = RecordSchema {
    name: "DeviceData",
    fields: &[
        Field::scalar("tag", "tag", T::String),
        Field::scalar("ts", "ts", T::Timestamp),
        Field::scalar("localTS", "local_ts", T::Timestamp),
        Field::scalar("remoteTS", "remote_ts", T::Timestamp),
        Field::scalar("associatedServerTS", "associated_server_ts", T::Timestamp),
        Field::scalar("deviceType", "device_type", T::String),
        Field::scalar("deviceName", "device_name", T::String),
        Field::scalar("seq", "seq", T::Int64),
        Field::repeated_nested("sendToClients", "send_to_clients", &SEND_TO_CLIENT),
        Field::optional("inhibitFrameSend", "inhibit_frame_send", T::Bool),
    ],
};

/// Telemetry envelope, host to client.
pub static DEVICE_DATA: EnvelopeSchema = EnvelopeSchema {
    name: "DeviceData",
    common: &DEVICE_DATA_COMMON,
    discriminator: Field::scalar("dataType", "data_type", T::String),
    oneof: "payload",
    variants: &[
        Variant::flat("ping", "ping", &EMPTY_MESSAGE),
        Variant::flat("key-value", "key_value", &KEY_VALUE),
        Variant::flat("cmd-status", "cmd_status", &STATUS),
        Variant::flat("color", "color", &COLOR),
        Variant::flat("color-depth", "color_depth", &COLOR_DEPTH),
        Variant::flat("robot-state", "robot_state", &ROBOT_STATE),
        Variant::flat("ur-state", "ur_state", &UR_STATE),
        Variant::flat("sensor-state", "sensor_state", &CAPABILITY_STATES),
        Variant::flat("output-state", "output_state", &CAPABILITY_STATES),
        Variant::nested(
            "connected-clients",
            "connected_clients",
            &CONNECTED_CLIENTS,
            "connectedClients",
        ),
        Variant::nested(
            "machine-interfaces",
            "machine_interfaces",
            &MACHINE_INTERFACES,
            "machineInterfaces",
        ),
        Variant::nested(
            "text-instruction",
            "text_instruction",
            &TEXT_INSTRUCTION,
            "textInstruction",
        ),
        Variant::flat("metric", "metric", &METRIC),
        Variant::flat("prediction", "prediction", &PREDICTION),
        Variant::nested(
            "audio-request-mute",
            "audio_request_mute",
            &AUDIO_REQUEST,
            "audioRequestMute",
        ),
        Variant::nested(
            "audio-request-unmute",
            "audio_request_unmute",
            &AUDIO_REQUEST,
            "audioRequestUnmute",
        ),
    ],
};
