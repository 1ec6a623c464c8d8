//! Record and envelope schemas of the Reach logging protocol.
//!
//! Everything here is static data; the codecs in `reach-format-json` and
//! `reach-format-protobuf` interpret it.

pub mod command;
pub mod common;
pub mod device;
pub mod robot;
pub mod script;
pub mod session;
pub mod snapshot;
pub mod vision;

use reach_api::envelope::EnvelopeSchema;
use reach_api::schema::RecordSchema;

pub use command::COMMAND_DATA;
pub use device::DEVICE_DATA;

static RECORDS: &[&RecordSchema] = &[
    // common
    &common::KEY_VALUE,
    &common::FLAG,
    &common::DEVICE_DATA_REF,
    &common::STATUS,
    &common::SEND_TO_CLIENT,
    &common::VEC3,
    &common::QUATERNION,
    &common::EMPTY_MESSAGE,
    &common::AUDIO_REQUEST,
    // robot
    &robot::CAPABILITY_STATE,
    &robot::CAPABILITY_STATES,
    &robot::ANALOG_BANK,
    &robot::DIGITAL_BANK,
    &robot::ROBOT_STATE,
    &robot::UR_STATE,
    &robot::METRIC,
    // vision
    &vision::COLOR,
    &vision::COLOR_DEPTH,
    &vision::PICK_POINT,
    &vision::PREDICTION,
    // session
    &session::CONNECTED_CLIENT,
    &session::CONNECTED_CLIENTS,
    &session::MACHINE_INTERFACE,
    &session::MACHINE_INTERFACES,
    &session::TEXT_INSTRUCTION,
    &session::SESSION_INFO,
    &session::INTERVAL_START,
    &session::INTERVAL_END,
    &session::TEXT_ANNOTATION,
    &session::CLIENT_ANNOTATION,
    &session::POINTER_EVENT,
    &session::INFERENCE_REQUEST,
    &session::KEY_VALUE_REQUEST,
    // script
    &script::MOVE_J_WAYPOINT_ARGS,
    &script::MOVE_J_PATH_ARGS,
    &script::MOVE_L_WAYPOINT_ARGS,
    &script::MOVE_L_PATH_ARGS,
    &script::MOVE_POSE_WAYPOINT_ARGS,
    &script::MOVE_POSE_PATH_ARGS,
    &script::STOP_J_ARGS,
    &script::SET_DIGITAL_OUT_ARGS,
    &script::SET_ANALOG_OUT_ARGS,
    &script::SET_OUTPUT,
    &script::REACH_SCRIPT_COMMAND,
    &script::REACH_SCRIPT_CALIBRATION_REQUIREMENT,
    &script::REACH_SCRIPT,
    &script::RUN_SCRIPT,
    // snapshot
    &snapshot::ARM_ACTION_PARAMS,
    &snapshot::VACUUM_ACTION_PARAMS,
    &snapshot::LOGGER_ACTION_PARAMS,
    &snapshot::GYM_ACTION,
    &snapshot::SNAPSHOT_RESPONSE,
    &snapshot::SNAPSHOT,
];

static ENVELOPES: &[&EnvelopeSchema] = &[&COMMAND_DATA, &DEVICE_DATA];

/// Every leaf record schema.
pub fn records() -> &'static [&'static RecordSchema] {
    RECORDS
}

pub fn envelopes() -> &'static [&'static EnvelopeSchema] {
    ENVELOPES
}

/// Leaf record schema by name.
pub fn record(name: &str) -> Option<&'static RecordSchema> {
    RECORDS.iter().copied().find(|s| s.name == name)
}

/// Envelope schema by name (`"CommandData"`, `"DeviceData"`).
pub fn envelope(name: &str) -> Option<&'static EnvelopeSchema> {
    ENVELOPES.iter().copied().find(|s| s.name == name)
}
