//! Reach scripts: ordered arm and I/O commands run by a controller.

use reach_api::schema::{FieldDescriptor as Field, RecordSchema, ScalarType as T};

use crate::common::{QUATERNION, VEC3};
use crate::robot::CAPABILITY_STATE;

pub static MOVE_J_WAYPOINT_ARGS: RecordSchema = RecordSchema {
    name: "MoveJWaypointArgs",
    fields: &[
        Field::repeated("rotation", "rotation", T::Double),
        Field::scalar("velocity", "velocity", T::Double),
        Field::scalar("acceleration", "acceleration", T::Double),
        Field::scalar("servo", "servo", T::Bool),
        Field::scalar("servoTSecs", "servo_t_secs", T::Double),
        Field::scalar("servoLookaheadTimeSecs", "servo_lookahead_time_secs", T::Double),
        Field::scalar("servoGain", "servo_gain", T::Double),
    ],
};

pub static MOVE_J_PATH_ARGS: RecordSchema = RecordSchema {
    name: "MoveJPathArgs",
    fields: &[Field::repeated_nested("waypoints", "waypoints", &MOVE_J_WAYPOINT_ARGS)],
};

pub static MOVE_L_WAYPOINT_ARGS: RecordSchema = RecordSchema {
    name: "MoveLWaypointArgs",
    fields: &[
        Field::repeated("rotation", "rotation", T::Double),
        Field::scalar("velocity", "velocity", T::Double),
        Field::scalar("acceleration", "acceleration", T::Double),
        Field::scalar("servo", "servo", T::Bool),
    ],
};

pub static MOVE_L_PATH_ARGS: RecordSchema = RecordSchema {
    name: "MoveLPathArgs",
    fields: &[Field::repeated_nested("waypoints", "waypoints", &MOVE_L_WAYPOINT_ARGS)],
};

pub static MOVE_POSE_WAYPOINT_ARGS: RecordSchema = RecordSchema {
    name: "MovePoseWaypointArgs",
    fields: &[
        Field::nested("translation", "translation", &VEC3),
        Field::nested("rotation", "rotation", &QUATERNION),
        Field::scalar("velocity", "velocity", T::Double),
        Field::scalar("acceleration", "acceleration", T::Double),
    ],
};

pub static MOVE_POSE_PATH_ARGS: RecordSchema = RecordSchema {
    name: "MovePosePathArgs",
    fields: &[Field::repeated_nested("waypoints", "waypoints", &MOVE_POSE_WAYPOINT_ARGS)],
};

pub static STOP_J_ARGS: RecordSchema = RecordSchema {
    name: "StopJArgs",
    fields: &[Field::scalar("deceleration", "deceleration", T::Double)],
};

pub static SET_DIGITAL_OUT_ARGS: RecordSchema = RecordSchema {
    name: "SetDigitalOutArgs",
    fields: &[
        Field::scalar("output", "output", T::Int64),
        Field::scalar("value", "value", T::Bool),
    ],
};

pub static SET_ANALOG_OUT_ARGS: RecordSchema = RecordSchema {
    name: "SetAnalogOutArgs",
    fields: &[
        Field::scalar("output", "output", T::Int64),
        Field::scalar("value", "value", T::Double),
    ],
};

pub static SET_OUTPUT: RecordSchema = RecordSchema {
    name: "SetOutput",
    fields: &[
        Field::scalar("pyType", "py_type", T::String),
        Field::scalar("name", "name", T::String),
        Field::repeated_nested("args", "args", &CAPABILITY_STATE),
    ],
};

/// One script step. Exactly one of the command fields is expected to be set.
pub static REACH_SCRIPT_COMMAND: RecordSchema = RecordSchema {
    name: "ReachScriptCommand",
    fields: &[
        Field::scalar("controllerName", "controller_name", T::String),
        Field::nested("moveJPath", "move_j_path", &MOVE_J_PATH_ARGS),
        Field::nested("moveLPath", "move_l_path", &MOVE_L_PATH_ARGS),
        Field::nested("movePosePath", "move_pose_path", &MOVE_POSE_PATH_ARGS),
        Field::nested("stopJ", "stop_j", &STOP_J_ARGS),
        Field::nested("setDigitalOut", "set_digital_out", &SET_DIGITAL_OUT_ARGS),
        Field::nested("setToolDigitalOut", "set_tool_digital_out", &SET_DIGITAL_OUT_ARGS),
        Field::nested("setAnalogOut", "set_analog_out", &SET_ANALOG_OUT_ARGS),
        Field::nested("setOutput", "set_output", &SET_OUTPUT),
    ],
};

pub static REACH_SCRIPT_CALIBRATION_REQUIREMENT: RecordSchema = RecordSchema {
    name: "ReachScriptCalibrationRequirement",
    fields: &[Field::scalar("allowUncalibrated", "allow_uncalibrated", T::Bool)],
};

pub static REACH_SCRIPT: RecordSchema = RecordSchema {
    name: "ReachScript",
    fields: &[
        Field::scalar("version", "version", T::Int64),
        Field::scalar("preemptive", "preemptive", T::Bool),
        Field::scalar("preemptiveReason", "preemptive_reason", T::String),
        Field::nested(
            "calibrationRequirement",
            "calibration_requirement",
            &REACH_SCRIPT_CALIBRATION_REQUIREMENT,
        ),
        Field::repeated_nested("commands", "commands", &REACH_SCRIPT_COMMAND),
    ],
};

/// Named controller script, run as is.
pub static RUN_SCRIPT: RecordSchema = RecordSchema {
    name: "RunScript",
    fields: &[Field::scalar("script", "script", T::String)],
};
