//! Snapshots attached to commands: the device data a decision was based on
//! and, for gym environments, the actions taken.

use reach_api::schema::{FieldDescriptor as Field, RecordSchema, ScalarType as T};

use crate::common::{DEVICE_DATA_REF, KEY_VALUE, STATUS};

pub static ARM_ACTION_PARAMS: RecordSchema = RecordSchema {
    name: "ArmActionParams",
    fields: &[
        Field::scalar("command", "command", T::Int64),
        Field::scalar("cid", "cid", T::Int64),
        Field::repeated("jointAngles", "joint_angles", T::Double),
        Field::repeated("pose", "pose", T::Double),
        Field::scalar("reachAction", "reach_action", T::Int64),
        Field::scalar("useLinear", "use_linear", T::Bool),
        Field::scalar("velocity", "velocity", T::Double),
        Field::scalar("acceleration", "acceleration", T::Double),
        Field::scalar("timeoutSec", "timeout_sec", T::Double),
        Field::scalar("actionName", "action_name", T::String),
        Field::scalar("useUnityIk", "use_unity_ik", T::Bool),
        Field::scalar("intent", "intent", T::String),
        Field::scalar("pickId", "pick_id", T::String),
        Field::scalar("successType", "success_type", T::String),
        Field::scalar("applyTipAdjustTransform", "apply_tip_adjust_transform", T::Bool),
        Field::scalar("servo", "servo", T::Bool),
        Field::scalar("servoTSecs", "servo_t_secs", T::Double),
        Field::scalar("servoLookaheadTimeSecs", "servo_lookahead_time_secs", T::Double),
        Field::scalar("servoGain", "servo_gain", T::Double),
        Field::scalar("allowUncalibrated", "allow_uncalibrated", T::Bool),
        Field::scalar("controllerName", "controller_name", T::String),
    ],
};

pub static VACUUM_ACTION_PARAMS: RecordSchema = RecordSchema {
    name: "VacuumActionParams",
    fields: &[Field::scalar("state", "state", T::Int64)],
};

pub static LOGGER_ACTION_PARAMS: RecordSchema = RecordSchema {
    name: "LoggerActionParams",
    fields: &[
        Field::scalar("isStart", "is_start", T::Bool),
        Field::repeated_nested("eventParams", "event_params", &KEY_VALUE),
    ],
};

pub static GYM_ACTION: RecordSchema = RecordSchema {
    name: "GymAction",
    fields: &[
        Field::scalar("deviceType", "device_type", T::String),
        Field::scalar("deviceName", "device_name", T::String),
        Field::scalar("synchronous", "synchronous", T::Bool),
        Field::nested("armActionParams", "arm_action_params", &ARM_ACTION_PARAMS),
        Field::nested("vacuumActionParams", "vacuum_action_params", &VACUUM_ACTION_PARAMS),
        Field::nested("loggerActionParams", "logger_action_params", &LOGGER_ACTION_PARAMS),
    ],
};

pub static SNAPSHOT_RESPONSE: RecordSchema = RecordSchema {
    name: "SnapshotResponse",
    fields: &[
        Field::nested("deviceDataRef", "device_data_ref", &DEVICE_DATA_REF),
        Field::scalar("cid", "cid", T::Int64),
        Field::scalar("gymElementType", "gym_element_type", T::String),
        Field::scalar("gymConfigName", "gym_config_name", T::String),
        Field::nested("status", "status", &STATUS),
    ],
};

pub static SNAPSHOT: RecordSchema = RecordSchema {
    name: "Snapshot",
    fields: &[
        Field::scalar("source", "source", T::String),
        Field::repeated_nested("deviceDataRefs", "device_data_refs", &DEVICE_DATA_REF),
        Field::repeated_nested("responses", "responses", &SNAPSHOT_RESPONSE),
        Field::scalar("gymRunId", "gym_run_id", T::String),
        Field::scalar("gymEnvId", "gym_env_id", T::String),
        Field::scalar("gymEpisode", "gym_episode", T::Int64),
        Field::scalar("gymStep", "gym_step", T::Int64),
        Field::scalar("gymReward", "gym_reward", T::Double),
        Field::scalar("gymDone", "gym_done", T::Bool),
        Field::repeated_nested("gymActions", "gym_actions", &GYM_ACTION),
        Field::scalar("gymServerTS", "gym_server_ts", T::Timestamp),
    ],
};
