//! Arm controller telemetry.

use reach_api::schema::{FieldDescriptor as Field, RecordSchema, ScalarType as T};

use crate::common::KEY_VALUE;

/// One I/O pin reading or setting.
pub static CAPABILITY_STATE: RecordSchema = RecordSchema {
    name: "CapabilityState",
    fields: &[
        Field::scalar("pin", "pin", T::String),
        Field::scalar("intValue", "int_value", T::Int64),
        Field::scalar("floatValue", "float_value", T::Double),
    ],
};

/// Payload of `sensor-state` and `output-state`.
pub static CAPABILITY_STATES: RecordSchema = RecordSchema {
    name: "CapabilityStates",
    fields: &[Field::repeated_nested("state", "state", &CAPABILITY_STATE)],
};

pub static ANALOG_BANK: RecordSchema = RecordSchema {
    name: "AnalogBank",
    fields: &[
        Field::scalar("space", "space", T::String),
        Field::scalar("output", "output", T::Bool),
        Field::repeated("state", "state", T::Double),
    ],
};

pub static DIGITAL_BANK: RecordSchema = RecordSchema {
    name: "DigitalBank",
    fields: &[
        Field::scalar("space", "space", T::String),
        Field::scalar("output", "output", T::Bool),
        Field::repeated("state", "state", T::Bool),
    ],
};

pub static ROBOT_STATE: RecordSchema = RecordSchema {
    name: "RobotState",
    fields: &[
        Field::repeated("joints", "joints", T::Double),
        Field::repeated("pose", "pose", T::Double),
        Field::repeated("force", "force", T::Double),
        Field::scalar("isRobotPowerOn", "is_robot_power_on", T::Bool),
        Field::scalar("robotMode", "robot_mode", T::String),
        Field::scalar("safetyMessage", "safety_message", T::String),
        Field::scalar("programCounter", "program_counter", T::Int64),
        Field::scalar("lastTerminatedProgram", "last_terminated_program", T::String),
        Field::scalar("boardTempC", "board_temp_c", T::Double),
        Field::scalar("robotCurrentA", "robot_current_a", T::Double),
        Field::scalar("robotVoltageV", "robot_voltage_v", T::Double),
        Field::repeated("jointCurrentsA", "joint_currents_a", T::Double),
        Field::repeated("jointTempsC", "joint_temps_c", T::Double),
        Field::repeated("jointVoltagesV", "joint_voltages_v", T::Double),
        Field::scalar("toolTempC", "tool_temp_c", T::Double),
        Field::scalar("toolCurrentA", "tool_current_a", T::Double),
        Field::repeated("digitalIn", "digital_in", T::Bool),
        Field::repeated("digitalOut", "digital_out", T::Bool),
        Field::repeated("analogIn", "analog_in", T::Double),
        Field::repeated("analogOut", "analog_out", T::Double),
        Field::repeated("toolDigitalIn", "tool_digital_in", T::Bool),
        Field::repeated("toolDigitalOut", "tool_digital_out", T::Bool),
        Field::repeated("toolAnalogIn", "tool_analog_in", T::Double),
        Field::repeated("sensorIn", "sensor_in", T::Double),
        Field::repeated_nested("analogBank", "analog_bank", &ANALOG_BANK),
        Field::repeated_nested("digitalBank", "digital_bank", &DIGITAL_BANK),
    ],
};

/// Legacy UR controller state, reduced to the tool pose.
pub static UR_STATE: RecordSchema = RecordSchema {
    name: "UrState",
    fields: &[Field::repeated("pose", "pose", T::Double)],
};

pub static METRIC: RecordSchema = RecordSchema {
    name: "Metric",
    fields: &[
        Field::nested("metricValue", "metric_value", &KEY_VALUE),
        Field::repeated_nested("labels", "labels", &KEY_VALUE),
        Field::repeated_nested("eventParams", "event_params", &KEY_VALUE),
    ],
};
