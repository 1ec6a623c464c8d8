use reach_api::schema::{FieldDescriptor as Field, RecordSchema, ScalarType as T};

/// Color image reference.
pub static COLOR: RecordSchema = RecordSchema {
    name: "Color",
    fields: &[Field::scalar("color", "color", T::String)],
};

pub static COLOR_DEPTH: RecordSchema = RecordSchema {
    name: "ColorDepth",
    fields: &[
        Field::scalar("color", "color", T::String),
        Field::scalar("depth", "depth", T::String),
        Field::scalar("depthTS", "depth_ts", T::Timestamp),
    ],
};

/// Pixel coordinates.
pub static PICK_POINT: RecordSchema = RecordSchema {
    name: "PickPoint",
    fields: &[
        Field::scalar("x", "x", T::Int32),
        Field::scalar("y", "y", T::Int32),
    ],
};

pub static PREDICTION: RecordSchema = RecordSchema {
    name: "Prediction",
    fields: &[
        Field::scalar("color", "color", T::String),
        Field::repeated_nested("pickPoints", "pick_points", &PICK_POINT),
    ],
};
