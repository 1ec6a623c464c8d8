pub mod envelope;
pub mod error;
pub mod format;
pub mod record;
pub mod schema;
pub mod time;
pub mod value;
