use serde::Deserialize;

use reach_api::error::CodecError;

// ═══════════════════════════════════════════════════════════════
//  Protobuf Format Config
// ═══════════════════════════════════════════════════════════════

/// Layout of the generated `.proto` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProtobufFormatConfig {
    /// Proto package of every generated message (e.g. "reach.logs").
    #[serde(default = "default_package")]
    pub package: String,
    /// File name the messages are declared in.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_package() -> String {
    "reach.logs".into()
}
fn default_file_name() -> String {
    "reach/logs.proto".into()
}

impl Default for ProtobufFormatConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            file_name: default_file_name(),
        }
    }
}

impl ProtobufFormatConfig {
    /// Parse from TOML. Missing keys take their defaults.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        toml::from_str(text).map_err(|e| CodecError::Config(format!("protobuf format: {e}")))
    }

    /// Fully-qualified proto name of a message declared by this config.
    pub fn full_name(&self, message: &str) -> String {
        if self.package.is_empty() {
            message.to_string()
        } else {
            format!("{}.{message}", self.package)
        }
    }
}
