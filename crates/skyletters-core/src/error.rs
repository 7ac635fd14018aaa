use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format for {}, expected .toml or .json", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("config value `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("config value `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}
