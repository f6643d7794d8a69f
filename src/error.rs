//! Error types for the fallible outer surfaces (config and map loading)
//!
//! Trigger evaluation itself never fails; bad annotations fall back to defaults.

use thiserror::Error;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, TriggerError>;

/// Errors raised while loading configuration or map data
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Map data parse error: {0}")]
    MapData(#[from] serde_json::Error),

    #[error("Unknown trigger code: {0}")]
    UnknownTriggerKind(u8),

    #[error("Invalid travel mode: {0}")]
    InvalidTravelMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TriggerError::UnknownTriggerKind(9);
        assert_eq!(err.to_string(), "Unknown trigger code: 9");

        let err = TriggerError::InvalidTravelMode("horse".into());
        assert!(err.to_string().contains("horse"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: TriggerError = json_err.into();
        assert!(matches!(err, TriggerError::MapData(_)));
    }
}
