use std::{fmt, path::Path};

use serde::Deserialize;

use crate::teleport::TeleportConfig;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub teleport: TeleportConfig,
    /// Log a one-line summary of every frame at INFO.
    pub log_frames: bool,
}

impl GameOptions {
    pub fn from_json_str(json: &str) -> Result<GameOptions, OptionsError> {
        serde_json::from_str(json).map_err(OptionsError::Parse)
    }

    pub fn from_file(path: &Path) -> Result<GameOptions, OptionsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

#[derive(Debug)]
pub enum OptionsError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Io { path, source } => {
                write!(f, "failed to read options file {}: {}", path, source)
            }
            OptionsError::Parse(source) => write!(f, "invalid options: {}", source),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::Io { source, .. } => Some(source),
            OptionsError::Parse(source) => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teleport::DEFAULT_HEIGHT_OFFSET;

    #[test]
    fn test_empty_json_uses_defaults() {
        let options = GameOptions::from_json_str("{}").unwrap();
        assert_eq!(options, GameOptions::default());
        assert!(options.teleport.enabled);
        assert_eq!(options.teleport.height_offset, DEFAULT_HEIGHT_OFFSET);
    }

    #[test]
    fn test_partial_teleport_section() {
        let options = GameOptions::from_json_str(
            r#"{ "teleport": { "height_offset": -1.8 }, "log_frames": true }"#,
        )
        .unwrap();
        assert_eq!(options.teleport.height_offset, -1.8);
        assert_eq!(options.teleport.max_ray_distance, 100.0);
        assert!(options.log_frames);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = GameOptions::from_json_str(r#"{ "teleport": 3 }"#).unwrap_err();
        assert!(matches!(err, OptionsError::Parse(_)));
        assert!(err.to_string().starts_with("invalid options"));
    }
}
