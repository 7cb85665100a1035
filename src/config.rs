// Invoker configuration, loaded from RON

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the user's config directory
pub const CONFIG_FILE_NAME: &str = "invoker.ron";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("RON serialization error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// What the invoker does when asked to run a slot nothing is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownSlotPolicy {
    /// Do nothing and report `Invocation::UnknownSlot`
    #[default]
    Ignore,
    /// Fail with `CommandError::UnknownSlot`
    Reject,
}

/// Invoker settings
///
/// Every field has a default, so an empty `()` RON document is valid.
///
/// ```
/// use remote_invoker::config::{InvokerConfig, UnknownSlotPolicy};
///
/// let config = InvokerConfig::from_ron("(max_history: Some(8), unknown_slot: Reject)").unwrap();
/// assert_eq!(config.max_history, Some(8));
/// assert_eq!(config.unknown_slot, UnknownSlotPolicy::Reject);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvokerConfig {
    /// Maximum number of history entries kept (None = unbounded)
    pub max_history: Option<usize>,
    /// Handling of invocations on unbound slots
    pub unknown_slot: UnknownSlotPolicy,
}

impl InvokerConfig {
    /// Parse a configuration from a RON document
    pub fn from_ron(ron_data: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(ron_data)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but cannot be honoured
    ///
    /// A history cap of zero would drop every entry as soon as it is
    /// recorded, so nothing could ever be rolled back.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history == Some(0) {
            return Err(ConfigError::Invalid(
                "max_history must be at least 1 (use None for unbounded)".into(),
            ));
        }
        Ok(())
    }

    /// Load a configuration from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    /// Default config location, e.g. `~/.config/remote_invoker/invoker.ron`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("remote_invoker").join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults if no file is there
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Serialize to a pretty RON document
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = InvokerConfig::default();
        assert_eq!(config.max_history, None);
        assert_eq!(config.unknown_slot, UnknownSlotPolicy::Ignore);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = InvokerConfig::from_ron("()").unwrap();
        assert_eq!(config, InvokerConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = InvokerConfig::from_ron("(max_history: Some(3))").unwrap();
        assert_eq!(config.max_history, Some(3));
        assert_eq!(config.unknown_slot, UnknownSlotPolicy::Ignore);
    }

    #[test]
    fn test_invalid_document() {
        let result = InvokerConfig::from_ron("(unknown_slot: Explode)");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_history_cap_rejected() {
        let result = InvokerConfig::from_ron("(max_history: Some(0))");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let config = InvokerConfig {
            max_history: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(InvokerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(unknown_slot: Reject)").unwrap();

        let config = InvokerConfig::load(file.path()).unwrap();
        assert_eq!(config.unknown_slot, UnknownSlotPolicy::Reject);
    }

    #[test]
    fn test_load_missing_file() {
        let result = InvokerConfig::load(Path::new("/nonexistent/invoker.ron"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = InvokerConfig::default_path() {
            assert!(path.ends_with("remote_invoker/invoker.ron"));
        }
    }

    #[test]
    fn test_written_config_reads_back() {
        let config = InvokerConfig {
            max_history: Some(42),
            unknown_slot: UnknownSlotPolicy::Reject,
        };
        let text = config.to_ron().unwrap();
        assert_eq!(InvokerConfig::from_ron(&text).unwrap(), config);
    }
}
