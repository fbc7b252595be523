use crate::errors::CopyError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// User configuration, read once per invocation. The only setting is the
/// list of extra exclude patterns; the built-in patterns always apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub exclude_glob_patterns: Vec<String>,
}

/// Loads settings from a JSON file. No file configured means defaults.
pub async fn load_settings(path: Option<&Path>) -> Result<Settings, CopyError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    debug!("Loading settings from {}", path.display());
    let raw = fs::read_to_string(path).await.map_err(|e| {
        CopyError::ConfigError(format!("cannot read settings file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        CopyError::ConfigError(format!("invalid settings file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_exclude_list() {
        let settings: Settings =
            serde_json::from_str(r#"{"excludeGlobPatterns": ["**/target/**", "**/*.lock"]}"#)
                .unwrap();
        assert_eq!(
            settings.exclude_glob_patterns,
            vec!["**/target/**", "**/*.lock"]
        );
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(settings.exclude_glob_patterns.is_empty());
    }
}
