use crate::domain::models::{Menu, MenuItem, ToolEntry, ToolName, ToolRegistry};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON format in {}", path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration in {}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration file {} contains no menu items", path.display())]
    EmptyMenu { path: PathBuf },
}

#[derive(Debug, Deserialize)]
struct RawTool {
    command: String,
    foreground: bool,
}

#[derive(Debug, Deserialize)]
struct RawMenuItem {
    name: String,
}

/// Loads the tool registry: a JSON object mapping display names to
/// `{ "command": string, "foreground": bool }`.
pub fn load_tool_registry(path: &Path) -> Result<ToolRegistry, ConfigError> {
    let raw: BTreeMap<String, RawTool> = read_json(path)?;
    let registry = ToolRegistry::new(raw.into_iter().map(|(name, tool)| ToolEntry {
        name: ToolName(name),
        command: tool.command,
        foreground: tool.foreground,
    }));
    tracing::debug!(path = %path.display(), tools = registry.len(), "loaded tool registry");
    Ok(registry)
}

/// Loads the panel menu: a JSON array of objects with at least a `name`.
pub fn load_menu(path: &Path) -> Result<Menu, ConfigError> {
    let raw: Vec<RawMenuItem> = read_json(path)?;
    let items = raw
        .into_iter()
        .map(|item| MenuItem { name: item.name })
        .collect();
    let menu = Menu::new(items).ok_or_else(|| ConfigError::EmptyMenu {
        path: path.to_path_buf(),
    })?;
    tracing::debug!(path = %path.display(), items = menu.item_count(), "loaded menu");
    Ok(menu)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| {
        if source.is_data() {
            ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            }
        } else {
            ConfigError::Syntax {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_tool_registry() {
        let file = write_config(
            r#"{
                "lazygit": { "command": "lazygit", "foreground": true },
                "Docker": { "command": "lazydocker --debug", "foreground": false }
            }"#,
        );
        let registry = load_tool_registry(file.path()).unwrap();
        assert_eq!(registry.len(), 2);
        let docker = registry.get("Docker").unwrap();
        assert_eq!(docker.command, "lazydocker --debug");
        assert!(!docker.foreground);
        assert!(registry.get("docker").is_none());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let file = write_config(
            r#"{
                "top": { "command": "top", "foreground": true },
                "top": { "command": "htop", "foreground": true }
            }"#,
        );
        let registry = load_tool_registry(file.path()).unwrap();
        assert_eq!(registry.get("top").unwrap().command, "htop");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("programs.json");
        let err = load_tool_registry(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("programs.json"));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_config("{ not json");
        let err = load_tool_registry(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { .. }));
        assert!(err.to_string().starts_with("Invalid JSON format"));
    }

    #[test]
    fn test_missing_required_key() {
        let file = write_config(r#"{ "htop": { "command": "htop" } }"#);
        let err = load_tool_registry(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.source().unwrap().to_string().contains("foreground"));
    }

    #[test]
    fn test_empty_registry_is_allowed() {
        let file = write_config("{}");
        assert!(load_tool_registry(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_menu_ignores_extra_fields() {
        let file = write_config(
            r#"[
                { "name": "lazygit", "icon": "g" },
                { "name": "btop" }
            ]"#,
        );
        let menu = load_menu(file.path()).unwrap();
        assert_eq!(menu.names().collect::<Vec<_>>(), vec!["lazygit", "btop"]);
    }

    #[test]
    fn test_menu_missing_name() {
        let file = write_config(r#"[ { "title": "lazygit" } ]"#);
        let err = load_menu(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.source().unwrap().to_string().contains("`name`"));
    }

    #[test]
    fn test_empty_menu() {
        let file = write_config("[]");
        let err = load_menu(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyMenu { .. }));
    }
}
