use crate::domain::models::DEFAULT_MATCH_LIMIT;
use crate::theme::PaletteType;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Optional per-user settings, read from `~/.config/muxlaunch/config.toml`.
///
/// Every field may be omitted. Command-line flags take precedence.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub programs_file: Option<PathBuf>,
    pub panel_file: Option<PathBuf>,
    pub panel_script: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub match_limit: Option<usize>,
    pub theme: PaletteType,
}

/// A settings file that exists but does not parse. Defaults are used instead.
#[derive(Debug, Error)]
#[error("ignoring malformed settings in {}", path.display())]
pub struct MalformedSettings {
    pub path: PathBuf,
    #[source]
    pub source: toml::de::Error,
}

impl MalformedSettings {
    /// Reported once the log subscriber is installed.
    pub fn log(&self) {
        tracing::warn!(path = %self.path.display(), error = %self.source, "ignoring malformed settings");
    }
}

impl Settings {
    /// Loads the settings file. An absent or unreadable file yields the defaults.
    pub fn load() -> Result<Self, MalformedSettings> {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, MalformedSettings> {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Ok(Self::default());
        };
        toml::from_str(&content).map_err(|source| MalformedSettings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Settings::load`], but hands back the parse error for later reporting.
    #[must_use]
    pub fn load_or_default() -> (Self, Option<MalformedSettings>) {
        match Self::load() {
            Ok(settings) => (settings, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    #[must_use]
    pub fn programs_file(&self) -> PathBuf {
        resolve(self.programs_file.as_deref(), "programs.json")
    }

    #[must_use]
    pub fn panel_file(&self) -> PathBuf {
        resolve(self.panel_file.as_deref(), "panel.json")
    }

    #[must_use]
    pub fn panel_script(&self) -> PathBuf {
        resolve(self.panel_script.as_deref(), "select_active.sh")
    }

    /// Match limit clamped to the single-digit selection keys.
    #[must_use]
    pub fn match_limit(&self) -> usize {
        clamp_limit(self.match_limit.unwrap_or(DEFAULT_MATCH_LIMIT))
    }
}

#[must_use]
pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(1, DEFAULT_MATCH_LIMIT)
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("muxlaunch");
        path.push("config.toml");
        path
    })
}

/// Default location of the multiplexer configuration files.
pub fn tmux_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tmux");
        path
    })
}

/// Expands a leading `~/` to the home directory.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), home::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

fn resolve(configured: Option<&Path>, default_name: &str) -> PathBuf {
    match configured {
        Some(path) => expand_home(path),
        None => tmux_config_dir()
            .map(|dir| dir.join(default_name))
            .unwrap_or_else(|| PathBuf::from(default_name)),
    }
}
