use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::cluster::ClusterConfig;
use crate::error::{Error, Result};
use crate::text::SimilarityThresholds;
use crate::threads::ThreadConfig;
use crate::trends::ViewConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// IANA zone whose local date is "today" when the caller gives none.
    pub timezone: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: "Australia/Sydney".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub similarity: SimilarityThresholds,
    pub cluster: ClusterConfig,
    pub threads: ThreadConfig,
    pub views: ViewConfig,
    pub calendar: CalendarConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(path).map_err(|err| {
                    Error::Config(format!("failed to read {}: {}", path.display(), err))
                })?;
                Self::from_toml(&contents)?
            }
            _ => EngineConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|err| Error::Config(format!("failed to parse config: {}", err)))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| Error::Config(format!("failed to serialize config: {}", err)))?;
        std::fs::write(path, payload)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(timezone) = env::var("TRENDS_TIMEZONE") {
            if !timezone.trim().is_empty() {
                self.calendar.timezone = timezone.trim().to_string();
            }
        }
        if let Some(value) = env_usize("TRENDS_THREAD_LIMIT") {
            self.threads.limit = value;
        }
        if let Some(value) = env_usize("TRENDS_NEW_TODAY_LIMIT") {
            self.views.new_today_limit = value;
        }
        if let Some(value) = env_usize("TRENDS_TRENDING_LIMIT") {
            self.views.trending_limit = value;
        }
        if let Some(value) = env_usize("TRENDS_SIGNATURE_SIZE") {
            self.cluster.signature_size = value;
        }
    }
}

fn env_usize(name: &str) -> Option<usize> {
    env::var(name).ok()?.trim().parse::<usize>().ok()
}

fn default_config_path() -> Option<PathBuf> {
    env::var("TRENDS_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/trends.toml")))
}
