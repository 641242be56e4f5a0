use crate::domino::{MAX_SESSIONS_PER_DAY, MIN_SESSIONS_PER_DAY};
use crate::error::{OneError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Planned length of a focus session, in minutes.
    #[serde(default = "default_session_minutes")]
    pub default_session_minutes: u32,
    /// Planned focus sessions per day; feeds the domino chain total.
    #[serde(default = "default_sessions_per_day")]
    pub default_sessions_per_day: u32,
}

fn default_version() -> u32 {
    1
}

fn default_session_minutes() -> u32 {
    60
}

fn default_sessions_per_day() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_session_minutes: default_session_minutes(),
            default_sessions_per_day: default_sessions_per_day(),
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(OneError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.default_session_minutes == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "default_session_minutes must be at least 1".to_string(),
            });
        }

        if self.default_sessions_per_day < MIN_SESSIONS_PER_DAY
            || self.default_sessions_per_day > MAX_SESSIONS_PER_DAY
        {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "default_sessions_per_day={} is outside {}..={} and will be clamped",
                    self.default_sessions_per_day, MIN_SESSIONS_PER_DAY, MAX_SESSIONS_PER_DAY
                ),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
