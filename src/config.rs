use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    /// Filter directive for the log file (e.g. "info", "survey_tui=debug")
    pub log_level: String,
    /// Log file path; defaults to `~/.survey-tui/logs/survey-tui.log`
    pub log_file: Option<String>,
    /// How many ticks the status line stays visible
    pub status_ticks: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            log_level: "info".to_string(),
            log_file: None,
            status_ticks: 30,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".survey-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Where diagnostic logs are written
    pub fn log_path(&self) -> Option<PathBuf> {
        match &self.log_file {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::config_dir().map(|dir| dir.join("logs").join("survey-tui.log")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "tick_rate_ms": 250 }"#).unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.status_ticks, 30);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_log_file_override() {
        let config = Config {
            log_file: Some("/tmp/survey.log".to_string()),
            ..Config::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/survey.log")));
    }

    #[test]
    fn test_zero_tick_rate_is_bumped() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}
