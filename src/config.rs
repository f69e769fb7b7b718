use std::env;
use std::path::PathBuf;

pub const LOG_DIR_VAR: &str = "TICTACTOE_LOG_DIR";
pub const NO_LOG_VAR: &str = "TICTACTOE_NO_LOG";
pub const DEFAULT_LOG_DIR: &str = "game_log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_dir: PathBuf,
    /// Write a move log for every round.
    pub move_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            move_log: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        if let Some(dir) = lookup(LOG_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(NO_LOG_VAR) {
            let value = value.trim().to_lowercase();
            config.move_log = value.is_empty() || value == "0" || value == "false";
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), Config::default());
        assert_eq!(config(&[]).log_dir, PathBuf::from("game_log"));
        assert!(config(&[]).move_log);
    }

    #[test]
    fn test_log_dir_override() {
        assert_eq!(
            config(&[(LOG_DIR_VAR, "/tmp/ttt")]).log_dir,
            PathBuf::from("/tmp/ttt")
        );
        assert_eq!(config(&[(LOG_DIR_VAR, "  ")]).log_dir, PathBuf::from("game_log"));
    }

    #[test]
    fn test_no_log() {
        assert!(!config(&[(NO_LOG_VAR, "1")]).move_log);
        assert!(!config(&[(NO_LOG_VAR, "yes")]).move_log);
        assert!(config(&[(NO_LOG_VAR, "0")]).move_log);
        assert!(config(&[(NO_LOG_VAR, "False")]).move_log);
        assert!(config(&[(NO_LOG_VAR, "")]).move_log);
    }
}
