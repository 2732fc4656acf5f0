//! Game configuration from environment variables.
//!
//! - `MYSTERY_SEED`: fixed RNG seed (u32); unset means a fresh random seed
//! - `MYSTERY_LOG_PATH`: append a JSON-lines event log to this file
//! - `MYSTERY_NO_COLOR`: "1" or "true" forces plain output
//! - `NO_COLOR`: any non-empty value forces plain output
//!
//! None of these change the game rules.

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    /// Color was explicitly disabled.
    pub no_color: bool,
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment in production, a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("MYSTERY_SEED").and_then(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                return None;
            }
            match s.parse::<u32>() {
                Ok(v) => Some(v),
                Err(_) => {
                    eprintln!("[Config] ignoring invalid MYSTERY_SEED: {}", s);
                    None
                }
            }
        });

        let log_path = lookup("MYSTERY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let no_color = lookup("MYSTERY_NO_COLOR")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
            || lookup("NO_COLOR").map(|v| !v.is_empty()).unwrap_or(false);

        Self {
            seed,
            log_path,
            no_color,
        }
    }

    /// Configured seed, or a fresh one from OS entropy.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Color is used only on a terminal and only when not disabled.
    pub fn use_color(&self, stdout_is_tty: bool) -> bool {
        stdout_is_tty && !self.no_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, GameConfig::default());
        assert!(config.use_color(true));
        assert!(!config.use_color(false));
    }

    #[test]
    fn reads_seed_and_log_path() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MYSTERY_SEED", " 4242 "),
            ("MYSTERY_LOG_PATH", " /tmp/mystery.jsonl "),
        ]));
        assert_eq!(config.seed, Some(4242));
        assert_eq!(config.resolve_seed(), 4242);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/mystery.jsonl"));
    }

    #[test]
    fn invalid_or_empty_values_fall_back() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MYSTERY_SEED", "not-a-seed"),
            ("MYSTERY_LOG_PATH", "   "),
        ]));
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn color_can_be_disabled() {
        let config = GameConfig::from_lookup(lookup_from(&[("MYSTERY_NO_COLOR", "TRUE")]));
        assert!(!config.use_color(true));

        let config = GameConfig::from_lookup(lookup_from(&[("NO_COLOR", "1")]));
        assert!(!config.use_color(true));

        let config = GameConfig::from_lookup(lookup_from(&[("NO_COLOR", "")]));
        assert!(config.use_color(true));

        let config = GameConfig::from_lookup(lookup_from(&[("MYSTERY_NO_COLOR", "0")]));
        assert!(config.use_color(true));
    }
}
