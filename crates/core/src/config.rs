//! Runtime configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TERMFOLIO_SEED` | seed for every game | derived from the clock |
//! | `TERMFOLIO_SKIP_LOADER` | `1`/`true` skips the loading screen | off |
//! | `TERMFOLIO_TYPE_MS` | typewriter delay per character | 20 |
//! | `TERMFOLIO_LOG_PATH` | file that receives log output | none |
//!
//! Unparseable values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TYPE_CHAR_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub skip_loader: bool,
    pub type_char_ms: u32,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            skip_loader: false,
            type_char_ms: TYPE_CHAR_MS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TERMFOLIO_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let skip_loader = lookup("TERMFOLIO_SKIP_LOADER")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        let type_char_ms = lookup("TERMFOLIO_TYPE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(TYPE_CHAR_MS);

        let log_path = lookup("TERMFOLIO_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            skip_loader,
            type_char_ms,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
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
    fn test_reads_all_values() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("TERMFOLIO_SEED", "42"),
            ("TERMFOLIO_SKIP_LOADER", "true"),
            ("TERMFOLIO_TYPE_MS", "5"),
            ("TERMFOLIO_LOG_PATH", " /tmp/termfolio.log "),
        ]));
        assert_eq!(
            cfg,
            AppConfig {
                seed: 42,
                skip_loader: true,
                type_char_ms: 5,
                log_path: Some("/tmp/termfolio.log".to_string()),
            }
        );
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("TERMFOLIO_SKIP_LOADER", "nope"),
            ("TERMFOLIO_TYPE_MS", "fast"),
            ("TERMFOLIO_LOG_PATH", "   "),
        ]));
        assert!(!cfg.skip_loader);
        assert_eq!(cfg.type_char_ms, TYPE_CHAR_MS);
        assert_eq!(cfg.log_path, None);
    }
}
