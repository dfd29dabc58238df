//! Runtime configuration from environment variables.
//!
//! Gameplay constants are compile-time (see `blockfall_types`); only ambient
//! settings live here.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BLOCKFALL_BEST_PATH` | best-score file | `$XDG_DATA_HOME` or `~/.local/share`, then `blockfall/best.json` |
//! | `BLOCKFALL_NO_PERSIST` | `1`/`true`: keep the best score in memory | off |
//! | `BLOCKFALL_SEED` | RNG seed | wall clock |
//! | `BLOCKFALL_LOG` | log file | no logging |
//! | `BLOCKFALL_LOG_LEVEL` | `error` .. `trace` | `info` |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::Level;

use crate::store::JsonFileStore;
use crate::types::TICK_RATE_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Gravity period
    pub tick: Duration,
    pub seed: Option<u32>,
    pub best_path: PathBuf,
    pub persist: bool,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let best_path = get("BLOCKFALL_BEST_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                JsonFileStore::default_path_in(
                    get("XDG_DATA_HOME").map(PathBuf::from),
                    get("HOME").map(PathBuf::from),
                )
            });

        let persist = !get("BLOCKFALL_NO_PERSIST")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let seed = get("BLOCKFALL_SEED").and_then(|s| s.parse().ok());

        let log_path = get("BLOCKFALL_LOG").map(PathBuf::from);

        let log_level = get("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| Level::from_str(&s).ok())
            .unwrap_or(Level::INFO);

        Self {
            tick: Duration::from_millis(TICK_RATE_MS),
            seed,
            best_path,
            persist,
            log_path,
            log_level,
        }
    }

    /// Configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}
