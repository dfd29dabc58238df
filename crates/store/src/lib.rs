//! Best-score persistence
//!
//! The game only ever asks two things of its storage: the best score so far,
//! and "keep this candidate if it beats the stored value". [`BestScoreStore`]
//! is that interface; the session owns one instead of reaching for a global.
//!
//! - [`MemoryStore`]: process-local, used by tests and when persistence is off
//! - [`JsonFileStore`]: a small versioned JSON document on disk

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Storage for the best score.
pub trait BestScoreStore {
    /// Best score recorded so far (0 when nothing was stored)
    fn get(&self) -> u32;

    /// Store `max(existing, candidate)` and return the resulting best.
    fn set_if_greater(&mut self, candidate: u32) -> Result<u32>;
}

/// Best score kept in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best }
    }
}

impl BestScoreStore for MemoryStore {
    fn get(&self) -> u32 {
        self.best
    }

    fn set_if_greater(&mut self, candidate: u32) -> Result<u32> {
        self.best = self.best.max(candidate);
        Ok(self.best)
    }
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn get(&self) -> u32 {
        (**self).get()
    }

    fn set_if_greater(&mut self, candidate: u32) -> Result<u32> {
        (**self).set_if_greater(candidate)
    }
}

/// On-disk document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestScoreRecord {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub best: u32,
}

impl Default for BestScoreRecord {
    fn default() -> Self {
        Self {
            version: default_version(),
            best: 0,
        }
    }
}

fn default_version() -> u32 {
    1
}

/// Best score persisted as JSON at a fixed path.
///
/// The file is read once on open; a missing or unreadable file counts as 0.
/// Writes happen only when the best actually increases.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    best: u32,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = load(&path).best;
        tracing::debug!(path = %path.display(), best, "best score loaded");
        Self { path, best }
    }

    /// Default location under `data_home` (`$XDG_DATA_HOME`), falling back to
    /// `home/.local/share`: `<base>/blockfall/best.json`.
    pub fn default_path_in(data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
        let base = data_home
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| {
                home.map(|mut p| {
                    p.push(".local");
                    p.push("share");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("blockfall");
        path.push("best.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }

        let record = BestScoreRecord {
            best: self.best,
            ..BestScoreRecord::default()
        };
        let text = serde_json::to_vec_pretty(&record).context("encode best score")?;
        atomic_write(&self.path, &text)
            .with_context(|| format!("write {}", self.path.display()))
    }
}

impl BestScoreStore for JsonFileStore {
    fn get(&self) -> u32 {
        self.best
    }

    fn set_if_greater(&mut self, candidate: u32) -> Result<u32> {
        if candidate <= self.best {
            return Ok(self.best);
        }
        self.best = candidate;
        self.save()?;
        Ok(self.best)
    }
}

fn load(path: &Path) -> BestScoreRecord {
    let Ok(bytes) = fs::read(path) else {
        return BestScoreRecord::default();
    };
    match serde_json::from_slice::<BestScoreRecord>(&bytes) {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable best-score file");
            BestScoreRecord::default()
        }
    }
}

fn atomic_write(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)?;
    match fs::rename(&tmp, path) {
        Ok(()) => Ok(()),
        Err(_) => {
            // rename over an existing file can fail on some platforms
            fs::copy(&tmp, path)?;
            let _ = fs::remove_file(&tmp);
            Ok(())
        }
    }
}
