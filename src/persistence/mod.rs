//! Best-score persistence
//!
//! The only thing that outlives a run is the best score. It is read once at
//! startup and written back only when a run beats it.
//!
//! Features:
//! - Versioned JSON envelope
//! - Missing file reads as a best score of zero
//! - Write through a temp file, then rename over the old one

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current on-disk format version
pub const BEST_SCORE_VERSION: u32 = 1;

/// Failures reading or writing persisted files
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl PersistError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Where the best score lives between runs
pub trait BestScoreStore {
    fn load(&self) -> Result<u64, PersistError>;
    fn save(&mut self, best_score: u64) -> Result<(), PersistError>;

    /// Persist `score` only if it beats what is stored. Returns true if written.
    fn record(&mut self, score: u64) -> Result<bool, PersistError> {
        if score <= self.load()? {
            return Ok(false);
        }
        self.save(score)?;
        Ok(true)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct BestScoreEnvelope {
    version: u32,
    best_score: u64,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileStore {
    fn load(&self) -> Result<u64, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No best score at {}, starting from 0", self.path.display());
                return Ok(0);
            }
            Err(err) => return Err(PersistError::io(&self.path, err)),
        };

        let envelope: BestScoreEnvelope =
            serde_json::from_str(&json).map_err(|err| PersistError::json(&self.path, err))?;
        if envelope.version != BEST_SCORE_VERSION {
            return Err(PersistError::UnsupportedVersion {
                found: envelope.version,
                expected: BEST_SCORE_VERSION,
            });
        }
        Ok(envelope.best_score)
    }

    fn save(&mut self, best_score: u64) -> Result<(), PersistError> {
        let envelope = BestScoreEnvelope {
            version: BEST_SCORE_VERSION,
            best_score,
        };
        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|err| PersistError::json(&self.path, err))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| PersistError::io(parent, err))?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|err| PersistError::io(&tmp, err))?;
        fs::rename(&tmp, &self.path).map_err(|err| PersistError::io(&self.path, err))?;

        log::info!("Best score {} saved to {}", best_score, self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best_score: u64,
    writes: u32,
}

impl MemoryStore {
    pub fn new(best_score: u64) -> Self {
        Self {
            best_score,
            writes: 0,
        }
    }

    /// Number of times `save` has been called
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Result<u64, PersistError> {
        Ok(self.best_score)
    }

    fn save(&mut self, best_score: u64) -> Result<(), PersistError> {
        self.best_score = best_score;
        self.writes += 1;
        Ok(())
    }
}
