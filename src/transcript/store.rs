//! File-backed storage for the conversation transcript

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use super::{Role, Turn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read transcript file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write transcript file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("transcript file {} is not a valid transcript: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode transcript: {0}")]
    Encode(serde_json::Error),
}

/// Sole reader and writer of the transcript file. The file holds the
/// full ordered turn list as human-readable JSON and is rewritten in
/// full on every mutation.
pub struct TranscriptStore {
    path: PathBuf,
    system_message: String,
    // Callers hold this across their whole load-mutate-save span so
    // concurrent requests can't silently drop each other's turns.
    lock: Mutex<()>,
}

impl TranscriptStore {
    pub fn new(path: impl AsRef<Path>, system_message: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            system_message: system_message.to_string(),
            lock: Mutex::new(()),
        }
    }

    /// The transcript a fresh conversation starts from: a single
    /// system turn carrying the configured system message.
    pub fn seed(&self) -> Vec<Turn> {
        vec![Turn::new(Role::System, &self.system_message)]
    }

    /// Serializes load-mutate-save. Take this before `load` and hold
    /// it until after `save` when mutating the transcript.
    pub async fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Read the persisted transcript, or the seed transcript when no
    /// file exists yet.
    pub async fn load(&self) -> Result<Vec<Turn>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.seed()),
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Overwrite the persisted transcript in full.
    pub async fn save(&self, transcript: &[Turn]) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(transcript).map_err(StorageError::Encode)?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Replace whatever is persisted with the seed transcript.
    pub async fn reset(&self) -> Result<(), StorageError> {
        self.save(&self.seed()).await
    }
}
