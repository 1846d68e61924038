// File: src/error.rs
//! Error types for loading and serving the lexicon.
//!
//! The word generator and meaning lookup are total and never return these;
//! errors only arise while reading the word list, the WordNet database or a
//! snapshot, and while talking to the background worker.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordMakerError {
    /// I/O errors (missing files, unreadable directories, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot could not be encoded or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line of a WordNet database file could not be parsed
    #[error("WordNet error in {file}:{line}: {reason}")]
    WordNet {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Snapshot version {found} is not supported (expected {expected})")]
    SnapshotVersion { found: u32, expected: u32 },

    /// Neither a snapshot nor a word list plus WordNet directory was configured
    #[error("No lexicon configured: {0}")]
    MissingLexicon(String),

    /// The background lookup thread went away
    #[error("Worker error: {0}")]
    Worker(String),
}

impl WordMakerError {
    pub fn wordnet<P: Into<PathBuf>, S: Into<String>>(file: P, line: usize, reason: S) -> Self {
        WordMakerError::WordNet {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for word_maker operations.
pub type Result<T> = std::result::Result<T, WordMakerError>;
