// File: src/persistence.rs
use crate::core::lexicon::{Lexicon, SenseDictionary, WordList};
use crate::error::{Result, WordMakerError};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Bumped whenever the layout of `Sense`, `WordList` or `SenseDictionary`
/// changes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Borrowed view written to disk, so saving does not clone the lexicon.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    words: &'a WordList,
    senses: &'a SenseDictionary,
}

/// Owned counterpart with the same field layout.
#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    words: WordList,
    senses: SenseDictionary,
}

pub fn save_to_disk(lexicon: &Lexicon, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SnapshotRef {
        version: SNAPSHOT_VERSION,
        words: &lexicon.words,
        senses: &lexicon.senses,
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    log::info!("Wrote lexicon snapshot to {}", path.display());
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<Lexicon> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: Snapshot = bincode::deserialize_from(reader)?;
    if state.version != SNAPSHOT_VERSION {
        return Err(WordMakerError::SnapshotVersion {
            found: state.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    log::info!(
        "Loaded snapshot {} ({} words, {} lemmas with senses)",
        path.display(),
        state.words.len(),
        state.senses.len()
    );
    Ok(Lexicon::new(state.words, state.senses))
}
