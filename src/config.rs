// File: src/config.rs
use crate::cli::{OutputFormat, WordMakerArgs};
use crate::core::lexicon::{Lexicon, WordList};
use crate::error::{Result, WordMakerError};
use crate::persistence::load_from_disk;
use crate::wordnet;
use std::path::PathBuf;

/// Letters above which the exhaustive search gets noticeably slow.
pub const DEFAULT_WARN_LETTERS: usize = 10;

/// Where the reference data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    Snapshot(PathBuf),
    Files { words: PathBuf, wordnet: PathBuf },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub words_path: Option<PathBuf>,
    pub wordnet_dir: Option<PathBuf>,
    pub snapshot_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub large_input_warning: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_path: None,
            wordnet_dir: None,
            snapshot_path: None,
            format: OutputFormat::Human,
            large_input_warning: DEFAULT_WARN_LETTERS,
        }
    }
}

impl Config {
    pub fn from_args(args: &WordMakerArgs) -> Self {
        Self {
            words_path: args.words.clone(),
            wordnet_dir: args.wordnet.clone(),
            snapshot_path: args.snapshot.clone(),
            format: args.format,
            large_input_warning: args.warn_letters,
        }
    }

    /// A snapshot wins; otherwise both the word list and WordNet are needed.
    pub fn lexicon_source(&self) -> Result<LexiconSource> {
        if let Some(snapshot) = &self.snapshot_path {
            return Ok(LexiconSource::Snapshot(snapshot.clone()));
        }
        self.file_source()
    }

    /// Like `lexicon_source`, but ignores any snapshot. Used when building one.
    pub fn file_source(&self) -> Result<LexiconSource> {
        match (&self.words_path, &self.wordnet_dir) {
            (Some(words), Some(wordnet)) => Ok(LexiconSource::Files {
                words: words.clone(),
                wordnet: wordnet.clone(),
            }),
            (None, _) => Err(WordMakerError::MissingLexicon(
                "pass --snapshot, or --words together with --wordnet".to_string(),
            )),
            (Some(_), None) => Err(WordMakerError::MissingLexicon(
                "--words also needs --wordnet".to_string(),
            )),
        }
    }
}

impl LexiconSource {
    pub fn load(&self) -> Result<Lexicon> {
        match self {
            LexiconSource::Snapshot(path) => load_from_disk(path),
            LexiconSource::Files { words, wordnet } => Ok(Lexicon::new(
                WordList::load(words)?,
                wordnet::load_senses(wordnet)?,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_takes_precedence() {
        let config = Config {
            words_path: Some("words.txt".into()),
            wordnet_dir: Some("dict".into()),
            snapshot_path: Some("lexicon.bin".into()),
            ..Config::default()
        };
        assert_eq!(
            config.lexicon_source().unwrap(),
            LexiconSource::Snapshot("lexicon.bin".into())
        );
        assert_eq!(
            config.file_source().unwrap(),
            LexiconSource::Files {
                words: "words.txt".into(),
                wordnet: "dict".into()
            }
        );
    }

    #[test]
    fn files_need_both_paths() {
        let config = Config {
            words_path: Some("words.txt".into()),
            ..Config::default()
        };
        assert!(matches!(
            config.lexicon_source(),
            Err(WordMakerError::MissingLexicon(_))
        ));
        assert!(matches!(
            Config::default().lexicon_source(),
            Err(WordMakerError::MissingLexicon(_))
        ));
    }

    #[test]
    fn missing_snapshot_file_fails_to_load() {
        let source = LexiconSource::Snapshot("/no/such/lexicon.bin".into());
        assert!(matches!(source.load(), Err(WordMakerError::Io(_))));
    }
}
