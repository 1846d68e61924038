// File: src/core/lexicon.rs
use crate::core::types::Sense;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The reference list of known words, stored lowercase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from arbitrary strings. Entries are trimmed and
    /// lowercased; blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Reads a plain text list with one word per line. Lines starting with
    /// `#` are comments.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_lowercase());
        }
        log::info!(
            "Loaded {} words from {}",
            words.len(),
            path.as_ref().display()
        );
        Ok(Self { words })
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Senses per lowercase word, each list in the dictionary's own order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SenseDictionary {
    entries: HashMap<String, Vec<Sense>>,
}

impl SenseDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Sense>)>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for (word, senses) in entries {
            for sense in senses {
                dictionary.insert(word.as_ref(), sense);
            }
        }
        dictionary
    }

    /// Appends a sense after those already recorded for `word`.
    pub fn insert(&mut self, word: &str, sense: Sense) {
        self.entries.entry(word.to_lowercase()).or_default().push(sense);
    }

    /// All senses of `word` (exact lowercase form); empty when unknown.
    pub fn senses(&self, word: &str) -> &[Sense] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn definitions(&self, word: &str) -> Vec<String> {
        self.senses(word)
            .iter()
            .map(|sense| sense.definition.clone())
            .collect()
    }

    /// Number of distinct words with at least one sense.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The read-only reference data both core operations run against.
/// Built once at start-up and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub words: WordList,
    pub senses: SenseDictionary,
}

impl Lexicon {
    pub fn new(words: WordList, senses: SenseDictionary) -> Self {
        Self { words, senses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PartOfSpeech;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn membership_is_case_insensitive() {
        let words = WordList::from_words(["Cat", " act ", ""]);
        assert_eq!(words.len(), 2);
        assert!(words.contains("cat"));
        assert!(words.contains("CAT"));
        assert!(words.contains("Act"));
        assert!(!words.contains("tac"));
    }

    #[test]
    fn load_skips_comments_and_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# english words").unwrap();
        writeln!(file, "Apple").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "pear").unwrap();

        let words = WordList::load(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("apple"));
        assert!(words.contains("pear"));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(WordList::load("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn senses_keep_insertion_order() {
        let mut senses = SenseDictionary::new();
        senses.insert("cat", Sense::new(PartOfSpeech::Noun, "feline mammal"));
        senses.insert("cat", Sense::new(PartOfSpeech::Verb, "beat with a whip"));
        assert_eq!(
            senses.definitions("cat"),
            vec!["feline mammal".to_string(), "beat with a whip".to_string()]
        );
        assert!(senses.senses("dog").is_empty());
        assert_eq!(senses.len(), 1);
    }
}
