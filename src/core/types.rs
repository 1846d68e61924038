// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Syntactic category of a sense, as recorded by WordNet's `ss_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl PartOfSpeech {
    /// Maps a WordNet synset type letter (`n`, `v`, `a`, `s`, `r`).
    pub fn from_synset_type(tag: &str) -> Option<Self> {
        match tag {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" => Some(PartOfSpeech::Adjective),
            "s" => Some(PartOfSpeech::AdjectiveSatellite),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }
}

/// One meaning of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub pos: PartOfSpeech,
    pub definition: String,
    /// Usage examples quoted in the gloss, e.g. `"the cat sat on the mat"`.
    /// Kept in the lexicon snapshot only; lookups and reports surface
    /// `definition` alone.
    pub examples: Vec<String>,
}

impl Sense {
    pub fn new(pos: PartOfSpeech, definition: impl Into<String>) -> Self {
        Self {
            pos,
            definition: definition.into(),
            examples: Vec::new(),
        }
    }
}

/// Definitions per word, iterated in the order words were inserted.
///
/// Only words with at least one definition are ever present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordMeanings {
    entries: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl WordMeanings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the definitions of `word`. A word seen again keeps its
    /// original position and takes the new definitions. Empty definition
    /// lists are ignored.
    pub fn insert(&mut self, word: String, definitions: Vec<String>) {
        if definitions.is_empty() {
            return;
        }
        match self.positions.get(&word) {
            Some(&idx) => self.entries[idx].1 = definitions,
            None => {
                self.positions.insert(word.clone(), self.entries.len());
                self.entries.push((word, definitions));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.positions
            .get(word)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    pub fn contains_key(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(word, defs)| (word.as_str(), defs.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut meanings = WordMeanings::new();
        meanings.insert("cat".into(), vec!["feline".into()]);
        meanings.insert("act".into(), vec!["a deed".into()]);
        let words: Vec<&str> = meanings.words().collect();
        assert_eq!(words, vec!["cat", "act"]);
    }

    #[test]
    fn repeated_word_keeps_first_position() {
        let mut meanings = WordMeanings::new();
        meanings.insert("at".into(), vec!["old".into()]);
        meanings.insert("cat".into(), vec!["feline".into()]);
        meanings.insert("at".into(), vec!["new".into()]);
        assert_eq!(meanings.len(), 2);
        assert_eq!(meanings.words().next(), Some("at"));
        assert_eq!(meanings.get("at"), Some(&["new".to_string()][..]));
    }

    #[test]
    fn empty_definitions_are_not_recorded() {
        let mut meanings = WordMeanings::new();
        meanings.insert("zzxxqq".into(), Vec::new());
        assert!(meanings.is_empty());
        assert!(!meanings.contains_key("zzxxqq"));
    }

    #[test]
    fn synset_type_letters() {
        assert_eq!(PartOfSpeech::from_synset_type("s"), Some(PartOfSpeech::AdjectiveSatellite));
        assert_eq!(PartOfSpeech::from_synset_type("r"), Some(PartOfSpeech::Adverb));
        assert_eq!(PartOfSpeech::from_synset_type("x"), None);
    }
}
