// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod report;
pub mod wordnet;
pub mod worker;

pub use crate::core::generator::generate_valid_words;
pub use crate::core::lexicon::{Lexicon, SenseDictionary, WordList};
pub use crate::core::meanings::get_meanings;
pub use crate::core::types::{PartOfSpeech, Sense, WordMeanings};
pub use crate::error::{Result, WordMakerError};
