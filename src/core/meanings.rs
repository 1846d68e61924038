// File: src/core/meanings.rs
use crate::core::lexicon::SenseDictionary;
use crate::core::types::WordMeanings;

/// Collects the definitions of each word, in input order.
///
/// Words the dictionary has no sense for are left out of the result
/// entirely, even though they passed the word list check. The reference
/// word list and the sense dictionary are separate resources and do not
/// cover exactly the same words.
pub fn get_meanings<S: AsRef<str>>(words: &[S], senses: &SenseDictionary) -> WordMeanings {
    let mut meanings = WordMeanings::new();
    for word in words {
        let word = word.as_ref();
        let definitions = senses.definitions(word);
        if definitions.is_empty() {
            log::debug!("No senses recorded for '{}'", word);
            continue;
        }
        meanings.insert(word.to_string(), definitions);
    }
    meanings
}
