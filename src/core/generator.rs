// File: src/core/generator.rs
use crate::core::lexicon::WordList;
use std::collections::BTreeSet;

/// Keeps only the alphabetic characters of `input`, in their original order
/// and case. "Alphabetic" is the Unicode `Alphabetic` property, so combining
/// vowel signs (Devanagari `ा`, for one) are kept as letters of their own.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Number of candidates the exhaustive search tests for `n` letters:
/// sum over k of n!/(n-k)!. Saturates at `u128::MAX`.
pub fn candidate_count(n: usize) -> u128 {
    let mut total: u128 = 0;
    let mut arrangements: u128 = 1;
    for k in 0..n {
        arrangements = arrangements.saturating_mul((n - k) as u128);
        total = total.saturating_add(arrangements);
    }
    total
}

/// Returns every word of `words` that can be spelled from the letters of
/// `input`, lowercase, deduplicated and sorted.
///
/// Every ordered arrangement of every subset of letter positions is tested,
/// so equal letters at different positions produce repeated candidates that
/// collapse in the result set. There is no pruning.
pub fn generate_valid_words(input: &str, words: &WordList) -> Vec<String> {
    let letters: Vec<char> = sanitize(input).chars().collect();
    if letters.is_empty() {
        return Vec::new();
    }
    log::debug!(
        "Testing {} candidates for {} letters",
        candidate_count(letters.len()),
        letters.len()
    );

    let mut found = BTreeSet::new();
    let mut used = vec![false; letters.len()];
    let mut candidate = String::with_capacity(letters.len() * 4);
    extend_candidates(&letters, &mut used, &mut candidate, words, &mut found);
    found.into_iter().collect()
}

/// Depth-first walk of the permutation tree. Each node reached is one
/// k-permutation of the letter positions, and each one is tested.
fn extend_candidates(
    letters: &[char],
    used: &mut [bool],
    candidate: &mut String,
    words: &WordList,
    found: &mut BTreeSet<String>,
) {
    for i in 0..letters.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        candidate.push(letters[i]);

        let word = candidate.to_lowercase();
        if words.contains(&word) {
            found.insert(word);
        }
        extend_candidates(letters, used, candidate, words, found);

        candidate.pop();
        used[i] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn english() -> WordList {
        WordList::from_words([
            "a", "act", "at", "cat", "ta", "tac", "eel", "lee", "eh", "he", "the", "bee", "be",
        ])
    }

    #[test]
    fn sanitize_drops_non_alphabetic() {
        assert_eq!(sanitize("C-a t!9"), "Cat");
        assert_eq!(sanitize("123 ?!"), "");
    }

    #[test]
    fn sanitize_keeps_non_ascii_letters_and_vowel_signs() {
        assert_eq!(sanitize("Café 2!"), "Café");
        // KA, digit one, vowel sign AA (a combining mark)
        assert_eq!(sanitize("\u{915}1\u{93e}"), "\u{915}\u{93e}");
        assert_eq!(sanitize("\u{966}\u{967}"), "");
    }

    #[test]
    fn accented_words_are_found_case_insensitively() {
        let words = WordList::from_words(["café", "face"]);
        assert_eq!(generate_valid_words("ÉFAC", &words), vec!["café"]);
        assert_eq!(
            generate_valid_words("\u{93e}\u{915}", &WordList::from_words(["\u{915}\u{93e}"])),
            vec!["\u{915}\u{93e}"]
        );
    }

    #[test]
    fn empty_and_numeric_inputs_yield_nothing() {
        assert!(generate_valid_words("", &english()).is_empty());
        assert!(generate_valid_words("123", &english()).is_empty());
    }

    #[test]
    fn cat_finds_its_anagrams() {
        let found = generate_valid_words("cat", &english());
        assert_eq!(found, vec!["a", "act", "at", "cat", "ta", "tac"]);
    }

    #[test]
    fn case_and_noise_are_ignored() {
        let found = generate_valid_words("  C.A.T  ", &english());
        assert!(found.contains(&"act".to_string()));
        assert!(found.contains(&"cat".to_string()));
    }

    #[test]
    fn repeated_letters_are_usable_once_each() {
        let found = generate_valid_words("ele", &english());
        assert_eq!(found, vec!["eel", "lee"]);
        // only one 'e' available
        let found = generate_valid_words("bel", &english());
        assert_eq!(found, vec!["be"]);
    }

    #[test]
    fn order_of_letters_matters_only_through_permutation() {
        assert_eq!(
            generate_valid_words("tca", &english()),
            generate_valid_words("cat", &english())
        );
    }

    #[test]
    fn candidate_count_matches_formula() {
        assert_eq!(candidate_count(0), 0);
        assert_eq!(candidate_count(1), 1);
        assert_eq!(candidate_count(3), 3 + 6 + 6);
        assert_eq!(candidate_count(4), 4 + 12 + 24 + 24);
        assert_eq!(candidate_count(200), u128::MAX);
    }

    fn letter_counts(s: &str) -> std::collections::HashMap<char, usize> {
        let mut counts = std::collections::HashMap::new();
        for c in s.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    proptest! {
        #[test]
        fn output_is_sorted_and_unique(input in "[a-zA-Z0-9 ]{0,6}") {
            let found = generate_valid_words(&input, &english());
            for pair in found.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        #[test]
        fn output_words_are_drawn_from_input_letters(input in "[a-eA-Ehlt0-9 .]{0,6}") {
            let available = letter_counts(&sanitize(&input).to_lowercase());
            for word in generate_valid_words(&input, &english()) {
                prop_assert!(word.chars().all(|c| c.is_alphabetic() && c.is_lowercase()));
                for (c, n) in letter_counts(&word) {
                    prop_assert!(available.get(&c).copied().unwrap_or(0) >= n);
                }
            }
        }

        #[test]
        fn generation_is_idempotent(input in "[a-z]{0,5}") {
            let words = english();
            prop_assert_eq!(
                generate_valid_words(&input, &words),
                generate_valid_words(&input, &words)
            );
        }
    }
}
