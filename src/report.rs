// File: src/report.rs
//! What the user sees for one request, and how it is printed.

use crate::core::generator::generate_valid_words;
use crate::core::lexicon::Lexicon;
use crate::core::meanings::get_meanings;
use crate::core::types::WordMeanings;
use crate::error::Result;
use crossterm::style::Stylize;
use serde::Serialize;
use std::io::Write;

pub const PROMPT_NOTICE: &str = "Please enter a string of letters.";
pub const NO_WORDS_NOTICE: &str = "No valid words found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Input was empty after trimming; nothing was searched.
    PromptForInput,
    NoWordsFound,
    Found {
        /// Every valid word, including those with no recorded sense.
        total: usize,
        meanings: WordMeanings,
    },
}

/// Runs the generator and the meaning lookup for one line of user input.
pub fn build_report(input: &str, lexicon: &Lexicon) -> Report {
    let input = input.trim();
    if input.is_empty() {
        return Report::PromptForInput;
    }

    let words = generate_valid_words(input, &lexicon.words);
    if words.is_empty() {
        return Report::NoWordsFound;
    }
    log::debug!("{} valid words for '{}'", words.len(), input);

    Report::Found {
        total: words.len(),
        meanings: get_meanings(&words, &lexicon.senses),
    }
}

/// Plain-text rendering. With `styled`, words are bold and notices red.
pub fn render_human<W: Write>(report: &Report, out: &mut W, styled: bool) -> Result<()> {
    match report {
        Report::PromptForInput => write_notice(out, PROMPT_NOTICE, styled)?,
        Report::NoWordsFound => write_notice(out, NO_WORDS_NOTICE, styled)?,
        Report::Found { total, meanings } => {
            writeln!(out, "Total valid words generated: {total}\n")?;
            for (word, definitions) in meanings.iter() {
                let heading = format!("{word}:");
                if styled {
                    writeln!(out, "{}", heading.bold())?;
                } else {
                    writeln!(out, "{heading}")?;
                }
                for definition in definitions {
                    writeln!(out, "  - {definition}")?;
                }
            }
        }
    }
    Ok(())
}

fn write_notice<W: Write>(out: &mut W, notice: &str, styled: bool) -> Result<()> {
    if styled {
        writeln!(out, "{}", notice.to_string().red())?;
    } else {
        writeln!(out, "{notice}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    status: &'static str,
    total: usize,
    words: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    word: &'a str,
    definitions: &'a [String],
}

pub fn render_json<W: Write>(report: &Report, out: &mut W, pretty: bool) -> Result<()> {
    let json = match report {
        Report::PromptForInput => JsonReport {
            status: "empty_input",
            total: 0,
            words: Vec::new(),
        },
        Report::NoWordsFound => JsonReport {
            status: "no_words",
            total: 0,
            words: Vec::new(),
        },
        Report::Found { total, meanings } => JsonReport {
            status: "found",
            total: *total,
            words: meanings
                .iter()
                .map(|(word, definitions)| JsonEntry { word, definitions })
                .collect(),
        },
    };
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &json)?;
    } else {
        serde_json::to_writer(&mut *out, &json)?;
    }
    writeln!(out)?;
    Ok(())
}
