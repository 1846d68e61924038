// File: src/wordnet.rs
//! Reader for the WordNet 3.x database files.
//!
//! Each part of speech has an `index.<pos>` file listing, per lemma, the
//! byte offsets of its synsets in WordNet's frequency order, and a
//! `data.<pos>` file holding one synset per line, keyed by that offset.
//! Lines beginning with two spaces are the license header.

use crate::core::lexicon::SenseDictionary;
use crate::core::types::{PartOfSpeech, Sense};
use crate::error::{Result, WordMakerError};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// File suffixes in the order senses are reported: nouns, verbs,
/// adjectives (satellites included), adverbs.
const POS_FILES: [&str; 4] = ["noun", "verb", "adj", "adv"];

/// Loads every sense of every lemma in a WordNet `dict/` directory.
pub fn load_senses<P: AsRef<Path>>(dir: P) -> Result<SenseDictionary> {
    let dir = dir.as_ref();
    let mut dictionary = SenseDictionary::new();
    let mut seen: HashSet<(String, &str, u64)> = HashSet::new();

    for pos in POS_FILES {
        let synsets = read_data_file(&dir.join(format!("data.{pos}")))?;
        let index_path = dir.join(format!("index.{pos}"));
        let reader = BufReader::new(File::open(&index_path)?);

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if is_header(&line) {
                continue;
            }
            let (lemma, offsets) = parse_index_line(&line)
                .map_err(|reason| WordMakerError::wordnet(&index_path, line_no + 1, reason))?;
            for offset in offsets {
                let sense = synsets.get(&offset).ok_or_else(|| {
                    WordMakerError::wordnet(
                        &index_path,
                        line_no + 1,
                        format!("offset {offset:08} not found in data.{pos}"),
                    )
                })?;
                if seen.insert((lemma.clone(), pos, offset)) {
                    dictionary.insert(&lemma, sense.clone());
                }
            }
        }
    }

    log::info!(
        "Loaded senses for {} lemmas from {}",
        dictionary.len(),
        dir.display()
    );
    Ok(dictionary)
}

fn is_header(line: &str) -> bool {
    line.starts_with("  ") || line.trim().is_empty()
}

fn read_data_file(path: &Path) -> Result<HashMap<u64, Sense>> {
    let reader = BufReader::new(File::open(path)?);
    let mut synsets = HashMap::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if is_header(&line) {
            continue;
        }
        let (offset, sense) = parse_data_line(&line)
            .map_err(|reason| WordMakerError::wordnet(path, line_no + 1, reason))?;
        synsets.insert(offset, sense);
    }
    Ok(synsets)
}

/// `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt synset_offset...`
fn parse_index_line(line: &str) -> std::result::Result<(String, Vec<u64>), String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err("truncated index line".to_string());
    }
    let lemma = fields[0].replace('_', " ").to_lowercase();
    let synset_cnt: usize = fields[2]
        .parse()
        .map_err(|_| format!("bad synset count '{}'", fields[2]))?;
    let p_cnt: usize = fields[3]
        .parse()
        .map_err(|_| format!("bad pointer count '{}'", fields[3]))?;

    // skip pointer symbols, sense_cnt and tagsense_cnt
    let first_offset = 4 + p_cnt + 2;
    if fields.len() < first_offset + synset_cnt {
        return Err(format!(
            "expected {synset_cnt} synset offsets, found {}",
            fields.len().saturating_sub(first_offset)
        ));
    }
    let offsets = fields[first_offset..first_offset + synset_cnt]
        .iter()
        .map(|f| f.parse::<u64>().map_err(|_| format!("bad offset '{f}'")))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((lemma, offsets))
}

/// `offset lex_filenum ss_type w_cnt word lex_id ... | gloss`
fn parse_data_line(line: &str) -> std::result::Result<(u64, Sense), String> {
    let (columns, gloss) = line
        .split_once('|')
        .ok_or_else(|| "missing gloss separator".to_string())?;
    let fields: Vec<&str> = columns.split_whitespace().collect();
    if fields.len() < 3 {
        return Err("truncated data line".to_string());
    }
    let offset: u64 = fields[0]
        .parse()
        .map_err(|_| format!("bad offset '{}'", fields[0]))?;
    let pos = PartOfSpeech::from_synset_type(fields[2])
        .ok_or_else(|| format!("unknown synset type '{}'", fields[2]))?;

    let (definition, examples) = split_gloss(gloss);
    Ok((
        offset,
        Sense {
            pos,
            definition,
            examples,
        },
    ))
}

/// Separates a gloss into its definition and its quoted usage examples.
///
/// Quoted spans are lifted out whole before the rest is split on `;`, since
/// examples may themselves contain semicolons. An attribution right after an
/// example (`"..." - Author`) is dropped along with it.
fn split_gloss(gloss: &str) -> (String, Vec<String>) {
    let mut examples = Vec::new();
    let mut rest = String::with_capacity(gloss.len());
    let mut remaining = gloss;

    while let Some(open) = remaining.find('"') {
        let Some(len) = remaining[open + 1..].find('"') else {
            break;
        };
        rest.push_str(&remaining[..open]);
        let example = remaining[open + 1..open + 1 + len].trim();
        if !example.is_empty() {
            examples.push(example.to_string());
        }
        remaining = &remaining[open + len + 2..];

        if remaining.trim_start().starts_with('-') {
            let end = remaining.find(';').unwrap_or(remaining.len());
            remaining = &remaining[end..];
        }
    }
    rest.push_str(remaining);

    let definition = rest
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    (definition, examples)
}
