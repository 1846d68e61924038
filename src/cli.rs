//! Command line argument parsing for the word_maker binary using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Find every word hidden in a string of letters, with definitions
#[derive(Parser, Debug, Clone)]
#[command(name = "word_maker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct WordMakerArgs {
    /// Word list, one word per line
    #[arg(long, env = "WORD_MAKER_WORDS", value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// WordNet database directory (the one holding index.noun, data.noun, ...)
    #[arg(long, env = "WORD_MAKER_WORDNET", value_name = "DIR")]
    pub wordnet: Option<PathBuf>,

    /// Pre-built lexicon snapshot; takes precedence over --words/--wordnet
    #[arg(long, env = "WORD_MAKER_SNAPSHOT", value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Warn before searching inputs with more letters than this
    #[arg(long, default_value = "10")]
    pub warn_letters: usize,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Solve the given letters once and exit
    Solve {
        /// Letters to search; several arguments are joined with spaces
        #[arg(required = true)]
        letters: Vec<String>,
    },

    /// Prompt for letters until 'exit' (the default)
    Interactive,

    /// Compile --words and --wordnet into a snapshot file
    #[command(name = "build-snapshot")]
    BuildSnapshot {
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl WordMakerArgs {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_collects_letter_arguments() {
        let args = WordMakerArgs::try_parse_from([
            "word_maker",
            "--words",
            "words.txt",
            "solve",
            "ca",
            "t",
        ])
        .unwrap();
        assert_eq!(args.words, Some(PathBuf::from("words.txt")));
        match args.command {
            Some(Command::Solve { letters }) => assert_eq!(letters, vec!["ca", "t"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let args = WordMakerArgs::try_parse_from(["word_maker"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.format, OutputFormat::Human);
        assert_eq!(args.warn_letters, 10);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn verbosity_flags() {
        let args = WordMakerArgs::try_parse_from(["word_maker", "-vv"]).unwrap();
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
        let args = WordMakerArgs::try_parse_from(["word_maker", "-v", "-q"]).unwrap();
        assert_eq!(args.log_level(), log::LevelFilter::Error);
    }

    #[test]
    fn solve_requires_letters() {
        assert!(WordMakerArgs::try_parse_from(["word_maker", "solve"]).is_err());
    }
}
