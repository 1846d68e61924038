use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::io::{stdin, stdout, BufRead, Write};
use std::process;
use std::sync::Arc;
use word_core::cli::{Command, OutputFormat, WordMakerArgs};
use word_core::config::Config;
use word_core::core::generator::sanitize;
use word_core::persistence::save_to_disk;
use word_core::report::{build_report, render_human, render_json, Report};
use word_core::worker::LookupWorker;
use word_core::{Lexicon, Result};

fn main() {
    let args = WordMakerArgs::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.quiet || args.verbose > 0 {
        builder.filter_level(args.log_level());
    }
    builder.target(env_logger::Target::Stderr).init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: WordMakerArgs) -> Result<()> {
    let config = Config::from_args(&args);
    match args.command.unwrap_or(Command::Interactive) {
        Command::Solve { letters } => {
            let lexicon = config.lexicon_source()?.load()?;
            let input = letters.join(" ");
            warn_if_large(&input, &config);
            let report = build_report(&input, &lexicon);
            print_report(&report, config.format)
        }
        Command::Interactive => {
            let lexicon = Arc::new(config.lexicon_source()?.load()?);
            interactive(lexicon, &config)
        }
        Command::BuildSnapshot { output } => {
            let lexicon = config.file_source()?.load()?;
            save_to_disk(&lexicon, &output)?;
            println!(
                "Snapshot with {} words and {} defined lemmas saved to '{}'",
                lexicon.words.len(),
                lexicon.senses.len(),
                output.display()
            );
            Ok(())
        }
    }
}

fn interactive(lexicon: Arc<Lexicon>, config: &Config) -> Result<()> {
    let worker = LookupWorker::spawn(lexicon)?;
    let human = config.format == OutputFormat::Human;
    let styled = human && stdout().is_tty();

    if human {
        println!("Word Generator and Meaning Finder. Type 'exit' to quit.");
        println!("--------------------------------------------------------");
    }

    let mut lines = stdin().lock().lines();
    loop {
        if human {
            print!("\nEnter a string of letters: ");
            stdout().flush()?;
        }

        let Some(line) = lines.next() else { break };
        let line = line?;
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        warn_if_large(&line, config);
        if styled {
            println!("{}", "Searching...".to_string().dim());
        }
        // The search runs on the worker thread; this one only waits.
        let report = worker.lookup(line)?;
        print_report(&report, config.format)?;
    }
    Ok(())
}

fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    let mut out = stdout().lock();
    match format {
        OutputFormat::Human => {
            let styled = out.is_tty();
            render_human(report, &mut out, styled)?
        }
        OutputFormat::Json => render_json(report, &mut out, false)?,
    }
    out.flush()?;
    Ok(())
}

fn warn_if_large(input: &str, config: &Config) {
    let letters = sanitize(input).chars().count();
    if letters > config.large_input_warning {
        log::warn!(
            "{} letters to permute; the exhaustive search may take a while",
            letters
        );
    }
}
