use std::io::{self, IsTerminal, Write};

use tracing::info;

use crypt_core::search::{Decoding, JointSearch, Progress, SearchObserver};
use crypt_core::token::{tokens_from_text, CipherToken};

use super::{load_index, load_settings, Options};

/// Prints decodings as they are found and keeps a progress line on stderr.
struct LiveReport {
    progress: bool,
    /// Width of the progress line currently on screen.
    shown: usize,
}

impl LiveReport {
    fn clear(&mut self) {
        if self.shown > 0 {
            eprint!("\r{}\r", " ".repeat(self.shown));
            self.shown = 0;
        }
    }
}

impl SearchObserver for LiveReport {
    fn on_result(&mut self, seq: usize, decoding: &Decoding) {
        self.clear();
        println!("#{seq}: {}", decoding.words.join(" "));
    }

    fn on_progress(&mut self, progress: &Progress<'_>) {
        if !self.progress {
            return;
        }
        let line = progress_line(progress);
        self.clear();
        eprint!("{line}");
        let _ = io::stderr().flush();
        self.shown = line.chars().count();
    }
}

fn progress_line(progress: &Progress<'_>) -> String {
    format!("depth {} {:?}", progress.ceiling, progress.indices)
}

/// Split every argument into cipher tokens.
pub fn parse_tokens(args: &[String]) -> Result<Vec<CipherToken>, crypt_core::token::TokenError> {
    let mut tokens = Vec::new();
    for arg in args {
        tokens.extend(tokens_from_text(arg)?);
    }
    Ok(tokens)
}

pub fn run_match(opts: &Options, args: &[String], json: bool) {
    let tokens = die!(parse_tokens(args), "Error: {}");
    if tokens.is_empty() {
        eprintln!("Error: no cipher tokens given");
        eprintln!("Usage: cryptool match TOKEN...");
        std::process::exit(2);
    }

    let settings = die!(load_settings(opts), "Error: {}");
    let index = die!(load_index(&settings), "Error: {}");
    let search = die!(JointSearch::new(tokens, &index), "Error: {}");
    info!(counts = ?search.candidate_counts(), "candidates");

    let config = settings.search_config();
    if json {
        let outcome = search.run(&config, &mut ());
        let out = die!(serde_json::to_string_pretty(&outcome), "Error: {}");
        println!("{out}");
        return;
    }

    let mut report = LiveReport {
        progress: io::stderr().is_terminal(),
        shown: 0,
    };
    let outcome = search.run(&config, &mut report);
    report.clear();

    println!();
    for line in ranked_lines(&outcome.results) {
        println!("{line}");
    }
    if !outcome.exhausted {
        println!("(stopped after {} results)", outcome.results.len());
    }
}

/// Final listing, best rank first.
pub fn ranked_lines(results: &[Decoding]) -> Vec<String> {
    results
        .iter()
        .map(|d| format!("rank {}: {}", d.rank, d.words.join(" ")))
        .collect()
}
