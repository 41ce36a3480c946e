use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crypt_cli::commands::{config_ops, match_ops, stats_ops, Options};
use crypt_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "cryptool", about = "Cryptogram search and statistics")]
struct Cli {
    /// Settings TOML file (defaults are built in)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Word list, one word per line; repeat to combine lists
    #[arg(long = "dict", global = true)]
    dicts: Vec<PathBuf>,
    /// Stop after this many decodings
    #[arg(short = 'n', long, global = true)]
    max_results: Option<NonZeroUsize>,
    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find dictionary words that jointly decode the cipher tokens
    Match {
        /// Cipher tokens; upper-case letters are known plaintext
        #[arg(required = true)]
        tokens: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Letter frequencies of a text next to English ranking
    Freq {
        text: String,
    },
    /// Build a bigram frequency table from a plain text file
    Bigrams {
        /// Input text file
        input: String,
        /// Output JSON file
        #[arg(default_value = "bigram_freqs.json")]
        output: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let opts = Options {
        config: cli.config,
        dicts: cli.dicts,
        max_results: cli.max_results,
    };

    match cli.command {
        Command::Match { tokens, json } => match_ops::run_match(&opts, &tokens, json),
        Command::Freq { text } => stats_ops::freq(&text),
        Command::Bigrams { input, output } => stats_ops::bigrams(&input, &output),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
