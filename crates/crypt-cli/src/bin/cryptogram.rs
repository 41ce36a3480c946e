use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;

use crypt_cli::commands::{load_bigrams, load_settings, Options};
use crypt_cli::trace_init::init_tracing;
use crypt_session::{Session, HELP, PROMPT};

const FAREWELL: &str = "Have a great day! :D";

#[derive(Parser)]
#[command(name = "cryptogram", about = "Solve a cryptogram by swapping letters")]
struct Cli {
    /// Settings TOML file (defaults are built in)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
    /// The cryptogram; several arguments are joined with spaces
    #[arg(required = true)]
    text: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let opts = Options {
        config: cli.config,
        ..Options::default()
    };
    let settings = load_settings(&opts).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    let bigrams = load_bigrams(&settings).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let crypt = cli.text.join(" ");
    let mut session = Session::new(&crypt, settings.display.clone());
    if let Some(table) = bigrams {
        session = session.with_english_bigrams(table);
    }

    let mut rng = rand::thread_rng();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{HELP}");
    println!();
    println!("{}", session.render_current());
    let mut prompt = PROMPT;

    let mut lines = stdin.lock().lines();
    loop {
        print!("{prompt}");
        let _ = stdout.flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                debug!(error = %e, "stdin closed");
                break;
            }
            None => break,
        };
        let resp = session.handle_line(line.trim(), &mut rng);
        for l in &resp.lines {
            println!("{l}");
        }
        if resp.quit {
            return;
        }
        prompt = resp.prompt;
    }
    println!();
    println!("{FAREWELL}");
}
