//! Stateful letter-swap session for solving a cryptogram by hand.
//!
//! `Session` owns the cryptogram, the working text and the swap history. It
//! turns each input line into a `Response` of plain text lines; the frontend
//! decides how to print them.

pub mod history;
pub mod swap;
mod types;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crypt_core::common::{columns, hint_groups};
use crypt_core::settings::DisplaySettings;
use crypt_core::stats::{letter_frequencies, BigramTable, ENGLISH_LETTER_ORDER};

pub use types::{Command, Response, SessionState, PROMPT, REPLACEMENT_PROMPT};

use swap::{apply_swaps, swap_letters};

const TOP_LETTERS: usize = 10;
const TOP_BIGRAMS: usize = 10;

pub const HELP: &str = "\
At the prompt:

> XY  --> (any two letters); Swap letters X and Y in the working solution.
> XX  --> (same letter twice); Toggle whether X is marked as correct.
> r   --> Retype the original cryptogram text.
> f   --> Show letter frequency alongside English letter ranking.
> ?   --> Show help (this message).
> s   --> Shuffle all letters randomly.
> c   --> Show common short English words.
> h   --> Print an abbreviated work history, for sharing your process.
> b   --> Toggle showing bigram frequency data.
> q   --> Quit.";

pub struct Session {
    crypt: String,
    current: String,
    swaps: Vec<(char, char)>,
    marked: BTreeSet<char>,
    bigram_mode: bool,
    state: SessionState,
    display: DisplaySettings,
    english_bigrams: Option<BigramTable>,
}

impl Session {
    pub fn new(crypt: &str, display: DisplaySettings) -> Self {
        Self {
            crypt: crypt.to_string(),
            current: crypt.to_string(),
            swaps: Vec::new(),
            marked: BTreeSet::new(),
            bigram_mode: false,
            state: SessionState::Idle,
            display,
            english_bigrams: None,
        }
    }

    /// Reference bigram frequencies shown next to the cipher's in bigram mode.
    pub fn with_english_bigrams(mut self, table: BigramTable) -> Self {
        self.english_bigrams = Some(table);
        self
    }

    pub fn crypt(&self) -> &str {
        &self.crypt
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn swaps(&self) -> &[(char, char)] {
        &self.swaps
    }

    pub fn is_marked(&self, letter: char) -> bool {
        self.marked.contains(&letter.to_ascii_lowercase())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn bigram_mode(&self) -> bool {
        self.bigram_mode
    }

    /// Process one line of input.
    pub fn handle_line<R: Rng + ?Sized>(&mut self, input: &str, rng: &mut R) -> Response {
        if self.state == SessionState::AwaitingReplacement {
            self.state = SessionState::Idle;
            self.replace(input);
            return self.with_current(Response::new());
        }

        let command = Command::parse(input);
        debug!(?command);
        let mut resp = Response::new();
        match command {
            Command::Swap(x, y) => {
                self.swaps.push((x, y));
                self.current = swap_letters(&self.current, x, y);
            }
            Command::Toggle(x) => {
                self.swaps.push((x, x));
                self.toggle(x);
            }
            Command::Replace => {
                resp.push("Original cryptogram:");
                resp.push(self.crypt.clone());
                resp.prompt = REPLACEMENT_PROMPT;
                self.state = SessionState::AwaitingReplacement;
                return resp;
            }
            Command::Frequencies => self.frequencies(&mut resp),
            Command::Bigrams => {
                self.bigram_mode = !self.bigram_mode;
                resp.push(format!(
                    "Bigram mode {}.",
                    if self.bigram_mode { "on" } else { "off" }
                ));
            }
            Command::Help => resp.lines.extend(HELP.lines().map(str::to_string)),
            Command::Shuffle => self.shuffle(rng),
            Command::Common => self.common(&mut resp),
            Command::History => {
                let steps = history::replay(&self.crypt, &self.swaps, &self.current);
                resp.lines.extend(history::render(&self.crypt, &steps));
            }
            Command::Quit => {
                resp.push("Have a great day! :D");
                resp.quit = true;
                return resp;
            }
            Command::Show => {}
        }
        self.with_current(resp)
    }

    fn toggle(&mut self, letter: char) {
        if !self.marked.remove(&letter) {
            self.marked.insert(letter);
        }
    }

    /// Swap in a new cryptogram and replay the history onto it. Marks are
    /// rebuilt from the toggle entries.
    fn replace(&mut self, crypt: &str) {
        self.crypt = crypt.to_string();
        self.current = apply_swaps(crypt, &self.swaps);
        self.marked.clear();
        let toggles: Vec<char> = self
            .swaps
            .iter()
            .filter(|(x, y)| x == y)
            .map(|&(x, _)| x)
            .collect();
        for x in toggles {
            self.toggle(x);
        }
        debug!(swaps = self.swaps.len(), "replayed history onto new cryptogram");
    }

    /// Replace the history with one random swap per letter.
    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.swaps = (b'a'..=b'z')
            .map(|x| (x as char, (b'a' + rng.gen_range(0..26u8)) as char))
            .collect();
        self.current = apply_swaps(&self.crypt, &self.swaps);
        self.marked.clear();
    }

    fn frequencies(&self, resp: &mut Response) {
        let cipher: Vec<String> = letter_frequencies(&self.current)
            .into_iter()
            .take(TOP_LETTERS)
            .map(|(c, _)| c.to_string())
            .collect();
        let english: Vec<String> = ENGLISH_LETTER_ORDER
            .chars()
            .take(TOP_LETTERS)
            .map(|c| c.to_string())
            .collect();
        resp.push(format!("Cipher letters:  {}", cipher.join(" ")));
        resp.push(format!("English letters: {}", english.join(" ")));
    }

    fn common(&self, resp: &mut Response) {
        let d = &self.display;
        for (title, words) in hint_groups() {
            resp.push("");
            resp.push(format!("{title}:"));
            resp.lines
                .extend(columns(words, d.column_width, d.max_width, d.indent));
        }
        resp.push("");
    }

    fn bigrams(&self, resp: &mut Response) {
        let cipher = BigramTable::from_text(&self.current);
        let top = |t: &BigramTable| -> String {
            t.top(TOP_BIGRAMS)
                .into_iter()
                .map(|(b, _)| b)
                .collect::<Vec<_>>()
                .join(" ")
        };
        resp.push(format!("Cipher bigrams:  {}", top(&cipher)));
        if let Some(en) = &self.english_bigrams {
            resp.push(format!("English bigrams: {}", top(en)));
        }
    }

    /// Working text with marked letters upper-cased.
    pub fn render_current(&self) -> String {
        self.current
            .chars()
            .map(|c| {
                if self.is_marked(c) {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    }

    fn with_current(&self, mut resp: Response) -> Response {
        resp.push(self.render_current());
        if self.bigram_mode {
            self.bigrams(&mut resp);
        }
        resp
    }
}
