/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Swap two different letters everywhere.
    Swap(char, char),
    /// Toggle whether a letter is marked as solved.
    Toggle(char),
    Replace,
    Frequencies,
    Bigrams,
    Help,
    Shuffle,
    Common,
    History,
    Quit,
    /// Anything unrecognised: just show the current text again.
    Show,
}

impl Command {
    pub fn parse(input: &str) -> Self {
        match input {
            "r" => Self::Replace,
            "f" => Self::Frequencies,
            "b" => Self::Bigrams,
            "?" => Self::Help,
            "s" => Self::Shuffle,
            "c" => Self::Common,
            "h" => Self::History,
            "q" => Self::Quit,
            _ => {
                let mut chars = input.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(x), Some(y), None)
                        if x.is_ascii_alphabetic() && y.is_ascii_alphabetic() =>
                    {
                        let (x, y) = (x.to_ascii_lowercase(), y.to_ascii_lowercase());
                        if x == y {
                            Self::Toggle(x)
                        } else {
                            Self::Swap(x, y)
                        }
                    }
                    _ => Self::Show,
                }
            }
        }
    }
}

/// Where the session is in its input cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// `r` was entered; the next line is the new cryptogram.
    AwaitingReplacement,
}

pub const PROMPT: &str = "> ";
pub const REPLACEMENT_PROMPT: &str = "Replacement cryptogram: ";

/// What the frontend should print after one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<String>,
    /// Prompt to show before reading the next line.
    pub prompt: &'static str,
    pub quit: bool,
}

impl Response {
    pub(crate) fn new() -> Self {
        Self {
            lines: Vec::new(),
            prompt: PROMPT,
            quit: false,
        }
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}
