//! Replaying the swap history to show how a solution was reached.

use crypt_core::text::{is_word_token, tokenize};

use crate::swap::swap_letters;

const BAR_WIDTH: usize = 30;

/// State of the text right after one history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStep {
    pub pair: (char, char),
    pub text: String,
    /// Indices (into `tokenize(text)`) of words already equal to the final text.
    pub solved_tokens: Vec<usize>,
    /// Share of letters already in their final position.
    pub progress: f64,
}

/// Apply `swaps` to `crypt` one by one, comparing each intermediate text
/// with `final_text`.
pub fn replay(crypt: &str, swaps: &[(char, char)], final_text: &str) -> Vec<HistoryStep> {
    let good_tokens = tokenize(final_text);
    let good: Vec<char> = final_text.chars().collect();
    let mut text = crypt.to_string();
    let mut steps = Vec::with_capacity(swaps.len());

    for &(x, y) in swaps {
        if x != y {
            text = swap_letters(&text, x, y);
        }

        let solved_tokens = tokenize(&text)
            .iter()
            .enumerate()
            .filter(|(i, t)| is_word_token(t) && good_tokens.get(*i) == Some(*t))
            .map(|(i, _)| i)
            .collect();

        // a letter counts once it sits in its final place somewhere
        let chars: Vec<char> = text.chars().collect();
        let correct: Vec<char> = chars
            .iter()
            .zip(&good)
            .filter(|(a, b)| a == b && a.is_alphabetic())
            .map(|(a, _)| *a)
            .collect();
        let letters = chars.iter().filter(|c| c.is_alphabetic()).count();
        let done = chars.iter().filter(|c| correct.contains(*c)).count();
        let progress = if letters == 0 {
            0.0
        } else {
            done as f64 / letters as f64
        };

        steps.push(HistoryStep {
            pair: (x, y),
            text: text.clone(),
            solved_tokens,
            progress,
        });
    }
    steps
}

/// Text progress bar: full blocks plus a half block for the remainder.
pub fn progress_bar(fraction: f64) -> String {
    let n = BAR_WIDTH as f64 * fraction.clamp(0.0, 1.0);
    let full = n.floor() as usize;
    let mut bar = "█".repeat(full);
    let mut used = full;
    if n - full as f64 > 0.5 {
        bar.push('▌');
        used += 1;
    }
    bar.push_str(&" ".repeat(BAR_WIDTH.saturating_sub(used)));
    format!("|{bar}|")
}

/// Render the history as display lines.
pub fn render(crypt: &str, steps: &[HistoryStep]) -> Vec<String> {
    let mut lines = vec![format!("Start   {crypt}")];
    for step in steps {
        let (x, y) = step.pair;
        let words = tokenize(&step.text)
            .iter()
            .filter(|t| is_word_token(t))
            .count();
        lines.push(format!(
            "{x}<->{y}   {}  {} {}/{} words",
            step.text,
            progress_bar(step.progress),
            step.solved_tokens.len(),
            words
        ));
    }
    lines
}
