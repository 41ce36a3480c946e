use std::fs;
use std::path::Path;

use crypt_core::stats::{letter_frequencies, BigramTable, ENGLISH_LETTER_ORDER};

pub fn freq(text: &str) {
    for line in frequency_report(text) {
        println!("{line}");
    }
}

/// One line per letter: the cipher letter, its count and the English letter
/// at the same rank.
pub fn frequency_report(text: &str) -> Vec<String> {
    let freqs = letter_frequencies(text);
    let total: usize = freqs.iter().map(|&(_, n)| n).sum();
    let mut lines = vec![format!("{total} letters")];
    for ((c, n), en) in freqs.into_iter().zip(ENGLISH_LETTER_ORDER.chars()) {
        let pct = 100.0 * n as f64 / total as f64;
        lines.push(format!("{c}  {n:>4}  {pct:5.1}%   {en}"));
    }
    lines
}

pub fn bigrams(input: &str, output: &str) {
    let text = die!(fs::read_to_string(input), "Error reading {input}: {}");
    let table = BigramTable::from_text(&text);
    die!(table.save(Path::new(output)), "Error: {}");
    println!("OK: {} bigrams written to {output}", table.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_ranks_letters() {
        let lines = frequency_report("jtx xll!");
        assert_eq!(lines[0], "6 letters");
        assert_eq!(lines[1], "l     2   33.3%   e");
        assert_eq!(lines[2], "x     2   33.3%   t");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn empty_text_has_header_only() {
        assert_eq!(frequency_report("123"), vec!["0 letters"]);
    }
}
