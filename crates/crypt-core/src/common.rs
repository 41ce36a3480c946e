//! Short English words and double letters that show up most often in
//! cryptograms, for use as hints.

pub const TWO_LETTER_WORDS: &[&str] = &[
    "of", "to", "in", "it", "is", "be", "as", "at", "so", "we", "he", "by", "or", "on", "do",
    "if", "me", "my", "up", "an", "go", "no", "us", "am",
];

pub const THREE_LETTER_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old",
    "see", "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too", "use",
];

pub const FOUR_LETTER_WORDS: &[&str] = &[
    "that", "with", "have", "this", "will", "your", "from", "they", "know", "want", "been",
    "good", "much", "some", "time",
];

pub const DOUBLE_LETTERS: &[&str] = &["ss", "ee", "tt", "ff", "ll", "mm", "oo", "rr", "nn", "pp"];

/// Titled groups in display order.
pub fn hint_groups() -> [(&'static str, &'static [&'static str]); 4] {
    [
        ("Common 2-letter words", TWO_LETTER_WORDS),
        ("Common 3-letter words", THREE_LETTER_WORDS),
        ("Common 4-letter words", FOUR_LETTER_WORDS),
        ("Common double letters", DOUBLE_LETTERS),
    ]
}

/// Lay `words` out left-aligned in columns of `column_width`, starting a new
/// line before one would exceed `max_width` (indent included). Lines are
/// returned indented and without trailing spaces.
pub fn columns(words: &[&str], column_width: usize, max_width: usize, indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in words {
        let cell = format!("{word:<column_width$}");
        if !line.is_empty() && indent + line.len() + cell.len() > max_width {
            lines.push(format!("{pad}{}", line.trim_end()));
            line.clear();
        }
        line.push_str(&cell);
    }
    if !line.is_empty() {
        lines.push(format!("{pad}{}", line.trim_end()));
    }
    lines
}
