//! Splitting ciphertext into word and separator runs.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Break `s` into runs that are either entirely word characters or entirely
/// whitespace/punctuation. Concatenating the runs gives back `s`.
pub fn tokenize(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (i, c) in s.char_indices() {
        let word = is_word_char(c);
        match current {
            Some(kind) if kind != word => {
                runs.push(&s[start..i]);
                start = i;
            }
            _ => {}
        }
        current = Some(word);
    }
    if start < s.len() {
        runs.push(&s[start..]);
    }
    runs
}

pub fn is_word_token(s: &str) -> bool {
    s.chars().next().is_some_and(is_word_char)
}
