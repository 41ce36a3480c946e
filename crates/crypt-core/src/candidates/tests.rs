use proptest::prelude::*;

use super::*;

fn tok(s: &str) -> CipherToken {
    CipherToken::parse(s).unwrap()
}

fn words(ws: &[&str]) -> Vec<String> {
    ws.iter().map(|w| w.to_string()).collect()
}

#[test]
fn moose_matches_repeated_pattern() {
    let t = tok("abbcd");
    assert!(is_match(&t, "moose"));
    // geese repeats e at positions 1, 2 and 4: four distinct letters expected, three present
    assert!(!is_match(&t, "geese"));
    // four distinct letters, but positions 1 and 2 differ
    assert!(!is_match(&t, "masse"));
}

#[test]
fn distinct_count_prunes() {
    // all positions distinct in the token, but "geese" has only 3 letters
    assert!(!is_match(&tok("abcde"), "geese"));
    assert!(is_match(&tok("abcde"), "house"));
}

#[test]
fn length_must_agree() {
    assert!(!is_match(&tok("abc"), "ab"));
    assert!(!is_match(&tok("ab"), "abc"));
}

#[test]
fn fixed_letters_must_match() {
    let t = tok("aEb");
    assert!(is_match(&t, "set"));
    assert!(!is_match(&t, "sat"));
}

#[test]
fn fixed_letter_is_its_own_symbol() {
    // free e and fixed E are different symbols, so the word needs two letters
    let t = tok("eE");
    assert!(is_match(&t, "me"));
    assert!(!is_match(&t, "ee"));
}

#[test]
fn repeated_fixed_letters() {
    let t = tok("SaS");
    assert!(is_match(&t, "sos"));
    assert!(!is_match(&t, "sss"));
}

#[test]
fn non_letter_words_never_match() {
    assert!(!is_match(&tok("abcd"), "it's"));
    assert!(!is_match(&tok("ab"), "é1"));
}

#[test]
fn filter_preserves_rank_order() {
    let bucket = words(&["that", "with", "have", "this", "will", "been"]);
    let list = filter(&tok("abca"), &bucket);
    assert_eq!(list.words(), &["that"]);

    let list = filter(&tok("abcd"), &bucket);
    assert_eq!(list.words(), &["with", "have", "this"]);
    assert_eq!(list.get(0), Some("with"));
    assert_eq!(list.get(3), None);
}

#[test]
fn filter_empty_bucket() {
    let list = filter(&tok("xyz"), &[]);
    assert!(list.is_empty());
}

#[test]
fn candidates_from_index_bucket() {
    let index = WordIndex::from_words(["moose", "on", "geese", "no", "goose"]);
    let list = candidates_for(&tok("abbcd"), &index);
    assert_eq!(list.words(), &["moose", "goose"]);
}

/// First-occurrence normal form: "abca" -> [0, 1, 2, 0].
fn shape<T: PartialEq + Copy>(xs: &[T]) -> Vec<usize> {
    let mut seen: Vec<T> = Vec::new();
    xs.iter()
        .map(|x| match seen.iter().position(|s| s == x) {
            Some(i) => i,
            None => {
                seen.push(*x);
                seen.len() - 1
            }
        })
        .collect()
}

fn brute_force_match(token: &CipherToken, word: &str) -> bool {
    let w = word.as_bytes();
    let t = token.symbols();
    w.len() == t.len()
        && shape(t) == shape(w)
        && t.iter()
            .zip(w)
            .all(|(s, &b)| !s.is_fixed() || s.letter() == b)
}

fn arb_token() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            6 => prop::sample::select(vec!['a', 'b', 'c', 'd']),
            1 => prop::sample::select(vec!['A', 'E', 'S']),
        ],
        1..7,
    )
    .prop_map(|cs| cs.into_iter().collect())
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'e', 'o', 's', 't']), 1..7)
        .prop_map(|cs| cs.into_iter().collect())
}

proptest! {
    #[test]
    fn filter_agrees_with_brute_force(t in arb_token(), w in arb_word()) {
        let token = tok(&t);
        prop_assert_eq!(is_match(&token, &w), brute_force_match(&token, &w));
    }

    #[test]
    fn matches_share_length_and_distinct_count(t in arb_token(), ws in prop::collection::vec(arb_word(), 0..30)) {
        let token = tok(&t);
        let list = filter(&token, &ws);
        for w in list.words() {
            prop_assert_eq!(w.len(), token.len());
            prop_assert_eq!(distinct_letters(w.as_bytes()), token.distinct_symbols());
            prop_assert_eq!(shape(token.symbols()), shape(w.as_bytes()));
        }
    }
}
