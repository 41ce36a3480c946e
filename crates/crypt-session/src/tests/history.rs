use super::{feed, make_session};
use crate::history::{progress_bar, replay};

#[test]
fn replay_tracks_progress() {
    let swaps = [('j', 't'), ('j', 'h'), ('x', 'e')];
    let steps = replay("jtx xll", &swaps, "the ell");
    assert_eq!(steps.len(), 3);

    assert_eq!(steps[0].text, "tjx xll");
    assert!(steps[0].solved_tokens.is_empty());
    assert!((steps[0].progress - 0.5).abs() < 1e-9);

    assert_eq!(steps[1].text, "thx xll");
    assert!((steps[1].progress - 4.0 / 6.0).abs() < 1e-9);

    assert_eq!(steps[2].text, "the ell");
    assert_eq!(steps[2].solved_tokens, vec![0, 2]);
    assert!((steps[2].progress - 1.0).abs() < 1e-9);
}

#[test]
fn toggle_steps_keep_text() {
    let steps = replay("ab", &[('a', 'a')], "ab");
    assert_eq!(steps[0].text, "ab");
    assert_eq!(steps[0].pair, ('a', 'a'));
    assert_eq!(steps[0].solved_tokens, vec![0]);
}

#[test]
fn history_command_renders_each_step() {
    let mut s = make_session("jtx xll");
    let resp = feed(&mut s, &["jt", "jh", "xe", "h"]);
    assert_eq!(resp.lines[0], "Start   jtx xll");
    assert_eq!(
        resp.lines[3],
        format!("x<->e   the ell  {} 2/2 words", progress_bar(1.0))
    );
    assert!(resp.lines[1].starts_with("j<->t   tjx xll  |"));
    assert!(resp.lines[1].ends_with("| 0/2 words"));
    assert_eq!(resp.lines.last().unwrap(), "the ell");
    assert_eq!(resp.lines.len(), 5);
}

#[test]
fn empty_history_is_just_start() {
    let mut s = make_session("abc");
    let resp = feed(&mut s, &["h"]);
    assert_eq!(resp.lines, vec!["Start   abc", "abc"]);
}
