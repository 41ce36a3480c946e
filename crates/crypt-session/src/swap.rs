/// Exchange letters `x` and `y` in `s`, matching case: `x`<->`y` and
/// `X`<->`Y`. Everything else is left alone.
pub fn swap_letters(s: &str, x: char, y: char) -> String {
    let (xu, yu) = (x.to_ascii_uppercase(), y.to_ascii_uppercase());
    s.chars()
        .map(|c| match c {
            _ if c == x => y,
            _ if c == y => x,
            _ if c == xu => yu,
            _ if c == yu => xu,
            _ => c,
        })
        .collect()
}

/// Replay a swap history onto `s`. Pairs of equal letters are mark toggles
/// and leave the text unchanged.
pub fn apply_swaps(s: &str, swaps: &[(char, char)]) -> String {
    swaps.iter().fold(s.to_string(), |acc, &(x, y)| {
        if x == y {
            acc
        } else {
            swap_letters(&acc, x, y)
        }
    })
}
