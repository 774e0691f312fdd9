//! Boundary search for placeholder captures.

/// Find where a capture ends, given the literal that follows it.
///
/// Greedy captures end at the last occurrence of `literal`, the others at
/// the first. When `literal` does not occur at all, a location that was cut
/// off in the middle of the separator still splits right before the
/// longest proper prefix of `literal` it ends with.
///
/// Returns the byte offset into `remaining`, or `None` when neither search
/// finds a boundary.
pub fn find_split(remaining: &str, literal: &str, greedy: bool) -> Option<usize> {
    let found = if greedy {
        remaining.rfind(literal)
    } else {
        remaining.find(literal)
    };

    found.or_else(|| truncated_separator(remaining, literal))
}

fn truncated_separator(remaining: &str, literal: &str) -> Option<usize> {
    literal
        .char_indices()
        .map(|(index, _)| index)
        .filter(|&index| index > 0)
        .rev()
        .find(|&index| remaining.ends_with(&literal[..index]))
        .map(|index| remaining.len() - index)
}
