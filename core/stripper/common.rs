pub type StripError = &'static str;

/// Half-open byte span of one comment in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentMatch {
    pub from: usize,
    pub to: usize,
}

pub trait Start: Sized {
    fn start() -> Self;
}

/// Deletes the given spans from `input`, back to front so earlier spans keep
/// their offsets. Spans must be in bounds, on char boundaries, and disjoint.
pub fn remove_matches(
    mut input: String,
    mut matches: Vec<CommentMatch>,
) -> Result<String, StripError> {
    if matches.is_empty() {
        return Ok(input);
    }
    check_matches_bounds(&input, &matches)?;

    matches.sort_by_key(|m| m.from);
    check_sorted_matches_overlap(&matches)?;

    for m in matches.iter().rev() {
        input.drain(m.from..m.to);
    }
    Ok(input)
}

fn check_matches_bounds(input: &str, matches: &[CommentMatch]) -> Result<(), StripError> {
    for m in matches {
        if m.from > m.to || m.to > input.len() {
            return Err("match indices out of bounds or invalid range (from > to)");
        }
        if !input.is_char_boundary(m.from) || !input.is_char_boundary(m.to) {
            return Err("match range splits a character");
        }
    }
    Ok(())
}

fn check_sorted_matches_overlap(matches: &[CommentMatch]) -> Result<(), StripError> {
    let mut last_to = 0;
    for m in matches {
        if m.from < last_to {
            return Err("matches are overlapping");
        }
        last_to = m.to;
    }
    Ok(())
}
