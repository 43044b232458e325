use super::common::{CommentMatch, Start, StripError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseState {
    Start,
    Normal,
    FirstSlash,
    SingleLineComment,
    MultiLineComment,
    MultiLineCommentSawStar,
    End,
}
impl Start for ParseState {
    fn start() -> Self {
        ParseState::Start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseAction {
    Nothing,
    CommentMightStart,
    ConfirmLineComment,
    ConfirmBlockComment,
    DismissPotential,
    CommentEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    NotIn,
    SawFirstSlash { slash_idx: usize },
    InLine { start_idx: usize },
    InBlock { start_idx: usize },
}
impl Start for State {
    fn start() -> Self {
        State::NotIn
    }
}

pub(crate) fn c_state_transition(
    from: ParseState,
    current_char: Option<char>,
) -> (ParseState, ParseAction) {
    match current_char {
        Some(c) => match from {
            ParseState::Start | ParseState::Normal => match c {
                '/' => (ParseState::FirstSlash, ParseAction::CommentMightStart),
                _ => (ParseState::Normal, ParseAction::Nothing),
            },
            ParseState::FirstSlash => match c {
                '/' => (ParseState::SingleLineComment, ParseAction::ConfirmLineComment),
                '*' => (ParseState::MultiLineComment, ParseAction::ConfirmBlockComment),
                _ => (ParseState::Normal, ParseAction::DismissPotential),
            },
            ParseState::SingleLineComment => match c {
                '\n' => (ParseState::Start, ParseAction::CommentEnd),
                _ => (ParseState::SingleLineComment, ParseAction::Nothing),
            },
            ParseState::MultiLineComment => match c {
                '*' => (ParseState::MultiLineCommentSawStar, ParseAction::Nothing),
                _ => (ParseState::MultiLineComment, ParseAction::Nothing),
            },
            ParseState::MultiLineCommentSawStar => match c {
                '/' => (ParseState::Normal, ParseAction::CommentEnd),
                '*' => (ParseState::MultiLineCommentSawStar, ParseAction::Nothing),
                _ => (ParseState::MultiLineComment, ParseAction::Nothing),
            },
            ParseState::End => (ParseState::End, ParseAction::Nothing),
        },
        None => match from {
            ParseState::FirstSlash => (ParseState::End, ParseAction::DismissPotential),
            ParseState::SingleLineComment => (ParseState::End, ParseAction::CommentEnd),
            ParseState::MultiLineComment | ParseState::MultiLineCommentSawStar => {
                (ParseState::End, ParseAction::DismissPotential)
            }
            _ => (ParseState::End, ParseAction::Nothing),
        },
    }
}

pub(crate) fn c_do_action(
    action: ParseAction,
    mut comment_state: State,
    position: usize,
    mut matches: Vec<CommentMatch>,
) -> Result<(State, Vec<CommentMatch>), StripError> {
    match action {
        ParseAction::Nothing => {}
        ParseAction::CommentMightStart => {
            if let State::NotIn = comment_state {
                comment_state = State::SawFirstSlash {
                    slash_idx: position,
                };
            }
        }
        ParseAction::ConfirmLineComment => {
            if let State::SawFirstSlash { slash_idx } = comment_state {
                comment_state = State::InLine {
                    start_idx: slash_idx,
                };
            } else {
                comment_state = State::NotIn;
            }
        }
        ParseAction::ConfirmBlockComment => {
            if let State::SawFirstSlash { slash_idx } = comment_state {
                comment_state = State::InBlock {
                    start_idx: slash_idx,
                };
            } else {
                comment_state = State::NotIn;
            }
        }
        ParseAction::DismissPotential => {
            comment_state = State::NotIn;
        }
        ParseAction::CommentEnd => match comment_state {
            State::InLine { start_idx } => {
                // Line comments end before the terminator, so `\n` survives.
                matches.push(CommentMatch {
                    from: start_idx,
                    to: position,
                });
                comment_state = State::NotIn;
            }
            State::InBlock { start_idx } => {
                matches.push(CommentMatch {
                    from: start_idx,
                    to: position + 1,
                });
                comment_state = State::NotIn;
            }
            _ => comment_state = State::NotIn,
        },
    }
    Ok((comment_state, matches))
}

/// A `/*` with no `*/` after it never matches, but the lazy alternation still
/// retries at every later offset, so `//` sequences inside the dangling
/// region match as line comments. No `*/` can occur there (the block would
/// have closed), which leaves exactly this scan.
fn append_dangling_line_comments(input: &str, from: usize, matches: &mut Vec<CommentMatch>) {
    let mut cursor = from.min(input.len());
    while let Some(rel) = input[cursor..].find("//") {
        let start = cursor + rel;
        let end = input[start..]
            .find('\n')
            .map_or(input.len(), |offset| start + offset);
        matches.push(CommentMatch {
            from: start,
            to: end,
        });
        cursor = end;
    }
}

fn find_comments_direct(input: &str) -> Result<Vec<CommentMatch>, StripError> {
    let mut matches = Vec::new();
    let mut state = State::start();
    let mut parse_state = ParseState::start();
    let mut iter = input.char_indices();
    let input_len = input.len();
    let mut unterminated_block = None;

    loop {
        let char_info = iter.next();
        let current_char = char_info.map(|(_, c)| c);
        let position = char_info.map_or(input_len, |(idx, _)| idx);

        let (next_parse_state, action) = c_state_transition(parse_state, current_char);

        if current_char.is_none() {
            if let State::InBlock { start_idx } = state {
                unterminated_block = Some(start_idx);
            }
        }

        let (next_comment_state, new_matches) = c_do_action(action, state, position, matches)?;

        state = next_comment_state;
        matches = new_matches;
        parse_state = next_parse_state;

        if current_char.is_none() {
            break;
        }
    }

    if let Some(start_idx) = unterminated_block {
        append_dangling_line_comments(input, start_idx + 2, &mut matches);
    }

    Ok(matches)
}

pub fn find_comments(input: &str) -> Result<Vec<CommentMatch>, StripError> {
    find_comments_direct(input)
}
