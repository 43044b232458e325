pub mod c_family;
pub mod common;

pub use common::{CommentMatch, StripError, remove_matches};

/// Removes every `//` line comment and `/* */` block comment from `content`.
///
/// Comment markers inside string or character literals are not recognized as
/// literals and are stripped like any other occurrence.
pub fn strip_comments(content: &str) -> Result<String, StripError> {
    let matches = c_family::find_comments(content)?;
    remove_matches(content.to_string(), matches)
}
