//! # Comment Token Handling
//!
//! Turbine only has line comments: `//` up to, but not including, the next
//! line break (or the end of input). The line break is left for the next
//! token so that line tracking stays in one place.

use nom::{
    bytes::complete::{tag, take_till},
    combinator::value,
    error::context,
    sequence::pair,
};

use super::token::{ParserResult, TokenKind};

/// Parses a line comment from the input string.
///
/// # Examples
///
/// ```
/// # use turbine::tokenizer::comment::parse_line_comment;
/// # use turbine::tokenizer::token::TokenKind;
/// let input = "// This is a comment\ncode";
/// let (rest, kind) = parse_line_comment(input).unwrap();
/// assert_eq!(kind, TokenKind::Comment);
/// assert_eq!(rest, "\ncode");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_line_comment(input: &str) -> ParserResult<'_, TokenKind> {
    context(
        "line comment",
        value(
            TokenKind::Comment,
            pair(tag("//"), take_till(|c: char| c == '\n')),
        ),
    )(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_line_comment() {
        let input = "// This is a line comment\ncode";
        let (rest, kind) = parse_line_comment(input).unwrap();
        assert_eq!(kind, TokenKind::Comment);
        assert_eq!(rest, "\ncode");
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let (rest, _) = parse_line_comment("// trailing").unwrap();
        assert_eq!(rest, "");

        let (rest, _) = parse_line_comment("//").unwrap();
        assert_eq!(rest, "");
    }

    #[test]
    fn test_carriage_return_stays_in_comment() {
        let (rest, _) = parse_line_comment("// windows\r\nnext").unwrap();
        assert_eq!(rest, "\nnext");
    }

    #[test]
    fn test_comment_keeps_quotes_and_slashes() {
        let (rest, _) = parse_line_comment("// \"not a string\" // still comment\n").unwrap();
        assert_eq!(rest, "\n");
    }

    #[test]
    fn test_not_a_comment() {
        assert!(parse_line_comment("/ not").is_err());
        assert!(parse_line_comment("x // later").is_err());
    }
}
