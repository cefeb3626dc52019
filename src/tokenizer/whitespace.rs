//! # Whitespace Token Handling
//!
//! By default whitespace has no rule of its own: every whitespace character
//! falls through to the single-character fallback. With
//! [`WhitespaceMode::Group`](crate::config::WhitespaceMode::Group) the tokenizer
//! appends this rule instead, so each run of whitespace (line breaks included)
//! becomes one [`TokenKind::Whitespace`] token.
//!
//! Whitespace is never dropped in either mode; concatenating the token texts
//! always gives back the input.

use nom::{bytes::complete::take_while1, combinator::value, error::context};

use super::token::{ParserResult, TokenKind};

/// Parses a run of whitespace characters.
///
/// # Examples
///
/// ```
/// # use turbine::tokenizer::whitespace::parse_whitespace;
/// # use turbine::tokenizer::token::TokenKind;
/// let (rest, kind) = parse_whitespace(" \t\nhello").unwrap();
/// assert_eq!(kind, TokenKind::Whitespace);
/// assert_eq!(rest, "hello");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_whitespace(input: &str) -> ParserResult<'_, TokenKind> {
    context(
        "whitespace",
        value(TokenKind::Whitespace, take_while1(char::is_whitespace)),
    )(input)
}
