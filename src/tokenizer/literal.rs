use nom::{
    character::complete::{char, digit1, satisfy},
    combinator::{not, value},
    error::context,
    sequence::terminated,
};

use super::token::{is_word_char, ParserResult, TokenKind};

/// Where the last failed closing-quote search gave up.
///
/// A quote that starts a token before that point was an escaped quote inside
/// the earlier literal, so a search from it walks the same characters in the
/// same escape state and fails at the same place. Recording the point lets
/// those quotes be classified without searching again, which keeps a scan
/// linear in the input length.
///
/// The point is stored as the number of input bytes after it, so it stays
/// valid as the remaining input shrinks. One value belongs to one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringScan {
    unclosed_tail: Option<usize>,
}

impl StringScan {
    fn is_unclosed(&self, body: &str) -> bool {
        self.unclosed_tail.is_some_and(|tail| body.len() >= tail)
    }
}

/// Parses a double-quoted string literal.
///
/// A backslash escapes the next character, including `"`. A literal that
/// never reaches its closing quote is still consumed, as far as the end of
/// the line the opening quote is on, and classified as
/// [`TokenKind::UnterminatedString`]. A backslash cannot escape a line break.
///
/// With `multiline` off, a raw line break also ends the literal as
/// unterminated.
#[tracing::instrument(level = "debug", skip(scan, input))]
pub fn parse_string_literal<'a>(
    multiline: bool,
    scan: &mut StringScan,
    input: &'a str,
) -> ParserResult<'a, TokenKind> {
    let (body, _) = context("string literal", char('"'))(input)?;

    if !scan.is_unclosed(body) {
        match closing_quote(body, multiline) {
            Ok(len) => return Ok((&body[len..], TokenKind::String)),
            Err(stop) => scan.unclosed_tail = Some(body.len() - stop),
        }
    }

    let line_len = body.find('\n').unwrap_or(body.len());
    Ok((&body[line_len..], TokenKind::UnterminatedString))
}

/// Byte length of `body` up to and including the closing quote, or the
/// offset where the search stopped without finding one.
fn closing_quote(body: &str, multiline: bool) -> Result<usize, usize> {
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok(i + 1),
            '\\' => match chars.next() {
                Some((j, '\n')) => return Err(j),
                None => return Err(body.len()),
                Some(_) => {}
            },
            '\n' if !multiline => return Err(i),
            _ => {}
        }
    }
    Err(body.len())
}

/// Parses a run of ASCII digits not followed by a word character.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_number(input: &str) -> ParserResult<'_, TokenKind> {
    context(
        "number",
        value(
            TokenKind::Number,
            terminated(digit1, not(satisfy(is_word_char))),
        ),
    )(input)
}
