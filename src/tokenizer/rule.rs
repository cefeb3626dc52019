//! # Rule Dispatch
//!
//! The tokenizer classifies input with an ordered list of rules. At every
//! cursor position the rules are tried in declaration order and the first one
//! that recognizes a non-empty prefix wins. When none does, the next character
//! becomes a one-character [`TokenKind::Unknown`] token, so a scan always makes
//! progress.
//!
//! Every word rule consumes a whole run of word characters. The cursor therefore
//! never sits in the middle of a word, which is what lets the keyword and number
//! rules check only the right-hand word boundary. A [`RuleSet`] always contains
//! the identifier rule for this reason; without it a word would be split into
//! one [`TokenKind::Unknown`] per character and a digit run inside it would
//! scan as a number.

use nom::{character::complete::anychar, combinator::value, error::context};

use super::{
    comment::parse_line_comment,
    keyword::parse_keyword,
    literal::{parse_number, parse_string_literal, StringScan},
    token::{parse_identifier, ParserResult, TokenKind, Tokenizer},
    whitespace::parse_whitespace,
};
use crate::config::WhitespaceMode;

/// A single classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum RuleKind {
    Keyword,
    String,
    Number,
    Comment,
    Identifier,
    Whitespace,
}

impl RuleKind {
    /// Runs this rule's matcher against the start of `input`. `state` carries
    /// what earlier matches in the same scan learned about the input.
    pub fn apply<'a>(
        self,
        tokenizer: &Tokenizer,
        state: &mut StringScan,
        input: &'a str,
    ) -> ParserResult<'a, TokenKind> {
        match self {
            RuleKind::Keyword => parse_keyword(tokenizer.keywords(), input),
            RuleKind::String => {
                parse_string_literal(tokenizer.multiline_strings(), state, input)
            }
            RuleKind::Number => parse_number(input),
            RuleKind::Comment => parse_line_comment(input),
            RuleKind::Identifier => parse_identifier(input),
            RuleKind::Whitespace => parse_whitespace(input),
        }
    }
}

/// Ordered rule table. Priority is declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<RuleKind>,
}

impl RuleSet {
    /// Builds a rule table from `rules` in the given order. The identifier
    /// rule is appended when `rules` lacks it.
    pub fn new(mut rules: Vec<RuleKind>) -> Self {
        if !rules.contains(&RuleKind::Identifier) {
            rules.push(RuleKind::Identifier);
        }
        Self { rules }
    }

    /// Keyword, string, number, comment, identifier; whitespace runs are
    /// appended only when grouping is enabled.
    pub fn standard(whitespace: WhitespaceMode) -> Self {
        let mut rules = vec![
            RuleKind::Keyword,
            RuleKind::String,
            RuleKind::Number,
            RuleKind::Comment,
            RuleKind::Identifier,
        ];
        if whitespace == WhitespaceMode::Group {
            rules.push(RuleKind::Whitespace);
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[RuleKind] {
        &self.rules
    }

    /// Classifies the token at the start of `input` and returns its kind and
    /// byte length. Returns `None` only for empty input.
    pub fn scan(
        &self,
        tokenizer: &Tokenizer,
        state: &mut StringScan,
        input: &str,
    ) -> Option<(TokenKind, usize)> {
        for rule in &self.rules {
            if let Ok((rest, kind)) = rule.apply(tokenizer, state, input) {
                let consumed = input.len() - rest.len();
                if consumed > 0 {
                    return Some((kind, consumed));
                }
            }
        }

        parse_unknown(input)
            .ok()
            .map(|(rest, kind)| (kind, input.len() - rest.len()))
    }
}

fn parse_unknown(input: &str) -> ParserResult<'_, TokenKind> {
    context("unknown character", value(TokenKind::Unknown, anychar))(input)
}
