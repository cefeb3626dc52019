use std::iter::FusedIterator;

use nom::{
    bytes::complete::take_while1,
    combinator::value,
    error::{context, VerboseError},
    IResult,
};
use serde::Serialize;

use super::{keyword::KeywordSet, literal::StringScan, rule::RuleSet};
use crate::config::{ConfigError, TokenizerConfig};

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Classification attached to every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    /// A word from the configured keyword set.
    Keyword,
    /// A double-quoted literal that reaches its closing quote.
    String,
    /// A literal whose closing quote is missing. Covers the rest of the line.
    UnterminatedString,
    /// Word-bounded run of decimal digits.
    Number,
    /// `//` line comment, line break excluded.
    Comment,
    Identifier,
    /// Whitespace run. Only produced in [`WhitespaceMode::Group`](crate::config::WhitespaceMode::Group).
    Whitespace,
    /// Single character no rule matched.
    Unknown,
}

impl TokenKind {
    /// Short CSS class a highlighter wraps the token in, using the Pygments/Rouge
    /// naming scheme. `Unknown` tokens are rendered as plain text.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword => Some("k"),
            TokenKind::String => Some("s"),
            TokenKind::UnterminatedString => Some("err"),
            TokenKind::Number => Some("m"),
            TokenKind::Comment => Some("c1"),
            TokenKind::Identifier => Some("nv"),
            TokenKind::Whitespace => Some("w"),
            TokenKind::Unknown => None,
        }
    }
}

/// A classified slice of the input.
///
/// `start` and `end` are byte offsets, so `text == &input[start..end]`.
/// `line` and `column` are 1-based; the column counts characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

/// Turns source text into [`Token`]s.
///
/// A `Tokenizer` holds no scan state, so one instance can be shared across
/// threads and reused for any number of inputs.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    keywords: KeywordSet,
    rules: RuleSet,
    multiline_strings: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::build(KeywordSet::default(), &TokenizerConfig::default())
    }

    pub fn from_config(config: &TokenizerConfig) -> Result<Self, ConfigError> {
        let keywords = KeywordSet::from_words(&config.keywords)?;
        Ok(Self::build(keywords, config))
    }

    fn build(keywords: KeywordSet, config: &TokenizerConfig) -> Self {
        Self {
            keywords,
            rules: RuleSet::standard(config.whitespace),
            multiline_strings: config.multiline_strings,
        }
    }

    /// Replaces the rule order. The fallback rule always runs last, and
    /// [`RuleSet::new`] keeps the identifier rule in every set.
    pub fn with_rule_set(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn multiline_strings(&self) -> bool {
        self.multiline_strings
    }

    /// Lazily scans `input`. Each call starts a fresh scan.
    pub fn tokenize<'t, 'a>(&'t self, input: &'a str) -> Tokens<'t, 'a> {
        Tokens {
            tokenizer: self,
            input,
            position: 0,
            line: 1,
            column: 1,
            string_scan: StringScan::default(),
        }
    }

    #[tracing::instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    pub fn tokenize_all<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        let tokens: Vec<_> = self.tokenize(input).collect();
        tracing::debug!("tokenized {} tokens", tokens.len());
        tokens
    }
}

/// Iterator returned by [`Tokenizer::tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'t, 'a> {
    tokenizer: &'t Tokenizer,
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    string_scan: StringScan,
}

impl<'t, 'a> Tokens<'t, 'a> {
    /// Input not yet consumed.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += text.len();
    }
}

impl<'t, 'a> Iterator for Tokens<'t, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining();
        let (kind, len) = self
            .tokenizer
            .rules
            .scan(self.tokenizer, &mut self.string_scan, remaining)?;
        let text = &remaining[..len];

        if kind == TokenKind::UnterminatedString {
            tracing::debug!(
                line = self.line,
                column = self.column,
                "unterminated string literal"
            );
        }

        let token = Token {
            kind,
            text,
            start: self.position,
            end: self.position + len,
            line: self.line,
            column: self.column,
        };
        self.advance(text);
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (usize::from(!remaining.is_empty()), Some(remaining.len()))
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// Letters, digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_identifier(input: &str) -> ParserResult<'_, TokenKind> {
    context(
        "identifier",
        value(TokenKind::Identifier, take_while1(is_word_char)),
    )(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::WhitespaceMode;

    fn kinds(tokens: &[Token<'_>]) -> Vec<(TokenKind, String)> {
        tokens
            .iter()
            .map(|t| (t.kind, t.text.to_string()))
            .collect()
    }

    #[test]
    fn test_identifier() {
        let input = "my_var123 other";
        let (rest, kind) = parse_identifier(input).unwrap();
        assert_eq!(kind, TokenKind::Identifier);
        assert_eq!(rest, " other");
    }

    #[test]
    fn test_identifier_rejects_non_word() {
        assert!(parse_identifier(" x").is_err());
        assert!(parse_identifier("").is_err());
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize_all("").is_empty());
        assert_eq!(tokenizer.tokenize("").next(), None);
    }

    #[test]
    fn test_statement() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize_all("if x return 42");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "if".to_string()),
                (TokenKind::Unknown, " ".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Unknown, " ".to_string()),
                (TokenKind::Keyword, "return".to_string()),
                (TokenKind::Unknown, " ".to_string()),
                (TokenKind::Number, "42".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenizer_with_position() {
        let tokenizer = Tokenizer::new();
        let input = "x\nother";
        let tokens = tokenizer.tokenize_all(input);

        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].column, 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);

        assert_eq!(tokens[1].text, "\n");
        assert_eq!(tokens[1].column, 2);

        let other = &tokens[2];
        assert_eq!(other.text, "other");
        assert_eq!(other.line, 2);
        assert_eq!(other.column, 1);
        assert_eq!((other.start, other.end), (2, 7));
    }

    #[test]
    fn test_columns_count_characters() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize_all("é x");
        assert_eq!(tokens[0].text, "é");
        assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
        assert_eq!(tokens[2].text, "x");
        assert_eq!(tokens[2].column, 3);
        assert_eq!(tokens[2].start, 3);
    }

    #[test]
    fn test_grouped_whitespace() {
        let config = TokenizerConfig {
            whitespace: WhitespaceMode::Group,
            ..TokenizerConfig::default()
        };
        let tokenizer = Tokenizer::from_config(&config).unwrap();
        let tokens = tokenizer.tokenize_all("print  x\n\t");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "print".to_string()),
                (TokenKind::Whitespace, "  ".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Whitespace, "\n\t".to_string()),
            ]
        );
    }

    #[test]
    fn test_iterator_is_lazy_and_fused() {
        let tokenizer = Tokenizer::new();
        let mut tokens = tokenizer.tokenize("a b");
        assert_eq!(tokens.next().map(|t| t.text), Some("a"));
        assert_eq!(tokens.remaining(), " b");
        assert_eq!(tokens.by_ref().count(), 2);
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn test_new_matches_default_config() {
        let default = Tokenizer::from_config(&TokenizerConfig::default()).unwrap();
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.keywords(), default.keywords());
        assert_eq!(tokenizer.rules(), default.rules());
        assert_eq!(tokenizer.multiline_strings(), default.multiline_strings());
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(TokenKind::Keyword.css_class(), Some("k"));
        assert_eq!(TokenKind::Identifier.css_class(), Some("nv"));
        assert_eq!(TokenKind::Unknown.css_class(), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::UnterminatedString.to_string(), "unterminated_string");
        assert_eq!(
            serde_json::to_string(&TokenKind::Keyword).unwrap(),
            "\"keyword\""
        );
    }
}
