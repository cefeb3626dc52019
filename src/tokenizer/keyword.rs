//! # Keyword Handling
//!
//! Keywords are not hardcoded: each tokenizer carries its own [`KeywordSet`],
//! so the Turbine and MyLang dialects differ only in configuration.
//!
//! ## Parsing Strategy
//!
//! A keyword matches as a whole word. The parser takes the maximal run of word
//! characters at the cursor and accepts it only when the whole run is in the
//! set, so `iffy` never yields the keyword `if`.

use std::collections::BTreeSet;

use nom::{
    bytes::complete::take_while1,
    combinator::{value, verify},
    error::context,
};

use super::token::{is_word_char, ParserResult, TokenKind};
use crate::config::ConfigError;

/// Reserved words of the Turbine language.
pub const DEFAULT_KEYWORDS: [&str; 4] = ["if", "else", "return", "print"];

/// Set of reserved words recognized by the keyword rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: BTreeSet<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            words: DEFAULT_KEYWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl KeywordSet {
    /// Builds a set from `words`, rejecting any word that could never match
    /// as a whole word (empty, or containing a non-word character).
    pub fn from_words<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() || !word.chars().all(is_word_char) {
                return Err(ConfigError::InvalidKeyword {
                    keyword: word.to_string(),
                });
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Keywords in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parses a keyword token from the input string.
///
/// # Examples
///
/// ```
/// # use turbine::tokenizer::keyword::{parse_keyword, KeywordSet};
/// # use turbine::tokenizer::token::TokenKind;
/// let keywords = KeywordSet::default();
/// let (rest, kind) = parse_keyword(&keywords, "print x").unwrap();
/// assert_eq!(kind, TokenKind::Keyword);
/// assert_eq!(rest, " x");
/// assert!(parse_keyword(&keywords, "printer").is_err());
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse_keyword<'a>(keywords: &KeywordSet, input: &'a str) -> ParserResult<'a, TokenKind> {
    context(
        "keyword",
        value(
            TokenKind::Keyword,
            verify(take_while1(is_word_char), |word: &str| keywords.contains(word)),
        ),
    )(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_keywords() {
        let keywords = KeywordSet::default();
        let test_cases = ["if Test", "else Test", "return Test", "print Test"];

        for input in test_cases.iter() {
            let (rest, kind) = parse_keyword(&keywords, input).unwrap();
            assert_eq!(kind, TokenKind::Keyword);
            assert_eq!(rest, " Test");
        }
    }

    // check if all keywords are parsed correctly
    #[test]
    fn test_all_keyword() {
        let keywords = KeywordSet::default();
        for keyword in keywords.iter() {
            let (rest, kind) = parse_keyword(&keywords, keyword).unwrap();
            assert_eq!(kind, TokenKind::Keyword);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_keyword_boundary() {
        let keywords = KeywordSet::default();
        assert!(parse_keyword(&keywords, "iffy").is_err());
        assert!(parse_keyword(&keywords, "if_").is_err());
        assert!(parse_keyword(&keywords, "if2").is_err());
        assert!(parse_keyword(&keywords, "If").is_err());

        let (rest, _) = parse_keyword(&keywords, "if(").unwrap();
        assert_eq!(rest, "(");
    }

    #[test]
    fn test_custom_set() {
        let keywords = KeywordSet::from_words(["let", "fn", "let"]).unwrap();
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords.iter().collect::<Vec<_>>(), vec!["fn", "let"]);
        assert!(parse_keyword(&keywords, "if").is_err());
        assert!(parse_keyword(&keywords, "fn main").is_ok());
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let keywords = KeywordSet::from_words(Vec::<String>::new()).unwrap();
        assert!(keywords.is_empty());
        assert!(parse_keyword(&keywords, "if").is_err());
    }

    #[test]
    fn test_invalid_keywords() {
        assert_eq!(
            KeywordSet::from_words(["if", ""]),
            Err(ConfigError::InvalidKeyword {
                keyword: String::new()
            })
        );
        assert_eq!(
            KeywordSet::from_words(["else if"]),
            Err(ConfigError::InvalidKeyword {
                keyword: "else if".to_string()
            })
        );
        assert!(KeywordSet::from_words(["==", "if"]).is_err());
    }
}
