//! # Tokenizer Component
//!
//! The Tokenizer turns Turbine source text into a stream of classified tokens
//! for a syntax highlighter. It does no parsing: there is no grammar, no
//! nesting, and no failure mode.
//!
//! ## Design Principles
//!
//! * **Totality**: every input, however malformed, yields a token sequence.
//!   A character no rule recognizes becomes its own
//!   [`TokenKind::Unknown`](token::TokenKind::Unknown) token.
//! * **Lossless**: token texts concatenate back to the input exactly.
//! * **Ordered rules**: classification is an explicit, ordered
//!   [`RuleSet`](rule::RuleSet) evaluated first-match-wins.
//! * **Stateless**: a [`Tokenizer`](token::Tokenizer) can be reused and shared;
//!   all scan state lives in the [`Tokens`](token::Tokens) iterator.
//!
//! ## Component Structure
//!
//! * [`token`]: token types, the tokenizer and the identifier rule
//! * [`rule`]: rule table and first-match dispatch
//! * [`keyword`]: configurable keyword set and whole-word matching
//! * [`literal`]: string and number literals
//! * [`comment`]: line comments
//! * [`whitespace`]: optional whitespace grouping
//!
//! ## Usage Example
//!
//! ```rust
//! use turbine::tokenizer::token::{TokenKind, Tokenizer};
//!
//! let tokenizer = Tokenizer::new();
//! let kinds: Vec<_> = tokenizer
//!     .tokenize("print \"hi\" // greet")
//!     .map(|t| t.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Keyword,
//!         TokenKind::Unknown,
//!         TokenKind::String,
//!         TokenKind::Unknown,
//!         TokenKind::Comment,
//!     ]
//! );
//! ```

pub mod comment;
pub mod keyword;
pub mod literal;
pub mod rule;
pub mod token;
pub mod whitespace;
