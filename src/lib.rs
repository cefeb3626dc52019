//! # Turbine: syntax-highlighting lexer
//!
//! Turbine tags the tokens of a small toy language (keywords, strings,
//! numbers, comments, identifiers) so a documentation renderer can colorize
//! fenced code blocks.
//!
//! ## Components
//!
//! - Tokenization ([`tokenizer`]): ordered rule table, lazy token stream
//! - Configuration ([`config`]): keyword sets, whitespace handling, language presets
//! - Registration ([`registry`]): explicit tag to tokenizer mapping for the host
//! - Errors ([`error`]): configuration and registration failures
//!
//! Scanning itself never fails. Malformed input such as an unterminated string
//! still produces tokens, so a documentation build is never broken by a code
//! sample.
//!
//! ## Example
//!
//! ```
//! use turbine::TokenKind;
//!
//! let tokens: Vec<_> = turbine::tokenize("iffy = 1a").collect();
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens[0].text, "iffy");
//!
//! let text: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(text, "iffy = 1a");
//! ```

use lazy_static::lazy_static;

pub mod config;
pub mod error;
pub mod registry;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use registry::{Language, LanguageRegistry, RegistryError, RegistryHandle};
pub use tokenizer::token::{Token, TokenKind, Tokenizer, Tokens};

lazy_static! {
    static ref DEFAULT_TOKENIZER: Tokenizer = Tokenizer::new();
}

/// Scans `input` with the default Turbine tokenizer.
pub fn tokenize(input: &str) -> Tokens<'static, '_> {
    DEFAULT_TOKENIZER.tokenize(input)
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    #[ctor::ctor]
    fn init_tests() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}
