//! # Language Registry
//!
//! Hosts discover tokenizers by the tag on a fenced code block. Registration
//! is an explicit call made once at host startup:
//!
//! ```
//! use turbine::registry::LanguageRegistry;
//! use turbine::tokenizer::token::{TokenKind, Tokenizer};
//!
//! let registry = LanguageRegistry::new();
//! let handle = registry.register("turbine", Tokenizer::new()).unwrap();
//!
//! let tokens = registry.tokenize("Turbine", "print 1").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//!
//! registry.unregister(handle).unwrap();
//! assert!(registry.lookup("turbine").is_none());
//! ```
//!
//! Tags and aliases are matched case-insensitively. Clones of a registry share
//! the same storage. Registrations and removals are serialized, so of two
//! concurrent registrations claiming the same name exactly one succeeds.
//! Lookups take no lock.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::info;

use crate::{
    config::{ConfigError, LanguageConfig, RegistryConfig},
    tokenizer::token::{Token, Tokenizer},
    InternalResult,
};

/// A tokenizer together with the metadata a host shows for it.
#[derive(Debug, Clone)]
pub struct Language {
    tag: String,
    title: String,
    description: String,
    aliases: Vec<String>,
    tokenizer: Tokenizer,
}

impl Language {
    /// A language whose title is its tag and which has no description or aliases.
    pub fn new(tag: impl Into<String>, tokenizer: Tokenizer) -> Self {
        let tag = tag.into();
        Self {
            title: tag.clone(),
            tag,
            description: String::new(),
            aliases: Vec::new(),
            tokenizer,
        }
    }

    pub fn from_config(config: &LanguageConfig) -> Result<Self, ConfigError> {
        let tokenizer = Tokenizer::from_config(&config.tokenizer)?;
        let mut language = Self::new(config.tag.clone(), tokenizer).with_aliases(config.aliases.clone());
        if let Some(title) = &config.title {
            language = language.with_title(title.clone());
        }
        if let Some(description) = &config.description {
            language = language.with_description(description.clone());
        }
        Ok(language)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        self.tokenizer.tokenize_all(input)
    }
}

/// Proof of a registration, returned by [`LanguageRegistry::register`].
///
/// Consumed by [`LanguageRegistry::unregister`]. Dropping it leaves the
/// language registered.
#[derive(Debug, PartialEq, Eq)]
pub struct RegistryHandle {
    tag: String,
}

impl RegistryHandle {
    /// Normalized primary tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid language tag {tag:?}")]
    InvalidTag { tag: String },
    #[error("Language already registered: {tag}")]
    AlreadyRegistered { tag: String },
    #[error("Language not found: {tag}")]
    NotFound { tag: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Maps tags and aliases to languages.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    // primary tags and aliases share one namespace
    names: Arc<DashMap<String, Arc<Language>>>,
    // held across the name check and the inserts of a registration
    registration: Arc<Mutex<()>>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the `turbine` and `mylang` presets.
    pub fn with_builtin() -> InternalResult<Self> {
        Self::from_config(&RegistryConfig::default())
    }

    pub fn from_config(config: &RegistryConfig) -> InternalResult<Self> {
        let registry = Self::new();
        for language_config in config.all_languages() {
            let language = Language::from_config(&language_config)?;
            registry.register_language(language)?;
        }
        Ok(registry)
    }

    pub fn register(&self, tag: &str, tokenizer: Tokenizer) -> RegistryResult<RegistryHandle> {
        self.register_language(Language::new(tag, tokenizer))
    }

    #[tracing::instrument(level = "debug", skip(self, language), fields(tag = %language.tag()))]
    pub fn register_language(&self, mut language: Language) -> RegistryResult<RegistryHandle> {
        let tag = normalize_tag(&language.tag)?;
        let mut aliases = Vec::new();
        for alias in &language.aliases {
            let alias = normalize_tag(alias)?;
            if alias != tag && !aliases.contains(&alias) {
                aliases.push(alias);
            }
        }

        let _guard = self.registration.lock();
        for name in std::iter::once(&tag).chain(aliases.iter()) {
            if self.names.contains_key(name) {
                return Err(RegistryError::AlreadyRegistered { tag: name.clone() });
            }
        }

        language.tag = tag.clone();
        language.aliases = aliases;
        let language = Arc::new(language);
        for alias in language.aliases() {
            self.names.insert(alias.clone(), language.clone());
        }
        self.names.insert(tag.clone(), language);

        info!("Language registered: {}", tag);
        Ok(RegistryHandle { tag })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn unregister(&self, handle: RegistryHandle) -> RegistryResult<()> {
        let _guard = self.registration.lock();
        let (_, language) =
            self.names
                .remove(&handle.tag)
                .ok_or_else(|| RegistryError::NotFound {
                    tag: handle.tag.clone(),
                })?;
        for alias in language.aliases() {
            self.names.remove(alias);
        }

        info!("Language unregistered: {}", handle.tag);
        Ok(())
    }

    /// Finds a language by tag or alias, ignoring case.
    pub fn lookup(&self, tag: &str) -> Option<Arc<Language>> {
        let tag = normalize_tag(tag).ok()?;
        self.names.get(&tag).map(|entry| entry.value().clone())
    }

    /// Tokenizes a code block tagged `tag`.
    pub fn tokenize<'a>(&self, tag: &str, input: &'a str) -> RegistryResult<Vec<Token<'a>>> {
        let language = self.lookup(tag).ok_or_else(|| RegistryError::NotFound {
            tag: tag.to_string(),
        })?;
        Ok(language.tokenize(input))
    }

    /// Primary tags, sorted.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .names
            .iter()
            .filter(|entry| entry.key() == entry.value().tag())
            .map(|entry| entry.key().clone())
            .collect();
        tags.sort();
        tags
    }

    pub fn len(&self) -> usize {
        self.tags().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn normalize_tag(tag: &str) -> RegistryResult<String> {
    let normalized = tag.trim().to_lowercase();
    if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
        return Err(RegistryError::InvalidTag {
            tag: tag.to_string(),
        });
    }
    Ok(normalized)
}
