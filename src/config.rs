use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

use crate::tokenizer::keyword::{KeywordSet, DEFAULT_KEYWORDS};

/// How whitespace is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhitespaceMode {
    /// Every whitespace character is its own `Unknown` token.
    #[default]
    Fallback,
    /// Runs of whitespace become single `Whitespace` tokens.
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub whitespace: WhitespaceMode,

    /// Whether a string literal may contain raw line breaks.
    #[serde(default = "default_true")]
    pub multiline_strings: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            whitespace: WhitespaceMode::default(),
            multiline_strings: default_true(),
        }
    }
}

impl TokenizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        KeywordSet::from_words(&self.keywords).map(|_| ())
    }
}

/// Describes one highlightable language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Fence tag the host matches code blocks against, e.g. `turbine`.
    pub tag: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

impl LanguageConfig {
    pub fn turbine() -> Self {
        Self {
            tag: "turbine".to_string(),
            title: Some("Turbine".to_string()),
            description: Some("Turbine programming language".to_string()),
            aliases: Vec::new(),
            tokenizer: TokenizerConfig::default(),
        }
    }

    /// The older dialect, which has no `print` keyword.
    pub fn mylang() -> Self {
        Self {
            tag: "mylang".to_string(),
            title: Some("MyLang".to_string()),
            description: Some("A simple custom language".to_string()),
            aliases: Vec::new(),
            tokenizer: TokenizerConfig {
                keywords: vec!["if".to_string(), "else".to_string(), "return".to_string()],
                ..TokenizerConfig::default()
            },
        }
    }

    pub fn builtin() -> Vec<Self> {
        vec![Self::turbine(), Self::mylang()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Register the `turbine` and `mylang` presets before `languages`.
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    #[serde(default)]
    pub languages: Vec<LanguageConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: default_true(),
            languages: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Builtin presets (when enabled) followed by the configured languages.
    pub fn all_languages(&self) -> Vec<LanguageConfig> {
        let mut languages = if self.include_builtin {
            LanguageConfig::builtin()
        } else {
            Vec::new()
        };
        languages.extend(self.languages.iter().cloned());
        languages
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid keyword {keyword:?}: keywords must be non-empty runs of letters, digits or underscores")]
    InvalidKeyword { keyword: String },
    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },
    #[error("Failed to parse config: {message}")]
    Parse { message: String },
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| ConfigError::Parse {
        message: e.to_string(),
    })
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> Result<T, ConfigError> {
    serde_json::from_str(s).map_err(|e| ConfigError::Parse {
        message: e.to_string(),
    })
}

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_true() -> bool {
    true
}
