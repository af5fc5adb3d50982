//! Sentence tagging
//!
//! Lower-cases and tokenizes a sentence, then classifies every token against
//! a [`CategoryRegistry`] to produce the derived views.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::CategoryRegistry;
use crate::error::Result;

/// Classification of a single token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClass {
    pub token: String,
    /// Label of the matching category, if any
    pub label: Option<String>,
}

impl TokenClass {
    pub fn is_tagged(&self) -> bool {
        self.label.is_some()
    }
}

/// The four views of a processed sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceReport {
    pub original: String,
    pub class_tagged: String,
    pub tagged: String,
    pub untagged: String,
}

impl SentenceReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Views in output order: original, class tagged, tagged, untagged
    pub fn lines(&self) -> [&str; 4] {
        [
            &self.original,
            &self.class_tagged,
            &self.tagged,
            &self.untagged,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct SentenceProcessor {
    original: String,
    tokens: Vec<String>,
    registry: CategoryRegistry,
}

impl SentenceProcessor {
    /// Process `text` against the builtin categories
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_registry(text, CategoryRegistry::builtin())
    }

    pub fn with_registry(text: impl Into<String>, registry: CategoryRegistry) -> Self {
        let original = text.into();
        let tokens = tokenize(&original);
        Self {
            original,
            tokens,
            registry,
        }
    }

    /// Input exactly as given
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lower-cased tokens, punctuation still attached
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn classify(&self) -> Vec<TokenClass> {
        self.tokens
            .iter()
            .map(|token| TokenClass {
                token: token.clone(),
                label: self.registry.resolve(token).map(str::to_string),
            })
            .collect()
    }

    /// Tokens with no category, each followed by a space
    pub fn untagged(&self) -> String {
        self.join(|token, label| label.is_none().then_some(token))
    }

    /// Tokens that matched a category, each followed by a space
    pub fn tagged(&self) -> String {
        self.join(|token, label| label.map(|_| token))
    }

    /// Every token, with matches replaced by their label
    pub fn class_tagged(&self) -> String {
        self.join(|token, label| Some(label.unwrap_or(token)))
    }

    pub fn report(&self) -> SentenceReport {
        SentenceReport {
            original: self.original.clone(),
            class_tagged: self.class_tagged(),
            tagged: self.tagged(),
            untagged: self.untagged(),
        }
    }

    /// Token list for diagnostics, e.g. `hello, | jill | `
    pub fn dump(&self) -> String {
        self.tokens.iter().map(|t| format!("{} | ", t)).collect()
    }

    fn join<'a, F>(&'a self, mut pick: F) -> String
    where
        F: FnMut(&'a str, Option<&'a str>) -> Option<&'a str>,
    {
        let mut out = String::new();
        for token in &self.tokens {
            if let Some(word) = pick(token.as_str(), self.registry.resolve(token)) {
                out.push_str(word);
                out.push(' ');
            }
        }
        out
    }
}

impl fmt::Display for SentenceProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// Lower-case the text and split it on runs of whitespace
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
