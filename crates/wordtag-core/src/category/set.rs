//! Category Set
//!
//! One group of interchangeable words and the label they collapse to.

use std::collections::HashSet;

use crate::error::{Result, WordTagError};

use super::builtin::{BuiltinCategory, CategoryDef};

#[derive(Debug, Clone)]
pub struct CategorySet {
    label: String,
    members: HashSet<String>,
}

impl CategorySet {
    /// Create an empty set. The label must contain a non-whitespace character.
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(WordTagError::InvalidCategory { label });
        }
        Ok(Self {
            label,
            members: HashSet::new(),
        })
    }

    pub fn from_def(def: &CategoryDef) -> Result<Self> {
        let mut set = Self::new(def.label.clone())?;
        for word in &def.members {
            set.add(word.clone());
        }
        Ok(set)
    }

    /// Builtin labels are static and non-empty
    pub(crate) fn from_builtin(builtin: &BuiltinCategory) -> Self {
        Self {
            label: builtin.label.to_string(),
            members: builtin.members.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Insert a word verbatim. Duplicates are ignored.
    pub fn add(&mut self, word: impl Into<String>) {
        self.members.insert(word.into());
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Members in sorted order
    pub fn members(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.members.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn replace_members(&mut self, words: &[String]) {
        self.members = words.iter().cloned().collect();
    }
}
