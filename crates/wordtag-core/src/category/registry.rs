//! Category Registry
//!
//! Ordered collection of category sets. Resolves a word to the label of the
//! category it belongs to.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::builtin::{CategoryDef, BUILTIN_CATEGORIES};
use super::set::CategorySet;

#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    sets: Vec<CategorySet>,
}

impl CategoryRegistry {
    /// Build a registry from explicit definitions, keeping their order
    pub fn new(defs: &[CategoryDef]) -> Result<Self> {
        let sets = defs
            .iter()
            .map(CategorySet::from_def)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sets })
    }

    /// Registry holding only the builtin categories
    pub fn builtin() -> Self {
        let sets = BUILTIN_CATEGORIES
            .iter()
            .map(CategorySet::from_builtin)
            .collect();
        Self { sets }
    }

    /// Apply config entries on top of the current sets
    ///
    /// - A label that already exists has its members replaced in place
    /// - A new label is appended
    pub fn with_config(mut self, config: &CategoriesConfig) -> Result<Self> {
        for def in config.iter() {
            match self.sets.iter_mut().find(|s| s.label() == def.label) {
                Some(existing) => existing.replace_members(&def.members),
                None => self.sets.push(CategorySet::from_def(def)?),
            }
        }
        Ok(self)
    }

    /// Append a set after every existing one
    pub fn register(&mut self, set: CategorySet) {
        self.sets.push(set);
    }

    /// Label of the category containing `word`.
    ///
    /// Every set is checked; when several contain the word the one
    /// registered last wins.
    pub fn resolve(&self, word: &str) -> Option<&str> {
        self.sets
            .iter()
            .filter(|set| set.contains(word))
            .last()
            .map(CategorySet::label)
    }

    pub fn get(&self, label: &str) -> Option<&CategorySet> {
        self.sets.iter().find(|s| s.label() == label)
    }

    pub fn sets(&self) -> &[CategorySet] {
        &self.sets
    }

    pub fn labels(&self) -> Vec<&str> {
        self.sets.iter().map(CategorySet::label).collect()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `[[category]]` entries of `config.toml`, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoriesConfig {
    pub entries: Vec<CategoryDef>,
}

impl CategoriesConfig {
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryDef> {
        self.entries.iter()
    }

    pub fn get(&self, label: &str) -> Option<&CategoryDef> {
        self.entries.iter().find(|c| c.label == label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<CategoryDef>> for CategoriesConfig {
    fn from(entries: Vec<CategoryDef>) -> Self {
        Self { entries }
    }
}
