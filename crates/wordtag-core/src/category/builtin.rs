//! Builtin Category Definitions
//!
//! Categories compiled into the binary. Used whenever no config file
//! overrides them.

use serde::{Deserialize, Serialize};

/// Builtin categories, in registration order
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        label: "NAME",
        members: &["jack", "jill"],
    },
    BuiltinCategory {
        label: "NUM",
        members: &[
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
        ],
    },
];

/// Static definition of a builtin category
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// Replacement label (e.g. "NAME")
    pub label: &'static str,
    /// Lower-case member words
    pub members: &'static [&'static str],
}

/// Runtime category definition
///
/// Built from a builtin or from a `[[category]]` entry in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub label: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl CategoryDef {
    pub fn new<I, S>(label: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&BuiltinCategory> for CategoryDef {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self::new(builtin.label, builtin.members.iter().copied())
    }
}
