pub mod category;
pub mod config;
pub mod error;
pub mod selftest;
pub mod sentence;

pub use config::{Config, OutputConfig, OutputFormat};
pub use error::{Result, WordTagError};
pub use selftest::{run_self_tests, SelfTestReport};
pub use sentence::{tokenize, SentenceProcessor, SentenceReport, TokenClass};

// Category system
pub use category::{
    BuiltinCategory, CategoriesConfig, CategoryDef, CategoryRegistry, CategorySet,
    BUILTIN_CATEGORIES,
};
