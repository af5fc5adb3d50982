//! # Category Module
//!
//! Groups of interchangeable words, each collapsing to one replacement label.
//!
//! ## Module layout
//!
//! - `builtin`: builtin category definitions (NAME, NUM)
//! - `set`: a single category
//! - `registry`: ordered categories and word resolution
//!
//! ## Example
//!
//! ```rust
//! use wordtag_core::category::{CategoriesConfig, CategoryDef, CategoryRegistry};
//!
//! let registry = CategoryRegistry::builtin();
//! assert_eq!(registry.resolve("jill"), Some("NAME"));
//! assert_eq!(registry.resolve("seven"), Some("NUM"));
//! assert_eq!(registry.resolve("ten"), None);
//!
//! // Extra categories from configuration
//! let config = CategoriesConfig::from(vec![CategoryDef::new("COLOR", ["red", "blue"])]);
//! let registry = registry.with_config(&config).unwrap();
//! assert_eq!(registry.resolve("blue"), Some("COLOR"));
//! ```

mod builtin;
mod registry;
mod set;

// Re-exports
pub use builtin::{BuiltinCategory, CategoryDef, BUILTIN_CATEGORIES};
pub use registry::{CategoriesConfig, CategoryRegistry};
pub use set::CategorySet;
