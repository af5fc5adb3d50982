use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::{CategoriesConfig, CategoryDef, CategoryRegistry};
use crate::error::{Result, WordTagError};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# wordtag configuration file
# Location: ~/.wordtag/config.toml

[output]
# Run the builtin self-tests before tagging a sentence
# Default: true
self_test = true

# Output format for `wordtag tag` (text, json)
# Default: "text"
format = "text"

# Extra categories. A label matching a builtin (NAME, NUM) replaces its
# members; new labels are checked after the builtins.
# Members are compared against lower-cased words, so list them lower-case.
#
# [[category]]
# label = "COLOR"
# members = ["red", "green", "blue"]
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    /// Category overrides, in registration order
    #[serde(
        default,
        rename = "category",
        skip_serializing_if = "CategoriesConfig::is_empty"
    )]
    pub categories: CategoriesConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_self_test")]
    pub self_test: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_self_test() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            self_test: default_self_test(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = WordTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(WordTagError::InvalidConfigValue {
                key: "output.format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| WordTagError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.self_test" => Some(self.output.self_test.to_string()),
            "output.format" => Some(self.output.format.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output.self_test" => {
                self.output.self_test = parse_bool(key, value)?;
                Ok(())
            }
            "output.format" => {
                self.output.format = value.parse()?;
                Ok(())
            }
            _ => Err(WordTagError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        vec![
            (
                "output.self_test".to_string(),
                self.output.self_test.to_string(),
            ),
            ("output.format".to_string(), self.output.format.to_string()),
        ]
    }

    /// Add words to a category entry, creating it at the end if needed
    pub fn add_category(&mut self, label: &str, members: &[String]) -> Result<()> {
        if label.trim().is_empty() {
            return Err(WordTagError::InvalidCategory {
                label: label.to_string(),
            });
        }

        let entries = &mut self.categories.entries;
        let entry = match entries.iter().position(|c| c.label == label) {
            Some(idx) => &mut entries[idx],
            None => {
                entries.push(CategoryDef::new(label, std::iter::empty::<String>()));
                let last = entries.len() - 1;
                &mut entries[last]
            }
        };

        for word in members {
            if !entry.members.contains(word) {
                entry.members.push(word.clone());
            }
        }
        Ok(())
    }

    /// Remove a category entry
    pub fn remove_category(&mut self, label: &str) -> Result<CategoryDef> {
        let entries = &mut self.categories.entries;
        match entries.iter().position(|c| c.label == label) {
            Some(idx) => Ok(entries.remove(idx)),
            None => Err(WordTagError::CategoryNotFound {
                label: label.to_string(),
            }),
        }
    }

    /// Builtin categories with this config's entries applied
    pub fn registry(&self) -> Result<CategoryRegistry> {
        CategoryRegistry::builtin().with_config(&self.categories)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(WordTagError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("k", "true").unwrap());
        assert!(parse_bool("k", " Yes ").unwrap());
        assert!(!parse_bool("k", "0").unwrap());
        assert!(parse_bool("k", "maybe").is_err());
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();
        assert_eq!(config.get("output.self_test").as_deref(), Some("true"));
        assert_eq!(config.get("output.format").as_deref(), Some("text"));

        config.set("output.self_test", "false").unwrap();
        config.set("output.format", "JSON").unwrap();
        assert!(!config.output.self_test);
        assert_eq!(config.output.format, OutputFormat::Json);

        assert!(matches!(
            config.set("output.format", "yaml"),
            Err(WordTagError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("output.color", "red"),
            Err(WordTagError::ConfigKeyNotFound { .. })
        ));
        assert!(config.get("output.color").is_none());
    }

    #[test]
    fn test_list() {
        let keys: Vec<_> = Config::default().list().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["output.self_test", "output.format"]);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.output.self_test);
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config
            .add_category("COLOR", &["red".to_string(), "green".to_string()])
            .unwrap();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.output.format, OutputFormat::Json);
        assert_eq!(loaded.categories, config.categories);
    }

    #[test]
    fn test_init_template_parses() {
        let dir = TempDir::new().unwrap();
        let path = Config::init(dir.path()).unwrap();
        assert!(path.exists());

        let config = Config::load(dir.path()).unwrap();
        assert!(config.output.self_test);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(Config::path(dir.path()), "[output\nself_test = ").unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(WordTagError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_load_categories_in_file_order() {
        let dir = TempDir::new().unwrap();
        let content = r#"
[[category]]
label = "NUM"
members = ["uno", "dos"]

[[category]]
label = "COLOR"
members = ["red"]
"#;
        fs::write(Config::path(dir.path()), content).unwrap();

        let config = Config::load(dir.path()).unwrap();
        let registry = config.registry().unwrap();
        assert_eq!(registry.labels(), vec!["NAME", "NUM", "COLOR"]);
        assert_eq!(registry.resolve("dos"), Some("NUM"));
        assert_eq!(registry.resolve("two"), None);
        assert_eq!(registry.resolve("red"), Some("COLOR"));
    }

    #[test]
    fn test_blank_category_label_fails_registry() {
        let dir = TempDir::new().unwrap();
        let content = r#"
[[category]]
label = ""
members = ["x"]
"#;
        fs::write(Config::path(dir.path()), content).unwrap();

        let config = Config::load(dir.path()).unwrap();
        let err = config.registry().unwrap_err();
        assert!(matches!(err, WordTagError::InvalidCategory { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_add_and_remove_category() {
        let mut config = Config::default();
        config.add_category("PET", &["cat".to_string()]).unwrap();
        config
            .add_category("PET", &["dog".to_string(), "cat".to_string()])
            .unwrap();
        assert_eq!(config.categories.len(), 1);
        assert_eq!(
            config.categories.get("PET").map(|c| c.members.clone()),
            Some(vec!["cat".to_string(), "dog".to_string()])
        );

        assert!(config.add_category(" ", &[]).is_err());

        let removed = config.remove_category("PET").unwrap();
        assert_eq!(removed.label, "PET");
        assert!(matches!(
            config.remove_category("PET"),
            Err(WordTagError::CategoryNotFound { .. })
        ));
    }
}
