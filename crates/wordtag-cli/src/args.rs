use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "wordtag")]
#[command(about = "Tag the words of a sentence against category sets")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.wordtag)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tag a sentence and print original, class tagged, tagged and untagged views
    Tag {
        /// Sentence to tag (reads one line from stdin if omitted)
        sentence: Option<String>,

        /// Output format (default: from config, else text)
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Skip the startup self-tests
        #[arg(long)]
        no_self_test: bool,
    },

    /// Show which category each word resolves to
    Resolve {
        /// Words to look up (compared as given, no lower-casing)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Run the builtin self-tests
    SelfTest,

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List categories in resolution order
    List,

    /// Add words to a category (creates it if needed)
    Add {
        /// Category label (e.g., COLOR)
        label: String,

        /// Member words
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Remove a category from the config file
    Remove {
        /// Category label
        label: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., output.format)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., output.format)
        key: String,

        /// Value to set (e.g., "json" or "false")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Create config file with commented defaults
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tag() {
        let cli = Cli::try_parse_from(["wordtag", "tag", "Jack and Jill", "--format", "json"])
            .unwrap();
        match cli.command {
            Some(Commands::Tag {
                sentence,
                format,
                no_self_test,
            }) => {
                assert_eq!(sentence.as_deref(), Some("Jack and Jill"));
                assert!(matches!(format, Some(Format::Json)));
                assert!(!no_self_test);
            }
            _ => panic!("expected tag command"),
        }
    }

    #[test]
    fn test_parse_tag_without_sentence() {
        let cli = Cli::try_parse_from(["wordtag", "-q", "tag", "--no-self-test"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Commands::Tag {
                sentence: None,
                no_self_test: true,
                ..
            })
        ));
    }

    #[test]
    fn test_resolve_requires_words() {
        assert!(Cli::try_parse_from(["wordtag", "resolve"]).is_err());
    }

    #[test]
    fn test_parse_category_add() {
        let cli =
            Cli::try_parse_from(["wordtag", "category", "add", "COLOR", "red", "blue"]).unwrap();
        match cli.command {
            Some(Commands::Category {
                action: CategoryAction::Add { label, words },
            }) => {
                assert_eq!(label, "COLOR");
                assert_eq!(words, vec!["red", "blue"]);
            }
            _ => panic!("expected category add"),
        }
    }
}
