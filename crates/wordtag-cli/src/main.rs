use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use wordtag_core::config::{Config, OutputFormat};
use wordtag_core::selftest::scenarios;
use wordtag_core::{run_self_tests, Result, SentenceProcessor, SentenceReport, WordTagError};

mod args;
use args::{CategoryAction, Cli, Commands, ConfigAction, Format, Shell};

/// Output verbosity from the global flags
#[derive(Clone, Copy)]
struct Output {
    verbose: bool,
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let out = Output {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Tag {
            sentence,
            format,
            no_self_test,
        }) => handle_tag(&base_dir, sentence, format, no_self_test, out),
        Some(Commands::Resolve { words }) => handle_resolve(&base_dir, &words),
        Some(Commands::SelfTest) => handle_self_test(out),
        Some(Commands::Category { action }) => handle_category(action, &base_dir, out),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "wordtag", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("WORDTAG_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".wordtag"))
        .unwrap_or_else(|| PathBuf::from(".wordtag"))
}

fn handle_tag(
    base_dir: &Path,
    sentence: Option<String>,
    format: Option<Format>,
    no_self_test: bool,
    out: Output,
) -> Result<()> {
    let config = Config::load(base_dir)?;

    if config.output.self_test && !no_self_test {
        let report = run_self_tests()?;
        if out.verbose {
            eprintln!(
                "{} {} scenarios passed",
                "[SELF-TEST]".green(),
                report.passed.len()
            );
        }
    }

    let sentence = match sentence {
        Some(s) => s,
        None => read_line(io::stdin().lock())?,
    };

    let registry = config.registry()?;
    if out.verbose {
        eprintln!("{} {}", "Categories:".cyan(), registry.labels().join(", "));
    }

    let processor = SentenceProcessor::with_registry(sentence, registry);
    if out.verbose {
        eprintln!("{} {}", "Tokens:".cyan(), processor.dump());
    }

    let format = match format {
        Some(Format::Text) => OutputFormat::Text,
        Some(Format::Json) => OutputFormat::Json,
        None => config.output.format,
    };

    let report = processor.report();
    match format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

/// Read one line, without its `\n` or `\r\n` terminator
fn read_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(trim_line_ending(&line).to_string())
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// One view per line: original, class tagged, tagged, untagged
fn render_text(report: &SentenceReport) -> String {
    report.lines().iter().map(|l| format!("{}\n", l)).collect()
}

fn handle_resolve(base_dir: &Path, words: &[String]) -> Result<()> {
    let registry = Config::load(base_dir)?.registry()?;
    for word in words {
        match registry.resolve(word) {
            Some(label) => println!("{} => {}", word, label.green()),
            None => println!("{} => {}", word, "(none)".dimmed()),
        }
    }
    Ok(())
}

fn handle_self_test(out: Output) -> Result<()> {
    for scenario in scenarios() {
        if let Err(e) = scenario.run() {
            eprintln!(
                "{} {}: {}",
                "[SELF-TEST]".red().bold(),
                scenario.name,
                "FAILED".red()
            );
            return Err(e);
        }
        if !out.quiet {
            println!("{}: {}", scenario.name, "PASSED".green());
        }
    }
    if !out.quiet {
        println!();
        println!("{}", "All self-tests passed.".green().bold());
    }
    Ok(())
}

fn handle_category(action: CategoryAction, base_dir: &Path, out: Output) -> Result<()> {
    match action {
        CategoryAction::List => {
            let registry = Config::load(base_dir)?.registry()?;
            println!();
            for set in registry.sets() {
                println!("{} ({})", set.label().cyan().bold(), set.len());
                println!("  {}", set.members().join(", "));
            }
            println!();
        }
        CategoryAction::Add { label, words } => {
            let mut config = Config::load(base_dir)?;
            if out.verbose && words.iter().any(|w| *w != w.to_lowercase()) {
                eprintln!(
                    "{} words are matched against lower-cased input; upper-case members never match",
                    "[WARN]".yellow()
                );
            }
            config.add_category(&label, &words)?;
            config.save(base_dir)?;
            if !out.quiet {
                println!("{} {} += {}", "Updated:".green(), label, words.join(", "));
            }
        }
        CategoryAction::Remove { label } => {
            let mut config = Config::load(base_dir)?;
            config.remove_category(&label)?;
            config.save(base_dir)?;
            if !out.quiet {
                println!("{} {}", "Removed:".green(), label);
            }
        }
    }

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(WordTagError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending("Jack\r\n"), "Jack");
        assert_eq!(trim_line_ending("Jack\n"), "Jack");
        assert_eq!(trim_line_ending("Jack"), "Jack");
        assert_eq!(trim_line_ending("Jack \n"), "Jack ");
        assert_eq!(trim_line_ending(""), "");
    }

    #[test]
    fn test_read_line_crlf() {
        let line = read_line(Cursor::new("Jack\r\nsecond line\n")).unwrap();
        assert_eq!(line, "Jack");
        assert_eq!(SentenceProcessor::new(line).class_tagged(), "NAME ");
    }

    #[test]
    fn test_read_line_empty_input() {
        assert_eq!(read_line(Cursor::new("")).unwrap(), "");
    }

    #[test]
    fn test_render_text_line_order() {
        let report =
            SentenceProcessor::new("Hello, Jill is not Jack, she's three or 4 or nine").report();
        let text = render_text(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Hello, Jill is not Jack, she's three or 4 or nine",
                "hello, NAME is not jack, she's NUM or 4 or NUM ",
                "jill three nine ",
                "hello, is not jack, she's or 4 or ",
            ]
        );
    }

    #[test]
    fn test_render_text_empty_sentence() {
        let report = SentenceProcessor::new("").report();
        assert_eq!(render_text(&report), "\n\n\n\n");
    }
}
