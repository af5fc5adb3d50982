//! Startup self-tests
//!
//! Fixed scenarios checked before any real input is tagged. The first
//! mismatch aborts with [`WordTagError::SelfTestFailed`].

use crate::category::{CategoryDef, CategoryRegistry, CategorySet, BUILTIN_CATEGORIES};
use crate::error::{Result, WordTagError};
use crate::sentence::SentenceProcessor;

const SAMPLE: &str = "Hello, Jill is not Jack, she's three or 4 or nine";

/// A named check producing `(expected, actual)`
pub struct Scenario {
    pub name: &'static str,
    check: fn() -> (String, String),
}

impl Scenario {
    pub fn run(&self) -> Result<()> {
        let (expected, actual) = (self.check)();
        if expected == actual {
            Ok(())
        } else {
            Err(WordTagError::SelfTestFailed {
                scenario: self.name.to_string(),
                expected,
                actual,
            })
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelfTestReport {
    pub passed: Vec<&'static str>,
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "category set membership",
            check: || {
                let expected = "bar:true tang:false zing:true zap:true".to_string();
                let actual = match CategorySet::new("FOO") {
                    Ok(mut set) => {
                        set.add("bar");
                        set.add("zing");
                        set.add("zap");
                        ["bar", "tang", "zing", "zap"]
                            .iter()
                            .map(|w| format!("{}:{}", w, set.contains(w)))
                            .collect::<Vec<_>>()
                            .join(" ")
                    }
                    Err(e) => e.to_string(),
                };
                (expected, actual)
            },
        },
        Scenario {
            name: "original view",
            check: || {
                let p = SentenceProcessor::new(SAMPLE);
                (SAMPLE.to_string(), p.original().to_string())
            },
        },
        Scenario {
            name: "class tagged view",
            check: || {
                (
                    "hello, NAME is not jack, she's NUM or 4 or NUM ".to_string(),
                    SentenceProcessor::new(SAMPLE).class_tagged(),
                )
            },
        },
        Scenario {
            name: "tagged view",
            check: || {
                (
                    "jill three nine ".to_string(),
                    SentenceProcessor::new(SAMPLE).tagged(),
                )
            },
        },
        Scenario {
            name: "untagged view",
            check: || {
                (
                    "hello, is not jack, she's or 4 or ".to_string(),
                    SentenceProcessor::new(SAMPLE).untagged(),
                )
            },
        },
        Scenario {
            name: "empty input",
            check: || {
                let p = SentenceProcessor::new("");
                let actual = [
                    p.original().to_string(),
                    p.class_tagged(),
                    p.tagged(),
                    p.untagged(),
                ]
                .concat();
                (String::new(), actual)
            },
        },
        Scenario {
            name: "builtin membership",
            check: || {
                let registry = CategoryRegistry::builtin();
                let mut expected = String::new();
                let mut actual = String::new();
                for cat in BUILTIN_CATEGORIES {
                    for word in cat.members {
                        expected.push_str(&format!("{}:{} ", word, cat.label));
                        let label = registry.resolve(word).unwrap_or("-");
                        actual.push_str(&format!("{}:{} ", word, label));
                    }
                }
                (expected, actual)
            },
        },
        Scenario {
            name: "builtin non-membership",
            check: || {
                let registry = CategoryRegistry::builtin();
                let actual = ["tang", "Jack", "jack,", "ten", "4"]
                    .iter()
                    .filter_map(|w| registry.resolve(w))
                    .collect::<Vec<_>>()
                    .join(" ");
                (String::new(), actual)
            },
        },
        Scenario {
            name: "last match wins",
            check: || {
                let defs = [
                    CategoryDef::new("FIRST", ["shared"]),
                    CategoryDef::new("SECOND", ["shared"]),
                ];
                let actual = CategoryRegistry::new(&defs)
                    .ok()
                    .and_then(|r| r.resolve("shared").map(str::to_string))
                    .unwrap_or_default();
                ("SECOND".to_string(), actual)
            },
        },
        Scenario {
            name: "token count",
            check: || {
                let p = SentenceProcessor::new(SAMPLE);
                let counted = p.tagged().split_whitespace().count()
                    + p.untagged().split_whitespace().count();
                (p.tokens().len().to_string(), counted.to_string())
            },
        },
    ]
}

/// Run every scenario in order, stopping at the first failure
pub fn run_self_tests() -> Result<SelfTestReport> {
    let mut report = SelfTestReport::default();
    for scenario in scenarios() {
        scenario.run()?;
        report.passed.push(scenario.name);
    }
    Ok(report)
}
