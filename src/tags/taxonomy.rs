//! Taxonomy construction and validation
//!
//! A taxonomy maps category names to ordered lists of (pattern, label)
//! rules. Patterns compile eagerly at construction, so a malformed rule
//! fails before any record is scanned. Sources: the built-in seed table,
//! or a JSON/YAML file of the same shape.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::TagError;

use super::seeds::SEED_CATEGORIES;

/// A compiled tagging rule: a case-insensitive pattern and its canonical label
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    pub pattern: String,
    pub label: String,
}

impl Rule {
    /// Unanchored match against an already-lowercased record
    pub fn is_match(&self, lowered: &str) -> bool {
        self.regex.is_match(lowered)
    }
}

/// A named category and its rules, in declaration order
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub rules: Vec<Rule>,
}

/// An immutable category → rules mapping with all patterns compiled
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

/// Serde shape for taxonomy files (JSON or YAML)
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    pub rules: Vec<RuleDef>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RuleDef {
    pub pattern: String,
    pub label: String,
}

impl Taxonomy {
    /// Compile a taxonomy from category definitions.
    ///
    /// Fails on the first empty or malformed input: no categories, a
    /// category without rules, or a pattern that does not compile.
    pub fn new(defs: Vec<CategoryDef>) -> std::result::Result<Self, TagError> {
        if defs.is_empty() {
            return Err(TagError::EmptyTaxonomy);
        }

        let mut categories = Vec::with_capacity(defs.len());
        for def in defs {
            if def.rules.is_empty() {
                return Err(TagError::EmptyCategory(def.name));
            }

            let mut rules = Vec::with_capacity(def.rules.len());
            for rule in def.rules {
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| TagError::InvalidPattern {
                        category: def.name.clone(),
                        pattern: rule.pattern.clone(),
                        source,
                    })?;
                rules.push(Rule {
                    regex,
                    pattern: rule.pattern,
                    label: rule.label,
                });
            }

            categories.push(Category {
                name: def.name,
                rules,
            });
        }

        Ok(Self { categories })
    }

    /// The built-in keyword taxonomy from [`SEED_CATEGORIES`].
    pub fn builtin() -> Self {
        let defs = SEED_CATEGORIES
            .iter()
            .map(|seed| CategoryDef {
                name: seed.name.to_string(),
                rules: seed
                    .rules
                    .iter()
                    .map(|(pattern, label)| RuleDef {
                        pattern: pattern.to_string(),
                        label: label.to_string(),
                    })
                    .collect(),
            })
            .collect();

        // The seed table is pinned by tests; a compile failure here is a bug.
        Self::new(defs).expect("built-in taxonomy compiles")
    }

    /// Load a taxonomy from a `.json`, `.yaml`, or `.yml` file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read taxonomy file {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let defs: Vec<CategoryDef> = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("taxonomy file {} is not valid YAML", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("taxonomy file {} is not valid JSON", path.display()))?
        };

        Ok(Self::new(defs)?)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn rule_count(&self) -> usize {
        self.categories.iter().map(|c| c.rules.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn defs(entries: &[(&str, &[(&str, &str)])]) -> Vec<CategoryDef> {
        entries
            .iter()
            .map(|(name, rules)| CategoryDef {
                name: name.to_string(),
                rules: rules
                    .iter()
                    .map(|(pattern, label)| RuleDef {
                        pattern: pattern.to_string(),
                        label: label.to_string(),
                    })
                    .collect(),
            })
            .collect()
    }

    #[test]
    fn test_builtin_compiles() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.category_count(), 7);
        assert!(taxonomy.rule_count() > 150);
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        let err = Taxonomy::new(defs(&[("Broken", &[(r"(unbalanced", "oops")])])).unwrap_err();
        match err {
            TagError::InvalidPattern {
                category, pattern, ..
            } => {
                assert_eq!(category, "Broken");
                assert_eq!(pattern, "(unbalanced");
            }
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_taxonomy_rejected() {
        assert!(matches!(
            Taxonomy::new(vec![]),
            Err(TagError::EmptyTaxonomy)
        ));
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = Taxonomy::new(vec![CategoryDef {
            name: "Hollow".to_string(),
            rules: vec![],
        }])
        .unwrap_err();
        assert!(matches!(err, TagError::EmptyCategory(name) if name == "Hollow"));
    }

    #[test]
    fn test_patterns_match_case_insensitively() {
        let taxonomy =
            Taxonomy::new(defs(&[("Outcomes", &[(r"icu", "ICU")])])).unwrap();
        let rule = &taxonomy.categories()[0].rules[0];
        assert!(rule.is_match("transferred to the icu overnight"));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        write!(
            file,
            "- name: Police Actions\n  rules:\n    - pattern: \"taser\\\\w*\"\n      label: taser\n"
        )
        .unwrap();

        let taxonomy = Taxonomy::from_file(file.path()).unwrap();
        assert_eq!(taxonomy.category_count(), 1);
        assert_eq!(taxonomy.categories()[0].rules[0].label, "taser");
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        write!(
            file,
            r#"[{{"name": "Outcomes", "rules": [{{"pattern": "injur\\w*", "label": "injury"}}]}}]"#
        )
        .unwrap();

        let taxonomy = Taxonomy::from_file(file.path()).unwrap();
        assert_eq!(taxonomy.categories()[0].name, "Outcomes");
    }
}
