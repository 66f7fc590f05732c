/*!
 * Task-line classification.
 *
 * Decides whether a single line reads like a goal statement ("Chad will
 * shower daily") rather than narrative, comments or OCR noise. Rules are a
 * prioritized table of named regexes; the first rule that matches wins.
 */

use regex::{Regex, RegexBuilder};

use crate::app_config::{SectionHeaderConfig, TaskPatternConfig};
use crate::errors::ConfigError;

use super::model::SectionType;
use super::normalize::strip_trailing_punctuation;
use super::sections::header_regex;

/// Name of the implicit rule matching lines that start with a goal header
pub const SECTION_KEYWORD_RULE: &str = "section_keyword";

#[derive(Debug, Clone)]
struct TaskRule {
    name: String,
    regex: Regex,
}

/// Prioritized rule table deciding whether a line looks like a task
#[derive(Debug, Clone)]
pub struct LineClassifier {
    rules: Vec<TaskRule>,
}

impl LineClassifier {
    /// Compile the classifier from the goal header keywords and the task patterns.
    ///
    /// The goal-keyword rule always comes first.
    pub fn new(
        headers: &[SectionHeaderConfig],
        patterns: &[TaskPatternConfig],
    ) -> Result<Self, ConfigError> {
        let goal_aliases: Vec<String> = headers
            .iter()
            .filter(|header| header.section == SectionType::Goal)
            .flat_map(|header| header.aliases.iter().cloned())
            .filter(|alias| !alias.trim().is_empty())
            .collect();
        if goal_aliases.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one goal header keyword is required".to_string(),
            ));
        }

        let mut rules = Vec::with_capacity(patterns.len() + 1);
        let keyword = header_regex(&goal_aliases).map_err(|e| ConfigError::InvalidPattern {
            name: SECTION_KEYWORD_RULE.to_string(),
            message: e.to_string(),
        })?;
        rules.push(TaskRule {
            name: SECTION_KEYWORD_RULE.to_string(),
            regex: keyword,
        });

        for pattern in patterns {
            if pattern.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "task pattern '{}' has an empty name",
                    pattern.pattern
                )));
            }
            let regex = RegexBuilder::new(&pattern.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| ConfigError::InvalidPattern {
                    name: pattern.name.clone(),
                    message: e.to_string(),
                })?;
            rules.push(TaskRule {
                name: pattern.name.clone(),
                regex,
            });
        }

        Ok(Self { rules })
    }

    /// Name of the first rule the line matches, if any
    pub fn classify(&self, line: &str) -> Option<&str> {
        let candidate = strip_trailing_punctuation(line.trim());
        if candidate.is_empty() {
            return None;
        }

        self.rules
            .iter()
            .find(|rule| rule.regex.is_match(candidate))
            .map(|rule| rule.name.as_str())
    }

    /// Whether the line reads like a task or goal statement
    pub fn looks_like_task(&self, line: &str) -> bool {
        self.classify(line).is_some()
    }

    /// Whether the line holds a goal header keyword and nothing else
    /// ("Goal.", "GOAL 2;"), as left behind when OCR misreads the colon
    pub fn is_bare_keyword(&self, line: &str) -> bool {
        let candidate = strip_trailing_punctuation(line.trim());
        self.rules
            .first()
            .and_then(|keyword| keyword.regex.find(candidate))
            .is_some_and(|m| candidate[m.end()..].trim().is_empty())
    }

    /// Rule names in priority order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }
}
