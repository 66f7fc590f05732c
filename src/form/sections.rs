/*!
 * Section identification for OCR'd care-plan forms.
 *
 * Splits raw text into an ordered list of `FormSection`s by recognising
 * header keywords (`Goal:`, `Active Treatment:`, `Individual Response:`,
 * `Scores/Comments:`) at the start of a line.
 */

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::app_config::SectionHeaderConfig;
use crate::errors::ConfigError;

use super::model::{FormSection, SectionType};
use super::normalize::clean_line;

/// Build the case-insensitive header regex for a list of aliases.
///
/// Matches at line start, allows an optional goal number (`Goal 2`, `Goal #120`)
/// and requires `:` / `;` or the end of the line after the keyword.
pub(crate) fn header_regex(aliases: &[String]) -> Result<Regex, regex::Error> {
    let mut fragments: Vec<String> = aliases
        .iter()
        .map(|alias| alias.trim())
        .filter(|alias| !alias.is_empty())
        .map(alias_fragment)
        .collect();
    // Longest spelling first so "goals" is preferred over "goal"
    fragments.sort_by_key(|fragment| std::cmp::Reverse(fragment.len()));

    let pattern = format!(
        r"^\s*(?:{})(?:\s*#?\s*\d+)?\s*(?:[:;]|$)",
        fragments.join("|")
    );
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

fn alias_fragment(alias: &str) -> String {
    alias
        .split_whitespace()
        .map(|word| regex::escape(word).replace('/', r"\s*/\s*"))
        .collect::<Vec<_>>()
        .join(r"\s+")
}

#[derive(Debug, Clone)]
struct HeaderRule {
    section: SectionType,
    regex: Regex,
}

/// Segments raw OCR text into form sections
#[derive(Debug, Clone)]
pub struct SectionIdentifier {
    headers: Vec<HeaderRule>,
    strip_noise: bool,
}

impl SectionIdentifier {
    /// Compile the header table
    pub fn new(headers: &[SectionHeaderConfig], strip_noise: bool) -> Result<Self, ConfigError> {
        let mut rules = Vec::with_capacity(headers.len());
        for header in headers {
            if header.section == SectionType::Unknown {
                return Err(ConfigError::Invalid(
                    "the unknown section cannot have header keywords".to_string(),
                ));
            }
            if header.aliases.iter().all(|alias| alias.trim().is_empty()) {
                return Err(ConfigError::EmptyAliases { section: header.section });
            }
            let regex = header_regex(&header.aliases).map_err(|e| ConfigError::InvalidPattern {
                name: format!("{} header", header.section),
                message: e.to_string(),
            })?;
            rules.push(HeaderRule { section: header.section, regex });
        }

        Ok(Self { headers: rules, strip_noise })
    }

    /// If the line opens a section, return its type and the text after the keyword
    pub fn match_header<'a>(&self, line: &'a str) -> Option<(SectionType, &'a str)> {
        self.headers.iter().find_map(|rule| {
            rule.regex
                .find(line)
                .map(|m| (rule.section, line[m.end()..].trim()))
        })
    }

    /// Segment text into sections in document order.
    ///
    /// Lines before the first header go into an `Unknown` section. Blank lines
    /// are skipped; every other line lands in exactly one section.
    pub fn identify(&self, text: &str) -> Vec<FormSection> {
        let mut sections = Vec::new();
        let mut current: Option<FormSection> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line = clean_line(raw_line, self.strip_noise);
            if line.is_empty() {
                continue;
            }

            if let Some((section_type, remainder)) = self.match_header(&line) {
                if let Some(section) = current.take() {
                    sections.push(section);
                }
                let mut section = FormSection::new(section_type, index);
                section.push_line(&clean_line(remainder, self.strip_noise));
                current = Some(section);
                continue;
            }

            let section = current.get_or_insert_with(|| FormSection::new(SectionType::Unknown, index));
            section.push_line(&line);
            section.end_line = index + 1;
        }

        if let Some(section) = current {
            sections.push(section);
        }

        debug!("Identified {} form sections", sections.len());
        sections
    }
}
