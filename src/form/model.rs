/*!
 * Data model for structured care-plan forms.
 *
 * These types describe the input handed over by the OCR engine, the
 * sections recognised in its text, the drafts assembled while scanning,
 * and the finalized task records handed on to persistence and note
 * generation. Output types serialize with camelCase keys.
 */

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

/// Kind of form field a section of text belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Goal,
    ActiveTreatment,
    IndividualResponse,
    ScoresComments,
    Unknown,
}

impl SectionType {
    /// Label used when rendering a task back into form text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Goal => "Goal",
            Self::ActiveTreatment => "Active Treatment",
            Self::IndividualResponse => "Individual Response",
            Self::ScoresComments => "Scores/Comments",
            Self::Unknown => "Unknown",
        }
    }

    /// Snake-case identifier, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::ActiveTreatment => "active_treatment",
            Self::IndividualResponse => "individual_response",
            Self::ScoresComments => "scores_comments",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recognition confidence reported by the OCR engine, in percent.
///
/// In-range values pass through untouched. Out-of-range values are
/// clamped into `[0, 100]` and NaN becomes 0, including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Create a confidence value, clamping anything outside `[0, 100]`
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            warn!("OCR confidence is NaN, treating it as 0");
            return Confidence(Self::MIN);
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            let clamped = value.clamp(Self::MIN, Self::MAX);
            warn!("OCR confidence {} is out of range, clamped to {}", value, clamped);
            return Confidence(clamped);
        }
        Confidence(value)
    }

    /// Raw percentage value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Confidence::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl From<u8> for Confidence {
    fn from(value: u8) -> Self {
        Confidence::new(f64::from(value))
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One page of OCR output, as delivered by the text-extraction engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrPage {
    /// Raw recognised text, lines separated by newlines
    pub text: String,

    /// Page-level recognition confidence (0-100)
    pub confidence: f64,
}

impl OcrPage {
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// A classified, contiguous span of the raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSection {
    /// Field type this span was attributed to
    #[serde(rename = "type")]
    pub section_type: SectionType,

    /// Normalized text of the span, header keyword removed, newline-joined
    pub content: String,

    /// First raw line covered by this section (0-based)
    pub start_line: usize,

    /// One past the last raw line covered by this section
    pub end_line: usize,
}

impl FormSection {
    pub fn new(section_type: SectionType, start_line: usize) -> Self {
        Self {
            section_type,
            content: String::new(),
            start_line,
            end_line: start_line + 1,
        }
    }

    /// Append one normalized line to the section content
    pub fn push_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(line);
    }

    /// Non-empty content lines of the section
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines().filter(|line| !line.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// How a task draft was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Opened by a goal section
    #[default]
    Goal,
    /// Opened by a task-shaped line found before any section header
    Unlabeled,
}

/// In-progress accumulation of one task's fields during a parse
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub goal: Option<String>,
    pub active_treatment: Option<String>,
    pub individual_response: Option<String>,
    pub scores_comments: Option<String>,
    pub kind: TaskKind,
}

impl TaskDraft {
    /// Start a draft seeded with goal text
    pub fn with_goal(goal: &str, kind: TaskKind) -> Self {
        Self {
            goal: Some(goal.to_string()),
            kind,
            ..Self::default()
        }
    }

    /// Join a continuation line onto the goal text
    pub fn extend_goal(&mut self, line: &str) {
        match &mut self.goal {
            Some(goal) if !goal.is_empty() => {
                goal.push(' ');
                goal.push_str(line);
            }
            _ => self.goal = Some(line.to_string()),
        }
    }

    /// Store body content for a section type; a recurring field is overwritten
    pub fn set_field(&mut self, section_type: SectionType, content: &str) -> bool {
        let slot = match section_type {
            SectionType::ActiveTreatment => &mut self.active_treatment,
            SectionType::IndividualResponse => &mut self.individual_response,
            SectionType::ScoresComments => &mut self.scores_comments,
            SectionType::Goal | SectionType::Unknown => return false,
        };
        *slot = Some(content.to_string());
        true
    }

    /// Whether the draft carries any goal text worth finalizing
    pub fn has_goal(&self) -> bool {
        self.goal.as_deref().is_some_and(|goal| !goal.trim().is_empty())
    }
}

/// Immutable task record handed to persistence and note generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedTask {
    /// Goal statement, never empty
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_treatment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual_response: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores_comments: Option<String>,

    /// Page-level OCR confidence, shared by every task from one page
    pub confidence: Confidence,

    #[serde(rename = "type", default)]
    pub kind: TaskKind,
}

impl fmt::Display for FinalizedTask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}: {}", SectionType::Goal.label(), self.description)?;
        let fields = [
            (SectionType::ActiveTreatment, &self.active_treatment),
            (SectionType::IndividualResponse, &self.individual_response),
            (SectionType::ScoresComments, &self.scores_comments),
        ];
        for (section_type, value) in fields {
            if let Some(value) = value {
                writeln!(f, "{}: {}", section_type.label(), value)?;
            }
        }
        Ok(())
    }
}

/// Counters describing how a page was structured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Raw lines seen, blank lines included
    pub lines_scanned: usize,
    pub sections: usize,
    pub unknown_sections: usize,
    pub drafts_opened: usize,
    /// Drafts dropped because they never received goal text
    pub drafts_discarded: usize,
    /// Body sections that appeared while no draft was open
    pub orphan_sections: usize,
}

/// Output of one structuring call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub tasks: Vec<FinalizedTask>,
    pub form_sections: Vec<FormSection>,

    #[serde(skip)]
    pub stats: ParseStats,
}

impl ParseResult {
    pub fn empty() -> Self {
        Self {
            tasks: Vec::new(),
            form_sections: Vec::new(),
            stats: ParseStats::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.form_sections.is_empty()
    }

    /// Sections of a given type, in document order
    pub fn sections_of(&self, section_type: SectionType) -> impl Iterator<Item = &FormSection> {
        self.form_sections
            .iter()
            .filter(move |section| section.section_type == section_type)
    }

    /// Whether nothing usable was found, a hint that the page should be re-scanned
    pub fn needs_rescan(&self) -> bool {
        self.tasks.is_empty()
    }
}
