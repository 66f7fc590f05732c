/*!
 * Structured form parser.
 *
 * Combines section identification with goal-boundary detection to turn a
 * page of OCR text into ordered task records. Drafts are threaded through
 * the section list as an explicit fold; nothing is shared between calls.
 */

use log::{debug, error, warn};
use once_cell::sync::Lazy;

use crate::app_config::StructurerConfig;
use crate::errors::ConfigError;

use super::classifier::LineClassifier;
use super::finalize::TaskFinalizer;
use super::model::{
    Confidence, FormSection, OcrPage, ParseResult, ParseStats, SectionType, TaskDraft, TaskKind,
};
use super::sections::SectionIdentifier;

static DEFAULT_STRUCTURER: Lazy<FormStructurer> = Lazy::new(FormStructurer::default);

/// Parse a page with the built-in rule tables
pub fn parse_structured_form(text: &str, confidence: impl Into<Confidence>) -> ParseResult {
    DEFAULT_STRUCTURER.parse(text, confidence)
}

/// Accumulator threaded through the section fold
#[derive(Debug, Default)]
struct Assembly {
    current: Option<TaskDraft>,
    closed: Vec<TaskDraft>,
    drafts_opened: usize,
    orphan_sections: usize,
}

impl Assembly {
    /// Close the pending draft, if any, and start a new one
    fn open(mut self, draft: TaskDraft) -> Self {
        if let Some(previous) = self.current.take() {
            self.closed.push(previous);
        }
        self.current = Some(draft);
        self.drafts_opened += 1;
        self
    }

    fn extend_goal(mut self, line: &str) -> Self {
        if let Some(draft) = self.current.as_mut() {
            draft.extend_goal(line);
        }
        self
    }

    fn attach(mut self, section: &FormSection) -> Self {
        match self.current.as_mut() {
            Some(draft) => {
                draft.set_field(section.section_type, section.content.trim());
            }
            None => {
                debug!(
                    "Ignoring {} section at line {} with no open goal",
                    section.section_type, section.start_line
                );
                self.orphan_sections += 1;
            }
        }
        self
    }

    fn close(mut self) -> Self {
        if let Some(draft) = self.current.take() {
            self.closed.push(draft);
        }
        self
    }
}

/// Turns raw OCR text into structured task records
#[derive(Debug, Clone)]
pub struct FormStructurer {
    sections: SectionIdentifier,
    classifier: LineClassifier,
    detect_unlabeled_goals: bool,
}

impl Default for FormStructurer {
    fn default() -> Self {
        Self::new(&StructurerConfig::default()).expect("Built-in structurer rules must compile")
    }
}

impl FormStructurer {
    /// Compile the rule tables of a configuration
    pub fn new(config: &StructurerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            sections: SectionIdentifier::new(&config.section_headers, config.strip_ocr_noise)?,
            classifier: LineClassifier::new(&config.section_headers, &config.task_patterns)?,
            detect_unlabeled_goals: config.detect_unlabeled_goals,
        })
    }

    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    pub fn section_identifier(&self) -> &SectionIdentifier {
        &self.sections
    }

    /// Structure one OCR page
    pub fn parse_page(&self, page: &OcrPage) -> ParseResult {
        self.parse(&page.text, page.confidence)
    }

    /// Structure raw OCR text.
    ///
    /// Never fails: sparse or malformed input degrades to fewer tasks, with
    /// all text still available in `form_sections`.
    pub fn parse(&self, text: &str, confidence: impl Into<Confidence>) -> ParseResult {
        let confidence = confidence.into();
        let form_sections = self.sections.identify(text);
        if form_sections.is_empty() {
            debug!("No content found in OCR text");
            return ParseResult {
                stats: ParseStats {
                    lines_scanned: text.lines().count(),
                    ..ParseStats::default()
                },
                ..ParseResult::empty()
            };
        }

        let assembly = form_sections
            .iter()
            .fold(Assembly::default(), |assembly, section| self.absorb(assembly, section))
            .close();

        let mut tasks = Vec::with_capacity(assembly.closed.len());
        let mut drafts_discarded = 0;
        for draft in &assembly.closed {
            if !draft.has_goal() {
                drafts_discarded += 1;
                continue;
            }
            match TaskFinalizer::finalize(draft, confidence) {
                Ok(task) => tasks.push(task),
                Err(e) => {
                    error!("Dropping task draft: {}", e);
                    drafts_discarded += 1;
                }
            }
        }
        if drafts_discarded > 0 {
            warn!("Discarded {} task draft(s) without goal text", drafts_discarded);
        }

        let stats = ParseStats {
            lines_scanned: text.lines().count(),
            sections: form_sections.len(),
            unknown_sections: form_sections
                .iter()
                .filter(|section| section.section_type == SectionType::Unknown)
                .count(),
            drafts_opened: assembly.drafts_opened,
            drafts_discarded,
            orphan_sections: assembly.orphan_sections,
        };
        debug!(
            "Structured form: {} sections, {} tasks, {} discarded, {} orphan sections",
            stats.sections,
            tasks.len(),
            stats.drafts_discarded,
            stats.orphan_sections
        );

        ParseResult {
            tasks,
            form_sections,
            stats,
        }
    }

    fn absorb(&self, assembly: Assembly, section: &FormSection) -> Assembly {
        match section.section_type {
            SectionType::Goal => self.absorb_goal(assembly, section),
            SectionType::Unknown if self.detect_unlabeled_goals => {
                self.absorb_unlabeled(assembly, section)
            }
            SectionType::Unknown => assembly,
            SectionType::ActiveTreatment
            | SectionType::IndividualResponse
            | SectionType::ScoresComments => assembly.attach(section),
        }
    }

    /// A goal header is always a boundary; later task-shaped lines in the
    /// same section open further drafts, anything else continues the goal.
    /// A bare keyword line ("Goal.") is a boundary too: the next line opens
    /// a draft whatever its wording, and the keyword itself is not goal text.
    fn absorb_goal(&self, assembly: Assembly, section: &FormSection) -> Assembly {
        let (assembly, _, opened) = section.lines().fold(
            (assembly, true, false),
            |(assembly, boundary, opened), line| {
                if self.classifier.is_bare_keyword(line) {
                    (assembly, true, opened)
                } else if boundary || self.classifier.looks_like_task(line) {
                    (assembly.open(TaskDraft::with_goal(line, TaskKind::Goal)), false, true)
                } else {
                    (assembly.extend_goal(line), false, opened)
                }
            },
        );

        if opened {
            assembly
        } else {
            assembly.open(TaskDraft::default())
        }
    }

    /// Task-shaped lines before any header open unlabeled drafts; narrative
    /// ahead of the first of them stays diagnostic-only.
    fn absorb_unlabeled(&self, assembly: Assembly, section: &FormSection) -> Assembly {
        let (assembly, _, _) = section.lines().fold(
            (assembly, false, false),
            |(assembly, boundary, in_task), line| {
                if self.classifier.is_bare_keyword(line) {
                    (assembly, true, in_task)
                } else if boundary || self.classifier.looks_like_task(line) {
                    (assembly.open(TaskDraft::with_goal(line, TaskKind::Unlabeled)), false, true)
                } else if in_task {
                    (assembly.extend_goal(line), false, true)
                } else {
                    (assembly, false, false)
                }
            },
        );
        assembly
    }
}
