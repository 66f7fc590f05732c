/*!
 * Conversion of task drafts into finalized task records.
 */

use crate::errors::StructureError;

use super::model::{Confidence, FinalizedTask, TaskDraft};

/// Turns a completed draft into an immutable task record
pub struct TaskFinalizer;

impl TaskFinalizer {
    /// Finalize a draft with the page-level OCR confidence.
    ///
    /// The goal becomes the trimmed description; optional fields are trimmed
    /// and dropped when empty. The draft itself is left untouched.
    pub fn finalize(draft: &TaskDraft, confidence: Confidence) -> Result<FinalizedTask, StructureError> {
        let description = non_empty(&draft.goal).ok_or(StructureError::EmptyDescription)?;

        Ok(FinalizedTask {
            description,
            active_treatment: non_empty(&draft.active_treatment),
            individual_response: non_empty(&draft.individual_response),
            scores_comments: non_empty(&draft.scores_comments),
            confidence,
            kind: draft.kind,
        })
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
