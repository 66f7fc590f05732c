/*!
 * Form structuring for OCR'd Individual Service Plan (ISP) pages.
 *
 * Raw OCR text is segmented into labelled sections, goal statements are
 * detected, and each goal is assembled with its treatment, response and
 * score fields into a finalized task record.
 *
 * # Architecture
 *
 * - `model`: Input, section, draft and output types
 * - `normalize`: OCR line cleanup
 * - `sections`: Header-keyword segmentation
 * - `classifier`: Rule table deciding whether a line looks like a task
 * - `finalize`: Draft to task record conversion
 * - `parser`: Orchestrates the above into a `ParseResult`
 */

pub mod classifier;
pub mod finalize;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod sections;

// Re-export main types
pub use classifier::LineClassifier;
pub use finalize::TaskFinalizer;
pub use model::{
    Confidence, FinalizedTask, FormSection, OcrPage, ParseResult, ParseStats, SectionType,
    TaskDraft, TaskKind,
};
pub use parser::{FormStructurer, parse_structured_form};
pub use sections::SectionIdentifier;
