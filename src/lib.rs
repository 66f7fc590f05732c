/*!
 * # ispform - structured task extraction from OCR'd care-plan forms
 *
 * A Rust library that turns the raw OCR text of a scanned Individual
 * Service Plan (ISP) page into ordered, structured task records.
 *
 * ## Features
 *
 * - Header-keyword segmentation (`Goal:`, `Active Treatment:`,
 *   `Individual Response:`, `Scores/Comments:`), tolerant of OCR noise
 * - Goal-boundary detection with a configurable, prioritized rule table
 * - Lossless diagnostics: every non-blank line ends up in a form section
 * - Page-level OCR confidence carried onto every task
 * - JSON configuration and JSON-serializable output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management and rule tables
 * - `form`: Form structuring:
 *   - `form::sections`: Section identification
 *   - `form::classifier`: Task-line classification
 *   - `form::finalize`: Task finalization
 *   - `form::parser`: The structuring orchestrator
 * - `logging`: Optional stderr logger for host applications
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod form;
pub mod logging;

// Re-export main types for easier usage
pub use app_config::{Config, LogLevel, StructurerConfig};
pub use errors::{ConfigError, StructureError};
pub use form::{
    Confidence, FinalizedTask, FormSection, FormStructurer, OcrPage, ParseResult, SectionType,
    parse_structured_form,
};
