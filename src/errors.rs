/*!
 * Error types for the ispform library.
 *
 * This module contains custom error types for the configuration layer and
 * the task finalizer, using the thiserror crate for ergonomic error definitions.
 * Parsing a page never fails; these errors only surface while building a
 * structurer or finalizing a draft by hand.
 */

use thiserror::Error;

use crate::form::model::SectionType;

/// Errors that can occur while turning drafts into finalized tasks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructureError {
    /// A draft reached the finalizer without any goal text
    #[error("Cannot finalize a task without a description (empty goal text)")]
    EmptyDescription,
}

/// Errors that can occur when loading or compiling structurer configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading a configuration file
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing configuration JSON
    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A task pattern failed to compile
    #[error("Invalid task pattern '{name}': {message}")]
    InvalidPattern {
        /// Rule name from the task pattern table
        name: String,
        /// Compiler message from the regex crate
        message: String,
    },

    /// A section header entry has no usable aliases
    #[error("Section header '{section}' has no aliases")]
    EmptyAliases {
        /// Section the header entry belongs to
        section: SectionType,
    },

    /// Any other invalid configuration value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
