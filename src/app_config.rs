use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::form::FormStructurer;
use crate::form::model::SectionType;

/// Application configuration module
/// This module handles the structurer configuration including loading,
/// validating and saving configuration settings. Header keywords and task
/// phrasings are plain data so new OCR variants can be added without code changes.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Form structuring rules
    #[serde(default)]
    pub structurer: StructurerConfig,
}

/// Rule tables and switches for the form structurer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StructurerConfig {
    /// Section header keywords, checked in order at the start of each line
    #[serde(default = "default_section_headers")]
    pub section_headers: Vec<SectionHeaderConfig>,

    /// Task phrasing patterns, highest priority first
    #[serde(default = "default_task_patterns")]
    pub task_patterns: Vec<TaskPatternConfig>,

    /// Strip bullets, table borders and control characters from OCR lines
    #[serde(default = "default_true")]
    pub strip_ocr_noise: bool,

    /// Open tasks from task-shaped lines that appear before any header
    #[serde(default = "default_true")]
    pub detect_unlabeled_goals: bool,
}

impl Default for StructurerConfig {
    fn default() -> Self {
        Self {
            section_headers: default_section_headers(),
            task_patterns: default_task_patterns(),
            strip_ocr_noise: true,
            detect_unlabeled_goals: true,
        }
    }
}

/// Keywords that open a section of one type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SectionHeaderConfig {
    /// Section type opened by these keywords
    pub section: SectionType,

    /// Accepted spellings, matched case-insensitively
    pub aliases: Vec<String>,
}

impl SectionHeaderConfig {
    pub fn new(section: SectionType, aliases: &[&str]) -> Self {
        Self {
            section,
            aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        }
    }
}

/// One named task phrasing rule
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TaskPatternConfig {
    /// Rule name reported by the classifier
    pub name: String,

    /// Regular expression, matched case-insensitively against a trimmed line
    pub pattern: String,
}

impl TaskPatternConfig {
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_section_headers() -> Vec<SectionHeaderConfig> {
    vec![
        SectionHeaderConfig::new(SectionType::Goal, &["goal", "goals"]),
        SectionHeaderConfig::new(SectionType::ActiveTreatment, &["active treatment", "active tx"]),
        SectionHeaderConfig::new(
            SectionType::IndividualResponse,
            &["individual response", "individual's response"],
        ),
        SectionHeaderConfig::new(
            SectionType::ScoresComments,
            &[
                "scores/comments",
                "score/comments",
                "scores and comments",
                "scores & comments",
                "comments",
            ],
        ),
    ]
}

fn default_task_patterns() -> Vec<TaskPatternConfig> {
    vec![
        // "Chad will shower", "The individual will complete"
        TaskPatternConfig::new("subject_will", r"^(?:[a-z][\w'.-]*\s+){1,3}will\s+[a-z]+"),
        // "1. Chad will shower", "b) Staff will prompt"
        TaskPatternConfig::new(
            "numbered_subject_will",
            r"^\(?(?:\d{1,2}|[a-z])[.)]\s*(?:[a-z][\w'.-]*\s+){1,3}will\s+[a-z]+",
        ),
    ]
}

impl Config {
    /// Parse a configuration from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load a configuration file, writing the defaults first if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()));
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        std::fs::write(path, config.to_json_pretty()?)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;
        Ok(config)
    }

    /// Serialize the configuration for writing to disk
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration by compiling every rule table
    pub fn validate(&self) -> Result<(), ConfigError> {
        FormStructurer::new(&self.structurer).map(|_| ())
    }
}
