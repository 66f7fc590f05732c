/*!
 * Tests for configuration loading and validation
 */

use anyhow::Result;
use ispform::app_config::{Config, LogLevel, SectionHeaderConfig, StructurerConfig, TaskPatternConfig};
use ispform::errors::ConfigError;
use ispform::form::SectionType;
use log::LevelFilter;
use crate::common;

#[test]
fn test_default_config_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.structurer.strip_ocr_noise);
    assert!(config.structurer.detect_unlabeled_goals);
}

#[test]
fn test_fromJsonStr_withEmptyObject_shouldFillDefaults() -> Result<()> {
    let config = Config::from_json_str("{}")?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_fromJsonStr_withPartialStructurer_shouldKeepDefaultTables() -> Result<()> {
    let config = Config::from_json_str(
        r#"{ "log_level": "debug", "structurer": { "detect_unlabeled_goals": false } }"#,
    )?;

    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(!config.structurer.detect_unlabeled_goals);
    assert_eq!(
        config.structurer.section_headers,
        StructurerConfig::default().section_headers
    );
    Ok(())
}

#[test]
fn test_fromJsonStr_withCustomTables_shouldParseSnakeCaseSections() -> Result<()> {
    let json = r#"{
        "structurer": {
            "section_headers": [
                { "section": "goal", "aliases": ["goal", "outcome"] },
                { "section": "scores_comments", "aliases": ["score"] }
            ],
            "task_patterns": [
                { "name": "learns_to", "pattern": "^\\w+ will learn to" }
            ]
        }
    }"#;
    let config = Config::from_json_str(json)?;

    assert_eq!(config.structurer.section_headers.len(), 2);
    assert_eq!(config.structurer.section_headers[1].section, SectionType::ScoresComments);
    assert_eq!(config.structurer.task_patterns[0].name, "learns_to");
    Ok(())
}

#[test]
fn test_validate_withInvalidRegex_shouldReturnInvalidPattern() {
    let mut config = Config::default();
    config.structurer.task_patterns = vec![TaskPatternConfig::new("bad", "([")];

    match config.validate() {
        Err(ConfigError::InvalidPattern { name, .. }) => assert_eq!(name, "bad"),
        other => panic!("expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_validate_withEmptyAliases_shouldReturnEmptyAliases() {
    let mut config = Config::default();
    config
        .structurer
        .section_headers
        .push(SectionHeaderConfig::new(SectionType::ActiveTreatment, &["  "]));

    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyAliases { section: SectionType::ActiveTreatment })
    ));
}

#[test]
fn test_validate_withUnknownSectionHeader_shouldFail() {
    let mut config = Config::default();
    config
        .structurer
        .section_headers
        .push(SectionHeaderConfig::new(SectionType::Unknown, &["misc"]));

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_withoutGoalHeader_shouldFail() {
    let mut config = Config::default();
    config
        .structurer
        .section_headers
        .retain(|header| header.section != SectionType::Goal);

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_fromFile_withMalformedJson_shouldReturnJsonError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(matches!(Config::from_file(&path), Err(ConfigError::Json(_))));
    Ok(())
}

#[test]
fn test_fromFile_withMissingFile_shouldReturnIoError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("missing.json");

    assert!(matches!(Config::from_file(&path), Err(ConfigError::Io(_))));
    Ok(())
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("conf.json");

    let created = Config::load_or_create(&path)?;
    assert!(path.exists());
    assert_eq!(created, Config::default());

    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded, created);
    Ok(())
}

#[test]
fn test_loadOrCreate_withInvalidFile_shouldAddContext() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{ "log_level": "loud" }"#)?;

    let error = Config::load_or_create(&path).unwrap_err();
    assert!(format!("{:#}", error).contains("Failed to load config file"));
    Ok(())
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}

#[test]
fn test_toJsonPretty_shouldRoundTripThroughFromJsonStr() -> Result<()> {
    let mut config = Config::default();
    config.log_level = LogLevel::Warn;
    config.structurer.strip_ocr_noise = false;

    let json = config.to_json_pretty()?;
    assert_eq!(Config::from_json_str(&json)?, config);
    Ok(())
}
