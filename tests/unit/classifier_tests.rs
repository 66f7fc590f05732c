/*!
 * Tests for task-line classification
 */

use ispform::app_config::{StructurerConfig, TaskPatternConfig};
use ispform::form::{FormStructurer, LineClassifier};

fn default_classifier() -> LineClassifier {
    FormStructurer::default().classifier().clone()
}

#[test]
fn test_looksLikeTask_withNamedSubjectGoal_shouldBeTrue() {
    let classifier = default_classifier();
    assert!(classifier.looks_like_task("Chad will shower daily with staff encouragement"));
}

#[test]
fn test_looksLikeTask_withRandomText_shouldBeFalse() {
    let classifier = default_classifier();
    assert!(!classifier.looks_like_task("Random text that is not a task"));
}

#[test]
fn test_looksLikeTask_withGenericSubjects_shouldBeTrue() {
    let classifier = default_classifier();
    for line in [
        "Individual will prepare a simple breakfast",
        "Client will take medication as prescribed",
        "Staff will assist with laundry",
        "Mary Ann will attend day program",
    ] {
        assert!(classifier.looks_like_task(line), "{line}");
    }
}

#[test]
fn test_looksLikeTask_withTrailingPunctuationAndCase_shouldBeTolerant() {
    let classifier = default_classifier();
    assert!(classifier.looks_like_task("CHAD WILL SHOWER DAILY."));
    assert!(classifier.looks_like_task("chad will shower daily;"));
    assert!(classifier.looks_like_task("  Goal:  "));
}

#[test]
fn test_looksLikeTask_withWhitespaceOnly_shouldBeFalse() {
    let classifier = default_classifier();
    assert!(!classifier.looks_like_task(""));
    assert!(!classifier.looks_like_task(" \t  "));
}

#[test]
fn test_classify_shouldNotMutateInput() {
    let classifier = default_classifier();
    let line = String::from("Chad will shower.");
    let _ = classifier.classify(&line);
    assert_eq!(line, "Chad will shower.");
}

#[test]
fn test_classify_withCustomRule_shouldApplyNewPhrasing() {
    let mut config = StructurerConfig::default();
    config
        .task_patterns
        .push(TaskPatternConfig::new("to_infinitive", r"^to\s+(?:increase|improve|maintain)\b"));
    let structurer = FormStructurer::new(&config).unwrap();

    assert_eq!(
        structurer.classifier().classify("To improve personal hygiene"),
        Some("to_infinitive")
    );
    assert!(!default_classifier().looks_like_task("To improve personal hygiene"));
}

#[test]
fn test_classify_withEmptyPatternTable_shouldOnlyMatchKeyword() {
    let config = StructurerConfig {
        task_patterns: Vec::new(),
        ..StructurerConfig::default()
    };
    let structurer = FormStructurer::new(&config).unwrap();

    assert!(structurer.classifier().looks_like_task("Goal: wash linens"));
    assert!(!structurer.classifier().looks_like_task("Chad will wash linens"));
}
