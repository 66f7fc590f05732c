/*!
 * Common test utilities for the ispform test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Three complete goals, as OCR'd from a daily ISP data sheet
pub const THREE_GOAL_PAGE: &str = "Goal: Chad will shower daily with staff encouragement
Active Treatment: Staff reminded Chad of his shower schedule and laid out towels
Individual Response: Chad showered after one verbal prompt
Scores/Comments: 4 - completed with minimal prompting
Goal: Chad will wash his bed linens once a week
Active Treatment: Staff demonstrated sorting and loading the washer
Individual Response: Chad loaded the washer independently
Scores/Comments: 5 - independent
Goal: Chad will clean the bathroom sink and mirror
Active Treatment: Staff modeled wiping the mirror
Individual Response: Chad wiped the sink but declined the mirror
Scores/Comments: 2 - partial participation";

/// The same page after a noisy scan: table borders, bullets, odd spacing
pub const NOISY_PAGE: &str = "| ISP DATA SHEET |  March
|  GOAL 1: Chad   will shower daily
   with staff encouragement
• Active  Treatment: verbal prompts
• Individual Response; showered
| Scores / Comments: 4

| Goal #2: Chad will wash bed linens.
| Active Tx: demonstration
| Comments: 5";

/// Text with no headers and nothing task-shaped
pub const NARRATIVE_PAGE: &str = "Random text that is not a task
Staff notes were reviewed at the end of the shift
No incidents reported";

/// Initialize env_logger for tests that exercise logging paths
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Word sequence of a text with the given header keywords removed
pub fn words_without_headers(text: &str, headers: &[&str]) -> Vec<String> {
    let mut stripped = text.to_string();
    for header in headers {
        stripped = stripped.replace(header, " ");
    }
    stripped.split_whitespace().map(str::to_string).collect()
}
