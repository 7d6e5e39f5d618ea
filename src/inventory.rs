//! Read-back and consistency checks for a generated output directory.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::files::{
    BATCH_MARKER, CASES_FILE, JSON_EXTENSION, MANIFEST_FILE, NEWS_BATCH_PREFIX,
    POLICY_BATCH_PREFIX,
};
use crate::data::{CaseRecord, NewsRecord, PolicyRecord};
use crate::errors::GeneratorError;
use crate::types::FileName;

/// A batch file found on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchFile {
    /// Batch number parsed from the file name (1-based).
    pub number: usize,
    /// Full path to the file.
    pub path: PathBuf,
}

impl BatchFile {
    /// File name relative to the output directory.
    pub fn file_name(&self) -> FileName {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Per-kind totals for a verified directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputInventory {
    /// Number of policy batch files.
    pub policy_files: usize,
    /// Policy records across all batches.
    pub policy_records: usize,
    /// Number of news batch files.
    pub news_files: usize,
    /// News records across all batches.
    pub news_records: usize,
    /// Records in the case file.
    pub case_records: usize,
}

/// Parse `<prefix>_batch_<N>.json` into `N`.
pub fn parse_batch_number(prefix: &str, file_name: &str) -> Option<usize> {
    let digits = file_name
        .strip_prefix(prefix)?
        .strip_prefix(BATCH_MARKER)?
        .strip_suffix(JSON_EXTENSION)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Batch files for `prefix` directly under `dir`, ordered by batch number.
///
/// Numeric order keeps `_batch_10` after `_batch_9`.
pub fn list_batch_files(dir: &Path, prefix: &str) -> Result<Vec<BatchFile>, GeneratorError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| GeneratorError::InconsistentOutput {
            path: dir.to_path_buf(),
            details: err.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if let Some(number) = parse_batch_number(prefix, name) {
            files.push(BatchFile {
                number,
                path: entry.path().to_path_buf(),
            });
        }
    }
    files.sort_by_key(|file| file.number);
    Ok(files)
}

/// Concatenate every `prefix` batch under `dir` in batch order.
pub fn read_batches<T: DeserializeOwned>(
    dir: &Path,
    prefix: &str,
) -> Result<Vec<T>, GeneratorError> {
    let mut records = Vec::new();
    for file in list_batch_files(dir, prefix)? {
        let mut batch: Vec<T> = read_json(&file.path)?;
        records.append(&mut batch);
    }
    Ok(records)
}

/// Read a single JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, GeneratorError> {
    let raw = fs::read(path)?;
    Ok(serde_json::from_slice(&raw)?)
}

/// Check that `dir` holds a complete run: contiguous batch numbers, the case
/// file, and a manifest naming exactly the files present.
pub fn verify_output(dir: &Path) -> Result<OutputInventory, GeneratorError> {
    let policy_files = list_batch_files(dir, POLICY_BATCH_PREFIX)?;
    let news_files = list_batch_files(dir, NEWS_BATCH_PREFIX)?;
    ensure_contiguous(dir, POLICY_BATCH_PREFIX, &policy_files)?;
    ensure_contiguous(dir, NEWS_BATCH_PREFIX, &news_files)?;

    let cases_path = dir.join(CASES_FILE);
    if !cases_path.is_file() {
        return Err(inconsistent(&cases_path, "case file is missing"));
    }
    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(inconsistent(&manifest_path, "manifest is missing"));
    }
    let manifest = fs::read_to_string(&manifest_path)?;
    let listed = quoted_file_names(&manifest);
    let mut on_disk: Vec<FileName> = policy_files
        .iter()
        .chain(news_files.iter())
        .map(BatchFile::file_name)
        .collect();
    on_disk.push(CASES_FILE.to_string());
    if listed != on_disk {
        return Err(inconsistent(
            &manifest_path,
            &format!("manifest lists {listed:?} but directory holds {on_disk:?}"),
        ));
    }

    let mut inventory = OutputInventory {
        policy_files: policy_files.len(),
        news_files: news_files.len(),
        ..OutputInventory::default()
    };
    for file in &policy_files {
        inventory.policy_records += read_json::<Vec<PolicyRecord>>(&file.path)?.len();
    }
    for file in &news_files {
        inventory.news_records += read_json::<Vec<NewsRecord>>(&file.path)?.len();
    }
    inventory.case_records = read_json::<Vec<CaseRecord>>(&cases_path)?.len();
    Ok(inventory)
}

fn ensure_contiguous(dir: &Path, prefix: &str, files: &[BatchFile]) -> Result<(), GeneratorError> {
    for (position, file) in files.iter().enumerate() {
        if file.number != position + 1 {
            return Err(inconsistent(
                dir,
                &format!(
                    "{prefix} batches are not contiguous: expected batch {} but found {}",
                    position + 1,
                    file.number
                ),
            ));
        }
    }
    Ok(())
}

/// Every quoted `*.json` name in the manifest, in order of appearance.
fn quoted_file_names(manifest: &str) -> Vec<FileName> {
    manifest
        .split(['"', '\''])
        .skip(1)
        .step_by(2)
        .filter(|token| token.ends_with(JSON_EXTENSION))
        .map(str::to_string)
        .collect()
}

fn inconsistent(path: &Path, details: &str) -> GeneratorError {
    GeneratorError::InconsistentOutput {
        path: path.to_path_buf(),
        details: details.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_batch_numbers_strictly() {
        assert_eq!(parse_batch_number("news", "news_batch_12.json"), Some(12));
        assert_eq!(parse_batch_number("news", "news_batch_.json"), None);
        assert_eq!(parse_batch_number("news", "news_batch_1a.json"), None);
        assert_eq!(parse_batch_number("news", "policies_batch_1.json"), None);
        assert_eq!(parse_batch_number("news", "news_batch_1.json.tmp"), None);
    }

    #[test]
    fn batch_files_sort_numerically() {
        let temp = tempdir().unwrap();
        for number in [10, 2, 1] {
            fs::write(temp.path().join(format!("news_batch_{number}.json")), "[]").unwrap();
        }
        fs::write(temp.path().join("unrelated.json"), "[]").unwrap();
        let numbers: Vec<usize> = list_batch_files(temp.path(), "news")
            .unwrap()
            .into_iter()
            .map(|file| file.number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 10]);
    }

    #[test]
    fn quoted_names_cover_both_quote_styles() {
        let manifest = "\n// header\nexport const POLICY_BATCHES = [\"a_batch_1.json\"];\n\
export const NEWS_BATCHES = [];\nexport const CASES_FILE = 'cases_all.json';\n";
        assert_eq!(
            quoted_file_names(manifest),
            vec!["a_batch_1.json".to_string(), "cases_all.json".to_string()]
        );
    }

    #[test]
    fn gap_in_batches_is_reported() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("policies_batch_1.json"), "[]").unwrap();
        fs::write(temp.path().join("policies_batch_3.json"), "[]").unwrap();
        let err = verify_output(temp.path()).unwrap_err();
        assert!(matches!(err, GeneratorError::InconsistentOutput { .. }));
    }

    #[test]
    fn missing_manifest_is_reported() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("cases_all.json"), "[]").unwrap();
        let err = verify_output(temp.path()).unwrap_err();
        assert!(err.to_string().contains("manifest is missing"));
    }
}
