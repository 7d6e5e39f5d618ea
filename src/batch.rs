//! Partitioned JSON output with all-or-nothing file writes.

use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::constants::files::{BATCH_MARKER, JSON_EXTENSION};
use crate::errors::GeneratorError;
use crate::types::FileName;

/// File name for batch `number` (1-based) of `prefix`, e.g. `news_batch_3.json`.
pub fn batch_file_name(prefix: &str, number: usize) -> FileName {
    format!("{prefix}{BATCH_MARKER}{number}{JSON_EXTENSION}")
}

/// Number of files needed to hold `total` records in batches of `batch_size`.
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    if batch_size == 0 {
        return 0;
    }
    total.div_ceil(batch_size)
}

/// Writes records into a target directory.
#[derive(Debug, Clone)]
pub struct BatchWriter {
    dir: PathBuf,
    parallel: bool,
}

impl BatchWriter {
    /// Create the target directory (and parents) and return a writer for it.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, GeneratorError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            parallel: false,
        })
    }

    /// Write independent batch files concurrently on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Directory this writer targets.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Split `records` into consecutive chunks of `batch_size` and write each to
    /// its own numbered file. Returns the written file names in batch order.
    pub fn write_batches<T>(
        &self,
        prefix: &str,
        records: &[T],
        batch_size: usize,
    ) -> Result<Vec<FileName>, GeneratorError>
    where
        T: Serialize + Sync,
    {
        if batch_size == 0 {
            return Err(GeneratorError::Configuration(
                "batch size must be greater than zero".to_string(),
            ));
        }
        let write_chunk = |(idx, chunk): (usize, &[T])| -> Result<FileName, GeneratorError> {
            let name = batch_file_name(prefix, idx + 1);
            self.write_json(&name, chunk)?;
            Ok(name)
        };
        let names = if self.parallel {
            records
                .par_chunks(batch_size)
                .enumerate()
                .map(write_chunk)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            records
                .chunks(batch_size)
                .enumerate()
                .map(write_chunk)
                .collect::<Result<Vec<_>, _>>()?
        };
        debug!(
            "[mockgen] wrote {} {} batch file(s) to {}",
            names.len(),
            prefix,
            self.dir.display()
        );
        Ok(names)
    }

    /// Write `value` as a 2-space-indented JSON document.
    pub fn write_json<T>(&self, file_name: &str, value: &T) -> Result<PathBuf, GeneratorError>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec_pretty(value)?;
        self.write_bytes(file_name, &payload)
    }

    /// Write raw text, e.g. the manifest module.
    pub fn write_text(&self, file_name: &str, contents: &str) -> Result<PathBuf, GeneratorError> {
        self.write_bytes(file_name, contents.as_bytes())
    }

    fn write_bytes(&self, file_name: &str, payload: &[u8]) -> Result<PathBuf, GeneratorError> {
        let target = self.dir.join(file_name);
        // Readers never observe a partially written file: stage in the same
        // directory, then rename over the target.
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Staging files are created owner-only; published files are not.
            staged
                .as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }
        staged.write_all(payload)?;
        staged.flush()?;
        staged.persist(&target).map_err(|err| err.error)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn batch_count_rounds_up() {
        assert_eq!(batch_count(0, 1_000), 0);
        assert_eq!(batch_count(3, 2), 2);
        assert_eq!(batch_count(4, 2), 2);
        assert_eq!(batch_count(20_000, 1_000), 20);
        assert_eq!(batch_count(20_001, 1_000), 21);
        assert_eq!(batch_count(5, 0), 0);
    }

    #[test]
    fn batch_file_names_are_numbered_from_one() {
        assert_eq!(batch_file_name("policies", 1), "policies_batch_1.json");
        assert_eq!(batch_file_name("news", 20), "news_batch_20.json");
    }

    #[test]
    fn create_builds_missing_parents() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("lib").join("data").join("generated");
        let writer = BatchWriter::create(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(writer.dir(), nested.as_path());
    }

    #[test]
    fn last_batch_holds_remainder() {
        let temp = tempdir().unwrap();
        let writer = BatchWriter::create(temp.path()).unwrap();
        let records: Vec<u32> = (1..=7).collect();
        let names = writer.write_batches("items", &records, 3).unwrap();
        assert_eq!(
            names,
            vec!["items_batch_1.json", "items_batch_2.json", "items_batch_3.json"]
        );
        let last: Vec<u32> =
            serde_json::from_slice(&fs::read(temp.path().join(&names[2])).unwrap()).unwrap();
        assert_eq!(last, vec![7]);
    }

    #[test]
    fn parallel_and_sequential_write_identical_files() {
        let records: Vec<String> = (0..25).map(|i| format!("record-{i}")).collect();
        let sequential = tempdir().unwrap();
        let parallel = tempdir().unwrap();
        let seq_names = BatchWriter::create(sequential.path())
            .unwrap()
            .write_batches("rows", &records, 4)
            .unwrap();
        let par_names = BatchWriter::create(parallel.path())
            .unwrap()
            .with_parallel(true)
            .write_batches("rows", &records, 4)
            .unwrap();
        assert_eq!(seq_names, par_names);
        for name in &seq_names {
            let left = fs::read(sequential.path().join(name)).unwrap();
            let right = fs::read(parallel.path().join(name)).unwrap();
            assert_eq!(left, right);
        }
    }

    #[test]
    fn zero_batch_size_is_a_configuration_error() {
        let temp = tempdir().unwrap();
        let writer = BatchWriter::create(temp.path()).unwrap();
        let err = writer.write_batches("rows", &[1, 2, 3], 0).unwrap_err();
        assert!(matches!(err, GeneratorError::Configuration(_)));
    }

    #[test]
    fn json_uses_two_space_indent_and_leaves_no_staging_files() {
        let temp = tempdir().unwrap();
        let writer = BatchWriter::create(temp.path()).unwrap();
        writer.write_json("pair.json", &[1, 2]).unwrap();
        let raw = fs::read_to_string(temp.path().join("pair.json")).unwrap();
        assert_eq!(raw, "[\n  1,\n  2\n]");
        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn rewriting_replaces_previous_contents() {
        let temp = tempdir().unwrap();
        let writer = BatchWriter::create(temp.path()).unwrap();
        writer.write_text("index.ts", "first").unwrap();
        writer.write_text("index.ts", "second").unwrap();
        let raw = fs::read_to_string(temp.path().join("index.ts")).unwrap();
        assert_eq!(raw, "second");
    }
}
