//! End-to-end run: generate every record kind, write batches, emit the manifest.

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::batch::BatchWriter;
use crate::config::GeneratorConfig;
use crate::constants::files::{CASES_FILE, MANIFEST_FILE, NEWS_BATCH_PREFIX, POLICY_BATCH_PREFIX};
use crate::data::{CaseRecord, NewsRecord, PolicyRecord, RecordKind};
use crate::errors::GeneratorError;
use crate::generators::{generate_case, generate_news, generate_policy};
use crate::inventory::list_batch_files;
use crate::manifest::Manifest;
use crate::random::{RandomSource, SeededSource};
use crate::types::SequenceIndex;

/// Every record produced by one run, in sequence order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedRecords {
    /// Policies, indexed from 1.
    pub policies: Vec<PolicyRecord>,
    /// News items, indexed from 1.
    pub news: Vec<NewsRecord>,
    /// Cases, indexed from 1.
    pub cases: Vec<CaseRecord>,
}

impl GeneratedRecords {
    /// Record count for `kind`.
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Policy => self.policies.len(),
            RecordKind::News => self.news.len(),
            RecordKind::Case => self.cases.len(),
        }
    }
}

/// Outcome of a completed run.
#[derive(Clone, Debug)]
pub struct GenerationSummary {
    /// Seed the randomized fields were drawn from; pass it back to replay the run.
    pub seed: u64,
    /// Directory the files were written to.
    pub output_dir: PathBuf,
    /// Policy records written.
    pub policies: usize,
    /// News records written.
    pub news: usize,
    /// Case records written.
    pub cases: usize,
    /// Files written, as listed in `index.ts`.
    pub manifest: Manifest,
}

/// Run the whole pipeline described by `config`.
///
/// Any failure aborts the run; files written before the failure are left in place.
pub fn generate_all(config: GeneratorConfig) -> Result<GenerationSummary, GeneratorError> {
    let config = config.validated()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let now = config.reference_time.unwrap_or_else(Utc::now);
    info!(
        "[mockgen] starting generation (seed={}, reference_time={}, output_dir={})",
        seed,
        now.to_rfc3339(),
        config.output_dir.display()
    );
    let started = Instant::now();

    let mut source = SeededSource::new(seed, now);
    let records = generate_records(&config, &mut source);
    let manifest = write_outputs(&config, &records)?;

    let summary = GenerationSummary {
        seed,
        output_dir: config.output_dir.clone(),
        policies: records.count(RecordKind::Policy),
        news: records.count(RecordKind::News),
        cases: records.count(RecordKind::Case),
        manifest,
    };
    info!(
        "[mockgen] generation complete in {:.2}s: {} policies, {} news, {} cases",
        started.elapsed().as_secs_f64(),
        summary.policies,
        summary.news,
        summary.cases
    );
    Ok(summary)
}

/// Generate every record kind in order: policies, news, then cases.
pub fn generate_records<S: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    source: &mut S,
) -> GeneratedRecords {
    let policies = generate_sequence(
        RecordKind::Policy,
        config.policy_count,
        config.record_progress_interval,
        |index| generate_policy(index, source),
    );
    let news = generate_sequence(
        RecordKind::News,
        config.news_count,
        config.record_progress_interval,
        |index| generate_news(index, source),
    );
    let cases = generate_sequence(
        RecordKind::Case,
        config.case_count,
        config.case_progress_interval,
        |index| generate_case(index, source),
    );
    GeneratedRecords {
        policies,
        news,
        cases,
    }
}

/// Write batches, the case file, and the manifest. Returns the manifest written.
///
/// Batch files left over from an earlier, larger run in the same directory are
/// removed so the directory matches the manifest.
pub fn write_outputs(
    config: &GeneratorConfig,
    records: &GeneratedRecords,
) -> Result<Manifest, GeneratorError> {
    let writer = BatchWriter::create(&config.output_dir)?.with_parallel(config.parallel_writes);

    let policy_batches =
        writer.write_batches(POLICY_BATCH_PREFIX, &records.policies, config.batch_size)?;
    let news_batches = writer.write_batches(NEWS_BATCH_PREFIX, &records.news, config.batch_size)?;
    writer.write_json(CASES_FILE, &records.cases)?;
    remove_stale_batches(writer.dir(), POLICY_BATCH_PREFIX, policy_batches.len())?;
    remove_stale_batches(writer.dir(), NEWS_BATCH_PREFIX, news_batches.len())?;
    info!(
        "[mockgen] wrote {} policy batches, {} news batches, and {}",
        policy_batches.len(),
        news_batches.len(),
        CASES_FILE
    );

    let manifest = Manifest::new(policy_batches, news_batches, CASES_FILE);
    writer.write_text(MANIFEST_FILE, &manifest.render()?)?;
    info!(
        "[mockgen] manifest {} lists {} files",
        MANIFEST_FILE,
        manifest.file_names().len()
    );
    Ok(manifest)
}

/// Delete `prefix` batch files numbered above `written`.
fn remove_stale_batches(dir: &Path, prefix: &str, written: usize) -> Result<(), GeneratorError> {
    for file in list_batch_files(dir, prefix)? {
        if file.number > written {
            fs::remove_file(&file.path)?;
            debug!("[mockgen] removed stale batch {}", file.path.display());
        }
    }
    Ok(())
}

fn generate_sequence<T>(
    kind: RecordKind,
    count: usize,
    progress_interval: usize,
    mut build: impl FnMut(SequenceIndex) -> T,
) -> Vec<T> {
    info!("[mockgen] generating {} {}", count, kind.label());
    let mut records = Vec::with_capacity(count);
    for index in 1..=count {
        records.push(build(index));
        if progress_interval > 0 && index % progress_interval == 0 {
            info!("[mockgen] generated {}/{} {}", index, count, kind.label());
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::testing::FixedSource;
    use tempfile::tempdir;

    fn small_config(output_dir: PathBuf) -> GeneratorConfig {
        GeneratorConfig {
            output_dir,
            seed: Some(11),
            policy_count: 5,
            news_count: 4,
            case_count: 3,
            batch_size: 2,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn records_are_indexed_from_one() {
        let config = small_config(PathBuf::from("unused"));
        let records = generate_records(&config, &mut FixedSource::zeros());
        assert_eq!(records.count(RecordKind::Policy), 5);
        assert_eq!(records.count(RecordKind::News), 4);
        assert_eq!(records.count(RecordKind::Case), 3);
        assert_eq!(records.policies[0].id, "policy_00001");
        assert_eq!(records.policies[4].id, "policy_00005");
        assert_eq!(records.news[3].id, "news_00004");
        assert_eq!(records.cases[2].id, "case_003");
    }

    #[test]
    fn summary_reports_counts_and_manifest() {
        let temp = tempdir().unwrap();
        let config = small_config(temp.path().join("out"));
        let summary = generate_all(config).unwrap();
        assert_eq!(summary.seed, 11);
        assert_eq!(summary.policies, 5);
        assert_eq!(summary.news, 4);
        assert_eq!(summary.cases, 3);
        assert_eq!(summary.manifest.policy_batches.len(), 3);
        assert_eq!(summary.manifest.news_batches.len(), 2);
        assert!(summary.output_dir.join("index.ts").is_file());
        assert!(summary.output_dir.join("cases_all.json").is_file());
    }

    #[test]
    fn invalid_config_fails_before_writing() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("out");
        let config = GeneratorConfig {
            batch_size: 0,
            ..small_config(out.clone())
        };
        assert!(generate_all(config).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn stale_batches_above_written_count_are_removed() {
        let temp = tempdir().unwrap();
        for number in 1..=4 {
            fs::write(temp.path().join(format!("news_batch_{number}.json")), "[]").unwrap();
        }
        fs::write(temp.path().join("policies_batch_3.json"), "[]").unwrap();
        remove_stale_batches(temp.path(), "news", 2).unwrap();
        let remaining: Vec<usize> = list_batch_files(temp.path(), "news")
            .unwrap()
            .into_iter()
            .map(|file| file.number)
            .collect();
        assert_eq!(remaining, vec![1, 2]);
        assert!(temp.path().join("policies_batch_3.json").is_file());
    }
}
