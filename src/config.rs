use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::constants::files::DEFAULT_OUTPUT_DIR;
use crate::constants::generation::{
    BATCH_SIZE, CASE_COUNT, CASE_PROGRESS_INTERVAL, NEWS_COUNT, POLICY_COUNT,
    RECORD_PROGRESS_INTERVAL,
};
use crate::errors::GeneratorError;

/// Top-level generation configuration.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Directory receiving batch files and the manifest. Created if absent.
    pub output_dir: PathBuf,
    /// RNG seed for the randomized fields; `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Reference time that news dates count back from; `None` uses the wall clock.
    pub reference_time: Option<DateTime<Utc>>,
    /// Number of policy records to generate.
    pub policy_count: usize,
    /// Number of news records to generate.
    pub news_count: usize,
    /// Number of case records to generate.
    pub case_count: usize,
    /// Records per policy/news batch file.
    pub batch_size: usize,
    /// Log progress every this many policy or news records (0 disables).
    pub record_progress_interval: usize,
    /// Log progress every this many case records (0 disables).
    pub case_progress_interval: usize,
    /// Write batch files concurrently on the rayon pool.
    pub parallel_writes: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            reference_time: None,
            policy_count: POLICY_COUNT,
            news_count: NEWS_COUNT,
            case_count: CASE_COUNT,
            batch_size: BATCH_SIZE,
            record_progress_interval: RECORD_PROGRESS_INTERVAL,
            case_progress_interval: CASE_PROGRESS_INTERVAL,
            parallel_writes: false,
        }
    }
}

impl GeneratorConfig {
    /// Reject settings the pipeline cannot honor.
    pub fn validated(self) -> Result<Self, GeneratorError> {
        if self.batch_size == 0 {
            return Err(GeneratorError::Configuration(
                "batch size must be greater than zero".to_string(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(GeneratorError::Configuration(
                "output directory must not be empty".to_string(),
            ));
        }
        Ok(self)
    }
}
