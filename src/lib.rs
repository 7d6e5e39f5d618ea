#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line entry points shared by the binaries.
pub mod apps;
/// Batch partitioning and atomic JSON file writes.
pub mod batch;
/// Generation configuration.
pub mod config;
/// Centralized constants: counts, file layout, identifier formats.
pub mod constants;
/// Record types for each generated kind.
pub mod data;
/// Per-kind record generators and lookup tables.
pub mod generators;
/// Read-back and verification of a generated directory.
pub mod inventory;
/// Manifest (`index.ts`) construction and rendering.
pub mod manifest;
/// Generation pipeline orchestrating a full run.
pub mod pipeline;
/// Injectable randomness for non-deterministic fields.
pub mod random;
/// Shared type aliases.
pub mod types;

mod errors;

pub use batch::{BatchWriter, batch_count, batch_file_name};
pub use config::GeneratorConfig;
pub use data::{
    CaseRecord, DataMetric, KeyPoint, NewsRecord, PolicyRecord, RecordKind, Trend,
};
pub use errors::GeneratorError;
pub use generators::{generate_case, generate_news, generate_policy};
pub use inventory::{OutputInventory, read_batches, verify_output};
pub use manifest::Manifest;
pub use pipeline::{GeneratedRecords, GenerationSummary, generate_all};
pub use random::{DeterministicRng, RandomSource, SeededSource};
pub use types::{DateString, FileName, Keyword, RecordId, SequenceIndex};
