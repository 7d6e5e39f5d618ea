use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::config::GeneratorConfig;
use crate::constants::files::DEFAULT_OUTPUT_DIR;
use crate::constants::generation::{BATCH_SIZE, CASE_COUNT, NEWS_COUNT, POLICY_COUNT};
use crate::inventory::verify_output;
use crate::pipeline::{GenerationSummary, generate_all};

#[derive(Debug, Parser)]
#[command(
    name = "generate_mock_data",
    version,
    disable_help_subcommand = true,
    about = "Generate placeholder policy, news, and case datasets",
    long_about = "Generate placeholder policy, news, and case records, write them as batched JSON files, and emit an index.ts manifest listing every file.",
    after_help = "With no flags the run writes 20 policy batches, 20 news batches, and 500 cases to lib/data/generated."
)]
struct GenerateCli {
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory receiving batch files and the manifest (created if missing)"
    )]
    output_dir: PathBuf,
    #[arg(long, help = "Deterministic seed for dates, view counts, and metrics")]
    seed: Option<u64>,
    #[arg(long, default_value_t = POLICY_COUNT, help = "Number of policy records")]
    policies: usize,
    #[arg(long, default_value_t = NEWS_COUNT, help = "Number of news records")]
    news: usize,
    #[arg(long, default_value_t = CASE_COUNT, help = "Number of case records")]
    cases: usize,
    #[arg(
        long = "batch-size",
        default_value_t = BATCH_SIZE,
        value_parser = parse_positive_usize,
        help = "Records per policy/news batch file"
    )]
    batch_size: usize,
    #[arg(long, help = "Write batch files concurrently")]
    parallel: bool,
}

#[derive(Debug, Parser)]
#[command(
    name = "verify_mock_data",
    version,
    disable_help_subcommand = true,
    about = "Check a generated output directory against its manifest"
)]
struct VerifyCli {
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory produced by generate_mock_data"
    )]
    output_dir: PathBuf,
}

/// Parse generator flags from `args_iter` (program name excluded) and run the pipeline.
pub fn run_generate<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let Some(cli) = parse_cli::<GenerateCli, _>(
        std::iter::once("generate_mock_data".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let config = GeneratorConfig {
        output_dir: cli.output_dir,
        seed: cli.seed,
        policy_count: cli.policies,
        news_count: cli.news,
        case_count: cli.cases,
        batch_size: cli.batch_size,
        parallel_writes: cli.parallel,
        ..GeneratorConfig::default()
    };
    let summary = generate_all(config)?;
    print_summary(&summary);
    Ok(())
}

/// Parse verifier flags from `args_iter` (program name excluded) and check the directory.
pub fn run_verify<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let Some(cli) = parse_cli::<VerifyCli, _>(
        std::iter::once("verify_mock_data".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let inventory = verify_output(&cli.output_dir)?;
    println!("=== {} ===", cli.output_dir.display());
    println!(
        "policies: {} records in {} files",
        inventory.policy_records, inventory.policy_files
    );
    println!(
        "news:     {} records in {} files",
        inventory.news_records, inventory.news_files
    );
    println!("cases:    {} records", inventory.case_records);
    println!("manifest: consistent");
    Ok(())
}

fn print_summary(summary: &GenerationSummary) {
    println!("=== generation complete ===");
    println!("output dir: {}", summary.output_dir.display());
    println!("seed: {}", summary.seed);
    println!("- policies: {}", summary.policies);
    println!("- news:     {}", summary.news);
    println!("- cases:    {}", summary.cases);
    println!(
        "files: {} policy batches, {} news batches, {}",
        summary.manifest.policy_batches.len(),
        summary.manifest.news_batches.len(),
        summary.manifest.cases_file
    );
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("value must be greater than zero".to_string()),
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(format!("'{raw}' is not a positive integer")),
    }
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
