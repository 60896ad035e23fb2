mod cli;
mod config;
mod error;
mod ingest;
mod report;
mod scoring;
mod store;
mod types;

use crate::error::RepscoreError;
use crate::scoring::diagnostics::TracingSink;
use crate::types::config::RepscoreConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, RepscoreError> {
    let cli = cli::Cli::parse();

    let config_path = match &cli.command {
        cli::Commands::Score(cmd) => cmd.config.clone(),
        cli::Commands::Inspect(cmd) => cmd.config.clone(),
        cli::Commands::Store(cmd) => cmd.config.clone(),
    };
    let loaded = config::load_config(config_path.as_deref())?;
    if let Some(cfg) = &loaded {
        cfg.validate()?;
    }
    init_tracing(&cli, loaded.as_ref())?;

    let strict = loaded
        .as_ref()
        .map(|cfg| cfg.strict_ingest())
        .unwrap_or(false);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let batch = ingest::load_batch(&cmd.input, strict)?;

            let sink = TracingSink::new();
            let scores = scoring::calculate_scores(&batch.credentials, &sink);

            let score_report = report::ScoreReport::new(
                scores,
                batch.credentials.len(),
                batch.malformed,
                sink.error_count(),
                sink.warning_count(),
            );
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&score_report, output_format)?);

            Ok(diagnostics_exit_code(&sink, batch.malformed))
        }
        cli::Commands::Inspect(cmd) => {
            let batch = ingest::load_batch(&cmd.input, strict)?;
            let summary = ingest::summarize(&batch);

            println!(
                "batch: {} record(s), {} malformed skipped",
                batch.credentials.len(),
                batch.malformed
            );
            println!(
                "status: valid={} expired={} revoked={} suspended={} unknown={}",
                summary.valid,
                summary.expired,
                summary.revoked,
                summary.suspended,
                summary.unknown_status
            );
            println!(
                "roles: citizen={} builder={} staker={} unrecognized={}",
                summary.citizen, summary.builder, summary.staker, summary.unrecognized_role
            );

            if batch.malformed > 0 || summary.unrecognized_role > 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Store(cmd) => {
            let batch = ingest::load_batch(&cmd.input, strict)?;

            let sink = TracingSink::new();
            let scores = scoring::calculate_scores(&batch.credentials, &sink);

            let settings = loaded
                .as_ref()
                .map(|cfg| cfg.store_settings())
                .unwrap_or_default();
            let blob_store = store::blob::BlobStore::new(settings.directory, settings.base_url);
            let receipt = store::store_scores(&scores, &blob_store, &settings.application_id)?;

            println!("scores stored at {}", receipt.url);
            println!("manifest: {}", receipt.manifest_path.display());

            Ok(diagnostics_exit_code(&sink, batch.malformed))
        }
    }
}

fn init_tracing(cli: &cli::Cli, config: Option<&RepscoreConfig>) -> Result<(), RepscoreError> {
    let directive = if cli.quiet {
        "error".to_string()
    } else {
        match cli.verbose {
            0 => config
                .and_then(|cfg| cfg.log_filter())
                .unwrap_or("warn")
                .to_string(),
            1 => "info".to_string(),
            _ => "debug".to_string(),
        }
    };

    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| RepscoreError::ConfigParse(format!("logging.filter: {e}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn diagnostics_exit_code(sink: &TracingSink, malformed: usize) -> i32 {
    if sink.error_count() > 0 {
        exit_code::INVALID_INPUT
    } else if sink.warning_count() > 0 || malformed > 0 {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
