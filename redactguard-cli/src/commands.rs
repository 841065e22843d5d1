// redactguard-cli/src/commands.rs

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::{info, instrument};

use redactguard_config::MaskSettings;
use redactguard_core::{resolver, scanner, MaskingReader, PatternSet};
use redactguard_telemetry::{EventLogger, MaskingMetrics};

use crate::error::CliError;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mask an entire file (or stdin) in one pass.
    Mask(MaskArgs),
    /// Mask a file (or stdin) incrementally, chunk by chunk.
    Stream(MaskArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MaskArgs {
    /// Input file; reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file; writes stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// A pattern to mask; may be repeated.
    #[arg(short, long = "pattern")]
    pub patterns: Vec<String>,

    /// Newline-delimited file of additional patterns.
    #[arg(long)]
    pub pattern_file: Option<PathBuf>,

    /// Maximum number of asterisks per fused Mask Run.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Optional YAML settings file (see redactguard-config).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl MaskArgs {
    fn resolve_settings(&self) -> Result<MaskSettings, CliError> {
        let mut settings = match &self.config {
            Some(path) => MaskSettings::load_from_path(path)?,
            None => MaskSettings::load()?,
        };

        settings.patterns.extend(self.patterns.iter().cloned());
        if let Some(pattern_file) = &self.pattern_file {
            settings.pattern_file = Some(pattern_file.clone());
        }
        if let Some(limit) = self.limit {
            settings.limit = limit;
        }

        Ok(settings)
    }

    fn open_input(&self) -> io::Result<Box<dyn Read>> {
        match &self.input {
            Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            None => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }

    fn open_output(&self) -> io::Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => Ok(Box::new(File::create(path)?)),
            None => Ok(Box::new(io::stdout())),
        }
    }
}

/// Entry point shared by `main`: initializes telemetry, dispatches to
/// the requested subcommand.
pub fn run(cli: Cli) -> Result<(), CliError> {
    EventLogger::init();
    let metrics = MaskingMetrics::new();

    match cli.command {
        Commands::Mask(args) => run_mask(args, &metrics),
        Commands::Stream(args) => run_stream(args, &metrics),
    }
}

#[instrument(level = "info", name = "run_mask", skip(metrics))]
fn run_mask(args: MaskArgs, metrics: &MaskingMetrics) -> Result<(), CliError> {
    let settings = args.resolve_settings()?;
    let patterns = settings.resolved_patterns()?;
    let set = PatternSet::compile(patterns)?;

    let mut input = Vec::new();
    args.open_input()?.read_to_end(&mut input)?;

    let events = scanner::scan(&set, &input);
    let runs = resolver::fuse(events);
    let output = resolver::emit(&input, &runs, settings.limit);

    metrics.bytes_scanned.inc_by(input.len() as f64);
    for run in &runs {
        metrics.record_run(run.len(), settings.limit);
    }
    EventLogger::log_mask_performed(input.len(), output.len(), runs.len());

    args.open_output()?.write_all(&output)?;
    info!(
        input_len = input.len(),
        output_len = output.len(),
        "masked input in one pass"
    );
    Ok(())
}

#[instrument(level = "info", name = "run_stream", skip(_metrics))]
fn run_stream(args: MaskArgs, _metrics: &MaskingMetrics) -> Result<(), CliError> {
    let settings = args.resolve_settings()?;
    let patterns = settings.resolved_patterns()?;
    let set = Arc::new(PatternSet::compile(patterns)?);

    let input = args.open_input()?;
    let mut reader = MaskingReader::new(input, set, settings.limit);
    let mut output = args.open_output()?;

    let mut buf = [0u8; 8192];
    let mut total_out = 0usize;
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        output.write_all(&buf[..n])?;
        total_out += n;
    }

    info!(total_out, "masked input as a stream");
    Ok(())
}
