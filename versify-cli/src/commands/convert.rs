//! Convert command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_input, FileReader};
use crate::output::{encode_with_bom, render_document, LineEnding, OutputEncoding, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use versify_core::{Converter, SourceFormat};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input file, directory, or glob pattern
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output directory (default: next to each input file)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Encoding of written files
    #[arg(long, value_enum)]
    pub encoding: Option<OutputEncoding>,

    /// Line separator of written files
    #[arg(long, value_enum)]
    pub line_ending: Option<LineEnding>,

    /// Convert the files of a multi-file run concurrently
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (default: one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output settings after merging the config file and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Output format
    pub format: OutputFormat,
    /// File encoding
    pub encoding: OutputEncoding,
    /// Line separator
    pub line_ending: LineEnding,
    /// Extension of written files
    pub extension: String,
}

/// One file to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// Source file
    pub input: PathBuf,
    /// Detected format
    pub format: SourceFormat,
    /// Destination file
    pub output: PathBuf,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.output_settings(&config);

        let files = resolve_input(&self.input)?;
        let (jobs, skipped) = plan_jobs(&files, self.output.as_deref(), &settings.extension);
        for path in &skipped {
            log::info!("Skipping {} (unrecognized extension)", path.display());
        }
        for job in output_collisions(&jobs) {
            log::warn!(
                "{} writes {}, overwriting the output of an earlier input",
                job.input.display(),
                job.output.display()
            );
        }
        if jobs.is_empty() {
            log::warn!("No USX, USFM or SFM files in {}", self.input);
            return Ok(());
        }

        if let Some(dir) = &self.output {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        }

        let converters = build_converters(&jobs)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(jobs.len() as u64);

        let run = |job: &ConversionJob| -> Result<usize> {
            let converter = converters
                .get(&job.format)
                .with_context(|| format!("No converter prepared for {}", job.format))?;
            let lines = convert_file(job, converter, &settings)?;
            progress.file_completed(&display_name(&job.input));
            Ok(lines)
        };

        let line_counts = if self.parallel && jobs.len() > 1 {
            let threads = self.worker_threads(&config);
            log::info!("Converting {} files on {threads} threads", jobs.len());
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker thread pool")?;
            pool.install(|| jobs.par_iter().map(run).collect::<Result<Vec<_>>>())?
        } else {
            jobs.iter().map(run).collect::<Result<Vec<_>>>()?
        };

        progress.finish();

        if !self.quiet {
            let total: usize = line_counts.iter().sum();
            println!(
                "Converted {} file(s), {total} lines; skipped {}",
                jobs.len(),
                skipped.len()
            );
        }

        Ok(())
    }

    /// Merge config file values with flags; flags win
    pub fn output_settings(&self, config: &CliConfig) -> OutputSettings {
        let format = self.format.unwrap_or(config.output.format);
        OutputSettings {
            format,
            encoding: self.encoding.unwrap_or(config.output.encoding),
            line_ending: self.line_ending.unwrap_or(config.output.line_ending),
            extension: config
                .output
                .extension
                .as_deref()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .unwrap_or_else(|| format.extension().to_string()),
        }
    }

    fn worker_threads(&self, config: &CliConfig) -> usize {
        match self.threads.filter(|&n| n > 0) {
            Some(threads) => threads,
            None if config.performance.worker_threads > 0 => config.performance.worker_threads,
            None => num_cpus::get(),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Split resolved files into conversion jobs and skipped paths
pub fn plan_jobs(
    files: &[PathBuf],
    output_dir: Option<&Path>,
    extension: &str,
) -> (Vec<ConversionJob>, Vec<PathBuf>) {
    let mut jobs = Vec::new();
    let mut skipped = Vec::new();

    for file in files {
        match SourceFormat::from_path(file) {
            Some(format) => jobs.push(ConversionJob {
                input: file.clone(),
                format,
                output: output_path(file, output_dir, extension),
            }),
            None => skipped.push(file.clone()),
        }
    }

    (jobs, skipped)
}

/// Jobs whose destination was already claimed by an earlier job
pub fn output_collisions(jobs: &[ConversionJob]) -> Vec<&ConversionJob> {
    let mut claimed = HashSet::new();
    jobs.iter()
        .filter(|job| !claimed.insert(job.output.as_path()))
        .collect()
}

/// Destination for `input`: same base name, new extension
pub fn output_path(input: &Path, output_dir: Option<&Path>, extension: &str) -> PathBuf {
    let file_name = input.file_name().map(PathBuf::from).unwrap_or_default();
    let base = match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.to_path_buf(),
    };
    base.with_extension(extension)
}

fn build_converters(jobs: &[ConversionJob]) -> Result<HashMap<SourceFormat, Converter>> {
    let mut converters = HashMap::new();
    for job in jobs {
        if !converters.contains_key(&job.format) {
            converters.insert(job.format, Converter::new(job.format)?);
        }
    }
    Ok(converters)
}

/// Convert one file and write the result; returns the number of lines
pub fn convert_file(
    job: &ConversionJob,
    converter: &Converter,
    settings: &OutputSettings,
) -> Result<usize> {
    let source = FileReader::read_text(&job.input)?;

    let document = converter
        .convert(&source)
        .map_err(|e| CliError::ConversionFailed {
            path: job.input.display().to_string(),
            message: e.to_string(),
        })?;

    let rendered = render_document(&document, settings.format, settings.line_ending)?;
    let bytes = encode_with_bom(&rendered, settings.encoding);
    fs::write(&job.output, bytes)
        .with_context(|| format!("Failed to write {}", job.output.display()))?;

    log::info!(
        "Converted {} ({}) -> {} ({} lines)",
        job.input.display(),
        job.format,
        job.output.display(),
        document.len()
    );
    Ok(document.len())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
