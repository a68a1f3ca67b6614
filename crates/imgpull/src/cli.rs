use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use imgpull_fetch::{ClientSetting, FetchOptions, Fetcher, HttpClient, Url};
use tracing::{error, info};

use crate::batch::{BatchResult, BatchRunner};
use crate::manifest::{Manifest, read_manifest};
use crate::report::{DEFAULT_FAILED_FILE, write_failures};
use crate::telemetry::{DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, LoggingConfig};
use crate::ui::{ProgressTrackerBuilder, Tracker, TrackerBuilder};

#[derive(Debug, Parser)]
#[command(name = "imgpull", version, about = "Download the images listed in a manifest and store them as PNG")]
pub struct Cli {
    /// Tab-separated manifest: `<source url> <destination name> <identifier>` per row
    pub manifest: PathBuf,

    /// Directory receiving `<destination name>.png` files
    pub output_dir: PathBuf,

    /// Where identifiers of failed records are written
    #[arg(long, value_name = "PATH", default_value = DEFAULT_FAILED_FILE)]
    pub failed_file: PathBuf,

    /// Plain-text log of the run
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Do not write a log file
    #[arg(long)]
    pub no_log_file: bool,

    /// Log filter, e.g. `info` or `imgpull=debug`
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Draw a progress bar instead of logging to stderr
    #[arg(long)]
    pub progress: bool,

    /// Override the HTTP User-Agent
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Route requests through this proxy
    #[arg(long, value_name = "URL", conflicts_with = "no_proxy")]
    pub proxy: Option<Url>,

    /// Ignore proxy environment variables
    #[arg(long)]
    pub no_proxy: bool,

    /// fsync every image before it is moved into place
    #[arg(long)]
    pub fsync: bool,
}

impl Cli {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            log_file: (!self.no_log_file).then(|| self.log_file.clone()),
            console: !self.progress,
        }
    }

    fn client_setting(&self) -> ClientSetting {
        ClientSetting {
            proxy: self.proxy.clone(),
            no_proxy: self.no_proxy,
        }
    }

    fn write_options(&self) -> imgpull_fs::Options {
        imgpull_fs::Options::new().sync(self.fsync)
    }

    fn fetch_options(&self) -> FetchOptions {
        match &self.user_agent {
            Some(ua) => FetchOptions::default().user_agent(ua.clone()),
            None => FetchOptions::default(),
        }
    }
}

/// Run one batch as described by `cli`.
///
/// Only manifest-level problems and client construction surface as errors;
/// per-record failures end up in the returned [`BatchResult`].
pub fn execute(cli: &Cli) -> Result<BatchResult> {
    let manifest = read_manifest(&cli.manifest)?;
    info!(
        manifest = %cli.manifest.display(),
        rows = manifest.len(),
        records = manifest.records().count(),
        malformed = manifest.malformed().count(),
        output = %cli.output_dir.display(),
        "manifest loaded"
    );

    let client = cli
        .client_setting()
        .build()
        .context("failed to build HTTP client")?;
    let fetcher = Fetcher::new(client).with_options(cli.fetch_options());
    let runner = BatchRunner::new(fetcher, &cli.output_dir).with_write_options(cli.write_options());

    let result = if cli.progress {
        let tracker = ProgressTrackerBuilder::default()
            .with_len(manifest.len() as u64)
            .with_prefix("Pulling")
            .with_finish("done")
            .build();
        drive(&runner, &manifest, tracker)
    } else {
        drive(&runner, &manifest, ())
    };

    finish(cli, &result);
    Ok(result)
}

fn drive<C: HttpClient, T: Tracker<u64>>(runner: &BatchRunner<C>, manifest: &Manifest, tracker: T) -> BatchResult {
    let result = runner.run(&manifest.entries, &tracker);
    tracker.finish();
    result
}

fn finish(cli: &Cli, result: &BatchResult) {
    info!(
        skipped = result.skipped,
        fetched = result.fetched,
        failed = result.failed_identifiers.len(),
        malformed = result.malformed_rows,
        "Completed: {}",
        result.completed_count()
    );

    match write_failures(&cli.failed_file, &result.failed_identifiers) {
        Ok(Some(path)) => info!(
            "Wrote {} failed identifier(s) to {}",
            result.failed_identifiers.len(),
            path.display()
        ),
        Ok(None) => {}
        Err(err) => error!("An error occurred while writing the failure report: {err}"),
    }
}
