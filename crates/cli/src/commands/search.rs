use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Args, builder::BoolishValueParser};
use fileglob_fs::{FilterConfig, FilterError, MatchOptions, filter};
use fileglob_runtime::{
    EXCLUDES_ENV, FILES_INFO_KEY, FILTER_ENV, IGNORE_CASE_ENV, OUTPUT_FILE_ENV, OutputFile,
    PROGRAM_LOG_LEVEL, TARGET_DIR_ENV,
};
use log::{debug, error, info};

use crate::commands::{EXIT_CONFIG, EXIT_FAILURE};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Ant-style pattern of paths to report, e.g. `**/*.txt`. A leading `/`
    /// matches against absolute paths.
    #[arg(long, env = FILTER_ENV, default_value = "", hide_default_value = true)]
    pub filter: String,

    /// Pattern of paths to leave out of the report
    #[arg(long, env = EXCLUDES_ENV, default_value = "", hide_default_value = true)]
    pub excludes: String,

    /// Directory to search (defaults to the current directory)
    #[arg(long, env = TARGET_DIR_ENV, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Match letters case-insensitively
    #[arg(long, env = IGNORE_CASE_ENV, value_parser = BoolishValueParser::new())]
    pub ignore_case: bool,

    /// error, warn, info, debug or trace
    #[arg(long, env = PROGRAM_LOG_LEVEL, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// File to append the `FILES_INFO=<json>` line to
    #[arg(long, env = OUTPUT_FILE_ENV, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SearchArgs {
    pub fn filter_config(&self) -> FilterConfig {
        let mut config = FilterConfig::new(self.filter.as_str())
            .with_exclude(self.excludes.as_str())
            .with_options(MatchOptions {
                case_sensitive: !self.ignore_case,
            });
        if let Some(dir) = &self.dir {
            config = config.with_target_dir(dir);
        }
        config
    }

    fn output_file(&self) -> Result<OutputFile, FilterError> {
        match &self.output {
            Some(path) if !path.as_os_str().is_empty() => Ok(OutputFile::new(path)),
            _ => Err(FilterError::Configuration(format!(
                "missing {OUTPUT_FILE_ENV} environment variable"
            ))),
        }
    }
}

pub fn run(args: SearchArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[search] {e:#}");
            eprintln!("[fileglob] {e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

pub(crate) fn execute(args: SearchArgs) -> Result<ExitCode> {
    let config = args.filter_config();
    config.validate()?;
    let output = args.output_file()?;

    info!(
        "[search] searching files glob={:?} excludes={:?} dir={}",
        config.include,
        config.exclude,
        config.target_dir().display()
    );

    let files = filter(&config).context("file search failed")?;
    for file in &files {
        debug!("[search] match {}", file.path);
    }

    output
        .append_json(FILES_INFO_KEY, &files)
        .with_context(|| {
            format!(
                "failed to write {FILES_INFO_KEY} to {}",
                output.path().display()
            )
        })?;

    info!("[search] published {} entries as {FILES_INFO_KEY}", files.len());

    Ok(ExitCode::SUCCESS)
}

fn exit_code_for(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<FilterError>() {
        Some(fe) if fe.is_configuration() => EXIT_CONFIG,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
