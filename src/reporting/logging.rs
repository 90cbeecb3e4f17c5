use crate::analysis::AnalysisSummary;
use crate::config::Config;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    // try_init so a second call (tests, embedding) is a no-op
    let _ = logger_builder(verbose, quiet).try_init();

    debug!("Logger initialized with level: {:?}", level_filter(verbose, quiet));
}

fn level_filter(verbose: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    }
}

fn logger_builder(verbose: bool, quiet: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level_filter(verbose, quiet))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    builder
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let seed = config.seed();
    let format = config.output_format();
    let render_chart = config.should_render_chart();

    info!("Configuration: seed={seed}, format={format}, render_chart={render_chart}");
    info!(
        "Outputs: chart={}, html={}",
        config.chart_path().display(),
        config.html_path().display()
    );
}

/// Log dataset generation
pub fn log_dataset_generated(records: usize, seed: u64) {
    info!("Generated {records} employee records (seed {seed})");
}

/// Log the headline aggregates
pub fn log_summary_computed(summary: &AnalysisSummary) {
    info!(
        "Summary: {} departments, {} regions, mean score {:.2}",
        summary.departments.len(),
        summary.regions.len(),
        summary.performance.mean
    );
    for entry in &summary.departments.entries {
        debug!("  {} -> {}", entry.category, entry.count);
    }
    for entry in &summary.regions.entries {
        debug!("  {} -> {}", entry.category, entry.count);
    }
}

/// Log a written output file
pub fn log_output_written(kind: &str, path: &Path, bytes: usize) {
    info!("{}", output_written_message(kind, path, bytes));
}

fn output_written_message(kind: &str, path: &Path, bytes: usize) -> String {
    format!("Wrote {kind} to {} ({bytes} bytes)", path.display())
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
