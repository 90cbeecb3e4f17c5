//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{analysis, dataset, files, output_formats};
use crate::core::error::{EmpvizError, Result};
use crate::core::types::Department;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the synthetic dataset
    pub seed: Option<u64>,

    /// Directory both output files are written to
    pub output_dir: Option<String>,

    /// File name of the rendered chart
    pub chart_file: Option<String>,

    /// File name of the HTML dashboard
    pub html_file: Option<String>,

    /// Render the PNG chart panel
    pub render_chart: Option<bool>,

    /// Console output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Department singled out in the report
    pub highlight_department: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: Some(dataset::DEFAULT_SEED),
            output_dir: Some(files::OUTPUT_DIR.to_string()),
            chart_file: Some(files::CHART_FILE.to_string()),
            html_file: Some(files::HTML_FILE.to_string()),
            render_chart: Some(true),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            highlight_department: Some(analysis::HIGHLIGHT_DEPARTMENT.to_string()),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EmpvizError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            EmpvizError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for the config file in `dir` and up to three parents, falling
    /// back to defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let mut candidate = dir.to_path_buf();
        for _ in 0..=files::CONFIG_SEARCH_DEPTH {
            let path = candidate.join(files::CONFIG_FILE);
            if path.is_file() {
                if let Ok(config) = Self::load_from_file(&path) {
                    return config;
                }
            }
            candidate = candidate.join("..");
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(seed) = cli_config.seed {
            self.seed = Some(seed);
        }

        // Output files
        if let Some(ref output_dir) = cli_config.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(ref chart_file) = cli_config.chart_file {
            self.chart_file = Some(chart_file.clone());
        }
        if let Some(ref html_file) = cli_config.html_file {
            self.html_file = Some(html_file.clone());
        }
        if cli_config.no_chart {
            self.render_chart = Some(false);
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(dataset::DEFAULT_SEED)
    }

    pub fn should_render_chart(&self) -> bool {
        self.render_chart.unwrap_or(true)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Full path of the chart file
    pub fn chart_path(&self) -> PathBuf {
        self.output_path(self.chart_file.as_deref().unwrap_or(files::CHART_FILE))
    }

    /// Full path of the dashboard file
    pub fn html_path(&self) -> PathBuf {
        self.output_path(self.html_file.as_deref().unwrap_or(files::HTML_FILE))
    }

    fn output_path(&self, file_name: &str) -> PathBuf {
        Path::new(self.output_dir.as_deref().unwrap_or(files::OUTPUT_DIR)).join(file_name)
    }

    /// Resolve the highlighted department
    pub fn highlight_department(&self) -> Result<Department> {
        match self.highlight_department.as_deref() {
            Some(name) => name.parse().map_err(EmpvizError::Config),
            None => Ok(Department::Sales),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate output format
        if let Some(ref format) = self.output_format {
            match format.as_str() {
                f if output_formats::ALL.contains(&f) => {}
                _ => {
                    return Err(EmpvizError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        // Validate output file names
        for (key, value) in [("chart_file", &self.chart_file), ("html_file", &self.html_file)] {
            if let Some(name) = value
                && name.trim().is_empty()
            {
                return Err(EmpvizError::Config(format!(
                    "{key} cannot be empty. Expected a file name."
                )));
            }
        }

        if let Some(ref dir) = self.output_dir
            && dir.trim().is_empty()
        {
            return Err(EmpvizError::Config(
                "output_dir cannot be empty. Use \".\" for the working directory.".to_string(),
            ));
        }

        self.highlight_department()?;

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub seed: Option<u64>, // --seed

    // Output files
    pub output_dir: Option<String>, // --output-dir
    pub chart_file: Option<String>, // --chart
    pub html_file: Option<String>,  // --html
    pub no_chart: bool,             // --no-chart

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
