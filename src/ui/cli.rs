// Command-line interface definitions and parsing for empviz

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Dataset
    /// Seed for the employee generator (default: 42)
    #[arg(long, value_name = "N", help_heading = "Dataset")]
    pub seed: Option<u64>,

    // Output Files
    /// Directory for the chart and dashboard (default: .)
    #[arg(short = 'o', long, value_name = "DIR", help_heading = "Output Files")]
    pub output_dir: Option<String>,

    /// Chart file name (default: employee_analysis.png)
    #[arg(long, value_name = "FILE", help_heading = "Output Files")]
    pub chart: Option<String>,

    /// Dashboard file name (default: employee_analysis.html)
    #[arg(long, value_name = "FILE", help_heading = "Output Files")]
    pub html: Option<String>,

    /// Skip the PNG chart
    #[arg(long, help_heading = "Output Files")]
    pub no_chart: bool,

    // Output & Verbosity
    /// Suppress console output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Console output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Install shell completions to standard location
    #[command(name = "completion-install", arg_required_else_help = true)]
    CompletionInstall {
        /// The shell to install completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        seed: cli.seed,
        output_dir: cli.output_dir.clone(),
        chart_file: cli.chart.clone(),
        html_file: cli.html.clone(),
        no_chart: cli.no_chart,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
