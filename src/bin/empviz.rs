use clap::{CommandFactory, Parser};
use empviz::analysis::AnalysisSummary;
use empviz::config::{CliConfig, Config};
use empviz::core::constants::output_formats;
use empviz::dataset::Dataset;
use empviz::reporting::logging;
use empviz::reporting::{ChartRenderer, DashboardData, HtmlDashboard};
use empviz::ui::completion::{install_completion, print_completions};
use empviz::ui::output::{self, GeneratedFile};
use empviz::ui::{Cli, Commands, cli_to_config};

use std::fs;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_empviz_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        Some(Commands::CompletionInstall { shell }) => match install_completion(shell) {
            Ok(message) => {
                println!("{message}");
                Some(0)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Some(1)
            }
        },
        None => None,
    }
}

/// Generate, summarize and write both outputs
pub fn run_empviz_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    let highlight = config.highlight_department()?;

    let dataset = Dataset::generate(config.seed());
    logging::log_dataset_generated(dataset.len(), dataset.seed());

    let summary = AnalysisSummary::from_dataset(&dataset, highlight);
    logging::log_summary_computed(&summary);

    if output_settings.should_print() {
        print!(
            "{}",
            output::format_summary(&dataset, &summary, &output_settings.output_format)
        );
    }

    let outputs = write_outputs(&config, &dataset, &summary)?;

    if output_settings.should_print() {
        print!(
            "{}",
            output::format_outputs(
                &dataset,
                &summary,
                &outputs,
                &output_settings.output_format
            )?
        );
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
}

impl OutputSettings {
    pub fn should_print(&self) -> bool {
        !self.quiet
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    OutputSettings {
        quiet: cli_config.quiet,
        verbose: config.verbose.unwrap_or(false),
        output_format: config
            .output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
            .to_string(),
    }
}

/// Render the chart (unless disabled) and the dashboard
pub fn write_outputs(
    config: &Config,
    dataset: &Dataset,
    summary: &AnalysisSummary,
) -> Result<Vec<GeneratedFile>, Box<dyn std::error::Error>> {
    let chart_path = config.chart_path();
    let html_path = config.html_path();
    let mut outputs = Vec::new();

    if let Some(dir) = html_path.parent() {
        prepare_output_dir(dir)?;
    }

    if config.should_render_chart() {
        if let Some(dir) = chart_path.parent() {
            prepare_output_dir(dir)?;
        }
        ChartRenderer::render(summary, &chart_path).inspect_err(|e| {
            logging::log_error("Could not render chart", Some(e));
        })?;
        let bytes = fs::metadata(&chart_path).map(|m| m.len() as usize)?;
        logging::log_output_written("chart", &chart_path, bytes);
        outputs.push(GeneratedFile::chart(&chart_path));
    }

    let dashboard_data = DashboardData {
        summary: summary.clone(),
        seed: dataset.seed(),
    };
    let bytes = HtmlDashboard::generate_dashboard(&dashboard_data, &html_path).inspect_err(|e| {
        logging::log_error("Could not write HTML dashboard", Some(e));
    })?;
    logging::log_output_written("dashboard", &html_path, bytes);
    outputs.push(GeneratedFile::dashboard(&html_path));

    Ok(outputs)
}

/// Create the output directory when it does not exist yet
pub fn prepare_output_dir(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }

    logging::log_warning(&format!(
        "Output directory '{}' does not exist, creating it",
        dir.display()
    ));
    fs::create_dir_all(dir).map_err(|e| {
        format!(
            "Could not create output directory '{}': {e}",
            dir.display()
        )
    })?;
    Ok(())
}
