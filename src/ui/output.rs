//! Output formatting and display logic for empviz

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::analysis::AnalysisSummary;
use crate::core::constants::{dataset as dataset_constants, display, output_formats};
use crate::core::error::Result;
use crate::core::types::{Department, Employee};
use crate::dataset::Dataset;
use crate::ui::color::{Colors, colorize, heading, rule};

/// A file written by the run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedFile {
    pub kind: &'static str,
    pub path: PathBuf,
}

impl GeneratedFile {
    pub fn chart(path: &Path) -> Self {
        Self {
            kind: "chart",
            path: path.to_path_buf(),
        }
    }

    pub fn dashboard(path: &Path) -> Self {
        Self {
            kind: "dashboard",
            path: path.to_path_buf(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    seed: u64,
    sales_count: usize,
    #[serde(flatten)]
    summary: &'a AnalysisSummary,
    outputs: &'a [GeneratedFile],
}

/// Render the statistics printed before any file is written.
///
/// JSON output is emitted in one piece by [`format_outputs`], so this returns
/// an empty string for it.
pub fn format_summary(dataset: &Dataset, summary: &AnalysisSummary, format: &str) -> String {
    match format {
        output_formats::JSON => String::new(),
        output_formats::MINIMAL => format_summary_minimal(summary),
        _ => format_summary_text(dataset, summary),
    }
}

/// Render the lines printed once the output files exist
pub fn format_outputs(
    dataset: &Dataset,
    summary: &AnalysisSummary,
    outputs: &[GeneratedFile],
    format: &str,
) -> Result<String> {
    match format {
        output_formats::JSON => {
            let report = JsonReport {
                seed: dataset.seed(),
                sales_count: summary.departments.count_of(Department::Sales),
                summary,
                outputs,
            };
            Ok(serde_json::to_string_pretty(&report)? + "\n")
        }
        output_formats::MINIMAL => Ok(outputs
            .iter()
            .map(|o| format!("{}: {}\n", o.kind, o.path.display()))
            .collect()),
        _ => Ok(format_outputs_text(outputs)),
    }
}

fn format_summary_text(dataset: &Dataset, summary: &AnalysisSummary) -> String {
    let preview = dataset.head(dataset_constants::PREVIEW_ROWS);
    let mut out = String::new();

    out.push_str(&format!(
        "{rule}\n{}\n{rule}\n",
        heading("EMPLOYEE PERFORMANCE ANALYSIS"),
        rule = rule()
    ));

    out.push_str(&format!("\n{} Dataset Overview:\n", display::CHART_EMOJI));
    out.push_str(&format!("Total Employees: {}\n", dataset.len()));
    out.push_str(&format!("Columns: [{}]\n", dataset.columns().join(", ")));
    out.push_str(&format!("\nFirst {} rows:\n", preview.len()));
    out.push_str(&format_preview(preview));

    out.push_str(&format!(
        "\n{rule}\n{} {} Department Frequency Count: {} employees\n{rule}\n",
        colorize(display::SUCCESS_EMOJI, Colors::GREEN),
        summary.highlight,
        colorize(&summary.highlight_count.to_string(), Colors::YELLOW),
        rule = rule()
    ));

    out.push_str(&format!(
        "\n{} {}\n",
        display::TREND_EMOJI,
        heading("Department Distribution:")
    ));
    for entry in &summary.departments.entries {
        out.push_str(&format!(
            "  {:15} | Count: {:3} | Percentage: {:5.1}%\n",
            entry.category, entry.count, entry.percentage
        ));
    }

    out.push_str(&format!(
        "\n{} {}\n",
        display::GLOBE_EMOJI,
        heading("Regional Distribution:")
    ));
    for entry in &summary.regions.entries {
        out.push_str(&format!(
            "  {:10} | Count: {:3} | Percentage: {:5.1}%\n",
            entry.category, entry.count, entry.percentage
        ));
    }

    let perf = &summary.performance;
    out.push_str(&format!(
        "\n{} {}\n",
        display::CHART_EMOJI,
        heading("Performance Metrics:")
    ));
    out.push_str(&format!("  Average Performance Score: {:.2}\n", perf.mean));
    out.push_str(&format!("  Median Performance Score: {:.2}\n", perf.median));
    out.push_str(&format!("  Std Dev: {:.2}\n", perf.std_dev));

    out
}

/// Fixed-width table of the first records
fn format_preview(employees: &[Employee]) -> String {
    let header = format!(
        "{:>4}  {:<13} {:<12} {:<8} {:>6} {:>10} {:>4} {:>6}\n",
        "ID", "Name", "Department", "Region", "Score", "Salary", "Exp", "Bonus"
    );
    employees.iter().fold(header, |mut out, e| {
        out.push_str(&format!(
            "{:>4}  {:<13} {:<12} {:<8} {:>6.1} {:>10.1} {:>4} {:>6.1}\n",
            e.id,
            e.name,
            e.department,
            e.region,
            e.performance_score,
            e.salary,
            e.experience_years,
            e.bonus_percentage
        ));
        out
    })
}

fn format_summary_minimal(summary: &AnalysisSummary) -> String {
    let mut out = format!(
        "total_employees: {}\n{}_count: {}\n",
        summary.total,
        summary.highlight.as_str().to_lowercase(),
        summary.highlight_count
    );
    for entry in &summary.departments.entries {
        out.push_str(&format!(
            "department {} {} {:.1}%\n",
            entry.category, entry.count, entry.percentage
        ));
    }
    for entry in &summary.regions.entries {
        out.push_str(&format!(
            "region {} {} {:.1}%\n",
            entry.category, entry.count, entry.percentage
        ));
    }
    out.push_str(&format!(
        "performance mean={:.2} median={:.2} std_dev={:.2}\n",
        summary.performance.mean, summary.performance.median, summary.performance.std_dev
    ));
    out
}

fn format_outputs_text(outputs: &[GeneratedFile]) -> String {
    let mut out = String::new();
    for output in outputs {
        let label = match output.kind {
            "chart" => "Visualization saved as",
            _ => "HTML visualization generated:",
        };
        out.push_str(&format!(
            "\n{} {} '{}'\n",
            colorize(display::SUCCESS_EMOJI, Colors::GREEN),
            label,
            output.path.display()
        ));
    }

    out.push_str(&format!("\n{}\nAnalysis complete! Files generated:\n", rule()));
    for output in outputs {
        out.push_str(&format!("  - {}\n", output.path.display()));
    }
    out.push_str(&rule());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Dataset, AnalysisSummary) {
        let dataset = Dataset::generate(42);
        let summary = AnalysisSummary::from_dataset(&dataset, Department::Sales);
        (dataset, summary)
    }

    fn outputs() -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::chart(Path::new("employee_analysis.png")),
            GeneratedFile::dashboard(Path::new("employee_analysis.html")),
        ]
    }

    #[test]
    fn test_text_summary_sections() {
        let (dataset, summary) = fixture();
        let text = format_summary(&dataset, &summary, output_formats::TEXT);

        assert!(text.contains("EMPLOYEE PERFORMANCE ANALYSIS"));
        assert!(text.contains("Total Employees: 100"));
        assert!(text.contains("Columns: [Employee_ID, Name, Department"));
        assert!(text.contains("First 5 rows:"));
        assert!(text.contains("Employee_5"));
        assert!(!text.contains("Employee_6 "));
        assert!(text.contains(&format!(
            "Sales Department Frequency Count: {} employees",
            summary.highlight_count
        )));
        assert!(text.contains("Department Distribution:"));
        assert!(text.contains("Regional Distribution:"));
        assert!(text.contains(&format!(
            "Average Performance Score: {:.2}",
            summary.performance.mean
        )));
    }

    #[test]
    fn test_text_summary_distribution_lines() {
        let (dataset, summary) = fixture();
        let text = format_summary(&dataset, &summary, output_formats::TEXT);

        for entry in &summary.departments.entries {
            let line = format!(
                "  {:15} | Count: {:3} | Percentage: {:5.1}%",
                entry.category.as_str(),
                entry.count,
                entry.percentage
            );
            assert!(text.contains(&line), "missing line: {line}");
        }
        for entry in &summary.regions.entries {
            let line = format!(
                "  {:10} | Count: {:3} |",
                entry.category.as_str(),
                entry.count
            );
            assert!(text.contains(&line), "missing line: {line}");
        }
    }

    #[test]
    fn test_text_report_framing() {
        let (dataset, summary) = fixture();
        let text = format_summary(&dataset, &summary, output_formats::TEXT);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], rule());
        assert_eq!(lines[1], "EMPLOYEE PERFORMANCE ANALYSIS");
        assert_eq!(lines[2], rule());
        assert!(text.ends_with(&format!("  Std Dev: {:.2}\n", summary.performance.std_dev)));
        assert_eq!(lines.iter().filter(|l| **l == rule()).count(), 4);

        let done = format_outputs(&dataset, &summary, &outputs(), output_formats::TEXT).unwrap();
        assert!(done.ends_with(&format!("{}\n", rule())));
        assert_eq!(done.lines().filter(|l| *l == rule()).count(), 2);
    }

    #[test]
    fn test_minimal_summary() {
        let (dataset, summary) = fixture();
        let text = format_summary(&dataset, &summary, output_formats::MINIMAL);

        assert!(text.starts_with("total_employees: 100\n"));
        assert!(text.contains(&format!("sales_count: {}", summary.highlight_count)));
        assert_eq!(text.matches("department ").count(), 6);
        assert_eq!(text.matches("region ").count(), 5);
        assert!(!text.contains("=="));
    }

    #[test]
    fn test_json_summary_is_deferred() {
        let (dataset, summary) = fixture();
        assert!(format_summary(&dataset, &summary, output_formats::JSON).is_empty());
    }

    #[test]
    fn test_json_outputs() {
        let (dataset, summary) = fixture();
        let json = format_outputs(&dataset, &summary, &outputs(), output_formats::JSON).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 42);
        assert_eq!(value["total"], 100);
        assert_eq!(value["highlight"], "Sales");
        assert_eq!(value["sales_count"], summary.highlight_count);
        assert_eq!(value["departments"]["entries"].as_array().unwrap().len(), 6);
        assert_eq!(value["regions"]["entries"].as_array().unwrap().len(), 5);
        assert_eq!(value["outputs"][1]["kind"], "dashboard");
        assert_eq!(value["outputs"][1]["path"], "employee_analysis.html");
        assert!(value["performance"]["mean"].as_f64().is_some());
    }

    #[test]
    fn test_text_outputs() {
        let (dataset, summary) = fixture();
        let text = format_outputs(&dataset, &summary, &outputs(), output_formats::TEXT).unwrap();

        assert!(text.contains("Visualization saved as 'employee_analysis.png'"));
        assert!(text.contains("HTML visualization generated: 'employee_analysis.html'"));
        assert!(text.contains("Analysis complete! Files generated:"));
        assert!(text.contains("  - employee_analysis.html"));
    }

    #[test]
    fn test_minimal_outputs() {
        let (dataset, summary) = fixture();
        let text = format_outputs(&dataset, &summary, &outputs(), output_formats::MINIMAL).unwrap();
        assert_eq!(
            text,
            "chart: employee_analysis.png\ndashboard: employee_analysis.html\n"
        );
    }

    #[test]
    fn test_preview_table() {
        let (dataset, _) = fixture();
        let table = format_preview(dataset.head(2));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Department"));
        assert!(lines[1].contains("Employee_1"));
        assert!(lines[2].contains("Employee_2"));
    }
}
