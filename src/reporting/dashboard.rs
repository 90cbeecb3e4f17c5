use crate::analysis::AnalysisSummary;
use crate::core::error::Result;
use std::fs;
use std::path::Path;

/// Constants for dashboard styling and layout
mod dashboard_constants {
    /// Chart.js CDN URL for rendering charts
    pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js";

    /// Page title
    pub const TITLE: &str = "Employee Performance Analysis Dashboard";

    /// Bar colors for the department chart
    pub const DEPARTMENT_COLORS: [&str; 6] = [
        "#667eea", "#764ba2", "#f093fb", "#4facfe", "#00f2fe", "#43e97b",
    ];

    /// Slice colors for the region doughnut
    pub const REGION_COLORS: [&str; 5] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8"];
}

/// Data structure containing all information needed for dashboard generation
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Aggregates embedded in the page
    pub summary: AnalysisSummary,
    /// Seed the dataset was generated from
    pub seed: u64,
}

/// HTML dashboard generator for the employee analysis
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Generate and write an HTML dashboard to the specified path.
    ///
    /// Returns the number of bytes written.
    pub fn generate_dashboard(data: &DashboardData, output_path: &Path) -> Result<usize> {
        let html_content = Self::generate_html_content(data)?;
        fs::write(output_path, &html_content)?;
        Ok(html_content.len())
    }

    /// Generate the complete HTML document content
    pub fn generate_html_content(data: &DashboardData) -> Result<String> {
        let css_styles = Self::generate_css();
        let chart_data = Self::generate_chart_data(&data.summary)?;
        let js_scripts = Self::generate_javascript();
        let body_content = Self::generate_body_content(data);

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="{}"></script>
    <style>{}</style>
</head>
<body>
    {}
    <script>{}
{}</script>
</body>
</html>"#,
            dashboard_constants::TITLE,
            dashboard_constants::CHART_JS_CDN,
            css_styles,
            body_content,
            chart_data,
            js_scripts
        ))
    }

    fn generate_css() -> &'static str {
        r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }

        .container {
            max-width: 1400px;
            margin: 0 auto;
            background: white;
            border-radius: 12px;
            box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
            overflow: hidden;
        }

        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 40px;
            text-align: center;
        }

        .header h1 {
            font-size: 2.5em;
            margin-bottom: 10px;
            font-weight: 300;
            letter-spacing: 1px;
        }

        .header p {
            font-size: 1.1em;
            opacity: 0.9;
        }

        .metrics {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            padding: 30px;
            background: #f8f9fa;
            border-bottom: 1px solid #e9ecef;
        }

        .metric-card {
            background: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
            text-align: center;
        }

        .metric-card h3 {
            color: #667eea;
            font-size: 0.9em;
            text-transform: uppercase;
            letter-spacing: 1px;
            margin-bottom: 10px;
            font-weight: 600;
        }

        .metric-card .value {
            font-size: 2.5em;
            font-weight: bold;
            color: #333;
        }

        .metric-card .subtext {
            color: #999;
            font-size: 0.9em;
            margin-top: 5px;
        }

        .content { padding: 40px; }

        .charts-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(500px, 1fr));
            gap: 30px;
            margin-bottom: 30px;
        }

        .chart-container {
            background: white;
            padding: 25px;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
        }

        .chart-container h2 {
            color: #333;
            margin-bottom: 20px;
            font-size: 1.3em;
            font-weight: 600;
        }

        .chart-wrapper {
            position: relative;
            height: 350px;
        }

        .insights {
            background: #f0f4ff;
            padding: 30px;
            border-radius: 8px;
            border-left: 5px solid #667eea;
            margin-top: 30px;
        }

        .insights h2 {
            color: #667eea;
            margin-bottom: 15px;
            font-size: 1.3em;
        }

        .insights ul { list-style: none; }

        .insights li {
            padding: 10px 0;
            color: #555;
            border-bottom: 1px solid #ddd;
        }

        .insights li:last-child { border-bottom: none; }

        .insights li::before {
            content: "→ ";
            color: #667eea;
            font-weight: bold;
            margin-right: 10px;
        }

        .footer {
            background: #f8f9fa;
            padding: 20px;
            text-align: center;
            color: #999;
            border-top: 1px solid #e9ecef;
            font-size: 0.9em;
        }

        @media (max-width: 768px) {
            .charts-grid { grid-template-columns: 1fr; }
            .header h1 { font-size: 1.8em; }
            .metrics { grid-template-columns: repeat(2, 1fr); }
        }
        "#
    }

    /// Generate the main body content of the dashboard
    fn generate_body_content(data: &DashboardData) -> String {
        let header_section = Self::generate_header_section(data.seed);
        let metrics_section = Self::generate_metrics_section(&data.summary);
        let charts_section = Self::generate_charts_section();
        let insights_section = Self::generate_insights_section(&data.summary);

        format!(
            r#"
    <div class="container">
        {}
        {}
        <div class="content">
            {}
            {}
        </div>
        <div class="footer">
            <p>Generated by empviz | {}</p>
        </div>
    </div>
    "#,
            header_section,
            metrics_section,
            charts_section,
            insights_section,
            dashboard_constants::TITLE
        )
    }

    /// Generate the dashboard header section
    fn generate_header_section(seed: u64) -> String {
        format!(
            r#"
        <div class="header">
            <h1>Employee Performance Analysis</h1>
            <p>Data-Driven Insights for Strategic Workforce Planning</p>
            <p>Synthetic dataset, seed {}</p>
        </div>
        "#,
            seed
        )
    }

    /// Generate the metric cards section
    fn generate_metrics_section(summary: &AnalysisSummary) -> String {
        format!(
            r#"
        <div class="metrics">
            {}
            {}
            {}
            {}
            {}
        </div>
        "#,
            Self::generate_metric_card(
                "totalEmployees",
                "Total Employees",
                &summary.total.to_string(),
                "Across all departments"
            ),
            Self::generate_metric_card(
                "highlightCount",
                &format!("{} Department", summary.highlight),
                &summary.highlight_count.to_string(),
                "Employees in focus"
            ),
            Self::generate_metric_card(
                "departmentCount",
                "Departments",
                &summary.departments.len().to_string(),
                "Total departments"
            ),
            Self::generate_metric_card(
                "regionCount",
                "Regions",
                &summary.regions.len().to_string(),
                "Geographic distribution"
            ),
            Self::generate_metric_card(
                "avgPerformance",
                "Average Performance",
                &format!("{:.2}", summary.performance.mean),
                "Mean performance score"
            ),
        )
    }

    /// Generate a single metric card
    fn generate_metric_card(id: &str, title: &str, value: &str, subtext: &str) -> String {
        format!(
            r#"
            <div class="metric-card">
                <h3>{}</h3>
                <div class="value" id="{}">{}</div>
                <div class="subtext">{}</div>
            </div>
            "#,
            title, id, value, subtext
        )
    }

    /// Generate the chart canvases
    fn generate_charts_section() -> String {
        [
            ("📊 Department Distribution", "deptChart"),
            ("🌍 Regional Distribution", "regionChart"),
            ("⭐ Average Performance by Department", "perfChart"),
        ]
        .iter()
        .map(|(title, canvas_id)| {
            format!(
                r#"
                <div class="chart-container">
                    <h2>{}</h2>
                    <div class="chart-wrapper">
                        <canvas id="{}"></canvas>
                    </div>
                </div>
                "#,
                title, canvas_id
            )
        })
        .fold(String::from(r#"<div class="charts-grid">"#), |mut acc, card| {
            acc.push_str(&card);
            acc
        }) + "</div>"
    }

    fn generate_insights_section(summary: &AnalysisSummary) -> String {
        let highlight_line = format!(
            "<li><strong>Department Focus:</strong> {} department has {} employees, representing a key operational unit</li>",
            summary.highlight, summary.highlight_count
        );
        let top_line = summary
            .department_performance
            .first()
            .map(|top| {
                format!(
                    "<li><strong>Top Performer:</strong> {} leads with an average score of {:.1}</li>",
                    top.department, top.mean_score
                )
            })
            .unwrap_or_default();

        format!(
            r#"
            <div class="insights">
                <h2>📈 Key Insights &amp; Recommendations</h2>
                <ul>
                    {}
                    {}
                    <li><strong>Balanced Distribution:</strong> Workforce is spread across {} departments</li>
                    <li><strong>Regional Coverage:</strong> {}-region distribution supports market expansion strategy</li>
                    <li><strong>Performance Tracking:</strong> Scores average {:.2} with a standard deviation of {:.2}</li>
                </ul>
            </div>
            "#,
            highlight_line,
            top_line,
            summary.departments.len(),
            summary.regions.len(),
            summary.performance.mean,
            summary.performance.std_dev
        )
    }

    /// Inline the aggregates as JavaScript array literals
    fn generate_chart_data(summary: &AnalysisSummary) -> Result<String> {
        let (perf_labels, perf_values): (Vec<String>, Vec<f64>) =
            summary.rounded_department_performance().into_iter().unzip();

        Ok(format!(
            r#"
        const departmentLabels = {};
        const departmentCounts = {};
        const regionLabels = {};
        const regionCounts = {};
        const performanceLabels = {};
        const performanceValues = {};
        const departmentColors = {};
        const regionColors = {};"#,
            serde_json::to_string(&summary.departments.labels())?,
            serde_json::to_string(&summary.departments.counts())?,
            serde_json::to_string(&summary.regions.labels())?,
            serde_json::to_string(&summary.regions.counts())?,
            serde_json::to_string(&perf_labels)?,
            serde_json::to_string(&perf_values)?,
            serde_json::to_string(&dashboard_constants::DEPARTMENT_COLORS)?,
            serde_json::to_string(&dashboard_constants::REGION_COLORS)?,
        ))
    }

    fn generate_javascript() -> &'static str {
        r#"
        // Department Distribution Chart
        new Chart(document.getElementById('deptChart'), {
            type: 'bar',
            data: {
                labels: departmentLabels,
                datasets: [{
                    label: 'Number of Employees',
                    data: departmentCounts,
                    backgroundColor: departmentColors,
                    borderColor: '#333',
                    borderWidth: 2,
                    borderRadius: 4
                }]
            },
            options: {
                responsive: true,
                maintainAspectRatio: false,
                plugins: { legend: { display: false } },
                scales: { y: { beginAtZero: true, ticks: { stepSize: 5 } } }
            }
        });

        // Regional Distribution Chart
        new Chart(document.getElementById('regionChart'), {
            type: 'doughnut',
            data: {
                labels: regionLabels,
                datasets: [{
                    data: regionCounts,
                    backgroundColor: regionColors,
                    borderColor: '#fff',
                    borderWidth: 2
                }]
            },
            options: {
                responsive: true,
                maintainAspectRatio: false,
                plugins: {
                    legend: {
                        position: 'bottom',
                        labels: { padding: 15, font: { size: 12 } }
                    }
                }
            }
        });

        // Average Performance Chart
        new Chart(document.getElementById('perfChart'), {
            type: 'bar',
            data: {
                labels: performanceLabels,
                datasets: [{
                    label: 'Average Performance Score',
                    data: performanceValues,
                    backgroundColor: '#667eea',
                    borderColor: '#333',
                    borderWidth: 1,
                    borderRadius: 4
                }]
            },
            options: {
                indexAxis: 'y',
                responsive: true,
                maintainAspectRatio: false,
                plugins: { legend: { display: false } },
                scales: { x: { beginAtZero: true, max: 100 } }
            }
        });
        "#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::EmpvizError;
    use crate::core::types::Department;
    use crate::dataset::Dataset;
    use tempfile::tempdir;

    fn create_test_dashboard_data() -> DashboardData {
        let dataset = Dataset::generate(42);
        DashboardData {
            summary: AnalysisSummary::from_dataset(&dataset, Department::Sales),
            seed: dataset.seed(),
        }
    }

    /// Parse the literal assigned to `const {name} = ...;`
    fn extract_const(html: &str, name: &str) -> serde_json::Value {
        let marker = format!("const {name} = ");
        let start = html.find(&marker).expect("constant not found") + marker.len();
        let end = start + html[start..].find(';').expect("unterminated constant");
        serde_json::from_str(&html[start..end]).expect("constant is not valid JSON")
    }

    #[test]
    fn test_generate_html_content() {
        let html = HtmlDashboard::generate_html_content(&create_test_dashboard_data()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<head>"));
        assert!(html.contains("<body>"));
        assert!(html.contains("<title>Employee Performance Analysis Dashboard</title>"));
        assert!(html.contains("chart.js@4.4.0"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_exactly_three_charts() {
        let html = HtmlDashboard::generate_html_content(&create_test_dashboard_data()).unwrap();
        assert_eq!(html.matches("new Chart(").count(), 3);
        assert!(!html.contains("horizontalBar"));
        assert!(html.contains("indexAxis: 'y'"));
    }

    #[test]
    fn test_embedded_array_lengths() {
        let html = HtmlDashboard::generate_html_content(&create_test_dashboard_data()).unwrap();

        for (name, len) in [
            ("departmentLabels", 6),
            ("departmentCounts", 6),
            ("regionLabels", 5),
            ("regionCounts", 5),
            ("performanceLabels", 6),
            ("performanceValues", 6),
        ] {
            let value = extract_const(&html, name);
            assert_eq!(value.as_array().map(Vec::len), Some(len), "{name}");
        }
    }

    #[test]
    fn test_embedded_counts_sum_to_total() {
        let html = HtmlDashboard::generate_html_content(&create_test_dashboard_data()).unwrap();

        for name in ["departmentCounts", "regionCounts"] {
            let sum: u64 = extract_const(&html, name)
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_u64().unwrap())
                .sum();
            assert_eq!(sum, 100, "{name}");
        }
    }

    #[test]
    fn test_embedded_mean_matches_records() {
        let dataset = Dataset::generate(42);
        let data = create_test_dashboard_data();
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        let direct = dataset
            .employees()
            .iter()
            .map(|e| e.performance_score)
            .sum::<f64>()
            / dataset.len() as f64;
        let expected = format!(r#"id="avgPerformance">{direct:.2}<"#);
        assert!(html.contains(&expected));
    }

    #[test]
    fn test_embedded_department_means_are_rounded() {
        let html = HtmlDashboard::generate_html_content(&create_test_dashboard_data()).unwrap();
        let values = extract_const(&html, "performanceValues");
        for value in values.as_array().unwrap() {
            let v = value.as_f64().unwrap();
            assert_eq!(v, (v * 100.0).round() / 100.0);
        }
    }

    #[test]
    fn test_html_is_deterministic() {
        let first = HtmlDashboard::generate_html_content(&create_test_dashboard_data()).unwrap();
        let second = HtmlDashboard::generate_html_content(&create_test_dashboard_data()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_html_tags_balanced() {
        let html = HtmlDashboard::generate_html_content(&create_test_dashboard_data()).unwrap();
        for tag in ["div", "script", "ul", "li", "h1", "h2", "h3", "p", "canvas", "style"] {
            let open = html.matches(&format!("<{tag}>")).count()
                + html.matches(&format!("<{tag} ")).count();
            let close = html.matches(&format!("</{tag}>")).count();
            assert_eq!(open, close, "unbalanced <{tag}>");
        }
    }

    #[test]
    fn test_generate_metric_card() {
        let card = HtmlDashboard::generate_metric_card("x", "Regions", "5", "Geographic");

        assert!(card.contains("Regions"));
        assert!(card.contains(r#"id="x">5<"#));
        assert!(card.contains("Geographic"));
        assert!(card.contains("metric-card"));
    }

    #[test]
    fn test_generate_metrics_section() {
        let data = create_test_dashboard_data();
        let metrics = HtmlDashboard::generate_metrics_section(&data.summary);

        assert!(metrics.contains(r#"id="totalEmployees">100<"#));
        assert!(metrics.contains(r#"id="departmentCount">6<"#));
        assert!(metrics.contains(r#"id="regionCount">5<"#));
        assert!(metrics.contains("Sales Department"));
        assert!(metrics.contains(&format!(
            r#"id="highlightCount">{}<"#,
            data.summary.highlight_count
        )));
    }

    #[test]
    fn test_generate_insights_section() {
        let data = create_test_dashboard_data();
        let insights = HtmlDashboard::generate_insights_section(&data.summary);

        assert!(insights.contains("Department Focus"));
        assert!(insights.contains("Top Performer"));
        assert!(insights.contains("6 departments"));
    }

    #[test]
    fn test_generate_header_section() {
        let header = HtmlDashboard::generate_header_section(42);
        assert!(header.contains("Employee Performance Analysis"));
        assert!(header.contains("seed 42"));
    }

    #[test]
    fn test_generate_css() {
        let css = HtmlDashboard::generate_css();

        assert!(css.contains("body"));
        assert!(css.contains("color:"));
        assert!(css.contains("padding:"));
    }

    #[test]
    fn test_generate_dashboard_file_creation() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let dir = tempdir()?;
        let path = dir.path().join("dashboard.html");

        let written = HtmlDashboard::generate_dashboard(&create_test_dashboard_data(), &path)?;

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(content.len(), written);
        assert!(content.contains("<!DOCTYPE html>"));
        assert!(content.contains("Employee Performance Analysis"));

        Ok(())
    }

    #[test]
    fn test_generate_dashboard_unwritable_path() {
        let path = Path::new("/definitely/not/a/real/dir/dashboard.html");
        let result = HtmlDashboard::generate_dashboard(&create_test_dashboard_data(), path);
        assert!(matches!(result, Err(EmpvizError::Io(_))));
    }

    #[test]
    fn test_dashboard_constants() {
        assert!(dashboard_constants::CHART_JS_CDN.contains("chart.js"));
        assert_eq!(dashboard_constants::DEPARTMENT_COLORS.len(), 6);
        assert_eq!(dashboard_constants::REGION_COLORS.len(), 5);
    }
}
