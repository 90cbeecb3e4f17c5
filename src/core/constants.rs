/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the values baked into the analysis: the generator
/// seed and ranges, output file names, and chart styling.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful, emoji-enhanced report
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain text without colors or emojis
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Synthetic dataset generation constants
pub mod dataset {
    /// Seed used when none is configured
    pub const DEFAULT_SEED: u64 = 42;
    /// Number of employee records in every dataset
    pub const EMPLOYEE_COUNT: usize = 100;
    /// Rows shown in the dataset overview
    pub const PREVIEW_ROWS: usize = 5;

    pub const PERFORMANCE_MIN: f64 = 50.0;
    pub const PERFORMANCE_MAX: f64 = 100.0;
    pub const SALARY_MIN: f64 = 30_000.0;
    pub const SALARY_MAX: f64 = 150_000.0;
    pub const EXPERIENCE_MIN: u32 = 1;
    pub const EXPERIENCE_MAX: u32 = 20;
    pub const BONUS_MIN: f64 = 0.0;
    pub const BONUS_MAX: f64 = 30.0;

    /// Column names in table order
    pub const COLUMNS: [&str; 8] = [
        "Employee_ID",
        "Name",
        "Department",
        "Region",
        "Performance_Score",
        "Salary",
        "Experience_Years",
        "Bonus_Percentage",
    ];
}

/// Output file constants
pub mod files {
    /// Default chart file name
    pub const CHART_FILE: &str = "employee_analysis.png";
    /// Default dashboard file name
    pub const HTML_FILE: &str = "employee_analysis.html";
    /// Default output directory
    pub const OUTPUT_DIR: &str = ".";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE: &str = ".empviz.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Aggregation constants
pub mod analysis {
    /// Department singled out in the report, chart and dashboard
    pub const HIGHLIGHT_DEPARTMENT: &str = "Sales";
    /// Number of bins in the performance score histogram
    pub const HISTOGRAM_BINS: usize = 20;
    /// Decimal places of the per-department means embedded in the dashboard
    pub const DASHBOARD_PRECISION: i32 = 2;
}

/// Static chart layout constants
pub mod chart {
    /// Chart size in pixels (width, height)
    pub const SIZE: (u32, u32) = (1600, 1200);
    pub const TITLE: &str = "Employee Performance Analysis Dashboard";
    pub const FONT: &str = "sans-serif";

    /// Bar colors for the department panel
    pub const DEPARTMENT_PALETTE: [(u8, u8, u8); 6] = [
        (247, 112, 136),
        (187, 152, 50),
        (80, 177, 49),
        (54, 173, 164),
        (59, 163, 236),
        (221, 113, 244),
    ];

    /// Blue to red ramp for the average performance panel
    pub const PERFORMANCE_PALETTE: [(u8, u8, u8); 6] = [
        (76, 114, 176),
        (130, 165, 251),
        (192, 212, 245),
        (242, 203, 183),
        (238, 132, 104),
        (180, 4, 38),
    ];

    /// Pastel colors for the region pie
    pub const REGION_PALETTE: [(u8, u8, u8); 5] = [
        (102, 194, 165),
        (252, 141, 98),
        (141, 160, 203),
        (231, 138, 195),
        (166, 216, 84),
    ];

    /// Histogram fill (steelblue)
    pub const HISTOGRAM_COLOR: (u8, u8, u8) = (70, 130, 180);
}

/// Display and formatting constants
pub mod display {
    /// Width of the banner rule in the text report
    pub const RULE_WIDTH: usize = 70;
    /// Emoji for success lines
    pub const SUCCESS_EMOJI: &str = "✓";
    /// Emoji for chart sections
    pub const CHART_EMOJI: &str = "📊";
    /// Emoji for distribution sections
    pub const TREND_EMOJI: &str = "📈";
    /// Emoji for regional sections
    pub const GLOBE_EMOJI: &str = "🌍";
}
