use serde::Serialize;
use std::fmt::Display;

use crate::analysis::stats::{self, HistogramBin};
use crate::core::constants::analysis;
use crate::core::types::{Department, Region};
use crate::dataset::Dataset;

/// One category's share of the records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry<T> {
    pub category: T,
    pub count: usize,
    pub percentage: f64,
}

/// Category counts ordered by count, highest first.
///
/// Categories with equal counts keep their declaration order, and categories
/// that never occur are left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable<T> {
    pub total: usize,
    pub entries: Vec<FrequencyEntry<T>>,
}

impl<T: Copy + PartialEq + Display> FrequencyTable<T> {
    /// Count `values` over the fixed category list `categories`
    pub fn from_values(categories: &[T], values: impl IntoIterator<Item = T>) -> Self {
        let mut counts = vec![0usize; categories.len()];
        let mut total = 0;
        for value in values {
            if let Some(idx) = categories.iter().position(|c| *c == value) {
                counts[idx] += 1;
                total += 1;
            }
        }

        let mut entries: Vec<FrequencyEntry<T>> = categories
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(category, count)| FrequencyEntry {
                category: *category,
                count,
                percentage: percentage(count, total),
            })
            .collect();
        // stable sort keeps declaration order on ties
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Self { total, entries }
    }

    pub fn count_of(&self, category: T) -> usize {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.category.to_string()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.count).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `count / total * 100`, or 0 when there is nothing to count
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Location and spread of the performance scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreStats {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl ScoreStats {
    /// `None` when there are fewer than two scores
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        Some(Self {
            mean: stats::mean(scores)?,
            median: stats::median(scores)?,
            std_dev: stats::std_dev(scores)?,
        })
    }
}

/// Mean performance score of one department
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepartmentPerformance {
    pub department: Department,
    pub mean_score: f64,
}

/// Every aggregate the report, chart and dashboard are built from.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub total: usize,
    pub highlight: Department,
    pub highlight_count: usize,
    pub departments: FrequencyTable<Department>,
    pub regions: FrequencyTable<Region>,
    pub performance: ScoreStats,
    /// Full precision, highest mean first
    pub department_performance: Vec<DepartmentPerformance>,
    pub score_histogram: Vec<HistogramBin>,
}

impl AnalysisSummary {
    pub fn from_dataset(dataset: &Dataset, highlight: Department) -> Self {
        let employees = dataset.employees();
        let scores = dataset.performance_scores();

        let departments =
            FrequencyTable::from_values(&Department::ALL, employees.iter().map(|e| e.department));
        let regions = FrequencyTable::from_values(&Region::ALL, employees.iter().map(|e| e.region));

        let performance = ScoreStats::from_scores(&scores).unwrap_or(ScoreStats {
            mean: stats::mean(&scores).unwrap_or(0.0),
            median: stats::median(&scores).unwrap_or(0.0),
            std_dev: 0.0,
        });

        let mut department_performance: Vec<DepartmentPerformance> = Department::ALL
            .iter()
            .filter_map(|&department| {
                let dept_scores: Vec<f64> = employees
                    .iter()
                    .filter(|e| e.department == department)
                    .map(|e| e.performance_score)
                    .collect();
                stats::mean(&dept_scores).map(|mean_score| DepartmentPerformance {
                    department,
                    mean_score,
                })
            })
            .collect();
        department_performance.sort_by(|a, b| b.mean_score.total_cmp(&a.mean_score));

        Self {
            total: employees.len(),
            highlight,
            highlight_count: departments.count_of(highlight),
            departments,
            regions,
            performance,
            department_performance,
            score_histogram: stats::histogram(&scores, analysis::HISTOGRAM_BINS),
        }
    }

    /// Per-department means rounded for the dashboard, ordered by label
    pub fn rounded_department_performance(&self) -> Vec<(String, f64)> {
        let mut rounded: Vec<(String, f64)> = self
            .department_performance
            .iter()
            .map(|p| {
                (
                    p.department.to_string(),
                    stats::round_to(p.mean_score, analysis::DASHBOARD_PRECISION),
                )
            })
            .collect();
        rounded.sort_by(|a, b| a.0.cmp(&b.0));
        rounded
    }
}
