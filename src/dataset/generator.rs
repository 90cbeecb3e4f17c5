use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analysis::stats::round_to;
use crate::core::constants::dataset;
use crate::core::types::{Department, Employee, Region};

/// In-memory table of generated employee records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    seed: u64,
    employees: Vec<Employee>,
}

impl Dataset {
    /// Generate the fixed-size dataset for `seed`.
    ///
    /// Values are drawn column by column: every department first, then every
    /// region, score, salary, experience and bonus. The same seed always
    /// yields the same records.
    pub fn generate(seed: u64) -> Self {
        Self::generate_with_count(seed, dataset::EMPLOYEE_COUNT)
    }

    pub(crate) fn generate_with_count(seed: u64, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let departments: Vec<Department> = (0..count)
            .map(|_| Department::ALL[rng.gen_range(0..Department::ALL.len())])
            .collect();
        let regions: Vec<Region> = (0..count)
            .map(|_| Region::ALL[rng.gen_range(0..Region::ALL.len())])
            .collect();
        let scores = uniform_column(
            &mut rng,
            count,
            dataset::PERFORMANCE_MIN,
            dataset::PERFORMANCE_MAX,
            1,
        );
        let salaries = uniform_column(
            &mut rng,
            count,
            dataset::SALARY_MIN,
            dataset::SALARY_MAX,
            0,
        );
        let experience: Vec<u32> = (0..count)
            .map(|_| rng.gen_range(dataset::EXPERIENCE_MIN..=dataset::EXPERIENCE_MAX))
            .collect();
        let bonuses = uniform_column(&mut rng, count, dataset::BONUS_MIN, dataset::BONUS_MAX, 1);

        let employees = (0..count)
            .map(|i| {
                let id = i as u32 + 1;
                Employee {
                    id,
                    name: format!("Employee_{id}"),
                    department: departments[i],
                    region: regions[i],
                    performance_score: scores[i],
                    salary: salaries[i],
                    experience_years: experience[i],
                    bonus_percentage: bonuses[i],
                }
            })
            .collect();

        Self { seed, employees }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// First `n` records (fewer if the table is shorter)
    pub fn head(&self, n: usize) -> &[Employee] {
        &self.employees[..n.min(self.employees.len())]
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &dataset::COLUMNS
    }

    pub fn performance_scores(&self) -> Vec<f64> {
        self.employees.iter().map(|e| e.performance_score).collect()
    }
}

fn uniform_column(rng: &mut StdRng, count: usize, low: f64, high: f64, decimals: i32) -> Vec<f64> {
    (0..count)
        .map(|_| round_to(rng.gen_range(low..high), decimals))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_fixed_size() {
        let data = Dataset::generate(42);
        assert_eq!(data.len(), dataset::EMPLOYEE_COUNT);
        assert!(!data.is_empty());
        assert_eq!(data.seed(), 42);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let first = Dataset::generate(42);
        let second = Dataset::generate(42);
        assert_eq!(first, second);

        let first_json = serde_json::to_string(first.employees()).unwrap();
        let second_json = serde_json::to_string(second.employees()).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Dataset::generate(1);
        let b = Dataset::generate(2);
        assert_ne!(a.employees(), b.employees());
    }

    #[test]
    fn test_ids_and_names_are_sequential() {
        let data = Dataset::generate(42);
        for (i, employee) in data.employees().iter().enumerate() {
            assert_eq!(employee.id as usize, i + 1);
            assert_eq!(employee.name, format!("Employee_{}", i + 1));
        }
    }

    #[test]
    fn test_field_ranges() {
        let data = Dataset::generate(7);
        for e in data.employees() {
            assert!((50.0..=100.0).contains(&e.performance_score));
            assert!((30_000.0..=150_000.0).contains(&e.salary));
            assert!((1..=20).contains(&e.experience_years));
            assert!((0.0..=30.0).contains(&e.bonus_percentage));
        }
    }

    #[test]
    fn test_values_are_rounded() {
        let data = Dataset::generate(42);
        for e in data.employees() {
            assert_eq!(e.salary, e.salary.round());
            assert!(((e.performance_score * 10.0) - (e.performance_score * 10.0).round()).abs() < 1e-9);
            assert!(((e.bonus_percentage * 10.0) - (e.bonus_percentage * 10.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_head() {
        let data = Dataset::generate(42);
        assert_eq!(data.head(5).len(), 5);
        assert_eq!(data.head(5)[0].id, 1);
        assert_eq!(data.head(500).len(), dataset::EMPLOYEE_COUNT);

        let small = Dataset::generate_with_count(42, 3);
        assert_eq!(small.head(5).len(), 3);
    }

    #[test]
    fn test_columns() {
        let data = Dataset::generate(42);
        assert_eq!(data.columns()[0], "Employee_ID");
        assert_eq!(data.columns().len(), 8);
    }

    #[test]
    fn test_performance_scores_match_records() {
        let data = Dataset::generate(42);
        let scores = data.performance_scores();
        assert_eq!(scores.len(), data.len());
        assert_eq!(scores[0], data.employees()[0].performance_score);
    }
}
