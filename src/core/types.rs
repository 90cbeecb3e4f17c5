use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Department an employee belongs to.
///
/// Declaration order is the order categories are drawn from and the
/// tie-break order when two departments have the same head count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Department {
    Sales,
    Engineering,
    Marketing,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Sales,
        Department::Engineering,
        Department::Marketing,
        Department::Hr,
        Department::Finance,
        Department::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers like {:15} work in the report
        f.pad(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Department::ALL.iter().map(|d| d.as_str()).collect();
                format!(
                    "Unknown department '{s}'. Expected one of: {}.",
                    names.join(", ")
                )
            })
    }
}

/// Geographic region an employee works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single synthetic employee record.
///
/// Records are created once by the generator and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub department: Department,
    pub region: Region,
    /// In [50, 100], one decimal place
    pub performance_score: f64,
    /// In [30000, 150000], whole units
    pub salary: f64,
    /// In [1, 20]
    pub experience_years: u32,
    /// In [0, 30], one decimal place
    pub bonus_percentage: f64,
}
