//! Headline metrics for the employee table

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::types::Employee;

/// Aggregate figures shown above the employee table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub total: usize,
    pub average_age: f64,
    pub average_salary: f64,
    /// Number of distinct cities
    pub cities: usize,
}

pub fn summarize(employees: &[Employee]) -> EmployeeSummary {
    let total = employees.len();
    if total == 0 {
        return EmployeeSummary {
            total: 0,
            average_age: 0.0,
            average_salary: 0.0,
            cities: 0,
        };
    }

    let age_sum: f64 = employees.iter().map(|e| f64::from(e.age)).sum();
    let salary_sum: f64 = employees.iter().map(|e| f64::from(e.salary)).sum();
    let cities: HashSet<&str> = employees.iter().map(|e| e.city.as_str()).collect();

    EmployeeSummary {
        total,
        average_age: age_sum / total as f64,
        average_salary: salary_sum / total as f64,
        cities: cities.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::employees;

    #[test]
    fn test_summary_of_fixed_table() {
        let summary = summarize(&employees());
        assert_eq!(summary.total, 5);
        assert_eq!(summary.average_age, 30.0);
        assert_eq!(summary.average_salary, 61000.0);
        assert_eq!(summary.cities, 5);
    }

    #[test]
    fn test_summary_counts_distinct_cities() {
        let staff = vec![
            Employee::new("Ann", 20, "Oslo", 100),
            Employee::new("Ben", 40, "Oslo", 300),
        ];
        let summary = summarize(&staff);
        assert_eq!(summary.cities, 1);
        assert_eq!(summary.average_age, 30.0);
        assert_eq!(summary.average_salary, 200.0);
    }

    #[test]
    fn test_summary_of_empty_table() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_age, 0.0);
        assert_eq!(summary.cities, 0);
    }
}
