//! Record types produced by the generators
//!
//! - `DataPoint`: one scatter point with a category and a timestamp
//! - `TimeSeriesPoint`: one day of a random walk
//! - `Employee` and `BarDatum`: rows of the fixed datasets
//! - `Filters`: user-supplied threshold/category criteria
//! - `Dataset`: one generated dataset of any shape, as returned by the API

use chrono::{DateTime, NaiveDate, Utc};
use serde::{ser::Serializer, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::DataError;

/// Category label attached to scatter points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
    D,
    E,
}

impl Category {
    /// Every label, in display order
    pub const ALL: [Category; 5] = [
        Category::A,
        Category::B,
        Category::C,
        Category::D,
        Category::E,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
            Category::E => "E",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DataError::invalid(format!("unknown category: {}", s)))
    }
}

/// A single scatter point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub category: Category,
    pub value: f64,
    /// Moment the point was "observed", within the last 30 days
    pub date: DateTime<Utc>,
}

/// One day of a random-walk series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesPoint {
    /// Calendar day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub value: f64,
}

/// Row of the fixed employee table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub salary: u32,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: u32, city: impl Into<String>, salary: u32) -> Self {
        Self {
            name: name.into(),
            age,
            city: city.into(),
            salary,
        }
    }
}

/// Row of the fixed bar-chart dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BarDatum {
    pub category: String,
    pub value: u32,
}

impl BarDatum {
    pub fn new(category: impl Into<String>, value: u32) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// Category value the UI uses to mean "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Threshold and category criteria for the filter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Filters {
    /// Inclusive lower bound on a record's `value`; `null` reads as 0
    #[serde(default, deserialize_with = "null_as_zero")]
    pub threshold: f64,
    /// Required category; `None`, `""` and `"All"` all mean unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl Filters {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            category: None,
        }
    }

    /// Builder method: require a category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The category to match, with the "unset" spellings normalized away
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    /// Whether applying these filters can drop anything
    pub fn is_active(&self) -> bool {
        self.threshold > 0.0 || self.category_filter().is_some()
    }
}

/// Dataset shapes the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Scatter,
    Line,
    Bar,
    Employees,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Scatter => "scatter",
            DatasetKind::Line => "line",
            DatasetKind::Bar => "bar",
            DatasetKind::Employees => "employees",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scatter" => Ok(DatasetKind::Scatter),
            "line" => Ok(DatasetKind::Line),
            "bar" => Ok(DatasetKind::Bar),
            "employees" => Ok(DatasetKind::Employees),
            _ => Err(DataError::invalid(format!(
                "unknown dataset type: {}. Use scatter, line, bar, or employees",
                s
            ))),
        }
    }
}

/// A generated dataset of any shape
///
/// Serializes as a bare JSON array of its records.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    Scatter(Vec<DataPoint>),
    Line(Vec<TimeSeriesPoint>),
    Bar(Vec<BarDatum>),
    Employees(Vec<Employee>),
    /// Unknown dataset type
    Empty,
}

impl Dataset {
    pub fn len(&self) -> usize {
        match self {
            Dataset::Scatter(v) => v.len(),
            Dataset::Line(v) => v.len(),
            Dataset::Bar(v) => v.len(),
            Dataset::Employees(v) => v.len(),
            Dataset::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dataset::Scatter(v) => v.serialize(serializer),
            Dataset::Line(v) => v.serialize(serializer),
            Dataset::Bar(v) => v.serialize(serializer),
            Dataset::Employees(v) => v.serialize(serializer),
            Dataset::Empty => serializer.collect_seq(std::iter::empty::<()>()),
        }
    }
}
