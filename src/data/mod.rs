//! Showcase data layer
//!
//! Synthetic datasets and the filter applied to them:
//!
//! - **types**: Record types (DataPoint, TimeSeriesPoint, Employee, BarDatum) and Filters
//! - **generator**: Random-walk, scatter and fixed-table generators
//! - **filter**: Threshold/category filter over any `Record`
//! - **summary**: Employee headline metrics
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use showcase::data::{DataGenerator, Filters};
//!
//! let mut generator = DataGenerator::seeded(7);
//! let points = generator.scatter(50);
//! let high = Filters::new(50.0).category("A").apply(points);
//!
//! assert!(high.iter().all(|p| p.value >= 50.0));
//! ```

pub mod error;
pub mod filter;
pub mod generator;
pub mod summary;
pub mod types;

pub use error::{DataError, DataResult};
pub use filter::{filter, matches, JsonRecord, Record};
pub use generator::{
    bar_data, check_count, employees, parse_count, DataGenerator, DEFAULT_COUNT, DEFAULT_DAYS,
};
pub use summary::{summarize, EmployeeSummary};
pub use types::{
    BarDatum, Category, DataPoint, Dataset, DatasetKind, Employee, Filters, TimeSeriesPoint,
    ALL_CATEGORIES,
};
