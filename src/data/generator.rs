//! Synthetic dataset generation
//!
//! The random source is injected, so tests (and the `seed` query parameter)
//! get reproducible output while regular requests draw from OS entropy.
//! Every request builds its own generator; nothing here is shared.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::{DataError, DataResult};
use super::types::{BarDatum, Category, DataPoint, Dataset, DatasetKind, Employee, TimeSeriesPoint};

/// Default number of days for a time series
pub const DEFAULT_DAYS: usize = 100;

/// Default number of scatter points (and of API records in general)
pub const DEFAULT_COUNT: usize = 50;

/// Starting level of the random walk
const WALK_START: f64 = 100.0;

/// Half-width of the per-step delta: steps are uniform in [-5, 5)
const WALK_STEP: f64 = 5.0;

/// Scatter dates fall within this many days before `now`
const SCATTER_WINDOW_DAYS: i64 = 30;

/// Upper bound (exclusive) of scatter coordinates and values
const SCATTER_RANGE: f64 = 100.0;

/// Generator for the randomized datasets
pub struct DataGenerator<R = StdRng> {
    rng: R,
    now: DateTime<Utc>,
}

impl DataGenerator<StdRng> {
    /// Generator seeded from OS entropy, anchored at the current time
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), Utc::now())
    }

    /// Generator whose values and categories are reproducible for a given
    /// seed. Dates stay anchored at the current time.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), Utc::now())
    }
}

impl<R: Rng> DataGenerator<R> {
    pub fn new(rng: R, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    /// Reference instant used for "today" and the scatter date window
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Random walk over `days` consecutive days, oldest first.
    ///
    /// The first entry is dated `today - days`. The walk starts at 100,
    /// moves by a uniform delta in [-5, 5) each day, never drops below zero,
    /// and is reported rounded to two decimals.
    pub fn time_series(&mut self, days: usize) -> DataResult<Vec<TimeSeriesPoint>> {
        let today = self.now.date_naive();
        let start = offset_date(today, -day_count(days)?)?;

        let mut points = Vec::with_capacity(days);
        let mut value = WALK_START;

        for i in 0..days {
            // start + i stays before today once start itself is valid
            let date = offset_date(start, i as i64)
                .map_err(|e| DataError::Internal(format!("random walk date: {}", e)))?;

            value += self.rng.gen_range(-WALK_STEP..WALK_STEP);
            value = value.max(0.0);

            points.push(TimeSeriesPoint {
                date,
                value: round2(value),
            });
        }

        Ok(points)
    }

    /// `count` independent scatter points
    pub fn scatter(&mut self, count: usize) -> Vec<DataPoint> {
        let window_ms = SCATTER_WINDOW_DAYS * 24 * 60 * 60 * 1000;

        (0..count)
            .map(|_| {
                let category = Category::ALL[self.rng.gen_range(0..Category::ALL.len())];
                let age_ms = self.rng.gen_range(0..window_ms);

                DataPoint {
                    x: self.rng.gen_range(0.0..SCATTER_RANGE),
                    y: self.rng.gen_range(0.0..SCATTER_RANGE),
                    category,
                    value: self.rng.gen_range(0.0..SCATTER_RANGE),
                    date: self.now - Duration::milliseconds(age_ms),
                }
            })
            .collect()
    }

    /// Produce a dataset by kind. `count` is ignored by the fixed datasets.
    pub fn generate(&mut self, kind: DatasetKind, count: usize) -> DataResult<Dataset> {
        let dataset = match kind {
            DatasetKind::Scatter => Dataset::Scatter(self.scatter(count)),
            DatasetKind::Line => Dataset::Line(self.time_series(count)?),
            DatasetKind::Bar => Dataset::Bar(bar_data()),
            DatasetKind::Employees => Dataset::Employees(employees()),
        };

        tracing::debug!(kind = %kind, requested = count, produced = dataset.len(), "Generated dataset");
        Ok(dataset)
    }
}

/// The fixed employee table
pub fn employees() -> Vec<Employee> {
    vec![
        Employee::new("Alice", 25, "New York", 50000),
        Employee::new("Bob", 30, "London", 60000),
        Employee::new("Charlie", 35, "Paris", 75000),
        Employee::new("Diana", 28, "Tokyo", 55000),
        Employee::new("Eve", 32, "Sydney", 65000),
    ]
}

/// The fixed bar-chart dataset
pub fn bar_data() -> Vec<BarDatum> {
    vec![
        BarDatum::new("A", 23),
        BarDatum::new("B", 45),
        BarDatum::new("C", 56),
        BarDatum::new("D", 78),
        BarDatum::new("E", 32),
    ]
}

/// Parse a record count from user input.
///
/// Missing input yields `default`. Non-numeric or negative input, or a count
/// above `max`, is rejected rather than clamped.
pub fn parse_count(raw: Option<&str>, default: usize, max: usize) -> DataResult<usize> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default);
    };

    let count: i64 = raw
        .parse()
        .map_err(|_| DataError::invalid(format!("count is not an integer: {}", raw)))?;

    if count < 0 {
        return Err(DataError::invalid(format!("count must not be negative: {}", count)));
    }

    check_count(count as usize, max)
}

/// Reject a count above `max`
pub fn check_count(count: usize, max: usize) -> DataResult<usize> {
    if count > max {
        return Err(DataError::invalid(format!(
            "count {} exceeds the maximum of {}",
            count, max
        )));
    }

    Ok(count)
}

fn day_count(days: usize) -> DataResult<i64> {
    i64::try_from(days).map_err(|_| DataError::invalid(format!("day count out of range: {}", days)))
}

fn offset_date(date: NaiveDate, days: i64) -> DataResult<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| DataError::invalid(format!("date out of range: {} {:+} days", date, days)))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_generator(seed: u64) -> DataGenerator {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        DataGenerator::new(StdRng::seed_from_u64(seed), now)
    }

    #[test]
    fn test_time_series_length_and_dates() {
        let mut generator = test_generator(1);
        let series = generator.time_series(100).unwrap();

        assert_eq!(series.len(), 100);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(series[99].date, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());

        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_time_series_values_non_negative_and_rounded() {
        for seed in 0..20 {
            let mut generator = test_generator(seed);
            for point in generator.time_series(500).unwrap() {
                assert!(point.value >= 0.0);
                assert_eq!(point.value, round2(point.value));
            }
        }
    }

    #[test]
    fn test_time_series_steps_are_bounded() {
        let mut generator = test_generator(7);
        let series = generator.time_series(200).unwrap();

        // First step starts from 100; rounding adds at most 0.01 of slack
        assert!((series[0].value - 100.0).abs() <= 5.01);
        for pair in series.windows(2) {
            assert!((pair[1].value - pair[0].value).abs() <= 5.01);
        }
    }

    #[test]
    fn test_time_series_zero_days() {
        let mut generator = test_generator(3);
        assert!(generator.time_series(0).unwrap().is_empty());
    }

    #[test]
    fn test_scatter_count_and_ranges() {
        let mut generator = test_generator(11);
        let now = generator.now();
        let points = generator.scatter(1000);

        assert_eq!(points.len(), 1000);
        for p in &points {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((0.0..100.0).contains(&p.value));
            assert!(Category::ALL.contains(&p.category));
            assert!(p.date <= now);
            assert!(p.date > now - Duration::days(30));
        }
    }

    #[test]
    fn test_scatter_uses_every_category() {
        let mut generator = test_generator(5);
        let points = generator.scatter(500);

        for cat in Category::ALL {
            assert!(points.iter().any(|p| p.category == cat), "missing {}", cat);
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = test_generator(42).scatter(20);
        let b = test_generator(42).scatter(20);
        assert_eq!(a, b);

        let a = test_generator(42).time_series(20).unwrap();
        let b = test_generator(42).time_series(20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_datasets_are_constant() {
        assert_eq!(employees(), employees());
        assert_eq!(bar_data(), bar_data());
        assert_eq!(employees().len(), 5);

        let json = serde_json::to_value(bar_data()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"category": "A", "value": 23},
                {"category": "B", "value": 45},
                {"category": "C", "value": 56},
                {"category": "D", "value": 78},
                {"category": "E", "value": 32}
            ])
        );
    }

    #[test]
    fn test_employee_table() {
        let staff = employees();
        assert_eq!(staff[0], Employee::new("Alice", 25, "New York", 50000));
        assert_eq!(staff[2], Employee::new("Charlie", 35, "Paris", 75000));
        assert_eq!(staff[4], Employee::new("Eve", 32, "Sydney", 65000));
    }

    #[test]
    fn test_generate_ignores_count_for_fixed_kinds() {
        let mut generator = test_generator(9);
        assert_eq!(generator.generate(DatasetKind::Bar, 1000).unwrap().len(), 5);
        assert_eq!(generator.generate(DatasetKind::Employees, 0).unwrap().len(), 5);
        assert_eq!(generator.generate(DatasetKind::Scatter, 13).unwrap().len(), 13);
        assert_eq!(generator.generate(DatasetKind::Line, 30).unwrap().len(), 30);
    }

    #[test]
    fn test_check_count() {
        assert_eq!(check_count(0, 10).unwrap(), 0);
        assert_eq!(check_count(10, 10).unwrap(), 10);
        assert!(matches!(check_count(11, 10), Err(DataError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(None, 50, 1000).unwrap(), 50);
        assert_eq!(parse_count(Some(""), 50, 1000).unwrap(), 50);
        assert_eq!(parse_count(Some("0"), 50, 1000).unwrap(), 0);
        assert_eq!(parse_count(Some("250"), 50, 1000).unwrap(), 250);
        assert!(matches!(
            parse_count(Some("-1"), 50, 1000),
            Err(DataError::InvalidArgument(_))
        ));
        assert!(parse_count(Some("abc"), 50, 1000).is_err());
        assert!(parse_count(Some("1001"), 50, 1000).is_err());
    }
}
