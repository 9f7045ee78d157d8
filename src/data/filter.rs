//! Threshold / category filtering
//!
//! A record passes when its value is at least the threshold and, if a
//! category is requested, the record either carries that category or has
//! no category at all. Survivors keep their input order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{DataError, DataResult};
use super::types::{BarDatum, DataPoint, Dataset, Filters, TimeSeriesPoint};

/// Anything the filter can select on
pub trait Record {
    /// Numeric field compared against the threshold
    fn value(&self) -> f64;

    /// Category label, if the record has one
    fn category(&self) -> Option<&str>;
}

impl Record for DataPoint {
    fn value(&self) -> f64 {
        self.value
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }
}

impl Record for TimeSeriesPoint {
    fn value(&self) -> f64 {
        self.value
    }

    fn category(&self) -> Option<&str> {
        None
    }
}

impl Record for BarDatum {
    fn value(&self) -> f64 {
        f64::from(self.value)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

/// Check a single record against the criteria
pub fn matches<R: Record + ?Sized>(record: &R, threshold: f64, category: Option<&str>) -> bool {
    let meets_threshold = record.value() >= threshold;
    let meets_category = match (category, record.category()) {
        (Some(wanted), Some(actual)) => actual == wanted,
        _ => true,
    };
    meets_threshold && meets_category
}

/// Stable filter over a record sequence
pub fn filter<R, I>(records: I, threshold: f64, category: Option<&str>) -> Vec<R>
where
    R: Record,
    I: IntoIterator<Item = R>,
{
    records
        .into_iter()
        .filter(|record| matches(record, threshold, category))
        .collect()
}

impl Filters {
    /// Apply these criteria to a record sequence
    pub fn apply<R, I>(&self, records: I) -> Vec<R>
    where
        R: Record,
        I: IntoIterator<Item = R>,
    {
        filter(records, self.threshold, self.category_filter())
    }
}

impl Dataset {
    /// Filter every record-shaped dataset; the employee table has no
    /// `value` and passes through untouched.
    pub fn filtered(self, filters: &Filters) -> Dataset {
        match self {
            Dataset::Scatter(v) => Dataset::Scatter(filters.apply(v)),
            Dataset::Line(v) => Dataset::Line(filters.apply(v)),
            Dataset::Bar(v) => Dataset::Bar(filters.apply(v)),
            other => other,
        }
    }
}

/// A caller-supplied JSON object with a numeric `value`
///
/// Re-serializes to exactly the object it was built from, extra fields included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct JsonRecord {
    fields: Map<String, Value>,
    value: f64,
}

impl JsonRecord {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Convert an array of JSON values, failing on the first malformed record
    pub fn from_values(values: Vec<Value>) -> DataResult<Vec<JsonRecord>> {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                JsonRecord::try_from(value).map_err(|e| match e {
                    DataError::InvalidArgument(msg) => {
                        DataError::invalid(format!("record {}: {}", index, msg))
                    }
                    other => other,
                })
            })
            .collect()
    }
}

impl TryFrom<Value> for JsonRecord {
    type Error = DataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(fields) = value else {
            return Err(DataError::invalid("record is not a JSON object"));
        };

        let numeric = match fields.get("value") {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| DataError::invalid("value is not representable as f64"))?,
            Some(other) => {
                return Err(DataError::invalid(format!("value is not a number: {}", other)))
            }
            None => return Err(DataError::invalid("record has no value field")),
        };

        match fields.get("category") {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => {
                return Err(DataError::invalid(format!(
                    "category is not a string: {}",
                    other
                )))
            }
        }

        Ok(Self {
            fields,
            value: numeric,
        })
    }
}

impl From<JsonRecord> for Value {
    fn from(record: JsonRecord) -> Self {
        Value::Object(record.fields)
    }
}

impl Record for JsonRecord {
    fn value(&self) -> f64 {
        self.value
    }

    fn category(&self) -> Option<&str> {
        self.fields
            .get("category")
            .and_then(Value::as_str)
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Value) -> Vec<JsonRecord> {
        let Value::Array(items) = values else {
            panic!("expected array");
        };
        JsonRecord::from_values(items).unwrap()
    }

    #[test]
    fn test_threshold_and_category() {
        let input = records(json!([
            {"value": 10, "category": "A"},
            {"value": 60, "category": "B"},
            {"value": 80, "category": "A"}
        ]));

        let result = filter(input, 50.0, Some("A"));
        let result: Vec<Value> = result.into_iter().map(Value::from).collect();
        assert_eq!(result, vec![json!({"value": 80, "category": "A"})]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let input = records(json!([{"value": 50}, {"value": 49.99}]));
        let result = filter(input, 50.0, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].value(), 50.0);
    }

    #[test]
    fn test_identity_with_zero_threshold() {
        let input = records(json!([
            {"value": 3, "category": "C"},
            {"value": 0, "category": "A"},
            {"value": 99.5}
        ]));
        let result = filter(input.clone(), 0.0, None);
        assert_eq!(result, input);
    }

    #[test]
    fn test_order_is_preserved() {
        let input = records(json!([
            {"value": 90, "id": 1},
            {"value": 10, "id": 2},
            {"value": 70, "id": 3},
            {"value": 55, "id": 4}
        ]));
        let ids: Vec<i64> = filter(input, 50.0, None)
            .iter()
            .map(|r| r.fields()["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_missing_category_passes_category_filter() {
        let input = records(json!([
            {"value": 70},
            {"value": 70, "category": null},
            {"value": 70, "category": ""},
            {"value": 70, "category": "B"}
        ]));
        assert_eq!(filter(input, 0.0, Some("A")).len(), 3);
    }

    #[test]
    fn test_time_series_ignores_category() {
        let series = vec![
            TimeSeriesPoint {
                date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                value: 40.0,
            },
            TimeSeriesPoint {
                date: chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                value: 60.0,
            },
        ];
        let result = filter(series, 50.0, Some("A"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].value, 60.0);
    }

    #[test]
    fn test_filters_apply_normalizes_all() {
        let bars = crate::data::generator::bar_data();
        let result = Filters::new(40.0).category("All").apply(bars);
        let cats: Vec<&str> = result.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(cats, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_dataset_filtered_leaves_employees() {
        let staff = Dataset::Employees(crate::data::generator::employees());
        assert_eq!(staff.filtered(&Filters::new(1e9)).len(), 5);

        let bars = Dataset::Bar(crate::data::generator::bar_data());
        assert_eq!(bars.filtered(&Filters::new(50.0)).len(), 2);
    }

    #[test]
    fn test_record_without_value_is_rejected() {
        let err = JsonRecord::try_from(json!({"category": "A"})).unwrap_err();
        assert!(matches!(err, DataError::InvalidArgument(_)));

        assert!(JsonRecord::try_from(json!({"value": "12"})).is_err());
        assert!(JsonRecord::try_from(json!([1, 2])).is_err());
        assert!(JsonRecord::try_from(json!({"value": 1, "category": 5})).is_err());
    }

    #[test]
    fn test_from_values_reports_index() {
        let err = JsonRecord::from_values(vec![json!({"value": 1}), json!({"x": 2})]).unwrap_err();
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn test_json_record_round_trips_extra_fields() {
        let original = json!({"value": 12.5, "category": "E", "x": 1, "label": "keep me"});
        let record: JsonRecord = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), original);
    }
}
