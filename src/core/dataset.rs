use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::DataPoint;
use crate::core::primitives::parse_feed_date;
use crate::error::{ChartError, ChartResult};

/// Untyped `(date string, value)` pair as delivered by the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub date: String,
    pub value: f64,
}

impl RawObservation {
    #[must_use]
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// How much the transformer checks beyond date parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatasetValidation {
    /// Accepts negative values, duplicate dates and unordered input.
    #[default]
    Permissive,
    /// Rejects negative values and dates that go backwards.
    Strict,
}

/// Min/max of both fields, computed once over the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extrema {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub min_value: f64,
    pub max_value: f64,
}

impl Extrema {
    fn of(points: &[DataPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut extrema = Self {
            min_date: first.date,
            max_date: first.date,
            min_value: first.value,
            max_value: first.value,
        };
        for point in &points[1..] {
            extrema.min_date = extrema.min_date.min(point.date);
            extrema.max_date = extrema.max_date.max(point.date);
            extrema.min_value = extrema.min_value.min(point.value);
            extrema.max_value = extrema.max_value.max(point.value);
        }
        Some(extrema)
    }
}

/// Ordered, immutable sequence of observations in input order.
///
/// Serializes as the bare point list; deserializing goes through
/// [`Dataset::new`] with permissive validation so extrema are recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DataPoint>", into = "Vec<DataPoint>")]
pub struct Dataset {
    points: Vec<DataPoint>,
    extrema: Option<Extrema>,
}

impl Dataset {
    /// Wraps already typed points, applying the given validation policy.
    pub fn new(points: Vec<DataPoint>, validation: DatasetValidation) -> ChartResult<Self> {
        for (index, point) in points.iter().enumerate() {
            if !point.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "value at row {index} must be finite"
                )));
            }
        }

        match validation {
            DatasetValidation::Permissive => warn_on_suspicious_points(&points),
            DatasetValidation::Strict => validate_strict(&points)?,
        }

        let extrema = Extrema::of(&points);
        debug!(rows = points.len(), ?extrema, "dataset built");
        Ok(Self { points, extrema })
    }

    /// Parses every raw pair's date with the fixed feed format.
    pub fn from_raw(raw: &[RawObservation], validation: DatasetValidation) -> ChartResult<Self> {
        let mut points = Vec::with_capacity(raw.len());
        for (index, observation) in raw.iter().enumerate() {
            let date = parse_feed_date(&observation.date)
                .map_err(|e| ChartError::Parse(format!("row {index}: {e}")))?;
            points.push(DataPoint::new(date, observation.value));
        }
        Self::new(points, validation)
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `None` only for an empty dataset.
    #[must_use]
    pub fn extrema(&self) -> Option<Extrema> {
        self.extrema
    }

    pub fn require_extrema(&self) -> ChartResult<Extrema> {
        self.extrema.ok_or_else(|| {
            ChartError::InvalidData("dataset must contain at least one point".to_owned())
        })
    }
}

impl TryFrom<Vec<DataPoint>> for Dataset {
    type Error = ChartError;

    fn try_from(points: Vec<DataPoint>) -> ChartResult<Self> {
        Self::new(points, DatasetValidation::Permissive)
    }
}

impl From<Dataset> for Vec<DataPoint> {
    fn from(dataset: Dataset) -> Self {
        dataset.points
    }
}

fn validate_strict(points: &[DataPoint]) -> ChartResult<()> {
    for (index, point) in points.iter().enumerate() {
        if point.value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "value at row {index} must be >= 0, got {}",
                point.value
            )));
        }
    }
    for (index, pair) in points.windows(2).enumerate() {
        if pair[1].date < pair[0].date {
            return Err(ChartError::InvalidData(format!(
                "date at row {} ({}) precedes previous row ({})",
                index + 1,
                pair[1].date,
                pair[0].date
            )));
        }
    }
    Ok(())
}

fn warn_on_suspicious_points(points: &[DataPoint]) {
    let negative = points.iter().filter(|point| point.value < 0.0).count();
    if negative > 0 {
        warn!(negative, "dataset contains negative values");
    }
    let unordered = points
        .windows(2)
        .filter(|pair| pair[1].date < pair[0].date)
        .count();
    if unordered > 0 {
        warn!(unordered, "dataset dates are not chronological");
    }
}
