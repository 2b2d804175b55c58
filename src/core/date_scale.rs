use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::{date_to_unix_millis, unix_millis_to_date};
use crate::core::{Extrema, LinearScale};
use crate::error::ChartResult;

/// Horizontal time axis: `[min_date, max_date]` onto
/// `[left_padding, width - left_padding]`, linear in elapsed milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateScale {
    min_date: NaiveDate,
    max_date: NaiveDate,
    linear: LinearScale,
}

impl DateScale {
    pub fn new(
        min_date: NaiveDate,
        max_date: NaiveDate,
        canvas_width: f64,
        left_padding: f64,
    ) -> ChartResult<Self> {
        let linear = LinearScale::new(
            (date_to_unix_millis(min_date), date_to_unix_millis(max_date)),
            (left_padding, canvas_width - left_padding),
        )?;
        if linear.is_degenerate() {
            debug!(%min_date, "date scale domain collapsed to a single day");
        }
        Ok(Self {
            min_date,
            max_date,
            linear,
        })
    }

    pub fn from_extrema(extrema: Extrema, canvas_width: f64, left_padding: f64) -> ChartResult<Self> {
        Self::new(extrema.min_date, extrema.max_date, canvas_width, left_padding)
    }

    #[must_use]
    pub fn date_to_pixel(self, date: NaiveDate) -> f64 {
        self.linear.apply(date_to_unix_millis(date))
    }

    /// Calendar day under `pixel`, `None` when it falls outside chrono's range.
    #[must_use]
    pub fn pixel_to_date(self, pixel: f64) -> Option<NaiveDate> {
        unix_millis_to_date(self.linear.invert(pixel))
    }

    #[must_use]
    pub fn domain(self) -> (NaiveDate, NaiveDate) {
        (self.min_date, self.max_date)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }
}
