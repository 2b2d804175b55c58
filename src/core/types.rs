use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::format_feed_date;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One observation of the series: a calendar day and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Date rendered back in feed format, used for inspectable attributes.
    #[must_use]
    pub fn date_label(self) -> String {
        format_feed_date(self.date)
    }
}
