use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Extrema, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Vertical value axis: `[0, max_value]` onto `[height - bottom, top]`.
///
/// The domain floor is always zero so every bar shares one baseline. The
/// range is inverted: larger values sit closer to the top edge. A collapsed
/// domain (every value zero) pins all values to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(
        max_value: f64,
        canvas_height: f64,
        top_padding: f64,
        bottom_padding: f64,
    ) -> ChartResult<Self> {
        if !canvas_height.is_finite() || canvas_height <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale canvas height must be finite and > 0".to_owned(),
            ));
        }
        let linear = LinearScale::new(
            (0.0, max_value),
            (canvas_height - bottom_padding, top_padding),
        )?;
        if linear.is_degenerate() {
            debug!(max_value, "value scale domain collapsed to a single value");
        }
        Ok(Self { linear })
    }

    pub fn from_extrema(
        extrema: Extrema,
        canvas_height: f64,
        top_padding: f64,
        bottom_padding: f64,
    ) -> ChartResult<Self> {
        Self::new(extrema.max_value, canvas_height, top_padding, bottom_padding)
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        if self.linear.is_degenerate() {
            return self.linear.range().0;
        }
        self.linear.apply(value)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    /// Pixel row of the zero line, where the bottom axis sits.
    #[must_use]
    pub fn baseline(self) -> f64 {
        self.value_to_pixel(0.0)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }
}
