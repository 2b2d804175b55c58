use serde::{Deserialize, Serialize};

use super::axis_ticks::MAX_AXIS_TICKS;
use crate::core::DatasetValidation;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Location of the quarterly GDP feed.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

/// Rotated caption drawn next to the value axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisTitle {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub font_size_rem: f64,
}

impl Default for ValueAxisTitle {
    fn default() -> Self {
        Self {
            text: "Gross Domestic Product".to_owned(),
            x: 54.0,
            y: 200.0,
            rotation_deg: -90.0,
            font_size_rem: 0.8,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Every field has a serde default, so a partial JSON document (or `{}`)
/// yields the stock chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default = "default_graph_height_px")]
    pub graph_height_px: f64,
    #[serde(default = "default_padding_x_px")]
    pub padding_x_px: f64,
    #[serde(default = "default_padding_y_px")]
    pub padding_y_px: f64,
    #[serde(default = "default_bar_width_px")]
    pub bar_width_px: f64,
    #[serde(default)]
    pub bar_gap_px: f64,
    #[serde(default = "default_bar_fill")]
    pub bar_fill: Color,
    #[serde(default = "default_bar_highlight_fill")]
    pub bar_highlight_fill: Color,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_axis_tick_count")]
    pub axis_tick_count: usize,
    #[serde(default = "default_tooltip_offset_x_px")]
    pub tooltip_offset_x_px: f64,
    #[serde(default = "default_tooltip_bottom_offset_px")]
    pub tooltip_bottom_offset_px: f64,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default)]
    pub value_axis_title: ValueAxisTitle,
    #[serde(default)]
    pub validation: DatasetValidation,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            graph_height_px: default_graph_height_px(),
            padding_x_px: default_padding_x_px(),
            padding_y_px: default_padding_y_px(),
            bar_width_px: default_bar_width_px(),
            bar_gap_px: 0.0,
            bar_fill: default_bar_fill(),
            bar_highlight_fill: default_bar_highlight_fill(),
            axis_color: default_axis_color(),
            axis_tick_count: default_axis_tick_count(),
            tooltip_offset_x_px: default_tooltip_offset_x_px(),
            tooltip_bottom_offset_px: default_tooltip_bottom_offset_px(),
            transition_duration_ms: default_transition_duration_ms(),
            value_axis_title: ValueAxisTitle::default(),
            validation: DatasetValidation::default(),
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets canvas height in pixels.
    #[must_use]
    pub fn with_graph_height(mut self, height_px: f64) -> Self {
        self.graph_height_px = height_px;
        self
    }

    /// Sets horizontal (`x`) and vertical (`y`) plot padding.
    #[must_use]
    pub fn with_padding(mut self, padding_x_px: f64, padding_y_px: f64) -> Self {
        self.padding_x_px = padding_x_px;
        self.padding_y_px = padding_y_px;
        self
    }

    #[must_use]
    pub fn with_bar_geometry(mut self, width_px: f64, gap_px: f64) -> Self {
        self.bar_width_px = width_px;
        self.bar_gap_px = gap_px;
        self
    }

    #[must_use]
    pub fn with_bar_colors(mut self, fill: Color, highlight_fill: Color) -> Self {
        self.bar_fill = fill;
        self.bar_highlight_fill = highlight_fill;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: f64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_validation(mut self, validation: DatasetValidation) -> Self {
        self.validation = validation;
        self
    }

    #[must_use]
    pub fn with_value_axis_title(mut self, title: ValueAxisTitle) -> Self {
        self.value_axis_title = title;
        self
    }

    /// Horizontal advance of one bar slot.
    #[must_use]
    pub fn bar_stride_px(&self) -> f64 {
        self.bar_width_px + self.bar_gap_px
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("graph height", self.graph_height_px),
            ("bar width", self.bar_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("horizontal padding", self.padding_x_px),
            ("vertical padding", self.padding_y_px),
            ("bar gap", self.bar_gap_px),
            ("tooltip offset", self.tooltip_offset_x_px),
            ("tooltip bottom offset", self.tooltip_bottom_offset_px),
            ("transition duration", self.transition_duration_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.padding_y_px * 2.0 >= self.graph_height_px {
            return Err(ChartError::InvalidData(
                "vertical padding leaves no plot area".to_owned(),
            ));
        }
        if self.axis_tick_count == 0 || self.axis_tick_count > MAX_AXIS_TICKS {
            return Err(ChartError::InvalidData(format!(
                "axis tick count must be in 1..={MAX_AXIS_TICKS}"
            )));
        }
        self.bar_fill.validate()?;
        self.bar_highlight_fill.validate()?;
        self.axis_color.validate()?;
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_graph_height_px() -> f64 {
    400.0
}

fn default_padding_x_px() -> f64 {
    40.0
}

fn default_padding_y_px() -> f64 {
    20.0
}

fn default_bar_width_px() -> f64 {
    2.0
}

fn default_bar_fill() -> Color {
    Color::BLACK
}

fn default_bar_highlight_fill() -> Color {
    Color::from_rgb8(0xDD, 0xDD, 0xFF)
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_axis_tick_count() -> usize {
    10
}

fn default_tooltip_offset_x_px() -> f64 {
    16.0
}

fn default_tooltip_bottom_offset_px() -> f64 {
    100.0
}

fn default_transition_duration_ms() -> f64 {
    400.0
}
