use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Horizontal axis, ticks and labels below the line.
    Bottom,
    /// Vertical axis, ticks and labels left of the line.
    Left,
}

/// One tick, positioned along the axis in the group's local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

/// Axis ruler drawn as a translated group: a domain path with outer ticks
/// spanning `range`, plus one tick line and label per `ticks` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGroup {
    pub id: String,
    pub class: Option<String>,
    pub orientation: AxisOrientation,
    pub translate_x: f64,
    pub translate_y: f64,
    pub range: (f64, f64),
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub color: Color,
    pub ticks: Vec<AxisTick>,
}

impl AxisGroup {
    #[must_use]
    pub fn new(id: impl Into<String>, orientation: AxisOrientation, range: (f64, f64)) -> Self {
        Self {
            id: id.into(),
            class: None,
            orientation,
            translate_x: 0.0,
            translate_y: 0.0,
            range,
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
            color: Color::BLACK,
            ticks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn translated(mut self, x: f64, y: f64) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: Vec<AxisTick>) -> Self {
        self.ticks = ticks;
        self
    }

    /// Distance from the axis line to the tick label anchor.
    #[must_use]
    pub fn label_offset_px(&self) -> f64 {
        self.tick_size_px.max(0.0) + self.tick_padding_px
    }

    /// Outline of the axis line with outer ticks, in local coordinates.
    #[must_use]
    pub fn domain_path(&self) -> String {
        let (start, end) = self.range;
        let outer = self.tick_size_px;
        match self.orientation {
            AxisOrientation::Bottom => format!("M{start},{outer}V0H{end}V{outer}"),
            AxisOrientation::Left => format!("M{},{start}H0V{end}H{}", -outer, -outer),
        }
    }

    /// Tick marks in absolute canvas coordinates.
    #[must_use]
    pub fn tick_lines(&self) -> Vec<LinePrimitive> {
        self.ticks
            .iter()
            .map(|tick| {
                let (x1, y1, x2, y2) = match self.orientation {
                    AxisOrientation::Bottom => (tick.offset, 0.0, tick.offset, self.tick_size_px),
                    AxisOrientation::Left => (0.0, tick.offset, -self.tick_size_px, tick.offset),
                };
                LinePrimitive::new(
                    x1 + self.translate_x,
                    y1 + self.translate_y,
                    x2 + self.translate_x,
                    y2 + self.translate_y,
                    1.0,
                    self.color,
                )
            })
            .collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.translate_x.is_finite() || !self.translate_y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "axis `{}` translation must be finite",
                self.id
            )));
        }
        if !self.range.0.is_finite() || !self.range.1.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "axis `{}` range must be finite",
                self.id
            )));
        }
        for tick in &self.ticks {
            if !tick.offset.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "axis `{}` tick offsets must be finite",
                    self.id
                )));
            }
        }
        for line in self.tick_lines() {
            line.validate()?;
        }
        self.color.validate()
    }
}

/// Snapshot of the tooltip overlay element at frame time.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOverlay {
    pub left_px: f64,
    pub top_px: f64,
    pub opacity: f64,
    pub data_date: Option<String>,
    pub date_text: String,
    pub amount_text: String,
}

impl Default for TooltipOverlay {
    fn default() -> Self {
        Self {
            left_px: 0.0,
            top_px: 0.0,
            opacity: 0.0,
            data_date: None,
            date_text: String::new(),
            amount_text: String::new(),
        }
    }
}

impl TooltipOverlay {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.left_px.is_finite() || !self.top_px.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip position must be finite".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "tooltip opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw fields in declaration order: bars, axes, texts, then the
/// tooltip overlay on top.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub bars: Vec<RectPrimitive>,
    pub axes: Vec<AxisGroup>,
    pub texts: Vec<TextPrimitive>,
    pub tooltip: TooltipOverlay,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bars: Vec::new(),
            axes: Vec::new(),
            texts: Vec::new(),
            tooltip: TooltipOverlay::default(),
        }
    }

    #[must_use]
    pub fn with_bar(mut self, bar: RectPrimitive) -> Self {
        self.bars.push(bar);
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisGroup) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipOverlay) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn axis(&self, id: &str) -> Option<&AxisGroup> {
        self.axes.iter().find(|axis| axis.id == id)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for bar in &self.bars {
            bar.validate()?;
        }
        for axis in &self.axes {
            axis.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        self.tooltip.validate()
    }
}
