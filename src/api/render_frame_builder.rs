use tracing::trace;

use crate::core::DataPoint;
use crate::error::ChartResult;
use crate::render::{
    AxisGroup, AxisOrientation, AxisTick, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, TooltipOverlay,
};

use super::ChartEngine;
use super::axis_ticks::{linear_ticks, year_ticks};
use super::label_format::{value_tick_label, year_tick_label};

pub const X_AXIS_ID: &str = "x-axis";
pub const Y_AXIS_ID: &str = "y-axis";
pub const Y_AXIS_CLASS: &str = "ticks";
pub const DATA_DATE_ATTR: &str = "data-date";
pub const DATA_VALUE_ATTR: &str = "data-gdp";

impl<R: Renderer> ChartEngine<R> {
    /// Builds the settled frame (all transitions finished).
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        self.build_render_frame_at(f64::INFINITY)
    }

    /// Builds bars, then axes, then the caption, then the tooltip overlay.
    pub fn build_render_frame_at(&self, now_ms: f64) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        for (index, point) in self.dataset.points().iter().enumerate() {
            frame = frame.with_bar(self.project_bar(index, *point));
        }

        frame = frame
            .with_axis(self.build_x_axis())
            .with_axis(self.build_y_axis())
            .with_text(self.build_value_axis_title())
            .with_tooltip(self.build_tooltip_overlay(now_ms));

        trace!(bars = frame.bars.len(), now_ms, "render frame built");
        frame.validate()?;
        Ok(frame)
    }

    /// Bar geometry for one observation.
    ///
    /// Height is clamped at zero so values below the baseline collapse
    /// instead of producing negative extents.
    #[must_use]
    pub fn project_bar(&self, index: usize, point: DataPoint) -> RectPrimitive {
        let x = self.date_scale.date_to_pixel(point.date);
        let y = self.value_scale.value_to_pixel(point.value);
        let height = (self.config.graph_height_px - y - self.config.padding_y_px).max(0.0);
        let fill = if self.tooltip.is_highlighted(index) {
            self.config.bar_highlight_fill
        } else {
            self.config.bar_fill
        };

        RectPrimitive::new(x, y, self.config.bar_width_px, height, fill)
            .with_attribute(DATA_DATE_ATTR, point.date_label())
            .with_attribute(DATA_VALUE_ATTR, point.value.to_string())
    }

    fn build_x_axis(&self) -> AxisGroup {
        let ticks = year_ticks(
            self.extrema.min_date,
            self.extrema.max_date,
            self.config.axis_tick_count,
        )
        .into_iter()
        .map(|date| AxisTick {
            offset: self.date_scale.date_to_pixel(date),
            label: year_tick_label(date),
        })
        .collect();

        let mut axis = AxisGroup::new(X_AXIS_ID, AxisOrientation::Bottom, self.date_scale.range())
            .translated(0.0, self.value_scale.baseline())
            .with_ticks(ticks);
        axis.color = self.config.axis_color;
        axis
    }

    fn build_y_axis(&self) -> AxisGroup {
        let (domain_start, domain_end) = self.value_scale.domain();
        let ticks = linear_ticks(domain_start, domain_end, self.config.axis_tick_count)
            .into_iter()
            .map(|value| AxisTick {
                offset: self.value_scale.value_to_pixel(value),
                label: value_tick_label(value),
            })
            .collect();

        let mut axis = AxisGroup::new(Y_AXIS_ID, AxisOrientation::Left, self.value_scale.range())
            .with_class(Y_AXIS_CLASS)
            .translated(self.date_scale.date_to_pixel(self.extrema.min_date), 0.0)
            .with_ticks(ticks);
        axis.color = self.config.axis_color;
        axis
    }

    fn build_value_axis_title(&self) -> TextPrimitive {
        let title = &self.config.value_axis_title;
        TextPrimitive::new(
            title.text.clone(),
            title.x,
            title.y,
            title.font_size_rem,
            self.config.axis_color,
            TextHAlign::Left,
        )
        .rotated(title.rotation_deg)
    }

    fn build_tooltip_overlay(&self, now_ms: f64) -> TooltipOverlay {
        let (left_px, top_px) = self.tooltip.position();
        let opacity = self.tooltip.opacity_at(now_ms);
        match self.tooltip.content() {
            Some(content) => TooltipOverlay {
                left_px,
                top_px,
                opacity,
                data_date: Some(content.data_date.clone()),
                date_text: content.date_text.clone(),
                amount_text: content.amount_text.clone(),
            },
            None => TooltipOverlay {
                left_px,
                top_px,
                opacity,
                ..TooltipOverlay::default()
            },
        }
    }
}
