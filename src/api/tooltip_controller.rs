use ordered_float::OrderedFloat;
use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::interaction::{PointerEvent, TooltipContent};
use crate::render::Renderer;

use super::ChartEngine;
use super::label_format::{amount_label, quarter_label};

impl<R: Renderer> ChartEngine<R> {
    /// Applies one pointer event to the tooltip state machine.
    ///
    /// Events are handled strictly in call order; the latest one decides
    /// both displayed text and target opacity.
    pub fn dispatch(&mut self, event: PointerEvent) -> ChartResult<()> {
        let bar_index = event.bar_index();
        if bar_index >= self.dataset.len() {
            warn!(bar_index, bars = self.dataset.len(), "pointer event outside dataset");
            return Err(ChartError::InvalidData(format!(
                "bar index {bar_index} out of range for {} bars",
                self.dataset.len()
            )));
        }
        if !event.at_ms().is_finite() {
            return Err(ChartError::InvalidData(
                "pointer event timestamp must be finite".to_owned(),
            ));
        }

        match event {
            PointerEvent::Enter {
                bar_index,
                page_x,
                at_ms,
            } => {
                if !page_x.is_finite() {
                    return Err(ChartError::InvalidData(
                        "pointer x must be finite".to_owned(),
                    ));
                }
                let content = self.tooltip_content(bar_index)?;
                let position = (
                    page_x + self.config.tooltip_offset_x_px,
                    self.config.graph_height_px - self.config.tooltip_bottom_offset_px,
                );
                self.tooltip.on_pointer_enter(
                    bar_index,
                    content,
                    position,
                    at_ms,
                    self.config.transition_duration_ms,
                );
            }
            PointerEvent::Leave { bar_index, at_ms } => {
                self.tooltip
                    .on_pointer_leave(bar_index, at_ms, self.config.transition_duration_ms);
            }
        }
        Ok(())
    }

    pub fn pointer_enter(&mut self, bar_index: usize, page_x: f64, at_ms: f64) -> ChartResult<()> {
        self.dispatch(PointerEvent::Enter {
            bar_index,
            page_x,
            at_ms,
        })
    }

    pub fn pointer_leave(&mut self, bar_index: usize, at_ms: f64) -> ChartResult<()> {
        self.dispatch(PointerEvent::Leave { bar_index, at_ms })
    }

    /// Formatted tooltip text for the bar at `bar_index`.
    pub fn tooltip_content(&self, bar_index: usize) -> ChartResult<TooltipContent> {
        let point = self.dataset.get(bar_index).ok_or_else(|| {
            ChartError::InvalidData(format!("bar index {bar_index} out of range"))
        })?;
        Ok(TooltipContent {
            date: point.date,
            data_date: point.date_label(),
            date_text: quarter_label(point.date),
            amount_text: amount_label(point.value),
        })
    }

    /// Resolves a canvas x coordinate to the bar whose rect contains it.
    ///
    /// When rects overlap (unordered or duplicate dates) the bar with the
    /// closest left edge wins.
    #[must_use]
    pub fn bar_at(&self, x: f64) -> Option<usize> {
        if !x.is_finite() {
            return None;
        }
        let width = self.config.bar_width_px;
        let hit = self
            .dataset
            .points()
            .iter()
            .enumerate()
            .filter_map(|(index, point)| {
                let left = self.date_scale.date_to_pixel(point.date);
                (x >= left && x < left + width).then_some((OrderedFloat(x - left), index))
            })
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, index)| index);
        trace!(x, ?hit, "bar hit test");
        hit
    }
}
