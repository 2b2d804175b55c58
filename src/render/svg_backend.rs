use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    AxisGroup, AxisOrientation, RectPrimitive, RenderFrame, Renderer, TextPrimitive,
    TooltipOverlay,
};

/// CSS class carried by the root `<svg>` element.
pub const SVG_ROOT_CLASS: &str = "gdp-graph";
pub const BAR_CLASS: &str = "bar";
pub const TOOLTIP_ID: &str = "tooltip";

const AXIS_FONT_SIZE_PX: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub axes_drawn: usize,
    pub ticks_drawn: usize,
    pub texts_drawn: usize,
}

/// Renders frames to SVG markup followed by the HTML tooltip overlay.
///
/// Each `render` call replaces the previously produced markup.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    markup: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the last rendered frame: `<svg>` plus the tooltip `<div>`.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    /// Wraps the last markup into a standalone page with a host container.
    #[must_use]
    pub fn html_document(&self, title: &str) -> String {
        let mut out = String::with_capacity(self.markup.len() + 512);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_text(title)));
        out.push_str(
            "<style>\n\
             .tooltip { position: absolute; pointer-events: none; opacity: 0; \
             padding: 0.4rem 0.6rem; background: #FFFFFF; border: 1px solid #444444; }\n\
             .tooltip p { margin: 0; }\n\
             </style>\n</head>\n<body>\n<div id=\"app\">\n",
        );
        out.push_str(&self.markup);
        out.push_str("</div>\n</body>\n</html>\n");
        out
    }

    fn write_frame(&mut self, frame: &RenderFrame) -> Result<SvgRenderStats, std::fmt::Error> {
        let mut stats = SvgRenderStats::default();
        let mut out = String::with_capacity(256 + frame.bars.len() * 128);

        writeln!(
            out,
            "<svg class=\"{SVG_ROOT_CLASS}\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">",
            frame.viewport.width, frame.viewport.height
        )?;
        for bar in &frame.bars {
            write_bar(&mut out, bar)?;
            stats.rects_drawn += 1;
        }
        for axis in &frame.axes {
            write_axis(&mut out, axis)?;
            stats.axes_drawn += 1;
            stats.ticks_drawn += axis.ticks.len();
        }
        for text in &frame.texts {
            write_text(&mut out, text)?;
            stats.texts_drawn += 1;
        }
        out.push_str("</svg>\n");
        write_tooltip(&mut out, &frame.tooltip)?;

        self.markup = out;
        Ok(stats)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_stats = self
            .write_frame(frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg markup: {err}")))?;
        Ok(())
    }
}

fn write_bar(out: &mut String, bar: &RectPrimitive) -> std::fmt::Result {
    write!(out, "<rect class=\"{BAR_CLASS}\"")?;
    for (name, value) in &bar.attributes {
        write!(out, " {}=\"{}\"", name, escape_attr(value))?;
    }
    writeln!(
        out,
        " fill=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"></rect>",
        bar.fill_color.to_css(),
        bar.x,
        bar.y,
        bar.width,
        bar.height
    )
}

fn write_axis(out: &mut String, axis: &AxisGroup) -> std::fmt::Result {
    let color = axis.color.to_css();
    write!(out, "<g id=\"{}\"", escape_attr(&axis.id))?;
    if let Some(class) = &axis.class {
        write!(out, " class=\"{}\"", escape_attr(class))?;
    }
    let anchor = match axis.orientation {
        AxisOrientation::Bottom => "middle",
        AxisOrientation::Left => "end",
    };
    writeln!(
        out,
        " transform=\"translate({},{})\" fill=\"none\" font-size=\"{AXIS_FONT_SIZE_PX}\" \
         font-family=\"sans-serif\" text-anchor=\"{anchor}\">",
        axis.translate_x, axis.translate_y
    )?;
    writeln!(
        out,
        "<path class=\"domain\" stroke=\"{color}\" d=\"{}\"></path>",
        axis.domain_path()
    )?;

    let label_offset = axis.label_offset_px();
    for tick in &axis.ticks {
        let label = escape_text(&tick.label);
        match axis.orientation {
            AxisOrientation::Bottom => writeln!(
                out,
                "<g class=\"tick\" opacity=\"1\" transform=\"translate({},0)\">\
                 <line stroke=\"{color}\" y2=\"{}\"></line>\
                 <text fill=\"{color}\" y=\"{label_offset}\" dy=\"0.71em\">{label}</text></g>",
                tick.offset, axis.tick_size_px
            )?,
            AxisOrientation::Left => writeln!(
                out,
                "<g class=\"tick\" opacity=\"1\" transform=\"translate(0,{})\">\
                 <line stroke=\"{color}\" x2=\"{}\"></line>\
                 <text fill=\"{color}\" x=\"{}\" dy=\"0.32em\">{label}</text></g>",
                tick.offset, -axis.tick_size_px, -label_offset
            )?,
        }
    }
    out.push_str("</g>\n");
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    write!(out, "<text transform=\"translate({}, {})", text.x, text.y)?;
    if text.rotation_deg != 0.0 {
        write!(out, " rotate({})", text.rotation_deg)?;
    }
    writeln!(
        out,
        "\" x=\"0\" y=\"0\" fill=\"{}\" text-anchor=\"{}\" style=\"font-size: {}rem;\">{}</text>",
        text.color.to_css(),
        text.h_align.svg_anchor(),
        text.font_size_rem,
        escape_text(&text.text)
    )
}

fn write_tooltip(out: &mut String, tooltip: &TooltipOverlay) -> std::fmt::Result {
    let data_date = tooltip.data_date.as_deref().unwrap_or_default();
    writeln!(
        out,
        "<div id=\"{TOOLTIP_ID}\" class=\"tooltip\" data-date=\"{}\" \
         style=\"top: {}px; left: {}px; opacity: {};\">\
         <p class=\"date\">{}</p><p class=\"amount\">{}</p></div>",
        escape_attr(data_date),
        tooltip.top_px,
        tooltip.left_px,
        tooltip.opacity,
        escape_text(&tooltip.date_text),
        escape_text(&tooltip.amount_text)
    )
}

fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}
