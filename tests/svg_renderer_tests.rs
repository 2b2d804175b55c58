use chrono::NaiveDate;
use gdp_chart::api::{ChartEngine, ChartEngineConfig};
use gdp_chart::core::{DataPoint, Dataset, DatasetValidation};
use gdp_chart::render::{Renderer, SvgRenderer};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn svg_engine() -> ChartEngine<SvgRenderer> {
    let dataset = Dataset::new(
        vec![
            DataPoint::new(date(2015, 1, 1), 50.0),
            DataPoint::new(date(2015, 4, 1), 75.0),
        ],
        DatasetValidation::Permissive,
    )
    .expect("dataset");
    ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default(), dataset)
        .expect("engine init")
}

#[test]
fn markup_exposes_graph_bars_axes_and_caption() {
    let mut engine = svg_engine();
    engine.render().expect("render");
    let markup = engine.renderer().markup();

    assert!(markup.starts_with("<svg class=\"gdp-graph\" width=\"4\" height=\"400\""));
    assert_eq!(markup.matches("<rect class=\"bar\"").count(), 2);
    assert!(markup.contains("data-date=\"2015-01-01\" data-gdp=\"50\""));
    assert!(markup.contains("data-date=\"2015-04-01\" data-gdp=\"75\""));
    assert!(markup.contains("<g id=\"x-axis\" transform=\"translate(0,380)\""));
    assert!(markup.contains("<g id=\"y-axis\" class=\"ticks\" transform=\"translate(40,0)\""));
    assert!(markup.contains("rotate(-90)"));
    assert!(markup.contains(">Gross Domestic Product</text>"));
}

#[test]
fn markup_draws_bars_before_axes_and_caption() {
    let mut engine = svg_engine();
    engine.render().expect("render");
    let markup = engine.renderer().markup();

    let last_bar = markup.rfind("<rect").expect("bar");
    let x_axis = markup.find("id=\"x-axis\"").expect("x axis");
    let y_axis = markup.find("id=\"y-axis\"").expect("y axis");
    let caption = markup.find("Gross Domestic Product").expect("caption");
    let tooltip = markup.find("id=\"tooltip\"").expect("tooltip");

    assert!(last_bar < x_axis);
    assert!(x_axis < y_axis);
    assert!(y_axis < caption);
    assert!(caption < tooltip);
}

#[test]
fn tooltip_overlay_reflects_hover_state() {
    let mut engine = svg_engine();
    engine.render().expect("render hidden");
    assert!(
        engine
            .renderer()
            .markup()
            .contains("<div id=\"tooltip\" class=\"tooltip\" data-date=\"\"")
    );

    engine.pointer_enter(1, 100.0, 0.0).expect("enter");
    engine.render().expect("render visible");
    let markup = engine.renderer().markup();
    assert!(markup.contains("data-date=\"2015-04-01\" style=\"top: 300px; left: 116px; opacity: 1;\""));
    assert!(markup.contains("<p class=\"date\">2015 Q2</p>"));
    assert!(markup.contains("<p class=\"amount\">$75 Billion</p>"));
    assert!(markup.contains("fill=\"#DDDDFF\""));
}

#[test]
fn stats_count_drawn_elements() {
    let mut engine = svg_engine();
    engine.render().expect("render");
    let stats = engine.renderer().last_stats();

    assert_eq!(stats.rects_drawn, 2);
    assert_eq!(stats.axes_drawn, 2);
    assert_eq!(stats.texts_drawn, 1);
    assert!(stats.ticks_drawn >= 2);
}

#[test]
fn html_document_wraps_markup_in_host_container() {
    let mut engine = svg_engine();
    engine.render().expect("render");
    let document = engine.renderer().html_document("GDP <US>");

    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("<title>GDP &lt;US&gt;</title>"));
    assert!(document.contains("<div id=\"app\">\n<svg class=\"gdp-graph\""));
    assert!(document.trim_end().ends_with("</html>"));
}

#[test]
fn invalid_frame_is_rejected_before_writing() {
    let mut engine = svg_engine();
    let mut frame = engine.build_render_frame().expect("frame");
    frame.bars[0].height = f64::NAN;

    let mut renderer = SvgRenderer::new();
    assert!(renderer.render(&frame).is_err());
    assert!(renderer.markup().is_empty());
    engine.render().expect("engine frame is still valid");
}
