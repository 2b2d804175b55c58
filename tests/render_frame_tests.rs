use chrono::NaiveDate;
use gdp_chart::api::{
    ChartEngine, ChartEngineConfig, DATA_DATE_ATTR, DATA_VALUE_ATTR, X_AXIS_ID, Y_AXIS_CLASS,
    Y_AXIS_ID,
};
use gdp_chart::core::{DataPoint, Dataset, DatasetValidation, RawObservation};
use gdp_chart::render::{AxisOrientation, NullRenderer};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn two_point_engine() -> ChartEngine<NullRenderer> {
    let dataset = Dataset::new(
        vec![
            DataPoint::new(date(2015, 1, 1), 50.0),
            DataPoint::new(date(2015, 4, 1), 75.0),
        ],
        DatasetValidation::Permissive,
    )
    .expect("dataset");
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), dataset)
        .expect("engine init")
}

fn quarterly_dataset(first_year: i32, years: i32) -> Dataset {
    let raw: Vec<RawObservation> = (0..years * 4)
        .map(|i| {
            let year = first_year + i / 4;
            let month = (i % 4) * 3 + 1;
            RawObservation::new(format!("{year}-{month:02}-01"), 240.0 + f64::from(i) * 65.5)
        })
        .collect();
    Dataset::from_raw(&raw, DatasetValidation::Strict).expect("dataset")
}

#[test]
fn two_point_dataset_yields_two_bars_on_a_tiled_canvas() {
    let engine = two_point_engine();
    let frame = engine.build_render_frame().expect("build frame");

    assert_eq!(frame.bars.len(), 2);
    assert_eq!(frame.viewport.width, 4);
    assert_eq!(frame.viewport.height, 400);
    assert!(frame.bars[1].y < frame.bars[0].y);
}

#[test]
fn bar_geometry_follows_scales() {
    let engine = two_point_engine();
    let frame = engine.build_render_frame().expect("build frame");
    let first = &frame.bars[0];
    let second = &frame.bars[1];

    assert_eq!(first.x, 40.0);
    assert_eq!(first.width, 2.0);
    assert!((first.y - 140.0).abs() <= 1e-9);
    assert!((first.height - 240.0).abs() <= 1e-9);
    assert_eq!(second.y, 20.0);
    assert!((second.height - 360.0).abs() <= 1e-9);
}

#[test]
fn bars_expose_source_date_and_value() {
    let engine = two_point_engine();
    let frame = engine.build_render_frame().expect("build frame");

    assert_eq!(frame.bars[0].attribute(DATA_DATE_ATTR), Some("2015-01-01"));
    assert_eq!(frame.bars[0].attribute(DATA_VALUE_ATTR), Some("50"));
    assert_eq!(frame.bars[1].attribute(DATA_DATE_ATTR), Some("2015-04-01"));
    assert_eq!(frame.bars[1].attribute(DATA_VALUE_ATTR), Some("75"));
}

#[test]
fn axes_are_anchored_to_zero_line_and_first_date() {
    let engine = quarterly_dataset_engine();
    let frame = engine.build_render_frame().expect("build frame");

    let x_axis = frame.axis(X_AXIS_ID).expect("x axis");
    assert_eq!(x_axis.orientation, AxisOrientation::Bottom);
    assert_eq!(x_axis.translate_y, engine.value_scale().baseline());
    assert_eq!(x_axis.translate_y, 380.0);

    let y_axis = frame.axis(Y_AXIS_ID).expect("y axis");
    assert_eq!(y_axis.orientation, AxisOrientation::Left);
    assert_eq!(y_axis.class.as_deref(), Some(Y_AXIS_CLASS));
    assert_eq!(y_axis.translate_x, 40.0);
}

fn quarterly_dataset_engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::default(),
        quarterly_dataset(1947, 68),
    )
    .expect("engine init")
}

#[test]
fn year_ticks_are_labelled_with_four_digit_years() {
    let engine = quarterly_dataset_engine();
    let frame = engine.build_render_frame().expect("build frame");
    let labels: Vec<&str> = frame
        .axis(X_AXIS_ID)
        .expect("x axis")
        .ticks
        .iter()
        .map(|tick| tick.label.as_str())
        .collect();

    assert_eq!(labels.first().copied(), Some("1950"));
    assert_eq!(labels.last().copied(), Some("2010"));
    assert!(labels.iter().all(|label| label.len() == 4));
}

#[test]
fn value_ticks_use_grouping_separators() {
    let engine = quarterly_dataset_engine();
    let frame = engine.build_render_frame().expect("build frame");
    let y_axis = frame.axis(Y_AXIS_ID).expect("y axis");

    assert_eq!(y_axis.ticks.first().map(|tick| tick.label.as_str()), Some("0"));
    assert!(y_axis.ticks.iter().any(|tick| tick.label == "10,000"));
    assert_eq!(y_axis.ticks[0].offset, 380.0);
}

#[test]
fn draw_order_is_bars_axes_then_caption() {
    let engine = two_point_engine();
    let frame = engine.build_render_frame().expect("build frame");

    let axis_ids: Vec<&str> = frame.axes.iter().map(|axis| axis.id.as_str()).collect();
    assert_eq!(axis_ids, vec![X_AXIS_ID, Y_AXIS_ID]);
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "Gross Domestic Product");
    assert_eq!(frame.texts[0].rotation_deg, -90.0);
    assert_eq!((frame.texts[0].x, frame.texts[0].y), (54.0, 200.0));
}

#[test]
fn single_point_dataset_renders_finite_geometry() {
    let dataset = Dataset::new(
        vec![DataPoint::new(date(1999, 10, 1), 9_000.0)],
        DatasetValidation::Permissive,
    )
    .expect("dataset");
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), dataset)
        .expect("engine init");

    let frame = engine.build_render_frame().expect("build frame");
    let bar = &frame.bars[0];
    assert!(bar.height.is_finite());
    assert!(bar.height >= 0.0);
    assert_eq!(engine.viewport().width, 2);
    assert_eq!(bar.x, 1.0);
    engine.render().expect("render");
    assert_eq!(engine.renderer().last_bar_count, 1);
}

#[test]
fn all_zero_values_collapse_to_the_baseline() {
    let dataset = Dataset::new(
        vec![
            DataPoint::new(date(2000, 1, 1), 0.0),
            DataPoint::new(date(2000, 4, 1), 0.0),
        ],
        DatasetValidation::Strict,
    )
    .expect("dataset");
    let engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), dataset)
        .expect("engine init");

    let frame = engine.build_render_frame().expect("build frame");
    for bar in &frame.bars {
        assert_eq!(bar.y, 380.0);
        assert_eq!(bar.height, 0.0);
    }
}

#[test]
fn negative_values_produce_empty_bars_instead_of_negative_heights() {
    let dataset = Dataset::new(
        vec![
            DataPoint::new(date(2000, 1, 1), 10.0),
            DataPoint::new(date(2000, 4, 1), -10.0),
        ],
        DatasetValidation::Permissive,
    )
    .expect("dataset");
    let engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), dataset)
        .expect("engine init");

    let frame = engine.build_render_frame().expect("build frame");
    assert_eq!(frame.bars[1].height, 0.0);
}

#[test]
fn empty_dataset_is_rejected_at_construction() {
    let dataset = Dataset::new(Vec::new(), DatasetValidation::Permissive).expect("dataset");
    let result = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), dataset);
    assert!(result.is_err());
}

#[test]
fn null_renderer_receives_computed_frame_counts() {
    let mut engine = quarterly_dataset_engine();
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.last_bar_count, 272);
    assert_eq!(renderer.last_axis_count, 2);
    assert_eq!(renderer.last_text_count, 1);
    assert!(renderer.last_tick_line_count > 10);
    assert_eq!(renderer.last_tooltip_opacity, 0.0);
}
