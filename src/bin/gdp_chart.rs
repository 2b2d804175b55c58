use std::io::Write;

use gdp_chart::api::{ChartEngine, ChartEngineConfig, DEFAULT_DATA_URL};
use gdp_chart::error::ChartResult;
use gdp_chart::feed::HttpSource;
use gdp_chart::render::SvgRenderer;
use gdp_chart::telemetry::init_default_tracing;
use tracing::{error, info};

const DOCUMENT_TITLE: &str = "United States GDP";

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        error!(error = %err, "gdp-chart failed");
        std::process::exit(1);
    }
}

fn run() -> ChartResult<()> {
    let source = HttpSource::new(DEFAULT_DATA_URL);
    let mut engine =
        ChartEngine::from_source(SvgRenderer::new(), ChartEngineConfig::default(), &source)?;
    engine.render()?;
    info!(
        bars = engine.dataset().len(),
        width = engine.viewport().width,
        "chart rendered"
    );

    let document = engine.renderer().html_document(DOCUMENT_TITLE);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
