mod axis_ticks;
mod engine;
mod engine_config;
mod label_format;
mod render_frame_builder;
mod tooltip_controller;

pub use axis_ticks::{MAX_AXIS_TICKS, linear_ticks, tick_step, year_ticks};
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, DEFAULT_DATA_URL, ValueAxisTitle};
pub use label_format::{
    amount_label, group_digits, group_thousands, quarter_label, quarter_of_month0,
    value_tick_label, year_tick_label,
};
pub use render_frame_builder::{
    DATA_DATE_ATTR, DATA_VALUE_ATTR, X_AXIS_ID, Y_AXIS_CLASS, Y_AXIS_ID,
};
