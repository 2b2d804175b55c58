pub mod dataset;
pub mod date_scale;
pub mod primitives;
pub mod scale;
pub mod types;
pub mod value_scale;

pub use dataset::{Dataset, DatasetValidation, Extrema, RawObservation};
pub use date_scale::DateScale;
pub use primitives::{FEED_DATE_FORMAT, format_feed_date, parse_feed_date};
pub use scale::LinearScale;
pub use types::{DataPoint, Viewport};
pub use value_scale::ValueScale;
