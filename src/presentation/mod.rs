/// Polars dataframes built from flattened records
pub mod frame;
/// JSON flattening into records
pub mod normalize;
/// Tabular projections of every API response
pub mod projector;

pub use frame::{convert_epoch_millis, epoch_datetime, frame_from_records, frame_to_json};
pub use projector::*;
