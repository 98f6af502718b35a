use log::LevelFilter;

pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub const MIN_PLACEHOLDER_FARE: f64 = 5.0;
pub const MAX_PLACEHOLDER_FARE: f64 = 50.0;
