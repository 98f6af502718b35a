use log::LevelFilter;

pub const HOST: &str = "0.0.0.0";

pub const PREDICTOR_PORT: u32 = 3000;
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

pub const MIN_PASSENGERS: u32 = 1;
pub const MAX_PASSENGERS: u32 = 8;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
