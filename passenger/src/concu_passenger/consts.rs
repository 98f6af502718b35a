use std::time::Duration;

use log::LevelFilter;

pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);
