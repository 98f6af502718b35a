use std::error::Error;

use predictor::concu_predictor::consts::LOG_LEVEL;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LOG_LEVEL)
        .init();

    predictor::run()
}
