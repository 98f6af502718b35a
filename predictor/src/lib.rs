use std::error::Error;

use concu_predictor::model::FareModel;
use concu_predictor::predictor::handle_predictions;

pub mod concu_predictor;

/// Recibe opcionalmente la ruta de un modelo serializado y levanta el
/// servidor de tarifas. Sin argumento se usa el modelo placeholder aleatorio.
pub fn run() -> Result<(), Box<dyn Error>> {
    let argv: Vec<String> = std::env::args().collect();

    if argv.len() > 2 {
        return Err("Wrong args, expected: <program> [model_path]".into());
    }

    let model = match argv.get(1) {
        Some(path) => {
            let model = FareModel::load(path)?;
            log::info!("Loaded fare model from {}", path);
            model
        }
        None => {
            log::warn!("No model file given, predictions will be random placeholders");
            FareModel::Random
        }
    };

    handle_predictions(model)
}
