use std::error::Error;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::consts::{MAX_PLACEHOLDER_FARE, MIN_PLACEHOLDER_FARE};

/// Coeficientes de un modelo lineal de tarifas entrenado afuera de este
/// sistema y serializado como JSON
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct LinearFareModel {
    pub base: f64,
    pub per_km: f64,
    pub per_passenger: f64,
}

impl LinearFareModel {
    fn predict(&self, distance_km: f64, passenger_count: u32) -> f64 {
        let fare = self.base
            + self.per_km * distance_km
            + self.per_passenger * (passenger_count - 1) as f64;

        fare.max(self.base)
    }
}

#[derive(Debug, Clone)]
pub enum FareModel {
    Trained(LinearFareModel),
    Random,
}

impl FareModel {
    /// Lee y deserializa los coeficientes del modelo desde un archivo.
    /// Si el archivo no existe o no se puede parsear, el servidor no arranca.
    pub fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
            format!("Error reading model file {}: {}", path, e)
        })?;

        let coefficients: LinearFareModel = serde_json::from_str(&raw).map_err(|e| {
            log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
            format!("Error parsing model file {}: {}", path, e)
        })?;

        Ok(Self::Trained(coefficients))
    }

    /// Predice la tarifa para un viaje ya validado. Una vez construido el
    /// modelo esta funcion no falla.
    pub fn predict(&self, distance_km: f64, passenger_count: u32) -> f64 {
        let fare = match self {
            Self::Trained(model) => model.predict(distance_km, passenger_count),
            Self::Random => {
                rand::thread_rng().gen_range(MIN_PLACEHOLDER_FARE..=MAX_PLACEHOLDER_FARE)
            }
        };

        round_to_cents(fare)
    }
}

fn round_to_cents(fare: f64) -> f64 {
    (fare * 100.0).round() / 100.0
}
