use serde::{Deserialize, Serialize};

use super::consts::{MAX_PASSENGERS, MIN_PASSENGERS};
use super::coordinate::Coordinate;
use super::geo;

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Trip {
    pub pickup: Coordinate,
    pub dropoff: Coordinate,
    pub passenger_count: u32,
}

impl Trip {
    pub fn new(pickup: Coordinate, dropoff: Coordinate, passenger_count: u32) -> Self {
        Self {
            pickup,
            dropoff,
            passenger_count,
        }
    }

    /// Valida los rangos de las coordenadas y de la cantidad de pasajeros.
    /// Un viaje invalido nunca debe llegar al calculo de distancia ni al modelo.
    pub fn validate(&self) -> Result<(), String> {
        if !self.pickup.is_valid() {
            return Err(format!(
                "Invalid pickup coordinates: ({}, {})",
                self.pickup.latitude, self.pickup.longitude
            ));
        }

        if !self.dropoff.is_valid() {
            return Err(format!(
                "Invalid dropoff coordinates: ({}, {})",
                self.dropoff.latitude, self.dropoff.longitude
            ));
        }

        if !geo::validate_passenger_count(self.passenger_count) {
            return Err(format!(
                "Invalid passenger count: {}, valid values are between {} <= count <= {}",
                self.passenger_count, MIN_PASSENGERS, MAX_PASSENGERS
            ));
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Distancia del circulo maximo entre el origen y el destino del viaje
    pub fn distance_km(&self) -> f64 {
        self.pickup.distance_km_to(&self.dropoff)
    }
}
