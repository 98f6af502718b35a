use rand::Rng;
use serde::{Deserialize, Serialize};

use super::consts::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use super::geo;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            latitude: rng.gen_range(MIN_LATITUDE..=MAX_LATITUDE),
            longitude: rng.gen_range(MIN_LONGITUDE..=MAX_LONGITUDE),
        }
    }

    /// Indica si la coordenada esta dentro de los rangos validos en grados
    pub fn is_valid(&self) -> bool {
        geo::validate_coordinates(self.latitude, self.longitude)
    }

    /// Distancia del circulo maximo hasta otra coordenada, en kilometros
    pub fn distance_km_to(&self, p: &Coordinate) -> f64 {
        geo::haversine_distance_km(self.latitude, self.longitude, p.latitude, p.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_coordinates_are_valid() {
        for _ in 0..100 {
            assert!(Coordinate::random().is_valid());
        }
    }

    #[test]
    fn test_out_of_range_coordinate_is_invalid() {
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn test_distance_between_same_point_is_zero() {
        let p = Coordinate::new(51.5074, -0.1278);

        assert_eq!(p.distance_km_to(&p), 0.0);
    }
}
