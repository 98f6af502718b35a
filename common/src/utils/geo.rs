use super::consts::{
    EARTH_RADIUS_KM, MAX_LATITUDE, MAX_LONGITUDE, MAX_PASSENGERS, MIN_LATITUDE, MIN_LONGITUDE,
    MIN_PASSENGERS,
};

/// Valida que la latitud y la longitud esten dentro de sus rangos en grados
pub fn validate_coordinates(latitude: f64, longitude: f64) -> bool {
    (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
        && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

/// Valida la cantidad de pasajeros del viaje
pub fn validate_passenger_count(count: u32) -> bool {
    (MIN_PASSENGERS..=MAX_PASSENGERS).contains(&count)
}

/// Calcula la distancia del circulo maximo entre dos coordenadas con la
/// formula de Haversine. Recibe grados y devuelve kilometros.
///
/// Los rangos de los argumentos se validan antes con `validate_coordinates`,
/// esta funcion no falla para entradas numericas.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    // Cerca de puntos antipodales el redondeo puede dejar `a` apenas fuera
    // de [0, 1] y el sqrt daria NaN
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_itself_is_zero() {
        let d = haversine_distance_km(51.5074, -0.1278, 51.5074, -0.1278);

        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let going = haversine_distance_km(40.7128, -74.0060, 34.0522, -118.2437);
        let returning = haversine_distance_km(34.0522, -118.2437, 40.7128, -74.0060);

        assert_eq!(going, returning);
    }

    #[test]
    fn test_new_york_to_los_angeles() {
        let d = haversine_distance_km(40.7128, -74.0060, 34.0522, -118.2437);

        assert!(d > 3935.0 && d < 3940.0, "unexpected distance: {}", d);
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let d = haversine_distance_km(0.0, 0.0, 0.0, 180.0);

        assert!(d.is_finite());
        assert!((d - 20015.0).abs() < 1.0, "unexpected distance: {}", d);
    }

    #[test]
    fn test_distance_is_bounded_by_half_circumference() {
        let pairs = [
            (90.0, 0.0, -90.0, 0.0),
            (45.0, 45.0, -45.0, -135.0),
            (0.0, -180.0, 0.0, 180.0),
            (-33.4489, -70.6693, 31.2304, 121.4737),
        ];

        for (lat1, lon1, lat2, lon2) in pairs {
            let d = haversine_distance_km(lat1, lon1, lat2, lon2);

            assert!(d >= 0.0);
            assert!(d <= 20016.0, "unexpected distance: {}", d);
        }
    }

    #[test]
    fn test_validate_coordinates_bounds() {
        assert!(validate_coordinates(90.0, 180.0));
        assert!(validate_coordinates(-90.0, -180.0));
        assert!(validate_coordinates(0.0, 0.0));

        assert!(!validate_coordinates(91.0, 0.0));
        assert!(!validate_coordinates(-90.5, 0.0));
        assert!(!validate_coordinates(0.0, 180.5));
        assert!(!validate_coordinates(0.0, -181.0));
    }

    #[test]
    fn test_validate_passenger_count_bounds() {
        assert!(validate_passenger_count(1));
        assert!(validate_passenger_count(8));

        assert!(!validate_passenger_count(0));
        assert!(!validate_passenger_count(9));
    }
}
