use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

#[derive(Serialize, Deserialize)]
pub enum CommonMessages {
    Identification { id: u32, type_: char },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum FareStatus {
    Success,
    Error,
}

#[derive(Serialize, Deserialize)]
pub enum FareMessages {
    FareRequest {
        pickup: Coordinate,
        dropoff: Coordinate,
        passenger_count: u32,
    },
    FareResponse {
        status: FareStatus,
        detail: String,
        fare: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fare_request_wire_format() {
        let request = FareMessages::FareRequest {
            pickup: Coordinate::new(40.7128, -74.006),
            dropoff: Coordinate::new(34.0522, -118.2437),
            passenger_count: 3,
        };

        let line = serde_json::to_string(&request).unwrap();

        assert_eq!(
            line,
            "{\"FareRequest\":{\"pickup\":{\"latitude\":40.7128,\"longitude\":-74.006},\
             \"dropoff\":{\"latitude\":34.0522,\"longitude\":-118.2437},\"passenger_count\":3}}"
        );
    }

    #[test]
    fn test_fare_response_parses_from_wire() {
        let line = "{\"FareResponse\":{\"status\":\"Success\",\"detail\":\"ok\",\"fare\":23.45}}";

        let response: FareMessages = serde_json::from_str(line).unwrap();

        match response {
            FareMessages::FareResponse {
                status,
                detail,
                fare,
            } => {
                assert_eq!(status, FareStatus::Success);
                assert_eq!(detail, "ok");
                assert_eq!(fare, Some(23.45));
            }
            _ => panic!("expected a fare response"),
        }
    }
}
