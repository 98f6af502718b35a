use std::env;

use common::utils::coordinate::Coordinate;
use common::utils::trip::Trip;
use regex::Regex;

use crate::concu_passenger::utils::RequestData;

pub fn validate_args() -> Result<RequestData, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.join(" ");

    parse_command(&command)
}

/// Parsea y valida el pedido de cotizacion. Un pedido fuera de rango se
/// rechaza aca, antes de abrir cualquier conexion.
fn parse_command(command: &str) -> Result<RequestData, String> {
    let command_pattern = Regex::new(
        r"^id=(\d+)\s+pickup=\((-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?)\)\s+dropoff=\((-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?)\)\s+passengers=(\d+)$"
    ).expect("Regex no válida");

    if let Some(captures) = command_pattern.captures(command) {
        let id: u32 = captures[1].parse().map_err(|_| "Invalid ID number")?;
        let pickup_lat: f64 = captures[2].parse().map_err(|_| "Invalid pickup latitude")?;
        let pickup_lon: f64 = captures[3].parse().map_err(|_| "Invalid pickup longitude")?;
        let dropoff_lat: f64 = captures[4].parse().map_err(|_| "Invalid dropoff latitude")?;
        let dropoff_lon: f64 = captures[5].parse().map_err(|_| "Invalid dropoff longitude")?;
        let passenger_count: u32 = captures[6].parse().map_err(|_| "Invalid passenger count")?;

        let trip = Trip::new(
            Coordinate::new(pickup_lat, pickup_lon),
            Coordinate::new(dropoff_lat, dropoff_lon),
            passenger_count,
        );

        trip.validate()?;

        Ok(RequestData { id, trip })
    } else {
        Err(
            "Invalid command format. Expected: id=<number> pickup=(lat,lon) dropoff=(lat,lon) passengers=<number>"
                .to_string(),
        )
    }
}
