use std::error::Error;

use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpStream,
    time::timeout,
};

use common::utils::consts::{HOST, PREDICTOR_PORT};
use common::utils::json_parser::{CommonMessages, FareMessages, FareStatus};

use crate::concu_passenger::consts::RESPONSE_TIMEOUT;
use crate::concu_passenger::utils::RequestData;

/// Maneja el pedido completo de cotizacion contra el servidor de tarifas
#[tokio::main]
pub(crate) async fn handle_fare_request(request: RequestData) -> Result<(), Box<dyn Error>> {
    request_quote(request).await?;
    Ok(())
}

/// Se conecta al servidor de tarifas, envia la identificacion y el pedido,
/// y espera la cotizacion
async fn request_quote(request: RequestData) -> Result<(), Box<dyn Error>> {
    let addr = format!("{}:{}", HOST, PREDICTOR_PORT);

    if let Ok(mut socket) = TcpStream::connect(addr.clone()).await {
        log::info!("Connected to predictor server");
        send_identification(&request, &mut socket).await?;
        send_fare_request(&request, &mut socket).await?;
        handle_fare_response(&mut socket).await?;
    } else {
        log::error!("Error connecting to predictor server");
        return Err("Error connecting to predictor server: Exiting the program.".into());
    }

    Ok(())
}

/// Envia un mensaje de identificacion, a través del socket, al servidor de tarifas
async fn send_identification(
    request: &RequestData,
    socket: &mut TcpStream,
) -> Result<(), Box<dyn Error>> {
    let identification = serde_json::to_string(&CommonMessages::Identification {
        id: request.id,
        type_: 'P',
    })?;

    socket.write_all((identification + "\n").as_bytes()).await?;
    Ok(())
}

/// Convierte el pedido de cotizacion en un string y lo envia a través del socket
async fn send_fare_request(
    request: &RequestData,
    socket: &mut TcpStream,
) -> Result<(), Box<dyn Error>> {
    let fare_request = serde_json::to_string(&FareMessages::FareRequest {
        pickup: request.trip.pickup,
        dropoff: request.trip.dropoff,
        passenger_count: request.trip.passenger_count,
    })?;

    socket
        .write_all((fare_request + "\n").as_bytes())
        .await
        .inspect_err(|e| log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string()))?;
    Ok(())
}

/// Maneja la respuesta del servidor de tarifas.
/// - Si la respuesta es exitosa, loguea la tarifa cotizada
/// - Si la respuesta es un error, el pedido fue rechazado y se retorna un error
async fn handle_fare_response(socket: &mut TcpStream) -> Result<(), Box<dyn Error>> {
    let mut reader = BufReader::new(socket);
    let str_response = wait_predictor_response(
        &mut reader,
        "Error receiving fare response".parse().unwrap(),
    )
    .await?;

    let response: FareMessages = match serde_json::from_str(&str_response) {
        Ok(msg) => msg,
        Err(e) => {
            log::error!("Failed to parse FareMessages: {}, str: {}", e, str_response);
            return Err("Error parsing response".into());
        }
    };

    match response {
        FareMessages::FareResponse {
            status,
            detail,
            fare,
        } => match status {
            FareStatus::Success => match fare {
                Some(fare) => {
                    log::info!("{}", detail);
                    log::info!("Your estimated fare is ${:.2}", fare);
                }
                None => {
                    log::error!("Success response without a fare");
                    return Err("Invalid response".into());
                }
            },
            FareStatus::Error => {
                log::error!("Request rejected: {}", detail);
                return Err(detail.into());
            }
        },
        _ => {
            log::error!("Invalid response");
            return Err("Invalid response".into());
        }
    }

    Ok(())
}

/// Espera la respuesta del servidor de tarifas y la retorna
/// - Si no hay respuesta dentro del timeout, retorna un error
/// - Si la respuesta es vacía, retorna un error
async fn wait_predictor_response(
    reader: &mut BufReader<&mut TcpStream>,
    error: String,
) -> Result<String, Box<dyn Error>> {
    let mut str_response = String::new();

    match timeout(RESPONSE_TIMEOUT, reader.read_line(&mut str_response)).await {
        Ok(result) => {
            result.map_err(|e| {
                log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
                e.to_string()
            })?;
        }
        Err(_) => {
            log::warn!("No response from the predictor server");
            return Err("No response from the predictor server".into());
        }
    }

    if str_response.is_empty() {
        return Err(error.into());
    }
    Ok(str_response)
}
