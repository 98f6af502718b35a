use std::error::Error;

use actix::{Actor, AsyncContext, System};
use common::utils::{
    consts::{HOST, PREDICTOR_PORT},
    json_parser::CommonMessages,
};
use tokio::{
    io::{split, AsyncBufReadExt, BufReader},
    net::TcpListener,
};
use tokio_stream::wrappers::LinesStream;

use super::{
    central_predictor::CentralPredictor, model::FareModel,
    passenger_connection::PassengerConnection,
};

pub fn handle_predictions(model: FareModel) -> Result<(), Box<dyn Error>> {
    System::new().block_on(handle(model))?;

    Ok(())
}

/// Acepta conexiones de pasajeros. Por cada conexion se lee primero la linea
/// de identificacion y despues se crea un actor PassengerConnection que
/// escucha el resto de los mensajes con un stream de lineas.
async fn handle(model: FareModel) -> Result<(), Box<dyn Error>> {
    let central_predictor = CentralPredictor::new(model).start();

    let self_addr = format!("{}:{}", HOST, PREDICTOR_PORT);

    log::info!("My addr is {}", self_addr);

    let listener = TcpListener::bind(self_addr).await.map_err(|e| {
        log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
        e.to_string()
    })?;

    log::info!("Listening to new connections!");

    loop {
        let (socket, addr) = listener.accept().await.map_err(|e| {
            log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
            e.to_string()
        })?;

        log::debug!("Connection accepted from {}", addr);

        let (mut r, w) = split(socket);

        let mut reader = BufReader::new(&mut r);

        let mut str_response = String::new();

        if let Err(e) = reader.read_line(&mut str_response).await {
            log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
            continue;
        }

        if str_response.is_empty() {
            log::error!("Error receiving identification from {}", addr);
            continue;
        }

        let message: CommonMessages = match serde_json::from_str(&str_response) {
            Ok(message) => message,
            Err(e) => {
                log::error!(
                    "{}:{}, {}, str: {}, len: {}",
                    std::file!(),
                    std::line!(),
                    e.to_string(),
                    str_response,
                    str_response.len()
                );
                continue;
            }
        };

        match message {
            CommonMessages::Identification { id, type_: 'P' } => {
                let central_predictor = central_predictor.clone();

                PassengerConnection::create(|ctx| {
                    ctx.add_stream(LinesStream::new(BufReader::new(r).lines()));
                    PassengerConnection::new(central_predictor, w, id)
                });

                log::info!("Passenger {} connected", id);
            }
            CommonMessages::Identification { id, type_ } => {
                log::error!("Unexpected connection type '{}' from id {}", type_, id);
            }
        }
    }
}
