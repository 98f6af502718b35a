use actix::{Actor, Context, Handler, Message, MessageResult};
use common::utils::{json_parser::FareStatus, trip::Trip};

use super::model::FareModel;

pub struct CentralPredictor {
    // Modelo de tarifas elegido al arrancar el servidor
    model: FareModel,
}

impl CentralPredictor {
    pub fn new(model: FareModel) -> Self {
        Self { model }
    }
}

impl Actor for CentralPredictor {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "FareQuote")]
pub struct QuoteFare {
    /// Id del pasajero que pide la cotizacion
    pub passenger_id: u32,
    /// Viaje recibido por la conexion, todavia sin validar
    pub trip: Trip,
}

pub struct FareQuote {
    pub status: FareStatus,
    pub detail: String,
    pub fare: Option<f64>,
}

impl Handler<QuoteFare> for CentralPredictor {
    type Result = MessageResult<QuoteFare>;

    /// Revalida el viaje, calcula la distancia y consulta el modelo.
    /// Un viaje fuera de rango nunca llega al calculo de distancia.
    fn handle(&mut self, msg: QuoteFare, _ctx: &mut Context<Self>) -> Self::Result {
        if let Err(detail) = msg.trip.validate() {
            log::error!(
                "[FARE] Rejected request from passenger {}: {}",
                msg.passenger_id,
                detail
            );

            return MessageResult(FareQuote {
                status: FareStatus::Error,
                detail,
                fare: None,
            });
        }

        let distance_km = msg.trip.distance_km();
        let fare = self.model.predict(distance_km, msg.trip.passenger_count);

        log::info!(
            "[FARE] Passenger {}: {:.3} km with {} passengers -> ${:.2}",
            msg.passenger_id,
            distance_km,
            msg.trip.passenger_count,
            fare
        );

        MessageResult(FareQuote {
            status: FareStatus::Success,
            detail: format!("Estimated fare for a {:.3} km trip", distance_km),
            fare: Some(fare),
        })
    }
}
