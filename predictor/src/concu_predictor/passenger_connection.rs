use std::sync::Arc;

use actix::{
    dev::ContextFutureSpawner, fut::wrap_future, Actor, ActorContext, Addr, AsyncContext, Context,
    Handler, Message, StreamHandler,
};
use common::utils::{
    json_parser::{FareMessages, FareStatus},
    trip::Trip,
};
use tokio::{
    io::{AsyncWriteExt, WriteHalf},
    net::TcpStream,
    sync::Mutex,
};

use super::central_predictor::{CentralPredictor, QuoteFare};

pub struct PassengerConnection {
    // Direccion del actor CentralPredictor
    central_predictor: Addr<CentralPredictor>,
    // Stream para enviar al passenger
    passenger_write_stream: Arc<Mutex<WriteHalf<TcpStream>>>,
    // ID del pasajero
    passenger_id: u32,
}

impl PassengerConnection {
    pub fn new(
        central_predictor: Addr<CentralPredictor>,
        write_stream: WriteHalf<TcpStream>,
        passenger_id: u32,
    ) -> Self {
        Self {
            central_predictor,
            passenger_write_stream: Arc::new(Mutex::new(write_stream)),
            passenger_id,
        }
    }
}

impl Actor for PassengerConnection {
    type Context = Context<Self>;
}

impl StreamHandler<Result<String, std::io::Error>> for PassengerConnection {
    fn handle(&mut self, msg: Result<String, std::io::Error>, ctx: &mut Self::Context) {
        if let Ok(data) = msg {
            let _ = ctx.address().try_send(RecvAll { data }).inspect_err(|e| {
                log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string())
            });
        }
    }

    fn finished(&mut self, ctx: &mut Self::Context) {
        log::warn!("Broken pipe with passenger {}", self.passenger_id);
        ctx.stop();
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct SendAll {
    pub data: String,
}

impl Handler<SendAll> for PassengerConnection {
    type Result = ();

    fn handle(&mut self, msg: SendAll, ctx: &mut Context<Self>) -> Self::Result {
        let message = msg.data + "\n";

        let w = self.passenger_write_stream.clone();
        wrap_future::<_, Self>(async move {
            let mut writer = w.lock().await;

            let _ = writer.write_all(message.as_bytes()).await.inspect_err(|e| {
                log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string())
            });

            let _ = writer.flush().await.inspect_err(|e| {
                log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string())
            });
        })
        .spawn(ctx);
    }
}

#[derive(Message)]
#[rtype(result = "Result<(), String>")]
pub struct RecvAll {
    pub data: String,
}

impl Handler<RecvAll> for PassengerConnection {
    type Result = Result<(), String>;

    /// Parsea la linea recibida. Ante un FareRequest consulta al
    /// CentralPredictor y contesta por el mismo socket con un FareResponse.
    fn handle(&mut self, msg: RecvAll, ctx: &mut Context<Self>) -> Self::Result {
        let data = serde_json::from_str(&msg.data).map_err(|e| {
            log::error!(
                "{}:{}, {}, str: {}, len: {}",
                std::file!(),
                std::line!(),
                e.to_string(),
                msg.data,
                msg.data.len()
            );
            e.to_string()
        })?;

        match data {
            FareMessages::FareRequest {
                pickup,
                dropoff,
                passenger_count,
            } => {
                let central_predictor = self.central_predictor.clone();
                let passenger_id = self.passenger_id;
                let self_addr = ctx.address().clone();

                wrap_future::<_, Self>(async move {
                    let response = match central_predictor
                        .send(QuoteFare {
                            passenger_id,
                            trip: Trip::new(pickup, dropoff, passenger_count),
                        })
                        .await
                    {
                        Ok(quote) => FareMessages::FareResponse {
                            status: quote.status,
                            detail: quote.detail,
                            fare: quote.fare,
                        },
                        Err(e) => {
                            log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());

                            FareMessages::FareResponse {
                                status: FareStatus::Error,
                                detail: String::from("Internal server error"),
                                fare: None,
                            }
                        }
                    };

                    match serde_json::to_string(&response) {
                        Ok(data) => self_addr.do_send(SendAll { data }),
                        Err(e) => {
                            log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string())
                        }
                    }
                })
                .spawn(ctx);
            }

            FareMessages::FareResponse { .. } => log::error!("Why i'm receiving a fare response?"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix::System;
    use common::utils::coordinate::Coordinate;
    use tokio::{
        io::{split, AsyncBufReadExt, BufReader},
        net::TcpListener,
    };
    use tokio_stream::wrappers::LinesStream;

    use crate::concu_predictor::model::FareModel;

    // Levanta una conexion real contra un socket local y cotiza un viaje
    #[test]
    fn test_quotes_a_valid_trip_over_tcp() {
        System::new().block_on(async {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();

            let central_predictor = CentralPredictor::new(FareModel::Random).start();

            let server_task = actix::spawn(async move {
                let (socket, _) = listener.accept().await.unwrap();
                let (r, w) = split(socket);

                PassengerConnection::create(|ctx| {
                    ctx.add_stream(LinesStream::new(BufReader::new(r).lines()));
                    PassengerConnection::new(central_predictor, w, 1)
                });
            });

            let mut client = TcpStream::connect(addr).await.unwrap();

            let request = serde_json::to_string(&FareMessages::FareRequest {
                pickup: Coordinate::new(40.7128, -74.0060),
                dropoff: Coordinate::new(34.0522, -118.2437),
                passenger_count: 3,
            })
            .unwrap();

            client
                .write_all((request + "\n").as_bytes())
                .await
                .unwrap();

            let mut reader = BufReader::new(&mut client);
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap();

            let response: FareMessages = serde_json::from_str(&line).unwrap();

            match response {
                FareMessages::FareResponse { status, fare, .. } => {
                    assert_eq!(status, FareStatus::Success);

                    let fare = fare.unwrap();
                    assert!((5.0..=50.0).contains(&fare), "unexpected fare: {}", fare);
                }
                _ => panic!("expected a fare response"),
            }

            server_task.await.unwrap();
        });
    }

    // El servidor no confia en el cliente: un viaje fuera de rango se rechaza
    #[test]
    fn test_rejects_an_out_of_range_trip_over_tcp() {
        System::new().block_on(async {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();

            let central_predictor = CentralPredictor::new(FareModel::Random).start();

            let server_task = actix::spawn(async move {
                let (socket, _) = listener.accept().await.unwrap();
                let (r, w) = split(socket);

                PassengerConnection::create(|ctx| {
                    ctx.add_stream(LinesStream::new(BufReader::new(r).lines()));
                    PassengerConnection::new(central_predictor, w, 2)
                });
            });

            let mut client = TcpStream::connect(addr).await.unwrap();

            let request = serde_json::to_string(&FareMessages::FareRequest {
                pickup: Coordinate::new(95.0, 0.0),
                dropoff: Coordinate::new(34.0522, -118.2437),
                passenger_count: 2,
            })
            .unwrap();

            client
                .write_all((request + "\n").as_bytes())
                .await
                .unwrap();

            let mut reader = BufReader::new(&mut client);
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap();

            let response: FareMessages = serde_json::from_str(&line).unwrap();

            match response {
                FareMessages::FareResponse {
                    status,
                    detail,
                    fare,
                } => {
                    assert_eq!(status, FareStatus::Error);
                    assert_eq!(fare, None);
                    assert!(detail.contains("pickup"));
                }
                _ => panic!("expected a fare response"),
            }

            server_task.await.unwrap();
        });
    }
}
