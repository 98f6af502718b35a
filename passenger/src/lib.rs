use concu_passenger::input_handler;
use concu_passenger::passenger::handle_fare_request;
use std::error::Error;

pub mod concu_passenger;

pub fn run() -> Result<(), Box<dyn Error>> {
    match input_handler::validate_args() {
        Ok(request) => {
            log::info!("Validated trip data: {:?}", request);
            handle_fare_request(request)?;
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", error);
            Err(Box::from(error))
        }
    }
}
