use common::utils::trip::Trip;

#[derive(Debug)]
pub struct RequestData {
    pub id: u32,
    pub trip: Trip,
}
