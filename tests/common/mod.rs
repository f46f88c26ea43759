use std::sync::Arc;

use rocket::local::asynchronous::Client;
use seatbook::store::memory::{MemoryEmployeeStore, MemorySeatStore};

/// A fully assembled application over in-memory stores, with direct
/// handles onto the backing documents for assertions the HTTP surface
/// cannot express.
pub struct TestApp {
    pub client: Client,
    pub seats: Arc<MemorySeatStore>,
    pub employees: Arc<MemoryEmployeeStore>,
}

pub async fn spawn() -> TestApp {
    let seats = Arc::new(MemorySeatStore::default());
    let employees = Arc::new(MemoryEmployeeStore::default());
    let client = Client::tracked(seatbook::build(seats.clone(), employees.clone()))
        .await
        .expect("valid rocket instance");
    TestApp {
        client,
        seats,
        employees,
    }
}
