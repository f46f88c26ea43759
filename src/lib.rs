pub mod config;
pub mod cors;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod store;

use std::sync::Arc;

use rocket::fairing::AdHoc;
use rocket::{catchers, routes, Build, Rocket};
use tracing::{error, info};

pub use error::BookingError;
pub use models::employee::Employee;
pub use models::seat::{BookingDetails, Seat, SeatStatus};

use repository::employee_repository::EmployeeRepository;
use repository::seat_repository::SeatRepository;
use store::{EmployeeStore, SeatStore};

/// Assembles the Rocket instance over the given store backends. Seeding is
/// attached as an ignite fairing, so the seat inventory exists before the
/// first request is served; a failed seed aborts launch.
pub fn build(seats: Arc<dyn SeatStore>, employees: Arc<dyn EmployeeStore>) -> Rocket<Build> {
    rocket::build()
        .manage(SeatRepository::new(seats))
        .manage(EmployeeRepository::new(employees))
        .attach(cors::Cors)
        .attach(AdHoc::try_on_ignite("Seed seat inventory", |rocket| async {
            let seeded = match rocket.state::<SeatRepository>() {
                Some(seat_repo) => seat_repo.seed_if_empty().await,
                None => return Err(rocket),
            };
            match seeded {
                Ok(0) => info!("seat inventory already present"),
                Ok(inserted) => info!("seeded {inserted} seats"),
                Err(cause) => {
                    error!("failed to seed the seat inventory: {cause}");
                    return Err(rocket);
                }
            }
            Ok(rocket)
        }))
        .mount(
            "/",
            routes![
                routes::list_seats,
                routes::book_seat,
                routes::release_seat,
                cors::all_options,
            ],
        )
        .register(
            "/",
            catchers![
                routes::not_found,
                routes::unprocessable_entity,
                routes::internal_error,
            ],
        )
}
