use rocket::http::Status;
use thiserror::Error;

use crate::store::StoreError;

/// Everything the booking core can fail with. The route layer maps each
/// variant onto an HTTP status; the store variant is never shown to
/// clients.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Seat {0} does not exist")]
    SeatNotFound(i32),

    #[error("Seat {0} is already booked")]
    AlreadyBooked(i32),

    #[error("Seat {0} is not currently booked")]
    NotBooked(i32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BookingError {
    pub fn status(&self) -> Status {
        match self {
            BookingError::SeatNotFound(_) => Status::NotFound,
            BookingError::AlreadyBooked(_) | BookingError::NotBooked(_) => Status::BadRequest,
            BookingError::Store(_) => Status::InternalServerError,
        }
    }
}
