use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{catch, get, post, Request, State};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::BookingError;
use crate::models::seat::{BookingDetails, Seat};
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::seat_repository::SeatRepository;

/// Body accepted by `POST /book`. Rocket's JSON guard rejects missing or
/// mistyped fields with 422 before any of this module runs.
#[derive(Debug, Deserialize)]
pub struct BookSeatRequest {
    pub seat_id: i32,
    pub w3_id: String,
    pub name: String,
    pub date: String,
    pub time_slot: String,
}

/// Response envelope for the booking endpoints. `seat` is omitted on
/// errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeatResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<Seat>,
}

#[get("/seats")]
pub async fn list_seats(
    seat_repo: &State<SeatRepository>,
) -> Result<Json<Vec<Seat>>, (Status, Json<SeatResponse>)> {
    match seat_repo.list().await {
        Ok(seats) => Ok(Json(seats)),
        Err(error) => Err(error_response(error)),
    }
}

#[post("/book", format = "json", data = "<request>")]
pub async fn book_seat(
    seat_repo: &State<SeatRepository>,
    employee_repo: &State<EmployeeRepository>,
    request: Json<BookSeatRequest>,
) -> (Status, Json<SeatResponse>) {
    let request = request.into_inner();
    let details = BookingDetails {
        name: request.name.clone(),
        date: request.date,
        time_slot: request.time_slot,
    };

    let seat = match seat_repo.book(request.seat_id, &request.w3_id, details).await {
        Ok(seat) => seat,
        Err(error) => return error_response(error),
    };

    // The seat transition is committed at this point; a failed upsert
    // leaves the seat booked without history, repaired by the employee's
    // next successful booking.
    if let Err(error) = employee_repo
        .record_booking(&request.w3_id, &request.name, request.seat_id)
        .await
    {
        error!(
            "seat {} booked but the employee record update failed",
            request.seat_id
        );
        return error_response(error);
    }

    (
        Status::Ok,
        Json(SeatResponse {
            message: format!("Seat {} booked for {}", request.seat_id, request.w3_id),
            seat: Some(seat),
        }),
    )
}

#[post("/release/<seat_id>")]
pub async fn release_seat(
    seat_repo: &State<SeatRepository>,
    seat_id: i32,
) -> (Status, Json<SeatResponse>) {
    match seat_repo.release(seat_id).await {
        Ok(seat) => (
            Status::Ok,
            Json(SeatResponse {
                message: format!("Seat {seat_id} released"),
                seat: Some(seat),
            }),
        ),
        Err(error) => error_response(error),
    }
}

fn error_response(error: BookingError) -> (Status, Json<SeatResponse>) {
    let message = match &error {
        BookingError::Store(cause) => {
            error!("document store failure: {cause}");
            "Internal server error".to_string()
        }
        _ => error.to_string(),
    };
    (
        error.status(),
        Json(SeatResponse {
            message,
            seat: None,
        }),
    )
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<SeatResponse> {
    Json(SeatResponse {
        message: format!("404: '{}' route not found", req.uri()),
        seat: None,
    })
}

#[catch(422)]
pub fn unprocessable_entity(_req: &Request) -> Json<SeatResponse> {
    Json(SeatResponse {
        message: "422: request body is missing required fields or has the wrong types"
            .to_string(),
        seat: None,
    })
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<SeatResponse> {
    Json(SeatResponse {
        message: "500: Internal Server Error".to_string(),
        seat: None,
    })
}
