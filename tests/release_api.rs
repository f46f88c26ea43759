mod common;

use rocket::http::Status;
use seatbook::store::{EmployeeStore, SeatStore};
use seatbook::SeatStatus;
use serde_json::json;

fn payload(seat_id: i32) -> serde_json::Value {
    json!({
        "seat_id": seat_id,
        "w3_id": "tester@example.com",
        "name": "Tester",
        "date": "2026-01-31",
        "time_slot": "10:00-12:00",
    })
}

#[rocket::async_test]
async fn releasing_an_occupied_seat_frees_it() {
    let app = common::spawn().await;
    app.client.post("/book").json(&payload(1)).dispatch().await;

    let response = app.client.post("/release/1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    // raw JSON: the booking fields must disappear, not turn null
    let body: serde_json::Value = response.into_json().await.expect("release response");
    assert!(body["message"]
        .as_str()
        .expect("message")
        .contains("Seat 1 released"));
    let seat = &body["seat"];
    assert_eq!(seat["status"], "available");
    assert!(seat.get("booked_by").is_none());
    assert!(seat.get("booking_details").is_none());

    let stored = app.seats.find_by_id(1).await.unwrap().expect("seat 1");
    assert_eq!(stored.status, SeatStatus::Available);
}

#[rocket::async_test]
async fn releasing_an_available_seat_is_a_conflict() {
    let app = common::spawn().await;

    let response = app.client.post("/release/2").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn releasing_an_unknown_seat_returns_not_found() {
    let app = common::spawn().await;

    let response = app.client.post("/release/9999").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn releasing_does_not_shrink_employee_history() {
    let app = common::spawn().await;
    app.client.post("/book").json(&payload(1)).dispatch().await;
    app.client.post("/release/1").dispatch().await;

    let employee = app
        .employees
        .find_by_w3_id("tester@example.com")
        .await
        .unwrap()
        .expect("employee record");
    assert_eq!(employee.seats_booked, vec![1]);
}

#[rocket::async_test]
async fn book_rebook_release_round_trip() {
    let app = common::spawn().await;

    let response = app.client.post("/book").json(&payload(1)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: serde_json::Value = response.into_json().await.unwrap();
    assert_eq!(body["seat"]["status"], "occupied");

    let response = app.client.post("/book").json(&payload(1)).dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);

    let response = app.client.post("/release/1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: serde_json::Value = response.into_json().await.unwrap();
    assert_eq!(body["seat"]["status"], "available");
    assert!(body["seat"].get("booked_by").is_none());
}
