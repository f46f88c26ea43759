use serde::{Deserialize, Serialize};

/// Every seat costs the same flat rate; there is no pricing logic.
pub const DEFAULT_PRICE: i32 = 5;

/// One bookable seat document from the `seats` collection.
///
/// The booking fields are both present while the seat is occupied and both
/// absent while it is available; they are omitted from the JSON rendering
/// when absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Seat {
    pub seat_id: i32,
    pub status: SeatStatus,
    pub price: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_details: Option<BookingDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Occupied,
}

impl SeatStatus {
    /// The value stored in the `status` field, usable in query filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Occupied => "occupied",
        }
    }
}

/// Employee-supplied metadata attached to an occupied seat.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub name: String,
    pub date: String,
    pub time_slot: String,
}

impl Seat {
    pub fn available(seat_id: i32) -> Self {
        Seat {
            seat_id,
            status: SeatStatus::Available,
            price: DEFAULT_PRICE,
            booked_by: None,
            booking_details: None,
        }
    }
}
