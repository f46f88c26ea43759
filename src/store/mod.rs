use async_trait::async_trait;
use thiserror::Error;

use crate::models::employee::Employee;
use crate::models::seat::{BookingDetails, Seat};

pub mod memory;
pub mod mongo;

/// Failure raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unavailable: {0}")]
    Backend(#[from] mongodb::error::Error),
}

/// Typed access to the `seats` collection.
///
/// The only filters the system ever issues are single-field equality
/// lookups, so each query shape gets its own method instead of a generic
/// filter document. `claim` and `vacate` are conditional updates: their
/// filters include the required current status, and they report whether a
/// document was actually modified.
#[async_trait]
pub trait SeatStore: Send + Sync {
    /// Number of seat documents currently stored.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Inserts the given seats. Only startup seeding calls this.
    async fn insert_many(&self, seats: Vec<Seat>) -> Result<(), StoreError>;

    /// All seats ordered by ascending `seat_id`.
    async fn all_ordered(&self) -> Result<Vec<Seat>, StoreError>;

    async fn find_by_id(&self, seat_id: i32) -> Result<Option<Seat>, StoreError>;

    /// Marks the seat occupied iff it is currently available, attaching the
    /// booker and their details. Returns whether a seat was modified.
    async fn claim(
        &self,
        seat_id: i32,
        w3_id: &str,
        details: &BookingDetails,
    ) -> Result<bool, StoreError>;

    /// Marks the seat available again iff it is currently occupied,
    /// clearing both booking fields. Returns whether a seat was modified.
    async fn vacate(&self, seat_id: i32) -> Result<bool, StoreError>;
}

/// Typed access to the `employees` collection.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Update-or-insert the record for `w3_id`: refresh the name and add
    /// `seat_id` to `seats_booked` with set semantics (no duplicates).
    async fn upsert_booking(&self, w3_id: &str, name: &str, seat_id: i32)
        -> Result<(), StoreError>;

    async fn find_by_w3_id(&self, w3_id: &str) -> Result<Option<Employee>, StoreError>;
}
