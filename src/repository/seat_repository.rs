use std::sync::Arc;

use crate::error::BookingError;
use crate::models::seat::{BookingDetails, Seat, SeatStatus};
use crate::store::SeatStore;

/// Size of the fixed seat inventory created on first startup.
pub const TOTAL_SEATS: i32 = 100;

/// Owns the seat lifecycle: seeding plus the available ⇄ occupied
/// transitions. The only state machine in the system.
pub struct SeatRepository {
    store: Arc<dyn SeatStore>,
}

impl SeatRepository {
    pub fn new(store: Arc<dyn SeatStore>) -> Self {
        SeatRepository { store }
    }

    /// One-time bootstrap: fills an empty store with seats 1..=100, all
    /// available at the default price. Returns how many seats were
    /// inserted, which is zero whenever the inventory already exists.
    pub async fn seed_if_empty(&self) -> Result<u64, BookingError> {
        if self.store.count().await? > 0 {
            return Ok(0);
        }
        let seats = (1..=TOTAL_SEATS).map(Seat::available).collect();
        self.store.insert_many(seats).await?;
        Ok(TOTAL_SEATS as u64)
    }

    pub async fn list(&self) -> Result<Vec<Seat>, BookingError> {
        Ok(self.store.all_ordered().await?)
    }

    /// Books `seat_id` for `w3_id`. The claim is conditional on the seat
    /// still being available, so of two racing requests exactly one wins
    /// and the other gets `AlreadyBooked`.
    pub async fn book(
        &self,
        seat_id: i32,
        w3_id: &str,
        details: BookingDetails,
    ) -> Result<Seat, BookingError> {
        let seat = self
            .store
            .find_by_id(seat_id)
            .await?
            .ok_or(BookingError::SeatNotFound(seat_id))?;
        if seat.status == SeatStatus::Occupied {
            return Err(BookingError::AlreadyBooked(seat_id));
        }
        if !self.store.claim(seat_id, w3_id, &details).await? {
            // lost the race between the status check and the update
            return Err(BookingError::AlreadyBooked(seat_id));
        }
        self.store
            .find_by_id(seat_id)
            .await?
            .ok_or(BookingError::SeatNotFound(seat_id))
    }

    /// Releases a booked seat. Releasing a seat that is already available
    /// is a conflict, not a no-op. The employee's booking history is
    /// intentionally left untouched.
    pub async fn release(&self, seat_id: i32) -> Result<Seat, BookingError> {
        let seat = self
            .store
            .find_by_id(seat_id)
            .await?
            .ok_or(BookingError::SeatNotFound(seat_id))?;
        if seat.status == SeatStatus::Available {
            return Err(BookingError::NotBooked(seat_id));
        }
        if !self.store.vacate(seat_id).await? {
            return Err(BookingError::NotBooked(seat_id));
        }
        self.store
            .find_by_id(seat_id)
            .await?
            .ok_or(BookingError::SeatNotFound(seat_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seat::DEFAULT_PRICE;
    use crate::store::memory::MemorySeatStore;

    fn repo() -> SeatRepository {
        SeatRepository::new(Arc::new(MemorySeatStore::default()))
    }

    fn details() -> BookingDetails {
        BookingDetails {
            name: "Tester".to_string(),
            date: "2026-01-31".to_string(),
            time_slot: "10:00-12:00".to_string(),
        }
    }

    #[tokio::test]
    async fn seeding_fills_an_empty_store_once() {
        let repo = repo();
        assert_eq!(repo.seed_if_empty().await.unwrap(), 100);
        assert_eq!(repo.seed_if_empty().await.unwrap(), 0);

        let seats = repo.list().await.unwrap();
        assert_eq!(seats.len(), 100);
        assert_eq!(seats.first().unwrap().seat_id, 1);
        assert_eq!(seats.last().unwrap().seat_id, 100);
        assert!(seats
            .iter()
            .all(|seat| seat.status == SeatStatus::Available && seat.price == DEFAULT_PRICE));
    }

    #[tokio::test]
    async fn booking_transitions_the_seat_to_occupied() {
        let repo = repo();
        repo.seed_if_empty().await.unwrap();

        let seat = repo.book(1, "tester@example.com", details()).await.unwrap();
        assert_eq!(seat.status, SeatStatus::Occupied);
        assert_eq!(seat.booked_by.as_deref(), Some("tester@example.com"));
        assert_eq!(seat.booking_details.unwrap(), details());
    }

    #[tokio::test]
    async fn booking_an_occupied_seat_fails() {
        let repo = repo();
        repo.seed_if_empty().await.unwrap();
        repo.book(1, "first@example.com", details()).await.unwrap();

        let error = repo.book(1, "second@example.com", details()).await.unwrap_err();
        assert!(matches!(error, BookingError::AlreadyBooked(1)));
    }

    #[tokio::test]
    async fn booking_an_unknown_seat_fails() {
        let repo = repo();
        repo.seed_if_empty().await.unwrap();

        let error = repo.book(9999, "tester@example.com", details()).await.unwrap_err();
        assert!(matches!(error, BookingError::SeatNotFound(9999)));
    }

    #[tokio::test]
    async fn releasing_restores_the_seat() {
        let repo = repo();
        repo.seed_if_empty().await.unwrap();
        repo.book(1, "tester@example.com", details()).await.unwrap();

        let seat = repo.release(1).await.unwrap();
        assert_eq!(seat.status, SeatStatus::Available);
        assert!(seat.booked_by.is_none());
        assert!(seat.booking_details.is_none());
    }

    #[tokio::test]
    async fn releasing_an_available_seat_fails() {
        let repo = repo();
        repo.seed_if_empty().await.unwrap();

        let error = repo.release(1).await.unwrap_err();
        assert!(matches!(error, BookingError::NotBooked(1)));
    }

    #[tokio::test]
    async fn releasing_an_unknown_seat_fails() {
        let repo = repo();
        repo.seed_if_empty().await.unwrap();

        let error = repo.release(9999).await.unwrap_err();
        assert!(matches!(error, BookingError::SeatNotFound(9999)));
    }
}
