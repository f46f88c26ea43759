use std::sync::Arc;

use crate::error::BookingError;
use crate::models::employee::Employee;
use crate::store::EmployeeStore;

/// Records which seats an employee has booked over time. Created lazily on
/// first booking; never consulted by the seat transitions themselves.
pub struct EmployeeRepository {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeRepository {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        EmployeeRepository { store }
    }

    /// Remembers that `w3_id` booked `seat_id`, refreshing the stored
    /// name. The seat set never shrinks, not even on release.
    pub async fn record_booking(
        &self,
        w3_id: &str,
        name: &str,
        seat_id: i32,
    ) -> Result<(), BookingError> {
        Ok(self.store.upsert_booking(w3_id, name, seat_id).await?)
    }

    pub async fn find_by_w3_id(&self, w3_id: &str) -> Result<Option<Employee>, BookingError> {
        Ok(self.store.find_by_w3_id(w3_id).await?)
    }
}
