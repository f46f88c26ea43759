use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::employee::Employee;
use crate::models::seat::{BookingDetails, Seat, SeatStatus};

use super::{EmployeeStore, SeatStore, StoreError};

/// Seat storage backed by a plain vector, mirroring the MongoDB backend
/// operation for operation. The test suite runs on this; it also allows
/// poking at the API locally without a MongoDB instance.
#[derive(Debug, Default)]
pub struct MemorySeatStore {
    seats: RwLock<Vec<Seat>>,
}

#[async_trait]
impl SeatStore for MemorySeatStore {
    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.seats.read().await.len() as u64)
    }

    async fn insert_many(&self, seats: Vec<Seat>) -> Result<(), StoreError> {
        self.seats.write().await.extend(seats);
        Ok(())
    }

    async fn all_ordered(&self) -> Result<Vec<Seat>, StoreError> {
        let mut seats = self.seats.read().await.clone();
        seats.sort_by_key(|seat| seat.seat_id);
        Ok(seats)
    }

    async fn find_by_id(&self, seat_id: i32) -> Result<Option<Seat>, StoreError> {
        let seats = self.seats.read().await;
        Ok(seats.iter().find(|seat| seat.seat_id == seat_id).cloned())
    }

    async fn claim(
        &self,
        seat_id: i32,
        w3_id: &str,
        details: &BookingDetails,
    ) -> Result<bool, StoreError> {
        let mut seats = self.seats.write().await;
        match seats
            .iter_mut()
            .find(|seat| seat.seat_id == seat_id && seat.status == SeatStatus::Available)
        {
            Some(seat) => {
                seat.status = SeatStatus::Occupied;
                seat.booked_by = Some(w3_id.to_owned());
                seat.booking_details = Some(details.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn vacate(&self, seat_id: i32) -> Result<bool, StoreError> {
        let mut seats = self.seats.write().await;
        match seats
            .iter_mut()
            .find(|seat| seat.seat_id == seat_id && seat.status == SeatStatus::Occupied)
        {
            Some(seat) => {
                seat.status = SeatStatus::Available;
                seat.booked_by = None;
                seat.booking_details = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryEmployeeStore {
    employees: RwLock<Vec<Employee>>,
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn upsert_booking(
        &self,
        w3_id: &str,
        name: &str,
        seat_id: i32,
    ) -> Result<(), StoreError> {
        let mut employees = self.employees.write().await;
        match employees.iter_mut().find(|employee| employee.w3_id == w3_id) {
            Some(employee) => {
                employee.name = name.to_owned();
                if !employee.seats_booked.contains(&seat_id) {
                    employee.seats_booked.push(seat_id);
                }
            }
            None => employees.push(Employee {
                w3_id: w3_id.to_owned(),
                name: name.to_owned(),
                seats_booked: vec![seat_id],
            }),
        }
        Ok(())
    }

    async fn find_by_w3_id(&self, w3_id: &str) -> Result<Option<Employee>, StoreError> {
        let employees = self.employees.read().await;
        Ok(employees
            .iter()
            .find(|employee| employee.w3_id == w3_id)
            .cloned())
    }
}
