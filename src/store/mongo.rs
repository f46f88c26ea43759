use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson};
use mongodb::options::{FindOptions, UpdateOptions};
use mongodb::{Client, Collection};

use crate::models::employee::Employee;
use crate::models::seat::{BookingDetails, Seat, SeatStatus};

use super::{EmployeeStore, SeatStore, StoreError};

pub struct MongoSeatStore {
    collection: Collection<Seat>,
}

impl MongoSeatStore {
    pub fn new(client: &Client, database: &str) -> Self {
        let collection = client.database(database).collection::<Seat>("seats");
        MongoSeatStore { collection }
    }
}

#[async_trait]
impl SeatStore for MongoSeatStore {
    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(None, None).await?)
    }

    async fn insert_many(&self, seats: Vec<Seat>) -> Result<(), StoreError> {
        self.collection.insert_many(seats, None).await?;
        Ok(())
    }

    async fn all_ordered(&self) -> Result<Vec<Seat>, StoreError> {
        let options = FindOptions::builder().sort(doc! { "seat_id": 1 }).build();
        let mut cursor = self.collection.find(None, options).await?;
        let mut seats = Vec::new();
        while let Some(seat) = cursor.try_next().await? {
            seats.push(seat);
        }
        Ok(seats)
    }

    async fn find_by_id(&self, seat_id: i32) -> Result<Option<Seat>, StoreError> {
        let filter = doc! { "seat_id": seat_id };
        Ok(self.collection.find_one(filter, None).await?)
    }

    async fn claim(
        &self,
        seat_id: i32,
        w3_id: &str,
        details: &BookingDetails,
    ) -> Result<bool, StoreError> {
        // the status guard in the filter keeps the check and the write a
        // single atomic operation
        let filter = doc! { "seat_id": seat_id, "status": SeatStatus::Available.as_str() };
        let update = doc! {
            "$set": {
                "status": SeatStatus::Occupied.as_str(),
                "booked_by": w3_id,
                "booking_details": {
                    "name": details.name.as_str(),
                    "date": details.date.as_str(),
                    "time_slot": details.time_slot.as_str(),
                },
            }
        };
        let result = self.collection.update_one(filter, update, None).await?;
        Ok(result.modified_count == 1)
    }

    async fn vacate(&self, seat_id: i32) -> Result<bool, StoreError> {
        let filter = doc! { "seat_id": seat_id, "status": SeatStatus::Occupied.as_str() };
        let update = doc! {
            "$set": {
                "status": SeatStatus::Available.as_str(),
                "booked_by": Bson::Null,
                "booking_details": Bson::Null,
            }
        };
        let result = self.collection.update_one(filter, update, None).await?;
        Ok(result.modified_count == 1)
    }
}

pub struct MongoEmployeeStore {
    collection: Collection<Employee>,
}

impl MongoEmployeeStore {
    pub fn new(client: &Client, database: &str) -> Self {
        let collection = client.database(database).collection::<Employee>("employees");
        MongoEmployeeStore { collection }
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn upsert_booking(
        &self,
        w3_id: &str,
        name: &str,
        seat_id: i32,
    ) -> Result<(), StoreError> {
        let filter = doc! { "w3_id": w3_id };
        let update = doc! {
            "$set": { "name": name },
            "$addToSet": { "seats_booked": seat_id },
        };
        let options = UpdateOptions::builder().upsert(true).build();
        self.collection.update_one(filter, update, options).await?;
        Ok(())
    }

    async fn find_by_w3_id(&self, w3_id: &str) -> Result<Option<Employee>, StoreError> {
        let filter = doc! { "w3_id": w3_id };
        Ok(self.collection.find_one(filter, None).await?)
    }
}
