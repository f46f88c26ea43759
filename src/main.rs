#[macro_use]
extern crate rocket;

use std::sync::Arc;

use mongodb::Client;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use seatbook::config::AppConfig;
use seatbook::store::mongo::{MongoEmployeeStore, MongoSeatStore};

#[launch]
async fn rocket() -> _ {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let client = Client::with_uri_str(&config.mongo_uri)
        .await
        .expect("Failed to create the MongoDB client");
    info!("using MongoDB at {}", config.mongo_uri);

    let seats = Arc::new(MongoSeatStore::new(&client, &config.database));
    let employees = Arc::new(MongoEmployeeStore::new(&client, &config.database));

    seatbook::build(seats, employees)
}
