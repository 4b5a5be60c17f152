//! Static sample data for demos and a freshly provisioned panel
//!
//! The sample catalog covers every drivetrain and body style the tables
//! render, and the sample orders cover every status so the filter widget
//! has something to show. One order references a car that is no longer
//! listed, which keeps the dangling-reference path honest.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::entities::car::{BodyType, Car, DriveType, EngineType, Transmission};
use crate::entities::order::{Order, OrderStatus};
use crate::storage::store::CatalogStore;

impl CatalogStore {
    /// A store pre-seeded with the sample catalog
    pub fn with_sample_data() -> Self {
        let cars = sample_cars();
        let orders = sample_orders(&cars);
        Self::from_records(cars, orders)
    }
}

struct CarSeed {
    brand: &'static str,
    model: &'static str,
    year: i32,
    transmission: Transmission,
    body_type: BodyType,
    engine_type: EngineType,
    drive_type: DriveType,
    horsepower: u32,
    acceleration: f64,
    engine_volume: f64,
    age_days: i64,
}

const CAR_SEEDS: &[CarSeed] = &[
    CarSeed {
        brand: "Tesla",
        model: "Model 3",
        year: 2024,
        transmission: Transmission::Automatic,
        body_type: BodyType::Liftback,
        engine_type: EngineType::Electric,
        drive_type: DriveType::Rear,
        horsepower: 283,
        acceleration: 6.1,
        engine_volume: 0.0,
        age_days: 2,
    },
    CarSeed {
        brand: "BMW",
        model: "X5",
        year: 2021,
        transmission: Transmission::Automatic,
        body_type: BodyType::Suv,
        engine_type: EngineType::Diesel,
        drive_type: DriveType::All,
        horsepower: 286,
        acceleration: 6.5,
        engine_volume: 3.0,
        age_days: 6,
    },
    CarSeed {
        brand: "Toyota",
        model: "Camry",
        year: 2022,
        transmission: Transmission::Automatic,
        body_type: BodyType::Sedan,
        engine_type: EngineType::Petrol,
        drive_type: DriveType::Front,
        horsepower: 249,
        acceleration: 7.8,
        engine_volume: 3.5,
        age_days: 11,
    },
    CarSeed {
        brand: "Lada",
        model: "Vesta SW",
        year: 2023,
        transmission: Transmission::Manual,
        body_type: BodyType::Wagon,
        engine_type: EngineType::Petrol,
        drive_type: DriveType::Front,
        horsepower: 106,
        acceleration: 12.1,
        engine_volume: 1.6,
        age_days: 19,
    },
    CarSeed {
        brand: "Kia",
        model: "Rio",
        year: 2020,
        transmission: Transmission::Robot,
        body_type: BodyType::Hatchback,
        engine_type: EngineType::Petrol,
        drive_type: DriveType::Front,
        horsepower: 123,
        acceleration: 11.2,
        engine_volume: 1.6,
        age_days: 27,
    },
];

fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

/// Sample listings, newest first
pub fn sample_cars() -> Vec<Car> {
    CAR_SEEDS
        .iter()
        .map(|seed| Car {
            id: Uuid::new_v4(),
            brand: seed.brand.to_string(),
            model: seed.model.to_string(),
            year: seed.year,
            transmission: seed.transmission,
            body_type: seed.body_type,
            engine_type: seed.engine_type,
            drive_type: seed.drive_type,
            horsepower: seed.horsepower,
            acceleration: seed.acceleration,
            engine_volume: seed.engine_volume,
            image_url: None,
            description: None,
            created_at: days_ago(seed.age_days),
        })
        .collect()
}

/// Sample inquiries against the given listings, newest first.
///
/// Covers every status once; the last entry points at a car that was
/// deleted from the catalog and only survives as its snapshot.
pub fn sample_orders(cars: &[Car]) -> Vec<Order> {
    let statuses = [
        OrderStatus::Created,
        OrderStatus::Reviewing,
        OrderStatus::InTransit,
        OrderStatus::Cancelled,
        OrderStatus::Completed,
    ];
    let phones = [
        "+79161234567",
        "+79035557788",
        "+79219876543",
        "+79670012233",
        "+79851119900",
    ];

    let mut orders: Vec<Order> = statuses
        .iter()
        .zip(phones)
        .zip(cars.iter().cycle())
        .enumerate()
        .map(|(i, ((status, phone), car))| {
            Order {
                id: Uuid::new_v4(),
                phone_number: phone.to_string(),
                car_id: car.id,
                car_brand: car.brand.clone(),
                car_model: car.model.clone(),
                created_at: days_ago(i as i64 + 1),
                status: *status,
            }
        })
        .collect();

    // Inquiry for a delisted car: the id no longer resolves
    orders.push(Order {
        id: Uuid::new_v4(),
        phone_number: "+79262224455".to_string(),
        car_id: Uuid::new_v4(),
        car_brand: "Audi".to_string(),
        car_model: "A4".to_string(),
        created_at: days_ago(30),
        status: OrderStatus::Cancelled,
    });

    orders
}
