//! Walks one command/query cycle per admin-panel tab against sample data.
//!
//! Run with logging to watch the store narrate mutations:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example admin_overview
//! ```

use automir::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = CatalogStore::with_sample_data();

    // --- Overview tab ---
    let cars = store.cars()?;
    let orders = store.orders()?;
    let stats = catalog_stats(&cars, &orders);
    println!(
        "overview: {} cars, {} orders ({} pending, {} completed)",
        stats.cars, stats.orders.total, stats.orders.pending, stats.orders.completed
    );
    for car in recent(&cars, 3) {
        println!("  recently added: {} {} ({})", car.brand, car.model, car.year);
    }

    // --- Cars tab: add, edit, delete ---
    let form = CarInput {
        brand: "Volvo".to_string(),
        model: "XC60".to_string(),
        year: 2023,
        transmission: "automatic".to_string(),
        body_type: "suv".to_string(),
        engine_type: "diesel".to_string(),
        drive_type: "all".to_string(),
        horsepower: 249,
        acceleration: 7.1,
        engine_volume: 2.0,
        image_url: None,
        description: Some("Demo listing".to_string()),
    };
    let CommandOutcome::Car(volvo) = store.execute(Command::AddCar { input: form.clone() })?
    else {
        unreachable!("add_car returns the stored record");
    };
    println!("added {} {} as {}", volvo.brand, volvo.model, volvo.id);

    let mut edit = form;
    edit.horsepower = 310;
    store.execute(Command::UpdateCar {
        id: volvo.id,
        input: edit,
    })?;
    store.execute(Command::DeleteCar { id: volvo.id })?;

    // --- Orders tab: status change, then the filtered and sorted table ---
    let first = store.orders()?[0].clone();
    store.execute(Command::SetOrderStatus {
        id: first.id,
        status: "reviewing".to_string(),
    })?;

    let filter: StatusFilter = "reviewing".parse()?;
    let table = sort_orders_by_date(
        filter_orders_by_status(&store.orders()?, filter),
        SortDirection::Desc,
    );
    println!("orders in review:");
    let cars = store.cars()?;
    for order in &table {
        // A dangling car reference renders from the snapshot alone
        let details = match find_car_by_id(&cars, order.car_id) {
            Some(car) => format!("{} hp, {}", car.horsepower, car.body_type),
            None => "listing removed".to_string(),
        };
        println!(
            "  {} {} / {} ({})",
            order.car_brand, order.car_model, order.phone_number, details
        );
    }

    Ok(())
}
