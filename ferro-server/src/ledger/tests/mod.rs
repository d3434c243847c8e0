use chrono::TimeZone;
use chrono_tz::Tz;

use super::*;
use crate::db::Snapshot;
use shared::models::{Product, SaleCreate, SaleItemInput, ScheduleConfig};

mod test_day;
mod test_sale;

const TZ: Tz = chrono_tz::UTC;

/// Fixed wall clock for deterministic window checks
fn at(hour: u32, min: u32) -> chrono::DateTime<Tz> {
    TZ.with_ymd_and_hms(2025, 3, 10, hour, min, 0).unwrap()
}

fn at_hms(hour: u32, min: u32, sec: u32) -> chrono::DateTime<Tz> {
    TZ.with_ymd_and_hms(2025, 3, 10, hour, min, sec).unwrap()
}

fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: String::new(),
        category: "Tools".to_string(),
        stock,
        price,
        image: String::new(),
        created_at: 0,
    }
}

fn snapshot_with_products(products: Vec<Product>) -> Snapshot {
    Snapshot {
        products,
        ..Default::default()
    }
}

fn controlled_schedule() -> ScheduleConfig {
    ScheduleConfig {
        control_enabled: true,
        earliest_open: "08:00".to_string(),
        latest_open: "08:30".to_string(),
        earliest_close: "17:00".to_string(),
    }
}

/// Snapshot with the given products and a day already open (control off)
fn open_snapshot(products: Vec<Product>) -> Snapshot {
    let mut snapshot = snapshot_with_products(products);
    open_day(&mut snapshot, at(12, 0)).expect("open_day should succeed without control");
    snapshot
}

fn items(entries: &[(i64, i64)]) -> SaleCreate {
    SaleCreate {
        items: entries
            .iter()
            .map(|&(product_id, quantity)| SaleItemInput {
                product_id,
                quantity,
            })
            .collect(),
        customer: None,
    }
}

fn open_day_count(snapshot: &Snapshot) -> usize {
    snapshot.days.iter().filter(|d| d.is_open()).count()
}
