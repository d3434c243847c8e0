use super::*;
use shared::models::{Customer, SaleStatus};

#[test]
fn test_commit_sale_records_and_links_to_day() {
    let mut snapshot = open_snapshot(vec![product(1, "Hammer", 10.0, 5)]);

    let sale = commit_sale(&mut snapshot, at(10, 0), items(&[(1, 3)])).unwrap();

    assert_eq!(sale.total, 30.0);
    assert_eq!(sale.status, SaleStatus::Completed);
    assert_eq!(sale.items.len(), 1);
    assert_eq!(sale.items[0].name, "Hammer");
    assert_eq!(sale.items[0].unit_price, 10.0);
    assert_eq!(sale.items[0].subtotal, 30.0);

    // Stock decremented, ledger appended, day updated
    assert_eq!(snapshot.products[0].stock, 2);
    assert_eq!(snapshot.sales.len(), 1);
    let day = find_open_day(&snapshot).unwrap();
    assert_eq!(day.sale_ids, vec![sale.id]);
    assert_eq!(day.total, 30.0);
}

#[test]
fn test_commit_sale_empty_items() {
    let mut snapshot = open_snapshot(vec![product(1, "Hammer", 10.0, 5)]);

    let err = commit_sale(&mut snapshot, at(10, 0), items(&[])).unwrap_err();
    assert_eq!(err.code(), "INVALID_ITEMS");
    assert!(snapshot.sales.is_empty());
}

#[test]
fn test_commit_sale_rejects_non_positive_quantity() {
    let mut snapshot = open_snapshot(vec![product(1, "Hammer", 10.0, 5)]);

    let err = commit_sale(&mut snapshot, at(10, 0), items(&[(1, 0)])).unwrap_err();
    assert_eq!(err.code(), "INVALID_ITEMS");
    let err = commit_sale(&mut snapshot, at(10, 0), items(&[(1, -2)])).unwrap_err();
    assert_eq!(err.code(), "INVALID_ITEMS");
    assert_eq!(snapshot.products[0].stock, 5);
}

#[test]
fn test_commit_sale_requires_open_day() {
    let mut snapshot = snapshot_with_products(vec![product(1, "Hammer", 10.0, 5)]);

    let err = commit_sale(&mut snapshot, at(10, 0), items(&[(1, 1)])).unwrap_err();
    assert!(matches!(err, SaleError::DayNotOpen));
    assert_eq!(err.code(), "DAY_NOT_OPEN");

    // No mutation of any kind
    assert_eq!(snapshot.products[0].stock, 5);
    assert!(snapshot.sales.is_empty());
    assert!(snapshot.days.is_empty());
}

#[test]
fn test_commit_sale_unknown_product_names_the_id() {
    let mut snapshot = open_snapshot(vec![product(1, "Hammer", 10.0, 5)]);

    let err = commit_sale(&mut snapshot, at(10, 0), items(&[(77, 1)])).unwrap_err();
    assert!(matches!(err, SaleError::ProductNotFound(77)));
    assert!(err.to_string().contains("77"));
    assert!(snapshot.sales.is_empty());
}

#[test]
fn test_commit_sale_insufficient_stock() {
    let mut snapshot = open_snapshot(vec![product(1, "Hammer", 10.0, 2)]);

    let err = commit_sale(&mut snapshot, at(10, 0), items(&[(1, 10)])).unwrap_err();
    match err {
        SaleError::InsufficientStock {
            ref name,
            available,
            requested,
        } => {
            assert_eq!(name, "Hammer");
            assert_eq!(available, 2);
            assert_eq!(requested, 10);
        }
        other => panic!("expected InsufficientStock, got {other:?}"),
    }

    assert_eq!(snapshot.products[0].stock, 2);
    assert!(snapshot.sales.is_empty());
}

#[test]
fn test_commit_sale_is_all_or_nothing() {
    // Second line fails: the first line must not have been applied
    let mut snapshot = open_snapshot(vec![
        product(1, "Hammer", 10.0, 5),
        product(2, "Drill", 45.5, 1),
    ]);

    let err = commit_sale(&mut snapshot, at(10, 0), items(&[(1, 3), (2, 2)])).unwrap_err();
    assert_eq!(err.code(), "INSUFFICIENT_STOCK");

    assert_eq!(snapshot.products[0].stock, 5);
    assert_eq!(snapshot.products[1].stock, 1);
    assert!(snapshot.sales.is_empty());
    assert!(find_open_day(&snapshot).unwrap().sale_ids.is_empty());
}

#[test]
fn test_commit_sale_leaves_other_products_alone() {
    let mut snapshot = open_snapshot(vec![
        product(1, "Hammer", 10.0, 5),
        product(2, "Drill", 45.5, 7),
    ]);

    commit_sale(&mut snapshot, at(10, 0), items(&[(1, 2)])).unwrap();

    assert_eq!(snapshot.products[0].stock, 3);
    assert_eq!(snapshot.products[1].stock, 7);
}

#[test]
fn test_commit_sale_duplicate_lines_validate_cumulatively() {
    let mut snapshot = open_snapshot(vec![product(1, "Hammer", 10.0, 5)]);

    // 3 + 3 exceeds the 5 on hand even though each line alone fits
    let err = commit_sale(&mut snapshot, at(10, 0), items(&[(1, 3), (1, 3)])).unwrap_err();
    assert_eq!(err.code(), "INSUFFICIENT_STOCK");
    assert_eq!(snapshot.products[0].stock, 5);

    let sale = commit_sale(&mut snapshot, at(10, 5), items(&[(1, 2), (1, 3)])).unwrap();
    assert_eq!(sale.total, 50.0);
    assert_eq!(snapshot.products[0].stock, 0);
}

#[test]
fn test_commit_sale_captures_catalog_values_at_commit_time() {
    let mut snapshot = open_snapshot(vec![product(1, "Hammer", 10.0, 5)]);
    let sale = commit_sale(&mut snapshot, at(10, 0), items(&[(1, 1)])).unwrap();

    // Later catalog changes never touch the recorded sale
    snapshot.products[0].price = 99.0;
    snapshot.products[0].name = "Sledgehammer".to_string();

    assert_eq!(snapshot.sales[0].id, sale.id);
    assert_eq!(snapshot.sales[0].items[0].unit_price, 10.0);
    assert_eq!(snapshot.sales[0].items[0].name, "Hammer");
}

#[test]
fn test_commit_sale_rounds_at_subtotal_and_total() {
    let mut snapshot = open_snapshot(vec![product(1, "Washer", 0.335, 100)]);

    let sale = commit_sale(&mut snapshot, at(10, 0), items(&[(1, 3)])).unwrap();
    assert_eq!(sale.items[0].subtotal, 1.01);
    assert_eq!(sale.total, 1.01);
}

#[test]
fn test_commit_sale_defaults_to_anonymous_customer() {
    let mut snapshot = open_snapshot(vec![product(1, "Hammer", 10.0, 5)]);

    let sale = commit_sale(&mut snapshot, at(10, 0), items(&[(1, 1)])).unwrap();
    assert_eq!(sale.customer.name, "Anonymous Customer");

    let named = SaleCreate {
        customer: Some(Customer {
            name: "Marta".to_string(),
            email: "marta@example.com".to_string(),
            phone: String::new(),
        }),
        ..items(&[(1, 1)])
    };
    let sale = commit_sale(&mut snapshot, at(10, 1), named).unwrap();
    assert_eq!(sale.customer.name, "Marta");
}

#[test]
fn test_sales_for_day_resolves_only_linked_sales() {
    let mut snapshot = open_snapshot(vec![product(1, "Hammer", 10.0, 99)]);
    commit_sale(&mut snapshot, at(10, 0), items(&[(1, 1)])).unwrap();
    close_day(&mut snapshot, at(18, 0)).unwrap();

    open_day(&mut snapshot, at(19, 0)).unwrap();
    commit_sale(&mut snapshot, at(19, 30), items(&[(1, 2)])).unwrap();

    let first = snapshot.days[0].clone();
    let resolved = sales_for_day(&snapshot, &first);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].total, 10.0);
}

#[test]
fn test_sales_stats() {
    assert_eq!(sales_stats(&[]).total_sales, 0);

    let mut snapshot = open_snapshot(vec![
        product(1, "Hammer", 10.0, 99),
        product(2, "Drill", 45.5, 99),
    ]);
    commit_sale(&mut snapshot, at(10, 0), items(&[(1, 3)])).unwrap();
    commit_sale(&mut snapshot, at(11, 0), items(&[(2, 1)])).unwrap();

    let stats = sales_stats(&snapshot.sales);
    assert_eq!(stats.total_sales, 2);
    assert_eq!(stats.total_amount, 75.5);
    assert_eq!(stats.average_sale, 37.75);
    assert_eq!(stats.largest_sale, 45.5);
    assert_eq!(stats.items_sold, 4);
}
