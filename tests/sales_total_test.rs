//! Aggregation properties over JSON-shaped sale records.

use duck_tails::{SaleRecord, SalesError, SalesTotal, calculate_sales_total};
use serde_json::json;

fn records(raw: serde_json::Value) -> Vec<SaleRecord> {
    serde_json::from_value(raw).expect("test input must be an array of objects")
}

#[test]
fn sums_integer_amounts_exactly() {
    let sales = records(json!([
        {"amount": 5}, {"amount": 5}, {"amount": 5}
    ]));
    assert_eq!(
        calculate_sales_total(&sales).unwrap(),
        SalesTotal::Integer(15)
    );
}

#[test]
fn mixed_amounts_widen_to_float() {
    let sales = records(json!([{"amount": 10}, {"amount": 20.5}]));
    assert_eq!(
        calculate_sales_total(&sales).unwrap(),
        SalesTotal::Float(30.5)
    );
}

#[test]
fn empty_input_is_integer_zero() {
    assert_eq!(calculate_sales_total(&[]).unwrap(), SalesTotal::Integer(0));
}

#[test]
fn record_order_does_not_change_the_total() {
    let forward = records(json!([{"amount": 1}, {"amount": 2.25}, {"amount": 3}]));
    let backward = records(json!([{"amount": 3}, {"amount": 2.25}, {"amount": 1}]));
    assert_eq!(
        calculate_sales_total(&forward).unwrap(),
        calculate_sales_total(&backward).unwrap()
    );
}

#[test]
fn missing_amount_reports_record_index() {
    let sales = records(json!([{"amount": 1}, {"no_amount": 1}]));
    match calculate_sales_total(&sales) {
        Err(SalesError::MissingAmount { index }) => assert_eq!(index, 1),
        other => panic!("expected MissingAmount, got {other:?}"),
    }
}

#[test]
fn extra_fields_are_ignored() {
    let sales = records(json!([
        {"amount": 7, "customer": "mallard", "region": "pond"}
    ]));
    assert_eq!(
        calculate_sales_total(&sales).unwrap(),
        SalesTotal::Integer(7)
    );
}

#[test]
fn input_is_left_untouched() {
    let sales = records(json!([{"amount": 4}, {"amount": 6}]));
    let before = sales.clone();
    calculate_sales_total(&sales).unwrap();
    assert_eq!(sales, before);
}
