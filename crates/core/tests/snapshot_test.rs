//! Integration tests building every view from a JSON movement snapshot.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use ledgerview_core::aggregate::PeriodSummary;
use ledgerview_core::view::GRID_CELLS;
use ledgerview_core::{
    Granularity, Movement, MovementAggregator, ViewModel, ViewModelBuilder, ViewRequest,
};

const SNAPSHOT: &str = r#"[
    {"_id": "a1", "fecha": "2024-03-04", "tipo": "ingreso", "monto": 1000, "concepto": "Flete Córdoba", "categoria": "fletes"},
    {"_id": "a2", "fecha": "2024-03-10", "tipo": "egreso", "monto": "400", "concepto": "Combustible", "categoria": "combustible"},
    {"id": "a3", "date": "2024-03-16T02:30:00Z", "type": "expense", "amount": 75.5, "concept": "Peaje"},
    {"id": "a4", "createdAt": 1709251200000, "type": "income", "amount": 20},
    {"id": "a5", "date": "not-a-date", "type": "income", "amount": 99999},
    {"id": "a6", "date": "2024-03-20", "type": "adjustment", "amount": 123},
    {"id": "a7", "date": "2024-12-31T23:59:59", "type": "income", "amount": 1}
]"#;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn movements() -> Vec<Movement> {
    serde_json::from_str(SNAPSHOT).unwrap()
}

fn builder() -> ViewModelBuilder {
    ViewModelBuilder::new(MovementAggregator::new(
        chrono_tz::America::Argentina::Buenos_Aires,
    ))
}

fn request(reference: NaiveDate, granularity: Granularity) -> ViewRequest {
    ViewRequest::new(reference, granularity, ymd(2024, 3, 7))
}

#[test]
fn test_snapshot_weekly_view() {
    let movements = movements();
    let view = builder().build(&movements, &request(ymd(2024, 3, 7), Granularity::Week));

    let ViewModel::Weekly(week) = view else {
        panic!("expected weekly view");
    };
    assert_eq!(week.summary, PeriodSummary::new(dec!(1000), dec!(400)));
}

#[test]
fn test_snapshot_timestamp_lands_on_local_day() {
    let movements = movements();
    let view = builder().build(&movements, &request(ymd(2024, 3, 15), Granularity::Day));

    let ViewModel::Daily(day) = view else {
        panic!("expected daily view");
    };
    let ids: Vec<&str> = day.movements.iter().map(|m| m.id.0.as_str()).collect();
    assert_eq!(ids, vec!["a3"]);
    assert_eq!(day.summary.expense, dec!(75.5));
}

#[test]
fn test_snapshot_monthly_grid() {
    let movements = movements();
    let view = builder().build(&movements, &request(ymd(2024, 3, 1), Granularity::Month));

    let ViewModel::Monthly(month) = view else {
        panic!("expected monthly view");
    };
    assert_eq!(month.cells.len(), GRID_CELLS);

    // 1709251200000 ms is 2024-03-01T00:00:00Z, still Feb 29 in Buenos Aires.
    let feb_29 = month.cells.iter().find(|c| c.date == ymd(2024, 2, 29)).unwrap();
    assert_eq!(feb_29.count, 1);
    assert_eq!(feb_29.summary.income, dec!(20));
    assert!(!feb_29.belongs_to_current_month);

    // Unknown types are counted on their day but contribute nothing.
    let mar_20 = month.cells.iter().find(|c| c.date == ymd(2024, 3, 20)).unwrap();
    assert_eq!(mar_20.count, 1);
    assert!(mar_20.summary.is_zero());

    assert_eq!(month.summary, PeriodSummary::new(dec!(1000), dec!(475.5)));
    assert!(month.cells.iter().any(|c| c.is_today && c.date == ymd(2024, 3, 7)));
}

#[test]
fn test_snapshot_annual_view() {
    let movements = movements();
    let view = builder().build(&movements, &request(ymd(2024, 7, 1), Granularity::Year));

    let ViewModel::Annual(year) = view else {
        panic!("expected annual view");
    };
    assert_eq!(year.months[1].summary.income, dec!(20));
    assert_eq!(year.months[2].summary, PeriodSummary::new(dec!(1000), dec!(475.5)));
    assert_eq!(year.months[11].summary.income, dec!(1));
    assert_eq!(year.summary, PeriodSummary::new(dec!(1021), dec!(475.5)));
}

#[test]
fn test_snapshot_is_not_mutated() {
    let movements = movements();
    let before = movements.clone();
    let builder = builder();
    for granularity in Granularity::ALL {
        let _ = builder.build(&movements, &request(ymd(2024, 3, 7), granularity));
    }
    assert_eq!(movements, before);
}

#[test]
fn test_malformed_date_shapes_exclude_only_their_movement() {
    let json = r#"[
        {"id": "ok", "date": "2024-03-04", "type": "income", "amount": 1000},
        {"id": "mongo", "date": {"$date": "2024-03-04T00:00:00Z"}, "type": "income", "amount": 7},
        {"id": "float", "date": 1709251200000.5, "type": "expense", "amount": 3},
        {"id": "flag", "fecha": true, "tipo": "egreso", "monto": 5}
    ]"#;

    let movements: Vec<Movement> = serde_json::from_str(json).unwrap();
    assert_eq!(movements.len(), 4);

    let index = MovementAggregator::default().index(&movements);
    assert_eq!(index.len(), 1);
    assert_eq!(index.skipped(), 3);

    let view = builder().build(&movements, &request(ymd(2024, 3, 1), Granularity::Year));
    assert_eq!(view.summary(), &PeriodSummary::new(dec!(1000), dec!(0)));
}
