//! End-to-end ledger scenarios: admissions, releases, and the bills they produce.

use chrono::{DateTime, Duration, TimeZone, Utc};
use lot_core::{ParkingLedger, Tariff};
use pretty_assertions::assert_eq;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

#[test]
fn alice_then_bob_bills_alice_first() {
    let tariff = Tariff::default();
    let mut ledger = ParkingLedger::new();

    assert_eq!(ledger.admit("Alice", "KA01AB1234", t0()), 1);
    assert_eq!(
        ledger.admit("Bob", "KA02CD5678", t0() + Duration::seconds(10)),
        2
    );

    let bill = ledger
        .release(t0() + Duration::seconds(3600), &tariff)
        .expect("Alice is parked");
    assert_eq!(bill.space_id, 1);
    assert_eq!(bill.plate_number, "KA01AB1234");
    assert_eq!(format!("{:.2}", bill.hours()), "1.00");
    assert_eq!(format!("{:.2} {}", bill.fee, bill.currency), "10.00 INR");

    let remaining = ledger
        .records()
        .map(|r| (r.space_id, r.owner_name.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(remaining, vec![(2, "Bob")]);
}

#[test]
fn releases_drain_in_arrival_order() {
    let tariff = Tariff::default();
    let mut ledger = ParkingLedger::new();
    for (i, plate) in ["P1", "P2", "P3", "P4"].iter().enumerate() {
        let minutes = i64::try_from(i).expect("small index") * 5;
        ledger.admit("owner", *plate, t0() + Duration::minutes(minutes));
    }

    let released = std::iter::from_fn(|| ledger.release(t0() + Duration::hours(2), &tariff))
        .map(|bill| bill.plate_number)
        .collect::<Vec<_>>();

    assert_eq!(released, vec!["P1", "P2", "P3", "P4"]);
    assert!(ledger.is_empty());
    assert!(ledger.release(t0() + Duration::hours(3), &tariff).is_none());
}

#[test]
fn immediate_release_charges_minimum() {
    let tariff = Tariff::default();
    let mut ledger = ParkingLedger::new();
    ledger.admit("Carol", "MH12XY0001", t0());

    let bill = ledger.release(t0(), &tariff).expect("Carol is parked");
    assert_eq!(format!("{:.2}", bill.fee), "5.00");
    assert!(ledger.is_empty());
}
