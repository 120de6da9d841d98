//! Text rendering for the lot status, admissions, and bills.

use chrono::{DateTime, Local, Utc};
use lot_core::timefmt::ctime;
use lot_core::{Bill, ParkingLedger};

const RULE: &str = "_________________________________";

/// Which clock face timestamps are shown on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeDisplay {
    Local,
    Utc,
}

impl TimeDisplay {
    #[must_use]
    pub const fn from_utc_flag(utc: bool) -> Self {
        if utc { Self::Utc } else { Self::Local }
    }

    #[must_use]
    pub fn render(self, at: &DateTime<Utc>) -> String {
        match self {
            Self::Local => ctime(&at.with_timezone(&Local)),
            Self::Utc => ctime(at),
        }
    }
}

/// The "Display Parking Lot" listing, oldest arrival first.
#[must_use]
pub fn render_status(ledger: &ParkingLedger, time: TimeDisplay) -> String {
    let mut out = String::from("Parking Lot Status:\n");

    if ledger.is_empty() {
        out.push_str("No cars parked\n");
        return out;
    }

    for record in ledger.records() {
        out.push_str(&format!(
            "Space {id}: Occupied\n   Owner Name: {owner}\n   Car Number: {plate}\n   Time of Parking: {parked}\n",
            id = record.space_id,
            owner = record.owner_name,
            plate = record.plate_number,
            parked = time.render(&record.parked_at),
        ));
    }
    out
}

#[must_use]
pub fn render_parked(space_id: u32) -> String {
    format!("Car parked at Space {space_id}\n")
}

#[must_use]
pub fn render_bill(bill: &Bill, time: TimeDisplay) -> String {
    format!(
        "\n{RULE}\n\
         \nBilling Details:\n\
         Owner Name: {owner}\n\
         Car Number: {plate}\n\
         Time of Parking: {parked}\n\
         Leaving Time: {left}\n\
         Parking Duration: {hours:.2} hours\n\
         Parking Fee: {fee:.2} {currency}\n\
         \n{RULE}\n",
        owner = bill.owner_name,
        plate = bill.plate_number,
        parked = time.render(&bill.parked_at),
        left = time.render(&bill.left_at),
        hours = bill.hours(),
        fee = bill.fee,
        currency = bill.currency,
    )
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use lot_core::Tariff;
    use pretty_assertions::assert_eq;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn empty_lot_reports_no_cars() {
        let ledger = ParkingLedger::new();
        assert_eq!(
            render_status(&ledger, TimeDisplay::Utc),
            "Parking Lot Status:\nNo cars parked\n"
        );
    }

    #[test]
    fn lists_each_space_in_arrival_order() {
        let mut ledger = ParkingLedger::new();
        ledger.admit("Alice", "KA01AB1234", t0());
        ledger.admit("Bob", "KA02CD5678", t0() + Duration::seconds(10));

        let expected = "\
Parking Lot Status:
Space 1: Occupied
   Owner Name: Alice
   Car Number: KA01AB1234
   Time of Parking: Fri Mar  1 09:00:00 2024
Space 2: Occupied
   Owner Name: Bob
   Car Number: KA02CD5678
   Time of Parking: Fri Mar  1 09:00:10 2024
";
        assert_eq!(render_status(&ledger, TimeDisplay::Utc), expected);
        // listing twice renders the same text
        assert_eq!(render_status(&ledger, TimeDisplay::Utc), expected);
    }

    #[test]
    fn bill_layout_matches_receipt() {
        let mut ledger = ParkingLedger::new();
        ledger.admit("Alice", "KA01AB1234", t0());
        let bill = ledger
            .release(t0() + Duration::seconds(5400), &Tariff::default())
            .expect("a car is parked");

        let expected = "
_________________________________

Billing Details:
Owner Name: Alice
Car Number: KA01AB1234
Time of Parking: Fri Mar  1 09:00:00 2024
Leaving Time: Fri Mar  1 10:30:00 2024
Parking Duration: 1.50 hours
Parking Fee: 15.00 INR

_________________________________
";
        assert_eq!(render_bill(&bill, TimeDisplay::Utc), expected);
    }

    #[test]
    fn parked_confirmation() {
        assert_eq!(render_parked(7), "Car parked at Space 7\n");
    }

    #[test]
    fn utc_flag_selects_face() {
        assert_eq!(TimeDisplay::from_utc_flag(true), TimeDisplay::Utc);
        assert_eq!(TimeDisplay::from_utc_flag(false), TimeDisplay::Local);
    }
}
