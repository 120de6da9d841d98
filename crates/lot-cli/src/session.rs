//! The interactive menu loop.
//!
//! One operator, one terminal: each choice is read, dispatched, and finished
//! before the next menu is printed. The session owns the ledger; nothing
//! survives once it is dropped.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, SubsecRound, Utc};
use lot_core::{ParkingLedger, Tariff};

use crate::input::TokenReader;
use crate::menu::{CHOICE_PROMPT, MENU, MenuChoice};
use crate::output::{TimeDisplay, render_bill, render_parked, render_status};

pub struct Session<R, W, C> {
    input: TokenReader<R>,
    out: W,
    ledger: ParkingLedger,
    tariff: Tariff,
    time: TimeDisplay,
    clock: C,
}

impl<R, W, C> Session<R, W, C>
where
    R: BufRead,
    W: Write,
    C: FnMut() -> DateTime<Utc>,
{
    pub fn new(input: R, out: W, tariff: Tariff, time: TimeDisplay, clock: C) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            ledger: ParkingLedger::new(),
            tariff,
            time,
            clock,
        }
    }

    /// Serve the menu until the operator exits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.out.write_all(MENU.as_bytes())?;
            let Some(token) = self.ask(CHOICE_PROMPT)? else {
                tracing::info!("end of input, leaving menu");
                break;
            };

            let choice = MenuChoice::parse(&token);
            tracing::debug!(?choice, "menu: dispatch");
            match choice {
                MenuChoice::Display => self.display()?,
                MenuChoice::Park => {
                    if !self.park()? {
                        tracing::info!("end of input while parking, leaving menu");
                        break;
                    }
                }
                MenuChoice::Leave => self.leave()?,
                MenuChoice::Exit => {
                    self.out.write_all(b"Exiting program.\n")?;
                    break;
                }
                MenuChoice::Invalid => {
                    tracing::debug!(%token, "menu: invalid choice");
                    self.out
                        .write_all(b"Invalid choice. Please try again.\n")?;
                }
            }
        }

        if !self.ledger.is_empty() {
            tracing::debug!(remaining = self.ledger.len(), "discarding parked cars");
        }
        self.out.flush()
    }

    fn display(&mut self) -> io::Result<()> {
        self.out
            .write_all(render_status(&self.ledger, self.time).as_bytes())
    }

    /// Returns `false` when input ended before both answers were given.
    fn park(&mut self) -> io::Result<bool> {
        let Some(owner_name) = self.ask("Enter Owner Name: ")? else {
            return Ok(false);
        };
        let Some(plate_number) = self.ask("Enter Car Number: ")? else {
            return Ok(false);
        };

        let parked_at = self.now();
        let space_id = self.ledger.admit(owner_name, plate_number, parked_at);
        tracing::info!(space_id, "car parked");
        self.out.write_all(render_parked(space_id).as_bytes())?;
        Ok(true)
    }

    fn leave(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return self.out.write_all(b"No cars to leave\n");
        }

        let left_at = self.now();
        if let Some(bill) = self.ledger.release(left_at, &self.tariff) {
            tracing::info!(
                space_id = bill.space_id,
                fee = bill.fee,
                currency = %bill.currency,
                "car left"
            );
            self.out
                .write_all(render_bill(&bill, self.time).as_bytes())?;
        }
        Ok(())
    }

    /// Stays are measured between whole-second timestamps, the same ones printed.
    fn now(&mut self) -> DateTime<Utc> {
        (self.clock)().trunc_subsecs(0)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()?;
        self.input.next_token()
    }

    #[cfg(test)]
    fn into_parts(self) -> (ParkingLedger, W) {
        (self.ledger, self.out)
    }
}
