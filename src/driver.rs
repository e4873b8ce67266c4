use std::io::{self, Write};

use acctdemo_core::{summary_table, Account};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Final state of the walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutcome {
    pub savings: Account,
    pub current: Account,
    /// `None` when the accounts could not be combined.
    pub combined: Option<Account>,
}

pub struct DemoOptions {
    pub summary: bool,
}

fn report_withdrawal<W: Write>(out: &mut W, account: &mut Account, amount: Decimal) -> io::Result<()> {
    match account.withdraw(amount) {
        Ok(_) => writeln!(out, "{}", account.withdrawal_notice(amount)),
        Err(e) => writeln!(out, "{}", e),
    }
}

/// Runs the fixed savings/current walkthrough. The report goes to `out`,
/// combination errors to `err`.
pub fn run_demo<W: Write, E: Write>(out: &mut W, err: &mut E, options: &DemoOptions) -> io::Result<DemoOutcome> {
    let mut savings = Account::savings("S123", "John Doe", dec!(1000), dec!(0.02));
    let mut current = Account::current("C456", "Jane Doe", dec!(2000), dec!(500));
    tracing::info!(savings = %savings.id(), current = %current.id(), "Accounts opened");

    savings.display_details(out)?;
    current.display_details(out)?;

    match savings.deposit(dec!(500)) {
        Ok(_) => writeln!(out, "{}", Account::deposit_notice(dec!(500)))?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    report_withdrawal(out, &mut current, dec!(1000))?;

    savings.display_details(out)?;
    current.display_details(out)?;

    // Same-kind results keep the left operand's kind.
    let combined = match current.combine(&savings) {
        Ok(account) => {
            current = account.clone();
            Some(account)
        },
        Err(e) => {
            tracing::error!(left = %current.id(), right = %savings.id(), "{}", e);
            writeln!(err, "Error: {}", e)?;
            None
        }
    };

    writeln!(out, "Account Details after transfer:")?;
    write!(out, "{}", savings)?;
    write!(out, "{}", current)?;

    if options.summary {
        write!(out, "{}", summary_table(&[&savings, &current]))?;
    }

    Ok(DemoOutcome { savings, current, combined })
}
