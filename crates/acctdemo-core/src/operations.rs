use std::{io::{self, Write}, ops::Add};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{cents, Account, AccountKind, MIN_SAVINGS_BALANCE};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("Insufficient funds for withdrawal.")]
    InsufficientFunds { requested: Decimal, available: Decimal },
    #[error("Withdrawal failed. Minimum balance requirement not met.")]
    MinimumBalance { requested: Decimal, minimum: Decimal },
    #[error("Withdrawal failed. Overdraft limit exceeded.")]
    OverdraftLimitExceeded { requested: Decimal, limit: Decimal },
    #[error("Cannot add accounts of different types.")]
    KindMismatch { left: &'static str, right: &'static str },
    #[error("Balance out of range.")]
    Overflow,
}

impl Account {
    /// Adds `amount` to the balance. Negative amounts are not rejected.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.balance = self.balance.checked_add(amount).ok_or(AccountError::Overflow)?;
        tracing::debug!(account = %self.id(), %amount, balance = %self.balance, "Deposit applied");
        Ok(self.balance)
    }

    /// Removes `amount` if the kind's floor still holds afterwards, returning
    /// the new balance. On failure the balance is untouched.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        let remaining = self.balance.checked_sub(amount).ok_or(AccountError::Overflow)?;
        if remaining < self.kind().withdrawal_floor() {
            let err = match self.kind() {
                AccountKind::Generic => AccountError::InsufficientFunds {
                    requested: amount,
                    available: self.balance,
                },
                AccountKind::Savings { .. } => AccountError::MinimumBalance {
                    requested: amount,
                    minimum: MIN_SAVINGS_BALANCE,
                },
                AccountKind::Current { overdraft_limit } => AccountError::OverdraftLimitExceeded {
                    requested: amount,
                    limit: *overdraft_limit,
                },
            };
            tracing::warn!(account = %self.id(), %amount, balance = %self.balance, "Withdrawal rejected");
            return Err(err);
        }

        self.balance = remaining;
        tracing::debug!(account = %self.id(), %amount, balance = %self.balance, "Withdrawal applied");
        Ok(self.balance)
    }

    pub fn deposit_notice(amount: Decimal) -> String {
        format!("Deposited ${:.2} into the account.", cents(amount))
    }

    pub fn withdrawal_notice(&self, amount: Decimal) -> String {
        let target = match self.kind() {
            AccountKind::Generic => "the account",
            AccountKind::Savings { .. } => "the savings account",
            AccountKind::Current { .. } => "the current account",
        };
        format!("Withdrawn ${:.2} from {}.", cents(amount), target)
    }

    /// Sums the balances of two accounts of the same kind. The result keeps the
    /// left operand's kind attributes; its id and holder are placeholders.
    pub fn combine(&self, other: &Account) -> Result<Account, AccountError> {
        if !self.kind().same_variant(other.kind()) {
            return Err(AccountError::KindMismatch {
                left: self.account_type(),
                right: other.account_type(),
            });
        }

        let balance = self.balance.checked_add(other.balance).ok_or(AccountError::Overflow)?;
        Ok(Account::new("Temp", "Temp", balance, self.kind().clone()))
    }

    /// Like `combine`, but failures are written to `err` as an `Error: ...`
    /// line and a zero-balance generic placeholder is returned.
    pub fn combine_or_report<W: Write>(&self, other: &Account, err: &mut W) -> io::Result<Account> {
        match self.combine(other) {
            Ok(account) => Ok(account),
            Err(e) => {
                tracing::error!(left = %self.id(), right = %other.id(), "{}", e);
                writeln!(err, "Error: {}", e)?;
                Ok(Account::generic("Error", "Error", Decimal::ZERO))
            }
        }
    }
}

/// Operator form of [`Account::combine_or_report`], reporting to stderr.
impl Add<&Account> for &Account {
    type Output = Account;

    fn add(self, rhs: &Account) -> Account {
        self.combine_or_report(rhs, &mut io::stderr())
            .unwrap_or_else(|_| Account::generic("Error", "Error", Decimal::ZERO))
    }
}
