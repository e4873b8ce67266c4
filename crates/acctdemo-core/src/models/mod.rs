use std::{fmt::{self, Display}, io, sync::Arc};

use prettytable::{Table, row};
use rust_decimal::{Decimal, RoundingStrategy};

/// Minimum balance a savings account must keep after a withdrawal.
pub const MIN_SAVINGS_BALANCE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Rounds to whole cents, halves away from zero.
pub(crate) fn cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Generic,
    Savings { interest_rate: Decimal },
    Current { overdraft_limit: Decimal },
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Generic => "Generic",
            AccountKind::Savings { .. } => "Savings",
            AccountKind::Current { .. } => "Current",
        }
    }

    /// Lowest balance a withdrawal may leave behind.
    pub fn withdrawal_floor(&self) -> Decimal {
        match self {
            AccountKind::Generic => Decimal::ZERO,
            AccountKind::Savings { .. } => MIN_SAVINGS_BALANCE,
            AccountKind::Current { overdraft_limit } => -*overdraft_limit,
        }
    }

    /// Tag comparison; per-variant attributes are ignored.
    pub fn same_variant(&self, other: &AccountKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: Arc<str>,
    holder: Arc<str>,
    pub(crate) balance: Decimal,
    kind: AccountKind,
}

impl Account {
    pub fn new(id: &str, holder: &str, initial_balance: Decimal, kind: AccountKind) -> Self {
        Self {
            id: Arc::from(id),
            holder: Arc::from(holder),
            balance: initial_balance,
            kind,
        }
    }

    pub fn generic(id: &str, holder: &str, initial_balance: Decimal) -> Self {
        Self::new(id, holder, initial_balance, AccountKind::Generic)
    }

    pub fn savings(id: &str, holder: &str, initial_balance: Decimal, interest_rate: Decimal) -> Self {
        Self::new(id, holder, initial_balance, AccountKind::Savings { interest_rate })
    }

    pub fn current(id: &str, holder: &str, initial_balance: Decimal, overdraft_limit: Decimal) -> Self {
        Self::new(id, holder, initial_balance, AccountKind::Current { overdraft_limit })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn account_type(&self) -> &'static str {
        self.kind.label()
    }

    /// Full report: the base lines followed by the kind-specific line, if any.
    pub fn details(&self) -> String {
        let mut result = self.to_string();
        match &self.kind {
            AccountKind::Generic => {},
            AccountKind::Savings { interest_rate } => {
                result.push_str(&format!("   Interest Rate: {:.2}%\n", cents(interest_rate.saturating_mul(Decimal::ONE_HUNDRED))));
            },
            AccountKind::Current { overdraft_limit } => {
                result.push_str(&format!("   Overdraft Limit: ${:.2}\n", cents(*overdraft_limit)));
            },
        }
        result
    }

    pub fn display_details<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.details().as_bytes())
    }
}

/// Base report only. The kind-specific line is left to `details`.
impl Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Details for {} Account (ID: {}):", self.account_type(), self.id)?;
        writeln!(f, "   Holder: {}", self.holder)?;
        writeln!(f, "   Balance: ${:.2}", cents(self.balance))
    }
}

pub fn summary_table(accounts: &[&Account]) -> String {
    let mut table = Table::new();
    table.add_row(row!["Type", "ID", "Holder", "Balance"]);
    table.add_empty_row();

    for account in accounts {
        table.add_row(row![
            account.account_type(),
            account.id(),
            account.holder(),
            format!("{:.2}", cents(account.balance())),
        ]);
    }

    format!("\n{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_labels_per_kind() {
        assert_eq!(Account::generic("G1", "Ann", dec!(0)).account_type(), "Generic");
        assert_eq!(Account::savings("S1", "Ann", dec!(0), dec!(0.02)).account_type(), "Savings");
        assert_eq!(Account::current("C1", "Ann", dec!(0), dec!(500)).account_type(), "Current");
    }

    #[test]
    fn test_withdrawal_floors() {
        assert_eq!(AccountKind::Generic.withdrawal_floor(), Decimal::ZERO);
        assert_eq!(AccountKind::Savings { interest_rate: dec!(0.05) }.withdrawal_floor(), dec!(100));
        assert_eq!(AccountKind::Current { overdraft_limit: dec!(250) }.withdrawal_floor(), dec!(-250));
    }

    #[test]
    fn test_same_variant_ignores_attributes() {
        let a = AccountKind::Savings { interest_rate: dec!(0.01) };
        let b = AccountKind::Savings { interest_rate: dec!(0.04) };
        assert!(a.same_variant(&b));
        assert!(!a.same_variant(&AccountKind::Current { overdraft_limit: dec!(0.01) }));
        assert!(!AccountKind::Generic.same_variant(&a));
    }

    #[test]
    fn test_savings_details() {
        let account = Account::savings("S123", "John Doe", dec!(1000), dec!(0.02));
        assert_eq!(
            account.details(),
            "Account Details for Savings Account (ID: S123):\n   \
             Holder: John Doe\n   \
             Balance: $1000.00\n   \
             Interest Rate: 2.00%\n"
        );
    }

    #[test]
    fn test_current_details() {
        let account = Account::current("C456", "Jane Doe", dec!(2000), dec!(500));
        let details = account.details();
        assert!(details.starts_with("Account Details for Current Account (ID: C456):\n"));
        assert!(details.ends_with("   Overdraft Limit: $500.00\n"));
    }

    #[test]
    fn test_display_is_base_report_only() {
        let account = Account::savings("S123", "John Doe", dec!(1500), dec!(0.02));
        let rendered = account.to_string();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("   Balance: $1500.00"));
        assert!(!rendered.contains("Interest Rate"));
    }

    #[test]
    fn test_generic_details_have_no_extra_line() {
        let account = Account::generic("G1", "Ann", dec!(12.5));
        assert_eq!(account.details(), account.to_string());
        assert!(account.details().contains("Balance: $12.50"));
    }

    #[test]
    fn test_display_details_writes_to_sink() {
        let account = Account::current("C1", "Bo", dec!(-20), dec!(100));
        let mut buf = Vec::new();
        account.display_details(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Balance: $-20.00"));
    }

    #[test]
    fn test_cents_rounds_half_away_from_zero() {
        assert_eq!(cents(dec!(12.349)), dec!(12.35));
        assert_eq!(cents(dec!(12.345)), dec!(12.35));
        assert_eq!(cents(dec!(12.344)), dec!(12.34));
        assert_eq!(cents(dec!(-12.345)), dec!(-12.35));
    }

    #[test]
    fn test_balance_display_rounds() {
        let mut account = Account::generic("G", "A", dec!(12.34));
        account.deposit(dec!(0.009)).unwrap();
        assert!(account.to_string().contains("   Balance: $12.35\n"));
        assert!(Account::generic("G", "A", dec!(12.345)).details().contains("Balance: $12.35"));
        assert!(Account::generic("G", "A", dec!(7)).details().contains("Balance: $7.00"));
    }

    #[test]
    fn test_rate_and_limit_display_round() {
        let savings = Account::savings("S1", "A", dec!(100), dec!(0.02555));
        assert!(savings.details().contains("   Interest Rate: 2.56%\n"));
        let current = Account::current("C1", "A", dec!(0), dec!(99.995));
        assert!(current.details().contains("   Overdraft Limit: $100.00\n"));
    }

    #[test]
    fn test_summary_table_lists_accounts() {
        let savings = Account::savings("S123", "John Doe", dec!(1500), dec!(0.02));
        let current = Account::current("C456", "Jane Doe", dec!(1000), dec!(500));
        let table = summary_table(&[&savings, &current]);
        assert!(table.contains("Holder"));
        assert!(table.contains("S123"));
        assert!(table.contains("1500.00"));
        assert!(table.contains("Current"));
    }
}
