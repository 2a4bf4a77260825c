//! Transaction records kept in an account's history.

use crate::decimal::Money;
use std::fmt;

/// Kind of balance-changing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Funds credited as deposited.
    Deposit,

    /// Funds credited with interest applied (savings accounts).
    DepositWithInterest,

    /// Funds debited.
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::DepositWithInterest => "Deposit (with Interest)",
            TransactionKind::Withdrawal => "Withdrawal",
        };
        f.write_str(label)
    }
}

/// Immutable snapshot of one successful deposit or withdrawal.
///
/// Only an [`Account`](crate::Account) creates these, as a side effect of a
/// balance change, so `balance_after - balance_before` is always the signed
/// effect of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
    balance_before: Money,
    balance_after: Money,
}

impl Transaction {
    pub(crate) fn new(
        kind: TransactionKind,
        amount: Money,
        balance_before: Money,
        balance_after: Money,
    ) -> Self {
        Transaction {
            kind,
            amount,
            balance_before,
            balance_after,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Amount of the event. For interest deposits this is the credited total.
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn balance_before(&self) -> Money {
        self.balance_before
    }

    pub fn balance_after(&self) -> Money {
        self.balance_after
    }

    /// Signed effect on the balance: positive for credits, negative for debits.
    pub fn signed_delta(&self) -> Money {
        self.balance_after - self.balance_before
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | Previous Balance: {} → New Balance: {}",
            self.kind, self.amount, self.balance_before, self.balance_after
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_display_deposit() {
        let tx = Transaction::new(
            TransactionKind::Deposit,
            money("50"),
            money("100"),
            money("150"),
        );
        assert_eq!(
            tx.to_string(),
            "Deposit: 50.00 | Previous Balance: 100.00 → New Balance: 150.00"
        );
    }

    #[test]
    fn test_display_interest_deposit() {
        let tx = Transaction::new(
            TransactionKind::DepositWithInterest,
            money("103"),
            money("0"),
            money("103"),
        );
        assert_eq!(
            tx.to_string(),
            "Deposit (with Interest): 103.00 | Previous Balance: 0.00 → New Balance: 103.00"
        );
    }

    #[test]
    fn test_signed_delta() {
        let withdrawal = Transaction::new(
            TransactionKind::Withdrawal,
            money("30"),
            money("10"),
            money("-20"),
        );
        assert_eq!(withdrawal.signed_delta(), money("-30"));

        let deposit = Transaction::new(
            TransactionKind::Deposit,
            money("5.25"),
            money("1"),
            money("6.25"),
        );
        assert_eq!(deposit.signed_delta(), money("5.25"));
    }
}
