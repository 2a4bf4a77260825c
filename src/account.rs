//! Account model and per-variant deposit/withdraw policies.
//!
//! Maintains the invariant: `balance == opening balance + sum of transaction deltas`.

use crate::decimal::Money;
use crate::error::{LedgerError, Result};
use crate::transaction::{Transaction, TransactionKind};
use log::debug;
use rust_decimal::Decimal;
use std::fmt;

/// Account identifier as entered at sign-up.
pub type AccountId = String;

/// Interest rate applied to savings deposits unless another is given: 3%.
pub const DEFAULT_INTEREST_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Overdraft allowed on checking accounts unless another is given.
pub const DEFAULT_OVERDRAFT_LIMIT: Money = Money::from_whole(500);

/// The closed set of account variants and their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// No special rule.
    Standard,

    /// Deposits are credited as `amount * (1 + interest_rate)`.
    Savings { interest_rate: Decimal },

    /// Withdrawals may take the balance down to `-overdraft_limit`.
    Checking { overdraft_limit: Money },
}

impl AccountKind {
    /// Savings variant with the default interest rate.
    pub fn savings() -> Self {
        AccountKind::Savings {
            interest_rate: DEFAULT_INTEREST_RATE,
        }
    }

    /// Checking variant with the default overdraft limit.
    pub fn checking() -> Self {
        AccountKind::Checking {
            overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
        }
    }

    /// Tag written to the account store.
    pub fn tag(&self) -> &'static str {
        match self {
            AccountKind::Standard => "Account",
            AccountKind::Savings { .. } => "SavingsAccount",
            AccountKind::Checking { .. } => "CheckingAccount",
        }
    }

    /// Maps a stored tag back to a variant with default parameters.
    ///
    /// Returns `None` for tags this version does not know.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "Account" => Some(AccountKind::Standard),
            "SavingsAccount" => Some(AccountKind::savings()),
            "CheckingAccount" => Some(AccountKind::checking()),
            _ => None,
        }
    }

    /// Lowest balance this variant may reach.
    pub fn balance_floor(&self) -> Money {
        match self {
            AccountKind::Checking { overdraft_limit } => -*overdraft_limit,
            _ => Money::ZERO,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            AccountKind::Savings { interest_rate } if interest_rate.is_sign_negative() => {
                Err(LedgerError::InvalidAccountState(format!(
                    "interest rate cannot be negative (got {})",
                    interest_rate
                )))
            }
            AccountKind::Checking { overdraft_limit } if overdraft_limit.is_negative() => {
                Err(LedgerError::InvalidAccountState(format!(
                    "overdraft limit cannot be negative (got {})",
                    overdraft_limit
                )))
            }
            _ => Ok(()),
        }
    }

    /// Deposit policy: the kind of event recorded and the amount credited.
    fn credit(&self, amount: Money) -> Result<(TransactionKind, Money)> {
        match self {
            AccountKind::Savings { interest_rate } => {
                let credited = amount
                    .checked_with_rate(*interest_rate)
                    .ok_or(LedgerError::InvalidAmount { amount })?;
                Ok((TransactionKind::DepositWithInterest, credited))
            }
            _ => Ok((TransactionKind::Deposit, amount)),
        }
    }

    /// Withdrawal policy: checks `amount` against `balance`.
    fn check_debit(&self, balance: Money, amount: Money) -> Result<()> {
        match self {
            AccountKind::Checking { overdraft_limit } => {
                let remaining = balance
                    .checked_sub(amount)
                    .ok_or(LedgerError::InvalidAmount { amount })?;
                if remaining < -*overdraft_limit {
                    return Err(LedgerError::OverdraftExceeded {
                        balance,
                        requested: amount,
                        limit: *overdraft_limit,
                    });
                }
            }
            _ => {
                if amount > balance {
                    return Err(LedgerError::InsufficientFunds {
                        balance,
                        requested: amount,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Checks a holder name entered at sign-up: letters and spaces only, and at
/// least one letter.
///
/// The account constructor does not call this; names loaded from the store
/// are taken as they are.
pub fn validate_holder_name(name: &str) -> Result<()> {
    let mut letters = 0usize;
    for c in name.chars() {
        if c.is_alphabetic() {
            letters += 1;
        } else if c != ' ' {
            return Err(LedgerError::InvalidAccountState(format!(
                "holder name must contain letters only (got {:?})",
                name
            )));
        }
    }
    if letters == 0 {
        return Err(LedgerError::InvalidAccountState(
            "holder name must contain letters only (got an empty name)".to_string(),
        ));
    }
    Ok(())
}

/// A bank account with its balance and transaction history.
///
/// # Invariants
///
/// - `balance == opening_balance + sum(signed_delta)` over the history
/// - `balance >= kind.balance_floor()`, unless the account was restored
///   below it, in which case the balance never drops under the restored value
/// - A failed deposit or withdrawal changes neither balance nor history
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    kind: AccountKind,
    opening_balance: Money,
    balance: Money,
    history: Vec<Transaction>,
}

impl Account {
    /// Opens an account with a non-negative initial balance.
    pub fn new(
        id: impl Into<AccountId>,
        holder_name: impl Into<String>,
        initial_balance: Money,
        kind: AccountKind,
    ) -> Result<Self> {
        if initial_balance.is_negative() {
            return Err(LedgerError::InvalidAccountState(format!(
                "initial balance cannot be negative (got {})",
                initial_balance
            )));
        }
        kind.validate()?;
        Ok(Account::restore(id, holder_name, initial_balance, kind))
    }

    /// Rebuilds an account from stored fields; the balance is taken as is.
    pub(crate) fn restore(
        id: impl Into<AccountId>,
        holder_name: impl Into<String>,
        balance: Money,
        kind: AccountKind,
    ) -> Self {
        Account {
            id: id.into(),
            holder_name: holder_name.into(),
            kind,
            opening_balance: balance,
            balance,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Chronological, read-only view of the transaction history.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Deposits funds and returns the recorded transaction.
    ///
    /// Savings accounts credit the deposit plus interest, and the recorded
    /// amount is that credited total rather than the raw deposit.
    pub fn deposit(&mut self, amount: Money) -> Result<Transaction> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount { amount });
        }

        let (kind, credited) = self.kind.credit(amount)?;
        let new_balance = self
            .balance
            .checked_add(credited)
            .ok_or(LedgerError::InvalidAmount { amount })?;
        let tx = self.apply(kind, credited, new_balance);
        debug!("Deposited {} to account {}", credited, self.id);
        Ok(tx)
    }

    /// Withdraws funds and returns the recorded transaction.
    ///
    /// Fails with `InsufficientFunds` (standard and savings) or
    /// `OverdraftExceeded` (checking) without touching the account. Amounts
    /// too large to represent fail with `InvalidAmount`.
    pub fn withdraw(&mut self, amount: Money) -> Result<Transaction> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount { amount });
        }

        if let Err(e) = self.kind.check_debit(self.balance, amount) {
            debug!("Withdrawal from account {} rejected: {}", self.id, e);
            return Err(e);
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::InvalidAmount { amount })?;
        let tx = self.apply(TransactionKind::Withdrawal, amount, new_balance);
        debug!("Withdrew {} from account {}", amount, self.id);
        Ok(tx)
    }

    fn apply(&mut self, kind: TransactionKind, amount: Money, new_balance: Money) -> Transaction {
        let tx = Transaction::new(kind, amount, self.balance, new_balance);
        self.balance = new_balance;
        self.history.push(tx);
        tx
    }

    /// Verifies the invariant: `balance == opening balance + sum of deltas`.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        let replayed = self
            .history
            .iter()
            .fold(self.opening_balance, |acc, tx| acc + tx.signed_delta());
        let floor = self.kind.balance_floor().min(self.opening_balance);
        replayed == self.balance && self.balance >= floor
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account Number: {} , Account Holder: {}, Current Balance: {}",
            self.id, self.holder_name, self.balance
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

    fn open(kind: AccountKind, balance: &str) -> Account {
        Account::new("1001", "Jane Doe", money(balance), kind).unwrap()
    }

    #[test]
    fn test_new_account_has_empty_history() {
        let account = open(AccountKind::Standard, "100");
        assert_eq!(account.id(), "1001");
        assert_eq!(account.holder_name(), "Jane Doe");
        assert_eq!(account.balance().to_string(), "100.00");
        assert!(account.history().is_empty());
        assert!(account.check_invariant());
    }

    #[test]
    fn test_negative_initial_balance_rejected() {
        let result = Account::new("1", "Jane", money("-0.01"), AccountKind::Standard);
        assert!(matches!(result, Err(LedgerError::InvalidAccountState(_))));

        let result = Account::new("1", "Jane", money("-10"), AccountKind::checking());
        assert!(matches!(result, Err(LedgerError::InvalidAccountState(_))));
    }

    #[test]
    fn test_negative_variant_parameters_rejected() {
        let savings = AccountKind::Savings {
            interest_rate: Decimal::from_str("-0.01").unwrap(),
        };
        assert!(matches!(
            Account::new("1", "Jane", Money::ZERO, savings),
            Err(LedgerError::InvalidAccountState(_))
        ));

        let checking = AccountKind::Checking {
            overdraft_limit: money("-1"),
        };
        assert!(matches!(
            Account::new("1", "Jane", Money::ZERO, checking),
            Err(LedgerError::InvalidAccountState(_))
        ));
    }

    #[test]
    fn test_constructor_does_not_validate_name() {
        assert!(Account::new("1", "R2-D2", Money::ZERO, AccountKind::Standard).is_ok());
    }

    #[test]
    fn test_deposit_records_transaction() {
        let mut account = open(AccountKind::Standard, "100");
        let tx = account.deposit(money("50")).unwrap();

        assert_eq!(tx.kind(), TransactionKind::Deposit);
        assert_eq!(tx.amount().to_string(), "50.00");
        assert_eq!(tx.balance_before().to_string(), "100.00");
        assert_eq!(tx.balance_after().to_string(), "150.00");
        assert_eq!(account.balance().to_string(), "150.00");
        assert_eq!(account.history(), &[tx]);
        assert!(account.check_invariant());
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        for kind in [
            AccountKind::Standard,
            AccountKind::savings(),
            AccountKind::checking(),
        ] {
            let mut account = open(kind, "100");
            assert!(matches!(
                account.deposit(Money::ZERO),
                Err(LedgerError::InvalidAmount { .. })
            ));
            assert!(matches!(
                account.deposit(money("-5")),
                Err(LedgerError::InvalidAmount { .. })
            ));
            assert!(matches!(
                account.withdraw(Money::ZERO),
                Err(LedgerError::InvalidAmount { .. })
            ));
            assert!(matches!(
                account.withdraw(money("-5")),
                Err(LedgerError::InvalidAmount { .. })
            ));
            assert_eq!(account.balance().to_string(), "100.00");
            assert!(account.history().is_empty());
        }
    }

    #[test]
    fn test_savings_deposit_credits_interest() {
        let mut account = open(AccountKind::savings(), "0");
        let tx = account.deposit(money("100")).unwrap();

        assert_eq!(tx.kind(), TransactionKind::DepositWithInterest);
        assert_eq!(tx.amount().to_string(), "103.00");
        assert_eq!(account.balance().to_string(), "103.00");
        assert!(account.check_invariant());
    }

    #[test]
    fn test_savings_custom_rate() {
        let kind = AccountKind::Savings {
            interest_rate: Decimal::from_str("0.10").unwrap(),
        };
        let mut account = open(kind, "10");
        account.deposit(money("20")).unwrap();
        assert_eq!(account.balance().to_string(), "32.00");
    }

    #[test]
    fn test_savings_withdraw_uses_standard_rule() {
        let mut account = open(AccountKind::savings(), "50");
        assert!(matches!(
            account.withdraw(money("50.01")),
            Err(LedgerError::InsufficientFunds { .. })
        ));
        let tx = account.withdraw(money("50")).unwrap();
        assert_eq!(tx.kind(), TransactionKind::Withdrawal);
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn test_standard_withdraw_insufficient_funds_leaves_state() {
        let mut account = open(AccountKind::Standard, "100");
        account.deposit(money("10")).unwrap();

        let result = account.withdraw(money("110.01"));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(account.balance().to_string(), "110.00");
        assert_eq!(account.history().len(), 1);

        account.withdraw(money("110")).unwrap();
        assert_eq!(account.balance(), Money::ZERO);
        assert!(account.check_invariant());
    }

    #[test]
    fn test_checking_overdraft() {
        let mut account = open(AccountKind::checking(), "0");

        assert!(matches!(
            account.withdraw(money("600")),
            Err(LedgerError::OverdraftExceeded { .. })
        ));
        assert!(account.history().is_empty());

        account.withdraw(money("500")).unwrap();
        assert_eq!(account.balance().to_string(), "-500.00");
        assert!(matches!(
            account.withdraw(money("0.01")),
            Err(LedgerError::OverdraftExceeded { .. })
        ));
        assert!(account.check_invariant());
    }

    #[test]
    fn test_checking_deposit_has_no_interest() {
        let mut account = open(AccountKind::checking(), "0");
        account.withdraw(money("200")).unwrap();
        let tx = account.deposit(money("100")).unwrap();
        assert_eq!(tx.kind(), TransactionKind::Deposit);
        assert_eq!(account.balance().to_string(), "-100.00");
    }

    #[test]
    fn test_unrepresentable_amounts_rejected() {
        let huge = money("79228162514264337593543950335");

        let mut standard = open(AccountKind::Standard, "1");
        assert!(matches!(
            standard.deposit(huge),
            Err(LedgerError::InvalidAmount { .. })
        ));
        assert!(matches!(
            standard.withdraw(huge),
            Err(LedgerError::InsufficientFunds { .. })
        ));

        let mut savings = open(AccountKind::savings(), "1");
        assert!(matches!(
            savings.deposit(huge),
            Err(LedgerError::InvalidAmount { .. })
        ));

        let mut checking = open(AccountKind::checking(), "0");
        checking.withdraw(money("100")).unwrap();
        assert!(matches!(
            checking.withdraw(huge),
            Err(LedgerError::InvalidAmount { .. })
        ));

        for account in [&standard, &savings] {
            assert_eq!(account.balance().to_string(), "1.00");
            assert!(account.history().is_empty());
        }
        assert_eq!(checking.balance().to_string(), "-100.00");
        assert_eq!(checking.history().len(), 1);
    }

    #[test]
    fn test_restored_account_below_default_floor() {
        let mut account = Account::restore("c", "Ada", money("-800"), AccountKind::checking());
        assert!(account.check_invariant());

        assert!(matches!(
            account.withdraw(money("1")),
            Err(LedgerError::OverdraftExceeded { .. })
        ));
        account.deposit(money("400")).unwrap();
        assert_eq!(account.balance().to_string(), "-400.00");
        account.withdraw(money("100")).unwrap();
        assert!(account.check_invariant());
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(AccountKind::Standard.tag(), "Account");
        assert_eq!(AccountKind::savings().tag(), "SavingsAccount");
        assert_eq!(AccountKind::checking().tag(), "CheckingAccount");

        assert_eq!(
            AccountKind::from_tag("SavingsAccount"),
            Some(AccountKind::savings())
        );
        assert_eq!(
            AccountKind::from_tag(" CheckingAccount "),
            Some(AccountKind::checking())
        );
        assert_eq!(AccountKind::from_tag("BusinessAccount"), None);
    }

    #[test]
    fn test_validate_holder_name() {
        assert!(validate_holder_name("Jane Doe").is_ok());
        assert!(validate_holder_name("Zoë").is_ok());
        assert!(validate_holder_name("Jane2").is_err());
        assert!(validate_holder_name("O'Brien").is_err());
        assert!(validate_holder_name("").is_err());
        assert!(validate_holder_name("   ").is_err());
    }

    #[test]
    fn test_display() {
        let account = open(AccountKind::Standard, "12.5");
        assert_eq!(
            account.to_string(),
            "Account Number: 1001 , Account Holder: Jane Doe, Current Balance: 12.50"
        );
    }
}
