//! Flat-file account store.
//!
//! One CSV row per account: `account_number,account_holder_name,balance,account_type`.
//! Transaction history and variant parameters (interest rate, overdraft limit)
//! are not stored, so every reload starts with an empty history and the
//! variant defaults.

use crate::account::{Account, AccountKind};
use crate::decimal::Money;
use crate::directory::AccountDirectory;
use crate::error::{LedgerError, Result};
use csv::{ReaderBuilder, Trim};
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Header row of the account store, in field order.
pub const HEADER: [&str; 4] = [
    "account_number",
    "account_holder_name",
    "balance",
    "account_type",
];

/// Raw account record as read from the store.
///
/// The balance stays a string here so a bad value can be reported with its
/// row number instead of as a generic decoding error.
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    pub account_number: String,
    pub account_holder_name: String,
    pub balance: String,
    pub account_type: String,
}

impl AccountRecord {
    /// Turns the record into an account with default variant parameters.
    ///
    /// Unknown account types load as standard accounts. A balance that is not
    /// numeric, or negative on an account type without overdraft, is a
    /// `CorruptRecord`. Checking balances load as stored even below the
    /// default overdraft limit, since the limit they were reached under is
    /// not kept.
    pub fn into_account(self, row: usize) -> Result<Account> {
        let balance = Money::from_str(&self.balance).map_err(|e| LedgerError::CorruptRecord {
            row,
            message: format!("balance {:?} is not numeric ({})", self.balance, e),
        })?;

        let kind = match AccountKind::from_tag(&self.account_type) {
            Some(kind) => kind,
            None => {
                warn!(
                    "Row {}: unknown account type {:?} for account {}, loading as {}",
                    row,
                    self.account_type,
                    self.account_number,
                    AccountKind::Standard.tag()
                );
                AccountKind::Standard
            }
        };

        let overdraft = matches!(kind, AccountKind::Checking { .. });
        if balance.is_negative() && !overdraft {
            return Err(LedgerError::CorruptRecord {
                row,
                message: format!(
                    "balance {} is negative but {} has no overdraft",
                    balance,
                    kind.tag()
                ),
            });
        }

        Ok(Account::restore(
            self.account_number,
            self.account_holder_name,
            balance,
            kind,
        ))
    }
}

/// Reads a directory from CSV.
///
/// Fields are trimmed of surrounding whitespace. Structural CSV errors,
/// corrupt balances and duplicate account numbers fail the whole load.
pub fn load<R: Read>(reader: R) -> Result<AccountDirectory> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut directory = AccountDirectory::new();

    for (row_idx, result) in csv_reader.deserialize::<AccountRecord>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row
        let record = result?;
        directory.insert(record.into_account(row_num)?)?;
    }

    Ok(directory)
}

/// Reads a directory from `path`. A missing file yields an empty directory.
pub fn load_from_path(path: &Path) -> Result<AccountDirectory> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No account store at {}, starting empty", path.display());
            return Ok(AccountDirectory::new());
        }
        Err(e) => return Err(e.into()),
    };

    let directory = load(BufReader::new(file))?;
    info!(
        "Loaded {} accounts from {}",
        directory.len(),
        path.display()
    );
    Ok(directory)
}

/// Writes every account in the directory as CSV, header first.
pub fn save<W: Write>(directory: &AccountDirectory, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER)?;

    for account in directory.list() {
        let balance = account.balance().to_string();
        csv_writer.write_record([
            account.id(),
            account.holder_name(),
            balance.as_str(),
            account.kind().tag(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Rewrites the store at `path` with the full directory.
pub fn save_to_path(directory: &AccountDirectory, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    save(directory, BufWriter::new(file))?;
    info!("Saved {} accounts to {}", directory.len(), path.display());
    Ok(())
}
