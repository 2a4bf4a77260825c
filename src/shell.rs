//! Line-oriented text shell over an account directory.
//!
//! The shell owns the directory for the length of one session: sign up or
//! sign in, then the account menu until the user exits or input ends. The
//! store is rewritten after every balance change and once more at the end.

use crate::account::{validate_holder_name, Account, AccountId, AccountKind};
use crate::decimal::Money;
use crate::directory::AccountDirectory;
use crate::error::{LedgerError, Result};
use crate::storage;
use log::debug;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
enum Operation {
    Deposit,
    Withdraw,
}

impl Operation {
    fn prompt(self) -> &'static str {
        match self {
            Operation::Deposit => "Enter amount to deposit: ",
            Operation::Withdraw => "Enter amount to withdraw: ",
        }
    }

    fn success(self) -> &'static str {
        match self {
            Operation::Deposit => "Deposit successful.",
            Operation::Withdraw => "Withdrawal successful.",
        }
    }
}

/// Raw sign-up answers, validated by [`Shell::open_account`].
struct SignUpForm {
    account_number: String,
    holder_name: String,
    initial_balance: String,
}

/// Interactive session reading answers from `input` and writing prompts and
/// results to `output`.
pub struct Shell<R, W> {
    directory: AccountDirectory,
    store_path: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        directory: AccountDirectory,
        store_path: impl Into<PathBuf>,
        input: R,
        output: W,
    ) -> Self {
        Shell {
            directory,
            store_path: store_path.into(),
            input,
            output,
        }
    }

    /// Ends the session, handing back the directory and the output sink.
    pub fn into_parts(self) -> (AccountDirectory, W) {
        (self.directory, self.output)
    }

    /// Runs one session to completion.
    ///
    /// User mistakes are reported on `output` and never fail the session;
    /// only I/O and store errors are returned.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Bank Account")?;

        if let Some(choice) = self.prompt("Do you want to Sign in or Sign up? ")? {
            let signed_in = match choice.to_lowercase().as_str() {
                "sign up" => self.sign_up()?,
                "sign in" => self.sign_in()?,
                _ => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please restart and choose Sign in or Sign up."
                    )?;
                    None
                }
            };

            if let Some(id) = signed_in {
                self.menu(&id)?;
            }
        }

        self.save()
    }

    /// Writes `text` and reads one answer, trimmed. `None` means input ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input ended at prompt {:?}", text.trim());
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn sign_up(&mut self) -> Result<Option<AccountId>> {
        let Some(answer) = self.prompt("Choose account type (savings/checking/normal): ")? else {
            return Ok(None);
        };
        let kind = match answer.to_lowercase().as_str() {
            "normal" => AccountKind::Standard,
            "savings" => AccountKind::savings(),
            "checking" => AccountKind::checking(),
            _ => {
                writeln!(self.output, "Invalid account type.")?;
                return Ok(None);
            }
        };

        loop {
            let Some(form) = self.read_sign_up_form()? else {
                return Ok(None);
            };

            match self.open_account(form, kind) {
                Ok(id) => {
                    let info = self.account(&id)?.to_string();
                    writeln!(self.output, "\nAccount created successfully!\n")?;
                    writeln!(self.output, "{}", info)?;
                    self.save()?;
                    return Ok(Some(id));
                }
                Err(e) => writeln!(self.output, "Invalid input: {}", e)?,
            }
        }
    }

    fn read_sign_up_form(&mut self) -> Result<Option<SignUpForm>> {
        let Some(account_number) = self.prompt("Create a new account number: ")? else {
            return Ok(None);
        };
        let Some(holder_name) = self.prompt("Enter your name: ")? else {
            return Ok(None);
        };
        let Some(initial_balance) = self.prompt("Enter initial balance: ")? else {
            return Ok(None);
        };

        Ok(Some(SignUpForm {
            account_number,
            holder_name,
            initial_balance,
        }))
    }

    /// Validates the form and inserts the new account.
    fn open_account(&mut self, form: SignUpForm, kind: AccountKind) -> Result<AccountId> {
        if form.account_number.is_empty() {
            return Err(LedgerError::InvalidAccountState(
                "account number cannot be empty".to_string(),
            ));
        }
        validate_holder_name(&form.holder_name)?;
        let balance = Money::from_str(&form.initial_balance).map_err(|_| {
            LedgerError::InvalidAccountState(format!(
                "initial balance {:?} is not a number",
                form.initial_balance
            ))
        })?;

        let account = Account::new(
            form.account_number.clone(),
            form.holder_name,
            balance,
            kind,
        )?;
        self.directory.insert(account)?;
        Ok(form.account_number)
    }

    fn sign_in(&mut self) -> Result<Option<AccountId>> {
        let Some(id) = self.prompt("Enter your account number: ")? else {
            return Ok(None);
        };
        let Some(name) = self.prompt("Enter your name: ")? else {
            return Ok(None);
        };

        match self.directory.find(&id, &name) {
            Ok(account) => {
                writeln!(self.output, "\nLogged in successfully!\n")?;
                writeln!(self.output, "{}", account)?;
                Ok(Some(id))
            }
            Err(e) => {
                debug!("Sign-in for account {:?} failed: {}", id, e);
                writeln!(self.output, "Account not found or incorrect name.")?;
                Ok(None)
            }
        }
    }

    fn menu(&mut self, id: &str) -> Result<()> {
        loop {
            writeln!(self.output, "\nBank Account Menu:")?;
            writeln!(self.output, "1. Deposit")?;
            writeln!(self.output, "2. Withdraw")?;
            writeln!(self.output, "3. Check Balance")?;
            writeln!(self.output, "4. Account Information")?;
            writeln!(self.output, "5. View Transaction History")?;
            writeln!(self.output, "6. Exit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.transact(id, Operation::Deposit)?,
                "2" => self.transact(id, Operation::Withdraw)?,
                "3" => {
                    let balance = self.account(id)?.balance();
                    writeln!(self.output, "Your Current Balance is {}", balance)?;
                }
                "4" => {
                    let info = self.account(id)?.to_string();
                    writeln!(self.output, "{}", info)?;
                }
                "5" => self.show_history(id)?,
                "6" => {
                    writeln!(self.output, "Exit!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option.")?,
            }
        }
    }

    fn transact(&mut self, id: &str, operation: Operation) -> Result<()> {
        let Some(raw) = self.prompt(operation.prompt())? else {
            return Ok(());
        };
        let amount = match Money::from_str(&raw) {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(self.output, "Error: {:?} is not a valid amount", raw)?;
                return Ok(());
            }
        };

        let account = self
            .directory
            .get_mut(id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;
        let outcome = match operation {
            Operation::Deposit => account.deposit(amount),
            Operation::Withdraw => account.withdraw(amount),
        };

        match outcome {
            Ok(tx) => {
                writeln!(self.output, "{}", operation.success())?;
                writeln!(self.output, "{}", tx)?;
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }

        self.save()
    }

    fn show_history(&mut self, id: &str) -> Result<()> {
        let lines: Vec<String> = self
            .account(id)?
            .history()
            .iter()
            .map(ToString::to_string)
            .collect();

        if lines.is_empty() {
            writeln!(self.output, "No transactions yet.")?;
        } else {
            writeln!(self.output, "\n--- Transaction History ---")?;
            for line in lines {
                writeln!(self.output, "{}", line)?;
            }
        }
        Ok(())
    }

    fn account(&self, id: &str) -> Result<&Account> {
        self.directory
            .get(id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))
    }

    fn save(&self) -> Result<()> {
        storage::save_to_path(&self.directory, &self.store_path)
    }
}
