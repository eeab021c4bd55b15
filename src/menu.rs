//! Interactive text menu.
//!
//! Reads commands and their arguments line by line, calls into the
//! [`Registry`], and prints the outcome. Business failures are printed and the
//! loop carries on; only I/O failures end the session early. End of input is
//! treated like `q` without the goodbye.

use crate::client::NewClient;
use crate::decimal::Money;
use crate::error::{LedgerError, Result};
use crate::registry::{AccountChoice, Registry};
use log::debug;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
[d]  Deposit
[s]  Withdraw
[e]  Statement
[nc] New account
[lc] List accounts
[nu] New user
[q]  Quit
=> ";

const RULE: &str = "==========================================";

/// A parsed menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewUser,
    Quit,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" => Ok(Command::Deposit),
            "s" => Ok(Command::Withdraw),
            "e" => Ok(Command::Statement),
            "nc" => Ok(Command::NewAccount),
            "lc" => Ok(Command::ListAccounts),
            "nu" => Ok(Command::NewUser),
            "q" => Ok(Command::Quit),
            _ => Err(()),
        }
    }
}

/// The menu loop, generic over its input and output streams.
pub struct Menu<R, W> {
    registry: Registry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Menu {
            registry,
            input,
            output,
        }
    }

    /// Consumes the menu, returning the registry and output stream.
    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.output)
    }

    /// Runs commands until `q` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.prompt(MENU)? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            let command = match Command::from_str(&line) {
                Ok(command) => command,
                Err(()) => {
                    writeln!(self.output, "Invalid option, please choose again.")?;
                    continue;
                }
            };
            debug!("Command {:?}", command);

            match command {
                Command::Deposit => self.deposit()?,
                Command::Withdraw => self.withdraw()?,
                Command::Statement => self.statement()?,
                Command::NewAccount => self.new_account()?,
                Command::ListAccounts => self.list_accounts()?,
                Command::NewUser => self.new_user()?,
                Command::Quit => {
                    writeln!(self.output, "Goodbye! Thank you for banking with us.")?;
                    return Ok(());
                }
            }
        }
    }

    fn deposit(&mut self) -> Result<()> {
        let Some((client_id, account)) = self.pick_account()? else {
            return Ok(());
        };
        let Some(amount) = self.read_amount("Deposit amount: ")? else {
            return Ok(());
        };

        let result = self.registry.deposit(&client_id, account, amount);
        self.report(result, &format!("Deposit of {} completed.", amount))
    }

    fn withdraw(&mut self) -> Result<()> {
        let Some((client_id, account)) = self.pick_account()? else {
            return Ok(());
        };
        let Some(amount) = self.read_amount("Withdrawal amount: ")? else {
            return Ok(());
        };

        let result = self.registry.withdraw(&client_id, account, amount);
        self.report(result, &format!("Withdrawal of {} completed.", amount))
    }

    fn statement(&mut self) -> Result<()> {
        let Some((_, account)) = self.pick_account()? else {
            return Ok(());
        };

        let statement = match self.registry.statement(account) {
            Ok(statement) => statement,
            Err(e) => return self.notice(e),
        };

        writeln!(self.output, "\n================ STATEMENT ================")?;
        if statement.entries.is_empty() {
            writeln!(self.output, "No transactions recorded.")?;
        }
        for entry in statement.entries {
            writeln!(self.output, "{}", entry)?;
        }
        writeln!(self.output, "\nBalance: {}", statement.balance)?;
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }

    fn new_account(&mut self) -> Result<()> {
        let Some(client_id) = self.prompt("Client ID: ")? else {
            return Ok(());
        };

        let number = match self.registry.open_checking_account(&client_id) {
            Ok(number) => number,
            Err(e) => return self.notice(e),
        };
        writeln!(self.output, "Account {} opened.", number)?;
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<()> {
        if self.registry.accounts().is_empty() {
            writeln!(self.output, "No accounts registered.")?;
            return Ok(());
        }

        for account in self.registry.accounts() {
            let holder = self
                .registry
                .find_client(account.owner())
                .map(|c| c.name())
                .unwrap_or_else(|| account.owner());
            writeln!(self.output, "{}", RULE)?;
            writeln!(self.output, "Branch:  {}", account.branch())?;
            writeln!(self.output, "Account: {}", account.number())?;
            writeln!(self.output, "Type:    {}", account.kind().label())?;
            writeln!(self.output, "Holder:  {}", holder)?;
        }
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }

    fn new_user(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Client ID (numbers only): ")? else {
            return Ok(());
        };
        if id.trim().is_empty() {
            return self.notice(LedgerError::EmptyIdentifier);
        }
        if self.registry.find_client(&id).is_some() {
            return self.notice(LedgerError::DuplicateClient(id.trim().to_string()));
        }

        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Address (street, number - district - city/state): ")?
        else {
            return Ok(());
        };

        let result = self
            .registry
            .create_client(NewClient {
                id,
                name,
                birth_date,
                address,
            })
            .map(|_| ());
        self.report(result, "Client registered.")
    }

    /// Looks up a client and the account to operate on, re-prompting until a
    /// valid account index is given when the client owns several.
    fn pick_account(&mut self) -> Result<Option<(String, u32)>> {
        let Some(client_id) = self.prompt("Client ID: ")? else {
            return Ok(None);
        };

        let numbers = match self.registry.resolve_account(&client_id) {
            Ok(AccountChoice::Single(number)) => return Ok(Some((client_id, number))),
            Ok(AccountChoice::Multiple(numbers)) => numbers,
            Err(e) => {
                self.notice(e)?;
                return Ok(None);
            }
        };

        for (i, number) in numbers.iter().enumerate() {
            writeln!(self.output, "[{}] Account {}", i + 1, number)?;
        }
        loop {
            let question = format!("Choose an account (1-{}): ", numbers.len());
            let Some(answer) = self.prompt(&question)? else {
                return Ok(None);
            };

            let Ok(index) = answer.trim().parse::<usize>() else {
                writeln!(self.output, "Invalid selection, enter a number.")?;
                continue;
            };
            match self.registry.select_account(&client_id, index) {
                Ok(number) => return Ok(Some((client_id, number))),
                Err(e) => self.notice(e)?,
            }
        }
    }

    /// Reads and parses an amount; unparseable input is reported as
    /// `InvalidAmount` without touching the registry.
    fn read_amount(&mut self, question: &str) -> Result<Option<Money>> {
        let Some(answer) = self.prompt(question)? else {
            return Ok(None);
        };

        match Money::from_str(&answer) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                debug!("Could not parse amount {:?}: {}", answer.trim(), e);
                self.notice(LedgerError::InvalidAmount)?;
                Ok(None)
            }
        }
    }

    /// Prints `question` and reads one line, without its line terminator.
    /// Returns `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prints a business failure; I/O failures are propagated.
    fn notice(&mut self, err: LedgerError) -> Result<()> {
        if let LedgerError::Io(_) = err {
            return Err(err);
        }
        writeln!(self.output, "{}", err)?;
        Ok(())
    }

    fn report(&mut self, result: Result<()>, success: &str) -> Result<()> {
        match result {
            Ok(()) => {
                writeln!(self.output, "{}", success)?;
                Ok(())
            }
            Err(e) => self.notice(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Registry, String) {
        let mut menu = Menu::new(Registry::new(), Cursor::new(script.to_string()), Vec::new());
        menu.run().unwrap();
        let (registry, output) = menu.into_parts();
        (registry, String::from_utf8(output).unwrap())
    }

    const REGISTER: &str = "nu\n111\nAna Souza\n01-02-1990\nRua A, 1 - Centro - Recife/PE\nnc\n111\n";

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::from_str("d"), Ok(Command::Deposit));
        assert_eq!(Command::from_str(" NC "), Ok(Command::NewAccount));
        assert_eq!(Command::from_str("lc"), Ok(Command::ListAccounts));
        assert_eq!(Command::from_str("x"), Err(()));
    }

    #[test]
    fn test_quit() {
        let (_, output) = run_script("q\nd\n");
        assert!(output.contains("Goodbye!"));
        assert!(!output.contains("Client ID"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let (registry, output) = run_script("");
        assert!(registry.clients().is_empty());
        assert!(output.contains("[d]  Deposit"));
    }

    #[test]
    fn test_invalid_option() {
        let (_, output) = run_script("zz\nq\n");
        assert!(output.contains("Invalid option, please choose again."));
    }

    #[test]
    fn test_register_open_and_deposit() {
        let script = format!("{}d\n111\n150.5\nq\n", REGISTER);
        let (registry, output) = run_script(&script);

        assert!(output.contains("Client registered."));
        assert!(output.contains("Account 1 opened."));
        assert!(output.contains("Deposit of 150.50 completed."));
        assert_eq!(registry.account(1).unwrap().balance().to_string(), "150.50");
    }

    #[test]
    fn test_unparseable_amount_reports_invalid_amount() {
        let script = format!("{}d\n111\nabc\nq\n", REGISTER);
        let (registry, output) = run_script(&script);

        assert!(output.contains(&LedgerError::InvalidAmount.to_string()));
        assert!(registry.account(1).unwrap().history().is_empty());
    }

    #[test]
    fn test_withdraw_failure_is_reported() {
        let script = format!("{}d\n111\n100\ns\n111\n1000\nq\n", REGISTER);
        let (registry, output) = run_script(&script);

        assert!(output.contains("insufficient funds, current balance is 100.00"));
        assert_eq!(registry.account(1).unwrap().balance().to_string(), "100.00");
    }

    #[test]
    fn test_duplicate_user_is_rejected_before_details() {
        let script = format!("{}nu\n111\nq\n", REGISTER);
        let (registry, output) = run_script(&script);

        assert!(output.contains("A client with identifier 111 already exists"));
        assert_eq!(registry.clients().len(), 1);
    }

    #[test]
    fn test_blank_user_id_rejected_before_details() {
        let (registry, output) = run_script("nu\n   \nq\n");

        assert!(output.contains("Client identifier must not be empty"));
        assert!(!output.contains("Full name"));
        assert!(registry.clients().is_empty());
    }

    #[test]
    fn test_huge_deposits_do_not_crash_session() {
        let script = format!(
            "{}d\n111\n79228162514264337593543950335\n\
             d\n111\n792281625142643375935439503.35\n\
             d\n111\n792281625142643375935439503.35\nq\n",
            REGISTER
        );
        let (registry, output) = run_script(&script);

        assert!(output.contains(&LedgerError::InvalidAmount.to_string()));
        assert!(output.contains("would exceed the maximum balance"));
        assert!(output.contains("Goodbye!"));
        let account = registry.account(1).unwrap();
        assert_eq!(account.balance().to_string(), "792281625142643375935439503.35");
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_statement_without_account() {
        let script = "nu\n222\nBruno\n03-04-1985\nRua B, 2 - Boa Vista - Recife/PE\ne\n222\nq\n";
        let (_, output) = run_script(script);
        assert!(output.contains("Client 222 has no account"));
    }

    #[test]
    fn test_statement_for_unknown_client() {
        let (_, output) = run_script("e\n999\nq\n");
        assert!(output.contains("Client not found: 999"));
    }

    #[test]
    fn test_statement_lists_entries_and_balance() {
        let script = format!("{}e\n111\nd\n111\n100\ns\n111\n30\ne\n111\nq\n", REGISTER);
        let (_, output) = run_script(&script);

        assert!(output.contains("No transactions recorded."));
        let last = output.rsplit("STATEMENT").next().unwrap();
        assert!(last.contains("Deposit"));
        assert!(last.contains("Withdrawal"));
        assert!(last.contains("Balance: 70.00"));
    }

    #[test]
    fn test_multiple_accounts_reprompt_until_valid() {
        let script = format!("{}nc\n111\nd\n111\n5\nx\n2\n40\nq\n", REGISTER);
        let (registry, output) = run_script(&script);

        assert!(output.contains("[2] Account 2"));
        assert!(output.contains("Invalid selection 5, choose between 1 and 2"));
        assert!(output.contains("Invalid selection, enter a number."));
        assert!(registry.account(1).unwrap().balance().is_zero());
        assert_eq!(registry.account(2).unwrap().balance().to_string(), "40.00");
    }

    #[test]
    fn test_list_accounts() {
        let (_, output) = run_script("lc\nq\n");
        assert!(output.contains("No accounts registered."));

        let script = format!("{}lc\nq\n", REGISTER);
        let (_, output) = run_script(&script);
        assert!(output.contains("Branch:  0001"));
        assert!(output.contains("Account: 1"));
        assert!(output.contains("Holder:  Ana Souza"));
    }
}
