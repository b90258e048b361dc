//! Text menu translating user input into operations on [`Bank`]

use crate::{
    account::{Account, Transaction, TransactionKind},
    audit::AuditLog,
    bank::Bank,
    customer::Customer,
};
use rust_decimal::Decimal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{info, warn};

const MENU: &str = "
================ MENU ================
[1]\tDeposit
[2]\tWithdraw
[3]\tStatement
[4]\tNew customer
[5]\tNew account
[6]\tList accounts
[0]\tExit
=> ";

const SEPARATOR: &str = "==========================================";

/// Menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    NewCustomer,
    NewAccount,
    ListAccounts,
    Exit,
}

impl Command {
    /// Map menu key to command
    pub fn parse(key: &str) -> Option<Command> {
        match key.trim() {
            "1" => Some(Command::Deposit),
            "2" => Some(Command::Withdraw),
            "3" => Some(Command::Statement),
            "4" => Some(Command::NewCustomer),
            "5" => Some(Command::NewAccount),
            "6" => Some(Command::ListAccounts),
            "0" => Some(Command::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Render statement of `account`: each entry followed by balance after it
pub fn statement(account: &impl Account) -> String {
    let mut out = String::from("\n================ STATEMENT ================\n");
    let history = account.history();
    if history.is_empty() {
        out.push_str("No movements.\n");
    }

    // replayed balance never leaves range, committed entries were validated against it
    let mut running = Some(Decimal::ZERO);
    for entry in history.entries() {
        running = running.and_then(|balance| match entry.kind() {
            TransactionKind::Deposit => balance.checked_add(*entry.amount()),
            TransactionKind::Withdrawal => balance.checked_sub(*entry.amount()),
        });
        out.push_str(&format!(
            "{} of {:.2} on {}\n",
            entry.kind(),
            entry.amount(),
            entry.timestamp().format("%d-%m-%Y %H:%M:%S")
        ));
        match running {
            Some(balance) => out.push_str(&format!("Balance: {:.2}\n", balance)),
            None => out.push_str("Balance: unavailable\n"),
        }
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

/// Console session over `input` and `output`
pub struct Console<R, W> {
    input: Lines<R>,
    output: W,
    bank: Bank,
    audit: Option<AuditLog>,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create session operating on `bank`
    pub fn new(input: R, output: W, bank: Bank) -> Self {
        Self {
            input: input.lines(),
            output,
            bank,
            audit: None,
        }
    }

    /// Record every operation in `audit`
    pub fn with_audit(mut self, audit: AuditLog) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Finish session returning state of the bank and output
    pub fn into_parts(self) -> (Bank, W) {
        (self.bank, self.output)
    }

    /// Serve menu until exit option or end of input
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let Some(key) = self.prompt(MENU).await? else {
                break;
            };

            let flow = match Command::parse(&key) {
                Some(Command::Deposit) => self.move_money(TransactionKind::Deposit).await?,
                Some(Command::Withdraw) => self.move_money(TransactionKind::Withdrawal).await?,
                Some(Command::Statement) => self.print_statement().await?,
                Some(Command::NewCustomer) => self.new_customer().await?,
                Some(Command::NewAccount) => self.new_account().await?,
                Some(Command::ListAccounts) => self.list_accounts().await?,
                Some(Command::Exit) => Flow::Exit,
                None => {
                    self.say("Invalid option, please select again.").await?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.say("Goodbye!").await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn move_money(&mut self, kind: TransactionKind) -> anyhow::Result<Flow> {
        let Some(number) = self.prompt("Account number: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(raw_amount) = self.prompt(&format!("{kind} amount: ")).await? else {
            return Ok(Flow::Exit);
        };

        let result = match raw_amount.parse::<Decimal>() {
            Ok(amount) => self
                .bank
                .perform_transaction(&number, Transaction::new(kind, amount))
                .map(|entry| entry.amount())
                .map_err(|e| e.to_string()),
            Err(_) => Err(format!("invalid value `{raw_amount}`")),
        };

        let arguments = format!("account={number} amount={raw_amount}");
        let operation = kind.name().to_lowercase();
        match result {
            Ok(amount) => {
                info!(account = %number, %amount, "{} committed", operation);
                self.say(&format!("{kind} of {amount:.2} completed.")).await?;
                self.audit(&operation, &arguments, "ok").await?;
            }
            Err(reason) => {
                warn!(account = %number, %reason, "{} rejected", operation);
                self.say(&format!("Operation failed! {reason}")).await?;
                self.audit(&operation, &arguments, &reason).await?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn print_statement(&mut self) -> anyhow::Result<Flow> {
        let Some(number) = self.prompt("Account number: ").await? else {
            return Ok(Flow::Exit);
        };

        let text = match self.bank.account(&number) {
            Ok(account) => statement(account),
            Err(e) => format!("Operation failed! {e}"),
        };
        self.say(&text).await?;
        Ok(Flow::Continue)
    }

    async fn new_customer(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.prompt("Customer name: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(tax_id) = self.prompt("Tax id: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(address) = self.prompt("Address: ").await? else {
            return Ok(Flow::Exit);
        };

        let arguments = format!("name={name} tax_id={tax_id} address={address}");
        let result = self
            .bank
            .register_customer(Customer::new(name, tax_id.clone(), address))
            .map(|_| ())
            .map_err(|e| e.to_string());

        match result {
            Ok(()) => {
                info!(%tax_id, "customer created");
                self.say("Customer created!").await?;
                self.audit("new_customer", &arguments, "ok").await?;
            }
            Err(reason) => {
                warn!(%tax_id, %reason, "customer rejected");
                self.say(&format!("Operation failed! {reason}")).await?;
                self.audit("new_customer", &arguments, &reason).await?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn new_account(&mut self) -> anyhow::Result<Flow> {
        let Some(tax_id) = self.prompt("Customer tax id: ").await? else {
            return Ok(Flow::Exit);
        };

        if self.bank.customer(&tax_id).is_none() {
            warn!(%tax_id, "account creation for unknown customer");
            self.say("Customer not found, account creation aborted!")
                .await?;
            self.audit("new_account", &format!("tax_id={tax_id}"), "customer not found")
                .await?;
            return Ok(Flow::Continue);
        }

        let Some(number) = self
            .prompt("Account number (leave blank to generate): ")
            .await?
        else {
            return Ok(Flow::Exit);
        };
        let number = Some(number).filter(|n| !n.is_empty());

        let arguments = format!("tax_id={tax_id} number={}", number.as_deref().unwrap_or(""));
        let result = self
            .bank
            .open_checking_account(&tax_id, number)
            .map(|account| account.number().to_owned())
            .map_err(|e| e.to_string());

        match result {
            Ok(number) => {
                info!(%tax_id, account = %number, "account opened");
                self.say(&format!("Account {number} created!")).await?;
                self.audit("new_account", &arguments, &format!("ok number={number}"))
                    .await?;
            }
            Err(reason) => {
                warn!(%tax_id, %reason, "account rejected");
                self.say(&format!("Operation failed! {reason}")).await?;
                self.audit("new_account", &arguments, &reason).await?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn list_accounts(&mut self) -> anyhow::Result<Flow> {
        let listing: Vec<String> = self
            .bank
            .accounts()
            .map(|account| {
                let holder = self
                    .bank
                    .customer(account.owner())
                    .map_or(account.owner(), Customer::name);
                format!("{account}\nHolder:\t{holder}\n{SEPARATOR}")
            })
            .collect();

        if listing.is_empty() {
            self.say("No accounts.").await?;
        }
        for text in listing {
            self.say(&text).await?;
        }
        Ok(Flow::Continue)
    }

    async fn say(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        Ok(())
    }

    async fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        let line = self.input.next_line().await?;
        Ok(line.map(|l| l.trim().to_owned()))
    }

    async fn audit(&mut self, operation: &str, arguments: &str, outcome: &str) -> anyhow::Result<()> {
        if let Some(audit) = self.audit.as_mut() {
            audit.record(operation, arguments, outcome).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{statement, Command, Console};
    use crate::{
        account::{Account, BankAccount, Transaction},
        bank::Bank,
    };
    use rust_decimal::Decimal;

    async fn run_script(script: &str) -> anyhow::Result<(Bank, String)> {
        let mut console = Console::new(script.as_bytes(), Vec::new(), Bank::new());
        console.run().await?;
        let (bank, output) = console.into_parts();
        Ok((bank, String::from_utf8(output)?))
    }

    #[test]
    fn menu_keys() {
        assert_eq!(Command::parse(" 1 "), Some(Command::Deposit));
        assert_eq!(Command::parse("0"), Some(Command::Exit));
        assert_eq!(Command::parse("7"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn statement_of_empty_account() {
        let a = BankAccount::new_checking("1", "111");
        assert!(statement(&a).contains("No movements."));
    }

    #[test]
    fn statement_shows_running_balance() {
        let mut a = BankAccount::new_checking("1", "111");
        a.apply_transaction(Transaction::Deposit(Decimal::new(100, 0)))
            .unwrap();
        a.apply_transaction(Transaction::Withdrawal(Decimal::new(305, 1)))
            .unwrap();

        let text = statement(&a);
        let lines: Vec<_> = text.lines().filter(|l| !l.is_empty()).collect();
        assert!(lines[1].starts_with("Deposit of 100.00 on "));
        assert_eq!(lines[2], "Balance: 100.00");
        assert!(lines[4].starts_with("Withdrawal of 30.50 on "));
        assert_eq!(lines[5], "Balance: 69.50");
        assert!(!text.contains("No movements."));
    }

    #[tokio::test]
    async fn full_session() -> anyhow::Result<()> {
        let script = "4\nAna\n111\nStreet 1\n\
                      5\n111\n\n\
                      1\n1111\n100\n\
                      2\n1111\n30\n\
                      2\n1111\n1000\n\
                      3\n1111\n\
                      0\n";
        let (bank, out) = run_script(script).await?;

        assert!(out.contains("Customer created!"));
        assert!(out.contains("Account 1111 created!"));
        assert!(out.contains("Deposit of 100.00 completed."));
        assert!(out.contains("Withdrawal of 30.00 completed."));
        assert!(out.contains("Operation failed! withdrawal amount above the limit of 800"));
        assert!(out.contains("Balance: 70.00"));
        assert!(out.ends_with("Goodbye!\n"));

        let account = bank.account("1111")?;
        assert_eq!(account.balance(), Decimal::new(70, 0));
        assert_eq!(account.history().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn rejected_inputs_are_reported() -> anyhow::Result<()> {
        let script = "9\n\
                      1\n404\n10\n\
                      5\n999\n\
                      4\nAna\n111\nStreet 1\n\
                      4\nBia\n111\nStreet 2\n\
                      5\n111\n77\n\
                      1\n77\nabc\n\
                      1\n77\n-5\n\
                      3\n404\n\
                      3\n77\n";
        let (bank, out) = run_script(script).await?;

        assert!(out.contains("Invalid option, please select again."));
        assert!(out.contains("Operation failed! account 404 not found"));
        assert!(out.contains("Customer not found, account creation aborted!"));
        assert!(out.contains("Operation failed! customer with tax id 111 already exists"));
        assert!(out.contains("Account 77 created!"));
        assert!(out.contains("Operation failed! invalid value `abc`"));
        assert!(out.contains("Operation failed! invalid value: amount must be greater than zero"));
        assert!(out.contains("No movements."));
        // end of input closes the session
        assert!(out.ends_with("Goodbye!\n"));

        assert_eq!(bank.customer("111").unwrap().name(), "Ana");
        assert!(bank.account("77")?.history().is_empty());
        Ok(())
    }

    #[test]
    fn statement_of_account_with_huge_movements() {
        let mut a = BankAccount::new_basic("1", "111");
        a.apply_transaction(Transaction::Deposit(Decimal::MAX))
            .unwrap();
        a.apply_transaction(Transaction::Withdrawal(Decimal::MAX))
            .unwrap();
        a.apply_transaction(Transaction::Deposit(Decimal::MAX))
            .unwrap();

        let text = statement(&a);
        assert!(text.contains("Balance: 0.00"));
        assert!(!text.contains("unavailable"));
    }

    #[tokio::test]
    async fn deposit_past_max_is_reported() -> anyhow::Result<()> {
        let script = "4\nAna\n111\nStreet 1\n\
                      5\n111\n\n\
                      1\n1111\n79228162514264337593543950335\n\
                      1\n1111\n1\n\
                      0\n";
        let (bank, out) = run_script(script).await?;

        assert!(out.contains(
            "Operation failed! balance would exceed the maximal representable amount"
        ));
        assert!(out.ends_with("Goodbye!\n"));
        let account = bank.account("1111")?;
        assert_eq!(account.balance(), Decimal::MAX);
        assert_eq!(account.history().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn list_accounts() -> anyhow::Result<()> {
        let (_, out) = run_script("6\n4\nAna\n111\nStreet\n5\n111\n\n6\n0\n").await?;
        assert!(out.contains("No accounts."));
        assert!(out.contains("Agency:\t0001\nAccount:\t1111\nHolder:\tAna\n"));
        Ok(())
    }
}
