//! Interactive menu over a [`Bank`].
//!
//! The loop is generic over the reader and writer so tests can drive a whole
//! session from byte buffers. All parsing of user text happens here; the
//! ledger core only ever sees typed values.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::account::BankAccount;
use crate::amount::Amount;
use crate::bank::Bank;
use crate::client::{Person, TaxId};
use crate::transaction::{Transaction, TransactionKind};
use crate::AccountNumber;

const MENU: &str = "\nMENU\n\
(1) Withdraw\n\
(2) Deposit\n\
(3) Statement\n\
(4) New client\n\
(5) New account\n\
(6) List accounts\n\
(0) Exit\n\n\
Option: ";

/// Run the menu loop until the user exits or the input ends.
///
/// Domain rejections are rendered as messages and the loop continues; only
/// I/O failures end the session with an error.
pub async fn run<R, W>(bank: &mut Bank, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        let Some(option) = prompt(&mut lines, &mut output, MENU).await? else {
            break;
        };

        match option.trim() {
            "1" => transact(bank, &mut lines, &mut output, TransactionKind::Withdrawal).await?,
            "2" => transact(bank, &mut lines, &mut output, TransactionKind::Deposit).await?,
            "3" => statement(bank, &mut lines, &mut output).await?,
            "4" => new_client(bank, &mut lines, &mut output).await?,
            "5" => new_account(bank, &mut lines, &mut output).await?,
            "6" => list_accounts(bank, &mut output).await?,
            "0" => {
                say(&mut output, "Goodbye.").await?;
                break;
            }
            _ => say(&mut output, "Invalid option.").await?,
        }
    }

    Ok(())
}

async fn say<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}

/// Write `text` without a newline and read the next input line. `None` means
/// the input ended.
async fn prompt<R, W>(
    lines: &mut Lines<R>,
    output: &mut W,
    text: &str,
) -> anyhow::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(lines.next_line().await?)
}

/// Resolve which of the client's accounts an operation targets: the single
/// account when there is one, otherwise a prompted choice.
async fn select_account<R, W>(
    bank: &Bank,
    tax_id: &TaxId,
    lines: &mut Lines<R>,
    output: &mut W,
) -> anyhow::Result<Option<AccountNumber>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let numbers = match bank.client_accounts(tax_id) {
        Ok(numbers) => numbers,
        Err(err) => {
            say(output, &format!("Cannot select an account: {err}.")).await?;
            return Ok(None);
        }
    };

    if numbers.len() == 1 {
        return Ok(Some(numbers[0]));
    }

    let question = format!("Which account? (1-{}): ", numbers.len());
    let Some(choice) = prompt(lines, output, &question).await? else {
        return Ok(None);
    };
    match choice.trim().parse::<usize>() {
        Ok(i) if i >= 1 && i <= numbers.len() => Ok(Some(numbers[i - 1])),
        _ => {
            say(output, "No such account.").await?;
            Ok(None)
        }
    }
}

async fn transact<R, W>(
    bank: &mut Bank,
    lines: &mut Lines<R>,
    output: &mut W,
    kind: TransactionKind,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(raw) = prompt(lines, output, "Tax id: ").await? else {
        return Ok(());
    };
    let tax_id = TaxId::new(raw.trim());

    let Some(raw) = prompt(lines, output, "Amount: ").await? else {
        return Ok(());
    };
    let Ok(amount) = raw.parse::<Amount>() else {
        say(output, "Not a valid amount.").await?;
        return Ok(());
    };

    let Some(number) = select_account(bank, &tax_id, lines, output).await? else {
        return Ok(());
    };

    let transaction = match kind {
        TransactionKind::Deposit => Transaction::Deposit(amount),
        TransactionKind::Withdrawal => Transaction::Withdrawal(amount),
    };
    match bank.execute(&tax_id, number, &transaction) {
        Ok(()) => say(output, &format!("{kind} completed.")).await?,
        Err(err) => say(output, &format!("{kind} not completed: {err}.")).await?,
    }

    Ok(())
}

async fn statement<R, W>(bank: &Bank, lines: &mut Lines<R>, output: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(raw) = prompt(lines, output, "Tax id: ").await? else {
        return Ok(());
    };
    let tax_id = TaxId::new(raw.trim());

    let Some(number) = select_account(bank, &tax_id, lines, output).await? else {
        return Ok(());
    };
    let account = match bank.statement(number) {
        Ok(account) => account,
        Err(err) => {
            say(output, &format!("No statement available: {err}.")).await?;
            return Ok(());
        }
    };

    say(output, "================ STATEMENT ================").await?;
    if account.history().is_empty() {
        say(output, "No transactions recorded.").await?;
    } else {
        for entry in account.history().entries() {
            let line = format!(
                "{}:\t$ {}\t{}",
                entry.kind(),
                entry.amount(),
                entry.recorded_at().format("%d-%m-%Y %H:%M:%S")
            );
            say(output, &line).await?;
        }
    }
    say(output, &format!("\nBalance:\t$ {}", account.balance())).await?;
    say(output, "===========================================").await?;

    Ok(())
}

async fn new_client<R, W>(bank: &mut Bank, lines: &mut Lines<R>, output: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(raw) = prompt(lines, output, "Tax id (numbers only): ").await? else {
        return Ok(());
    };
    let tax_id = TaxId::new(raw.trim());
    if bank.client(&tax_id).is_some() {
        say(output, "Tax id already registered.").await?;
        return Ok(());
    }

    let Some(name) = prompt(lines, output, "Full name: ").await? else {
        return Ok(());
    };
    let Some(birth_date) = prompt(lines, output, "Birth date (DD-MM-YYYY): ").await? else {
        return Ok(());
    };
    let Some(address) = prompt(lines, output, "Address: ").await? else {
        return Ok(());
    };

    let person = Person::new(tax_id, name.trim(), birth_date.trim());
    match bank.register_client(person, address.trim()) {
        Ok(()) => say(output, "Client registered.").await?,
        Err(err) => say(output, &format!("Client not registered: {err}.")).await?,
    }

    Ok(())
}

async fn new_account<R, W>(bank: &mut Bank, lines: &mut Lines<R>, output: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(raw) = prompt(lines, output, "Tax id: ").await? else {
        return Ok(());
    };
    let tax_id = TaxId::new(raw.trim());

    match bank.open_account(&tax_id) {
        Ok(number) => say(output, &format!("Account {number} created.")).await?,
        Err(err) => say(output, &format!("Account not created: {err}.")).await?,
    }

    Ok(())
}

async fn list_accounts<W>(bank: &Bank, output: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for account in bank.accounts() {
        let holder = bank
            .client(account.owner())
            .map(|client| client.person().name().to_string())
            .unwrap_or_default();

        say(output, &"=".repeat(43)).await?;
        say(output, &format!("Branch:\t\t{}", account.branch())).await?;
        say(output, &format!("Account:\t{}", account.number())).await?;
        say(output, &format!("Holder:\t\t{holder}")).await?;
    }

    Ok(())
}
