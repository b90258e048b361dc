//! csv output format of accounts summary

use csv_async::{AsyncWriterBuilder, Terminator};
use rust_decimal::Decimal;

use crate::account::Account;
use serde::{Deserialize, Serialize};

use tokio::io::AsyncWrite;
use tokio_stream::{Stream, StreamExt};

/// summary of account balance and movements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct AccountSummary {
    pub number: String,
    pub agency: String,
    pub owner: String,
    balance: Decimal,
    // empty when the total overflows
    deposited: Option<Decimal>,
    withdrawn: Option<Decimal>,
    transactions: usize,
}

impl AccountSummary {
    #[allow(missing_docs)]
    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

impl<T: Account> From<&T> for AccountSummary {
    fn from(oth: &T) -> Self {
        let rp = 2; // round precision
        Self {
            number: oth.number().to_owned(),
            agency: oth.agency().to_owned(),
            owner: oth.owner().to_owned(),
            balance: oth.balance().round_dp(rp),
            deposited: oth.total_deposited().map(|d| d.round_dp(rp)),
            withdrawn: oth.total_withdrawn().map(|d| d.round_dp(rp)),
            transactions: oth.history().len(),
        }
    }
}

/// read items from `in_stream` and save them into `wr`. Headers will be
/// included automatically. Terminator is `\r\n`.
pub async fn summarize_accounts(
    in_stream: impl Stream<Item = AccountSummary> + Unpin,
    wr: impl AsyncWrite + Unpin,
) -> anyhow::Result<()> {
    let mut in_stream = in_stream;

    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);

    let mut wr = builder.create_serializer(wr);

    while let Some(acc_summary) = in_stream.next().await {
        wr.serialize(acc_summary).await?;
    }

    wr.flush().await?;
    Ok(())
}
