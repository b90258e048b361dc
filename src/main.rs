//! # Bank-ledger
//! Interactive in-memory bank simulator. Menu is read from stdin and answers are written to
//! stdout.
//!
//! ## Arguments
//! - `--audit-log <path>` append every operation to csv file (fallback: `BANK_AUDIT_LOG`)
//! - `--summary` print csv summary of all accounts on exit
//!
//! Logs are written to stderr, level is controlled by `RUST_LOG` (default `warn`).

#![deny(missing_docs)]

use anyhow::Context;
use bank_ledger::{
    audit::AuditLog,
    bank::Bank,
    config::Config,
    console::Console,
    csv::{self, AccountSummary},
};
use tokio::io::{stdin, stdout, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("invalid arguments")?;
    tracing::debug!(?config, "starting session");

    let mut console = Console::new(BufReader::new(stdin()), stdout(), Bank::new());
    if let Some(path) = &config.audit_log {
        let audit = AuditLog::open(path).await?;
        console = console.with_audit(audit);
    }

    console.run().await.context("console session failed")?;

    if config.summary {
        let (bank, mut out) = console.into_parts();
        let summaries = bank.accounts().map(AccountSummary::from);
        csv::summarize_accounts(tokio_stream::iter(summaries), &mut out)
            .await
            .context("failed to save summary")?;
    }

    Ok(())
}
