//! Append only log of operations requested through the console

use anyhow::Context;
use chrono::Utc;
use csv_async::{AsyncSerializer, AsyncWriterBuilder};
use serde::Serialize;
use std::path::Path;
use tokio::{fs::OpenOptions, io::AsyncWrite};

/// Single line of audit log
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct AuditRecord<'a> {
    timestamp: String,
    operation: &'a str,
    arguments: &'a str,
    outcome: &'a str,
}

/// Write one csv record per operation: `timestamp,operation,arguments,outcome`
pub struct AuditLog {
    wr: AsyncSerializer<Box<dyn AsyncWrite + Unpin + Send>>,
}

impl AuditLog {
    /// Log into `wr`. No header row is written so many sessions can share one file.
    pub fn new(wr: impl AsyncWrite + Unpin + Send + 'static) -> Self {
        let mut builder = AsyncWriterBuilder::new();
        builder.has_headers(false);
        let wr: Box<dyn AsyncWrite + Unpin + Send> = Box::new(wr);
        Self {
            wr: builder.create_serializer(wr),
        }
    }

    /// Open (or create) file at `path` in append mode
    pub async fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("open audit log {}", path.display()))?;
        Ok(Self::new(f))
    }

    /// Append record stamped with current UTC time and flush it
    pub async fn record(
        &mut self,
        operation: &str,
        arguments: &str,
        outcome: &str,
    ) -> anyhow::Result<()> {
        let record = AuditRecord {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            operation,
            arguments,
            outcome,
        };
        self.wr.serialize(record).await.context("write audit record")?;
        self.wr.flush().await.context("flush audit log")?;
        Ok(())
    }
}
