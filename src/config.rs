//! Command line configuration of the binary

use std::{env, path::PathBuf};

/// Environment variable used when `--audit-log` is not given
pub const AUDIT_LOG_ENV: &str = "BANK_AUDIT_LOG";

/// Runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// file where every console operation is appended
    pub audit_log: Option<PathBuf>,
    /// print csv summary of all accounts on exit
    pub summary: bool,
}

impl Config {
    /// Read configuration from process arguments and environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::parse(env::args().skip(1), env::var_os(AUDIT_LOG_ENV).map(PathBuf::from))
    }

    /// Parse `args` (without program name). `audit_log_env` is used when no `--audit-log` is given.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        audit_log_env: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--audit-log" => {
                    let path = args
                        .next()
                        .ok_or_else(|| anyhow::Error::msg("expected path after --audit-log"))?;
                    config.audit_log = Some(PathBuf::from(path));
                }
                "--summary" => config.summary = true,
                other => anyhow::bail!("unexpected argument `{other}`"),
            }
        }

        if config.audit_log.is_none() {
            config.audit_log = audit_log_env;
        }
        Ok(config)
    }
}
