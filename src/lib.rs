//!"Simple in-memory bank accounts simulator driven by a text menu"

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod audit;
pub mod bank;
pub mod config;
pub mod console;
pub mod csv;
pub mod customer;
pub mod errors;

/// Account identifier. Unique across the whole [`bank::Bank`]
pub type AccountNumber = String;
/// Customer identifier (CPF like tax number)
pub type TaxId = String;

/// Agency shared by every account
pub const AGENCY: &str = "0001";
