//! Transaction records
//!
//! A `Transaction` is the immutable input record supplied by the
//! storage/ingestion layer. Dates arrive as `YYYY-MM-DD` text and are
//! parsed on demand.

use crate::error::{CoreError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Expected textual date format for transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique identifier
    pub id: String,

    /// Identifier of the owning account
    pub user_id: String,

    /// Vendor/merchant label (free text)
    pub name: String,

    /// Signed amount in currency units; sign encodes debit/credit
    pub amount: f64,

    /// Calendar date as `YYYY-MM-DD` text
    pub date: String,
}

impl Transaction {
    /// Parse the transaction date.
    ///
    /// A malformed date is a hard input error; feature computation for
    /// this transaction must be aborted by the caller.
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|source| {
            CoreError::DateFormat {
                value: self.date.clone(),
                source,
            }
        })
    }

    /// Vendor name lower-cased, as used by the knowledge-base lookups
    pub fn vendor_key(&self) -> String {
        self.name.to_lowercase()
    }
}
