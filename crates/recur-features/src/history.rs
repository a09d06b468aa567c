//! History filtering
//!
//! Selects the subset of a transaction history matching a vendor name
//! or user id, preserving relative order. Nearly every analyzer starts
//! from one of these subsets.

use crate::error::Result;
use chrono::NaiveDate;
use recur_core::Transaction;

/// Transactions whose vendor name matches exactly (case-sensitive)
pub fn same_vendor<'a>(
    transaction: &Transaction,
    history: &'a [Transaction],
) -> Vec<&'a Transaction> {
    history
        .iter()
        .filter(|t| t.name == transaction.name)
        .collect()
}

/// Transactions owned by the same user id
pub fn same_user<'a>(
    transaction: &Transaction,
    history: &'a [Transaction],
) -> Vec<&'a Transaction> {
    history
        .iter()
        .filter(|t| t.user_id == transaction.user_id)
        .collect()
}

/// Parsed dates of the same-vendor subset, sorted ascending.
///
/// A malformed date anywhere in the subset aborts with
/// `CoreError::DateFormat`.
pub fn sorted_vendor_dates(
    transaction: &Transaction,
    history: &[Transaction],
) -> Result<Vec<NaiveDate>> {
    let mut dates = same_vendor(transaction, history)
        .iter()
        .map(|t| t.parsed_date())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    dates.sort();
    Ok(dates)
}
