//! Amount consistency analysis
//!
//! Fixed-amount detection over the vendor's amount history plus size
//! bucketing of the current transaction's amount.

use crate::error::Result;
use crate::history;
use recur_core::{FeatureVector, Transaction};

/// Fixed-amount tolerance band: max may exceed min by at most 2%
const FIXED_AMOUNT_TOLERANCE: f64 = 1.02;

pub fn amount_features(
    transaction: &Transaction,
    all_transactions: &[Transaction],
) -> Result<FeatureVector> {
    let mut features = FeatureVector::new();

    let vendor_transactions = history::same_vendor(transaction, all_transactions);
    if vendor_transactions.is_empty() {
        features.insert("is_fixed_amount_recurring", 0i64)?;
        features.insert("amount_fluctuation_range", 0.0)?;
        features.insert("is_small_subscription", 0i64)?;
        features.insert("is_mid_sized_subscription", 0i64)?;
        features.insert("is_large_recurring_payment", 0i64)?;
        return Ok(features);
    }

    let amounts: Vec<f64> = vendor_transactions.iter().map(|t| t.amount).collect();
    let min_amount = amounts.iter().copied().fold(f64::INFINITY, f64::min);
    let max_amount = amounts.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    features.insert(
        "is_fixed_amount_recurring",
        max_amount <= min_amount * FIXED_AMOUNT_TOLERANCE,
    )?;
    features.insert("amount_fluctuation_range", max_amount - min_amount)?;
    features.insert(
        "is_small_subscription",
        (3.99..=14.99).contains(&transaction.amount),
    )?;
    features.insert(
        "is_mid_sized_subscription",
        (15.0..=49.99).contains(&transaction.amount),
    )?;
    features.insert("is_large_recurring_payment", transaction.amount >= 50.0)?;

    Ok(features)
}
