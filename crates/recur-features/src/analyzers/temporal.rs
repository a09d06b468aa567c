//! Temporal trend features
//!
//! Time since the first vendor occurrence and monthly transaction
//! frequency over the observed span.

use crate::error::Result;
use crate::history;
use recur_core::{FeatureVector, Transaction};

pub fn temporal_features(
    transaction: &Transaction,
    all_transactions: &[Transaction],
) -> Result<FeatureVector> {
    let mut features = FeatureVector::new();

    let dates = history::sorted_vendor_dates(transaction, all_transactions)?;
    if dates.len() < 2 {
        features.insert("time_since_first_transaction", 0i64)?;
        features.insert("transaction_frequency", 0.0)?;
        return Ok(features);
    }

    let date = transaction.parsed_date()?;
    let time_since_first = (date - dates[0]).num_days();

    let span_days = (dates[dates.len() - 1] - dates[0]).num_days();
    let frequency = if span_days == 0 {
        0.0
    } else {
        dates.len() as f64 / (span_days as f64 / 30.0)
    };

    features.insert("time_since_first_transaction", time_since_first)?;
    features.insert("transaction_frequency", frequency)?;

    Ok(features)
}
