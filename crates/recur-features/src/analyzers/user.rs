//! Per-user aggregates
//!
//! Spending mean/total over all of the user's transactions plus a
//! count of known subscription brands. The brand match compares the
//! raw transaction name, not the lower-cased vendor key (known quirk
//! of the source behavior, kept as-is).

use crate::error::Result;
use crate::history;
use crate::knowledge::VendorKnowledge;
use crate::stats;
use recur_core::{FeatureVector, Transaction};

pub fn user_features(
    knowledge: &VendorKnowledge,
    transaction: &Transaction,
    all_transactions: &[Transaction],
) -> Result<FeatureVector> {
    let mut features = FeatureVector::new();

    let user_transactions = history::same_user(transaction, all_transactions);
    if user_transactions.is_empty() {
        features.insert("user_avg_transaction_amount", 0.0)?;
        features.insert("user_total_spending", 0.0)?;
        features.insert("user_subscription_count", 0i64)?;
        return Ok(features);
    }

    let amounts: Vec<f64> = user_transactions.iter().map(|t| t.amount).collect();
    let subscription_count = user_transactions
        .iter()
        .filter(|t| knowledge.user_subscription_brands.contains(&t.name))
        .count();

    features.insert("user_avg_transaction_amount", stats::mean(&amounts))?;
    features.insert("user_total_spending", amounts.iter().sum::<f64>())?;
    features.insert("user_subscription_count", subscription_count as i64)?;

    Ok(features)
}
