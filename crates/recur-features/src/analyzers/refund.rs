//! Refund statistics
//!
//! Matches history transactions whose amount is the exact negation of
//! the current transaction's amount, regardless of vendor or time
//! distance (known source behavior, kept as-is).

use crate::error::Result;
use crate::stats;
use recur_core::{FeatureVector, Transaction};

pub fn refund_features(
    transaction: &Transaction,
    all_transactions: &[Transaction],
) -> Result<FeatureVector> {
    let mut features = FeatureVector::new();

    let refund_transactions: Vec<&Transaction> = all_transactions
        .iter()
        .filter(|t| t.amount == -transaction.amount)
        .collect();

    if refund_transactions.is_empty() {
        features.insert("refund_rate", 0.0)?;
        features.insert("refund_time_lag", 0.0)?;
        return Ok(features);
    }

    let refund_rate = refund_transactions.len() as f64 / all_transactions.len() as f64;

    // Signed lag: negative when the refund precedes the charge
    let date = transaction.parsed_date()?;
    let lags = refund_transactions
        .iter()
        .map(|t| Ok((t.parsed_date()? - date).num_days() as f64))
        .collect::<Result<Vec<f64>>>()?;

    features.insert("refund_rate", refund_rate)?;
    features.insert("refund_time_lag", stats::mean(&lags))?;

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(name: &str, amount: f64, date: &str) -> Transaction {
        Transaction {
            id: format!("{name}-{date}"),
            user_id: "user1".to_string(),
            name: name.to_string(),
            amount,
            date: date.to_string(),
        }
    }

    #[test]
    fn test_refund_rate_and_lag() {
        let current = txn("Acme", 20.0, "2024-01-01");
        let history = vec![
            current.clone(),
            txn("Refund - Acme", -20.0, "2024-01-11"),
            txn("Gym", 30.0, "2024-01-05"),
            txn("Other Refund", -20.0, "2024-01-21"),
        ];

        let features = refund_features(&current, &history).unwrap();
        let rate = features.get("refund_rate").unwrap().as_f64().unwrap();
        assert!((rate - 0.5).abs() < 1e-9);
        // Lags are [10, 20] days
        let lag = features.get("refund_time_lag").unwrap().as_f64().unwrap();
        assert!((lag - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_refund_before_charge_is_negative_lag() {
        let current = txn("Acme", 20.0, "2024-02-01");
        let history = vec![current.clone(), txn("Reversal", -20.0, "2024-01-22")];

        let features = refund_features(&current, &history).unwrap();
        let lag = features.get("refund_time_lag").unwrap().as_f64().unwrap();
        assert!((lag + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_refunds_defaults() {
        let current = txn("Acme", 20.0, "2024-01-01");
        let history = vec![current.clone(), txn("Gym", 30.0, "2024-01-05")];

        let features = refund_features(&current, &history).unwrap();
        assert_eq!(features.get("refund_rate").unwrap().as_f64(), Some(0.0));
        assert_eq!(features.get("refund_time_lag").unwrap().as_f64(), Some(0.0));
    }

    #[test]
    fn test_refund_rate_in_unit_interval() {
        let current = txn("Acme", 20.0, "2024-01-01");
        let history = vec![txn("Reversal", -20.0, "2024-01-02")];

        let features = refund_features(&current, &history).unwrap();
        let rate = features.get("refund_rate").unwrap().as_f64().unwrap();
        assert!((0.0..=1.0).contains(&rate));
    }
}
