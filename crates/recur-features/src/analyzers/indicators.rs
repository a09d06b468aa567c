//! Additional recurrence indicators
//!
//! Recent-activity counts, day-of-month consistency, first-occurrence
//! detection, and the refund/cancellation flag. The refund match scans
//! the full history regardless of vendor or time distance (known
//! source behavior, kept as-is).

use crate::error::Result;
use crate::history;
use crate::knowledge::VendorKnowledge;
use crate::stats;
use chrono::{Datelike, Duration};
use recur_core::{FeatureVector, Transaction};

pub fn recurrence_indicators(
    knowledge: &VendorKnowledge,
    transaction: &Transaction,
    all_transactions: &[Transaction],
) -> Result<FeatureVector> {
    let date = transaction.parsed_date()?;
    let mut features = FeatureVector::new();

    let dates = history::sorted_vendor_dates(transaction, all_transactions)?;
    if dates.is_empty() {
        features.insert("n_similar_transactions_last_3_months", 0i64)?;
        features.insert("n_similar_transactions_last_6_months", 0i64)?;
        features.insert("transaction_day_consistency", 0.0)?;
        features.insert("is_first_transaction_with_vendor", 1i64)?;
        features.insert("is_canceled_or_refunded", 0i64)?;
        return Ok(features);
    }

    let three_months_ago = date - Duration::days(90);
    let six_months_ago = date - Duration::days(180);
    let last_3_months = dates.iter().filter(|d| **d >= three_months_ago).count();
    let last_6_months = dates.iter().filter(|d| **d >= six_months_ago).count();

    let days_of_month: Vec<f64> = dates.iter().map(|d| d.day() as f64).collect();
    let day_consistency = stats::population_std_dev(&days_of_month);

    let is_first = date == dates[0];

    let is_canceled_or_refunded = all_transactions.iter().any(|t| {
        transaction.amount == -t.amount && knowledge.is_refund_like(&t.name)
    });

    features.insert("n_similar_transactions_last_3_months", last_3_months as i64)?;
    features.insert("n_similar_transactions_last_6_months", last_6_months as i64)?;
    features.insert("transaction_day_consistency", day_consistency)?;
    features.insert("is_first_transaction_with_vendor", is_first)?;
    features.insert("is_canceled_or_refunded", is_canceled_or_refunded)?;

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
    fn test_recent_activity_counts() {
        let knowledge = VendorKnowledge::builtin();
        let current = txn("Netflix", 15.49, "2024-07-01");
        let history = vec![
            txn("Netflix", 15.49, "2024-06-01"), // within 90 days
            txn("Netflix", 15.49, "2024-05-01"), // within 90 days
            txn("Netflix", 15.49, "2024-02-01"), // within 180 days only
            txn("Netflix", 15.49, "2023-01-01"), // outside both windows
        ];

        let features = recurrence_indicators(&knowledge, &current, &history).unwrap();
        assert_eq!(
            features
                .get("n_similar_transactions_last_3_months")
                .unwrap()
                .as_i64(),
            Some(2)
        );
        assert_eq!(
            features
                .get("n_similar_transactions_last_6_months")
                .unwrap()
                .as_i64(),
            Some(3)
        );
    }

    #[test]
    fn test_day_consistency_same_day_each_month() {
        let knowledge = VendorKnowledge::builtin();
        let current = txn("Netflix", 15.49, "2024-04-05");
        let history = vec![
            txn("Netflix", 15.49, "2024-01-05"),
            txn("Netflix", 15.49, "2024-02-05"),
            txn("Netflix", 15.49, "2024-03-05"),
        ];

        let features = recurrence_indicators(&knowledge, &current, &history).unwrap();
        assert_eq!(
            features.get("transaction_day_consistency").unwrap().as_f64(),
            Some(0.0)
        );
    }

    #[test]
    fn test_first_transaction_with_vendor() {
        let knowledge = VendorKnowledge::builtin();
        let first = txn("Netflix", 15.49, "2024-01-01");
        let later = txn("Netflix", 15.49, "2024-02-01");
        let history = vec![first.clone(), later.clone()];

        let features = recurrence_indicators(&knowledge, &first, &history).unwrap();
        assert_eq!(
            features
                .get("is_first_transaction_with_vendor")
                .unwrap()
                .as_i64(),
            Some(1)
        );

        let features = recurrence_indicators(&knowledge, &later, &history).unwrap();
        assert_eq!(
            features
                .get("is_first_transaction_with_vendor")
                .unwrap()
                .as_i64(),
            Some(0)
        );
    }

    #[test]
    fn test_refund_flag_matches_any_vendor() {
        let knowledge = VendorKnowledge::builtin();
        let current = txn("Acme", 20.0, "2024-01-01");
        let history = vec![
            current.clone(),
            txn("Refund - Acme", -20.0, "2024-01-10"),
        ];

        let features = recurrence_indicators(&knowledge, &current, &history).unwrap();
        assert_eq!(
            features.get("is_canceled_or_refunded").unwrap().as_i64(),
            Some(1)
        );
    }

    #[test]
    fn test_refund_flag_needs_keyword() {
        let knowledge = VendorKnowledge::builtin();
        let current = txn("Acme", 20.0, "2024-01-01");
        // Negated amount but no refund-like name
        let history = vec![current.clone(), txn("Other Store", -20.0, "2024-01-10")];

        let features = recurrence_indicators(&knowledge, &current, &history).unwrap();
        assert_eq!(
            features.get("is_canceled_or_refunded").unwrap().as_i64(),
            Some(0)
        );
    }

    #[test]
    fn test_no_vendor_history_defaults() {
        let knowledge = VendorKnowledge::builtin();
        let current = txn("Acme", 20.0, "2024-01-01");
        // Refund exists but the vendor subset is empty, so the default
        // record (including a zero refund flag) wins
        let history = vec![txn("Refund Dept", -20.0, "2024-01-10")];

        let features = recurrence_indicators(&knowledge, &current, &history).unwrap();
        assert_eq!(
            features
                .get("is_first_transaction_with_vendor")
                .unwrap()
                .as_i64(),
            Some(1)
        );
        assert_eq!(
            features.get("is_canceled_or_refunded").unwrap().as_i64(),
            Some(0)
        );
    }

    #[test]
    fn test_malformed_current_date_fails() {
        let knowledge = VendorKnowledge::builtin();
        let current = txn("Acme", 20.0, "2024-13-01");
        assert!(recurrence_indicators(&knowledge, &current, &[]).is_err());
    }
}
