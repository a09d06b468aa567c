//! Calendar features
//!
//! Pure functions of the transaction's own date, plus the
//! days-since-last figure computed against the second-to-last sorted
//! vendor date (the latest date is usually the current transaction's
//! own occurrence).

use crate::error::Result;
use crate::history;
use chrono::Datelike;
use recur_core::{FeatureVector, Transaction};

pub fn calendar_features(
    transaction: &Transaction,
    all_transactions: &[Transaction],
) -> Result<FeatureVector> {
    let date = transaction.parsed_date()?;
    let dates = history::sorted_vendor_dates(transaction, all_transactions)?;

    let days_since_last = if dates.len() > 1 {
        (date - dates[dates.len() - 2]).num_days()
    } else {
        0
    };

    let weekday = date.weekday().num_days_from_monday() as i64;

    let mut features = FeatureVector::new();
    features.insert("day_of_month", date.day() as i64)?;
    features.insert("weekday", weekday)?;
    features.insert("week_of_year", date.iso_week().week() as i64)?;
    features.insert("is_weekend", weekday >= 5)?;
    features.insert("days_since_last_transaction", days_since_last)?;

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(name: &str, date: &str) -> Transaction {
        Transaction {
            id: format!("{name}-{date}"),
            user_id: "user1".to_string(),
            name: name.to_string(),
            amount: 15.49,
            date: date.to_string(),
        }
    }

    #[test]
    fn test_monday_features() {
        // 2024-01-01 is a Monday in ISO week 1
        let current = txn("Netflix", "2024-01-01");
        let features = calendar_features(&current, &[]).unwrap();

        assert_eq!(features.get("day_of_month").unwrap().as_i64(), Some(1));
        assert_eq!(features.get("weekday").unwrap().as_i64(), Some(0));
        assert_eq!(features.get("week_of_year").unwrap().as_i64(), Some(1));
        assert_eq!(features.get("is_weekend").unwrap().as_i64(), Some(0));
        assert_eq!(
            features.get("days_since_last_transaction").unwrap().as_i64(),
            Some(0)
        );
    }

    #[test]
    fn test_weekend_flag() {
        // 2024-01-06 is a Saturday
        let features = calendar_features(&txn("Netflix", "2024-01-06"), &[]).unwrap();
        assert_eq!(features.get("weekday").unwrap().as_i64(), Some(5));
        assert_eq!(features.get("is_weekend").unwrap().as_i64(), Some(1));

        // 2024-01-07 is a Sunday
        let features = calendar_features(&txn("Netflix", "2024-01-07"), &[]).unwrap();
        assert_eq!(features.get("weekday").unwrap().as_i64(), Some(6));
        assert_eq!(features.get("is_weekend").unwrap().as_i64(), Some(1));
    }

    #[test]
    fn test_days_since_last_uses_second_to_last_date() {
        let current = txn("Netflix", "2024-03-01");
        let history = vec![
            txn("Netflix", "2024-01-01"),
            txn("Netflix", "2024-02-01"),
            current.clone(),
        ];

        // Sorted vendor dates end [..., 2024-02-01, 2024-03-01]; the
        // current occurrence is excluded via the second-to-last rule
        let features = calendar_features(&current, &history).unwrap();
        assert_eq!(
            features.get("days_since_last_transaction").unwrap().as_i64(),
            Some(29)
        );
    }

    #[test]
    fn test_days_since_last_single_occurrence() {
        let current = txn("Netflix", "2024-03-01");
        let history = vec![current.clone()];

        let features = calendar_features(&current, &history).unwrap();
        assert_eq!(
            features.get("days_since_last_transaction").unwrap().as_i64(),
            Some(0)
        );
    }
}
