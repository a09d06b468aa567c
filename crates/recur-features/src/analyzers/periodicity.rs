//! Interval and periodicity analysis
//!
//! Computes day-gaps between consecutive same-vendor transactions and
//! classifies recurrence cadence. The cadence windows overlap on
//! purpose (a 14-day gap is both biweekly and semimonthly).

use crate::error::Result;
use crate::history;
use crate::stats;
use recur_core::{FeatureVector, Transaction};

/// Interval statistics and cadence flags over the same-vendor history.
///
/// With fewer than two same-vendor transactions all ten keys take
/// their zero defaults.
pub fn interval_features(
    transaction: &Transaction,
    all_transactions: &[Transaction],
) -> Result<FeatureVector> {
    let mut features = FeatureVector::new();

    let dates = history::sorted_vendor_dates(transaction, all_transactions)?;
    if dates.len() < 2 {
        features.insert("is_biweekly", 0i64)?;
        features.insert("is_semimonthly", 0i64)?;
        features.insert("is_monthly", 0i64)?;
        features.insert("is_bimonthly", 0i64)?;
        features.insert("is_quarterly", 0i64)?;
        features.insert("is_annual", 0i64)?;
        features.insert("avg_days_between_transactions", 0.0)?;
        features.insert("min_days_between_transactions", 0i64)?;
        features.insert("max_days_between_transactions", 0i64)?;
        features.insert("std_days_between_transactions", 0.0)?;
        return Ok(features);
    }

    let gaps: Vec<i64> = dates.windows(2).map(|w| (w[1] - w[0]).num_days()).collect();
    let gap_floats: Vec<f64> = gaps.iter().map(|g| *g as f64).collect();

    // `iter().min()/max()` are Some: dates.len() >= 2 implies >= 1 gap
    let min_gap = gaps.iter().min().copied().unwrap_or(0);
    let max_gap = gaps.iter().max().copied().unwrap_or(0);

    features.insert("is_biweekly", gaps.iter().any(|g| *g == 14))?;
    features.insert(
        "is_semimonthly",
        gaps.iter().any(|g| (14..=17).contains(g)),
    )?;
    features.insert("is_monthly", gaps.iter().any(|g| (27..=31).contains(g)))?;
    features.insert("is_bimonthly", gaps.iter().any(|g| (55..=65).contains(g)))?;
    features.insert("is_quarterly", gaps.iter().any(|g| (85..=95).contains(g)))?;
    features.insert("is_annual", gaps.iter().any(|g| (360..=370).contains(g)))?;
    features.insert("avg_days_between_transactions", stats::mean(&gap_floats))?;
    features.insert("min_days_between_transactions", min_gap)?;
    features.insert("max_days_between_transactions", max_gap)?;
    features.insert(
        "std_days_between_transactions",
        stats::sample_std_dev(&gap_floats),
    )?;

    Ok(features)
}
