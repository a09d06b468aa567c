//! Feature aggregation
//!
//! The `FeatureExtractor` is the only orchestrator: it runs every
//! analyzer against the same `(transaction, history)` pair, computes
//! the two cross-cutting same-amount statistics, and unions the
//! results into one record. Analyzer key namespaces are disjoint by
//! contract; the merge rejects collisions instead of trusting it.

use crate::analyzers::{amounts, calendar, indicators, periodicity, refund, temporal, user, vendor};
use crate::error::Result;
use crate::knowledge::VendorKnowledge;
use recur_core::{FeatureVector, Transaction};
use tracing::debug;

/// The exact key set of every extracted feature vector
pub const FEATURE_KEYS: [&str; 41] = [
    "n_transactions_same_amount",
    "percent_transactions_same_amount",
    "is_biweekly",
    "is_semimonthly",
    "is_monthly",
    "is_bimonthly",
    "is_quarterly",
    "is_annual",
    "avg_days_between_transactions",
    "min_days_between_transactions",
    "max_days_between_transactions",
    "std_days_between_transactions",
    "is_major_subscription",
    "is_telecom_or_insurance",
    "is_utility_bill",
    "subscription_tier",
    "is_fixed_amount_recurring",
    "amount_fluctuation_range",
    "is_small_subscription",
    "is_mid_sized_subscription",
    "is_large_recurring_payment",
    "n_similar_transactions_last_3_months",
    "n_similar_transactions_last_6_months",
    "transaction_day_consistency",
    "is_first_transaction_with_vendor",
    "is_canceled_or_refunded",
    "day_of_month",
    "weekday",
    "week_of_year",
    "is_weekend",
    "days_since_last_transaction",
    "time_since_first_transaction",
    "transaction_frequency",
    "vendor_popularity",
    "vendor_category",
    "user_avg_transaction_amount",
    "user_total_spending",
    "user_subscription_count",
    "refund_rate",
    "refund_time_lag",
    "is_valid_recurring_transaction",
];

/// Computes the full feature vector for a transaction
pub struct FeatureExtractor {
    knowledge: VendorKnowledge,
}

impl FeatureExtractor {
    /// Extractor backed by the built-in vendor knowledge base
    pub fn new() -> Self {
        Self {
            knowledge: VendorKnowledge::builtin(),
        }
    }

    /// Extractor backed by a custom knowledge base
    pub fn with_knowledge(knowledge: VendorKnowledge) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &VendorKnowledge {
        &self.knowledge
    }

    /// Extract the feature vector for one transaction against a full
    /// history snapshot.
    ///
    /// Pure function of its inputs: the same snapshot always yields
    /// the same vector. The only failure modes are a malformed date
    /// (`CoreError::DateFormat`) and an analyzer key collision
    /// (`CoreError::DuplicateFeature`, a contract violation).
    pub fn extract(
        &self,
        transaction: &Transaction,
        all_transactions: &[Transaction],
    ) -> Result<FeatureVector> {
        debug!(
            vendor = %transaction.name,
            history_len = all_transactions.len(),
            "extracting features"
        );

        let mut features = FeatureVector::new();

        let n_same_amount = all_transactions
            .iter()
            .filter(|t| t.amount == transaction.amount)
            .count();
        features.insert("n_transactions_same_amount", n_same_amount as i64)?;
        let percent_same_amount = if all_transactions.is_empty() {
            0.0
        } else {
            n_same_amount as f64 / all_transactions.len() as f64
        };
        features.insert("percent_transactions_same_amount", percent_same_amount)?;

        features.merge(periodicity::interval_features(transaction, all_transactions)?)?;
        features.merge(vendor::subscription_features(&self.knowledge, transaction)?)?;
        features.merge(amounts::amount_features(transaction, all_transactions)?)?;
        features.merge(indicators::recurrence_indicators(
            &self.knowledge,
            transaction,
            all_transactions,
        )?)?;
        features.merge(calendar::calendar_features(transaction, all_transactions)?)?;
        features.merge(temporal::temporal_features(transaction, all_transactions)?)?;
        features.merge(vendor::vendor_profile(
            &self.knowledge,
            transaction,
            all_transactions,
        )?)?;
        features.merge(user::user_features(
            &self.knowledge,
            transaction,
            all_transactions,
        )?)?;
        features.merge(refund::refund_features(transaction, all_transactions)?)?;

        features.insert(
            "is_valid_recurring_transaction",
            vendor::validate_recurring(&self.knowledge, transaction),
        )?;

        Ok(features)
    }

    /// Extract feature vectors for a batch of transactions against the
    /// same history snapshot. Each transaction gets its own `Result`;
    /// skip-vs-halt on a malformed date is the caller's call.
    pub fn extract_batch(
        &self,
        transactions: &[Transaction],
        all_transactions: &[Transaction],
    ) -> Vec<Result<FeatureVector>> {
        transactions
            .iter()
            .map(|t| self.extract(t, all_transactions))
            .collect()
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
