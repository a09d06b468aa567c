//! Vendor rule evaluation
//!
//! Three independent lookups against the vendor knowledge base: the
//! recurring-validity predicate, the subscription/tier classification,
//! and the vendor popularity/category profile.

use crate::error::Result;
use crate::history;
use crate::knowledge::VendorKnowledge;
use recur_core::{FeatureVector, Transaction};

/// Whether the transaction is valid for being marked as recurring.
///
/// Vendors in the always-recurring set pass unconditionally; vendors
/// with an amount rule pass iff the rule matches; unknown vendors are
/// permissive.
pub fn validate_recurring(knowledge: &VendorKnowledge, transaction: &Transaction) -> bool {
    let vendor_key = transaction.vendor_key();
    if knowledge.is_always_recurring(&vendor_key) {
        return true;
    }
    match knowledge.amount_rule(&vendor_key) {
        Some(rule) => rule.matches(transaction.amount),
        None => true,
    }
}

/// Subscription classification flags and tier label
pub fn subscription_features(
    knowledge: &VendorKnowledge,
    transaction: &Transaction,
) -> Result<FeatureVector> {
    let vendor_key = transaction.vendor_key();
    let mut features = FeatureVector::new();

    features.insert(
        "is_major_subscription",
        knowledge.major_subscriptions.contains(&vendor_key),
    )?;
    features.insert(
        "is_telecom_or_insurance",
        knowledge.telecom_or_insurance.contains(&vendor_key),
    )?;
    features.insert(
        "is_utility_bill",
        knowledge.utility_vendors.contains(&vendor_key),
    )?;
    features.insert(
        "subscription_tier",
        knowledge
            .tier_label(&vendor_key, transaction.amount)
            .unwrap_or("Unknown"),
    )?;

    Ok(features)
}

/// Vendor popularity (exact-name history count) and category
pub fn vendor_profile(
    knowledge: &VendorKnowledge,
    transaction: &Transaction,
    all_transactions: &[Transaction],
) -> Result<FeatureVector> {
    let popularity = history::same_vendor(transaction, all_transactions).len();

    let mut features = FeatureVector::new();
    features.insert("vendor_popularity", popularity as i64)?;
    features.insert(
        "vendor_category",
        knowledge
            .category_of(&transaction.vendor_key())
            .unwrap_or("other"),
    )?;

    Ok(features)
}
