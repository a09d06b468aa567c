//! Vendor knowledge base
//!
//! All fixed lookup tables consumed by the analyzers live here as
//! explicit immutable configuration data: vendor sets, per-vendor
//! amount rules, subscription tier tables and category tables. The
//! built-in tables can be replaced wholesale by loading a YAML file
//! with the same shape.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Category lookup order; the category sets are disjoint today, a
/// fixed order keeps the answer deterministic if they ever overlap.
const CATEGORY_ORDER: [&str; 3] = ["streaming", "telecom", "utilities"];

/// Per-vendor amount predicate.
///
/// Each variant holds its own rule data, keeping vendor rules local
/// and independently testable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum AmountRule {
    /// Fractional part of the amount lies in `[min, max]`
    CentsBetween { min: f64, max: f64 },
    /// Amount is one of a fixed set of known price points
    OneOf { amounts: Vec<f64> },
}

impl AmountRule {
    pub fn matches(&self, amount: f64) -> bool {
        match self {
            AmountRule::CentsBetween { min, max } => {
                let cents = amount - amount.trunc();
                *min <= cents && cents <= *max
            }
            AmountRule::OneOf { amounts } => amounts.iter().any(|a| *a == amount),
        }
    }
}

/// Fixed vendor knowledge base.
///
/// All vendor names are stored lower-cased except
/// `user_subscription_brands`, which is matched against the raw
/// transaction name (known quirk of the source behavior, kept as-is).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorKnowledge {
    /// Vendors always considered recurring, regardless of amount
    pub always_recurring: HashSet<String>,

    /// Per-vendor amount predicates; absent vendors are permissive
    pub amount_rules: HashMap<String, AmountRule>,

    /// Major subscription brands
    pub major_subscriptions: HashSet<String>,

    /// Telecom and insurance vendors
    pub telecom_or_insurance: HashSet<String>,

    /// Utility-bill vendors
    pub utility_vendors: HashSet<String>,

    /// Vendor -> (amount in integer cents -> tier label)
    pub subscription_tiers: HashMap<String, HashMap<i64, String>>,

    /// Category -> vendor set; independent of the subscription sets
    pub vendor_categories: HashMap<String, HashSet<String>>,

    /// Brands counted by the user aggregate calculator, matched on the
    /// raw (not lower-cased) transaction name
    pub user_subscription_brands: HashSet<String>,

    /// Substrings marking refund-like transaction names
    pub refund_keywords: HashSet<String>,
}

fn string_set(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn tier_table(entries: &[(i64, &str)]) -> HashMap<i64, String> {
    entries
        .iter()
        .map(|(cents, label)| (*cents, label.to_string()))
        .collect()
}

impl VendorKnowledge {
    /// The built-in knowledge base
    pub fn builtin() -> Self {
        let amount_rules = HashMap::from([
            (
                "apple".to_string(),
                AmountRule::CentsBetween {
                    min: 0.98,
                    max: 0.99,
                },
            ),
            (
                "brigit".to_string(),
                AmountRule::OneOf {
                    amounts: vec![9.99, 14.99],
                },
            ),
            (
                "cleo ai".to_string(),
                AmountRule::OneOf {
                    amounts: vec![3.99, 6.99],
                },
            ),
            (
                "credit genie".to_string(),
                AmountRule::OneOf {
                    amounts: vec![3.49, 4.99],
                },
            ),
        ]);

        let subscription_tiers = HashMap::from([
            (
                "netflix".to_string(),
                tier_table(&[(899, "Basic"), (1549, "Standard"), (1999, "Premium")]),
            ),
            (
                "spotify".to_string(),
                tier_table(&[(999, "Individual"), (1299, "Duo"), (1599, "Family")]),
            ),
            (
                "disney+".to_string(),
                tier_table(&[(799, "Basic"), (1399, "Premium")]),
            ),
        ]);

        let vendor_categories = HashMap::from([
            (
                "streaming".to_string(),
                string_set(&["netflix", "spotify", "disney+", "hulu", "amazon prime"]),
            ),
            (
                "telecom".to_string(),
                string_set(&["at&t", "verizon", "t-mobile"]),
            ),
            (
                "utilities".to_string(),
                string_set(&["duke energy", "con edison", "national grid"]),
            ),
        ]);

        Self {
            always_recurring: string_set(&[
                "netflix",
                "spotify",
                "microsoft",
                "amazon prime",
                "at&t",
                "verizon",
                "spectrum",
                "geico",
                "hugo insurance",
            ]),
            amount_rules,
            major_subscriptions: string_set(&[
                "netflix",
                "spotify",
                "disney+",
                "hulu",
                "amazon prime",
                "paramount+",
                "apple music",
            ]),
            telecom_or_insurance: string_set(&[
                "at&t",
                "verizon",
                "t-mobile",
                "geico",
                "progressive",
                "state farm",
            ]),
            utility_vendors: string_set(&[
                "duke energy",
                "con edison",
                "national grid",
                "pg&e",
                "water company",
                "gas company",
            ]),
            subscription_tiers,
            vendor_categories,
            user_subscription_brands: string_set(&[
                "netflix",
                "spotify",
                "disney+",
                "hulu",
                "amazon prime",
                "at&t",
                "verizon",
                "t-mobile",
            ]),
            refund_keywords: string_set(&["refund", "reversal", "canceled", "chargeback"]),
        }
    }

    /// Load a knowledge base from a YAML file
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge file: {}", path.display()))?;

        let knowledge: VendorKnowledge = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse knowledge file: {}", path.display()))?;

        knowledge
            .validate()
            .with_context(|| format!("Knowledge validation failed for: {}", path.display()))?;

        info!("Loaded vendor knowledge from: {}", path.display());
        Ok(knowledge)
    }

    /// Validate table contents
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.refund_keywords.is_empty() {
            anyhow::bail!("refund_keywords must not be empty");
        }

        for (vendor, rule) in &self.amount_rules {
            match rule {
                AmountRule::CentsBetween { min, max } => {
                    if !(0.0..1.0).contains(min) || !(0.0..1.0).contains(max) || min > max {
                        anyhow::bail!(
                            "Invalid cents range [{}, {}] for vendor '{}'",
                            min,
                            max,
                            vendor
                        );
                    }
                }
                AmountRule::OneOf { amounts } => {
                    if amounts.is_empty() {
                        anyhow::bail!("Empty price-point set for vendor '{}'", vendor);
                    }
                }
            }
        }

        for category in &CATEGORY_ORDER {
            if !self.vendor_categories.contains_key(*category) {
                anyhow::bail!("Missing vendor category '{}'", category);
            }
        }

        Ok(())
    }

    /// Whether the vendor (lower-cased key) is always recurring
    pub fn is_always_recurring(&self, vendor_key: &str) -> bool {
        self.always_recurring.contains(vendor_key)
    }

    /// Amount rule for a vendor, if one exists
    pub fn amount_rule(&self, vendor_key: &str) -> Option<&AmountRule> {
        self.amount_rules.get(vendor_key)
    }

    /// Tier label for a vendor/amount pair.
    ///
    /// Only exact price points match: an amount with sub-cent
    /// precision never resolves to a tier.
    pub fn tier_label(&self, vendor_key: &str, amount: f64) -> Option<&str> {
        let cents = (amount * 100.0).round() as i64;
        if amount != cents as f64 / 100.0 {
            return None;
        }
        self.subscription_tiers
            .get(vendor_key)?
            .get(&cents)
            .map(|s| s.as_str())
    }

    /// Category of a vendor, checked in fixed order
    pub fn category_of(&self, vendor_key: &str) -> Option<&str> {
        CATEGORY_ORDER.iter().copied().find(|category| {
            self.vendor_categories
                .get(*category)
                .is_some_and(|vendors| vendors.contains(vendor_key))
        })
    }

    /// Whether a transaction name looks refund-like (substring,
    /// case-insensitive)
    pub fn is_refund_like(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.refund_keywords.iter().any(|kw| name.contains(kw))
    }
}

impl Default for VendorKnowledge {
    fn default() -> Self {
        Self::builtin()
    }
}
