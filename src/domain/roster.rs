//! Aggregates over a list of customers, used by the gallery page.

use super::{
    customer::Customer,
    health::{classify, SeverityTier},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub poor: usize,
    pub moderate: usize,
    pub good: usize,
}

impl TierCounts {
    pub fn get(&self, tier: SeverityTier) -> usize {
        match tier {
            SeverityTier::Poor => self.poor,
            SeverityTier::Moderate => self.moderate,
            SeverityTier::Good => self.good,
        }
    }

    pub fn total(&self) -> usize {
        self.poor + self.moderate + self.good
    }
}

pub fn tier_counts(customers: &[Customer]) -> TierCounts {
    customers
        .iter()
        .fold(TierCounts::default(), |mut counts, customer| {
            match classify(customer.health_score).tier {
                SeverityTier::Poor => counts.poor += 1,
                SeverityTier::Moderate => counts.moderate += 1,
                SeverityTier::Good => counts.good += 1,
            }
            counts
        })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TierFilter {
    #[default]
    All,
    Only(SeverityTier),
}

impl TierFilter {
    pub fn matches(&self, customer: &Customer) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Only(tier) => classify(customer.health_score).tier == *tier,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TierFilter::All => "All",
            TierFilter::Only(tier) => tier.label(),
        }
    }
}

pub fn filter_customers(customers: &[Customer], filter: TierFilter) -> Vec<Customer> {
    customers
        .iter()
        .filter(|customer| filter.matches(customer))
        .cloned()
        .collect()
}
