//! Customer card derivations live here; nothing in this module touches the renderer.

pub mod activation;
pub mod customer;
pub mod domain_summary;
pub mod health;
pub mod roster;

#[allow(unused_imports)]
pub use activation::{dispatch, is_select_key, resolve_input, Activation, CardInput, CardMode};
pub use customer::Customer;
#[allow(unused_imports)]
pub use domain_summary::{summarize, DomainSummary, DOMAIN_PREVIEW_LIMIT};
#[allow(unused_imports)]
pub use health::{accessible_label, classify, format_score, HealthBadge, SeverityTier};
#[allow(unused_imports)]
pub use roster::{filter_customers, tier_counts, TierCounts, TierFilter};
