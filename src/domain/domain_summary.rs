/// How many domains the card previews before collapsing the rest into "+N more".
pub const DOMAIN_PREVIEW_LIMIT: usize = 1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainSummary {
    pub displayed: Vec<String>,
    pub overflow_count: usize,
}

impl DomainSummary {
    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }

    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow_count > 0).then(|| format!("+{} more", self.overflow_count))
    }
}

/// Keeps input order; no sorting or deduplication. `None` behaves like an empty list.
pub fn summarize(domains: Option<&[String]>) -> DomainSummary {
    let domains = domains.unwrap_or(&[]);
    DomainSummary {
        displayed: domains.iter().take(DOMAIN_PREVIEW_LIMIT).cloned().collect(),
        overflow_count: domains.len().saturating_sub(DOMAIN_PREVIEW_LIMIT),
    }
}
