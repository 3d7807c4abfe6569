//! Health score to severity tier mapping.

/// Highest score still classified as [`SeverityTier::Poor`].
pub const POOR_MAX: f64 = 30.0;
/// Highest score still classified as [`SeverityTier::Moderate`].
pub const MODERATE_MAX: f64 = 70.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeverityTier {
    Poor,
    Moderate,
    Good,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 3] = [SeverityTier::Poor, SeverityTier::Moderate, SeverityTier::Good];

    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Poor => "Poor",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::Good => "Good",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            SeverityTier::Poor => "bg-red-100",
            SeverityTier::Moderate => "bg-yellow-100",
            SeverityTier::Good => "bg-green-100",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            SeverityTier::Poor => "text-red-700",
            SeverityTier::Moderate => "text-yellow-700",
            SeverityTier::Good => "text-green-700",
        }
    }
}

/// Display attributes of the badge for one score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthBadge {
    pub tier: SeverityTier,
    pub background: &'static str,
    pub text: &'static str,
    pub label: &'static str,
}

impl From<SeverityTier> for HealthBadge {
    fn from(tier: SeverityTier) -> Self {
        Self {
            tier,
            background: tier.background(),
            text: tier.text(),
            label: tier.label(),
        }
    }
}

/// Classifies any score. Both thresholds belong to the lower tier, so 30 is
/// `Poor` and 70 is `Moderate`.
pub fn classify(score: f64) -> HealthBadge {
    let tier = if score <= POOR_MAX {
        SeverityTier::Poor
    } else if score <= MODERATE_MAX {
        SeverityTier::Moderate
    } else {
        SeverityTier::Good
    };
    tier.into()
}

/// Score as shown on the badge: whole numbers without a fractional part.
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{score:.0}")
    } else {
        score.to_string()
    }
}

pub fn accessible_label(score: f64) -> String {
    format!("Health score: {}, {}", format_score(score), classify(score).label)
}
