//! Maps continuous confidence/severity values onto the discrete tier
//! vocabulary shared by every page. The threshold table lives here and only
//! here; pages differ solely in the polarity they declare.

use serde::{Deserialize, Serialize};

use crate::models::RecordStatus;

/// Whether a higher numeric value is semantically good (audit confidence,
/// execution readiness) or bad (fraud risk, threat score). The same 0.94 is
/// healthy on the Govern ledger and alarming on the Protect table, and the
/// two must never be conflated.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    HigherIsWorse,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Healthy,
    Stable,
    Warning,
    Critical,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Healthy => "Healthy",
            Tier::Stable => "Stable",
            Tier::Warning => "Warning",
            Tier::Critical => "Critical",
        }
    }

    /// 1:1 color token, consumed by every page identically.
    pub fn color_token(self) -> &'static str {
        match self {
            Tier::Healthy => "emerald",
            Tier::Stable => "sky",
            Tier::Warning => "amber",
            Tier::Critical => "red",
        }
    }

    /// 1:1 icon token paired with the color token.
    pub fn icon_token(self) -> &'static str {
        match self {
            Tier::Healthy => "shield-check",
            Tier::Stable => "circle-check",
            Tier::Warning => "triangle-alert",
            Tier::Critical => "octagon-alert",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierBadge {
    pub tier: Tier,
    pub color_token: &'static str,
    pub icon_token: &'static str,
}

impl From<Tier> for TierBadge {
    fn from(tier: Tier) -> Self {
        TierBadge {
            tier,
            color_token: tier.color_token(),
            icon_token: tier.icon_token(),
        }
    }
}

/// Threshold bands over [0, 1], top band first: `>= 0.90`, `0.80..0.90`,
/// `0.70..0.80`, `< 0.70`.
fn band(value: f64) -> usize {
    let value = if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if value >= 0.90 {
        0
    } else if value >= 0.80 {
        1
    } else if value >= 0.70 {
        2
    } else {
        3
    }
}

const BETTER_TIERS: [Tier; 4] = [Tier::Healthy, Tier::Stable, Tier::Warning, Tier::Critical];
const WORSE_TIERS: [Tier; 4] = [Tier::Critical, Tier::Warning, Tier::Stable, Tier::Healthy];

/// Total over all of `f64`: non-finite input drops to the bottom band and
/// out-of-range input is clamped, never rejected (range enforcement happens
/// at record validation).
pub fn classify(value: f64, polarity: Polarity) -> TierBadge {
    let tiers = match polarity {
        Polarity::HigherIsBetter => &BETTER_TIERS,
        Polarity::HigherIsWorse => &WORSE_TIERS,
    };
    tiers[band(value)].into()
}

/// Severity buckets share the token table too; the mapping follows the rank
/// order, worst bucket onto the critical tier.
pub fn classify_severity(severity: crate::models::Severity) -> TierBadge {
    use crate::models::Severity;
    let tier = match severity {
        Severity::Critical => Tier::Critical,
        Severity::High => Tier::Warning,
        Severity::Medium => Tier::Stable,
        Severity::Low => Tier::Healthy,
    };
    tier.into()
}

/// Discrete status labels reuse the same tier vocabulary so status pills and
/// confidence badges draw from one token table.
pub fn classify_status(status: RecordStatus) -> TierBadge {
    let tier = match status {
        RecordStatus::Verified | RecordStatus::Approved => Tier::Healthy,
        RecordStatus::AutoExecuted => Tier::Stable,
        RecordStatus::Pending => Tier::Warning,
        RecordStatus::Flagged | RecordStatus::Rejected => Tier::Critical,
    };
    tier.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_changes_tier_for_identical_input() {
        let good = classify(0.94, Polarity::HigherIsBetter);
        let bad = classify(0.94, Polarity::HigherIsWorse);
        assert_eq!(good.tier, Tier::Healthy);
        assert_eq!(bad.tier, Tier::Critical);
        assert_ne!(good.color_token, bad.color_token);
    }

    #[test]
    fn secondary_band_maps_per_polarity() {
        assert_eq!(classify(0.85, Polarity::HigherIsBetter).tier, Tier::Stable);
        assert_eq!(classify(0.85, Polarity::HigherIsWorse).tier, Tier::Warning);
    }

    #[test]
    fn band_edges_are_inclusive_at_the_lower_bound() {
        assert_eq!(classify(0.90, Polarity::HigherIsBetter).tier, Tier::Healthy);
        assert_eq!(classify(0.80, Polarity::HigherIsBetter).tier, Tier::Stable);
        assert_eq!(classify(0.70, Polarity::HigherIsBetter).tier, Tier::Warning);
        assert_eq!(classify(0.69, Polarity::HigherIsBetter).tier, Tier::Critical);
    }

    #[test]
    fn classify_is_total_over_garbage_input() {
        assert_eq!(classify(f64::NAN, Polarity::HigherIsBetter).tier, Tier::Critical);
        assert_eq!(classify(7.0, Polarity::HigherIsBetter).tier, Tier::Healthy);
        assert_eq!(classify(-3.0, Polarity::HigherIsWorse).tier, Tier::Healthy);
    }

    #[test]
    fn tokens_are_one_to_one_with_tiers() {
        let tiers = [Tier::Healthy, Tier::Stable, Tier::Warning, Tier::Critical];
        for window in tiers.windows(2) {
            assert_ne!(window[0].color_token(), window[1].color_token());
            assert_ne!(window[0].icon_token(), window[1].icon_token());
        }
    }

    #[test]
    fn status_labels_share_the_tier_vocabulary() {
        assert_eq!(classify_status(RecordStatus::Flagged).tier, Tier::Critical);
        assert_eq!(classify_status(RecordStatus::Pending).tier, Tier::Warning);
        assert_eq!(classify_status(RecordStatus::Verified).tier, Tier::Healthy);
    }
}
