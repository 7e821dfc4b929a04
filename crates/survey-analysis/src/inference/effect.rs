//! Effect-size magnitude labels.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectMagnitude {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectMagnitude {
    /// Label `value` against ascending `[small, medium, large]` cut points.
    pub fn classify(value: f64, thresholds: [f64; 3]) -> Self {
        let v = value.abs();
        if v < thresholds[0] {
            Self::Negligible
        } else if v < thresholds[1] {
            Self::Small
        } else if v < thresholds[2] {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Cohen's d cut points.
    pub fn for_cohens_d(d: f64) -> Self {
        Self::classify(d, [0.2, 0.5, 0.8])
    }

    /// Eta-squared cut points.
    pub fn for_eta_squared(eta: f64) -> Self {
        Self::classify(eta, [0.01, 0.06, 0.14])
    }

    /// Cramér's V cut points depend on the smaller table dimension.
    pub fn for_cramers_v(v: f64, min_dim: usize) -> Self {
        if min_dim <= 2 {
            Self::classify(v, [0.1, 0.3, 0.5])
        } else {
            Self::classify(v, [0.07, 0.21, 0.35])
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl std::fmt::Display for EffectMagnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cohen_thresholds_use_magnitude() {
        assert_eq!(EffectMagnitude::for_cohens_d(-0.9), EffectMagnitude::Large);
        assert_eq!(EffectMagnitude::for_cohens_d(0.5), EffectMagnitude::Medium);
        assert_eq!(EffectMagnitude::for_cohens_d(0.19), EffectMagnitude::Negligible);
    }

    #[test]
    fn cramers_v_thresholds_shift_for_larger_tables() {
        assert_eq!(EffectMagnitude::for_cramers_v(0.25, 2), EffectMagnitude::Small);
        assert_eq!(EffectMagnitude::for_cramers_v(0.25, 3), EffectMagnitude::Medium);
    }
}
