//! Maturity classification.
//!
//! Every criterion declares a [`MaturityBand`]: the score that counts as the
//! minimum, and optionally the higher scores that count as recommended or
//! aspirational. Evaluators award a [`Level`] and the band turns it into a
//! number, so an evaluator can never emit a score outside its weight.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal maturity label attached to every record
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Maturity {
    #[default]
    None,
    Minimum,
    Recommended,
    Aspirational,
}

impl Maturity {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Minimum => "Minimum",
            Self::Recommended => "Recommended",
            Self::Aspirational => "Aspirational",
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Satisfaction level an evaluator awards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Unmet,
    Minimum,
    Recommended,
    Aspirational,
}

/// Scores a criterion declares for each maturity level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaturityBand {
    pub minimum: f64,
    pub recommended: Option<f64>,
    pub aspirational: Option<f64>,
}

impl MaturityBand {
    /// Band with only a minimum level.
    #[must_use]
    pub const fn minimum(score: f64) -> Self {
        Self {
            minimum: score,
            recommended: None,
            aspirational: None,
        }
    }

    /// Band with a minimum and a recommended level.
    #[must_use]
    pub const fn recommended(minimum: f64, recommended: f64) -> Self {
        Self {
            minimum,
            recommended: Some(recommended),
            aspirational: None,
        }
    }

    /// Band whose only level is aspirational.
    #[must_use]
    pub const fn aspirational(score: f64) -> Self {
        Self {
            minimum: score,
            recommended: None,
            aspirational: Some(score),
        }
    }

    /// Maximum score: the highest declared level.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.aspirational
            .or(self.recommended)
            .unwrap_or(self.minimum)
    }

    /// Score for an awarded level.
    ///
    /// A level the band does not declare falls back to the next lower
    /// declared one.
    #[must_use]
    pub fn score(&self, level: Level) -> f64 {
        match level {
            Level::Unmet => 0.0,
            Level::Minimum => self.minimum,
            Level::Recommended => self.recommended.unwrap_or(self.minimum),
            Level::Aspirational => self
                .aspirational
                .or(self.recommended)
                .unwrap_or(self.minimum),
        }
    }

    /// Classify a score against this band.
    #[must_use]
    pub fn classify(&self, score: f64) -> Maturity {
        classify(score, self)
    }
}

/// Map a score to a maturity label against the criterion's declared band.
///
/// Monotonic in `score` for a fixed band.
#[must_use]
pub fn classify(score: f64, band: &MaturityBand) -> Maturity {
    if score.is_nan() || score <= 0.0 {
        return Maturity::None;
    }
    if let Some(ceiling) = band.aspirational
        && score >= ceiling
    {
        return Maturity::Aspirational;
    }
    if score > band.minimum {
        Maturity::Recommended
    } else {
        Maturity::Minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_recommended_band() {
        let band = MaturityBand::recommended(10.0, 12.0);
        assert_eq!(classify(0.0, &band), Maturity::None);
        assert_eq!(classify(10.0, &band), Maturity::Minimum);
        assert_eq!(classify(12.0, &band), Maturity::Recommended);
        assert!((band.weight() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_classify_aspirational_band() {
        let band = MaturityBand::aspirational(15.0);
        assert_eq!(classify(15.0, &band), Maturity::Aspirational);
        assert_eq!(band.classify(0.0), Maturity::None);
    }

    #[test]
    fn test_level_falls_back_to_declared() {
        let band = MaturityBand::minimum(10.0);
        assert!((band.score(Level::Recommended) - 10.0).abs() < f64::EPSILON);
        assert!((band.score(Level::Aspirational) - 10.0).abs() < f64::EPSILON);
        assert!(band.score(Level::Unmet).abs() < f64::EPSILON);
    }

    #[test]
    fn test_maturity_ordering() {
        assert!(Maturity::None < Maturity::Minimum);
        assert!(Maturity::Recommended < Maturity::Aspirational);
        assert_eq!(Maturity::Recommended.to_string(), "Recommended");
    }
}
