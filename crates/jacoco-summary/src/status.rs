//! Traffic-light classification of coverage percentages.

use serde::{Deserialize, Serialize};

/// Coverage status bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageStatus {
    /// At or above the good threshold
    Good,
    /// At or above the fair threshold, below good
    Fair,
    /// Below the fair threshold
    Poor,
}

impl CoverageStatus {
    /// Marker shown next to a package percentage
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Good => "🟢",
            Self::Fair => "🟡",
            Self::Poor => "🔴",
        }
    }
}

/// Inclusive lower bounds for [`CoverageStatus::Good`] and [`CoverageStatus::Fair`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum percentage for a good status
    pub good: f64,
    /// Minimum percentage for a fair status
    pub fair: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            good: 80.0,
            fair: 50.0,
        }
    }
}

impl Thresholds {
    /// Create thresholds from explicit bounds
    #[must_use]
    pub const fn new(good: f64, fair: f64) -> Self {
        Self { good, fair }
    }

    /// Both bounds lie in 0..=100 and fair does not exceed good
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0.0..=100.0).contains(&self.good)
            && (0.0..=100.0).contains(&self.fair)
            && self.fair <= self.good
    }

    /// Bucket a coverage percentage
    #[must_use]
    pub fn classify(&self, coverage: f64) -> CoverageStatus {
        if coverage >= self.good {
            CoverageStatus::Good
        } else if coverage >= self.fair {
            CoverageStatus::Fair
        } else {
            CoverageStatus::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let t = Thresholds::default();
        assert_eq!(t.good, 80.0);
        assert_eq!(t.fair, 50.0);
        assert!(t.is_valid());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let t = Thresholds::default();
        assert_eq!(t.classify(80.0), CoverageStatus::Good);
        assert_eq!(t.classify(79.99), CoverageStatus::Fair);
        assert_eq!(t.classify(50.0), CoverageStatus::Fair);
        assert_eq!(t.classify(49.99), CoverageStatus::Poor);
        assert_eq!(t.classify(0.0), CoverageStatus::Poor);
        assert_eq!(t.classify(100.0), CoverageStatus::Good);
    }

    #[test]
    fn test_emoji() {
        assert_eq!(CoverageStatus::Good.emoji(), "🟢");
        assert_eq!(CoverageStatus::Fair.emoji(), "🟡");
        assert_eq!(CoverageStatus::Poor.emoji(), "🔴");
    }

    #[test]
    fn test_custom_bounds() {
        let t = Thresholds::new(90.0, 70.0);
        assert_eq!(t.classify(85.0), CoverageStatus::Fair);
        assert_eq!(t.classify(65.0), CoverageStatus::Poor);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(!Thresholds::new(50.0, 80.0).is_valid());
        assert!(!Thresholds::new(120.0, 50.0).is_valid());
        assert!(!Thresholds::new(80.0, -1.0).is_valid());
        assert!(!Thresholds::new(f64::NAN, 50.0).is_valid());
    }
}
