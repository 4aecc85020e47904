//! Anemia severity bands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// WHO-style hemoglobin severity band.
///
/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Hemoglobin at or above 12 g/dL.
    Normal,
    /// Hemoglobin in [10, 12) g/dL.
    Mild,
    /// Hemoglobin in [8, 10) g/dL.
    Moderate,
    /// Hemoglobin below 8 g/dL.
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Normal,
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
    ];

    /// Lowercase identifier used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Normal => "Normal",
            Severity::Mild => "Mild Anemia",
            Severity::Moderate => "Moderate Anemia",
            Severity::Severe => "Severe Anemia",
        }
    }

    pub fn is_anemic(&self) -> bool {
        !matches!(self, Severity::Normal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Exact identifier parse (case-insensitive). Free-text dataset labels go
    /// through the analysis crate's label normalization instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Severity::Normal),
            "mild" => Ok(Severity::Mild),
            "moderate" => Ok(Severity::Moderate),
            "severe" => Ok(Severity::Severe),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifiers() {
        for severity in Severity::ALL {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(severity));
        }
        assert_eq!(" MILD ".parse::<Severity>(), Ok(Severity::Mild));
        assert!("Non-Anemic".parse::<Severity>().is_err());
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(Severity::Normal < Severity::Mild);
        assert!(Severity::Moderate < Severity::Severe);
        assert!(!Severity::Normal.is_anemic());
        assert!(Severity::Mild.is_anemic());
    }
}
