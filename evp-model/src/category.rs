//! Closed categorization of the dataset's free-text category columns.
//!
//! The upstream file distinguishes categories by substring only (e.g. any
//! EV-type string containing "Battery Electric" is a BEV). These enums pin
//! that matching down to one place so no aggregate repeats a substring
//! check.

use serde::Serialize;
use std::fmt;

/// Electric vehicle category derived from the raw "Electric Vehicle Type"
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EvCategory {
    Bev,
    Phev,
    Unknown,
}

impl EvCategory {
    /// Categorize a raw EV-type label by substring match.
    pub fn from_label(label: &str) -> Self {
        if label.contains("Battery Electric") {
            EvCategory::Bev
        } else if label.contains("Plug-in Hybrid") {
            EvCategory::Phev
        } else {
            EvCategory::Unknown
        }
    }
}

impl fmt::Display for EvCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvCategory::Bev => write!(f, "BEV"),
            EvCategory::Phev => write!(f, "PHEV"),
            EvCategory::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Clean Alternative Fuel Vehicle eligibility, derived from the raw CAFV
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CafvStatus {
    Eligible,
    NotEligible,
    Unknown,
}

impl CafvStatus {
    /// Categorize a raw CAFV eligibility string.
    ///
    /// "Not eligible" is checked first: the ineligible strings would
    /// otherwise never match because they only contain the lowercase
    /// "eligible".
    pub fn from_label(label: &str) -> Self {
        if label.contains("Not eligible") {
            CafvStatus::NotEligible
        } else if label.contains("Eligible") {
            CafvStatus::Eligible
        } else {
            CafvStatus::Unknown
        }
    }
}

/// Strip the parenthetical qualifier from an EV-type label for display.
///
/// Removes the literal substring `"Electric Vehicle ("` and every closing
/// parenthesis, so "Battery Electric Vehicle (BEV)" becomes "Battery BEV".
/// This reproduces the original dashboard's labels exactly; the odd-looking
/// result is intentional.
pub fn strip_type_qualifier(label: &str) -> String {
    label.replace("Electric Vehicle (", "").replace(')', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ev_category_from_label() {
        assert_eq!(
            EvCategory::from_label("Battery Electric Vehicle (BEV)"),
            EvCategory::Bev
        );
        assert_eq!(
            EvCategory::from_label("Plug-in Hybrid Electric Vehicle (PHEV)"),
            EvCategory::Phev
        );
        assert_eq!(EvCategory::from_label("Fuel Cell"), EvCategory::Unknown);
        assert_eq!(EvCategory::from_label(""), EvCategory::Unknown);
    }

    #[test]
    fn test_cafv_status_from_label() {
        assert_eq!(
            CafvStatus::from_label("Clean Alternative Fuel Vehicle Eligible"),
            CafvStatus::Eligible
        );
        assert_eq!(
            CafvStatus::from_label("Not eligible due to low battery range"),
            CafvStatus::NotEligible
        );
        assert_eq!(
            CafvStatus::from_label(
                "Eligibility unknown as battery range has not been researched"
            ),
            CafvStatus::Unknown
        );
    }

    #[test]
    fn test_strip_type_qualifier() {
        assert_eq!(
            strip_type_qualifier("Battery Electric Vehicle (BEV)"),
            "Battery BEV"
        );
        assert_eq!(
            strip_type_qualifier("Plug-in Hybrid Electric Vehicle (PHEV)"),
            "Plug-in Hybrid PHEV"
        );
        assert_eq!(strip_type_qualifier("Battery"), "Battery");
    }
}
