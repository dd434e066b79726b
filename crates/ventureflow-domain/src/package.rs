//! Listing packages offered after the wizard completes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visibility tier chosen for a listing. Enforcement is owned by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Package {
    Basic,
    Premium,
    Gold,
}

impl Package {
    pub const ALL: [Package; 3] = [Package::Basic, Package::Premium, Package::Gold];

    /// Wire identifier (`basic`, `premium`, `gold`).
    pub fn id(self) -> &'static str {
        match self {
            Package::Basic => "basic",
            Package::Premium => "premium",
            Package::Gold => "gold",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Package::Basic => "Basic",
            Package::Premium => "Premium",
            Package::Gold => "Gold",
        }
    }

    pub fn perks(self) -> &'static [&'static str] {
        match self {
            Package::Basic => &["Standard listing", "Up to 5 photos"],
            Package::Premium => &[
                "Highlighted in search results",
                "Up to 20 photos",
                "Booking enquiries",
            ],
            Package::Gold => &[
                "Top placement in category",
                "Unlimited photos",
                "Booking enquiries",
                "Featured on the home page",
            ],
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPackage(pub String);

impl fmt::Display for UnknownPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown package `{}` (expected basic, premium or gold)", self.0)
    }
}

impl std::error::Error for UnknownPackage {}

impl FromStr for Package {
    type Err = UnknownPackage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Package::Basic),
            "premium" => Ok(Package::Premium),
            "gold" => Ok(Package::Gold),
            other => Err(UnknownPackage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packages_parse_case_insensitively() {
        assert_eq!("Gold".parse::<Package>(), Ok(Package::Gold));
        assert_eq!(" premium ".parse::<Package>(), Ok(Package::Premium));
        assert!("platinum".parse::<Package>().is_err());
    }

    #[test]
    fn package_serializes_as_identifier() {
        let json = serde_json::to_string(&Package::Basic).unwrap();
        assert_eq!(json, "\"basic\"");
    }
}
