//! Demand calculation from home counts
//!
//! Each home class carries a fixed per-home demand weight. The resulting
//! total demand applies to every service equally.

use serde::{Deserialize, Serialize};

/// Residential zone class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeClass {
    RegularRz,
    FourTierHomes,
    AirportRelated,
    OldTown,
    Epic,
    RegionalBuildings,
    OmegaBuildings,
}

impl HomeClass {
    pub const ALL: [HomeClass; 7] = [
        HomeClass::RegularRz,
        HomeClass::FourTierHomes,
        HomeClass::AirportRelated,
        HomeClass::OldTown,
        HomeClass::Epic,
        HomeClass::RegionalBuildings,
        HomeClass::OmegaBuildings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HomeClass::RegularRz => "Regular RZ",
            HomeClass::FourTierHomes => "4-tier Homes",
            HomeClass::AirportRelated => "Airport-Related",
            HomeClass::OldTown => "Old Town",
            HomeClass::Epic => "Epic",
            HomeClass::RegionalBuildings => "Regional Buildings",
            HomeClass::OmegaBuildings => "Omega Buildings",
        }
    }

    /// Service demand generated by one home of this class
    pub fn demand_per_home(&self) -> u32 {
        match self {
            HomeClass::RegularRz => 35,
            HomeClass::FourTierHomes => 30,
            HomeClass::AirportRelated => 40,
            HomeClass::OldTown => 2,
            HomeClass::Epic => 45,
            HomeClass::RegionalBuildings => 45,
            HomeClass::OmegaBuildings => 50,
        }
    }

    /// Parse a user-supplied class name. Case, spaces, hyphens and
    /// underscores are ignored; a few short aliases are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "regularrz" | "regular" | "rz" => Some(HomeClass::RegularRz),
            "4tierhomes" | "4tier" | "fourtier" => Some(HomeClass::FourTierHomes),
            "airportrelated" | "airport" => Some(HomeClass::AirportRelated),
            "oldtown" => Some(HomeClass::OldTown),
            "epic" => Some(HomeClass::Epic),
            "regionalbuildings" | "regional" => Some(HomeClass::RegionalBuildings),
            "omegabuildings" | "omega" => Some(HomeClass::OmegaBuildings),
            _ => None,
        }
    }
}

impl std::fmt::Display for HomeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Totals derived from home counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandSummary {
    pub total_homes: u64,
    /// Capacity required from each service
    pub total_demand: u64,
}

pub fn summarize_demand(counts: &[(HomeClass, u32)]) -> DemandSummary {
    let total_homes = counts.iter().map(|(_, n)| u64::from(*n)).sum();
    let total_demand = counts
        .iter()
        .map(|(class, n)| u64::from(*n) * u64::from(class.demand_per_home()))
        .sum();
    DemandSummary {
        total_homes,
        total_demand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_demand() {
        let counts = vec![
            (HomeClass::RegularRz, 10),
            (HomeClass::OldTown, 5),
            (HomeClass::OmegaBuildings, 2),
        ];
        let summary = summarize_demand(&counts);
        assert_eq!(summary.total_homes, 17);
        assert_eq!(summary.total_demand, 10 * 35 + 5 * 2 + 2 * 50);
    }

    #[test]
    fn test_summarize_demand_empty() {
        let summary = summarize_demand(&[]);
        assert_eq!(summary.total_homes, 0);
        assert_eq!(summary.total_demand, 0);
    }

    #[test]
    fn test_parse_labels() {
        for class in HomeClass::ALL {
            assert_eq!(HomeClass::parse(class.label()), Some(class));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(HomeClass::parse("omega"), Some(HomeClass::OmegaBuildings));
        assert_eq!(HomeClass::parse("old_town"), Some(HomeClass::OldTown));
        assert_eq!(HomeClass::parse("4-Tier"), Some(HomeClass::FourTierHomes));
        assert_eq!(HomeClass::parse("mansion"), None);
    }
}
