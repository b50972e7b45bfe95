//! In-memory view over the workbook reference table

use crate::model::ServiceRow;

/// The loaded `Data` sheet. Built once per session, never mutated.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    rows: Vec<ServiceRow>,
}

impl ServiceCatalog {
    pub fn new(rows: Vec<ServiceRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ServiceRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// All service names, sorted and deduplicated
    pub fn services(&self) -> Vec<String> {
        let mut services: Vec<String> = self.rows.iter().map(|r| r.service.clone()).collect();
        services.sort();
        services.dedup();
        services
    }

    /// Utility names offering the given service, sorted and deduplicated
    pub fn utilities_for(&self, service: &str) -> Vec<String> {
        let mut utilities: Vec<String> = self
            .rows
            .iter()
            .filter(|r| r.service == service)
            .map(|r| r.building.clone())
            .collect();
        utilities.sort();
        utilities.dedup();
        utilities
    }

    /// All utility names across every service, sorted and deduplicated
    pub fn all_utilities(&self) -> Vec<String> {
        let mut utilities: Vec<String> = self.rows.iter().map(|r| r.building.clone()).collect();
        utilities.sort();
        utilities.dedup();
        utilities
    }

    /// Find the row for a (service, utility, level) combination
    pub fn lookup(&self, service: &str, utility: &str, level: u32) -> Option<&ServiceRow> {
        self.rows
            .iter()
            .find(|r| r.service == service && r.building == utility && r.level == level)
    }

    /// Highest declared level for a (service, utility) pair
    pub fn max_level(&self, service: &str, utility: &str) -> Option<u32> {
        self.rows
            .iter()
            .filter(|r| r.service == service && r.building == utility)
            .map(|r| r.max_level)
            .max()
    }

    /// All rows of one service
    pub fn rows_for<'a>(&'a self, service: &'a str) -> impl Iterator<Item = &'a ServiceRow> + 'a {
        self.rows.iter().filter(move |r| r.service == service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(service: &str, building: &str, level: u32, capacity: f64, cum_cost: f64) -> ServiceRow {
        ServiceRow {
            service: service.to_string(),
            building: building.to_string(),
            level,
            capacity,
            cum_cost,
            max_level: 3,
        }
    }

    fn sample_catalog() -> ServiceCatalog {
        ServiceCatalog::new(vec![
            row("Water", "Pump Station", 1, 100.0, 500.0),
            row("Water", "Pump Station", 2, 250.0, 1200.0),
            row("Water", "Desalination Plant", 1, 400.0, 3000.0),
            row("Power", "Fusion Plant", 1, 800.0, 9000.0),
        ])
    }

    #[test]
    fn test_services_sorted_unique() {
        let catalog = sample_catalog();
        assert_eq!(catalog.services(), vec!["Power", "Water"]);
    }

    #[test]
    fn test_utilities_for_service() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.utilities_for("Water"),
            vec!["Desalination Plant", "Pump Station"]
        );
        assert!(catalog.utilities_for("Sewage").is_empty());
    }

    #[test]
    fn test_lookup() {
        let catalog = sample_catalog();
        let found = catalog.lookup("Water", "Pump Station", 2).unwrap();
        assert_eq!(found.capacity, 250.0);
        assert!(catalog.lookup("Water", "Pump Station", 3).is_none());
        assert!(catalog.lookup("Power", "Pump Station", 1).is_none());
    }

    #[test]
    fn test_max_level() {
        let catalog = sample_catalog();
        assert_eq!(catalog.max_level("Water", "Pump Station"), Some(3));
        assert_eq!(catalog.max_level("Water", "Windmill"), None);
    }
}
