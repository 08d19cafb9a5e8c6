//! Region inventory matcher
//!
//! Looks clinics up in the region-nested inventory map. Every lookup here uses
//! the same exact key equality on the clinic code, so [`has_inventory`],
//! [`find_region_inventory`] and [`collect_matched_codes`] always agree.
//!
//! A clinic is expected under at most one region. Regions are scanned in name
//! order, so if the data breaks that expectation the alphabetically first
//! region wins. [`check_region_uniqueness`] detects the violation.

use crate::domain::{ClinicCode, DashboardError, ItemQuantities, RegionInventoryMap, Result};
use serde::Serialize;
use std::collections::BTreeSet;

/// Stocked inventory of one clinic and the region it was found under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionInventory<'a> {
    pub region: &'a str,
    pub inventory: &'a ItemQuantities,
}

/// Finds the region stocking `code`
///
/// Returns `None` when the map is not loaded or no region lists the clinic.
pub fn find_region_inventory<'a>(
    region_map: Option<&'a RegionInventoryMap>,
    code: &ClinicCode,
) -> Option<RegionInventory<'a>> {
    region_map?.iter().find_map(|(region, clinics)| {
        clinics.get(code).map(|inventory| RegionInventory {
            region: region.as_str(),
            inventory,
        })
    })
}

/// Whether any region lists `code`
pub fn has_inventory(region_map: Option<&RegionInventoryMap>, code: &ClinicCode) -> bool {
    region_map.is_some_and(|map| map.values().any(|clinics| clinics.contains_key(code)))
}

/// Every clinic code listed under any region
pub fn collect_matched_codes(region_map: Option<&RegionInventoryMap>) -> BTreeSet<&ClinicCode> {
    region_map
        .into_iter()
        .flat_map(|map| map.values())
        .flat_map(|clinics| clinics.keys())
        .collect()
}

/// Fails on the first clinic listed under two regions
///
/// # Errors
///
/// Returns [`DashboardError::DuplicateRegionAssignment`] naming the clinic and
/// both regions, in scan order.
pub fn check_region_uniqueness(region_map: &RegionInventoryMap) -> Result<()> {
    let mut seen: std::collections::BTreeMap<&ClinicCode, &str> = Default::default();

    for (region, clinics) in region_map {
        for code in clinics.keys() {
            if let Some(first) = seen.insert(code, region.as_str()) {
                return Err(DashboardError::DuplicateRegionAssignment {
                    clinic: code.to_string(),
                    first: first.to_string(),
                    second: region.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn code(s: &str) -> ClinicCode {
        ClinicCode::new(s).unwrap()
    }

    fn region_map() -> RegionInventoryMap {
        serde_json::from_value(json!({
            "North": {"C001": {"table": 3}},
            "South": {"C002": {"table": 5}}
        }))
        .unwrap()
    }

    #[test]
    fn test_find_region_inventory_match() {
        let map = region_map();
        let found = find_region_inventory(Some(&map), &code("C002")).unwrap();

        assert_eq!(found.region, "South");
        assert_eq!(found.inventory.get("table"), Some(&5));
    }

    #[test]
    fn test_find_region_inventory_no_match() {
        let map = region_map();
        assert!(find_region_inventory(Some(&map), &code("C003")).is_none());
        assert!(!has_inventory(Some(&map), &code("C003")));
    }

    #[test]
    fn test_unloaded_map_is_absent() {
        assert!(find_region_inventory(None, &code("C001")).is_none());
        assert!(!has_inventory(None, &code("C001")));
        assert!(collect_matched_codes(None).is_empty());
    }

    #[test]
    fn test_match_is_exact() {
        let map = region_map();
        assert!(!has_inventory(Some(&map), &code("c001")));
        assert!(!has_inventory(Some(&map), &code("C00")));
    }

    #[test]
    fn test_has_inventory_agrees_with_find() {
        let map = region_map();
        for candidate in ["C001", "C002", "C003", "c002", "North"] {
            let c = code(candidate);
            assert_eq!(
                has_inventory(Some(&map), &c),
                find_region_inventory(Some(&map), &c).is_some(),
                "disagreement for {candidate}"
            );
        }
    }

    #[test]
    fn test_collect_matched_codes() {
        let map = region_map();
        let codes = collect_matched_codes(Some(&map));
        assert_eq!(codes.len(), 2);
        assert!(codes.contains(&code("C001")));
    }

    #[test]
    fn test_duplicate_region_first_by_name_wins() {
        let map: RegionInventoryMap = serde_json::from_value(json!({
            "West": {"C001": {"table": 9}},
            "East": {"C001": {"table": 1}}
        }))
        .unwrap();

        let found = find_region_inventory(Some(&map), &code("C001")).unwrap();
        assert_eq!(found.region, "East");

        let err = check_region_uniqueness(&map).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::DuplicateRegionAssignment { ref first, ref second, .. }
                if first == "East" && second == "West"
        ));
    }

    #[test]
    fn test_unique_regions_pass() {
        assert!(check_region_uniqueness(&region_map()).is_ok());
    }
}
