//! Assembled dashboard
//!
//! A [`Dashboard`] is built once per snapshot: records are merged, the region
//! map is checked, and fleet statistics are computed up front. Snapshots are
//! immutable, so nothing is recomputed afterwards.

use super::filter::{available_states, FilterCriteria};
use super::matcher::{check_region_uniqueness, find_region_inventory, RegionInventory};
use super::merge::merge_clinic_records;
use super::snapshot::{fetch_snapshot, Snapshot};
use super::stats::{compute_stats, AggregateStats};
use super::valuation::{valuate_clinic, ClinicValuation};
use crate::adapters::datasource::DataSource;
use crate::config::DashboardConfig;
use crate::domain::{ClinicRecord, EquipmentCatalog, RegionInventoryMap, Result};
use chrono::{DateTime, Utc};

/// Merged records and derived data for one snapshot
#[derive(Debug, Clone)]
pub struct Dashboard {
    snapshot: Snapshot,
    clinics: Vec<ClinicRecord>,
    stats: AggregateStats,
    states: Vec<String>,
}

/// Per-card data for one clinic
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicView<'a> {
    pub record: &'a ClinicRecord,
    pub valuation: ClinicValuation,
    pub region_inventory: Option<RegionInventory<'a>>,
}

impl Dashboard {
    /// Fetches a snapshot from `source` and builds the dashboard
    ///
    /// # Errors
    ///
    /// - [`crate::domain::DashboardError::Fetch`] if any collection read fails
    /// - [`crate::domain::DashboardError::MissingSource`] if the facility
    ///   collection is absent
    /// - [`crate::domain::DashboardError::InvalidCatalogEntry`] for a broken
    ///   catalog entry
    /// - [`crate::domain::DashboardError::DuplicateRegionAssignment`] when
    ///   `inventory.strict_region_uniqueness` is set and a clinic appears under
    ///   two regions
    pub async fn load(source: &dyn DataSource, config: &DashboardConfig) -> Result<Self> {
        let snapshot = fetch_snapshot(source, &config.collections).await?;
        Self::from_snapshot(snapshot, config.inventory.strict_region_uniqueness)
    }

    /// Builds the dashboard from an already fetched snapshot
    ///
    /// # Errors
    ///
    /// Same as [`Dashboard::load`], minus fetch failures.
    pub fn from_snapshot(snapshot: Snapshot, strict_region_uniqueness: bool) -> Result<Self> {
        let clinics = merge_clinic_records(
            &snapshot.collections.facility,
            snapshot.facility.as_ref(),
            snapshot.location.as_ref(),
            snapshot.operational.as_ref(),
        )?;

        if let Some(region_map) = snapshot.region_inventory.as_ref() {
            if let Err(e) = check_region_uniqueness(region_map) {
                if strict_region_uniqueness {
                    return Err(e);
                }
                tracing::warn!(error = %e, "Duplicate region assignment; first region by name is used");
            }
        }

        let stats = compute_stats(
            &clinics,
            snapshot.catalog.as_ref(),
            snapshot.region_inventory.as_ref(),
        )?;
        let states = available_states(&clinics);

        tracing::info!(
            clinics = clinics.len(),
            states = states.len(),
            catalog_items = snapshot.catalog.as_ref().map_or(0, EquipmentCatalog::len),
            regions = snapshot.region_inventory.as_ref().map_or(0, |m| m.len()),
            "Dashboard built"
        );

        Ok(Self {
            snapshot,
            clinics,
            stats,
            states,
        })
    }

    /// Merged clinic records in code order
    pub fn clinics(&self) -> &[ClinicRecord] {
        &self.clinics
    }

    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    /// Distinct non-empty states, sorted
    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn catalog(&self) -> Option<&EquipmentCatalog> {
        self.snapshot.catalog.as_ref()
    }

    pub fn region_inventory(&self) -> Option<&RegionInventoryMap> {
        self.snapshot.region_inventory.as_ref()
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.snapshot.fetched_at
    }

    /// Looks a clinic up by exact code
    ///
    /// Relies on [`merge_clinic_records`] returning records sorted by code.
    pub fn find_clinic(&self, code: &str) -> Option<&ClinicRecord> {
        self.clinics
            .binary_search_by(|clinic| clinic.code.as_str().cmp(code))
            .ok()
            .map(|index| &self.clinics[index])
    }

    /// Clinics matching `criteria`, in code order
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&ClinicRecord> {
        let region_map = self.region_inventory();
        self.clinics
            .iter()
            .filter(|clinic| criteria.matches(clinic, region_map))
            .collect()
    }

    /// Valuation and region inventory for one clinic
    ///
    /// Without a catalog the valuation is empty with a zero total.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DashboardError::InvalidCatalogEntry`] for a
    /// broken catalog entry.
    pub fn clinic_view<'a>(&'a self, clinic: &'a ClinicRecord) -> Result<ClinicView<'a>> {
        let valuation = match self.catalog() {
            Some(catalog) => valuate_clinic(catalog, clinic)?,
            None => ClinicValuation::default(),
        };

        Ok(ClinicView {
            record: clinic,
            valuation,
            region_inventory: find_region_inventory(self.region_inventory(), &clinic.code),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollectionsConfig;
    use crate::domain::DashboardError;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};

    fn object(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            collections: CollectionsConfig::default(),
            facility: Some(object(json!({
                "C002": {"clinic_name": "Pune Camp", "state": "Maharashtra"},
                "C001": {"clinic_name": "Andheri", "state": "Maharashtra"},
                "C003": {"clinic_name": "Indiranagar", "state": "Karnataka"}
            }))),
            location: None,
            operational: Some(object(json!({
                "C001": {"rent_status": "In-House Clinic", "closure_status": "Pending"}
            }))),
            catalog: Some(serde_json::from_value(json!({
                "table": {"quantity": 2, "unit_cost": 100},
                "fan": {"quantity": 1, "unit_cost": 50}
            })).unwrap()),
            region_inventory: Some(serde_json::from_value(json!({
                "South": {"C003": {"table": 1}},
                "West": {"C001": {"table": 2}}
            })).unwrap()),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_snapshot_builds_everything() {
        let dashboard = Dashboard::from_snapshot(snapshot(), false).unwrap();

        let codes: Vec<_> = dashboard.clinics().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["C001", "C002", "C003"]);
        assert_eq!(dashboard.states(), ["Karnataka", "Maharashtra"]);
        assert_eq!(dashboard.stats().total_clinics, 3);
        assert_eq!(dashboard.stats().pending_closures, 1);
        assert_eq!(dashboard.stats().matched_clinics, 2);
        assert_eq!(dashboard.stats().total_inventory_value, dec!(700));
    }

    #[test]
    fn test_missing_facility_aborts() {
        let mut snapshot = snapshot();
        snapshot.facility = None;
        let result = Dashboard::from_snapshot(snapshot, false);
        assert!(matches!(result, Err(DashboardError::MissingSource(name)) if name == "facility_data"));
    }

    #[test]
    fn test_find_clinic() {
        let dashboard = Dashboard::from_snapshot(snapshot(), false).unwrap();
        assert_eq!(
            dashboard.find_clinic("C002").and_then(|c| c.name.as_deref()),
            Some("Pune Camp")
        );
        assert!(dashboard.find_clinic("c002").is_none());
        assert!(dashboard.find_clinic("C404").is_none());
    }

    #[test]
    fn test_filter() {
        let dashboard = Dashboard::from_snapshot(snapshot(), false).unwrap();
        let criteria = FilterCriteria::new()
            .with_state("Maharashtra")
            .with_matched_only(true);

        let result = dashboard.filter(&criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].code.as_str(), "C001");
    }

    #[test]
    fn test_clinic_view() {
        let dashboard = Dashboard::from_snapshot(snapshot(), false).unwrap();
        let clinic = dashboard.find_clinic("C001").unwrap();

        let view = dashboard.clinic_view(clinic).unwrap();
        assert_eq!(view.valuation.total, dec!(200));
        assert_eq!(view.valuation.items["fan"].quantity, 0);
        let region = view.region_inventory.unwrap();
        assert_eq!(region.region, "West");
        assert_eq!(region.inventory["table"], 2);
    }

    #[test]
    fn test_clinic_view_without_catalog() {
        let mut snapshot = snapshot();
        snapshot.catalog = None;
        let dashboard = Dashboard::from_snapshot(snapshot, false).unwrap();
        let clinic = dashboard.find_clinic("C002").unwrap();

        let view = dashboard.clinic_view(clinic).unwrap();
        assert_eq!(view.valuation, ClinicValuation::default());
        assert!(view.region_inventory.is_none());
        assert_eq!(dashboard.stats(), &AggregateStats::default());
    }

    #[test]
    fn test_duplicate_regions_lenient_and_strict() {
        let mut snapshot = snapshot();
        snapshot.region_inventory = Some(
            serde_json::from_value(json!({
                "North": {"C001": {"table": 9}},
                "West": {"C001": {"table": 2}}
            }))
            .unwrap(),
        );

        let lenient = Dashboard::from_snapshot(snapshot.clone(), false).unwrap();
        let clinic = lenient.find_clinic("C001").unwrap();
        let view = lenient.clinic_view(clinic).unwrap();
        assert_eq!(view.region_inventory.unwrap().region, "North");

        let strict = Dashboard::from_snapshot(snapshot, true);
        assert!(matches!(
            strict,
            Err(DashboardError::DuplicateRegionAssignment { .. })
        ));
    }

    #[test]
    fn test_missing_facility_reports_configured_name() {
        let mut snapshot = snapshot();
        snapshot.facility = None;
        snapshot.collections.facility = "clinics_v2".to_string();

        let err = Dashboard::from_snapshot(snapshot, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot build dashboard: source collection 'clinics_v2' is missing"
        );
    }

    #[test]
    fn test_find_clinic_with_whitespace_code() {
        let mut snapshot = snapshot();
        if let Some(facility) = snapshot.facility.as_mut() {
            facility.insert(" ".to_string(), json!({"clinic_name": "Blank key"}));
        }

        let dashboard = Dashboard::from_snapshot(snapshot, false).unwrap();
        assert_eq!(dashboard.clinics().len(), 4);
        assert_eq!(
            dashboard.find_clinic(" ").and_then(|c| c.name.as_deref()),
            Some("Blank key")
        );
        assert!(dashboard.find_clinic("C003").is_some());
    }
}
