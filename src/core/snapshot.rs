//! Snapshot fetch
//!
//! Reads the five source collections concurrently and resolves only once all
//! of them have arrived. A single failed read fails the whole fetch, so a
//! partially loaded snapshot never reaches the engines.

use super::merge::SourceCollection;
use crate::adapters::datasource::DataSource;
use crate::config::CollectionsConfig;
use crate::domain::inventory::MasterInventoryDocument;
use crate::domain::{DashboardError, EquipmentCatalog, FetchError, RegionInventoryMap, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Instant;

/// One consistent read of every source collection
///
/// `None` marks a collection that does not exist in the store.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Names the collections were read under, used in error reports
    pub collections: CollectionsConfig,
    pub facility: Option<SourceCollection>,
    pub location: Option<SourceCollection>,
    pub operational: Option<SourceCollection>,
    /// `equipment_info` of the master inventory collection
    pub catalog: Option<EquipmentCatalog>,
    pub region_inventory: Option<RegionInventoryMap>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Snapshot with every collection absent
    pub fn empty() -> Self {
        Self {
            collections: CollectionsConfig::default(),
            facility: None,
            location: None,
            operational: None,
            catalog: None,
            region_inventory: None,
            fetched_at: Utc::now(),
        }
    }

    /// Parses raw collection values into a snapshot
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Fetch`] naming the first collection whose
    /// value does not have the expected shape.
    pub fn from_raw(collections: &CollectionsConfig, raw: RawCollections) -> Result<Self> {
        Ok(Self {
            collections: collections.clone(),
            facility: as_collection(&collections.facility, raw.facility)?,
            location: as_collection(&collections.location, raw.location)?,
            operational: as_collection(&collections.operational, raw.operational)?,
            catalog: parse_catalog(&collections.master_inventory, raw.master_inventory)?,
            region_inventory: parse_region_inventory(
                &collections.region_inventory,
                raw.region_inventory,
            )?,
            fetched_at: Utc::now(),
        })
    }
}

/// Collection values as read from the store
#[derive(Debug, Clone, Default)]
pub struct RawCollections {
    pub facility: Option<Value>,
    pub location: Option<Value>,
    pub operational: Option<Value>,
    pub master_inventory: Option<Value>,
    pub region_inventory: Option<Value>,
}

/// Reads the five collections concurrently and parses them
///
/// # Errors
///
/// Returns [`DashboardError::Fetch`] if any read fails or any collection has
/// an unexpected shape. Other collections' results are discarded.
pub async fn fetch_snapshot(
    source: &dyn DataSource,
    collections: &CollectionsConfig,
) -> Result<Snapshot> {
    let started = Instant::now();
    crate::log_fetch_start!(source.describe(), collections.names().len());

    let (facility, location, operational, master_inventory, region_inventory) = futures::try_join!(
        read(source, &collections.facility),
        read(source, &collections.location),
        read(source, &collections.operational),
        read(source, &collections.master_inventory),
        read(source, &collections.region_inventory),
    )?;

    let snapshot = Snapshot::from_raw(
        collections,
        RawCollections {
            facility,
            location,
            operational,
            master_inventory,
            region_inventory,
        },
    )?;

    crate::log_fetch_complete!(
        snapshot.facility.as_ref().map_or(0, |c| c.len()),
        started.elapsed()
    );

    Ok(snapshot)
}

/// Reads one collection, attributing any failure to it
async fn read(source: &dyn DataSource, name: &str) -> Result<Option<Value>> {
    source.read_collection(name).await.map_err(|e| match e {
        DashboardError::Fetch(fetch) => DashboardError::Fetch(fetch),
        other => FetchError::for_collection(name, other).into(),
    })
}

fn as_collection(name: &str, value: Option<Value>) -> Result<Option<SourceCollection>> {
    match value {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => {
            Err(FetchError::for_collection(name, "expected an object keyed by clinic code").into())
        }
    }
}

fn parse_catalog(name: &str, value: Option<Value>) -> Result<Option<EquipmentCatalog>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let document: MasterInventoryDocument =
        serde_json::from_value(value).map_err(|e| FetchError::for_collection(name, e))?;

    if document.equipment_info.is_none() {
        tracing::warn!(collection = name, "Master inventory has no equipment_info");
    }

    Ok(document.equipment_info)
}

fn parse_region_inventory(name: &str, value: Option<Value>) -> Result<Option<RegionInventoryMap>> {
    match value {
        None => Ok(None),
        Some(value) => serde_json::from_value::<RegionInventoryMap>(value)
            .map(Some)
            .map_err(|e| FetchError::for_collection(name, e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::datasource::JsonFileSource;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn source(value: Value) -> JsonFileSource {
        match value {
            Value::Object(map) => JsonFileSource::from_value("memory.json", map),
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_fetch_snapshot_parses_all_collections() {
        let source = source(json!({
            "facility_data": {"C001": {"clinic_name": "Andheri"}},
            "location_details": {"C001": {"region": "West"}},
            "operational_status": {"C001": {"closure_status": "Pending"}},
            "master_inventory": {"equipment_info": {"table": {"quantity": 2, "unit_cost": 100}}},
            "inventory": {"West": {"C001": {"table": 3}}}
        }));

        let snapshot = fetch_snapshot(&source, &CollectionsConfig::default())
            .await
            .unwrap();

        assert_eq!(snapshot.facility.as_ref().unwrap().len(), 1);
        assert!(snapshot.location.is_some());
        assert!(snapshot.operational.is_some());
        let catalog = snapshot.catalog.unwrap();
        assert_eq!(catalog.get("table").unwrap().unit_cost, Some(dec!(100)));
        let region_map = snapshot.region_inventory.unwrap();
        assert_eq!(region_map["West"].len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_snapshot_absent_collections_are_none() {
        let snapshot = fetch_snapshot(&source(json!({})), &CollectionsConfig::default())
            .await
            .unwrap();

        assert!(snapshot.facility.is_none());
        assert!(snapshot.catalog.is_none());
        assert!(snapshot.region_inventory.is_none());
    }

    #[tokio::test]
    async fn test_master_inventory_without_equipment_info() {
        let source = source(json!({"master_inventory": {"updated_by": "ops"}}));
        let snapshot = fetch_snapshot(&source, &CollectionsConfig::default())
            .await
            .unwrap();
        assert!(snapshot.catalog.is_none());
    }

    #[tokio::test]
    async fn test_fetch_snapshot_names_bad_collection() {
        let source = source(json!({"inventory": {"West": {"C001": {"table": "three"}}}}));
        let err = fetch_snapshot(&source, &CollectionsConfig::default())
            .await
            .unwrap_err();

        assert!(err.is_fetch_error());
        assert!(err.to_string().contains("'inventory'"));
    }

    #[tokio::test]
    async fn test_non_object_facility_is_fetch_error() {
        let source = source(json!({"facility_data": ["C001", "C002"]}));
        let err = fetch_snapshot(&source, &CollectionsConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("'facility_data'"));
    }

    #[tokio::test]
    async fn test_custom_collection_names() {
        let source = source(json!({"clinics_v2": {"C001": {}}}));
        let collections = CollectionsConfig {
            facility: "clinics_v2".to_string(),
            ..Default::default()
        };

        let snapshot = fetch_snapshot(&source, &collections).await.unwrap();
        assert!(snapshot.facility.unwrap().contains_key("C001"));
    }

    #[test]
    fn test_catalog_type_problems_are_not_fetch_errors() {
        let raw = RawCollections {
            master_inventory: Some(json!({"equipment_info": {
                "table": {"quantity": "2", "unit_cost": "100"},
                "lamp": {"quantity": [1], "unit_cost": 5}
            }})),
            ..Default::default()
        };

        let snapshot = Snapshot::from_raw(&CollectionsConfig::default(), raw).unwrap();

        let catalog = snapshot.catalog.unwrap();
        assert_eq!(catalog.get("table").unwrap().quantity, Some(2));
        assert_eq!(catalog.get("table").unwrap().unit_cost, Some(dec!(100)));
        assert!(catalog.get("lamp").unwrap().problem.is_some());
    }
}
