//! End-to-end dashboard scenarios over snapshot files and a mock realtime database

use clinic_dashboard::adapters::datasource::{connect_data_source, JsonFileSource};
use clinic_dashboard::config::{DashboardConfig, DataSourceTarget};
use clinic_dashboard::core::dashboard::Dashboard;
use clinic_dashboard::core::filter::FilterCriteria;
use clinic_dashboard::domain::{ClosureStatus, DashboardError};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn export() -> Value {
    json!({
        "facility_data": {
            "MH-001": {
                "clinic_name": "Andheri East",
                "branch_name": "Andheri",
                "region": "West",
                "state": "Maharashtra",
                "start_date": "2021-04-01"
            },
            "MH-002": {
                "clinic_name": "Pune Camp",
                "region": "West",
                "state": "Maharashtra"
            },
            "KA-001": {
                "clinic_name": "Indiranagar",
                "region": "South",
                "state": "Karnataka"
            },
            "KA-002": {
                "clinic_name": "Whitefield",
                "region": "South",
                "state": "Karnataka"
            }
        },
        "location_details": {
            "MH-001": {"security_deposit": 150000, "ageing": "3 years"},
            "XX-999": {"clinic_name": "Orphan location"}
        },
        "operational_status": {
            "MH-001": {"rent_status": "In-House Clinic", "closure_status": "Pending"},
            "MH-002": {"closure_status": "Closed", "closure_week": "W12"},
            "KA-002": {
                "closure_status": "closed",
                "relocation_info": {
                    "equipment": {"status": "Relocated", "relocated_to": "KA-001"}
                }
            }
        },
        "master_inventory": {
            "equipment_info": {
                "chair": {"quantity": 4, "unit_cost": 1500},
                "fan": {"quantity": 2, "unit_cost": 2500.50},
                "table": {"quantity": 1, "unit_cost": 8000}
            }
        },
        "inventory": {
            "South": {"KA-001": {"chair": 3, "table": 1}},
            "West": {"MH-001": {"chair": 4}}
        }
    })
}

fn write_export(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(value.to_string().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

async fn load_from(value: &Value) -> Result<Dashboard, DashboardError> {
    let file = write_export(value);
    let config = DashboardConfig::for_snapshot_file(file.path().to_string_lossy());
    let source = JsonFileSource::open(file.path()).await?;
    Dashboard::load(&source, &config).await
}

#[tokio::test]
async fn test_full_snapshot_statistics() {
    let dashboard = load_from(&export()).await.unwrap();
    let stats = dashboard.stats();

    // Orphan location entries never create clinics
    assert_eq!(stats.total_clinics, 4);
    // "closed" in lower case does not count as closed for statistics
    assert_eq!(stats.active_clinics, 3);
    assert_eq!(stats.pending_closures, 1);
    assert_eq!(stats.matched_clinics, 2);

    // Three clinics carry fans, the in-house clinic does not
    assert_eq!(stats.total_items["fan"], 6);
    assert_eq!(stats.total_items["chair"], 16);
    assert_eq!(stats.total_items["table"], 4);

    // 4 * (6000 + 8000) + 3 * 5001.00
    assert_eq!(stats.total_inventory_value, dec!(71003.00));
}

#[tokio::test]
async fn test_merged_record_fields() {
    let dashboard = load_from(&export()).await.unwrap();

    let andheri = dashboard.find_clinic("MH-001").unwrap();
    assert_eq!(andheri.name.as_deref(), Some("Andheri East"));
    assert_eq!(andheri.security_deposit_label(), "150000");
    assert!(andheri.is_in_house());
    assert_eq!(andheri.badge_status(), ClosureStatus::Pending);

    let whitefield = dashboard.find_clinic("KA-002").unwrap();
    assert!(!whitefield.is_closed());
    assert_eq!(whitefield.badge_status(), ClosureStatus::Closed);
    let relocation = whitefield.relocation_info.as_ref().unwrap();
    assert_eq!(relocation["equipment"].relocated_to.as_deref(), Some("KA-001"));

    assert!(dashboard.find_clinic("XX-999").is_none());
}

#[tokio::test]
async fn test_card_views() {
    let dashboard = load_from(&export()).await.unwrap();

    let andheri = dashboard.find_clinic("MH-001").unwrap();
    let view = dashboard.clinic_view(andheri).unwrap();
    assert_eq!(view.valuation.items["fan"].quantity, 0);
    assert_eq!(view.valuation.total, dec!(14000));
    let region = view.region_inventory.unwrap();
    assert_eq!(region.region, "West");
    assert_eq!(region.inventory["chair"], 4);

    let pune = dashboard.find_clinic("MH-002").unwrap();
    let view = dashboard.clinic_view(pune).unwrap();
    assert_eq!(view.valuation.items["fan"].quantity, 2);
    assert_eq!(view.valuation.total, dec!(19001.00));
    assert!(view.region_inventory.is_none());
}

#[tokio::test]
async fn test_filters_and_states() {
    let dashboard = load_from(&export()).await.unwrap();

    assert_eq!(dashboard.states(), ["Karnataka", "Maharashtra"]);

    let karnataka = dashboard.filter(&FilterCriteria::new().with_state("Karnataka"));
    let codes: Vec<_> = karnataka.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["KA-001", "KA-002"]);

    let search = dashboard.filter(&FilterCriteria::new().with_search_text("PUNE"));
    assert_eq!(search.len(), 1);
    assert_eq!(search[0].code.as_str(), "MH-002");

    let matched = dashboard.filter(
        &FilterCriteria::new()
            .with_state("Karnataka")
            .with_matched_only(true),
    );
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].code.as_str(), "KA-001");

    let nothing = dashboard.filter(&FilterCriteria::new().with_state("Goa"));
    assert!(nothing.is_empty());
}

#[tokio::test]
async fn test_missing_facility_collection_fails() {
    let mut value = export();
    value.as_object_mut().unwrap().remove("facility_data");

    let err = load_from(&value).await.unwrap_err();
    assert!(matches!(err, DashboardError::MissingSource(ref name) if name == "facility_data"));
}

#[tokio::test]
async fn test_missing_catalog_gives_zero_statistics() {
    let mut value = export();
    value.as_object_mut().unwrap().remove("master_inventory");

    let dashboard = load_from(&value).await.unwrap();
    assert_eq!(dashboard.stats().total_clinics, 0);
    assert_eq!(dashboard.stats().total_inventory_value, dec!(0));
    assert_eq!(dashboard.clinics().len(), 4);
}

#[tokio::test]
async fn test_incomplete_catalog_entry_fails() {
    let mut value = export();
    value["master_inventory"]["equipment_info"]["lamp"] = json!({"quantity": 1});

    let err = load_from(&value).await.unwrap_err();
    assert!(matches!(err, DashboardError::InvalidCatalogEntry { ref item, .. } if item == "lamp"));
}

#[tokio::test]
async fn test_mistyped_catalog_entry_is_invalid_entry() {
    let mut value = export();
    value["master_inventory"]["equipment_info"]["table"] =
        json!({"quantity": "1", "unit_cost": "8000"});
    let dashboard = load_from(&value).await.unwrap();
    assert_eq!(dashboard.stats().total_inventory_value, dec!(71003.00));

    value["master_inventory"]["equipment_info"]["lamp"] =
        json!({"quantity": true, "unit_cost": 10});
    let err = load_from(&value).await.unwrap_err();
    assert!(!err.is_fetch_error());
    assert!(matches!(err, DashboardError::InvalidCatalogEntry { ref item, .. } if item == "lamp"));
}

#[tokio::test]
async fn test_strict_region_uniqueness() {
    let mut value = export();
    value["inventory"]["East"] = json!({"KA-001": {"chair": 1}});

    let file = write_export(&value);
    let mut config = DashboardConfig::for_snapshot_file(file.path().to_string_lossy());
    let source = JsonFileSource::open(file.path()).await.unwrap();

    let lenient = Dashboard::load(&source, &config).await.unwrap();
    let clinic = lenient.find_clinic("KA-001").unwrap();
    assert_eq!(
        lenient.clinic_view(clinic).unwrap().region_inventory.unwrap().region,
        "East"
    );

    config.inventory.strict_region_uniqueness = true;
    let err = Dashboard::load(&source, &config).await.unwrap_err();
    assert!(matches!(err, DashboardError::DuplicateRegionAssignment { .. }));
}

#[tokio::test]
async fn test_load_over_realtime_database() {
    let mut server = mockito::Server::new_async().await;
    let value = export();
    let mut mocks = Vec::new();
    for name in [
        "facility_data",
        "location_details",
        "operational_status",
        "master_inventory",
        "inventory",
    ] {
        let mock = server
            .mock("GET", format!("/{name}.json").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(value[name].to_string())
            .create_async()
            .await;
        mocks.push(mock);
    }

    let mut config = DashboardConfig::for_snapshot_file("unused.json");
    config.data_source.target = DataSourceTarget::RealtimeDatabase;
    config.data_source.database_url = Some(server.url());
    config.data_source.snapshot_path = None;

    let source = connect_data_source(&config.data_source).await.unwrap();
    let dashboard = Dashboard::load(source.as_ref(), &config).await.unwrap();
    source.close();

    assert_eq!(dashboard.stats().total_clinics, 4);
    assert_eq!(dashboard.stats().total_inventory_value, dec!(71003.00));
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_one_failed_collection_fails_the_load() {
    let mut server = mockito::Server::new_async().await;
    let value = export();
    let mut mocks = Vec::new();
    for name in ["facility_data", "location_details", "operational_status", "master_inventory"] {
        let mock = server
            .mock("GET", format!("/{name}.json").as_str())
            .with_status(200)
            .with_body(value[name].to_string())
            .create_async()
            .await;
        mocks.push(mock);
    }
    let _failing = server
        .mock("GET", "/inventory.json")
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let mut config = DashboardConfig::for_snapshot_file("unused.json");
    config.data_source.target = DataSourceTarget::RealtimeDatabase;
    config.data_source.database_url = Some(server.url());
    config.data_source.snapshot_path = None;

    let source = connect_data_source(&config.data_source).await.unwrap();
    let err = Dashboard::load(source.as_ref(), &config).await.unwrap_err();

    assert!(err.is_fetch_error());
    assert!(err.to_string().contains("'inventory'"));
}
