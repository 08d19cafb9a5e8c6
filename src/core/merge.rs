//! Record merger
//!
//! Joins the facility, location and operational collections on the clinic
//! code. The facility collection is authoritative: its key set is the clinic
//! universe, and a code missing from the other two collections still yields a
//! (partially populated) record.

use crate::domain::clinic::CLINIC_CODE_FIELD;
use crate::domain::{ClinicCode, ClinicRecord, DashboardError, Result};
use serde_json::{Map, Value};

/// A collection keyed by clinic code
pub type SourceCollection = Map<String, Value>;

/// Merges the three per-clinic collections into one record per facility key
///
/// Entries are shallow-merged in the order facility, location, operational,
/// so a later collection wins on field collisions. The clinic code is written
/// last and always equals the facility key, taken verbatim. Records come back
/// sorted by code whatever order the facility map iterates in.
///
/// # Errors
///
/// - [`DashboardError::MissingSource`] naming `facility_name` if `facility`
///   is absent
/// - [`DashboardError::Serialization`] if a merged entry has a field of the
///   wrong shape (e.g. an object where text is expected)
pub fn merge_clinic_records(
    facility_name: &str,
    facility: Option<&SourceCollection>,
    location: Option<&SourceCollection>,
    operational: Option<&SourceCollection>,
) -> Result<Vec<ClinicRecord>> {
    let facility =
        facility.ok_or_else(|| DashboardError::MissingSource(facility_name.to_string()))?;

    let mut records = Vec::with_capacity(facility.len());

    for (key, facility_entry) in facility {
        let code = ClinicCode::from_key(key.as_str());

        let mut merged = Map::new();
        overlay(&mut merged, Some(facility_entry));
        overlay(&mut merged, location.and_then(|c| c.get(key)));
        overlay(&mut merged, operational.and_then(|c| c.get(key)));
        merged.insert(
            CLINIC_CODE_FIELD.to_string(),
            Value::String(code.as_str().to_string()),
        );

        let record: ClinicRecord = serde_json::from_value(Value::Object(merged)).map_err(|e| {
            DashboardError::Serialization(format!("clinic {code}: {e}"))
        })?;
        records.push(record);
    }
    records.sort_by(|a, b| a.code.cmp(&b.code));

    tracing::debug!(
        clinics = records.len(),
        with_location = location.map_or(0, |c| c.len()),
        with_operational = operational.map_or(0, |c| c.len()),
        "Merged clinic records"
    );

    Ok(records)
}

/// Copies the fields of `entry` over `target`; non-object entries are skipped
fn overlay(target: &mut Map<String, Value>, entry: Option<&Value>) {
    if let Some(Value::Object(fields)) = entry {
        for (k, v) in fields {
            target.insert(k.clone(), v.clone());
        }
    }
}
