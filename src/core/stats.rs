//! Aggregate statistics engine
//!
//! Fleet-wide totals over the merged clinic list. Recomputed from scratch on
//! every call; nothing is cached or updated incrementally here.
//!
//! The active and pending counts use exact, case-sensitive comparisons on the
//! raw closure status (`!= "Closed"`, `== "Pending"`), unlike status badges
//! which read the status case-insensitively.

use super::matcher::collect_matched_codes;
use super::valuation::{checked_entry, effective_quantity};
use crate::domain::{ClinicRecord, DashboardError, EquipmentCatalog, RegionInventoryMap, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Fleet-wide dashboard statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct AggregateStats {
    pub total_clinics: usize,
    pub active_clinics: usize,
    pub pending_closures: usize,
    pub total_inventory_value: Decimal,
    /// Effective quantity per catalog item summed over all clinics
    pub total_items: BTreeMap<String, u64>,
    /// Clinics listed in the region inventory map
    pub matched_clinics: usize,
}

impl AggregateStats {
    /// Active clinics as a percentage of all clinics
    pub fn active_percentage(&self) -> Option<f64> {
        self.percentage_of_total(self.active_clinics)
    }

    /// Pending closures as a percentage of all clinics
    pub fn pending_percentage(&self) -> Option<f64> {
        self.percentage_of_total(self.pending_closures)
    }

    /// Matched clinics as a percentage of all clinics
    pub fn matched_percentage(&self) -> Option<f64> {
        self.percentage_of_total(self.matched_clinics)
    }

    fn percentage_of_total(&self, count: usize) -> Option<f64> {
        if self.total_clinics == 0 {
            None
        } else {
            Some(count as f64 / self.total_clinics as f64 * 100.0)
        }
    }
}

/// Computes fleet statistics
///
/// An empty clinic list or an absent catalog yields all-zero statistics.
///
/// # Errors
///
/// Returns [`DashboardError::InvalidCatalogEntry`] if the catalog contains an
/// incomplete or negative entry, or an item whose fleet totals overflow.
pub fn compute_stats(
    clinics: &[ClinicRecord],
    catalog: Option<&EquipmentCatalog>,
    region_map: Option<&RegionInventoryMap>,
) -> Result<AggregateStats> {
    let catalog = match catalog {
        Some(catalog) if !clinics.is_empty() => catalog,
        _ => return Ok(AggregateStats::default()),
    };

    let entries = catalog
        .iter()
        .map(|(item, entry)| checked_entry(item, entry).map(|checked| (item.as_str(), checked)))
        .collect::<Result<Vec<_>>>()?;

    let mut stats = AggregateStats {
        total_clinics: clinics.len(),
        total_items: entries.iter().map(|(item, _)| (item.to_string(), 0)).collect(),
        ..Default::default()
    };

    for clinic in clinics {
        if !clinic.is_closed() {
            stats.active_clinics += 1;
        }
        if clinic.is_pending_closure() {
            stats.pending_closures += 1;
        }

        for (item, (catalog_quantity, unit_cost)) in &entries {
            let quantity = effective_quantity(item, *catalog_quantity, clinic);
            if let Some(count) = stats.total_items.get_mut(*item) {
                *count = count.checked_add(quantity).ok_or_else(|| {
                    DashboardError::invalid_catalog_entry(*item, "total quantity overflows")
                })?;
            }
            stats.total_inventory_value = Decimal::from(quantity)
                .checked_mul(*unit_cost)
                .and_then(|line| stats.total_inventory_value.checked_add(line))
                .ok_or_else(|| DashboardError::invalid_catalog_entry(*item, "total value overflows"))?;
        }
    }

    let matched_codes = collect_matched_codes(region_map);
    stats.matched_clinics = clinics
        .iter()
        .filter(|clinic| matched_codes.contains(&clinic.code))
        .count();

    tracing::debug!(
        total_clinics = stats.total_clinics,
        active_clinics = stats.active_clinics,
        pending_closures = stats.pending_closures,
        matched_clinics = stats.matched_clinics,
        total_inventory_value = %stats.total_inventory_value,
        "Computed aggregate statistics"
    );

    Ok(stats)
}
