//! Inventory valuation engine
//!
//! Derives a clinic's effective equipment quantities from the global catalog
//! and prices them. The only exclusion rule today: in-house clinics get no
//! fans.

use crate::domain::inventory::FAN_ITEM;
use crate::domain::{CatalogEntry, ClinicRecord, DashboardError, EquipmentCatalog, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// One priced catalog item for a specific clinic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValuedItem {
    /// Effective quantity after exclusion rules
    pub quantity: u64,
    pub unit_cost: Decimal,
}

impl ValuedItem {
    /// quantity × unit cost, `None` if it does not fit a [`Decimal`]
    pub fn line_total(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_cost)
    }
}

/// Per-clinic valuation of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ClinicValuation {
    pub items: BTreeMap<String, ValuedItem>,
    pub total: Decimal,
}

/// Checks a catalog entry and returns its `(quantity, unit_cost)`
///
/// # Errors
///
/// Returns [`DashboardError::InvalidCatalogEntry`] if either value is missing,
/// unreadable or negative.
pub fn checked_entry(item: &str, entry: &CatalogEntry) -> Result<(u64, Decimal)> {
    if let Some(problem) = &entry.problem {
        return Err(DashboardError::invalid_catalog_entry(item, problem.clone()));
    }
    let quantity = entry
        .quantity
        .ok_or_else(|| DashboardError::invalid_catalog_entry(item, "missing quantity"))?;
    let unit_cost = entry
        .unit_cost
        .ok_or_else(|| DashboardError::invalid_catalog_entry(item, "missing unit_cost"))?;

    let quantity = u64::try_from(quantity).map_err(|_| {
        DashboardError::invalid_catalog_entry(item, format!("negative quantity {quantity}"))
    })?;
    if unit_cost.is_sign_negative() && !unit_cost.is_zero() {
        return Err(DashboardError::invalid_catalog_entry(
            item,
            format!("negative unit_cost {unit_cost}"),
        ));
    }

    Ok((quantity, unit_cost))
}

/// Applies the exclusion rules to a catalog quantity for one clinic
pub fn effective_quantity(item: &str, catalog_quantity: u64, clinic: &ClinicRecord) -> u64 {
    if item == FAN_ITEM && clinic.is_in_house() {
        0
    } else {
        catalog_quantity
    }
}

/// Values the catalog for one clinic
///
/// The catalog itself is never modified; exclusions only affect the returned
/// working copy.
///
/// # Errors
///
/// Returns [`DashboardError::InvalidCatalogEntry`] for the first incomplete or
/// negative entry, or the first item whose value overflows.
pub fn valuate_clinic(catalog: &EquipmentCatalog, clinic: &ClinicRecord) -> Result<ClinicValuation> {
    let mut valuation = ClinicValuation::default();

    for (item, entry) in catalog.iter() {
        let (catalog_quantity, unit_cost) = checked_entry(item, entry)?;
        let valued = ValuedItem {
            quantity: effective_quantity(item, catalog_quantity, clinic),
            unit_cost,
        };
        valuation.total = valued
            .line_total()
            .and_then(|line| valuation.total.checked_add(line))
            .ok_or_else(|| DashboardError::invalid_catalog_entry(item, "value overflows"))?;
        valuation.items.insert(item.clone(), valued);
    }

    Ok(valuation)
}
