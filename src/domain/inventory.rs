//! Equipment catalog and region inventory models
//!
//! The catalog is global: one standard allotment and unit cost per equipment
//! item, shared by every clinic. Region inventory records what is actually
//! stocked, nested region → clinic → item, independently of the catalog.

use super::ids::ClinicCode;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Catalog item excluded for in-house clinics
pub const FAN_ITEM: &str = "fan";

/// Key of the catalog object inside the master inventory collection
pub const EQUIPMENT_INFO_FIELD: &str = "equipment_info";

/// Standard allotment and unit cost of one equipment item
///
/// Both fields are optional at this level so that incomplete source entries
/// survive parsing and are reported by the valuation engine instead of being
/// read as zero. Numbers and numeric strings are accepted alike; any other
/// value is kept as a `problem` for the valuation engine to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "RawCatalogEntry")]
pub struct CatalogEntry {
    pub quantity: Option<i64>,

    pub unit_cost: Option<Decimal>,

    /// First value that could not be read as a number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

impl CatalogEntry {
    /// Creates a complete entry
    pub fn new(quantity: i64, unit_cost: Decimal) -> Self {
        Self {
            quantity: Some(quantity),
            unit_cost: Some(unit_cost),
            problem: None,
        }
    }
}

/// Catalog entry exactly as stored
#[derive(Deserialize)]
struct RawCatalogEntry {
    #[serde(default)]
    quantity: Option<Value>,

    #[serde(default)]
    unit_cost: Option<Value>,
}

impl From<RawCatalogEntry> for CatalogEntry {
    fn from(raw: RawCatalogEntry) -> Self {
        let mut problem = None;
        let quantity = read_number(raw.quantity, "quantity", parse_quantity, &mut problem);
        let unit_cost = read_number(raw.unit_cost, "unit_cost", parse_unit_cost, &mut problem);
        Self {
            quantity,
            unit_cost,
            problem,
        }
    }
}

fn read_number<T>(
    value: Option<Value>,
    field: &str,
    parse: fn(&str) -> Option<T>,
    problem: &mut Option<String>,
) -> Option<T> {
    let text = match value {
        None | Some(Value::Null) => return None,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => {
            problem.get_or_insert_with(|| format!("{field} {other} is not a number"));
            return None;
        }
    };

    let parsed = parse(&text);
    if parsed.is_none() {
        problem.get_or_insert_with(|| format!("{field} '{text}' is not a number"));
    }
    parsed
}

fn parse_quantity(text: &str) -> Option<i64> {
    text.parse::<i64>().ok().or_else(|| {
        // Whole numbers written as 2.0 or 2e3
        let value = parse_unit_cost(text)?;
        if value.fract().is_zero() {
            value.to_i64()
        } else {
            None
        }
    })
}

fn parse_unit_cost(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Item name → catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct EquipmentCatalog(BTreeMap<String, CatalogEntry>);

impl EquipmentCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an item
    pub fn with_item(mut self, name: impl Into<String>, entry: CatalogEntry) -> Self {
        self.0.insert(name.into(), entry);
        self
    }

    /// Looks up an item
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.0.get(name)
    }

    /// Iterates items in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CatalogEntry)> {
        self.0.iter()
    }

    /// Item names in name order
    pub fn item_names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, CatalogEntry)> for EquipmentCatalog {
    fn from_iter<I: IntoIterator<Item = (String, CatalogEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Shape of the master inventory collection
#[derive(Debug, Clone, Deserialize)]
pub struct MasterInventoryDocument {
    #[serde(default)]
    pub equipment_info: Option<EquipmentCatalog>,
}

/// Item name → stocked quantity
pub type ItemQuantities = BTreeMap<String, u64>;

/// Region name → clinic code → stocked quantities
pub type RegionInventoryMap = BTreeMap<String, BTreeMap<ClinicCode, ItemQuantities>>;
