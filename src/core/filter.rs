//! Filter engine
//!
//! Narrows the clinic list by state selection, free-text search and
//! "has region inventory". The three predicates combine with AND, so applying
//! criteria one after another gives the same result as applying them together.

use super::matcher::has_inventory;
use crate::domain::{ClinicRecord, RegionInventoryMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Filter selection
///
/// Empty strings behave like `None`: the predicate is not applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Keep clinics whose `state` equals this exactly (case-sensitive)
    pub state: Option<String>,

    /// Keep clinics whose code or name contains this, ignoring case
    pub search_text: Option<String>,

    /// Keep only clinics listed in the region inventory map
    pub matched_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the state selection
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the search text
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Restricts to clinics with region inventory
    pub fn with_matched_only(mut self, matched_only: bool) -> Self {
        self.matched_only = matched_only;
        self
    }

    /// Whether no predicate is active
    pub fn is_empty(&self) -> bool {
        non_empty(&self.state).is_none() && non_empty(&self.search_text).is_none() && !self.matched_only
    }

    /// Tests one clinic against every active predicate
    pub fn matches(&self, clinic: &ClinicRecord, region_map: Option<&RegionInventoryMap>) -> bool {
        if let Some(state) = non_empty(&self.state) {
            if clinic.state.as_deref() != Some(state) {
                return false;
            }
        }

        if let Some(needle) = non_empty(&self.search_text) {
            let needle = needle.to_lowercase();
            let in_code = clinic.code.as_str().to_lowercase().contains(&needle);
            let in_name = clinic
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle));
            if !in_code && !in_name {
                return false;
            }
        }

        !self.matched_only || has_inventory(region_map, &clinic.code)
    }
}

/// Returns the clinics matching `criteria`, preserving input order
///
/// An empty result is a normal outcome.
pub fn filter_clinics(
    clinics: &[ClinicRecord],
    criteria: &FilterCriteria,
    region_map: Option<&RegionInventoryMap>,
) -> Vec<ClinicRecord> {
    clinics
        .iter()
        .filter(|clinic| criteria.matches(clinic, region_map))
        .cloned()
        .collect()
}

/// Distinct, sorted, non-empty states across the clinic list
pub fn available_states(clinics: &[ClinicRecord]) -> Vec<String> {
    clinics
        .iter()
        .filter_map(|clinic| clinic.state.as_deref())
        .filter(|state| !state.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
