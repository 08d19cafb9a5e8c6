//! Property checks for the filter engine over generated clinic lists

use clinic_dashboard::core::filter::{available_states, filter_clinics, FilterCriteria};
use clinic_dashboard::domain::{ClinicCode, ClinicRecord, RegionInventoryMap};
use fake::faker::company::en::CompanyName;
use fake::{Fake, Faker};
use std::collections::BTreeMap;

const STATES: &[&str] = &["Maharashtra", "Karnataka", "Gujarat", "Kerala", ""];
const SEARCHES: &[&str] = &["", "a", "CARE", "01", "zz"];
const ROUNDS: usize = 50;

struct Fleet {
    clinics: Vec<ClinicRecord>,
    region_map: RegionInventoryMap,
}

fn fleet() -> Fleet {
    let size: usize = (0..40).fake();
    let mut clinics = Vec::with_capacity(size);
    let mut region_map = RegionInventoryMap::new();

    for i in 0..size {
        let code = ClinicCode::new(format!("CL-{i:03}")).unwrap();
        let mut clinic = ClinicRecord::new(code.clone());
        if Faker.fake::<bool>() {
            clinic = clinic.with_name(CompanyName().fake::<String>());
        }
        let state = STATES[(0..STATES.len()).fake::<usize>()];
        if !state.is_empty() {
            clinic = clinic.with_state(state);
        }
        if Faker.fake::<bool>() {
            let region = if i % 2 == 0 { "West" } else { "South" };
            region_map
                .entry(region.to_string())
                .or_default()
                .insert(code, BTreeMap::from([("chair".to_string(), (1..5).fake::<u64>())]));
        }
        clinics.push(clinic);
    }

    Fleet {
        clinics,
        region_map,
    }
}

fn criteria() -> FilterCriteria {
    let mut criteria = FilterCriteria::new().with_matched_only(Faker.fake());
    let state = STATES[(0..STATES.len()).fake::<usize>()];
    if Faker.fake::<bool>() {
        criteria = criteria.with_state(state);
    }
    let search = SEARCHES[(0..SEARCHES.len()).fake::<usize>()];
    if Faker.fake::<bool>() {
        criteria = criteria.with_search_text(search);
    }
    criteria
}

fn codes(clinics: &[ClinicRecord]) -> Vec<String> {
    clinics.iter().map(|c| c.code.as_str().to_string()).collect()
}

#[test]
fn test_sequential_filters_equal_combined_filter() {
    for _ in 0..ROUNDS {
        let fleet = fleet();
        let combined = criteria();
        let map = Some(&fleet.region_map);

        let mut sequential = fleet.clinics.clone();
        if let Some(state) = &combined.state {
            sequential = filter_clinics(&sequential, &FilterCriteria::new().with_state(state.clone()), map);
        }
        if let Some(search) = &combined.search_text {
            sequential = filter_clinics(
                &sequential,
                &FilterCriteria::new().with_search_text(search.clone()),
                map,
            );
        }
        sequential = filter_clinics(
            &sequential,
            &FilterCriteria::new().with_matched_only(combined.matched_only),
            map,
        );

        let at_once = filter_clinics(&fleet.clinics, &combined, map);
        assert_eq!(codes(&sequential), codes(&at_once), "criteria: {combined:?}");
    }
}

#[test]
fn test_filter_result_is_ordered_subset() {
    for _ in 0..ROUNDS {
        let fleet = fleet();
        let criteria = criteria();
        let result = filter_clinics(&fleet.clinics, &criteria, Some(&fleet.region_map));

        assert!(result.len() <= fleet.clinics.len());
        let mut remaining = fleet.clinics.iter();
        for clinic in &result {
            assert!(remaining.any(|c| c.code == clinic.code), "order broken for {}", clinic.code.as_str());
        }
    }
}

#[test]
fn test_empty_criteria_keeps_everything() {
    for _ in 0..ROUNDS {
        let fleet = fleet();
        let result = filter_clinics(&fleet.clinics, &FilterCriteria::new(), Some(&fleet.region_map));
        assert_eq!(codes(&result), codes(&fleet.clinics));
    }
}

#[test]
fn test_filter_is_idempotent() {
    for _ in 0..ROUNDS {
        let fleet = fleet();
        let criteria = criteria();
        let map = Some(&fleet.region_map);

        let once = filter_clinics(&fleet.clinics, &criteria, map);
        let twice = filter_clinics(&once, &criteria, map);
        assert_eq!(codes(&once), codes(&twice));
    }
}

#[test]
fn test_matched_only_without_region_map_is_empty() {
    for _ in 0..ROUNDS {
        let fleet = fleet();
        let result = filter_clinics(&fleet.clinics, &FilterCriteria::new().with_matched_only(true), None);
        assert!(result.is_empty());
    }
}

#[test]
fn test_available_states_sorted_and_distinct() {
    for _ in 0..ROUNDS {
        let fleet = fleet();
        let states = available_states(&fleet.clinics);

        assert!(states.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(states.iter().all(|s| !s.is_empty()));
        for clinic in &fleet.clinics {
            if let Some(state) = &clinic.state {
                assert!(states.contains(state));
            }
        }
    }
}
