use crate::inventory::domain::{
    Application, Facet, FacetOptions, FilterSelection, FilterValue, FACET_COUNT,
};
use std::collections::HashSet;

/// FacetResolver - Computes cascading option lists and converges selections
///
/// Facets are applied strictly in cascade order. The option list of facet
/// *i* is computed from the applications admitted by facets `0..i` only, so
/// choosing a value further down never changes an earlier list.
pub struct FacetResolver;

impl FacetResolver {
    /// Computes the option list of every facet for the given selection
    ///
    /// # Returns
    /// For each facet: `[value]` when exactly one distinct value remains,
    /// otherwise `["all", values...]`. The root facet always starts with "all".
    pub fn resolve(applications: &[Application], filters: &FilterSelection) -> FacetOptions {
        let mut subset: Vec<&Application> = applications.iter().collect();
        let mut options: [Vec<FilterValue>; FACET_COUNT] = Default::default();

        for facet in Facet::ALL {
            let values = Self::distinct_values(&subset, facet);
            options[facet.index()] = if facet.is_root() {
                Self::with_all(values)
            } else {
                Self::collapse(values)
            };

            if let FilterValue::Value(wanted) = filters.get(facet) {
                subset.retain(|app| facet.value_of(app).as_deref() == Some(wanted.as_str()));
            }
        }

        FacetOptions::new(options)
    }

    /// Drives a selection to its fixed point
    ///
    /// Repeatedly forces the first facet whose option list collapsed to a
    /// single value, through the same cascading `select` a user change goes
    /// through. Facets before the forced one keep their option lists, so each
    /// round fixes a later facet and the loop ends after at most
    /// `FACET_COUNT` rounds. Running it on a converged selection is a no-op.
    pub fn converge(applications: &[Application], filters: &FilterSelection) -> FilterSelection {
        let mut current = filters.clone();

        for round in 0..=FACET_COUNT {
            let options = Self::resolve(applications, &current);
            let pending = Facet::ALL.into_iter().find_map(|facet| {
                options
                    .collapsed(facet)
                    .filter(|only| !current.get(facet).is(only))
                    .map(|only| (facet, only.to_string()))
            });

            match pending {
                Some((facet, value)) => {
                    log::debug!("Facet '{}' collapsed to '{}' (round {})", facet, value, round);
                    current = current.select(facet, FilterValue::Value(value));
                }
                None => return current,
            }
        }

        current
    }

    /// Applies a user change to one facet and converges the result
    pub fn apply(
        applications: &[Application],
        filters: &FilterSelection,
        facet: Facet,
        value: FilterValue,
    ) -> FilterSelection {
        Self::converge(applications, &filters.select(facet, value))
    }

    /// Distinct values of `facet` in first-occurrence order
    fn distinct_values(subset: &[&Application], facet: Facet) -> Vec<String> {
        let mut seen = HashSet::new();
        subset
            .iter()
            .filter_map(|app| facet.value_of(app))
            .filter(|value| seen.insert(value.clone()))
            .collect()
    }

    fn with_all(values: Vec<String>) -> Vec<FilterValue> {
        std::iter::once(FilterValue::All)
            .chain(values.into_iter().map(FilterValue::Value))
            .collect()
    }

    fn collapse(values: Vec<String>) -> Vec<FilterValue> {
        if values.len() == 1 {
            values.into_iter().map(FilterValue::Value).collect()
        } else {
            Self::with_all(values)
        }
    }
}
