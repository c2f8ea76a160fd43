//! Filter store slice and its pure transformations.
//!
//! The two-stage "pick a filter, then pick its value" flow is a tagged
//! state machine; committing a value is the single `Ready` to `Idle`
//! transition. None of the operations here perform network I/O: after a
//! commit the caller re-fetches and reloads the table.

use crate::features::resources::ResourceKind;
use castellan_api_models::{FilterDefinitions, FilterType};
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Filter kind, mirroring the server-side definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    /// Enumerated value filter.
    Select,
    /// Start/end instant pair composed as `"start/end"`.
    Period,
}

impl From<FilterType> for FilterKind {
    fn from(value: FilterType) -> Self {
        match value {
            FilterType::Select => Self::Select,
            FilterType::Period => Self::Period,
        }
    }
}

/// One selectable option of a `select` filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    /// Value sent to the server.
    pub value: String,
    /// Display label.
    pub label: String,
}

/// One filter of the active resource type, with its applied value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSpec {
    /// Filter key, unique within the active set.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Filter kind.
    pub kind: FilterKind,
    /// Whether option labels are translation keys.
    pub translatable: bool,
    /// Options, sorted case-insensitively by label.
    pub options: Vec<FilterOption>,
    /// Applied value; empty string means unset.
    pub value: String,
}

/// Two-stage filter selection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterSelection {
    /// Nothing picked.
    #[default]
    Idle,
    /// A filter is picked, its value is not.
    Picked {
        /// Name of the picked filter.
        name: String,
    },
    /// Filter and value are both picked; committing applies the value.
    Ready {
        /// Name of the picked filter.
        name: String,
        /// Value about to be applied.
        value: String,
    },
}

/// Filter store slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FiltersState {
    /// Resource kind the filter set belongs to, if any.
    pub resource: Option<ResourceKind>,
    /// Active filter set, replaced wholesale per resource kind.
    pub filters: Vec<FilterSpec>,
    /// Free-text query, independent of the structured filters.
    pub text: String,
    /// Two-stage selection state.
    pub selection: FilterSelection,
}

/// Build the filter list from the server's definition map.
///
/// Options are sorted case-insensitively by label; the sort is stable,
/// so equal labels keep their original order.
#[must_use]
pub fn from_definitions(definitions: FilterDefinitions) -> Vec<FilterSpec> {
    definitions
        .into_iter()
        .map(|(name, definition)| {
            let mut options: Vec<FilterOption> = definition
                .options
                .unwrap_or_default()
                .into_iter()
                .map(|(value, label)| FilterOption { value, label })
                .collect();
            options.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
            FilterSpec {
                name,
                label: definition.label,
                kind: definition.kind.into(),
                translatable: definition.translatable,
                options,
                value: String::new(),
            }
        })
        .collect()
}

/// Replace the active filter set for a newly activated resource kind.
pub fn load_filters(state: &mut FiltersState, kind: ResourceKind, mut filters: Vec<FilterSpec>) {
    for filter in &mut filters {
        filter.value.clear();
    }
    state.resource = Some(kind);
    state.filters = filters;
    state.text.clear();
    state.selection = FilterSelection::Idle;
}

/// Set the free-text query.
pub fn set_text(state: &mut FiltersState, text: impl Into<String>) {
    state.text = text.into();
}

/// Clear the free-text query.
pub fn clear_text(state: &mut FiltersState) {
    state.text.clear();
}

/// First pick of the two-stage flow; unknown names are a no-op.
pub fn select_filter(state: &mut FiltersState, name: &str) {
    if state.filters.iter().any(|filter| filter.name == name) {
        state.selection = FilterSelection::Picked {
            name: name.to_string(),
        };
    }
}

/// Abandon the two-stage flow.
pub fn clear_selection(state: &mut FiltersState) {
    state.selection = FilterSelection::Idle;
}

/// Second pick of the two-stage flow; commits when a filter is picked.
pub fn select_option(state: &mut FiltersState, value: impl Into<String>) {
    if let FilterSelection::Picked { name } = std::mem::take(&mut state.selection) {
        state.selection = FilterSelection::Ready {
            name,
            value: value.into(),
        };
        commit_selection(state);
    }
}

/// Second pick for `period` filters: composes and commits the range.
pub fn select_period(state: &mut FiltersState, start: &DateTime<Utc>, end: &DateTime<Utc>) {
    select_option(state, period_value(start, end));
}

/// Apply a `Ready` selection to its filter and return to `Idle`.
///
/// This is the single transition from "picking" to "applied"; both
/// selection-stage fields are cleared. A selection whose filter
/// disappeared in a concurrent reload is dropped silently.
pub fn commit_selection(state: &mut FiltersState) {
    if let FilterSelection::Ready { name, value } = std::mem::take(&mut state.selection) {
        set_value(state, &name, value);
    }
}

/// Directly apply a value, bypassing the two-stage flow.
pub fn set_value(state: &mut FiltersState, name: &str, value: impl Into<String>) {
    if let Some(filter) = state.filters.iter_mut().find(|filter| filter.name == name) {
        filter.value = value.into();
    }
}

/// Reset one filter's value to unset.
pub fn clear_value(state: &mut FiltersState, name: &str) {
    set_value(state, name, String::new());
}

/// Reset every filter value, keeping the filter set itself.
pub fn reset_values(state: &mut FiltersState) {
    for filter in &mut state.filters {
        filter.value.clear();
    }
}

/// Compose a period filter value from its bounds.
#[must_use]
pub fn period_value(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    format!(
        "{}/{}",
        start.to_rfc3339_opts(SecondsFormat::Millis, true),
        end.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Expand two calendar dates to the instants covering the full days.
#[must_use]
pub fn period_bounds(start: NaiveDate, end: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.from_utc_datetime(&start.and_hms_opt(0, 0, 0).unwrap_or_default());
    let end = Utc.from_utc_datetime(&end.and_hms_milli_opt(23, 59, 59, 999).unwrap_or_default());
    (start, end)
}

/// Compose the applied filters into the fetch layer's query string.
///
/// Non-empty values join as `name:value`, comma-separated; the free-text
/// query contributes a trailing `textFilter:` entry.
#[must_use]
pub fn filter_query(state: &FiltersState) -> String {
    let mut parts: Vec<String> = state
        .filters
        .iter()
        .filter(|filter| !filter.value.is_empty())
        .map(|filter| format!("{}:{}", filter.name, filter.value))
        .collect();
    let text = state.text.trim();
    if !text.is_empty() {
        parts.push(format!("textFilter:{text}"));
    }
    parts.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use castellan_api_models::FilterDefinition;
    use std::collections::BTreeMap;

    fn select_filter_spec(name: &str, options: &[(&str, &str)]) -> FilterSpec {
        FilterSpec {
            name: name.to_string(),
            label: name.to_string(),
            kind: FilterKind::Select,
            translatable: false,
            options: options
                .iter()
                .map(|(value, label)| FilterOption {
                    value: (*value).to_string(),
                    label: (*label).to_string(),
                })
                .collect(),
            value: String::new(),
        }
    }

    fn loaded_state() -> FiltersState {
        let mut state = FiltersState::default();
        load_filters(
            &mut state,
            ResourceKind::Jobs,
            vec![
                select_filter_spec("status", &[("SUCCEEDED", "Succeeded"), ("FAILED", "Failed")]),
                select_filter_spec("hostname", &[]),
            ],
        );
        state
    }

    #[test]
    fn definitions_become_specs_with_sorted_options() {
        let mut definitions: FilterDefinitions = BTreeMap::new();
        definitions.insert(
            "status".to_string(),
            serde_json::from_value::<FilterDefinition>(serde_json::json!({
                "type": "select",
                "label": "Status",
                "translatable": true,
                "options": {"a": "zeta", "b": "Alpha", "c": "beta"}
            }))
            .expect("definition should parse"),
        );
        let specs = from_definitions(definitions);
        assert_eq!(specs.len(), 1);
        let labels: Vec<&str> = specs[0]
            .options
            .iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, ["Alpha", "beta", "zeta"]);
        assert!(specs[0].translatable);
        assert!(specs[0].value.is_empty());
    }

    #[test]
    fn two_stage_commit_applies_the_value_and_clears_the_stages() {
        let mut state = loaded_state();
        select_filter(&mut state, "status");
        assert_eq!(
            state.selection,
            FilterSelection::Picked {
                name: "status".to_string()
            }
        );
        select_option(&mut state, "SUCCEEDED");
        assert_eq!(state.selection, FilterSelection::Idle);
        assert_eq!(
            state
                .filters
                .iter()
                .find(|filter| filter.name == "status")
                .map(|filter| filter.value.as_str()),
            Some("SUCCEEDED")
        );
    }

    #[test]
    fn picking_an_unknown_filter_or_a_value_without_a_filter_is_a_no_op() {
        let mut state = loaded_state();
        select_filter(&mut state, "no_such_filter");
        assert_eq!(state.selection, FilterSelection::Idle);
        select_option(&mut state, "SUCCEEDED");
        assert_eq!(state.selection, FilterSelection::Idle);
        assert!(state.filters.iter().all(|filter| filter.value.is_empty()));
    }

    #[test]
    fn committing_against_a_vanished_filter_drops_silently() {
        let mut state = loaded_state();
        state.selection = FilterSelection::Ready {
            name: "removed".to_string(),
            value: "x".to_string(),
        };
        commit_selection(&mut state);
        assert_eq!(state.selection, FilterSelection::Idle);
        assert!(state.filters.iter().all(|filter| filter.value.is_empty()));
    }

    #[test]
    fn period_values_compose_with_a_slash_separator() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        assert_eq!(
            period_value(&start, &end),
            "2024-01-01T00:00:00.000Z/2024-01-31T00:00:00.000Z"
        );

        let mut state = loaded_state();
        state.filters.push(FilterSpec {
            name: "startDate".to_string(),
            label: "Start date".to_string(),
            kind: FilterKind::Period,
            translatable: false,
            options: vec![],
            value: String::new(),
        });
        select_filter(&mut state, "startDate");
        select_period(&mut state, &start, &end);
        assert_eq!(
            state
                .filters
                .iter()
                .find(|filter| filter.name == "startDate")
                .map(|filter| filter.value.as_str()),
            Some("2024-01-01T00:00:00.000Z/2024-01-31T00:00:00.000Z")
        );
    }

    #[test]
    fn period_bounds_cover_whole_days() {
        let (start, end) = period_bounds(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        assert_eq!(start.to_rfc3339_opts(SecondsFormat::Millis, true), "2024-01-01T00:00:00.000Z");
        assert_eq!(end.to_rfc3339_opts(SecondsFormat::Millis, true), "2024-01-02T23:59:59.999Z");
    }

    #[test]
    fn query_joins_applied_filters_and_the_text_query() {
        let mut state = loaded_state();
        set_value(&mut state, "status", "FAILED");
        set_value(&mut state, "hostname", "worker-2");
        set_text(&mut state, "  capture  ");
        assert_eq!(
            filter_query(&state),
            "status:FAILED,hostname:worker-2,textFilter:capture"
        );
        clear_value(&mut state, "hostname");
        clear_text(&mut state);
        assert_eq!(filter_query(&state), "status:FAILED");
        reset_values(&mut state);
        assert_eq!(filter_query(&state), "");
        assert_eq!(state.filters.len(), 2);
    }

    #[test]
    fn loading_a_new_set_resets_values_text_and_selection() {
        let mut state = loaded_state();
        set_value(&mut state, "status", "FAILED");
        set_text(&mut state, "query");
        select_filter(&mut state, "hostname");

        let mut replacement = select_filter_spec("series", &[]);
        replacement.value = "stale".to_string();
        load_filters(&mut state, ResourceKind::Events, vec![replacement]);

        assert_eq!(state.resource, Some(ResourceKind::Events));
        assert_eq!(state.filters.len(), 1);
        assert!(state.filters[0].value.is_empty());
        assert!(state.text.is_empty());
        assert_eq!(state.selection, FilterSelection::Idle);
    }
}
