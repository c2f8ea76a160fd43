//! Named filter profiles.
//!
//! Operators can save the currently applied filter set under a name and
//! re-apply it later. Profiles are scoped to the resource kind they
//! were captured from.

use super::state::{FilterSelection, FiltersState, reset_values, set_value};
use crate::features::resources::ResourceKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A saved filter set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterProfile {
    /// Stable profile identifier.
    pub id: Uuid,
    /// Profile name shown in the picker.
    pub name: String,
    /// Optional free-text description.
    pub description: String,
    /// Resource kind the profile applies to.
    pub resource: ResourceKind,
    /// Free-text query captured with the profile.
    pub text: String,
    /// Applied filter values by filter name.
    pub values: BTreeMap<String, String>,
}

/// Profile store slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfilesState {
    /// All saved profiles, across resource kinds.
    pub profiles: Vec<FilterProfile>,
}

/// Capture the currently applied filters as a new profile.
///
/// Returns `None` while no resource kind is bound.
#[must_use]
pub fn snapshot(
    filters: &FiltersState,
    name: impl Into<String>,
    description: impl Into<String>,
) -> Option<FilterProfile> {
    let resource = filters.resource?;
    Some(FilterProfile {
        id: Uuid::new_v4(),
        name: name.into(),
        description: description.into(),
        resource,
        text: filters.text.clone(),
        values: filters
            .filters
            .iter()
            .filter(|filter| !filter.value.is_empty())
            .map(|filter| (filter.name.clone(), filter.value.clone()))
            .collect(),
    })
}

/// Save a profile, replacing any existing profile with the same id.
pub fn save_profile(state: &mut ProfilesState, profile: FilterProfile) {
    if let Some(existing) = state
        .profiles
        .iter_mut()
        .find(|existing| existing.id == profile.id)
    {
        *existing = profile;
    } else {
        state.profiles.push(profile);
    }
}

/// Remove a profile by id; unknown ids are a no-op.
pub fn remove_profile(state: &mut ProfilesState, id: Uuid) {
    state.profiles.retain(|profile| profile.id != id);
}

/// Profiles saved for one resource kind, in save order.
#[must_use]
pub fn profiles_for(state: &ProfilesState, kind: ResourceKind) -> Vec<FilterProfile> {
    state
        .profiles
        .iter()
        .filter(|profile| profile.resource == kind)
        .cloned()
        .collect()
}

/// Re-apply a saved profile to the active filter set.
///
/// Applies only when the profile's resource kind matches the active
/// one; values whose filters no longer exist are skipped.
pub fn apply_profile(filters: &mut FiltersState, profile: &FilterProfile) {
    if filters.resource != Some(profile.resource) {
        return;
    }
    reset_values(filters);
    for (name, value) in &profile.values {
        set_value(filters, name, value.clone());
    }
    filters.text = profile.text.clone();
    filters.selection = FilterSelection::Idle;
}
