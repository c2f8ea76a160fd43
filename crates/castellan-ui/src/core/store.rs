//! App-wide yewdux store.
//!
//! # Design
//! - One store, small focused slices, so reducers stay predictable.
//! - Slices are mutated only through their feature module's functions;
//!   components read them through selectors.

use crate::features::filters::profiles::ProfilesState;
use crate::features::filters::state::FiltersState;
use crate::features::resources::state::ResourcesState;
use crate::features::table::pagination::PaginationState;
use crate::features::table::state::TableState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Table state for the active resource view.
    pub table: TableState,
    /// Filter set and selection state for the active resource view.
    pub filters: FiltersState,
    /// Pagination state for the active resource view.
    pub pagination: PaginationState,
    /// Per-resource fetched slices.
    pub resources: ResourcesState,
    /// Saved filter profiles.
    pub profiles: ProfilesState,
}
