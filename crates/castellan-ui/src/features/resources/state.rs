//! Per-resource fetched slices with sequence-numbered acceptance.
//!
//! Every fetch is tagged with a per-kind monotonically increasing
//! sequence number; a response older than the last accepted one is
//! discarded, so overlapping background and user-triggered fetches
//! cannot reorder the visible rows.

use super::ResourceKind;
use crate::features::table::state::TableRow;

/// One fetched page of rows, as handed over by the fetch layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchedPage {
    /// Mapped rows for the page.
    pub rows: Vec<TableRow>,
    /// Total matching row count across all pages.
    pub total: usize,
    /// Page size the server applied.
    pub limit: usize,
    /// Zero-based page index the server applied.
    pub offset: usize,
}

/// Fetched state for one resource kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceSlice {
    /// Rows of the last accepted fetch.
    pub rows: Vec<TableRow>,
    /// Total matching row count of the last accepted fetch.
    pub total: usize,
    /// Page size of the last accepted fetch.
    pub limit: usize,
    /// Page index of the last accepted fetch.
    pub offset: usize,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Sequence of the most recently issued fetch.
    pub issued_seq: u64,
    /// Sequence of the most recently accepted response.
    pub accepted_seq: u64,
}

/// Fetched slices for every resource kind.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourcesState {
    slices: [ResourceSlice; ResourceKind::ALL.len()],
}

impl Default for ResourcesState {
    fn default() -> Self {
        Self {
            slices: std::array::from_fn(|_| ResourceSlice::default()),
        }
    }
}

impl ResourcesState {
    /// Fetched slice for a resource kind.
    #[must_use]
    pub const fn slice(&self, kind: ResourceKind) -> &ResourceSlice {
        &self.slices[kind.index()]
    }

    fn slice_mut(&mut self, kind: ResourceKind) -> &mut ResourceSlice {
        &mut self.slices[kind.index()]
    }
}

/// Mark a fetch as started and return its sequence number.
pub fn begin_fetch(state: &mut ResourcesState, kind: ResourceKind) -> u64 {
    let slice = state.slice_mut(kind);
    slice.issued_seq += 1;
    slice.loading = true;
    slice.issued_seq
}

/// Accept a successful response unless a newer one already landed.
///
/// Returns whether the page was accepted. The loading flag stays set
/// while a newer fetch is still in flight.
pub fn complete_fetch(
    state: &mut ResourcesState,
    kind: ResourceKind,
    seq: u64,
    page: FetchedPage,
) -> bool {
    let slice = state.slice_mut(kind);
    if seq <= slice.accepted_seq {
        return false;
    }
    slice.accepted_seq = seq;
    slice.rows = page.rows;
    slice.total = page.total;
    slice.limit = page.limit;
    slice.offset = page.offset;
    if seq == slice.issued_seq {
        slice.loading = false;
    }
    true
}

/// Record a failed fetch, leaving the rows untouched.
pub fn fail_fetch(state: &mut ResourcesState, kind: ResourceKind, seq: u64) {
    let slice = state.slice_mut(kind);
    if seq == slice.issued_seq {
        slice.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: usize, first_id: &str) -> FetchedPage {
        FetchedPage {
            rows: vec![TableRow::new(first_id)],
            total,
            limit: 10,
            offset: 0,
        }
    }

    #[test]
    fn fetches_are_sequence_numbered_per_kind() {
        let mut state = ResourcesState::default();
        assert_eq!(begin_fetch(&mut state, ResourceKind::Events), 1);
        assert_eq!(begin_fetch(&mut state, ResourceKind::Events), 2);
        assert_eq!(begin_fetch(&mut state, ResourceKind::Jobs), 1);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = ResourcesState::default();
        let old = begin_fetch(&mut state, ResourceKind::Events);
        let newer = begin_fetch(&mut state, ResourceKind::Events);

        assert!(complete_fetch(&mut state, ResourceKind::Events, newer, page(5, "new")));
        assert!(!complete_fetch(&mut state, ResourceKind::Events, old, page(9, "old")));

        let slice = state.slice(ResourceKind::Events);
        assert_eq!(slice.total, 5);
        assert_eq!(slice.rows[0].id, "new");
        assert!(!slice.loading);
    }

    #[test]
    fn loading_persists_while_a_newer_fetch_is_in_flight() {
        let mut state = ResourcesState::default();
        let first = begin_fetch(&mut state, ResourceKind::Events);
        let _second = begin_fetch(&mut state, ResourceKind::Events);

        assert!(complete_fetch(&mut state, ResourceKind::Events, first, page(3, "first")));
        assert!(state.slice(ResourceKind::Events).loading);
    }

    #[test]
    fn failures_clear_loading_without_touching_rows() {
        let mut state = ResourcesState::default();
        let seq = begin_fetch(&mut state, ResourceKind::Events);
        assert!(complete_fetch(&mut state, ResourceKind::Events, seq, page(3, "kept")));

        let failed = begin_fetch(&mut state, ResourceKind::Events);
        fail_fetch(&mut state, ResourceKind::Events, failed);

        let slice = state.slice(ResourceKind::Events);
        assert!(!slice.loading);
        assert_eq!(slice.rows[0].id, "kept");
        assert_eq!(slice.total, 3);
    }
}
