//! Cross-store orchestration: fetch scheduling, paging and selection.
//!
//! Each thunk snapshots the request parameters, awaits the fetch, and
//! applies the result through the slice operations. Failed fetches only
//! clear the loading flags; the table keeps its previous rows.

use crate::app::preferences;
use crate::core::store::AppStore;
use crate::features::filters::state as filters;
use crate::features::resources::ResourceKind;
use crate::features::resources::state as resources;
use crate::features::table::pagination;
use crate::features::table::state as table;
use crate::services::api::ApiClient;
use gloo::console;
use yew::platform::spawn_local;
use yewdux::prelude::Dispatch;

/// Fetch a page of rows for `kind` and load it into the table.
pub(crate) fn load_resource(dispatch: &Dispatch<AppStore>, client: &ApiClient, kind: ResourceKind) {
    let mut seq = 0;
    dispatch.reduce_mut(|store| {
        seq = resources::begin_fetch(&mut store.resources, kind);
        store.table.loading = true;
    });

    let state = dispatch.get();
    let query = filters::filter_query(&state.filters);
    let sort = state
        .table
        .sort_by
        .clone()
        .map(|column| (column, state.table.sort_direction));
    let limit = state.pagination.limit;
    let offset = state.pagination.offset;

    let dispatch = dispatch.clone();
    let client = client.clone();
    spawn_local(async move {
        match client.fetch_rows(kind, &query, sort, limit, offset).await {
            Ok(page) => {
                dispatch.reduce_mut(|store| {
                    if resources::complete_fetch(&mut store.resources, kind, seq, page) {
                        let slice = store.resources.slice(kind);
                        let rows = slice.rows.clone();
                        let total = slice.total;
                        pagination::set_total(&mut store.pagination, total);
                        let deactivated = preferences::load_deactivated_columns(kind);
                        let payload = table::build_payload(kind, rows, &store.table, &deactivated);
                        table::load_into_table(&mut store.table, payload);
                    }
                });
            }
            Err(err) => {
                console::error!("resource fetch failed", kind.as_str(), err.to_string());
                dispatch.reduce_mut(|store| {
                    resources::fail_fetch(&mut store.resources, kind, seq);
                    store.table.loading = false;
                });
            }
        }
    });
}

/// Re-fetch whichever resource kind is currently bound to the table.
pub(crate) fn update_pages(dispatch: &Dispatch<AppStore>, client: &ApiClient) {
    if let Some(kind) = dispatch.get().table.resource {
        load_resource(dispatch, client, kind);
    }
}

/// Navigate to a page: selection never survives page navigation.
pub(crate) fn go_to_page(dispatch: &Dispatch<AppStore>, client: &ApiClient, number: usize) {
    dispatch.reduce_mut(|store| {
        table::deselect_all(&mut store.table);
        table::refresh_bulk_visibility(&mut store.table);
        pagination::go_to(&mut store.pagination, number);
    });
    update_pages(dispatch, client);
}

/// Change the page size and re-fetch from the first page.
pub(crate) fn change_page_size(dispatch: &Dispatch<AppStore>, client: &ApiClient, limit: usize) {
    dispatch.reduce_mut(|store| {
        table::deselect_all(&mut store.table);
        table::refresh_bulk_visibility(&mut store.table);
        pagination::set_limit(&mut store.pagination, limit);
    });
    update_pages(dispatch, client);
}

/// Apply a sort column (toggling direction on repeats) and re-fetch.
pub(crate) fn sort_table(dispatch: &Dispatch<AppStore>, client: &ApiClient, column: &str) {
    dispatch.reduce_mut(|store| table::set_sort_by(&mut store.table, column));
    update_pages(dispatch, client);
}

/// Toggle one row's selection and recompute bulk-action visibility.
pub(crate) fn change_row_selection(dispatch: &Dispatch<AppStore>, id: &str, selected: bool) {
    dispatch.reduce_mut(|store| {
        table::select_row(&mut store.table, id, selected);
        table::refresh_bulk_visibility(&mut store.table);
    });
}

/// Toggle every row's selection and recompute bulk-action visibility.
pub(crate) fn change_all_selected(dispatch: &Dispatch<AppStore>, selected: bool) {
    dispatch.reduce_mut(|store| {
        if selected {
            table::select_all(&mut store.table);
        } else {
            table::deselect_all(&mut store.table);
        }
        table::refresh_bulk_visibility(&mut store.table);
    });
}

/// Replace the active filter set with the server's definitions.
///
/// A failed definition fetch still rebinds the view to an empty set so
/// stale filters from the previous resource kind cannot be committed.
pub(crate) fn load_filters(dispatch: &Dispatch<AppStore>, client: &ApiClient, kind: ResourceKind) {
    let dispatch = dispatch.clone();
    let client = client.clone();
    spawn_local(async move {
        match client.fetch_filters(kind).await {
            Ok(specs) => dispatch.reduce_mut(|store| {
                filters::load_filters(&mut store.filters, kind, specs);
            }),
            Err(err) => {
                console::error!("filter fetch failed", kind.as_str(), err.to_string());
                dispatch.reduce_mut(|store| {
                    filters::load_filters(&mut store.filters, kind, vec![]);
                });
            }
        }
    });
}
