//! Pure request-path builders, extracted for non-wasm testing.

use crate::features::resources::ResourceKind;
use crate::features::table::state::SortDirection;
use std::fmt::Write;

/// Build the list path for a resource fetch.
///
/// The composed filter string rides in a single urlencoded `filter`
/// parameter; the sort spec is `{column}:{ASC|DESC}`.
#[must_use]
pub fn build_resource_path(
    kind: ResourceKind,
    filter_query: &str,
    sort: Option<(&str, SortDirection)>,
    limit: usize,
    offset: usize,
) -> String {
    let mut path = format!("/api/{}?limit={limit}&offset={offset}", kind.as_str());
    if !filter_query.is_empty() {
        let _ = write!(path, "&filter={}", urlencoding::encode(filter_query));
    }
    if let Some((column, direction)) = sort {
        let _ = write!(path, "&sort={column}:{}", direction.as_str());
    }
    path
}

/// Path of the filter-definition endpoint for a resource kind.
#[must_use]
pub fn filters_path(kind: ResourceKind) -> String {
    format!("/api/{}/filters", kind.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_paths_carry_paging_filter_and_sort() {
        assert_eq!(
            build_resource_path(ResourceKind::Events, "", None, 10, 0),
            "/api/events?limit=10&offset=0"
        );
        assert_eq!(
            build_resource_path(
                ResourceKind::Jobs,
                "status:FAILED,textFilter:encode",
                Some(("submitted", SortDirection::Desc)),
                20,
                3,
            ),
            "/api/jobs?limit=20&offset=3&filter=status%3AFAILED%2CtextFilter%3Aencode&sort=submitted:DESC"
        );
    }

    #[test]
    fn page_size_change_refetches_from_the_first_page() {
        // Mirrors the change-page-size orchestration: limit applied, offset reset.
        assert_eq!(
            build_resource_path(ResourceKind::Events, "", Some(("date", SortDirection::Asc)), 20, 0),
            "/api/events?limit=20&offset=0&sort=date:ASC"
        );
    }

    #[test]
    fn filters_paths_are_per_resource() {
        assert_eq!(filters_path(ResourceKind::Themes), "/api/themes/filters");
    }
}
