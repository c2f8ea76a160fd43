//! HTTP client helpers (REST).

use crate::core::logic::{build_resource_path, filters_path};
use crate::features::filters::state::{FilterSpec, from_definitions};
use crate::features::resources::ResourceKind;
use crate::features::resources::rows::{
    acl_row, event_row, group_row, job_row, recording_row, series_row, server_row, service_row,
    theme_row, user_row,
};
use crate::features::resources::state::FetchedPage;
use crate::features::table::state::{SortDirection, TableRow};
use castellan_api_models::{
    AclSummary, EventSummary, FilterDefinitions, GroupSummary, JobSummary, RecordingSummary,
    ResourcePage, SeriesSummary, ServerSummary, ServiceSummary, ThemeSummary, UserSummary,
};
use gloo_net::http::Request;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, path: &str) -> anyhow::Result<T> {
        Ok(Request::get(&format!("{}{}", self.base_url, path))
            .send()
            .await?
            .json::<T>()
            .await?)
    }

    /// Fetch one page of rows for a resource kind.
    ///
    /// The match below is the resource dispatch table; it is exhaustive
    /// over [`ResourceKind`], so a new kind cannot be forgotten here.
    pub(crate) async fn fetch_rows(
        &self,
        kind: ResourceKind,
        filter_query: &str,
        sort: Option<(String, SortDirection)>,
        limit: usize,
        offset: usize,
    ) -> anyhow::Result<FetchedPage> {
        let sort = sort
            .as_ref()
            .map(|(column, direction)| (column.as_str(), *direction));
        let path = build_resource_path(kind, filter_query, sort, limit, offset);
        match kind {
            ResourceKind::Events => Ok(into_page(
                self.get_json::<ResourcePage<EventSummary>>(&path).await?,
                event_row,
            )),
            ResourceKind::Series => Ok(into_page(
                self.get_json::<ResourcePage<SeriesSummary>>(&path).await?,
                series_row,
            )),
            ResourceKind::Recordings => Ok(into_page(
                self.get_json::<ResourcePage<RecordingSummary>>(&path).await?,
                recording_row,
            )),
            ResourceKind::Jobs => Ok(into_page(
                self.get_json::<ResourcePage<JobSummary>>(&path).await?,
                job_row,
            )),
            ResourceKind::Servers => Ok(into_page(
                self.get_json::<ResourcePage<ServerSummary>>(&path).await?,
                server_row,
            )),
            ResourceKind::Services => Ok(into_page(
                self.get_json::<ResourcePage<ServiceSummary>>(&path).await?,
                service_row,
            )),
            ResourceKind::Users => Ok(into_page(
                self.get_json::<ResourcePage<UserSummary>>(&path).await?,
                user_row,
            )),
            ResourceKind::Groups => Ok(into_page(
                self.get_json::<ResourcePage<GroupSummary>>(&path).await?,
                group_row,
            )),
            ResourceKind::Acls => Ok(into_page(
                self.get_json::<ResourcePage<AclSummary>>(&path).await?,
                acl_row,
            )),
            ResourceKind::Themes => Ok(into_page(
                self.get_json::<ResourcePage<ThemeSummary>>(&path).await?,
                theme_row,
            )),
        }
    }

    /// Fetch the filter definitions for a resource kind.
    pub(crate) async fn fetch_filters(&self, kind: ResourceKind) -> anyhow::Result<Vec<FilterSpec>> {
        let definitions: FilterDefinitions = self.get_json(&filters_path(kind)).await?;
        Ok(from_definitions(definitions))
    }
}

fn into_page<T>(page: ResourcePage<T>, map: impl Fn(T) -> TableRow) -> FetchedPage {
    FetchedPage {
        rows: page.results.into_iter().map(map).collect(),
        total: page.total,
        limit: page.limit,
        offset: page.offset,
    }
}
