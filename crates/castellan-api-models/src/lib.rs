#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Castellan admin API.
//!
//! Every list endpoint answers with the same paged [`ResourcePage`]
//! envelope; the per-resource summary payloads below are the row shapes
//! inside it. Keeping the DTOs in one crate keeps the wire contract a
//! single source of truth for the UI and any other client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Paged response envelope shared by every resource list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourcePage<T> {
    /// Rows for the requested page.
    pub results: Vec<T>,
    /// Total number of rows matching the filter, across all pages.
    pub total: usize,
    /// Number of rows in `results`.
    pub count: usize,
    /// Page size the server applied.
    pub limit: usize,
    /// Zero-based page index the server applied.
    pub offset: usize,
}

/// Kind discriminator for a server-provided filter definition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Enumerated value filter.
    Select,
    /// Start/end instant pair.
    Period,
}

/// One filter definition as served by `/api/{resource}/filters`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterDefinition {
    /// Filter kind.
    #[serde(rename = "type")]
    pub kind: FilterType,
    /// Display label.
    pub label: String,
    /// Whether option labels are translation keys.
    #[serde(default)]
    pub translatable: bool,
    /// Value-to-label option map for `select` filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
}

/// Filter definitions keyed by filter name.
pub type FilterDefinitions = BTreeMap<String, FilterDefinition>;

/// Event row as served by the events list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    /// Stable event identifier.
    pub id: String,
    /// Event title.
    pub title: String,
    /// Presenter display names.
    #[serde(default)]
    pub presenters: Vec<String>,
    /// Title of the containing series, when any.
    #[serde(default)]
    pub series: Option<String>,
    /// Recording date.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Scheduled start instant.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// Scheduled end instant.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Capture location.
    #[serde(default)]
    pub location: Option<String>,
    /// Publication channel names.
    #[serde(default)]
    pub publications: Vec<String>,
    /// Workflow status key.
    #[serde(default)]
    pub status: Option<String>,
}

/// Series row as served by the series list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    /// Stable series identifier.
    pub id: String,
    /// Series title.
    pub title: String,
    /// Organizer display names.
    #[serde(default)]
    pub organizers: Vec<String>,
    /// Contributor display names.
    #[serde(default)]
    pub contributors: Vec<String>,
    /// Creation instant.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Capture-agent row as served by the recordings list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordingSummary {
    /// Agent name, unique across the installation.
    pub name: String,
    /// Agent status key.
    pub status: String,
    /// Last check-in instant.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    /// Room the agent is installed in.
    #[serde(default)]
    pub room_id: Option<String>,
}

/// Processing-job row as served by the jobs list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    /// Job identifier.
    pub id: u64,
    /// Job status key.
    pub status: String,
    /// Workflow operation currently running.
    #[serde(default)]
    pub operation: Option<String>,
    /// Job type.
    #[serde(rename = "type")]
    pub job_type: String,
    /// Host the job is dispatched to.
    #[serde(default)]
    pub processing_host: Option<String>,
    /// Submission instant.
    #[serde(default)]
    pub submitted: Option<DateTime<Utc>>,
    /// Processing start instant.
    #[serde(default)]
    pub started: Option<DateTime<Utc>>,
    /// Submitting user.
    #[serde(default)]
    pub creator: Option<String>,
}

/// Server row as served by the servers list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerSummary {
    /// Server hostname.
    pub hostname: String,
    /// Whether the node is online.
    pub online: bool,
    /// Whether the node is in maintenance mode.
    #[serde(default)]
    pub maintenance: bool,
    /// Friendly node name.
    #[serde(default)]
    pub node_name: Option<String>,
    /// CPU core count.
    pub cores: u32,
    /// Configured load ceiling.
    pub max_load: f32,
}

/// Service row as served by the services list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    /// Service type name.
    pub name: String,
    /// Host the service runs on.
    pub hostname: String,
    /// Service status key.
    pub status: String,
    /// Completed job count.
    #[serde(default)]
    pub completed: u64,
    /// Running job count.
    #[serde(default)]
    pub running: u32,
    /// Queued job count.
    #[serde(default)]
    pub queued: u32,
    /// Mean job run time in seconds.
    #[serde(default)]
    pub mean_run_time: u64,
    /// Mean job queue time in seconds.
    #[serde(default)]
    pub mean_queue_time: u64,
}

/// User row as served by the users list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Login name, unique across the installation.
    pub username: String,
    /// Full display name.
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Identity provider the account came from.
    #[serde(default)]
    pub provider: Option<String>,
    /// Assigned role names.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Group row as served by the groups list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    /// Stable group identifier.
    pub id: String,
    /// Group display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Role granted by membership.
    pub role: String,
}

/// Access-control list row as served by the acls list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AclSummary {
    /// ACL identifier.
    pub id: u64,
    /// ACL display name.
    pub name: String,
}

/// Theme row as served by the themes list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSummary {
    /// Theme identifier.
    pub id: u64,
    /// Theme display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation instant.
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    /// Creating user.
    #[serde(default)]
    pub creator: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_round_trips() {
        let page: ResourcePage<AclSummary> = serde_json::from_value(serde_json::json!({
            "results": [{"id": 7, "name": "internal"}],
            "total": 41,
            "count": 1,
            "limit": 10,
            "offset": 4,
        }))
        .expect("envelope should parse");
        assert_eq!(page.total, 41);
        assert_eq!(page.results[0].name, "internal");
    }

    #[test]
    fn filter_definitions_parse_with_optional_fields() {
        let defs: FilterDefinitions = serde_json::from_value(serde_json::json!({
            "status": {
                "type": "select",
                "label": "Status",
                "translatable": true,
                "options": {"FAILED": "Failed", "SUCCEEDED": "Succeeded"}
            },
            "startDate": {"type": "period", "label": "Start date"}
        }))
        .expect("definitions should parse");
        assert_eq!(defs["status"].kind, FilterType::Select);
        assert!(defs["status"].options.as_ref().is_some_and(|o| o.len() == 2));
        assert_eq!(defs["startDate"].kind, FilterType::Period);
        assert!(!defs["startDate"].translatable);
        assert!(defs["startDate"].options.is_none());
    }

    #[test]
    fn event_summary_tolerates_sparse_payloads() {
        let event: EventSummary = serde_json::from_value(serde_json::json!({
            "id": "e-1",
            "title": "Colloquium"
        }))
        .expect("sparse event should parse");
        assert!(event.presenters.is_empty());
        assert!(event.date.is_none());
    }
}
