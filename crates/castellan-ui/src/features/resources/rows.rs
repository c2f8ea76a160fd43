//! Mapping from API summary DTOs to generic table rows.
//!
//! Cell keys must match the column names declared in the registry; the
//! table layer itself never looks inside the DTOs.

use crate::features::table::state::{CellValue, TableRow};
use castellan_api_models::{
    AclSummary, EventSummary, GroupSummary, JobSummary, RecordingSummary, SeriesSummary,
    ServerSummary, ServiceSummary, ThemeSummary, UserSummary,
};

/// Table row for an event.
#[must_use]
pub fn event_row(event: EventSummary) -> TableRow {
    TableRow::new(event.id)
        .with("title", CellValue::text(event.title))
        .with("presenters", CellValue::list(event.presenters))
        .with("series", CellValue::opt_text(event.series))
        .with("date", CellValue::instant(event.date))
        .with("start_date", CellValue::instant(event.start_date))
        .with("end_date", CellValue::instant(event.end_date))
        .with("location", CellValue::opt_text(event.location))
        .with("published", CellValue::list(event.publications))
        .with("status", CellValue::opt_text(event.status))
}

/// Table row for a series.
#[must_use]
pub fn series_row(series: SeriesSummary) -> TableRow {
    TableRow::new(series.id)
        .with("title", CellValue::text(series.title))
        .with("organizers", CellValue::list(series.organizers))
        .with("contributors", CellValue::list(series.contributors))
        .with("created", CellValue::instant(series.created))
}

/// Table row for a capture agent.
#[must_use]
pub fn recording_row(recording: RecordingSummary) -> TableRow {
    TableRow::new(recording.name.clone())
        .with("name", CellValue::text(recording.name))
        .with("status", CellValue::text(recording.status))
        .with("updated", CellValue::instant(recording.updated))
        .with("room_id", CellValue::opt_text(recording.room_id))
}

/// Table row for a processing job.
#[must_use]
pub fn job_row(job: JobSummary) -> TableRow {
    TableRow::new(job.id.to_string())
        .with("id", CellValue::text(job.id.to_string()))
        .with("status", CellValue::text(job.status))
        .with("operation", CellValue::opt_text(job.operation))
        .with("type", CellValue::text(job.job_type))
        .with("processing_host", CellValue::opt_text(job.processing_host))
        .with("submitted", CellValue::instant(job.submitted))
        .with("started", CellValue::instant(job.started))
        .with("creator", CellValue::opt_text(job.creator))
}

/// Table row for a server.
#[must_use]
pub fn server_row(server: ServerSummary) -> TableRow {
    TableRow::new(server.hostname.clone())
        .with("online", CellValue::Flag(server.online))
        .with("hostname", CellValue::text(server.hostname))
        .with("node_name", CellValue::opt_text(server.node_name))
        .with("cores", CellValue::text(server.cores.to_string()))
        .with("max_load", CellValue::text(format!("{:.1}", server.max_load)))
        .with("maintenance", CellValue::Flag(server.maintenance))
}

/// Table row for a service.
#[must_use]
pub fn service_row(service: ServiceSummary) -> TableRow {
    TableRow::new(format!("{}@{}", service.name, service.hostname))
        .with("status", CellValue::text(service.status))
        .with("name", CellValue::text(service.name))
        .with("hostname", CellValue::text(service.hostname))
        .with("completed", CellValue::text(service.completed.to_string()))
        .with("running", CellValue::text(service.running.to_string()))
        .with("queued", CellValue::text(service.queued.to_string()))
        .with(
            "mean_run_time",
            CellValue::text(format!("{} s", service.mean_run_time)),
        )
        .with(
            "mean_queue_time",
            CellValue::text(format!("{} s", service.mean_queue_time)),
        )
}

/// Table row for a user account.
#[must_use]
pub fn user_row(user: UserSummary) -> TableRow {
    TableRow::new(user.username.clone())
        .with("name", CellValue::text(user.name))
        .with("username", CellValue::text(user.username))
        .with("email", CellValue::opt_text(user.email))
        .with("provider", CellValue::opt_text(user.provider))
        .with("roles", CellValue::list(user.roles))
}

/// Table row for a group.
#[must_use]
pub fn group_row(group: GroupSummary) -> TableRow {
    TableRow::new(group.id)
        .with("name", CellValue::text(group.name))
        .with("description", CellValue::opt_text(group.description))
        .with("role", CellValue::text(group.role))
}

/// Table row for an access-control list.
#[must_use]
pub fn acl_row(acl: AclSummary) -> TableRow {
    TableRow::new(acl.id.to_string())
        .with("id", CellValue::text(acl.id.to_string()))
        .with("name", CellValue::text(acl.name))
}

/// Table row for a theme.
#[must_use]
pub fn theme_row(theme: ThemeSummary) -> TableRow {
    TableRow::new(theme.id.to_string())
        .with("name", CellValue::text(theme.name))
        .with("description", CellValue::opt_text(theme.description))
        .with("creation_date", CellValue::instant(theme.creation_date))
        .with("creator", CellValue::opt_text(theme.creator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::resources::registry::descriptor;
    use crate::features::resources::ResourceKind;

    #[test]
    fn event_rows_cover_every_event_column() {
        let row = event_row(EventSummary {
            id: "e-1".to_string(),
            title: "Colloquium".to_string(),
            presenters: vec!["Kim".to_string()],
            series: Some("Physics".to_string()),
            date: None,
            start_date: None,
            end_date: None,
            location: None,
            publications: vec![],
            status: Some("EVENTS.STATUS.PROCESSED".to_string()),
        });
        assert_eq!(row.id, "e-1");
        for column in descriptor(ResourceKind::Events).columns {
            assert!(row.cell(column.name).is_some(), "missing {}", column.name);
        }
        assert_eq!(
            row.cell("presenters"),
            Some(&CellValue::List(vec!["Kim".to_string()]))
        );
        assert_eq!(row.cell("date"), Some(&CellValue::Empty));
    }

    #[test]
    fn user_rows_are_keyed_by_username() {
        let row = user_row(UserSummary {
            username: "jdoe".to_string(),
            name: "J. Doe".to_string(),
            email: None,
            provider: Some("ldap".to_string()),
            roles: vec!["ROLE_ADMIN".to_string()],
        });
        assert_eq!(row.id, "jdoe");
        assert_eq!(row.cell("email"), Some(&CellValue::Empty));
    }

    #[test]
    fn server_rows_carry_flags_and_formatted_load() {
        let row = server_row(ServerSummary {
            hostname: "worker-1".to_string(),
            online: true,
            maintenance: false,
            node_name: None,
            cores: 16,
            max_load: 16.0,
        });
        assert_eq!(row.cell("online"), Some(&CellValue::Flag(true)));
        assert_eq!(
            row.cell("max_load"),
            Some(&CellValue::Text("16.0".to_string()))
        );
    }

    #[test]
    fn service_rows_get_a_composite_id() {
        let row = service_row(ServiceSummary {
            name: "encode".to_string(),
            hostname: "worker-1".to_string(),
            status: "NORMAL".to_string(),
            completed: 10,
            running: 1,
            queued: 0,
            mean_run_time: 42,
            mean_queue_time: 3,
        });
        assert_eq!(row.id, "encode@worker-1");
        assert_eq!(
            row.cell("mean_run_time"),
            Some(&CellValue::Text("42 s".to_string()))
        );
    }
}
