//! Static per-resource table configuration.
//!
//! One descriptor per resource kind, resolved by exhaustive match so a
//! missing entry is a compile error rather than a silent fallthrough.

use super::ResourceKind;

/// Named cell renderer a column refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellTemplate {
    /// Plain text.
    Text,
    /// Calendar date.
    Date,
    /// Date with time of day.
    DateTime,
    /// Comma-joined name list.
    List,
    /// Status key with styling.
    Status,
    /// Boolean check mark.
    Toggle,
}

/// Column metadata inside a resource descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column key, unique within the descriptor.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Whether the server accepts this column as a sort key.
    pub sortable: bool,
    /// Whether cell values are translation keys.
    pub translatable: bool,
    /// Renderer used for cells of this column.
    pub template: CellTemplate,
}

/// Static table metadata for one resource kind.
#[derive(Debug)]
pub struct ResourceDescriptor {
    /// The kind this descriptor belongs to.
    pub kind: ResourceKind,
    /// Table caption.
    pub caption: &'static str,
    /// Whether rows of this table may be selected.
    pub multi_select: bool,
    /// Sort key applied when the view is first activated.
    pub default_sort: &'static str,
    /// Ordered column set.
    pub columns: &'static [ColumnSpec],
}

const fn col(
    name: &'static str,
    label: &'static str,
    sortable: bool,
    translatable: bool,
    template: CellTemplate,
) -> ColumnSpec {
    ColumnSpec {
        name,
        label,
        sortable,
        translatable,
        template,
    }
}

static EVENTS: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Events,
    caption: "Events",
    multi_select: true,
    default_sort: "date",
    columns: &[
        col("title", "Title", true, false, CellTemplate::Text),
        col("presenters", "Presenters", true, false, CellTemplate::List),
        col("series", "Series", true, false, CellTemplate::Text),
        col("date", "Date", true, false, CellTemplate::Date),
        col("start_date", "Start", true, false, CellTemplate::DateTime),
        col("end_date", "Stop", true, false, CellTemplate::DateTime),
        col("location", "Location", true, false, CellTemplate::Text),
        col("published", "Published", false, false, CellTemplate::List),
        col("status", "Status", true, true, CellTemplate::Status),
    ],
};

static SERIES: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Series,
    caption: "Series",
    multi_select: true,
    default_sort: "created",
    columns: &[
        col("title", "Title", true, false, CellTemplate::Text),
        col("organizers", "Organizers", true, false, CellTemplate::List),
        col("contributors", "Contributors", true, false, CellTemplate::List),
        col("created", "Created", true, false, CellTemplate::Date),
    ],
};

static RECORDINGS: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Recordings,
    caption: "Recordings",
    multi_select: false,
    default_sort: "name",
    columns: &[
        col("name", "Name", true, false, CellTemplate::Text),
        col("status", "Status", true, true, CellTemplate::Status),
        col("updated", "Updated", true, false, CellTemplate::DateTime),
        col("room_id", "Room", false, false, CellTemplate::Text),
    ],
};

static JOBS: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Jobs,
    caption: "Jobs",
    multi_select: false,
    default_sort: "submitted",
    columns: &[
        col("id", "Id", true, false, CellTemplate::Text),
        col("status", "Status", true, true, CellTemplate::Status),
        col("operation", "Operation", true, false, CellTemplate::Text),
        col("type", "Type", true, false, CellTemplate::Text),
        col("processing_host", "Host", true, false, CellTemplate::Text),
        col("submitted", "Submitted", true, false, CellTemplate::DateTime),
        col("started", "Started", true, false, CellTemplate::DateTime),
        col("creator", "Creator", true, false, CellTemplate::Text),
    ],
};

static SERVERS: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Servers,
    caption: "Servers",
    multi_select: false,
    default_sort: "hostname",
    columns: &[
        col("online", "Online", true, false, CellTemplate::Toggle),
        col("hostname", "Host name", true, false, CellTemplate::Text),
        col("node_name", "Node name", true, false, CellTemplate::Text),
        col("cores", "Cores", true, false, CellTemplate::Text),
        col("max_load", "Max load", true, false, CellTemplate::Text),
        col("maintenance", "Maintenance", true, false, CellTemplate::Toggle),
    ],
};

static SERVICES: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Services,
    caption: "Services",
    multi_select: false,
    default_sort: "name",
    columns: &[
        col("status", "Status", true, true, CellTemplate::Status),
        col("name", "Name", true, false, CellTemplate::Text),
        col("hostname", "Host name", true, false, CellTemplate::Text),
        col("completed", "Completed", true, false, CellTemplate::Text),
        col("running", "Running", true, false, CellTemplate::Text),
        col("queued", "Queued", true, false, CellTemplate::Text),
        col("mean_run_time", "Mean run time", true, false, CellTemplate::Text),
        col("mean_queue_time", "Mean queue time", true, false, CellTemplate::Text),
    ],
};

static USERS: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Users,
    caption: "Users",
    multi_select: false,
    default_sort: "name",
    columns: &[
        col("name", "Name", true, false, CellTemplate::Text),
        col("username", "Username", true, false, CellTemplate::Text),
        col("email", "Email", true, false, CellTemplate::Text),
        col("provider", "Provider", true, false, CellTemplate::Text),
        col("roles", "Roles", false, false, CellTemplate::List),
    ],
};

static GROUPS: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Groups,
    caption: "Groups",
    multi_select: false,
    default_sort: "name",
    columns: &[
        col("name", "Name", true, false, CellTemplate::Text),
        col("description", "Description", true, false, CellTemplate::Text),
        col("role", "Role", true, false, CellTemplate::Text),
    ],
};

static ACLS: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Acls,
    caption: "Access Policies",
    multi_select: false,
    default_sort: "name",
    columns: &[
        col("id", "Id", true, false, CellTemplate::Text),
        col("name", "Name", true, false, CellTemplate::Text),
    ],
};

static THEMES: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Themes,
    caption: "Themes",
    multi_select: false,
    default_sort: "name",
    columns: &[
        col("name", "Name", true, false, CellTemplate::Text),
        col("description", "Description", true, false, CellTemplate::Text),
        col("creation_date", "Created", true, false, CellTemplate::Date),
        col("creator", "Creator", true, false, CellTemplate::Text),
    ],
};

/// Look up the static descriptor for a resource kind.
#[must_use]
pub const fn descriptor(kind: ResourceKind) -> &'static ResourceDescriptor {
    match kind {
        ResourceKind::Events => &EVENTS,
        ResourceKind::Series => &SERIES,
        ResourceKind::Recordings => &RECORDINGS,
        ResourceKind::Jobs => &JOBS,
        ResourceKind::Servers => &SERVERS,
        ResourceKind::Services => &SERVICES,
        ResourceKind::Users => &USERS,
        ResourceKind::Groups => &GROUPS,
        ResourceKind::Acls => &ACLS,
        ResourceKind::Themes => &THEMES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn descriptors_are_bound_to_their_kind() {
        for kind in ResourceKind::ALL {
            assert_eq!(descriptor(kind).kind, kind);
        }
    }

    #[test]
    fn column_names_are_unique_per_descriptor() {
        for kind in ResourceKind::ALL {
            let columns = descriptor(kind).columns;
            let names: HashSet<&str> = columns.iter().map(|column| column.name).collect();
            assert_eq!(names.len(), columns.len(), "duplicate column in {kind:?}");
        }
    }

    #[test]
    fn default_sort_references_a_sortable_column() {
        for kind in ResourceKind::ALL {
            let desc = descriptor(kind);
            let sort_column = desc
                .columns
                .iter()
                .find(|column| column.name == desc.default_sort)
                .unwrap_or_else(|| panic!("missing default sort column in {kind:?}"));
            assert!(sort_column.sortable, "default sort not sortable in {kind:?}");
        }
    }

    #[test]
    fn multi_select_matches_bulk_capability() {
        for kind in ResourceKind::ALL {
            if descriptor(kind).multi_select {
                assert!(kind.supports_bulk_actions());
            }
        }
    }
}
