//! Table store slice and its pure transformations.
//!
//! Rows are opaque to this layer beyond an id, a selection flag and the
//! cell values keyed by column name; every mutation goes through the
//! functions below so the store stays consistent under any call order.

use crate::features::resources::registry::{CellTemplate, ColumnSpec, descriptor};
use crate::features::resources::ResourceKind;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// A single table cell value, rendered through the column's template.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CellValue {
    /// Nothing to show.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// Point in time.
    Instant(DateTime<Utc>),
    /// Boolean flag.
    Flag(bool),
    /// Name list.
    List(Vec<String>),
}

impl CellValue {
    /// Text cell; empty input collapses to [`CellValue::Empty`].
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// Optional text cell.
    #[must_use]
    pub fn opt_text(value: Option<String>) -> Self {
        value.map_or(Self::Empty, Self::text)
    }

    /// Optional instant cell.
    #[must_use]
    pub const fn instant(value: Option<DateTime<Utc>>) -> Self {
        match value {
            Some(instant) => Self::Instant(instant),
            None => Self::Empty,
        }
    }

    /// Name-list cell; an empty list collapses to [`CellValue::Empty`].
    #[must_use]
    pub fn list(values: Vec<String>) -> Self {
        if values.is_empty() {
            Self::Empty
        } else {
            Self::List(values)
        }
    }
}

/// One table row: id, selection flag and cells keyed by column name.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TableRow {
    /// Stable row identifier within its resource type.
    pub id: String,
    /// Whether the row is part of the bulk selection.
    pub selected: bool,
    /// Cell values keyed by column name.
    pub cells: BTreeMap<&'static str, CellValue>,
}

impl TableRow {
    /// Row with the given id and no cells.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            selected: false,
            cells: BTreeMap::new(),
        }
    }

    /// Builder-style cell insertion.
    #[must_use]
    pub fn with(mut self, column: &'static str, value: CellValue) -> Self {
        self.cells.insert(column, value);
        self
    }

    /// Cell value for a column, when present.
    #[must_use]
    pub fn cell(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

/// Sort direction sent to the server as part of the sort spec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Column state: the static spec plus the user's visibility preference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    /// Column key, unique within the table.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Whether the column is a valid sort key.
    pub sortable: bool,
    /// Whether cell values are translation keys.
    pub translatable: bool,
    /// Renderer for cells of this column.
    pub template: CellTemplate,
    /// Whether the user hid this column.
    pub deactivated: bool,
}

impl TableColumn {
    /// Column state from a descriptor spec and a visibility preference.
    #[must_use]
    pub const fn from_spec(spec: &ColumnSpec, deactivated: bool) -> Self {
        Self {
            name: spec.name,
            label: spec.label,
            sortable: spec.sortable,
            translatable: spec.translatable,
            template: spec.template,
            deactivated,
        }
    }
}

/// Table store slice.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TableState {
    /// Resource kind currently bound to the table, if any.
    pub resource: Option<ResourceKind>,
    /// Column set with visibility flags, in descriptor order.
    pub columns: Vec<TableColumn>,
    /// Rows of the current page.
    pub rows: Vec<TableRow>,
    /// Active sort column.
    pub sort_by: Option<String>,
    /// Active sort direction.
    pub sort_direction: SortDirection,
    /// Whether rows may be selected.
    pub multi_select: bool,
    /// Whether a fetch for this table is in flight.
    pub loading: bool,
    /// Whether bulk-action controls should be shown.
    pub show_actions: bool,
}

/// Payload applied atomically by [`load_into_table`].
#[derive(Clone, Debug, PartialEq)]
pub struct TablePayload {
    /// Resource kind the rows belong to.
    pub resource: ResourceKind,
    /// Replacement rows.
    pub rows: Vec<TableRow>,
    /// Column set to apply.
    pub columns: Vec<TableColumn>,
    /// Whether rows may be selected.
    pub multi_select: bool,
    /// Sort column to apply.
    pub sort_by: Option<String>,
    /// Sort direction to apply.
    pub sort_direction: SortDirection,
}

/// Compute the table payload for a fetched page of rows.
///
/// A fetch for the kind already bound to the table is a refresh: the
/// column layout and sort configuration carry over unchanged. A fetch
/// for a different kind is a structural reset re-derived from the
/// descriptor, merged with the caller's deactivated-column preference.
#[must_use]
pub fn build_payload(
    kind: ResourceKind,
    rows: Vec<TableRow>,
    table: &TableState,
    deactivated: &[String],
) -> TablePayload {
    if table.resource == Some(kind) {
        return TablePayload {
            resource: kind,
            rows,
            columns: table.columns.clone(),
            multi_select: table.multi_select,
            sort_by: table.sort_by.clone(),
            sort_direction: table.sort_direction,
        };
    }
    let desc = descriptor(kind);
    TablePayload {
        resource: kind,
        rows,
        columns: desc
            .columns
            .iter()
            .map(|spec| {
                TableColumn::from_spec(spec, deactivated.iter().any(|name| name == spec.name))
            })
            .collect(),
        multi_select: desc.multi_select,
        sort_by: Some(desc.default_sort.to_string()),
        sort_direction: SortDirection::Asc,
    }
}

/// Atomically replace the table contents from a payload.
pub fn load_into_table(state: &mut TableState, payload: TablePayload) {
    state.resource = Some(payload.resource);
    state.rows = payload.rows;
    state.columns = payload.columns;
    state.multi_select = payload.multi_select;
    state.sort_by = payload.sort_by;
    state.sort_direction = payload.sort_direction;
    state.loading = false;
    refresh_bulk_visibility(state);
}

/// Replace the column set wholesale.
pub fn set_columns(state: &mut TableState, columns: Vec<TableColumn>) {
    state.columns = columns;
}

/// Show a previously hidden column.
pub fn set_active_column(state: &mut TableState, name: &str) {
    set_column_visibility(state, name, false);
}

/// Hide a column.
pub fn set_deactivated_column(state: &mut TableState, name: &str) {
    set_column_visibility(state, name, true);
}

fn set_column_visibility(state: &mut TableState, name: &str, deactivated: bool) {
    if let Some(column) = state.columns.iter_mut().find(|column| column.name == name) {
        column.deactivated = deactivated;
    }
}

/// Set the sort column; re-setting the same column flips the direction.
pub fn set_sort_by(state: &mut TableState, column: &str) {
    if state.sort_by.as_deref() == Some(column) {
        state.sort_direction = state.sort_direction.toggled();
    } else {
        state.sort_by = Some(column.to_string());
        state.sort_direction = SortDirection::Asc;
    }
}

/// Explicitly set the sort direction.
pub fn set_direction(state: &mut TableState, direction: SortDirection) {
    state.sort_direction = direction;
}

/// Set one row's selection flag by id; unknown ids are a no-op.
pub fn select_row(state: &mut TableState, id: &str, selected: bool) {
    if let Some(row) = state.rows.iter_mut().find(|row| row.id == id) {
        row.selected = selected;
    }
}

/// Select every current row.
pub fn select_all(state: &mut TableState) {
    for row in &mut state.rows {
        row.selected = true;
    }
}

/// Deselect every current row.
pub fn deselect_all(state: &mut TableState) {
    for row in &mut state.rows {
        row.selected = false;
    }
}

/// Whether any row is currently selected.
#[must_use]
pub fn any_selected(state: &TableState) -> bool {
    state.rows.iter().any(|row| row.selected)
}

/// Recompute the bulk-action visibility flag.
///
/// The flag is scoped to resource kinds that support bulk actions, so a
/// selection in one kind cannot leak visibility into another.
pub fn refresh_bulk_visibility(state: &mut TableState) {
    state.show_actions = state
        .resource
        .is_some_and(ResourceKind::supports_bulk_actions)
        && any_selected(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn row(id: &str) -> TableRow {
        TableRow::new(id).with("title", CellValue::text(format!("row {id}")))
    }

    fn events_table() -> TableState {
        let mut state = TableState::default();
        let payload = build_payload(
            ResourceKind::Events,
            vec![row("1"), row("2"), row("3")],
            &state,
            &[],
        );
        load_into_table(&mut state, payload);
        state
    }

    #[test]
    fn sort_toggles_on_same_column_and_resets_on_switch() {
        let mut state = TableState::default();
        set_sort_by(&mut state, "title");
        assert_eq!(state.sort_by.as_deref(), Some("title"));
        assert_eq!(state.sort_direction, SortDirection::Asc);
        set_sort_by(&mut state, "title");
        assert_eq!(state.sort_direction, SortDirection::Desc);
        set_sort_by(&mut state, "date");
        assert_eq!(state.sort_by.as_deref(), Some("date"));
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn column_toggles_never_duplicate_or_drop_columns() {
        let mut state = events_table();
        let descriptor_names: HashSet<&str> = descriptor(ResourceKind::Events)
            .columns
            .iter()
            .map(|column| column.name)
            .collect();

        set_deactivated_column(&mut state, "presenters");
        set_deactivated_column(&mut state, "location");
        set_active_column(&mut state, "presenters");
        set_active_column(&mut state, "no_such_column");

        let names: HashSet<&str> = state.columns.iter().map(|column| column.name).collect();
        assert_eq!(names, descriptor_names);
        assert_eq!(state.columns.len(), descriptor_names.len());
        assert!(
            state
                .columns
                .iter()
                .find(|column| column.name == "location")
                .is_some_and(|column| column.deactivated)
        );
        assert!(
            state
                .columns
                .iter()
                .find(|column| column.name == "presenters")
                .is_some_and(|column| !column.deactivated)
        );
    }

    #[test]
    fn switching_resource_resets_layout_to_the_new_descriptor() {
        let mut state = events_table();
        set_sort_by(&mut state, "title");
        set_deactivated_column(&mut state, "location");

        let payload = build_payload(ResourceKind::Jobs, vec![row("j1")], &state, &[]);
        load_into_table(&mut state, payload);

        assert_eq!(state.resource, Some(ResourceKind::Jobs));
        assert_eq!(state.sort_by.as_deref(), Some("submitted"));
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert!(!state.multi_select);
        assert_eq!(
            state.columns.len(),
            descriptor(ResourceKind::Jobs).columns.len()
        );
    }

    #[test]
    fn refresh_of_the_same_resource_keeps_layout_and_sort() {
        let mut state = events_table();
        set_sort_by(&mut state, "title");
        set_sort_by(&mut state, "title");
        set_deactivated_column(&mut state, "location");

        let payload = build_payload(ResourceKind::Events, vec![row("9")], &state, &[]);
        load_into_table(&mut state, payload);

        assert_eq!(state.sort_by.as_deref(), Some("title"));
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert!(
            state
                .columns
                .iter()
                .find(|column| column.name == "location")
                .is_some_and(|column| column.deactivated)
        );
        assert_eq!(state.rows.len(), 1);
    }

    #[test]
    fn structural_reset_applies_deactivation_preferences() {
        let state = TableState::default();
        let payload = build_payload(
            ResourceKind::Events,
            vec![],
            &state,
            &["presenters".to_string()],
        );
        assert!(
            payload
                .columns
                .iter()
                .find(|column| column.name == "presenters")
                .is_some_and(|column| column.deactivated)
        );
    }

    #[test]
    fn selection_ops_toggle_rows_and_bulk_visibility() {
        let mut state = events_table();
        select_row(&mut state, "2", true);
        select_row(&mut state, "missing", true);
        refresh_bulk_visibility(&mut state);
        assert!(state.show_actions);
        assert_eq!(state.rows.iter().filter(|row| row.selected).count(), 1);

        select_all(&mut state);
        refresh_bulk_visibility(&mut state);
        assert!(state.rows.iter().all(|row| row.selected));

        deselect_all(&mut state);
        refresh_bulk_visibility(&mut state);
        assert!(!state.show_actions);
        assert!(state.rows.iter().all(|row| !row.selected));
    }

    #[test]
    fn bulk_visibility_stays_hidden_for_non_bulk_kinds() {
        let mut state = TableState::default();
        let payload = build_payload(ResourceKind::Jobs, vec![row("j1")], &state, &[]);
        load_into_table(&mut state, payload);
        select_row(&mut state, "j1", true);
        refresh_bulk_visibility(&mut state);
        assert!(!state.show_actions);
    }

    #[test]
    fn selection_clears_on_page_navigation() {
        // Mirrors the go-to-page orchestration: deselect before moving.
        let mut state = events_table();
        select_all(&mut state);
        refresh_bulk_visibility(&mut state);
        assert!(state.show_actions);

        deselect_all(&mut state);
        refresh_bulk_visibility(&mut state);
        assert!(state.rows.iter().all(|row| !row.selected));
        assert!(!state.show_actions);
    }
}
