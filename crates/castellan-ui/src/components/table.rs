//! Generic resource table.
//!
//! # Design
//! - Fully prop-driven: the component renders [`TableState`] and emits
//!   intents; all mutation happens in the orchestration layer.
//! - Cells render through the column's template, never by peeking at
//!   resource-specific data.

use crate::features::resources::registry::CellTemplate;
use crate::features::table::state::{CellValue, SortDirection, TableColumn, TableRow, TableState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TableViewProps {
    pub table: TableState,
    pub caption: AttrValue,
    #[prop_or_default]
    pub on_sort: Callback<String>,
    #[prop_or_default]
    pub on_select_row: Callback<(String, bool)>,
    #[prop_or_default]
    pub on_select_all: Callback<bool>,
    #[prop_or_default]
    pub on_toggle_column: Callback<(String, bool)>,
}

#[function_component(TableView)]
pub(crate) fn table_view(props: &TableViewProps) -> Html {
    let edit_open = use_state(|| false);
    let table = &props.table;
    let active_columns: Vec<TableColumn> = table
        .columns
        .iter()
        .filter(|column| !column.deactivated)
        .cloned()
        .collect();
    let selected_count = table.rows.iter().filter(|row| row.selected).count();
    let all_selected = !table.rows.is_empty() && selected_count == table.rows.len();

    let toggle_edit = {
        let edit_open = edit_open.clone();
        Callback::from(move |_: MouseEvent| edit_open.set(!*edit_open))
    };
    let on_select_all = {
        let on_select_all = props.on_select_all.clone();
        Callback::from(move |_: Event| on_select_all.emit(!all_selected))
    };

    // Width of the placeholder row shown on empty result sets.
    let span = (active_columns.len() + usize::from(table.multi_select)).max(1);

    html! {
        <div class="table-container">
            <div class="table-header">
                <h1 class="table-caption">
                    { props.caption.clone() }
                    if table.loading {
                        <span class="loading-indicator">{"…"}</span>
                    }
                </h1>
                <button class="ghost" onclick={toggle_edit}>{"Edit table view"}</button>
            </div>
            if *edit_open {
                <div class="column-editor">
                    { for table.columns.iter().map(|column| render_column_toggle(column, &props.on_toggle_column)) }
                </div>
            }
            if table.show_actions {
                <div class="bulk-actions">
                    <span class="muted">{ format!("{selected_count} selected") }</span>
                </div>
            }
            <table class="resource-table">
                <thead>
                    <tr>
                        if table.multi_select {
                            <th class="select-column">
                                <input
                                    type="checkbox"
                                    checked={all_selected}
                                    onchange={on_select_all}
                                />
                            </th>
                        }
                        { for active_columns.iter().map(|column| render_header(table, column, &props.on_sort)) }
                    </tr>
                </thead>
                <tbody>
                    if table.rows.is_empty() && !table.loading {
                        <tr>
                            <td class="empty" colspan={span.to_string()}>{"No results found"}</td>
                        </tr>
                    }
                    { for table.rows.iter().map(|row| render_row(row, &active_columns, table.multi_select, &props.on_select_row)) }
                </tbody>
            </table>
        </div>
    }
}

fn render_column_toggle(column: &TableColumn, on_toggle: &Callback<(String, bool)>) -> Html {
    let name = column.name.to_string();
    let deactivated = column.deactivated;
    let on_toggle = on_toggle.clone();
    let onchange = Callback::from(move |_: Event| on_toggle.emit((name.clone(), deactivated)));
    html! {
        <label class="column-toggle">
            <input type="checkbox" checked={!deactivated} {onchange} />
            { column.label }
        </label>
    }
}

fn render_header(table: &TableState, column: &TableColumn, on_sort: &Callback<String>) -> Html {
    let indicator = if table.sort_by.as_deref() == Some(column.name) {
        match table.sort_direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        ""
    };
    if column.sortable {
        let name = column.name.to_string();
        let on_sort = on_sort.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_sort.emit(name.clone()));
        html! {
            <th class="sortable" {onclick}>{ column.label }{ indicator }</th>
        }
    } else {
        html! { <th>{ column.label }</th> }
    }
}

fn render_row(
    row: &TableRow,
    columns: &[TableColumn],
    multi_select: bool,
    on_select_row: &Callback<(String, bool)>,
) -> Html {
    let select_cell = if multi_select {
        let id = row.id.clone();
        let selected = row.selected;
        let on_select_row = on_select_row.clone();
        let onchange = Callback::from(move |_: Event| on_select_row.emit((id.clone(), !selected)));
        html! {
            <td class="select-column">
                <input type="checkbox" checked={row.selected} {onchange} />
            </td>
        }
    } else {
        html! {}
    };
    html! {
        <tr class={classes!(row.selected.then_some("selected"))}>
            { select_cell }
            { for columns.iter().map(|column| render_cell(row, column)) }
        </tr>
    }
}

fn render_cell(row: &TableRow, column: &TableColumn) -> Html {
    let value = row.cell(column.name).cloned().unwrap_or_default();
    match (column.template, value) {
        (CellTemplate::Toggle, CellValue::Flag(flag)) => html! {
            <td class={classes!("flag", flag.then_some("on"))}>{ if flag { "✓" } else { "✗" } }</td>
        },
        (CellTemplate::Status, CellValue::Text(text)) => html! {
            <td><span class={classes!("status", text.to_lowercase())}>{ text.clone() }</span></td>
        },
        (CellTemplate::Date, CellValue::Instant(instant)) => html! {
            <td>{ instant.format("%Y-%m-%d").to_string() }</td>
        },
        (CellTemplate::DateTime, CellValue::Instant(instant)) => html! {
            <td>{ instant.format("%Y-%m-%d %H:%M").to_string() }</td>
        },
        (CellTemplate::List, CellValue::List(values)) => html! {
            <td>{ values.join(", ") }</td>
        },
        (_, CellValue::Text(text)) => html! { <td>{ text }</td> },
        _ => html! { <td class="muted">{"–"}</td> },
    }
}
