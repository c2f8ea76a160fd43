//! Table filter bar: text search, two-stage filter pickers, applied
//! chips and the filter-profile menu.

use crate::features::filters::profiles::FilterProfile;
use crate::features::filters::state::{FilterKind, FilterSelection, FilterSpec, FiltersState};
use chrono::NaiveDate;
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FilterBarProps {
    pub filters: FiltersState,
    pub profiles: Vec<FilterProfile>,
    #[prop_or_default]
    pub on_text: Callback<String>,
    #[prop_or_default]
    pub on_pick_filter: Callback<String>,
    #[prop_or_default]
    pub on_clear_selection: Callback<()>,
    #[prop_or_default]
    pub on_pick_option: Callback<String>,
    #[prop_or_default]
    pub on_pick_period: Callback<(NaiveDate, NaiveDate)>,
    #[prop_or_default]
    pub on_clear_filter: Callback<String>,
    #[prop_or_default]
    pub on_clear_all: Callback<()>,
    #[prop_or_default]
    pub on_save_profile: Callback<(String, String)>,
    #[prop_or_default]
    pub on_apply_profile: Callback<Uuid>,
    #[prop_or_default]
    pub on_remove_profile: Callback<Uuid>,
}

#[function_component(FilterBar)]
pub(crate) fn filter_bar(props: &FilterBarProps) -> Html {
    let show_selector = use_state(|| false);
    let show_profiles = use_state(|| false);
    let filters = &props.filters;

    let oninput = {
        let on_text = props.on_text.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            on_text.emit(value);
        })
    };
    let toggle_selector = {
        let show_selector = show_selector.clone();
        let on_clear_selection = props.on_clear_selection.clone();
        Callback::from(move |_: MouseEvent| {
            if *show_selector {
                // Closing the picker abandons a half-made selection.
                on_clear_selection.emit(());
            }
            show_selector.set(!*show_selector);
        })
    };
    let toggle_profiles = {
        let show_profiles = show_profiles.clone();
        Callback::from(move |_: MouseEvent| show_profiles.set(!*show_profiles))
    };
    let clear_all = {
        let on_clear_all = props.on_clear_all.clone();
        Callback::from(move |_: MouseEvent| on_clear_all.emit(()))
    };

    html! {
        <div class="filters-container">
            <input
                type="text"
                class="search"
                placeholder="Search"
                value={filters.text.clone()}
                {oninput}
            />
            <div class="table-filter">
                <button class="ghost" title="Add filter" onclick={toggle_selector}>{"Filter"}</button>
                if *show_selector {
                    { render_filter_picker(filters, &props.on_pick_filter) }
                }
                { render_value_picker(filters, &props.on_pick_option, &props.on_pick_period) }
                { for filters.filters.iter().filter(|filter| !filter.value.is_empty()).map(|filter| {
                    render_chip(filter, &props.on_clear_filter)
                }) }
                <button class="ghost" title="Clear filters" onclick={clear_all}>{"×"}</button>
                <button class="ghost" title="Filter profiles" onclick={toggle_profiles}>{"Profiles"}</button>
                if *show_profiles {
                    <ProfilePanel
                        profiles={props.profiles.clone()}
                        on_save={props.on_save_profile.clone()}
                        on_apply={props.on_apply_profile.clone()}
                        on_remove={props.on_remove_profile.clone()}
                    />
                }
            </div>
        </div>
    }
}

fn render_filter_picker(filters: &FiltersState, on_pick: &Callback<String>) -> Html {
    let picked = match &filters.selection {
        FilterSelection::Picked { name } | FilterSelection::Ready { name, .. } => name.clone(),
        FilterSelection::Idle => String::new(),
    };
    let on_pick = on_pick.clone();
    let onchange = Callback::from(move |event: Event| {
        let value = event.target_unchecked_into::<HtmlSelectElement>().value();
        if !value.is_empty() {
            on_pick.emit(value);
        }
    });
    html! {
        <select class="main-filter" {onchange}>
            <option value="" disabled=true selected={picked.is_empty()}>{"Select filter"}</option>
            { for filters.filters.iter().map(|filter| html! {
                <option value={filter.name.clone()} selected={filter.name == picked}>
                    { filter.label.clone() }
                </option>
            }) }
        </select>
    }
}

fn render_value_picker(
    filters: &FiltersState,
    on_pick_option: &Callback<String>,
    on_pick_period: &Callback<(NaiveDate, NaiveDate)>,
) -> Html {
    let FilterSelection::Picked { name } = &filters.selection else {
        return html! {};
    };
    let Some(spec) = filters.filters.iter().find(|filter| &filter.name == name) else {
        return html! {};
    };
    match spec.kind {
        FilterKind::Select => {
            let on_pick = on_pick_option.clone();
            let onchange = Callback::from(move |event: Event| {
                let value = event.target_unchecked_into::<HtmlSelectElement>().value();
                if !value.is_empty() {
                    on_pick.emit(value);
                }
            });
            html! {
                <select class="second-filter" {onchange}>
                    <option value="" disabled=true selected=true>{"Select value"}</option>
                    { for spec.options.iter().map(|option| html! {
                        <option value={option.value.clone()}>{ option.label.clone() }</option>
                    }) }
                </select>
            }
        }
        FilterKind::Period => html! { <PeriodPicker on_pick={on_pick_period.clone()} /> },
    }
}

fn render_chip(filter: &FilterSpec, on_clear: &Callback<String>) -> Html {
    let name = filter.name.clone();
    let on_clear = on_clear.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_clear.emit(name.clone()));
    html! {
        <span class="filter-chip">
            <span>{ format!("{}: {}", filter.label, chip_value(filter)) }</span>
            <button class="ghost" title="Remove filter" {onclick}>{"×"}</button>
        </span>
    }
}

/// Shorten period values to their date halves for chip display.
fn chip_value(filter: &FilterSpec) -> String {
    if filter.kind == FilterKind::Period {
        let mut dates = filter.value.split('/').map(|part| part.get(..10).unwrap_or(part));
        if let (Some(start), Some(end)) = (dates.next(), dates.next()) {
            return format!("{start} – {end}");
        }
    }
    filter.value.clone()
}

#[derive(Properties, PartialEq)]
struct PeriodPickerProps {
    on_pick: Callback<(NaiveDate, NaiveDate)>,
}

#[function_component(PeriodPicker)]
fn period_picker(props: &PeriodPickerProps) -> Html {
    let start = use_state(String::new);
    let end = use_state(String::new);

    let on_start = {
        let start = start.clone();
        Callback::from(move |event: InputEvent| {
            start.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_end = {
        let end = end.clone();
        Callback::from(move |event: InputEvent| {
            end.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let apply = {
        let start = start.clone();
        let end = end.clone();
        let on_pick = props.on_pick.clone();
        Callback::from(move |_: MouseEvent| {
            let parsed = (
                NaiveDate::parse_from_str(&start, "%Y-%m-%d"),
                NaiveDate::parse_from_str(&end, "%Y-%m-%d"),
            );
            if let (Ok(start), Ok(end)) = parsed {
                on_pick.emit((start, end));
            }
        })
    };

    html! {
        <span class="period-picker">
            <input type="date" class="start-date" value={(*start).clone()} oninput={on_start} />
            <input type="date" class="end-date" value={(*end).clone()} oninput={on_end} />
            <button class="ghost" onclick={apply}>{"Apply"}</button>
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct ProfilePanelProps {
    profiles: Vec<FilterProfile>,
    on_save: Callback<(String, String)>,
    on_apply: Callback<Uuid>,
    on_remove: Callback<Uuid>,
}

#[function_component(ProfilePanel)]
fn profile_panel(props: &ProfilePanelProps) -> Html {
    let name = use_state(String::new);
    let description = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            name.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            description.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let save = {
        let name = name.clone();
        let description = description.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            if name.trim().is_empty() {
                return;
            }
            on_save.emit(((*name).clone(), (*description).clone()));
            name.set(String::new());
            description.set(String::new());
        })
    };

    html! {
        <div class="filter-profiles">
            <ul class="profile-list">
                if props.profiles.is_empty() {
                    <li class="muted">{"No profiles saved yet"}</li>
                }
                { for props.profiles.iter().map(|profile| {
                    let apply = {
                        let on_apply = props.on_apply.clone();
                        let id = profile.id;
                        Callback::from(move |_: MouseEvent| on_apply.emit(id))
                    };
                    let remove = {
                        let on_remove = props.on_remove.clone();
                        let id = profile.id;
                        Callback::from(move |_: MouseEvent| on_remove.emit(id))
                    };
                    html! {
                        <li>
                            <a title={profile.description.clone()} onclick={apply}>
                                { profile.name.clone() }
                            </a>
                            <button class="ghost" title="Remove profile" onclick={remove}>{"×"}</button>
                        </li>
                    }
                }) }
            </ul>
            <div class="profile-form">
                <input
                    type="text"
                    placeholder="Profile name"
                    value={(*name).clone()}
                    oninput={on_name}
                />
                <input
                    type="text"
                    placeholder="Description"
                    value={(*description).clone()}
                    oninput={on_description}
                />
                <button class="save" onclick={save}>{"Save filters"}</button>
            </div>
        </div>
    }
}
