//! App shell: routing, view activation and orchestration callbacks.
//!
//! A resource view activates when its route renders: the shell loads
//! the filter definitions and the first page, then keeps the view fresh
//! on the kind's refresh cadence. The interval handle lives in the
//! effect and is dropped on cleanup, so a torn-down view can never be
//! refreshed.

use crate::app::preferences::{
    api_base_url, load_profiles, persist_deactivated_columns, persist_profiles,
};
use crate::components::filters::FilterBar;
use crate::components::pagination::PageControl;
use crate::components::table::TableView;
use crate::core::store::AppStore;
use crate::features::filters::profiles::{apply_profile, profiles_for, remove_profile, save_profile, snapshot};
use crate::features::filters::state::{
    clear_selection, clear_text, clear_value, period_bounds, reset_values, select_filter,
    select_option, select_period, set_text,
};
use crate::features::resources::ResourceKind;
use crate::features::resources::registry::descriptor;
use crate::features::table::pagination::go_to;
use crate::features::table::state::{set_active_column, set_deactivated_column};
use crate::services::api::ApiClient;
use chrono::NaiveDate;
use gloo_timers::callback::Interval;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod preferences;
mod routes;
mod thunks;

use routes::Route;

/// Mount the application onto the document body.
pub fn run_app() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    yew::Renderer::<CastellanApp>::new().render();
}

#[function_component(CastellanApp)]
fn castellan_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let saved = load_profiles();
                if !saved.is_empty() {
                    dispatch.reduce_mut(|store| store.profiles.profiles = saved);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <BrowserRouter>
            <MainNav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    route.kind().map_or_else(
        || html! { <main class="not-found"><h1>{"Not found"}</h1></main> },
        |kind| html! { <ResourceView {kind} /> },
    )
}

#[function_component(MainNav)]
fn main_nav() -> Html {
    html! {
        <header class="app-header">
            <span class="brand">{"Castellan"}</span>
            <nav class="main-nav">
                { for ResourceKind::ALL.iter().map(|kind| html! {
                    <Link<Route> to={Route::for_kind(*kind)} classes="nav-link">
                        { descriptor(*kind).caption }
                    </Link<Route>>
                }) }
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct ResourceViewProps {
    pub kind: ResourceKind,
}

#[function_component(ResourceView)]
fn resource_view(props: &ResourceViewProps) -> Html {
    let kind = props.kind;
    let dispatch = Dispatch::<AppStore>::new();
    let client = use_memo(|_| ApiClient::new(api_base_url()), ());

    let table = use_selector(|store: &AppStore| store.table.clone());
    let filters = use_selector(|store: &AppStore| store.filters.clone());
    let pagination = use_selector(|store: &AppStore| store.pagination.clone());
    let profiles = use_selector(move |store: &AppStore| profiles_for(&store.profiles, kind));

    // View activation: first page + filter definitions, then periodic
    // refresh until the view goes away.
    {
        let dispatch = dispatch.clone();
        let client = (*client).clone();
        use_effect_with_deps(
            move |kind| {
                let kind = *kind;
                dispatch.reduce_mut(|store| go_to(&mut store.pagination, 0));
                thunks::load_filters(&dispatch, &client, kind);
                thunks::load_resource(&dispatch, &client, kind);
                let interval = {
                    let dispatch = dispatch.clone();
                    let client = client.clone();
                    Interval::new(kind.refresh_interval_ms(), move || {
                        thunks::load_resource(&dispatch, &client, kind);
                    })
                };
                move || drop(interval)
            },
            kind,
        );
    }

    let on_sort = {
        let dispatch = dispatch.clone();
        let client = (*client).clone();
        Callback::from(move |column: String| thunks::sort_table(&dispatch, &client, &column))
    };
    let on_page = {
        let dispatch = dispatch.clone();
        let client = (*client).clone();
        Callback::from(move |number: usize| thunks::go_to_page(&dispatch, &client, number))
    };
    let on_limit = {
        let dispatch = dispatch.clone();
        let client = (*client).clone();
        Callback::from(move |limit: usize| thunks::change_page_size(&dispatch, &client, limit))
    };
    let on_select_row = {
        let dispatch = dispatch.clone();
        Callback::from(move |(id, selected): (String, bool)| {
            thunks::change_row_selection(&dispatch, &id, selected);
        })
    };
    let on_select_all = {
        let dispatch = dispatch.clone();
        Callback::from(move |selected: bool| thunks::change_all_selected(&dispatch, selected))
    };
    let on_toggle_column = {
        let dispatch = dispatch.clone();
        Callback::from(move |(name, activate): (String, bool)| {
            dispatch.reduce_mut(|store| {
                if activate {
                    set_active_column(&mut store.table, &name);
                } else {
                    set_deactivated_column(&mut store.table, &name);
                }
                persist_deactivated_columns(kind, &store.table.columns);
            });
        })
    };

    let on_text = {
        let dispatch = dispatch.clone();
        let client = (*client).clone();
        Callback::from(move |text: String| {
            dispatch.reduce_mut(|store| set_text(&mut store.filters, text.clone()));
            thunks::go_to_page(&dispatch, &client, 0);
        })
    };
    let on_pick_filter = {
        let dispatch = dispatch.clone();
        Callback::from(move |name: String| {
            dispatch.reduce_mut(|store| select_filter(&mut store.filters, &name));
        })
    };
    let on_clear_selection = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| clear_selection(&mut store.filters));
        })
    };
    let on_pick_option = {
        let dispatch = dispatch.clone();
        let client = (*client).clone();
        Callback::from(move |value: String| {
            dispatch.reduce_mut(|store| select_option(&mut store.filters, value.clone()));
            thunks::go_to_page(&dispatch, &client, 0);
        })
    };
    let on_pick_period = {
        let dispatch = dispatch.clone();
        let client = (*client).clone();
        Callback::from(move |(start, end): (NaiveDate, NaiveDate)| {
            dispatch.reduce_mut(|store| {
                let (start, end) = period_bounds(start, end);
                select_period(&mut store.filters, &start, &end);
            });
            thunks::go_to_page(&dispatch, &client, 0);
        })
    };
    let on_clear_filter = {
        let dispatch = dispatch.clone();
        let client = (*client).clone();
        Callback::from(move |name: String| {
            dispatch.reduce_mut(|store| clear_value(&mut store.filters, &name));
            thunks::go_to_page(&dispatch, &client, 0);
        })
    };
    let on_clear_all = {
        let dispatch = dispatch.clone();
        let client = (*client).clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| {
                reset_values(&mut store.filters);
                clear_text(&mut store.filters);
            });
            thunks::go_to_page(&dispatch, &client, 0);
        })
    };

    let on_save_profile = {
        let dispatch = dispatch.clone();
        Callback::from(move |(name, description): (String, String)| {
            dispatch.reduce_mut(|store| {
                if let Some(profile) = snapshot(&store.filters, name.clone(), description.clone())
                {
                    save_profile(&mut store.profiles, profile);
                    persist_profiles(&store.profiles.profiles);
                }
            });
        })
    };
    let on_apply_profile = {
        let dispatch = dispatch.clone();
        let client = (*client).clone();
        Callback::from(move |id: Uuid| {
            dispatch.reduce_mut(|store| {
                let profile = store
                    .profiles
                    .profiles
                    .iter()
                    .find(|profile| profile.id == id)
                    .cloned();
                if let Some(profile) = profile {
                    apply_profile(&mut store.filters, &profile);
                }
            });
            thunks::go_to_page(&dispatch, &client, 0);
        })
    };
    let on_remove_profile = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: Uuid| {
            dispatch.reduce_mut(|store| {
                remove_profile(&mut store.profiles, id);
                persist_profiles(&store.profiles.profiles);
            });
        })
    };

    html! {
        <main class="resource-view">
            <FilterBar
                filters={(*filters).clone()}
                profiles={(*profiles).clone()}
                {on_text}
                {on_pick_filter}
                {on_clear_selection}
                {on_pick_option}
                {on_pick_period}
                {on_clear_filter}
                {on_clear_all}
                {on_save_profile}
                {on_apply_profile}
                {on_remove_profile}
            />
            <TableView
                table={(*table).clone()}
                caption={descriptor(kind).caption}
                {on_sort}
                {on_select_row}
                {on_select_all}
                {on_toggle_column}
            />
            <PageControl
                pagination={(*pagination).clone()}
                {on_page}
                {on_limit}
            />
        </main>
    }
}
