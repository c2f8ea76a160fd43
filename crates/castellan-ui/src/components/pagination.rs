//! Pagination control: direct-accessible pages and the page-size picker.

use crate::features::table::pagination::{
    PAGE_SIZES, PaginationState, direct_accessible, page_count,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PageControlProps {
    pub pagination: PaginationState,
    #[prop_or_default]
    pub on_page: Callback<usize>,
    #[prop_or_default]
    pub on_limit: Callback<usize>,
}

#[function_component(PageControl)]
pub(crate) fn page_control(props: &PageControlProps) -> Html {
    let pagination = &props.pagination;
    let count = page_count(pagination.total_items, pagination.limit);
    let current = pagination.offset;

    let size_picker = {
        let on_limit = props.on_limit.clone();
        let onchange = Callback::from(move |event: Event| {
            let value = event.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(limit) = value.parse::<usize>() {
                on_limit.emit(limit);
            }
        });
        html! {
            <select class="page-size" {onchange}>
                { for PAGE_SIZES.iter().map(|size| html! {
                    <option value={size.to_string()} selected={*size == pagination.limit}>
                        { size.to_string() }
                    </option>
                }) }
            </select>
        }
    };

    if pagination.total_items == 0 {
        return html! {
            <div class="pagination">
                <span class="muted">{"No results"}</span>
                { size_picker }
            </div>
        };
    }

    let go_prev = {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| {
            if current > 0 {
                on_page.emit(current - 1);
            }
        })
    };
    let go_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| {
            if current + 1 < count {
                on_page.emit(current + 1);
            }
        })
    };

    html! {
        <div class="pagination">
            <button class="page" disabled={current == 0} onclick={go_prev}>{"«"}</button>
            { for direct_accessible(pagination).iter().map(|page| {
                let on_page = props.on_page.clone();
                let number = page.number;
                let onclick = Callback::from(move |_: MouseEvent| on_page.emit(number));
                html! {
                    <button
                        class={classes!("page", page.active.then_some("active"), page.is_ellipsis().then_some("ellipsis"))}
                        {onclick}
                    >
                        { page.label.clone() }
                    </button>
                }
            }) }
            <button class="page" disabled={current + 1 >= count} onclick={go_next}>{"»"}</button>
            { size_picker }
        </div>
    }
}
