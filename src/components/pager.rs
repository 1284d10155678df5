use yew::prelude::*;

use crate::models::query::PageCursor;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub cursor: PageCursor,
    /// Total records reported for the active filter.
    pub total: u32,
    pub on_navigate: Callback<PageCursor>,
}

/// Previous / current page / next controls for one result set. Both
/// directions are guarded the same way: retreat floors at the first page,
/// advance stops once the window reaches the reported total.
#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let cursor = props.cursor;
    let total = props.total;

    let on_previous = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(cursor.retreat()))
    };

    let on_next = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(cursor.advance(total)))
    };

    html! {
        <nav class="pager" aria-label="Paginação">
            <button
                class="pager-button"
                onclick={on_previous}
                disabled={!cursor.has_previous()}
            >
                {"‹ Anterior"}
            </button>
            <span class="pager-page">{cursor.page_number()}</span>
            <button
                class="pager-button"
                onclick={on_next}
                disabled={!cursor.has_next(total)}
            >
                {"Próxima ›"}
            </button>
        </nav>
    }
}
