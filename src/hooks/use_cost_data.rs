use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth::use_auth;
use crate::models::cost::CostPage;
use crate::models::query::{DateRangeQuery, PageCursor};
use crate::services::api::{CostFrequency, fetch_marginal_costs};

/// One issued request: the filter, the cursor, and an attempt counter so that
/// resubmitting identical values still refetches.
#[derive(Clone, PartialEq, Debug)]
struct ActiveQuery {
    range: DateRangeQuery,
    cursor: PageCursor,
    attempt: u32,
}

/// State and controls returned by [`use_cost_data`].
#[derive(Clone, PartialEq)]
pub struct CostDataHandle {
    /// Last successfully fetched page; survives later failed fetches.
    pub data: Option<Rc<CostPage>>,
    pub loading: bool,
    /// True once at least one fetch attempt has settled.
    pub attempted: bool,
    /// Cursor behind the displayed page.
    pub cursor: PageCursor,
    /// Issues a fetch for a new filter, restarting from the first page.
    pub submit: Callback<DateRangeQuery>,
    /// Issues a fetch for another page of the current filter.
    pub paginate: Callback<PageCursor>,
}

/// Fetch state for the marginal-cost series at one cadence. The costs page
/// mounts this hook twice, once per [`CostFrequency`], each with its own
/// pagination.
#[hook]
pub fn use_cost_data(frequency: CostFrequency) -> CostDataHandle {
    let auth = use_auth();
    let query = use_state(|| None::<ActiveQuery>);
    let data = use_state(|| None::<Rc<CostPage>>);
    let loading = use_state(|| false);
    let attempted = use_state(|| false);
    let issue = use_mut_ref(|| 0u64); // Monotonic request number

    {
        let data = data.clone();
        let loading = loading.clone();
        let attempted = attempted.clone();
        let issue = issue.clone();
        let token = auth.access_token();

        use_effect_with(((*query).clone(), frequency), move |(active, frequency)| {
            if let Some(active) = active.clone() {
                start_fetch(active, *frequency, token, data, loading, attempted, issue);
            }
            || ()
        });
    }

    let submit = {
        let query = query.clone();
        Callback::from(move |range: DateRangeQuery| {
            // A new filter always restarts from the first page
            let cursor = PageCursor::first(range.limite);
            query.set(Some(ActiveQuery {
                range,
                cursor,
                attempt: next_attempt(&query),
            }));
        })
    };

    let paginate = {
        let query = query.clone();
        Callback::from(move |cursor: PageCursor| {
            if let Some(active) = (*query).clone() {
                query.set(Some(ActiveQuery {
                    cursor,
                    attempt: next_attempt(&query),
                    ..active
                }));
            }
        })
    };

    CostDataHandle {
        data: (*data).clone(),
        loading: *loading,
        attempted: *attempted,
        cursor: (*query).as_ref().map_or(PageCursor::first(0), |a| a.cursor),
        submit,
        paginate,
    }
}

fn next_attempt(query: &UseStateHandle<Option<ActiveQuery>>) -> u32 {
    (*query).as_ref().map_or(1, |a| a.attempt + 1)
}

/// Issues one authenticated fetch for `active`, dropping the settlement if a
/// newer request was issued meanwhile.
fn start_fetch(
    active: ActiveQuery,
    frequency: CostFrequency,
    token: Option<String>,
    data: UseStateHandle<Option<Rc<CostPage>>>,
    loading: UseStateHandle<bool>,
    attempted: UseStateHandle<bool>,
    issue: Rc<RefCell<u64>>,
) {
    *issue.borrow_mut() += 1;
    let this_issue = *issue.borrow();

    let Some(token) = token else {
        web_sys::console::warn_1(&"No session token for marginal-cost fetch".into());
        attempted.set(true);
        return;
    };

    loading.set(true);

    spawn_local(async move {
        let result = fetch_marginal_costs(&token, &active.range, active.cursor, frequency).await;

        if *issue.borrow() != this_issue {
            return; // A newer request owns the display now
        }

        match result {
            Ok(page) => data.set(Some(Rc::new(page))),
            // Failures keep the previous payload on screen
            Err(e) => {
                web_sys::console::error_1(&format!("Marginal-cost fetch failed: {e}").into());
            }
        }

        attempted.set(true);
        loading.set(false);
    });
}
