use yew::prelude::*;

/// Spinner shown while a fetch is in flight.
#[function_component(CircularProgress)]
pub fn circular_progress() -> Html {
    html! {
        <div class="progress" role="status" aria-label="Carregando">
            <div class="progress-spinner" />
        </div>
    }
}
