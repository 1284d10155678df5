use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::query::DateRangeQuery;

const DATE_FMT: &str = "%Y-%m-%d";

#[derive(Properties, PartialEq)]
pub struct QueryFormProps {
    /// Values the fields start out with.
    pub initial: DateRangeQuery,
    /// Invoked with validated values on submit.
    pub on_submit: Callback<DateRangeQuery>,
}

#[derive(Default, Clone, PartialEq, Debug)]
struct FieldErrors {
    data_inicial: Option<&'static str>,
    data_final: Option<&'static str>,
    limite: Option<&'static str>,
}

/// Date-range filter form. Validation happens here, before anything reaches
/// the fetch hooks: both dates must parse and the limit must be at least
/// [`Config::MIN_LIMIT`]. Failures surface inline under the offending field
/// and block submission.
#[function_component(QueryForm)]
pub fn query_form(props: &QueryFormProps) -> Html {
    let start = use_state(|| props.initial.data_inicial.format(DATE_FMT).to_string());
    let end = use_state(|| props.initial.data_final.format(DATE_FMT).to_string());
    let limit = use_state(|| props.initial.limite.to_string());
    let errors = use_state(FieldErrors::default);

    let onsubmit = {
        let start = start.clone();
        let end = end.clone();
        let limit = limit.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let (query, found) = validate(&start, &end, &limit);
            errors.set(found);
            if let Some(query) = query {
                on_submit.emit(query);
            }
        })
    };

    html! {
        <form class="query-form" {onsubmit}>
            <div class="form-field">
                <label for="data-inicial">{"Data Inicial"}</label>
                <input
                    id="data-inicial"
                    type="date"
                    value={(*start).clone()}
                    oninput={bind_input(&start)}
                />
                if let Some(message) = errors.data_inicial {
                    <span class="field-error">{message}</span>
                }
            </div>

            <div class="form-field">
                <label for="data-final">{"Data Final"}</label>
                <input
                    id="data-final"
                    type="date"
                    value={(*end).clone()}
                    oninput={bind_input(&end)}
                />
                if let Some(message) = errors.data_final {
                    <span class="field-error">{message}</span>
                }
            </div>

            <div class="form-field">
                <label for="limite">{"Máximo de resultados"}</label>
                <input
                    id="limite"
                    type="number"
                    value={(*limit).clone()}
                    oninput={bind_input(&limit)}
                />
                if let Some(message) = errors.limite {
                    <span class="field-error">{message}</span>
                }
            </div>

            <button type="submit" class="submit-button">{"Buscar"}</button>
        </form>
    }
}

/// Mirrors an input's value into the given state.
fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

fn validate(start: &str, end: &str, limit: &str) -> (Option<DateRangeQuery>, FieldErrors) {
    let data_inicial = NaiveDate::parse_from_str(start, DATE_FMT).ok();
    let data_final = NaiveDate::parse_from_str(end, DATE_FMT).ok();
    let limite = limit
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|l| *l >= Config::MIN_LIMIT);

    let errors = FieldErrors {
        data_inicial: data_inicial.is_none().then_some("Informe uma data válida"),
        data_final: data_final.is_none().then_some("Informe uma data válida"),
        limite: limite.is_none().then_some("Informe ao menos 100 registros"),
    };

    match (data_inicial, data_final, limite) {
        (Some(data_inicial), Some(data_final), Some(limite)) => (
            Some(DateRangeQuery {
                data_inicial,
                data_final,
                limite,
            }),
            errors,
        ),
        _ => (None, errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_good_values() {
        let (query, errors) = validate("2024-01-01", "2024-03-08", "1000");

        let query = query.unwrap();
        assert_eq!(query.limite, 1000);
        assert_eq!(
            query.data_inicial,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(errors, FieldErrors::default());
    }

    #[test]
    fn test_validate_rejects_small_limit() {
        let (query, errors) = validate("2024-01-01", "2024-03-08", "99");

        assert!(query.is_none());
        assert!(errors.limite.is_some());
        assert!(errors.data_inicial.is_none());
    }

    #[test]
    fn test_validate_accepts_limit_at_minimum() {
        let (query, _) = validate("2024-01-01", "2024-03-08", "100");
        assert_eq!(query.unwrap().limite, 100);
    }

    #[test]
    fn test_validate_rejects_bad_dates() {
        let (query, errors) = validate("01/01/2024", "", "500");

        assert!(query.is_none());
        assert!(errors.data_inicial.is_some());
        assert!(errors.data_final.is_some());
        assert!(errors.limite.is_none());
    }
}
