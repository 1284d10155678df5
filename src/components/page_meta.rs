use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageMetaProps {
    pub title: AttrValue,
    pub description: AttrValue,
}

/// Writes the document title and meta description for the active route.
/// Renders nothing itself.
#[function_component(PageMeta)]
pub fn page_meta(props: &PageMetaProps) -> Html {
    use_effect_with(
        (props.title.clone(), props.description.clone()),
        |(title, description)| {
            apply_meta(title, description);
            || ()
        },
    );

    html! {}
}

fn apply_meta(title: &str, description: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    document.set_title(title);

    if let Ok(Some(meta)) = document.query_selector("meta[name='description']") {
        let _ = meta.set_attribute("content", description);
    }
}
