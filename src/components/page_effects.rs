use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{ACTIVE_SECTION_LEAD_PX, NAV_OFFSET_PX};

/// Window scroll position that puts `offset_top` just below the fixed nav.
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - NAV_OFFSET_PX
}

/// Id of the last section whose top has come within the lead distance.
/// `sections` is in document order as (id, offset top).
pub fn active_section(scroll_y: f64, sections: &[(String, f64)]) -> Option<String> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - ACTIVE_SECTION_LEAD_PX)
        .last()
        .map(|(id, _)| id.clone())
}

/// Whether the nav link pointing at `target` should carry the `active` class.
pub fn is_active_link(active: Option<&str>, target: &str) -> bool {
    active == Some(target)
}

/// Smooth scrolls to the element with `id`. Unknown ids are ignored.
pub fn scroll_to_anchor(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let target = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    if let Some(target) = target {
        let options = ScrollToOptions::new();
        options.set_top(anchor_scroll_top(target.offset_top() as f64));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// Id of the target element, without the leading `#`.
    pub target: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&target);
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

fn section_offsets() -> Vec<(String, f64)> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| (section.id(), section.offset_top() as f64))
        .collect()
}

/// Tracks which `section[id]` the reader is currently in.
#[hook]
pub fn use_active_section() -> Option<String> {
    let active = use_state(|| None::<String>);

    {
        let active = active.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            let current = active_section(scroll_y, &section_offsets());
            if *active != current {
                active.set(current);
            }
        });
    }

    (*active).clone()
}

fn mark_body_loaded() {
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        let _ = body.class_list().add_1("loaded");
    }
}

/// Adds `loaded` to `<body>` once the window has finished loading.
#[hook]
pub fn use_body_loaded_class() {
    use_mount(|| {
        let complete = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| document.ready_state() == "complete")
            .unwrap_or(false);
        if complete {
            mark_body_loaded();
        }
    });

    use_event_with_window("load", |_: Event| mark_body_loaded());
}
