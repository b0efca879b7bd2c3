use log::debug;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Smoothly scrolls the element with `id` to the top of the viewport.
/// Missing targets are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No section with id '{}' to scroll to", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// Id of the section to scroll to, without the leading `#`.
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        let after = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(&target);
            after.emit(());
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
