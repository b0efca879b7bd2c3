use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!("feature-card", "reveal", revealed.then(|| "animate-in"))}>
            <div class="feature-icon">{props.icon}</div>
            <h3>{props.title}</h3>
            <p>{props.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CommunityCardProps {
    pub community: Theme,
    pub description: &'static str,
    /// Theme of the page the card is shown on.
    pub current: Theme,
}

/// Link card to one of the community pages. Lifts on hover unless it points
/// at the page being viewed.
#[function_component(CommunityCard)]
pub fn community_card(props: &CommunityCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let hovered = use_state(|| false);
    let is_current = props.community == props.current;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let lift = if *hovered && !is_current {
        "translateY(-8px) scale(1.02)"
    } else {
        "translateY(0) scale(1)"
    };
    // The reveal transform only applies until the card has animated in.
    let style = revealed.then(|| format!("transform: {};", lift));

    html! {
        <a
            ref={node}
            href={props.community.page_href()}
            class={classes!(
                "community-card",
                "reveal",
                is_current.then(|| "current"),
                revealed.then(|| "animate-in")
            )}
            {style}
            {onmouseenter}
            {onmouseleave}
        >
            <h3>{props.community.to_string()}</h3>
            <p>{props.description}</p>
            {
                if is_current {
                    html! { <span class="community-badge">{"You are here"}</span> }
                } else {
                    html! {}
                }
            }
        </a>
    }
}
