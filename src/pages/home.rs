use log::info;
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::cards::FeatureCard;
use crate::components::faq::FaqEntry;
use crate::pages::common::{PageProps, SharedSections};

fn faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "What is ReSwap?",
            answer: "ReSwap is a group of swap communities where members trade things they no longer use for things they need, without money changing hands.",
        },
        FaqEntry {
            question: "Does it cost anything?",
            answer: "No. Joining a community and listing items is free.",
        },
        FaqEntry {
            question: "Which community should I join?",
            answer: "FitShare is for sports and fitness gear. NeedShare is for everyday essentials. You can be a member of both.",
        },
        FaqEntry {
            question: "How do swaps happen?",
            answer: "Members arrange a meetup or a drop-off between themselves once both sides agree on a swap.",
        },
    ]
}

#[function_component(HomePage)]
pub fn home_page(props: &PageProps) -> Html {
    info!("Rendering {} page", props.theme);

    html! {
        <main class="home-page">
            <section class="hero" id="top">
                <h1>{"Swap what you have for what you need"}</h1>
                <p class="hero-subtitle">
                    {"ReSwap connects people who would rather trade than throw away."}
                </p>
                <AnchorLink target="communities" class={classes!("btn", "btn-primary")}>
                    {"Find your community"}
                </AnchorLink>
            </section>

            <section class="features-section" id="features">
                <h2>{"How ReSwap works"}</h2>
                <div class="features-grid">
                    <FeatureCard icon="📦" title="List" description="Post the things you no longer use in a couple of taps." />
                    <FeatureCard icon="🔄" title="Match" description="Find members who have what you need and want what you have." />
                    <FeatureCard icon="🤝" title="Swap" description="Meet up, trade, and keep good things in use." />
                </div>
            </section>

            <SharedSections
                page={props.theme}
                config={props.config.clone()}
                faq={faq()}
                subscribe_title="Stay in the loop"
                on_notify={props.on_notify.clone()}
            />
        </main>
    }
}
