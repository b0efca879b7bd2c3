use log::info;
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::cards::FeatureCard;
use crate::components::faq::FaqEntry;
use crate::pages::common::{PageProps, SharedSections};

fn faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Who is NeedShare for?",
            answer: "Anyone who has everyday essentials to pass on, or who needs some right now.",
        },
        FaqEntry {
            question: "Do I have to give something to receive something?",
            answer: "No. NeedShare swaps can be one-way; members give when they can and ask when they need to.",
        },
        FaqEntry {
            question: "Is my request visible to everyone?",
            answer: "Requests are only visible to members of your local NeedShare group.",
        },
    ]
}

#[function_component(NeedSharePage)]
pub fn needshare_page(props: &PageProps) -> Html {
    info!("Rendering {} page", props.theme);

    html! {
        <main class="needshare-page">
            <section class="hero" id="top">
                <h1>{"NeedShare"}</h1>
                <p class="hero-subtitle">
                    {"Neighbours helping neighbours with the things that matter day to day."}
                </p>
                <AnchorLink target="how-it-works" class={classes!("btn", "btn-cta")}>
                    {"How it works"}
                </AnchorLink>
            </section>

            <section class="features-section" id="how-it-works">
                <h2>{"How it works"}</h2>
                <div class="features-grid">
                    <FeatureCard icon="📝" title="Ask" description="Post what you need, no explanation required." />
                    <FeatureCard icon="🎁" title="Offer" description="List essentials you can spare." />
                    <FeatureCard icon="🏘️" title="Connect" description="Arrange a handover with someone nearby." />
                </div>
            </section>

            <SharedSections
                page={props.theme}
                config={props.config.clone()}
                faq={faq()}
                subscribe_title="Get NeedShare updates"
                on_notify={props.on_notify.clone()}
            />
        </main>
    }
}
