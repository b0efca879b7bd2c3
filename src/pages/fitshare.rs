use log::info;
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::cards::FeatureCard;
use crate::components::faq::FaqEntry;
use crate::pages::common::{PageProps, SharedSections};

fn faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "What can I swap on FitShare?",
            answer: "Anything for training: weights, bikes, rackets, shoes, and clothing in good condition.",
        },
        FaqEntry {
            question: "Do items need to be new?",
            answer: "No, but they should be clean and safe to use. Describe any wear honestly in the listing.",
        },
        FaqEntry {
            question: "Can I swap with someone in another city?",
            answer: "Yes, if you both agree on shipping. Most FitShare swaps happen locally.",
        },
    ]
}

#[function_component(FitSharePage)]
pub fn fitshare_page(props: &PageProps) -> Html {
    info!("Rendering {} page", props.theme);

    html! {
        <main class="fitshare-page">
            <section class="hero" id="top">
                <h1>{"FitShare"}</h1>
                <p class="hero-subtitle">
                    {"Outgrown your gear or switching sports? Swap it with someone who is just starting."}
                </p>
                <AnchorLink target="features" class={classes!("btn", "btn-primary")}>
                    {"See how it works"}
                </AnchorLink>
            </section>

            <section class="features-section" id="features">
                <h2>{"Built for active people"}</h2>
                <div class="features-grid">
                    <FeatureCard icon="🏋️" title="Gear swaps" description="Trade equipment you no longer train with." />
                    <FeatureCard icon="👟" title="Size matching" description="Find shoes and clothing in your size." />
                    <FeatureCard icon="📍" title="Local first" description="Swap with members near you and skip the shipping." />
                </div>
            </section>

            <SharedSections
                page={props.theme}
                config={props.config.clone()}
                faq={faq()}
                subscribe_title="Get FitShare updates"
                on_notify={props.on_notify.clone()}
            />
        </main>
    }
}
