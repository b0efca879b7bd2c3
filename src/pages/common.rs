use yew::prelude::*;

use crate::components::cards::CommunityCard;
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::notification::Notice;
use crate::components::subscribe_form::SubscribeForm;
use crate::config::PageConfig;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub theme: Theme,
    pub config: PageConfig,
    #[prop_or_default]
    pub on_notify: Callback<Notice>,
}

pub const COMMUNITIES: [(Theme, &str); 2] = [
    (
        Theme::FitShare,
        "Swap sports gear, gym equipment and activewear with people who train like you.",
    ),
    (
        Theme::NeedShare,
        "Pass on everyday essentials to neighbours who need them, and ask when you do.",
    ),
];

#[derive(Properties, PartialEq)]
pub struct SectionsProps {
    pub page: Theme,
    pub config: PageConfig,
    pub faq: Vec<FaqEntry>,
    pub subscribe_title: &'static str,
    #[prop_or_default]
    pub on_notify: Callback<Notice>,
}

/// Communities, FAQ and newsletter sections shared by every page.
#[function_component(SharedSections)]
pub fn shared_sections(props: &SectionsProps) -> Html {
    html! {
        <>
            <section class="communities-section" id="communities">
                <h2>{"Our Communities"}</h2>
                <div class="communities-grid">
                    {
                        for COMMUNITIES.iter().map(|(community, description)| html! {
                            <CommunityCard
                                community={*community}
                                description={*description}
                                current={props.page}
                            />
                        })
                    }
                </div>
            </section>

            <section class="faq-section" id="faq">
                <h2>{"Frequently Asked Questions"}</h2>
                <FaqList entries={props.faq.clone()} mode={props.config.faq_mode} />
            </section>

            <section class="subscribe-section" id="subscribe">
                <h2>{props.subscribe_title}</h2>
                <p>{"No spam, just news about new communities and features."}</p>
                <SubscribeForm
                    config={props.config.subscribe.clone()}
                    on_notify={props.on_notify.clone()}
                />
            </section>
        </>
    }
}
