use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::window;
use yew::prelude::*;

mod config;
mod theme;
mod state {
    pub mod email;
    pub mod mobile_menu;
    pub mod scroll;
    pub mod subscribe;
    pub mod throttle;
    pub mod toggle_group;
}
mod components {
    pub mod anchor;
    pub mod cards;
    pub mod faq;
    pub mod notification;
    pub mod reveal;
    pub mod site_header;
    pub mod subscribe_form;
}
mod pages {
    pub mod common;
    pub mod fitshare;
    pub mod home;
    pub mod needshare;
}

use components::notification::{Banner, Notice, Notification};
use components::reveal::REVEAL_STYLE;
use components::site_header::SiteHeader;
use pages::{fitshare::FitSharePage, home::HomePage, needshare::NeedSharePage};
use theme::Theme;

/// Delay before `loaded` is added to the body, which starts paused CSS animations.
const BODY_LOADED_DELAY_MS: u32 = 100;

fn switch(theme: Theme, config: &config::PageConfig, on_notify: Callback<Notice>) -> Html {
    match theme {
        Theme::Default => html! {
            <HomePage {theme} config={config.clone()} {on_notify} />
        },
        Theme::FitShare => html! {
            <FitSharePage {theme} config={config.clone()} {on_notify} />
        },
        Theme::NeedShare => html! {
            <NeedSharePage {theme} config={config.clone()} {on_notify} />
        },
    }
}

#[function_component]
fn App() -> Html {
    // The page is fixed by the URL; nav clicks only restyle until the browser navigates.
    let page = use_memo(|_| Theme::current(), ());
    let theme = use_state(|| *page);
    let page_config = use_memo(|page: &Theme| config::load(*page), *page);
    let banner = use_state(|| None::<Banner>);

    use_effect_with_deps(
        |theme: &Theme| {
            debug!("Applying theme {}", theme.attr());
            theme.apply();
            || ()
        },
        *theme,
    );

    use_effect_with_deps(
        |_| {
            let loaded = Timeout::new(BODY_LOADED_DELAY_MS, || {
                if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                    let _ = body.class_list().add_1("loaded");
                }
            });
            move || drop(loaded)
        },
        (),
    );

    let on_theme_change = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| theme.set(next))
    };

    let on_notify = {
        let banner = banner.clone();
        Callback::from(move |next: Notice| {
            banner.set(Some(Banner::after((*banner).as_ref(), next)));
        })
    };

    let on_close = {
        let banner = banner.clone();
        Callback::from(move |_: ()| banner.set(None))
    };

    html! {
        <>
            <SiteHeader theme={*theme} config={(*page_config).clone()} {on_theme_change} />
            { switch(*page, &page_config, on_notify) }
            {
                if let Some(current) = (*banner).clone() {
                    html! {
                        <Notification
                            key={current.seq}
                            banner={current.clone()}
                            lifetime_ms={page_config.subscribe.banner_lifetime_ms}
                            {on_close}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <footer class="site-footer">
                <p>{"© ReSwap. Trade more, waste less."}</p>
            </footer>
            <style>
                {REVEAL_STYLE}
                {r#"
                body:not(.loaded) * {
                    animation-play-state: paused;
                }
                "#}
            </style>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting ReSwap site");
    yew::Renderer::<App>::new().render();
}
