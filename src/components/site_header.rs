use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::{window, MediaQueryListEvent, MouseEvent, Window};
use yew::prelude::*;
use yew_hooks::use_click_away;

use crate::components::anchor::AnchorLink;
use crate::config::PageConfig;
use crate::state::mobile_menu::MobileMenu;
use crate::state::scroll::{Classification, ScrollConfig, ScrollThresholdClassifier};
use crate::state::throttle::{Throttle, ThrottleDecision};
use crate::theme::Theme;

const NAV_PAGES: [Theme; 3] = [Theme::Default, Theme::FitShare, Theme::NeedShare];

pub enum MenuAction {
    Viewport(bool),
    Toggle,
    NavLinkClicked,
    OutsideClick,
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            MenuAction::Viewport(matches) => next.set_mobile(matches),
            MenuAction::Toggle => next.toggle(),
            MenuAction::NavLinkClicked => next.nav_link_clicked(),
            MenuAction::OutsideClick => next.outside_click(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn header_classes(classification: Classification) -> Vec<&'static str> {
    match classification {
        Classification::Top => vec![],
        Classification::Scrolled => vec!["scrolled"],
        Classification::HiddenByDirection => vec!["scrolled", "hidden"],
    }
}

/// The new classification, or `None` when the header already shows it.
fn changed_classification(
    before: Classification,
    after: Classification,
) -> Option<Classification> {
    (before != after).then_some(after)
}

fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub theme: Theme,
    pub config: PageConfig,
    pub on_theme_change: Callback<Theme>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let classification = use_state(Classification::default);
    let menu = use_reducer(|| MobileMenu::new(false));
    let header_ref = use_node_ref();

    // Header styling from the scroll position.
    {
        let classification = classification.clone();
        use_effect_with_deps(
            move |(scroll, interval_ms): &(ScrollConfig, f64)| {
                let classifier = Rc::new(RefCell::new(ScrollThresholdClassifier::new(*scroll)));
                let throttle = Rc::new(RefCell::new(Throttle::new(*interval_ms)));
                let trailing: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let apply: Rc<dyn Fn(f64)> = {
                    let classifier = classifier.clone();
                    Rc::new(move |position: f64| {
                        let mut classifier = classifier.borrow_mut();
                        let before = classifier.last_state().classification;
                        let state = classifier.observe(position);
                        if let Some(next) = changed_classification(before, state.classification) {
                            debug!("Header {:?} -> {:?} at {}", before, next, state.position);
                            classification.set(next);
                        }
                    })
                };

                let listener = window().map(|window| {
                    apply(scroll_offset(&window));

                    let on_scroll = {
                        let window = window.clone();
                        let trailing = trailing.clone();
                        Closure::wrap(Box::new(move || {
                            let decision = throttle.borrow_mut().poll(Date::now());
                            match decision {
                                ThrottleDecision::Run => apply(scroll_offset(&window)),
                                ThrottleDecision::Defer { wait_ms } => {
                                    if trailing.borrow().is_some() {
                                        return;
                                    }
                                    // Trailing run so the resting position is always classified.
                                    let window = window.clone();
                                    let apply = apply.clone();
                                    let throttle = throttle.clone();
                                    let pending = trailing.clone();
                                    let timeout = Timeout::new(wait_ms.ceil() as u32, move || {
                                        // Dropping the handle here would free the running closure.
                                        if let Some(done) = pending.borrow_mut().take() {
                                            done.forget();
                                        }
                                        throttle.borrow_mut().mark(Date::now());
                                        apply(scroll_offset(&window));
                                    });
                                    *trailing.borrow_mut() = Some(timeout);
                                }
                            }
                        }) as Box<dyn FnMut()>)
                    };

                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not listen for scroll events: {:?}", e);
                    }
                    (window, on_scroll)
                });

                move || {
                    if let Some((window, on_scroll)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                    drop(trailing.borrow_mut().take());
                }
            },
            (props.config.scroll, props.config.scroll_throttle_ms),
        );
    }

    // Collapse the nav below the mobile breakpoint.
    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |query: &String| {
                let media = window().and_then(|w| w.match_media(query).ok().flatten());
                if media.is_none() {
                    debug!("matchMedia unavailable for {}", query);
                }

                let listener = media.map(|media| {
                    menu.dispatch(MenuAction::Viewport(media.matches()));
                    let on_change = {
                        let menu = menu.clone();
                        Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
                            menu.dispatch(MenuAction::Viewport(e.matches()));
                        }) as Box<dyn FnMut(MediaQueryListEvent)>)
                    };
                    let _ = media.add_event_listener_with_callback(
                        "change",
                        on_change.as_ref().unchecked_ref(),
                    );
                    (media, on_change)
                });

                move || {
                    if let Some((media, on_change)) = listener {
                        let _ = media.remove_event_listener_with_callback(
                            "change",
                            on_change.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            props.config.mobile_query(),
        );
    }

    {
        let menu = menu.clone();
        use_click_away(header_ref.clone(), move |_: Event| {
            menu.dispatch(MenuAction::OutsideClick);
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::NavLinkClicked))
    };

    let nav_links = NAV_PAGES.iter().map(|&page| {
        let onclick = {
            let close_menu = close_menu.clone();
            let on_theme_change = props.on_theme_change.clone();
            Callback::from(move |_: MouseEvent| {
                close_menu.emit(());
                on_theme_change.emit(page);
            })
        };
        let label = page.to_string();
        let active = props.theme.is_active_label(&label);
        html! {
            <a href={page.page_href()} class={classes!("nav-link", active.then(|| "active"))} {onclick}>
                {label}
            </a>
        }
    });

    let header_buttons = html! {
        <div class="header-buttons">
            <AnchorLink target="subscribe" class={classes!("btn", "btn-cta")} onclick={close_menu.clone()}>
                {"Get Updates"}
            </AnchorLink>
        </div>
    };

    let nav_style = (!menu.nav_visible()).then(|| "display: none;");

    html! {
        <header ref={header_ref} class={classes!("site-header", header_classes(*classification))}>
            <div class="header-content">
                <a href={Theme::Default.page_href()} class="logo">{"ReSwap"}</a>

                {
                    if menu.toggle_visible() {
                        html! {
                            <button class="mobile-menu-toggle" aria-label="Menu" onclick={toggle_menu}>
                                {"☰"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }

                <nav class={classes!("main-nav", menu.is_mobile().then(|| "mobile-nav"))} style={nav_style}>
                    { for nav_links }
                    <AnchorLink target="faq" class={classes!("nav-link")} onclick={close_menu.clone()}>
                        {"FAQ"}
                    </AnchorLink>
                    {
                        if menu.is_mobile() {
                            html! { <div class="mobile-menu-buttons">{header_buttons.clone()}</div> }
                        } else {
                            html! {}
                        }
                    }
                </nav>

                {
                    if menu.is_mobile() {
                        html! {}
                    } else {
                        header_buttons
                    }
                }
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background-color: transparent;
                    transition: all 0.3s ease;
                }
                .site-header.scrolled {
                    background-color: rgba(255, 249, 242, 0.95);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
                }
                [data-theme="needshare"] .site-header.scrolled {
                    background: rgba(223, 63, 66, 0.95);
                }
                [data-theme="needshare"] .site-header.scrolled .nav-link {
                    color: white;
                }
                .site-header.hidden {
                    transform: translateY(-100%);
                }
                .header-content {
                    position: relative;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 16px 24px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 24px;
                }
                .main-nav {
                    display: flex;
                    gap: 24px;
                }
                .nav-link.active {
                    font-weight: 600;
                    color: var(--color-primary);
                }
                .mobile-menu-toggle {
                    background: none;
                    border: none;
                    font-size: 24px;
                    cursor: pointer;
                    color: var(--color-primary);
                }
                .main-nav.mobile-nav {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    flex-direction: column;
                    background: var(--color-background);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
                    padding: 20px;
                    z-index: 1000;
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(menu: MobileMenu, action: MenuAction) -> MobileMenu {
        *Rc::new(menu).reduce(action)
    }

    #[test]
    fn test_header_classes() {
        assert!(header_classes(Classification::Top).is_empty());
        assert_eq!(header_classes(Classification::Scrolled), vec!["scrolled"]);
        assert_eq!(
            header_classes(Classification::HiddenByDirection),
            vec!["scrolled", "hidden"]
        );
    }

    #[test]
    fn test_classification_set_only_on_change() {
        assert_eq!(
            changed_classification(Classification::Top, Classification::Top),
            None
        );
        assert_eq!(
            changed_classification(Classification::Scrolled, Classification::Scrolled),
            None
        );
        assert_eq!(
            changed_classification(Classification::Top, Classification::Scrolled),
            Some(Classification::Scrolled)
        );
    }

    #[test]
    fn test_menu_reducer() {
        let menu = reduce(MobileMenu::default(), MenuAction::Viewport(true));
        let menu = reduce(menu, MenuAction::Toggle);
        assert!(menu.is_open());

        let menu = reduce(menu, MenuAction::OutsideClick);
        assert!(!menu.is_open());

        let menu = reduce(reduce(menu, MenuAction::Toggle), MenuAction::NavLinkClicked);
        assert!(!menu.is_open());
        assert!(menu.is_mobile());
    }
}
