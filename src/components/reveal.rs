//! Fade-in of page sections as they scroll into view.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Returns true once the element behind `node` has intersected the viewport.
/// Never goes back to false.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_visible = {
                        let revealed = revealed.clone();
                        move || revealed.set(true)
                    };
                    let observer = observe_once(&element, on_visible);
                    if observer.is_none() {
                        revealed.set(true);
                    }
                    observer
                });

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

fn observe_once(
    element: &Element,
    on_visible: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_visible();
                observer.unobserve(&entry.target());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            // Old browsers: show everything rather than leave it transparent.
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

pub const REVEAL_STYLE: &str = r#"
    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .reveal.animate-in {
        opacity: 1;
        transform: translateY(0);
    }
"#;
