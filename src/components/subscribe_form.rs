use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::Notice;
use crate::config::{Feedback, SubscribeConfig};
use crate::state::subscribe::{
    SubmitOutcome, SubscribeFlow, SubscribeStatus, INVALID_EMAIL_MESSAGE,
};

#[derive(Properties, PartialEq)]
pub struct SubscribeFormProps {
    pub config: SubscribeConfig,
    #[prop_or(AttrValue::from("Subscribe"))]
    pub button_label: AttrValue,
    #[prop_or_default]
    pub on_notify: Callback<Notice>,
}

/// Pending timers of one form. Replacing or dropping a handle cancels it.
#[derive(Default)]
struct FormTimers {
    submit: Option<Timeout>,
    reset: Option<Timeout>,
    error: Option<Timeout>,
}

/// Newsletter signup. Validates the address and plays a fake subscription;
/// nothing leaves the browser.
#[function_component(SubscribeForm)]
pub fn subscribe_form(props: &SubscribeFormProps) -> Html {
    let email = use_state(String::new);
    let flow = use_mut_ref(SubscribeFlow::default);
    let timers = use_mut_ref(FormTimers::default);
    let update = use_force_update();

    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    *timers.borrow_mut() = FormTimers::default();
                }
            },
            (),
        );
    }

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let flow = flow.clone();
        let timers = timers.clone();
        let update = update.clone();
        let config = props.config.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = flow.borrow_mut().submit(&*email);

            match (outcome, config.feedback) {
                (SubmitOutcome::Busy, _) => return,
                (SubmitOutcome::Accepted(address), Feedback::Banner) => {
                    info!("Subscribed {}", address);
                    let mut flow = flow.borrow_mut();
                    flow.complete();
                    flow.reset();
                    email.set(String::new());
                    on_notify.emit(Notice::success(config.success_message.clone()));
                }
                (SubmitOutcome::Rejected, Feedback::Banner) => {
                    debug!("Rejected subscription address");
                    flow.borrow_mut().reset();
                    on_notify.emit(Notice::error(INVALID_EMAIL_MESSAGE));
                }
                (SubmitOutcome::Accepted(address), Feedback::Inline) => {
                    info!("Subscribing {}", address);
                    let flow = flow.clone();
                    let email = email.clone();
                    let update = update.clone();
                    let reset_timers = timers.clone();
                    let reset_delay_ms = config.reset_delay_ms;
                    let submit = Timeout::new(config.submit_delay_ms, move || {
                        flow.borrow_mut().complete();
                        email.set(String::new());
                        update.force_update();

                        let reset = Timeout::new(reset_delay_ms, move || {
                            flow.borrow_mut().finish();
                            update.force_update();
                        });
                        reset_timers.borrow_mut().reset = Some(reset);
                    });
                    timers.borrow_mut().submit = Some(submit);
                }
                (SubmitOutcome::Rejected, Feedback::Inline) => {
                    debug!("Rejected subscription address");
                    let flow = flow.clone();
                    let update = update.clone();
                    let clear = Timeout::new(config.error_lifetime_ms, move || {
                        flow.borrow_mut().clear_error();
                        update.force_update();
                    });
                    timers.borrow_mut().error = Some(clear);
                }
            }
            update.force_update();
        })
    };

    let current = *flow.borrow();
    let subscribed = current.status() == SubscribeStatus::Subscribed;

    html! {
        <form class="subscribe-form" {onsubmit}>
            <input
                type="email"
                placeholder="Enter your email"
                value={(*email).clone()}
                {oninput}
            />
            <button
                type="submit"
                class={classes!("btn", "btn-primary", subscribed.then(|| "subscribed"))}
                disabled={current.is_busy()}
            >
                {current.button_label(&props.button_label)}
            </button>
            {
                if let Some(message) = current.error_message() {
                    html! { <div class="error-message">{message}</div> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .subscribe-form {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 12px;
                    justify-content: center;
                }
                .subscribe-form input {
                    flex: 1;
                    min-width: 220px;
                    padding: 12px 16px;
                    border-radius: 8px;
                    border: 1px solid rgba(0, 0, 0, 0.15);
                }
                .subscribe-form .btn.subscribed {
                    background-color: #31a050;
                }
                .subscribe-form .error-message {
                    flex-basis: 100%;
                    color: #df3f42;
                    font-size: 14px;
                    margin-top: 8px;
                }
                "#}
            </style>
        </form>
    }
}
