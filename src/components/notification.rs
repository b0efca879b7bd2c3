use gloo_timers::callback::Timeout;
use yew::prelude::*;

const SLIDE_IN_DELAY_MS: u32 = 100;
const SLIDE_OUT_MS: u32 = 300;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// A notice as shown on screen. Every call to [`Banner::after`] yields a
/// new `seq`, so repeating the same notice still restarts the banner.
#[derive(Clone, PartialEq, Debug)]
pub struct Banner {
    pub seq: u32,
    pub notice: Notice,
}

impl Banner {
    pub fn after(previous: Option<&Banner>, notice: Notice) -> Self {
        let seq = previous.map_or(0, |banner| banner.seq.wrapping_add(1));
        Self { seq, notice }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub banner: Banner,
    pub lifetime_ms: u32,
    pub on_close: Callback<()>,
}

/// Banner in the top right corner. Slides in, then out again after
/// `lifetime_ms` unless closed first.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        let on_close = props.on_close.clone();
        let lifetime_ms = props.lifetime_ms;
        use_effect_with_deps(
            move |_| {
                shown.set(false);
                let slide_in = {
                    let shown = shown.clone();
                    Timeout::new(SLIDE_IN_DELAY_MS, move || shown.set(true))
                };
                let slide_out = {
                    let shown = shown.clone();
                    Timeout::new(lifetime_ms, move || shown.set(false))
                };
                let remove = Timeout::new(lifetime_ms + SLIDE_OUT_MS, move || on_close.emit(()));

                // Dropping the timeouts cancels them.
                move || {
                    drop(slide_in);
                    drop(slide_out);
                    drop(remove);
                }
            },
            props.banner.clone(),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let kind_class = match props.banner.notice.kind {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
    };

    html! {
        <div class={classes!("notification", kind_class, (*shown).then(|| "shown"))} role="status">
            <span>{&props.banner.notice.message}</span>
            <button class="notification-close" onclick={close}>{"×"}</button>
            <style>
                {r#"
                .notification {
                    position: fixed;
                    top: 20px;
                    right: 20px;
                    padding: 15px 20px;
                    border-radius: 8px;
                    color: white;
                    font-size: 14px;
                    font-weight: 500;
                    z-index: 10000;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    min-width: 300px;
                    transform: translateX(120%);
                    transition: transform 0.3s ease;
                }
                .notification.shown {
                    transform: translateX(0);
                }
                .notification.success {
                    background-color: #df3f42;
                }
                .notification.error {
                    background-color: #e74c3c;
                }
                .notification-close {
                    background: none;
                    border: none;
                    color: white;
                    font-size: 18px;
                    cursor: pointer;
                    padding: 0;
                    margin-left: auto;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_notice_gets_new_banner() {
        let first = Banner::after(None, Notice::error("Please enter a valid email address."));
        let second = Banner::after(
            Some(&first),
            Notice::error("Please enter a valid email address."),
        );

        assert_eq!(first.notice, second.notice);
        assert_ne!(first, second);
        assert_eq!(second.seq, first.seq + 1);
    }

    #[test]
    fn test_banner_seq_wraps() {
        let last = Banner {
            seq: u32::MAX,
            notice: Notice::success("Thanks!"),
        };
        assert_eq!(Banner::after(Some(&last), Notice::success("Thanks!")).seq, 0);
    }
}
