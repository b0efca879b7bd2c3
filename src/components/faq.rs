use log::{debug, error};
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::state::toggle_group::{ToggleGroup, ToggleMode, Transition};

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

fn faq_id(index: usize) -> String {
    format!("faq-{}", index)
}

/// Writes one transition to the answer element: the measured height when
/// opening, 0 when closing. The `max-height` CSS transition does the rest.
fn apply_transition(answers: &[(String, NodeRef)], transition: &Transition) {
    let Some(answer) = answers
        .iter()
        .find(|(id, _)| *id == transition.id)
        .and_then(|(_, node)| node.cast::<HtmlElement>())
    else {
        return;
    };
    let _ = answer
        .style()
        .set_property("max-height", &format!("{}px", transition.target_size));
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
    #[prop_or_default]
    pub mode: ToggleMode,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let group = {
        let mode = props.mode;
        let count = props.entries.len();
        use_mut_ref(move || match ToggleGroup::with_items(mode, (0..count).map(faq_id)) {
            Ok(group) => {
                debug!("FAQ ready: {} items, {:?} mode", group.len(), group.mode());
                Some(group)
            }
            Err(e) => {
                error!("FAQ setup failed: {}", e);
                None
            }
        })
    };
    let answers = {
        let count = props.entries.len();
        use_state(move || {
            (0..count)
                .map(|index| (faq_id(index), NodeRef::default()))
                .collect::<Vec<_>>()
        })
    };
    let update = use_force_update();

    if group.borrow().is_none() {
        return html! {};
    }

    let rows = props.entries.iter().zip(answers.iter()).map(|(entry, (id, answer_ref))| {
        let onclick = {
            let group = group.clone();
            let answers = answers.clone();
            let update = update.clone();
            let id = id.clone();
            let answer_ref = answer_ref.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let mut guard = group.borrow_mut();
                let Some(group) = guard.as_mut() else {
                    return;
                };

                if let Some(answer) = answer_ref.cast::<HtmlElement>() {
                    let _ = group.measure(&id, answer.scroll_height() as f64);
                }

                match group.toggle(&id) {
                    Ok(transitions) => {
                        debug!("Toggled {} ({} transitions)", id, transitions.len());
                        for transition in &transitions {
                            apply_transition(&answers, transition);
                        }
                    }
                    Err(e) => error!("FAQ toggle failed: {}", e),
                }
                drop(guard);
                update.force_update();
            })
        };

        let open = group
            .borrow()
            .as_ref()
            .and_then(|group| group.is_open(id).ok())
            .unwrap_or(false);

        html! {
            <FaqRow
                key={id.clone()}
                question={entry.question}
                answer={entry.answer}
                {open}
                answer_ref={answer_ref.clone()}
                {onclick}
            />
        }
    });

    html! {
        <div class="faq-list">
            { for rows }
            <style>
                {r#"
                .faq-item {
                    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.2rem 0;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    color: inherit;
                }
                .faq-arrow {
                    transition: transform 0.3s ease;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-answer p {
                    margin: 0 0 1.2rem;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqRowProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    answer_ref: NodeRef,
    onclick: Callback<MouseEvent>,
}

#[function_component(FaqRow)]
fn faq_row(props: &FaqRowProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    let arrow_style = if props.open {
        "transform: rotate(180deg)"
    } else {
        "transform: rotate(0deg)"
    };

    html! {
        <div
            ref={node}
            class={classes!("faq-item", "reveal", props.open.then(|| "active"), revealed.then(|| "animate-in"))}
        >
            <button class="faq-question" onclick={props.onclick.clone()}>
                <span class="question-text">{props.question}</span>
                <span class="faq-arrow" style={arrow_style}>{"▾"}</span>
            </button>
            <div class="faq-answer" ref={props.answer_ref.clone()}>
                <p>{props.answer}</p>
            </div>
        </div>
    }
}
