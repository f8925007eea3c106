use std::cell::RefCell;
use std::future::pending;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use nura_core::model::{ChoiceKey, QuestionId};
use nura_core::quiz::{
    Effect, KeyCode, KeyInput, KeyModifiers, PrimaryAction, QuizAction, TICK_INTERVAL, field_name,
    shortcut_for,
};
use services::{CountdownDriver, QuizRunner};
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::Sleep;
use tracing::{debug, warn};

use crate::context::{AppContext, QuizHandle};
use crate::vm::{NoticeQueue, QuizCommand, QuizVm, marker_class};

use super::notices::{NoticeStack, show_notice};
use super::scripts::{SCROLL_TO_TOP_SCRIPT, VISIBILITY_SCRIPT};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    match ctx.quiz() {
        Some(handle) => rsx! { QuizPage { handle } },
        None => rsx! {
            div { class: "page",
                h2 { "Quiz" }
                p { class: "muted", "No quiz loaded." }
            }
        },
    }
}

type ActionSlot = Rc<RefCell<Option<UnboundedReceiver<QuizAction>>>>;

#[component]
fn QuizPage(handle: QuizHandle) -> Element {
    let total = handle.config().total();
    let vm = use_signal(|| QuizVm::new(handle.config()));
    let notices = use_signal(NoticeQueue::new);

    let (tx, slot) = use_hook(|| {
        let (tx, rx) = mpsc::unbounded_channel::<QuizAction>();
        let slot: ActionSlot = Rc::new(RefCell::new(Some(rx)));
        (tx, slot)
    });

    let runner = handle.runner();
    use_future(move || {
        let runner = Arc::clone(&runner);
        let actions = slot.borrow_mut().take();
        async move {
            if let Some(actions) = actions {
                run_quiz(runner, actions, vm, notices).await;
            }
        }
    });

    let dispatch = {
        let tx = tx.clone();
        use_callback(move |action: QuizAction| {
            if tx.send(action).is_err() {
                warn!("quiz loop has stopped; action dropped");
            }
        })
    };

    use_future(move || async move {
        let mut visibility = eval(VISIBILITY_SCRIPT);
        while let Ok(hidden) = visibility.recv::<bool>().await {
            dispatch.call(QuizAction::VisibilityChanged { visible: !hidden });
        }
    });

    let on_key = move |evt: KeyboardEvent| {
        let input = key_input(&evt);
        if shortcut_for(&input, total).is_some() {
            evt.prevent_default();
            dispatch.call(QuizAction::Key(input));
        }
    };

    let vm_read = vm.read();
    let title = vm_read.title().to_string();
    let questions = vm_read.questions().to_vec();
    let markers = vm_read.markers().to_vec();
    let nav = vm_read.nav();
    let prompt = vm_read.prompt();
    let disabled = vm_read.inputs_disabled();
    let timer_label = vm_read.timer_label();
    let timer_class = vm_read.timer_class();
    let progress_style = vm_read.progress_style();
    let answered_label = vm_read.answered_label();
    let remaining_label = vm_read.remaining_label();
    drop(vm_read);

    rsx! {
        div { id: "quiz-root", class: "page quiz", tabindex: "0", onkeydown: on_key,
            NoticeStack { queue: notices }

            header { class: "quiz-header",
                h2 { "{title}" }
                span { id: "timer", class: "{timer_class}", "{timer_label}" }
            }

            div { class: "progress",
                div { id: "progress-bar", class: "progress-bar", style: "{progress_style}" }
            }

            div { class: "quiz-counts",
                span { id: "answered-count", "{answered_label}" }
                span { id: "remaining-count", "{remaining_label}" }
            }

            nav { class: "question-nav",
                for marker in markers {
                    button {
                        key: "{marker.number}",
                        class: marker_class(&marker),
                        r#type: "button",
                        disabled,
                        onclick: move |_| dispatch.call(QuizAction::Show(marker.number)),
                        "{marker.number}"
                    }
                }
            }

            form { class: "quiz-form", onsubmit: move |evt| evt.prevent_default(),
                for (number, question) in (1u32..).zip(questions) {
                    section {
                        key: "{question.id}",
                        id: "question-{number}",
                        class: if vm.read().is_visible(number) { "question-panel active" } else { "question-panel" },
                        h3 { "Question {number}" }
                        p { class: "question-prompt", "{question.prompt}" }
                        for choice in question.choices {
                            ChoiceOption {
                                key: "{choice.key}",
                                question: question.id,
                                choice: choice.key.clone(),
                                label: choice.label,
                                selected: vm.read().is_selected(question.id, &choice.key),
                                disabled,
                                on_select: dispatch,
                            }
                        }
                    }
                }
            }

            div { class: "quiz-controls",
                button {
                    id: "prev-btn",
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: disabled || !nav.previous_enabled,
                    onclick: move |_| dispatch.call(QuizAction::Previous),
                    "Previous"
                }
                match nav.primary {
                    PrimaryAction::Next => rsx! {
                        button {
                            id: "next-btn",
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled,
                            onclick: move |_| dispatch.call(QuizAction::Next),
                            "Next"
                        }
                    },
                    PrimaryAction::Submit => rsx! {
                        button {
                            id: "submit-btn",
                            class: "btn btn-success",
                            r#type: "button",
                            disabled,
                            onclick: move |_| dispatch.call(QuizAction::RequestSubmit),
                            "Submit Quiz"
                        }
                    },
                }
            }

            if disabled {
                p { class: "quiz-submitted", "Your quiz has been submitted." }
            }

            if let Some(prompt) = prompt {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "dialog",
                        h3 { "Submit quiz?" }
                        p { "{prompt.message()}" }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizAction::CancelSubmit),
                                "Cancel"
                            }
                            button {
                                id: "confirm-submit",
                                class: "btn btn-success",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizAction::ConfirmSubmit),
                                "Submit"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChoiceOption(
    question: QuestionId,
    choice: ChoiceKey,
    label: String,
    selected: bool,
    disabled: bool,
    on_select: Callback<QuizAction>,
) -> Element {
    let class = if selected {
        "choice-option selected"
    } else {
        "choice-option"
    };
    let value = choice.to_string();
    rsx! {
        label { class,
            input {
                r#type: "radio",
                name: field_name(question),
                value,
                checked: selected,
                disabled,
                onchange: move |_| on_select.call(QuizAction::Select {
                    question,
                    choice: choice.clone(),
                }),
            }
            span { "{label}" }
        }
    }
}

fn key_input(evt: &KeyboardEvent) -> KeyInput {
    let modifiers = evt.data.modifiers();
    KeyInput {
        key: KeyCode::from_key_name(&evt.data.key().to_string()),
        modifiers: KeyModifiers {
            ctrl: modifiers.contains(Modifiers::CONTROL),
            meta: modifiers.contains(Modifiers::META),
            alt: modifiers.contains(Modifiers::ALT),
            shift: modifiers.contains(Modifiers::SHIFT),
        },
    }
}

//
// ─── EVENT LOOP ────────────────────────────────────────────────────────────────
//

type AutoSubmit = Option<Pin<Box<Sleep>>>;

/// Feed actions, countdown ticks and the auto-submit deadline into the runner.
///
/// Ends when the page drops its action sender.
async fn run_quiz(
    runner: Arc<Mutex<QuizRunner>>,
    mut actions: UnboundedReceiver<QuizAction>,
    mut vm: Signal<QuizVm>,
    notices: Signal<NoticeQueue>,
) {
    let (mut driver, mut ticks) = CountdownDriver::new(TICK_INTERVAL);
    let mut auto_submit: AutoSubmit = None;

    let effects = runner.lock().await.start().await;
    apply_effects(&effects, &mut vm, &mut driver, &mut auto_submit, notices);

    loop {
        let action = tokio::select! {
            action = actions.recv() => match action {
                Some(action) => action,
                None => break,
            },
            Some(()) = ticks.recv() => QuizAction::Tick,
            () = deadline(&mut auto_submit) => {
                auto_submit = None;
                QuizAction::AutoSubmit
            }
        };
        let effects = runner.lock().await.dispatch(action).await;
        apply_effects(&effects, &mut vm, &mut driver, &mut auto_submit, notices);
    }
    debug!("quiz loop finished");
}

async fn deadline(auto_submit: &mut AutoSubmit) {
    match auto_submit {
        Some(sleep) => sleep.as_mut().await,
        None => pending().await,
    }
}

fn apply_effects(
    effects: &[Effect],
    vm: &mut Signal<QuizVm>,
    driver: &mut CountdownDriver,
    auto_submit: &mut AutoSubmit,
    notices: Signal<NoticeQueue>,
) {
    let commands = vm.write().apply(effects);
    for command in commands {
        match command {
            QuizCommand::ScrollToTop => {
                let _ = eval(SCROLL_TO_TOP_SCRIPT);
            }
            QuizCommand::ResumeTimer => {
                driver.resume();
            }
            QuizCommand::PauseTimer => {
                driver.pause();
            }
            QuizCommand::StopTimer => {
                driver.stop();
            }
            QuizCommand::ScheduleAutoSubmit(delay) => {
                *auto_submit = Some(Box::pin(tokio::time::sleep(delay)));
            }
            QuizCommand::Notify(notification) => show_notice(notices, &notification),
        }
    }
}
