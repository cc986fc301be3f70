use crate::ai;
use crate::session::ChatSession;
use crate::types::Role;
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Bot => "bot",
    }
}

/// Interactive tab: a transcript over [`ChatSession`] plus one in-flight
/// call to the generation client per accepted submission.
#[component]
pub fn SimulationView() -> Element {
    let session = use_signal(ChatSession::new);
    let mut input = use_signal(String::new);

    let mut send_message = {
        let mut session = session;
        let mut input_signal = input;
        move |text: String| {
            // Blank input and overlapping submissions die here, unrecorded.
            let Some(job) = session.with_mut(|state| state.begin(&text)) else {
                return;
            };
            input_signal.set(String::new());
            spawn(async move {
                let outcome = ai::simulate_reply(&job.input, &job.history).await;
                session.with_mut(|state| state.finish(outcome));
            });
        }
    };

    let state = session();
    let busy = state.is_busy();

    rsx! {
        div { class: "main-container",
            div { class: "sim-intro",
                h2 { "Bot Logic Simulator" }
                p { "Interact with a simulated version of the bot logic powered by Gemini." }
            }
            div { class: "chat-frame",
                div { class: "chat-titlebar",
                    div { class: "chat-avatar", "B" }
                    div {
                        h3 { "Telegram Bot Simulator" }
                        span { class: "chat-status", "Online" }
                    }
                }
                div { id: "chat-list", class: "chat-list",
                    for msg in state.messages().iter() {
                        div {
                            key: "{msg.id}",
                            class: format_args!("message-row {}", role_class(msg.role)),
                            div { class: format_args!("bubble {}", role_class(msg.role)),
                                "{msg.text}"
                                if let Some(ts) = format_message_timestamp(msg.timestamp) {
                                    span { class: "message-timestamp", "{ts}" }
                                }
                            }
                        }
                    }
                    if busy {
                        div { class: "message-row bot",
                            div { class: "bubble bot typing-dots",
                                span {}
                                span {}
                                span {}
                            }
                        }
                    }
                }
                form { class: "composer",
                    textarea {
                        rows: "1",
                        placeholder: "Type your message...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                        autofocus: true,
                    }
                    button {
                        class: "send-btn",
                        r#type: "button",
                        disabled: busy || input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Send"
                    }
                }
            }
        }
    }
}
