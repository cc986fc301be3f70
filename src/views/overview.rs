use dioxus::prelude::*;

/// Landing tab: what the showcased stack is made of and how the pieces
/// talk to each other. Pure presentation.
#[component]
pub fn OverviewView() -> Element {
    rsx! {
        div { class: "main-container",
            div { class: "feature-grid",
                FeatureCard {
                    title: "FastAPI Backend",
                    body: "Robust Python-based REST API handling user sessions, authentication, and dynamic reply templates stored in SQL.",
                }
                FeatureCard {
                    title: "Aiogram 3 Bot",
                    body: "High-performance asynchronous Telegram bot with state machine for user registration and keyword-based FAQ.",
                }
                FeatureCard {
                    title: "PostgreSQL Schema",
                    body: "Normalized database structure for users, tokens, and templates with initial seeding scripts.",
                }
            }
            div { class: "flow-panel",
                h2 { "Full Stack Interaction Flow" }
                div { class: "flow-step",
                    div { class: "flow-step-number", "1" }
                    div {
                        h4 { "Auth Gatekeeping" }
                        p {
                            "Bot checks backend for registered "
                            code { "telegram_id" }
                            ". Redirects to registration if missing."
                        }
                    }
                }
                div { class: "flow-step",
                    div { class: "flow-step-number", "2" }
                    div {
                        h4 { "Template Logic" }
                        p {
                            "Keyword detected → Bot fetches corresponding "
                            code { "content" }
                            " from "
                            code { "reply_templates" }
                            " table."
                        }
                    }
                }
                div { class: "flow-step",
                    div { class: "flow-step-number", "3" }
                    div {
                        h4 { "FastAPI Middleware" }
                        p { "Backend manages secure hashing and time-expiring session tokens for the bot state." }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "feature-card",
            h3 { "{title}" }
            p { "{body}" }
        }
    }
}
