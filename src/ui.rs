use crate::content::{BACKEND_DOC, BOT_DOC, SCHEMA_DOC};
use crate::theme::APP_THEME;
use crate::views::{CodeView, OverviewView, ReadmeView, SimulationView};
use dioxus::prelude::*;

const APP_CSS: Asset = asset!("/assets/app.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Overview,
    Backend,
    Bot,
    Database,
    Simulation,
    Readme,
}

#[component]
pub fn App() -> Element {
    let active_tab = use_signal(|| AppTab::Overview);

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        style { dangerous_inner_html: "{APP_THEME}" }
        AppHeader { active_tab }
        TabPanels { active_tab }
        footer { class: "footer",
            "Built with Dioxus & Gemini API | Telegram Bot & Backend Architecture Showcase"
        }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                div { class: "brand",
                    div { class: "brand-glyph", ">_" }
                    span { class: "brand-name", "BOT_ARCHITECT" }
                }
                TabNavigation { active_tab }
            }
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Overview, label: "Overview" }
            TabButton { active_tab, tab: AppTab::Backend, label: "Backend" }
            TabButton { active_tab, tab: AppTab::Bot, label: "Bot Logic" }
            TabButton { active_tab, tab: AppTab::Database, label: "SQL Schema" }
            TabButton { active_tab, tab: AppTab::Simulation, label: "Simulation" }
            TabButton { active_tab, tab: AppTab::Readme, label: "Docs" }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab { "tab active" } else { "tab" };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Overview,
                children: rsx!( OverviewView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Backend,
                children: rsx!( CodeView { doc: BACKEND_DOC } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Bot,
                children: rsx!( CodeView { doc: BOT_DOC } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Database,
                children: rsx!( CodeView { doc: SCHEMA_DOC } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Simulation,
                children: rsx!( SimulationView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Readme,
                children: rsx!( ReadmeView {} ),
            }
        }
    }
}

/// Panels stay mounted and are toggled with CSS so the simulation
/// transcript survives tab switches.
#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}
