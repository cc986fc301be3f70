use crate::content::README_DOC;
use crate::views::shared::markdown_to_html;
use dioxus::prelude::*;

#[component]
pub fn ReadmeView() -> Element {
    let html = markdown_to_html(README_DOC.source.trim());
    rsx! {
        div { class: "main-container",
            div { class: "prose", dangerous_inner_html: "{html}" }
        }
    }
}
