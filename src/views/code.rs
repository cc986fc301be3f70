use crate::content::StaticDoc;
use crate::views::shared::highlight_source;
use dioxus::prelude::*;
use std::time::Duration;

const COPY_ACK_DELAY: Duration = Duration::from_secs(2);

/// Read-only source panel: filename header, highlighted body, copy action.
/// The only state is the transient "Copied!" acknowledgment.
#[component]
pub fn CodeView(doc: StaticDoc) -> Element {
    let mut copied = use_signal(|| false);
    let display = doc.source.trim();
    let body_html = highlight_source(doc.language, display);

    let on_copy = move |_| {
        let raw = doc.source.to_string();
        copied.set(true);
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                // Clipboard failures are not surfaced; the acknowledgment
                // still plays.
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            tokio::time::sleep(COPY_ACK_DELAY).await;
            copied.set(false);
        });
    };

    rsx! {
        div { class: "main-container",
            div { class: "code-wrap",
                div { class: "code-header",
                    span { class: "code-filename", "{doc.filename}" }
                    button {
                        class: format_args!("copy-btn {}", if copied() { "copied" } else { "" }),
                        r#type: "button",
                        onclick: on_copy,
                        if copied() { "Copied!" } else { "Copy" }
                    }
                }
                div { class: "code-body", dangerous_inner_html: "{body_html}" }
            }
        }
    }
}
