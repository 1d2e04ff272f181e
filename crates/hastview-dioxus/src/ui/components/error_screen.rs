use dioxus::prelude::*;

/// Shown in place of the document when the tree could not be loaded
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { class: "error-screen__title", "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-screen__details", "{detail_text}" }
            }
        }
    }
}
