use crate::ui::components::{ErrorScreen, Markdown};
use dioxus::prelude::*;
use hastview_tree::Root;

const MARKDOWN_CSS: &str = include_str!("../../assets/markdown.css");

/// Top-level viewer: bundled styles, any extra stylesheets, then the document
#[component]
pub fn App(tree: Root, class_name: Option<String>, stylesheets: Vec<String>) -> Element {
    rsx! {
        style { {MARKDOWN_CSS} }
        for css in stylesheets {
            style { {css} }
        }
        main {
            class: "viewer",
            Markdown { tree, class_name }
        }
    }
}

/// Top-level screen when startup failed
#[component]
pub fn FailedApp(message: String, details: String) -> Element {
    rsx! {
        style { {MARKDOWN_CSS} }
        ErrorScreen {
            title: "Cannot open document".to_string(),
            message,
            details: Some(details),
        }
    }
}
