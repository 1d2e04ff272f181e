use crate::ui::components::RenderChildren;
use dioxus::prelude::*;
use hastview_tree::Root;

/// Renders a whole document tree inside the `markdown` wrapper
#[component]
pub fn Markdown(tree: Root, class_name: Option<String>) -> Element {
    let class = wrapper_class(class_name.as_deref());

    rsx! {
        div {
            class: "{class}",
            RenderChildren { nodes: tree.children }
        }
    }
}

fn wrapper_class(extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("markdown {extra}"),
        _ => "markdown".to_string(),
    }
}
