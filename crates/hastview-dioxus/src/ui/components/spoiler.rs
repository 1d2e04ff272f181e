use crate::ui::state::SpoilerState;
use dioxus::prelude::*;

/// Collapsible block. Starts hidden; the nearest [`SpoilerLabel`](super::SpoilerLabel)
/// inside it flips the state through context.
#[component]
pub fn Spoiler(children: Element) -> Element {
    let state = use_context_provider(|| Signal::new(SpoilerState::default()));
    let visibility = state.read().class();

    rsx! {
        div {
            class: "px-4 border border-gray-200 rounded-md spoiler {visibility}",
            {children}
        }
    }
}
