use crate::ui::state::SpoilerState;
use dioxus::prelude::*;

/// Heading of a spoiler. Both chevrons are always rendered; the stylesheet
/// shows one of them based on the container's `spoiler--show`/`spoiler--hide` class.
///
/// Clicking the label toggles the closest enclosing [`Spoiler`](super::Spoiler).
/// Outside of a spoiler the click does nothing.
#[component]
pub fn SpoilerLabel(children: Element) -> Element {
    let state = try_use_context::<Signal<SpoilerState>>();

    rsx! {
        p {
            class: "spoiler-label py-4 flex items-start",
            onclick: move |_| {
                if let Some(mut state) = state {
                    state.write().toggle();
                } else {
                    log::debug!("Spoiler label clicked outside of a spoiler");
                }
            },
            svg {
                class: "h-6 w-6 text-gray-500 mr-4 spoiler-label__open",
                fill: "currentColor",
                view_box: "0 0 20 20",
                path {
                    fill_rule: "evenodd",
                    d: "M5.293 7.293a1 1 0 011.414 0L10 10.586l3.293-3.293a1 1 0 111.414 1.414l-4 4a1 1 0 01-1.414 0l-4-4a1 1 0 010-1.414z",
                    clip_rule: "evenodd",
                }
            }
            svg {
                class: "h-6 w-6 text-gray-500 mr-4 spoiler-label__closed",
                fill: "currentColor",
                view_box: "0 0 20 20",
                path {
                    fill_rule: "evenodd",
                    d: "M7.293 14.707a1 1 0 010-1.414L10.586 10 7.293 6.707a1 1 0 011.414-1.414l4 4a1 1 0 010 1.414l-4 4a1 1 0 01-1.414 0z",
                    clip_rule: "evenodd",
                }
            }
            {children}
        }
    }
}
