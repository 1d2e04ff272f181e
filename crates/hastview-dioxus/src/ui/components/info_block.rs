use dioxus::prelude::*;

#[component]
pub fn InfoBlock(children: Element) -> Element {
    rsx! {
        div {
            class: "rounded-md bg-blue-50 p-4 info-block mb-4",
            div {
                class: "flex",
                div {
                    class: "flex-shrink-0",
                    svg {
                        class: "h-5 w-5 text-blue-400",
                        view_box: "0 0 20 20",
                        fill: "currentColor",
                        path {
                            fill_rule: "evenodd",
                            d: "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z",
                            clip_rule: "evenodd",
                        }
                    }
                }
                div {
                    class: "ml-3",
                    {children}
                }
            }
        }
    }
}
