use crate::ui::components::{ForeignElement, GenericElement, InfoBlock, Spoiler, SpoilerLabel};
use dioxus::prelude::*;
use hastview_tree::{Element as TreeElement, Node, TagRole};

/// Renders one tree node, swapping in custom components for overridden tags
#[component]
pub fn RenderNode(node: Node) -> Element {
    match node {
        Node::Text(text) | Node::Raw(text) => rsx! { "{text}" },
        Node::Comment(_) | Node::Doctype => rsx! { {} },
        Node::Element(element) => match TagRole::for_tag(&element.tag) {
            TagRole::Spoiler => {
                let (labels, body): (Vec<Node>, Vec<Node>) =
                    element.children.into_iter().partition(is_spoiler_label);
                rsx! {
                    Spoiler {
                        RenderChildren { nodes: labels }
                        div {
                            class: "spoiler__body",
                            RenderChildren { nodes: body }
                        }
                    }
                }
            }
            TagRole::SpoilerLabel => rsx! {
                SpoilerLabel {
                    RenderChildren { nodes: element.children }
                }
            },
            TagRole::Callout => rsx! {
                InfoBlock {
                    RenderChildren { nodes: element.children }
                }
            },
            TagRole::Void => rsx! {
                GenericElement {
                    element: TreeElement {
                        children: Vec::new(),
                        ..element
                    }
                }
            },
            TagRole::Foreign => rsx! {
                ForeignElement { element }
            },
            TagRole::Default => rsx! {
                GenericElement { element }
            },
        },
    }
}

fn is_spoiler_label(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|element| TagRole::for_tag(&element.tag) == TagRole::SpoilerLabel)
}

#[component]
pub fn RenderChildren(nodes: Vec<Node>) -> Element {
    rsx! {
        for node in nodes {
            RenderNode { node }
        }
    }
}
