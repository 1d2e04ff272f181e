use dioxus::prelude::*;
use hastview_tree::{Element as TreeElement, Node};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Tags dropped with their whole subtree inside SVG/MathML
const BLOCKED_TAGS: &[&str] = &["script", "foreignObject", "iframe", "object", "embed"];

/// Renders an SVG or MathML subtree as markup so the webview parses it in its
/// own namespace with case-sensitive names (`viewBox`, `linearGradient`) intact.
#[component]
pub fn ForeignElement(element: TreeElement) -> Element {
    let mut markup = String::new();
    write_markup(&element, &mut markup);

    rsx! {
        span {
            class: "hast-foreign",
            dangerous_inner_html: "{markup}",
        }
    }
}

fn write_markup(element: &TreeElement, out: &mut String) {
    let blocked = BLOCKED_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(&element.tag));
    if blocked || !is_markup_name(&element.tag) {
        log::debug!("Dropping <{}> inside foreign content", element.tag);
        return;
    }

    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attributes {
        if !is_safe_attribute(name, value) {
            log::debug!("Dropping attribute `{name}` on <{}>", element.tag);
            continue;
        }
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    for child in &element.children {
        match child {
            Node::Element(child) => write_markup(child, out),
            Node::Text(text) | Node::Raw(text) => out.push_str(&encode_text(text)),
            Node::Comment(_) | Node::Doctype => {}
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn is_markup_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

fn is_safe_attribute(name: &str, value: &str) -> bool {
    if !is_markup_name(name) || name.to_ascii_lowercase().starts_with("on") {
        return false;
    }
    let is_link = name.eq_ignore_ascii_case("href") || name.eq_ignore_ascii_case("xlink:href");
    !(is_link
        && value
            .trim_start()
            .to_ascii_lowercase()
            .starts_with("javascript:"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_foreign(element: TreeElement) -> String {
        let mut dom = VirtualDom::new_with_props(ForeignElement, ForeignElementProps { element });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_katex_mathml_keeps_structure() {
        let element = TreeElement::new("math").with_child(
            TreeElement::new("semantics")
                .with_child(
                    TreeElement::new("mrow")
                        .with_child(TreeElement::new("mi").with_child(Node::text("x"))),
                )
                .with_child(
                    TreeElement::new("annotation")
                        .with_attribute("encoding", "application/x-tex")
                        .with_child(Node::text("x")),
                ),
        );

        let html = render_foreign(element);

        assert!(html.starts_with(r#"<span class="hast-foreign">"#));
        assert!(html.contains(
            r#"<math><semantics><mrow><mi>x</mi></mrow><annotation encoding="application/x-tex">x</annotation></semantics></math>"#
        ));
    }

    #[test]
    fn test_svg_keeps_case_sensitive_names() {
        let element = TreeElement::new("svg")
            .with_attribute("viewBox", "0 0 20 20")
            .with_child(
                TreeElement::new("linearGradient").with_attribute("gradientUnits", "userSpaceOnUse"),
            )
            .with_child(
                TreeElement::new("path")
                    .with_attribute("d", "M0 0")
                    .with_attribute("fill-rule", "evenodd"),
            );

        let html = render_foreign(element);

        assert!(html.contains(r#"<svg viewBox="0 0 20 20">"#));
        assert!(html.contains(r#"<linearGradient gradientUnits="userSpaceOnUse"></linearGradient>"#));
        assert!(html.contains(r#"<path d="M0 0" fill-rule="evenodd"></path>"#));
    }

    #[test]
    fn test_scripts_and_handlers_are_removed() {
        let element = TreeElement::new("svg")
            .with_attribute("onload", "steal()")
            .with_child(TreeElement::new("script").with_child(Node::text("steal()")))
            .with_child(
                TreeElement::new("a")
                    .with_attribute("href", " JavaScript:steal()")
                    .with_child(Node::text("link")),
            );

        let html = render_foreign(element);

        assert!(!html.contains("steal()"));
        assert!(html.contains("<svg><a>link</a></svg>"));
    }

    #[test]
    fn test_text_and_attribute_values_are_escaped() {
        let element = TreeElement::new("math")
            .with_attribute("alttext", r#"a "quoted" <value>"#)
            .with_child(TreeElement::new("mo").with_child(Node::text("<")));

        let html = render_foreign(element);

        assert!(html.contains("<mo>&lt;</mo>"));
        assert!(!html.contains(r#""quoted""#));
        assert!(!html.contains("<value>"));
    }
}
