use crate::ui::components::RenderChildren;
use dioxus::dioxus_core::Attribute;
use dioxus::prelude::*;
use hastview_tree::Element as TreeElement;
use std::collections::HashSet;
use std::sync::{LazyLock, Mutex, PoisonError};

const ALLOWED_ATTRIBUTES: &[&str] = &[
    "abbr", "align", "alt", "autoplay", "checked", "cite", "class", "colspan", "controls",
    "datetime", "dir", "disabled", "download", "for", "headers", "height", "hidden", "href",
    "hreflang", "id", "lang", "loading", "loop", "muted", "name", "open", "poster", "rel",
    "reversed", "role", "rowspan", "scope", "sizes", "span", "src", "srcset", "start", "style",
    "tabindex", "target", "title", "type", "value", "width",
];

/// Default rendering for any tag without a custom component.
///
/// Known HTML tags keep their tag, attributes and children. Anything else
/// becomes a `div.hast-unknown` tagged with the original name.
#[component]
pub fn GenericElement(element: TreeElement) -> Element {
    let attributes = html_attributes(&element);
    let nodes = element.children;

    match element.tag.to_ascii_lowercase().as_str() {
        // Void elements
        "br" => rsx! { br { ..attributes } },
        "hr" => rsx! { hr { ..attributes } },
        "img" => rsx! { img { ..attributes } },
        "input" => rsx! { input { ..attributes } },
        "col" => rsx! { col { ..attributes } },
        "source" => rsx! { source { ..attributes } },
        "wbr" => rsx! { wbr { ..attributes } },
        "area" => rsx! { area { ..attributes } },
        "base" => rsx! { base { ..attributes } },
        "embed" => rsx! { embed { ..attributes } },
        "link" => rsx! { link { ..attributes } },
        "meta" => rsx! { meta { ..attributes } },
        "track" => rsx! { track { ..attributes } },

        // Sections and grouping
        "div" => rsx! { div { ..attributes, RenderChildren { nodes } } },
        "p" => rsx! { p { ..attributes, RenderChildren { nodes } } },
        "h1" => rsx! { h1 { ..attributes, RenderChildren { nodes } } },
        "h2" => rsx! { h2 { ..attributes, RenderChildren { nodes } } },
        "h3" => rsx! { h3 { ..attributes, RenderChildren { nodes } } },
        "h4" => rsx! { h4 { ..attributes, RenderChildren { nodes } } },
        "h5" => rsx! { h5 { ..attributes, RenderChildren { nodes } } },
        "h6" => rsx! { h6 { ..attributes, RenderChildren { nodes } } },
        "blockquote" => rsx! { blockquote { ..attributes, RenderChildren { nodes } } },
        "pre" => rsx! { pre { ..attributes, RenderChildren { nodes } } },
        "ul" => rsx! { ul { ..attributes, RenderChildren { nodes } } },
        "ol" => rsx! { ol { ..attributes, RenderChildren { nodes } } },
        "li" => rsx! { li { ..attributes, RenderChildren { nodes } } },
        "dl" => rsx! { dl { ..attributes, RenderChildren { nodes } } },
        "dt" => rsx! { dt { ..attributes, RenderChildren { nodes } } },
        "dd" => rsx! { dd { ..attributes, RenderChildren { nodes } } },
        "figure" => rsx! { figure { ..attributes, RenderChildren { nodes } } },
        "figcaption" => rsx! { figcaption { ..attributes, RenderChildren { nodes } } },
        "section" => rsx! { section { ..attributes, RenderChildren { nodes } } },
        "article" => rsx! { article { ..attributes, RenderChildren { nodes } } },
        "aside" => rsx! { aside { ..attributes, RenderChildren { nodes } } },
        "header" => rsx! { header { ..attributes, RenderChildren { nodes } } },
        "footer" => rsx! { footer { ..attributes, RenderChildren { nodes } } },
        "nav" => rsx! { nav { ..attributes, RenderChildren { nodes } } },

        // Text level
        "a" => rsx! { a { ..attributes, RenderChildren { nodes } } },
        "span" => rsx! { span { ..attributes, RenderChildren { nodes } } },
        "em" => rsx! { em { ..attributes, RenderChildren { nodes } } },
        "strong" => rsx! { strong { ..attributes, RenderChildren { nodes } } },
        "b" => rsx! { b { ..attributes, RenderChildren { nodes } } },
        "i" => rsx! { i { ..attributes, RenderChildren { nodes } } },
        "u" => rsx! { u { ..attributes, RenderChildren { nodes } } },
        "s" => rsx! { s { ..attributes, RenderChildren { nodes } } },
        "del" => rsx! { del { ..attributes, RenderChildren { nodes } } },
        "ins" => rsx! { ins { ..attributes, RenderChildren { nodes } } },
        "mark" => rsx! { mark { ..attributes, RenderChildren { nodes } } },
        "small" => rsx! { small { ..attributes, RenderChildren { nodes } } },
        "sub" => rsx! { sub { ..attributes, RenderChildren { nodes } } },
        "sup" => rsx! { sup { ..attributes, RenderChildren { nodes } } },
        "code" => rsx! { code { ..attributes, RenderChildren { nodes } } },
        "kbd" => rsx! { kbd { ..attributes, RenderChildren { nodes } } },
        "samp" => rsx! { samp { ..attributes, RenderChildren { nodes } } },
        "var" => rsx! { var { ..attributes, RenderChildren { nodes } } },
        "abbr" => rsx! { abbr { ..attributes, RenderChildren { nodes } } },
        "cite" => rsx! { cite { ..attributes, RenderChildren { nodes } } },
        "q" => rsx! { q { ..attributes, RenderChildren { nodes } } },
        "time" => rsx! { time { ..attributes, RenderChildren { nodes } } },
        "label" => rsx! { label { ..attributes, RenderChildren { nodes } } },

        // Tables
        "table" => rsx! { table { ..attributes, RenderChildren { nodes } } },
        "caption" => rsx! { caption { ..attributes, RenderChildren { nodes } } },
        "colgroup" => rsx! { colgroup { ..attributes, RenderChildren { nodes } } },
        "thead" => rsx! { thead { ..attributes, RenderChildren { nodes } } },
        "tbody" => rsx! { tbody { ..attributes, RenderChildren { nodes } } },
        "tfoot" => rsx! { tfoot { ..attributes, RenderChildren { nodes } } },
        "tr" => rsx! { tr { ..attributes, RenderChildren { nodes } } },
        "th" => rsx! { th { ..attributes, RenderChildren { nodes } } },
        "td" => rsx! { td { ..attributes, RenderChildren { nodes } } },

        // Media
        "video" => rsx! { video { ..attributes, RenderChildren { nodes } } },
        "audio" => rsx! { audio { ..attributes, RenderChildren { nodes } } },

        _ => {
            log::debug!("Rendering unknown tag <{}> as a generic container", element.tag);
            let class = match element.attributes.get("class") {
                Some(extra) => format!("hast-unknown {extra}"),
                None => "hast-unknown".to_string(),
            };
            let attributes: Vec<Attribute> = attributes
                .into_iter()
                .filter(|attribute| attribute.name != "class")
                .collect();
            rsx! {
                div {
                    class: "{class}",
                    "data-tag": "{element.tag}",
                    ..attributes,
                    RenderChildren { nodes }
                }
            }
        }
    }
}

/// Converts tree attributes into Dioxus attributes, dropping anything not
/// on the allow-list or outside the `data-*`/`aria-*` families.
fn html_attributes(element: &TreeElement) -> Vec<Attribute> {
    element
        .attributes
        .iter()
        .filter_map(|(name, value)| match attribute_name(name) {
            Some(name) => Some(Attribute::new(name, value.clone(), None, false)),
            None => {
                log::debug!("Dropping attribute `{name}` on <{}>", element.tag);
                None
            }
        })
        .collect()
}

fn attribute_name(name: &str) -> Option<&'static str> {
    if let Some(allowed) = ALLOWED_ATTRIBUTES
        .iter()
        .copied()
        .find(|allowed| *allowed == name)
    {
        return Some(allowed);
    }
    if is_custom_attribute(name) {
        let mut names = CUSTOM_NAMES.lock().unwrap_or_else(PoisonError::into_inner);
        return names.intern(name);
    }
    None
}

fn is_custom_attribute(name: &str) -> bool {
    let suffix = name
        .strip_prefix("data-")
        .or_else(|| name.strip_prefix("aria-"));
    match suffix {
        Some(suffix) => {
            !suffix.is_empty()
                && suffix.len() <= 64
                && suffix
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        }
        None => false,
    }
}

/// Upper bound on distinct `data-*`/`aria-*` names kept for the process lifetime
const MAX_CUSTOM_NAMES: usize = 1024;

static CUSTOM_NAMES: LazyLock<Mutex<NameInterner>> =
    LazyLock::new(|| Mutex::new(NameInterner::new(MAX_CUSTOM_NAMES)));

/// Dioxus attribute names are `&'static str`. Each distinct custom name is
/// leaked once and reused afterwards; once `capacity` names are held, new
/// ones are refused.
struct NameInterner {
    names: HashSet<&'static str>,
    capacity: usize,
}

impl NameInterner {
    fn new(capacity: usize) -> Self {
        Self {
            names: HashSet::new(),
            capacity,
        }
    }

    fn intern(&mut self, name: &str) -> Option<&'static str> {
        if let Some(existing) = self.names.get(name) {
            return Some(*existing);
        }
        if self.names.len() >= self.capacity {
            log::debug!("Attribute name table full, dropping `{name}`");
            return None;
        }
        let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
        self.names.insert(leaked);
        Some(leaked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use hastview_tree::Node;
    use rstest::rstest;

    fn render_element(element: TreeElement) -> String {
        let mut dom = VirtualDom::new_with_props(GenericElement, GenericElementProps { element });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[rstest]
    #[case("class", true)]
    #[case("href", true)]
    #[case("data-language", true)]
    #[case("aria-hidden", true)]
    #[case("data-", false)]
    #[case("data-Bad", false)]
    #[case("onclick", false)]
    #[case("onload", false)]
    #[case("srcdoc", false)]
    fn test_attribute_allow_list(#[case] name: &str, #[case] allowed: bool) {
        assert_eq!(attribute_name(name).is_some(), allowed);
    }

    #[test]
    fn test_intern_reuses_names() {
        let mut interner = NameInterner::new(4);

        let first = interner.intern("data-interned-once").unwrap();
        let second = interner.intern("data-interned-once").unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(interner.names.len(), 1);
    }

    #[test]
    fn test_intern_refuses_new_names_when_full() {
        let mut interner = NameInterner::new(2);

        assert!(interner.intern("data-a").is_some());
        assert!(interner.intern("data-b").is_some());
        assert_eq!(interner.intern("data-c"), None);
        assert_eq!(interner.intern("data-a"), Some("data-a"));
        assert_eq!(interner.names.len(), 2);
    }

    #[rstest]
    #[case("area")]
    #[case("base")]
    #[case("br")]
    #[case("col")]
    #[case("embed")]
    #[case("hr")]
    #[case("img")]
    #[case("input")]
    #[case("link")]
    #[case("meta")]
    #[case("source")]
    #[case("track")]
    #[case("wbr")]
    fn test_void_tags_render_as_themselves(#[case] tag: &str) {
        let element = TreeElement::new(tag).with_attribute("title", "x");

        let html = render_element(element);

        assert!(html.starts_with(&format!("<{tag}")));
        assert!(html.contains(r#"title="x""#));
        assert!(!html.contains("hast-unknown"));
    }

    #[test]
    fn test_known_tag_keeps_tag_attributes_and_children() {
        let element = TreeElement::new("a")
            .with_attribute("href", "https://example.com")
            .with_child(TreeElement::new("em").with_child(Node::text("link")));

        let html = render_element(element);

        assert!(html.starts_with(r#"<a href="https://example.com""#));
        assert!(html.ends_with("<em>link</em></a>"));
    }

    #[test]
    fn test_disallowed_attributes_are_dropped() {
        let element = TreeElement::new("p")
            .with_attribute("onclick", "steal()")
            .with_attribute("class", "lead")
            .with_child(Node::text("text"));

        let html = render_element(element);

        assert!(!html.contains("onclick"));
        assert!(html.contains(r#"class="lead""#));
    }

    #[test]
    fn test_void_element_has_no_children() {
        let element = TreeElement::new("img")
            .with_attribute("src", "/cat.png")
            .with_attribute("alt", "A cat")
            .with_child(Node::text("ignored"));

        let html = render_element(element);

        assert!(html.starts_with("<img"));
        assert!(html.contains(r#"src="/cat.png""#));
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn test_unknown_tag_becomes_generic_container() {
        let element = TreeElement::new("my-widget")
            .with_attribute("data-size", "large")
            .with_child(TreeElement::new("p").with_child(Node::text("inside")));

        let html = render_element(element);

        assert!(html.starts_with("<div"));
        assert!(html.contains(r#"class="hast-unknown""#));
        assert_eq!(html.matches("class=").count(), 1);
        assert!(html.contains(r#"data-tag="my-widget""#));
        assert!(html.contains(r#"data-size="large""#));
        assert!(html.contains("<p>inside</p>"));
        assert!(!html.contains("<my-widget"));
    }

    #[test]
    fn test_unknown_tag_merges_class() {
        let element = TreeElement::new("x-note").with_attribute("class", "warning");

        let html = render_element(element);

        assert!(html.contains(r#"class="hast-unknown warning""#));
        assert_eq!(html.matches("class=").count(), 1);
    }

    #[test]
    fn test_tag_match_ignores_case() {
        let element = TreeElement::new("STRONG").with_child(Node::text("loud"));

        assert_eq!(render_element(element), "<strong>loud</strong>");
    }
}
