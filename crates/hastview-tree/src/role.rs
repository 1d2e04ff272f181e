/// How the renderer treats an element, decided purely by its tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRole {
    /// Collapsible block (`details`)
    Spoiler,
    /// Clickable heading of a spoiler (`summary`)
    SpoilerLabel,
    /// Informational callout (`info-block`)
    Callout,
    /// HTML void element, never has children
    Void,
    /// Root of an embedded SVG or MathML subtree
    Foreign,
    Default,
}

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl TagRole {
    pub fn for_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("details") {
            TagRole::Spoiler
        } else if tag.eq_ignore_ascii_case("summary") {
            TagRole::SpoilerLabel
        } else if tag.eq_ignore_ascii_case("info-block") {
            TagRole::Callout
        } else if VOID_TAGS.iter().any(|v| tag.eq_ignore_ascii_case(v)) {
            TagRole::Void
        } else if tag.eq_ignore_ascii_case("svg") || tag.eq_ignore_ascii_case("math") {
            TagRole::Foreign
        } else {
            TagRole::Default
        }
    }

    /// Whether the tag is replaced by a custom component
    pub fn is_override(self) -> bool {
        matches!(
            self,
            TagRole::Spoiler | TagRole::SpoilerLabel | TagRole::Callout
        )
    }
}
