//! Loading a realistic hast document end to end

use hastview_tree::{Node, Root, TagRole, read_tree};
use pretty_assertions::assert_eq;
use std::path::Path;

fn fixture() -> Root {
    read_tree(&Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/post.json")).unwrap()
}

#[test]
fn test_top_level_children_keep_document_order() {
    let root = fixture();

    let kinds: Vec<String> = root
        .children
        .iter()
        .map(|node| match node {
            Node::Element(e) => e.tag.clone(),
            Node::Text(_) => "#text".to_string(),
            Node::Raw(_) => "#raw".to_string(),
            Node::Comment(_) => "#comment".to_string(),
            Node::Doctype => "#doctype".to_string(),
        })
        .collect();

    assert_eq!(
        kinds,
        vec!["h2", "#text", "p", "info-block", "details", "#raw"]
    );
}

#[test]
fn test_overrides_are_found_anywhere_in_tree() {
    let root = fixture();

    let roles: Vec<TagRole> = root
        .elements()
        .map(|e| TagRole::for_tag(&e.tag))
        .filter(|role| role.is_override())
        .collect();

    assert_eq!(
        roles,
        vec![TagRole::Callout, TagRole::Spoiler, TagRole::SpoilerLabel]
    );
}

#[test]
fn test_class_names_and_data_properties_are_normalised() {
    let root = fixture();

    let highlight = root
        .elements()
        .find(|e| e.has_class("gatsby-highlight"))
        .expect("highlight wrapper present");

    assert_eq!(highlight.attribute("data-language"), Some("rust"));
    assert_eq!(highlight.text_content(), "let x = 42;");
}

#[test]
fn test_raw_nodes_are_kept_verbatim() {
    let root = fixture();

    assert_eq!(root.children.last(), Some(&Node::Raw("<hr>".to_string())));
}
