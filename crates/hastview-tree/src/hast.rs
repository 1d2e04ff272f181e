//! Conversion from hast JSON (the syntax tree format produced by rehype) into [`Root`].
//!
//! Only the fields the renderer needs are read. Positional info and plugin
//! `data` are ignored.

use serde_json::{Map, Value};

use crate::{Attributes, Element, Node, Root, TreeError};

pub(crate) fn parse(json: &str) -> Result<Root, TreeError> {
    let value: Value = serde_json::from_str(json)?;
    let object = as_object(&value)?;

    match node_type(object)? {
        "root" => Ok(Root::new(convert_children(object)?)),
        _ => Ok(Root::new(vec![convert_node(&value)?])),
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, TreeError> {
    value
        .as_object()
        .ok_or_else(|| TreeError::NotAnObject(value.to_string()))
}

fn node_type(object: &Map<String, Value>) -> Result<&str, TreeError> {
    object
        .get("type")
        .and_then(Value::as_str)
        .ok_or(TreeError::MissingField {
            node_type: "node",
            field: "type",
        })
}

fn convert_children(object: &Map<String, Value>) -> Result<Vec<Node>, TreeError> {
    match object.get("children").and_then(Value::as_array) {
        Some(children) => children.iter().map(convert_node).collect(),
        None => Ok(Vec::new()),
    }
}

fn string_field(
    object: &Map<String, Value>,
    node_type: &'static str,
    field: &'static str,
) -> Result<String, TreeError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(TreeError::MissingField { node_type, field })
}

fn convert_node(value: &Value) -> Result<Node, TreeError> {
    let object = as_object(value)?;

    match node_type(object)? {
        "element" => {
            let tag = string_field(object, "element", "tagName")?;
            let attributes = match object.get("properties").and_then(Value::as_object) {
                Some(properties) => convert_properties(properties),
                None => Attributes::new(),
            };
            Ok(Node::Element(Element {
                tag,
                attributes,
                children: convert_children(object)?,
            }))
        }
        "text" => Ok(Node::Text(string_field(object, "text", "value")?)),
        "comment" => Ok(Node::Comment(
            object
                .get("value")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        )),
        "doctype" => Ok(Node::Doctype),
        "raw" => Ok(Node::Raw(string_field(object, "raw", "value")?)),
        "root" => Err(TreeError::NestedRoot),
        other => Err(TreeError::UnknownNodeType(other.to_string())),
    }
}

fn convert_properties(properties: &Map<String, Value>) -> Attributes {
    properties
        .iter()
        .filter_map(|(name, value)| Some((attribute_name(name), attribute_value(value)?)))
        .collect()
}

/// SVG attributes whose names are case-sensitive camelCase in markup
const SVG_CAMEL_ATTRIBUTES: &[&str] = &[
    "viewBox",
    "preserveAspectRatio",
    "gradientTransform",
    "gradientUnits",
    "patternContentUnits",
    "patternTransform",
    "patternUnits",
    "markerHeight",
    "markerUnits",
    "markerWidth",
    "pathLength",
    "refX",
    "refY",
    "textLength",
    "lengthAdjust",
    "clipPathUnits",
];

/// SVG presentation attributes hast stores as camelCase but markup spells with dashes
const SVG_DASHED_ATTRIBUTES: &[&str] = &[
    "clipPath",
    "clipRule",
    "dominantBaseline",
    "fillOpacity",
    "fillRule",
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontWeight",
    "markerEnd",
    "markerMid",
    "markerStart",
    "stopColor",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeLinecap",
    "strokeLinejoin",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
    "textAnchor",
    "vectorEffect",
];

/// Map a hast property name onto the HTML, SVG or MathML attribute it came from
pub fn attribute_name(property: &str) -> String {
    match property {
        "className" => "class".to_string(),
        "htmlFor" => "for".to_string(),
        "acceptCharset" => "accept-charset".to_string(),
        "httpEquiv" => "http-equiv".to_string(),
        "xLinkHref" => "xlink:href".to_string(),
        "xmlnsXLink" => "xmlns:xlink".to_string(),
        _ if SVG_CAMEL_ATTRIBUTES.contains(&property) => property.to_string(),
        _ if SVG_DASHED_ATTRIBUTES.contains(&property) => kebab_case(property),
        _ if has_camel_prefix(property, "data") || has_camel_prefix(property, "aria") => {
            kebab_case(property)
        }
        _ => property.to_ascii_lowercase(),
    }
}

fn has_camel_prefix(property: &str, prefix: &str) -> bool {
    property
        .strip_prefix(prefix)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `None` means the attribute is absent
pub fn attribute_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some(String::new()),
        Value::Bool(false) | Value::Null => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(" "),
        ),
        Value::Object(_) => None,
    }
}
