use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Failed to read tree file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a JSON object for a tree node, found {0}")]
    NotAnObject(String),
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),
    #[error("Node of type `{node_type}` is missing required field `{field}`")]
    MissingField {
        node_type: &'static str,
        field: &'static str,
    },
    #[error("A `root` node may only appear at the top of the tree")]
    NestedRoot,
}
