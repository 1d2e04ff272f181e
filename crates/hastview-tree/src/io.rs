use std::fs;
use std::path::Path;

use crate::{Root, TreeError};

/// Read a hast JSON file from disk
pub fn read_tree(path: &Path) -> Result<Root, TreeError> {
    let content = fs::read_to_string(path).map_err(|source| TreeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Root::from_json(&content)
}
