//! Works out what the viewer window should show before Dioxus launches.

use hastview_config::Config;
use hastview_tree::{Root, read_tree};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum Startup {
    Loaded {
        tree: Root,
        class_name: Option<String>,
        stylesheets: Vec<String>,
    },
    Failed {
        message: String,
        details: String,
    },
}

impl Startup {
    /// Load the tree and extra stylesheets. Tree failures become
    /// [`Startup::Failed`] so the window can show them.
    pub fn load(tree_path: &Path, config: Option<&Config>) -> Self {
        match read_tree(tree_path) {
            Ok(tree) => {
                log::info!(
                    "Loaded tree from {} ({} elements)",
                    tree_path.display(),
                    tree.elements().count()
                );
                let stylesheet_paths = config.map(|c| c.stylesheets.as_slice()).unwrap_or(&[]);
                Startup::Loaded {
                    tree,
                    class_name: config.and_then(|c| c.class_name.clone()),
                    stylesheets: read_stylesheets(stylesheet_paths),
                }
            }
            Err(e) => {
                log::error!("Failed to load tree from {}: {e}", tree_path.display());
                Startup::Failed {
                    message: format!("Could not load {}", tree_path.display()),
                    details: e.to_string(),
                }
            }
        }
    }
}

/// The command line argument wins over the config file
pub fn resolve_tree_path(cli_arg: Option<PathBuf>, config: Option<&Config>) -> Option<PathBuf> {
    cli_arg.or_else(|| config.and_then(|c| c.tree_path.clone()))
}

/// Read stylesheet files in order, skipping any that cannot be read
pub fn read_stylesheets(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| match std::fs::read_to_string(path) {
            Ok(css) => Some(css),
            Err(e) => {
                log::warn!("Skipping stylesheet {}: {e}", path.display());
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_cli_argument_overrides_config() {
        let config = Config {
            tree_path: Some(PathBuf::from("/from/config.json")),
            ..Config::default()
        };

        assert_eq!(
            resolve_tree_path(Some(PathBuf::from("/from/cli.json")), Some(&config)),
            Some(PathBuf::from("/from/cli.json"))
        );
        assert_eq!(
            resolve_tree_path(None, Some(&config)),
            Some(PathBuf::from("/from/config.json"))
        );
        assert_eq!(resolve_tree_path(None, Some(&Config::default())), None);
        assert_eq!(resolve_tree_path(None, None), None);
    }

    #[test]
    fn test_unreadable_stylesheets_are_skipped() {
        let dir = TempDir::new().unwrap();
        let first = write(&dir, "markdown.css", "p { margin: 0; }");
        let second = write(&dir, "prism-theme.css", "code { color: red; }");

        let sheets = read_stylesheets(&[first, dir.path().join("missing.css"), second]);

        assert_eq!(
            sheets,
            vec!["p { margin: 0; }".to_string(), "code { color: red; }".to_string()]
        );
    }

    #[test]
    fn test_load_with_config() {
        let dir = TempDir::new().unwrap();
        let tree = write(
            &dir,
            "post.json",
            r#"{"type":"root","children":[{"type":"element","tagName":"details","children":[]}]}"#,
        );
        let css = write(&dir, "katex.css", ".katex {}");
        let config = Config {
            tree_path: None,
            class_name: Some("prose".to_string()),
            stylesheets: vec![css],
        };

        let startup = Startup::load(&tree, Some(&config));

        match startup {
            Startup::Loaded {
                tree,
                class_name,
                stylesheets,
            } => {
                assert_eq!(tree.elements().count(), 1);
                assert_eq!(class_name.as_deref(), Some("prose"));
                assert_eq!(stylesheets, vec![".katex {}".to_string()]);
            }
            other => panic!("expected a loaded tree, got {other:?}"),
        }
    }

    #[test]
    fn test_load_failure_is_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let tree = write(&dir, "broken.json", r#"{"type":"mystery"}"#);

        let startup = Startup::load(&tree, None);

        match startup {
            Startup::Failed { message, details } => {
                assert!(message.contains("broken.json"));
                assert!(details.contains("mystery"));
            }
            other => panic!("expected a failure, got {other:?}"),
        }
    }
}
