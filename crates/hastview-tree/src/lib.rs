pub mod error;
pub mod hast;
pub mod io;
pub mod node;
pub mod role;

// Re-export key types for easier usage
pub use error::TreeError;
pub use io::read_tree;
pub use node::{Attributes, Element, Elements, Node, Root};
pub use role::TagRole;
