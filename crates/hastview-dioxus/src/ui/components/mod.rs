pub mod error_screen;
pub mod foreign_element;
pub mod generic_element;
pub mod info_block;
pub mod markdown;
pub mod render_node;
pub mod spoiler;
pub mod spoiler_label;

pub use error_screen::*;
pub use foreign_element::*;
pub use generic_element::*;
pub use info_block::*;
pub use markdown::*;
pub use render_node::*;
pub use spoiler::*;
pub use spoiler_label::*;
