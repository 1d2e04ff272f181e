pub mod startup;
pub mod ui;

pub use startup::Startup;
pub use ui::{App, Markdown, SpoilerState};
