pub mod app;
pub mod components;
pub mod state;

pub use app::{App, FailedApp};
pub use components::*;
pub use state::SpoilerState;
