// Load orchestration and the app event loop behind the dashboard TUI.

pub mod app;
pub mod load;
pub mod protocol;
