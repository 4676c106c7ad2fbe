pub mod errors;
pub mod loader;
pub mod logging;
pub mod symbol;
pub mod widget;
