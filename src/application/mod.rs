pub mod mount;

pub use mount::{MountCoordinator, WidgetHost};
