use std::cell::Cell;
use std::rc::Rc;

use crate::domain::errors::WidgetResult;
use crate::domain::loader::ScriptLoader;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::widget::AttachSpec;

/// DOM side of a widget mount, kept behind a trait so the coordinator is
/// testable without a browser.
pub trait WidgetHost {
    /// Remove every child of the container.
    fn clear(&self);
    /// Synchronously put a fresh, empty widget node into the container.
    fn prepare(&self, spec: &AttachSpec) -> WidgetResult<()>;
    /// Attach the external widget to the prepared node.
    fn attach(&self, spec: &AttachSpec) -> WidgetResult<()>;
}

/// Widget mount/remount coordinator.
///
/// Guarantees exactly one live widget per container: every remount clears
/// the container, prepares a fresh node and attaches the new
/// configuration. Constructor-style widgets wait on the shared
/// [`ScriptLoader`]; the queued attachment carries the mount generation
/// and becomes a no-op once a newer remount (or unmount) supersedes it,
/// so a slow first attachment can never clobber a faster second one.
///
/// Attach and load failures are logged and swallowed - the widgets are
/// decorative, nothing else in the UI reacts to them.
pub struct MountCoordinator {
    generation: Rc<Cell<u64>>,
    loader: ScriptLoader,
    host: Rc<dyn WidgetHost>,
}

impl Clone for MountCoordinator {
    fn clone(&self) -> Self {
        Self {
            generation: Rc::clone(&self.generation),
            loader: self.loader.clone(),
            host: Rc::clone(&self.host),
        }
    }
}

impl MountCoordinator {
    pub fn new(loader: ScriptLoader, host: Rc<dyn WidgetHost>) -> Self {
        Self {
            generation: Rc::new(Cell::new(0)),
            loader,
            host,
        }
    }

    /// Current mount generation; bumped by every remount and unmount.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Tear down whatever is mounted and attach the configuration `build`
    /// produces for the new generation.
    pub fn remount(&self, build: impl FnOnce(u64) -> WidgetResult<AttachSpec>) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.host.clear();

        let spec = match build(generation) {
            Ok(spec) => spec,
            Err(err) => {
                get_logger().error(
                    LogComponent::Application("MountCoordinator"),
                    &format!("❌ Widget configuration failed: {}", err),
                );
                return;
            }
        };

        if let Err(err) = self.host.prepare(&spec) {
            get_logger().error(
                LogComponent::Application("MountCoordinator"),
                &format!("❌ Container preparation failed: {}", err),
            );
            return;
        }

        if matches!(spec, AttachSpec::InlineEmbed { .. }) {
            // Per-widget embed scripts attach immediately
            self.finish_attach(&spec);
        } else {
            let coordinator = self.clone();
            self.loader.request(move || {
                if coordinator.generation.get() != generation {
                    // Superseded while the script was loading
                    get_logger().debug(
                        LogComponent::Application("MountCoordinator"),
                        &format!("Discarding stale attachment (generation {})", generation),
                    );
                    return;
                }
                coordinator.finish_attach(&spec);
            });
        }
    }

    /// Clear the container and invalidate any pending attachment. The
    /// shared script itself stays for the process lifetime.
    pub fn unmount(&self) {
        self.generation.set(self.generation.get() + 1);
        self.host.clear();
    }

    fn finish_attach(&self, spec: &AttachSpec) {
        if let Err(err) = self.host.attach(spec) {
            get_logger().error(
                LogComponent::Application("MountCoordinator"),
                &format!("❌ Widget attachment failed: {}", err),
            );
        }
    }
}
