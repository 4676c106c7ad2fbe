use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::errors::WidgetResult;
use crate::domain::logging::{LogComponent, get_logger};

/// Lifecycle of the shared external widget script.
/// `Loaded` is terminal; a failed fetch falls back to `Unloaded` so the
/// next request starts a fresh fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
}

/// Callback delivered when a fetch settles, successfully or not.
pub type FetchSettled = Box<dyn FnOnce(WidgetResult<()>)>;

/// How the script actually gets onto the page. The browser implementation
/// injects a `<script>` tag; tests drive fakes by hand.
pub trait ScriptFetcher {
    fn fetch(&self, on_settled: FetchSettled);
}

type Waiter = Box<dyn FnOnce()>;

struct LoaderInner {
    state: LoadState,
    waiters: Vec<Waiter>,
}

/// Shared script loader gate: the script is fetched at most once per
/// process no matter how many widgets request it. Waiters are a subscriber
/// list woken exactly once when the fetch settles - no polling.
///
/// Single-threaded by construction (`Rc<RefCell<_>>`); wasm runs the whole
/// event loop on one logical thread.
#[derive(Clone)]
pub struct ScriptLoader {
    inner: Rc<RefCell<LoaderInner>>,
    fetcher: Rc<dyn ScriptFetcher>,
}

impl ScriptLoader {
    pub fn new(fetcher: Rc<dyn ScriptFetcher>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LoaderInner {
                state: LoadState::Unloaded,
                waiters: Vec::new(),
            })),
            fetcher,
        }
    }

    pub fn state(&self) -> LoadState {
        self.inner.borrow().state
    }

    /// Run `action` once the script is available.
    ///
    /// - `Loaded`: runs synchronously, right now.
    /// - `Loading`: queued; woken when the in-flight fetch succeeds.
    /// - `Unloaded`: queued and a fetch is started.
    ///
    /// A failed fetch abandons every queued waiter; callers that still
    /// care must request again.
    pub fn request(&self, action: impl FnOnce() + 'static) {
        let begin_fetch = {
            let mut inner = self.inner.borrow_mut();
            match inner.state {
                LoadState::Loaded => {
                    drop(inner);
                    action();
                    return;
                }
                LoadState::Loading => {
                    inner.waiters.push(Box::new(action));
                    false
                }
                LoadState::Unloaded => {
                    inner.state = LoadState::Loading;
                    inner.waiters.push(Box::new(action));
                    true
                }
            }
        };

        if begin_fetch {
            let loader = self.clone();
            // The fetcher may settle synchronously (fakes do); the borrow
            // above is already released.
            self.fetcher
                .fetch(Box::new(move |result| loader.settle(result)));
        }
    }

    fn settle(&self, result: WidgetResult<()>) {
        let ready = {
            let mut inner = self.inner.borrow_mut();
            match result {
                Ok(()) => {
                    inner.state = LoadState::Loaded;
                    std::mem::take(&mut inner.waiters)
                }
                Err(err) => {
                    inner.state = LoadState::Unloaded;
                    let abandoned = inner.waiters.len();
                    inner.waiters.clear();
                    get_logger().error(
                        LogComponent::Domain("ScriptLoader"),
                        &format!(
                            "❌ Script fetch failed ({} waiter(s) abandoned): {}",
                            abandoned, err
                        ),
                    );
                    Vec::new()
                }
            }
        };

        // Waiters run outside the borrow; one of them may call request()
        // again re-entrantly.
        for waiter in ready {
            waiter();
        }
    }
}
