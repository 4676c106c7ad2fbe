#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use market_dashboard_wasm::application::WidgetHost;
use market_dashboard_wasm::domain::errors::{WidgetError, WidgetResult};
use market_dashboard_wasm::domain::loader::{FetchSettled, ScriptFetcher};
use market_dashboard_wasm::domain::symbol::Symbol;
use market_dashboard_wasm::domain::widget::{AdvancedChartConfig, AttachSpec, WidgetTheme};

/// Script fetcher driven by hand from tests
#[derive(Clone, Default)]
pub struct FakeFetcher {
    inner: Rc<RefCell<FakeFetcherInner>>,
}

#[derive(Default)]
struct FakeFetcherInner {
    fetches: u32,
    pending: Vec<FetchSettled>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_count(&self) -> u32 {
        self.inner.borrow().fetches
    }

    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    pub fn settle_ok(&self) {
        for callback in self.take_pending() {
            callback(Ok(()));
        }
    }

    pub fn settle_err(&self, message: &str) {
        for callback in self.take_pending() {
            callback(Err(WidgetError::ScriptLoad(message.to_string())));
        }
    }

    fn take_pending(&self) -> Vec<FetchSettled> {
        std::mem::take(&mut self.inner.borrow_mut().pending)
    }
}

impl ScriptFetcher for FakeFetcher {
    fn fetch(&self, on_settled: FetchSettled) {
        let mut inner = self.inner.borrow_mut();
        inner.fetches += 1;
        inner.pending.push(on_settled);
    }
}

/// In-memory widget container: models the children the DOM host would hold
#[derive(Clone, Default)]
pub struct FakeHost {
    inner: Rc<RefCell<FakeHostInner>>,
}

#[derive(Default)]
struct FakeHostInner {
    prepared: Option<AttachSpec>,
    attached: Vec<AttachSpec>,
    clears: u32,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_count(&self) -> u32 {
        self.inner.borrow().clears
    }

    pub fn attached(&self) -> Vec<AttachSpec> {
        self.inner.borrow().attached.clone()
    }

    pub fn attached_count(&self) -> usize {
        self.inner.borrow().attached.len()
    }
}

impl WidgetHost for FakeHost {
    fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.prepared = None;
        inner.attached.clear();
        inner.clears += 1;
    }

    fn prepare(&self, spec: &AttachSpec) -> WidgetResult<()> {
        self.inner.borrow_mut().prepared = Some(spec.clone());
        Ok(())
    }

    fn attach(&self, spec: &AttachSpec) -> WidgetResult<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.prepared.as_ref() != Some(spec) {
            return Err(WidgetError::Attach(
                "attach without a matching prepared node".to_string(),
            ));
        }
        inner.attached.push(spec.clone());
        Ok(())
    }
}

/// Constructor-style chart spec the way the chart component builds it
pub fn chart_attach_spec(symbol: &str, generation: u64) -> WidgetResult<AttachSpec> {
    let symbol = Symbol::from(symbol);
    let container_id = AdvancedChartConfig::container_id(&symbol, generation);
    AdvancedChartConfig::new(&symbol, WidgetTheme::Light, container_id, true, "D", true)
        .attach_spec(None)
}
