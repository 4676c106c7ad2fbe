mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::FakeFetcher;
use market_dashboard_wasm::domain::loader::{LoadState, ScriptLoader};

#[test]
fn fetches_once_across_concurrent_requests() {
    let fetcher = FakeFetcher::new();
    let loader = ScriptLoader::new(Rc::new(fetcher.clone()));

    let ran = Rc::new(Cell::new(0));
    for _ in 0..3 {
        let ran = Rc::clone(&ran);
        loader.request(move || ran.set(ran.get() + 1));
    }

    assert_eq!(loader.state(), LoadState::Loading);
    assert_eq!(fetcher.fetch_count(), 1);
    assert_eq!(ran.get(), 0);

    fetcher.settle_ok();

    assert_eq!(loader.state(), LoadState::Loaded);
    assert_eq!(ran.get(), 3);
}

#[test]
fn loaded_requests_run_synchronously_without_refetch() {
    let fetcher = FakeFetcher::new();
    let loader = ScriptLoader::new(Rc::new(fetcher.clone()));

    loader.request(|| {});
    fetcher.settle_ok();

    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    loader.request(move || flag.set(true));

    assert!(ran.get());
    assert_eq!(fetcher.fetch_count(), 1);
}
