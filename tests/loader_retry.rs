mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::FakeFetcher;
use market_dashboard_wasm::domain::loader::{LoadState, ScriptLoader};

#[test]
fn failed_fetch_returns_to_unloaded_and_next_request_refetches() {
    let fetcher = FakeFetcher::new();
    let loader = ScriptLoader::new(Rc::new(fetcher.clone()));

    let first_ran = Rc::new(Cell::new(false));
    let first_flag = Rc::clone(&first_ran);
    loader.request(move || first_flag.set(true));

    fetcher.settle_err("network down");

    // Failure resets the gate; the queued waiter is abandoned
    assert_eq!(loader.state(), LoadState::Unloaded);
    assert!(!first_ran.get());

    let second_ran = Rc::new(Cell::new(false));
    let second_flag = Rc::clone(&second_ran);
    loader.request(move || second_flag.set(true));

    assert_eq!(fetcher.fetch_count(), 2);
    fetcher.settle_ok();

    assert_eq!(loader.state(), LoadState::Loaded);
    assert!(second_ran.get());
    assert!(!first_ran.get());
}
