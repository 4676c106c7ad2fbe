mod common;

use std::rc::Rc;

use common::{FakeFetcher, FakeHost};
use market_dashboard_wasm::application::MountCoordinator;
use market_dashboard_wasm::domain::loader::ScriptLoader;
use market_dashboard_wasm::domain::widget::AttachSpec;

/// Switching symbol while the first attachment still waits on the shared
/// script must attach only the newer configuration.
#[test]
fn pending_attachment_is_superseded_by_newer_symbol() {
    let fetcher = FakeFetcher::new();
    let loader = ScriptLoader::new(Rc::new(fetcher.clone()));
    let host = FakeHost::new();
    let coordinator = MountCoordinator::new(loader, Rc::new(host.clone()));

    coordinator.remount(|generation| common::chart_attach_spec("NASDAQ:AAPL", generation));
    coordinator.remount(|generation| common::chart_attach_spec("NASDAQ:TSLA", generation));
    assert_eq!(host.attached_count(), 0);

    fetcher.settle_ok();

    let attached = host.attached();
    assert_eq!(attached.len(), 1);
    match &attached[0] {
        AttachSpec::Constructor { config_json, .. } => {
            assert!(config_json.contains("NASDAQ:TSLA"));
            assert!(!config_json.contains("NASDAQ:AAPL"));
        }
        other => panic!("expected constructor spec, got {:?}", other),
    }
}
