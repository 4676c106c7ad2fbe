mod common;

use std::rc::Rc;

use common::{FakeFetcher, FakeHost};
use market_dashboard_wasm::application::MountCoordinator;
use market_dashboard_wasm::domain::loader::ScriptLoader;
use market_dashboard_wasm::domain::symbol::Symbol;
use market_dashboard_wasm::domain::widget::{AttachSpec, SymbolInfoConfig, WidgetTheme};

fn coordinator_with_host() -> (MountCoordinator, FakeHost, FakeFetcher) {
    let fetcher = FakeFetcher::new();
    let loader = ScriptLoader::new(Rc::new(fetcher.clone()));
    let host = FakeHost::new();
    let coordinator = MountCoordinator::new(loader, Rc::new(host.clone()));
    (coordinator, host, fetcher)
}

#[test]
fn embed_remount_keeps_exactly_one_attachment() {
    let (coordinator, host, _fetcher) = coordinator_with_host();
    let symbol = Symbol::from("NASDAQ:AAPL");

    let light = SymbolInfoConfig::new(&symbol, WidgetTheme::Light);
    coordinator.remount(|_generation| light.attach_spec());
    assert_eq!(host.attached_count(), 1);

    let dark = SymbolInfoConfig::new(&symbol, WidgetTheme::Dark);
    coordinator.remount(|_generation| dark.attach_spec());

    let attached = host.attached();
    assert_eq!(attached.len(), 1);
    match &attached[0] {
        AttachSpec::InlineEmbed { config_json, .. } => {
            assert!(config_json.contains("\"colorTheme\":\"dark\""));
        }
        other => panic!("expected inline embed, got {:?}", other),
    }
}

#[test]
fn chart_remount_after_load_keeps_exactly_one_attachment() {
    let (coordinator, host, fetcher) = coordinator_with_host();

    coordinator.remount(|generation| common::chart_attach_spec("NASDAQ:AAPL", generation));
    fetcher.settle_ok();
    assert_eq!(host.attached_count(), 1);

    // Script already loaded: the next remount attaches synchronously
    coordinator.remount(|generation| common::chart_attach_spec("NASDAQ:MSFT", generation));

    let attached = host.attached();
    assert_eq!(attached.len(), 1);
    match &attached[0] {
        AttachSpec::Constructor { config_json, .. } => {
            assert!(config_json.contains("NASDAQ:MSFT"));
        }
        other => panic!("expected constructor spec, got {:?}", other),
    }
}
