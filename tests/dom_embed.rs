#![cfg(target_arch = "wasm32")]

use leptos::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use market_dashboard_wasm::application::WidgetHost;
use market_dashboard_wasm::domain::symbol::Symbol;
use market_dashboard_wasm::domain::widget::{SymbolInfoConfig, WidgetTheme};
use market_dashboard_wasm::infrastructure::embed::DomWidgetHost;

#[wasm_bindgen_test]
fn inline_embed_attaches_script_into_fresh_node() {
    mount_to_body(|| view! { <div id="embed-test-host"></div> });

    let host = DomWidgetHost::new("embed-test-host");
    let config = SymbolInfoConfig::new(&Symbol::from("NASDAQ:AAPL"), WidgetTheme::Light);
    let spec = config.attach_spec().expect("spec builds");

    host.clear();
    host.prepare(&spec).expect("prepare succeeds");
    host.attach(&spec).expect("attach succeeds");

    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("embed-test-host"))
        .expect("container mounted");
    let widget_node = container.first_element_child().expect("widget node exists");
    assert_eq!(
        widget_node.class_name(),
        "tradingview-widget-container__widget"
    );

    let script = widget_node.first_element_child().expect("script tag exists");
    assert_eq!(script.tag_name(), "SCRIPT");
    assert!(
        script
            .get_attribute("src")
            .expect("script has src")
            .contains("embed-widget-symbol-info")
    );
    assert!(script.inner_html().contains("NASDAQ:AAPL"));

    // A second prepare after clear leaves exactly one widget node
    host.clear();
    host.prepare(&spec).expect("prepare succeeds");
    assert_eq!(container.child_element_count(), 1);
}
