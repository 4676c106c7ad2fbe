use market_dashboard_wasm::domain::widget::{MarketOverviewConfig, WidgetTheme};
use serde_json::{Value, json};

#[test]
fn overview_ships_five_tab_groups_with_six_symbols_each() {
    let config = MarketOverviewConfig::new(WidgetTheme::Light);

    let titles: Vec<&str> = config.tabs.iter().map(|tab| tab.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Indices", "Commodities", "Bonds", "Forex", "Crypto"]
    );
    for tab in &config.tabs {
        assert_eq!(tab.symbols.len(), 6);
        assert_eq!(tab.original_title, tab.title);
    }
}

#[test]
fn overview_serializes_embed_key_names() {
    let config = MarketOverviewConfig::new(WidgetTheme::Dark);
    let value: Value = serde_json::to_value(&config).expect("config serializes");

    assert_eq!(value["colorTheme"], json!("dark"));
    assert_eq!(value["dateRange"], json!("12M"));
    assert_eq!(value["showChart"], json!(true));
    assert_eq!(value["showFloatingTooltip"], json!(true));
    assert_eq!(value["width"], json!("100%"));
    assert_eq!(value["height"], json!(600));
    assert_eq!(value["plotLineColorGrowing"], json!("rgba(41, 98, 255, 1)"));
    assert_eq!(value["symbolActiveColor"], json!("rgba(41, 98, 255, 0.12)"));

    assert_eq!(value["tabs"][0]["title"], json!("Indices"));
    assert_eq!(value["tabs"][0]["originalTitle"], json!("Indices"));
    assert_eq!(value["tabs"][0]["symbols"][0]["s"], json!("FOREXCOM:SPXUSD"));
    assert_eq!(value["tabs"][0]["symbols"][0]["d"], json!("S&P 500"));
    assert_eq!(value["tabs"][4]["symbols"][0]["s"], json!("BINANCE:BTCUSDT"));
    assert_eq!(value["tabs"][4]["symbols"][0]["d"], json!("BTC/USDT"));
}
