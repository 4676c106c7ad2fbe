use market_dashboard_wasm::domain::symbol::Symbol;
use market_dashboard_wasm::domain::widget::{TickerTapeConfig, WidgetTheme};
use quickcheck_macros::quickcheck;

#[test]
fn title_is_substring_after_first_colon() {
    assert_eq!(Symbol::from("BINANCE:BTCUSDT").display_title(), "BTCUSDT");
    assert_eq!(Symbol::from("NASDAQ:AAPL").display_title(), "AAPL");
    assert_eq!(Symbol::from("SPX").display_title(), "SPX");
}

#[test]
fn ticker_config_titles_match_display_titles() {
    let symbols = [
        Symbol::from("NASDAQ:AAPL"),
        Symbol::from("FOREXCOM:SPXUSD"),
        Symbol::from("SPX"),
    ];
    let config = TickerTapeConfig::new(&symbols, WidgetTheme::Light);

    let titles: Vec<&str> = config.symbols.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["AAPL", "SPXUSD", "SPX"]);

    let pro_names: Vec<&str> = config.symbols.iter().map(|s| s.pro_name.as_str()).collect();
    assert_eq!(pro_names, vec!["NASDAQ:AAPL", "FOREXCOM:SPXUSD", "SPX"]);
}

#[quickcheck]
fn title_strips_exactly_the_exchange_prefix(ticker: String) -> bool {
    let symbol = Symbol::from(format!("NASDAQ:{}", ticker));
    symbol.display_title() == ticker
}
