use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Value Object - биржевой идентификатор вида `EXCHANGE:TICKER`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Short display name: the part after the first ':', or the full
    /// identifier when no exchange prefix is present.
    /// `BINANCE:BTCUSDT` -> `BTCUSDT`, `SPX` -> `SPX`.
    pub fn display_title(&self) -> &str {
        match self.0.split_once(':') {
            Some((_, ticker)) => ticker,
            None => &self.0,
        }
    }

    /// DOM-id-safe form: every non-alphanumeric character becomes '-'.
    pub fn sanitized(&self) -> String {
        self.0
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect()
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One entry of the symbol picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub symbol: Symbol,
    pub label: &'static str,
}

impl SymbolEntry {
    fn new(symbol: &str, label: &'static str) -> Self {
        Self {
            symbol: Symbol::from(symbol),
            label,
        }
    }
}

/// The fixed list backing the symbol picker
pub fn popular_symbols() -> Vec<SymbolEntry> {
    vec![
        SymbolEntry::new("NASDAQ:AAPL", "Apple Inc."),
        SymbolEntry::new("NASDAQ:MSFT", "Microsoft Corp."),
        SymbolEntry::new("NASDAQ:AMZN", "Amazon.com Inc."),
        SymbolEntry::new("NASDAQ:GOOGL", "Alphabet Inc."),
        SymbolEntry::new("NASDAQ:META", "Meta Platforms Inc."),
        SymbolEntry::new("NYSE:TSLA", "Tesla Inc."),
        SymbolEntry::new("BINANCE:BTCUSDT", "Bitcoin / USD"),
        SymbolEntry::new("BINANCE:ETHUSDT", "Ethereum / USD"),
    ]
}

/// Default instrument set for the ticker tape strip
pub fn default_ticker_symbols() -> Vec<Symbol> {
    [
        "NASDAQ:AAPL",
        "NASDAQ:MSFT",
        "NASDAQ:AMZN",
        "NASDAQ:GOOGL",
        "NASDAQ:META",
        "NYSE:TSLA",
        "FOREXCOM:SPXUSD",
        "FOREXCOM:NSXUSD",
        "BINANCE:BTCUSDT",
        "BINANCE:ETHUSDT",
    ]
    .into_iter()
    .map(Symbol::from)
    .collect()
}
