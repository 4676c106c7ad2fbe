pub mod widgets;

pub use widgets::{AdvancedChart, MarketOverview, SymbolDetails, TickerTape};
