pub mod config;
pub mod overview;

pub use config::{AdvancedChartConfig, SymbolInfoConfig, TickerSymbol, TickerTapeConfig};
pub use overview::{MarketOverviewConfig, OverviewSymbol, OverviewTab};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Shared script behind the constructor-style chart widget
pub const TV_SCRIPT_URL: &str = "https://s3.tradingview.com/tv.js";

pub const TICKER_TAPE_EMBED_URL: &str =
    "https://s3.tradingview.com/external-embedding/embed-widget-ticker-tape.js";
pub const SYMBOL_INFO_EMBED_URL: &str =
    "https://s3.tradingview.com/external-embedding/embed-widget-symbol-info.js";
pub const MARKET_OVERVIEW_EMBED_URL: &str =
    "https://s3.tradingview.com/external-embedding/embed-widget-market-overview.js";

/// Value Object - цветовая тема виджетов
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WidgetTheme {
    #[strum(serialize = "light")]
    Light,
    #[strum(serialize = "dark")]
    Dark,
}

impl WidgetTheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Chart toolbar background the embed expects per theme
    pub fn toolbar_bg(&self) -> &'static str {
        match self {
            Self::Light => "#f1f3f6",
            Self::Dark => "#2B2B43",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Widget dimension: pixel count or a CSS length like "100%"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(u32),
    Css(String),
}

impl Dimension {
    pub fn full_width() -> Self {
        Self::Css("100%".to_string())
    }
}

/// What a mount request attaches to its container. The two TradingView
/// integration conventions:
/// - ticker/details/overview embed a per-widget script tag whose body is
///   the JSON configuration;
/// - the advanced chart calls `new TradingView.widget(opts)` and needs the
///   shared script loaded first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachSpec {
    InlineEmbed {
        script_url: &'static str,
        config_json: String,
    },
    Constructor {
        container_id: String,
        /// `None` means autosize: the widget node stretches to 100% height
        height_px: Option<u32>,
        config_json: String,
    },
}
