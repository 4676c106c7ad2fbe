use serde::Serialize;

use crate::domain::errors::WidgetResult;
use crate::domain::widget::config::to_config_json;
use crate::domain::widget::{AttachSpec, Dimension, MARKET_OVERVIEW_EMBED_URL, WidgetTheme};

/// Overview entries use the embed's compact `s`/`d` key pair
#[derive(Debug, Clone, Serialize)]
pub struct OverviewSymbol {
    pub s: String,
    pub d: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewTab {
    pub title: String,
    pub symbols: Vec<OverviewSymbol>,
    pub original_title: String,
}

impl OverviewTab {
    fn new(title: &str, symbols: &[(&str, &str)]) -> Self {
        Self {
            title: title.to_string(),
            symbols: symbols
                .iter()
                .map(|(s, d)| OverviewSymbol {
                    s: s.to_string(),
                    d: d.to_string(),
                })
                .collect(),
            original_title: title.to_string(),
        }
    }
}

/// Конфигурация обзора рынка: пять групп инструментов и цвета графиков
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverviewConfig {
    pub color_theme: WidgetTheme,
    pub date_range: String,
    pub show_chart: bool,
    pub locale: String,
    pub large_chart_url: String,
    pub is_transparent: bool,
    pub show_symbol_logo: bool,
    pub show_floating_tooltip: bool,
    pub width: Dimension,
    pub height: Dimension,
    pub plot_line_color_growing: String,
    pub plot_line_color_falling: String,
    pub grid_line_color: String,
    pub scale_font_color: String,
    pub below_line_fill_color_growing: String,
    pub below_line_fill_color_falling: String,
    pub below_line_fill_color_growing_bottom: String,
    pub below_line_fill_color_falling_bottom: String,
    pub symbol_active_color: String,
    pub tabs: Vec<OverviewTab>,
}

impl MarketOverviewConfig {
    pub fn new(theme: WidgetTheme) -> Self {
        Self {
            color_theme: theme,
            date_range: "12M".to_string(),
            show_chart: true,
            locale: "en".to_string(),
            large_chart_url: String::new(),
            is_transparent: false,
            show_symbol_logo: true,
            show_floating_tooltip: true,
            width: Dimension::full_width(),
            height: Dimension::Px(600),
            plot_line_color_growing: "rgba(41, 98, 255, 1)".to_string(),
            plot_line_color_falling: "rgba(41, 98, 255, 1)".to_string(),
            grid_line_color: "rgba(240, 243, 250, 0)".to_string(),
            scale_font_color: "rgba(120, 123, 134, 1)".to_string(),
            below_line_fill_color_growing: "rgba(41, 98, 255, 0.12)".to_string(),
            below_line_fill_color_falling: "rgba(41, 98, 255, 0.12)".to_string(),
            below_line_fill_color_growing_bottom: "rgba(41, 98, 255, 0)".to_string(),
            below_line_fill_color_falling_bottom: "rgba(41, 98, 255, 0)".to_string(),
            symbol_active_color: "rgba(41, 98, 255, 0.12)".to_string(),
            tabs: default_overview_tabs(),
        }
    }

    pub fn attach_spec(&self) -> WidgetResult<AttachSpec> {
        Ok(AttachSpec::InlineEmbed {
            script_url: MARKET_OVERVIEW_EMBED_URL,
            config_json: to_config_json(self)?,
        })
    }
}

/// The five instrument groups the overview ships with
pub fn default_overview_tabs() -> Vec<OverviewTab> {
    vec![
        OverviewTab::new(
            "Indices",
            &[
                ("FOREXCOM:SPXUSD", "S&P 500"),
                ("FOREXCOM:NSXUSD", "Nasdaq 100"),
                ("FOREXCOM:DJI", "Dow 30"),
                ("INDEX:NKY", "Nikkei 225"),
                ("INDEX:DEU40", "DAX Index"),
                ("FOREXCOM:UKXGBP", "FTSE 100"),
            ],
        ),
        OverviewTab::new(
            "Commodities",
            &[
                ("CME_MINI:ES1!", "S&P 500"),
                ("CME:6E1!", "Euro"),
                ("COMEX:GC1!", "Gold"),
                ("NYMEX:CL1!", "Crude Oil"),
                ("NYMEX:NG1!", "Natural Gas"),
                ("CBOT:ZC1!", "Corn"),
            ],
        ),
        OverviewTab::new(
            "Bonds",
            &[
                ("CME:GE1!", "Eurodollar"),
                ("CBOT:ZB1!", "T-Bond"),
                ("CBOT:UB1!", "Ultra T-Bond"),
                ("EUREX:FGBL1!", "Euro Bund"),
                ("EUREX:FBTP1!", "Euro BTP"),
                ("EUREX:FGBM1!", "Euro BOBL"),
            ],
        ),
        OverviewTab::new(
            "Forex",
            &[
                ("FX:EURUSD", "EUR/USD"),
                ("FX:GBPUSD", "GBP/USD"),
                ("FX:USDJPY", "USD/JPY"),
                ("FX:USDCHF", "USD/CHF"),
                ("FX:AUDUSD", "AUD/USD"),
                ("FX:USDCAD", "USD/CAD"),
            ],
        ),
        OverviewTab::new(
            "Crypto",
            &[
                ("BINANCE:BTCUSDT", "BTC/USDT"),
                ("BINANCE:ETHUSDT", "ETH/USDT"),
                ("BINANCE:SOLUSDT", "SOL/USDT"),
                ("BINANCE:BNBUSDT", "BNB/USDT"),
                ("BINANCE:ADAUSDT", "ADA/USDT"),
                ("BINANCE:DOGEUSDT", "DOGE/USDT"),
            ],
        ),
    ]
}
