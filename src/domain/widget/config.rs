use serde::Serialize;

use crate::domain::errors::{WidgetError, WidgetResult};
use crate::domain::symbol::Symbol;
use crate::domain::widget::{
    AttachSpec, Dimension, SYMBOL_INFO_EMBED_URL, TICKER_TAPE_EMBED_URL, WidgetTheme,
};

/// Serialized exactly as the ticker tape embed expects: `proName`/`title`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerSymbol {
    pub pro_name: String,
    pub title: String,
}

/// Конфигурация ленты тикеров (write-only, уходит в embed как JSON)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerTapeConfig {
    pub symbols: Vec<TickerSymbol>,
    pub show_symbol_logo: bool,
    pub color_theme: WidgetTheme,
    pub is_transparent: bool,
    pub display_mode: String,
    pub locale: String,
}

impl TickerTapeConfig {
    pub fn new(symbols: &[Symbol], theme: WidgetTheme) -> Self {
        Self {
            symbols: symbols
                .iter()
                .map(|symbol| TickerSymbol {
                    pro_name: symbol.value().to_string(),
                    title: symbol.display_title().to_string(),
                })
                .collect(),
            show_symbol_logo: true,
            color_theme: theme,
            is_transparent: false,
            display_mode: "adaptive".to_string(),
            locale: "en".to_string(),
        }
    }

    pub fn attach_spec(&self) -> WidgetResult<AttachSpec> {
        Ok(AttachSpec::InlineEmbed {
            script_url: TICKER_TAPE_EMBED_URL,
            config_json: to_config_json(self)?,
        })
    }
}

/// Конфигурация панели с деталями инструмента
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfoConfig {
    pub symbol: String,
    pub width: Dimension,
    pub height: Dimension,
    pub color_theme: WidgetTheme,
    pub is_transparent: bool,
    pub locale: String,
    pub large_chart_url: String,
    pub show_volume: bool,
    #[serde(rename = "showMA")]
    pub show_ma: bool,
    pub hide_date_ranges: bool,
    pub hide_market_status: bool,
    pub hide_symbol_logo: bool,
}

impl SymbolInfoConfig {
    pub fn new(symbol: &Symbol, theme: WidgetTheme) -> Self {
        Self {
            symbol: symbol.value().to_string(),
            width: Dimension::full_width(),
            height: Dimension::Px(400),
            color_theme: theme,
            is_transparent: false,
            locale: "en".to_string(),
            large_chart_url: String::new(),
            show_volume: true,
            show_ma: true,
            hide_date_ranges: false,
            hide_market_status: false,
            hide_symbol_logo: false,
        }
    }

    pub fn attach_spec(&self) -> WidgetResult<AttachSpec> {
        Ok(AttachSpec::InlineEmbed {
            script_url: SYMBOL_INFO_EMBED_URL,
            config_json: to_config_json(self)?,
        })
    }
}

/// Options object for `new TradingView.widget(...)`. Unlike the embeds the
/// constructor takes snake_case keys, so fields serialize as written.
#[derive(Debug, Clone, Serialize)]
pub struct AdvancedChartConfig {
    pub autosize: bool,
    pub symbol: String,
    pub interval: String,
    pub timezone: String,
    pub theme: WidgetTheme,
    pub style: String,
    pub locale: String,
    pub toolbar_bg: String,
    pub enable_publishing: bool,
    pub allow_symbol_change: bool,
    pub container_id: String,
    pub hide_top_toolbar: bool,
    pub hide_legend: bool,
    pub save_image: bool,
    pub studies: Vec<String>,
    pub show_popup_button: bool,
    pub popup_width: String,
    pub popup_height: String,
    pub withdateranges: bool,
    pub hide_side_toolbar: bool,
}

impl AdvancedChartConfig {
    pub fn new(
        symbol: &Symbol,
        theme: WidgetTheme,
        container_id: String,
        autosize: bool,
        interval: &str,
        with_volume: bool,
    ) -> Self {
        let mut studies = Vec::new();
        if with_volume {
            studies.push("Volume@tv-basicstudies".to_string());
        }
        studies.push("RSI@tv-basicstudies".to_string());
        studies.push("MAExp@tv-basicstudies".to_string());

        Self {
            autosize,
            symbol: symbol.value().to_string(),
            interval: interval.to_string(),
            timezone: "Etc/UTC".to_string(),
            theme,
            style: "1".to_string(),
            locale: "en".to_string(),
            toolbar_bg: theme.toolbar_bg().to_string(),
            enable_publishing: false,
            allow_symbol_change: true,
            container_id,
            hide_top_toolbar: false,
            hide_legend: false,
            save_image: true,
            studies,
            show_popup_button: true,
            popup_width: "1000".to_string(),
            popup_height: "650".to_string(),
            withdateranges: true,
            hide_side_toolbar: false,
        }
    }

    /// Widget node id for one mount: symbol plus the mount generation, so
    /// every remount gets a fresh DOM identity.
    pub fn container_id(symbol: &Symbol, generation: u64) -> String {
        format!("tradingview-chart-{}-{}", symbol.sanitized(), generation)
    }

    pub fn attach_spec(&self, height_px: Option<u32>) -> WidgetResult<AttachSpec> {
        Ok(AttachSpec::Constructor {
            container_id: self.container_id.clone(),
            height_px,
            config_json: to_config_json(self)?,
        })
    }
}

pub(crate) fn to_config_json<T: Serialize>(config: &T) -> WidgetResult<String> {
    serde_json::to_string(config)
        .map_err(|e| WidgetError::Attach(format!("config serialization failed: {}", e)))
}
