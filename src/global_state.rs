use leptos::*;
use once_cell::sync::OnceCell;

use crate::app::DashboardTab;
use crate::domain::symbol::Symbol;
use crate::domain::widget::WidgetTheme;

pub struct Globals {
    pub selected_symbol: RwSignal<Symbol>,
    pub widget_theme: RwSignal<WidgetTheme>,
    pub widgets_loading: RwSignal<bool>,
    pub active_tab: RwSignal<DashboardTab>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        selected_symbol: create_rw_signal(Symbol::from("NASDAQ:AAPL")),
        widget_theme: create_rw_signal(WidgetTheme::Light),
        widgets_loading: create_rw_signal(true),
        active_tab: create_rw_signal(DashboardTab::Chart),
    })
}

crate::global_signals! {
    pub selected_symbol => selected_symbol: crate::domain::symbol::Symbol,
    pub widget_theme => widget_theme: crate::domain::widget::WidgetTheme,
    pub widgets_loading => widgets_loading: bool,
    pub active_tab => active_tab: crate::app::DashboardTab,
}
