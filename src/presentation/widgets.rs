use std::cell::Cell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::*;

use crate::application::MountCoordinator;
use crate::domain::loader::ScriptLoader;
use crate::domain::symbol::{Symbol, default_ticker_symbols};
use crate::domain::widget::{
    AdvancedChartConfig, MarketOverviewConfig, SymbolInfoConfig, TickerTapeConfig,
};
use crate::global_state::widget_theme;
use crate::infrastructure::embed::DomWidgetHost;

thread_local! {
    static HOST_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Уникальный id контейнера для каждого экземпляра виджета
fn next_host_id(kind: &str) -> String {
    HOST_SEQ.with(|seq| {
        let n = seq.get() + 1;
        seq.set(n);
        format!("{}-host-{}", kind, n)
    })
}

/// One coordinator per widget instance, all sharing the app-wide loader
fn widget_coordinator(container_id: &str) -> MountCoordinator {
    let loader = expect_context::<ScriptLoader>();
    MountCoordinator::new(loader, Rc::new(DomWidgetHost::new(container_id)))
}

/// Лента тикеров поверх дашборда
#[component]
pub fn TickerTape(#[prop(optional)] symbols: Option<Vec<Symbol>>) -> impl IntoView {
    let host_id = next_host_id("ticker-tape");
    let container_ref = create_node_ref::<Div>();
    let coordinator = widget_coordinator(&host_id);
    let symbols = symbols.unwrap_or_else(default_ticker_symbols);

    let effect_coordinator = coordinator.clone();
    create_effect(move |_| {
        let theme = widget_theme().get();
        if container_ref.get().is_none() {
            return;
        }
        let config = TickerTapeConfig::new(&symbols, theme);
        effect_coordinator.remount(|_generation| config.attach_spec());
    });

    on_cleanup(move || coordinator.unmount());

    view! { <div class="tradingview-widget-container" id=host_id node_ref=container_ref></div> }
}

/// Панель деталей по выбранному инструменту
#[component]
pub fn SymbolDetails(#[prop(into)] symbol: MaybeSignal<Symbol>) -> impl IntoView {
    let host_id = next_host_id("symbol-info");
    let container_ref = create_node_ref::<Div>();
    let coordinator = widget_coordinator(&host_id);

    let effect_coordinator = coordinator.clone();
    create_effect(move |_| {
        let current = symbol.get();
        let theme = widget_theme().get();
        if container_ref.get().is_none() {
            return;
        }
        let config = SymbolInfoConfig::new(&current, theme);
        effect_coordinator.remount(|_generation| config.attach_spec());
    });

    on_cleanup(move || coordinator.unmount());

    view! { <div class="tradingview-widget-container" id=host_id node_ref=container_ref></div> }
}

/// Обзор рынка: индексы, сырьё, облигации, форекс, крипто
#[component]
pub fn MarketOverview() -> impl IntoView {
    let host_id = next_host_id("market-overview");
    let container_ref = create_node_ref::<Div>();
    let coordinator = widget_coordinator(&host_id);

    let effect_coordinator = coordinator.clone();
    create_effect(move |_| {
        let theme = widget_theme().get();
        if container_ref.get().is_none() {
            return;
        }
        let config = MarketOverviewConfig::new(theme);
        effect_coordinator.remount(|_generation| config.attach_spec());
    });

    on_cleanup(move || coordinator.unmount());

    view! { <div class="tradingview-widget-container" id=host_id node_ref=container_ref></div> }
}

/// Полноценный график; единственный виджет конструкторного типа - ждёт
/// общий скрипт через ScriptLoader
#[component]
pub fn AdvancedChart(
    #[prop(into)] symbol: MaybeSignal<Symbol>,
    #[prop(default = true)] autosize: bool,
    #[prop(default = 600)] height: u32,
    #[prop(default = "D")] interval: &'static str,
    #[prop(default = true)] with_volume: bool,
) -> impl IntoView {
    let host_id = next_host_id("advanced-chart");
    let container_ref = create_node_ref::<Div>();
    let coordinator = widget_coordinator(&host_id);

    let effect_coordinator = coordinator.clone();
    create_effect(move |_| {
        let current = symbol.get();
        let theme = widget_theme().get();
        if container_ref.get().is_none() {
            return;
        }
        effect_coordinator.remount(move |generation| {
            let container_id = AdvancedChartConfig::container_id(&current, generation);
            let config = AdvancedChartConfig::new(
                &current,
                theme,
                container_id,
                autosize,
                interval,
                with_volume,
            );
            config.attach_spec(if autosize { None } else { Some(height) })
        });
    });

    on_cleanup(move || coordinator.unmount());

    let outer_height = if autosize {
        "100%".to_string()
    } else {
        format!("{}px", height)
    };
    view! {
        <div
            class="tradingview-widget-container chart-host"
            id=host_id
            style:height=outer_height
            node_ref=container_ref
        ></div>
    }
}
