use std::rc::Rc;

use gloo::timers::callback::Timeout;
use leptos::*;

use crate::domain::loader::ScriptLoader;
use crate::domain::symbol::{Symbol, popular_symbols};
use crate::domain::widget::{TV_SCRIPT_URL, WidgetTheme};
use crate::global_state::{active_tab, selected_symbol, widget_theme, widgets_loading};
use crate::infrastructure::script::DomScriptFetcher;
use crate::presentation::{AdvancedChart, MarketOverview, SymbolDetails, TickerTape};

/// Вкладки центральной карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Chart,
    Details,
    Overview,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Chart,
        DashboardTab::Details,
        DashboardTab::Overview,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Chart => "Chart",
            DashboardTab::Details => "Details",
            DashboardTab::Overview => "Market Overview",
        }
    }
}

/// 🦀 Корневой компонент дашборда
#[component]
pub fn App() -> impl IntoView {
    // The one shared loader every chart widget waits on; injected via
    // context instead of living in ambient statics.
    let loader = ScriptLoader::new(Rc::new(DomScriptFetcher::new(TV_SCRIPT_URL)));
    provide_context(loader);

    // Simulated widget warmup: skeletons for the first second
    Timeout::new(1_000, move || widgets_loading().set(false)).forget();

    view! {
        <style>{DASHBOARD_CSS}</style>
        <main class=move || format!("dashboard {}", widget_theme().get().css_class())>
            <Dashboard />
        </main>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    view! {
        <div class="container">
            <div class="page-header">
                <h1>"Financial Dashboard"</h1>
                <div class="page-subtitle">
                    <p>"Real-time market data powered by TradingView"</p>
                    <ThemeToggle />
                </div>
            </div>

            <div class="ticker-strip">
                <Show
                    when=move || !widgets_loading().get()
                    fallback=|| view! { <Skeleton height=65 /> }
                >
                    <TickerTape />
                </Show>
            </div>

            <TabbedWidgets />

            <div class="card-grid">
                <Card
                    title="Top Gainers"
                    description="Stocks with the highest daily gains"
                >
                    <Show
                        when=move || !widgets_loading().get()
                        fallback=|| view! { <Skeleton height=400 /> }
                    >
                        <AdvancedChart
                            symbol=Symbol::from("NASDAQ:TSLA")
                            autosize=false
                            height=400
                        />
                    </Show>
                </Card>
                <Card
                    title="Crypto Market"
                    description="Major cryptocurrencies performance"
                >
                    <Show
                        when=move || !widgets_loading().get()
                        fallback=|| view! { <Skeleton height=400 /> }
                    >
                        <AdvancedChart
                            symbol=Symbol::from("BINANCE:BTCUSDT")
                            autosize=false
                            height=400
                        />
                    </Show>
                </Card>
            </div>
        </div>
    }
}

/// Центральная карточка с вкладками; неактивные вкладки размонтируются,
/// что и гоняет цикл mount/unmount виджетов
#[component]
fn TabbedWidgets() -> impl IntoView {
    let symbol = Signal::derive(move || selected_symbol().get());

    view! {
        <div class="tabs">
            <div class="tabs-bar">
                <div class="tabs-list">
                    {DashboardTab::ALL
                        .iter()
                        .map(|tab| {
                            let tab = *tab;
                            view! {
                                <button
                                    class="tab-trigger"
                                    class:active=move || active_tab().get() == tab
                                    on:click=move |_| active_tab().set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <SymbolPicker />
            </div>
            {move || match active_tab().get() {
                DashboardTab::Chart => {
                    view! {
                        <Card
                            title="Advanced Chart"
                            description="Interactive TradingView chart with technical indicators"
                        >
                            <Show
                                when=move || !widgets_loading().get()
                                fallback=|| view! { <Skeleton height=600 /> }
                            >
                                <div class="chart-area">
                                    <AdvancedChart symbol=symbol />
                                </div>
                            </Show>
                        </Card>
                    }
                        .into_view()
                }
                DashboardTab::Details => {
                    let description = format!(
                        "Detailed information about {}",
                        selected_symbol().get().display_title(),
                    );
                    view! {
                        <Card title="Symbol Details" description=description>
                            <Show
                                when=move || !widgets_loading().get()
                                fallback=|| view! { <Skeleton height=400 /> }
                            >
                                <SymbolDetails symbol=symbol />
                            </Show>
                        </Card>
                    }
                        .into_view()
                }
                DashboardTab::Overview => {
                    view! {
                        <Card
                            title="Market Overview"
                            description="Overview of major market indices and stocks"
                        >
                            <Show
                                when=move || !widgets_loading().get()
                                fallback=|| view! { <Skeleton height=600 /> }
                            >
                                <MarketOverview />
                            </Show>
                        </Card>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn SymbolPicker() -> impl IntoView {
    view! {
        <select
            class="symbol-select"
            on:change=move |ev| selected_symbol().set(Symbol::from(event_target_value(&ev)))
        >
            {popular_symbols()
                .into_iter()
                .map(|entry| {
                    let value = entry.symbol.value().to_string();
                    let selected_value = value.clone();
                    view! {
                        <option
                            value=value
                            selected=move || selected_symbol().get().value() == selected_value
                        >
                            {entry.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            title="Toggle light/dark theme"
            on:click=move |_| widget_theme().update(|theme| *theme = theme.toggled())
        >
            {move || match widget_theme().get() {
                WidgetTheme::Light => "🌙",
                WidgetTheme::Dark => "☀️",
            }}
        </button>
    }
}

/// Серый placeholder на время прогрева виджетов
#[component]
fn Skeleton(#[prop(default = 400)] height: u32) -> impl IntoView {
    view! { <div class="skeleton" style:height=format!("{}px", height)></div> }
}

#[component]
fn Card(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card">
            <header class="card-header">
                <h2 class="card-title">{title}</h2>
                <p class="card-description">{description}</p>
            </header>
            <div class="card-content">{children()}</div>
        </section>
    }
}

const DASHBOARD_CSS: &str = r#"
.dashboard {
    --bg: #f7f8fa;
    --fg: #17181c;
    --muted: #6b7280;
    --card-bg: #ffffff;
    --border: #e2e5ea;
    --accent: #2962ff;
    --skeleton: #e7e9ee;

    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: var(--bg);
    color: var(--fg);
    min-height: 100vh;
}

.dashboard.dark {
    --bg: #131722;
    --fg: #e8eaef;
    --muted: #9aa0ab;
    --card-bg: #1c2130;
    --border: #2b3145;
    --skeleton: #242a3c;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 16px;
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.page-header h1 {
    font-size: 30px;
    font-weight: 700;
    letter-spacing: -0.5px;
    margin: 0 0 8px;
}

.page-subtitle {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.page-subtitle p {
    color: var(--muted);
    margin: 0;
}

.theme-toggle {
    background: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 6px 10px;
    font-size: 16px;
    cursor: pointer;
}

.ticker-strip {
    min-height: 65px;
}

.tabs-bar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 16px;
    margin-bottom: 16px;
    flex-wrap: wrap;
}

.tabs-list {
    display: inline-flex;
    background: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 4px;
    gap: 4px;
}

.tab-trigger {
    border: none;
    background: transparent;
    color: var(--muted);
    padding: 8px 16px;
    border-radius: 8px;
    cursor: pointer;
    font-size: 14px;
}

.tab-trigger.active {
    background: var(--accent);
    color: #ffffff;
}

.symbol-select {
    min-width: 220px;
    background: var(--card-bg);
    color: var(--fg);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 8px 12px;
    font-size: 14px;
}

.card {
    background: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 12px;
    overflow: hidden;
}

.card-header {
    padding: 16px 20px;
    border-bottom: 1px solid var(--border);
}

.card-title {
    font-size: 18px;
    font-weight: 600;
    margin: 0 0 4px;
}

.card-description {
    color: var(--muted);
    font-size: 13px;
    margin: 0;
}

.card-content {
    padding: 0;
}

.chart-area {
    height: 600px;
}

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
    gap: 24px;
}

.skeleton {
    background: var(--skeleton);
    border-radius: 10px;
    width: 100%;
    animation: skeleton-pulse 1.5s ease-in-out infinite;
}

@keyframes skeleton-pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.55; }
}
"#;
