#![allow(non_snake_case)]

mod classify;
mod config;
mod disclosure;
mod fixtures;
mod models;
mod query;
mod state;
mod ui;

use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use state::AppState;
use tracing::info;
use ui::alerts::AlertsPanel;
use ui::execute::QueuePanel;
use ui::ledger::LedgerPanel;
use ui::notifications::NotificationCenter;
use ui::protect::ThreatPanel;
use ui::recommend::RecommendationsPanel;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    let config = AppConfig::from_env();
    info!(?config, "Aegis console starting");
    let _ = APP_CONFIG.set(config);

    launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::with_sample_data);

    use_context_provider(|| app_state.clone());

    rsx! {
        div { class: "relative",
            Router::<Route> {}
            NotificationCenter {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Dashboard {},
}

#[component]
fn Dashboard() -> Element {
    rsx! {
        div { class: "app-shell space-y-4",
            section { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                h1 { class: "text-xl font-semibold text-slate-900", "Aegis Governance Console" }
                p { class: "text-sm text-slate-600",
                    "Protect · Grow · Execute · Govern — sample data, no live engines attached."
                }
            }
            AlertsPanel {}
            ThreatPanel {}
            QueuePanel {}
            RecommendationsPanel {}
            LedgerPanel {}
        }
    }
}
