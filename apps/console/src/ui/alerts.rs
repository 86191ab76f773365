//! Alerts hub: the shared browser plus a playback control that drip-feeds
//! the canned alert stream to demo live triage.

use dioxus::prelude::*;

use crate::state::{use_app_actions, use_app_state, PageId};
use crate::ui::browser::RecordBrowser;

#[component]
pub fn AlertsPanel() -> Element {
    let actions = use_app_actions();
    let is_running = use_app_state().read().playback.is_running;

    let on_replay = {
        let actions = actions.clone();
        move |_| actions.playback_alert_feed()
    };

    rsx! {
        div { class: "space-y-2",
            div { class: "flex items-center gap-2",
                button {
                    class: "rounded bg-emerald-600 px-3 py-1 text-xs font-semibold text-white hover:bg-emerald-500 disabled:opacity-50",
                    disabled: is_running,
                    onclick: on_replay,
                    if is_running { "Replaying…" } else { "Replay alert stream" }
                }
                if is_running {
                    span { class: "text-[11px] text-slate-500", "streaming sample alerts" }
                }
            }
            RecordBrowser { page: PageId::Alerts }
        }
    }
}
