//! Govern audit ledger: the shared browser plus a JSON/CSV export toolbar
//! that copies the currently visible rows to the clipboard.

use dioxus::prelude::*;
use serde_json::json;

use crate::models::Record;
use crate::state::{use_app_actions, use_app_state, AppActions, PageId};
use crate::ui::browser::RecordBrowser;

#[component]
pub fn LedgerPanel() -> Element {
    let actions = use_app_actions();
    let snapshot = use_app_state().read().clone();
    let visible = snapshot.page(PageId::Ledger).visible();

    let on_export_json = {
        let actions = actions.clone();
        let rows = visible.clone();
        move |_| {
            let content = ledger_to_json(&rows);
            copy_text_to_clipboard(actions.clone(), "Ledger JSON", content);
        }
    };

    let on_export_csv = {
        let actions = actions.clone();
        let rows = visible.clone();
        move |_| {
            let content = ledger_to_csv(&rows);
            copy_text_to_clipboard(actions.clone(), "Ledger CSV", content);
        }
    };

    rsx! {
        div { class: "space-y-2",
            div { class: "flex flex-wrap gap-2",
                button {
                    class: "rounded border border-slate-300 bg-white px-3 py-1 text-xs text-slate-700 hover:bg-slate-100",
                    onclick: on_export_json,
                    "Export JSON"
                }
                button {
                    class: "rounded border border-slate-300 bg-white px-3 py-1 text-xs text-slate-700 hover:bg-slate-100",
                    onclick: on_export_csv,
                    "Export CSV"
                }
            }
            RecordBrowser { page: PageId::Ledger }
        }
    }
}

fn ledger_to_json(records: &[Record]) -> String {
    match serde_json::to_string_pretty(&json!({ "records": records })) {
        Ok(content) => content,
        Err(_) => "{}".into(),
    }
}

fn ledger_to_csv(records: &[Record]) -> String {
    let mut rows = Vec::new();
    rows.push("id,engine,severity,status,confidence,timestamp,title".to_string());
    for record in records {
        let severity = record
            .severity
            .map(|s| s.key().to_string())
            .unwrap_or_default();
        rows.push(
            vec![
                record.id.clone(),
                record.engine.key().to_string(),
                severity,
                record.status.key().to_string(),
                format!("{:.2}", record.confidence),
                record.timestamp.clone(),
                record.title.clone(),
            ]
            .into_iter()
            .map(|value| csv_escape(&value))
            .collect::<Vec<_>>()
            .join(","),
        );
    }
    rows.join("\n")
}

fn csv_escape(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        value.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
fn copy_text_to_clipboard(actions: AppActions, label: &str, content: String) {
    let label_text = label.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        let result = async {
            let window = web_sys::window().ok_or(())?;
            let clipboard = window.navigator().clipboard();
            let promise = clipboard.write_text(&content);
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|_| ())
        }
        .await;

        match result {
            Ok(_) => actions.set_operation_success(format!("{label_text} copied to clipboard")),
            Err(_) => actions.set_operation_error(format!("{label_text} copy failed")),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_text_to_clipboard(actions: AppActions, label: &str, _content: String) {
    actions.set_operation_success(format!("{label} copied (simulated)"));
}
