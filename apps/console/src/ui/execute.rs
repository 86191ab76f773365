//! Execution queue: automations queued, running, and settled.

use dioxus::prelude::*;

use crate::state::PageId;
use crate::ui::browser::RecordBrowser;

#[component]
pub fn QueuePanel() -> Element {
    rsx! {
        RecordBrowser { page: PageId::Queue }
    }
}
