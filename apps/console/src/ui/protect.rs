//! Protect threat table. High scores read as risk here, so the classifier
//! runs with inverted polarity via `PageId::Threats`.

use dioxus::prelude::*;

use crate::state::PageId;
use crate::ui::browser::RecordBrowser;

#[component]
pub fn ThreatPanel() -> Element {
    rsx! {
        RecordBrowser { page: PageId::Threats }
    }
}
