//! Grow recommendations feed.

use dioxus::prelude::*;

use crate::state::PageId;
use crate::ui::browser::RecordBrowser;

#[component]
pub fn RecommendationsPanel() -> Element {
    rsx! {
        RecordBrowser { page: PageId::Recommendations }
    }
}
