use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::classify::Polarity;
use crate::disclosure::ViewMode;
use crate::models::{validate_records, Record};
use crate::query::{self, QueryState, SortField};

pub type AppSignal = Signal<AppState>;

/// The five record-browser variants the console renders.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Ledger,
    Alerts,
    Threats,
    Queue,
    Recommendations,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Ledger,
        PageId::Alerts,
        PageId::Threats,
        PageId::Queue,
        PageId::Recommendations,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PageId::Ledger => "Audit Ledger",
            PageId::Alerts => "Alerts Hub",
            PageId::Threats => "Threat Signals",
            PageId::Queue => "Execution Queue",
            PageId::Recommendations => "Recommendations",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            PageId::Ledger => "Govern · every engine decision with its evidence trail",
            PageId::Alerts => "Cross-engine alerts awaiting triage",
            PageId::Threats => "Protect · scored fraud and account-takeover signals",
            PageId::Queue => "Execute · automations queued, running, and settled",
            PageId::Recommendations => "Grow · planning moves proposed by the engine",
        }
    }

    /// Whether a high headline number is reassuring or alarming on this page.
    /// Protect-side pages read the score as risk, the rest as confidence.
    pub fn polarity(self) -> Polarity {
        match self {
            PageId::Alerts | PageId::Threats => Polarity::HigherIsWorse,
            PageId::Ledger | PageId::Queue | PageId::Recommendations => Polarity::HigherIsBetter,
        }
    }
}

/// Per-page view state: the validated record set, the query tuple, and the
/// per-record expansion set. Records are never mutated after load; only the
/// view over them changes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PageState {
    pub records: Vec<Record>,
    #[serde(default)]
    pub query: QueryState,
    /// Ids expanded in detail mode. Independent axis from `query.view_mode`:
    /// it survives mode switches and is toggled per record.
    #[serde(default)]
    pub expanded: BTreeSet<String>,
    #[serde(default)]
    pub rejected_count: usize,
}

impl PageState {
    /// Validates once at the boundary; rejects are counted and logged, never
    /// carried into the pipeline.
    pub fn load(records: Vec<Record>) -> Self {
        let (accepted, rejected) = validate_records(records);
        for err in &rejected {
            tracing::warn!(%err, "dropping record that failed validation");
        }
        Self {
            records: accepted,
            query: QueryState::default(),
            expanded: BTreeSet::new(),
            rejected_count: rejected.len(),
        }
    }

    /// The derived view: a full recompute of filter -> search -> sort on
    /// every call. No incremental diffing, no cached state to invalidate.
    pub fn visible(&self) -> Vec<Record> {
        query::apply(&self.records, &self.query)
    }

    /// Clicking the active sort column flips direction; clicking a new
    /// column resets to descending.
    pub fn set_sort(&mut self, field: SortField) {
        if self.query.sort_field == field {
            self.query.sort_direction = self.query.sort_direction.flip();
        } else {
            self.query.sort_field = field;
            self.query.sort_direction = crate::query::SortDirection::Desc;
        }
    }

    pub fn set_search(&mut self, text: String) {
        self.query.search_text = text;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.query.view_mode = mode;
    }

    pub fn toggle_filter(&mut self, dimension: &str, value: &str) {
        self.query.filters.toggle(dimension, value);
    }

    pub fn clear_filters(&mut self) {
        self.query.filters.clear();
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if !self.expanded.insert(id.to_string()) {
            self.expanded.remove(id);
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    fn append(&mut self, incoming: Vec<Record>) {
        let (accepted, rejected) = validate_records(incoming);
        self.rejected_count += rejected.len();
        for record in accepted {
            if !self.records.iter().any(|existing| existing.id == record.id) {
                self.records.push(record);
            }
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OperationState {
    pub last_message: Option<String>,
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    pub is_running: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub ledger: PageState,
    pub alerts: PageState,
    pub threats: PageState,
    pub queue: PageState,
    pub recommendations: PageState,
    pub operation: OperationState,
    pub playback: PlaybackState,
}

impl AppState {
    /// Demo state: every page loads its hard-coded fixture set up front.
    /// A configured default engine preselects that filter on the
    /// cross-engine pages (ledger and alerts).
    pub fn with_sample_data() -> Self {
        let mut state = Self {
            ledger: PageState::load(crate::fixtures::ledger_decisions()),
            alerts: PageState::load(crate::fixtures::alert_feed()),
            threats: PageState::load(crate::fixtures::threat_signals()),
            queue: PageState::load(crate::fixtures::execution_queue()),
            recommendations: PageState::load(crate::fixtures::recommendations()),
            operation: OperationState::default(),
            playback: PlaybackState::default(),
        };
        if let Some(engine) = crate::APP_CONFIG
            .get()
            .and_then(|config| config.default_engine.as_deref())
        {
            state.ledger.toggle_filter("engine", engine);
            state.alerts.toggle_filter("engine", engine);
        }
        state
    }

    pub fn page(&self, id: PageId) -> &PageState {
        match id {
            PageId::Ledger => &self.ledger,
            PageId::Alerts => &self.alerts,
            PageId::Threats => &self.threats,
            PageId::Queue => &self.queue,
            PageId::Recommendations => &self.recommendations,
        }
    }

    pub fn page_mut(&mut self, id: PageId) -> &mut PageState {
        match id {
            PageId::Ledger => &mut self.ledger,
            PageId::Alerts => &mut self.alerts,
            PageId::Threats => &mut self.threats,
            PageId::Queue => &mut self.queue,
            PageId::Recommendations => &mut self.recommendations,
        }
    }
}

#[derive(Clone)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    pub fn toggle_filter(&self, page: PageId, dimension: &str, value: &str) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.page_mut(page).toggle_filter(dimension, value);
    }

    pub fn clear_filters(&self, page: PageId) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.page_mut(page).clear_filters();
    }

    pub fn set_search(&self, page: PageId, text: String) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.page_mut(page).set_search(text);
    }

    pub fn set_sort(&self, page: PageId, field: SortField) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.page_mut(page).set_sort(field);
    }

    pub fn set_view_mode(&self, page: PageId, mode: ViewMode) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.page_mut(page).set_view_mode(mode);
    }

    pub fn toggle_expanded(&self, page: PageId, id: &str) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.page_mut(page).toggle_expanded(id);
    }

    pub fn set_operation_success(&self, message: String) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.operation.last_message = Some(message);
        state.operation.error = None;
        state.operation.context = None;
    }

    pub fn set_operation_error(&self, message: String) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.operation.error = Some(message);
        state.operation.last_message = None;
        state.operation.context = None;
    }

    pub fn clear_operation_status(&self) {
        let mut signal = self.state;
        signal.write().operation = OperationState::default();
    }

    fn append_alerts(&self, records: Vec<Record>) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.alerts.append(records);
    }

    fn set_playback_running(&self, running: bool) {
        let mut signal = self.state;
        signal.write().playback.is_running = running;
    }

    /// Replays the canned alert stream with staggered delays so the hub can
    /// be demoed without a backend.
    pub fn playback_alert_feed(&self) {
        if self.state.read().playback.is_running {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        {
            let actions = self.clone();
            let interval_ms = crate::APP_CONFIG
                .get()
                .map(|config| config.playback_interval_ms)
                .unwrap_or(400);
            wasm_bindgen_futures::spawn_local(async move {
                use gloo_timers::future::TimeoutFuture;

                actions.set_playback_running(true);
                for alert in crate::fixtures::alert_stream() {
                    TimeoutFuture::new(interval_ms).await;
                    actions.append_alerts(vec![alert]);
                }
                actions.set_playback_running(false);
                actions.set_operation_success("Alert playback finished".into());
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.set_playback_running(true);
            self.append_alerts(crate::fixtures::alert_stream());
            self.set_playback_running(false);
            self.set_operation_success("Alert playback finished (offline)".into());
        }
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    AppActions {
        state: use_app_state(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Engine, RecordStatus, Severity};
    use crate::query::SortDirection;

    fn record(id: &str, sort_key: i64) -> Record {
        Record {
            id: id.into(),
            title: format!("Entry {id}"),
            timestamp: "Today".into(),
            sort_key,
            engine: Engine::Govern,
            severity: Some(Severity::Low),
            status: RecordStatus::Verified,
            confidence: 0.9,
            evidence: Vec::new(),
            citations: Vec::new(),
        }
    }

    #[test]
    fn defaults_are_timestamp_desc_detail() {
        let page = PageState::load(vec![record("a", 1)]);
        assert_eq!(page.query.sort_field, SortField::Timestamp);
        assert_eq!(page.query.sort_direction, SortDirection::Desc);
        assert_eq!(page.query.view_mode, ViewMode::Detail);
        assert!(page.query.filters.is_empty());
        assert!(page.query.search_text.is_empty());
    }

    #[test]
    fn load_drops_invalid_records() {
        let mut bad = record("b", 2);
        bad.confidence = 1.5;
        let page = PageState::load(vec![record("a", 1), bad]);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.rejected_count, 1);
    }

    #[test]
    fn clicking_active_column_flips_direction() {
        let mut page = PageState::load(vec![record("a", 1)]);
        page.set_sort(SortField::Timestamp);
        assert_eq!(page.query.sort_direction, SortDirection::Asc);
        page.set_sort(SortField::Timestamp);
        assert_eq!(page.query.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn clicking_new_column_resets_to_descending() {
        let mut page = PageState::load(vec![record("a", 1)]);
        page.set_sort(SortField::Timestamp); // now asc
        page.set_sort(SortField::Confidence);
        assert_eq!(page.query.sort_field, SortField::Confidence);
        assert_eq!(page.query.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn expansion_is_independent_of_view_mode() {
        let mut page = PageState::load(vec![record("a", 1)]);
        page.toggle_expanded("a");
        page.set_view_mode(ViewMode::Deep);
        page.set_view_mode(ViewMode::Detail);
        assert!(page.is_expanded("a"));
        page.toggle_expanded("a");
        assert!(!page.is_expanded("a"));
    }

    #[test]
    fn visible_recomputes_from_the_full_query() {
        let mut page = PageState::load(vec![record("old", 1), record("new", 2)]);
        assert_eq!(page.visible()[0].id, "new");
        page.set_sort(SortField::Timestamp); // flips to asc
        assert_eq!(page.visible()[0].id, "old");
        page.set_search("new".into());
        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "new");
    }

    #[test]
    fn append_dedups_by_id() {
        let mut page = PageState::load(vec![record("a", 1)]);
        page.append(vec![record("a", 9), record("b", 2)]);
        assert_eq!(page.records.len(), 2);
        // The original record wins; records are immutable once loaded.
        assert_eq!(page.records[0].sort_key, 1);
    }

    #[test]
    fn protect_side_pages_invert_polarity() {
        assert_eq!(PageId::Threats.polarity(), Polarity::HigherIsWorse);
        assert_eq!(PageId::Alerts.polarity(), Polarity::HigherIsWorse);
        assert_eq!(PageId::Ledger.polarity(), Polarity::HigherIsBetter);
    }
}
