//! The shared record browser every page renders through: filter chips,
//! free-text search, sortable columns, the view-mode switcher, and the
//! disclosure-aware record cards.

use dioxus::prelude::*;
use std::collections::BTreeSet;

use crate::classify::{classify, classify_severity, classify_status, TierBadge};
use crate::disclosure::{ranked_evidence, resolve, EvidenceDisclosure, ViewMode};
use crate::models::{Citation, EvidenceFactor, Record};
use crate::query::{FilterSet, SortDirection, SortField};
use crate::state::{use_app_actions, use_app_state, AppActions, PageId};

pub const CHIP_BASE_CLASS: &str = "px-3 py-1 rounded-full border text-xs transition-colors";
pub const CHIP_ACTIVE_CLASS: &str = "bg-slate-900 text-white border-slate-900";
pub const CHIP_INACTIVE_CLASS: &str =
    "bg-white text-slate-700 border-slate-200 hover:border-slate-400";

#[derive(Clone, PartialEq)]
struct FilterOption {
    dimension: &'static str,
    value: String,
    label: String,
}

#[derive(Clone, PartialEq)]
struct FilterSection {
    heading: &'static str,
    options: Vec<FilterOption>,
}

/// Chip options are harvested from the loaded record set, so a page only
/// offers values that actually occur in its data.
fn collect_filter_sections(records: &[Record]) -> Vec<FilterSection> {
    let mut engines = BTreeSet::new();
    let mut severities = BTreeSet::new();
    let mut statuses = BTreeSet::new();

    for record in records {
        engines.insert((record.engine.key(), record.engine.label()));
        if let Some(severity) = record.severity {
            // Keyed by inverted rank so chips render worst-first.
            severities.insert((u8::MAX - severity.rank(), severity.key(), severity.label()));
        }
        statuses.insert((record.status.key(), record.status.label()));
    }

    let mut sections = Vec::new();
    if engines.len() > 1 {
        sections.push(FilterSection {
            heading: "Engine",
            options: engines
                .into_iter()
                .map(|(value, label)| FilterOption {
                    dimension: "engine",
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        });
    }
    if !severities.is_empty() {
        sections.push(FilterSection {
            heading: "Severity",
            options: severities
                .into_iter()
                .map(|(_, value, label)| FilterOption {
                    dimension: "severity",
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        });
    }
    if statuses.len() > 1 {
        sections.push(FilterSection {
            heading: "Status",
            options: statuses
                .into_iter()
                .map(|(value, label)| FilterOption {
                    dimension: "status",
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        });
    }
    sections
}

fn badge_chip_class(badge: &TierBadge) -> &'static str {
    match badge.color_token {
        "emerald" => {
            "rounded-full bg-emerald-100 px-2 py-0.5 text-[11px] font-medium text-emerald-800"
        }
        "sky" => "rounded-full bg-sky-100 px-2 py-0.5 text-[11px] font-medium text-sky-800",
        "amber" => "rounded-full bg-amber-100 px-2 py-0.5 text-[11px] font-medium text-amber-800",
        _ => "rounded-full bg-red-100 px-2 py-0.5 text-[11px] font-medium text-red-800",
    }
}

fn badge_bar_class(badge: &TierBadge) -> &'static str {
    match badge.color_token {
        "emerald" => "h-1.5 rounded bg-emerald-500",
        "sky" => "h-1.5 rounded bg-sky-500",
        "amber" => "h-1.5 rounded bg-amber-500",
        _ => "h-1.5 rounded bg-red-500",
    }
}

fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

#[component]
pub fn RecordBrowser(page: PageId) -> Element {
    let actions = use_app_actions();
    let snapshot = use_app_state().read().clone();
    let page_state = snapshot.page(page).clone();

    let sections = collect_filter_sections(&page_state.records);
    let visible = page_state.visible();
    let query = page_state.query.clone();

    rsx! {
        section { class: "space-y-4 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            header { class: "flex flex-col gap-1",
                h1 { class: "text-lg font-semibold text-slate-900", "{page.title()}" }
                p { class: "text-xs text-slate-500", "{page.subtitle()}" }
                if page_state.rejected_count > 0 {
                    p { class: "text-[11px] text-amber-600",
                        "{page_state.rejected_count} record(s) failed validation and were dropped"
                    }
                }
            }

            BrowserToolbar {
                page,
                search_text: query.search_text.clone(),
                view_mode: query.view_mode,
                sort_field: query.sort_field,
                sort_direction: query.sort_direction,
                actions: actions.clone(),
            }

            FilterChips {
                page,
                sections,
                filters: query.filters.clone(),
                actions: actions.clone(),
            }

            ul { class: "space-y-3",
                if visible.is_empty() {
                    li { class: "text-xs text-slate-500 italic",
                        "No records match the current filters"
                    }
                } else {
                    for record in visible.iter() {
                        li { key: "{record.id}",
                            RecordCard {
                                record: record.clone(),
                                page,
                                mode: query.view_mode,
                                expanded: page_state.is_expanded(&record.id),
                                actions: actions.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone)]
#[props(no_eq)]
struct BrowserToolbarProps {
    page: PageId,
    search_text: String,
    view_mode: ViewMode,
    sort_field: SortField,
    sort_direction: SortDirection,
    actions: AppActions,
}

impl PartialEq for BrowserToolbarProps {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Eq for BrowserToolbarProps {}

#[component]
fn BrowserToolbar(props: BrowserToolbarProps) -> Element {
    let page = props.page;
    let actions = props.actions.clone();
    let search_actions = actions.clone();

    rsx! {
        div { class: "flex flex-wrap items-center gap-3",
            input {
                class: "w-56 rounded border border-slate-300 px-2 py-1 text-xs",
                placeholder: "Search id, title, engine, status",
                value: "{props.search_text}",
                oninput: move |evt| search_actions.set_search(page, evt.value().to_string()),
            }

            div { class: "flex items-center gap-1",
                span { class: "text-[11px] font-semibold uppercase tracking-wide text-slate-500", "Sort" }
                for field in SortField::ALL.into_iter() {
                    button {
                        key: "sort-{field.label()}",
                        class: {
                            let active = props.sort_field == field;
                            format!(
                                "{} {}",
                                CHIP_BASE_CLASS,
                                if active { CHIP_ACTIVE_CLASS } else { CHIP_INACTIVE_CLASS }
                            )
                        },
                        onclick: {
                            let actions = actions.clone();
                            move |_| actions.set_sort(page, field)
                        },
                        span { class: "text-xs font-medium",
                            {sort_chip_label(field, props.sort_field, props.sort_direction)}
                        }
                    }
                }
            }

            div { class: "flex items-center gap-1",
                span { class: "text-[11px] font-semibold uppercase tracking-wide text-slate-500", "View" }
                for mode in ViewMode::ALL.into_iter() {
                    button {
                        key: "mode-{mode.label()}",
                        class: {
                            let active = props.view_mode == mode;
                            format!(
                                "{} {}",
                                CHIP_BASE_CLASS,
                                if active { CHIP_ACTIVE_CLASS } else { CHIP_INACTIVE_CLASS }
                            )
                        },
                        onclick: {
                            let actions = actions.clone();
                            move |_| actions.set_view_mode(page, mode)
                        },
                        span { class: "text-xs font-medium", "{mode.label()}" }
                    }
                }
            }
        }
    }
}

fn sort_chip_label(field: SortField, active: SortField, direction: SortDirection) -> String {
    if field == active {
        let arrow = match direction {
            SortDirection::Desc => "↓",
            SortDirection::Asc => "↑",
        };
        format!("{} {}", field.label(), arrow)
    } else {
        field.label().to_string()
    }
}

#[derive(Props, Clone)]
#[props(no_eq)]
struct FilterChipsProps {
    page: PageId,
    sections: Vec<FilterSection>,
    filters: FilterSet,
    actions: AppActions,
}

impl PartialEq for FilterChipsProps {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Eq for FilterChipsProps {}

#[component]
fn FilterChips(props: FilterChipsProps) -> Element {
    if props.sections.is_empty() {
        return rsx! { div {} };
    }

    let page = props.page;
    let actions = props.actions.clone();
    let clear_actions = actions.clone();

    rsx! {
        div { class: "space-y-2 text-xs text-slate-600",
            for section in props.sections.iter() {
                div { key: "section-{section.heading}", class: "space-y-1",
                    span { class: "text-[11px] font-semibold uppercase tracking-wide text-slate-500",
                        "{section.heading}"
                    }
                    div { class: "flex flex-wrap gap-2",
                        for option in section.options.iter() {
                            button {
                                key: "{option.dimension}-{option.value}",
                                class: {
                                    let active =
                                        props.filters.contains(option.dimension, &option.value);
                                    format!(
                                        "{} {}",
                                        CHIP_BASE_CLASS,
                                        if active { CHIP_ACTIVE_CLASS } else { CHIP_INACTIVE_CLASS }
                                    )
                                },
                                onclick: {
                                    let actions = actions.clone();
                                    let dimension = option.dimension;
                                    let value = option.value.clone();
                                    move |_| actions.toggle_filter(page, dimension, &value)
                                },
                                span { class: "text-xs font-medium", "{option.label}" }
                            }
                        }
                    }
                }
            }
            if !props.filters.is_empty() {
                button {
                    class: "rounded bg-slate-100 px-3 py-1 text-[11px] text-slate-600 hover:bg-slate-200",
                    onclick: move |_| clear_actions.clear_filters(page),
                    "Clear filters"
                }
            }
        }
    }
}

#[derive(Props, Clone)]
#[props(no_eq)]
struct RecordCardProps {
    record: Record,
    page: PageId,
    mode: ViewMode,
    expanded: bool,
    actions: AppActions,
}

impl PartialEq for RecordCardProps {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Eq for RecordCardProps {}

#[component]
fn RecordCard(props: RecordCardProps) -> Element {
    let record = props.record.clone();
    let page = props.page;
    let payload = resolve(&record, props.mode);
    let confidence_badge = classify(payload.headline, page.polarity());
    let status_badge = classify_status(payload.status);
    let headline = percent(payload.headline);

    if props.mode == ViewMode::Glance {
        return rsx! {
            div { class: "flex items-center justify-between rounded border border-slate-200 px-3 py-2",
                div { class: "flex items-center gap-2",
                    span { class: "font-mono text-xs text-slate-500", "{payload.id}" }
                    span { class: "rounded bg-slate-100 px-2 py-0.5 text-[11px] text-slate-700",
                        "{payload.engine_label}"
                    }
                    span { class: badge_chip_class(&status_badge), "{payload.status.label()}" }
                }
                span { class: badge_chip_class(&confidence_badge), "{headline}" }
            }
        };
    }

    let body = payload.body.clone();
    let evidence_view = match payload.evidence {
        EvidenceDisclosure::Omitted => None,
        EvidenceDisclosure::Collapsed {
            factor_count,
            citation_count,
        } => {
            let actions = props.actions.clone();
            let record_id = record.id.clone();
            let expanded_view = if props.expanded {
                Some(render_evidence(
                    ranked_evidence(&record),
                    record.citations.clone(),
                ))
            } else {
                None
            };
            Some(rsx! {
                div { class: "flex items-center gap-2 text-[11px] text-slate-500",
                    span { "{factor_count} factor(s) · {citation_count} citation(s)" }
                    if factor_count + citation_count > 0 {
                        button {
                            class: "rounded bg-slate-100 px-2 py-0.5 text-[11px] text-slate-600 hover:bg-slate-200",
                            onclick: move |_| actions.toggle_expanded(page, &record_id),
                            if props.expanded { "Hide evidence" } else { "Show evidence" }
                        }
                    }
                }
                if let Some(view) = expanded_view {
                    {view}
                }
            })
        }
        EvidenceDisclosure::Inline { factors, citations } => {
            Some(render_evidence(factors, citations))
        }
    };

    rsx! {
        div { class: "space-y-2 rounded-lg border border-slate-200 bg-white p-3 shadow-sm",
            div { class: "flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    span { class: "font-mono text-xs text-slate-500", "{payload.id}" }
                    span { class: "rounded bg-slate-100 px-2 py-0.5 text-[11px] text-slate-700",
                        "{payload.engine_label}"
                    }
                    span { class: badge_chip_class(&status_badge), "{payload.status.label()}" }
                    if let Some(severity) = body.as_ref().and_then(|b| b.severity) {
                        span { class: badge_chip_class(&classify_severity(severity)),
                            "{severity.label()}"
                        }
                    }
                }
                if let Some(body) = body.as_ref() {
                    span { class: "text-[11px] text-slate-500", "{body.timestamp}" }
                }
            }

            if let Some(body) = body.as_ref() {
                p { class: "text-sm font-medium text-slate-900", "{body.title}" }
            }

            div { class: "space-y-1",
                div { class: "flex items-center justify-between text-[11px] text-slate-500",
                    span { "Confidence" }
                    span { class: badge_chip_class(&confidence_badge),
                        "{headline} · {confidence_badge.tier.label()}"
                    }
                }
                div { class: "h-1.5 w-full rounded bg-slate-100",
                    div {
                        class: badge_bar_class(&confidence_badge),
                        style: "width: {headline}",
                    }
                }
            }

            if let Some(view) = evidence_view {
                {view}
            }
        }
    }
}

fn render_evidence(factors: Vec<EvidenceFactor>, citations: Vec<Citation>) -> Element {
    rsx! {
        div { class: "space-y-2 rounded border border-slate-200 bg-slate-50 p-2 text-[11px] text-slate-600",
            if !factors.is_empty() {
                div { class: "space-y-1",
                    span { class: "font-semibold text-slate-700", "Attribution" }
                    for (index, factor) in factors.iter().enumerate() {
                        div { key: "factor-{index}", class: "flex items-center justify-between gap-2",
                            span { "{factor.label}" }
                            span {
                                class: if factor.weight >= 0.0 {
                                    "font-mono text-red-700"
                                } else {
                                    "font-mono text-emerald-700"
                                },
                                {format!("{:+.2}", factor.weight)}
                            }
                        }
                    }
                }
            }
            if !citations.is_empty() {
                div { class: "space-y-1",
                    span { class: "font-semibold text-slate-700", "Citations" }
                    for (index, citation) in citations.iter().enumerate() {
                        div { key: "citation-{index}", class: "space-y-0.5",
                            if let Some(url) = citation.url.as_ref() {
                                a {
                                    class: "font-medium text-sky-700 underline",
                                    href: "{url}",
                                    "{citation.label}"
                                }
                            } else {
                                span { class: "font-medium text-slate-700", "{citation.label}" }
                            }
                            p { class: "text-slate-500", "\u{201c}{citation.excerpt}\u{201d}" }
                        }
                    }
                }
            }
        }
    }
}
