//! The record query engine: filter, search, and sort, applied in that fixed
//! order. Every function here is pure and total; malformed query state
//! degrades to a no-op instead of failing the view.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::Record;

pub(crate) fn normalize_filter_value(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Active filter selections: dimension name -> allowed values. Dimensions
/// combine with AND, values within a dimension with OR. An empty map (or an
/// empty value set) constrains nothing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterSet {
    #[serde(default)]
    selections: BTreeMap<String, BTreeSet<String>>,
}

impl FilterSet {
    pub fn toggle(&mut self, dimension: &str, value: &str) {
        let dimension = normalize_filter_value(dimension);
        let key = normalize_filter_value(value);
        let entry = self.selections.entry(dimension.clone()).or_default();
        if !entry.insert(key.clone()) {
            entry.remove(&key);
        }
        let now_empty = entry.is_empty();
        if now_empty {
            self.selections.remove(&dimension);
        }
    }

    pub fn contains(&self, dimension: &str, value: &str) -> bool {
        self.selections
            .get(&normalize_filter_value(dimension))
            .map(|values| values.contains(&normalize_filter_value(value)))
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selections.values().all(BTreeSet::is_empty)
    }

    /// A record passes iff, for every constrained dimension it carries a value
    /// for, that value is in the allowed set. Dimensions the record model does
    /// not know about are ignored so stale saved state cannot break the view;
    /// a record with no value for a known constrained dimension fails it.
    pub fn matches(&self, record: &Record) -> bool {
        for (dimension, allowed) in &self.selections {
            if allowed.is_empty() {
                continue;
            }
            // Known dimensions come back as Some for records that carry them.
            // An unknown dimension name yields None for every record and the
            // constraint would reject everything, so it is skipped instead.
            if !known_dimension(dimension) {
                continue;
            }
            match record.dimension_value(dimension) {
                Some(value) => {
                    if !allowed.contains(value) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

fn known_dimension(dimension: &str) -> bool {
    matches!(dimension, "engine" | "status" | "severity")
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Timestamp,
    Confidence,
    Severity,
    EvidenceCount,
    Id,
}

impl SortField {
    pub fn label(self) -> &'static str {
        match self {
            SortField::Timestamp => "Time",
            SortField::Confidence => "Confidence",
            SortField::Severity => "Severity",
            SortField::EvidenceCount => "Evidence",
            SortField::Id => "ID",
        }
    }

    pub const ALL: [SortField; 5] = [
        SortField::Timestamp,
        SortField::Confidence,
        SortField::Severity,
        SortField::EvidenceCount,
        SortField::Id,
    ];
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The full query tuple a page holds. Defaults match the documented initial
/// state: no filters, no search, newest first, detail disclosure.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryState {
    #[serde(default)]
    pub filters: FilterSet,
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub sort_field: SortField,
    #[serde(default)]
    pub sort_direction: SortDirection,
    #[serde(default)]
    pub view_mode: crate::disclosure::ViewMode,
}

/// Comparable projection of one record under one sort field. `Missing` ranks
/// below every present value so records lacking the field never throw.
enum SortValue {
    Missing,
    Number(f64),
    Text(String),
}

fn sort_value(record: &Record, field: SortField) -> SortValue {
    match field {
        SortField::Timestamp => SortValue::Number(record.sort_key as f64),
        SortField::Confidence => SortValue::Number(record.confidence),
        SortField::Severity => match record.severity {
            Some(severity) => SortValue::Number(f64::from(severity.rank())),
            None => SortValue::Missing,
        },
        SortField::EvidenceCount => SortValue::Number(record.evidence.len() as f64),
        SortField::Id => SortValue::Text(record.id.to_lowercase()),
    }
}

fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
        (SortValue::Missing, _) => Ordering::Less,
        (_, SortValue::Missing) => Ordering::Greater,
        (SortValue::Number(x), SortValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (SortValue::Text(x), SortValue::Text(y)) => x.cmp(y),
        // One field never mixes kinds, but the comparator stays total anyway.
        (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
    }
}

pub fn filter(records: &[Record], filters: &FilterSet) -> Vec<Record> {
    records
        .iter()
        .filter(|record| filters.matches(record))
        .cloned()
        .collect()
}

/// Case-insensitive substring match over the record's fixed searchable
/// fields. Empty (or whitespace-only) query text is the identity.
pub fn search(records: &[Record], query: &str) -> Vec<Record> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| {
            record
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable sort; `Desc` reverses the comparator only, so ties keep their
/// original relative order in both directions.
pub fn sort(records: &[Record], field: SortField, direction: SortDirection) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_values(&sort_value(a, field), &sort_value(b, field));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// The composed pipeline every page renders through: filter, then search,
/// then sort.
pub fn apply(records: &[Record], state: &QueryState) -> Vec<Record> {
    let filtered = filter(records, &state.filters);
    let searched = search(&filtered, &state.search_text);
    sort(&searched, state.sort_field, state.sort_direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Engine, RecordStatus, Severity};

    fn record(id: &str, confidence: f64, sort_key: i64) -> Record {
        Record {
            id: id.into(),
            title: format!("Case {id}"),
            timestamp: "Yesterday".into(),
            sort_key,
            engine: Engine::Protect,
            severity: Some(Severity::Medium),
            status: RecordStatus::Pending,
            confidence,
            evidence: Vec::new(),
            citations: Vec::new(),
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_set_is_identity() {
        let records = vec![record("A", 0.97, 8), record("B", 0.78, 5)];
        let state = QueryState::default();
        let out = filter(&records, &state.filters);
        assert_eq!(out, records);
    }

    #[test]
    fn empty_search_preserves_filter_and_sort_behavior() {
        let records = vec![record("A", 0.97, 8), record("B", 0.78, 5)];
        let state = QueryState {
            search_text: "   ".into(),
            ..QueryState::default()
        };
        let with_search = apply(&records, &state);
        let without_search = apply(&records, &QueryState::default());
        assert_eq!(with_search, without_search);
    }

    #[test]
    fn dimensions_combine_with_and_values_with_or() {
        let mut flagged = record("A", 0.9, 1);
        flagged.status = RecordStatus::Flagged;
        let mut verified_grow = record("B", 0.8, 2);
        verified_grow.engine = Engine::Grow;
        verified_grow.status = RecordStatus::Verified;
        let mut pending_grow = record("C", 0.7, 3);
        pending_grow.engine = Engine::Grow;

        let mut filters = FilterSet::default();
        filters.toggle("engine", "grow");
        filters.toggle("status", "verified");
        filters.toggle("status", "pending");

        let out = filter(&[flagged, verified_grow, pending_grow], &filters);
        assert_eq!(ids(&out), vec!["B", "C"]);
    }

    #[test]
    fn toggling_twice_removes_the_constraint() {
        let mut filters = FilterSet::default();
        filters.toggle("engine", "Protect");
        assert!(filters.contains("engine", "protect"));
        filters.toggle("engine", "protect");
        assert!(filters.is_empty());
    }

    #[test]
    fn unknown_dimension_is_ignored() {
        let records = vec![record("A", 0.9, 1)];
        let mut filters = FilterSet::default();
        filters.toggle("quadrant", "north");
        assert_eq!(filter(&records, &filters), records);
    }

    #[test]
    fn missing_severity_fails_a_severity_constraint() {
        let mut unranked = record("A", 0.9, 1);
        unranked.severity = None;
        let ranked = record("B", 0.8, 2);
        let mut filters = FilterSet::default();
        filters.toggle("severity", "medium");
        assert_eq!(ids(&filter(&[unranked, ranked], &filters)), vec!["B"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = vec![record("A", 0.97, 8), record("B", 0.78, 5)];
        assert_eq!(ids(&search(&records, "b")), vec!["B"]);
        assert_eq!(ids(&search(&records, "CASE")), vec!["A", "B"]);
        assert_eq!(ids(&search(&records, "protect")), vec!["A", "B"]);
    }

    #[test]
    fn confidence_sort_matches_spec_scenario() {
        let records = vec![record("A", 0.97, 8), record("B", 0.78, 5)];
        let desc = sort(&records, SortField::Confidence, SortDirection::Desc);
        assert_eq!(ids(&desc), vec!["A", "B"]);
        let asc = sort(&records, SortField::Confidence, SortDirection::Asc);
        assert_eq!(ids(&asc), vec!["B", "A"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys_in_both_directions() {
        let records = vec![
            record("first", 0.8, 7),
            record("second", 0.8, 7),
            record("third", 0.8, 7),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let out = sort(&records, SortField::Confidence, direction);
            assert_eq!(ids(&out), vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn sorting_sorted_input_is_idempotent() {
        let records = vec![record("B", 0.78, 5), record("A", 0.97, 8)];
        let once = sort(&records, SortField::Timestamp, SortDirection::Desc);
        let twice = sort(&once, SortField::Timestamp, SortDirection::Desc);
        assert_eq!(once, twice);
    }

    #[test]
    fn flipping_direction_twice_round_trips() {
        let records = vec![record("B", 0.78, 5), record("A", 0.97, 8), record("C", 0.5, 2)];
        let desc = sort(&records, SortField::Confidence, SortDirection::Desc);
        let asc = sort(&desc, SortField::Confidence, SortDirection::Asc);
        let back = sort(&asc, SortField::Confidence, SortDirection::Desc);
        assert_eq!(desc, back);
    }

    #[test]
    fn severity_sorts_by_rank_not_label() {
        let mut critical = record("crit", 0.5, 1);
        critical.severity = Some(Severity::Critical);
        let mut high = record("high", 0.5, 2);
        high.severity = Some(Severity::High);
        let mut low = record("low", 0.5, 3);
        low.severity = Some(Severity::Low);
        let mut none = record("none", 0.5, 4);
        none.severity = None;

        let out = sort(
            &[low, none, critical, high],
            SortField::Severity,
            SortDirection::Desc,
        );
        // Missing severity ranks lowest, so it lands last on descending.
        assert_eq!(ids(&out), vec!["crit", "high", "low", "none"]);
    }

    #[test]
    fn id_sort_is_lexicographic_and_case_insensitive() {
        let records = vec![record("b-2", 0.5, 1), record("A-1", 0.5, 2), record("a-0", 0.5, 3)];
        let out = sort(&records, SortField::Id, SortDirection::Asc);
        assert_eq!(ids(&out), vec!["a-0", "A-1", "b-2"]);
    }

    #[test]
    fn apply_composes_filter_search_sort() {
        let mut flagged = record("A", 0.97, 8);
        flagged.status = RecordStatus::Flagged;
        let pending = record("B", 0.78, 5);
        let mut other_engine = record("C", 0.99, 9);
        other_engine.engine = Engine::Govern;

        let mut state = QueryState {
            sort_field: SortField::Confidence,
            sort_direction: SortDirection::Desc,
            ..QueryState::default()
        };
        state.filters.toggle("engine", "protect");
        let out = apply(&[pending, flagged, other_engine], &state);
        assert_eq!(ids(&out), vec!["A", "B"]);
    }
}
