//! Progressive disclosure: projects a record into exactly the fields one
//! view mode exposes. The resolver owns no transitions; the page state flips
//! the mode, this module only answers "what is visible now".

use serde::{Deserialize, Serialize};

use crate::models::{Citation, EvidenceFactor, Record, RecordStatus, Severity};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Glance,
    #[default]
    Detail,
    Deep,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Glance => "Glance",
            ViewMode::Detail => "Detail",
            ViewMode::Deep => "Deep",
        }
    }

    pub const ALL: [ViewMode; 3] = [ViewMode::Glance, ViewMode::Detail, ViewMode::Deep];
}

/// Fields only visible from `detail` upward.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordBody {
    pub title: String,
    pub timestamp: String,
    pub severity: Option<Severity>,
}

/// How much of the evidence/citation trail the current mode exposes.
/// `Collapsed` carries counts only; the factors themselves are not computed
/// until a per-record expansion (or `deep` mode) asks for them.
#[derive(Clone, Debug, PartialEq)]
pub enum EvidenceDisclosure {
    Omitted,
    Collapsed {
        factor_count: usize,
        citation_count: usize,
    },
    Inline {
        factors: Vec<EvidenceFactor>,
        citations: Vec<Citation>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisclosurePayload {
    pub id: String,
    pub engine_label: &'static str,
    pub status: RecordStatus,
    /// The single headline numeric every mode shows.
    pub headline: f64,
    pub body: Option<RecordBody>,
    pub evidence: EvidenceDisclosure,
}

/// Evidence ordered by contribution strength, `|weight|` descending. The
/// sort is stable so equally weighted factors keep their authored order.
pub fn ranked_evidence(record: &Record) -> Vec<EvidenceFactor> {
    let mut factors = record.evidence.clone();
    factors.sort_by(|a, b| {
        b.weight
            .abs()
            .partial_cmp(&a.weight.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    factors
}

/// One explicit arm per mode; adding a fourth tier means adding one arm
/// here, not touching call sites.
pub fn resolve(record: &Record, mode: ViewMode) -> DisclosurePayload {
    match mode {
        ViewMode::Glance => DisclosurePayload {
            id: record.id.clone(),
            engine_label: record.engine.label(),
            status: record.status,
            headline: record.confidence,
            body: None,
            evidence: EvidenceDisclosure::Omitted,
        },
        ViewMode::Detail => DisclosurePayload {
            id: record.id.clone(),
            engine_label: record.engine.label(),
            status: record.status,
            headline: record.confidence,
            body: Some(RecordBody {
                title: record.title.clone(),
                timestamp: record.timestamp.clone(),
                severity: record.severity,
            }),
            evidence: EvidenceDisclosure::Collapsed {
                factor_count: record.evidence.len(),
                citation_count: record.citations.len(),
            },
        },
        ViewMode::Deep => DisclosurePayload {
            id: record.id.clone(),
            engine_label: record.engine.label(),
            status: record.status,
            headline: record.confidence,
            body: Some(RecordBody {
                title: record.title.clone(),
                timestamp: record.timestamp.clone(),
                severity: record.severity,
            }),
            evidence: EvidenceDisclosure::Inline {
                factors: ranked_evidence(record),
                citations: record.citations.clone(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Engine;

    fn record() -> Record {
        Record {
            id: "alr-007".into(),
            title: "Unusual payee added".into(),
            timestamp: "Yesterday".into(),
            sort_key: 42,
            engine: Engine::Protect,
            severity: Some(Severity::High),
            status: RecordStatus::Flagged,
            confidence: 0.91,
            evidence: vec![
                EvidenceFactor {
                    label: "payee age".into(),
                    weight: -0.2,
                },
                EvidenceFactor {
                    label: "amount deviation".into(),
                    weight: 0.63,
                },
            ],
            citations: vec![Citation {
                label: "Device report".into(),
                excerpt: "New device fingerprint".into(),
                url: None,
            }],
        }
    }

    #[test]
    fn glance_omits_evidence_and_body() {
        let payload = resolve(&record(), ViewMode::Glance);
        assert!(payload.body.is_none());
        assert_eq!(payload.evidence, EvidenceDisclosure::Omitted);
        assert_eq!(payload.id, "alr-007");
        assert!((payload.headline - 0.91).abs() < f64::EPSILON);
    }

    #[test]
    fn detail_collapses_evidence_to_counts() {
        let payload = resolve(&record(), ViewMode::Detail);
        assert!(payload.body.is_some());
        assert_eq!(
            payload.evidence,
            EvidenceDisclosure::Collapsed {
                factor_count: 2,
                citation_count: 1,
            }
        );
    }

    #[test]
    fn deep_inlines_evidence_ranked_by_magnitude() {
        let payload = resolve(&record(), ViewMode::Deep);
        match payload.evidence {
            EvidenceDisclosure::Inline { factors, citations } => {
                assert_eq!(factors[0].label, "amount deviation");
                assert_eq!(factors[1].label, "payee age");
                assert_eq!(citations.len(), 1);
            }
            other => panic!("expected inline evidence, got {other:?}"),
        }
    }

    #[test]
    fn exposure_grows_monotonically_across_modes() {
        let record = record();
        let glance = resolve(&record, ViewMode::Glance);
        let detail = resolve(&record, ViewMode::Detail);
        let deep = resolve(&record, ViewMode::Deep);

        // Every field glance shows, detail shows identically.
        assert_eq!(glance.id, detail.id);
        assert_eq!(glance.status, detail.status);
        assert_eq!(glance.headline, detail.headline);
        // Detail adds the body, deep keeps it.
        assert!(detail.body.is_some());
        assert_eq!(detail.body, deep.body);
        // Evidence widens: omitted -> counts -> inline content.
        assert!(matches!(glance.evidence, EvidenceDisclosure::Omitted));
        assert!(matches!(detail.evidence, EvidenceDisclosure::Collapsed { .. }));
        assert!(matches!(deep.evidence, EvidenceDisclosure::Inline { .. }));
    }

    #[test]
    fn missing_evidence_resolves_to_empty_collections() {
        let mut bare = record();
        bare.evidence.clear();
        bare.citations.clear();
        match resolve(&bare, ViewMode::Deep).evidence {
            EvidenceDisclosure::Inline { factors, citations } => {
                assert!(factors.is_empty());
                assert!(citations.is_empty());
            }
            other => panic!("expected inline evidence, got {other:?}"),
        }
    }

    #[test]
    fn equal_magnitude_factors_keep_authored_order() {
        let mut tied = record();
        tied.evidence = vec![
            EvidenceFactor {
                label: "first".into(),
                weight: 0.5,
            },
            EvidenceFactor {
                label: "second".into(),
                weight: -0.5,
            },
        ];
        let ranked = ranked_evidence(&tied);
        assert_eq!(ranked[0].label, "first");
        assert_eq!(ranked[1].label, "second");
    }
}
