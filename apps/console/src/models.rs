use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four mock decision engines rendered by the console.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    Protect,
    Grow,
    Execute,
    Govern,
}

impl Engine {
    pub fn key(self) -> &'static str {
        match self {
            Engine::Protect => "protect",
            Engine::Grow => "grow",
            Engine::Execute => "execute",
            Engine::Govern => "govern",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Engine::Protect => "Protect",
            Engine::Grow => "Grow",
            Engine::Execute => "Execute",
            Engine::Govern => "Govern",
        }
    }
}

/// Risk bucket with an explicit semantic rank. Never compared by label text.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Rank table: Critical > High > Medium > Low.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 3,
            Severity::High => 2,
            Severity::Medium => 1,
            Severity::Low => 0,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Verified,
    Pending,
    Flagged,
    Approved,
    Rejected,
    AutoExecuted,
}

impl RecordStatus {
    pub fn key(self) -> &'static str {
        match self {
            RecordStatus::Verified => "verified",
            RecordStatus::Pending => "pending",
            RecordStatus::Flagged => "flagged",
            RecordStatus::Approved => "approved",
            RecordStatus::Rejected => "rejected",
            RecordStatus::AutoExecuted => "auto_executed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordStatus::Verified => "Verified",
            RecordStatus::Pending => "Pending",
            RecordStatus::Flagged => "Flagged",
            RecordStatus::Approved => "Approved",
            RecordStatus::Rejected => "Rejected",
            RecordStatus::AutoExecuted => "Auto-executed",
        }
    }
}

/// One attribution factor behind a confidence score. Positive weight pushes
/// risk up, negative pushes it down; magnitude is contribution strength.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EvidenceFactor {
    pub label: String,
    pub weight: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Citation {
    pub label: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The generic unit browsed by every page variant: an audit decision, an
/// alert, a threat signal, a queued action, or a recommendation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: String,
    pub title: String,
    /// Display string only; may be "Yesterday". Never used for ordering.
    pub timestamp: String,
    /// Monotonic ordering key (epoch ms in the fixtures).
    pub sort_key: i64,
    pub engine: Engine,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    pub status: RecordStatus,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<EvidenceFactor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("record is missing an id")]
    MissingId,
    #[error("record {id} has an empty title")]
    MissingTitle { id: String },
    #[error("record {id} has confidence {value} outside [0, 1]")]
    ConfidenceOutOfRange { id: String, value: f64 },
    #[error("record {id} evidence factor {index} has a non-finite weight")]
    UnorderableWeight { id: String, index: usize },
}

impl Record {
    /// Contract check applied once, when records enter a page. The query
    /// pipeline itself never re-validates.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id.trim().is_empty() {
            return Err(RecordError::MissingId);
        }
        if self.title.trim().is_empty() {
            return Err(RecordError::MissingTitle {
                id: self.id.clone(),
            });
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(RecordError::ConfidenceOutOfRange {
                id: self.id.clone(),
                value: self.confidence,
            });
        }
        for (index, factor) in self.evidence.iter().enumerate() {
            if !factor.weight.is_finite() {
                return Err(RecordError::UnorderableWeight {
                    id: self.id.clone(),
                    index,
                });
            }
        }
        Ok(())
    }

    /// Value of a named filter dimension, normalized for set membership.
    /// `None` means the record carries no value for that dimension.
    pub fn dimension_value(&self, dimension: &str) -> Option<&'static str> {
        match dimension {
            "engine" => Some(self.engine.key()),
            "status" => Some(self.status.key()),
            "severity" => self.severity.map(Severity::key),
            _ => None,
        }
    }

    /// Fixed, enumerated list of fields the free-text search looks at.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            self.title.as_str(),
            self.engine.label(),
            self.status.label(),
        ]
    }
}

/// Splits a raw record set into validated records and rejections. Called once
/// per page load; rejects never reach the query pipeline.
pub fn validate_records(records: Vec<Record>) -> (Vec<Record>, Vec<RecordError>) {
    let mut accepted = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();
    for record in records {
        match record.validate() {
            Ok(()) => accepted.push(record),
            Err(err) => rejected.push(err),
        }
    }
    (accepted, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            id: "txn-001".into(),
            title: "Wire transfer hold".into(),
            timestamp: "2 min ago".into(),
            sort_key: 1_000,
            engine: Engine::Protect,
            severity: Some(Severity::High),
            status: RecordStatus::Flagged,
            confidence: 0.94,
            evidence: vec![EvidenceFactor {
                label: "velocity spike".into(),
                weight: 0.41,
            }],
            citations: Vec::new(),
        }
    }

    #[test]
    fn valid_record_passes() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn blank_id_is_rejected() {
        let mut record = sample();
        record.id = "  ".into();
        assert_eq!(record.validate(), Err(RecordError::MissingId));
    }

    #[test]
    fn confidence_outside_unit_interval_is_rejected() {
        let mut record = sample();
        record.confidence = 1.2;
        assert!(matches!(
            record.validate(),
            Err(RecordError::ConfidenceOutOfRange { .. })
        ));
    }

    #[test]
    fn non_finite_evidence_weight_is_rejected() {
        let mut record = sample();
        record.evidence[0].weight = f64::NAN;
        assert!(matches!(
            record.validate(),
            Err(RecordError::UnorderableWeight { index: 0, .. })
        ));
    }

    #[test]
    fn severity_rank_is_semantic_not_alphabetical() {
        assert!(Severity::Critical.rank() > Severity::High.rank());
        assert!(Severity::High.rank() > Severity::Medium.rank());
        assert!(Severity::Medium.rank() > Severity::Low.rank());
        // Alphabetical order would put "High" above "Critical".
        assert!(Severity::High.key() > Severity::Critical.key());
    }

    #[test]
    fn unknown_dimension_has_no_value() {
        assert_eq!(sample().dimension_value("quadrant"), None);
        assert_eq!(sample().dimension_value("engine"), Some("protect"));
    }

    #[test]
    fn validate_records_partitions() {
        let mut bad = sample();
        bad.confidence = -0.1;
        let (accepted, rejected) = validate_records(vec![sample(), bad]);
        assert_eq!(accepted.len(), 1);
        assert_eq!(rejected.len(), 1);
    }
}
