//! Hard-coded sample data for the five browser pages. Everything here is
//! illustrative; confidence scores, factors, and citations are constants.

use time::OffsetDateTime;

use crate::models::{Citation, Engine, EvidenceFactor, Record, RecordStatus, Severity};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

fn baseline_ms() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp() * 1_000
}

fn factor(label: &str, weight: f64) -> EvidenceFactor {
    EvidenceFactor {
        label: label.into(),
        weight,
    }
}

fn citation(label: &str, excerpt: &str, url: Option<&str>) -> Citation {
    Citation {
        label: label.into(),
        excerpt: excerpt.into(),
        url: url.map(Into::into),
    }
}

/// Govern audit ledger: one row per engine decision, evidence trail attached.
pub fn ledger_decisions() -> Vec<Record> {
    let now = baseline_ms();
    vec![
        Record {
            id: "gov-4821".into(),
            title: "Approved vendor payment batch #1172".into(),
            timestamp: "4 min ago".into(),
            sort_key: now - 4 * MINUTE_MS,
            engine: Engine::Execute,
            severity: Some(Severity::Low),
            status: RecordStatus::Verified,
            confidence: 0.97,
            evidence: vec![
                factor("invoice match rate", -0.52),
                factor("vendor tenure", -0.31),
                factor("amount within mandate", -0.44),
            ],
            citations: vec![citation(
                "Payment mandate v3",
                "Batches under $250k auto-clear when all invoices reconcile.",
                Some("https://docs.aegis.example/mandates/payments-v3"),
            )],
        },
        Record {
            id: "gov-4820".into(),
            title: "Blocked card-present transaction in Riga".into(),
            timestamp: "38 min ago".into(),
            sort_key: now - 38 * MINUTE_MS,
            engine: Engine::Protect,
            severity: Some(Severity::Critical),
            status: RecordStatus::Flagged,
            confidence: 0.94,
            evidence: vec![
                factor("impossible travel", 0.71),
                factor("merchant risk score", 0.33),
                factor("chip-and-pin used", -0.18),
            ],
            citations: vec![citation(
                "Geo-velocity model card",
                "Two card-present events 4,100km apart within 90 minutes.",
                None,
            )],
        },
        Record {
            id: "gov-4819".into(),
            title: "Rebalanced cash sweep to money-market fund".into(),
            timestamp: "2 hours ago".into(),
            sort_key: now - 2 * HOUR_MS,
            engine: Engine::Grow,
            severity: None,
            status: RecordStatus::AutoExecuted,
            confidence: 0.88,
            evidence: vec![
                factor("idle balance above target", 0.48),
                factor("rate differential", 0.29),
            ],
            citations: Vec::new(),
        },
        Record {
            id: "gov-4818".into(),
            title: "Quarterly access review completed".into(),
            timestamp: "Yesterday".into(),
            sort_key: now - DAY_MS,
            engine: Engine::Govern,
            severity: Some(Severity::Low),
            status: RecordStatus::Approved,
            confidence: 0.92,
            evidence: vec![factor("all attestations signed", -0.6)],
            citations: vec![citation(
                "SOX control AC-2",
                "Access recertification must complete within the quarter.",
                None,
            )],
        },
        Record {
            id: "gov-4817".into(),
            title: "Rejected duplicate payroll run".into(),
            timestamp: "Yesterday".into(),
            sort_key: now - DAY_MS - 3 * HOUR_MS,
            engine: Engine::Execute,
            severity: Some(Severity::High),
            status: RecordStatus::Rejected,
            confidence: 0.83,
            evidence: vec![
                factor("hash collision with run #2210", 0.66),
                factor("initiator on leave", 0.21),
            ],
            citations: Vec::new(),
        },
    ]
}

/// Cross-engine alerts hub. Scores here read as risk (higher is worse).
pub fn alert_feed() -> Vec<Record> {
    let now = baseline_ms();
    vec![
        Record {
            id: "alr-2207".into(),
            title: "Dormant account resumed high-value transfers".into(),
            timestamp: "Just now".into(),
            sort_key: now - MINUTE_MS,
            engine: Engine::Protect,
            severity: Some(Severity::Critical),
            status: RecordStatus::Pending,
            confidence: 0.93,
            evidence: vec![
                factor("dormancy break", 0.58),
                factor("new beneficiary", 0.37),
                factor("in-branch verification", -0.22),
            ],
            citations: vec![citation(
                "AML ruleset 7.2",
                "Dormant accounts re-activating above $10k require review.",
                None,
            )],
        },
        Record {
            id: "alr-2206".into(),
            title: "Automation retry budget nearly exhausted".into(),
            timestamp: "12 min ago".into(),
            sort_key: now - 12 * MINUTE_MS,
            engine: Engine::Execute,
            severity: Some(Severity::Medium),
            status: RecordStatus::Pending,
            confidence: 0.74,
            evidence: vec![factor("retry count 4 of 5", 0.51)],
            citations: Vec::new(),
        },
        Record {
            id: "alr-2205".into(),
            title: "Forecast drift on Q3 cash position".into(),
            timestamp: "1 hour ago".into(),
            sort_key: now - HOUR_MS,
            engine: Engine::Grow,
            severity: Some(Severity::Low),
            status: RecordStatus::Verified,
            confidence: 0.41,
            evidence: vec![
                factor("seasonal variance", 0.35),
                factor("one-off invoice timing", -0.3),
            ],
            citations: Vec::new(),
        },
        Record {
            id: "alr-2204".into(),
            title: "Privileged role granted outside change window".into(),
            timestamp: "Yesterday".into(),
            sort_key: now - DAY_MS + HOUR_MS,
            engine: Engine::Govern,
            severity: Some(Severity::High),
            status: RecordStatus::Flagged,
            confidence: 0.86,
            evidence: vec![
                factor("out-of-window grant", 0.49),
                factor("approved by two admins", -0.27),
            ],
            citations: vec![citation(
                "Change policy CM-11",
                "Privileged grants outside the window need retroactive review.",
                None,
            )],
        },
    ]
}

/// Protect threat table. Confidence is the model's risk score.
pub fn threat_signals() -> Vec<Record> {
    let now = baseline_ms();
    vec![
        Record {
            id: "thr-0931".into(),
            title: "Credential stuffing burst against treasury logins".into(),
            timestamp: "2 min ago".into(),
            sort_key: now - 2 * MINUTE_MS,
            engine: Engine::Protect,
            severity: Some(Severity::Critical),
            status: RecordStatus::Flagged,
            confidence: 0.96,
            evidence: vec![
                factor("failure spike x41", 0.77),
                factor("known botnet ASN", 0.54),
                factor("no MFA bypass observed", -0.12),
            ],
            citations: vec![citation(
                "Threat intel feed",
                "ASN 204718 active in credential stuffing since Tuesday.",
                Some("https://intel.aegis.example/asn/204718"),
            )],
        },
        Record {
            id: "thr-0930".into(),
            title: "Unusual payee added then immediate transfer".into(),
            timestamp: "27 min ago".into(),
            sort_key: now - 27 * MINUTE_MS,
            engine: Engine::Protect,
            severity: Some(Severity::High),
            status: RecordStatus::Pending,
            confidence: 0.87,
            evidence: vec![
                factor("payee age under 10 min", 0.63),
                factor("device fingerprint change", 0.41),
                factor("amount below reporting line", 0.22),
            ],
            citations: Vec::new(),
        },
        Record {
            id: "thr-0929".into(),
            title: "Invoice mule pattern across three vendors".into(),
            timestamp: "3 hours ago".into(),
            sort_key: now - 3 * HOUR_MS,
            engine: Engine::Protect,
            severity: Some(Severity::Medium),
            status: RecordStatus::Pending,
            confidence: 0.78,
            evidence: vec![
                factor("shared bank account", 0.52),
                factor("sequential invoice numbers", 0.3),
            ],
            citations: Vec::new(),
        },
        Record {
            id: "thr-0928".into(),
            title: "Phishing domain lookalike registered".into(),
            timestamp: "Yesterday".into(),
            sort_key: now - DAY_MS + 2 * HOUR_MS,
            engine: Engine::Protect,
            severity: Some(Severity::Low),
            status: RecordStatus::Verified,
            confidence: 0.55,
            evidence: vec![factor("levenshtein distance 1", 0.4)],
            citations: vec![citation(
                "Domain watch",
                "aegis-pay.example registered via privacy proxy.",
                None,
            )],
        },
    ]
}

/// Execute queue: automations with a readiness confidence (higher is better).
pub fn execution_queue() -> Vec<Record> {
    let now = baseline_ms();
    vec![
        Record {
            id: "exe-7741".into(),
            title: "Sweep idle operating cash to reserve".into(),
            timestamp: "In 5 min".into(),
            sort_key: now + 5 * MINUTE_MS,
            engine: Engine::Execute,
            severity: None,
            status: RecordStatus::Pending,
            confidence: 0.95,
            evidence: vec![
                factor("balance threshold met", 0.62),
                factor("no pending debits", 0.33),
            ],
            citations: Vec::new(),
        },
        Record {
            id: "exe-7740".into(),
            title: "Renew FX hedge for EUR exposure".into(),
            timestamp: "8 min ago".into(),
            sort_key: now - 8 * MINUTE_MS,
            engine: Engine::Execute,
            severity: None,
            status: RecordStatus::AutoExecuted,
            confidence: 0.91,
            evidence: vec![
                factor("mandate auto-renew", 0.55),
                factor("spread within band", 0.28),
            ],
            citations: vec![citation(
                "Hedging mandate",
                "Rolling 30-day EUR hedge renews unless spread exceeds 40bps.",
                None,
            )],
        },
        Record {
            id: "exe-7739".into(),
            title: "Escalate stuck supplier onboarding".into(),
            timestamp: "1 hour ago".into(),
            sort_key: now - HOUR_MS,
            engine: Engine::Execute,
            severity: Some(Severity::Medium),
            status: RecordStatus::Pending,
            confidence: 0.68,
            evidence: vec![factor("KYC document expired", 0.47)],
            citations: Vec::new(),
        },
        Record {
            id: "exe-7738".into(),
            title: "Cancel duplicate wire #88121".into(),
            timestamp: "Yesterday".into(),
            sort_key: now - DAY_MS + 4 * HOUR_MS,
            engine: Engine::Execute,
            severity: Some(Severity::High),
            status: RecordStatus::Approved,
            confidence: 0.89,
            evidence: vec![
                factor("identical amount and payee", 0.58),
                factor("submitted 40s apart", 0.36),
            ],
            citations: Vec::new(),
        },
    ]
}

/// Grow recommendations feed. No severity axis; scores are model confidence.
pub fn recommendations() -> Vec<Record> {
    let now = baseline_ms();
    vec![
        Record {
            id: "rec-3310".into(),
            title: "Shift 12% of reserves into 3-month T-bills".into(),
            timestamp: "10 min ago".into(),
            sort_key: now - 10 * MINUTE_MS,
            engine: Engine::Grow,
            severity: None,
            status: RecordStatus::Pending,
            confidence: 0.92,
            evidence: vec![
                factor("yield pickup 80bps", 0.57),
                factor("liquidity runway intact", 0.35),
            ],
            citations: vec![citation(
                "Treasury policy",
                "Short-duration instruments allowed up to 25% of reserves.",
                None,
            )],
        },
        Record {
            id: "rec-3309".into(),
            title: "Consolidate card programs to cut fees".into(),
            timestamp: "3 hours ago".into(),
            sort_key: now - 3 * HOUR_MS,
            engine: Engine::Grow,
            severity: None,
            status: RecordStatus::Pending,
            confidence: 0.81,
            evidence: vec![
                factor("overlapping fee schedules", 0.44),
                factor("migration effort", -0.25),
            ],
            citations: Vec::new(),
        },
        Record {
            id: "rec-3308".into(),
            title: "Renegotiate payment processor tier".into(),
            timestamp: "Yesterday".into(),
            sort_key: now - DAY_MS + 6 * HOUR_MS,
            engine: Engine::Grow,
            severity: None,
            status: RecordStatus::Approved,
            confidence: 0.76,
            evidence: vec![factor("volume 18% above tier floor", 0.5)],
            citations: Vec::new(),
        },
        Record {
            id: "rec-3307".into(),
            title: "Close dormant subsidiary account".into(),
            timestamp: "2 days ago".into(),
            sort_key: now - 2 * DAY_MS,
            engine: Engine::Grow,
            severity: None,
            status: RecordStatus::Rejected,
            confidence: 0.64,
            evidence: vec![
                factor("zero activity 9 months", 0.42),
                factor("pending legal hold", -0.39),
            ],
            citations: Vec::new(),
        },
    ]
}

/// Extra alerts drip-fed by the demo playback.
pub fn alert_stream() -> Vec<Record> {
    let now = baseline_ms();
    vec![
        Record {
            id: "alr-2208".into(),
            title: "Round-amount transfers to new beneficiary".into(),
            timestamp: "Live".into(),
            sort_key: now,
            engine: Engine::Protect,
            severity: Some(Severity::High),
            status: RecordStatus::Pending,
            confidence: 0.84,
            evidence: vec![
                factor("round amounts x3", 0.46),
                factor("beneficiary age 2 days", 0.31),
            ],
            citations: Vec::new(),
        },
        Record {
            id: "alr-2209".into(),
            title: "Policy exception requested on spend limit".into(),
            timestamp: "Live".into(),
            sort_key: now + 1,
            engine: Engine::Govern,
            severity: Some(Severity::Medium),
            status: RecordStatus::Pending,
            confidence: 0.71,
            evidence: vec![factor("third exception this month", 0.38)],
            citations: Vec::new(),
        },
        Record {
            id: "alr-2210".into(),
            title: "Settlement webhook latency degraded".into(),
            timestamp: "Live".into(),
            sort_key: now + 2,
            engine: Engine::Execute,
            severity: Some(Severity::Low),
            status: RecordStatus::Verified,
            confidence: 0.45,
            evidence: vec![factor("p95 latency 2.4s", 0.29)],
            citations: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_records;

    #[test]
    fn every_fixture_set_passes_validation() {
        for records in [
            ledger_decisions(),
            alert_feed(),
            threat_signals(),
            execution_queue(),
            recommendations(),
            alert_stream(),
        ] {
            let total = records.len();
            let (accepted, rejected) = validate_records(records);
            assert_eq!(accepted.len(), total);
            assert!(rejected.is_empty());
        }
    }

    #[test]
    fn fixture_ids_are_unique_within_each_page() {
        for records in [
            ledger_decisions(),
            alert_feed(),
            threat_signals(),
            execution_queue(),
            recommendations(),
        ] {
            let mut ids: Vec<_> = records.iter().map(|r| r.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), records.len());
        }
    }
}
