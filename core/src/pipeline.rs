//! pipeline.rs
//! Upload inspection wiring: every tier in order, one report out.
//!
//! ```text
//! policy ─► signature scan ─► content scan ─► validation ─► extraction ─► (branding)
//! ```
//!
//! Signature hits are authoritative rejections and end the chain before the
//! full-buffer content scan. Content hits only add threat records. The first
//! hard rejection stops the chain.

use serde::Serialize;
use tracing::{debug, warn};

use crate::branding::embed_branding;
use crate::config::GuardConfig;
use crate::container::validate_with_limits;
use crate::payload::{extract_at_layout, ExtractedPayload, PayloadError};
use crate::policy::check_upload;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::threat::{content_threats, scan_signature, ScanOutcome, Threat};
use crate::types::{ErrorCode, GuardError, Verdict};

/// Everything learned about one upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub verdict: Verdict,
    pub threats: Vec<Threat>,
    pub extracted: Option<ExtractedPayload>,
    pub telemetry: TelemetrySnapshot,
}

/// Serialisable summary for collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub threats: Vec<Threat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ExtractedPayload>,
    pub telemetry: TelemetrySnapshot,
}

impl UploadReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Inspection {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.verdict.is_clean()
    }

    pub fn report(&self) -> UploadReport {
        UploadReport {
            valid: self.is_valid(),
            error_code: self.verdict.code(),
            message: self.verdict.message(),
            threats: self.threats.clone(),
            payload: self.extracted.clone(),
            telemetry: self.telemetry.clone(),
        }
    }

    /// The stripped artifact, or the reason there is none.
    pub fn into_result(self) -> Result<ExtractedPayload, GuardError> {
        match (self.verdict, self.extracted) {
            (Verdict::Clean, Some(extracted)) => Ok(extracted),
            (Verdict::Rejected(e), _) => Err(e),
            (Verdict::StructurallyInvalid(s), _) => Err(GuardError::Structure(s)),
            (Verdict::Clean, None) => Err(GuardError::Payload(PayloadError::NoPayload)),
        }
    }
}

/// Run every tier against one upload.
pub fn inspect_upload(filename: &str, bytes: &[u8], cfg: &GuardConfig) -> Inspection {
    inspect(filename, bytes, None, cfg)
}

/// Like [`inspect_upload`], then brand the stripped artifact.
/// Branding is best-effort and never turns an accepted upload into a rejection.
pub fn inspect_upload_branded(
    filename: &str,
    bytes: &[u8],
    branding: &[u8],
    cfg: &GuardConfig,
) -> Inspection {
    inspect(filename, bytes, Some(branding), cfg)
}

fn inspect(filename: &str, bytes: &[u8], branding: Option<&[u8]>, cfg: &GuardConfig) -> Inspection {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();
    let mut threats = Vec::new();

    counters.add_input(bytes.len());
    let outcome = run_tiers(filename, bytes, cfg, &mut timer, &mut counters, &mut threats)
        .map(|extracted| match branding {
            Some(image) => timer.time(Stage::Brand, || {
                let branded = embed_branding(&extracted.stripped_payload, image);
                extracted.with_branding(branded)
            }),
            None => extracted,
        });

    let (verdict, extracted) = match outcome {
        Ok(extracted) => {
            counters.add_output(extracted.stripped_size);
            (Verdict::Clean, Some(extracted))
        }
        Err(e) => {
            warn!(filename, code = ?e.code(), error = %e, "upload rejected");
            (Verdict::from_error(e), None)
        }
    };
    counters.add_outcome(verdict.is_clean());

    timer.finish();
    Inspection {
        verdict,
        threats,
        extracted,
        telemetry: TelemetrySnapshot::from(&counters, &timer),
    }
}

fn run_tiers(
    filename: &str,
    bytes: &[u8],
    cfg: &GuardConfig,
    timer: &mut TelemetryTimer,
    counters: &mut TelemetryCounters,
    threats: &mut Vec<Threat>,
) -> Result<ExtractedPayload, GuardError> {
    timer.time(Stage::Policy, || check_upload(filename, bytes.len(), cfg))?;

    if let ScanOutcome::Rejected(threat) = timer.time(Stage::SignatureScan, || scan_signature(bytes)) {
        counters.add_threat(&threat);
        threats.push(threat.clone());
        return Err(GuardError::Threat(threat));
    }

    // Advisory tier: recorded even when validation or extraction rejects later.
    if cfg.scan_content {
        for threat in timer.time(Stage::ContentScan, || content_threats(bytes)) {
            debug!(threat = %threat, "content threat recorded");
            counters.add_threat(&threat);
            threats.push(threat);
        }
    }

    let layout = timer.time(Stage::Validate, || validate_with_limits(bytes, &cfg.limits))?;
    counters.add_chunks(layout.chunk_count);

    let extracted = timer.time(Stage::Extract, || extract_at_layout(bytes, &layout))?;
    debug!(
        filename,
        original = extracted.original_size,
        stripped = extracted.stripped_size,
        "upload accepted"
    );
    Ok(extracted)
}
