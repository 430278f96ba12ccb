//! telemetry/counters.rs
//! Mutable counters collected while inspecting uploads.
//!
//! Converted into an immutable `TelemetrySnapshot` at the end of an inspection.
use std::ops::AddAssign;
use serde::{Deserialize, Serialize};

use crate::threat::{Threat, ThreatKind};

/// Deterministic counters collected during inspection.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub inspections: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub chunks_walked: u64,
    pub bytes_input: u64,
    pub bytes_output: u64,
    pub signature_threats: u64,
    pub content_threats: u64,
}

impl TelemetryCounters {
    /// Record one upload entering inspection.
    pub fn add_input(&mut self, len: usize) {
        self.inspections += 1;
        self.bytes_input += len as u64;
    }

    pub fn add_chunks(&mut self, count: usize) {
        self.chunks_walked += count as u64;
    }

    /// Record a stripped artifact handed back to the caller.
    pub fn add_output(&mut self, len: usize) {
        self.bytes_output += len as u64;
    }

    pub fn add_threat(&mut self, threat: &Threat) {
        match threat.kind {
            ThreatKind::DangerousContent => self.content_threats += 1,
            _ => self.signature_threats += 1,
        }
    }

    pub fn add_outcome(&mut self, accepted: bool) {
        if accepted {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
    }

    /// Bytes removed by stripping.
    pub fn bytes_saved(&self) -> u64 {
        self.bytes_input.saturating_sub(self.bytes_output)
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.inspections += other.inspections;
        self.accepted += other.accepted;
        self.rejected += other.rejected;
        self.chunks_walked += other.chunks_walked;
        self.bytes_input += other.bytes_input;
        self.bytes_output += other.bytes_output;
        self.signature_threats += other.signature_threats;
        self.content_threats += other.content_threats;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
