//! threat/types.rs
//! Threat classification shared by the signature and content tiers.

use std::fmt;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ThreatKind {
    NativeExecutable,
    Script,
    Archive,
    Document,
    CompressedStream,
    NullPrefix,
    DangerousContent,
}

impl fmt::Display for ThreatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThreatKind::NativeExecutable => "native executable",
            ThreatKind::Script           => "script",
            ThreatKind::Archive          => "archive",
            ThreatKind::Document         => "document",
            ThreatKind::CompressedStream => "compressed stream",
            ThreatKind::NullPrefix       => "null prefix",
            ThreatKind::DangerousContent => "dangerous content",
        };
        f.write_str(name)
    }
}

/// One finding: what matched and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Threat {
    pub kind: ThreatKind,
    pub label: &'static str,
    pub offset: usize,
}

impl fmt::Display for Threat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at offset {}", self.kind, self.label, self.offset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Clean,
    Rejected(Threat),
}

impl ScanOutcome {
    #[inline]
    pub fn is_clean(&self) -> bool {
        matches!(self, ScanOutcome::Clean)
    }

    pub fn threat(&self) -> Option<&Threat> {
        match self {
            ScanOutcome::Clean => None,
            ScanOutcome::Rejected(t) => Some(t),
        }
    }

    pub fn kind(&self) -> Option<ThreatKind> {
        self.threat().map(|t| t.kind)
    }
}
