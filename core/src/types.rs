//! types.rs
//! Crate-wide error, stable error codes and the inspection verdict.

use serde::Serialize;
use thiserror::Error;

use crate::container::StructureError;
use crate::payload::PayloadError;
use crate::policy::PolicyError;
use crate::threat::Threat;

/// Unified error covering policy, threat, structural and payload failures.
/// - `From<T>` impls enable `?` across tiers.
/// - `code()` gives the stable identifier surfaced to collaborators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuardError {
    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("threat detected: {0}")]
    Threat(Threat),

    #[error("structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("payload error: {0}")]
    Payload(PayloadError),
}

impl From<PayloadError> for GuardError {
    fn from(e: PayloadError) -> Self {
        match e {
            PayloadError::Structure(s) => GuardError::Structure(s),
            other => GuardError::Payload(other),
        }
    }
}

/// Stable error identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // policy
    InvalidFilename,
    MissingExtension,
    WrongExtension,
    DisguisedExtension,
    FileTooSmall,
    FileTooLarge,
    // threat
    ThreatDetected,
    // structure
    ContainerTooSmall,
    InvalidSignature,
    MissingHeader,
    InvalidHeader,
    DuplicateHeader,
    MissingTerminator,
    InvalidTerminator,
    OversizedChunk,
    TooManyChunks,
    Truncated,
    InvalidChunkType,
    ChecksumMismatch,
    // payload
    NoPayload,
    BadPayloadSignature,
}

impl GuardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GuardError::Policy(e) => match e {
                PolicyError::InvalidFilename { .. }    => ErrorCode::InvalidFilename,
                PolicyError::MissingExtension { .. }   => ErrorCode::MissingExtension,
                PolicyError::WrongExtension { .. }     => ErrorCode::WrongExtension,
                PolicyError::DisguisedExtension { .. } => ErrorCode::DisguisedExtension,
                PolicyError::TooSmall { .. }           => ErrorCode::FileTooSmall,
                PolicyError::TooLarge { .. }           => ErrorCode::FileTooLarge,
            },
            GuardError::Threat(_) => ErrorCode::ThreatDetected,
            GuardError::Structure(e) => structure_code(e),
            GuardError::Payload(e) => match e {
                PayloadError::Structure(s)                => structure_code(s),
                PayloadError::NoPayload                   => ErrorCode::NoPayload,
                PayloadError::BadPayloadSignature { .. }  => ErrorCode::BadPayloadSignature,
            },
        }
    }
}

fn structure_code(e: &StructureError) -> ErrorCode {
    use StructureError::*;
    match e {
        TooSmall { .. }          => ErrorCode::ContainerTooSmall,
        InvalidSignature { .. }  => ErrorCode::InvalidSignature,
        MissingHeader { .. }     => ErrorCode::MissingHeader,
        InvalidHeader(_)         => ErrorCode::InvalidHeader,
        DuplicateHeader { .. }   => ErrorCode::DuplicateHeader,
        MissingTerminator { .. } => ErrorCode::MissingTerminator,
        InvalidTerminator { .. } => ErrorCode::InvalidTerminator,
        OversizedChunk { .. }    => ErrorCode::OversizedChunk,
        TooManyChunks { .. }     => ErrorCode::TooManyChunks,
        Truncated { .. }         => ErrorCode::Truncated,
        InvalidChunkType { .. }  => ErrorCode::InvalidChunkType,
        ChecksumMismatch { .. }  => ErrorCode::ChecksumMismatch,
    }
}

/// Overall outcome of an inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Clean,
    Rejected(GuardError),
    StructurallyInvalid(StructureError),
}

impl Verdict {
    pub fn from_error(e: GuardError) -> Self {
        match e {
            GuardError::Structure(s) => Verdict::StructurallyInvalid(s),
            GuardError::Payload(PayloadError::Structure(s)) => Verdict::StructurallyInvalid(s),
            other => Verdict::Rejected(other),
        }
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        matches!(self, Verdict::Clean)
    }

    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Verdict::Clean => None,
            Verdict::Rejected(e) => Some(e.code()),
            Verdict::StructurallyInvalid(s) => Some(structure_code(s)),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Verdict::Clean => None,
            Verdict::Rejected(e) => Some(e.to_string()),
            Verdict::StructurallyInvalid(s) => Some(GuardError::Structure(s.clone()).to_string()),
        }
    }
}
