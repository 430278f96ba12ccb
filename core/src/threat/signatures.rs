//! threat/signatures.rs
//!
//! Denylist of foreign file-format signatures.
//!
//! The table is ordered; the first match wins, so longer and more specific
//! patterns sit above shorter ones of the same family. It is `'static` and
//! read-only, shared by every concurrent scan.

use crate::constants::NULL_PREFIX_LEN;
use crate::threat::types::{ScanOutcome, Threat, ThreatKind};

/// A fixed byte pattern at a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub offset: usize,
    pub bytes: &'static [u8],
    pub kind: ThreatKind,
    pub label: &'static str,
}

impl Signature {
    const fn at(offset: usize, bytes: &'static [u8], kind: ThreatKind, label: &'static str) -> Self {
        Self { offset, bytes, kind, label }
    }

    pub fn matches(&self, buf: &[u8]) -> bool {
        buf.get(self.offset..)
            .map(|tail| tail.starts_with(self.bytes))
            .unwrap_or(false)
    }
}

use ThreatKind::*;

pub static DENYLIST: &[Signature] = &[
    // --- native executables ---
    Signature::at(0, b"MZ",                                     NativeExecutable, "PE/DOS executable"),
    Signature::at(0, &[0x7F, b'E', b'L', b'F'],                 NativeExecutable, "ELF executable"),
    Signature::at(0, &[0xFE, 0xED, 0xFA, 0xCE],                 NativeExecutable, "Mach-O 32-bit"),
    Signature::at(0, &[0xFE, 0xED, 0xFA, 0xCF],                 NativeExecutable, "Mach-O 64-bit"),
    Signature::at(0, &[0xCE, 0xFA, 0xED, 0xFE],                 NativeExecutable, "Mach-O 32-bit (LE)"),
    Signature::at(0, &[0xCF, 0xFA, 0xED, 0xFE],                 NativeExecutable, "Mach-O 64-bit (LE)"),
    Signature::at(0, &[0xCA, 0xFE, 0xBA, 0xBE],                 NativeExecutable, "Mach-O universal / Java class"),
    // --- scripts ---
    Signature::at(0, b"#!",                                     Script,           "shebang script"),
    Signature::at(0, b"<?php",                                  Script,           "PHP script"),
    // --- archives / containers ---
    Signature::at(0, b"PK\x03\x04",                             Archive,          "ZIP archive"),
    Signature::at(0, b"PK\x05\x06",                             Archive,          "ZIP archive (empty)"),
    Signature::at(0, b"PK\x07\x08",                             Archive,          "ZIP archive (spanned)"),
    Signature::at(0, b"Rar!\x1A\x07\x01\x00",                   Archive,          "RAR5 archive"),
    Signature::at(0, b"Rar!\x1A\x07",                           Archive,          "RAR archive"),
    Signature::at(0, &[b'7', b'z', 0xBC, 0xAF, 0x27, 0x1C],     Archive,          "7-Zip archive"),
    Signature::at(0, b"MSCF",                                   Archive,          "Cabinet archive"),
    Signature::at(257, b"ustar",                                Archive,          "TAR archive"),
    // --- documents ---
    Signature::at(0, b"%PDF-",                                  Document,         "PDF document"),
    Signature::at(0, &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1], Document, "OLE compound document"),
    Signature::at(0, b"{\\rtf",                                 Document,         "RTF document"),
    // --- compressed streams ---
    Signature::at(0, &[0x1F, 0x8B],                             CompressedStream, "gzip stream"),
    Signature::at(0, b"BZh",                                    CompressedStream, "bzip2 stream"),
    Signature::at(0, &[0xFD, b'7', b'z', b'X', b'Z', 0x00],     CompressedStream, "xz stream"),
    Signature::at(0, &[0x28, 0xB5, 0x2F, 0xFD],                 CompressedStream, "zstd frame"),
    Signature::at(0, &[0x04, 0x22, 0x4D, 0x18],                 CompressedStream, "LZ4 frame"),
    // --- heuristics ---
    Signature::at(0, &[0u8; NULL_PREFIX_LEN],                   NullPrefix,       "all-null prefix"),
];

/// Compare the leading bytes (and fixed later offsets) against the denylist.
pub fn scan_signature(buf: &[u8]) -> ScanOutcome {
    match DENYLIST.iter().find(|sig| sig.matches(buf)) {
        Some(sig) => ScanOutcome::Rejected(Threat {
            kind: sig.kind,
            label: sig.label,
            offset: sig.offset,
        }),
        None => ScanOutcome::Clean,
    }
}
