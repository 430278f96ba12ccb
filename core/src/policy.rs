//! policy.rs
//! Upload pre-checks run before any byte of the container is parsed:
//! size floor/ceiling and filename extension gating.

use std::fmt;

use crate::config::GuardConfig;

/// Extensions that must never appear as an inner segment (`name.exe.af`).
pub static EXECUTABLE_EXTENSIONS: &[&str] = &[
    "exe", "com", "bat", "cmd", "scr", "pif", "msi", "dll", "cpl",
    "js", "jse", "vbs", "vbe", "wsf", "ps1", "sh", "jar", "app", "lnk", "hta",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// Empty stem, path separators or control characters.
    InvalidFilename { name: String },
    MissingExtension { name: String },
    WrongExtension { found: String, expected: String },
    /// An executable extension hides in front of the real one.
    DisguisedExtension { name: String, inner: String },
    TooSmall { have: usize, min: usize },
    TooLarge { have: usize, max: usize },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PolicyError::*;
        match self {
            InvalidFilename { name } =>
                write!(f, "invalid filename: {:?}", name),
            MissingExtension { name } =>
                write!(f, "filename {:?} has no extension", name),
            WrongExtension { found, expected } =>
                write!(f, "wrong file extension: .{} (expected .{})", found, expected),
            DisguisedExtension { name, inner } =>
                write!(f, "filename {:?} hides a .{} extension", name, inner),
            TooSmall { have, min } =>
                write!(f, "file too small: {} bytes (minimum {})", have, min),
            TooLarge { have, max } =>
                write!(f, "file too large: {} bytes (maximum {})", have, max),
        }
    }
}

impl std::error::Error for PolicyError {}

pub fn check_size(len: usize, cfg: &GuardConfig) -> Result<(), PolicyError> {
    if len < cfg.min_upload_bytes {
        return Err(PolicyError::TooSmall { have: len, min: cfg.min_upload_bytes });
    }
    if len > cfg.max_upload_bytes {
        return Err(PolicyError::TooLarge { have: len, max: cfg.max_upload_bytes });
    }
    Ok(())
}

pub fn check_filename(name: &str, cfg: &GuardConfig) -> Result<(), PolicyError> {
    let invalid = || PolicyError::InvalidFilename { name: name.to_string() };

    if name.chars().any(|c| c == '/' || c == '\\' || c.is_control()) {
        return Err(invalid());
    }

    let Some((stem, ext)) = name.rsplit_once('.') else {
        return Err(PolicyError::MissingExtension { name: name.to_string() });
    };
    if stem.is_empty() {
        return Err(invalid());
    }
    if !ext.eq_ignore_ascii_case(&cfg.allowed_extension) {
        return Err(PolicyError::WrongExtension {
            found: ext.to_string(),
            expected: cfg.allowed_extension.clone(),
        });
    }

    // Every segment after the first one in the stem is a candidate extension.
    if let Some(inner) = stem
        .split('.')
        .skip(1)
        .map(str::trim)
        .find(|seg| EXECUTABLE_EXTENSIONS.iter().any(|x| seg.eq_ignore_ascii_case(x)))
    {
        return Err(PolicyError::DisguisedExtension {
            name: name.to_string(),
            inner: inner.to_ascii_lowercase(),
        });
    }

    Ok(())
}

/// Size first, then filename.
pub fn check_upload(name: &str, len: usize, cfg: &GuardConfig) -> Result<(), PolicyError> {
    check_size(len, cfg)?;
    check_filename(name, cfg)
}
