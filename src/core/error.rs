use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::validator::VIN_LENGTH;

/// Errors that can occur while decoding a VIN.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VinError {
    /// The VIN was empty or whitespace-only.
    #[error("VIN cannot be empty")]
    Empty,

    /// The normalized VIN does not have exactly 17 characters.
    #[error("invalid VIN: VIN must be exactly 17 characters (got {actual})")]
    InvalidLength { actual: usize },

    /// The VIN contains `I`, `O`, `Q` or characters outside `[A-HJ-NPR-Z0-9]`.
    #[error("invalid VIN: {}", join_issues(.0))]
    InvalidCharacters(Vec<VinIssue>),

    /// WMI database content could not be loaded.
    #[error("invalid WMI database: {0}")]
    Database(String),

    /// The remote registry lookup failed.
    #[error("remote decode failed: {0}")]
    Remote(#[from] RemoteError),
}

impl VinError {
    /// Turn the errors of a failed validation into a typed decode error.
    ///
    /// Returns `None` when the validation result carries no errors.
    pub fn from_issues(errors: &[VinIssue]) -> Option<Self> {
        match errors.first()? {
            VinIssue::Empty => Some(Self::Empty),
            VinIssue::InvalidLength { actual } => Some(Self::InvalidLength { actual: *actual }),
            _ => Some(Self::InvalidCharacters(errors.to_vec())),
        }
    }
}

/// Failure of the remote vehicle registry collaborator.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum RemoteError {
    /// Connection, timeout or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// The registry answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The registry answered but returned no decode results.
    #[error("no results from registry")]
    NoResults,
}

/// A single finding produced by VIN validation.
///
/// Used both for errors (which make a VIN invalid) and for warnings
/// (which never do).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum VinIssue {
    /// Nothing left after trimming.
    Empty,
    /// Wrong number of characters.
    InvalidLength { actual: usize },
    /// Contains one of the letters `I`, `O`, `Q`.
    ForbiddenLetters,
    /// Contains a character outside `[A-HJ-NPR-Z0-9]`.
    IllegalCharacters,
    /// Position 9 does not match the computed check digit.
    CheckDigitMismatch { expected: char, found: char },
}

impl std::fmt::Display for VinIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "VIN cannot be empty"),
            Self::InvalidLength { actual } => {
                write!(f, "VIN must be exactly {VIN_LENGTH} characters (got {actual})")
            }
            Self::ForbiddenLetters => {
                write!(f, "VIN contains invalid characters (I, O, Q are not allowed)")
            }
            Self::IllegalCharacters => write!(
                f,
                "VIN contains invalid characters (only A-Z and 0-9 allowed, excluding I, O, Q)"
            ),
            Self::CheckDigitMismatch { expected, found } => write!(
                f,
                "check digit validation failed: expected '{expected}', found '{found}' \
                 (VIN may be from a region that doesn't use check digits)"
            ),
        }
    }
}

/// Join issue messages the way they are reported to callers.
pub fn join_issues(issues: &[VinIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_issue_maps_to_empty_error() {
        let err = VinError::from_issues(&[VinIssue::Empty]).unwrap();
        assert!(matches!(err, VinError::Empty));
        assert_eq!(err.to_string(), "VIN cannot be empty");
    }

    #[test]
    fn length_issue_maps_to_length_error() {
        let err = VinError::from_issues(&[VinIssue::InvalidLength { actual: 7 }]).unwrap();
        assert!(matches!(err, VinError::InvalidLength { actual: 7 }));
        assert!(err.to_string().contains("got 7"));
    }

    #[test]
    fn character_issues_are_joined() {
        let err =
            VinError::from_issues(&[VinIssue::ForbiddenLetters, VinIssue::IllegalCharacters])
                .unwrap();
        let msg = err.to_string();
        assert!(msg.starts_with("invalid VIN: "));
        assert!(msg.contains("I, O, Q are not allowed"));
        assert!(msg.contains("only A-Z and 0-9 allowed"));
    }

    #[test]
    fn no_issues_no_error() {
        assert!(VinError::from_issues(&[]).is_none());
    }

    #[test]
    fn issue_serializes_with_code_tag() {
        let json = serde_json::to_string(&VinIssue::InvalidLength { actual: 3 }).unwrap();
        assert_eq!(json, r#"{"code":"invalid_length","actual":3}"#);
    }
}
