use std::{convert::Infallible, str::FromStr};

use serde::Deserialize;

/// Conflict detail reported by the service. The body is usually its JSON
/// error envelope, but anything unrecognized is kept verbatim rather than
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictInfo {
    Parsed(ApiErrorBody),
    Unparsed(String),
}

impl ConflictInfo {
    /// Infallible by construction: a body that is not the JSON envelope is
    /// carried through unparsed.
    pub fn parse(s: &str) -> Self {
        match serde_json::from_str(s) {
            Ok(body) => Self::Parsed(body),
            Err(_) => Self::Unparsed(s.to_string()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ConflictInfo::Parsed(body) => &body.message,
            ConflictInfo::Unparsed(s) => s,
        }
    }
}

impl FromStr for ConflictInfo {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// The service's error envelope: status code, short error label, message,
/// and optional per-field details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFLICT_BODY: &str = r#"{
        "status": 409,
        "error": "Conflict",
        "message": "Facility is already booked during the requested time slot",
        "path": "uri=/api/bookings"
    }"#;

    #[test]
    fn error_envelope_should_parse() {
        let info: ConflictInfo = CONFLICT_BODY.parse().unwrap();
        match info {
            ConflictInfo::Parsed(body) => {
                assert_eq!(body.status, Some(409));
                assert_eq!(body.error.as_deref(), Some("Conflict"));
                assert_eq!(
                    body.message,
                    "Facility is already booked during the requested time slot"
                );
                assert!(body.details.is_empty());
            }
            ConflictInfo::Unparsed(_) => panic!("expected parsed conflict body"),
        }
    }

    #[test]
    fn validation_details_should_parse() {
        let info: ConflictInfo = r#"{
            "status": 400,
            "error": "Validation Failed",
            "message": "Invalid input parameters",
            "details": ["startTime: must not be null"]
        }"#
        .parse()
        .unwrap();
        match info {
            ConflictInfo::Parsed(body) => {
                assert_eq!(body.details, vec!["startTime: must not be null"]);
            }
            ConflictInfo::Unparsed(_) => panic!("expected parsed body"),
        }
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        let info: ConflictInfo = "500 Internal Server Error".parse().unwrap();
        assert_eq!(info, ConflictInfo::Unparsed("500 Internal Server Error".to_string()));
        assert_eq!(info.message(), "500 Internal Server Error");
    }
}
