use serde::{Deserialize, Serialize};

use crate::FacilityId;

/// A bookable facility as reported by the remote service. Immutable from
/// the client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Facility {
    pub fn kind(&self) -> FacilityKind {
        FacilityKind::classify(&self.name)
    }
}

/// Classification used only to pick the maximum booking duration the client
/// will accept before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityKind {
    /// Residence-type facilities, bookable up to a full day.
    Residential,
    /// Everything else (meeting rooms, courts, labs, auditoriums).
    Academic,
}

const RESIDENTIAL_KEYWORDS: &[&str] = &[
    "residence",
    "residential",
    "hostel",
    "dorm",
    "apartment",
    "quarters",
];

impl FacilityKind {
    pub fn classify(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        if RESIDENTIAL_KEYWORDS.iter().any(|kw| name.contains(kw)) {
            FacilityKind::Residential
        } else {
            FacilityKind::Academic
        }
    }

    /// Duration ceiling for a single booking, in minutes.
    pub fn max_minutes(&self) -> u16 {
        match self {
            FacilityKind::Residential => 24 * 60,
            FacilityKind::Academic => 6 * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residence_names_classify_residential() {
        assert_eq!(FacilityKind::classify("Graduate Residence Hall"), FacilityKind::Residential);
        assert_eq!(FacilityKind::classify("North Dormitory"), FacilityKind::Residential);
        assert_eq!(FacilityKind::classify("Visitor Apartment 3"), FacilityKind::Residential);
    }

    #[test]
    fn everything_else_classifies_academic() {
        assert_eq!(FacilityKind::classify("Conference Room A"), FacilityKind::Academic);
        assert_eq!(FacilityKind::classify("Tennis Court"), FacilityKind::Academic);
        assert_eq!(FacilityKind::classify("Auditorium"), FacilityKind::Academic);
    }

    #[test]
    fn duration_ceilings() {
        assert_eq!(FacilityKind::Residential.max_minutes(), 1440);
        assert_eq!(FacilityKind::Academic.max_minutes(), 360);
    }

    #[test]
    fn facility_decodes_without_description() {
        let f: Facility = serde_json::from_str(
            r#"{"id": 1, "name": "Conference Room A", "location": "Building 1, Floor 2", "capacity": 20}"#,
        )
        .unwrap();
        assert_eq!(f.kind(), FacilityKind::Academic);
        assert_eq!(f.description, None);
    }
}
