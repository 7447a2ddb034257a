use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    time_overlap, BookingError, BookingId, BookingStatus, FacilityId, TimeOfDay, UserId, Validator,
};

/// Canonical booking record. Whatever naming convention the server uses on
/// the wire, decoding lands here or fails; nothing downstream sees the raw
/// payload shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBooking")]
pub struct Booking {
    pub id: BookingId,
    pub facility_id: FacilityId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: BookingStatus,
    pub purpose: Option<String>,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// True when this booking occupies any part of `[start, end)` on the
    /// given facility and date. Cancelled bookings occupy nothing.
    pub fn occupies(&self, facility_id: FacilityId, date: NaiveDate, start: TimeOfDay, end: TimeOfDay) -> bool {
        self.is_active()
            && self.facility_id == facility_id
            && self.date == date
            && time_overlap(self.start_time, self.end_time, start, end)
    }
}

/// Payload for create and update calls. Serialized camelCase, the
/// convention the service accepts on writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub facility_id: FacilityId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl BookingDraft {
    pub fn new_pending(
        facility_id: FacilityId,
        user_id: UserId,
        date: NaiveDate,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
        purpose: Option<String>,
    ) -> Self {
        Self {
            facility_id,
            user_id,
            date,
            start_time,
            end_time,
            status: BookingStatus::Pending,
            purpose,
        }
    }
}

impl Validator for BookingDraft {
    fn validate(&self) -> Result<(), BookingError> {
        if self.facility_id <= 0 {
            return Err(BookingError::InvalidFacilityId(self.facility_id));
        }

        if self.user_id <= 0 {
            return Err(BookingError::InvalidUserId(self.user_id));
        }

        if self.start_time >= self.end_time {
            return Err(BookingError::InvalidTimespan);
        }

        Ok(())
    }
}

/// Wire shape as actually observed: camelCase, snake_case, nested object
/// references, or bare numeric references for facility and user.
#[derive(Debug, Deserialize)]
struct RawBooking {
    id: Option<BookingId>,
    #[serde(default, alias = "facilityId")]
    facility_id: Option<FacilityId>,
    #[serde(default)]
    facility: Option<EntityRef>,
    #[serde(default, alias = "userId")]
    user_id: Option<UserId>,
    #[serde(default)]
    user: Option<EntityRef>,
    date: Option<String>,
    #[serde(default, alias = "startTime")]
    start_time: Option<TimeOfDay>,
    #[serde(default, alias = "endTime")]
    end_time: Option<TimeOfDay>,
    #[serde(default)]
    status: BookingStatus,
    #[serde(default)]
    purpose: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntityRef {
    Id(i64),
    Object { id: i64 },
}

impl EntityRef {
    fn id(&self) -> i64 {
        match self {
            EntityRef::Id(id) => *id,
            EntityRef::Object { id } => *id,
        }
    }
}

/// Dates arrive either as `YYYY-MM-DD` or as a full datetime; anything after
/// a `T` is dropped before parsing. Start-of-day semantics, explicitly.
fn parse_wire_date(s: &str) -> Result<NaiveDate, BookingError> {
    let date_part = s.split_once('T').map_or(s, |(d, _)| d);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(s.to_string()))
}

impl TryFrom<RawBooking> for Booking {
    type Error = BookingError;

    fn try_from(raw: RawBooking) -> Result<Self, Self::Error> {
        let facility_id = raw
            .facility_id
            .or_else(|| raw.facility.as_ref().map(EntityRef::id))
            .ok_or(BookingError::MissingField("facility id"))?;
        let user_id = raw
            .user_id
            .or_else(|| raw.user.as_ref().map(EntityRef::id))
            .ok_or(BookingError::MissingField("user id"))?;

        Ok(Self {
            id: raw.id.ok_or(BookingError::MissingField("id"))?,
            facility_id,
            user_id,
            date: parse_wire_date(raw.date.as_deref().ok_or(BookingError::MissingField("date"))?)?,
            start_time: raw.start_time.ok_or(BookingError::MissingField("start time"))?,
            end_time: raw.end_time.ok_or(BookingError::MissingField("end time"))?,
            status: raw.status,
            purpose: raw.purpose,
        })
    }
}
