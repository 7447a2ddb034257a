mod remote;

use thiserror::Error;

pub use remote::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("unknown error")]
    Unknown,

    #[error("invalid timespan: end time must be after start time")]
    InvalidTimespan,

    #[error("invalid facility id: {0}")]
    InvalidFacilityId(i64),

    #[error("invalid user id: {0}")]
    InvalidUserId(i64),

    #[error("invalid time of day: {0}")]
    InvalidTime(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("slot starting {0} is not available")]
    SlotUnavailable(crate::TimeOfDay),

    #[error("selection exceeds the {0}-minute limit for this facility")]
    DurationTooLong(u16),

    #[error("booking conflict")]
    Conflict(ConflictInfo),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("could not reach the booking service: {0}")]
    Connectivity(String),

    #[error("unexpected payload: {0}")]
    Decode(String),
}

impl BookingError {
    /// Message shown to the person driving the client. Raw payloads and
    /// transport details never surface here.
    pub fn user_message(&self) -> String {
        match self {
            BookingError::Conflict(info) => {
                format!("That time slot is already booked: {}", info.message())
            }
            BookingError::NotFound(_) => "The requested booking or facility was not found.".into(),
            BookingError::InvalidInput(_) => {
                "The service rejected the request as invalid. Check the booking details.".into()
            }
            BookingError::Server(_) => {
                "The booking service had an internal problem. Try again later.".into()
            }
            BookingError::Connectivity(_) => {
                "Could not reach the booking service. Check your connection.".into()
            }
            BookingError::Decode(_) => {
                "The booking service answered in an unexpected format.".into()
            }
            other => other.to_string(),
        }
    }
}
