mod availability;
mod config;
mod error;
mod selection;
mod types;

pub use availability::*;
pub use config::*;
pub use error::*;
pub use selection::*;
pub use types::*;

pub type BookingId = i64;
pub type FacilityId = i64;
pub type UserId = i64;
