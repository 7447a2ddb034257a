use abi::{
    compute_availability, Booking, BookingDraft, BookingError, BookingId, BookingStatus, Facility,
    FacilityId, Slot, Validator,
};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::BookingApi;

/// Locally cached view of the service plus the operations that keep it
/// consistent. The caches are only ever replaced wholesale by a completed
/// fetch, never patched in place, and every successful mutation re-fetches
/// the booking list so the view cannot diverge from the server.
#[derive(Debug)]
pub struct Session<A: BookingApi> {
    api: A,
    facilities: Vec<Facility>,
    bookings: Vec<Booking>,
}

impl<A: BookingApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            facilities: Vec::new(),
            bookings: Vec::new(),
        }
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn facility(&self, id: FacilityId) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.id == id)
    }

    pub async fn refresh(&mut self) -> Result<(), BookingError> {
        self.facilities = self.api.list_facilities().await?;
        self.refresh_bookings().await
    }

    pub async fn refresh_bookings(&mut self) -> Result<(), BookingError> {
        self.bookings = self.api.list_bookings().await?;
        debug!(count = self.bookings.len(), "replaced booking cache");
        Ok(())
    }

    /// Slot availability for one facility and date, computed from the
    /// cached bookings.
    pub fn availability(&self, facility_id: FacilityId, date: NaiveDate, now: DateTime<Utc>) -> Vec<Slot> {
        compute_availability(facility_id, date, &self.bookings, now)
    }

    /// Cached bookings narrowed by status and a free-text needle (matched
    /// against id, facility id, user id, date, and status), ordered by id.
    pub fn filtered_bookings(&self, status: Option<BookingStatus>, needle: Option<&str>) -> Vec<&Booking> {
        let needle = needle.map(|n| n.trim().to_ascii_lowercase());

        let mut items: Vec<&Booking> = self
            .bookings
            .iter()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .filter(|b| match needle.as_deref() {
                None | Some("") => true,
                Some(n) => {
                    b.id.to_string().contains(n)
                        || b.facility_id.to_string().contains(n)
                        || b.user_id.to_string().contains(n)
                        || b.date.to_string().contains(n)
                        || b.status.to_string().contains(n)
                }
            })
            .collect();
        items.sort_by_key(|b| b.id);
        items
    }

    pub async fn create_booking(&mut self, draft: &BookingDraft) -> Result<Booking, BookingError> {
        draft.validate()?;
        let booking = self.api.create_booking(draft).await?;
        self.refresh_bookings().await?;
        Ok(booking)
    }

    pub async fn update_booking(&mut self, id: BookingId, draft: &BookingDraft) -> Result<Booking, BookingError> {
        draft.validate()?;
        let booking = self.api.update_booking(id, draft).await?;
        self.refresh_bookings().await?;
        Ok(booking)
    }

    pub async fn cancel_booking(&mut self, id: BookingId) -> Result<(), BookingError> {
        self.api.cancel_booking(id).await?;
        self.refresh_bookings().await
    }

    pub async fn delete_booking(&mut self, id: BookingId) -> Result<(), BookingError> {
        self.api.delete_booking(id).await?;
        self.refresh_bookings().await
    }
}
