use abi::{Booking, BookingDraft, BookingError, BookingId, Facility};
use async_trait::async_trait;

mod client;
mod session;

pub use client::ApiClient;
pub use session::Session;

/// The remote booking service as the client sees it. `ApiClient` is the
/// HTTP implementation; tests substitute an in-memory fake.
#[async_trait]
pub trait BookingApi {
    /// fetch the facility list
    async fn list_facilities(&self) -> Result<Vec<Facility>, BookingError>;
    /// fetch all bookings
    async fn list_bookings(&self) -> Result<Vec<Booking>, BookingError>;
    /// create a booking, returning the server's record of it
    async fn create_booking(&self, draft: &BookingDraft) -> Result<Booking, BookingError>;
    /// replace the fields of an existing booking
    async fn update_booking(&self, id: BookingId, draft: &BookingDraft) -> Result<Booking, BookingError>;
    /// cancel a booking; it stays listed but frees its slot range
    async fn cancel_booking(&self, id: BookingId) -> Result<(), BookingError>;
    /// remove a booking entirely
    async fn delete_booking(&self, id: BookingId) -> Result<(), BookingError>;
}
