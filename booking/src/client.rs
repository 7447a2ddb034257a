use abi::{
    ApiConfig, ApiErrorBody, Booking, BookingDraft, BookingError, BookingId, ConflictInfo, Facility,
};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::BookingApi;

/// HTTP client for the booking service. Requests run sequentially; there is
/// no retry beyond the configured path candidates and no timeout beyond the
/// runtime default.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Try each candidate URL in order and return the first successful
    /// response body. A connectivity failure or a 404 moves on to the next
    /// candidate (the path may simply not exist on this deployment); any
    /// other service answer is definitive and is returned as is.
    async fn try_candidates(
        &self,
        method: Method,
        urls: &[String],
        draft: Option<&BookingDraft>,
    ) -> Result<String, BookingError> {
        let mut last_err = BookingError::Unknown;

        for (attempt, url) in urls.iter().enumerate() {
            if attempt > 0 {
                warn!(url = url.as_str(), "falling back to alternate booking path");
            }
            debug!(method = %method, url = url.as_str(), "sending request");

            let mut request = self.http.request(method.clone(), url);
            if let Some(draft) = draft {
                request = request.json(draft);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    last_err = BookingError::Connectivity(e.to_string());
                    continue;
                }
            };

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| BookingError::Connectivity(e.to_string()))?;

            if status.is_success() {
                return Ok(body);
            }

            let err = map_status(status, &body);
            match err {
                BookingError::NotFound(_) => last_err = err,
                _ => return Err(err),
            }
        }

        Err(last_err)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        urls: &[String],
        draft: Option<&BookingDraft>,
    ) -> Result<T, BookingError> {
        let body = self.try_candidates(method, urls, draft).await?;
        serde_json::from_str(&body).map_err(|e| BookingError::Decode(e.to_string()))
    }
}

/// Map a non-success response onto the error taxonomy. The body is folded
/// into the error as a structured message where the service's JSON envelope
/// parses, verbatim otherwise.
fn map_status(status: StatusCode, body: &str) -> BookingError {
    match status.as_u16() {
        404 => BookingError::NotFound(extract_message(body)),
        409 => BookingError::Conflict(ConflictInfo::parse(body)),
        400 => BookingError::InvalidInput(extract_message(body)),
        500..=599 => BookingError::Server(extract_message(body)),
        401..=499 => BookingError::InvalidInput(extract_message(body)),
        _ => BookingError::Unknown,
    }
}

fn extract_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.to_string())
}

#[async_trait]
impl BookingApi for ApiClient {
    async fn list_facilities(&self) -> Result<Vec<Facility>, BookingError> {
        self.fetch_json(Method::GET, &[self.config.facilities_url()], None)
            .await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, BookingError> {
        self.fetch_json(Method::GET, &self.config.booking_urls(), None)
            .await
    }

    async fn create_booking(&self, draft: &BookingDraft) -> Result<Booking, BookingError> {
        self.fetch_json(Method::POST, &self.config.booking_urls(), Some(draft))
            .await
    }

    async fn update_booking(&self, id: BookingId, draft: &BookingDraft) -> Result<Booking, BookingError> {
        self.fetch_json(Method::PUT, &self.config.booking_item_urls(id), Some(draft))
            .await
    }

    async fn cancel_booking(&self, id: BookingId) -> Result<(), BookingError> {
        self.try_candidates(Method::PUT, &self.config.booking_cancel_urls(id), None)
            .await?;
        Ok(())
    }

    async fn delete_booking(&self, id: BookingId) -> Result<(), BookingError> {
        self.try_candidates(Method::DELETE, &self.config.booking_item_urls(id), None)
            .await?;
        Ok(())
    }
}
