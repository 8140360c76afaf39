//! HTTP handlers for booking endpoints.
//!
//! These handlers connect Axum routes to the booking command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::booking::{
    BookingGuard, GetBookingHandler, GetBookingQuery, InsertBookingCommand, InsertBookingHandler,
    UpdateBookingCommand, UpdateBookingHandler,
};
use crate::domain::booking::BookingError;
use crate::domain::foundation::{BookingId, RoomId, ValidationError};
use crate::ports::{BookingRepository, EnrollmentReader, RoomReader, TicketReader};

use super::dto::{BookingIdResponse, BookingRequest, BookingResponse, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the booking routes.
#[derive(Clone)]
pub struct BookingAppState {
    pub enrollment_reader: Arc<dyn EnrollmentReader>,
    pub ticket_reader: Arc<dyn TicketReader>,
    pub room_reader: Arc<dyn RoomReader>,
    pub booking_repository: Arc<dyn BookingRepository>,
}

impl BookingAppState {
    fn guard(&self) -> BookingGuard {
        BookingGuard::new(
            self.enrollment_reader.clone(),
            self.ticket_reader.clone(),
            self.room_reader.clone(),
        )
    }

    /// Create handlers on demand from the shared state.
    pub fn get_booking_handler(&self) -> GetBookingHandler {
        GetBookingHandler::new(self.guard(), self.booking_repository.clone())
    }

    pub fn insert_booking_handler(&self) -> InsertBookingHandler {
        InsertBookingHandler::new(self.guard(), self.booking_repository.clone())
    }

    pub fn update_booking_handler(&self) -> UpdateBookingHandler {
        UpdateBookingHandler::new(self.guard(), self.booking_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /booking - Get the caller's booking with its room
pub async fn get_booking(
    State(state): State<BookingAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, BookingApiError> {
    let handler = state.get_booking_handler();
    let query = GetBookingQuery { user_id: user.id };

    let result = handler.handle(query).await?;

    Ok(Json(BookingResponse::from(result)))
}

/// POST /booking - Book a room
pub async fn insert_booking(
    State(state): State<BookingAppState>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, BookingApiError> {
    let Json(request) = payload?;
    let room_id = parse_room_id(request.room_id)?;

    let handler = state.insert_booking_handler();
    let cmd = InsertBookingCommand {
        user_id: user.id,
        room_id,
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(BookingIdResponse {
        booking_id: result.booking_id.as_i32(),
    }))
}

/// PUT /booking/:bookingId - Move the caller's booking to another room
pub async fn update_booking(
    State(state): State<BookingAppState>,
    RequireAuth(user): RequireAuth,
    Path(booking_id): Path<String>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, BookingApiError> {
    let booking_id: BookingId = booking_id.parse()?;
    let Json(request) = payload?;
    let room_id = parse_room_id(request.room_id)?;

    let handler = state.update_booking_handler();
    let cmd = UpdateBookingCommand {
        booking_id,
        user_id: user.id,
        room_id,
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(BookingIdResponse {
        booking_id: result.booking_id.as_i32(),
    }))
}

fn parse_room_id(raw: i64) -> Result<RoomId, BookingApiError> {
    RoomId::try_from_i64(raw).map_err(BookingApiError::from)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts booking errors to HTTP responses.
#[derive(Debug)]
pub struct BookingApiError(BookingError);

impl BookingApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            e if e.is_not_found() => StatusCode::NOT_FOUND,
            e if e.is_forbidden() => StatusCode::FORBIDDEN,
            BookingError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BookingError> for BookingApiError {
    fn from(err: BookingError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for BookingApiError {
    fn from(err: ValidationError) -> Self {
        Self(BookingError::from(err))
    }
}

impl From<JsonRejection> for BookingApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(BookingError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for BookingApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        let message = match &self.0 {
            BookingError::Infrastructure(detail) => {
                tracing::error!("Booking request failed: {}", detail);
                "Internal server error".to_string()
            }
            other => other.message(),
        };

        let body = ErrorResponse::new(self.0.code().to_string(), message);
        (status, Json(body)).into_response()
    }
}
