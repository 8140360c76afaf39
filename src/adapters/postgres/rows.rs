//! Row types shared by several adapters.

use chrono::NaiveDateTime;

use crate::domain::booking::{Booking, Room};
use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, HotelId, RoomId, Timestamp, UserId, ValidationError,
};

/// Maps an out-of-range id read from the database to a `DomainError`.
pub(super) fn invalid_column(column: &'static str) -> impl FnOnce(ValidationError) -> DomainError {
    move |e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid {}: {}", column, e))
}

/// `TIMESTAMP` columns are written in UTC.
pub(super) fn utc(naive: NaiveDateTime) -> Timestamp {
    Timestamp::from_datetime(naive.and_utc())
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct BookingRow {
    pub id: i32,
    #[sqlx(rename = "userId")]
    pub user_id: i32,
    #[sqlx(rename = "roomId")]
    pub room_id: i32,
    #[sqlx(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

impl TryFrom<BookingRow> for Booking {
    type Error = DomainError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: BookingId::new(row.id).map_err(invalid_column("Booking.id"))?,
            user_id: UserId::new(row.user_id).map_err(invalid_column("Booking.userId"))?,
            room_id: RoomId::new(row.room_id).map_err(invalid_column("Booking.roomId"))?,
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct RoomRow {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    #[sqlx(rename = "hotelId")]
    pub hotel_id: i32,
    #[sqlx(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

impl TryFrom<RoomRow> for Room {
    type Error = DomainError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        Ok(Room {
            id: RoomId::new(row.id).map_err(invalid_column("Room.id"))?,
            name: row.name,
            capacity: row.capacity,
            hotel_id: HotelId::new(row.hotel_id).map_err(invalid_column("Room.hotelId"))?,
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        })
    }
}
