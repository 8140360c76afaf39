//! PostgreSQL implementation of BookingRepository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use super::rows::{BookingRow, RoomRow};
use crate::domain::booking::{Booking, BookingWithRoom, Room};
use crate::domain::foundation::{BookingId, DomainError, RoomId, UserId};
use crate::ports::BookingRepository;

/// PostgreSQL implementation of the BookingRepository port.
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Booking joined with its room.
#[derive(Debug, sqlx::FromRow)]
struct BookingWithRoomRow {
    id: i32,
    user_id: i32,
    room_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    room_name: String,
    room_capacity: i32,
    room_hotel_id: i32,
    room_created_at: NaiveDateTime,
    room_updated_at: NaiveDateTime,
}

impl TryFrom<BookingWithRoomRow> for BookingWithRoom {
    type Error = DomainError;

    fn try_from(row: BookingWithRoomRow) -> Result<Self, Self::Error> {
        let room = Room::try_from(RoomRow {
            id: row.room_id,
            name: row.room_name,
            capacity: row.room_capacity,
            hotel_id: row.room_hotel_id,
            created_at: row.room_created_at,
            updated_at: row.room_updated_at,
        })?;
        let booking = Booking::try_from(BookingRow {
            id: row.id,
            user_id: row.user_id,
            room_id: row.room_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })?;

        Ok(BookingWithRoom { booking, room })
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<BookingWithRoom>, DomainError> {
        let row: Option<BookingWithRoomRow> = sqlx::query_as(
            r#"
            SELECT
                b.id, b."userId" AS user_id, b."roomId" AS room_id,
                b."createdAt" AS created_at, b."updatedAt" AS updated_at,
                r.name AS room_name, r.capacity AS room_capacity,
                r."hotelId" AS room_hotel_id,
                r."createdAt" AS room_created_at, r."updatedAt" AS room_updated_at
            FROM "Booking" b
            JOIN "Room" r ON r.id = b."roomId"
            WHERE b."userId" = $1
            ORDER BY b.id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch booking", e))?;

        row.map(BookingWithRoom::try_from).transpose()
    }

    async fn find_by_id_and_user(
        &self,
        booking_id: &BookingId,
        user_id: &UserId,
    ) -> Result<Option<Booking>, DomainError> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
            SELECT id, "userId", "roomId", "createdAt", "updatedAt"
            FROM "Booking"
            WHERE id = $1 AND "userId" = $2
            "#,
        )
        .bind(booking_id.as_i32())
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch booking", e))?;

        row.map(Booking::try_from).transpose()
    }

    async fn create(&self, user_id: &UserId, room_id: &RoomId) -> Result<Booking, DomainError> {
        let row: BookingRow = sqlx::query_as(
            r#"
            INSERT INTO "Booking" ("userId", "roomId", "createdAt", "updatedAt")
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, "userId", "roomId", "createdAt", "updatedAt"
            "#,
        )
        .bind(user_id.as_i32())
        .bind(room_id.as_i32())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to create booking", e))?;

        Booking::try_from(row)
    }

    async fn update_room(
        &self,
        booking_id: &BookingId,
        room_id: &RoomId,
        user_id: &UserId,
    ) -> Result<Option<Booking>, DomainError> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
            UPDATE "Booking"
            SET "roomId" = $2, "userId" = $3, "updatedAt" = NOW()
            WHERE id = $1
            RETURNING id, "userId", "roomId", "createdAt", "updatedAt"
            "#,
        )
        .bind(booking_id.as_i32())
        .bind(room_id.as_i32())
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update booking", e))?;

        row.map(Booking::try_from).transpose()
    }
}
