//! In-memory implementation of the persistence ports.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::booking::{
    Booking, BookingWithRoom, Enrollment, Room, RoomWithBookings, Ticket, TicketStatus, TicketType,
};
use crate::domain::foundation::{
    BookingId, DomainError, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, Timestamp,
    UserId,
};
use crate::ports::{BookingRepository, EnrollmentReader, RoomReader, SessionStore, TicketReader};

#[derive(Debug, Default)]
struct StoreState {
    enrollments: Vec<Enrollment>,
    tickets: Vec<Ticket>,
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
    sessions: HashSet<String>,
    last_id: i32,
}

impl StoreState {
    /// Ids are drawn from one sequence shared by every record kind.
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

/// Shared in-memory storage for enrollments, tickets, rooms, bookings and
/// sessions.
///
/// Seeding helpers return the id of the record they create.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryBookingStore::new());
/// let user = UserId::new(1)?;
/// store.add_ticket(user, TicketStatus::Paid, false, true)?;
/// let room = store.add_room(HotelId::new(1)?, "101", 2)?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    state: RwLock<StoreState>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeding ===

    /// Enrolls a user without an address.
    pub fn add_enrollment(&self, user_id: UserId) -> Result<EnrollmentId, DomainError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let id = EnrollmentId::new(state.next_id())?;
        let now = Timestamp::now();
        state.enrollments.push(Enrollment {
            id,
            user_id,
            name: format!("Guest {}", user_id),
            cpf: String::new(),
            birthday: now,
            phone: String::new(),
            address: None,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    /// Enrolls a user and issues them a ticket of a fresh type.
    pub fn add_ticket(
        &self,
        user_id: UserId,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) -> Result<TicketId, DomainError> {
        let enrollment_id = self.add_enrollment(user_id)?;

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let type_id = TicketTypeId::new(state.next_id())?;
        let id = TicketId::new(state.next_id())?;
        let now = Timestamp::now();
        state.tickets.push(Ticket {
            id,
            enrollment_id,
            status,
            ticket_type: TicketType {
                id: type_id,
                name: format!("Ticket type {}", type_id),
                price: 0,
                is_remote,
                includes_hotel,
                created_at: now,
                updated_at: now,
            },
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    pub fn add_room(
        &self,
        hotel_id: HotelId,
        name: impl Into<String>,
        capacity: i32,
    ) -> Result<RoomId, DomainError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let id = RoomId::new(state.next_id())?;
        let now = Timestamp::now();
        state.rooms.push(Room {
            id,
            name: name.into(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    /// Registers a live session token.
    pub fn add_session(&self, token: impl Into<String>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .sessions
            .insert(token.into());
    }

    // === Inspection ===

    pub fn bookings(&self) -> Vec<Booking> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .bookings
            .clone()
    }
}

#[async_trait]
impl EnrollmentReader for InMemoryBookingStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Enrollment>, DomainError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state
            .enrollments
            .iter()
            .find(|e| &e.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl TicketReader for InMemoryBookingStore {
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state
            .tickets
            .iter()
            .find(|t| &t.enrollment_id == enrollment_id)
            .cloned())
    }
}

#[async_trait]
impl RoomReader for InMemoryBookingStore {
    async fn find_with_bookings(
        &self,
        room_id: &RoomId,
    ) -> Result<Option<RoomWithBookings>, DomainError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state
            .rooms
            .iter()
            .find(|r| &r.id == room_id)
            .map(|room| RoomWithBookings {
                room: room.clone(),
                bookings: state
                    .bookings
                    .iter()
                    .filter(|b| &b.room_id == room_id)
                    .cloned()
                    .collect(),
            }))
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<BookingWithRoom>, DomainError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let Some(booking) = state
            .bookings
            .iter()
            .filter(|b| &b.user_id == user_id)
            .min_by_key(|b| b.id)
        else {
            return Ok(None);
        };

        Ok(state
            .rooms
            .iter()
            .find(|r| r.id == booking.room_id)
            .map(|room| BookingWithRoom {
                booking: booking.clone(),
                room: room.clone(),
            }))
    }

    async fn find_by_id_and_user(
        &self,
        booking_id: &BookingId,
        user_id: &UserId,
    ) -> Result<Option<Booking>, DomainError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state
            .bookings
            .iter()
            .find(|b| &b.id == booking_id && &b.user_id == user_id)
            .cloned())
    }

    async fn create(&self, user_id: &UserId, room_id: &RoomId) -> Result<Booking, DomainError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let now = Timestamp::now();
        let booking = Booking {
            id: BookingId::new(state.next_id())?,
            user_id: *user_id,
            room_id: *room_id,
            created_at: now,
            updated_at: now,
        };
        state.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update_room(
        &self,
        booking_id: &BookingId,
        room_id: &RoomId,
        user_id: &UserId,
    ) -> Result<Option<Booking>, DomainError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        Ok(state
            .bookings
            .iter_mut()
            .find(|b| &b.id == booking_id)
            .map(|booking| {
                booking.room_id = *room_id;
                booking.user_id = *user_id;
                booking.updated_at = Timestamp::now();
                booking.clone()
            }))
    }
}

#[async_trait]
impl SessionStore for InMemoryBookingStore {
    async fn is_active(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sessions
            .contains(token))
    }
}
