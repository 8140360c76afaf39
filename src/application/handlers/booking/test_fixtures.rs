//! Shared mocks for the booking handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::booking::{
    Booking, BookingWithRoom, Enrollment, Room, RoomWithBookings, Ticket, TicketStatus, TicketType,
};
use crate::domain::foundation::{
    BookingId, DomainError, EnrollmentId, ErrorCode, HotelId, RoomId, TicketId, TicketTypeId,
    Timestamp, UserId,
};
use crate::ports::{BookingRepository, EnrollmentReader, RoomReader, TicketReader};

use super::BookingGuard;

// ════════════════════════════════════════════════════════════════════════════
// Mock World
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct WorldState {
    enrollments: Vec<Enrollment>,
    tickets: Vec<Ticket>,
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
    next_booking_id: i32,
}

/// Implements every persistence port over one shared state, so a booking
/// created through the repository is visible to the room reader.
#[derive(Default)]
pub struct MockBookingWorld {
    state: Mutex<WorldState>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MockBookingWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes(self) -> Self {
        Self {
            fail_writes: true,
            ..self
        }
    }

    /// Enrolls the user and gives them a ticket with the given capabilities.
    pub fn with_ticket(
        self,
        user_id: i32,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) -> Self {
        let enrollment_id = self.with_enrollment_inner(user_id);
        {
            let mut state = self.state.lock().unwrap();
            let ticket_id = state.tickets.len() as i32 + 1;
            state.tickets.push(Ticket {
                id: TicketId::new(ticket_id).unwrap(),
                enrollment_id,
                status,
                ticket_type: TicketType {
                    id: TicketTypeId::new(ticket_id).unwrap(),
                    name: "Ticket".to_string(),
                    price: 300,
                    is_remote,
                    includes_hotel,
                    created_at: Timestamp::now(),
                    updated_at: Timestamp::now(),
                },
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            });
        }
        self
    }

    /// A paid, in-person, hotel-inclusive ticket.
    pub fn with_eligible_user(self, user_id: i32) -> Self {
        self.with_ticket(user_id, TicketStatus::Paid, false, true)
    }

    /// Enrolls the user without buying a ticket.
    pub fn with_enrollment(self, user_id: i32) -> Self {
        self.with_enrollment_inner(user_id);
        self
    }

    fn with_enrollment_inner(&self, user_id: i32) -> EnrollmentId {
        let mut state = self.state.lock().unwrap();
        let id = EnrollmentId::new(state.enrollments.len() as i32 + 1).unwrap();
        state.enrollments.push(Enrollment {
            id,
            user_id: UserId::new(user_id).unwrap(),
            name: format!("User {}", user_id),
            cpf: "12345678909".to_string(),
            birthday: Timestamp::now(),
            phone: "(21) 98999-9999".to_string(),
            address: None,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        });
        id
    }

    pub fn with_room(self, room_id: i32, capacity: i32) -> Self {
        self.state.lock().unwrap().rooms.push(Room {
            id: RoomId::new(room_id).unwrap(),
            name: format!("Room {}", room_id),
            capacity,
            hotel_id: HotelId::new(1).unwrap(),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        });
        self
    }

    pub fn with_booking(self, user_id: i32, room_id: i32) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_booking_id += 1;
            let id = BookingId::new(state.next_booking_id).unwrap();
            state.bookings.push(Booking {
                id,
                user_id: UserId::new(user_id).unwrap(),
                room_id: RoomId::new(room_id).unwrap(),
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            });
        }
        self
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.state.lock().unwrap().bookings.clone()
    }

    fn read_failure(&self) -> Result<(), DomainError> {
        if self.fail_reads {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl EnrollmentReader for MockBookingWorld {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Enrollment>, DomainError> {
        self.read_failure()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .enrollments
            .iter()
            .find(|e| &e.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl TicketReader for MockBookingWorld {
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        self.read_failure()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .tickets
            .iter()
            .find(|t| &t.enrollment_id == enrollment_id)
            .cloned())
    }
}

#[async_trait]
impl RoomReader for MockBookingWorld {
    async fn find_with_bookings(
        &self,
        room_id: &RoomId,
    ) -> Result<Option<RoomWithBookings>, DomainError> {
        self.read_failure()?;
        let state = self.state.lock().unwrap();
        Ok(state.rooms.iter().find(|r| &r.id == room_id).map(|room| {
            RoomWithBookings {
                room: room.clone(),
                bookings: state
                    .bookings
                    .iter()
                    .filter(|b| &b.room_id == room_id)
                    .cloned()
                    .collect(),
            }
        }))
    }
}

#[async_trait]
impl BookingRepository for MockBookingWorld {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<BookingWithRoom>, DomainError> {
        self.read_failure()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .bookings
            .iter()
            .find(|b| &b.user_id == user_id)
            .and_then(|booking| {
                state
                    .rooms
                    .iter()
                    .find(|r| r.id == booking.room_id)
                    .map(|room| BookingWithRoom {
                        booking: booking.clone(),
                        room: room.clone(),
                    })
            }))
    }

    async fn find_by_id_and_user(
        &self,
        booking_id: &BookingId,
        user_id: &UserId,
    ) -> Result<Option<Booking>, DomainError> {
        self.read_failure()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .bookings
            .iter()
            .find(|b| &b.id == booking_id && &b.user_id == user_id)
            .cloned())
    }

    async fn create(&self, user_id: &UserId, room_id: &RoomId) -> Result<Booking, DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated write failure"));
        }
        let mut state = self.state.lock().unwrap();
        state.next_booking_id += 1;
        let booking = Booking {
            id: BookingId::new(state.next_booking_id).unwrap(),
            user_id: *user_id,
            room_id: *room_id,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
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
        if self.fail_writes {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated write failure"));
        }
        let mut state = self.state.lock().unwrap();
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

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

pub fn guard_over(world: &Arc<MockBookingWorld>) -> BookingGuard {
    BookingGuard::new(world.clone(), world.clone(), world.clone())
}

pub fn user(id: i32) -> UserId {
    UserId::new(id).unwrap()
}

pub fn room(id: i32) -> RoomId {
    RoomId::new(id).unwrap()
}

pub fn booking(id: i32) -> BookingId {
    BookingId::new(id).unwrap()
}
