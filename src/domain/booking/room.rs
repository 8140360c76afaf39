//! Hotel rooms and their occupancy.

use crate::domain::foundation::{HotelId, RoomId, Timestamp};

use super::Booking;

/// A hotel unit with a finite capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A room loaded together with the bookings currently occupying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomWithBookings {
    pub room: Room,
    pub bookings: Vec<Booking>,
}

impl RoomWithBookings {
    /// Number of bookings currently assigned to the room.
    pub fn occupancy(&self) -> usize {
        self.bookings.len()
    }

    /// A room is bookable only while `occupancy < capacity`.
    pub fn has_vacancy(&self) -> bool {
        // A non-positive capacity never has room.
        let capacity = usize::try_from(self.room.capacity).unwrap_or(0);
        self.occupancy() < capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BookingId, UserId};

    fn room(capacity: i32) -> Room {
        let now = Timestamp::now();
        Room {
            id: RoomId::new(1).unwrap(),
            name: "101".to_string(),
            capacity,
            hotel_id: HotelId::new(1).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    fn bookings(count: i32) -> Vec<Booking> {
        let now = Timestamp::now();
        (1..=count)
            .map(|n| Booking {
                id: BookingId::new(n).unwrap(),
                user_id: UserId::new(n).unwrap(),
                room_id: RoomId::new(1).unwrap(),
                created_at: now,
                updated_at: now,
            })
            .collect()
    }

    #[test]
    fn empty_room_has_vacancy() {
        let loaded = RoomWithBookings { room: room(2), bookings: vec![] };
        assert!(loaded.has_vacancy());
        assert_eq!(loaded.occupancy(), 0);
    }

    #[test]
    fn room_one_below_capacity_has_vacancy() {
        let loaded = RoomWithBookings { room: room(3), bookings: bookings(2) };
        assert!(loaded.has_vacancy());
    }

    #[test]
    fn room_at_capacity_is_full() {
        let loaded = RoomWithBookings { room: room(2), bookings: bookings(2) };
        assert!(!loaded.has_vacancy());
    }

    #[test]
    fn room_over_capacity_is_full() {
        let loaded = RoomWithBookings { room: room(1), bookings: bookings(3) };
        assert!(!loaded.has_vacancy());
    }

    #[test]
    fn zero_capacity_room_is_never_bookable() {
        let loaded = RoomWithBookings { room: room(0), bookings: vec![] };
        assert!(!loaded.has_vacancy());
    }
}
