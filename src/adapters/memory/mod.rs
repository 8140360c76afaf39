//! In-memory adapters.
//!
//! `InMemoryBookingStore` implements every persistence port plus the
//! session store over one shared state. Integration tests drive the HTTP
//! router against it.

mod store;

pub use store::InMemoryBookingStore;
