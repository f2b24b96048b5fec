//! Database models shared across the bookings repository.

#[cfg(feature = "server")]
pub mod auth;
pub mod client;
#[cfg(feature = "server")]
pub mod config;
pub mod destination;
pub mod flight;
pub mod hotel;
pub mod trip;
