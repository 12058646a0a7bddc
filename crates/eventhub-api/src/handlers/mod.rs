//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod attendance;
pub mod auth;
pub mod events;
pub mod health;
pub mod users;
