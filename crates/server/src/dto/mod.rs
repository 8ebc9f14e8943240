//! # Data Transfer Objects
//!
//! Request and response types for the API surface.

pub mod auth;
pub mod game_results;
pub mod users;
