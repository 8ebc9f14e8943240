//! # Request Handlers
//!
//! Inner handlers for all endpoints. Each takes `&AppState` plus its inputs
//! and is wrapped by a thin extractor-based function in [`crate::router`].

pub mod auth;
pub mod game_results;
pub mod users;
