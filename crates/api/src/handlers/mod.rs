//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Database-backed handlers delegate to the corresponding repository in
//! `wardwatch_db` and map errors via [`crate::error::AppError`].

pub mod monitor;
pub mod rooms;
pub mod sensors;
