//! HTTP API for the WardWatch monitoring backend.

pub mod background;
pub mod config;
pub mod error;
pub mod handlers;
pub mod monitor;
pub mod router;
pub mod routes;
pub mod state;
