//! Domain logic for the WardWatch monitoring backend.
//!
//! Pure logic — no database access and no HTTP. The `wardwatch-api` crate
//! wires these pieces to storage and the web surface.

pub mod alert;
pub mod cooling;
pub mod entity;
pub mod error;
pub mod monitor;
pub mod reading;
pub mod source;
pub mod status;
pub mod types;
