//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod room_repo;
pub mod sensor_reading_repo;

pub use room_repo::RoomRepo;
pub use sensor_reading_repo::SensorReadingRepo;
