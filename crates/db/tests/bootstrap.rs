//! Bootstrap and repository tests: connect, migrate, verify schema and seeds.

use chrono::Utc;
use sqlx::PgPool;
use wardwatch_db::models::room::CreateRoom;
use wardwatch_db::models::sensor_reading::CreateSensorReading;
use wardwatch_db::repositories::{RoomRepo, SensorReadingRepo};

#[sqlx::test(migrations = "./migrations")]
async fn migrations_seed_the_room_directory(pool: PgPool) {
    wardwatch_db::health_check(&pool).await.unwrap();

    let rooms = RoomRepo::list(&pool).await.unwrap();
    assert_eq!(rooms.len(), 10, "seed should create 10 rooms");

    let operation_rooms: Vec<_> = rooms.iter().filter(|r| r.room_type == "operation").collect();
    assert_eq!(operation_rooms.len(), 4);
    assert!(operation_rooms.iter().all(|r| r.threshold == Some(25.0)));
    assert!(operation_rooms.iter().all(|r| r.floor.is_none()));
}

#[sqlx::test(migrations = "./migrations")]
async fn room_create_applies_defaults(pool: PgPool) {
    let input = CreateRoom {
        name: "Room 301".to_string(),
        status: None,
        floor: Some(3),
        room_type: None,
        threshold: None,
    };

    let room = RoomRepo::create(&pool, &input).await.unwrap();
    assert_eq!(room.status, "Available");
    assert_eq!(room.room_type, "normal");
    assert_eq!(room.floor, Some(3));
    assert!(room.threshold.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn sensor_readings_insert_and_latest(pool: PgPool) {
    let now = Utc::now();

    let older = CreateSensorReading {
        sensor_id: "fridge-7".to_string(),
        recorded_at: now - chrono::Duration::minutes(5),
        temperature_c: 4.0,
        humidity: Some(40.0),
        alert: false,
        alert_type: None,
    };
    let newer = CreateSensorReading {
        sensor_id: "fridge-7".to_string(),
        recorded_at: now,
        temperature_c: 9.0,
        humidity: None,
        alert: true,
        alert_type: Some("Temperature Out of Range (9°C)".to_string()),
    };

    SensorReadingRepo::insert(&pool, &older).await.unwrap();
    SensorReadingRepo::insert(&pool, &newer).await.unwrap();

    let latest = SensorReadingRepo::latest_for_sensor(&pool, "fridge-7")
        .await
        .unwrap()
        .expect("sensor should have readings");
    assert_eq!(latest.temperature_c, 9.0);
    assert!(latest.alert);
    assert_eq!(
        latest.alert_type.as_deref(),
        Some("Temperature Out of Range (9°C)")
    );

    let recent = SensorReadingRepo::list_recent(&pool, 10).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].temperature_c, 9.0, "newest first");

    let other = SensorReadingRepo::latest_for_sensor(&pool, "no-such-sensor")
        .await
        .unwrap();
    assert!(other.is_none());
}
