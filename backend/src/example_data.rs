//! Demonstration room seeding for local development.

use tracing::info;

use crate::domain::NewRoom;
use crate::domain::ports::{RoomRepository, RoomStoreError};
use crate::server::Settings;

fn demo_rooms() -> Vec<NewRoom> {
    vec![
        NewRoom {
            name: "Standard Room".to_owned(),
            price: 10_000,
            image: "standard.jpg".to_owned(),
        },
        NewRoom {
            name: "Deluxe Room".to_owned(),
            price: 18_000,
            image: "deluxe.jpg".to_owned(),
        },
        NewRoom {
            name: "Suite".to_owned(),
            price: 32_000,
            image: "suite.jpg".to_owned(),
        },
    ]
}

/// Insert demonstration rooms when enabled and the store is empty.
///
/// Seeding never overwrites existing data: any room at all in the store
/// skips the pass.
///
/// # Errors
///
/// Returns [`RoomStoreError`] when the store cannot be read or written.
pub async fn seed_demo_rooms_on_startup(
    settings: &Settings,
    rooms: &impl RoomRepository,
) -> Result<(), RoomStoreError> {
    if !settings.seed_demo_rooms {
        return Ok(());
    }
    if !rooms.list().await?.is_empty() {
        info!("demo room seeding skipped; store already holds rooms");
        return Ok(());
    }
    for room in demo_rooms() {
        let stored = rooms.insert(&room).await?;
        info!(room_id = %stored.id, name = %stored.name, "demo room seeded");
    }
    Ok(())
}
