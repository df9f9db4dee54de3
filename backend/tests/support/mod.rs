//! Shared harness for endpoint integration tests.
//!
//! Builds the production app wiring over a file-backed document store in a
//! temporary directory, with a recording mailer in place of the HTTP mail
//! transport.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::web;
use async_trait::async_trait;
use serde_json::{Value, json};
use tempfile::TempDir;

use yadoya_backend::domain::ports::{
    ConfirmationEmail, ConfirmationMailer, MailerError, RoomRepository,
};
use yadoya_backend::domain::{
    NewRoom, ReservationCommandService, ReservationQueryService, Room, RoomQueryService,
};
use yadoya_backend::inbound::http::health::HealthState;
use yadoya_backend::inbound::http::state::HttpState;
use yadoya_backend::outbound::persistence::{
    DocumentStore, SqliteReservationRepository, SqliteRoomRepository,
};

/// Mailer stub that counts dispatch attempts and optionally fails them.
struct RecordingMailer {
    sent: Arc<AtomicUsize>,
    fail: bool,
}

#[async_trait]
impl ConfirmationMailer for RecordingMailer {
    async fn send_confirmation(&self, _email: &ConfirmationEmail) -> Result<(), MailerError> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(MailerError::transport("mail API unreachable"))
        } else {
            Ok(())
        }
    }
}

/// Production wiring over a temporary store file.
pub struct Harness {
    pub rooms: Arc<SqliteRoomRepository>,
    pub http_state: web::Data<HttpState>,
    pub health_state: web::Data<HealthState>,
    pub store_path: PathBuf,
    pub sent: Arc<AtomicUsize>,
    _dir: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(false)
    }

    pub fn with_failing_mailer() -> Self {
        Self::build(true)
    }

    fn build(failing_mailer: bool) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let store_path = dir.path().join("yadoya-test.db");
        let store = DocumentStore::open(&store_path).expect("open store file");
        let rooms = Arc::new(SqliteRoomRepository::new(store.clone()));
        let reservations = Arc::new(SqliteReservationRepository::new(store));

        let sent = Arc::new(AtomicUsize::new(0));
        let mailer = Arc::new(RecordingMailer {
            sent: sent.clone(),
            fail: failing_mailer,
        });

        let http_state = web::Data::new(HttpState::new(
            Arc::new(RoomQueryService::new(rooms.clone())),
            Arc::new(ReservationCommandService::new(
                rooms.clone(),
                reservations.clone(),
                mailer,
            )),
            Arc::new(ReservationQueryService::new(rooms.clone(), reservations)),
        ));

        Self {
            rooms,
            http_state,
            health_state: web::Data::new(HealthState::new()),
            store_path,
            sent,
            _dir: dir,
        }
    }

    /// Insert a room the way the seeder would.
    pub async fn seed_room(&self, name: &str, price: i64, image: &str) -> Room {
        self.rooms
            .insert(&NewRoom {
                name: name.to_owned(),
                price,
                image: image.to_owned(),
            })
            .await
            .expect("room inserts")
    }
}

/// Valid creation payload for the given room.
pub fn reservation_payload(room_id: &str) -> Value {
    json!({
        "name": "Taro Yamada",
        "email": "taro@example.jp",
        "postalCode": "123-4567",
        "address": "1-2-3 Aizuwakamatsu",
        "phone": "09012345678",
        "roomType": "standard",
        "checkIn": "2025-05-01",
        "checkOut": "2025-05-03",
        "nights": 2,
        "guests": 2,
        "roomId": room_id,
    })
}

/// Count documents in a store table through a direct connection.
pub fn count_documents(store_path: &Path, table: &str) -> i64 {
    let conn = rusqlite::Connection::open(store_path).expect("open store file");
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .expect("count documents")
}

/// Remove a room document out from under the service.
pub fn delete_room(store_path: &Path, room_id: &str) {
    let conn = rusqlite::Connection::open(store_path).expect("open store file");
    let removed = conn
        .execute("DELETE FROM rooms WHERE id = ?1", [room_id])
        .expect("delete room");
    assert_eq!(removed, 1, "room {room_id} existed before deletion");
}
