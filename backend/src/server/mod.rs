//! Server construction and middleware wiring.

mod config;

pub use config::Settings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::ConfirmationMailer;
use crate::domain::{ReservationCommandService, ReservationQueryService, RoomQueryService};
use crate::example_data::seed_demo_rooms_on_startup;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::json_error_handler;
use crate::inbound::http::reservations::{create_reservation, get_reservation};
use crate::inbound::http::rooms::list_rooms;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::welcome::welcome;
use crate::middleware::Trace;
use crate::outbound::mail::{DisabledMailer, HttpApiMailer};
use crate::outbound::persistence::{
    DocumentStore, SqliteReservationRepository, SqliteRoomRepository,
};

/// Assemble the application with routing, middleware, and shared state.
///
/// Kept separate from [`run`] so endpoint tests can mount the exact
/// production routing over stub state.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_rooms)
        .service(create_reservation)
        .service(get_reservation);

    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(api)
        .service(welcome)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

fn build_mailer(settings: &Settings) -> std::io::Result<Arc<dyn ConfirmationMailer>> {
    match settings.mail() {
        Some((endpoint, account)) => {
            let endpoint = reqwest::Url::parse(&endpoint)
                .map_err(|e| std::io::Error::other(format!("invalid mail endpoint: {e}")))?;
            let mailer = HttpApiMailer::new(endpoint, account)
                .map_err(|e| std::io::Error::other(format!("mail client construction: {e}")))?;
            Ok(Arc::new(mailer))
        }
        None => Ok(Arc::new(DisabledMailer)),
    }
}

/// Open the store, wire the services, and start the HTTP listener.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the store cannot be opened, seeding
/// fails, or the socket cannot be bound.
pub async fn run(settings: Settings) -> std::io::Result<Server> {
    let store = DocumentStore::open(settings.store_path())
        .map_err(|e| std::io::Error::other(format!("document store open: {e}")))?;
    let rooms = Arc::new(SqliteRoomRepository::new(store.clone()));
    let reservations = Arc::new(SqliteReservationRepository::new(store));
    let mailer = build_mailer(&settings)?;

    seed_demo_rooms_on_startup(&settings, rooms.as_ref())
        .await
        .map_err(|e| std::io::Error::other(format!("demo room seeding: {e}")))?;

    let http_state = web::Data::new(HttpState::new(
        Arc::new(RoomQueryService::new(rooms.clone())),
        Arc::new(ReservationCommandService::new(
            rooms.clone(),
            reservations.clone(),
            mailer,
        )),
        Arc::new(ReservationQueryService::new(rooms, reservations)),
    ));
    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();

    let port = settings.port();
    let server = HttpServer::new(move || {
        build_app(http_state.clone(), server_health_state.clone())
    })
    .bind(("0.0.0.0", port))?
    .run();

    health_state.mark_ready();
    info!(port, "reservation API listening");
    Ok(server)
}
