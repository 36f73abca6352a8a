//! # Blog API
//!
//! Actix-web HTTP server exposing blog posts under `/posts`.
//! The binary in `main.rs` wires configuration and telemetry; tests start the
//! server through [`run`] with a store of their choosing.

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

use observability::RequestIdMiddleware;
use state::AppState;

/// Build the HTTP server on an already bound listener.
///
/// The returned [`Server`] must be awaited or spawned to start serving; use
/// its [`handle`](Server::handle) to stop it.
pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(data.clone())
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
