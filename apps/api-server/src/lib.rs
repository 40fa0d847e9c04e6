//! # Aula API Server
//!
//! Actix-web front of the course forum. The binary in `main.rs` reads the
//! configuration, installs telemetry and serves [`configure_app`].

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

use actix_web::web;

use state::AppState;

/// Register the application state, the token service and every route.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state.tokens.clone()))
            .app_data(web::Data::new(state))
            .configure(handlers::configure_routes);
    }
}
