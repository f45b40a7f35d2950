use crate::error::{Result, SiteError};
use crate::routes;
use crate::state::AppState;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Assemble the full route surface over the shared state. Pure function
/// so tests can drive the router without binding a socket.
pub fn build_router(state: Arc<AppState>) -> Router {
    // The public site and the admin dashboard are served from other
    // origins, so the API answers cross-origin GET and POST.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/api/order", post(routes::submit_order))
        .route("/api/booking", post(routes::submit_booking))
        .route("/api/contact", post(routes::submit_contact))
        .route("/admin/orders", get(routes::list_orders))
        .route("/admin/bookings", get(routes::list_bookings))
        .route("/admin/contacts", get(routes::list_contacts))
        .route("/admin/update-order-status", post(routes::update_order_status))
        .route("/admin/update-booking-status", post(routes::update_booking_status))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until ctrl-c or SIGTERM.
pub async fn serve(state: Arc<AppState>, port: u16) -> Result<()> {
    let app = build_router(state);

    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await.map_err(SiteError::Io)?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(SiteError::Io)?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
