use crate::error::{Result, SiteError};
use crate::model::{Fields, Record};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// Payload for the admin status-update routes.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub id: u64,
    pub status: String,
}

/// Bodies are taken as raw bytes and parsed by hand so that anything
/// short of a JSON object (bad syntax, an array, a bare string) lands
/// in the same `{"success":false,"error":..}` envelope instead of the
/// framework's default rejection.
fn parse_fields(body: &Bytes) -> Result<Fields> {
    serde_json::from_slice(body).map_err(|e| SiteError::MalformedPayload(e.to_string()))
}

fn parse_status_update(body: &Bytes) -> Result<StatusUpdate> {
    serde_json::from_slice(body).map_err(|e| SiteError::MalformedPayload(e.to_string()))
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn submit_order(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>> {
    let order = state.desk.submit_order(parse_fields(&body)?)?;
    info!(order_id = order.id(), "order received");
    Ok(Json(json!({
        "success": true,
        "message": "Order received",
        "order_id": order.id(),
    })))
}

pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>> {
    let booking = state.desk.submit_booking(parse_fields(&body)?)?;
    info!(booking_id = booking.id(), "booking received");
    Ok(Json(json!({
        "success": true,
        "message": "Booking received",
        "booking_id": booking.id(),
    })))
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>> {
    state.desk.submit_contact(parse_fields(&body)?)?;
    info!("contact message received");
    Ok(Json(json!({
        "success": true,
        "message": "Message received",
    })))
}

pub async fn list_orders(State(state): State<Arc<AppState>>) -> Json<Vec<Record>> {
    Json(state.desk.orders())
}

pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Record>> {
    Json(state.desk.bookings())
}

pub async fn list_contacts(State(state): State<Arc<AppState>>) -> Json<Vec<Record>> {
    Json(state.desk.contacts())
}

// The dashboard treats status updates as fire-and-forget, so an unknown
// id still answers success; the miss is logged instead of surfaced.
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>> {
    let update = parse_status_update(&body)?;
    let found = state.desk.set_order_status(update.id, &update.status)?;
    if !found {
        warn!(order_id = update.id, "status update for unknown order");
    }
    Ok(Json(json!({"success": true})))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>> {
    let update = parse_status_update(&body)?;
    let found = state.desk.set_booking_status(update.id, &update.status)?;
    if !found {
        warn!(booking_id = update.id, "status update for unknown booking");
    }
    Ok(Json(json!({"success": true})))
}
