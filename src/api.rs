//! # API Facade
//!
//! [`FrontDesk`] is the single entry point for everything the website and
//! the admin dashboard can do: submit an order, a booking, or a contact
//! message; list what came in; move an order or booking through its
//! statuses. The HTTP layer is a thin translation on top of this: no
//! request or response types leak below this line, so the same facade
//! could back a CLI or a test harness directly.
//!
//! ## Generic Over RecordStore
//!
//! `FrontDesk<S: RecordStore>` is generic over the storage backend:
//! - Production: `FrontDesk<JsonFileStore>`
//! - Testing: `FrontDesk<InMemoryStore>`
//!
//! This keeps facade tests off the filesystem entirely.
//!
//! ## Status Values
//!
//! Statuses are open strings, not a validated state machine: the admin
//! dashboard sends whatever label it likes ("Confirmed", "Cancelled",
//! "Completed", ...) and the last write wins.

use crate::error::Result;
use crate::model::{Fields, Record};
use crate::store::RecordStore;
use serde_json::Value;

/// Facade over the three per-entity stores.
pub struct FrontDesk<S: RecordStore> {
    orders: S,
    bookings: S,
    contacts: S,
}

impl<S: RecordStore> FrontDesk<S> {
    pub fn new(orders: S, bookings: S, contacts: S) -> Self {
        Self {
            orders,
            bookings,
            contacts,
        }
    }

    pub fn submit_order(&self, fields: Fields) -> Result<Record> {
        self.orders.append(fields)
    }

    pub fn submit_booking(&self, fields: Fields) -> Result<Record> {
        self.bookings.append(fields)
    }

    pub fn submit_contact(&self, fields: Fields) -> Result<Record> {
        self.contacts.append(fields)
    }

    pub fn orders(&self) -> Vec<Record> {
        self.orders.load_all()
    }

    pub fn bookings(&self) -> Vec<Record> {
        self.bookings.load_all()
    }

    pub fn contacts(&self) -> Vec<Record> {
        self.contacts.load_all()
    }

    /// Returns whether an order with that id existed.
    pub fn set_order_status(&self, id: u64, status: &str) -> Result<bool> {
        self.orders
            .update_field(id, "status", Value::String(status.to_string()))
    }

    /// Returns whether a booking with that id existed.
    pub fn set_booking_status(&self, id: u64, status: &str) -> Result<bool> {
        self.bookings
            .update_field(id, "status", Value::String(status.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    fn desk() -> FrontDesk<InMemoryStore> {
        let store_for = |entity: Entity| {
            let store = InMemoryStore::new();
            match entity.default_status() {
                Some(status) => store.with_default_status(status),
                None => store,
            }
        };
        FrontDesk::new(
            store_for(Entity::Order),
            store_for(Entity::Booking),
            store_for(Entity::Contact),
        )
    }

    fn fields(pairs: &[(&str, Value)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_submissions_land_in_their_own_store() {
        let desk = desk();

        desk.submit_order(fields(&[("item", json!("Pizza"))])).unwrap();
        desk.submit_booking(fields(&[("party", json!(4))])).unwrap();
        desk.submit_contact(fields(&[("message", json!("Hi"))])).unwrap();

        assert_eq!(desk.orders().len(), 1);
        assert_eq!(desk.bookings().len(), 1);
        assert_eq!(desk.contacts().len(), 1);
    }

    #[test]
    fn test_entity_default_statuses() {
        let desk = desk();

        let order = desk.submit_order(fields(&[("item", json!("Pizza"))])).unwrap();
        let booking = desk.submit_booking(fields(&[("party", json!(2))])).unwrap();
        let contact = desk.submit_contact(fields(&[("message", json!("Hi"))])).unwrap();

        assert_eq!(order.status(), Some("Pending"));
        assert_eq!(booking.status(), Some("Confirmed"));
        assert_eq!(contact.status(), None);
    }

    #[test]
    fn test_set_order_status() {
        let desk = desk();
        desk.submit_order(fields(&[("item", json!("Pizza"))])).unwrap();
        desk.submit_order(fields(&[("item", json!("Salad"))])).unwrap();

        assert!(desk.set_order_status(1, "Completed").unwrap());

        let orders = desk.orders();
        assert_eq!(orders[0].status(), Some("Completed"));
        assert_eq!(orders[1].status(), Some("Pending"));
    }

    #[test]
    fn test_set_status_on_missing_id_reports_miss() {
        let desk = desk();
        assert!(!desk.set_booking_status(7, "Cancelled").unwrap());
        assert!(desk.bookings().is_empty());
    }
}
