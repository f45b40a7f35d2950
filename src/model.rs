use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire format for the `timestamp` field, in local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The raw submission payload: whatever JSON object the website sent.
pub type Fields = serde_json::Map<String, Value>;

/// The three kinds of record this backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    Order,
    Booking,
    Contact,
}

impl Entity {
    /// Name of the backing file under the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Entity::Order => "orders.json",
            Entity::Booking => "bookings.json",
            Entity::Contact => "contacts.json",
        }
    }

    /// Status stamped onto new records, if this entity carries one.
    /// Contacts don't track a status.
    pub fn default_status(&self) -> Option<&'static str> {
        match self {
            Entity::Order => Some("Pending"),
            Entity::Booking => Some("Confirmed"),
            Entity::Contact => None,
        }
    }
}

/// One stored submission: the caller's fields plus the derived `id`,
/// `timestamp`, and (for orders and bookings) `status`.
///
/// Submissions are open-ended (the website decides what an order or a
/// booking contains), so the record is a plain JSON object rather than a
/// struct per entity. The typed accessors below cover the derived fields
/// this crate itself relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Fields);

impl Record {
    /// Build a record from a submission payload, stamping the derived
    /// fields. A caller-supplied `status` is overwritten by the entity
    /// default; `id` and `timestamp` likewise always come from the store.
    pub fn assemble(mut fields: Fields, id: u64, default_status: Option<&str>) -> Self {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        fields.insert("timestamp".to_string(), Value::String(timestamp));
        if let Some(status) = default_status {
            fields.insert("status".to_string(), Value::String(status.to_string()));
        }
        fields.insert("id".to_string(), Value::from(id));
        Record(fields)
    }

    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.0.get("timestamp").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: &str, value: Value) {
        self.0.insert(field.to_string(), value);
    }

    pub fn fields(&self) -> &Fields {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde_json::json;

    fn fields(pairs: &[(&str, Value)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_assemble_stamps_derived_fields() {
        let record = Record::assemble(fields(&[("item", json!("Pizza"))]), 1, Some("Pending"));

        assert_eq!(record.id(), Some(1));
        assert_eq!(record.status(), Some("Pending"));
        assert_eq!(record.get("item"), Some(&json!("Pizza")));
        assert!(record.timestamp().is_some());
    }

    #[test]
    fn test_assemble_without_status() {
        let record = Record::assemble(fields(&[("message", json!("Hi"))]), 3, None);

        assert_eq!(record.id(), Some(3));
        assert_eq!(record.status(), None);
    }

    #[test]
    fn test_assemble_overwrites_caller_status() {
        let record = Record::assemble(
            fields(&[("status", json!("Completed"))]),
            1,
            Some("Pending"),
        );

        assert_eq!(record.status(), Some("Pending"));
    }

    #[test]
    fn test_timestamp_matches_wire_format() {
        let record = Record::assemble(Fields::new(), 1, None);
        let stamp = record.timestamp().unwrap();

        assert!(NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_entity_defaults() {
        assert_eq!(Entity::Order.default_status(), Some("Pending"));
        assert_eq!(Entity::Booking.default_status(), Some("Confirmed"));
        assert_eq!(Entity::Contact.default_status(), None);
        assert_eq!(Entity::Order.file_name(), "orders.json");
    }

    #[test]
    fn test_record_serializes_as_plain_object() {
        let record = Record::assemble(fields(&[("item", json!("Salad"))]), 2, Some("Pending"));
        let value = serde_json::to_value(&record).unwrap();

        assert!(value.is_object());
        assert_eq!(value["id"], json!(2));
        assert_eq!(value["item"], json!("Salad"));
    }
}
