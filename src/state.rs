use crate::api::FrontDesk;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::Entity;
use crate::store::fs::JsonFileStore;
use std::sync::Arc;

/// Everything the HTTP handlers need, built once at startup and shared
/// behind an `Arc`. Opening the state creates the data directory and the
/// three backing files if they don't exist yet.
pub struct AppState {
    pub desk: FrontDesk<JsonFileStore>,
}

impl AppState {
    pub fn open(config: &SiteConfig) -> Result<Arc<Self>> {
        let desk = FrontDesk::new(
            Self::store_for(config, Entity::Order)?,
            Self::store_for(config, Entity::Booking)?,
            Self::store_for(config, Entity::Contact)?,
        );
        Ok(Arc::new(Self { desk }))
    }

    fn store_for(config: &SiteConfig, entity: Entity) -> Result<JsonFileStore> {
        let store = JsonFileStore::open(config.data_dir.join(entity.file_name()))?;
        Ok(match entity.default_status() {
            Some(status) => store.with_default_status(status),
            None => store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_backing_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            port: 0,
            data_dir: dir.path().join("data"),
        };

        let state = AppState::open(&config).unwrap();

        for name in ["orders.json", "bookings.json", "contacts.json"] {
            assert!(config.data_dir.join(name).exists());
        }
        assert!(state.desk.orders().is_empty());
    }
}
