//! Store factories

use crate::config::StoreConfig;
use crate::observability::{log_event_with_fields, Event};

use super::errors::StoreResult;
use super::memory::MemoryArrayStore;
use super::ArrayStore;

/// Builds a store from a configuration descriptor
pub trait ArrayStoreFactory: Send + Sync {
    /// Create a new, empty store
    fn create(&self, config: &StoreConfig) -> StoreResult<Box<dyn ArrayStore>>;
}

/// Factory for [`MemoryArrayStore`]
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryArrayStoreFactory;

impl ArrayStoreFactory for MemoryArrayStoreFactory {
    fn create(&self, config: &StoreConfig) -> StoreResult<Box<dyn ArrayStore>> {
        let store = MemoryArrayStore::new(config)?;

        let page_bits = config.page_bits.to_string();
        let capacity = store.capacity().to_string();
        let auto_expand = config.auto_expand.to_string();
        log_event_with_fields(
            Event::StoreCreated,
            &[
                ("auto_expand", auto_expand.as_str()),
                ("capacity", capacity.as_str()),
                ("page_bits", page_bits.as_str()),
            ],
        );

        Ok(Box::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_store_from_config() {
        let config = StoreConfig {
            page_bits: 8,
            index_start: 10,
            ..StoreConfig::default()
        };
        let store = MemoryArrayStoreFactory.create(&config).unwrap();
        assert_eq!(store.capacity(), 256);
        assert_eq!(store.index_start(), 10);
    }

    #[test]
    fn test_propagates_config_error() {
        let config = StoreConfig {
            index_start: -1,
            ..StoreConfig::default()
        };
        let err = MemoryArrayStoreFactory.create(&config).err().unwrap();
        assert_eq!(err.code(), "STORE_INVALID_CONFIG");
    }
}
