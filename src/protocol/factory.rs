//! Responder factories

use crate::config::StoreConfig;
use crate::store::{ArrayStoreFactory, StoreResult};

use super::responder::{ArrayStoreResponder, StoreResponder};

/// Builds a responder for a freshly created store
pub trait StoreResponderFactory {
    /// Responder produced by this factory
    type Responder: StoreResponder;

    /// Create a responder serving a new store built from `config`
    fn create_responder(&self, config: &StoreConfig) -> StoreResult<Self::Responder>;
}

/// Wraps an [`ArrayStoreFactory`] and serves each store it creates
#[derive(Debug, Clone)]
pub struct BasicArrayStoreResponderFactory<F> {
    store_factory: F,
}

impl<F: ArrayStoreFactory> BasicArrayStoreResponderFactory<F> {
    /// Create a new factory over `store_factory`
    pub fn new(store_factory: F) -> Self {
        Self { store_factory }
    }
}

impl<F: ArrayStoreFactory> StoreResponderFactory for BasicArrayStoreResponderFactory<F> {
    type Responder = ArrayStoreResponder;

    fn create_responder(&self, config: &StoreConfig) -> StoreResult<ArrayStoreResponder> {
        let store = self.store_factory.create(config)?;
        Ok(ArrayStoreResponder::new(store))
    }
}
