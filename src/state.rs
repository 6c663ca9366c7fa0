use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{config::AppConfig, store::Store};

#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Store::from_config(config))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }
}
