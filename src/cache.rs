//! In-memory service catalog using moka
//!
//! Holds the service definitions pushed by the booking plugin so quotes can
//! reference a service by id. Entries expire after the configured TTL; the
//! plugin re-pushes a definition whenever it changes.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::pricing::models::ServiceDefinition;
use crate::pricing::{validate_definition, PriceError};

/// Catalog of priceable service definitions (service_id -> definition)
#[derive(Clone)]
pub struct ServiceCatalog {
    definitions: Cache<u64, Arc<ServiceDefinition>>,
}

impl ServiceCatalog {
    /// Create a catalog with the given capacity and time-to-live
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            definitions: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Validate and store a definition, replacing any previous one
    pub async fn insert(
        &self,
        definition: ServiceDefinition,
    ) -> Result<Arc<ServiceDefinition>, PriceError> {
        validate_definition(&definition)?;

        let definition = Arc::new(definition);
        self.definitions
            .insert(definition.service_id, definition.clone())
            .await;
        info!(
            "Catalog stored service {} ({} options)",
            definition.service_id,
            definition.options.len()
        );
        Ok(definition)
    }

    pub async fn get(&self, service_id: u64) -> Option<Arc<ServiceDefinition>> {
        self.definitions.get(&service_id).await
    }

    /// Evict a definition; returns whether one was present
    pub async fn remove(&self, service_id: u64) -> bool {
        let removed = self.definitions.remove(&service_id).await.is_some();
        if removed {
            info!("Catalog evicted service {}", service_id);
        }
        removed
    }

    /// Get catalog statistics for monitoring
    pub async fn stats(&self) -> CatalogStats {
        self.definitions.run_pending_tasks().await;
        CatalogStats {
            services_size: self.definitions.entry_count(),
        }
    }

    pub fn invalidate_all(&self) {
        self.definitions.invalidate_all();
        info!("Service catalog invalidated");
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new(1000, Duration::from_secs(60 * 60))
    }
}

/// Catalog statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub services_size: u64,
}
