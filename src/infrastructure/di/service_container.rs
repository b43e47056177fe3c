//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DiscoveryService;
use crate::config::Settings;
use crate::infrastructure::traits::{AwsLoadBalancerApi, LoadBalancerApi};

/// Container holding the provider abstraction services are built on.
pub struct ServiceContainer {
    /// Load balancer API abstraction
    pub load_balancers: Arc<dyn LoadBalancerApi>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: &Settings) -> Self {
        let api = AwsLoadBalancerApi::new(settings.endpoint_url.clone());
        Self::with_deps(Arc::new(api))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(load_balancers: Arc<dyn LoadBalancerApi>) -> Self {
        Self { load_balancers }
    }

    pub fn discovery_service(&self) -> DiscoveryService {
        DiscoveryService::new(Arc::clone(&self.load_balancers))
    }
}
