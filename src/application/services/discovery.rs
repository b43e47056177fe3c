//! Discovery service
//!
//! Dispatches on the discovery type and turns provider descriptors into a
//! flat list of resource names.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{DiscoveryKind, ResourceList};
use crate::infrastructure::traits::LoadBalancerApi;

/// Service enumerating cloud resources of one kind.
pub struct DiscoveryService {
    load_balancers: Arc<dyn LoadBalancerApi>,
}

impl DiscoveryService {
    /// Create a new discovery service.
    pub fn new(load_balancers: Arc<dyn LoadBalancerApi>) -> Self {
        Self { load_balancers }
    }

    /// Run the discovery selected by `discovery` against `region`.
    ///
    /// Returns `Ok(None)` for an unsupported discovery type: that case is
    /// logged once and is not an error.
    #[instrument(skip(self))]
    pub fn discover(
        &self,
        discovery: &str,
        region: &str,
    ) -> ApplicationResult<Option<ResourceList>> {
        let kind = match discovery.parse::<DiscoveryKind>() {
            Ok(kind) => kind,
            Err(e) => {
                warn!("{}", e);
                return Ok(None);
            }
        };
        debug!("discover: kind={}", kind);

        match kind {
            DiscoveryKind::Elb => self.load_balancer_names(region).map(Some),
        }
    }

    /// Names of all load balancers in `region`, in provider order.
    ///
    /// Only the first response page is consulted.
    #[instrument(skip(self))]
    pub fn load_balancer_names(&self, region: &str) -> ApplicationResult<ResourceList> {
        let descriptions = self
            .load_balancers
            .describe_load_balancers(region)
            .map_err(|source| ApplicationError::Discovery {
                region: region.to_string(),
                source,
            })?;
        debug!("load_balancer_names: {} descriptors", descriptions.len());

        let names = descriptions
            .into_iter()
            .enumerate()
            .filter_map(|(idx, d)| {
                if d.name.is_none() {
                    warn!(
                        "load balancer descriptor #{} in {} has no name, skipping",
                        idx, region
                    );
                }
                d.name
            })
            .collect();

        Ok(names)
    }
}
