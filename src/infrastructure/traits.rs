//! I/O boundary traits for testability
//!
//! The cloud provider API is abstracted here so discovery can be tested
//! with mock implementations.

use std::io;

use aws_config::retry::RetryConfig;
use aws_sdk_elasticloadbalancing::config::Region;
use aws_sdk_elasticloadbalancing::error::DisplayErrorContext;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::LoadBalancerDescription;

/// Failure talking to the provider API.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("cannot start async runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("{message}")]
    Request { message: String },
}

impl ProviderError {
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }
}

/// Load balancer inventory of a cloud provider.
pub trait LoadBalancerApi: Send + Sync {
    /// Describe the load balancers of one region.
    ///
    /// Issues a single request; only the first response page is returned.
    fn describe_load_balancers(
        &self,
        region: &str,
    ) -> Result<Vec<LoadBalancerDescription>, ProviderError>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// AWS classic Elastic Load Balancing API.
///
/// Credentials come from the SDK default provider chain. A fresh client is
/// built for every call.
#[derive(Debug, Default, Clone)]
pub struct AwsLoadBalancerApi {
    endpoint_url: Option<String>,
}

impl AwsLoadBalancerApi {
    pub fn new(endpoint_url: Option<String>) -> Self {
        Self { endpoint_url }
    }

    async fn describe(&self, region: &str) -> Result<Vec<LoadBalancerDescription>, ProviderError> {
        // Exactly one request per run: no SDK retries
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .retry_config(RetryConfig::disabled());
        if let Some(url) = &self.endpoint_url {
            debug!("describe: endpoint_url={}", url);
            loader = loader.endpoint_url(url.clone());
        }
        let sdk_config = loader.load().await;
        let client = aws_sdk_elasticloadbalancing::Client::new(&sdk_config);

        let resp = client
            .describe_load_balancers()
            .send()
            .await
            .map_err(|e| ProviderError::request(DisplayErrorContext(&e).to_string()))?;

        Ok(resp
            .load_balancer_descriptions()
            .iter()
            .map(|d| LoadBalancerDescription {
                name: d.load_balancer_name().map(str::to_string),
            })
            .collect())
    }
}

impl LoadBalancerApi for AwsLoadBalancerApi {
    #[instrument(skip(self))]
    fn describe_load_balancers(
        &self,
        region: &str,
    ) -> Result<Vec<LoadBalancerDescription>, ProviderError> {
        // The SDK is async; the request itself is the only thing we wait on.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderError::Runtime)?;
        runtime.block_on(self.describe(region))
    }
}
