//! Shared test doubles

#![allow(dead_code)]

use std::sync::Mutex;

use cloud_discovery::domain::LoadBalancerDescription;
use cloud_discovery::infrastructure::traits::{LoadBalancerApi, ProviderError};

/// Mock provider that records the regions it was asked about
pub struct MockLoadBalancerApi {
    descriptions: Vec<LoadBalancerDescription>,
    failure: Option<String>,
    regions: Mutex<Vec<String>>,
}

impl MockLoadBalancerApi {
    pub fn with_names(names: &[&str]) -> Self {
        Self::with_descriptions(
            names
                .iter()
                .map(|n| LoadBalancerDescription::named(*n))
                .collect(),
        )
    }

    pub fn with_descriptions(descriptions: Vec<LoadBalancerDescription>) -> Self {
        Self {
            descriptions,
            failure: None,
            regions: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            descriptions: Vec::new(),
            failure: Some(message.to_string()),
            regions: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_regions(&self) -> Vec<String> {
        self.regions.lock().unwrap().clone()
    }
}

impl LoadBalancerApi for MockLoadBalancerApi {
    fn describe_load_balancers(
        &self,
        region: &str,
    ) -> Result<Vec<LoadBalancerDescription>, ProviderError> {
        self.regions.lock().unwrap().push(region.to_string());
        match &self.failure {
            Some(message) => Err(ProviderError::request(message.clone())),
            None => Ok(self.descriptions.clone()),
        }
    }
}
