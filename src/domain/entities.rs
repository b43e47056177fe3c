//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::UnsupportedDiscovery;

/// Category of cloud resource to enumerate.
///
/// Closed set: adding a provider means adding a variant and a dispatch arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryKind {
    /// Classic Elastic Load Balancers, selected by `ELB`
    Elb,
}

impl DiscoveryKind {
    /// Flag value selecting this discovery type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryKind::Elb => "ELB",
        }
    }
}

impl FromStr for DiscoveryKind {
    type Err = UnsupportedDiscovery;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ELB" => Ok(DiscoveryKind::Elb),
            other => Err(UnsupportedDiscovery(other.to_string())),
        }
    }
}

impl fmt::Display for DiscoveryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the resource list is written to the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `{"data": [...]}` envelope
    #[default]
    Json,
    /// User-supplied text template
    Query,
}

impl OutputFormat {
    /// Map the `--output` flag value to a format.
    ///
    /// Only `query` selects templating; anything else falls back to JSON.
    pub fn from_flag(value: &str) -> Self {
        match value {
            "query" => OutputFormat::Query,
            _ => OutputFormat::Json,
        }
    }
}

/// Provider descriptor of a single load balancer, reduced to the fields we read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadBalancerDescription {
    pub name: Option<String>,
}

impl LoadBalancerDescription {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Ordered resource names produced by one discovery call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ResourceList(Vec<String>);

impl ResourceList {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl FromIterator<String> for ResourceList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Single-field wrapper used for JSON output: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: Serialize> {
    pub data: &'a T,
}

impl<'a, T: Serialize> Envelope<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self { data }
    }
}
