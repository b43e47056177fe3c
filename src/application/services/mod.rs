//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (LoadBalancerApi, Write)
//! but are themselves concrete structs, not traits.

mod discovery;
mod render;

pub use discovery::DiscoveryService;
pub use render::Renderer;
