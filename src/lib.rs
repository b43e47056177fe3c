//! cloud-discovery: list cloud resources and print them as JSON or through a template
//!
//! Layers, from the inside out:
//! - [`domain`]: resource list, discovery kinds, output formats
//! - [`application`]: discovery dispatch and output rendering
//! - [`infrastructure`]: provider API boundary and service wiring
//! - [`cli`]: argument parsing and command execution

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
