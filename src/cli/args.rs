//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Discover cloud resources and print them as JSON or through a template
#[derive(Parser, Debug)]
#[command(name = "cloud-discovery")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Type of discovery. Only ELB supported right now
    #[arg(long, default_value = "")]
    pub discovery: String,

    /// AWS region [default: eu-central-1]
    #[arg(long = "aws-region", value_name = "REGION")]
    pub aws_region: Option<String>,

    /// Output type, one of (json|query) [default: json]
    #[arg(long)]
    pub output: Option<String>,

    /// Template query, used with --output query
    #[arg(long, default_value = "")]
    pub query: String,

    /// Override the AWS service endpoint
    #[arg(long, value_name = "URL", value_hint = ValueHint::Url)]
    pub endpoint_url: Option<String>,

    /// Additional config file, applied over the global one
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Exit non-zero (69) when the provider call fails instead of 0
    #[arg(long)]
    pub strict: bool,

    /// Print effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
