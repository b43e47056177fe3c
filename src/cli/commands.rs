//! Command execution: resolve arguments, discover, render

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::Renderer;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::Settings;
use crate::domain::OutputFormat;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Fully resolved arguments of one discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub discovery: String,
    pub region: String,
    pub format: OutputFormat,
    pub query: String,
}

impl Invocation {
    /// Combine flags with settings that already carry flag overrides.
    pub fn resolve(cli: &Cli, settings: &Settings) -> Self {
        Self {
            discovery: cli.discovery.clone(),
            region: settings.aws_region.clone(),
            format: OutputFormat::from_flag(&settings.output),
            query: cli.query.clone(),
        }
    }
}

/// Flags override every configuration layer.
pub fn apply_cli_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(region) = &cli.aws_region {
        settings.aws_region = region.clone();
    }
    if let Some(out) = &cli.output {
        settings.output = out.clone();
    }
    if let Some(url) = &cli.endpoint_url {
        settings.endpoint_url = Some(url.clone());
    }
    settings
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        print_completions(shell);
        return Ok(());
    }

    let settings = apply_cli_overrides(Settings::load(cli.config.as_deref())?, cli);
    debug!("settings: {:?}", settings);

    if cli.print_config {
        let rendered = settings.to_toml()?;
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .map_err(|e| InfraError::io("write settings", e))?;
        return Ok(());
    }

    let invocation = Invocation::resolve(cli, &settings);
    let container = ServiceContainer::new(&settings);
    let mut stdout = io::stdout().lock();
    match run(&container, &invocation, &mut stdout) {
        Err(e) if e.is_provider_failure() && !cli.strict => {
            // Reported, but the run still exits 0 unless --strict
            output::error(&e);
            Ok(())
        }
        result => result,
    }
}

/// Discover and render one resource list into `out`.
///
/// Unsupported discovery types write nothing and succeed. Provider
/// failures are returned; `execute_command` decides the exit status.
#[instrument(skip(container, out))]
pub fn run(
    container: &ServiceContainer,
    invocation: &Invocation,
    out: &mut dyn Write,
) -> CliResult<()> {
    let Some(resources) = container
        .discovery_service()
        .discover(&invocation.discovery, &invocation.region)?
    else {
        return Ok(());
    };
    debug!("run: discovered {} resources", resources.len());

    if invocation.format == OutputFormat::Query && invocation.query.is_empty() {
        output::warning("output type query without --query renders nothing");
    }

    Renderer::new(invocation.format, invocation.query.as_str()).render(&resources, out)?;
    out.flush()
        .map_err(|e| InfraError::io("flush standard output", e))?;
    Ok(())
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
