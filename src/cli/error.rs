//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// True when the provider API call failed.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            CliError::Infra(InfraError::Application(ApplicationError::Discovery { .. }))
        )
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(e) => match e {
                    ApplicationError::Domain(DomainError::Template { .. }) => {
                        crate::exitcode::DATAERR
                    }
                    ApplicationError::Discovery { .. } => crate::exitcode::UNAVAILABLE,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                    ApplicationError::Render { .. } => crate::exitcode::SOFTWARE,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::ProviderError;

    #[test]
    fn test_template_error_maps_to_dataerr() {
        let err: CliError = ApplicationError::from(DomainError::Template {
            message: "unexpected EOF".into(),
        })
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn test_discovery_error_maps_to_unavailable() {
        let err: CliError = ApplicationError::Discovery {
            region: "eu-central-1".into(),
            source: ProviderError::request("boom"),
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::UNAVAILABLE);
        assert!(err.is_provider_failure());
    }

    #[test]
    fn test_config_error_maps_to_config() {
        let err: CliError = ApplicationError::Config {
            message: "bad".into(),
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
        assert!(!err.is_provider_failure());
    }

    #[test]
    fn test_io_error_maps_to_ioerr() {
        let err: CliError = InfraError::io(
            "flush",
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
        )
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
    }

    #[test]
    fn test_discovery_error_message_contains_region() {
        let err: CliError = ApplicationError::Discovery {
            region: "us-east-2".into(),
            source: ProviderError::request("access denied"),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("\"us-east-2\""), "got: {}", msg);
        assert!(msg.contains("access denied"), "got: {}", msg);
    }
}
