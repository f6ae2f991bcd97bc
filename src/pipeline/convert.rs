//! Pandoc subprocess driver
//!
//! Both conversion steps go through [`run_converter`], which launches
//! the external converter with an explicit argument vector (never a
//! shell) and blocks until it exits. Invocation failures are typed:
//! a launch error usually means Pandoc is not installed, a non-zero
//! exit means Pandoc rejected the content or its environment.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use super::config::BuildConfig;

/// Converter binary, resolved through PATH.
pub const PANDOC_BIN: &str = "pandoc";

/// Intermediate markup format the source is normalized to before the
/// final render.
pub const INTERMEDIATE_FORMAT: &str = "markdown";

/// Errors from invoking the external converter. Both variants are
/// fatal for the run; conversion failures are assumed deterministic,
/// so nothing is retried.
#[derive(Debug, Error)]
pub enum PandocError {
    /// The converter process could not be launched at all.
    #[error("Failed to launch {bin}: {source}. Is Pandoc installed?")]
    Launch {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    /// The converter ran but reported failure.
    #[error("{bin} exited with {status}")]
    Exited { bin: String, status: ExitStatus },
}

/// Run a converter binary synchronously and map its outcome.
pub fn run_converter(bin: &str, args: &[String]) -> Result<(), PandocError> {
    let status = Command::new(bin)
        .args(args)
        .status()
        .map_err(|source| PandocError::Launch {
            bin: bin.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(PandocError::Exited {
            bin: bin.to_string(),
            status,
        })
    }
}

/// Argument vector for the normalization step: source format in,
/// intermediate markup out, written into the workspace.
pub fn intermediate_args(config: &BuildConfig, sanitized_input: &Path, workspace: &Path) -> Vec<String> {
    vec![
        format!("--from={}", config.from_format),
        sanitized_input.display().to_string(),
        "-t".to_string(),
        INTERMEDIATE_FORMAT.to_string(),
        "-o".to_string(),
        workspace.join(&config.intermediate_name).display().to_string(),
    ]
}

/// Convert the sanitized source to the intermediate markup format,
/// returning the path of the intermediate file inside the workspace.
pub fn to_intermediate(
    config: &BuildConfig,
    sanitized_input: &Path,
    workspace: &Path,
) -> Result<PathBuf, PandocError> {
    let args = intermediate_args(config, sanitized_input, workspace);
    run_converter(PANDOC_BIN, &args)?;
    Ok(workspace.join(&config.intermediate_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn config() -> BuildConfig {
        let cli = Cli::parse_from(["mwbook", "guide.mediawiki"]);
        BuildConfig::resolve(&cli, Path::new("/build"))
    }

    #[test]
    fn test_intermediate_args_shape() {
        let config = config();
        let args = intermediate_args(
            &config,
            Path::new("/tmp/ws/guide.mediawiki"),
            Path::new("/tmp/ws"),
        );
        assert_eq!(
            args,
            vec![
                "--from=mediawiki",
                "/tmp/ws/guide.mediawiki",
                "-t",
                "markdown",
                "-o",
                "/tmp/ws/guide.md",
            ]
        );
    }

    #[test]
    fn test_launch_error_for_missing_binary() {
        let err = run_converter("mwbook-no-such-binary", &[]).unwrap_err();
        assert!(matches!(err, PandocError::Launch { .. }));
        assert!(err.to_string().contains("Is Pandoc installed?"));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_exited_error() {
        let err = run_converter("false", &[]).unwrap_err();
        assert!(matches!(err, PandocError::Exited { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_is_ok() {
        assert!(run_converter("true", &[]).is_ok());
    }
}
