//! Implementation of the `tfreadme generate` command.
//!
//! Responsibility: resolve input paths and the module name from flags,
//! config, and the working directory, call the core readme service, and
//! route the result to stdout or a file. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use tfreadme_adapters::{AutoParser, LocalFilesystem, MarkdownRenderer};
use tfreadme_core::application::{ReadmeRequest, ReadmeService};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `tfreadme generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the variables and outputs paths
/// 2. Resolve the module name
/// 3. Generate via `ReadmeService`
/// 4. Print the markdown, or write it when `--output` is given
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Inputs
    let variables = resolve_path(args.variables, &config.inputs.variables);
    let outputs = resolve_path(args.outputs, &config.inputs.outputs);

    // 2. Title
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to read the current directory".into(),
        source: e,
    })?;
    let module_name =
        resolve_module_name(args.name.as_deref(), config.render.module_name.as_deref(), &cwd)?;

    debug!(
        module = %module_name,
        variables = %variables.display(),
        outputs = %outputs.display(),
        "Request resolved"
    );

    // 3. Service
    let service = ReadmeService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(AutoParser::new()),
        Box::new(MarkdownRenderer::new()),
    );
    let request = ReadmeRequest::new(module_name, variables, outputs);

    // 4. Destination
    match args.output {
        Some(destination) => {
            service
                .write(&request, &destination, args.force)
                .map_err(CliError::Core)?;
            info!(path = %destination.display(), "README generated");
            output.success(&format!("README written to {}", destination.display()))?;
        }
        None => {
            let markdown = service.generate(&request).map_err(CliError::Core)?;
            output.document(&markdown)?;
        }
    }

    Ok(())
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Flag (or its environment variable) first, config second.
fn resolve_path(flag: Option<PathBuf>, configured: &Path) -> PathBuf {
    flag.unwrap_or_else(|| configured.to_path_buf())
}

/// `--name`, then `render.module_name`, then the last component of `cwd`.
fn resolve_module_name(
    flag: Option<&str>,
    configured: Option<&str>,
    cwd: &Path,
) -> CliResult<String> {
    let explicit = flag
        .or(configured)
        .map(str::trim)
        .filter(|name| !name.is_empty());
    if let Some(name) = explicit {
        return Ok(name.to_owned());
    }

    cwd.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| CliError::ModuleNameUnavailable {
            path: cwd.to_path_buf(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
