//! Partforge CLI entry point
//!
//! `--list` prints the part registry as JSON; `--render` writes every
//! registered part to an OpenSCAD file under the output directory. With
//! no flag the usage text is printed.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::info;

use partforge_core::registry::{PartEntry, Registry};
use partforge_core::{BuildError, catalog};
use partforge_scad::{Document, DocumentError};

#[derive(Parser)]
#[command(name = "partforge", version, about = "Parametric phone stand part catalog")]
struct Cli {
    /// List all registered parts as JSON
    #[arg(long)]
    list: bool,

    /// Render all parts to OpenSCAD files
    #[arg(long)]
    render: bool,

    /// Output directory for rendered files
    #[arg(long, default_value = "build")]
    out: PathBuf,

    /// Abort on the first failing part instead of continuing
    #[arg(long)]
    fail_fast: bool,
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "partforge_cli=info,partforge_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if cli.list {
        let parts = catalog::list_parts();
        match serde_json::to_string_pretty(&parts) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize part list: {e}");
                ExitCode::FAILURE
            }
        }
    } else if cli.render {
        match render_all(catalog::global(), &cli.out, cli.fail_fast) {
            Ok(summary) => {
                info!(
                    rendered = summary.rendered,
                    failed = summary.failed,
                    "render pass complete"
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        }
    } else {
        let _ = Cli::command().print_help();
        println!();
        ExitCode::SUCCESS
    }
}

/// Outcome of a render pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RenderSummary {
    rendered: usize,
    failed: usize,
}

/// Render every registry entry to `<out>/<name>.scad`
///
/// The pass is best-effort: a failing part is reported on stderr with
/// its name and the remaining parts still render. With `fail_fast` the
/// first failure aborts the pass instead.
fn render_all(
    registry: &Registry,
    out: &Path,
    fail_fast: bool,
) -> Result<RenderSummary, RenderError> {
    std::fs::create_dir_all(out)
        .map_err(|e| RenderError::OutputDir(out.display().to_string(), e.to_string()))?;

    let mut summary = RenderSummary::default();
    for entry in registry.iter() {
        match render_part(entry, out) {
            Ok(path) => {
                summary.rendered += 1;
                println!("Rendered: {}", path.display());
            }
            Err(e) => {
                summary.failed += 1;
                eprintln!("Failed to render {}: {e}", entry.name);
                if fail_fast {
                    return Err(RenderError::Aborted(entry.name.clone()));
                }
            }
        }
    }
    Ok(summary)
}

/// Build one part and write its document
fn render_part(entry: &PartEntry, out: &Path) -> Result<PathBuf, RenderError> {
    let part = (entry.factory)();
    let solid = part.build()?;
    let path = out.join(format!("{}.scad", entry.name));
    Document::new(solid).write_to(&path)?;
    Ok(path)
}

/// Render-pass errors
#[derive(Debug, Clone, thiserror::Error)]
enum RenderError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("Failed to create {0}: {1}")]
    OutputDir(String, String),
    #[error("Aborted after {0} failed")]
    Aborted(String),
}
