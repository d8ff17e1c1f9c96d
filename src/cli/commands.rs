use crate::description::load_description;
use crate::generator::{generate_with_options, resolve_emit_options};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Command-line interface for wheelwright
///
/// Provides commands for generating C++ headers from wire-type descriptions
/// and for linting descriptions before generation.
#[derive(Parser)]
#[command(name = "wheelwright")]
#[command(about = "wheelwright CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for wheelwright
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a C++ header from a description
    Generate {
        /// Path to the description file (YAML or JSON)
        input: PathBuf,

        /// Namespace to wrap the generated declarations in
        #[arg(short, long, default_value = "")]
        namespace: String,

        /// Output file (default: standard output)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Emit options file (default: wheelwright.toml next to the input)
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// Lint a description
    ///
    /// Checks the description for issues the generator accepts but a C++
    /// compiler or reviewer will not:
    /// - Type and member name casing
    /// - Forward references
    /// - Empty structs
    /// - Unpackable enums
    Lint {
        /// Path to the description file (YAML or JSON)
        input: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The description cannot be loaded or parsed
/// - The emit options file cannot be loaded
/// - Generation fails (malformed description, invalid namespace)
/// - The output file cannot be written
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            input,
            namespace,
            out,
            options,
        } => {
            let description = load_description(input)?;
            let emit_options = resolve_emit_options(options.as_deref(), input)?;
            let rendered = generate_with_options(&description, namespace, &emit_options)?;
            info!(bytes = rendered.len(), "generation finished");
            match out {
                Some(path) => {
                    std::fs::write(path, &rendered)?;
                    println!("✅ Generated header → {path:?}");
                }
                None => {
                    std::io::stdout().write_all(rendered.as_bytes())?;
                }
            }
            Ok(())
        }
        Commands::Lint {
            input,
            fail_on_error,
            errors_only,
        } => {
            let issues = crate::linter::lint_description(input)?;

            if *errors_only {
                let errors: Vec<_> = issues
                    .iter()
                    .filter(|i| i.severity == crate::linter::LintSeverity::Error)
                    .cloned()
                    .collect();
                crate::linter::print_lint_issues(&errors);
                if *fail_on_error && !errors.is_empty() {
                    crate::linter::fail_if_errors(&errors);
                }
            } else {
                crate::linter::print_lint_issues(&issues);
                if *fail_on_error {
                    crate::linter::fail_if_errors(&issues);
                }
            }

            Ok(())
        }
    }
}
