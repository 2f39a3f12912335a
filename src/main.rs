//! templet CLI entrypoint
//! Parses command-line arguments and dispatches to the emitter.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use templet::application::{
    Emitter, ListTemplatesUseCase, TemplateInfoUseCase, collect_substitutions,
};
use templet::core::EmitError;
use templet::infrastructure::TemplateRegistry;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "templet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory with a manifest.yml whose templates extend or override the bundled ones
    #[arg(long, global = true)]
    template_dir: Option<PathBuf>,

    /// Resolve relative destinations against this directory
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug)]
struct VariableArgs {
    /// Substitution in KEY=VALUE form (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    vars: Vec<String>,

    /// YAML or JSON file mapping variable names to values
    #[arg(long)]
    vars_file: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Render a template and write it to a file
    Emit {
        /// Template id, e.g. swarm/report-modal
        template: String,
        /// Destination file path
        destination: String,
        #[command(flatten)]
        variables: VariableArgs,
    },
    /// Render a template to stdout without writing anything
    Render {
        /// Template id
        template: String,
        #[command(flatten)]
        variables: VariableArgs,
    },
    /// List available templates
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a template's source, description and required variables
    Info {
        /// Template id
        template: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins when set; otherwise WARN so stdout carries only command output
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if cli.verbose => filter.add_directive(Level::DEBUG.into()),
        Ok(filter) => filter,
        Err(_) if cli.verbose => EnvFilter::new(Level::DEBUG.as_str()),
        Err(_) => EnvFilter::new(Level::WARN.as_str()),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Emission errors already carry their cause in the message
            let code = match err.downcast_ref::<EmitError>() {
                Some(emit_err) => {
                    eprintln!("error[{}]: {emit_err}", emit_err.kind());
                    emit_err.exit_code()
                }
                None => {
                    eprintln!("error: {err:#}");
                    1
                }
            };
            debug!(code, "Exiting with failure");
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let registry = load_registry(cli.template_dir.as_deref())?;

    match &cli.command {
        Commands::Emit {
            template,
            destination,
            variables,
        } => {
            let substitutions =
                collect_substitutions(variables.vars_file.as_deref(), &variables.vars)
                    .context("Failed to read variables")?;

            let mut emitter = Emitter::new(&registry);
            if let Some(root) = &cli.root {
                emitter = emitter.with_root(root);
            }

            let emission = emitter.emit(template, Path::new(destination), &substitutions)?;
            info!(template = %template, path = %emission.path.display(), "Emitted template");
            println!("{}", emission.path.display());
        }
        Commands::Render {
            template,
            variables,
        } => {
            let substitutions =
                collect_substitutions(variables.vars_file.as_deref(), &variables.vars)
                    .context("Failed to read variables")?;
            let text = Emitter::new(&registry).render(template, &substitutions)?;
            print!("{text}");
        }
        Commands::List { json } => {
            let use_case = ListTemplatesUseCase::new(&registry);
            if *json {
                println!("{}", use_case.execute_json()?);
            } else {
                print!("{}", use_case.execute());
            }
        }
        Commands::Info { template } => {
            print!("{}", TemplateInfoUseCase::new(&registry).execute(template)?);
        }
    }

    Ok(())
}

/// Build the read-only registry once for the whole process
fn load_registry(template_dir: Option<&Path>) -> anyhow::Result<TemplateRegistry> {
    let mut builder = TemplateRegistry::builder()
        .with_embedded()
        .context("Failed to load embedded templates")?;

    if let Some(dir) = template_dir {
        builder = builder
            .with_directory(dir)
            .with_context(|| format!("Failed to load templates from {}", dir.display()))?;
    }

    Ok(builder.build())
}
