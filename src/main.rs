//! fastapi-scaffold CLI entrypoint
//! Parses command-line arguments and dispatches to the generator.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use fastapi_scaffold::{
    Preset,
    application::{
        ApplicationError, ConfigOverrides, ConfigSource, ScaffoldRequest, ScaffoldUseCase,
        preview_project,
    },
    generation::Archetype,
    infrastructure::FileSystemOutputService,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::{Context, bail};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Exit code for rejected configurations, distinct from runtime failures
const INPUT_ERROR_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "fastapi-scaffold")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a FastAPI project and write it to disk
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Output directory for generated files (defaults to ./<server_name>)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Print generated files to stdout without writing anything
    Preview {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Only print this file (main.py, requirements.txt, Dockerfile, .gitignore)
        #[arg(long)]
        file: Option<String>,
    },
    /// List the built-in presets
    Presets,
}

/// Where the server configuration comes from
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Configuration file (JSON, YAML or TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Built-in preset: basic, crud or auth
    #[arg(long)]
    preset: Option<Preset>,
}

/// Values that replace the loaded configuration's fields
#[derive(clap::Args, Debug)]
pub struct OverrideArgs {
    /// Server name
    #[arg(long)]
    name: Option<String>,
    /// Server port
    #[arg(long)]
    port: Option<u16>,
    /// Force an archetype instead of classifying: basic, crud, auth or custom
    #[arg(long)]
    archetype: Option<Archetype>,
}

impl SourceArgs {
    fn to_source(&self) -> anyhow::Result<ConfigSource> {
        match (&self.config, self.preset) {
            (Some(path), _) => Ok(ConfigSource::File(path.clone())),
            (None, Some(preset)) => Ok(ConfigSource::Preset(preset)),
            (None, None) => bail!("Either --config or --preset is required"),
        }
    }
}

impl OverrideArgs {
    fn to_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            name: self.name.clone(),
            port: self.port,
            archetype: self.archetype,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging with default level INFO; stdout is reserved for previews
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            let input_error = err
                .downcast_ref::<ApplicationError>()
                .is_some_and(ApplicationError::is_input_error);
            if input_error {
                ExitCode::from(INPUT_ERROR_EXIT_CODE)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate {
            source,
            overrides,
            output_dir,
        } => run_generate(source, overrides, output_dir.clone()).await,
        Commands::Preview {
            source,
            overrides,
            file,
        } => run_preview(source, overrides, file.as_deref()),
        Commands::Presets => {
            run_presets();
            Ok(())
        }
    }
}

async fn run_generate(
    source: &SourceArgs,
    overrides: &OverrideArgs,
    output_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let request = ScaffoldRequest {
        source: source.to_source()?,
        overrides: overrides.to_overrides(),
        output_dir,
    };

    let use_case = ScaffoldUseCase::new(Arc::new(FileSystemOutputService::new()));
    let response = use_case
        .execute(request)
        .await
        .context("Failed to generate project")?;

    println!(
        "Generated {} files ({} archetype) in {}",
        response.artifacts_count,
        response.archetype,
        response.output_path.display()
    );
    Ok(())
}

fn run_preview(
    source: &SourceArgs,
    overrides: &OverrideArgs,
    file: Option<&str>,
) -> anyhow::Result<()> {
    let result = preview_project(&source.to_source()?, &overrides.to_overrides())
        .context("Failed to generate project")?;
    let artifacts = result.artifacts;

    match file {
        Some(name) => {
            let Some(artifact) = artifacts.iter().find(|a| a.name == name) else {
                let known: Vec<&str> = artifacts.iter().map(|a| a.name.as_str()).collect();
                bail!("Unknown file '{}'; expected one of: {}", name, known.join(", "));
            };
            print!("{}", artifact.content);
        }
        None => {
            for (index, artifact) in artifacts.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("==> {} ({}) <==", artifact.name, artifact.kind.language());
                print!("{}", artifact.content);
            }
        }
    }
    Ok(())
}

fn run_presets() {
    println!("Available presets:");
    for preset in Preset::all() {
        let config = preset.config();
        println!(
            "  {:<6} {} (port {}, {} endpoints) - {}",
            preset.as_str(),
            preset.display_name(),
            config.effective_port(),
            config.endpoints.len(),
            preset.description()
        );
    }
}
