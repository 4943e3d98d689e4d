//! sbom-compliance: SBOM compliance scoring tool
//!
//! Evaluates normalized SBOM documents against NTIA, FSCT and custom
//! compliance frameworks.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use sbom_compliance::{
    cli,
    compliance::FrameworkKind,
    config::{AppConfig, discover_config_file, generate_example_config, load_or_default},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with framework info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nFrameworks:",
        "\n  ntia    NTIA minimum elements",
        "\n  fsct    Field completeness transparency",
        "\n  custom  Core data, format and governance checks",
        "\n\nInput Formats:",
        "\n  Normalized SBOM documents (JSON, YAML)",
        "\n\nOutput Formats:",
        "\n  detailed, json, basic"
    )
}

#[derive(Parser)]
#[command(name = "sbom-compliance")]
#[command(author = "Binarly.io")]
#[command(version, long_version = build_long_version())]
#[command(about = "SBOM compliance scoring tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All documents scored (and met --min-score, if given)
    1  A document scored below --min-score
    3  Error occurred

EXAMPLES:
    # Score against the default framework with a detailed table
    sbom-compliance score sbom.json

    # CI/CD gate on the NTIA minimum elements
    sbom-compliance score sbom.json --framework ntia -o basic --min-score 80

    # Export JSON for processing
    sbom-compliance score fleet/*.json -o json -O compliance.json

    # Show what a framework checks
    sbom-compliance frameworks --framework fsct")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Normalized SBOM documents to evaluate (.json, .yaml, .yml)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Compliance framework to evaluate against
    #[arg(short, long, env = "SBOM_COMPLIANCE_FRAMEWORK")]
    framework: Option<FrameworkKind>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if any document totals below this score (0-100)
    #[arg(long)]
    min_score: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate documents against a compliance framework
    Score(ScoreArgs),

    /// List the criteria a framework evaluates
    Frameworks {
        /// Only show this framework
        #[arg(short, long)]
        framework: Option<FrameworkKind>,

        /// Output format (json for machine-readable, anything else for text)
        #[arg(short, long, default_value = "detailed")]
        output: ReportFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sbom-compliance.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match cli.command {
        Commands::Score(args) => {
            let overrides = AppConfig::builder()
                .framework(args.framework.unwrap_or_default())
                .output_format(args.output.unwrap_or_default())
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .min_score(args.min_score)
                .quiet(cli.quiet)
                .build();
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }

            let exit_code = match cli::run_score(&args.files, &config) {
                Ok(code) => code,
                Err(e) => {
                    tracing::error!("{e:#}");
                    exit_codes::ERROR
                }
            };
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Frameworks { framework, output } => cli::run_frameworks(framework, output),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-compliance", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = sbom_compliance::config::generate_json_schema()
                .context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir()
                        .map(|p| p.join("sbom-compliance").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in sbom_compliance::config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".sbom-compliance.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
