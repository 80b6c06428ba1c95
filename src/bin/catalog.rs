//! FES Catalog CLI
//!
//! Lists the record types of the object model, describes their features and
//! prints the catalog fingerprint a codec can pin against.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fes_model::catalog;
use fes_model::config::{ModelConfig, OutputFormat};
use fes_model::TypeInfo;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fes-catalog")]
#[command(about = "Inspect the FES 2.0 object model catalog")]
struct Cli {
    /// Additional config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the configured one)
    #[arg(short, long, global = true)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Pretty,
    Compact,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Compact => OutputFormat::Compact,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every record type with its XML name
    Types,

    /// Show the features of one type
    Describe {
        /// Rust or XML type name, e.g. SortPropertyType
        name: String,
    },

    /// Print the SHA256 fingerprint of the catalog
    Fingerprint {
        /// Only print the first 12 hex digits
        #[arg(long)]
        short: bool,
    },

    /// Show or write configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration
    Init {
        #[arg(default_value = "fes-model.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Row of the `types` listing
#[derive(Serialize)]
struct TypeRow {
    name: &'static str,
    xml_name: &'static str,
    namespace: &'static str,
    features: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ModelConfig::load_from(cli.config.as_deref()).context("loading configuration")?;
    config.notifications.install();
    let format = cli.format.map(OutputFormat::from).unwrap_or(config.catalog.output_format);

    match cli.command {
        Commands::Types => {
            let rows: Vec<TypeRow> = catalog::types()
                .iter()
                .map(|t| TypeRow {
                    name: t.name,
                    xml_name: t.xml_name,
                    namespace: t.namespace,
                    features: t.features.len(),
                })
                .collect();

            match format {
                OutputFormat::Text => {
                    for row in &rows {
                        println!("{:<34} {:<36} {}", row.name, row.xml_name, row.features);
                    }
                    println!();
                    println!("{} types", rows.len());
                }
                _ => print_json(&rows, format)?,
            }
            Ok(())
        }

        Commands::Describe { name } => {
            let info = catalog::lookup(&name)?;
            match format {
                OutputFormat::Text => print_type(info, config.catalog.include_defaults),
                _ => {
                    let mut value = serde_json::to_value(info)?;
                    if !config.catalog.include_defaults {
                        strip_defaults(&mut value);
                    }
                    print_json(&value, format)?;
                }
            }
            Ok(())
        }

        Commands::Fingerprint { short } => {
            let checksum = catalog::fingerprint()?;
            if short {
                println!("{}", checksum.short(12));
            } else {
                println!("{}", checksum);
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                print!("{}", config.to_toml()?);
                Ok(())
            }
            ConfigAction::Init { path, force } => {
                if path.exists() && !force {
                    anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
                }
                ModelConfig::default()
                    .save(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("✅ Wrote {}", path.display());
                Ok(())
            }
        },
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    let json = match format {
        OutputFormat::Compact => serde_json::to_string(value)?,
        _ => serde_json::to_string_pretty(value)?,
    };
    println!("{}", json);
    Ok(())
}

fn print_type(info: &TypeInfo, include_defaults: bool) {
    println!("{} ({})", info.name, info.xml_name);
    println!("  namespace: {}", info.namespace);
    if info.features.is_empty() {
        println!("  (no features)");
        return;
    }
    for f in info.features {
        let mut line = format!(
            "  {:<26} {:<28} {:<12} {:<28} {}",
            f.name(),
            f.xml_name,
            format!("{:?}", f.kind),
            f.datatype,
            f.cardinality()
        );
        if include_defaults {
            if let Some(default) = f.default {
                line.push_str(&format!("  default={}", default));
            }
        }
        println!("{}", line);
    }
}

fn strip_defaults(value: &mut serde_json::Value) {
    let features = value
        .get_mut("features")
        .and_then(serde_json::Value::as_array_mut);
    for feature in features.into_iter().flatten() {
        if let Some(obj) = feature.as_object_mut() {
            obj.remove("default");
        }
    }
}
