use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use version_resolver::component::resolve;
use version_resolver::config::VersionConfig;
use version_resolver::logging::{self, DEFAULT_LOG_FILTER};
use version_resolver::version::error::CatalogError;
use version_resolver::version::{
    CatalogResponse, VersionCatalog, compare_versions, get_latest, latest_or_default, sort,
};

#[derive(Parser)]
#[command(name = "version-resolver")]
#[command(version, about = "Resolve deployment versions from catalog version strings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort versions, newest stable release first; invalid entries go last
    Sort {
        /// Oldest first instead
        #[arg(long)]
        ascending: bool,
        #[command(flatten)]
        source: VersionSource,
    },
    /// Print the latest valid version
    Latest {
        /// Printed when no valid version is available
        #[arg(long)]
        fallback: Option<String>,
        #[command(flatten)]
        source: VersionSource,
    },
    /// Compare two versions, printing -1, 0 or 1
    Compare { a: String, b: String },
    /// Print the version a component should install
    Resolve {
        /// JSON version configuration
        #[arg(long)]
        config: PathBuf,
        /// System-type identifier of the component
        system_type: String,
    },
}

/// Versions taken from a saved catalog response and/or the command line
#[derive(Args)]
struct VersionSource {
    /// Saved catalog response (`{"versionNameList": [...]}`)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Version strings
    versions: Vec<String>,
}

impl VersionCatalog for VersionSource {
    fn version_names(&self) -> Result<Vec<String>, CatalogError> {
        let mut names = match &self.catalog {
            Some(path) => CatalogResponse::load(path)?.version_name_list,
            None => Vec::new(),
        };
        names.extend(self.versions.iter().cloned());
        Ok(names)
    }
}

fn main() -> anyhow::Result<()> {
    logging::init(DEFAULT_LOG_FILTER).map_err(|e| anyhow::anyhow!(e))?;

    let cli = Cli::parse();

    match cli.command {
        Command::Sort { ascending, source } => {
            let names = source
                .version_names()
                .context("Failed to read versions")?;
            for version in sort(&names, !ascending) {
                println!("{version}");
            }
        }
        Command::Latest { fallback, source } => {
            let latest = match fallback {
                Some(fallback) => latest_or_default(&source, &fallback),
                None => {
                    let names = source
                        .version_names()
                        .context("Failed to read versions")?;
                    get_latest(&names).context("No valid version found")?
                }
            };
            println!("{latest}");
        }
        Command::Compare { a, b } => {
            let ordering = compare_versions(&a, &b)
                .with_context(|| format!("Cannot compare '{a}' and '{b}': invalid version"))?;
            println!("{}", ordering as i8);
        }
        Command::Resolve {
            config,
            system_type,
        } => {
            let config = VersionConfig::load(&config)
                .with_context(|| format!("Failed to load config {}", config.display()))?;
            println!("{}", resolve(&system_type, &config));
        }
    }

    Ok(())
}
