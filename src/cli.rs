use clap::{Args as ClapArgs, Parser, Subcommand};
use observes::application::dto::OutputFormat;
use observes::repository_insights::domain::ActivityState;
use std::path::PathBuf;

/// Inspect governance scan results and SBOM dependency trees
#[derive(Parser, Debug)]
#[command(name = "observes")]
#[command(version)]
#[command(about = "Inspect governance scan results and SBOM dependency trees", long_about = None)]
pub struct Args {
    /// Output format: json or markdown [default: markdown]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to observes.config.yml in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding imported scans and preferences [default: .observes]
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a scan result file and add it to the scan store
    Import {
        /// JSON file produced by the scanner
        file: PathBuf,

        /// Skip the upload warning
        #[arg(short, long)]
        yes: bool,
    },

    /// List, show or delete stored scans
    #[command(subcommand)]
    Scans(ScansCommand),

    /// Repositories of a scan with their activity state
    Repos {
        /// Scan id
        id: String,

        /// Only repositories in this state: active, stale or dormant
        #[arg(long)]
        state: Option<ActivityState>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Projects of a scan
    Projects {
        /// Scan id
        id: String,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Committers of a scan, most active first
    Committers {
        /// Scan id
        id: String,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Browse SBOMs and their dependency trees
    #[command(subcommand)]
    Sbom(SbomCommand),
}

#[derive(Subcommand, Debug)]
pub enum ScansCommand {
    /// One summary row per stored scan
    List,
    /// Summary, repository states and language breakdown of one scan
    Show {
        /// Scan id
        id: String,
    },
    /// Delete a stored scan
    Delete {
        /// Scan id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SbomCommand {
    /// List components that have SBOMs
    Components,
    /// List the SBOM versions of a component
    Versions {
        component: String,
    },
    /// List every component with its versions
    Catalog,
    /// Direct dependencies and dependency trees of one SBOM
    Deps {
        component: String,
        version: String,

        /// Resolve the tree below this direct dependency (bom-ref).
        /// Can be specified multiple times
        #[arg(long = "expand", value_name = "BOM_REF")]
        expand: Vec<String>,

        /// Resolve the trees of all direct dependencies
        #[arg(long, conflicts_with = "expand")]
        expand_all: bool,
    },
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct PagingArgs {
    /// Case-insensitive name filter
    #[arg(long)]
    pub filter: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Items per page (overrides the configured page size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_import() {
        let args = Args::try_parse_from(["observes", "import", "scan.json", "--yes"]).unwrap();
        match args.command {
            Command::Import { file, yes } => {
                assert_eq!(file, PathBuf::from("scan.json"));
                assert!(yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_repos_with_paging() {
        let args = Args::try_parse_from([
            "observes", "repos", "scan-1", "--state", "stale", "--filter", "api", "--page", "2",
            "--page-size", "5", "--format", "json",
        ])
        .unwrap();

        assert_eq!(args.format, Some(OutputFormat::Json));
        match args.command {
            Command::Repos { id, state, paging } => {
                assert_eq!(id, "scan-1");
                assert_eq!(state, Some(ActivityState::Stale));
                assert_eq!(paging.filter.as_deref(), Some("api"));
                assert_eq!(paging.page, 2);
                assert_eq!(paging.page_size, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_sbom_deps_with_expand() {
        let args = Args::try_parse_from([
            "observes", "sbom", "deps", "billing", "1.0.0", "--expand", "pkg:npm/a@1",
            "--expand", "pkg:npm/b@1",
        ])
        .unwrap();

        match args.command {
            Command::Sbom(SbomCommand::Deps {
                component,
                version,
                expand,
                expand_all,
            }) => {
                assert_eq!(component, "billing");
                assert_eq!(version, "1.0.0");
                assert_eq!(expand, vec!["pkg:npm/a@1", "pkg:npm/b@1"]);
                assert!(!expand_all);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_invalid_state_and_format() {
        assert!(Args::try_parse_from(["observes", "repos", "x", "--state", "old"]).is_err());
        assert!(Args::try_parse_from(["observes", "scans", "list", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_expand_all_conflicts_with_expand() {
        let result = Args::try_parse_from([
            "observes", "sbom", "deps", "a", "1", "--expand", "x", "--expand-all",
        ]);
        assert!(result.is_err());
    }
}
