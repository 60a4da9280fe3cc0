mod cli;
mod config;

use chrono::Utc;
use cli::{Args, Command, PagingArgs, SbomCommand, ScansCommand};
use config::Settings;
use observes::adapters::outbound::console::{StderrProgressReporter, StdinConfirmationPrompt};
use observes::adapters::outbound::filesystem::{
    FileSystemReader, JsonPreferenceFile, JsonScanStore,
};
use observes::adapters::outbound::network::GitHubSbomRepository;
use observes::application::dto::{
    DependencyQuery, ImportOutcome, ImportRequest, InventoryQuery,
};
use observes::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use observes::application::read_models::ReportView;
use observes::application::use_cases::{
    ExploreSbomUseCase, ImportScanUseCase, InventoryReportUseCase, ManageScansUseCase,
    SbomExplorer,
};
use observes::repository_insights::domain::ActivityState;
use observes::repository_insights::services::RepositoryClassifier;
use observes::shared::error::{ExitCode, ImportError};
use observes::shared::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

/// Rejected uploads exit with 1; everything else that fails exits with 3.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<ImportError>().is_some() {
        ExitCode::ImportRejected
    } else {
        ExitCode::ApplicationError
    }
}

async fn run(args: Args) -> Result<()> {
    // Load config: explicit --config path, or auto-discover in the current directory
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let discovered = config::discover_config(&std::env::current_dir()?)?;
            if discovered.is_some() {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            discovered
        }
    };
    let settings = config::resolve_settings(args.format, args.store_dir, config_file.as_ref())?;

    let report = match args.command {
        Command::Import { file, yes } => match import_scan(&settings, file, yes)? {
            Some(report) => report,
            None => return Ok(()),
        },
        Command::Scans(command) => manage_scans(&settings, command)?,
        Command::Repos { id, state, paging } => {
            let query = inventory_query(paging, state);
            ReportView::Repositories(inventory(&settings).repositories(&id, &query, Utc::now())?)
        }
        Command::Projects { id, paging } => {
            let query = inventory_query(paging, None);
            ReportView::Projects(inventory(&settings).projects(&id, &query, Utc::now())?)
        }
        Command::Committers { id, paging } => {
            let query = inventory_query(paging, None);
            ReportView::Committers(inventory(&settings).committers(&id, &query)?)
        }
        Command::Sbom(command) => explore_sbom(&settings, command).await?,
    };

    // Format and present
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// `None` when the user cancelled at the upload warning.
fn import_scan(settings: &Settings, file: PathBuf, yes: bool) -> Result<Option<ReportView>> {
    let use_case = ImportScanUseCase::new(
        FileSystemReader::new(),
        JsonScanStore::new(&settings.store_dir),
        JsonPreferenceFile::new(&settings.store_dir),
        StdinConfirmationPrompt::new(),
        StderrProgressReporter::new(),
    );

    match use_case.execute(ImportRequest::new(file, yes))? {
        ImportOutcome::Imported(receipt) => Ok(Some(ReportView::ImportReceipt(receipt.into()))),
        ImportOutcome::Cancelled => Ok(None),
    }
}

fn manage_scans(settings: &Settings, command: ScansCommand) -> Result<ReportView> {
    let use_case = ManageScansUseCase::new(
        JsonScanStore::new(&settings.store_dir),
        StderrProgressReporter::new(),
    );

    match command {
        ScansCommand::List => Ok(ReportView::ScanList(use_case.list()?)),
        ScansCommand::Show { id } => {
            let classifier = RepositoryClassifier::new(settings.thresholds);
            Ok(ReportView::ScanDetail(use_case.show(
                &id,
                &classifier,
                Utc::now(),
            )?))
        }
        ScansCommand::Delete { id } => {
            let remaining = use_case.delete(&id)?;
            Ok(ReportView::ScanDeleted {
                deleted: id,
                remaining,
            })
        }
    }
}

fn inventory(
    settings: &Settings,
) -> InventoryReportUseCase<JsonScanStore, StderrProgressReporter> {
    InventoryReportUseCase::new(
        JsonScanStore::new(&settings.store_dir),
        StderrProgressReporter::new(),
        RepositoryClassifier::new(settings.thresholds),
        settings.page_size,
    )
}

fn inventory_query(paging: PagingArgs, state: Option<ActivityState>) -> InventoryQuery {
    InventoryQuery {
        filter: paging.filter,
        state,
        page: paging.page,
        page_size: paging.page_size,
    }
}

async fn explore_sbom(settings: &Settings, command: SbomCommand) -> Result<ReportView> {
    let source = settings.sbom_source.clone().ok_or_else(|| {
        anyhow::anyhow!(
            "No SBOM source configured\n\n\
             💡 Hint: Add an sbom_source section with owner and repository to {}",
            config::CONFIG_FILENAME
        )
    })?;

    let use_case = ExploreSbomUseCase::new(
        GitHubSbomRepository::new(source)?,
        StderrProgressReporter::new(),
    );

    match command {
        SbomCommand::Components => Ok(ReportView::Components(use_case.components().await?)),
        SbomCommand::Versions { component } => {
            let versions = use_case.versions(&component).await?;
            Ok(ReportView::Versions {
                component,
                versions,
            })
        }
        SbomCommand::Catalog => Ok(ReportView::Catalog(use_case.catalog().await?)),
        SbomCommand::Deps {
            component,
            version,
            expand,
            expand_all,
        } => {
            let query = DependencyQuery {
                component,
                version,
                expand,
                expand_all,
            };
            let mut explorer = SbomExplorer::new();
            Ok(ReportView::Dependencies(
                use_case.dependencies(&query, &mut explorer).await?,
            ))
        }
    }
}
